//! Style tokens for the terminal report.

use colored::{Color, Colorize};

use crate::models::Category;

/// Named styles used by the [`Presenter`](super::Presenter).
///
/// A plain palette renders every token as unstyled text, which is what the
/// tests and `--no-color` use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn colored() -> Self {
        Self { enabled: true }
    }

    pub fn plain() -> Self {
        Self { enabled: false }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.enabled {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn heading(&self, text: &str) -> String {
        if self.enabled {
            text.cyan().bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn label(&self, text: &str) -> String {
        self.paint(text, Color::Cyan)
    }

    pub fn accent(&self, text: &str) -> String {
        self.paint(text, Color::Magenta)
    }

    pub fn value(&self, text: &str) -> String {
        self.paint(text, Color::Green)
    }

    pub fn warning(&self, text: &str) -> String {
        self.paint(text, Color::Yellow)
    }

    pub fn title(&self, text: &str) -> String {
        self.paint(text, Color::White)
    }

    pub fn dim(&self, text: &str) -> String {
        if self.enabled {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    /// Styles `text` in the color associated with `category`.
    pub fn category(&self, category: Category, text: &str) -> String {
        self.paint(text, category_color(category))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::colored()
    }
}

fn category_color(category: Category) -> Color {
    match category {
        Category::FullyOperational => Color::Green,
        Category::HttpsOnly => Color::Blue,
        Category::HttpOnly => Color::Yellow,
        Category::Redirects => Color::Magenta,
        Category::Errors | Category::Blocked => Color::Red,
        Category::NoResponse => Color::BrightYellow,
    }
}
