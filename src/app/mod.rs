//! Console output that frames a run: banner, header and completion summary.

pub mod banner;

pub use banner::{render_banner, render_completion, render_run_header};
