//! Process-wide setup performed before a run starts.

mod logger;

pub use logger::init_logger_with;
