pub mod formatter;
pub mod source;

pub use formatter::TimeFormatter;
pub use source::{SystemTimeSource, TimeSource};
