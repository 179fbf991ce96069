use chrono::Local;

/// Capability for reading the current time as a displayable value.
/// Implementations own whatever clock access they need; consumers only
/// ever see the rendered string.
pub trait TimeSource: Send + Sync {
    fn get_time(&self) -> String;
}

/// Production time source backed by the system clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn get_time(&self) -> String {
        Local::now().format("%H:%M:%S").to_string()
    }
}
