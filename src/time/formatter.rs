use crate::time::source::TimeSource;

/// Composes a borrowed [`TimeSource`] into the display string shown to
/// clients. The formatter never owns the source; the caller decides how
/// long both live.
pub struct TimeFormatter<'a> {
    time_source: &'a dyn TimeSource,
}

impl<'a> TimeFormatter<'a> {
    pub fn new(time_source: &'a dyn TimeSource) -> Self {
        Self { time_source }
    }

    /// Returns `"Time: <value>"` with the source's current value.
    pub fn get_time(&self) -> String {
        format!("Time: {}", self.time_source.get_time())
    }
}
