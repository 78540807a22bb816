use crate::shared::time::TIMESTAMP_FORMAT;

pub struct Config {
    /// chrono format string both `started_at` and `ended_at` are parsed with.
    pub timestamp_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timestamp_format: TIMESTAMP_FORMAT.into(),
        }
    }
}
