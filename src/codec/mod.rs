pub mod time;
pub mod weekdays;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("invalid time of day: {0:?} (expected HH:MM)")]
    InvalidTime(String),

    #[error("invalid weekday code: {0} (expected 0-6)")]
    InvalidWeekday(u8),

    #[error("weekday code {0} listed more than once")]
    DuplicateWeekday(u8),
}
