//! Weekday codes travel through the store as one comma-joined text column.

use std::collections::HashSet;
use std::fmt::Display;

use super::CodecError;

pub const MAX_WEEKDAY: u8 = 6;

/// Joins day codes with commas, keeping their order. `[]` encodes to `""`.
pub fn encode<T: Display>(days: &[T]) -> String {
    days.iter()
        .map(|day| day.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Splits a stored weekday column back into its tokens.
///
/// Tokens are returned as text and not re-parsed. An empty column yields a
/// single empty token, mirroring a plain split.
pub fn decode(text: &str) -> Vec<String> {
    text.split(',').map(str::to_owned).collect()
}

/// Checks that every code is a weekday (0-6) and appears only once.
pub fn validate(days: &[u8]) -> Result<(), CodecError> {
    let mut seen = HashSet::with_capacity(days.len());
    for &day in days {
        if day > MAX_WEEKDAY {
            return Err(CodecError::InvalidWeekday(day));
        }
        if !seen.insert(day) {
            return Err(CodecError::DuplicateWeekday(day));
        }
    }
    Ok(())
}
