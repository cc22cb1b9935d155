//! Conversion between "HH:MM" wall-clock strings and minutes since midnight.
//!
//! Ads store their availability window as plain integers so the store can
//! compare and sort them; the API speaks the human-readable form.

use super::CodecError;

pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Parses an "HH:MM" string into minutes since midnight.
///
/// Both parts must be non-empty runs of ASCII digits, the hour in 0..=23 and
/// the minute in 0..=59. One-digit hours ("8:00") are accepted.
pub fn to_minutes(text: &str) -> Result<u32, CodecError> {
    let invalid = || CodecError::InvalidTime(text.to_string());

    let (hours, minutes) = text.split_once(':').ok_or_else(invalid)?;
    let hours = parse_component(hours).ok_or_else(invalid)?;
    let minutes = parse_component(minutes).ok_or_else(invalid)?;

    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }

    Ok(hours * 60 + minutes)
}

/// Formats minutes since midnight as a zero-padded "HH:MM" string.
///
/// Values past the end of the day are not wrapped: 1500 formats as "25:00".
pub fn to_time_string(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

// `u32::from_str` accepts a leading '+', which is not a valid clock digit.
fn parse_component(part: &str) -> Option<u32> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}
