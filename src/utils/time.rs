//! Time parsing and formatting utilities

use crate::error::{MediaKitError, MediaKitResult};

/// Parse an `HH:MM:SS` string into whole seconds.
///
/// Only the exact two-digit-field shape is accepted. Field values are not
/// range-checked, so `00:75:00` parses as 4500 seconds.
pub fn time_to_seconds(time_str: &str) -> MediaKitResult<u64> {
    let bytes = time_str.as_bytes();
    let well_formed = bytes.len() == 8
        && bytes[2] == b':'
        && bytes[5] == b':'
        && [0, 1, 3, 4, 6, 7].iter().all(|&i| bytes[i].is_ascii_digit());

    if !well_formed {
        return Err(MediaKitError::InvalidTimeFormat {
            time: time_str.to_string(),
        });
    }

    let field = |at: usize| u64::from((bytes[at] - b'0') * 10 + (bytes[at + 1] - b'0'));
    Ok(field(0) * 3600 + field(3) * 60 + field(6))
}

/// Format whole seconds as `HH:MM:SS`
pub fn seconds_to_time(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}
