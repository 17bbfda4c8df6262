// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Time label formatting.
//!
//! Segment boundaries are shown as zero-padded `HH:MM:SS`. Each field is at
//! least two digits wide; the hours field is never clamped, so a video of
//! 100 hours or more simply gets a wider hours field (`100:00:00`).

/// Format a whole number of seconds as `HH:MM:SS`.
pub fn format_hms(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Format a duration for display, dropping the hours field when it is zero.
pub fn format_duration_short(total_seconds: u64) -> String {
    if total_seconds < 3600 {
        format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
    } else {
        format_hms(total_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_hms_pads_every_field() {
        assert_eq!(format_hms(0), "00:00:00");
        assert_eq!(format_hms(255), "00:04:15");
        assert_eq!(format_hms(259), "00:04:19");
        assert_eq!(format_hms(3661), "01:01:01");
    }

    #[test]
    fn test_format_hms_hours_not_clamped() {
        assert_eq!(format_hms(99 * 3600 + 59 * 60 + 59), "99:59:59");
        assert_eq!(format_hms(100 * 3600), "100:00:00");
    }

    #[test]
    fn test_format_duration_short() {
        assert_eq!(format_duration_short(259), "4:19");
        assert_eq!(format_duration_short(181), "3:01");
        assert_eq!(format_duration_short(7322), "02:02:02");
    }
}
