// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Fixed-length time segments.
//!
//! A video of `D` seconds is cut into `ceil(D / L)` windows of `L` seconds.
//! The windows are contiguous and non-overlapping, start at zero and end at
//! `D`; only the last one may be shorter than `L`.

use crate::error::{AnnotateError, Result};
use crate::util::timecode::format_hms;
use serde::{Deserialize, Serialize};

/// Segment length used by the annotation guidelines.
pub const DEFAULT_SEGMENT_LENGTH: u64 = 15;

/// One time window of a video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub ordinal: usize,
    pub start_seconds: u64,
    pub end_seconds: u64,
    pub start_label: String,
    pub end_label: String,
}

impl Segment {
    fn new(ordinal: usize, start_seconds: u64, end_seconds: u64) -> Self {
        Self {
            ordinal,
            start_seconds,
            end_seconds,
            start_label: format_hms(start_seconds),
            end_label: format_hms(end_seconds),
        }
    }

    /// Length of the window in seconds.
    pub fn len_seconds(&self) -> u64 {
        self.end_seconds - self.start_seconds
    }
}

/// Partition `[0, duration_seconds)` into windows of `segment_length` seconds.
///
/// Returns an empty list for a zero duration. Fails only when
/// `segment_length` is zero.
pub fn generate_segments(duration_seconds: u64, segment_length: u64) -> Result<Vec<Segment>> {
    if segment_length == 0 {
        return Err(AnnotateError::InvalidSegmentLength);
    }

    let count = duration_seconds.div_ceil(segment_length);
    let segments = (0..count)
        .map(|i| {
            // i < ceil(D / L), so start < D and cannot overflow.
            let start = i * segment_length;
            let end = start.saturating_add(segment_length).min(duration_seconds);
            Segment::new(i as usize, start, end)
        })
        .collect();

    Ok(segments)
}

/// Convert a raw duration (as read from a catalog file) into whole seconds.
///
/// Negative, non-finite and fractional values are rejected.
pub fn checked_duration(raw_seconds: f64) -> Result<u64> {
    if !raw_seconds.is_finite() {
        return Err(AnnotateError::InvalidDuration(format!(
            "{} is not a finite number of seconds",
            raw_seconds
        )));
    }
    if raw_seconds < 0.0 {
        return Err(AnnotateError::InvalidDuration(format!(
            "{} is negative",
            raw_seconds
        )));
    }
    if raw_seconds.fract() != 0.0 {
        return Err(AnnotateError::InvalidDuration(format!(
            "{} is not a whole number of seconds",
            raw_seconds
        )));
    }
    // `u64::MAX as f64` rounds up to 2^64, which is itself out of range.
    if raw_seconds >= u64::MAX as f64 {
        return Err(AnnotateError::InvalidDuration(format!(
            "{} is too large",
            raw_seconds
        )));
    }
    Ok(raw_seconds as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_partition(segments: &[Segment], duration: u64, length: u64) {
        if duration == 0 {
            assert!(segments.is_empty());
            return;
        }
        assert_eq!(segments[0].start_seconds, 0);
        assert_eq!(segments.last().unwrap().end_seconds, duration);
        for pair in segments.windows(2) {
            assert_eq!(pair[0].end_seconds, pair[1].start_seconds);
            assert_eq!(pair[0].len_seconds(), length);
        }
        for (i, segment) in segments.iter().enumerate() {
            assert_eq!(segment.ordinal, i);
            assert!(segment.len_seconds() > 0);
            assert!(segment.len_seconds() <= length);
        }
        let total: u64 = segments.iter().map(Segment::len_seconds).sum();
        assert_eq!(total, duration);
    }

    #[test]
    fn test_marriage_story_duration() {
        let segments = generate_segments(259, 15).unwrap();
        assert_eq!(segments.len(), 18);

        let last = segments.last().unwrap();
        assert_eq!((last.start_seconds, last.end_seconds), (255, 259));
        assert_eq!(last.start_label, "00:04:15");
        assert_eq!(last.end_label, "00:04:19");
    }

    #[test]
    fn test_two_broke_girls_duration() {
        let segments = generate_segments(181, 15).unwrap();
        assert_eq!(segments.len(), 13);

        let last = segments.last().unwrap();
        assert_eq!((last.start_seconds, last.end_seconds), (180, 181));
        assert_eq!(last.len_seconds(), 1);
    }

    #[test]
    fn test_zero_duration_is_empty() {
        for length in [1, 15, 60] {
            assert!(generate_segments(0, length).unwrap().is_empty());
        }
    }

    #[test]
    fn test_length_longer_than_duration() {
        let segments = generate_segments(7, 15).unwrap();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].start_label, "00:00:00");
        assert_eq!(segments[0].end_label, "00:00:07");
    }

    #[test]
    fn test_exact_multiple_has_no_short_tail() {
        let segments = generate_segments(180, 15).unwrap();
        assert_eq!(segments.len(), 12);
        assert_eq!(segments.last().unwrap().len_seconds(), 15);
    }

    #[test]
    fn test_partition_invariant_over_range() {
        for duration in 0..200 {
            for length in [1, 2, 7, 15, 60, 500] {
                let segments = generate_segments(duration, length).unwrap();
                assert_partition(&segments, duration, length);
            }
        }
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(
            generate_segments(259, 15).unwrap(),
            generate_segments(259, 15).unwrap()
        );
    }

    #[test]
    fn test_zero_length_rejected() {
        assert!(matches!(
            generate_segments(259, 0),
            Err(AnnotateError::InvalidSegmentLength)
        ));
    }

    #[test]
    fn test_segments_near_u64_max() {
        let half = u64::MAX / 2 + 1;
        let segments = generate_segments(u64::MAX, half).unwrap();
        assert_eq!(segments.len(), 2);
        assert_eq!((segments[0].start_seconds, segments[0].end_seconds), (0, half));
        assert_eq!(
            (segments[1].start_seconds, segments[1].end_seconds),
            (half, u64::MAX)
        );
        assert_eq!(segments[1].len_seconds(), u64::MAX - half);

        let whole = generate_segments(u64::MAX, u64::MAX).unwrap();
        assert_eq!(whole.len(), 1);
        assert_eq!(whole[0].end_seconds, u64::MAX);
    }

    #[test]
    fn test_checked_duration_upper_bound() {
        assert!(matches!(
            checked_duration(u64::MAX as f64),
            Err(AnnotateError::InvalidDuration(_))
        ));
        assert!(matches!(checked_duration(1e20), Err(AnnotateError::InvalidDuration(_))));
        assert_eq!(checked_duration(9_007_199_254_740_992.0).unwrap(), 1 << 53);
    }

    #[test]
    fn test_checked_duration() {
        assert_eq!(checked_duration(259.0).unwrap(), 259);
        assert_eq!(checked_duration(0.0).unwrap(), 0);
        assert!(matches!(checked_duration(-1.0), Err(AnnotateError::InvalidDuration(_))));
        assert!(matches!(checked_duration(f64::NAN), Err(AnnotateError::InvalidDuration(_))));
        assert!(matches!(
            checked_duration(f64::INFINITY),
            Err(AnnotateError::InvalidDuration(_))
        ));
        assert!(matches!(checked_duration(12.5), Err(AnnotateError::InvalidDuration(_))));
    }
}
