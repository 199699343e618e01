// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Wall-clock timestamps.
//!
//! Inside the scheduler every instant is a [`TimePoint<i64>`] counting
//! milliseconds since the Unix epoch on a naive UTC clock. Text only appears at
//! the boundary, where timestamps are written as `YYYY-MM-DD HH:mm:ss`.

use crate::primitives::{MILLIS_PER_SECOND, TimePoint};
use chrono::{DateTime, NaiveDateTime};

/// Canonical boundary format.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const ACCEPTED_FORMATS: [&str; 6] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// `1990-01-01 00:00:00`, the instant a fresh berth becomes available.
pub const SENTINEL_EPOCH: TimePoint<i64> = TimePoint::new(631_152_000 * MILLIS_PER_SECOND);

/// Last representable instant. Leave times that would pass it saturate here.
pub const LATEST_TIME: TimePoint<i64> = TimePoint::new(i64::MAX);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TimestampParseError {
    input: String,
}

impl TimestampParseError {
    #[inline]
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    #[inline]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl std::fmt::Display for TimestampParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Invalid timestamp '{}', expected YYYY-MM-DD HH:mm:ss",
            self.input
        )
    }
}

impl std::error::Error for TimestampParseError {}

#[inline]
pub fn from_naive(dt: NaiveDateTime) -> TimePoint<i64> {
    TimePoint::new(dt.and_utc().timestamp_millis())
}

#[inline]
pub fn to_naive(t: TimePoint<i64>) -> Option<NaiveDateTime> {
    DateTime::from_timestamp_millis(t.value()).map(|dt| dt.naive_utc())
}

/// Parses a boundary timestamp.
///
/// Accepts the canonical `YYYY-MM-DD HH:mm:ss`, the ISO `T` separator, an
/// optional fractional second, minute precision and a trailing `Z`.
pub fn parse_timestamp(input: &str) -> Result<TimePoint<i64>, TimestampParseError> {
    let trimmed = input.trim();
    let body = trimmed.strip_suffix('Z').unwrap_or(trimmed);

    ACCEPTED_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(body, fmt).ok())
        .map(from_naive)
        .ok_or_else(|| TimestampParseError::new(input))
}

/// Formats `t` as `YYYY-MM-DD HH:mm:ss`, dropping sub-second precision.
///
/// Instants outside chrono's range fall back to the raw millisecond count.
pub fn format_timestamp(t: TimePoint<i64>) -> String {
    match to_naive(t) {
        Some(dt) => dt.format(TIMESTAMP_FORMAT).to_string(),
        None => t.value().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::TimeDelta;

    #[test]
    fn test_sentinel_epoch_is_1990() {
        assert_eq!(format_timestamp(SENTINEL_EPOCH), "1990-01-01 00:00:00");
        assert_eq!(
            parse_timestamp("1990-01-01 00:00:00").unwrap(),
            SENTINEL_EPOCH
        );
    }

    #[test]
    fn test_parse_canonical_and_iso_forms_agree() {
        let canonical = parse_timestamp("2024-03-05 09:10:11").unwrap();
        assert_eq!(parse_timestamp("2024-03-05T09:10:11").unwrap(), canonical);
        assert_eq!(parse_timestamp("2024-03-05T09:10:11Z").unwrap(), canonical);
        assert_eq!(parse_timestamp(" 2024-03-05 09:10:11 ").unwrap(), canonical);
    }

    #[test]
    fn test_parse_fraction_and_minute_precision() {
        let base = parse_timestamp("2024-03-05 09:10:00").unwrap();
        assert_eq!(parse_timestamp("2024-03-05T09:10").unwrap(), base);
        assert_eq!(
            parse_timestamp("2024-03-05 09:10:00.250").unwrap(),
            base + TimeDelta::from_millis(250)
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "yesterday", "2024-13-01 00:00:00", "2024-03-05", "09:00:00"] {
            let err = parse_timestamp(bad).unwrap_err();
            assert_eq!(err.input(), bad);
        }
    }

    #[test]
    fn test_format_truncates_milliseconds() {
        let t = parse_timestamp("2024-03-05 09:10:11.999").unwrap();
        assert_eq!(format_timestamp(t), "2024-03-05 09:10:11");
    }

    #[test]
    fn test_minute_arithmetic_crosses_midnight() {
        let t = parse_timestamp("2024-12-31 23:59:00").unwrap() + TimeDelta::from_minutes(2);
        assert_eq!(format_timestamp(t), "2025-01-01 00:01:00");
    }
}
