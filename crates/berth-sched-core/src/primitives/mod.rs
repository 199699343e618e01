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

pub mod affine;

pub use affine::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeMarker;

impl MarkerName for TimeMarker {
    const NAME_POINT: &'static str = "TimePoint";
    const NAME_DELTA: &'static str = "TimeDelta";
}

pub type TimePoint<T> = Point<T, TimeMarker>;
pub type TimeDelta<T> = Delta<T, TimeMarker>;

pub const MILLIS_PER_SECOND: i64 = 1_000;
pub const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
pub const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;

/// Millisecond resolution helpers. Every `TimeDelta<i64>` in this workspace
/// counts milliseconds.
impl TimeDelta<i64> {
    #[inline]
    pub const fn from_millis(ms: i64) -> Self {
        Delta::new(ms)
    }

    #[inline]
    pub const fn from_seconds(s: i64) -> Self {
        Delta::new(s * MILLIS_PER_SECOND)
    }

    #[inline]
    pub const fn from_minutes(m: i64) -> Self {
        Delta::new(m * MILLIS_PER_MINUTE)
    }

    #[inline]
    pub const fn from_hours(h: i64) -> Self {
        Delta::new(h * MILLIS_PER_HOUR)
    }

    #[inline]
    pub fn as_minutes_f64(self) -> f64 {
        self.value() as f64 / MILLIS_PER_MINUTE as f64
    }

    #[inline]
    pub fn as_hours_f64(self) -> f64 {
        self.value() as f64 / MILLIS_PER_HOUR as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_constructors_agree() {
        assert_eq!(TimeDelta::from_hours(1), TimeDelta::from_minutes(60));
        assert_eq!(TimeDelta::from_minutes(1), TimeDelta::from_seconds(60));
        assert_eq!(TimeDelta::from_seconds(2), TimeDelta::from_millis(2_000));
    }

    #[test]
    fn test_fractional_views() {
        assert_eq!(TimeDelta::from_millis(90_000).as_minutes_f64(), 1.5);
        assert_eq!(TimeDelta::from_minutes(-30).as_hours_f64(), -0.5);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(TimePoint::new(5i64).to_string(), "TimePoint(5)");
        assert_eq!(TimeDelta::from_millis(5).to_string(), "TimeDelta(5)");
    }
}
