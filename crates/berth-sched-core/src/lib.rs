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

//! # Berth Scheduler Core
//!
//! Low-level building blocks shared by the scheduler crates:
//!
//! * **`primitives`**: marker-typed affine `Point`/`Delta` pairs, with the
//!   `TimePoint`/`TimeDelta` aliases used for every instant and duration.
//! * **`time`**: conversion between `TimePoint<i64>` and boundary strings.
//! * **`math`**: small numeric helpers.

pub mod math;
pub mod primitives;
pub mod time;

pub mod prelude {
    pub use crate::math::round_to;
    pub use crate::primitives::{
        Delta, MILLIS_PER_HOUR, MILLIS_PER_MINUTE, MILLIS_PER_SECOND, MarkerName, Point,
        TimeDelta, TimeMarker, TimePoint,
    };
    pub use crate::time::{
        LATEST_TIME, SENTINEL_EPOCH, TIMESTAMP_FORMAT, TimestampParseError, format_timestamp,
        parse_timestamp,
    };
}
