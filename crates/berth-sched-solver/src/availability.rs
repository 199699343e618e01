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

use berth_sched_core::prelude::TimePoint;
use berth_sched_model::{
    common::ts,
    prelude::{Berth, BerthIdentifier, BerthPool},
};
use serde::Serialize;

/// Whether a berth can take a vessel at a given instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BerthAvailability {
    pub berth_id: BerthIdentifier,
    pub name: String,
    pub available: bool,
    #[serde(with = "ts")]
    pub available_time: TimePoint<i64>,
}

impl BerthAvailability {
    #[inline]
    pub fn of(berth: &Berth, t: TimePoint<i64>) -> Self {
        Self {
            berth_id: berth.id(),
            name: berth.name().to_string(),
            available: berth.is_available_at(t),
            available_time: berth.available_time(),
        }
    }
}

/// Availability of every berth at `t`, in pool order.
pub fn berth_availability(pool: &BerthPool, t: TimePoint<i64>) -> Vec<BerthAvailability> {
    pool.iter().map(|b| BerthAvailability::of(b, t)).collect()
}

pub fn available_berths(pool: &BerthPool, t: TimePoint<i64>) -> Vec<BerthIdentifier> {
    pool.iter()
        .filter(|b| b.is_available_at(t))
        .map(|b| b.id())
        .collect()
}
