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

use crate::scheduling::{plan::AssignmentPlan, priority::prioritize, traits::Scheduler};
use berth_sched_model::prelude::{Berth, BerthPool, Vessel};
use tracing::debug;

/// Places vessels one at a time, in priority order, on whichever berth frees
/// up first.
///
/// A vessel's placement is never revisited. Ties between equally early
/// berths go to the one that comes first in the pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyScheduler;

impl GreedyScheduler {
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

/// Index of the berth with the smallest available time, first one wins ties.
#[inline]
fn earliest_available(berths: &[Berth]) -> usize {
    let mut best = 0;
    for (i, b) in berths.iter().enumerate().skip(1) {
        if b.available_time() < berths[best].available_time() {
            best = i;
        }
    }
    best
}

impl Scheduler for GreedyScheduler {
    fn name(&self) -> &str {
        "GreedyScheduler"
    }

    #[tracing::instrument(
        level = "debug",
        name = "Greedy Assignment",
        skip_all,
        fields(vessels = vessels.len(), berths = pool.len())
    )]
    fn assign_all(&self, vessels: &[Vessel], pool: &mut BerthPool) -> AssignmentPlan {
        let mut plan = AssignmentPlan::with_capacity(vessels.len());
        let berths = pool.berths_mut();

        for vessel in prioritize(vessels) {
            let idx = earliest_available(berths);
            let record = berths[idx].assign_vessel(vessel).clone();
            plan.push(record);
        }

        debug!(
            placed = plan.len(),
            waiting_minutes = plan.total_waiting_time().as_minutes_f64(),
            "Greedy pass finished"
        );
        plan
    }
}
