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

//! # Berth Scheduler Solver
//!
//! Turns a batch of vessels into berth assignments.
//!
//! Vessels are first put into service order by
//! [`prioritize`](scheduling::priority::prioritize), then placed one by one on
//! the berth that frees up earliest. The pool is borrowed for the pass and
//! keeps the resulting queues; the returned [`AssignmentPlan`] lists the same
//! records in placement order.

pub mod availability;
pub mod scheduling;

pub use availability::{BerthAvailability, available_berths, berth_availability};
pub use scheduling::{
    greedy::GreedyScheduler,
    plan::AssignmentPlan,
    priority::{prioritize, priority_cmp},
    traits::Scheduler,
};

use berth_sched_model::prelude::{BerthPool, Vessel};

/// Runs one greedy pass of `vessels` over `pool`.
#[inline]
pub fn assign_vessels_to_berths(vessels: &[Vessel], pool: &mut BerthPool) -> AssignmentPlan {
    GreedyScheduler.assign_all(vessels, pool)
}

pub mod prelude {
    pub use crate::assign_vessels_to_berths;
    pub use crate::availability::{BerthAvailability, available_berths, berth_availability};
    pub use crate::scheduling::{
        greedy::GreedyScheduler,
        plan::AssignmentPlan,
        priority::{prioritize, priority_cmp},
        traits::Scheduler,
    };
}
