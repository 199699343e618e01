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

use crate::{
    common::{Identifier, IdentifierMarkerName},
    terminal::rec::AssignmentRecord,
    vessel::Vessel,
};
use berth_sched_core::prelude::{LATEST_TIME, SENTINEL_EPOCH, TimePoint};
use tracing::{trace, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BerthIdentifierMarker;

impl IdentifierMarkerName for BerthIdentifierMarker {
    const NAME: &'static str = "BerthId";
}

pub type BerthIdentifier = Identifier<usize, BerthIdentifierMarker>;

/// Default length of the "next up" preview.
pub const DEFAULT_PREVIEW_LEN: usize = 5;

/// A quay position serving one vessel at a time.
///
/// The berth keeps every assignment it received in insertion order, and the
/// instant it frees up again. That instant only moves forward.
#[derive(Debug, Clone, PartialEq)]
pub struct Berth {
    id: BerthIdentifier,
    name: String,
    available_time: TimePoint<i64>,
    assignments: Vec<AssignmentRecord>,
}

impl Berth {
    /// A berth that is free from [`SENTINEL_EPOCH`] on.
    #[inline]
    pub fn new(id: BerthIdentifier, name: impl Into<String>) -> Self {
        Self::available_from(id, name, SENTINEL_EPOCH)
    }

    /// A berth that is occupied until `available_time`.
    #[inline]
    pub fn available_from(
        id: BerthIdentifier,
        name: impl Into<String>,
        available_time: TimePoint<i64>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            available_time,
            assignments: Vec::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> BerthIdentifier {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn available_time(&self) -> TimePoint<i64> {
        self.available_time
    }

    #[inline]
    pub fn assignments(&self) -> &[AssignmentRecord] {
        &self.assignments
    }

    #[inline]
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    /// Queues `vessel` behind whatever this berth already serves.
    ///
    /// Service starts at the later of the vessel's effective arrival and the
    /// berth's available time, and occupies the berth for the vessel's serve
    /// time. A leave time past [`LATEST_TIME`] saturates there.
    pub fn assign_vessel(&mut self, vessel: &Vessel) -> &AssignmentRecord {
        let serve_start = std::cmp::max(vessel.effective_arrival(), self.available_time);
        let leave_time = serve_start
            .checked_add(vessel.serve_time())
            .unwrap_or_else(|| {
                warn!(
                    berth = %self.id,
                    vessel = %vessel.id(),
                    "Leave time out of range, saturating"
                );
                LATEST_TIME
            });

        trace!(
            berth = %self.id,
            vessel = %vessel.id(),
            serve_start = serve_start.value(),
            leave_time = leave_time.value(),
            "Assigned vessel to berth"
        );

        self.available_time = leave_time;
        self.assignments
            .push(AssignmentRecord::new(self.id, vessel, serve_start, leave_time));
        &self.assignments[self.assignments.len() - 1]
    }

    /// The first `n` assignments in the order they were made.
    #[inline]
    pub fn next_assignments(&self, n: usize) -> &[AssignmentRecord] {
        &self.assignments[..n.min(self.assignments.len())]
    }

    #[inline]
    pub fn is_available_at(&self, t: TimePoint<i64>) -> bool {
        t >= self.available_time
    }
}

impl std::fmt::Display for Berth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} '{}': {} assignments, available at {}",
            self.id,
            self.name,
            self.assignments.len(),
            self.available_time
        )
    }
}
