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

use berth_sched_core::prelude::{TimeDelta, TimePoint};
use berth_sched_model::prelude::{AssignmentRecord, BerthIdentifier, VesselIdentifier};
use serde::Serialize;

/// The records one pass produced, in the order the vessels were placed.
///
/// A read-only summary: the berths' own queues remain authoritative.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AssignmentPlan {
    records: Vec<AssignmentRecord>,
}

impl AssignmentPlan {
    #[inline]
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            records: Vec::with_capacity(cap),
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, record: AssignmentRecord) {
        self.records.push(record);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[inline]
    pub fn records(&self) -> &[AssignmentRecord] {
        &self.records
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &AssignmentRecord> {
        self.records.iter()
    }

    pub fn berth_of(&self, vessel: &VesselIdentifier) -> Option<BerthIdentifier> {
        self.records
            .iter()
            .find(|r| r.vessel_id() == vessel)
            .map(|r| r.berth_id())
    }

    /// Latest leave time over all placements.
    #[inline]
    pub fn makespan_end(&self) -> Option<TimePoint<i64>> {
        self.records.iter().map(|r| r.leave_time()).max()
    }

    #[inline]
    pub fn total_waiting_time(&self) -> TimeDelta<i64> {
        let ms = self
            .records
            .iter()
            .fold(0i64, |acc, r| acc.saturating_add(r.waiting_time().value()));
        TimeDelta::from_millis(ms)
    }
}

impl<'a> IntoIterator for &'a AssignmentPlan {
    type Item = &'a AssignmentRecord;
    type IntoIter = std::slice::Iter<'a, AssignmentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
