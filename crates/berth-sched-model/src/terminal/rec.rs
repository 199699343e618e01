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
    common::ts,
    terminal::berth::BerthIdentifier,
    vessel::{CargoType, Vessel, VesselIdentifier},
};
use berth_sched_core::prelude::{TimeDelta, TimePoint, format_timestamp};
use serde::Serialize;

/// Snapshot of one vessel placed on one berth.
///
/// Produced by [`Berth::assign_vessel`](crate::terminal::berth::Berth::assign_vessel)
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignmentRecord {
    berth_id: BerthIdentifier,
    vessel_id: VesselIdentifier,
    #[serde(with = "ts")]
    scheduled_arrival: TimePoint<i64>,
    #[serde(with = "ts::option")]
    predicted_arrival: Option<TimePoint<i64>>,
    #[serde(with = "ts")]
    serve_start: TimePoint<i64>,
    #[serde(with = "ts")]
    leave_time: TimePoint<i64>,
    cargo_type: CargoType,
    recommended_speed: f64,
}

impl AssignmentRecord {
    #[inline]
    pub(crate) fn new(
        berth_id: BerthIdentifier,
        vessel: &Vessel,
        serve_start: TimePoint<i64>,
        leave_time: TimePoint<i64>,
    ) -> Self {
        Self {
            berth_id,
            vessel_id: vessel.id().clone(),
            scheduled_arrival: vessel.scheduled_time(),
            predicted_arrival: vessel.predicted_arrival(),
            serve_start,
            leave_time,
            cargo_type: vessel.cargo_type(),
            recommended_speed: vessel.recommended_speed(),
        }
    }

    #[inline]
    pub fn berth_id(&self) -> BerthIdentifier {
        self.berth_id
    }

    #[inline]
    pub fn vessel_id(&self) -> &VesselIdentifier {
        &self.vessel_id
    }

    #[inline]
    pub fn scheduled_arrival(&self) -> TimePoint<i64> {
        self.scheduled_arrival
    }

    #[inline]
    pub fn predicted_arrival(&self) -> Option<TimePoint<i64>> {
        self.predicted_arrival
    }

    #[inline]
    pub fn serve_start(&self) -> TimePoint<i64> {
        self.serve_start
    }

    #[inline]
    pub fn leave_time(&self) -> TimePoint<i64> {
        self.leave_time
    }

    #[inline]
    pub fn cargo_type(&self) -> CargoType {
        self.cargo_type
    }

    #[inline]
    pub fn recommended_speed(&self) -> f64 {
        self.recommended_speed
    }

    #[inline]
    pub fn occupancy(&self) -> TimeDelta<i64> {
        self.leave_time
            .checked_since(self.serve_start)
            .unwrap_or(TimeDelta::from_millis(i64::MAX))
    }

    /// How long the vessel waits at anchor past its planned arrival.
    #[inline]
    pub fn waiting_time(&self) -> TimeDelta<i64> {
        self.serve_start
            .checked_since(self.predicted_arrival.unwrap_or(self.scheduled_arrival))
            .unwrap_or(TimeDelta::from_millis(i64::MAX))
    }
}

impl std::fmt::Display for AssignmentRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} on {}: {} -> {} ({}, speed {})",
            self.vessel_id,
            self.berth_id,
            format_timestamp(self.serve_start),
            format_timestamp(self.leave_time),
            self.cargo_type,
            self.recommended_speed
        )
    }
}
