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
    vessel::{
        cargo::CargoType,
        err::{InvalidInputError, InvalidQuantityError},
    },
};
use berth_sched_core::prelude::{
    MILLIS_PER_HOUR, TimeDelta, TimePoint, parse_timestamp, round_to,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VesselIdentifierMarker;

impl IdentifierMarkerName for VesselIdentifierMarker {
    const NAME: &'static str = "VesselId";
}

pub type VesselIdentifier = Identifier<String, VesselIdentifierMarker>;

/// Operational cap on the recommended speed, also returned when departure
/// and predicted arrival coincide.
pub const MAX_RECOMMENDED_SPEED: f64 = 20.0;

/// Containers handled per minute of berth time.
pub const TEUS_PER_MINUTE: i64 = 100;

const MILLIS_PER_TEU: i64 = 60_000 / TEUS_PER_MINUTE;

/// Largest accepted cargo volume, about a week at the quay.
pub const MAX_TEUS: i64 = 1_000_000;

/// Raw vessel record as it arrives from a caller, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VesselRecord {
    #[serde(alias = "id")]
    pub vessel_id: String,
    pub scheduled_time: String,
    pub actual_time: String,
    pub teus: i64,
    pub cargo_type: String,
    pub departure_time: String,
    #[serde(default)]
    pub predicted_arrival: Option<String>,
    pub distance: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Vessel {
    id: VesselIdentifier,
    scheduled_time: TimePoint<i64>,
    actual_time: TimePoint<i64>,
    departure_time: TimePoint<i64>,
    predicted_arrival: Option<TimePoint<i64>>,
    teus: u64,
    cargo_type: CargoType,
    distance: f64,
    serve_time: TimeDelta<i64>,
    recommended_speed: f64,
}

impl Vessel {
    /// Builds a vessel from already parsed instants.
    ///
    /// Fails if `teus` lies outside `0..=MAX_TEUS` or `distance` is negative
    /// or not finite.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: VesselIdentifier,
        scheduled_time: TimePoint<i64>,
        actual_time: TimePoint<i64>,
        teus: i64,
        cargo_type: CargoType,
        departure_time: TimePoint<i64>,
        predicted_arrival: Option<TimePoint<i64>>,
        distance: f64,
    ) -> Result<Self, InvalidInputError> {
        if !(0..=MAX_TEUS).contains(&teus) {
            return Err(InvalidQuantityError::new("teus", teus as f64))?;
        }
        if !distance.is_finite() || distance < 0.0 {
            return Err(InvalidQuantityError::new("distance", distance))?;
        }

        let serve_time = TimeDelta::from_millis(teus * MILLIS_PER_TEU);

        let arrival = predicted_arrival.unwrap_or(scheduled_time);
        let recommended_speed = recommended_speed(distance, departure_time, arrival);

        Ok(Self {
            id,
            scheduled_time,
            actual_time,
            departure_time,
            predicted_arrival,
            teus: teus as u64,
            cargo_type,
            distance,
            serve_time,
            recommended_speed,
        })
    }

    /// Parses and validates a raw record.
    pub fn from_record(record: &VesselRecord) -> Result<Self, InvalidInputError> {
        let predicted_arrival = match record.predicted_arrival.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => Some(parse_timestamp(raw)?),
            _ => None,
        };

        Vessel::new(
            VesselIdentifier::new(record.vessel_id.clone()),
            parse_timestamp(&record.scheduled_time)?,
            parse_timestamp(&record.actual_time)?,
            record.teus,
            record.cargo_type.parse()?,
            parse_timestamp(&record.departure_time)?,
            predicted_arrival,
            record.distance,
        )
    }

    #[inline]
    pub fn id(&self) -> &VesselIdentifier {
        &self.id
    }

    #[inline]
    pub fn scheduled_time(&self) -> TimePoint<i64> {
        self.scheduled_time
    }

    #[inline]
    pub fn actual_time(&self) -> TimePoint<i64> {
        self.actual_time
    }

    #[inline]
    pub fn departure_time(&self) -> TimePoint<i64> {
        self.departure_time
    }

    #[inline]
    pub fn predicted_arrival(&self) -> Option<TimePoint<i64>> {
        self.predicted_arrival
    }

    /// The arrival the scheduler plans with: the prediction when one exists,
    /// the schedule otherwise.
    #[inline]
    pub fn effective_arrival(&self) -> TimePoint<i64> {
        self.predicted_arrival.unwrap_or(self.scheduled_time)
    }

    #[inline]
    pub fn teus(&self) -> u64 {
        self.teus
    }

    #[inline]
    pub fn cargo_type(&self) -> CargoType {
        self.cargo_type
    }

    #[inline]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Time at the quay, `teus / 100` minutes.
    #[inline]
    pub fn serve_time(&self) -> TimeDelta<i64> {
        self.serve_time
    }

    #[inline]
    pub fn serve_time_minutes(&self) -> f64 {
        self.serve_time.as_minutes_f64()
    }

    #[inline]
    pub fn recommended_speed(&self) -> f64 {
        self.recommended_speed
    }
}

impl TryFrom<VesselRecord> for Vessel {
    type Error = InvalidInputError;

    fn try_from(record: VesselRecord) -> Result<Self, Self::Error> {
        Vessel::from_record(&record)
    }
}

impl TryFrom<&VesselRecord> for Vessel {
    type Error = InvalidInputError;

    fn try_from(record: &VesselRecord) -> Result<Self, Self::Error> {
        Vessel::from_record(record)
    }
}

impl std::fmt::Display for Vessel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Vessel {}: {} TEU {}, arrival {}, serve {}",
            self.id,
            self.teus,
            self.cargo_type,
            self.effective_arrival(),
            self.serve_time
        )
    }
}

/// Speed needed to cover `distance` between departure and arrival, rounded to
/// two decimals and capped at [`MAX_RECOMMENDED_SPEED`]. The direction of the
/// interval is ignored.
pub fn recommended_speed(distance: f64, departure: TimePoint<i64>, arrival: TimePoint<i64>) -> f64 {
    let elapsed_ms = (arrival.value() as f64 - departure.value() as f64).abs();
    if elapsed_ms == 0.0 {
        return MAX_RECOMMENDED_SPEED;
    }

    let elapsed_hours = elapsed_ms / MILLIS_PER_HOUR as f64;
    round_to(distance / elapsed_hours, 2).min(MAX_RECOMMENDED_SPEED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use berth_sched_core::prelude::parse_timestamp;

    fn ts(s: &str) -> TimePoint<i64> {
        parse_timestamp(s).unwrap()
    }

    fn vid(s: &str) -> VesselIdentifier {
        VesselIdentifier::new(s.to_string())
    }

    fn vessel(teus: i64, departure: &str, predicted: Option<&str>, distance: f64) -> Vessel {
        Vessel::new(
            vid("V1"),
            ts("2024-01-01 08:00:00"),
            ts("2024-01-01 08:05:00"),
            teus,
            CargoType::Standard,
            ts(departure),
            predicted.map(ts),
            distance,
        )
        .unwrap()
    }

    fn record() -> VesselRecord {
        VesselRecord {
            vessel_id: "MSC-01".to_string(),
            scheduled_time: "2024-01-01 08:00:00".to_string(),
            actual_time: "2024-01-01 08:10:00".to_string(),
            teus: 250,
            cargo_type: "Reefer".to_string(),
            departure_time: "2024-01-01 02:00:00".to_string(),
            predicted_arrival: Some("2024-01-01 09:00:00".to_string()),
            distance: 70.0,
        }
    }

    #[test]
    fn test_serve_time_is_teus_over_hundred_minutes() {
        let v = vessel(100, "2024-01-01 00:00:00", None, 10.0);
        assert_eq!(v.serve_time(), TimeDelta::from_minutes(1));
        assert_eq!(v.serve_time_minutes(), 1.0);

        let v = vessel(150, "2024-01-01 00:00:00", None, 10.0);
        assert_eq!(v.serve_time(), TimeDelta::from_seconds(90));
        assert_eq!(v.serve_time_minutes(), 1.5);

        let v = vessel(0, "2024-01-01 00:00:00", None, 10.0);
        assert_eq!(v.serve_time(), TimeDelta::from_millis(0));
    }

    #[test]
    fn test_speed_is_max_when_departure_equals_arrival() {
        let v = vessel(
            100,
            "2024-01-01 09:00:00",
            Some("2024-01-01 09:00:00"),
            500.0,
        );
        assert_eq!(v.recommended_speed(), MAX_RECOMMENDED_SPEED);
    }

    #[test]
    fn test_speed_is_clamped_to_max() {
        // 1000 km over 10 h is 100, capped at 20.
        let v = vessel(
            100,
            "2024-01-01 00:00:00",
            Some("2024-01-01 10:00:00"),
            1000.0,
        );
        assert_eq!(v.recommended_speed(), 20.0);
    }

    #[test]
    fn test_speed_is_rounded_to_two_decimals() {
        // 20 km over 3 h.
        let v = vessel(
            100,
            "2024-01-01 00:00:00",
            Some("2024-01-01 03:00:00"),
            20.0,
        );
        assert_eq!(v.recommended_speed(), 6.67);

        // 50 km over 3 h is 16.666.., rounds to 16.67.
        let v = vessel(
            100,
            "2024-01-01 00:00:00",
            Some("2024-01-01 03:00:00"),
            50.0,
        );
        assert_eq!(v.recommended_speed(), 16.67);
    }

    #[test]
    fn test_speed_ignores_direction_of_interval() {
        let forward = vessel(
            100,
            "2024-01-01 00:00:00",
            Some("2024-01-01 04:00:00"),
            40.0,
        );
        let backward = vessel(
            100,
            "2024-01-01 04:00:00",
            Some("2024-01-01 00:00:00"),
            40.0,
        );
        assert_eq!(forward.recommended_speed(), 10.0);
        assert_eq!(backward.recommended_speed(), 10.0);
    }

    #[test]
    fn test_speed_uses_schedule_without_prediction() {
        // Scheduled at 08:00, departed 04:00: 4 h for 48 km.
        let v = vessel(100, "2024-01-01 04:00:00", None, 48.0);
        assert_eq!(v.effective_arrival(), v.scheduled_time());
        assert_eq!(v.recommended_speed(), 12.0);
    }

    #[test]
    fn test_effective_arrival_prefers_prediction() {
        let v = vessel(
            100,
            "2024-01-01 00:00:00",
            Some("2024-01-01 09:30:00"),
            10.0,
        );
        assert_eq!(v.effective_arrival(), ts("2024-01-01 09:30:00"));
        assert_eq!(v.predicted_arrival(), Some(ts("2024-01-01 09:30:00")));
    }

    #[test]
    fn test_rejects_negative_teus_and_distance() {
        let base = |teus: i64, distance: f64| {
            Vessel::new(
                vid("X"),
                ts("2024-01-01 00:00:00"),
                ts("2024-01-01 00:00:00"),
                teus,
                CargoType::Standard,
                ts("2024-01-01 00:00:00"),
                None,
                distance,
            )
        };

        match base(-1, 1.0).unwrap_err() {
            InvalidInputError::Quantity(e) => assert_eq!(e.field(), "teus"),
            other => panic!("unexpected error {other:?}"),
        }
        match base(1, -0.5).unwrap_err() {
            InvalidInputError::Quantity(e) => assert_eq!(e.field(), "distance"),
            other => panic!("unexpected error {other:?}"),
        }
        assert!(base(1, f64::NAN).is_err());
        assert!(base(1, f64::INFINITY).is_err());
        assert!(base(i64::MAX, 1.0).is_err());
    }

    #[test]
    fn test_teus_bound_is_inclusive() {
        let make = |teus: i64| {
            Vessel::new(
                vid("BIG"),
                ts("2024-01-01 00:00:00"),
                ts("2024-01-01 00:00:00"),
                teus,
                CargoType::Standard,
                ts("2024-01-01 00:00:00"),
                None,
                1.0,
            )
        };

        let v = make(MAX_TEUS).unwrap();
        assert_eq!(v.serve_time(), TimeDelta::from_minutes(MAX_TEUS / TEUS_PER_MINUTE));

        match make(MAX_TEUS + 1).unwrap_err() {
            InvalidInputError::Quantity(e) => {
                assert_eq!(e.field(), "teus");
                assert_eq!(e.value(), (MAX_TEUS + 1) as f64);
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert!(make(i64::MAX / 600).is_err());
    }

    #[test]
    fn test_zero_distance_gives_zero_speed() {
        // Only a zero elapsed time yields the cap; otherwise 0 km needs no speed.
        let v = vessel(
            100,
            "2024-01-01 00:00:00",
            Some("2024-01-01 04:00:00"),
            0.0,
        );
        assert_eq!(v.recommended_speed(), 0.0);
        assert_eq!(
            recommended_speed(0.0, ts("2024-01-01 04:00:00"), ts("2024-01-01 04:00:00")),
            MAX_RECOMMENDED_SPEED
        );
    }

    #[test]
    fn test_from_record_parses_all_fields() {
        let v = Vessel::try_from(record()).unwrap();
        assert_eq!(v.id().value(), "MSC-01");
        assert_eq!(v.teus(), 250);
        assert_eq!(v.cargo_type(), CargoType::Reefer);
        assert_eq!(v.serve_time(), TimeDelta::from_seconds(150));
        assert_eq!(v.actual_time(), ts("2024-01-01 08:10:00"));
        // 70 km over 7 h.
        assert_eq!(v.recommended_speed(), 10.0);
    }

    #[test]
    fn test_from_record_treats_blank_prediction_as_absent() {
        let mut r = record();
        r.predicted_arrival = Some("   ".to_string());
        let v = Vessel::from_record(&r).unwrap();
        assert_eq!(v.predicted_arrival(), None);
        assert_eq!(v.effective_arrival(), ts("2024-01-01 08:00:00"));
    }

    #[test]
    fn test_from_record_rejects_bad_timestamp_and_cargo() {
        let mut r = record();
        r.departure_time = "last tuesday".to_string();
        assert!(matches!(
            Vessel::from_record(&r),
            Err(InvalidInputError::Timestamp(_))
        ));

        let mut r = record();
        r.cargo_type = "Livestock".to_string();
        assert!(matches!(
            Vessel::from_record(&r),
            Err(InvalidInputError::CargoType(_))
        ));
    }

    #[test]
    fn test_record_deserializes_with_id_alias() {
        let json = r#"{
            "id": "A",
            "scheduled_time": "2024-01-01 08:00:00",
            "actual_time": "2024-01-01 08:00:00",
            "teus": 100,
            "cargo_type": "Standard",
            "departure_time": "2024-01-01 06:00:00",
            "distance": 20.0
        }"#;
        let r: VesselRecord = serde_json::from_str(json).unwrap();
        assert_eq!(r.vessel_id, "A");
        assert_eq!(r.predicted_arrival, None);
    }
}
