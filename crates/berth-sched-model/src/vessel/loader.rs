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
    config::TerminalConfig,
    vessel::{
        err::{InvalidRecordError, VesselLoaderError},
        vsl::{Vessel, VesselRecord},
    },
};
use berth_sched_core::prelude::{MILLIS_PER_MINUTE, TimeDelta, format_timestamp, parse_timestamp};
use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};
use tracing::{debug, warn};

/// Reads vessel records from JSON or CSV and validates them into [`Vessel`]s.
///
/// JSON input is an array of [`VesselRecord`] objects. CSV input carries a
/// header row with the same field names; the `predicted_arrival` column may be
/// missing or blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VesselLoader {
    arrival_offset: Option<TimeDelta<i64>>,
    skip_invalid: bool,
}

impl VesselLoader {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loader settings taken from a terminal configuration.
    ///
    /// An offset too large to express in milliseconds disables derivation;
    /// [`TerminalConfig::validate`] rejects such values up front.
    pub fn from_config(config: &TerminalConfig) -> Self {
        let loader = Self::new();
        if !config.derive_missing_arrival {
            return loader;
        }

        let minutes = config.default_arrival_offset_minutes;
        match minutes.checked_mul(MILLIS_PER_MINUTE) {
            Some(ms) => loader.arrival_offset(TimeDelta::from_millis(ms)),
            None => {
                warn!(minutes, "Arrival offset out of range, not deriving arrivals");
                loader
            }
        }
    }

    /// Records without a predicted arrival get `scheduled_time + offset`.
    #[inline]
    pub fn arrival_offset(mut self, offset: TimeDelta<i64>) -> Self {
        self.arrival_offset = Some(offset);
        self
    }

    /// Drop invalid records with a warning instead of failing the load.
    #[inline]
    pub fn skip_invalid(mut self, yes: bool) -> Self {
        self.skip_invalid = yes;
        self
    }

    pub fn from_records<I>(&self, records: I) -> Result<Vec<Vessel>, VesselLoaderError>
    where
        I: IntoIterator<Item = VesselRecord>,
    {
        let mut vessels = Vec::new();
        let mut skipped = 0usize;

        for (i, record) in records.into_iter().enumerate() {
            let record = self.derive_arrival(record);
            match Vessel::from_record(&record) {
                Ok(v) => vessels.push(v),
                Err(e) if self.skip_invalid => {
                    warn!(row = i + 1, vessel = %record.vessel_id, error = %e, "Skipping invalid vessel record");
                    skipped += 1;
                }
                Err(e) => return Err(InvalidRecordError::new(i + 1, record.vessel_id, e))?,
            }
        }

        debug!(loaded = vessels.len(), skipped, "Loaded vessel records");
        Ok(vessels)
    }

    pub fn from_json_reader<R: Read>(&self, r: R) -> Result<Vec<Vessel>, VesselLoaderError> {
        let records: Vec<VesselRecord> = serde_json::from_reader(BufReader::new(r))?;
        self.from_records(records)
    }

    #[inline]
    pub fn from_json_str(&self, s: &str) -> Result<Vec<Vessel>, VesselLoaderError> {
        self.from_json_reader(s.as_bytes())
    }

    pub fn from_csv_reader<R: Read>(&self, r: R) -> Result<Vec<Vessel>, VesselLoaderError> {
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(r);
        let records = rdr
            .deserialize::<VesselRecord>()
            .collect::<Result<Vec<_>, _>>()?;
        self.from_records(records)
    }

    #[inline]
    pub fn from_csv_str(&self, s: &str) -> Result<Vec<Vessel>, VesselLoaderError> {
        self.from_csv_reader(s.as_bytes())
    }

    /// Dispatches on the file extension, `.json` or `.csv`.
    pub fn from_path(&self, path: impl AsRef<Path>) -> Result<Vec<Vessel>, VesselLoaderError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("json") => self.from_json_reader(File::open(path)?),
            Some("csv") => self.from_csv_reader(File::open(path)?),
            _ => Err(VesselLoaderError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    fn derive_arrival(&self, mut record: VesselRecord) -> VesselRecord {
        let Some(offset) = self.arrival_offset else {
            return record;
        };
        let missing = record
            .predicted_arrival
            .as_deref()
            .is_none_or(|s| s.trim().is_empty());
        if !missing {
            return record;
        }

        // An unparsable schedule is left for validation to report.
        if let Ok(scheduled) = parse_timestamp(&record.scheduled_time)
            && let Some(predicted) = scheduled.checked_add(offset)
        {
            record.predicted_arrival = Some(format_timestamp(predicted));
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vessel::{cargo::CargoType, err::InvalidInputError};
    use berth_sched_core::prelude::TimePoint;

    fn ts(s: &str) -> TimePoint<i64> {
        parse_timestamp(s).unwrap()
    }

    const JSON: &str = r#"[
        {
            "vessel_id": "V1",
            "scheduled_time": "2024-01-01 08:00:00",
            "actual_time": "2024-01-01 08:00:00",
            "teus": 100,
            "cargo_type": "Standard",
            "departure_time": "2024-01-01 04:00:00",
            "predicted_arrival": "2024-01-01 09:00:00",
            "distance": 50.0
        },
        {
            "vessel_id": "V2",
            "scheduled_time": "2024-01-01 10:00:00",
            "actual_time": "2024-01-01 10:00:00",
            "teus": 300,
            "cargo_type": "Reefer",
            "departure_time": "2024-01-01 05:00:00",
            "distance": 55.0
        }
    ]"#;

    const CSV: &str = "\
vessel_id,scheduled_time,actual_time,teus,cargo_type,departure_time,predicted_arrival,distance
V1,2024-01-01 08:00:00,2024-01-01 08:00:00,100,Standard,2024-01-01 04:00:00,2024-01-01 09:00:00,50
V2,2024-01-01 10:00:00,2024-01-01 10:00:00,300,reefer,2024-01-01 05:00:00,,55
";

    #[test]
    fn test_json_keeps_missing_prediction_by_default() {
        let vessels = VesselLoader::new().from_json_str(JSON).unwrap();
        assert_eq!(vessels.len(), 2);
        assert_eq!(vessels[0].predicted_arrival(), Some(ts("2024-01-01 09:00:00")));
        assert_eq!(vessels[1].predicted_arrival(), None);
        assert_eq!(vessels[1].cargo_type(), CargoType::Reefer);
    }

    #[test]
    fn test_arrival_offset_fills_missing_prediction_only() {
        let vessels = VesselLoader::new()
            .arrival_offset(TimeDelta::from_hours(1))
            .from_json_str(JSON)
            .unwrap();
        // Present predictions are untouched.
        assert_eq!(vessels[0].predicted_arrival(), Some(ts("2024-01-01 09:00:00")));
        assert_eq!(vessels[1].predicted_arrival(), Some(ts("2024-01-01 11:00:00")));
        // 55 km from 05:00 to 11:00.
        assert_eq!(vessels[1].recommended_speed(), 9.17);
    }

    #[test]
    fn test_csv_and_json_agree() {
        let from_csv = VesselLoader::new().from_csv_str(CSV).unwrap();
        let from_json = VesselLoader::new().from_json_str(JSON).unwrap();
        assert_eq!(from_csv, from_json);
    }

    #[test]
    fn test_csv_without_prediction_column() {
        let csv = "\
vessel_id,scheduled_time,actual_time,teus,cargo_type,departure_time,distance
A,2024-02-01 12:00:00,2024-02-01 12:00:00,200,Standard,2024-02-01 10:00:00,30
";
        let vessels = VesselLoader::new()
            .arrival_offset(TimeDelta::from_hours(1))
            .from_csv_str(csv)
            .unwrap();
        assert_eq!(vessels[0].predicted_arrival(), Some(ts("2024-02-01 13:00:00")));
        assert_eq!(vessels[0].recommended_speed(), 10.0);
    }

    #[test]
    fn test_invalid_record_fails_with_row() {
        let csv = "\
vessel_id,scheduled_time,actual_time,teus,cargo_type,departure_time,predicted_arrival,distance
OK,2024-01-01 08:00:00,2024-01-01 08:00:00,100,Standard,2024-01-01 04:00:00,,50
BAD,2024-01-01 08:00:00,2024-01-01 08:00:00,-5,Standard,2024-01-01 04:00:00,,50
";
        match VesselLoader::new().from_csv_str(csv).unwrap_err() {
            VesselLoaderError::InvalidRecord(e) => {
                assert_eq!(e.row(), 2);
                assert_eq!(e.vessel_id(), "BAD");
                assert!(matches!(e.reason(), InvalidInputError::Quantity(_)));
            }
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn test_skip_invalid_drops_bad_rows() {
        let csv = "\
vessel_id,scheduled_time,actual_time,teus,cargo_type,departure_time,predicted_arrival,distance
OK,2024-01-01 08:00:00,2024-01-01 08:00:00,100,Standard,2024-01-01 04:00:00,,50
BAD,not a time,2024-01-01 08:00:00,100,Standard,2024-01-01 04:00:00,,50
";
        let vessels = VesselLoader::new()
            .skip_invalid(true)
            .arrival_offset(TimeDelta::from_hours(1))
            .from_csv_str(csv)
            .unwrap();
        assert_eq!(vessels.len(), 1);
        assert_eq!(vessels[0].id().value(), "OK");
    }

    #[test]
    fn test_from_config_honours_derive_flag() {
        let mut config = TerminalConfig::default();
        assert_eq!(
            VesselLoader::from_config(&config),
            VesselLoader::new().arrival_offset(TimeDelta::from_minutes(60))
        );
        config.derive_missing_arrival = false;
        assert_eq!(VesselLoader::from_config(&config), VesselLoader::new());
    }

    #[test]
    fn test_from_config_ignores_unrepresentable_offset() {
        let config = TerminalConfig {
            default_arrival_offset_minutes: i64::MAX,
            ..TerminalConfig::default()
        };
        assert_eq!(VesselLoader::from_config(&config), VesselLoader::new());

        let config = TerminalConfig {
            default_arrival_offset_minutes: -90,
            ..TerminalConfig::default()
        };
        assert_eq!(
            VesselLoader::from_config(&config),
            VesselLoader::new().arrival_offset(TimeDelta::from_minutes(-90))
        );
    }

    #[test]
    fn test_from_path_rejects_unknown_extension() {
        let err = VesselLoader::new().from_path("vessels.xml").unwrap_err();
        assert!(matches!(err, VesselLoaderError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_malformed_json_is_reported() {
        let err = VesselLoader::new().from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, VesselLoaderError::Json(_)));
    }
}
