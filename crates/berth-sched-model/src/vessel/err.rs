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

use berth_sched_core::prelude::TimestampParseError;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct InvalidQuantityError {
    field: &'static str,
    value: f64,
}

impl InvalidQuantityError {
    #[inline]
    pub fn new(field: &'static str, value: f64) -> Self {
        Self { field, value }
    }

    #[inline]
    pub fn field(&self) -> &'static str {
        self.field
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }
}

impl std::fmt::Display for InvalidQuantityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Field '{}' is out of range, got {}",
            self.field, self.value
        )
    }
}

impl std::error::Error for InvalidQuantityError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnknownCargoTypeError {
    label: String,
}

impl UnknownCargoTypeError {
    #[inline]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl std::fmt::Display for UnknownCargoTypeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Unknown cargo type '{}', expected Standard or Reefer",
            self.label
        )
    }
}

impl std::error::Error for UnknownCargoTypeError {}

/// Rejection of a vessel record at construction time.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidInputError {
    Timestamp(TimestampParseError),
    Quantity(InvalidQuantityError),
    CargoType(UnknownCargoTypeError),
}

impl std::fmt::Display for InvalidInputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidInputError::Timestamp(e) => write!(f, "{}", e),
            InvalidInputError::Quantity(e) => write!(f, "{}", e),
            InvalidInputError::CargoType(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for InvalidInputError {}

impl From<TimestampParseError> for InvalidInputError {
    fn from(err: TimestampParseError) -> Self {
        InvalidInputError::Timestamp(err)
    }
}

impl From<InvalidQuantityError> for InvalidInputError {
    fn from(err: InvalidQuantityError) -> Self {
        InvalidInputError::Quantity(err)
    }
}

impl From<UnknownCargoTypeError> for InvalidInputError {
    fn from(err: UnknownCargoTypeError) -> Self {
        InvalidInputError::CargoType(err)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InvalidRecordError {
    row: usize,
    vessel_id: String,
    source: InvalidInputError,
}

impl InvalidRecordError {
    #[inline]
    pub fn new(row: usize, vessel_id: impl Into<String>, source: InvalidInputError) -> Self {
        Self {
            row,
            vessel_id: vessel_id.into(),
            source,
        }
    }

    /// 1-based position of the record in its input.
    #[inline]
    pub fn row(&self) -> usize {
        self.row
    }

    #[inline]
    pub fn vessel_id(&self) -> &str {
        &self.vessel_id
    }

    #[inline]
    pub fn reason(&self) -> &InvalidInputError {
        &self.source
    }
}

impl std::fmt::Display for InvalidRecordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Record {} (vessel '{}') is invalid: {}",
            self.row, self.vessel_id, self.source
        )
    }
}

impl std::error::Error for InvalidRecordError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

#[derive(Debug)]
pub enum VesselLoaderError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Csv(csv::Error),
    InvalidRecord(InvalidRecordError),
    UnsupportedFormat(PathBuf),
}

impl std::fmt::Display for VesselLoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VesselLoaderError::Io(e) => write!(f, "I/O error: {}", e),
            VesselLoaderError::Json(e) => write!(f, "JSON error: {}", e),
            VesselLoaderError::Csv(e) => write!(f, "CSV error: {}", e),
            VesselLoaderError::InvalidRecord(e) => write!(f, "{}", e),
            VesselLoaderError::UnsupportedFormat(p) => write!(
                f,
                "Unsupported vessel file '{}', expected .json or .csv",
                p.display()
            ),
        }
    }
}

impl std::error::Error for VesselLoaderError {}

impl From<std::io::Error> for VesselLoaderError {
    fn from(err: std::io::Error) -> Self {
        VesselLoaderError::Io(err)
    }
}

impl From<serde_json::Error> for VesselLoaderError {
    fn from(err: serde_json::Error) -> Self {
        VesselLoaderError::Json(err)
    }
}

impl From<csv::Error> for VesselLoaderError {
    fn from(err: csv::Error) -> Self {
        VesselLoaderError::Csv(err)
    }
}

impl From<InvalidRecordError> for VesselLoaderError {
    fn from(err: InvalidRecordError) -> Self {
        VesselLoaderError::InvalidRecord(err)
    }
}
