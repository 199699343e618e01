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

use crate::vessel::err::UnknownCargoTypeError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CargoType {
    #[default]
    Standard,
    Reefer,
}

impl CargoType {
    pub const ALL: [CargoType; 2] = [CargoType::Standard, CargoType::Reefer];

    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            CargoType::Standard => "Standard",
            CargoType::Reefer => "Reefer",
        }
    }

    /// Refrigerated cargo spoils and is served first among equal arrivals.
    #[inline]
    pub const fn is_perishable(self) -> bool {
        matches!(self, CargoType::Reefer)
    }

    /// Tie-break rank among vessels with the same arrival; lower goes first.
    #[inline]
    pub const fn priority_rank(self) -> u8 {
        if self.is_perishable() { 0 } else { 1 }
    }
}

impl std::fmt::Display for CargoType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CargoType {
    type Err = UnknownCargoTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        CargoType::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(label))
            .ok_or_else(|| UnknownCargoTypeError::new(label))
    }
}
