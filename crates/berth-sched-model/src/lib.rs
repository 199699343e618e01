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

//! # Berth Scheduler Model
//!
//! Data types a scheduling session works with:
//!
//! * **`vessel`**: validated [`Vessel`](vessel::Vessel) records with their
//!   derived serve time and recommended speed, and the loader that reads them.
//! * **`terminal`**: berths, the caller-owned [`BerthPool`](terminal::BerthPool)
//!   and the immutable [`AssignmentRecord`](terminal::AssignmentRecord)s berths
//!   accumulate.
//! * **`config`**: terminal settings.
//!
//! Records are validated once, at construction. Everything downstream assumes
//! well-formed values.

pub mod common;
pub mod config;
pub mod terminal;
pub mod vessel;

pub mod prelude {
    pub use crate::common::{Identifier, IdentifierMarkerName};
    pub use crate::config::{ConfigError, MAX_ARRIVAL_OFFSET_MINUTES, TerminalConfig};
    pub use crate::terminal::err::{
        BerthNotFoundError, BerthPoolError, DuplicateBerthError, EmptyBerthPoolError,
    };
    pub use crate::terminal::{
        AssignmentRecord, Berth, BerthIdentifier, BerthPool, DEFAULT_PREVIEW_LEN,
    };
    pub use crate::vessel::err::{InvalidInputError, VesselLoaderError};
    pub use crate::vessel::{
        CargoType, MAX_RECOMMENDED_SPEED, MAX_TEUS, Vessel, VesselIdentifier, VesselLoader,
        VesselRecord,
    };
}
