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

use crate::terminal::berth::BerthIdentifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmptyBerthPoolError;

impl std::fmt::Display for EmptyBerthPoolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "The berth pool is empty.")
    }
}

impl std::error::Error for EmptyBerthPoolError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DuplicateBerthError {
    id: BerthIdentifier,
}

impl DuplicateBerthError {
    #[inline]
    pub fn new(id: BerthIdentifier) -> Self {
        Self { id }
    }

    #[inline]
    pub fn id(&self) -> BerthIdentifier {
        self.id
    }
}

impl std::fmt::Display for DuplicateBerthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Berth {} appears more than once in the pool", self.id)
    }
}

impl std::error::Error for DuplicateBerthError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BerthNotFoundError {
    id: BerthIdentifier,
}

impl BerthNotFoundError {
    #[inline]
    pub fn new(id: BerthIdentifier) -> Self {
        Self { id }
    }

    #[inline]
    pub fn id(&self) -> BerthIdentifier {
        self.id
    }
}

impl std::fmt::Display for BerthNotFoundError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Berth {} was not found in the pool", self.id)
    }
}

impl std::error::Error for BerthNotFoundError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BerthPoolError {
    Empty(EmptyBerthPoolError),
    DuplicateBerth(DuplicateBerthError),
}

impl std::fmt::Display for BerthPoolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BerthPoolError::Empty(e) => write!(f, "{}", e),
            BerthPoolError::DuplicateBerth(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for BerthPoolError {}

impl From<EmptyBerthPoolError> for BerthPoolError {
    fn from(err: EmptyBerthPoolError) -> Self {
        BerthPoolError::Empty(err)
    }
}

impl From<DuplicateBerthError> for BerthPoolError {
    fn from(err: DuplicateBerthError) -> Self {
        BerthPoolError::DuplicateBerth(err)
    }
}
