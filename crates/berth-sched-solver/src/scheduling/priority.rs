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

use berth_sched_model::prelude::Vessel;
use std::cmp::Ordering;

/// Service order between two vessels: earlier effective arrival first, then
/// perishable cargo first. `Equal` means the input order decides.
#[inline]
pub fn priority_cmp(a: &Vessel, b: &Vessel) -> Ordering {
    a.effective_arrival()
        .cmp(&b.effective_arrival())
        .then_with(|| {
            a.cargo_type()
                .priority_rank()
                .cmp(&b.cargo_type().priority_rank())
        })
}

/// Returns the vessels in service order. The sort is stable, so vessels of
/// equal priority keep their relative input order.
pub fn prioritize(vessels: &[Vessel]) -> Vec<&Vessel> {
    let mut ordered: Vec<&Vessel> = vessels.iter().collect();
    ordered.sort_by(|a, b| priority_cmp(a, b));
    ordered
}
