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
    terminal::{
        berth::{Berth, BerthIdentifier, DEFAULT_PREVIEW_LEN},
        err::{BerthNotFoundError, BerthPoolError, DuplicateBerthError, EmptyBerthPoolError},
        rec::AssignmentRecord,
    },
};
use berth_sched_core::prelude::TimePoint;
use std::collections::HashSet;

/// The fixed set of berths a scheduling session works on.
///
/// Owned by the caller and lent to the scheduler for each pass. The pool is
/// never empty and berth identifiers are unique; berths keep the order they
/// were added in.
#[derive(Debug, Clone)]
pub struct BerthPool {
    berths: Vec<Berth>,
    preview_len: usize,
}

impl BerthPool {
    pub fn new<I>(berths: I) -> Result<Self, BerthPoolError>
    where
        I: IntoIterator<Item = Berth>,
    {
        let berths: Vec<Berth> = berths.into_iter().collect();
        if berths.is_empty() {
            return Err(EmptyBerthPoolError)?;
        }

        let mut seen = HashSet::with_capacity(berths.len());
        for b in &berths {
            if !seen.insert(b.id()) {
                return Err(DuplicateBerthError::new(b.id()))?;
            }
        }

        Ok(Self {
            berths,
            preview_len: DEFAULT_PREVIEW_LEN,
        })
    }

    /// Berths `1..=berth_count`, named `"{prefix} {n}"`.
    pub fn from_config(config: &TerminalConfig) -> Result<Self, BerthPoolError> {
        let berths = (1..=config.berth_count).map(|n| {
            Berth::new(
                BerthIdentifier::new(n),
                format!("{} {}", config.berth_name_prefix, n),
            )
        });
        Ok(Self::new(berths)?.with_preview_len(config.preview_len))
    }

    #[inline]
    pub fn with_preview_len(mut self, n: usize) -> Self {
        self.preview_len = n;
        self
    }

    #[inline]
    pub fn preview_len(&self) -> usize {
        self.preview_len
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.berths.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.berths.is_empty()
    }

    #[inline]
    pub fn berths(&self) -> &[Berth] {
        &self.berths
    }

    /// Mutable access for a scheduling pass.
    #[inline]
    pub fn berths_mut(&mut self) -> &mut [Berth] {
        &mut self.berths
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Berth> {
        self.berths.iter()
    }

    #[inline]
    pub fn ids(&self) -> impl Iterator<Item = BerthIdentifier> + '_ {
        self.berths.iter().map(|b| b.id())
    }

    #[inline]
    pub fn contains_id(&self, id: BerthIdentifier) -> bool {
        self.get(id).is_some()
    }

    #[inline]
    pub fn get(&self, id: BerthIdentifier) -> Option<&Berth> {
        self.berths.iter().find(|b| b.id() == id)
    }

    #[inline]
    pub fn get_mut(&mut self, id: BerthIdentifier) -> Option<&mut Berth> {
        self.berths.iter_mut().find(|b| b.id() == id)
    }

    #[inline]
    pub fn berth(&self, id: BerthIdentifier) -> Result<&Berth, BerthNotFoundError> {
        self.get(id).ok_or(BerthNotFoundError::new(id))
    }

    /// The "next up" preview for one berth, at most `preview_len` records.
    #[inline]
    pub fn next_assignments(
        &self,
        id: BerthIdentifier,
    ) -> Result<&[AssignmentRecord], BerthNotFoundError> {
        Ok(self.berth(id)?.next_assignments(self.preview_len))
    }

    #[inline]
    pub fn is_berth_available(
        &self,
        id: BerthIdentifier,
        t: TimePoint<i64>,
    ) -> Result<bool, BerthNotFoundError> {
        Ok(self.berth(id)?.is_available_at(t))
    }

    #[inline]
    pub fn total_assignments(&self) -> usize {
        self.berths.iter().map(Berth::assignment_count).sum()
    }

    /// All records of all berths, berth by berth.
    #[inline]
    pub fn iter_assignments(&self) -> impl Iterator<Item = &AssignmentRecord> {
        self.berths.iter().flat_map(|b| b.assignments().iter())
    }
}

impl<'a> IntoIterator for &'a BerthPool {
    type Item = &'a Berth;
    type IntoIter = std::slice::Iter<'a, Berth>;

    fn into_iter(self) -> Self::IntoIter {
        self.berths.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vessel::{CargoType, Vessel, VesselIdentifier};
    use berth_sched_core::prelude::parse_timestamp;

    fn ts(s: &str) -> TimePoint<i64> {
        parse_timestamp(s).unwrap()
    }

    fn bid(n: usize) -> BerthIdentifier {
        BerthIdentifier::new(n)
    }

    fn vessel(id: &str, arrival: &str) -> Vessel {
        Vessel::new(
            VesselIdentifier::new(id.to_string()),
            ts(arrival),
            ts(arrival),
            100,
            CargoType::Standard,
            ts(arrival),
            None,
            0.0,
        )
        .unwrap()
    }

    #[test]
    fn test_rejects_empty_pool() {
        let err = BerthPool::new(Vec::<Berth>::new()).unwrap_err();
        assert_eq!(err, BerthPoolError::Empty(EmptyBerthPoolError));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let err = BerthPool::new([
            Berth::new(bid(1), "A"),
            Berth::new(bid(2), "B"),
            Berth::new(bid(1), "C"),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            BerthPoolError::DuplicateBerth(DuplicateBerthError::new(bid(1)))
        );
    }

    #[test]
    fn test_from_default_config_has_twelve_numbered_berths() {
        let pool = BerthPool::from_config(&TerminalConfig::default()).unwrap();
        assert_eq!(pool.len(), 12);
        assert!(!pool.is_empty());
        assert_eq!(pool.preview_len(), 5);
        let ids: Vec<usize> = pool.ids().map(|id| id.into_inner()).collect();
        assert_eq!(ids, (1..=12).collect::<Vec<_>>());
        assert_eq!(pool.get(bid(12)).unwrap().name(), "Berth 12");
        assert!(pool.get(bid(13)).is_none());
    }

    #[test]
    fn test_lookup_preserves_insertion_order() {
        let pool = BerthPool::new([
            Berth::new(bid(30), "North"),
            Berth::new(bid(10), "South"),
        ])
        .unwrap();
        let names: Vec<_> = pool.iter().map(|b| b.name()).collect();
        assert_eq!(names, vec!["North", "South"]);
        assert_eq!(pool.berth(bid(10)).unwrap().name(), "South");
        assert!(pool.contains_id(bid(30)));
    }

    #[test]
    fn test_queries_report_unknown_berth() {
        let pool = BerthPool::new([Berth::new(bid(1), "A")]).unwrap();
        assert_eq!(
            pool.next_assignments(bid(9)).unwrap_err(),
            BerthNotFoundError::new(bid(9))
        );
        assert_eq!(
            pool.is_berth_available(bid(9), ts("2024-01-01 00:00:00"))
                .unwrap_err()
                .id(),
            bid(9)
        );
    }

    #[test]
    fn test_next_assignments_respects_preview_len() {
        let mut pool = BerthPool::new([Berth::new(bid(1), "A")])
            .unwrap()
            .with_preview_len(2);
        for i in 0..4 {
            let v = vessel(&format!("V{i}"), "2024-01-01 08:00:00");
            pool.get_mut(bid(1)).unwrap().assign_vessel(&v);
        }
        assert_eq!(pool.next_assignments(bid(1)).unwrap().len(), 2);
        assert_eq!(pool.total_assignments(), 4);
        assert_eq!(pool.iter_assignments().count(), 4);
    }

    #[test]
    fn test_is_berth_available() {
        let mut pool = BerthPool::new([Berth::new(bid(1), "A")]).unwrap();
        pool.get_mut(bid(1))
            .unwrap()
            .assign_vessel(&vessel("V", "2024-01-01 08:00:00"));
        assert!(!pool.is_berth_available(bid(1), ts("2024-01-01 08:00:30")).unwrap());
        assert!(pool.is_berth_available(bid(1), ts("2024-01-01 08:01:00")).unwrap());
    }
}
