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

use num_traits::{CheckedAdd, CheckedMul, CheckedNeg, CheckedSub, Zero};
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

pub trait MarkerName {
    const NAME_POINT: &'static str;
    const NAME_DELTA: &'static str;
}

/// An absolute position on an axis tagged by the marker `U`.
///
/// Points can be compared and shifted by a [`Delta`], and the difference of
/// two points is a [`Delta`]. Adding two points is not defined.
#[repr(transparent)]
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point<T, U>(T, core::marker::PhantomData<U>);

impl<T, U> Point<T, U> {
    #[inline]
    pub const fn new(value: T) -> Self {
        Point(value, core::marker::PhantomData)
    }

    #[inline]
    pub const fn value(&self) -> T
    where
        T: Copy,
    {
        self.0
    }

    #[inline]
    pub fn checked_add(self, d: Delta<T, U>) -> Option<Self>
    where
        T: CheckedAdd,
    {
        self.0.checked_add(&d.0).map(Point::new)
    }

    #[inline]
    pub fn checked_sub(self, d: Delta<T, U>) -> Option<Self>
    where
        T: CheckedSub<Output = T>,
    {
        self.0.checked_sub(&d.0).map(Point::new)
    }

    /// Signed distance from `earlier` to `self`, `None` on overflow.
    #[inline]
    pub fn checked_since(self, earlier: Self) -> Option<Delta<T, U>>
    where
        T: CheckedSub<Output = T>,
    {
        self.0.checked_sub(&earlier.0).map(Delta::new)
    }
}

impl<T: std::fmt::Display, U: MarkerName> std::fmt::Display for Point<T, U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", U::NAME_POINT, self.0)
    }
}

impl<T, U> Add<Delta<T, U>> for Point<T, U>
where
    T: CheckedAdd,
{
    type Output = Point<T, U>;

    #[inline]
    fn add(self, rhs: Delta<T, U>) -> Self::Output {
        Point::new(self.0.checked_add(&rhs.0).expect("error in Point + Delta"))
    }
}

impl<T, U> AddAssign<Delta<T, U>> for Point<T, U>
where
    T: CheckedAdd,
{
    fn add_assign(&mut self, rhs: Delta<T, U>) {
        self.0 = self.0.checked_add(&rhs.0).expect("error in Point += Delta");
    }
}

impl<T, U> Sub<Delta<T, U>> for Point<T, U>
where
    T: CheckedSub<Output = T>,
{
    type Output = Point<T, U>;

    fn sub(self, rhs: Delta<T, U>) -> Self::Output {
        Point::new(self.0.checked_sub(&rhs.0).expect("error in Point - Delta"))
    }
}

impl<T, U> Sub<Point<T, U>> for Point<T, U>
where
    T: CheckedSub<Output = T>,
{
    type Output = Delta<T, U>;

    fn sub(self, rhs: Point<T, U>) -> Self::Output {
        Delta::new(self.0.checked_sub(&rhs.0).expect("error in Point - Point"))
    }
}

/// A signed span between two [`Point`]s on the same axis.
#[repr(transparent)]
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Delta<T, U>(T, core::marker::PhantomData<U>);

impl<T, U> Delta<T, U> {
    #[inline]
    pub const fn new(value: T) -> Self {
        Delta(value, core::marker::PhantomData)
    }

    #[inline]
    pub const fn value(self) -> T
    where
        T: Copy,
    {
        self.0
    }

    #[inline]
    pub fn is_negative(&self) -> bool
    where
        T: Zero + PartialOrd,
    {
        self.0 < T::zero()
    }

    #[inline]
    pub fn abs(self) -> Self
    where
        T: Zero + PartialOrd + CheckedNeg + Copy,
    {
        if self.is_negative() { -self } else { self }
    }
}

impl<T: std::fmt::Display, U: MarkerName> std::fmt::Display for Delta<T, U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", U::NAME_DELTA, self.0)
    }
}

impl<T, U> Zero for Delta<T, U>
where
    T: Zero + CheckedAdd,
{
    #[inline]
    fn zero() -> Self {
        Delta::new(T::zero())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl<T, U> Default for Delta<T, U>
where
    T: Zero,
{
    #[inline]
    fn default() -> Self {
        Delta::new(T::zero())
    }
}

impl<T, U> Add for Delta<T, U>
where
    T: CheckedAdd,
{
    type Output = Delta<T, U>;

    fn add(self, rhs: Self) -> Self::Output {
        Delta::new(self.0.checked_add(&rhs.0).expect("error in Delta + Delta"))
    }
}

impl<T, U> Sub for Delta<T, U>
where
    T: CheckedSub<Output = T>,
{
    type Output = Delta<T, U>;

    fn sub(self, rhs: Self) -> Self::Output {
        Delta::new(self.0.checked_sub(&rhs.0).expect("error in Delta - Delta"))
    }
}

impl<T, U> Neg for Delta<T, U>
where
    T: CheckedNeg,
{
    type Output = Delta<T, U>;

    fn neg(self) -> Self::Output {
        Delta::new(self.0.checked_neg().expect("error in -Delta"))
    }
}

impl<T, U> Mul<T> for Delta<T, U>
where
    T: CheckedMul,
{
    type Output = Delta<T, U>;

    fn mul(self, rhs: T) -> Self::Output {
        Delta::new(self.0.checked_mul(&rhs).expect("error in Delta * scalar"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tp(v: i64) -> Point<i64, ()> {
        Point::new(v)
    }
    fn dt(v: i64) -> Delta<i64, ()> {
        Delta::new(v)
    }

    #[test]
    fn test_size_and_repr_transparent() {
        assert_eq!(
            core::mem::size_of::<Point<i64, ()>>(),
            core::mem::size_of::<i64>()
        );
        assert_eq!(
            core::mem::size_of::<Delta<i64, ()>>(),
            core::mem::size_of::<i64>()
        );
    }

    #[test]
    fn test_display_uses_marker_names() {
        struct Quay;
        impl MarkerName for Quay {
            const NAME_POINT: &'static str = "QuayPoint";
            const NAME_DELTA: &'static str = "QuayDelta";
        }

        let p: Point<i64, Quay> = Point::new(42);
        let d: Delta<i64, Quay> = Delta::new(-7);
        assert_eq!(p.to_string(), "QuayPoint(42)");
        assert_eq!(d.to_string(), "QuayDelta(-7)");
    }

    #[test]
    fn test_point_shift_and_difference() {
        let start = tp(1_000);
        let later = start + dt(250);
        assert_eq!(later.value(), 1_250);
        assert_eq!((later - start).value(), 250);
        assert_eq!((start - later).value(), -250);
        assert_eq!((later - dt(50)).value(), 1_200);

        let mut cursor = start;
        cursor += dt(10);
        assert_eq!(cursor.value(), 1_010);
    }

    #[test]
    fn test_points_are_ordered_by_value() {
        assert!(tp(-5) < tp(0));
        assert_eq!(std::cmp::max(tp(3), tp(9)), tp(9));
    }

    #[test]
    fn test_checked_ops_report_overflow() {
        assert_eq!(tp(i64::MAX).checked_add(dt(1)), None);
        assert_eq!(tp(i64::MIN).checked_sub(dt(1)), None);
        assert_eq!(tp(10).checked_add(dt(5)), Some(tp(15)));
        assert_eq!(tp(10).checked_since(tp(4)), Some(dt(6)));
        assert_eq!(tp(i64::MIN).checked_since(tp(1)), None);
    }

    #[test]
    fn test_delta_abs_and_sign() {
        assert!(dt(-3).is_negative());
        assert!(!dt(0).is_negative());
        assert_eq!(dt(-3).abs(), dt(3));
        assert_eq!(dt(8).abs(), dt(8));
    }

    #[test]
    fn test_delta_arithmetic() {
        assert_eq!(dt(7) + dt(3), dt(10));
        assert_eq!(dt(7) - dt(3), dt(4));
        assert_eq!(-dt(2), dt(-2));
        assert_eq!(dt(12) * 5, dt(60));
        assert!(Delta::<i64, ()>::zero().is_zero());
        assert_eq!(Delta::<i64, ()>::default(), dt(0));
    }

    #[test]
    #[should_panic(expected = "error in Point + Delta")]
    fn test_panic_point_add_overflow() {
        let _ = tp(i64::MAX) + dt(1);
    }

    #[test]
    #[should_panic(expected = "error in Point - Point")]
    fn test_panic_point_difference_overflow() {
        let _ = tp(i64::MIN + 1) - tp(i64::MAX);
    }

    #[test]
    #[should_panic(expected = "error in Delta * scalar")]
    fn test_panic_delta_scale_overflow() {
        let _ = Delta::<i64, ()>::new(i64::MAX / 2 + 1) * 2;
    }
}
