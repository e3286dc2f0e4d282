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
    math::size::{Counting, SizePolicy},
    num::step::Stepped,
};
use std::{any::Any, iter::FusedIterator, marker::PhantomData, ops::RangeInclusive};

/// A plain function pointer used as the successor of the default ranges.
pub type Successor<T> = fn(&T) -> T;

/// The range produced by the default factories for a `Stepped` element type.
pub type DefaultRange<T> = SteppedRange<T, Successor<T>, <T as Stepped>::Policy>;

/// An immutable, inclusive range `[start, end]` whose elements are generated
/// lazily by repeatedly applying a successor function to `start`.
///
/// The size computation is selected at compile time through the policy `P`
/// (see `math::size`). Membership is an interval test: a value lying between
/// two generated elements is still contained.
///
/// # Caller contract
///
/// No relation between `start` and `end` is enforced. The successor must be
/// strictly increasing, otherwise iteration and the `Counting` policy do not
/// terminate. The integer successors of the default factories wrap on
/// overflow, so a range ending at the type's maximum never terminates.
///
/// # Examples
///
/// ```rust
/// # use stride_core::math::range::SteppedRange;
/// let evens = SteppedRange::new(0, 10, |x: &i32| x + 2);
/// assert_eq!(evens.iter().collect::<Vec<_>>(), vec![0, 2, 4, 6, 8, 10]);
/// assert_eq!(evens.size(), 6);
/// assert!(evens.contains(&3));
/// ```
pub struct SteppedRange<T, F, P = Counting> {
    start: T,
    end: T,
    successor: F,
    policy: PhantomData<fn() -> P>,
}

/// An iterator over the elements of a `SteppedRange`.
///
/// Every call to `SteppedRange::iter` starts a fresh traversal, so several
/// iterators over the same range never interfere.
///
/// # Examples
///
/// ```rust
/// # use stride_core::math::range::stepped;
/// let r = stepped('x', 'z');
/// let mut it = r.iter();
/// assert_eq!(it.next(), Some('x'));
/// assert_eq!(it.next(), Some('y'));
/// assert_eq!(it.next(), Some('z'));
/// assert_eq!(it.next(), None);
/// ```
pub struct Iter<'a, T, F> {
    current: T,
    end: &'a T,
    successor: &'a F,
}

impl<T, F> Iterator for Iter<'_, T, F>
where
    T: PartialOrd,
    F: Fn(&T) -> T,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.current <= *self.end {
            let next = (self.successor)(&self.current);
            Some(std::mem::replace(&mut self.current, next))
        } else {
            None
        }
    }
}

// Once `current` has passed `end` it is never advanced again.
impl<T, F> FusedIterator for Iter<'_, T, F>
where
    T: PartialOrd,
    F: Fn(&T) -> T,
{
}

impl<T, F> Clone for Iter<'_, T, F>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            current: self.current.clone(),
            end: self.end,
            successor: self.successor,
        }
    }
}

impl<T, F> std::fmt::Debug for Iter<'_, T, F>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Iter")
            .field("current", &self.current)
            .field("end", self.end)
            .finish()
    }
}

impl<T, F> SteppedRange<T, F, Counting>
where
    F: Fn(&T) -> T,
{
    /// Creates a range over an arbitrary ordered type with an explicit
    /// successor. The size is computed by traversal.
    ///
    /// No validation is performed; `start > end` yields a range without
    /// elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::math::range::SteppedRange;
    /// let r = SteppedRange::new(1u32, 100, |x: &u32| x * 3);
    /// assert_eq!(r.iter().collect::<Vec<_>>(), vec![1, 3, 9, 27, 81]);
    /// assert_eq!(r.size(), 5);
    /// ```
    #[inline]
    pub fn new(start: T, end: T, successor: F) -> Self {
        Self::with_policy(start, end, successor)
    }
}

impl<T> SteppedRange<T, Successor<T>, <T as Stepped>::Policy>
where
    T: Stepped,
{
    /// Creates a range using the default successor and size policy of `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::math::range::SteppedRange;
    /// let r = SteppedRange::of(0.0, 1.0);
    /// assert_eq!(r.size(), 11);
    /// assert_eq!(r.iter().count(), 11);
    /// ```
    #[inline]
    pub fn of(start: T, end: T) -> Self {
        Self::with_policy(start, end, T::successor)
    }
}

/// Creates a range using the default successor and size policy of `T`.
///
/// Shorthand for `SteppedRange::of`.
///
/// # Examples
///
/// ```rust
/// # use stride_core::math::range::stepped;
/// let r = stepped(1u8, 5);
/// assert_eq!(r.size(), 5);
/// assert_eq!(r.iter().sum::<u8>(), 15);
/// ```
#[inline]
pub fn stepped<T>(start: T, end: T) -> DefaultRange<T>
where
    T: Stepped,
{
    SteppedRange::of(start, end)
}

impl<T, F, P> SteppedRange<T, F, P>
where
    F: Fn(&T) -> T,
{
    /// Creates a range with an explicitly chosen size policy.
    ///
    /// The caller is responsible for picking a policy that agrees with the
    /// successor: `Integral` assumes a step of one, `Decimal` a step of one
    /// tenth.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::math::{range::SteppedRange, size::Integral};
    /// let r = SteppedRange::<i64, _, Integral>::with_policy(-3, 3, |x: &i64| x + 1);
    /// assert_eq!(r.size(), 7);
    /// ```
    #[inline]
    pub fn with_policy(start: T, end: T, successor: F) -> Self {
        Self {
            start,
            end,
            successor,
            policy: PhantomData,
        }
    }

    /// Returns the inclusive start bound.
    #[inline]
    pub const fn start(&self) -> &T {
        &self.start
    }

    /// Returns the inclusive end bound.
    #[inline]
    pub const fn end(&self) -> &T {
        &self.end
    }

    /// Returns the successor function.
    #[inline]
    pub const fn successor(&self) -> &F {
        &self.successor
    }

    /// Returns the number of elements according to the size policy `P`.
    ///
    /// The result is not clamped: the `Integral` policy reports
    /// `end - start + 1` even when `start > end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::math::range::stepped;
    /// assert_eq!(stepped(1, 10).size(), 10);
    /// assert_eq!(stepped(5, 3).size(), -1);
    /// assert_eq!(stepped('a', 'e').size(), 5);
    /// ```
    #[inline]
    pub fn size(&self) -> i64
    where
        P: SizePolicy<T>,
    {
        P::size(&self.start, &self.end, &self.successor)
    }

    /// Returns `true` if `start == end`.
    ///
    /// This does not look at the number of elements: a single-element range
    /// reports `true`, while a descending range (no elements at all)
    /// reports `false`.
    ///
    /// Equality is `PartialEq`, so for floats `0.0` equals `-0.0` and `NaN`
    /// never equals itself: `[0.0, -0.0]` is empty, `[NaN, NaN]` is not.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::math::range::stepped;
    /// assert!(stepped(5, 5).is_empty());
    /// assert!(!stepped(5, 3).is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool
    where
        T: PartialEq,
    {
        self.start == self.end
    }

    /// Returns `true` if `start <= value <= end`.
    ///
    /// Values that are never produced by iteration are contained as long as
    /// they lie within the bounds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::math::range::stepped;
    /// let r = stepped(0.0, 1.0);
    /// assert!(r.contains(&0.55));
    /// assert!(!r.iter().any(|x| x == 0.55));
    /// assert!(!r.contains(&f64::NAN));
    /// ```
    #[inline]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialOrd,
    {
        self.start <= *value && *value <= self.end
    }

    /// Returns `true` if every value yielded by `values` is contained.
    /// An empty input yields `true`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::math::range::stepped;
    /// let r = stepped(1, 10);
    /// assert!(r.contains_all(&[1, 5, 10]));
    /// assert!(!r.contains_all(&[1, 11]));
    /// assert!(r.contains_all(&[]));
    /// ```
    pub fn contains_all<'a, I>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: PartialOrd + 'a,
    {
        values.into_iter().all(|value| self.contains(value))
    }

    /// Like `contains`, but accepts a value of any type. A value that is
    /// not a `T` is reported as not contained.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::math::range::stepped;
    /// let r = stepped(1i32, 10);
    /// assert!(r.contains_any(&5i32));
    /// assert!(!r.contains_any(&5i64));
    /// assert!(!r.contains_any(&"five"));
    /// ```
    #[inline]
    pub fn contains_any(&self, value: &dyn Any) -> bool
    where
        T: PartialOrd + Any,
    {
        value
            .downcast_ref::<T>()
            .is_some_and(|value| self.contains(value))
    }

    /// Creates a fresh iterator starting at `start`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::math::range::stepped;
    /// let r = stepped(1, 4);
    /// assert_eq!(r.iter().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    /// assert_eq!(stepped(4, 1).iter().next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, F>
    where
        T: Clone,
    {
        Iter {
            current: self.start.clone(),
            end: &self.end,
            successor: &self.successor,
        }
    }

    /// Collects one full traversal into a `Vec`.
    ///
    /// `size()` is only used to reserve capacity; the result always holds
    /// exactly the elements produced by `iter()`. For a descending range this
    /// is an empty vector regardless of the reported size.
    ///
    /// Default floating-point ranges can also come out shorter than
    /// `size()`: repeated `+ 0.1` overshoots the end bound, so `0.0..=0.3`
    /// yields `[0.0, 0.1, 0.2]` while reporting a size of 4.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::math::range::stepped;
    /// assert_eq!(stepped('a', 'c').to_vec(), vec!['a', 'b', 'c']);
    /// assert!(stepped(3, 1).to_vec().is_empty());
    /// ```
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone + PartialOrd,
        P: SizePolicy<T>,
    {
        let expected = self.size();
        let mut values = Vec::new();
        // The capacity is a hint; a reservation that cannot be satisfied is
        // left to the traversal to grow into.
        let _ = values.try_reserve_exact(usize::try_from(expected).unwrap_or(0));
        values.extend(self.iter());

        #[cfg(feature = "tracing")]
        if i64::try_from(values.len()) != Ok(expected) {
            tracing::debug!(
                size = expected,
                traversed = values.len(),
                policy = P::NAME,
                "range size disagrees with traversal length"
            );
        }

        values
    }

    /// Collects one full traversal into a fixed-size boxed slice.
    ///
    /// See `to_vec` for how the result relates to `size()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::math::range::stepped;
    /// let r = stepped(10u16, 13);
    /// let values = r.materialize();
    /// assert_eq!(values.len() as i64, r.size());
    /// assert_eq!(&*values, &[10, 11, 12, 13]);
    /// ```
    #[inline]
    pub fn materialize(&self) -> Box<[T]>
    where
        T: Clone + PartialOrd,
        P: SizePolicy<T>,
    {
        self.to_vec().into_boxed_slice()
    }

    /// Writes the elements of the range into `buffer`, stopping when either
    /// the range or the buffer is exhausted. Returns the number of elements
    /// written; the remainder of `buffer` is left untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::math::range::stepped;
    /// let mut buffer = [0; 3];
    /// assert_eq!(stepped(1, 10).fill(&mut buffer), 3);
    /// assert_eq!(buffer, [1, 2, 3]);
    /// ```
    pub fn fill(&self, buffer: &mut [T]) -> usize
    where
        T: Clone + PartialOrd,
    {
        let mut written = 0;
        for (slot, value) in buffer.iter_mut().zip(self.iter()) {
            *slot = value;
            written += 1;
        }
        written
    }
}

impl<T, F, P> Clone for SteppedRange<T, F, P>
where
    T: Clone,
    F: Clone,
{
    fn clone(&self) -> Self {
        Self {
            start: self.start.clone(),
            end: self.end.clone(),
            successor: self.successor.clone(),
            policy: PhantomData,
        }
    }
}

impl<T, F, P> std::fmt::Debug for SteppedRange<T, F, P>
where
    T: std::fmt::Debug,
    P: SizePolicy<T>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SteppedRange")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("policy", &P::NAME)
            .finish()
    }
}

impl<T, F, P> std::fmt::Display for SteppedRange<T, F, P>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

impl<T, F, P> std::ops::RangeBounds<T> for SteppedRange<T, F, P> {
    fn start_bound(&self) -> std::ops::Bound<&T> {
        std::ops::Bound::Included(&self.start)
    }

    fn end_bound(&self) -> std::ops::Bound<&T> {
        std::ops::Bound::Included(&self.end)
    }
}

impl<'a, T, F, P> IntoIterator for &'a SteppedRange<T, F, P>
where
    T: Clone + PartialOrd,
    F: Fn(&T) -> T,
{
    type Item = T;
    type IntoIter = Iter<'a, T, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> From<RangeInclusive<T>> for SteppedRange<T, Successor<T>, <T as Stepped>::Policy>
where
    T: Stepped,
{
    #[inline]
    fn from(range: RangeInclusive<T>) -> Self {
        let (start, end) = range.into_inner();
        Self::of(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::size::{Decimal, Integral};
    use std::ops::{Bound, RangeBounds};

    #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
    struct Version {
        major: u32,
        minor: u32,
    }

    fn v(major: u32, minor: u32) -> Version {
        Version { major, minor }
    }

    fn next_version(current: &Version) -> Version {
        if current.minor == 9 {
            v(current.major + 1, 0)
        } else {
            v(current.major, current.minor + 1)
        }
    }

    #[test]
    fn test_integral_size_matches_formula() {
        for (start, end) in [(0, 0), (1, 10), (-7, 7), (-100, -1), (42, 1000)] {
            let r = stepped(start, end);
            assert_eq!(r.size(), i64::from(end - start + 1));
        }
    }

    #[test]
    fn test_integral_iteration_yields_each_value_once() {
        let r = stepped(-3i16, 12);
        let values: Vec<i16> = r.iter().collect();
        assert_eq!(values, (-3i16..=12).collect::<Vec<_>>());
        assert_eq!(values.len() as i64, r.size());
    }

    #[test]
    fn test_all_integer_widths() {
        assert_eq!(stepped(1i8, 5).size(), 5);
        assert_eq!(stepped(1u8, 5).size(), 5);
        assert_eq!(stepped(1i32, 5).size(), 5);
        assert_eq!(stepped(1u32, 5).size(), 5);
        assert_eq!(stepped(1i64, 5).size(), 5);
        assert_eq!(stepped(1u64, 5).size(), 5);
        assert_eq!(stepped(1isize, 5).size(), 5);
        assert_eq!(stepped(1usize, 5).iter().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_single_element_range_reports_empty() {
        let r = stepped(5, 5);
        assert!(r.is_empty());
        assert_eq!(r.size(), 1);
        assert_eq!(r.iter().collect::<Vec<_>>(), vec![5]);
    }

    #[test]
    fn test_descending_range() {
        let r = stepped(5, 3);
        assert!(!r.is_empty());
        assert_eq!(r.iter().next(), None);
        assert_eq!(r.size(), -1);
        assert!(r.materialize().is_empty());
        assert!(!r.contains(&4));
    }

    #[test]
    fn test_float_range() {
        let r = stepped(0.0, 1.0);
        assert_eq!(r.size(), 11);
        assert_eq!(r.iter().count(), 11);
        assert!(!r.is_empty());
    }

    #[test]
    fn test_float_size_exceeds_traversal() {
        // 0.1 + 0.1 + 0.1 > 0.3
        let r = stepped(0.0, 0.3);
        assert_eq!(r.size(), 4);
        assert_eq!(r.iter().count(), 3);
        assert_eq!(r.materialize().len(), 3);

        let r = stepped(0.1, 0.3);
        assert_eq!(r.size(), 3);
        assert_eq!(r.to_vec(), vec![0.1, 0.2]);

        let r = stepped(0.0f32, 1.0f32);
        assert_eq!(r.size(), 11);
        assert_eq!(r.iter().count(), 10);
    }

    #[test]
    fn test_float_size_saturates() {
        assert_eq!(stepped(0.0, f64::INFINITY).size(), i64::MAX);
        assert_eq!(stepped(0.0, 1e18).size(), i64::MAX);
    }

    #[test]
    fn test_float_is_empty_uses_partial_eq() {
        assert!(stepped(0.0, -0.0).is_empty());
        assert!(!stepped(f64::NAN, f64::NAN).is_empty());
    }

    #[test]
    fn test_float_contains_unreachable_value() {
        let r = stepped(0.0, 1.0);
        assert!(r.contains(&0.55));
        assert!(!r.iter().any(|x| x == 0.55));

        let r = stepped(2.0, 3.0);
        assert!(r.contains(&2.15));
        assert!(!r.contains(&3.05));
    }

    #[test]
    fn test_float_nan() {
        let r = stepped(0.0, 1.0);
        assert!(!r.contains(&f64::NAN));

        let r = stepped(f64::NAN, 1.0);
        assert_eq!(r.iter().next(), None);
    }

    #[test]
    fn test_single_precision_range() {
        let r = stepped(0.0f32, 1.0f32);
        assert_eq!(r.size(), 11);
        assert!(r.contains(&0.25));
        assert_eq!(r.iter().next(), Some(0.0));
    }

    #[test]
    fn test_char_range() {
        let r = stepped('a', 'e');
        assert_eq!(r.iter().collect::<String>(), "abcde");
        assert_eq!(r.size(), 5);
        assert!(r.contains(&'c'));
        assert!(!r.contains(&'f'));
    }

    #[test]
    fn test_char_range_skips_surrogates() {
        let r = stepped('\u{D7FE}', '\u{E001}');
        assert_eq!(
            r.iter().collect::<Vec<_>>(),
            vec!['\u{D7FE}', '\u{D7FF}', '\u{E000}', '\u{E001}']
        );
        assert_eq!(r.size(), 4);
    }

    #[test]
    fn test_custom_type_range() {
        let r = SteppedRange::new(v(1, 8), v(2, 1), next_version);
        assert_eq!(
            r.iter().collect::<Vec<_>>(),
            vec![v(1, 8), v(1, 9), v(2, 0), v(2, 1)]
        );
        assert_eq!(r.size(), 4);
        // Interval membership, not reachability.
        assert!(r.contains(&v(1, 95)));
        assert!(!r.contains(&v(2, 2)));
    }

    #[test]
    fn test_custom_successor() {
        let r = SteppedRange::new(0, 20, |x: &i32| x + 5);
        assert_eq!(r.iter().collect::<Vec<_>>(), vec![0, 5, 10, 15, 20]);
        assert_eq!(r.size(), 5);
        assert!(r.contains(&7));
    }

    #[test]
    fn test_with_policy() {
        let r = SteppedRange::<i32, _, Integral>::with_policy(1, 4, |x: &i32| x + 1);
        assert_eq!(r.size(), 4);

        let r = SteppedRange::<f64, _, Decimal>::with_policy(0.5, 1.0, |x: &f64| x + 0.1);
        assert_eq!(r.size(), 6);
    }

    #[test]
    fn test_contains_bounds_inclusive() {
        let r = stepped(10, 20);
        assert!(r.contains(&10));
        assert!(r.contains(&20));
        assert!(!r.contains(&9));
        assert!(!r.contains(&21));
    }

    #[test]
    fn test_contains_all() {
        let r = stepped(1, 10);
        assert!(r.contains_all(&[1, 2, 10]));
        assert!(!r.contains_all(&[0, 2]));
        assert!(r.contains_all(std::iter::empty()));
        assert!(r.contains_all(&vec![3, 4]));
    }

    #[test]
    fn test_contains_any_type_mismatch() {
        let r = stepped(1i32, 10);
        assert!(r.contains_any(&3i32));
        assert!(!r.contains_any(&11i32));
        assert!(!r.contains_any(&3u32));
        assert!(!r.contains_any(&"3"));
        assert!(!r.contains_any(&3.0f64));
    }

    #[test]
    fn test_iterators_are_independent() {
        let r = stepped(1, 5);
        let mut a = r.iter();
        let mut b = r.iter();

        assert_eq!(a.next(), Some(1));
        assert_eq!(a.next(), Some(2));
        assert_eq!(b.next(), Some(1));
        assert_eq!(a.next(), Some(3));

        let first: Vec<_> = r.iter().collect();
        let second: Vec<_> = r.iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_cloned_iterator_resumes_at_same_position() {
        let r = stepped(1, 5);
        let mut it = r.iter();
        it.next();
        let rest: Vec<_> = it.clone().collect();
        assert_eq!(rest, vec![2, 3, 4, 5]);
        assert_eq!(it.next(), Some(2));
    }

    #[test]
    fn test_fused_iterator() {
        let r = stepped(0, 1);
        let mut it = r.iter();
        assert_eq!(it.next(), Some(0));
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);

        fn assert_fused<I: FusedIterator>(_: I) {}
        assert_fused(it);
    }

    #[test]
    fn test_materialize_matches_iteration() {
        for r in [stepped(-2, 2), stepped(7, 7), stepped(0, 100)] {
            let values = r.materialize();
            assert_eq!(values.len() as i64, r.size());
            assert_eq!(values.to_vec(), r.iter().collect::<Vec<_>>());
        }

        let r = stepped('p', 't');
        assert_eq!(r.materialize().len() as i64, r.size());
    }

    #[test]
    fn test_fill() {
        let r = stepped(1, 3);

        let mut short = [0; 2];
        assert_eq!(r.fill(&mut short), 2);
        assert_eq!(short, [1, 2]);

        let mut long = [-1; 5];
        assert_eq!(r.fill(&mut long), 3);
        assert_eq!(long, [1, 2, 3, -1, -1]);

        let mut none: [i32; 0] = [];
        assert_eq!(r.fill(&mut none), 0);
    }

    #[test]
    fn test_into_iterator_ref_trait() {
        let r = stepped(0u32, 3);
        let mut total = 0;
        for x in &r {
            total += x;
        }
        assert_eq!(total, 6);
        // r is still usable
        assert_eq!(r.size(), 4);
    }

    #[test]
    fn test_from_range_inclusive() {
        let r: DefaultRange<i64> = (3..=6).into();
        assert_eq!(r.start(), &3);
        assert_eq!(r.end(), &6);
        assert_eq!(r.size(), 4);
    }

    #[test]
    fn test_accessors() {
        let r = SteppedRange::new(2, 8, |x: &i32| x * 2);
        assert_eq!(*r.start(), 2);
        assert_eq!(*r.end(), 8);
        assert_eq!((r.successor())(&4), 8);
    }

    #[test]
    fn test_range_bounds() {
        let r = stepped(5, 10);

        match r.start_bound() {
            Bound::Included(&x) => assert_eq!(x, 5),
            _ => panic!("Wrong start bound"),
        }

        match r.end_bound() {
            Bound::Included(&x) => assert_eq!(x, 10),
            _ => panic!("Wrong end bound"),
        }
    }

    #[test]
    fn test_traits_display_debug() {
        let r = stepped(1, 5);
        assert_eq!(format!("{}", r), "[1, 5]");
        assert_eq!(
            format!("{:?}", r),
            "SteppedRange { start: 1, end: 5, policy: \"Integral\" }"
        );

        let r = SteppedRange::new('a', 'b', |c: &char| ((*c as u8) + 1) as char);
        assert_eq!(
            format!("{:?}", r),
            "SteppedRange { start: 'a', end: 'b', policy: \"Counting\" }"
        );
    }

    #[test]
    fn test_clone() {
        let r = stepped(1, 3);
        let c = r.clone();
        assert_eq!(c.to_vec(), r.to_vec());
    }

    #[test]
    fn test_shared_across_threads() {
        let range = stepped(1u64, 1_000);
        let r = &range;
        let expected: u64 = (1..=1_000).sum();

        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(move || (r.size(), r.iter().sum::<u64>())))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), (1_000, expected));
            }
        });
    }
}
