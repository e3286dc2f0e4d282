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

//! # Size Policies
//!
//! Strategies for computing the number of elements of a `SteppedRange`
//! without (or, as a last resort, by) walking it. The policy is a type
//! parameter of the range, so the choice is made once, at compile time, by
//! whoever constructs the range.
//!
//! - `Integral`: `end - start + 1`, widened to `i128` before subtracting.
//! - `Decimal`: a closed form for floating-point ranges that step by `0.1`,
//!   computed on bounds rounded to one decimal digit.
//! - `Counting`: applies the successor until the end bound is passed.
//!
//! All policies return `i64`. `Integral` may return zero or a negative
//! value when `start > end` (`5..=3` reports `-1`), and truncates sizes that
//! do not fit in 64 bits.

use num_traits::{Float, PrimInt};
use std::cmp::Ordering;

/// Computes the size of an inclusive stepped range.
pub trait SizePolicy<T> {
    /// A short, human readable name used in debug output.
    const NAME: &'static str;

    /// Returns the number of elements between `start` and `end` (inclusive)
    /// under `successor`.
    fn size<F>(start: &T, end: &T, successor: &F) -> i64
    where
        F: Fn(&T) -> T;
}

/// Closed-form size for primitive integers.
///
/// # Examples
///
/// ```rust
/// # use stride_core::math::size::{Integral, SizePolicy};
/// let succ = |x: &u8| x.wrapping_add(1);
/// assert_eq!(Integral::size(&0u8, &255u8, &succ), 256);
/// assert_eq!(Integral::size(&5i32, &3i32, &|x: &i32| x + 1), -1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Integral;

/// Closed-form size for floating-point ranges stepping by one tenth.
///
/// Both bounds are rounded to one decimal digit, the difference is rounded
/// again, and `trunc(difference * 10) + 1` is returned, saturating at
/// `i64::MAX` for spans too large (or infinite) to fit. The successor is
/// ignored, so this policy is only meaningful for the default `0.1` step.
///
/// The result is the number of tenths between the rounded bounds, not the
/// length of the traversal. Accumulating `0.1` drifts above the exact
/// tenths (`0.1 + 0.1 + 0.1` is `0.30000000000000004`), so iteration may
/// stop one element short: `0.0..=0.3` reports 4 but yields 3 values.
///
/// # Examples
///
/// ```rust
/// # use stride_core::math::size::{Decimal, SizePolicy};
/// let succ = |x: &f64| x + 0.1;
/// assert_eq!(Decimal::size(&0.0, &1.0, &succ), 11);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Decimal;

/// Fallback size computed by traversal. O(n).
///
/// # Examples
///
/// ```rust
/// # use stride_core::math::size::{Counting, SizePolicy};
/// let succ = |x: &char| ((*x as u8) + 1) as char;
/// assert_eq!(Counting::size(&'a', &'e', &succ), 5);
/// assert_eq!(Counting::size(&'e', &'a', &succ), 0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Counting;

impl<T> SizePolicy<T> for Integral
where
    T: PrimInt,
{
    const NAME: &'static str = "Integral";

    #[inline]
    fn size<F>(start: &T, end: &T, successor: &F) -> i64
    where
        F: Fn(&T) -> T,
    {
        match (start.to_i128(), end.to_i128()) {
            (Some(start), Some(end)) => end.wrapping_sub(start).wrapping_add(1) as i64,
            // Only 128-bit values beyond `i128` end up here.
            _ => <Counting as SizePolicy<T>>::size(start, end, successor),
        }
    }
}

impl<T> SizePolicy<T> for Decimal
where
    T: Float,
{
    const NAME: &'static str = "Decimal";

    #[inline]
    fn size<F>(start: &T, end: &T, _successor: &F) -> i64
    where
        F: Fn(&T) -> T,
    {
        let from = round_to_tenths(start.to_f64().unwrap_or(f64::NAN));
        let to = round_to_tenths(end.to_f64().unwrap_or(f64::NAN));
        let difference = round_to_tenths(to - from);

        // The cast saturates for huge or infinite spans; so does the `+ 1`.
        ((difference * 10.0) as i64).saturating_add(1)
    }
}

impl<T> SizePolicy<T> for Counting
where
    T: PartialOrd,
{
    const NAME: &'static str = "Counting";

    fn size<F>(start: &T, end: &T, successor: &F) -> i64
    where
        F: Fn(&T) -> T,
    {
        match start.partial_cmp(end) {
            Some(Ordering::Less | Ordering::Equal) => {}
            _ => return 0,
        }

        let mut count: i64 = 1;
        let mut current = successor(start);
        while current <= *end {
            current = successor(&current);
            count += 1;
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(steps = count, "counted range size by traversal");

        count
    }
}

/// Rounds `value` to one decimal digit.
///
/// Rounding is performed on the exact binary value of `value` and ties go to
/// the even digit, so `0.25` becomes `0.2` while `0.35` (stored as
/// `0.34999…`) becomes `0.3`. Non-finite values are returned unchanged.
///
/// # Examples
///
/// ```rust
/// # use stride_core::math::size::round_to_tenths;
/// assert_eq!(round_to_tenths(0.25), 0.2);
/// assert_eq!(round_to_tenths(0.75), 0.8);
/// assert_eq!(round_to_tenths(1.04), 1.0);
/// ```
pub fn round_to_tenths(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.1}", value).parse().unwrap_or(value)
}
