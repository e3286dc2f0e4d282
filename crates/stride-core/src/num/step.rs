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

//! # Default Stepping
//!
//! The `Stepped` trait binds an element type to the successor and size
//! policy used by `SteppedRange::of`:
//!
//! | Element kind | Successor | Policy |
//! |---|---|---|
//! | 8/16/32/64-bit and pointer-sized integers | `x + 1` (wrapping) | `Integral` |
//! | `f32`, `f64` | `x + 0.1` | `Decimal` |
//! | `char` | next Unicode scalar value | `Counting` |
//!
//! Any other ordered type has no default and must be given a successor via
//! `SteppedRange::new`.

use crate::{
    math::size::{Counting, Decimal, Integral, SizePolicy},
    num::constants::DefaultStep,
};

/// An element type with a canonical successor and size policy.
pub trait Stepped: Sized {
    /// The size policy of ranges built by the default factories.
    type Policy: SizePolicy<Self>;

    /// Returns the value following `value`.
    fn successor(value: &Self) -> Self;
}

macro_rules! impl_stepped_integer {
    ($($t:ty),* $(,)?) => {
        $(
            impl Stepped for $t {
                type Policy = Integral;

                #[inline(always)]
                fn successor(value: &Self) -> Self {
                    value.wrapping_add(<$t as DefaultStep>::DEFAULT_STEP)
                }
            }
        )*
    };
}

macro_rules! impl_stepped_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl Stepped for $t {
                type Policy = Decimal;

                #[inline(always)]
                fn successor(value: &Self) -> Self {
                    *value + <$t as DefaultStep>::DEFAULT_STEP
                }
            }
        )*
    };
}

impl_stepped_integer!(i8, u8, i16, u16, i32, u32, i64, u64, isize, usize);
impl_stepped_float!(f32, f64);

impl Stepped for char {
    type Policy = Counting;

    #[inline]
    fn successor(value: &Self) -> Self {
        next_code_point(*value)
    }
}

/// Returns the Unicode scalar value after `c`.
///
/// The surrogate block `U+D800..=U+DFFF` is skipped and `char::MAX` wraps
/// around to `'\0'`.
///
/// # Examples
///
/// ```rust
/// # use stride_core::num::step::next_code_point;
/// assert_eq!(next_code_point('a'), 'b');
/// assert_eq!(next_code_point('\u{D7FF}'), '\u{E000}');
/// assert_eq!(next_code_point(char::MAX), '\0');
/// ```
#[inline]
pub fn next_code_point(c: char) -> char {
    match c {
        '\u{D7FF}' => '\u{E000}',
        char::MAX => '\0',
        c => char::from_u32(u32::from(c) + 1).unwrap_or('\0'),
    }
}
