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

/// A trait for numeric types that have a canonical increment used by the
/// default range factories.
///
/// Integers step by one; floating-point types step by one tenth.
///
/// # Examples
///
/// ```rust
/// # use stride_core::num::constants::DefaultStep;
/// assert_eq!(i32::DEFAULT_STEP, 1);
/// assert_eq!(f64::DEFAULT_STEP, 0.1);
/// ```
pub trait DefaultStep {
    /// The constant added to a value to obtain its successor.
    const DEFAULT_STEP: Self;
}

macro_rules! impl_const_for {
    ($trait_name:ident, $const_name:ident, $value:expr, $t:ty) => {
        impl $trait_name for $t {
            const $const_name: Self = $value;
        }
    };
}

macro_rules! impl_unit_step_for {
    ($t:ty) => {
        impl_const_for!(DefaultStep, DEFAULT_STEP, 1, $t);
    };
}

macro_rules! impl_tenth_step_for {
    ($t:ty) => {
        impl_const_for!(DefaultStep, DEFAULT_STEP, 0.1, $t);
    };
}

impl_unit_step_for!(i8);
impl_unit_step_for!(u8);
impl_unit_step_for!(i16);
impl_unit_step_for!(u16);
impl_unit_step_for!(i32);
impl_unit_step_for!(u32);
impl_unit_step_for!(i64);
impl_unit_step_for!(u64);
impl_unit_step_for!(isize);
impl_unit_step_for!(usize);

impl_tenth_step_for!(f32);
impl_tenth_step_for!(f64);
