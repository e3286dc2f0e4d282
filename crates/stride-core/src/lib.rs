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

//! # Stride Core
//!
//! Immutable, inclusive stepped ranges over any ordered element type. A
//! range is described by its bounds and a successor function; elements are
//! generated lazily and never stored unless explicitly materialized.
//!
//! ## Modules
//!
//! - `math`: `SteppedRange<T, F, P>` with interval membership, lazy
//!   restartable iteration and materialization, plus the compile-time size
//!   policies (`Integral`, `Decimal`, `Counting`).
//! - `num`: the `DefaultStep` constants and the `Stepped` trait that gives
//!   integers, floats and `char` a default successor and size policy.
//! - `collection`: the read-only `OrderedCollection` interface and the
//!   `MutableCollection` interface, which ranges implement by rejecting
//!   every call.
//! - `error`: `RangeError` and the `Mutation` it reports.
//!
//! ## Example
//!
//! ```rust
//! use stride_core::math::range::{stepped, SteppedRange};
//!
//! let digits = stepped(0u8, 9);
//! assert_eq!(digits.size(), 10);
//! assert!(digits.contains(&7));
//!
//! let tenths = stepped(0.0, 1.0);
//! assert_eq!(tenths.size(), 11);
//! assert!(tenths.contains(&0.55));
//!
//! let powers = SteppedRange::new(1u64, 1_000, |x: &u64| x * 10);
//! assert_eq!(powers.to_vec(), vec![1, 10, 100, 1_000]);
//! ```

pub mod collection;
pub mod error;
pub mod math;
pub mod num;
