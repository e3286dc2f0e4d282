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

//! # Collection Interfaces
//!
//! - `OrderedCollection`: the read-only surface of an ordered container
//!   (size, emptiness, membership, iteration). Ranges implement it.
//! - `MutableCollection`: the mutating surface. Ranges implement it only to
//!   refuse every call with `RangeError::UnsupportedOperation`, so generic
//!   code written against a mutable collection gets a typed error instead
//!   of silently changing nothing.

use crate::{
    error::{Mutation, RangeError},
    math::{
        range::{Iter, SteppedRange},
        size::SizePolicy,
    },
};

/// A read-only, ordered collection of `T`.
///
/// # Examples
///
/// ```rust
/// # use stride_core::{collection::OrderedCollection, math::range::stepped};
/// fn describe<C: OrderedCollection<u8>>(c: &C) -> (i64, Vec<u8>) {
///     (c.size(), c.iter().collect())
/// }
///
/// assert_eq!(describe(&stepped(1u8, 3)), (3, vec![1, 2, 3]));
/// ```
pub trait OrderedCollection<T> {
    /// The iterator returned by `iter`.
    type Iter<'a>: Iterator<Item = T>
    where
        Self: 'a;

    /// Returns the number of elements.
    fn size(&self) -> i64;

    /// Returns `true` if the collection is considered empty.
    fn is_empty(&self) -> bool;

    /// Returns `true` if `value` is a member.
    fn contains(&self, value: &T) -> bool;

    /// Returns an iterator over the elements in ascending order.
    fn iter(&self) -> Self::Iter<'_>;

    /// Returns `true` if every value is a member. Empty input yields `true`.
    fn contains_all<'a, I>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        values.into_iter().all(|value| self.contains(value))
    }
}

/// The mutating operations of a set-like collection.
pub trait MutableCollection<T> {
    /// Inserts `value`. Returns `true` if the collection changed.
    fn add(&mut self, value: T) -> Result<bool, RangeError>;

    /// Removes `value`. Returns `true` if the collection changed.
    fn remove(&mut self, value: &T) -> Result<bool, RangeError>;

    /// Inserts every value. Returns `true` if the collection changed.
    fn add_all<I>(&mut self, values: I) -> Result<bool, RangeError>
    where
        I: IntoIterator<Item = T>;

    /// Keeps only the given values. Returns `true` if the collection changed.
    fn retain_all<'a, I>(&mut self, values: I) -> Result<bool, RangeError>
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a;

    /// Removes every given value. Returns `true` if the collection changed.
    fn remove_all<'a, I>(&mut self, values: I) -> Result<bool, RangeError>
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a;

    /// Removes all values.
    fn clear(&mut self) -> Result<(), RangeError>;
}

impl<T, F, P> OrderedCollection<T> for SteppedRange<T, F, P>
where
    T: Clone + PartialOrd,
    F: Fn(&T) -> T,
    P: SizePolicy<T>,
{
    type Iter<'a>
        = Iter<'a, T, F>
    where
        Self: 'a;

    #[inline]
    fn size(&self) -> i64 {
        SteppedRange::size(self)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        SteppedRange::is_empty(self)
    }

    #[inline]
    fn contains(&self, value: &T) -> bool {
        SteppedRange::contains(self, value)
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        SteppedRange::iter(self)
    }
}

#[inline]
fn reject<R>(operation: Mutation) -> Result<R, RangeError> {
    #[cfg(feature = "tracing")]
    tracing::trace!(operation = operation.name(), "rejected mutation of a range");

    Err(RangeError::UnsupportedOperation(operation))
}

impl<T, F, P> MutableCollection<T> for SteppedRange<T, F, P> {
    fn add(&mut self, _value: T) -> Result<bool, RangeError> {
        reject(Mutation::Add)
    }

    fn remove(&mut self, _value: &T) -> Result<bool, RangeError> {
        reject(Mutation::Remove)
    }

    fn add_all<I>(&mut self, _values: I) -> Result<bool, RangeError>
    where
        I: IntoIterator<Item = T>,
    {
        reject(Mutation::AddAll)
    }

    fn retain_all<'a, I>(&mut self, _values: I) -> Result<bool, RangeError>
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        reject(Mutation::RetainAll)
    }

    fn remove_all<'a, I>(&mut self, _values: I) -> Result<bool, RangeError>
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        reject(Mutation::RemoveAll)
    }

    fn clear(&mut self) -> Result<(), RangeError> {
        reject(Mutation::Clear)
    }
}
