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

//! Errors reported by range operations.
//!
//! Ranges are immutable, so the only failure a caller can provoke is an
//! attempt to modify one through the `MutableCollection` surface.

/// The mutating entry point that was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mutation {
    /// Inserting a single value.
    Add,
    /// Removing a single value.
    Remove,
    /// Inserting every value of a collection.
    AddAll,
    /// Keeping only the values of a collection.
    RetainAll,
    /// Removing every value of a collection.
    RemoveAll,
    /// Removing all values.
    Clear,
}

impl Mutation {
    /// Returns the name of the operation as it appears in the API.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Mutation::Add => "add",
            Mutation::Remove => "remove",
            Mutation::AddAll => "add_all",
            Mutation::RetainAll => "retain_all",
            Mutation::RemoveAll => "remove_all",
            Mutation::Clear => "clear",
        }
    }
}

impl std::fmt::Display for Mutation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The error type for operations on a `SteppedRange`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeError {
    /// A mutating operation was called on an immutable range.
    UnsupportedOperation(Mutation),
}

impl std::fmt::Display for RangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RangeError::UnsupportedOperation(op) => {
                write!(f, "Unsupported operation `{}`: a range cannot be modified", op)
            }
        }
    }
}

impl std::error::Error for RangeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutation_names() {
        assert_eq!(Mutation::Add.name(), "add");
        assert_eq!(Mutation::RetainAll.name(), "retain_all");
        assert_eq!(format!("{}", Mutation::Clear), "clear");
    }

    #[test]
    fn test_display() {
        let err = RangeError::UnsupportedOperation(Mutation::RemoveAll);
        assert_eq!(
            err.to_string(),
            "Unsupported operation `remove_all`: a range cannot be modified"
        );
    }

    #[test]
    fn test_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&RangeError::UnsupportedOperation(Mutation::Add));
    }
}
