//! Errors raised when a raw value fails a refinement
//!
//! Every built-in validating predicate reports failures through
//! [`RefinementError`]: the name of the refinement that rejected the value
//! plus a [`Violation`] describing what was wrong with it.
//!
//! # Example
//!
//! ```rust
//! use flagged::refined::{Refined, Positive, Violation};
//!
//! let err = Refined::<i32, Positive>::new(-1).unwrap_err();
//! assert_eq!(err.refinement(), "positive (> 0)");
//! assert!(matches!(err.violation(), Violation::BelowLower { .. }));
//! assert_eq!(err.to_string(), "positive (> 0): value -1 is below the lower bound 0 (exclusive)");
//! ```

use thiserror::Error;

use super::domain::{Bound, CountRange};

/// A raw value did not satisfy the predicate of the wrapper it was offered to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{refinement}: {violation}")]
pub struct RefinementError {
    refinement: &'static str,
    violation: Violation,
}

impl RefinementError {
    /// Create an error for the refinement described by `refinement`.
    pub fn new(refinement: &'static str, violation: Violation) -> Self {
        Self {
            refinement,
            violation,
        }
    }

    /// Human-readable name of the refinement that rejected the value.
    pub fn refinement(&self) -> &'static str {
        self.refinement
    }

    /// What was wrong with the value.
    pub fn violation(&self) -> &Violation {
        &self.violation
    }

    /// Consume the error, keeping only the violation.
    pub fn into_violation(self) -> Violation {
        self.violation
    }
}

/// The reason a value was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Violation {
    /// The value was zero.
    #[error("value is zero")]
    Zero,

    /// The handle was null.
    #[error("handle is null")]
    Null,

    /// The value has no ordering against the bounds (floating-point NaN).
    #[error("value {value} cannot be ordered")]
    Unordered {
        /// Debug rendering of the offending value.
        value: String,
    },

    /// The value lies below the lower bound.
    #[error("value {value} is below the lower bound {bound}")]
    BelowLower {
        /// Debug rendering of the offending value.
        value: String,
        /// The bound that was crossed.
        bound: Bound,
    },

    /// The value lies above the upper bound.
    #[error("value {value} is above the upper bound {bound}")]
    AboveUpper {
        /// Debug rendering of the offending value.
        value: String,
        /// The bound that was crossed.
        bound: Bound,
    },

    /// A collection held the wrong number of elements.
    #[error("element count {len} is not {expected}")]
    Count {
        /// Number of elements found.
        len: usize,
        /// Number of elements allowed.
        expected: CountRange,
    },

    /// The containers of a tuple do not share one element count.
    #[error("container {position} has {len} elements but the first has {first}")]
    UnequalSizes {
        /// Element count of the first container.
        first: usize,
        /// Zero-based position of the first mismatching container.
        position: usize,
        /// Element count of the mismatching container.
        len: usize,
    },
}
