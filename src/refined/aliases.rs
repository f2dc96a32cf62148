//! Type aliases for common refined types
//!
//! This module provides convenient type aliases for commonly used
//! refined type combinations.
//!
//! # Example
//!
//! ```rust
//! use flagged::refined::{NonEmptyString, PositiveI32, Percentage, SortedVec};
//!
//! let name = NonEmptyString::new("Alice".to_string()).unwrap();
//! let age = PositiveI32::new(25).unwrap();
//! let progress = Percentage::new(75).unwrap();
//! let scores = SortedVec::arrange(vec![3, 1, 2]);
//! assert_eq!(scores.get(), &[1, 2, 3]);
//! ```

use super::predicates::collection::NonEmpty;
use super::predicates::numeric::{BoundedInclusive, Negative, NonNegative, NonZero, Positive};
#[cfg(feature = "shuffle")]
use super::predicates::order::Shuffled;
use super::predicates::order::{Sorted, Unique, UniqueAndSorted};
use super::predicates::pointer::NonNull;
use super::Refined;

// ============================================================================
// Signed integer aliases - Positive
// ============================================================================

/// An i8 that is guaranteed to be positive (> 0)
pub type PositiveI8 = Refined<i8, Positive>;

/// An i16 that is guaranteed to be positive (> 0)
pub type PositiveI16 = Refined<i16, Positive>;

/// An i32 that is guaranteed to be positive (> 0)
pub type PositiveI32 = Refined<i32, Positive>;

/// An i64 that is guaranteed to be positive (> 0)
pub type PositiveI64 = Refined<i64, Positive>;

/// An isize that is guaranteed to be positive (> 0)
pub type PositiveIsize = Refined<isize, Positive>;

// ============================================================================
// Signed integer aliases - NonNegative
// ============================================================================

/// An i32 that is guaranteed to be non-negative (>= 0)
pub type NonNegativeI32 = Refined<i32, NonNegative>;

/// An i64 that is guaranteed to be non-negative (>= 0)
pub type NonNegativeI64 = Refined<i64, NonNegative>;

// ============================================================================
// Signed integer aliases - Negative
// ============================================================================

/// An i32 that is guaranteed to be negative (< 0)
pub type NegativeI32 = Refined<i32, Negative>;

/// An i64 that is guaranteed to be negative (< 0)
pub type NegativeI64 = Refined<i64, Negative>;

// ============================================================================
// Non-zero aliases
// ============================================================================

/// An i32 that is guaranteed to be non-zero
pub type NonZeroI32 = Refined<i32, NonZero>;

/// An i64 that is guaranteed to be non-zero
pub type NonZeroI64 = Refined<i64, NonZero>;

/// A u32 that is guaranteed to be non-zero
pub type NonZeroU32 = Refined<u32, NonZero>;

/// A u64 that is guaranteed to be non-zero
pub type NonZeroU64 = Refined<u64, NonZero>;

/// A usize that is guaranteed to be non-zero
pub type NonZeroUsize = Refined<usize, NonZero>;

// ============================================================================
// Floating-point aliases
// ============================================================================

/// An f64 that is guaranteed to be positive (> 0, never NaN)
pub type PositiveF64 = Refined<f64, Positive>;

/// An f64 that is guaranteed to be non-negative (>= 0, never NaN)
pub type NonNegativeF64 = Refined<f64, NonNegative>;

// ============================================================================
// Range aliases
// ============================================================================

/// An integer percentage in `0..=100`
pub type Percentage = Refined<u8, BoundedInclusive<0, 100>>;

/// A network port that is not the reserved port 0
pub type Port = Refined<u16, BoundedInclusive<1, 65535>>;

// ============================================================================
// Collection aliases
// ============================================================================

/// A string with at least one character
pub type NonEmptyString = Refined<String, NonEmpty>;

/// A vector with at least one element
pub type NonEmptyVec<T> = Refined<Vec<T>, NonEmpty>;

/// A vector sorted ascending on construction
pub type SortedVec<T> = Refined<Vec<T>, Sorted>;

/// A vector with later duplicates removed on construction
pub type UniqueVec<T> = Refined<Vec<T>, Unique>;

/// A strictly ascending vector
pub type UniqueSortedVec<T> = Refined<Vec<T>, UniqueAndSorted>;

/// A vector randomly permuted on construction
#[cfg(feature = "shuffle")]
pub type ShuffledVec<T> = Refined<Vec<T>, Shuffled>;

// ============================================================================
// Handle aliases
// ============================================================================

/// A raw pointer that is guaranteed not to be null
pub type NonNullPtr<T> = Refined<*mut T, NonNull>;
