//! Predefined predicates for common refinement patterns
//!
//! This module provides ready-to-use predicates for:
//! - **Sign constraints**: [`NonZero`], [`Positive`], [`Negative`], [`NonPositive`], [`NonNegative`]
//! - **Range constraints**: [`CeiledInclusive`], [`CeiledExclusive`], [`FlooredInclusive`],
//!   [`FlooredExclusive`], [`BoundedInclusive`], [`BoundedExclusive`]
//! - **Size constraints**: [`NonEmpty`], [`MoreThan`], [`LessThan`], [`FixedSized`],
//!   [`FixedRangeInclusive`]
//! - **Ordering**: [`Sorted`], [`Unique`], [`UniqueAndSorted`], `Shuffled`
//! - **Handles and tuples**: [`NonNull`], [`EqualSized`]
//!
//! # Example
//!
//! ```rust
//! use flagged::refined::{Refined, Positive, NonEmpty, BoundedInclusive};
//!
//! // Positive integers
//! type PositiveI32 = Refined<i32, Positive>;
//! let age = PositiveI32::new(25).unwrap();
//!
//! // Non-empty collections
//! type NonEmptyVec = Refined<Vec<u8>, NonEmpty>;
//! let bytes = NonEmptyVec::new(vec![1]).unwrap();
//!
//! // Range-constrained values
//! type Percentage = Refined<i32, BoundedInclusive<0, 100>>;
//! let pct = Percentage::new(75).unwrap();
//! ```
//!
//! [`NonZero`]: numeric::NonZero
//! [`Positive`]: numeric::Positive
//! [`Negative`]: numeric::Negative
//! [`NonPositive`]: numeric::NonPositive
//! [`NonNegative`]: numeric::NonNegative
//! [`CeiledInclusive`]: numeric::CeiledInclusive
//! [`CeiledExclusive`]: numeric::CeiledExclusive
//! [`FlooredInclusive`]: numeric::FlooredInclusive
//! [`FlooredExclusive`]: numeric::FlooredExclusive
//! [`BoundedInclusive`]: numeric::BoundedInclusive
//! [`BoundedExclusive`]: numeric::BoundedExclusive
//! [`NonEmpty`]: collection::NonEmpty
//! [`MoreThan`]: collection::MoreThan
//! [`LessThan`]: collection::LessThan
//! [`FixedSized`]: collection::FixedSized
//! [`FixedRangeInclusive`]: collection::FixedRangeInclusive
//! [`Sorted`]: order::Sorted
//! [`Unique`]: order::Unique
//! [`UniqueAndSorted`]: order::UniqueAndSorted
//! [`NonNull`]: pointer::NonNull
//! [`EqualSized`]: tuple::EqualSized

pub mod collection;
pub mod numeric;
pub mod order;
pub mod pointer;
pub mod tuple;
