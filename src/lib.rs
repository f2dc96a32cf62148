//! # Flagged
//!
//! > *Check once, carry the proof.*
//!
//! A Rust library of refinement types: wrappers that enforce an invariant
//! (non-zero, within bounds, sorted, a fixed number of elements, ...) when
//! a value is constructed, and make that invariant visible in the type
//! from then on.
//!
//! ## Philosophy
//!
//! **Flagged** follows *parse, don't validate*:
//! - **Boundaries** turn raw values into refined ones, once
//! - **Signatures** demand the refined type, so the check never repeats
//! - **Conversions** between refinements are proven by the compiler, not re-checked
//!
//! ## Quick Example
//!
//! ```rust
//! use flagged::refined::{Refined, BoundedInclusive, NonZero, Positive, UniqueAndSorted};
//!
//! type Replicas = Refined<u32, BoundedInclusive<1, 9>>;
//!
//! fn divide(total: u64, parts: Refined<u64, NonZero>) -> u64 {
//!     total / parts.get()
//! }
//!
//! let replicas = Replicas::new(3).unwrap();
//! assert!(Replicas::new(12).is_err());
//!
//! // Positive implies NonZero, so no second check is needed
//! let parts = Refined::<u64, Positive>::new(4).unwrap();
//! assert_eq!(divide(100, parts.weaken()), 25);
//!
//! // Some refinements rearrange instead of rejecting
//! let ids = Refined::<Vec<u32>, UniqueAndSorted>::arrange(vec![7, 3, 7, 1]);
//! assert_eq!(ids.get(), &[1, 3, 7]);
//! assert_eq!(*replicas.get(), 3);
//! ```
//!
//! ## Features
//!
//! - `shuffle` (default): the `Shuffled` refinement, backed by `rand`
//! - `serde`: (de)serialization that re-runs the refinement on input
//! - `tracing`: `debug` events for rejected values
//! - `proptest`: `Arbitrary` for refined values and a filtering strategy

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod immutable;
pub mod refined;
pub mod testing;

// Re-exports
pub use immutable::{Immutable, SharedImmutable};
pub use refined::{Predicate, Refined, RefinementError, Violation};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::immutable::{Immutable, SharedImmutable};
    pub use crate::refined::{
        BoundedExclusive, BoundedInclusive, CeiledExclusive, CeiledInclusive, EqualSized,
        FixedRangeInclusive, FixedSized, FlooredExclusive, FlooredInclusive, LessThan, MoreThan,
        Negative, NonEmpty, NonNegative, NonNull, NonPositive, NonZero, Positive, Predicate,
        Refined, RefinementError, Sorted, Unique, UniqueAndSorted, Violation,
    };
    #[cfg(feature = "shuffle")]
    pub use crate::refined::Shuffled;
}
