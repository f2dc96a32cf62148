//! Testing utilities for code that uses refined types
//!
//! This module provides assertion macros that name the refinement when they
//! fail, and property-based testing support behind the `proptest` feature.
//!
//! # Examples
//!
//! ## Assertion Macros
//!
//! ```rust
//! use flagged::refined::{Refined, Positive, Violation};
//! use flagged::{assert_refines, assert_rejects};
//!
//! let n = assert_refines!(Refined<i32, Positive>, 42);
//! assert_eq!(*n.get(), 42);
//!
//! let err = assert_rejects!(Refined<i32, Positive>, 0);
//! assert!(matches!(err.violation(), Violation::BelowLower { .. }));
//! ```
//!
//! ## Property Strategies
//!
//! ```rust,ignore
//! use flagged::refined::{Refined, BoundedInclusive};
//! use proptest::prelude::*;
//!
//! proptest! {
//!     #[test]
//!     fn percentages_stay_in_range(p in any::<Refined<i16, BoundedInclusive<0, 100>>>()) {
//!         prop_assert!((0..=100).contains(p.get()));
//!     }
//! }
//! ```

/// Assert that a value satisfies a refinement, yielding the refined value.
///
/// This macro will panic with the rejection if the refinement fails.
///
/// # Example
///
/// ```rust
/// use flagged::refined::{Refined, NonEmpty};
/// use flagged::assert_refines;
///
/// let names = assert_refines!(Refined<Vec<&str>, NonEmpty>, vec!["ada"]);
/// assert_eq!(names.get().len(), 1);
/// ```
#[macro_export]
macro_rules! assert_refines {
    ($refined:ty, $value:expr) => {
        match <$refined>::new($value) {
            Ok(refined) => refined,
            Err(e) => {
                panic!(
                    "Expected {} to accept the value, got rejection: {:?}",
                    stringify!($refined),
                    e
                );
            }
        }
    };
}

/// Assert that a value fails a refinement, yielding the error.
///
/// This macro will panic with the refined value if the refinement passes.
///
/// # Example
///
/// ```rust
/// use flagged::refined::{Refined, FixedSized};
/// use flagged::assert_rejects;
///
/// let err = assert_rejects!(Refined<Vec<u8>, FixedSized<2>>, vec![1, 2, 3]);
/// assert_eq!(err.refinement(), "collection of exactly SIZE");
/// ```
#[macro_export]
macro_rules! assert_rejects {
    ($refined:ty, $value:expr) => {
        match <$refined>::new($value) {
            Err(e) => e,
            Ok(refined) => {
                panic!(
                    "Expected {} to reject the value, got: {:?}",
                    stringify!($refined),
                    refined
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
use crate::refined::{Predicate, Refined};
#[cfg(feature = "proptest")]
use proptest::prelude::*;

/// Values of `T` drawn from `strategy` that satisfy `P`; the rest are filtered out.
///
/// Prefer this over [`Arbitrary`] when the predicate admits only a small
/// share of `T`, so that the filter does not give up.
///
/// # Example
///
/// ```rust,ignore
/// use flagged::refined::FixedSized;
/// use flagged::testing::refined;
/// use proptest::collection::vec;
///
/// let pairs = refined::<_, FixedSized<2>, _>(vec(0u8..10, 2));
/// ```
#[cfg(feature = "proptest")]
pub fn refined<T, P, S>(strategy: S) -> impl Strategy<Value = Refined<T, P>>
where
    T: std::fmt::Debug,
    P: Predicate<T>,
    S: Strategy<Value = T>,
{
    strategy.prop_filter_map(P::description(), |value| Refined::new(value).ok())
}

#[cfg(feature = "proptest")]
impl<T, P> Arbitrary for Refined<T, P>
where
    T: Arbitrary + 'static,
    T::Strategy: 'static,
    P: Predicate<T>,
{
    type Parameters = T::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        refined(any_with::<T>(args)).boxed()
    }
}
