//! Static domains and the conversion lattice between refinements
//!
//! Every numeric and size refinement describes, as an associated constant,
//! the set of values it admits: an [`Interval`] for numeric predicates and a
//! [`CountRange`] for size predicates. A refined value can be re-labelled
//! with a weaker predicate exactly when the source domain is contained in the
//! target domain, and that containment is decided by const evaluation:
//!
//! ```rust
//! use flagged::refined::{Refined, FlooredInclusive, NonZero, Positive};
//!
//! let floor = Refined::<i32, FlooredInclusive<1>>::new(7).unwrap();
//! let positive: Refined<i32, Positive> = floor.weaken();
//! let non_zero: Refined<i32, NonZero> = positive.weaken();
//! assert_eq!(*non_zero.get(), 7);
//! ```
//!
//! A floor of zero does not exclude zero, so this does not compile:
//!
//! ```rust,compile_fail
//! use flagged::refined::{Refined, FlooredInclusive, NonZero};
//!
//! let floor = Refined::<i32, FlooredInclusive<0>>::new(7).unwrap();
//! let non_zero: Refined<i32, NonZero> = floor.weaken();
//! ```
//!
//! An inclusive ceiling admits the bound itself, so it never fits an
//! exclusive ceiling at the same bound:
//!
//! ```rust,compile_fail
//! use flagged::refined::{Refined, CeiledExclusive, CeiledInclusive};
//!
//! let at_most = Refined::<i32, CeiledInclusive<5>>::new(5).unwrap();
//! let below: Refined<i32, CeiledExclusive<5>> = at_most.weaken();
//! ```
//!
//! An exact size is not larger than itself:
//!
//! ```rust,compile_fail
//! use flagged::refined::{Refined, FixedSized, MoreThan};
//!
//! let pair = Refined::<Vec<u8>, FixedSized<2>>::new(vec![1, 2]).unwrap();
//! let larger: Refined<Vec<u8>, MoreThan<2>> = pair.weaken();
//! ```
//!
//! Numeric and size domains never imply one another, even for a type that is
//! both a number and a collection:
//!
//! ```rust,compile_fail
//! use std::cmp::Ordering;
//! use flagged::refined::{ElementCount, NonEmpty, Numeric, Positive, Refined};
//!
//! #[derive(Debug)]
//! struct Crates(usize);
//!
//! impl Numeric for Crates {
//!     fn compare_to(&self, bound: i64) -> Option<Ordering> {
//!         self.0.compare_to(bound)
//!     }
//! }
//!
//! impl ElementCount for Crates {
//!     fn element_count(&self) -> usize {
//!         self.0
//!     }
//! }
//!
//! let stock = Refined::<Crates, Positive>::new(Crates(3)).unwrap();
//! let nope: Refined<Crates, NonEmpty> = stock.weaken();
//! ```
//!
//! The rules only compare bounds, never the step between representable
//! values, so they hold for floats as well as integers.

use std::fmt;

use super::error::Violation;
use super::predicates::numeric::Numeric;

/// One side of a numeric interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bound {
    /// No bound on this side.
    Unbounded,
    /// The bound value itself is admitted.
    Inclusive(i64),
    /// The bound value itself is rejected.
    Exclusive(i64),
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Unbounded => write!(f, "unbounded"),
            Bound::Inclusive(b) => write!(f, "{} (inclusive)", b),
            Bound::Exclusive(b) => write!(f, "{} (exclusive)", b),
        }
    }
}

/// The set of numbers a numeric refinement admits.
///
/// A lower and an upper [`Bound`], optionally with zero removed
/// (that is how [`NonZero`](super::NonZero) is described).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    lower: Bound,
    upper: Bound,
    excludes_zero: bool,
}

impl Interval {
    /// Every number.
    pub const UNBOUNDED: Self = Self::new(Bound::Unbounded, Bound::Unbounded);

    /// An interval between two bounds.
    pub const fn new(lower: Bound, upper: Bound) -> Self {
        Self {
            lower,
            upper,
            excludes_zero: false,
        }
    }

    /// `[min, +inf)`
    pub const fn at_least(min: i64) -> Self {
        Self::new(Bound::Inclusive(min), Bound::Unbounded)
    }

    /// `(min, +inf)`
    pub const fn above(min: i64) -> Self {
        Self::new(Bound::Exclusive(min), Bound::Unbounded)
    }

    /// `(-inf, max]`
    pub const fn at_most(max: i64) -> Self {
        Self::new(Bound::Unbounded, Bound::Inclusive(max))
    }

    /// `(-inf, max)`
    pub const fn below(max: i64) -> Self {
        Self::new(Bound::Unbounded, Bound::Exclusive(max))
    }

    /// The same interval with zero removed.
    pub const fn without_zero(self) -> Self {
        Self {
            excludes_zero: true,
            ..self
        }
    }

    /// The lower bound.
    pub const fn lower(&self) -> Bound {
        self.lower
    }

    /// The upper bound.
    pub const fn upper(&self) -> Bound {
        self.upper
    }

    /// Whether zero was removed explicitly.
    pub const fn excludes_zero(&self) -> bool {
        self.excludes_zero
    }

    /// Whether zero can be a member of this interval.
    pub const fn may_contain_zero(&self) -> bool {
        let lower_ok = match self.lower {
            Bound::Unbounded => true,
            Bound::Inclusive(a) => a <= 0,
            Bound::Exclusive(a) => a < 0,
        };
        let upper_ok = match self.upper {
            Bound::Unbounded => true,
            Bound::Inclusive(b) => b >= 0,
            Bound::Exclusive(b) => b > 0,
        };
        !self.excludes_zero && lower_ok && upper_ok
    }

    /// Whether every member of `self` is a member of `other`.
    pub const fn is_within(&self, other: &Interval) -> bool {
        lower_within(self.lower, other.lower)
            && upper_within(self.upper, other.upper)
            && (!other.excludes_zero || !self.may_contain_zero())
    }

    /// Check a runtime value against this interval.
    pub fn admit<T: Numeric + ?Sized>(&self, value: &T) -> Result<(), Violation> {
        let Some(sign) = value.compare_to(0) else {
            return Err(Violation::Unordered {
                value: format!("{:?}", value),
            });
        };
        if self.excludes_zero && sign.is_eq() {
            return Err(Violation::Zero);
        }

        let above_lower = match self.lower {
            Bound::Unbounded => true,
            Bound::Inclusive(min) => value.compare_to(min).is_some_and(|o| o.is_ge()),
            Bound::Exclusive(min) => value.compare_to(min).is_some_and(|o| o.is_gt()),
        };
        if !above_lower {
            return Err(Violation::BelowLower {
                value: format!("{:?}", value),
                bound: self.lower,
            });
        }

        let below_upper = match self.upper {
            Bound::Unbounded => true,
            Bound::Inclusive(max) => value.compare_to(max).is_some_and(|o| o.is_le()),
            Bound::Exclusive(max) => value.compare_to(max).is_some_and(|o| o.is_lt()),
        };
        if !below_upper {
            return Err(Violation::AboveUpper {
                value: format!("{:?}", value),
                bound: self.upper,
            });
        }

        Ok(())
    }
}

const fn lower_within(src: Bound, dst: Bound) -> bool {
    match (src, dst) {
        (_, Bound::Unbounded) => true,
        (Bound::Unbounded, _) => false,
        (Bound::Inclusive(a), Bound::Exclusive(b)) => a > b,
        (Bound::Inclusive(a), Bound::Inclusive(b))
        | (Bound::Exclusive(a), Bound::Inclusive(b))
        | (Bound::Exclusive(a), Bound::Exclusive(b)) => a >= b,
    }
}

const fn upper_within(src: Bound, dst: Bound) -> bool {
    match (src, dst) {
        (_, Bound::Unbounded) => true,
        (Bound::Unbounded, _) => false,
        (Bound::Inclusive(a), Bound::Exclusive(b)) => a < b,
        (Bound::Inclusive(a), Bound::Inclusive(b))
        | (Bound::Exclusive(a), Bound::Inclusive(b))
        | (Bound::Exclusive(a), Bound::Exclusive(b)) => a <= b,
    }
}

/// The element counts a size refinement admits: `min <= n < max`.
///
/// Stored as `u128` so `SIZE + 1` never overflows for any `usize` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CountRange {
    min: u128,
    max_exclusive: Option<u128>,
}

impl CountRange {
    /// At least `min` elements.
    pub const fn at_least(min: usize) -> Self {
        Self {
            min: min as u128,
            max_exclusive: None,
        }
    }

    /// Strictly more than `size` elements.
    pub const fn more_than(size: usize) -> Self {
        Self {
            min: size as u128 + 1,
            max_exclusive: None,
        }
    }

    /// Strictly fewer than `size` elements.
    pub const fn fewer_than(size: usize) -> Self {
        Self {
            min: 0,
            max_exclusive: Some(size as u128),
        }
    }

    /// Exactly `size` elements.
    pub const fn exactly(size: usize) -> Self {
        Self {
            min: size as u128,
            max_exclusive: Some(size as u128 + 1),
        }
    }

    /// Between `min` and `max` elements, both inclusive.
    pub const fn between(min: usize, max: usize) -> Self {
        Self {
            min: min as u128,
            max_exclusive: Some(max as u128 + 1),
        }
    }

    /// Whether a collection of `len` elements is admitted.
    pub const fn admits(&self, len: usize) -> bool {
        let len = len as u128;
        len >= self.min
            && match self.max_exclusive {
                Some(max) => len < max,
                None => true,
            }
    }

    /// Whether every count admitted by `self` is admitted by `other`.
    pub const fn is_within(&self, other: &CountRange) -> bool {
        self.min >= other.min
            && match (self.max_exclusive, other.max_exclusive) {
                (_, None) => true,
                (None, Some(_)) => false,
                (Some(a), Some(b)) => a <= b,
            }
    }

    /// Check a runtime element count against this range.
    pub fn admit(&self, len: usize) -> Result<(), Violation> {
        if self.admits(len) {
            Ok(())
        } else {
            Err(Violation::Count {
                len,
                expected: *self,
            })
        }
    }
}

impl fmt::Display for CountRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max_exclusive {
            None => write!(f, "at least {}", self.min),
            Some(max) if max == self.min + 1 => write!(f, "exactly {}", self.min),
            Some(max) if self.min == 0 => write!(f, "fewer than {}", max),
            Some(max) if max <= self.min => write!(f, "in an empty range"),
            Some(max) => write!(f, "between {} and {}", self.min, max - 1),
        }
    }
}

/// What a refinement admits, for the purposes of conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    /// A numeric refinement.
    Numeric(Interval),
    /// A collection-size refinement.
    Count(CountRange),
}

impl Domain {
    /// Whether every value admitted by `self` is admitted by `other`.
    pub const fn is_within(&self, other: &Domain) -> bool {
        match (self, other) {
            (Domain::Numeric(a), Domain::Numeric(b)) => a.is_within(b),
            (Domain::Count(a), Domain::Count(b)) => a.is_within(b),
            _ => false,
        }
    }
}

pub(crate) mod sealed {
    /// Implemented only next to a predicate's `check`, by the macros that
    /// derive both from the same constant.
    pub trait Sealed {}
}

/// A predicate whose admitted values are known at compile time.
///
/// This trait is sealed. A declared domain is only trustworthy when `check`
/// enforces it, so only the numeric and size predicates of this crate, whose
/// checks are generated from `DOMAIN` itself, implement it. A predicate
/// defined elsewhere can still build `Refined` values but cannot take part in
/// [`weaken`](super::Refined::weaken):
///
/// ```rust,compile_fail
/// use flagged::refined::{Domain, HasDomain, Interval, Predicate};
///
/// struct Anything;
///
/// impl Predicate<i32> for Anything {
///     type Error = ();
///     fn check(_: &i32) -> Result<(), ()> {
///         Ok(())
///     }
/// }
///
/// impl HasDomain for Anything {
///     const DOMAIN: Domain = Domain::Numeric(Interval::above(0));
/// }
/// ```
///
/// Degenerate const parameters are asserted inside `DOMAIN`, so such an
/// instantiation fails to compile as soon as it is used.
pub trait HasDomain: sealed::Sealed {
    /// The admitted values.
    const DOMAIN: Domain;
}

/// Proof that every value admitted by `Self` is admitted by `Q`.
///
/// The single blanket implementation covers every pair of [`HasDomain`]
/// predicates. Mentioning `PROOF` forces the containment check; an unsound
/// pair fails const evaluation and therefore compilation.
pub trait Implies<Q: ?Sized> {
    /// Evaluates to `()` when the implication holds and fails to compile otherwise.
    const PROOF: ();
}

impl<P: HasDomain, Q: HasDomain> Implies<Q> for P {
    const PROOF: () = assert!(
        P::DOMAIN.is_within(&Q::DOMAIN),
        "source refinement does not imply the target refinement"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    const POSITIVE: Interval = Interval::above(0);
    const NON_NEGATIVE: Interval = Interval::at_least(0);
    const NON_ZERO: Interval = Interval::UNBOUNDED.without_zero();

    #[test]
    fn test_sign_lattice() {
        assert!(POSITIVE.is_within(&NON_ZERO));
        assert!(POSITIVE.is_within(&NON_NEGATIVE));
        assert!(!NON_NEGATIVE.is_within(&POSITIVE));
        assert!(!NON_NEGATIVE.is_within(&NON_ZERO));
        assert!(!NON_ZERO.is_within(&POSITIVE));
        assert!(Interval::below(0).is_within(&NON_ZERO));
    }

    #[test]
    fn test_floor_to_non_zero() {
        assert!(Interval::at_least(1).is_within(&NON_ZERO));
        assert!(!Interval::at_least(0).is_within(&NON_ZERO));
        assert!(Interval::above(0).is_within(&NON_ZERO));
        assert!(!Interval::above(-1).is_within(&NON_ZERO));
    }

    #[test]
    fn test_ceiling_to_non_zero() {
        assert!(Interval::at_most(-1).is_within(&NON_ZERO));
        assert!(!Interval::at_most(0).is_within(&NON_ZERO));
        assert!(Interval::below(0).is_within(&NON_ZERO));
        assert!(!Interval::below(1).is_within(&NON_ZERO));
    }

    #[test]
    fn test_bounded_to_non_zero() {
        let inclusive = |a, b| Interval::new(Bound::Inclusive(a), Bound::Inclusive(b));
        let exclusive = |a, b| Interval::new(Bound::Exclusive(a), Bound::Exclusive(b));
        assert!(inclusive(1, 5).is_within(&NON_ZERO));
        assert!(inclusive(-5, -1).is_within(&NON_ZERO));
        assert!(!inclusive(-1, 1).is_within(&NON_ZERO));
        assert!(!inclusive(0, 5).is_within(&NON_ZERO));
        assert!(exclusive(0, 5).is_within(&NON_ZERO));
        assert!(exclusive(-5, 0).is_within(&NON_ZERO));
        assert!(!exclusive(-1, 5).is_within(&NON_ZERO));
    }

    #[test]
    fn test_inclusive_into_exclusive_needs_strict_bound() {
        assert!(!Interval::at_most(5).is_within(&Interval::below(5)));
        assert!(Interval::at_most(4).is_within(&Interval::below(5)));
        assert!(Interval::below(5).is_within(&Interval::at_most(5)));
        assert!(Interval::below(5).is_within(&Interval::below(5)));
        assert!(!Interval::at_least(5).is_within(&Interval::above(5)));
        assert!(Interval::at_least(6).is_within(&Interval::above(5)));
        assert!(Interval::above(5).is_within(&Interval::at_least(5)));
    }

    #[test]
    fn test_unbounded_side_never_fits_bounded_side() {
        assert!(!Interval::at_least(0).is_within(&Interval::new(
            Bound::Inclusive(0),
            Bound::Inclusive(10)
        )));
        assert!(Interval::new(Bound::Inclusive(0), Bound::Inclusive(10))
            .is_within(&Interval::at_least(0)));
    }

    #[test]
    fn test_admit() {
        let interval = Interval::new(Bound::Inclusive(3), Bound::Inclusive(5));
        assert!(interval.admit(&3).is_ok());
        assert!(interval.admit(&5).is_ok());
        assert_eq!(
            interval.admit(&2),
            Err(Violation::BelowLower {
                value: "2".to_string(),
                bound: Bound::Inclusive(3)
            })
        );
        assert_eq!(
            interval.admit(&6),
            Err(Violation::AboveUpper {
                value: "6".to_string(),
                bound: Bound::Inclusive(5)
            })
        );
        assert_eq!(NON_ZERO.admit(&0), Err(Violation::Zero));
        assert!(matches!(
            NON_ZERO.admit(&f64::NAN),
            Err(Violation::Unordered { .. })
        ));
    }

    #[test]
    fn test_count_ranges() {
        let non_empty = CountRange::at_least(1);
        assert!(CountRange::exactly(3).is_within(&non_empty));
        assert!(!CountRange::exactly(0).is_within(&non_empty));
        assert!(CountRange::exactly(3).is_within(&CountRange::more_than(2)));
        assert!(!CountRange::exactly(2).is_within(&CountRange::more_than(2)));
        assert!(CountRange::exactly(2).is_within(&CountRange::fewer_than(3)));
        assert!(!CountRange::fewer_than(3).is_within(&non_empty));
        assert!(CountRange::between(2, 4).is_within(&CountRange::more_than(1)));
        assert!(!CountRange::more_than(1).is_within(&CountRange::between(2, 4)));
        assert!(CountRange::exactly(usize::MAX).is_within(&CountRange::at_least(1)));
    }

    #[test]
    fn test_count_admits() {
        let range = CountRange::between(2, 4);
        assert!(!range.admits(1));
        assert!(range.admits(2));
        assert!(range.admits(4));
        assert!(!range.admits(5));
        assert!(!CountRange::fewer_than(0).admits(0));
    }

    #[test]
    fn test_count_display() {
        assert_eq!(CountRange::at_least(1).to_string(), "at least 1");
        assert_eq!(CountRange::more_than(2).to_string(), "at least 3");
        assert_eq!(CountRange::exactly(2).to_string(), "exactly 2");
        assert_eq!(CountRange::fewer_than(4).to_string(), "fewer than 4");
        assert_eq!(CountRange::between(2, 5).to_string(), "between 2 and 5");
    }

    #[test]
    fn test_mixed_domains_never_nest() {
        let numeric = Domain::Numeric(POSITIVE);
        let count = Domain::Count(CountRange::at_least(1));
        assert!(!numeric.is_within(&count));
        assert!(!count.is_within(&numeric));
        assert!(numeric.is_within(&numeric));
    }
}
