//! Numeric predicates for refined types
//!
//! Sign predicates:
//! - [`NonZero`]: value != 0
//! - [`Positive`]: value > 0
//! - [`Negative`]: value < 0
//! - [`NonPositive`]: value <= 0
//! - [`NonNegative`]: value >= 0
//!
//! Range predicates, parameterized by `i64` const bounds:
//! - [`CeiledInclusive<MAX>`]: value <= MAX
//! - [`CeiledExclusive<MAX>`]: value < MAX
//! - [`FlooredInclusive<MIN>`]: value >= MIN
//! - [`FlooredExclusive<MIN>`]: value > MIN
//! - [`BoundedInclusive<MIN, MAX>`]: MIN <= value <= MAX
//! - [`BoundedExclusive<MIN, MAX>`]: MIN < value < MAX
//!
//! # Example
//!
//! ```rust
//! use flagged::refined::{Refined, Positive, CeiledInclusive, CeiledExclusive};
//!
//! type PositiveI32 = Refined<i32, Positive>;
//! assert_eq!(*PositiveI32::new(5).unwrap().get(), 5);
//! assert!(PositiveI32::new(0).is_err());
//!
//! assert!(Refined::<i32, CeiledInclusive<5>>::new(5).is_ok());
//! assert!(Refined::<i32, CeiledExclusive<5>>::new(5).is_err());
//! assert!(Refined::<i32, CeiledExclusive<5>>::new(4).is_ok());
//! ```
//!
//! Degenerate bounds are rejected when the type is used, not at runtime:
//!
//! ```rust,compile_fail
//! use flagged::refined::{Refined, BoundedInclusive};
//!
//! let never = Refined::<i32, BoundedInclusive<5, 3>>::new(4);
//! ```
//!
//! ```rust,compile_fail
//! use flagged::refined::{Refined, BoundedExclusive};
//!
//! let never = Refined::<i32, BoundedExclusive<3, 3>>::new(3);
//! ```

use std::cmp::Ordering;
use std::fmt;

use super::super::domain::{sealed, Bound, Domain, HasDomain, Interval};
use super::super::error::RefinementError;
use super::super::Predicate;

/// A value that can be ordered against the `i64` bounds of numeric predicates.
///
/// Returns `None` when no ordering exists (floating-point NaN); every numeric
/// predicate rejects such values.
pub trait Numeric: fmt::Debug {
    /// Compare `self` with `bound`.
    fn compare_to(&self, bound: i64) -> Option<Ordering>;
}

macro_rules! impl_numeric_via_i128 {
    ($($ty:ty),+) => {
        $(
            impl Numeric for $ty {
                #[inline]
                fn compare_to(&self, bound: i64) -> Option<Ordering> {
                    Some((*self as i128).cmp(&i128::from(bound)))
                }
            }
        )+
    };
}

impl_numeric_via_i128!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

impl Numeric for u128 {
    #[inline]
    fn compare_to(&self, bound: i64) -> Option<Ordering> {
        match i128::try_from(*self) {
            Ok(v) => Some(v.cmp(&i128::from(bound))),
            Err(_) => Some(Ordering::Greater),
        }
    }
}

/// 2^63, the first float past every `i64`.
const I64_END: f64 = 9_223_372_036_854_775_808.0;

// `bound as f64` rounds once |bound| exceeds 2^53, so compare the integral
// part as an integer and let the fraction break ties.
fn compare_float(value: f64, bound: i64) -> Option<Ordering> {
    if value.is_nan() {
        return None;
    }
    if value >= I64_END {
        return Some(Ordering::Greater);
    }
    if value < -I64_END {
        return Some(Ordering::Less);
    }

    let whole = value.trunc();
    // In range and integral, so the cast is exact.
    match (whole as i64).cmp(&bound) {
        Ordering::Equal => (value - whole).partial_cmp(&0.0),
        unequal => Some(unequal),
    }
}

impl Numeric for f32 {
    #[inline]
    fn compare_to(&self, bound: i64) -> Option<Ordering> {
        compare_float(f64::from(*self), bound)
    }
}

impl Numeric for f64 {
    #[inline]
    fn compare_to(&self, bound: i64) -> Option<Ordering> {
        compare_float(*self, bound)
    }
}

impl<T: Numeric + ?Sized> Numeric for &T {
    #[inline]
    fn compare_to(&self, bound: i64) -> Option<Ordering> {
        (**self).compare_to(bound)
    }
}

/// Value must be non-zero (!= 0)
#[derive(Debug, Clone, Copy)]
pub struct NonZero;

/// Value must be positive (> 0)
#[derive(Debug, Clone, Copy)]
pub struct Positive;

/// Value must be negative (< 0)
#[derive(Debug, Clone, Copy)]
pub struct Negative;

/// Value must be zero or negative (<= 0)
#[derive(Debug, Clone, Copy)]
pub struct NonPositive;

/// Value must be zero or positive (>= 0)
#[derive(Debug, Clone, Copy)]
pub struct NonNegative;

/// Value must be at most `MAX` (<= MAX)
#[derive(Debug, Clone, Copy)]
pub struct CeiledInclusive<const MAX: i64>;

/// Value must be below `MAX` (< MAX)
#[derive(Debug, Clone, Copy)]
pub struct CeiledExclusive<const MAX: i64>;

/// Value must be at least `MIN` (>= MIN)
#[derive(Debug, Clone, Copy)]
pub struct FlooredInclusive<const MIN: i64>;

/// Value must be above `MIN` (> MIN)
#[derive(Debug, Clone, Copy)]
pub struct FlooredExclusive<const MIN: i64>;

/// Value must lie in `[MIN, MAX]`. Requires `MIN <= MAX`.
///
/// # Example
///
/// ```rust
/// use flagged::refined::{Refined, BoundedInclusive};
///
/// type Digit = Refined<u8, BoundedInclusive<0, 9>>;
/// assert!(Digit::new(9).is_ok());
/// assert!(Digit::new(10).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BoundedInclusive<const MIN: i64, const MAX: i64>;

/// Value must lie in `(MIN, MAX)`. Requires `MIN < MAX`.
#[derive(Debug, Clone, Copy)]
pub struct BoundedExclusive<const MIN: i64, const MAX: i64>;

impl NonZero {
    const INTERVAL: Interval = Interval::UNBOUNDED.without_zero();
}

impl Positive {
    const INTERVAL: Interval = Interval::above(0);
}

impl Negative {
    const INTERVAL: Interval = Interval::below(0);
}

impl NonPositive {
    const INTERVAL: Interval = Interval::at_most(0);
}

impl NonNegative {
    const INTERVAL: Interval = Interval::at_least(0);
}

impl<const MAX: i64> CeiledInclusive<MAX> {
    const INTERVAL: Interval = Interval::at_most(MAX);
}

impl<const MAX: i64> CeiledExclusive<MAX> {
    const INTERVAL: Interval = Interval::below(MAX);
}

impl<const MIN: i64> FlooredInclusive<MIN> {
    const INTERVAL: Interval = Interval::at_least(MIN);
}

impl<const MIN: i64> FlooredExclusive<MIN> {
    const INTERVAL: Interval = Interval::above(MIN);
}

impl<const MIN: i64, const MAX: i64> BoundedInclusive<MIN, MAX> {
    const INTERVAL: Interval = {
        assert!(MIN <= MAX, "BoundedInclusive requires MIN <= MAX");
        Interval::new(Bound::Inclusive(MIN), Bound::Inclusive(MAX))
    };
}

impl<const MIN: i64, const MAX: i64> BoundedExclusive<MIN, MAX> {
    const INTERVAL: Interval = {
        assert!(MIN < MAX, "BoundedExclusive requires MIN < MAX");
        Interval::new(Bound::Exclusive(MIN), Bound::Exclusive(MAX))
    };
}

// Wires a marker's INTERVAL into both the runtime check and the conversion
// lattice, so the two can never disagree.
macro_rules! numeric_predicate {
    ($pred:ident $(<$(const $param:ident),+>)?, $desc:expr) => {
        impl$(<$(const $param: i64),+>)? sealed::Sealed for $pred$(<$($param),+>)? {}

        impl$(<$(const $param: i64),+>)? HasDomain for $pred$(<$($param),+>)? {
            const DOMAIN: Domain = Domain::Numeric(Self::INTERVAL);
        }

        impl<T: Numeric $($(, const $param: i64)+)?> Predicate<T> for $pred$(<$($param),+>)? {
            type Error = RefinementError;

            fn check(value: &T) -> Result<(), Self::Error> {
                Self::INTERVAL
                    .admit(value)
                    .map_err(|violation| RefinementError::new($desc, violation))
            }

            fn description() -> &'static str {
                $desc
            }
        }
    };
}

numeric_predicate!(NonZero, "non-zero (!= 0)");
numeric_predicate!(Positive, "positive (> 0)");
numeric_predicate!(Negative, "negative (< 0)");
numeric_predicate!(NonPositive, "non-positive (<= 0)");
numeric_predicate!(NonNegative, "non-negative (>= 0)");
numeric_predicate!(CeiledInclusive<const MAX>, "ceiled inclusive (<= MAX)");
numeric_predicate!(CeiledExclusive<const MAX>, "ceiled exclusive (< MAX)");
numeric_predicate!(FlooredInclusive<const MIN>, "floored inclusive (>= MIN)");
numeric_predicate!(FlooredExclusive<const MIN>, "floored exclusive (> MIN)");
numeric_predicate!(BoundedInclusive<const MIN, const MAX>, "bounded inclusive (MIN <= x <= MAX)");
numeric_predicate!(BoundedExclusive<const MIN, const MAX>, "bounded exclusive (MIN < x < MAX)");
