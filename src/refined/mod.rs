//! Refined types: invariants checked once, carried in the type
//!
//! This module implements the "parse, don't validate" pattern:
//! a raw value is offered to a wrapper at a trust boundary, the wrapper
//! enforces its predicate, and from then on the type itself proves the
//! invariant.
//!
//! # Philosophy
//!
//! Instead of scattering checks throughout your code:
//!
//! ```rust,ignore
//! fn schedule(workers: i32, jobs: Vec<u32>) -> Result<Plan, Error> {
//!     if workers <= 0 {
//!         return Err(Error::NoWorkers);
//!     }
//!     if jobs.is_empty() {
//!         return Err(Error::NothingToDo);
//!     }
//!     // and again in every helper that receives them...
//! }
//! ```
//!
//! Put the invariant in the signature:
//!
//! ```rust,ignore
//! use flagged::refined::{Refined, NonEmpty, Positive};
//!
//! fn schedule(workers: Refined<i32, Positive>, jobs: Refined<Vec<u32>, NonEmpty>) -> Plan {
//!     // workers > 0 and jobs is non-empty, by construction
//! }
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use flagged::refined::{Refined, NonEmpty, Positive, Sorted};
//!
//! type PositiveI32 = Refined<i32, Positive>;
//! type NonEmptyVec = Refined<Vec<u32>, NonEmpty>;
//!
//! // Validate at the boundary
//! let workers = PositiveI32::new(4).unwrap();
//! let jobs = NonEmptyVec::new(vec![3, 1, 2]).unwrap();
//! assert!(PositiveI32::new(0).is_err());
//!
//! // Some refinements rearrange instead of rejecting
//! let ordered = Refined::<Vec<u32>, Sorted>::arrange(jobs.into_inner());
//! assert_eq!(ordered.get(), &[1, 2, 3]);
//! assert_eq!(*workers.get(), 4);
//! ```
//!
//! # Conversions
//!
//! A refined value converts into a weaker refinement without a second
//! check. Whether one refinement implies another is decided while
//! compiling, see [`domain`]:
//!
//! ```rust
//! use flagged::refined::{Refined, BoundedInclusive, NonNegative, CeiledExclusive};
//!
//! let percent = Refined::<u8, BoundedInclusive<0, 100>>::new(42).unwrap();
//! let sign: Refined<u8, NonNegative> = percent.weaken();
//! let ceiling = Refined::<u8, CeiledExclusive<101>>::from_refined(percent);
//! assert_eq!(sign.get(), ceiling.get());
//! ```
//!
//! # Custom Predicates
//!
//! ```rust
//! use flagged::refined::{Refined, Predicate};
//!
//! pub struct Lowercase;
//!
//! impl Predicate<String> for Lowercase {
//!     type Error = &'static str;
//!
//!     fn check(value: &String) -> Result<(), Self::Error> {
//!         if value.chars().all(|c| !c.is_uppercase()) {
//!             Ok(())
//!         } else {
//!             Err("must be lowercase")
//!         }
//!     }
//!
//!     fn normalize(value: String) -> String {
//!         value.trim().to_string()
//!     }
//! }
//!
//! let tag = Refined::<String, Lowercase>::new("  release ".to_string()).unwrap();
//! assert_eq!(tag.get(), "release");
//! assert!(Refined::<String, Lowercase>::new("Release".to_string()).is_err());
//! ```

mod aliases;
pub mod domain;
pub mod error;
pub mod predicates;
#[cfg(feature = "serde")]
mod serde_impl;

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

// Re-export core types
pub use aliases::*;
pub use domain::{Bound, CountRange, Domain, HasDomain, Implies, Interval};
pub use error::{RefinementError, Violation};
pub use predicates::collection::{
    ElementCount, FixedRangeInclusive, FixedSized, LessThan, MoreThan, NonEmpty,
};
pub use predicates::numeric::{
    BoundedExclusive, BoundedInclusive, CeiledExclusive, CeiledInclusive, FlooredExclusive,
    FlooredInclusive, Negative, NonNegative, NonPositive, NonZero, Numeric, Positive,
};
#[cfg(feature = "shuffle")]
pub use predicates::order::Shuffled;
pub use predicates::order::{Arrange, Sorted, Unique, UniqueAndSorted};
pub use predicates::pointer::{NonNull, Nullable};
pub use predicates::tuple::{ContainerTuple, EqualSized};

/// A predicate that constrains values of type T.
///
/// Predicates are stateless marker types; the values live in
/// [`Refined<T, P>`]. Construction runs [`normalize`](Predicate::normalize)
/// and then [`check`](Predicate::check) on the result.
///
/// Most predicates only check and keep the default identity `normalize`.
/// Predicates that establish their invariant by rearranging the value
/// (such as [`Sorted`]) do their work in `normalize` and use
/// [`Infallible`] as their error.
///
/// # Example
///
/// ```rust
/// use flagged::refined::Predicate;
///
/// pub struct Even;
///
/// impl Predicate<i32> for Even {
///     type Error = &'static str;
///
///     fn check(value: &i32) -> Result<(), Self::Error> {
///         if value % 2 == 0 {
///             Ok(())
///         } else {
///             Err("value must be even")
///         }
///     }
/// }
/// ```
pub trait Predicate<T>: Send + Sync + 'static {
    /// Error returned when the predicate fails
    type Error: fmt::Debug + Send + Sync;

    /// Check if the value satisfies the predicate
    fn check(value: &T) -> Result<(), Self::Error>;

    /// Bring a raw value into shape before it is checked.
    fn normalize(value: T) -> T {
        value
    }

    /// Human-readable description of what this predicate requires
    fn description() -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// A value of type T that is guaranteed to satisfy predicate P.
///
/// `Refined` provides the "parse, don't validate" pattern:
/// - Validate once at construction
/// - Access freely without runtime checks
/// - Types document invariants
///
/// There is no way to mutate the value in place; [`try_map`](Refined::try_map)
/// consumes the wrapper and checks the result again. Nor is there an implicit
/// conversion to `T`: borrow with [`get`](Refined::get) or [`AsRef`], take
/// ownership with [`into_inner`](Refined::into_inner).
///
/// # Memory Layout
///
/// `Refined<T, P>` has the same memory layout as `T` (zero overhead).
/// The `PhantomData<P>` is zero-sized.
///
/// # Example
///
/// ```rust
/// use flagged::refined::{Refined, NonEmpty};
///
/// type NonEmptyString = Refined<String, NonEmpty>;
///
/// fn greet(name: NonEmptyString) {
///     // name is guaranteed non-empty - no check needed!
///     println!("Hello, {}!", name.get());
/// }
///
/// // At the boundary, we validate
/// let name = NonEmptyString::new("Alice".to_string()).unwrap();
/// greet(name);
/// ```
pub struct Refined<T, P: Predicate<T>> {
    value: T,
    _predicate: PhantomData<P>,
}

impl<T, P: Predicate<T>> Refined<T, P> {
    /// Create a new refined value, normalizing and then checking it.
    ///
    /// Returns `Ok(Refined)` if the predicate passes,
    /// `Err(P::Error)` if it fails.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flagged::refined::{Refined, Positive};
    ///
    /// let positive = Refined::<i32, Positive>::new(42);
    /// assert!(positive.is_ok());
    ///
    /// let not_positive = Refined::<i32, Positive>::new(-5);
    /// assert!(not_positive.is_err());
    /// ```
    pub fn new(value: T) -> Result<Self, P::Error> {
        let value = P::normalize(value);
        match P::check(&value) {
            Ok(()) => Ok(Self::new_unchecked(value)),
            Err(error) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    refinement = P::description(),
                    ?error,
                    "value rejected by refinement"
                );
                Err(error)
            }
        }
    }

    /// Get a reference to the inner value.
    ///
    /// This is zero-cost - no runtime check.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flagged::refined::{Refined, Positive};
    ///
    /// let n = Refined::<i32, Positive>::new(42).unwrap();
    /// assert_eq!(*n.get(), 42);
    /// ```
    #[inline]
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Consume the refined value, returning the inner value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flagged::refined::{Refined, Positive};
    ///
    /// let n = Refined::<i32, Positive>::new(42).unwrap();
    /// let inner: i32 = n.into_inner();
    /// assert_eq!(inner, 42);
    /// ```
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Wrap a value the caller has already proven to satisfy `P`.
    #[inline]
    pub(crate) fn new_unchecked(value: T) -> Self {
        Self {
            value,
            _predicate: PhantomData,
        }
    }

    /// Map the inner value, re-checking the predicate.
    ///
    /// Returns `Err` if the new value doesn't satisfy the predicate.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flagged::refined::{Refined, Positive};
    ///
    /// let n = Refined::<i32, Positive>::new(42).unwrap();
    /// let doubled = n.try_map(|x| x * 2);
    /// assert!(doubled.is_ok());
    ///
    /// let negated = Refined::<i32, Positive>::new(5).unwrap().try_map(|x| -x);
    /// assert!(negated.is_err());
    /// ```
    pub fn try_map<F>(self, f: F) -> Result<Self, P::Error>
    where
        F: FnOnce(T) -> T,
    {
        Self::new(f(self.value))
    }

    /// Re-label the value with a weaker refinement, without checking it again.
    ///
    /// Only compiles when every value admitted by `P` is admitted by `Q`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flagged::refined::{Refined, Negative, NonZero};
    ///
    /// let n = Refined::<i64, Negative>::new(-3).unwrap();
    /// let nz: Refined<i64, NonZero> = n.weaken();
    /// assert_eq!(*nz.get(), -3);
    /// ```
    ///
    /// ```rust,compile_fail
    /// use flagged::refined::{Refined, NonNegative, Positive};
    ///
    /// let n = Refined::<i64, NonNegative>::new(0).unwrap();
    /// let p: Refined<i64, Positive> = n.weaken();
    /// ```
    #[inline]
    pub fn weaken<Q>(self) -> Refined<T, Q>
    where
        Q: Predicate<T>,
        P: Implies<Q>,
    {
        let () = <P as Implies<Q>>::PROOF;
        Refined::new_unchecked(self.value)
    }

    /// Build from a value refined by a stronger predicate, without checking it again.
    ///
    /// The mirror image of [`weaken`](Refined::weaken).
    ///
    /// # Example
    ///
    /// ```rust
    /// use flagged::refined::{Refined, FixedSized, MoreThan};
    ///
    /// let triple = Refined::<Vec<u8>, FixedSized<3>>::new(vec![1, 2, 3]).unwrap();
    /// let big = Refined::<Vec<u8>, MoreThan<2>>::from_refined(triple);
    /// assert_eq!(big.get().len(), 3);
    /// ```
    #[inline]
    pub fn from_refined<O>(other: Refined<T, O>) -> Self
    where
        O: Predicate<T> + Implies<P>,
    {
        other.weaken()
    }
}

impl<T, P> Refined<T, P>
where
    P: Predicate<T, Error = Infallible>,
{
    /// Create a refined value for a predicate that cannot fail.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flagged::refined::{Refined, UniqueAndSorted};
    ///
    /// let ids = Refined::<Vec<u32>, UniqueAndSorted>::arrange(vec![4, 2, 4, 1]);
    /// assert_eq!(ids.get(), &[1, 2, 4]);
    /// ```
    pub fn arrange(value: T) -> Self {
        #[cfg(feature = "tracing")]
        tracing::trace!(refinement = P::description(), "arranging value");
        match Self::new(value) {
            Ok(refined) => refined,
            Err(never) => match never {},
        }
    }
}

// Debug implementation
impl<T: fmt::Debug, P: Predicate<T>> fmt::Debug for Refined<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Refined")
            .field("value", &self.value)
            .field("predicate", &std::any::type_name::<P>())
            .finish()
    }
}

// Clone when T: Clone
impl<T: Clone, P: Predicate<T>> Clone for Refined<T, P> {
    fn clone(&self) -> Self {
        Self::new_unchecked(self.value.clone())
    }
}

impl<T: Copy, P: Predicate<T>> Copy for Refined<T, P> {}

// PartialEq delegates to inner
impl<T: PartialEq, P: Predicate<T>> PartialEq for Refined<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq, P: Predicate<T>> Eq for Refined<T, P> {}

// PartialOrd delegates to inner
impl<T: PartialOrd, P: Predicate<T>> PartialOrd for Refined<T, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

// Ord delegates to inner
impl<T: Ord, P: Predicate<T>> Ord for Refined<T, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

// Hash delegates to inner
impl<T: Hash, P: Predicate<T>> Hash for Refined<T, P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T, P: Predicate<T>> AsRef<T> for Refined<T, P> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

// Eq, Ord and Hash agree with T, so lookups by &T are sound
impl<T, P: Predicate<T>> Borrow<T> for Refined<T, P> {
    fn borrow(&self) -> &T {
        &self.value
    }
}

// Display when T: Display
impl<T: fmt::Display, P: Predicate<T>> fmt::Display for Refined<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Custom test predicate
    struct Even;

    impl Predicate<i32> for Even {
        type Error = &'static str;

        fn check(value: &i32) -> Result<(), Self::Error> {
            if value % 2 == 0 {
                Ok(())
            } else {
                Err("value must be even")
            }
        }
    }

    // Rounds down to even, so it never fails
    struct RoundedToEven;

    impl Predicate<i32> for RoundedToEven {
        type Error = Infallible;

        fn check(_value: &i32) -> Result<(), Self::Error> {
            Ok(())
        }

        fn normalize(value: i32) -> i32 {
            value & !1
        }
    }

    type EvenI32 = Refined<i32, Even>;

    #[test]
    fn test_new_success() {
        let result = EvenI32::new(42);
        assert!(result.is_ok());
        assert_eq!(*result.unwrap().get(), 42);
    }

    #[test]
    fn test_new_failure() {
        let result = EvenI32::new(41);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err(), "value must be even");
    }

    #[test]
    fn test_get() {
        let n = EvenI32::new(42).unwrap();
        assert_eq!(*n.get(), 42);
    }

    #[test]
    fn test_into_inner() {
        let n = EvenI32::new(42).unwrap();
        assert_eq!(n.into_inner(), 42);
    }

    #[test]
    fn test_normalize_runs_before_check() {
        let n = Refined::<i32, RoundedToEven>::arrange(7);
        assert_eq!(*n.get(), 6);
        assert_eq!(*Refined::<i32, RoundedToEven>::new(-3).unwrap().get(), -4);
    }

    #[test]
    fn test_default_description_is_the_type_name() {
        assert!(<Even as Predicate<i32>>::description().ends_with("Even"));
        assert_eq!(<Positive as Predicate<i32>>::description(), "positive (> 0)");
    }

    #[test]
    fn test_try_map_success() {
        let n = EvenI32::new(42).unwrap();
        let doubled = n.try_map(|x| x * 2);
        assert!(doubled.is_ok());
        assert_eq!(*doubled.unwrap().get(), 84);
    }

    #[test]
    fn test_try_map_failure() {
        let n = EvenI32::new(42).unwrap();
        let odd = n.try_map(|x| x + 1);
        assert!(odd.is_err());
    }

    #[test]
    fn test_weaken_keeps_the_value() {
        let p = Refined::<i32, Positive>::new(3).unwrap();
        let nz: Refined<i32, NonZero> = p.weaken();
        assert_eq!(*nz.get(), 3);

        let n = Refined::<i32, Negative>::new(-3).unwrap();
        assert_eq!(*Refined::<i32, NonZero>::from_refined(n).get(), -3);
    }

    #[test]
    fn test_weaken_to_same_refinement() {
        let p = Refined::<i32, Positive>::new(8).unwrap();
        let same: Refined<i32, Positive> = p.weaken();
        assert_eq!(same, p);
    }

    #[test]
    fn test_clone_and_copy() {
        let n = EvenI32::new(42).unwrap();
        let copied = n;
        let cloned = n.clone();
        assert_eq!(*copied.get(), *cloned.get());

        let v = Refined::<Vec<i32>, NonEmpty>::new(vec![1]).unwrap();
        assert_eq!(v.clone(), v);
    }

    #[test]
    fn test_partial_eq() {
        let a = EvenI32::new(42).unwrap();
        let b = EvenI32::new(42).unwrap();
        let c = EvenI32::new(44).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_ord() {
        let a = EvenI32::new(42).unwrap();
        let b = EvenI32::new(44).unwrap();
        assert!(a < b);
        assert!(b > a);
    }

    #[test]
    fn test_hash() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(EvenI32::new(42).unwrap());
        set.insert(EvenI32::new(42).unwrap()); // duplicate
        set.insert(EvenI32::new(44).unwrap());

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_borrow_lookup() {
        use std::collections::HashSet;

        let set: HashSet<EvenI32> = [2, 4, 6].into_iter().map(|n| EvenI32::new(n).unwrap()).collect();
        assert!(set.contains(&4));
        assert!(!set.contains(&5));
    }

    #[test]
    fn test_as_ref() {
        let n = EvenI32::new(42).unwrap();
        let r: &i32 = n.as_ref();
        assert_eq!(*r, 42);
    }

    #[test]
    fn test_display() {
        let n = EvenI32::new(42).unwrap();
        assert_eq!(format!("{}", n), "42");
    }

    #[test]
    fn test_debug() {
        let n = EvenI32::new(42).unwrap();
        let debug = format!("{:?}", n);
        assert!(debug.contains("Refined"));
        assert!(debug.contains("42"));
        assert!(debug.contains("Even"));
    }

    #[test]
    fn test_send_sync_follow_the_value() {
        fn assert_send_sync<X: Send + Sync>() {}
        assert_send_sync::<Refined<Vec<i32>, NonEmpty>>();
        assert_send_sync::<Refined<u64, BoundedInclusive<1, 10>>>();
    }
}
