//! Collection-size predicates for refined types
//!
//! These predicates constrain how many elements a collection holds:
//! - [`NonEmpty`]: at least one element
//! - [`MoreThan<SIZE>`]: more than `SIZE` elements
//! - [`LessThan<SIZE>`]: fewer than `SIZE` elements
//! - [`FixedSized<SIZE>`]: exactly `SIZE` elements
//! - [`FixedRangeInclusive<MINSIZE, MAXSIZE>`]: between `MINSIZE` and `MAXSIZE` elements
//!
//! Sizes are element counts, never byte lengths: strings count `char`s.
//!
//! # Example
//!
//! ```rust
//! use flagged::refined::{Refined, FixedSized, NonEmpty};
//!
//! type Pair = Refined<Vec<i32>, FixedSized<2>>;
//!
//! assert!(Pair::new(vec![1, 2, 3]).is_err());
//! assert!(Pair::new(vec![1]).is_err());
//! let pair = Pair::new(vec![1, 2]).unwrap();
//!
//! // A pair is never empty, no re-check needed
//! let non_empty: Refined<Vec<i32>, NonEmpty> = pair.weaken();
//! assert_eq!(non_empty.get().len(), 2);
//! ```

use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};

use super::super::domain::{sealed, CountRange, Domain, HasDomain};
use super::super::error::RefinementError;
use super::super::Predicate;

/// A container whose number of elements can be counted.
pub trait ElementCount {
    /// Number of elements held.
    fn element_count(&self) -> usize;
}

macro_rules! impl_element_count_via_len {
    ($([$($gen:tt)*] $ty:ty),+ $(,)?) => {
        $(
            impl<$($gen)*> ElementCount for $ty {
                #[inline]
                fn element_count(&self) -> usize {
                    self.len()
                }
            }
        )+
    };
}

impl_element_count_via_len!(
    [T] [T],
    [T] Vec<T>,
    [T] VecDeque<T>,
    [T] LinkedList<T>,
    [T] BinaryHeap<T>,
    [T] BTreeSet<T>,
    [K, V] BTreeMap<K, V>,
    [T, S] HashSet<T, S>,
    [K, V, S] HashMap<K, V, S>,
    [T, const N: usize] [T; N],
);

impl ElementCount for str {
    #[inline]
    fn element_count(&self) -> usize {
        self.chars().count()
    }
}

impl ElementCount for String {
    #[inline]
    fn element_count(&self) -> usize {
        self.as_str().element_count()
    }
}

impl<C: ElementCount + ?Sized> ElementCount for &C {
    #[inline]
    fn element_count(&self) -> usize {
        (**self).element_count()
    }
}

impl<C: ElementCount + ?Sized> ElementCount for Box<C> {
    #[inline]
    fn element_count(&self) -> usize {
        (**self).element_count()
    }
}

/// Collection must hold at least one element
#[derive(Debug, Clone, Copy)]
pub struct NonEmpty;

/// Collection must hold more than `SIZE` elements
///
/// # Example
///
/// ```rust
/// use flagged::refined::{Refined, MoreThan};
///
/// type AtLeastThree = Refined<Vec<u8>, MoreThan<2>>;
///
/// assert!(AtLeastThree::new(vec![1, 2, 3]).is_ok());
/// assert!(AtLeastThree::new(vec![1, 2]).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MoreThan<const SIZE: usize>;

/// Collection must hold fewer than `SIZE` elements
#[derive(Debug, Clone, Copy)]
pub struct LessThan<const SIZE: usize>;

/// Collection must hold exactly `SIZE` elements
#[derive(Debug, Clone, Copy)]
pub struct FixedSized<const SIZE: usize>;

/// Collection must hold between `MINSIZE` and `MAXSIZE` elements, both inclusive.
/// Requires `MINSIZE <= MAXSIZE`.
///
/// ```rust,compile_fail
/// use flagged::refined::{Refined, FixedRangeInclusive};
///
/// let never = Refined::<Vec<i32>, FixedRangeInclusive<4, 2>>::new(vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FixedRangeInclusive<const MINSIZE: usize, const MAXSIZE: usize>;

impl NonEmpty {
    const RANGE: CountRange = CountRange::at_least(1);
}

impl<const SIZE: usize> MoreThan<SIZE> {
    const RANGE: CountRange = CountRange::more_than(SIZE);
}

impl<const SIZE: usize> LessThan<SIZE> {
    const RANGE: CountRange = CountRange::fewer_than(SIZE);
}

impl<const SIZE: usize> FixedSized<SIZE> {
    const RANGE: CountRange = CountRange::exactly(SIZE);
}

impl<const MINSIZE: usize, const MAXSIZE: usize> FixedRangeInclusive<MINSIZE, MAXSIZE> {
    const RANGE: CountRange = {
        assert!(
            MINSIZE <= MAXSIZE,
            "FixedRangeInclusive requires MINSIZE <= MAXSIZE"
        );
        CountRange::between(MINSIZE, MAXSIZE)
    };
}

macro_rules! size_predicate {
    ($pred:ident $(<$(const $param:ident),+>)?, $desc:expr) => {
        impl$(<$(const $param: usize),+>)? sealed::Sealed for $pred$(<$($param),+>)? {}

        impl$(<$(const $param: usize),+>)? HasDomain for $pred$(<$($param),+>)? {
            const DOMAIN: Domain = Domain::Count(Self::RANGE);
        }

        impl<C: ElementCount $($(, const $param: usize)+)?> Predicate<C> for $pred$(<$($param),+>)? {
            type Error = RefinementError;

            fn check(value: &C) -> Result<(), Self::Error> {
                Self::RANGE
                    .admit(value.element_count())
                    .map_err(|violation| RefinementError::new($desc, violation))
            }

            fn description() -> &'static str {
                $desc
            }
        }
    };
}

size_predicate!(NonEmpty, "non-empty collection");
size_predicate!(MoreThan<const SIZE>, "collection larger than SIZE");
size_predicate!(LessThan<const SIZE>, "collection smaller than SIZE");
size_predicate!(FixedSized<const SIZE>, "collection of exactly SIZE");
size_predicate!(
    FixedRangeInclusive<const MINSIZE, const MAXSIZE>,
    "collection of MINSIZE..=MAXSIZE"
);

impl<C: ElementCount, P: Predicate<C>> super::super::Refined<C, P> {
    /// Number of elements in the refined collection.
    #[inline]
    pub fn element_count(&self) -> usize {
        self.get().element_count()
    }
}
