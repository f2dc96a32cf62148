//! Ordering predicates: refinements established by rearranging
//!
//! Unlike the validating predicates, these never reject input. Construction
//! takes ownership of the sequence and rearranges it until the invariant
//! holds:
//! - [`Sorted`]: stable ascending sort
//! - [`Unique`]: later duplicates removed, first occurrences keep their order
//! - [`UniqueAndSorted`]: ascending with every run of equal elements collapsed
//! - [`Shuffled`]: randomly permuted (feature `shuffle`)
//!
//! All four use [`Infallible`] as their error, so [`Refined::arrange`] builds
//! them without a `Result`.
//!
//! # Example
//!
//! ```rust
//! use flagged::refined::{Refined, Sorted, Unique, UniqueAndSorted};
//!
//! let sorted = Refined::<Vec<i32>, Sorted>::arrange(vec![1, 7, 8, 14, 3]);
//! assert_eq!(sorted.get(), &[1, 3, 7, 8, 14]);
//!
//! let unique = Refined::<Vec<i32>, Unique>::arrange(vec![3, 1, 3, 2, 1]);
//! assert_eq!(unique.get(), &[3, 1, 2]);
//!
//! // Sorting a unique sequence keeps it unique
//! let both: Refined<Vec<i32>, UniqueAndSorted> = unique.into();
//! assert_eq!(both.get(), &[1, 2, 3]);
//! ```

use std::collections::VecDeque;
use std::convert::Infallible;

use super::super::{Predicate, Refined};

/// A sequence whose elements can be rearranged in place.
///
/// Rearrangements are written against `Vec`; other sequences convert to a
/// `Vec` and back without copying elements.
pub trait Arrange {
    /// Element type.
    type Item;

    /// Run `f` over the elements as a `Vec`.
    fn arrange_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Vec<Self::Item>);
}

impl<T> Arrange for Vec<T> {
    type Item = T;

    fn arrange_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Vec<T>),
    {
        f(self)
    }
}

impl<T> Arrange for VecDeque<T> {
    type Item = T;

    fn arrange_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Vec<T>),
    {
        let mut items = Vec::from(std::mem::take(self));
        f(&mut items);
        *self = VecDeque::from(items);
    }
}

/// Sequence is sorted ascending (established by sorting)
#[derive(Debug, Clone, Copy)]
pub struct Sorted;

/// Sequence holds no duplicates (established by dropping later duplicates)
#[derive(Debug, Clone, Copy)]
pub struct Unique;

/// Sequence is strictly ascending (established by sorting, then collapsing runs)
#[derive(Debug, Clone, Copy)]
pub struct UniqueAndSorted;

/// Sequence was randomly permuted on construction.
///
/// There is no invariant to check afterwards; this exists so that "this
/// sequence has been shuffled" can be stated in a signature.
#[cfg(feature = "shuffle")]
#[derive(Debug, Clone, Copy)]
pub struct Shuffled;

/// Removes every element equal to an earlier one, keeping the survivors in
/// their original order. O(n log n), no cloning.
fn retain_first_occurrences<T: Ord>(items: &mut Vec<T>) {
    if items.len() < 2 {
        return;
    }

    let mut order: Vec<usize> = (0..items.len()).collect();
    // stable: equal elements stay in index order, so the first of each run
    // is the earliest occurrence
    order.sort_by(|&a, &b| items[a].cmp(&items[b]));

    let mut keep = vec![true; items.len()];
    for pair in order.windows(2) {
        if items[pair[0]] == items[pair[1]] {
            keep[pair[1]] = false;
        }
    }

    let mut index = 0;
    items.retain(|_| {
        let kept = keep[index];
        index += 1;
        kept
    });
}

impl<S> Predicate<S> for Sorted
where
    S: Arrange,
    S::Item: Ord,
{
    type Error = Infallible;

    fn check(_value: &S) -> Result<(), Self::Error> {
        Ok(())
    }

    fn normalize(mut value: S) -> S {
        value.arrange_with(|items| items.sort());
        value
    }

    fn description() -> &'static str {
        "sorted ascending"
    }
}

impl<S> Predicate<S> for Unique
where
    S: Arrange,
    S::Item: Ord,
{
    type Error = Infallible;

    fn check(_value: &S) -> Result<(), Self::Error> {
        Ok(())
    }

    fn normalize(mut value: S) -> S {
        value.arrange_with(retain_first_occurrences);
        value
    }

    fn description() -> &'static str {
        "without duplicates"
    }
}

impl<S> Predicate<S> for UniqueAndSorted
where
    S: Arrange,
    S::Item: Ord,
{
    type Error = Infallible;

    fn check(_value: &S) -> Result<(), Self::Error> {
        Ok(())
    }

    fn normalize(mut value: S) -> S {
        value.arrange_with(|items| {
            items.sort();
            items.dedup();
        });
        value
    }

    fn description() -> &'static str {
        "strictly ascending"
    }
}

#[cfg(feature = "shuffle")]
impl<S: Arrange> Predicate<S> for Shuffled {
    type Error = Infallible;

    fn check(_value: &S) -> Result<(), Self::Error> {
        Ok(())
    }

    fn normalize(mut value: S) -> S {
        use rand::seq::SliceRandom;

        value.arrange_with(|items| items.shuffle(&mut rand::rng()));
        value
    }

    fn description() -> &'static str {
        "shuffled"
    }
}

#[cfg(feature = "shuffle")]
impl<S: Arrange> Refined<S, Shuffled> {
    /// Shuffle with a caller-supplied random number generator.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flagged::refined::{Refined, Shuffled};
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let a = Refined::<Vec<i32>, Shuffled>::shuffled_with((0..10).collect(), &mut StdRng::seed_from_u64(7));
    /// let b = Refined::<Vec<i32>, Shuffled>::shuffled_with((0..10).collect(), &mut StdRng::seed_from_u64(7));
    /// assert_eq!(a, b);
    /// ```
    pub fn shuffled_with<R>(mut value: S, rng: &mut R) -> Self
    where
        R: rand::Rng + ?Sized,
    {
        use rand::seq::SliceRandom;

        value.arrange_with(|items| items.shuffle(rng));
        Self::new_unchecked(value)
    }
}

impl<S> From<Refined<S, Sorted>> for Refined<S, UniqueAndSorted>
where
    S: Arrange,
    S::Item: Ord,
{
    /// Collapses runs; the sort is already done.
    fn from(sorted: Refined<S, Sorted>) -> Self {
        let mut value = sorted.into_inner();
        value.arrange_with(|items| items.dedup());
        Refined::new_unchecked(value)
    }
}

impl<S> From<Refined<S, Unique>> for Refined<S, UniqueAndSorted>
where
    S: Arrange,
    S::Item: Ord,
{
    /// Sorts; duplicates are already gone.
    fn from(unique: Refined<S, Unique>) -> Self {
        let mut value = unique.into_inner();
        value.arrange_with(|items| items.sort());
        Refined::new_unchecked(value)
    }
}

impl<S> From<Refined<S, UniqueAndSorted>> for Refined<S, Sorted>
where
    S: Arrange,
    S::Item: Ord,
{
    fn from(both: Refined<S, UniqueAndSorted>) -> Self {
        Refined::new_unchecked(both.into_inner())
    }
}

impl<S> From<Refined<S, UniqueAndSorted>> for Refined<S, Unique>
where
    S: Arrange,
    S::Item: Ord,
{
    fn from(both: Refined<S, UniqueAndSorted>) -> Self {
        Refined::new_unchecked(both.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type SortedVec = Refined<Vec<i32>, Sorted>;
    type UniqueVec = Refined<Vec<i32>, Unique>;
    type UniqueSortedVec = Refined<Vec<i32>, UniqueAndSorted>;

    #[test]
    fn test_sorted() {
        let unsorted = vec![1, 7, 8, 14, 3];
        assert!(!unsorted.is_sorted());

        let sorted = SortedVec::arrange(unsorted);
        assert_eq!(sorted.get(), &[1, 3, 7, 8, 14]);
    }

    #[test]
    fn test_sorted_is_idempotent() {
        let once = SortedVec::arrange(vec![5, 2, 9, 2]);
        let twice = SortedVec::arrange(once.clone().into_inner());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_unique_keeps_first_occurrences() {
        let unduped = UniqueVec::arrange(vec![1, 1, 2, 2, 3, 3, 7, 9, 11]);
        assert_eq!(unduped.get().len(), 6);
        assert_eq!(unduped.get(), &[1, 2, 3, 7, 9, 11]);

        let scattered = UniqueVec::arrange(vec![9, 1, 9, 4, 1, 4, 2]);
        assert_eq!(scattered.get(), &[9, 1, 4, 2]);
    }

    #[test]
    fn test_unique_and_sorted() {
        let fixed = UniqueSortedVec::arrange(vec![11, 9, 7, 3, 3, 2, 2, 1, 1]);
        assert_eq!(fixed.get(), &[1, 2, 3, 7, 9, 11]);
    }

    #[test]
    fn test_empty_is_a_no_op() {
        assert!(SortedVec::arrange(vec![]).get().is_empty());
        assert!(UniqueVec::arrange(vec![]).get().is_empty());
        assert!(UniqueSortedVec::arrange(vec![]).get().is_empty());
    }

    #[test]
    fn test_new_never_fails() {
        let sorted = SortedVec::new(vec![3, 2, 1]);
        assert!(matches!(sorted, Ok(ref s) if s.get() == &[1, 2, 3]));
    }

    #[test]
    fn test_vec_deque() {
        let deque: VecDeque<i32> = [4, 1, 4, 3].into_iter().collect();
        let both = Refined::<VecDeque<i32>, UniqueAndSorted>::arrange(deque);
        assert_eq!(both.get().iter().copied().collect::<Vec<_>>(), vec![1, 3, 4]);
    }

    #[test]
    fn test_sorted_into_unique_and_sorted() {
        let sorted = SortedVec::arrange(vec![3, 1, 3, 2, 1]);
        let both: UniqueSortedVec = sorted.into();
        assert_eq!(both.get(), &[1, 2, 3]);
    }

    #[test]
    fn test_unique_into_unique_and_sorted() {
        let unique = UniqueVec::arrange(vec![3, 1, 3, 2, 1]);
        assert_eq!(unique.get(), &[3, 1, 2]);
        let both = UniqueSortedVec::from(unique);
        assert_eq!(both.get(), &[1, 2, 3]);
    }

    #[test]
    fn test_unique_and_sorted_weakens_for_free() {
        let both = UniqueSortedVec::arrange(vec![2, 1, 2]);
        let sorted: SortedVec = both.clone().into();
        let unique: UniqueVec = both.into();
        assert_eq!(sorted.get(), unique.get());
    }

    #[test]
    fn test_unique_keeps_the_earliest_of_equal_elements() {
        // equal by key, distinguishable by tag
        #[derive(Debug)]
        struct Tagged(i32, char);

        impl PartialEq for Tagged {
            fn eq(&self, other: &Self) -> bool {
                self.0 == other.0
            }
        }
        impl Eq for Tagged {}
        impl PartialOrd for Tagged {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }
        impl Ord for Tagged {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.0.cmp(&other.0)
            }
        }

        let mut items = vec![
            Tagged(2, 'a'),
            Tagged(1, 'b'),
            Tagged(2, 'c'),
            Tagged(1, 'd'),
            Tagged(2, 'e'),
        ];
        retain_first_occurrences(&mut items);
        let tags: Vec<char> = items.iter().map(|t| t.1).collect();
        assert_eq!(tags, vec!['a', 'b']);
    }

    #[cfg(feature = "shuffle")]
    mod shuffle {
        use super::*;
        use rand::{rngs::StdRng, SeedableRng};

        #[test]
        fn test_shuffled_is_a_permutation() {
            let shuffled = Refined::<Vec<i32>, Shuffled>::arrange((0..50).collect());
            let mut items = shuffled.into_inner();
            items.sort();
            assert_eq!(items, (0..50).collect::<Vec<_>>());
        }

        #[test]
        fn test_shuffled_with_seed_is_reproducible() {
            let make = || {
                Refined::<Vec<i32>, Shuffled>::shuffled_with(
                    (0..20).collect(),
                    &mut StdRng::seed_from_u64(42),
                )
            };
            assert_eq!(make(), make());
        }
    }
}
