//! Equal-size predicate over tuples of containers
//!
//! # Example
//!
//! ```rust
//! use flagged::refined::{Refined, EqualSized};
//!
//! let columns = (vec![1, 2, 3], vec!["a", "b", "c"], vec![0.1, 0.2, 0.3]);
//! let table = Refined::<_, EqualSized>::new(columns).unwrap();
//! assert_eq!(table.common_len(), 3);
//!
//! let ragged = (vec![1, 2, 3, 4], vec!["a", "b", "c"], vec![0.1, 0.2, 0.3]);
//! assert!(Refined::<_, EqualSized>::new(ragged).is_err());
//! ```

use super::super::error::{RefinementError, Violation};
use super::super::{Predicate, Refined};
use super::collection::ElementCount;

/// A tuple whose members are all countable containers.
///
/// Implemented for tuples of one to eight [`ElementCount`] members.
pub trait ContainerTuple {
    /// Element count of each member, in tuple order.
    fn element_counts(&self) -> Vec<usize>;
}

macro_rules! impl_container_tuple {
    ($(($($name:ident $idx:tt),+))+) => {
        $(
            impl<$($name: ElementCount),+> ContainerTuple for ($($name,)+) {
                fn element_counts(&self) -> Vec<usize> {
                    vec![$(self.$idx.element_count()),+]
                }
            }
        )+
    };
}

impl_container_tuple! {
    (A 0)
    (A 0, B 1)
    (A 0, B 1, C 2)
    (A 0, B 1, C 2, D 3)
    (A 0, B 1, C 2, D 3, E 4)
    (A 0, B 1, C 2, D 3, E 4, F 5)
    (A 0, B 1, C 2, D 3, E 4, F 5, G 6)
    (A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7)
}

/// All containers in the tuple must hold the same number of elements
#[derive(Debug, Clone, Copy)]
pub struct EqualSized;

impl<Tup: ContainerTuple> Predicate<Tup> for EqualSized {
    type Error = RefinementError;

    fn check(value: &Tup) -> Result<(), Self::Error> {
        let counts = value.element_counts();
        let Some((&first, rest)) = counts.split_first() else {
            return Ok(());
        };

        match rest.iter().position(|&len| len != first) {
            None => Ok(()),
            Some(offset) => Err(RefinementError::new(
                "equal-sized containers",
                Violation::UnequalSizes {
                    first,
                    position: offset + 1,
                    len: rest[offset],
                },
            )),
        }
    }

    fn description() -> &'static str {
        "equal-sized containers"
    }
}

impl<Tup: ContainerTuple> Refined<Tup, EqualSized> {
    /// The element count every container shares.
    pub fn common_len(&self) -> usize {
        self.get().element_counts().first().copied().unwrap_or(0)
    }
}
