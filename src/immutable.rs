//! Values that are never mutated after construction
//!
//! [`Immutable<T>`] owns a value and exposes it only by shared reference or
//! by giving it up. [`SharedImmutable<T>`] is the reference-counted form:
//! every owner reads the same value, and the value is dropped with its last
//! owner.
//!
//! # Example
//!
//! ```rust
//! use flagged::immutable::{Immutable, SharedImmutable};
//!
//! let config = Immutable::new(vec!["alpha", "beta"]);
//! assert_eq!(config.get().len(), 2);
//!
//! let shared: SharedImmutable<_> = config.share();
//! let reader = shared.clone();
//! assert!(reader.ptr_eq(&shared));
//! assert_eq!(shared.owners(), 2);
//!
//! drop(reader);
//! let back = shared.try_into_inner().unwrap();
//! assert_eq!(back, vec!["alpha", "beta"]);
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// A value that cannot be mutated through this handle.
///
/// Unlike a plain `T`, there is no `&mut` access at all: to change the value
/// you take it out with [`into_inner`](Immutable::into_inner) and build a new
/// `Immutable`. No `Default` is provided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Immutable<T> {
    value: T,
}

impl<T> Immutable<T> {
    /// Wrap a value.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self { value }
    }

    /// Borrow the value.
    #[inline]
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Give up the wrapper and return the value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Move the value behind a reference count so it can have several owners.
    pub fn share(self) -> SharedImmutable<T> {
        SharedImmutable {
            inner: Arc::new(self),
        }
    }
}

impl<T> From<T> for Immutable<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> AsRef<T> for Immutable<T> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

impl<T> Borrow<T> for Immutable<T> {
    fn borrow(&self) -> &T {
        &self.value
    }
}

impl<T: fmt::Display> fmt::Display for Immutable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

/// A reference-counted [`Immutable`] value.
///
/// Cloning adds an owner and never copies `T`. Owners may live on different
/// threads when `T: Send + Sync`.
///
/// # Example
///
/// ```rust
/// use flagged::immutable::SharedImmutable;
/// use std::thread;
///
/// let table = SharedImmutable::new(vec![1, 2, 3]);
/// let handles: Vec<_> = (0..3)
///     .map(|i| {
///         let table = table.clone();
///         thread::spawn(move || table.get()[i])
///     })
///     .collect();
///
/// let total: i32 = handles.into_iter().map(|h| h.join().unwrap()).sum();
/// assert_eq!(total, 6);
/// ```
pub struct SharedImmutable<T> {
    inner: Arc<Immutable<T>>,
}

impl<T> SharedImmutable<T> {
    /// Wrap a value with a single owner.
    pub fn new(value: T) -> Self {
        Immutable::new(value).share()
    }

    /// Borrow the shared value.
    #[inline]
    pub fn get(&self) -> &T {
        self.inner.get()
    }

    /// Number of handles currently sharing the value.
    pub fn owners(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Whether both handles share one allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Take the value out if this is the last owner; otherwise hand the
    /// handle back unchanged.
    pub fn try_into_inner(self) -> Result<T, Self> {
        Arc::try_unwrap(self.inner)
            .map(Immutable::into_inner)
            .map_err(|inner| Self { inner })
    }
}

impl<T: Clone> SharedImmutable<T> {
    /// Take the value out, cloning it only if other owners remain.
    pub fn into_inner_or_clone(self) -> T {
        Arc::unwrap_or_clone(self.inner).into_inner()
    }
}

impl<T> Clone for SharedImmutable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SharedImmutable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedImmutable")
            .field("value", self.get())
            .field("owners", &self.owners())
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for SharedImmutable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.get().fmt(f)
    }
}

// Comparisons look at the value, not the allocation; see `ptr_eq` for identity
impl<T: PartialEq> PartialEq for SharedImmutable<T> {
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

impl<T: Eq> Eq for SharedImmutable<T> {}

impl<T: PartialOrd> PartialOrd for SharedImmutable<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.get().partial_cmp(other.get())
    }
}

impl<T: Ord> Ord for SharedImmutable<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.get().cmp(other.get())
    }
}

impl<T: std::hash::Hash> std::hash::Hash for SharedImmutable<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.get().hash(state);
    }
}

impl<T> AsRef<T> for SharedImmutable<T> {
    fn as_ref(&self) -> &T {
        self.get()
    }
}

impl<T> Borrow<T> for SharedImmutable<T> {
    fn borrow(&self) -> &T {
        self.get()
    }
}

impl<T> From<T> for SharedImmutable<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> From<Immutable<T>> for SharedImmutable<T> {
    fn from(value: Immutable<T>) -> Self {
        value.share()
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{Immutable, SharedImmutable};

    impl<T: Serialize> Serialize for Immutable<T> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            self.get().serialize(serializer)
        }
    }

    impl<'de, T: Deserialize<'de>> Deserialize<'de> for Immutable<T> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            T::deserialize(deserializer).map(Immutable::new)
        }
    }

    impl<T: Serialize> Serialize for SharedImmutable<T> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            self.get().serialize(serializer)
        }
    }

    impl<'de, T: Deserialize<'de>> Deserialize<'de> for SharedImmutable<T> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            T::deserialize(deserializer).map(SharedImmutable::new)
        }
    }
}
