//! Nullability predicate for pointer-like values
//!
//! [`NonNull`] rejects the null sentinel of a handle type: a null raw
//! pointer or `None`.
//!
//! # Example
//!
//! ```rust
//! use flagged::refined::{Refined, NonNull};
//!
//! let mut slot = 3;
//! let raw: *mut i32 = &mut slot;
//!
//! assert!(Refined::<*mut i32, NonNull>::new(std::ptr::null_mut()).is_err());
//!
//! let checked = Refined::<*mut i32, NonNull>::new(raw).unwrap();
//! assert_eq!(checked.into_inner(), raw);
//! ```

use super::super::error::{RefinementError, Violation};
use super::super::{Predicate, Refined};

/// A handle type with a null sentinel.
pub trait Nullable {
    /// Whether this is the null sentinel.
    fn is_null(&self) -> bool;
}

impl<T: ?Sized> Nullable for *const T {
    #[inline]
    fn is_null(&self) -> bool {
        <*const T>::is_null(*self)
    }
}

impl<T: ?Sized> Nullable for *mut T {
    #[inline]
    fn is_null(&self) -> bool {
        <*mut T>::is_null(*self)
    }
}

impl<T> Nullable for Option<T> {
    #[inline]
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

/// Handle must not be null
#[derive(Debug, Clone, Copy)]
pub struct NonNull;

impl<H: Nullable> Predicate<H> for NonNull {
    type Error = RefinementError;

    fn check(value: &H) -> Result<(), Self::Error> {
        if value.is_null() {
            Err(RefinementError::new("non-null", Violation::Null))
        } else {
            Ok(())
        }
    }

    fn description() -> &'static str {
        "non-null"
    }
}

impl<T: ?Sized> Refined<*mut T, NonNull> {
    /// The pointer as a [`std::ptr::NonNull`].
    #[inline]
    pub fn as_non_null(&self) -> std::ptr::NonNull<T> {
        // SAFETY: the NonNull predicate rejected null on construction and
        // the pointer cannot change afterwards.
        unsafe { std::ptr::NonNull::new_unchecked(*self.get()) }
    }
}

impl<T: ?Sized> Refined<*const T, NonNull> {
    /// The pointer as a [`std::ptr::NonNull`].
    #[inline]
    pub fn as_non_null(&self) -> std::ptr::NonNull<T> {
        // SAFETY: as above; the cast only changes mutability.
        unsafe { std::ptr::NonNull::new_unchecked(self.get().cast_mut()) }
    }
}

impl<T> Refined<Option<T>, NonNull> {
    /// The value inside the `Some`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flagged::refined::{Refined, NonNull};
    ///
    /// let name = Refined::<Option<&str>, NonNull>::new(Some("ada")).unwrap();
    /// assert_eq!(name.into_some(), "ada");
    /// ```
    pub fn into_some(self) -> T {
        match self.into_inner() {
            Some(value) => value,
            None => unreachable!("NonNull admitted None"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_pointer_is_rejected() {
        let null: *const i32 = std::ptr::null();
        let err = Refined::<*const i32, NonNull>::new(null).unwrap_err();
        assert_eq!(err.violation(), &Violation::Null);
        assert_eq!(err.to_string(), "non-null: handle is null");
    }

    #[test]
    fn test_non_null_pointer_round_trips() {
        let boxed = Box::into_raw(Box::new(3));
        let checked = Refined::<*mut i32, NonNull>::new(boxed).unwrap();
        assert_eq!(checked.as_non_null().as_ptr(), boxed);

        let extracted = checked.into_inner();
        assert_eq!(extracted, boxed);
        // SAFETY: `extracted` came from Box::into_raw above and is not used again
        let restored = unsafe { Box::from_raw(extracted) };
        assert_eq!(*restored, 3);
    }

    #[test]
    fn test_const_pointer_as_non_null() {
        let value = 7u8;
        let raw: *const u8 = &value;
        let checked = Refined::<*const u8, NonNull>::new(raw).unwrap();
        assert_eq!(checked.as_non_null().as_ptr().cast_const(), raw);
    }

    #[test]
    fn test_unsized_pointer() {
        let text = "abc";
        let raw: *const str = text;
        assert!(Refined::<*const str, NonNull>::new(raw).is_ok());
    }

    #[test]
    fn test_option() {
        assert!(Refined::<Option<Box<i32>>, NonNull>::new(None).is_err());
        let some = Refined::<Option<Box<i32>>, NonNull>::new(Some(Box::new(1))).unwrap();
        assert_eq!(*some.into_some(), 1);
    }
}
