//! Serde support for refined types (feature-gated)
//!
//! This module provides `Serialize` and `Deserialize` implementations
//! for [`Refined<T, P>`] when the `serde` feature is enabled.
//! Deserialization goes through [`Refined::new`], so a payload is
//! normalized and checked exactly as a value built in code would be.
//!
//! # Example
//!
//! ```rust,ignore
//! use serde::Deserialize;
//! use flagged::refined::{EqualSized, FixedSized, Refined, UniqueAndSorted};
//!
//! #[derive(Deserialize)]
//! struct Palette {
//!     base: Refined<Vec<u8>, FixedSized<3>>,
//!     stops: Refined<Vec<u16>, UniqueAndSorted>,
//!     names: Refined<(Vec<String>, Vec<u32>), EqualSized>,
//! }
//!
//! let json = r#"{"base":[0,0,0],"stops":[40,10,40],"names":[["a"],[7]]}"#;
//! let palette: Palette = serde_json::from_str(json).unwrap();
//! assert_eq!(palette.stops.get(), &[10, 40]);
//!
//! let short = r#"{"base":[0,0],"stops":[],"names":[[],[]]}"#;
//! assert!(serde_json::from_str::<Palette>(short).is_err());
//! ```

use std::fmt;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use super::{Predicate, Refined};

// Written as the bare inner value; the predicate leaves no trace on the wire.
impl<T: Serialize, P: Predicate<T>> Serialize for Refined<T, P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        T::serialize(self.get(), serializer)
    }
}

impl<'de, T, P> Deserialize<'de> for Refined<T, P>
where
    T: Deserialize<'de>,
    P: Predicate<T>,
    P::Error: fmt::Display,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).and_then(|raw| Refined::new(raw).map_err(de::Error::custom))
    }
}
