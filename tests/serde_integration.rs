//! Integration tests for the `serde` feature
#![cfg(feature = "serde")]

use flagged::immutable::{Immutable, SharedImmutable};
use flagged::refined::{
    BoundedInclusive, EqualSized, NonEmpty, NonEmptyString, Port, Refined, UniqueSortedVec,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Listener {
    name: NonEmptyString,
    port: Port,
    weight: Refined<u8, BoundedInclusive<1, 10>>,
    allowed: UniqueSortedVec<u32>,
}

#[test]
fn deserializes_and_normalizes_a_valid_document() {
    let json = r#"{"name":"edge","port":8443,"weight":3,"allowed":[30,10,30,20]}"#;
    let listener: Listener = serde_json::from_str(json).unwrap();

    assert_eq!(listener.name.get(), "edge");
    assert_eq!(*listener.port.get(), 8443);
    assert_eq!(listener.allowed.get(), &[10, 20, 30]);
}

#[test]
fn serializes_the_inner_values() {
    let listener = Listener {
        name: NonEmptyString::new("edge".to_string()).unwrap(),
        port: Port::new(80).unwrap(),
        weight: Refined::new(1).unwrap(),
        allowed: UniqueSortedVec::arrange(vec![2, 1]),
    };

    let json = serde_json::to_string(&listener).unwrap();
    assert_eq!(json, r#"{"name":"edge","port":80,"weight":1,"allowed":[1,2]}"#);

    let back: Listener = serde_json::from_str(&json).unwrap();
    assert_eq!(back, listener);
}

#[test]
fn rejects_each_invalid_field() {
    let cases = [
        (r#"{"name":"","port":80,"weight":1,"allowed":[]}"#, "non-empty"),
        (r#"{"name":"a","port":0,"weight":1,"allowed":[]}"#, "below the lower bound"),
        (r#"{"name":"a","port":80,"weight":11,"allowed":[]}"#, "above the upper bound"),
    ];

    for (json, expected) in cases {
        let err = serde_json::from_str::<Listener>(json).unwrap_err().to_string();
        assert!(err.contains(expected), "{err} should mention {expected}");
    }
}

#[test]
fn tuples_are_checked_as_a_whole() {
    type Columns = Refined<(Vec<i32>, Vec<String>), EqualSized>;

    let ok: Columns = serde_json::from_str(r#"[[1,2],["a","b"]]"#).unwrap();
    assert_eq!(ok.common_len(), 2);

    let err = serde_json::from_str::<Columns>(r#"[[1,2,3],["a","b"]]"#).unwrap_err();
    assert!(err.to_string().contains("equal-sized containers"));
}

#[test]
fn immutable_wrappers_are_transparent() {
    let im: Immutable<Refined<Vec<u8>, NonEmpty>> = serde_json::from_str("[1,2]").unwrap();
    assert_eq!(im.get().get(), &[1, 2]);
    assert_eq!(serde_json::to_string(&im).unwrap(), "[1,2]");

    let shared: SharedImmutable<String> = serde_json::from_str(r#""cfg""#).unwrap();
    assert_eq!(shared.get(), "cfg");
    assert_eq!(serde_json::to_string(&shared).unwrap(), r#""cfg""#);

    assert!(serde_json::from_str::<Immutable<Refined<Vec<u8>, NonEmpty>>>("[]").is_err());
}
