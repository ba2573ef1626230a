//! Serialization helpers for 128-bit integer fields.
//!
//! JSON numbers cannot carry full 128-bit integers, so raw amounts go out
//! the same way they come in: decimal-string encoded.

use serde::Serializer;

pub fn u128_as_string<S: Serializer>(value: &u128, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_string())
}

pub fn i128_as_string<S: Serializer>(value: &i128, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_string())
}
