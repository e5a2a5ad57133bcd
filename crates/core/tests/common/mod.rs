//! Shared test helpers for `argbind_core` integration tests.

#![allow(unreachable_pub)]

use argbind_core::Schema;

/// Split a space-separated literal into an owned argument list.
pub fn args(s: &str) -> Vec<String> {
    s.split_whitespace().map(str::to_string).collect()
}

/// Record with three plain string fields.
#[allow(dead_code)]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct StringFlags {
    pub first: String,
    pub second: String,
    pub third: String,
}

#[allow(dead_code)]
pub fn string_schema() -> Schema<StringFlags> {
    Schema::builder()
        .field("first", |r: &mut StringFlags, v: String| r.first = v)
        .field("second", |r: &mut StringFlags, v: String| r.second = v)
        .field("third", |r: &mut StringFlags, v: String| r.third = v)
        .build()
}

/// Record with three optional string fields (pointer-style: a flag with
/// no value leaves the field unset).
#[allow(dead_code)]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct OptionalFlags {
    pub first: Option<String>,
    pub second: Option<String>,
    pub third: Option<String>,
}

#[allow(dead_code)]
pub fn optional_schema() -> Schema<OptionalFlags> {
    Schema::builder()
        .field("first", |r: &mut OptionalFlags, v: Option<String>| {
            r.first = v;
        })
        .field("second", |r: &mut OptionalFlags, v: Option<String>| {
            r.second = v;
        })
        .field("third", |r: &mut OptionalFlags, v: Option<String>| {
            r.third = v;
        })
        .build()
}

/// Record with three boolean fields.
#[allow(dead_code)]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BoolFlags {
    pub first: bool,
    pub second: bool,
    pub third: bool,
}

#[allow(dead_code)]
pub fn bool_schema() -> Schema<BoolFlags> {
    Schema::builder()
        .field("first", |r: &mut BoolFlags, v: bool| r.first = v)
        .field("second", |r: &mut BoolFlags, v: bool| r.second = v)
        .field("third", |r: &mut BoolFlags, v: bool| r.third = v)
        .build()
}
