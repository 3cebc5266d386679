//! Framework-reserved static keys
//!
//! Four immutable process-wide tables. Three are selected by component shape;
//! the language-reserved table applies to every source and target regardless
//! of shape. Tables hold string keys only, so symbol-keyed statics are never
//! shape-excluded.

use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;

use hoist_object::PropertyKey;

use crate::shape::Shape;

/// Reserved keys of a standard (plain-shaped) definition: lifecycle and
/// config hooks the framework itself reads
pub static STANDARD_STATICS: Lazy<FxHashSet<&'static str>> = Lazy::new(|| {
    [
        "childContextTypes",
        "contextType",
        "contextTypes",
        "defaultProps",
        "displayName",
        "getDefaultProps",
        "getDerivedStateFromError",
        "getDerivedStateFromProps",
        "mixins",
        "propTypes",
        "type",
    ]
    .into_iter()
    .collect()
});

/// Keys reserved by the language runtime itself; excluded for every shape
pub static LANGUAGE_RESERVED: Lazy<FxHashSet<&'static str>> = Lazy::new(|| {
    [
        "name",
        "length",
        "prototype",
        "caller",
        "callee",
        "arguments",
        "arity",
    ]
    .into_iter()
    .collect()
});

/// Reserved keys of a memoized definition
pub static MEMO_STATICS: Lazy<FxHashSet<&'static str>> = Lazy::new(|| {
    [
        "$$typeof",
        "compare",
        "defaultProps",
        "displayName",
        "propTypes",
        "type",
    ]
    .into_iter()
    .collect()
});

/// Reserved keys of a ref-forwarding definition
pub static FORWARD_REF_STATICS: Lazy<FxHashSet<&'static str>> = Lazy::new(|| {
    [
        "$$typeof",
        "render",
        "defaultProps",
        "displayName",
        "propTypes",
    ]
    .into_iter()
    .collect()
});

/// The reserved-key table for a given shape
pub fn excluded_statics(shape: Shape) -> &'static FxHashSet<&'static str> {
    match shape {
        Shape::Plain => &STANDARD_STATICS,
        Shape::Memo => &MEMO_STATICS,
        Shape::ForwardRef => &FORWARD_REF_STATICS,
    }
}

/// Whether `key` belongs to the language runtime rather than the framework
pub fn is_language_reserved(key: &PropertyKey) -> bool {
    key.as_str().is_some_and(|name| LANGUAGE_RESERVED.contains(name))
}
