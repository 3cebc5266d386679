//! The static hoister
//!
//! Copies eligible own statics (string- and symbol-keyed, enumerable or not)
//! from a source definition onto a target definition, walking the source's
//! ancestor chain. A key transfers only when no filter claims it: the
//! language-reserved table, the caller's blacklist, the exclusion tables for
//! the source's and the target's shapes, and "already present on the target".
//! The last rule is what makes the nearest definition win across the chain
//! and keeps a wrapper's own statics intact.

use rustc_hash::FxHashSet;

use hoist_object::{ObjectRef, PropertyKey};

use crate::component::Component;
use crate::shape::Shape;
use crate::tables::{excluded_statics, is_language_reserved};

/// Per-call extra exclusions, keyed like the property table
pub type Blacklist = FxHashSet<PropertyKey>;

/// Hoist the source's non-reserved statics onto the target
///
/// Mutates the target definition in place and returns a clone of the `target`
/// handle for chaining. An intrinsic source carries no statics and leaves the
/// target untouched; an intrinsic target is undefined input and is likewise
/// left untouched. Individual defines the target rejects (frozen definitions)
/// are skipped, never surfaced: the hoist is best-effort by design.
pub fn hoist_statics(
    target: &Component,
    source: &Component,
    blacklist: Option<&Blacklist>,
) -> Component {
    if let (Component::Def(target_obj), Component::Def(source_obj)) = (target, source) {
        let target_excluded = excluded_statics(Shape::of(target));
        hoist_level(target_obj, source_obj, blacklist, target_excluded);
    }
    target.clone()
}

/// Copy one chain level, then recurse into its ancestor
///
/// The source's own level runs before its ancestors; combined with the
/// never-redefine rule this realizes prototype shadowing (the closest
/// definition of a key is the one that lands on the target).
fn hoist_level(
    target: &ObjectRef,
    source: &ObjectRef,
    blacklist: Option<&Blacklist>,
    target_excluded: &FxHashSet<&'static str>,
) {
    // The source's shape is re-read per level: an ancestor may be a
    // different shape than the definition the caller handed in.
    let source_excluded = excluded_statics(Shape::of_def(source));

    // Keys are snapshotted up front so no source borrow is held while the
    // target is mutated (target and source may be the same definition).
    let keys = source.borrow().own_keys();
    for key in keys {
        if is_language_reserved(&key) {
            continue;
        }
        if blacklist.is_some_and(|b| b.contains(&key)) {
            continue;
        }
        if let Some(name) = key.as_str() {
            if source_excluded.contains(name) || target_excluded.contains(name) {
                continue;
            }
        }
        if target.borrow().has_own(&key) {
            continue;
        }
        let Some(descriptor) = source.borrow().get_own(&key) else {
            continue;
        };
        // A single uncopiable static must not abort the rest of the hoist.
        let _ = target.borrow_mut().define(key, descriptor);
    }

    let ancestor = source.borrow().proto();
    if let Some(ancestor) = ancestor {
        hoist_level(target, &ancestor, blacklist, target_excluded);
    }
}
