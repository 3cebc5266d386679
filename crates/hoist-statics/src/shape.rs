//! Component shape classification
//!
//! A definition object announces its shape through a symbol stored under the
//! `$$typeof` slot. Classification is a pure read of that one marker; nothing
//! else about the object participates.

use once_cell::sync::Lazy;

use hoist_object::{ObjectRef, Property, PropertyKey, Symbol, Value};

use crate::component::Component;

/// Property slot holding the shape marker symbol
pub const ELEMENT_TYPE_KEY: &str = "$$typeof";

/// Marker symbol carried by memoized definitions
pub static MEMO_TYPE: Lazy<Symbol> = Lazy::new(|| Symbol::with_description("element.memo"));

/// Marker symbol carried by ref-forwarding definitions
pub static FORWARD_REF_TYPE: Lazy<Symbol> =
    Lazy::new(|| Symbol::with_description("element.forward_ref"));

/// Runtime shape of a component definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Plain or unrecognized definition (intrinsic tags classify here too)
    Plain,
    /// Memoized wrapper definition
    Memo,
    /// Ref-forwarding definition
    ForwardRef,
}

impl Shape {
    /// Classify a component by its `$$typeof` marker
    pub fn of(component: &Component) -> Shape {
        match component {
            Component::Intrinsic(_) => Shape::Plain,
            Component::Def(obj) => Shape::of_def(obj),
        }
    }

    /// Classify a bare definition object
    pub(crate) fn of_def(obj: &ObjectRef) -> Shape {
        // Raw descriptor read: classification must not fire getters.
        let marker = obj.borrow().get_own(&PropertyKey::from(ELEMENT_TYPE_KEY));
        if let Some(Property::Data {
            value: Value::Sym(sym),
            ..
        }) = marker
        {
            if sym == *MEMO_TYPE {
                return Shape::Memo;
            }
            if sym == *FORWARD_REF_TYPE {
                return Shape::ForwardRef;
            }
        }
        Shape::Plain
    }
}

/// Whether the component is a memoized definition
pub fn is_memo(component: &Component) -> bool {
    Shape::of(component) == Shape::Memo
}

/// Whether the component is a ref-forwarding definition
pub fn is_forward_ref(component: &Component) -> bool {
    Shape::of(component) == Shape::ForwardRef
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_shapes() {
        assert_eq!(Shape::of(&Component::intrinsic("div")), Shape::Plain);
        assert_eq!(Shape::of(&Component::def()), Shape::Plain);
        assert!(!is_memo(&Component::def()));
        assert!(!is_forward_ref(&Component::def()));
    }

    #[test]
    fn test_memo_shape() {
        let inner = Component::def();
        let memo = Component::memo(&inner, None);
        assert_eq!(Shape::of(&memo), Shape::Memo);
        assert!(is_memo(&memo));
        assert!(!is_forward_ref(&memo));
    }

    #[test]
    fn test_forward_ref_shape() {
        let fwd = Component::forward_ref(Value::str("render"));
        assert_eq!(Shape::of(&fwd), Shape::ForwardRef);
        assert!(is_forward_ref(&fwd));
        assert!(!is_memo(&fwd));
    }

    #[test]
    fn test_unknown_marker_classifies_plain() {
        let comp = Component::def();
        comp.define_value(ELEMENT_TYPE_KEY, Value::Sym(Symbol::with_description("other")))
            .unwrap();
        assert_eq!(Shape::of(&comp), Shape::Plain);
    }

    #[test]
    fn test_non_symbol_marker_classifies_plain() {
        let comp = Component::def();
        comp.define_value(ELEMENT_TYPE_KEY, Value::str("element.memo"))
            .unwrap();
        assert_eq!(Shape::of(&comp), Shape::Plain);
    }
}
