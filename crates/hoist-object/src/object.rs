//! Prototype-linked dynamic object
//!
//! A `DynObject` is a table of own properties plus an optional prototype
//! link. The prototype chain terminates at the `None` sentinel; reads walk
//! it, definitions and assignments never do. Single-threaded by construction:
//! handles are `Rc<RefCell<_>>` and the model has no suspension points.

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::error::ObjectError;
use crate::key::PropertyKey;
use crate::property::Property;
use crate::value::Value;

/// Shared mutable handle to a [`DynObject`]
pub type ObjectRef = Rc<RefCell<DynObject>>;

/// A dynamic object: own properties, prototype link, frozen flag
#[derive(Debug, Default)]
pub struct DynObject {
    /// Own property table
    props: FxHashMap<PropertyKey, Property>,
    /// Own keys in insertion order (stable under redefinition)
    order: Vec<PropertyKey>,
    /// Prototype link; `None` is the root sentinel
    proto: Option<ObjectRef>,
    /// Frozen objects reject every define and assignment
    frozen: bool,
}

impl DynObject {
    /// Create a new empty object
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty object behind a shared handle
    pub fn new_ref() -> ObjectRef {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Define an own property from a full descriptor
    ///
    /// Fails when the object is frozen or when `key` names an existing
    /// non-configurable property. A redefined key keeps its original
    /// position in [`own_keys`](Self::own_keys).
    pub fn define(&mut self, key: PropertyKey, property: Property) -> Result<(), ObjectError> {
        if self.frozen {
            return Err(ObjectError::Frozen { key });
        }
        match self.props.get(&key) {
            Some(existing) if !existing.configurable() => {
                return Err(ObjectError::NonConfigurable { key });
            }
            Some(_) => {}
            None => self.order.push(key.clone()),
        }
        self.props.insert(key, property);
        Ok(())
    }

    /// Whether `key` names an own property
    pub fn has_own(&self, key: &PropertyKey) -> bool {
        self.props.contains_key(key)
    }

    /// Read the own descriptor for `key`, without invoking getters
    pub fn get_own(&self, key: &PropertyKey) -> Option<Property> {
        self.props.get(key).cloned()
    }

    /// All own keys: string keys first, then symbol keys, each group in
    /// insertion order
    ///
    /// Enumerability does not filter this list.
    pub fn own_keys(&self) -> Vec<PropertyKey> {
        self.order
            .iter()
            .filter(|k| !k.is_symbol())
            .chain(self.order.iter().filter(|k| k.is_symbol()))
            .cloned()
            .collect()
    }

    /// Number of own properties
    pub fn len(&self) -> usize {
        self.props.len()
    }

    /// Whether the object has no own properties
    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    /// Read `key` through the prototype chain
    ///
    /// Data properties yield their stored value; accessors invoke the live
    /// getter. `None` when no level of the chain carries the key, or when
    /// the nearest carrier is a setter-only accessor.
    pub fn get(&self, key: &PropertyKey) -> Option<Value> {
        if let Some(prop) = self.props.get(key) {
            return prop.read();
        }
        self.proto.as_ref().and_then(|p| p.borrow().get(key))
    }

    /// Assign `value` to the own property `key`
    ///
    /// Writable data properties take the value in place; accessors with a
    /// setter invoke it. An absent key becomes a fresh enumerable data
    /// property. Frozen objects reject every assignment. Assignment does not
    /// consult the prototype chain.
    pub fn set(&mut self, key: PropertyKey, value: Value) -> Result<(), ObjectError> {
        if self.frozen {
            return Err(ObjectError::Frozen { key });
        }
        match self.props.get_mut(&key) {
            Some(Property::Data {
                value: slot,
                writable,
                ..
            }) => {
                if !*writable {
                    return Err(ObjectError::NotWritable { key });
                }
                *slot = value;
                Ok(())
            }
            Some(Property::Accessor { set, .. }) => match set {
                Some(setter) => {
                    let setter = setter.clone();
                    setter(value);
                    Ok(())
                }
                None => Err(ObjectError::NoSetter { key }),
            },
            None => self.define(key, Property::data(value)),
        }
    }

    /// The prototype link, if any
    pub fn proto(&self) -> Option<ObjectRef> {
        self.proto.clone()
    }

    /// Replace the prototype link
    pub fn set_proto(&mut self, proto: Option<ObjectRef>) {
        self.proto = proto;
    }

    /// Freeze the object: every later define or assignment fails
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    /// Whether the object is frozen
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::Symbol;

    #[test]
    fn test_define_and_read() {
        let mut obj = DynObject::new();
        assert!(obj.is_empty());
        obj.define("foo".into(), Property::data("bar")).unwrap();

        assert!(obj.has_own(&"foo".into()));
        assert!(!obj.is_empty());
        assert_eq!(obj.get(&"foo".into()), Some(Value::str("bar")));
        assert_eq!(obj.get(&"missing".into()), None);
        assert_eq!(obj.len(), 1);
    }

    #[test]
    fn test_redefine_configurable() {
        let mut obj = DynObject::new();
        obj.define("foo".into(), Property::data(1i64)).unwrap();
        obj.define("foo".into(), Property::data(2i64)).unwrap();
        assert_eq!(obj.get(&"foo".into()), Some(Value::Int(2)));
        assert_eq!(obj.len(), 1);
    }

    #[test]
    fn test_redefine_non_configurable_fails() {
        let mut obj = DynObject::new();
        obj.define("foo".into(), Property::data(1i64).with_configurable(false))
            .unwrap();

        let err = obj.define("foo".into(), Property::data(2i64)).unwrap_err();
        assert_eq!(err, ObjectError::NonConfigurable { key: "foo".into() });
        assert_eq!(obj.get(&"foo".into()), Some(Value::Int(1)));
    }

    #[test]
    fn test_frozen_rejects_define_and_set() {
        let mut obj = DynObject::new();
        obj.define("foo".into(), Property::data(1i64)).unwrap();
        obj.freeze();

        assert!(obj.is_frozen());
        assert_eq!(
            obj.define("bar".into(), Property::data(2i64)),
            Err(ObjectError::Frozen { key: "bar".into() })
        );
        assert_eq!(
            obj.set("bar".into(), Value::Int(2)),
            Err(ObjectError::Frozen { key: "bar".into() })
        );
    }

    #[test]
    fn test_own_keys_order_strings_then_symbols() {
        let sym = Symbol::with_description("s");
        let mut obj = DynObject::new();
        obj.define(sym.clone().into(), Property::data(0i64)).unwrap();
        obj.define("b".into(), Property::data(1i64)).unwrap();
        obj.define("a".into(), Property::data(2i64)).unwrap();

        assert_eq!(
            obj.own_keys(),
            vec!["b".into(), "a".into(), PropertyKey::Sym(sym)]
        );
    }

    #[test]
    fn test_own_keys_include_non_enumerable() {
        let mut obj = DynObject::new();
        obj.define("hidden".into(), Property::data(1i64).with_enumerable(false))
            .unwrap();
        assert_eq!(obj.own_keys(), vec!["hidden".into()]);
    }

    #[test]
    fn test_redefined_key_keeps_position() {
        let mut obj = DynObject::new();
        obj.define("a".into(), Property::data(1i64)).unwrap();
        obj.define("b".into(), Property::data(2i64)).unwrap();
        obj.define("a".into(), Property::data(3i64)).unwrap();
        assert_eq!(obj.own_keys(), vec!["a".into(), "b".into()]);
    }

    #[test]
    fn test_get_walks_prototype_chain() {
        let root = DynObject::new_ref();
        root.borrow_mut()
            .define("inherited".into(), Property::data("root"))
            .unwrap();

        let mut obj = DynObject::new();
        obj.set_proto(Some(root));
        obj.define("own".into(), Property::data("leaf")).unwrap();

        assert_eq!(obj.get(&"own".into()), Some(Value::str("leaf")));
        assert_eq!(obj.get(&"inherited".into()), Some(Value::str("root")));
        assert!(!obj.has_own(&"inherited".into()));
    }

    #[test]
    fn test_set_read_only_fails() {
        let mut obj = DynObject::new();
        obj.define("foo".into(), Property::data(1i64).with_writable(false))
            .unwrap();
        assert_eq!(
            obj.set("foo".into(), Value::Int(2)),
            Err(ObjectError::NotWritable { key: "foo".into() })
        );
    }

    #[test]
    fn test_set_fresh_key_defines_data_property() {
        let mut obj = DynObject::new();
        obj.set("foo".into(), Value::Int(7)).unwrap();
        assert_eq!(obj.get(&"foo".into()), Some(Value::Int(7)));
        assert!(obj.get_own(&"foo".into()).unwrap().enumerable());
    }

    #[test]
    fn test_setter_only_assignment() {
        use std::cell::Cell;
        use std::rc::Rc;

        let seen = Rc::new(Cell::new(0i64));
        let s = seen.clone();
        let mut obj = DynObject::new();
        obj.define(
            "foo".into(),
            Property::accessor(
                None,
                Some(Rc::new(move |v: Value| {
                    s.set(v.as_int().unwrap_or(-1));
                })),
            ),
        )
        .unwrap();

        obj.set("foo".into(), Value::Int(9)).unwrap();
        assert_eq!(seen.get(), 9);
        assert_eq!(
            obj.set("fresh".into(), Value::Int(1)),
            Ok(()),
            "absent key falls back to a fresh data property"
        );
    }

    #[test]
    fn test_getter_only_assignment_fails() {
        let mut obj = DynObject::new();
        obj.define("foo".into(), Property::getter(|| Value::Int(1)))
            .unwrap();
        assert_eq!(
            obj.set("foo".into(), Value::Int(2)),
            Err(ObjectError::NoSetter { key: "foo".into() })
        );
    }
}
