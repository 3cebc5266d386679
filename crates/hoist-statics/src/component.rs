//! Component definitions
//!
//! A component is either an intrinsic host-element tag ("div", "input") or a
//! definition object carrying statics. Intrinsics never carry statics; every
//! helper on [`Component`] treats them as inert.

use hoist_object::{DynObject, ObjectError, ObjectRef, Property, PropertyKey, Value};

use crate::shape::{ELEMENT_TYPE_KEY, FORWARD_REF_TYPE, MEMO_TYPE};

/// A UI-component definition
#[derive(Debug, Clone)]
pub enum Component {
    /// Host-element tag; carries no statics
    Intrinsic(String),
    /// Definition object
    Def(ObjectRef),
}

impl Component {
    /// An intrinsic host-element tag
    pub fn intrinsic(tag: impl Into<String>) -> Self {
        Component::Intrinsic(tag.into())
    }

    /// A fresh plain definition
    pub fn def() -> Self {
        Component::Def(DynObject::new_ref())
    }

    /// A fresh definition whose statics inherit from `parent`'s definition
    ///
    /// Models class-style static inheritance: the new definition's prototype
    /// links to the parent definition object. An intrinsic parent contributes
    /// nothing, so the result is a plain definition.
    pub fn class_def(parent: &Component) -> Self {
        let def = DynObject::new_ref();
        if let Component::Def(parent_obj) = parent {
            def.borrow_mut().set_proto(Some(parent_obj.clone()));
        }
        Component::Def(def)
    }

    /// A memoized wrapper around `inner`
    ///
    /// Branded with the memo marker; carries the wrapped definition under
    /// `type` and, when given, the comparison function slot under `compare`.
    pub fn memo(inner: &Component, compare: Option<Value>) -> Self {
        let def = DynObject::new_ref();
        {
            let mut obj = def.borrow_mut();
            obj.define(
                ELEMENT_TYPE_KEY.into(),
                Property::data(Value::Sym(MEMO_TYPE.clone())).with_enumerable(false),
            )
            .ok();
            obj.define("type".into(), Property::data(Value::from(inner.clone())))
                .ok();
            if let Some(compare) = compare {
                obj.define("compare".into(), Property::data(compare)).ok();
            }
        }
        Component::Def(def)
    }

    /// A ref-forwarding definition carrying its render slot
    pub fn forward_ref(render: Value) -> Self {
        let def = DynObject::new_ref();
        {
            let mut obj = def.borrow_mut();
            obj.define(
                ELEMENT_TYPE_KEY.into(),
                Property::data(Value::Sym(FORWARD_REF_TYPE.clone())).with_enumerable(false),
            )
            .ok();
            obj.define("render".into(), Property::data(render)).ok();
        }
        Component::Def(def)
    }

    /// The definition object, if this is not an intrinsic
    pub fn object(&self) -> Option<&ObjectRef> {
        match self {
            Component::Intrinsic(_) => None,
            Component::Def(obj) => Some(obj),
        }
    }

    /// Define a static from a full descriptor
    ///
    /// Intrinsics carry no statics; defining on one is silently ignored.
    pub fn define(
        &self,
        key: impl Into<PropertyKey>,
        property: Property,
    ) -> Result<(), ObjectError> {
        match self {
            Component::Intrinsic(_) => Ok(()),
            Component::Def(obj) => obj.borrow_mut().define(key.into(), property),
        }
    }

    /// Define an enumerable data static
    pub fn define_value(
        &self,
        key: impl Into<PropertyKey>,
        value: impl Into<Value>,
    ) -> Result<(), ObjectError> {
        self.define(key, Property::data(value))
    }

    /// Read a static through the definition's prototype chain
    pub fn get(&self, key: &PropertyKey) -> Option<Value> {
        self.object().and_then(|obj| obj.borrow().get(key))
    }

    /// Whether the definition itself carries `key`
    pub fn has_own(&self, key: &PropertyKey) -> bool {
        self.object().is_some_and(|obj| obj.borrow().has_own(key))
    }

    /// All own static keys of the definition
    pub fn own_keys(&self) -> Vec<PropertyKey> {
        self.object()
            .map(|obj| obj.borrow().own_keys())
            .unwrap_or_default()
    }

    /// Link this definition's statics to inherit from `parent`'s
    pub fn set_proto(&self, parent: &Component) {
        if let (Component::Def(obj), Component::Def(parent_obj)) = (self, parent) {
            obj.borrow_mut().set_proto(Some(parent_obj.clone()));
        }
    }

    /// Freeze the definition: every later define fails
    pub fn freeze(&self) {
        if let Component::Def(obj) = self {
            obj.borrow_mut().freeze();
        }
    }
}

impl From<&str> for Component {
    fn from(tag: &str) -> Self {
        Component::intrinsic(tag)
    }
}

impl From<Component> for Value {
    fn from(component: Component) -> Self {
        match component {
            Component::Intrinsic(tag) => Value::Str(tag),
            Component::Def(obj) => Value::Object(obj),
        }
    }
}
