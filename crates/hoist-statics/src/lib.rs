//! Static hoisting for wrapped UI components
//!
//! Wrapper (higher-order) components should transparently expose the static
//! properties of the component they wrap, without leaking the framework's own
//! reserved slots or clobbering statics the wrapper already carries. This
//! crate implements that copy: shape-aware exclusion tables decide which keys
//! are framework-reserved, and the transfer moves full property descriptors
//! so getters stay live on the wrapper.
//!
//! # Example
//!
//! ```
//! use hoist_statics::{hoist_statics, Component, Value};
//!
//! let inner = Component::def();
//! inner.define_value("fetchData", Value::str("loader")).unwrap();
//! inner.define_value("displayName", Value::str("Inner")).unwrap();
//!
//! let wrapper = Component::def();
//! wrapper.define_value("displayName", Value::str("Wrapper")).unwrap();
//!
//! hoist_statics(&wrapper, &inner, None);
//!
//! // Custom statics transfer; reserved ones do not.
//! assert_eq!(wrapper.get(&"fetchData".into()), Some(Value::str("loader")));
//! assert_eq!(wrapper.get(&"displayName".into()), Some(Value::str("Wrapper")));
//! ```

#![warn(missing_docs)]

pub mod component;
pub mod hoist;
pub mod shape;
pub mod tables;

pub use component::Component;
pub use hoist::{hoist_statics, Blacklist};
pub use shape::{is_forward_ref, is_memo, Shape};

pub use hoist_object::{
    DynObject, Getter, ObjectError, ObjectRef, Property, PropertyKey, Setter, Symbol, Value,
};
