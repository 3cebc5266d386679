//! Property-descriptor object model
//!
//! Dynamic objects whose properties carry full descriptors (stored value or
//! live getter/setter pair, plus enumerable/configurable/writable flags) and
//! an optional prototype link. This is the substrate the statics hoister
//! copies through: transferring a descriptor, rather than a materialized
//! value, keeps accessors live on the receiving object.

#![warn(missing_docs)]

pub mod error;
pub mod key;
pub mod object;
pub mod property;
pub mod value;

pub use error::ObjectError;
pub use key::{PropertyKey, Symbol};
pub use object::{DynObject, ObjectRef};
pub use property::{Getter, Property, Setter};
pub use value::Value;
