//! Object model errors

use thiserror::Error;

use crate::key::PropertyKey;

/// Errors raised by property definition and assignment
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ObjectError {
    /// The object is frozen and accepts no definitions or assignments
    #[error("cannot define `{key}`: object is frozen")]
    Frozen {
        /// Key of the rejected property
        key: PropertyKey,
    },

    /// The existing property is non-configurable and cannot be redefined
    #[error("cannot redefine non-configurable property `{key}`")]
    NonConfigurable {
        /// Key of the rejected property
        key: PropertyKey,
    },

    /// The data property is read-only
    #[error("cannot assign read-only property `{key}`")]
    NotWritable {
        /// Key of the rejected property
        key: PropertyKey,
    },

    /// The accessor property has no setter
    #[error("cannot assign `{key}`: accessor has no setter")]
    NoSetter {
        /// Key of the rejected property
        key: PropertyKey,
    },
}
