//! Property descriptors
//!
//! A property is either a stored value or an accessor pair. Cloning an
//! accessor descriptor clones the `Rc` behind its closures, so a descriptor
//! copied onto another object keeps invoking the same live getter/setter.

use std::fmt;
use std::rc::Rc;

use crate::value::Value;

/// A live getter closure
pub type Getter = Rc<dyn Fn() -> Value>;

/// A live setter closure
pub type Setter = Rc<dyn Fn(Value)>;

/// Full descriptor for one property
#[derive(Clone)]
pub enum Property {
    /// A stored value
    Data {
        /// The stored value
        value: Value,
        /// Whether assignment may replace the value
        writable: bool,
        /// Whether the key shows up in enumerations
        enumerable: bool,
        /// Whether the property may be redefined
        configurable: bool,
    },
    /// A live accessor pair
    Accessor {
        /// Getter, if readable
        get: Option<Getter>,
        /// Setter, if assignable
        set: Option<Setter>,
        /// Whether the key shows up in enumerations
        enumerable: bool,
        /// Whether the property may be redefined
        configurable: bool,
    },
}

impl Property {
    /// A writable, enumerable, configurable data property
    pub fn data(value: impl Into<Value>) -> Self {
        Property::Data {
            value: value.into(),
            writable: true,
            enumerable: true,
            configurable: true,
        }
    }

    /// An enumerable, configurable getter-only property
    pub fn getter(get: impl Fn() -> Value + 'static) -> Self {
        Property::Accessor {
            get: Some(Rc::new(get)),
            set: None,
            enumerable: true,
            configurable: true,
        }
    }

    /// An enumerable, configurable accessor property
    pub fn accessor(get: Option<Getter>, set: Option<Setter>) -> Self {
        Property::Accessor {
            get,
            set,
            enumerable: true,
            configurable: true,
        }
    }

    /// Same descriptor with `writable` replaced (no-op on accessors)
    pub fn with_writable(mut self, flag: bool) -> Self {
        if let Property::Data { writable, .. } = &mut self {
            *writable = flag;
        }
        self
    }

    /// Same descriptor with `enumerable` replaced
    pub fn with_enumerable(mut self, flag: bool) -> Self {
        match &mut self {
            Property::Data { enumerable, .. } | Property::Accessor { enumerable, .. } => {
                *enumerable = flag;
            }
        }
        self
    }

    /// Same descriptor with `configurable` replaced
    pub fn with_configurable(mut self, flag: bool) -> Self {
        match &mut self {
            Property::Data { configurable, .. } | Property::Accessor { configurable, .. } => {
                *configurable = flag;
            }
        }
        self
    }

    /// Whether this is an accessor descriptor
    pub fn is_accessor(&self) -> bool {
        matches!(self, Property::Accessor { .. })
    }

    /// The stored value, for data properties
    pub fn value(&self) -> Option<&Value> {
        match self {
            Property::Data { value, .. } => Some(value),
            Property::Accessor { .. } => None,
        }
    }

    /// Whether the key shows up in enumerations
    pub fn enumerable(&self) -> bool {
        match self {
            Property::Data { enumerable, .. } | Property::Accessor { enumerable, .. } => {
                *enumerable
            }
        }
    }

    /// Whether the property may be redefined
    pub fn configurable(&self) -> bool {
        match self {
            Property::Data { configurable, .. } | Property::Accessor { configurable, .. } => {
                *configurable
            }
        }
    }

    /// Whether assignment may replace the value (false for accessors)
    pub fn writable(&self) -> bool {
        match self {
            Property::Data { writable, .. } => *writable,
            Property::Accessor { .. } => false,
        }
    }

    /// Read the property: the stored value, or what the getter produces
    ///
    /// Returns `None` for a setter-only accessor.
    pub fn read(&self) -> Option<Value> {
        match self {
            Property::Data { value, .. } => Some(value.clone()),
            Property::Accessor { get, .. } => get.as_ref().map(|g| g()),
        }
    }
}

impl fmt::Debug for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Property::Data {
                value,
                writable,
                enumerable,
                configurable,
            } => f
                .debug_struct("Data")
                .field("value", value)
                .field("writable", writable)
                .field("enumerable", enumerable)
                .field("configurable", configurable)
                .finish(),
            Property::Accessor {
                get,
                set,
                enumerable,
                configurable,
            } => f
                .debug_struct("Accessor")
                .field("get", &get.is_some())
                .field("set", &set.is_some())
                .field("enumerable", enumerable)
                .field("configurable", configurable)
                .finish(),
        }
    }
}
