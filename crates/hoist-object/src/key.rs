//! Property keys: interned-identity symbols and string names

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

/// Global counter for generating unique symbol identities
static NEXT_SYMBOL_ID: AtomicU64 = AtomicU64::new(1);

/// Generate a new unique symbol id
fn generate_symbol_id() -> u64 {
    NEXT_SYMBOL_ID.fetch_add(1, Ordering::Relaxed)
}

/// A process-unique symbol key
///
/// Every call to [`Symbol::new`] mints a fresh identity; clones share it.
/// The description is diagnostic only and takes no part in equality.
#[derive(Clone, Debug)]
pub struct Symbol {
    id: u64,
    description: Option<String>,
}

impl Symbol {
    /// Mint a new symbol with no description
    pub fn new() -> Self {
        Self {
            id: generate_symbol_id(),
            description: None,
        }
    }

    /// Mint a new symbol with a diagnostic description
    pub fn with_description(description: impl Into<String>) -> Self {
        Self {
            id: generate_symbol_id(),
            description: Some(description.into()),
        }
    }

    /// Diagnostic description, if one was given
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl Default for Symbol {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(d) => write!(f, "Symbol({d})"),
            None => write!(f, "Symbol()"),
        }
    }
}

/// A key naming one own property on a [`DynObject`](crate::DynObject)
///
/// String and symbol keys live in the same property table and are treated
/// alike everywhere except in the string-keyed exclusion tables of the
/// hoister.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    /// A string-named property
    Str(String),
    /// A symbol-keyed property
    Sym(Symbol),
}

impl PropertyKey {
    /// The string name, if this is a string key
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyKey::Str(name) => Some(name),
            PropertyKey::Sym(_) => None,
        }
    }

    /// Whether this is a symbol key
    pub fn is_symbol(&self) -> bool {
        matches!(self, PropertyKey::Sym(_))
    }
}

impl From<&str> for PropertyKey {
    fn from(name: &str) -> Self {
        PropertyKey::Str(name.to_string())
    }
}

impl From<String> for PropertyKey {
    fn from(name: String) -> Self {
        PropertyKey::Str(name)
    }
}

impl From<Symbol> for PropertyKey {
    fn from(sym: Symbol) -> Self {
        PropertyKey::Sym(sym)
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyKey::Str(name) => write!(f, "{name}"),
            PropertyKey::Sym(sym) => write!(f, "{sym}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_identity() {
        let a = Symbol::with_description("foo");
        let b = Symbol::with_description("foo");
        assert_ne!(a, b, "same description, distinct identity");
        assert_eq!(a, a.clone(), "clones share identity");
    }

    #[test]
    fn test_symbol_description() {
        let s = Symbol::with_description("marker");
        assert_eq!(s.description(), Some("marker"));
        assert_eq!(Symbol::new().description(), None);
    }

    #[test]
    fn test_symbol_display() {
        assert_eq!(format!("{}", Symbol::with_description("m")), "Symbol(m)");
        assert_eq!(format!("{}", Symbol::new()), "Symbol()");
    }

    #[test]
    fn test_key_from_str() {
        let key = PropertyKey::from("displayName");
        assert_eq!(key.as_str(), Some("displayName"));
        assert!(!key.is_symbol());
    }

    #[test]
    fn test_key_from_symbol() {
        let sym = Symbol::with_description("foo");
        let key = PropertyKey::from(sym.clone());
        assert!(key.is_symbol());
        assert_eq!(key.as_str(), None);
        assert_eq!(key, PropertyKey::Sym(sym));
    }

    #[test]
    fn test_distinct_symbols_are_distinct_keys() {
        let a = PropertyKey::from(Symbol::new());
        let b = PropertyKey::from(Symbol::new());
        assert_ne!(a, b);
    }
}
