//! Type vocabulary of the console `log` overloads.
//!
//! Two ordered lists drive everything downstream:
//! - `full`: every type with a single-argument overload
//! - `combinable`: the types permuted into the 2..=4 argument overloads
//!
//! The combinable list also backs a membership set so enumeration and
//! classification share one source of truth.

use std::collections::HashSet;
use std::fmt;

/// Types usable in multi-argument overloads, in enumeration order.
pub const COMBINABLE_TYPES: [&str; 4] = ["string", "uint", "address", "bool"];

/// Types with a single-argument overload that are not fixed-size byte arrays.
const BASE_TYPES: [&str; 6] = ["string", "uint", "int", "bool", "address", "bytes"];

/// Largest fixed-size byte array (`bytes32`).
const MAX_FIXED_BYTES: usize = 32;

/// A primitive Solidity type name. Identity only, no structure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeName(String);

impl TypeName {
    /// Create a type name from any string token.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The raw token.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `string` and `bytes` live in memory when passed to a Solidity function.
    pub fn is_reference(&self) -> bool {
        matches!(self.0.as_str(), "string" | "bytes")
    }

    /// The token with its first letter upper-cased (`bytes32` -> `Bytes32`).
    pub fn capitalized(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// The two type lists, constructed once and passed to the enumerator.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    full: Vec<TypeName>,
    combinable: Vec<TypeName>,
    combinable_set: HashSet<TypeName>,
}

impl Vocabulary {
    /// Build a vocabulary from explicit lists.
    pub fn new(full: Vec<TypeName>, combinable: Vec<TypeName>) -> Self {
        let combinable_set = combinable.iter().cloned().collect();
        Self { full, combinable, combinable_set }
    }

    /// The standard console vocabulary: 38 single types, 4 combinable types.
    pub fn console() -> Self {
        let full = BASE_TYPES
            .iter()
            .map(|t| TypeName::from(*t))
            .chain((1..=MAX_FIXED_BYTES).map(|n| TypeName::new(format!("bytes{n}"))))
            .collect();
        let combinable = COMBINABLE_TYPES.iter().map(|t| TypeName::from(*t)).collect();
        Self::new(full, combinable)
    }

    /// Every type with a single-argument overload, in order.
    pub fn full(&self) -> &[TypeName] {
        &self.full
    }

    /// Types permuted into multi-argument overloads, in order.
    pub fn combinable(&self) -> &[TypeName] {
        &self.combinable
    }

    /// O(1) membership test against the combinable types.
    pub fn is_combinable(&self, ty: &TypeName) -> bool {
        self.combinable_set.contains(ty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_vocabulary_sizes() {
        let vocab = Vocabulary::console();
        assert_eq!(vocab.full().len(), 38);
        assert_eq!(vocab.combinable().len(), 4);
    }

    #[test]
    fn test_full_types_order() {
        let vocab = Vocabulary::console();
        let names: Vec<&str> = vocab.full().iter().map(TypeName::as_str).collect();
        assert_eq!(&names[..7], &["string", "uint", "int", "bool", "address", "bytes", "bytes1"]);
        assert_eq!(names[37], "bytes32");
    }

    #[test]
    fn test_combinable_membership() {
        let vocab = Vocabulary::console();
        for ty in COMBINABLE_TYPES {
            assert!(vocab.is_combinable(&TypeName::from(ty)), "{ty} should be combinable");
        }
        assert!(!vocab.is_combinable(&TypeName::from("int")));
        assert!(!vocab.is_combinable(&TypeName::from("bytes")));
        assert!(!vocab.is_combinable(&TypeName::from("bytes32")));
    }

    #[test]
    fn test_full_contains_every_combinable() {
        let vocab = Vocabulary::console();
        for ty in vocab.combinable() {
            assert!(vocab.full().contains(ty));
        }
    }

    #[test]
    fn test_capitalized() {
        assert_eq!(TypeName::from("string").capitalized(), "String");
        assert_eq!(TypeName::from("bytes32").capitalized(), "Bytes32");
        assert_eq!(TypeName::from("").capitalized(), "");
    }

    #[test]
    fn test_reference_types() {
        assert!(TypeName::from("string").is_reference());
        assert!(TypeName::from("bytes").is_reference());
        assert!(!TypeName::from("bytes1").is_reference());
        assert!(!TypeName::from("address").is_reference());
    }
}
