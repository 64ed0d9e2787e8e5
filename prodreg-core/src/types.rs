//! Domain types for the product registry.
//!
//! Both [`ProductRecord`] and [`Registry`] carry a flattened `extra` map so
//! fields this crate does not model survive a load/save cycle untouched.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed product name; the identity of a registry entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductName(pub String);

impl ProductName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `true` if the name is empty or only whitespace.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// `true` for lowercase, hyphenated slugs such as `starter` or `pro-max`.
    pub fn is_slug(&self) -> bool {
        !self.0.is_empty()
            && !self.0.starts_with('-')
            && !self.0.ends_with('-')
            && !self.0.contains("--")
            && self
                .0
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    }
}

impl fmt::Display for ProductName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for ProductName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProductName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// A single registered product.
///
/// A missing `name` deserializes as an empty name so callers can report it as
/// an invalid record instead of a parse failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    #[serde(default)]
    pub name: ProductName,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(flatten, default, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

/// `"description": null` reads as an empty description.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl ProductRecord {
    pub fn new(name: impl Into<ProductName>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            extra: Map::new(),
        }
    }
}

/// Root of the persisted registry: `{"products": [...]}`.
///
/// `products` is required; a document without it is not a registry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Registry {
    pub products: Vec<ProductRecord>,
    #[serde(flatten, default, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

impl Registry {
    /// Look up a product by name.
    pub fn get(&self, name: &ProductName) -> Option<&ProductRecord> {
        self.products.iter().find(|p| &p.name == name)
    }

    pub fn contains(&self, name: &ProductName) -> bool {
        self.get(name).is_some()
    }

    /// Product names in registry order.
    pub fn names(&self) -> impl Iterator<Item = &ProductName> {
        self.products.iter().map(|p| &p.name)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
