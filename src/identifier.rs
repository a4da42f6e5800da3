//! Identifier value type and the `Identifiable` contract.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Scheme of an [`Identifier`]'s literal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdType {
    /// An Internationalized Resource Identifier.
    Iri,
    /// An opaque `urn:uuid:` identifier.
    Uuid,
    /// Any other, locally agreed scheme.
    Custom,
}

/// Globally unique name of an [`Identifiable`] entity.
///
/// An identifier pairs a literal string with the scheme it follows. Two
/// identifiers are equal iff both fields are equal; equality and hashing
/// are value-based, so identifiers work as map and set keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identifier {
    id: String,
    id_type: IdType,
}

impl Identifier {
    /// Creates an identifier from a literal value and its scheme.
    #[must_use]
    pub fn new(id: impl Into<String>, id_type: IdType) -> Self {
        Self { id: id.into(), id_type }
    }

    /// Creates an IRI-typed identifier.
    #[must_use]
    pub fn iri(id: impl Into<String>) -> Self {
        Self::new(id, IdType::Iri)
    }

    /// Creates an opaque UUID-typed identifier.
    #[must_use]
    pub fn uuid(id: impl Into<String>) -> Self {
        Self::new(id, IdType::Uuid)
    }

    /// Creates an identifier under a locally agreed scheme.
    #[must_use]
    pub fn custom(id: impl Into<String>) -> Self {
        Self::new(id, IdType::Custom)
    }

    /// The identifier's literal value.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The scheme the literal value follows.
    #[must_use]
    pub fn id_type(&self) -> IdType {
        self.id_type
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

/// An entity owning exactly one [`Identifier`], assigned at construction.
///
/// The identifier is immutable from the generators' perspective; stores
/// key their contents on it.
pub trait Identifiable {
    /// Returns the identifier naming this entity.
    fn identifier(&self) -> &Identifier;
}
