//! Namespaced sequential and hinted identifier generation.

use crate::error::{Error, Result};
use crate::identifier::Identifier;
use crate::store::IdentifierLookup;

use super::IdentifierGenerator;

/// Generates human-readable IRI identifiers under a fixed namespace.
///
/// Identifiers are either sequentially numbered (`<namespace>0000`,
/// `<namespace>0001`, ...) or derived from a caller-supplied hint
/// (`<namespace><hint>`, disambiguated to `<namespace><hint>_0001` and
/// onwards on collision). Every candidate is checked against the store
/// before being returned, so the result is absent from the store at the
/// moment of the check.
///
/// The generator never inserts. The caller must add an object carrying
/// the returned identifier to the store before the next `generate_id`
/// call, or a later hinted call may return the same value again. The
/// sequential counter, by contrast, advances on every attempt and is
/// never reset, so hint-less calls never repeat even without inserts.
pub struct NamespaceIriGenerator<'a> {
    namespace: String,
    counter: u64,
    store: &'a dyn IdentifierLookup,
}

impl<'a> NamespaceIriGenerator<'a> {
    /// Creates a generator minting identifiers under `namespace`,
    /// checking candidates against `store`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidNamespace`] unless the namespace is
    /// non-empty and ends in `#`, `/` or `=`.
    pub fn new(namespace: impl Into<String>, store: &'a dyn IdentifierLookup) -> Result<Self> {
        let namespace = namespace.into();
        if !matches!(namespace.chars().last(), Some('#' | '/' | '=')) {
            return Err(Error::InvalidNamespace);
        }
        Ok(Self { namespace, counter: 0, store })
    }

    /// The namespace this generator mints under, verbatim as configured.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    fn next_sequential(&mut self) -> Identifier {
        loop {
            let candidate = Identifier::iri(format!("{}{:04}", self.namespace, self.counter));
            // Advance even when the candidate is returned, so the next
            // call never repeats it.
            self.counter += 1;
            if !self.store.contains_id(&candidate) {
                return candidate;
            }
        }
    }

    fn from_hint(&self, hint: &str) -> Identifier {
        let candidate = Identifier::iri(format!("{}{}", self.namespace, hint));
        if !self.store.contains_id(&candidate) {
            return candidate;
        }
        // Disambiguate with a per-call suffix starting at 1; the
        // sequential counter stays untouched.
        let mut suffix: u64 = 1;
        loop {
            let candidate = Identifier::iri(format!("{}{}_{:04}", self.namespace, hint, suffix));
            if !self.store.contains_id(&candidate) {
                return candidate;
            }
            suffix += 1;
        }
    }
}

impl IdentifierGenerator for NamespaceIriGenerator<'_> {
    fn generate_id(&mut self, hint: Option<&str>) -> Identifier {
        match hint {
            Some(hint) => self.from_hint(hint),
            None => self.next_sequential(),
        }
    }
}
