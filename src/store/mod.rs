//! Identifiable object store — uniqueness-enforcing collections.
//!
//! Stores are set-like collections keyed by [`Identifier`], with the
//! invariant that no two contained objects share an identifier. The
//! generators consume only the [`IdentifierLookup`] half of the contract;
//! insertion of generated identifiers is always the caller's job.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{Error, Result};
use crate::identifier::{Identifiable, Identifier};

/// Membership queries by identifier.
///
/// The only store capability the generators consume. A lookup answers
/// whether *some* contained object carries the given identifier,
/// regardless of which object that is.
pub trait IdentifierLookup {
    /// Returns `true` if an object with this identifier is present.
    fn contains_id(&self, id: &Identifier) -> bool;
}

/// A collection of identifiable objects with unique identifiers.
///
/// Methods take `&self` so that a generator holding a shared borrow for
/// lookups and the caller inserting generated identifiers can coexist;
/// implementations provide interior mutability. Cross-call atomicity is
/// not promised: between a generator's membership check and the caller's
/// [`add`](ObjectStore::add), another actor may claim the identifier, in
/// which case `add` reports the duplicate.
pub trait ObjectStore<T: Identifiable>: IdentifierLookup {
    /// Returns `true` if an object with the same identifier is present.
    fn contains(&self, object: &T) -> bool {
        self.contains_id(object.identifier())
    }

    /// Inserts an object, keyed by its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateIdentifier`] if an object with the same
    /// identifier is already present; the store is left unchanged.
    fn add(&self, object: T) -> Result<()>;

    /// Removes and returns the object with this identifier, if present.
    fn remove(&self, id: &Identifier) -> Option<T>;

    /// Number of objects currently held.
    fn len(&self) -> usize;

    /// Returns `true` if the store holds no objects.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory store backed by a hash map keyed by identifier.
///
/// Each instance starts from its own fresh, empty map.
pub struct MemoryObjectStore<T> {
    objects: Mutex<HashMap<Identifier, T>>,
}

impl<T> MemoryObjectStore<T> {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { objects: Mutex::new(HashMap::new()) }
    }
}

impl<T> Default for MemoryObjectStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> IdentifierLookup for MemoryObjectStore<T> {
    fn contains_id(&self, id: &Identifier) -> bool {
        self.objects.lock().expect("store lock poisoned").contains_key(id)
    }
}

impl<T: Identifiable> ObjectStore<T> for MemoryObjectStore<T> {
    fn add(&self, object: T) -> Result<()> {
        let mut objects = self.objects.lock().expect("store lock poisoned");
        match objects.entry(object.identifier().clone()) {
            Entry::Occupied(entry) => Err(Error::DuplicateIdentifier(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(object);
                Ok(())
            }
        }
    }

    fn remove(&self, id: &Identifier) -> Option<T> {
        self.objects.lock().expect("store lock poisoned").remove(id)
    }

    fn len(&self) -> usize {
        self.objects.lock().expect("store lock poisoned").len()
    }
}
