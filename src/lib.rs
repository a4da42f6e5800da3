//! Identifier generation and uniqueness enforcement for Asset
//! Administration Shell object graphs.
//!
//! Every globally addressable object in an AAS-style metadata model
//! (assets, shells, submodels, concept descriptions) carries a unique
//! [`Identifier`]. This crate mints new ones under two schemes:
//!
//! - [`UuidGenerator`] draws opaque, collision-improbable `urn:uuid:`
//!   identifiers from a 128-bit random space, independent of any store.
//! - [`NamespaceIriGenerator`] mints human-readable IRIs under a fixed
//!   namespace, sequentially numbered or derived from a caller-supplied
//!   hint, each candidate checked against an object store so it does not
//!   collide with an identifier already in use.
//!
//! Generators return identifier values only; inserting the object that
//! carries the identifier into the store is the caller's responsibility,
//! and must happen before the next generation call for the uniqueness
//! guarantee to hold.
//!
//! ```
//! use aas_ident::{
//!     Identifiable, Identifier, IdentifierGenerator, MemoryObjectStore, NamespaceIriGenerator,
//!     ObjectStore,
//! };
//!
//! struct Submodel {
//!     identification: Identifier,
//! }
//!
//! impl Identifiable for Submodel {
//!     fn identifier(&self) -> &Identifier {
//!         &self.identification
//!     }
//! }
//!
//! let store: MemoryObjectStore<Submodel> = MemoryObjectStore::new();
//! let mut generator = NamespaceIriGenerator::new("http://acplt.org/AAS/", &store)?;
//!
//! let id = generator.generate_id(None);
//! assert_eq!(id.id(), "http://acplt.org/AAS/0000");
//! store.add(Submodel { identification: id })?;
//!
//! let hinted = generator.generate_id(Some("Spülmaschine"));
//! assert_eq!(hinted.id(), "http://acplt.org/AAS/Spülmaschine");
//! # Ok::<(), aas_ident::Error>(())
//! ```

pub mod adapters;
pub mod error;
pub mod generate;
pub mod identifier;
pub mod ports;
pub mod store;

pub use error::{Error, Result};
pub use generate::{IdentifierGenerator, NamespaceIriGenerator, UuidGenerator};
pub use identifier::{IdType, Identifiable, Identifier};
pub use ports::RandomSource;
pub use store::{IdentifierLookup, MemoryObjectStore, ObjectStore};
