//! Identifier generators.
//!
//! Two strategies for minting new identifiers: opaque random UUIDs
//! ([`UuidGenerator`]) and human-readable namespaced IRIs checked against
//! a store ([`NamespaceIriGenerator`]).

mod namespace;
mod opaque;

pub use namespace::NamespaceIriGenerator;
pub use opaque::UuidGenerator;

use crate::identifier::Identifier;

/// Mints new identifiers.
///
/// Implementations return identifier values only and never insert them
/// anywhere; adding an object carrying the identifier to a store is the
/// caller's responsibility. A caller that skips that insert before the
/// next call may be handed the same identifier again on the hinted path.
pub trait IdentifierGenerator {
    /// Generates a new identifier.
    ///
    /// `hint` is a short human-readable string (an asset nickname, say)
    /// the identifier should be derived from where the scheme supports
    /// it; generators with no use for it ignore it.
    fn generate_id(&mut self, hint: Option<&str>) -> Identifier;
}
