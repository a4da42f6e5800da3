//! Opaque UUID-based identifier generation.

use uuid::Builder;

use crate::adapters::OsRandomSource;
use crate::identifier::Identifier;
use crate::ports::RandomSource;

use super::IdentifierGenerator;

/// Generates opaque `urn:uuid:` identifiers.
///
/// Each identifier is drawn from a 128-bit random space and rendered in
/// the canonical hyphenated lowercase form, so repeated calls are
/// collision-improbable without consulting any store.
pub struct UuidGenerator {
    random: Box<dyn RandomSource>,
}

impl UuidGenerator {
    /// Creates a generator drawing from the operating system's randomness.
    #[must_use]
    pub fn new() -> Self {
        Self::with_source(Box::new(OsRandomSource::new()))
    }

    /// Creates a generator drawing from the given source.
    #[must_use]
    pub fn with_source(random: Box<dyn RandomSource>) -> Self {
        Self { random }
    }
}

impl Default for UuidGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentifierGenerator for UuidGenerator {
    fn generate_id(&mut self, _hint: Option<&str>) -> Identifier {
        let mut bytes = [0u8; 16];
        self.random.fill_bytes(&mut bytes);
        let uuid = Builder::from_random_bytes(bytes).into_uuid();
        Identifier::uuid(uuid.urn().to_string())
    }
}
