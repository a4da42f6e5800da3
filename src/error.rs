//! Error types shared across the crate.

use thiserror::Error;

use crate::identifier::Identifier;

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by generator construction and store insertion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A generator namespace failed the IRI-prefix precondition.
    ///
    /// Raised synchronously at construction; the caller must supply a
    /// corrected namespace. No shared state is touched.
    #[error("Namespace must be a valid IRI, ending with #, / or =")]
    InvalidNamespace,

    /// An object with this identifier is already present in the store.
    ///
    /// Never raised by a generator (generators only query membership).
    /// Seeing it for a freshly generated identifier means another actor
    /// inserted between the generator's check and the caller's `add`.
    #[error("an object with identifier '{0}' is already present in the store")]
    DuplicateIdentifier(Identifier),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_namespace_message_is_stable() {
        assert_eq!(
            Error::InvalidNamespace.to_string(),
            "Namespace must be a valid IRI, ending with #, / or ="
        );
    }

    #[test]
    fn duplicate_identifier_names_the_identifier() {
        let err = Error::DuplicateIdentifier(Identifier::iri("http://acplt.org/AAS/0000"));
        assert!(err.to_string().contains("http://acplt.org/AAS/0000"));
    }
}
