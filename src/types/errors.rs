//! Error types for ring-signature operations.
//!
//! Only *structural* defects surface as errors: an empty ring, an out-of-range
//! signer index, mismatched vector lengths, or input bytes that do not decode
//! to curve points. Cryptographic invalidity — a broken challenge chain or a
//! bad linking tag — is reported as `Ok(false)` from verification and carries
//! no detail about where the chain failed.

use core::fmt;

/// Result type alias for ring-signature operations.
pub type RingSigResult<T> = Result<T, RingSigError>;

/// Structural error raised by signature generation, verification, or decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingSigError {
    /// The ring contains no members.
    EmptyRing,

    /// Signer index does not address a ring position.
    SignerIndexOutOfBounds {
        /// The signer index
        index: usize,
        /// Ring size
        ring_size: usize,
    },

    /// A response vector's length differs from the ring size.
    ResponseCountMismatch {
        /// Expected length (the ring size)
        expected: usize,
        /// Actual response-vector length
        actual: usize,
    },

    /// A ring member's point field failed to decompress.
    InvalidRingMember {
        /// Position of the offending member
        index: usize,
    },

    /// A caller-supplied commitment point failed to decompress.
    InvalidCommitment,

    /// The caller-supplied key image failed to decompress (generation only;
    /// the verifier folds image validity into its boolean result).
    InvalidKeyImage,

    /// Encoded signature has the wrong total length for the ring size.
    InvalidEncodingLength {
        /// Expected byte length
        expected: usize,
        /// Actual byte length
        actual: usize,
    },

    /// Encoded scalar is not in canonical reduced form.
    NonCanonicalScalar,
}

impl fmt::Display for RingSigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RingSigError::EmptyRing => {
                write!(f, "ring is empty")
            }
            RingSigError::SignerIndexOutOfBounds { index, ring_size } => {
                write!(
                    f,
                    "signer index {index} out of bounds for ring size {ring_size}"
                )
            }
            RingSigError::ResponseCountMismatch { expected, actual } => {
                write!(
                    f,
                    "response vector length {actual} does not match ring size {expected}"
                )
            }
            RingSigError::InvalidRingMember { index } => {
                write!(f, "ring member {index} contains an invalid point encoding")
            }
            RingSigError::InvalidCommitment => {
                write!(f, "commitment point failed to decompress")
            }
            RingSigError::InvalidKeyImage => {
                write!(f, "key image failed to decompress")
            }
            RingSigError::InvalidEncodingLength { expected, actual } => {
                write!(
                    f,
                    "invalid signature encoding length: expected {expected}, got {actual}"
                )
            }
            RingSigError::NonCanonicalScalar => {
                write!(f, "scalar encoding is not canonical")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RingSigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RingSigError::SignerIndexOutOfBounds {
            index: 11,
            ring_size: 4,
        };
        let msg = err.to_string();
        assert!(msg.contains("11"));
        assert!(msg.contains('4'));
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(RingSigError::EmptyRing, RingSigError::EmptyRing);
        assert_ne!(
            RingSigError::EmptyRing,
            RingSigError::NonCanonicalScalar
        );
    }
}
