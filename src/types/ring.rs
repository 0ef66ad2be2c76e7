//! Ring member records and linking-tag value types.
//!
//! A ring is an ordered sequence of member records; its order is part of the
//! hashed transcript, so permuting members invalidates any signature made over
//! it. Rings are always passed by borrowed slice — this crate never copies or
//! mutates caller-held ring data.
//!
//! ## Premultiplication states
//!
//! Point fields carry an explicit cofactor convention that is part of their
//! contract, not incidental:
//!
//! - `stealth_address` is the raw one-time key `P` — NOT premultiplied.
//! - `amount_commitment` and `concealing_point` are stored premultiplied by
//!   1/8 (the inverse of the curve cofactor); the engine restores the real
//!   point with a single multiply-by-8 when aggregating.

use core::fmt;

use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint};
use curve25519_dalek::Scalar;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One ring entry for the 2-layer (GG) scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RingMember {
    /// One-time stealth address `P` — raw, not premultiplied.
    pub stealth_address: CompressedEdwardsY,
    /// Amount commitment `A` — premultiplied by 1/8.
    pub amount_commitment: CompressedEdwardsY,
}

/// One ring entry for the 4-layer (GGXG) scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RingMemberExt {
    /// One-time stealth address `P` — raw, not premultiplied.
    pub stealth_address: CompressedEdwardsY,
    /// Amount commitment `A` — premultiplied by 1/8.
    pub amount_commitment: CompressedEdwardsY,
    /// Concealing point `Q` — premultiplied by 1/8.
    pub concealing_point: CompressedEdwardsY,
}

/// A linking tag (key image): `secret * Hp(P)` for one tracked layer.
///
/// Deterministic in the secret and its own public point, so reusing the same
/// secret identity across signatures yields the same tag — the double-spend
/// detector. Stored compressed; validity (decompression, prime-subgroup
/// membership, non-identity) is checked by the verifier, not assumed here.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KeyImage(pub CompressedEdwardsY);

impl KeyImage {
    /// Wrap a 32-byte compressed point.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(CompressedEdwardsY(bytes))
    }

    /// The compressed 32-byte encoding.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0 .0
    }

    /// Decompress to an Edwards point, if the encoding is valid.
    #[must_use]
    pub fn decompress(&self) -> Option<EdwardsPoint> {
        self.0.decompress()
    }
}

impl fmt::Debug for KeyImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyImage({})", hex::encode(self.as_bytes()))
    }
}

impl fmt::Display for KeyImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.as_bytes()))
    }
}

/// Multiply a point by the inverse of the curve cofactor (1/8 mod ℓ).
///
/// This is how commitments are put into their stored, premultiplied form.
/// For a prime-subgroup point the operation is undone exactly by one
/// `mul_by_cofactor()`.
#[must_use]
pub fn mul_by_cofactor_inverse(point: &EdwardsPoint) -> EdwardsPoint {
    point * Scalar::from(8u64).invert()
}

#[cfg(test)]
mod tests {
    use super::*;
    use curve25519_dalek::constants::ED25519_BASEPOINT_POINT;

    #[test]
    fn test_cofactor_inverse_round_trip() {
        let p = ED25519_BASEPOINT_POINT * Scalar::from(42u64);
        let stored = mul_by_cofactor_inverse(&p);
        assert_ne!(stored, p);
        assert_eq!(stored.mul_by_cofactor(), p);
    }

    #[test]
    fn test_key_image_bytes_round_trip() {
        let p = ED25519_BASEPOINT_POINT * Scalar::from(7u64);
        let ki = KeyImage(p.compress());
        assert_eq!(KeyImage::from_bytes(*ki.as_bytes()), ki);
        assert_eq!(ki.decompress(), Some(p));
    }

    #[test]
    fn test_key_image_display_is_hex() {
        let ki = KeyImage::from_bytes([0u8; 32]);
        assert_eq!(ki.to_string().len(), 64);
    }
}
