//! CLSAG signature value types and their byte codec.
//!
//! Signatures are immutable values with field-wise structural equality;
//! response-vector comparison is order-sensitive. The wire layout is the
//! natural fixed-order encoding, 32 bytes per element:
//! ```text
//! GG:   c || r[0..n] || K1
//! GGXG: c || r_g[0..n] || r_x[0..n] || K1 || K2 || K3
//! ```
//! Decoding rejects wrong total lengths and non-canonical scalar encodings;
//! point fields stay compressed, with curve validity checked at verification.

use alloc::vec::Vec;

use curve25519_dalek::edwards::CompressedEdwardsY;
use curve25519_dalek::Scalar;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::errors::{RingSigError, RingSigResult};

/// A 2-layer (GG) CLSAG signature.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClsagGgSignature {
    /// Challenge attached to ring position 0.
    pub c: Scalar,
    /// Response vector, one entry per ring position.
    pub r: Vec<Scalar>,
    /// Auxiliary linking tag for layer 1 (amount commitment).
    pub K1: CompressedEdwardsY,
}

/// A 4-layer (GGXG) CLSAG signature.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClsagGgxgSignature {
    /// Challenge attached to ring position 0.
    pub c: Scalar,
    /// Response vector for the G-keyed layers (0, 1, 3), one entry per
    /// ring position.
    pub r_g: Vec<Scalar>,
    /// Response vector for the X-keyed layer (2), one entry per ring
    /// position.
    pub r_x: Vec<Scalar>,
    /// Auxiliary linking tag for layer 1 (G).
    pub K1: CompressedEdwardsY,
    /// Auxiliary linking tag for layer 2 (X).
    pub K2: CompressedEdwardsY,
    /// Auxiliary linking tag for layer 3 (G).
    pub K3: CompressedEdwardsY,
}

/// Decode one canonical scalar at `offset`.
fn scalar_at(bytes: &[u8], offset: usize) -> RingSigResult<Scalar> {
    let mut buf = [0u8; 32];
    buf.copy_from_slice(&bytes[offset..offset + 32]);
    Option::from(Scalar::from_canonical_bytes(buf)).ok_or(RingSigError::NonCanonicalScalar)
}

/// Read one compressed point at `offset`.
fn point_at(bytes: &[u8], offset: usize) -> CompressedEdwardsY {
    let mut buf = [0u8; 32];
    buf.copy_from_slice(&bytes[offset..offset + 32]);
    CompressedEdwardsY(buf)
}

impl ClsagGgSignature {
    /// Encoded byte length for a given ring size.
    #[must_use]
    pub const fn encoded_len(ring_size: usize) -> usize {
        32 * (ring_size + 2)
    }

    /// Serialize to the fixed wire layout.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(Self::encoded_len(self.r.len()));
        out.extend_from_slice(&self.c.to_bytes());
        for r in &self.r {
            out.extend_from_slice(&r.to_bytes());
        }
        out.extend_from_slice(self.K1.as_bytes());
        out
    }

    /// Deserialize from the fixed wire layout for a ring of `ring_size`.
    ///
    /// # Errors
    /// `InvalidEncodingLength` on a wrong total length,
    /// `NonCanonicalScalar` if any scalar is not reduced.
    pub fn from_bytes(bytes: &[u8], ring_size: usize) -> RingSigResult<Self> {
        let expected = Self::encoded_len(ring_size);
        if bytes.len() != expected {
            return Err(RingSigError::InvalidEncodingLength {
                expected,
                actual: bytes.len(),
            });
        }

        let c = scalar_at(bytes, 0)?;
        let mut r = Vec::with_capacity(ring_size);
        for i in 0..ring_size {
            r.push(scalar_at(bytes, 32 * (1 + i))?);
        }
        let K1 = point_at(bytes, 32 * (1 + ring_size));

        Ok(Self { c, r, K1 })
    }
}

impl ClsagGgxgSignature {
    /// Encoded byte length for a given ring size.
    #[must_use]
    pub const fn encoded_len(ring_size: usize) -> usize {
        32 * (2 * ring_size + 4)
    }

    /// Serialize to the fixed wire layout.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(Self::encoded_len(self.r_g.len()));
        out.extend_from_slice(&self.c.to_bytes());
        for r in &self.r_g {
            out.extend_from_slice(&r.to_bytes());
        }
        for r in &self.r_x {
            out.extend_from_slice(&r.to_bytes());
        }
        out.extend_from_slice(self.K1.as_bytes());
        out.extend_from_slice(self.K2.as_bytes());
        out.extend_from_slice(self.K3.as_bytes());
        out
    }

    /// Deserialize from the fixed wire layout for a ring of `ring_size`.
    ///
    /// # Errors
    /// `InvalidEncodingLength` on a wrong total length,
    /// `NonCanonicalScalar` if any scalar is not reduced.
    pub fn from_bytes(bytes: &[u8], ring_size: usize) -> RingSigResult<Self> {
        let expected = Self::encoded_len(ring_size);
        if bytes.len() != expected {
            return Err(RingSigError::InvalidEncodingLength {
                expected,
                actual: bytes.len(),
            });
        }

        let c = scalar_at(bytes, 0)?;
        let mut r_g = Vec::with_capacity(ring_size);
        for i in 0..ring_size {
            r_g.push(scalar_at(bytes, 32 * (1 + i))?);
        }
        let mut r_x = Vec::with_capacity(ring_size);
        for i in 0..ring_size {
            r_x.push(scalar_at(bytes, 32 * (1 + ring_size + i))?);
        }
        let images = 32 * (1 + 2 * ring_size);
        let K1 = point_at(bytes, images);
        let K2 = point_at(bytes, images + 32);
        let K3 = point_at(bytes, images + 64);

        Ok(Self {
            c,
            r_g,
            r_x,
            K1,
            K2,
            K3,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use curve25519_dalek::constants::ED25519_BASEPOINT_POINT;

    fn gg_fixture() -> ClsagGgSignature {
        ClsagGgSignature {
            c: Scalar::from(5u64),
            r: vec![Scalar::from(6u64), Scalar::from(7u64), Scalar::from(8u64)],
            K1: (ED25519_BASEPOINT_POINT * Scalar::from(9u64)).compress(),
        }
    }

    #[test]
    fn test_gg_round_trip() {
        let sig = gg_fixture();
        let bytes = sig.to_bytes();
        assert_eq!(bytes.len(), ClsagGgSignature::encoded_len(3));
        assert_eq!(ClsagGgSignature::from_bytes(&bytes, 3).unwrap(), sig);
    }

    #[test]
    fn test_gg_rejects_wrong_length() {
        let sig = gg_fixture();
        let bytes = sig.to_bytes();
        assert_eq!(
            ClsagGgSignature::from_bytes(&bytes, 4).unwrap_err(),
            RingSigError::InvalidEncodingLength {
                expected: ClsagGgSignature::encoded_len(4),
                actual: bytes.len(),
            }
        );
    }

    #[test]
    fn test_gg_rejects_non_canonical_scalar() {
        let sig = gg_fixture();
        let mut bytes = sig.to_bytes();
        bytes[..32].copy_from_slice(&[0xff; 32]);
        assert_eq!(
            ClsagGgSignature::from_bytes(&bytes, 3).unwrap_err(),
            RingSigError::NonCanonicalScalar
        );
    }

    #[test]
    fn test_ggxg_round_trip() {
        let sig = ClsagGgxgSignature {
            c: Scalar::from(1u64),
            r_g: vec![Scalar::from(2u64), Scalar::from(3u64)],
            r_x: vec![Scalar::from(4u64), Scalar::from(5u64)],
            K1: (ED25519_BASEPOINT_POINT * Scalar::from(6u64)).compress(),
            K2: (ED25519_BASEPOINT_POINT * Scalar::from(7u64)).compress(),
            K3: (ED25519_BASEPOINT_POINT * Scalar::from(8u64)).compress(),
        };
        let bytes = sig.to_bytes();
        assert_eq!(bytes.len(), ClsagGgxgSignature::encoded_len(2));
        assert_eq!(ClsagGgxgSignature::from_bytes(&bytes, 2).unwrap(), sig);
    }

    #[test]
    fn test_equality_is_order_sensitive() {
        let a = gg_fixture();
        let mut b = a.clone();
        b.r.swap(0, 1);
        assert_ne!(a, b);
    }
}
