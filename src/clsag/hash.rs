//! CLSAG hashing: aggregation coefficients, ring transcripts, and the
//! per-round challenge.
//!
//! All hashes are Keccak-256 reduced to a scalar mod ℓ, with 32-byte padded
//! domain separators. The aggregation coefficients are pure functions of
//! public ring data and the full image set, so generator and verifier derive
//! identical weights:
//! ```text
//! mu_l = Hs(tag_l || ring || ki || K1 [|| K2 || K3])
//! ```
//! The per-round challenge binds the message, the full ring transcript, the
//! commitment set, all images, and the round's commitment points:
//! ```text
//! c[i+1] = Hs(round_tag || m || ring || pseudo_out [|| extended] ||
//!             ki || K1 [|| K2 || K3] || L/R points of round i)
//! ```
//! The invariant part of that input is absorbed once into a reusable Keccak
//! state ([`RoundHasher`]); each round clones it and absorbs only its own
//! commitment points.

use alloc::vec::Vec;

use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint};
use curve25519_dalek::Scalar;
use sha3::{Digest, Keccak256};

use super::constants::{
    pad_domain_separator, CLSAG_GGXG_AGG_0, CLSAG_GGXG_AGG_1, CLSAG_GGXG_AGG_2, CLSAG_GGXG_AGG_3,
    CLSAG_GG_AGG_0, CLSAG_GG_AGG_1,
};
use crate::types::ring::{KeyImage, RingMember, RingMemberExt};

/// Compute hash-to-scalar: Keccak-256 interpreted as a scalar mod ℓ.
#[inline]
#[must_use]
pub fn keccak256_to_scalar(data: &[u8]) -> Scalar {
    let hash = Keccak256::digest(data);
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&hash);
    Scalar::from_bytes_mod_order(bytes)
}

/// Hash-to-scalar under a padded domain tag.
fn tagged_scalar(tag: &[u8], data: &[u8]) -> Scalar {
    let mut hasher = Keccak256::new();
    hasher.update(pad_domain_separator(tag));
    hasher.update(data);
    let hash = hasher.finalize();
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&hash);
    Scalar::from_bytes_mod_order(bytes)
}

/// Serialize a 2-layer ring in order: `P_0 || A_0 || ... || P_{n-1} || A_{n-1}`.
///
/// Fields are absorbed exactly as stored (premultiplied forms included), so
/// the transcript is byte-identical for generator and verifier.
pub(crate) fn serialize_ring_gg(ring: &[RingMember]) -> Vec<u8> {
    let mut out = Vec::with_capacity(ring.len() * 64);
    for member in ring {
        out.extend_from_slice(member.stealth_address.as_bytes());
        out.extend_from_slice(member.amount_commitment.as_bytes());
    }
    out
}

/// Serialize a 4-layer ring in order: `P_i || A_i || Q_i` per member.
pub(crate) fn serialize_ring_ggxg(ring: &[RingMemberExt]) -> Vec<u8> {
    let mut out = Vec::with_capacity(ring.len() * 96);
    for member in ring {
        out.extend_from_slice(member.stealth_address.as_bytes());
        out.extend_from_slice(member.amount_commitment.as_bytes());
        out.extend_from_slice(member.concealing_point.as_bytes());
    }
    out
}

/// Derive the per-layer binding weights `(mu_0, mu_1)` for the 2-layer scheme.
///
/// # Formula
/// ```text
/// mu_0 = Hs(CLSAG_GG_agg_0 || ring || ki || K1)
/// mu_1 = Hs(CLSAG_GG_agg_1 || ring || ki || K1)
/// ```
#[must_use]
pub fn derive_aggregation_coefficients_gg(
    ring: &[RingMember],
    key_image: &KeyImage,
    K1: &CompressedEdwardsY,
) -> (Scalar, Scalar) {
    let mut data = serialize_ring_gg(ring);
    data.extend_from_slice(key_image.as_bytes());
    data.extend_from_slice(K1.as_bytes());

    (
        tagged_scalar(CLSAG_GG_AGG_0, &data),
        tagged_scalar(CLSAG_GG_AGG_1, &data),
    )
}

/// Derive the per-layer binding weights `[mu_0, mu_1, mu_2, mu_3]` for the
/// 4-layer scheme, over the ring and the full image set.
#[must_use]
pub fn derive_aggregation_coefficients_ggxg(
    ring: &[RingMemberExt],
    key_image: &KeyImage,
    K1: &CompressedEdwardsY,
    K2: &CompressedEdwardsY,
    K3: &CompressedEdwardsY,
) -> [Scalar; 4] {
    let mut data = serialize_ring_ggxg(ring);
    data.extend_from_slice(key_image.as_bytes());
    data.extend_from_slice(K1.as_bytes());
    data.extend_from_slice(K2.as_bytes());
    data.extend_from_slice(K3.as_bytes());

    [
        tagged_scalar(CLSAG_GGXG_AGG_0, &data),
        tagged_scalar(CLSAG_GGXG_AGG_1, &data),
        tagged_scalar(CLSAG_GGXG_AGG_2, &data),
        tagged_scalar(CLSAG_GGXG_AGG_3, &data),
    ]
}

/// Assemble the invariant part of the round-challenge input: the serialized
/// ring, the raw (non-premultiplied) commitment points, and all images.
pub(crate) fn chain_transcript(
    ring_bytes: &[u8],
    raw_commitments: &[EdwardsPoint],
    images: &[&CompressedEdwardsY],
) -> Vec<u8> {
    let mut out = Vec::with_capacity(ring_bytes.len() + 32 * (raw_commitments.len() + images.len()));
    out.extend_from_slice(ring_bytes);
    for point in raw_commitments {
        out.extend_from_slice(point.compress().as_bytes());
    }
    for image in images {
        out.extend_from_slice(image.as_bytes());
    }
    out
}

/// Challenge hasher for one signature's ring traversal.
///
/// Holds the Keccak state pre-loaded with the round domain tag, the message,
/// and the chain transcript; [`RoundHasher::next_challenge`] clones that state
/// and absorbs a round's commitment points in order.
#[derive(Clone)]
pub(crate) struct RoundHasher {
    prefix: Keccak256,
}

impl RoundHasher {
    /// Absorb the invariant challenge input once.
    pub fn new(tag: &[u8], message: &[u8; 32], transcript: &[u8]) -> Self {
        let mut prefix = Keccak256::new();
        prefix.update(pad_domain_separator(tag));
        prefix.update(message);
        prefix.update(transcript);
        Self { prefix }
    }

    /// Produce the next challenge from this round's commitment points
    /// (`L`/`R` pairs, one pair per proof dimension, in fixed order).
    pub fn next_challenge(&self, round_points: &[EdwardsPoint]) -> Scalar {
        let mut hasher = self.prefix.clone();
        for point in round_points {
            hasher.update(point.compress().as_bytes());
        }
        let hash = hasher.finalize();
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&hash);
        Scalar::from_bytes_mod_order(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curve25519_dalek::constants::ED25519_BASEPOINT_POINT;

    fn member(seed: u64) -> RingMember {
        let p = ED25519_BASEPOINT_POINT * Scalar::from(seed);
        let a = ED25519_BASEPOINT_POINT * Scalar::from(seed + 1000);
        RingMember {
            stealth_address: p.compress(),
            amount_commitment: a.compress(),
        }
    }

    fn image(seed: u64) -> KeyImage {
        KeyImage((ED25519_BASEPOINT_POINT * Scalar::from(seed)).compress())
    }

    #[test]
    fn test_coefficients_deterministic() {
        let ring = [member(1), member(2)];
        let ki = image(3);
        let k1 = image(4).0;

        let a = derive_aggregation_coefficients_gg(&ring, &ki, &k1);
        let b = derive_aggregation_coefficients_gg(&ring, &ki, &k1);
        assert_eq!(a, b);
    }

    #[test]
    fn test_coefficients_distinct_per_layer() {
        let ring = [member(1), member(2)];
        let (mu_0, mu_1) = derive_aggregation_coefficients_gg(&ring, &image(3), &image(4).0);
        assert_ne!(mu_0, mu_1);

        let mu = derive_aggregation_coefficients_ggxg(
            &[],
            &image(3),
            &image(4).0,
            &image(5).0,
            &image(6).0,
        );
        for (i, a) in mu.iter().enumerate() {
            for b in &mu[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_coefficients_sensitive_to_ring_order() {
        let ki = image(3);
        let k1 = image(4).0;
        let forward = derive_aggregation_coefficients_gg(&[member(1), member(2)], &ki, &k1);
        let swapped = derive_aggregation_coefficients_gg(&[member(2), member(1)], &ki, &k1);
        assert_ne!(forward, swapped);
    }

    #[test]
    fn test_round_hasher_deterministic_and_point_sensitive() {
        let transcript = serialize_ring_gg(&[member(1), member(2)]);
        let hasher = RoundHasher::new(b"test_round", &[9u8; 32], &transcript);

        let l = ED25519_BASEPOINT_POINT * Scalar::from(5u64);
        let r = ED25519_BASEPOINT_POINT * Scalar::from(6u64);

        assert_eq!(hasher.next_challenge(&[l, r]), hasher.next_challenge(&[l, r]));
        assert_ne!(hasher.next_challenge(&[l, r]), hasher.next_challenge(&[r, l]));
    }

    #[test]
    fn test_keccak256_to_scalar_deterministic() {
        assert_eq!(keccak256_to_scalar(b"data"), keccak256_to_scalar(b"data"));
        assert_ne!(keccak256_to_scalar(b"data"), keccak256_to_scalar(b"atad"));
    }
}
