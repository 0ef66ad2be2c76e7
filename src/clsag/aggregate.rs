//! Ring aggregation: folding each member's per-layer public points into one
//! point per ring position.
//!
//! The stored `amount_commitment` / `concealing_point` fields arrive
//! premultiplied by 1/8; decompression here restores the real points with a
//! single `mul_by_cofactor()`. That is the only place the cofactor multiply is
//! applied to ring data — the commitment arguments' own convention is handled
//! at the generate/verify boundary (see `generate` and `verify`).
//!
//! For the 4-layer scheme, layers 0, 1 and 3 (all keyed over `G`) fold into
//! the W vector, while layer 2 (keyed over `X`) stays an independently tracked
//! dimension with its own per-position public points:
//! ```text
//! W_i = mu_0 * P_i + mu_1 * (8*A_i - pseudo_out) + mu_3 * (8*Q_i - extended)
//! X_i = mu_2 * 8*Q_i
//! ```

use alloc::vec::Vec;

use curve25519_dalek::edwards::EdwardsPoint;
use curve25519_dalek::Scalar;

use crate::types::errors::{RingSigError, RingSigResult};
use crate::types::ring::{RingMember, RingMemberExt};

/// Decompressed 2-layer ring data, cofactor restored.
pub(crate) struct GgRingData {
    /// Stealth addresses `P_i` (raw).
    pub stealth: Vec<EdwardsPoint>,
    /// Amount commitments, restored: `8 * stored A_i`.
    pub commitments: Vec<EdwardsPoint>,
}

/// Decompressed 4-layer ring data, cofactor restored.
pub(crate) struct GgxgRingData {
    /// Stealth addresses `P_i` (raw).
    pub stealth: Vec<EdwardsPoint>,
    /// Amount commitments, restored: `8 * stored A_i`.
    pub commitments: Vec<EdwardsPoint>,
    /// Concealing points, restored: `8 * stored Q_i`.
    pub concealing: Vec<EdwardsPoint>,
}

pub(crate) fn decompress_ring_gg(ring: &[RingMember]) -> RingSigResult<GgRingData> {
    let mut stealth = Vec::with_capacity(ring.len());
    let mut commitments = Vec::with_capacity(ring.len());
    for (index, member) in ring.iter().enumerate() {
        let p = member
            .stealth_address
            .decompress()
            .ok_or(RingSigError::InvalidRingMember { index })?;
        let a = member
            .amount_commitment
            .decompress()
            .ok_or(RingSigError::InvalidRingMember { index })?;
        stealth.push(p);
        commitments.push(a.mul_by_cofactor());
    }
    Ok(GgRingData {
        stealth,
        commitments,
    })
}

pub(crate) fn decompress_ring_ggxg(ring: &[RingMemberExt]) -> RingSigResult<GgxgRingData> {
    let mut stealth = Vec::with_capacity(ring.len());
    let mut commitments = Vec::with_capacity(ring.len());
    let mut concealing = Vec::with_capacity(ring.len());
    for (index, member) in ring.iter().enumerate() {
        let p = member
            .stealth_address
            .decompress()
            .ok_or(RingSigError::InvalidRingMember { index })?;
        let a = member
            .amount_commitment
            .decompress()
            .ok_or(RingSigError::InvalidRingMember { index })?;
        let q = member
            .concealing_point
            .decompress()
            .ok_or(RingSigError::InvalidRingMember { index })?;
        stealth.push(p);
        commitments.push(a.mul_by_cofactor());
        concealing.push(q.mul_by_cofactor());
    }
    Ok(GgxgRingData {
        stealth,
        commitments,
        concealing,
    })
}

/// Fold the 2-layer ring: `W_i = mu_0 * P_i + mu_1 * (8*A_i - pseudo_out)`.
pub(crate) fn fold_ring_gg(
    ring: &GgRingData,
    pseudo_out: &EdwardsPoint,
    mu_0: &Scalar,
    mu_1: &Scalar,
) -> Vec<EdwardsPoint> {
    ring.stealth
        .iter()
        .zip(&ring.commitments)
        .map(|(p, a)| mu_0 * p + mu_1 * (a - pseudo_out))
        .collect()
}

/// Fold the 4-layer ring into its two proof dimensions.
///
/// Returns `(W, X)` where `W_i` folds the G-keyed layers 0, 1 and 3, and
/// `X_i = mu_2 * 8*Q_i` carries the X-keyed layer on its own.
pub(crate) fn fold_ring_ggxg(
    ring: &GgxgRingData,
    pseudo_out: &EdwardsPoint,
    extended: &EdwardsPoint,
    mu: &[Scalar; 4],
) -> (Vec<EdwardsPoint>, Vec<EdwardsPoint>) {
    let mut g_keys = Vec::with_capacity(ring.stealth.len());
    let mut x_keys = Vec::with_capacity(ring.stealth.len());
    for ((p, a), q) in ring.stealth.iter().zip(&ring.commitments).zip(&ring.concealing) {
        g_keys.push(mu[0] * p + mu[1] * (a - pseudo_out) + mu[3] * (q - extended));
        x_keys.push(mu[2] * q);
    }
    (g_keys, x_keys)
}

/// Fold per-layer images (or secrets) with their weights: `Σ mu_l * value_l`.
pub(crate) fn fold_images(weighted: &[(Scalar, EdwardsPoint)]) -> EdwardsPoint {
    weighted
        .iter()
        .map(|(mu, point)| mu * point)
        .sum()
}

/// Signer-side aggregated secret: `w = Σ mu_l * secret_l (mod ℓ)`.
pub(crate) fn fold_secrets(weighted: &[(Scalar, Scalar)]) -> Scalar {
    weighted.iter().map(|(mu, secret)| mu * secret).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ring::mul_by_cofactor_inverse;
    use curve25519_dalek::constants::ED25519_BASEPOINT_POINT;
    use curve25519_dalek::traits::Identity;

    fn g_mul(k: u64) -> EdwardsPoint {
        ED25519_BASEPOINT_POINT * Scalar::from(k)
    }

    fn gg_member(p: u64, a: u64) -> RingMember {
        RingMember {
            stealth_address: g_mul(p).compress(),
            amount_commitment: mul_by_cofactor_inverse(&g_mul(a)).compress(),
        }
    }

    #[test]
    fn test_decompress_restores_commitments() {
        let ring = [gg_member(2, 40), gg_member(3, 50)];
        let data = decompress_ring_gg(&ring).unwrap();
        assert_eq!(data.commitments[0], g_mul(40));
        assert_eq!(data.commitments[1], g_mul(50));
    }

    #[test]
    fn test_decompress_rejects_bad_point() {
        let mut bytes = [0u8; 32];
        let invalid = (0u8..=255)
            .find(|&candidate| {
                bytes[0] = candidate;
                curve25519_dalek::edwards::CompressedEdwardsY(bytes)
                    .decompress()
                    .is_none()
            })
            .expect("some candidate must be off-curve");
        bytes[0] = invalid;

        let mut ring = [gg_member(2, 40), gg_member(3, 50)];
        ring[1].stealth_address.0 = bytes;
        assert_eq!(
            decompress_ring_gg(&ring).unwrap_err(),
            RingSigError::InvalidRingMember { index: 1 }
        );
    }

    #[test]
    fn test_fold_ring_gg_layer_weights() {
        let ring = [gg_member(2, 40)];
        let data = decompress_ring_gg(&ring).unwrap();
        let pseudo = g_mul(10);

        // With mu_1 = 0 only the stealth layer survives.
        let w = fold_ring_gg(&data, &pseudo, &Scalar::from(3u64), &Scalar::ZERO);
        assert_eq!(w[0], g_mul(6));

        // With mu_0 = 0 only the commitment difference survives.
        let w = fold_ring_gg(&data, &pseudo, &Scalar::ZERO, &Scalar::ONE);
        assert_eq!(w[0], g_mul(30));
    }

    #[test]
    fn test_fold_secrets_matches_fold_images() {
        // Folding secrets then multiplying by a base equals folding the
        // per-layer public points — the identity the chain closure relies on.
        let base = g_mul(7);
        let weighted_secrets = [
            (Scalar::from(11u64), Scalar::from(5u64)),
            (Scalar::from(13u64), Scalar::from(9u64)),
        ];
        let weighted_points: Vec<(Scalar, EdwardsPoint)> = weighted_secrets
            .iter()
            .map(|(mu, s)| (*mu, s * base))
            .collect();

        assert_eq!(
            fold_secrets(&weighted_secrets) * base,
            fold_images(&weighted_points)
        );
    }

    #[test]
    fn test_fold_images_empty_is_identity() {
        assert_eq!(fold_images(&[]), EdwardsPoint::identity());
    }
}
