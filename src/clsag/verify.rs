//! CLSAG signature verification.
//!
//! Verification consumes only public data: the ring, the premultiplied
//! commitment argument(s), the primary key image, and the signature. It
//! re-derives the binding weights and aggregated points, validates every
//! linking tag as a non-identity prime-subgroup point, and walks the ring
//! from position 0 checking that the challenge chain closes onto the stored
//! challenge.
//!
//! Outcomes are normalized across both variants: `Err` is reserved for
//! structurally invalid input (empty ring, response-count mismatch,
//! undecodable ring or commitment data); every cryptographic defect —
//! closure mismatch, invalid or torsion tag, identity point — is `Ok(false)`
//! with no detail about which ring position failed.

use alloc::vec::Vec;

use curve25519_dalek::constants::ED25519_BASEPOINT_POINT;
use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint};
use monero_generators::hash_to_point;

use super::aggregate::{
    decompress_ring_gg, decompress_ring_ggxg, fold_images, fold_ring_gg, fold_ring_ggxg,
};
use super::chain::{close_ring_verify, ChainDimension};
use super::constants::{x_generator, CLSAG_GGXG_ROUND, CLSAG_GG_ROUND};
use super::hash::{
    chain_transcript, derive_aggregation_coefficients_gg, derive_aggregation_coefficients_ggxg,
    serialize_ring_gg, serialize_ring_ggxg, RoundHasher,
};
use super::types::{ClsagGgSignature, ClsagGgxgSignature};
use crate::keys::image::decompress_valid_image;
use crate::types::errors::{RingSigError, RingSigResult};
use crate::types::ring::{KeyImage, RingMember, RingMemberExt};

/// Verify a 2-layer (GG) CLSAG signature.
///
/// # Arguments
/// * `message` - Pre-computed 32-byte message hash
/// * `ring` - Ordered ring of members (borrowed)
/// * `pseudo_out_commitment` - Pseudo-output amount commitment,
///   premultiplied by 1/8
/// * `key_image` - Primary linking tag claimed by the signature
/// * `sig` - The signature to check
///
/// # Errors
/// Structural defects only; cryptographic invalidity is `Ok(false)`.
pub fn verify_clsag_gg(
    message: &[u8; 32],
    ring: &[RingMember],
    pseudo_out_commitment: &CompressedEdwardsY,
    key_image: &KeyImage,
    sig: &ClsagGgSignature,
) -> RingSigResult<bool> {
    let ring_size = ring.len();
    if ring_size == 0 {
        return Err(RingSigError::EmptyRing);
    }
    if sig.r.len() != ring_size {
        return Err(RingSigError::ResponseCountMismatch {
            expected: ring_size,
            actual: sig.r.len(),
        });
    }

    let data = decompress_ring_gg(ring)?;
    let pseudo_out = pseudo_out_commitment
        .decompress()
        .ok_or(RingSigError::InvalidCommitment)?
        .mul_by_cofactor();

    // Tag validity gate — closure alone cannot catch a torsion or identity
    // point substituted for a tag.
    let Some(I) = decompress_valid_image(&key_image.0) else {
        return Ok(false);
    };
    let Some(K1_point) = decompress_valid_image(&sig.K1) else {
        return Ok(false);
    };

    let hp: Vec<EdwardsPoint> = ring
        .iter()
        .map(|m| hash_to_point(m.stealth_address.to_bytes()))
        .collect();

    let (mu_0, mu_1) = derive_aggregation_coefficients_gg(ring, key_image, &sig.K1);

    let W = fold_ring_gg(&data, &pseudo_out, &mu_0, &mu_1);
    let image = fold_images(&[(mu_0, I), (mu_1, K1_point)]);

    let transcript = chain_transcript(
        &serialize_ring_gg(ring),
        &[pseudo_out],
        &[&key_image.0, &sig.K1],
    );
    let round = RoundHasher::new(CLSAG_GG_ROUND, message, &transcript);

    let dims = [ChainDimension {
        generator: ED25519_BASEPOINT_POINT,
        pubkeys: W,
        image,
    }];
    Ok(close_ring_verify(&round, &dims, &hp, &sig.c, &[&sig.r]))
}

/// Verify a 4-layer (GGXG) CLSAG signature.
///
/// # Arguments
/// * `message` - Pre-computed 32-byte message hash
/// * `ring` - Ordered ring of extended members (borrowed)
/// * `pseudo_out_commitment` - Pseudo-output amount commitment,
///   premultiplied by 1/8
/// * `extended_commitment` - Extended amount commitment, premultiplied by 1/8
/// * `key_image` - Primary linking tag claimed by the signature
/// * `sig` - The signature to check
///
/// # Errors
/// Structural defects only; cryptographic invalidity is `Ok(false)`.
pub fn verify_clsag_ggxg(
    message: &[u8; 32],
    ring: &[RingMemberExt],
    pseudo_out_commitment: &CompressedEdwardsY,
    extended_commitment: &CompressedEdwardsY,
    key_image: &KeyImage,
    sig: &ClsagGgxgSignature,
) -> RingSigResult<bool> {
    let ring_size = ring.len();
    if ring_size == 0 {
        return Err(RingSigError::EmptyRing);
    }
    if sig.r_g.len() != ring_size {
        return Err(RingSigError::ResponseCountMismatch {
            expected: ring_size,
            actual: sig.r_g.len(),
        });
    }
    if sig.r_x.len() != ring_size {
        return Err(RingSigError::ResponseCountMismatch {
            expected: ring_size,
            actual: sig.r_x.len(),
        });
    }

    let data = decompress_ring_ggxg(ring)?;
    let pseudo_out = pseudo_out_commitment
        .decompress()
        .ok_or(RingSigError::InvalidCommitment)?
        .mul_by_cofactor();
    let extended = extended_commitment
        .decompress()
        .ok_or(RingSigError::InvalidCommitment)?
        .mul_by_cofactor();

    let Some(I) = decompress_valid_image(&key_image.0) else {
        return Ok(false);
    };
    let Some(K1_point) = decompress_valid_image(&sig.K1) else {
        return Ok(false);
    };
    let Some(K2_point) = decompress_valid_image(&sig.K2) else {
        return Ok(false);
    };
    let Some(K3_point) = decompress_valid_image(&sig.K3) else {
        return Ok(false);
    };

    let hp: Vec<EdwardsPoint> = ring
        .iter()
        .map(|m| hash_to_point(m.stealth_address.to_bytes()))
        .collect();

    let mu = derive_aggregation_coefficients_ggxg(ring, key_image, &sig.K1, &sig.K2, &sig.K3);

    let (W, X_keys) = fold_ring_ggxg(&data, &pseudo_out, &extended, &mu);
    let image_g = fold_images(&[(mu[0], I), (mu[1], K1_point), (mu[3], K3_point)]);
    let image_x = fold_images(&[(mu[2], K2_point)]);

    let transcript = chain_transcript(
        &serialize_ring_ggxg(ring),
        &[pseudo_out, extended],
        &[&key_image.0, &sig.K1, &sig.K2, &sig.K3],
    );
    let round = RoundHasher::new(CLSAG_GGXG_ROUND, message, &transcript);

    let dims = [
        ChainDimension {
            generator: ED25519_BASEPOINT_POINT,
            pubkeys: W,
            image: image_g,
        },
        ChainDimension {
            generator: x_generator(),
            pubkeys: X_keys,
            image: image_x,
        },
    ];
    Ok(close_ring_verify(
        &round,
        &dims,
        &hp,
        &sig.c,
        &[&sig.r_g, &sig.r_x],
    ))
}
