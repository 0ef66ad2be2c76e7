//! CLSAG signature generation.
//!
//! Generation takes the message hash, the borrowed ring, the raw
//! (non-premultiplied) commitment argument(s), the caller's primary key
//! image, the layer secrets, the signer's ring position, and an explicit
//! randomness source. Auxiliary linking tags are derived fresh here; the
//! aggregated secret and the commitment nonces are erased before returning.
//!
//! The signer's position must never leak: the output shape is identical for
//! every position, and failures are limited to structural input defects
//! detected before any secret-dependent work.

use alloc::vec::Vec;

use curve25519_dalek::constants::ED25519_BASEPOINT_POINT;
use curve25519_dalek::edwards::EdwardsPoint;
use curve25519_dalek::Scalar;
use monero_generators::hash_to_point;
use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroize;

use super::aggregate::{
    decompress_ring_gg, decompress_ring_ggxg, fold_images, fold_ring_gg, fold_ring_ggxg,
    fold_secrets,
};
use super::chain::{close_ring_generate, ChainDimension};
use super::constants::{x_generator, CLSAG_GGXG_ROUND, CLSAG_GG_ROUND};
use super::hash::{
    chain_transcript, derive_aggregation_coefficients_gg, derive_aggregation_coefficients_ggxg,
    serialize_ring_gg, serialize_ring_ggxg, RoundHasher,
};
use super::types::{ClsagGgSignature, ClsagGgxgSignature};
use crate::types::errors::{RingSigError, RingSigResult};
use crate::types::ring::{KeyImage, RingMember, RingMemberExt};

/// Generate a 2-layer (GG) CLSAG signature.
///
/// # Arguments
/// * `message` - Pre-computed 32-byte message hash
/// * `ring` - Ordered ring of members (borrowed; never copied or mutated)
/// * `pseudo_out_commitment` - Pseudo-output amount commitment, raw
///   (NOT premultiplied by 1/8)
/// * `key_image` - Primary linking tag `secret_x * Hp(P_signer)`
/// * `secret_x` - Layer-0 secret: opens the signer's stealth address over `G`
/// * `secret_f` - Layer-1 secret: opens `8*A_signer - pseudo_out` over `G`
/// * `secret_index` - The signer's ring position
/// * `rng` - Cryptographic randomness source
///
/// # Errors
/// Structural defects only: empty ring, out-of-range index, undecodable
/// ring member or key image.
pub fn generate_clsag_gg(
    message: &[u8; 32],
    ring: &[RingMember],
    pseudo_out_commitment: &EdwardsPoint,
    key_image: &KeyImage,
    secret_x: &Scalar,
    secret_f: &Scalar,
    secret_index: usize,
    rng: &mut (impl RngCore + CryptoRng),
) -> RingSigResult<ClsagGgSignature> {
    let ring_size = ring.len();
    if ring_size == 0 {
        return Err(RingSigError::EmptyRing);
    }
    if secret_index >= ring_size {
        return Err(RingSigError::SignerIndexOutOfBounds {
            index: secret_index,
            ring_size,
        });
    }

    let data = decompress_ring_gg(ring)?;
    let I = key_image.decompress().ok_or(RingSigError::InvalidKeyImage)?;

    // Hp(P_i) for every ring position; all linking tags anchor at the
    // signer's stealth address.
    let hp: Vec<EdwardsPoint> = ring
        .iter()
        .map(|m| hash_to_point(m.stealth_address.to_bytes()))
        .collect();

    // Fresh auxiliary tag for the commitment layer.
    let K1_point = secret_f * hp[secret_index];
    let K1 = K1_point.compress();

    let (mu_0, mu_1) = derive_aggregation_coefficients_gg(ring, key_image, &K1);

    let W = fold_ring_gg(&data, pseudo_out_commitment, &mu_0, &mu_1);
    let image = fold_images(&[(mu_0, I), (mu_1, K1_point)]);
    let mut agg_secrets = [fold_secrets(&[(mu_0, *secret_x), (mu_1, *secret_f)])];

    let transcript = chain_transcript(
        &serialize_ring_gg(ring),
        &[*pseudo_out_commitment],
        &[&key_image.0, &K1],
    );
    let round = RoundHasher::new(CLSAG_GG_ROUND, message, &transcript);

    let dims = [ChainDimension {
        generator: ED25519_BASEPOINT_POINT,
        pubkeys: W,
        image,
    }];
    let (c, mut responses) =
        close_ring_generate(&round, &dims, &hp, &agg_secrets, secret_index, rng);
    agg_secrets.zeroize();

    Ok(ClsagGgSignature {
        c,
        r: responses.swap_remove(0),
        K1,
    })
}

/// Generate a 4-layer (GGXG) CLSAG signature.
///
/// Layers 0, 1 and 3 are keyed over `G` and fold into one dimension; layer 2
/// is keyed over `X` and proven as an independent dimension with its own
/// response vector.
///
/// # Arguments
/// * `message` - Pre-computed 32-byte message hash
/// * `ring` - Ordered ring of extended members (borrowed)
/// * `pseudo_out_commitment` - Pseudo-output amount commitment, raw
///   (NOT premultiplied by 1/8)
/// * `extended_commitment` - Extended amount commitment, raw
///   (NOT premultiplied by 1/8)
/// * `key_image` - Primary linking tag `secret_0_xp * Hp(P_signer)`
/// * `secret_0_xp` - Layer-0 secret: opens the stealth address over `G`
/// * `secret_1_f` - Layer-1 secret: opens `8*A - pseudo_out` over `G`
/// * `secret_2_x` - Layer-2 secret: opens `8*Q` over `X`
/// * `secret_3_q` - Layer-3 secret: opens `8*Q - extended` over `G`
/// * `secret_index` - The signer's ring position
/// * `rng` - Cryptographic randomness source
///
/// # Errors
/// Structural defects only, as for [`generate_clsag_gg`].
#[allow(clippy::too_many_arguments)]
pub fn generate_clsag_ggxg(
    message: &[u8; 32],
    ring: &[RingMemberExt],
    pseudo_out_commitment: &EdwardsPoint,
    extended_commitment: &EdwardsPoint,
    key_image: &KeyImage,
    secret_0_xp: &Scalar,
    secret_1_f: &Scalar,
    secret_2_x: &Scalar,
    secret_3_q: &Scalar,
    secret_index: usize,
    rng: &mut (impl RngCore + CryptoRng),
) -> RingSigResult<ClsagGgxgSignature> {
    let ring_size = ring.len();
    if ring_size == 0 {
        return Err(RingSigError::EmptyRing);
    }
    if secret_index >= ring_size {
        return Err(RingSigError::SignerIndexOutOfBounds {
            index: secret_index,
            ring_size,
        });
    }

    let data = decompress_ring_ggxg(ring)?;
    let I = key_image.decompress().ok_or(RingSigError::InvalidKeyImage)?;

    let hp: Vec<EdwardsPoint> = ring
        .iter()
        .map(|m| hash_to_point(m.stealth_address.to_bytes()))
        .collect();

    // Fresh auxiliary tags, one per tracked layer.
    let K1_point = secret_1_f * hp[secret_index];
    let K2_point = secret_2_x * hp[secret_index];
    let K3_point = secret_3_q * hp[secret_index];
    let K1 = K1_point.compress();
    let K2 = K2_point.compress();
    let K3 = K3_point.compress();

    let mu = derive_aggregation_coefficients_ggxg(ring, key_image, &K1, &K2, &K3);

    let (W, X_keys) = fold_ring_ggxg(&data, pseudo_out_commitment, extended_commitment, &mu);
    let image_g = fold_images(&[(mu[0], I), (mu[1], K1_point), (mu[3], K3_point)]);
    let image_x = fold_images(&[(mu[2], K2_point)]);
    let mut agg_secrets = [
        fold_secrets(&[
            (mu[0], *secret_0_xp),
            (mu[1], *secret_1_f),
            (mu[3], *secret_3_q),
        ]),
        fold_secrets(&[(mu[2], *secret_2_x)]),
    ];

    let transcript = chain_transcript(
        &serialize_ring_ggxg(ring),
        &[*pseudo_out_commitment, *extended_commitment],
        &[&key_image.0, &K1, &K2, &K3],
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
    let (c, mut responses) =
        close_ring_generate(&round, &dims, &hp, &agg_secrets, secret_index, rng);
    agg_secrets.zeroize();

    let r_x = responses.swap_remove(1);
    let r_g = responses.swap_remove(0);

    Ok(ClsagGgxgSignature {
        c,
        r_g,
        r_x,
        K1,
        K2,
        K3,
    })
}
