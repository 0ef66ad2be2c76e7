//! The cyclic challenge-chain engine.
//!
//! One parameterized traversal serves both schemes: a proof dimension is a
//! `(generator, per-position public points, aggregated image)` triple, and the
//! walk carries one response vector per dimension. The 2-layer scheme runs
//! with a single G dimension; the 4-layer scheme adds the X dimension beside
//! it inside the same chain.
//!
//! Generation starts at the signer's position with random commitment scalars,
//! walks the remaining N−1 positions with random responses, and closes the
//! loop algebraically:
//! ```text
//! at signer:    L_d = alpha_d * Gen_d          R_d = alpha_d * Hp(P_signer)
//! elsewhere:    L_d = r * Gen_d + c * Pub_d[i] R_d = r * Hp(P_i) + c * Img_d
//! closure:      r[signer] = alpha_d - c[signer] * secret_d
//! ```
//! The stored challenge is the one attached to ring position 0, so the
//! verifier's walk is defined identically at every index with no knowledge of
//! the signer's position.

use alloc::vec;
use alloc::vec::Vec;

use curve25519_dalek::edwards::EdwardsPoint;
use curve25519_dalek::Scalar;
use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroize;

use super::hash::RoundHasher;

/// One proof dimension threaded through the chain.
pub(crate) struct ChainDimension {
    /// Group generator keying this dimension (`G` or `X`).
    pub generator: EdwardsPoint,
    /// Aggregated public point per ring position.
    pub pubkeys: Vec<EdwardsPoint>,
    /// Aggregated linking tag for this dimension.
    pub image: EdwardsPoint,
}

/// Run the generation walk and close the ring.
///
/// `agg_secrets` holds the aggregated secret per dimension, in dimension
/// order; the caller zeroizes them. Returns the challenge attached to ring
/// position 0 and one response vector per dimension, in ring order.
pub(crate) fn close_ring_generate(
    round: &RoundHasher,
    dims: &[ChainDimension],
    hp: &[EdwardsPoint],
    agg_secrets: &[Scalar],
    secret_index: usize,
    rng: &mut (impl RngCore + CryptoRng),
) -> (Scalar, Vec<Vec<Scalar>>) {
    let ring_size = hp.len();
    debug_assert_eq!(dims.len(), agg_secrets.len());
    debug_assert!(secret_index < ring_size);

    // Commitment scalars, one per dimension.
    let mut alphas: Vec<Scalar> = (0..dims.len()).map(|_| Scalar::random(rng)).collect();

    // Commitment points at the signer's position.
    let mut round_points = Vec::with_capacity(2 * dims.len());
    for (dim, alpha) in dims.iter().zip(&alphas) {
        round_points.push(alpha * dim.generator);
        round_points.push(alpha * hp[secret_index]);
    }

    let mut challenges = vec![Scalar::ZERO; ring_size];
    challenges[(secret_index + 1) % ring_size] = round.next_challenge(&round_points);

    let mut responses: Vec<Vec<Scalar>> = (0..dims.len())
        .map(|_| vec![Scalar::ZERO; ring_size])
        .collect();

    // Walk forward through the remaining positions, wrapping cyclically.
    for step in 1..ring_size {
        let i = (secret_index + step) % ring_size;
        let c = challenges[i];

        round_points.clear();
        for (d, dim) in dims.iter().enumerate() {
            let r = Scalar::random(rng);
            round_points.push(r * dim.generator + c * dim.pubkeys[i]);
            round_points.push(r * hp[i] + c * dim.image);
            responses[d][i] = r;
        }
        challenges[(i + 1) % ring_size] = round.next_challenge(&round_points);
    }

    // Close the loop at the signer's position, independently per dimension.
    let c_signer = challenges[secret_index];
    for (d, alpha) in alphas.iter().enumerate() {
        responses[d][secret_index] = alpha - c_signer * agg_secrets[d];
    }

    alphas.zeroize();

    (challenges[0], responses)
}

/// Run the verification walk: recompute the chain from position 0 and check
/// it closes back onto the stored challenge.
#[must_use]
pub(crate) fn close_ring_verify(
    round: &RoundHasher,
    dims: &[ChainDimension],
    hp: &[EdwardsPoint],
    challenge: &Scalar,
    responses: &[&[Scalar]],
) -> bool {
    let ring_size = hp.len();
    debug_assert_eq!(dims.len(), responses.len());

    let mut c = *challenge;
    let mut round_points = Vec::with_capacity(2 * dims.len());
    for i in 0..ring_size {
        round_points.clear();
        for (d, dim) in dims.iter().enumerate() {
            let r = responses[d][i];
            round_points.push(r * dim.generator + c * dim.pubkeys[i]);
            round_points.push(r * hp[i] + c * dim.image);
        }
        c = round.next_challenge(&round_points);
    }

    c == *challenge
}
