//! CLSAG domain separators and group constants.
//!
//! Every hash in the protocol is domain-separated with a 32-byte zero-padded
//! tag. Aggregation tags are distinct per variant AND per layer so a layer's
//! binding weight can never be reused for, or swapped with, another layer's.

use curve25519_dalek::edwards::EdwardsPoint;
use monero_generators::hash_to_point;

/// Round-challenge domain separator for the 2-layer scheme.
pub const CLSAG_GG_ROUND: &[u8] = b"CLSAG_GG_round";

/// Aggregation-coefficient domain separator for layer 0 (stealth address) of
/// the 2-layer scheme.
pub const CLSAG_GG_AGG_0: &[u8] = b"CLSAG_GG_agg_0";

/// Aggregation-coefficient domain separator for layer 1 (amount commitment)
/// of the 2-layer scheme.
pub const CLSAG_GG_AGG_1: &[u8] = b"CLSAG_GG_agg_1";

/// Round-challenge domain separator for the 4-layer scheme.
pub const CLSAG_GGXG_ROUND: &[u8] = b"CLSAG_GGXG_round";

/// Aggregation-coefficient domain separator, 4-layer scheme, layer 0 (G).
pub const CLSAG_GGXG_AGG_0: &[u8] = b"CLSAG_GGXG_agg_0";

/// Aggregation-coefficient domain separator, 4-layer scheme, layer 1 (G).
pub const CLSAG_GGXG_AGG_1: &[u8] = b"CLSAG_GGXG_agg_1";

/// Aggregation-coefficient domain separator, 4-layer scheme, layer 2 (X).
pub const CLSAG_GGXG_AGG_2: &[u8] = b"CLSAG_GGXG_agg_2";

/// Aggregation-coefficient domain separator, 4-layer scheme, layer 3 (G).
pub const CLSAG_GGXG_AGG_3: &[u8] = b"CLSAG_GGXG_agg_3";

/// Hash-to-point preimage for the `X` generator.
pub const X_GENERATOR_SEED: &[u8] = b"CLSAG_GGXG_generator_X";

/// Pedersen amount generator `H` = 8 * `hash_to_point(G)`.
///
/// **IMPORTANT**: This is NOT the same as `hash_to_point(G)`!
/// The multiplication by 8 (cofactor) is critical.
pub const H_BYTES: [u8; 32] = [
    0x8b, 0x65, 0x59, 0x70, 0x15, 0x37, 0x99, 0xaf, 0x2a, 0xea, 0xdc, 0x9f, 0xf1, 0xad, 0xd0, 0xea,
    0x6c, 0x72, 0x51, 0xd5, 0x41, 0x54, 0xcf, 0xa9, 0x2c, 0x17, 0x3a, 0x0d, 0xd3, 0x9c, 0x1f, 0x94,
];

/// Pad a domain separator to a 32-byte key slot.
#[inline]
#[must_use]
pub fn pad_domain_separator(domain: &[u8]) -> [u8; 32] {
    let mut padded = [0u8; 32];
    let len = domain.len().min(32);
    padded[..len].copy_from_slice(&domain[..len]);
    padded
}

/// The second, independent group generator `X` keying layer 2 of the 4-layer
/// scheme.
///
/// Derived as `hash_to_point` of a fixed padded seed — a nothing-up-my-sleeve
/// point with no known discrete log relative to `G` or `H`. `hash_to_point`
/// output is already in the prime-order subgroup.
#[must_use]
pub fn x_generator() -> EdwardsPoint {
    hash_to_point(pad_domain_separator(X_GENERATOR_SEED))
}

#[cfg(test)]
mod tests {
    use super::*;
    use curve25519_dalek::constants::ED25519_BASEPOINT_POINT;
    use curve25519_dalek::edwards::CompressedEdwardsY;
    use curve25519_dalek::traits::IsIdentity;

    #[test]
    fn test_pad_domain_separator() {
        let padded = pad_domain_separator(CLSAG_GG_ROUND);
        assert_eq!(&padded[..CLSAG_GG_ROUND.len()], CLSAG_GG_ROUND);
        assert!(padded[CLSAG_GG_ROUND.len()..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_aggregation_tags_distinct() {
        let tags = [
            CLSAG_GG_AGG_0,
            CLSAG_GG_AGG_1,
            CLSAG_GGXG_AGG_0,
            CLSAG_GGXG_AGG_1,
            CLSAG_GGXG_AGG_2,
            CLSAG_GGXG_AGG_3,
        ];
        for (i, a) in tags.iter().enumerate() {
            for b in &tags[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_x_generator_well_formed() {
        let x = x_generator();
        assert!(!x.is_identity());
        assert!(x.is_torsion_free());
        assert_ne!(x, ED25519_BASEPOINT_POINT);
        assert_ne!(
            x,
            CompressedEdwardsY(H_BYTES).decompress().unwrap()
        );
    }

    #[test]
    fn test_x_generator_deterministic() {
        assert_eq!(x_generator(), x_generator());
    }
}
