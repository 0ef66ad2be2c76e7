//! Linking-tag (key image) derivation and validation.
//!
//! Each tracked layer's tag is:
//! ```text
//! K_l = secret_l * Hp(P)
//! ```
//! where `Hp` is hash-to-point (Monero's `ge_fromfe_frombytes_vartime`
//! followed by the cofactor multiply) and `P` is the signer's stealth address.
//! Anchoring every layer's tag at the same ring position's `P` is what stops a
//! signer from assembling the aggregated proof out of secrets borrowed from
//! different ring members.
//!
//! Validation matters independently of the challenge chain: ring closure alone
//! cannot detect a small-order or identity point substituted for a tag, so the
//! verifier gates on [`is_valid_key_image`] for every tag it consumes.

use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint};
use curve25519_dalek::traits::IsIdentity;
use curve25519_dalek::Scalar;
use monero_generators::hash_to_point;

use crate::types::ring::KeyImage;

/// Compute a linking tag `secret * Hp(public_point)`.
///
/// # Arguments
/// * `secret` - The layer secret scalar
/// * `public_point` - The signer's public point at that layer's anchor
///   position (compressed)
#[must_use]
pub fn compute_key_image(secret: &Scalar, public_point: &CompressedEdwardsY) -> KeyImage {
    let hp = hash_to_point(public_point.to_bytes());
    KeyImage((secret * hp).compress())
}

/// Decompress a compressed tag and check it is usable as a linking tag:
/// a valid encoding, not the identity, and inside the prime-order subgroup.
///
/// Returns `None` on any failure; callers map that to a boolean verification
/// failure without further detail.
pub(crate) fn decompress_valid_image(bytes: &CompressedEdwardsY) -> Option<EdwardsPoint> {
    let point = bytes.decompress()?;
    if point.is_identity() || !point.is_torsion_free() {
        return None;
    }
    Some(point)
}

/// Whether a key image is a valid linking tag (decompressible, non-identity,
/// torsion-free).
#[must_use]
pub fn is_valid_key_image(image: &KeyImage) -> bool {
    decompress_valid_image(&image.0).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use curve25519_dalek::constants::{ED25519_BASEPOINT_TABLE, EIGHT_TORSION};
    use curve25519_dalek::traits::Identity;

    fn test_public_point(seed: u64) -> CompressedEdwardsY {
        (ED25519_BASEPOINT_TABLE * &Scalar::from(seed)).compress()
    }

    #[test]
    fn test_key_image_deterministic() {
        let secret = Scalar::from(12_345u64);
        let p = test_public_point(9);
        assert_eq!(compute_key_image(&secret, &p), compute_key_image(&secret, &p));
    }

    #[test]
    fn test_key_image_depends_on_secret_and_point() {
        let p = test_public_point(9);
        let a = compute_key_image(&Scalar::from(1u64), &p);
        let b = compute_key_image(&Scalar::from(2u64), &p);
        assert_ne!(a, b);

        let q = test_public_point(10);
        let c = compute_key_image(&Scalar::from(1u64), &q);
        assert_ne!(a, c);
    }

    #[test]
    fn test_valid_image_accepted() {
        let ki = compute_key_image(&Scalar::from(3u64), &test_public_point(4));
        assert!(is_valid_key_image(&ki));
    }

    #[test]
    fn test_identity_image_rejected() {
        let ki = KeyImage(EdwardsPoint::identity().compress());
        assert!(!is_valid_key_image(&ki));
    }

    #[test]
    fn test_torsion_image_rejected() {
        // A generator of the 8-torsion subgroup is a well-formed encoding but
        // must never be accepted as a linking tag.
        let ki = KeyImage(EIGHT_TORSION[1].compress());
        assert!(!is_valid_key_image(&ki));
    }

    #[test]
    fn test_undecodable_image_rejected() {
        // Roughly half of all y-coordinates are off-curve; scan for one.
        let mut bytes = [0u8; 32];
        let invalid = (0u8..=255).find(|&candidate| {
            bytes[0] = candidate;
            CompressedEdwardsY(bytes).decompress().is_none()
        });
        bytes[0] = invalid.expect("some candidate must be off-curve");
        assert!(!is_valid_key_image(&KeyImage::from_bytes(bytes)));
    }
}
