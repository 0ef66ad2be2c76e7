//! # umbra-ring-core
//!
//! Multi-layer linkable ring signatures (CLSAG) for the Umbra transaction
//! core.
//!
//! This crate implements the CLSAG construction in two instantiations:
//!
//! - **GG** — 2 layers, both keyed over the Ed25519 basepoint `G`
//! - **GGXG** — 4 layers keyed over `G, G, X, G`, with `X` a second,
//!   independent generator
//!
//! Given a ring of candidate signers and per-layer secrets for one position,
//! generation proves knowledge of every layer secret at that position without
//! revealing which position it is, and emits deterministic linking tags (key
//! images) that expose reuse of the same secret identity across signatures.
//!
//! ## Architecture
//!
//! 1. **`no_std` Compatible**: Can run in WASM environments
//! 2. **Zeroize on Use**: Derived secret scalars are cleared from memory
//! 3. **Injected Randomness**: Generation takes an explicit RNG, so seeded
//!    runs are fully reproducible
//! 4. **Borrowed Rings**: Ring data is consumed as immutable slices and
//!    never copied
//!
//! ## Modules
//!
//! - [`types`]: Ring member records, key images, and error types
//! - [`keys`]: Linking-tag derivation and validity checks
//! - [`clsag`]: The signature engine — coefficients, aggregation, the
//!   cyclic challenge chain, generation and verification
//!
//! ## Cofactor conventions
//!
//! Ring `amount_commitment` / `concealing_point` fields are stored
//! premultiplied by 1/8. The standalone commitment arguments differ by call
//! site: generators take the raw points, verifiers take premultiplied ones.
//! The engine applies the restoring multiply-by-8 exactly once at each
//! boundary; callers that mix up the convention produce signatures that are
//! internally consistent but verify against the wrong commitment, so the
//! contract is part of every function signature's documentation.
//!
//! ## Security Considerations
//!
//! This crate handles cryptographic secrets. Users should:
//!
//! - Never log or serialize secret scalars
//! - Zeroize caller-held secrets after signing
//! - Supply a cryptographically secure RNG for generation

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(non_snake_case)]

extern crate alloc;

pub mod clsag;
pub mod keys;
pub mod types;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::types::errors::*;
    pub use crate::types::ring::*;
}

// Re-export commonly used types at crate root
pub use types::errors::{RingSigError, RingSigResult};
pub use types::ring::{mul_by_cofactor_inverse, KeyImage, RingMember, RingMemberExt};

// Re-export key image helpers
pub use keys::{compute_key_image, is_valid_key_image};

// Re-export the signature engine
pub use clsag::{
    derive_aggregation_coefficients_gg, derive_aggregation_coefficients_ggxg, generate_clsag_gg,
    generate_clsag_ggxg, verify_clsag_gg, verify_clsag_ggxg, ClsagGgSignature, ClsagGgxgSignature,
};
