//! Multi-layer linkable ring signatures (CLSAG).
//!
//! Two instantiations of the same engine:
//!
//! - **GG**: 2 layers (stealth address, amount commitment), both keyed over
//!   the curve basepoint `G`.
//! - **GGXG**: 4 layers (stealth address, amount commitment, concealing
//!   point opened twice) keyed over `G, G, X, G`, where `X` is a second,
//!   independent generator. The G-keyed layers fold into one proof
//!   dimension; the X-keyed layer is proven as its own dimension inside the
//!   same challenge chain, with its own response vector.
//!
//! A signature proves knowledge of every layer secret at one undisclosed
//! ring position and emits deterministic linking tags that expose reuse of
//! the same secret identity across signatures.

pub mod constants;
pub mod hash;
pub mod types;

mod aggregate;
mod chain;
mod generate;
mod verify;

pub use constants::{pad_domain_separator, x_generator, H_BYTES};
pub use generate::{generate_clsag_gg, generate_clsag_ggxg};
pub use hash::{
    derive_aggregation_coefficients_gg, derive_aggregation_coefficients_ggxg, keccak256_to_scalar,
};
pub use types::{ClsagGgSignature, ClsagGgxgSignature};
pub use verify::{verify_clsag_gg, verify_clsag_ggxg};
