//! Key image (linking tag) derivation and validation.

pub mod image;

pub use image::{compute_key_image, is_valid_key_image};
