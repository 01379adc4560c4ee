//! Core processing building blocks: binarization, foreground cropping,
//! and ratio-preserving resize. These are internal primitives consumed
//! by the high-level `api` module.
pub mod params;
pub mod processing;
