pub mod binarize;
pub mod crop;
pub mod resize;
