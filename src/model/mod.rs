pub mod affine;

pub use affine::{predict, AffineModel};
