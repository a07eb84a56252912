//! Implements Voigt-notation tensors and their rotation about the principal axes

mod axis;
mod error;
mod isotropic;
mod rotation;
mod voigt;
mod voigt_tensor;
pub use crate::tensor::axis::*;
pub use crate::tensor::error::*;
pub use crate::tensor::isotropic::*;
pub use crate::tensor::rotation::*;
pub use crate::tensor::voigt::*;
pub use crate::tensor::voigt_tensor::*;
