//! Makes available common structures needed to work with materials
//!
//! You may write `use optoacoustic::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::gain::{AcousticMode, GainSpectrum, SpectrumConfig};
pub use crate::material::{Material, MaterialFile, MaterialRegistry, MaterialTensors, Provenance};
pub use crate::tensor::{Axis, CubicConstants, RotationError, VoigtTensor};
pub use crate::StrError;
