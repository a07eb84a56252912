use thiserror::Error;

/// Defines the errors raised when rotating the crystal axes of a material
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RotationError {
    /// The material carries full (anisotropic) tensors
    #[error("rotation of anisotropic tensors is not implemented")]
    NotSupported,

    /// The axis label is not one of "x-axis", "y-axis" or "z-axis"
    #[error("invalid rotation axis {0:?}; expected \"x-axis\", \"y-axis\" or \"z-axis\"")]
    InvalidAxis(String),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
