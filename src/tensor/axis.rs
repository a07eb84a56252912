use super::RotationError;
use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Defines the principal axis of a right-handed Cartesian frame around which the crystal is rotated
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub enum Axis {
    /// Rotation around x
    X,

    /// Rotation around y
    Y,

    /// Rotation around z
    Z,
}

impl Axis {
    /// Returns the label of the axis ("x-axis", "y-axis" or "z-axis")
    pub fn label(&self) -> &'static str {
        match self {
            Self::X => "x-axis",
            Self::Y => "y-axis",
            Self::Z => "z-axis",
        }
    }

    /// Computes the (right-handed) rotation matrix
    ///
    /// # Input
    ///
    /// * `theta` -- angle in radians
    #[rustfmt::skip]
    pub fn rotation_matrix(&self, theta: f64) -> Matrix3<f64> {
        let (s, c) = f64::sin_cos(theta);
        match self {
            Self::X => Matrix3::new(
                1.0, 0.0, 0.0,
                0.0,   c,  -s,
                0.0,   s,   c,
            ),
            Self::Y => Matrix3::new(
                  c, 0.0,   s,
                0.0, 1.0, 0.0,
                 -s, 0.0,   c,
            ),
            Self::Z => Matrix3::new(
                  c,  -s, 0.0,
                  s,   c, 0.0,
                0.0, 0.0, 1.0,
            ),
        }
    }
}

impl FromStr for Axis {
    type Err = RotationError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label {
            "x-axis" => Ok(Self::X),
            "y-axis" => Ok(Self::Y),
            "z-axis" => Ok(Self::Z),
            _ => Err(RotationError::InvalidAxis(label.to_string())),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Computes the rotation matrix from an axis label such as "z-axis"
pub fn rotation_matrix_from_label(label: &str, theta: f64) -> Result<Matrix3<f64>, RotationError> {
    let axis: Axis = label.parse()?;
    Ok(axis.rotation_matrix(theta))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
