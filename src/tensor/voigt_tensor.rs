use crate::StrError;
use nalgebra::Matrix6;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Holds the three independent components of a tensor with cubic symmetry
///
/// The same parameterization is used for the stiffness (c), photoelastic (p)
/// and acoustic loss (eta) tensors.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct CubicConstants {
    /// Component 11 (Voigt 00)
    pub t11: f64,

    /// Component 12 (Voigt 01)
    pub t12: f64,

    /// Component 44 (Voigt 33)
    pub t44: f64,
}

impl CubicConstants {
    /// Allocates a new instance
    pub fn new(t11: f64, t12: f64, t44: f64) -> Self {
        CubicConstants { t11, t12, t44 }
    }

    /// Expands the constants into the full 6×6 Voigt matrix
    pub fn to_voigt(&self) -> VoigtTensor {
        VoigtTensor::isotropic(self.t11, self.t12, self.t44)
    }
}

/// Holds a fourth-rank tensor in Voigt notation (6×6 matrix)
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(from = "[[f64; 6]; 6]", into = "[[f64; 6]; 6]")]
pub struct VoigtTensor {
    mat: Matrix6<f64>,
}

impl VoigtTensor {
    /// Allocates a tensor with all components equal to zero
    pub fn new() -> Self {
        VoigtTensor { mat: Matrix6::zeros() }
    }

    /// Allocates a tensor from an existing 6×6 matrix
    pub fn from_matrix(mat: Matrix6<f64>) -> Self {
        VoigtTensor { mat }
    }

    /// Allocates a tensor from row-major nested arrays
    pub fn from_rows(rows: &[[f64; 6]; 6]) -> Self {
        let mut mat = Matrix6::zeros();
        for m in 0..6 {
            for n in 0..6 {
                mat[(m, n)] = rows[m][n];
            }
        }
        VoigtTensor { mat }
    }

    /// Expands three independent components with the cubic symmetry pattern
    ///
    /// ```text
    /// ┌                   ┐
    /// │ a  b  b  0  0  0  │
    /// │ b  a  b  0  0  0  │
    /// │ b  b  a  0  0  0  │
    /// │ 0  0  0  d  0  0  │
    /// │ 0  0  0  0  d  0  │
    /// │ 0  0  0  0  0  d  │
    /// └                   ┘
    /// ```
    ///
    /// **Note:** The shear entries are all equal to `d` (cubic crystal); the isotropic
    /// relation `d = (a - b) / 2` is not imposed.
    pub fn isotropic(a: f64, b: f64, d: f64) -> Self {
        let mut mat = Matrix6::zeros();
        for m in 0..3 {
            for n in 0..3 {
                mat[(m, n)] = if m == n { a } else { b };
            }
            mat[(m + 3, m + 3)] = d;
        }
        VoigtTensor { mat }
    }

    /// Returns the (m,n) component
    #[inline]
    pub fn get(&self, m: usize, n: usize) -> f64 {
        self.mat[(m, n)]
    }

    /// Sets the (m,n) component
    #[inline]
    pub fn set(&mut self, m: usize, n: usize, value: f64) {
        self.mat[(m, n)] = value;
    }

    /// Returns an access to the underlying matrix
    pub fn matrix(&self) -> &Matrix6<f64> {
        &self.mat
    }

    /// Returns the components as row-major nested arrays
    pub fn to_rows(&self) -> [[f64; 6]; 6] {
        let mut rows = [[0.0; 6]; 6];
        for m in 0..6 {
            for n in 0..6 {
                rows[m][n] = self.mat[(m, n)];
            }
        }
        rows
    }

    /// Re-derives the (11, 12, 44) components
    pub fn reduced(&self) -> CubicConstants {
        CubicConstants::new(self.mat[(0, 0)], self.mat[(0, 1)], self.mat[(3, 3)])
    }

    /// Returns the largest absolute value of the components
    pub fn max_abs(&self) -> f64 {
        self.mat.amax()
    }

    /// Checks whether T[m,n] equals T[n,m] within `tol × max_abs` (or `tol` for a zero tensor)
    pub fn is_symmetric(&self, tol: f64) -> bool {
        let scale = f64::max(self.max_abs(), 1.0);
        for m in 0..6 {
            for n in (m + 1)..6 {
                if f64::abs(self.mat[(m, n)] - self.mat[(n, m)]) > tol * scale {
                    return false;
                }
            }
        }
        true
    }

    /// Validates the components (must be finite)
    pub fn validate(&self) -> Result<(), StrError> {
        if self.mat.iter().any(|v| !v.is_finite()) {
            return Err("tensor components must be finite");
        }
        Ok(())
    }
}

impl Default for VoigtTensor {
    fn default() -> Self {
        VoigtTensor::new()
    }
}

impl From<[[f64; 6]; 6]> for VoigtTensor {
    fn from(rows: [[f64; 6]; 6]) -> Self {
        VoigtTensor::from_rows(&rows)
    }
}

impl From<VoigtTensor> for [[f64; 6]; 6] {
    fn from(tensor: VoigtTensor) -> Self {
        tensor.to_rows()
    }
}

impl fmt::Display for VoigtTensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for m in 0..6 {
            write!(f, "│")?;
            for n in 0..6 {
                write!(f, " {:>12.5e}", self.mat[(m, n)])?;
            }
            write!(f, " │\n")?;
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
