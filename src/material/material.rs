use crate::tensor::{rotate_voigt, Axis, CubicConstants, RotationError, VoigtTensor};
use crate::StrError;
use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Holds the provenance of the material data
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Provenance {
    /// Author of the data
    pub author: String,

    /// Year of publication or measurement
    pub date: String,

    /// Source institution
    pub institution: String,

    /// DOI or, failing that, the web address
    pub doi: String,
}

/// Holds the stiffness, photoelastic and acoustic loss tensors
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub enum MaterialTensors {
    /// Cubic-symmetry material described by the (11, 12, 44) components of each tensor
    Isotropic {
        /// Stiffness [Pa]
        c: CubicConstants,

        /// Photoelastic coupling [-]
        p: CubicConstants,

        /// Acoustic loss [Pa s]
        eta: CubicConstants,
    },

    /// Material described by the full 6×6 matrices (e.g., after a rotation)
    Anisotropic {
        /// Stiffness [Pa]
        c: VoigtTensor,

        /// Photoelastic coupling [-]
        p: VoigtTensor,

        /// Acoustic loss [Pa s]
        eta: VoigtTensor,
    },
}

/// Holds the optical and acoustic properties of a material
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Material {
    /// Identifier (name of the data file)
    pub name: String,

    /// Chemical composition
    pub chemical: String,

    /// Source of the data
    pub provenance: Provenance,

    /// Refractive index n [-]
    pub refractive_index: f64,

    /// Density s [kg/m³]
    pub density: f64,

    /// Stiffness, photoelastic and acoustic loss tensors
    pub tensors: MaterialTensors,

    /// Rotation of the crystal axes applied to the tabulated data (axis, angle in radians)
    pub rotation: Option<(Axis, f64)>,
}

impl Material {
    /// Allocates a new cubic-symmetry (isotropic) material
    pub fn isotropic(
        name: &str,
        refractive_index: f64,
        density: f64,
        c: CubicConstants,
        p: CubicConstants,
        eta: CubicConstants,
    ) -> Self {
        Material {
            name: name.to_string(),
            chemical: String::new(),
            provenance: Provenance::default(),
            refractive_index,
            density,
            tensors: MaterialTensors::Isotropic { c, p, eta },
            rotation: None,
        }
    }

    /// Indicates whether the material carries full 6×6 tensors
    pub fn is_anisotropic(&self) -> bool {
        matches!(self.tensors, MaterialTensors::Anisotropic { .. })
    }

    /// Returns the stiffness tensor c [Pa] in Voigt notation
    pub fn stiffness(&self) -> VoigtTensor {
        match &self.tensors {
            MaterialTensors::Isotropic { c, .. } => c.to_voigt(),
            MaterialTensors::Anisotropic { c, .. } => c.clone(),
        }
    }

    /// Returns the photoelastic tensor p [-] in Voigt notation
    pub fn photoelastic(&self) -> VoigtTensor {
        match &self.tensors {
            MaterialTensors::Isotropic { p, .. } => p.to_voigt(),
            MaterialTensors::Anisotropic { p, .. } => p.clone(),
        }
    }

    /// Returns the acoustic loss tensor eta [Pa s] in Voigt notation
    pub fn acoustic_loss(&self) -> VoigtTensor {
        match &self.tensors {
            MaterialTensors::Isotropic { eta, .. } => eta.to_voigt(),
            MaterialTensors::Anisotropic { eta, .. } => eta.clone(),
        }
    }

    /// Validates the scalar properties and the tensor components
    pub fn validate(&self) -> Result<(), StrError> {
        if !self.refractive_index.is_finite() || self.refractive_index <= 0.0 {
            return Err("refractive index must be > 0.0");
        }
        if !self.density.is_finite() || self.density < 0.0 {
            return Err("density must be ≥ 0.0");
        }
        self.stiffness().validate()?;
        self.photoelastic().validate()?;
        self.acoustic_loss().validate()?;
        Ok(())
    }

    /// Rotates the crystal axes by `theta` radians about a principal axis
    ///
    /// Returns a new material holding the full rotated tensors; `self` is not modified.
    ///
    /// # Errors
    ///
    /// Returns [RotationError::NotSupported] if the material is anisotropic.
    pub fn rotate(&self, theta: f64, axis: Axis) -> Result<Material, RotationError> {
        let (c, p, eta) = match &self.tensors {
            MaterialTensors::Isotropic { c, p, eta } => (c, p, eta),
            MaterialTensors::Anisotropic { .. } => return Err(RotationError::NotSupported),
        };
        debug!("rotating {} by {} rad about the {}", self.name, theta, axis);
        let rr = axis.rotation_matrix(theta);
        Ok(Material {
            name: self.name.clone(),
            chemical: self.chemical.clone(),
            provenance: self.provenance.clone(),
            refractive_index: self.refractive_index,
            density: self.density,
            tensors: MaterialTensors::Anisotropic {
                c: rotate_voigt(&c.to_voigt(), &rr),
                p: rotate_voigt(&p.to_voigt(), &rr),
                eta: rotate_voigt(&eta.to_voigt(), &rr),
            },
            rotation: Some((axis, theta)),
        })
    }

    /// Rotates the crystal axes given the axis label ("x-axis", "y-axis" or "z-axis")
    ///
    /// # Errors
    ///
    /// * [RotationError::InvalidAxis] if the label is not recognized
    /// * [RotationError::NotSupported] if the material is anisotropic
    pub fn rotate_label(&self, theta: f64, axis_label: &str) -> Result<Material, RotationError> {
        let axis: Axis = axis_label.parse()?;
        self.rotate(theta, axis)
    }

    /// Rotates the crystal axes for a list of angles (in parallel)
    ///
    /// The results follow the order of `thetas`.
    pub fn rotation_sweep(&self, thetas: &[f64], axis: Axis) -> Result<Vec<Material>, RotationError> {
        if self.is_anisotropic() {
            return Err(RotationError::NotSupported);
        }
        thetas.par_iter().map(|theta| self.rotate(*theta, axis)).collect()
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})\n", self.name, self.chemical)?;
        write!(
            f,
            "source: {}, {}, {} {}\n",
            self.provenance.author, self.provenance.institution, self.provenance.date, self.provenance.doi
        )?;
        write!(f, "n = {:?}\n", self.refractive_index)?;
        write!(f, "s = {:?} kg/m³\n", self.density)?;
        match self.rotation {
            Some((axis, theta)) => write!(f, "rotated by {:?} rad about the {}\n", theta, axis)?,
            None => write!(f, "{}\n", if self.is_anisotropic() { "anisotropic" } else { "isotropic" })?,
        }
        write!(f, "\nstiffness c [Pa]\n{}", self.stiffness())?;
        write!(f, "\nphotoelastic p [-]\n{}", self.photoelastic())?;
        write!(f, "\nacoustic loss eta [Pa s]\n{}", self.acoustic_loss())?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
