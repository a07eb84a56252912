//! Optical and acoustic material properties for opto-acoustic (Brillouin) waveguide simulations
//!
//! The materials hold the refractive index, density, and the stiffness,
//! photoelastic and acoustic loss tensors in Voigt notation. The crystal
//! axes may be rotated about the principal axes, producing a new material.
//!
//! ```
//! use optoacoustic::prelude::*;
//!
//! let registry = MaterialRegistry::builtin().unwrap();
//! let si = registry.get("Si_2016_Smith").unwrap();
//! let rotated = si.rotate_label(std::f64::consts::PI / 4.0, "z-axis").unwrap();
//! assert!(rotated.stiffness().is_symmetric(1e-12));
//! ```

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod gain;
pub mod material;
pub mod prelude;
pub mod tensor;
