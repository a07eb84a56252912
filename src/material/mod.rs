//! Implements optical and acoustic material properties

mod material;
mod material_file;
mod registry;
pub use crate::material::material::*;
pub use crate::material::material_file::*;
pub use crate::material::registry::*;
