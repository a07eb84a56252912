//! Implements the Brillouin gain spectrum built from the acoustic resonances

mod gain_spectrum;
mod spectrum_config;
pub use crate::gain::gain_spectrum::*;
pub use crate::gain::spectrum_config::*;
