use super::SpectrumConfig;
use crate::StrError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::f64::consts::LOG10_E;
use std::ffi::OsStr;
use std::fs::{self, File};
use std::path::Path;

/// Holds the data of one acoustic mode contributing to the gain spectrum
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct AcousticMode {
    /// Resonance frequency Ω [Hz]
    pub frequency: f64,

    /// Acoustic loss α [1/m]
    pub alpha: f64,

    /// Total gain [1/(W m)]
    pub gain: f64,

    /// Photoelastic contribution to the gain [1/(W m)]
    pub gain_pe: f64,

    /// Moving-boundary contribution to the gain [1/(W m)]
    pub gain_mb: f64,
}

impl AcousticMode {
    /// Returns the linewidth γ [Hz] of the resonance
    ///
    /// ```text
    ///     v α         2π Ω
    /// γ = ───  with v = ────  (phase velocity approximating the group velocity)
    ///     2π          k_ac
    /// ```
    pub fn linewidth(&self, k_ac: f64) -> f64 {
        self.frequency * self.alpha / k_ac
    }
}

/// Evaluates the normalized Lorentzian γ² / (γ² + δ²)
fn lorentzian(linewidth: f64, detuning: f64) -> f64 {
    let gg = linewidth * linewidth;
    let den = gg + detuning * detuning;
    if den == 0.0 {
        1.0
    } else {
        gg / den
    }
}

/// Holds the Brillouin gain spectrum built from the Lorentzian peaks of the acoustic modes
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct GainSpectrum {
    /// Output frequencies [GHz]
    pub frequencies: Vec<f64>,

    /// Total gain of each mode [n_mode][n_point] in 1/(W m)
    pub modes: Vec<Vec<f64>>,

    /// Sum of the total gains [1/(W m)]
    pub total: Vec<f64>,

    /// Sum of the photoelastic gains [1/(W m)]
    pub photoelastic: Vec<f64>,

    /// Sum of the moving-boundary gains [1/(W m)]
    pub moving_boundary: Vec<f64>,

    /// L_eff P_pump / A_eff factor used in the conversion to dB [W/m]
    pub pump_factor: f64,
}

impl GainSpectrum {
    /// Builds the gain spectrum
    ///
    /// # Input
    ///
    /// * `config` -- frequency grid and detuning window
    /// * `modes` -- the acoustic modes
    /// * `k_ac` -- acoustic wavenumber [1/m]
    pub fn new(config: &SpectrumConfig, modes: &[AcousticMode], k_ac: f64) -> Result<Self, StrError> {
        if k_ac <= 0.0 {
            return Err("k_ac must be > 0.0");
        }
        if modes.iter().any(|m| m.alpha < 0.0) {
            return Err("acoustic loss alpha must be ≥ 0.0");
        }
        let frequencies = config.grid();
        let npoint = frequencies.len();
        let window = config.tune_range * 1e9;
        let mut spectrum = GainSpectrum {
            frequencies,
            modes: Vec::with_capacity(modes.len()),
            total: vec![0.0; npoint],
            photoelastic: vec![0.0; npoint],
            moving_boundary: vec![0.0; npoint],
            pump_factor: config.pump_factor,
        };
        for mode in modes {
            let linewidth = mode.linewidth(k_ac);
            debug!(
                "acoustic mode at {:.4} GHz with linewidth {:.4} MHz",
                mode.frequency * 1e-9,
                linewidth * 1e-6
            );
            let mut peak = vec![0.0; npoint];
            for (i, f) in spectrum.frequencies.iter().enumerate() {
                let detuning = f64::clamp(f * 1e9 - mode.frequency, -window, window);
                let shape = lorentzian(linewidth, detuning);
                peak[i] = mode.gain * shape;
                spectrum.total[i] += mode.gain * shape;
                spectrum.photoelastic[i] += mode.gain_pe * shape;
                spectrum.moving_boundary[i] += mode.gain_mb * shape;
            }
            spectrum.modes.push(peak);
        }
        Ok(spectrum)
    }

    /// Converts gain values [1/(W m)] to dB using 10 log10(exp(|g| pump_factor))
    pub fn to_db(&self, values: &[f64]) -> Vec<f64> {
        values
            .iter()
            .map(|g| 10.0 * LOG10_E * f64::abs(*g) * self.pump_factor)
            .collect()
    }

    /// Returns the index and frequency [GHz] of the maximum total gain
    pub fn peak(&self) -> Option<(usize, f64)> {
        let mut res: Option<(usize, f64)> = None;
        for (i, g) in self.total.iter().enumerate() {
            match res {
                Some((k, _)) if self.total[k] >= *g => (),
                _ => res = Some((i, self.frequencies[i])),
            }
        }
        res
    }

    /// Writes a JSON file with the spectrum
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create file")?;
        serde_json::to_writer_pretty(&mut file, &self).map_err(|_| "cannot write file")?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
