use crate::StrError;
use std::fmt;

/// Holds the settings of the gain spectrum
pub struct SpectrumConfig {
    /// Minimum frequency of the output grid [GHz]
    pub freq_min: f64,

    /// Maximum frequency of the output grid [GHz]
    pub freq_max: f64,

    /// Number of points of the output grid
    pub n_point: usize,

    /// Half-width of the detuning window around each resonance [GHz]
    ///
    /// Outside the window, the Lorentzian is held at its edge value.
    pub tune_range: f64,

    /// Estimated L_eff P_pump / A_eff used in the conversion to dB [W/m]
    pub pump_factor: f64,
}

impl SpectrumConfig {
    /// Allocates a new instance with default values
    pub fn new() -> Self {
        SpectrumConfig {
            freq_min: 0.0,
            freq_max: 20.0,
            n_point: 3000,
            tune_range: 10.0,
            pump_factor: 6.5e-3,
        }
    }

    /// Sets the frequency range [GHz]
    pub fn set_freq_range(&mut self, freq_min: f64, freq_max: f64) -> Result<&mut Self, StrError> {
        if freq_min < 0.0 {
            return Err("freq_min must be ≥ 0.0");
        }
        if freq_max <= freq_min {
            return Err("freq_max must be > freq_min");
        }
        self.freq_min = freq_min;
        self.freq_max = freq_max;
        Ok(self)
    }

    /// Sets the number of points of the output grid
    pub fn set_n_point(&mut self, value: usize) -> Result<&mut Self, StrError> {
        if value < 2 {
            return Err("n_point must be ≥ 2");
        }
        self.n_point = value;
        Ok(self)
    }

    /// Sets the half-width of the detuning window [GHz]
    pub fn set_tune_range(&mut self, value: f64) -> Result<&mut Self, StrError> {
        if value <= 0.0 {
            return Err("tune_range must be > 0.0");
        }
        self.tune_range = value;
        Ok(self)
    }

    /// Sets the L_eff P_pump / A_eff factor used in the conversion to dB
    pub fn set_pump_factor(&mut self, value: f64) -> Result<&mut Self, StrError> {
        if value <= 0.0 {
            return Err("pump_factor must be > 0.0");
        }
        self.pump_factor = value;
        Ok(self)
    }

    /// Returns the frequencies of the output grid [GHz]
    pub fn grid(&self) -> Vec<f64> {
        let step = (self.freq_max - self.freq_min) / ((self.n_point - 1) as f64);
        (0..self.n_point).map(|i| self.freq_min + (i as f64) * step).collect()
    }
}

impl Default for SpectrumConfig {
    fn default() -> Self {
        SpectrumConfig::new()
    }
}

impl fmt::Display for SpectrumConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Gain spectrum configuration\n")?;
        write!(f, "===========================\n")?;
        write!(f, "freq_min = {:?} GHz\n", self.freq_min)?;
        write!(f, "freq_max = {:?} GHz\n", self.freq_max)?;
        write!(f, "n_point = {:?}\n", self.n_point)?;
        write!(f, "tune_range = {:?} GHz\n", self.tune_range)?;
        write!(f, "pump_factor = {:?} W/m\n", self.pump_factor)?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
