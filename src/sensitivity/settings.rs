//! This module defines the parameters of a proposed frequency measurement.
//!
//! It provides the `MeasurementSettings` struct, which describes a shot-noise-limited
//! measurement with uncorrelated trapped particles, and the statistical frequency
//! sensitivity that follows from it.

use crate::error::EdmError;
use serde::Deserialize;
use std::f64::consts::PI;

/// Settings that determine a frequency measurement's statistical sensitivity.
///
/// The measurement is a sequence of spin-precession shots with uncorrelated particles. Each
/// shot precesses for the coherence time and is followed by a down time; the efficiency
/// describes the fringe contrast of the Rabi or Ramsey signal.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MeasurementSettings {
    /// Uncorrelated particles per measurement.
    ///
    /// A value of zero is accepted and yields an infinite sensitivity.
    pub particle_number: u64,
    /// Experiment efficiency factor in (0, 1].
    pub efficiency: f64,
    /// Total measurement time in seconds.
    ///
    /// The default corresponds to ten days.
    pub measurement_time: f64,
    /// Dead time per shot in seconds.
    pub down_time: f64,
    /// Spin precession time per shot in seconds.
    pub coherence_time: f64,
}

impl Default for MeasurementSettings {
    fn default() -> Self {
        Self {
            particle_number: 1,
            efficiency: 0.99,
            measurement_time: 864_000.0,
            down_time: 30e-3,
            coherence_time: 100.0,
        }
    }
}

impl MeasurementSettings {
    /// Checks that every setting is physically meaningful.
    ///
    /// This is an opt-in check; the sensitivity functions accept any values and let
    /// degenerate inputs propagate as infinities or NaNs.
    ///
    /// # Errors
    ///
    /// Returns [`EdmError::InvalidSettings`] naming the first offending field.
    pub fn validate(&self) -> Result<(), EdmError> {
        if self.particle_number == 0 {
            return Err(EdmError::InvalidSettings(
                "particle_number must be at least 1".to_string(),
            ));
        }
        if !(self.efficiency > 0.0 && self.efficiency <= 1.0) {
            return Err(EdmError::InvalidSettings(format!(
                "efficiency must be in (0, 1], got {}",
                self.efficiency
            )));
        }
        for (name, value) in [
            ("measurement_time", self.measurement_time),
            ("coherence_time", self.coherence_time),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(EdmError::InvalidSettings(format!(
                    "{name} must be finite and positive, got {value}"
                )));
            }
        }
        if !self.down_time.is_finite() || self.down_time < 0.0 {
            return Err(EdmError::InvalidSettings(format!(
                "down_time must be finite and non-negative, got {}",
                self.down_time
            )));
        }
        Ok(())
    }
}

/// Returns the frequency sensitivity of a measurement in Hz.
///
/// For `N` uncorrelated particles the sensitivity is
/// `1 / (2 pi tau beta sqrt(N T / (tau + T_down)))`, where `tau` is the coherence time,
/// `beta` the efficiency, `T` the total measurement time, and `T_down` the dead time per shot.
///
/// # Arguments
///
/// * `settings` - The measurement parameters.
///
/// # Returns
///
/// The statistical frequency sensitivity in Hz.
///
/// # Examples
///
/// ```
/// use edmlimits::{MeasurementSettings, frequency_sensitivity_hz};
///
/// let delta_f = frequency_sensitivity_hz(&MeasurementSettings::default());
/// assert!((delta_f - 1.73e-5).abs() < 1e-6);
/// ```
pub fn frequency_sensitivity_hz(settings: &MeasurementSettings) -> f64 {
    let t_total = settings.measurement_time;
    let t_down = settings.down_time;
    let tau = settings.coherence_time;
    let beta = settings.efficiency;
    let n = settings.particle_number as f64;

    let prefactor = 2.0 * PI * tau * beta;
    let denominator = prefactor * (n * t_total / (tau + t_down)).sqrt();

    1.0 / denominator
}
