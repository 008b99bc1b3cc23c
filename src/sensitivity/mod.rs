//! This module contains the forward sensitivity model for a proposed measurement.
//!
//! It combines [`MeasurementSettings`] and [`Molecule`] only as function arguments: the
//! settings determine a frequency sensitivity, the molecule converts it into theta_QCD, and the
//! pipeline continues down to couplings, chromo-EDMs, and mass scales.

mod molecule;
mod pipeline;
mod settings;

pub use molecule::Molecule;
pub use pipeline::{
    SensitivityReport, g_0_sensitivity, g_1_sensitivity, g_2_sensitivity,
    new_particle_mass_sensitivity, radium_225_edm_sensitivity, schiff_moment_sensitivity,
    theta_qcd_sensitivity, up_down_quark_difference_chromo_edm_sensitivity,
};
pub use settings::{MeasurementSettings, frequency_sensitivity_hz};
