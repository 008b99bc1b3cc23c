//! This module implements the forward sensitivity pipeline.
//!
//! Starting from a proposed measurement and a molecule, each step converts the previous
//! sensitivity into a more fundamental one: frequency, theta_QCD, nuclear Schiff moment, the
//! pion-nucleon couplings g_0, g_1, g_2, the up-down quark chromo-EDM difference, and finally
//! a new-particle mass scale. Every step is a standalone pure function; the
//! [`SensitivityReport`] collects all of them for one configuration.

use super::molecule::Molecule;
use super::settings::{MeasurementSettings, frequency_sensitivity_hz};
use crate::limits::conversion::QUARK_CHROMO_FACTOR;
use crate::math::constants::HBAR;
use crate::math::mass_scale::chromo_edm_limits_on_new_particle_mass;
use std::f64::consts::PI;
use tracing::debug;

/// Two molecular states with opposite Schiff sensitivity double the measured shift.
const OPPOSITE_STATE_ENHANCEMENT: f64 = 2.0;

/// Atomic EDM of Ra-225 per unit Schiff moment, in e*cm/(e*fm^3) (Dzuba2002a Eq. 16).
const RA_225_EDM_PER_SCHIFF: f64 = -8.5e-17;

// Isovector axial charges of the proton and neutron, Engel2013 Eq. 3.144.
const DELTA_U_PROTON: f64 = 0.746;
const DELTA_U_NEUTRON: f64 = -0.508;

/// Pion decay constant in MeV.
const F_PI_MEV: f64 = 185.0;

/// Effective nucleon mass in MeV.
///
/// This is larger than the physical nucleon mass; it is the value that reproduces the
/// Graner2016 conversion when inserted into Engel2013 Eq. 4.168.
const M_N_MEV: f64 = 995.0;

/// A measurement's sensitivity to theta_QCD.
///
/// The angular frequency resolution is converted to an energy with hbar and divided by the
/// product of the SI molecular enhancement and Schiff factor (Yu2021 supplementary material),
/// with an enhancement for the opposite-state difference and the nuclear spin alignment.
///
/// # Arguments
///
/// * `settings` - The measurement parameters.
/// * `molecule` - The molecular and nuclear sensitivity factors.
///
/// # Returns
///
/// The unitless theta_QCD sensitivity.
pub fn theta_qcd_sensitivity(settings: &MeasurementSettings, molecule: &Molecule) -> f64 {
    let delta_omega = 2.0 * PI * frequency_sensitivity_hz(settings);
    let schiff = molecule.schiff_si();
    let w_s = molecule.w_s_si();

    let orientation_enhancement =
        1.0 / (OPPOSITE_STATE_ENHANCEMENT * molecule.nucleus_e_field_alignment);

    orientation_enhancement * HBAR * delta_omega / (w_s * schiff)
}

/// A measurement's sensitivity to the nuclear Schiff moment, in e*fm^3.
///
/// Uses `S = K_S * theta_QCD` (Flambaum2020a Eq. 10).
pub fn schiff_moment_sensitivity(settings: &MeasurementSettings, molecule: &Molecule) -> f64 {
    molecule.k_s * theta_qcd_sensitivity(settings, molecule)
}

/// Factor converting `a_i * g_i` into a Schiff moment, `2 m_N g_A / F_pi` (Engel2013 Eq. 4.168).
fn g_pi_nn_to_schiff_prefactor() -> f64 {
    let g_a = DELTA_U_PROTON - DELTA_U_NEUTRON;
    2.0 * M_N_MEV * g_a / F_PI_MEV
}

fn g_sensitivity(settings: &MeasurementSettings, molecule: &Molecule, a_i: f64) -> f64 {
    schiff_moment_sensitivity(settings, molecule) / (g_pi_nn_to_schiff_prefactor() * a_i)
}

/// A measurement's sensitivity to the isoscalar CP-violating pion-nucleon coupling g_0.
///
/// Reported as an absolute value.
pub fn g_0_sensitivity(settings: &MeasurementSettings, molecule: &Molecule) -> f64 {
    g_sensitivity(settings, molecule, molecule.a_0).abs()
}

/// A measurement's sensitivity to the isovector CP-violating pion-nucleon coupling g_1.
///
/// Unlike g_0 and g_2, the sign of a_1 is kept.
pub fn g_1_sensitivity(settings: &MeasurementSettings, molecule: &Molecule) -> f64 {
    g_sensitivity(settings, molecule, molecule.a_1)
}

/// A measurement's sensitivity to the isotensor CP-violating pion-nucleon coupling g_2.
///
/// Reported as an absolute value.
pub fn g_2_sensitivity(settings: &MeasurementSettings, molecule: &Molecule) -> f64 {
    g_sensitivity(settings, molecule, molecule.a_2).abs()
}

/// A Schiff moment measurement's sensitivity to the quark chromo-EDM difference d_u - d_d.
///
/// The g_1 sensitivity is divided by the 2e14 cm^-1 conversion of Pospelov2002.
///
/// # Returns
///
/// The d_u - d_d sensitivity in cm.
pub fn up_down_quark_difference_chromo_edm_sensitivity(
    settings: &MeasurementSettings,
    molecule: &Molecule,
) -> f64 {
    g_1_sensitivity(settings, molecule) / QUARK_CHROMO_FACTOR
}

/// The equivalent atomic EDM sensitivity of Ra-225 in e*cm (Dzuba2002a Eq. 16).
pub fn radium_225_edm_sensitivity(settings: &MeasurementSettings, molecule: &Molecule) -> f64 {
    (RA_225_EDM_PER_SCHIFF * schiff_moment_sensitivity(settings, molecule)).abs()
}

/// The new-particle mass scale in TeV probed through the chromo-EDM sensitivity.
pub fn new_particle_mass_sensitivity(settings: &MeasurementSettings, molecule: &Molecule) -> f64 {
    chromo_edm_limits_on_new_particle_mass(up_down_quark_difference_chromo_edm_sensitivity(
        settings, molecule,
    ))
}

/// Every forward sensitivity of a single measurement configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensitivityReport {
    /// Statistical frequency sensitivity in Hz.
    pub frequency_hz: f64,
    pub theta_qcd: f64,
    /// Schiff moment sensitivity in e*fm^3.
    pub schiff_moment: f64,
    pub g_0: f64,
    pub g_1: f64,
    pub g_2: f64,
    /// d_u - d_d chromo-EDM sensitivity in cm.
    pub chromo_edm: f64,
    /// Equivalent Ra-225 atomic EDM sensitivity in e*cm.
    pub radium_225_edm: f64,
    /// New-particle mass scale in TeV.
    pub new_particle_mass: f64,
}

impl SensitivityReport {
    /// Runs every pipeline step for the given measurement and molecule.
    ///
    /// # Examples
    ///
    /// ```
    /// use edmlimits::{MeasurementSettings, Molecule, SensitivityReport};
    ///
    /// let report = SensitivityReport::compute(&MeasurementSettings::default(), &Molecule::default());
    /// assert!((report.theta_qcd - 1.73e-11).abs() < 1e-12);
    /// assert!(report.g_1 > 0.0);
    /// ```
    pub fn compute(settings: &MeasurementSettings, molecule: &Molecule) -> Self {
        let report = Self {
            frequency_hz: frequency_sensitivity_hz(settings),
            theta_qcd: theta_qcd_sensitivity(settings, molecule),
            schiff_moment: schiff_moment_sensitivity(settings, molecule),
            g_0: g_0_sensitivity(settings, molecule),
            g_1: g_1_sensitivity(settings, molecule),
            g_2: g_2_sensitivity(settings, molecule),
            chromo_edm: up_down_quark_difference_chromo_edm_sensitivity(settings, molecule),
            radium_225_edm: radium_225_edm_sensitivity(settings, molecule),
            new_particle_mass: new_particle_mass_sensitivity(settings, molecule),
        };
        debug!(
            molecule = molecule.molecule_name.as_deref().unwrap_or("unnamed"),
            frequency_hz = report.frequency_hz,
            theta_qcd = report.theta_qcd,
            new_particle_mass_tev = report.new_particle_mass,
            "computed forward sensitivities"
        );
        report
    }
}
