use super::constants::{CM_TO_FM, FINE_STRUCTURE, HBAR_C_MEV_FM, MEV_TO_TEV};
use std::f64::consts::PI;

/// Very approximate up-quark mass in MeV.
const LIGHT_QUARK_MASS_MEV: f64 = 5.0;

/// Converts a quark chromo-EDM bound into a one-loop new-particle mass-scale limit.
///
/// The chromo-EDM is converted from cm to fm, then to inverse MeV through hbar*c = 197 MeV*fm.
/// The mass scale follows from `sqrt(alpha * m_q / pi / d_q)`, reported in TeV.
///
/// # Arguments
///
/// * `d_q` - The quark chromo-EDM bound in cm.
///
/// # Returns
///
/// The particle mass sensitivity scale in TeV. Non-positive inputs yield NaN or infinity.
///
/// # Examples
///
/// ```
/// use edmlimits::chromo_edm_limits_on_new_particle_mass;
///
/// let mass_tev = chromo_edm_limits_on_new_particle_mass(1e-27);
/// assert!((mass_tev - 15.1).abs() < 0.1);
/// ```
pub fn chromo_edm_limits_on_new_particle_mass(d_q: f64) -> f64 {
    let prefactor = FINE_STRUCTURE * LIGHT_QUARK_MASS_MEV / PI;

    let d_q_fm = d_q * CM_TO_FM;
    let d_q_inv_mev = d_q_fm * (1.0 / HBAR_C_MEV_FM);

    MEV_TO_TEV * (prefactor / d_q_inv_mev).sqrt()
}
