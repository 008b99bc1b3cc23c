//! This module builds report rows for collections of EDM limits.
//!
//! Each [`LimitSummary`] flattens every derived quantity of one limit, leaving channels the
//! system does not have as `None`. Rows are independent, so a collection is evaluated in
//! parallel while keeping the input order.

use super::limit::EdmLimit;
use super::system::System;
use rayon::prelude::*;

/// All derived bounds of a single EDM limit.
#[derive(Debug, Clone, PartialEq)]
pub struct LimitSummary {
    pub year: i64,
    pub reference: String,
    pub system: Option<System>,
    /// The reported bound in e*cm.
    pub edm_bound: f64,
    pub theta_qcd: Option<f64>,
    /// Quark chromo-EDM bound in cm.
    pub chromo_edm: Option<f64>,
    /// New-particle mass scale from the chromo-EDM bound, in TeV.
    pub new_particle_mass: Option<f64>,
    /// One-loop electron EDM mass limit, in TeV.
    pub one_loop_mass: Option<f64>,
    /// Two-loop electron EDM mass limit, in TeV.
    pub two_loop_mass: Option<f64>,
}

impl From<&EdmLimit> for LimitSummary {
    fn from(limit: &EdmLimit) -> Self {
        Self {
            year: limit.year(),
            reference: limit.reference().to_string(),
            system: limit.system(),
            edm_bound: limit.edm_bound(),
            theta_qcd: limit.theta_qcd_limit().ok(),
            chromo_edm: limit.chromo_edm_limit().ok(),
            new_particle_mass: limit.new_particle_mass_from_chromo_edm().ok(),
            one_loop_mass: limit.one_loop_mass_limit().ok(),
            two_loop_mass: limit.two_loop_mass_limit().ok(),
        }
    }
}

/// Summarizes a collection of limits in parallel.
///
/// # Arguments
///
/// * `limits` - The limits to summarize, typically the output of a loader call.
///
/// # Returns
///
/// One [`LimitSummary`] per input limit, in the same order.
///
/// # Examples
///
/// ```
/// use edmlimits::{EdmLimit, summarize};
///
/// let limits = vec![
///     EdmLimit::hg(2016, 7.4e-30, "Graner2016"),
///     EdmLimit::electron(2023, 4.1e-30, "Roussy2023"),
/// ];
/// let rows = summarize(&limits);
/// assert!(rows[0].theta_qcd.is_some());
/// assert!(rows[1].theta_qcd.is_none());
/// assert!(rows[1].one_loop_mass.is_some());
/// ```
pub fn summarize(limits: &[EdmLimit]) -> Vec<LimitSummary> {
    limits.par_iter().map(LimitSummary::from).collect()
}
