//! Conversion of electric dipole moment (EDM) limits into bounds on CP-violating physics.
//!
//! The crate runs in two directions. Measured limits from the neutron, Hg, Xe, TlF, Ra, Yb,
//! and the electron are mapped backwards through system-specific coefficients to theta_QCD,
//! quark chromo-EDM, and new-particle mass bounds. A proposed precision frequency measurement
//! is mapped forwards through molecular and nuclear factors to the same class of quantities.
//!
//! # Quick Start
//!
//! ```
//! use edmlimits::{EdmLimit, MeasurementSettings, Molecule, theta_qcd_sensitivity};
//!
//! let hg = EdmLimit::hg(2016, 7.4e-30, "Graner2016");
//! assert!((hg.theta_qcd_limit()? - 1.5e-10).abs() < 1e-15);
//!
//! let theta = theta_qcd_sensitivity(&MeasurementSettings::default(), &Molecule::default());
//! assert!(theta < hg.theta_qcd_limit()?);
//! # Ok::<(), edmlimits::EdmError>(())
//! ```

pub mod error;
pub mod limits;
pub mod loader;
pub mod math;
pub mod scenario;
pub mod sensitivity;

pub use error::EdmError;
pub use limits::{EdmLimit, LimitSummary, System, summarize};
pub use math::mass_scale::chromo_edm_limits_on_new_particle_mass;
pub use scenario::Scenario;
pub use sensitivity::{
    MeasurementSettings, Molecule, SensitivityReport, frequency_sensitivity_hz, g_0_sensitivity,
    g_1_sensitivity, g_2_sensitivity, new_particle_mass_sensitivity, radium_225_edm_sensitivity,
    schiff_moment_sensitivity, theta_qcd_sensitivity,
    up_down_quark_difference_chromo_edm_sensitivity,
};

use std::sync::OnceLock;

static DEFAULT_SCENARIO: OnceLock<Scenario> = OnceLock::new();

/// Returns the reference RaSH+ scenario embedded in the library.
pub fn get_default_scenario() -> &'static Scenario {
    DEFAULT_SCENARIO.get_or_init(|| {
        const DEFAULT_SCENARIO_TOML: &str = include_str!("../resources/default_scenario.toml");
        Scenario::load_from_str(DEFAULT_SCENARIO_TOML)
            .expect("Failed to parse embedded default scenario. This is a library bug.")
    })
}
