//! This module provides physical constants and shared unit conversions for the edmlimits library.
//!
//! It contains the constants used to move between SI, atomic, and natural units, and the
//! mass-scale conversion that turns a quark chromo-EDM bound into a new-particle mass limit.
//! Both the measured-limit hierarchy and the forward sensitivity pipeline build on these.

/// Physical constants and fixed unit conversion factors.
///
/// Values follow CODATA 2018 for the SI constants; the remaining factors are the hard-coded
/// conversions used by individual physics relationships.
pub mod constants;

/// Conversion of quark chromo-EDM bounds into new-particle mass-scale limits.
pub mod mass_scale;
