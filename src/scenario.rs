//! This module provides measurement scenarios and utilities for loading them from TOML files.
//!
//! A [`Scenario`] pairs the [`MeasurementSettings`] of a proposed experiment with the
//! [`Molecule`] it uses. Both sections are optional in TOML and fall back to their defaults
//! field by field, so a file only needs to state what differs from the reference RaSH+
//! measurement.

use crate::error::EdmError;
use crate::sensitivity::{MeasurementSettings, Molecule, SensitivityReport};
use serde::Deserialize;
use std::path::Path;

/// A proposed measurement and the molecule it is performed with.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Scenario {
    /// The `[measurement]` table.
    pub measurement: MeasurementSettings,
    /// The `[molecule]` table.
    pub molecule: Molecule,
}

impl Scenario {
    /// Loads a scenario from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the TOML file containing the scenario.
    ///
    /// # Errors
    ///
    /// Returns an `EdmError::IoError` if the file cannot be read, or an
    /// `EdmError::DeserializationError` if the TOML content is invalid or contains unknown keys.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use edmlimits::Scenario;
    /// use std::path::Path;
    ///
    /// let scenario = Scenario::load_from_file(Path::new("scenario.toml")).unwrap();
    /// ```
    pub fn load_from_file(path: &Path) -> Result<Self, EdmError> {
        let content = std::fs::read_to_string(path).map_err(|io_error| EdmError::IoError {
            path: path.to_path_buf(),
            source: io_error,
        })?;

        Self::load_from_str(&content)
    }

    /// Parses a scenario from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an `EdmError::DeserializationError` if the TOML content is invalid or contains
    /// unknown keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use edmlimits::Scenario;
    ///
    /// let toml_data = r#"
    /// [measurement]
    /// particle_number = 100
    ///
    /// [molecule]
    /// molecule_name = "RaOCH3+"
    /// "#;
    ///
    /// let scenario = Scenario::load_from_str(toml_data).unwrap();
    /// assert_eq!(scenario.measurement.particle_number, 100);
    /// assert_eq!(scenario.measurement.coherence_time, 100.0);
    /// ```
    pub fn load_from_str(toml_str: &str) -> Result<Self, EdmError> {
        toml::from_str(toml_str).map_err(EdmError::from)
    }

    /// Applies the strict checks of both sections.
    ///
    /// # Errors
    ///
    /// Returns the first `EdmError::InvalidSettings` reported by either section.
    pub fn validate(&self) -> Result<(), EdmError> {
        self.measurement.validate()?;
        self.molecule.validate()
    }

    /// Runs the full forward pipeline for this scenario.
    pub fn report(&self) -> SensitivityReport {
        SensitivityReport::compute(&self.measurement, &self.molecule)
    }
}
