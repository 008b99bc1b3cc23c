use crate::limits::System;
use std::path::PathBuf;
use thiserror::Error;

/// The primary error type for all fallible operations in the `edmlimits` library.
///
/// Derived-quantity accessors on [`EdmLimit`](crate::EdmLimit) report usage errors through
/// this type, while the loader and scenario configuration report parsing and I/O failures.
/// Pure numeric pipeline functions never return it: degenerate inputs propagate as IEEE
/// infinities or NaNs.
#[derive(Error, Debug)]
pub enum EdmError {
    /// A derived quantity was requested from a limit that has no such conversion channel.
    ///
    /// This is raised for every query on the untagged base entity, and for channels a
    /// system lacks by physical design (for example the chromo-EDM of the electron).
    #[error("{quantity} is not implemented for {}", system_label(.system))]
    UnimplementedConversion {
        /// The system that was queried, or `None` for the untagged base entity.
        system: Option<System>,
        /// The name of the quantity that was requested.
        quantity: &'static str,
    },

    /// A row of a measurement table could not be parsed into `(year, bound, reference)`.
    ///
    /// Loading of the affected file is aborted; no rows from it are returned.
    #[error("Malformed row at {source_name}:{line}: {details}")]
    MalformedInputRow {
        /// The file path or label of the table being parsed.
        source_name: String,
        /// The 1-based line number of the offending row.
        line: usize,
        /// A description of what could not be parsed.
        details: String,
    },

    /// A system tag string did not name one of the supported measured systems.
    #[error("Unknown EDM system: '{0}'")]
    UnknownSystem(String),

    /// Strict validation rejected an EDM bound that is not a finite positive number.
    #[error("Invalid EDM bound: {0:e} e*cm (must be finite and positive)")]
    InvalidBound(f64),

    /// Strict validation rejected a measurement or molecule setting.
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    /// An I/O error that occurred while reading a data table or scenario file.
    #[error("I/O error at path '{path}': {source}")]
    IoError {
        /// The path of the file that caused the I/O error.
        path: PathBuf,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// A scenario file was not valid TOML or did not match the expected structure.
    #[error("Failed to deserialize TOML scenario: {0}")]
    DeserializationError(#[from] toml::de::Error),
}

fn system_label(system: &Option<System>) -> String {
    match system {
        Some(system) => format!("the {system} system"),
        None => "an untagged EDM limit".to_string(),
    }
}
