//! This module reads published EDM limits from whitespace-delimited measurement tables.
//!
//! Each non-empty, non-comment line holds `year edm_bound reference`. Hadronic tables live at
//! `<data_dir>/hadronic/<system>.txt`, electron tables under `<data_dir>/electron/`. A row that
//! cannot be parsed aborts the whole file with [`EdmError::MalformedInputRow`].

use crate::error::EdmError;
use crate::limits::{EdmLimit, System};
use std::path::Path;
use tracing::{debug, trace, warn};

/// Maximum stored length of a reference string, in bytes.
pub const MAX_REFERENCE_BYTES: usize = 11;

const COMMENT_MARKER: char = '#';

/// Parses the contents of a measurement table.
///
/// # Arguments
///
/// * `system` - The system every row belongs to, or `None` for untagged limits.
/// * `content` - The table contents.
/// * `source_name` - A label for the table used in error messages, typically its path.
///
/// # Returns
///
/// The limits in file order. A table with a single row yields a one-element vector.
///
/// # Errors
///
/// Returns [`EdmError::MalformedInputRow`] for the first row that does not have exactly three
/// columns or whose year or bound does not parse.
///
/// # Examples
///
/// ```
/// use edmlimits::{System, loader::parse_limits};
///
/// let table = "# year  edm   ref\n2016 7.4e-30 Graner2016\n";
/// let limits = parse_limits(Some(System::Hg), table, "Hg.txt").unwrap();
/// assert_eq!(limits.len(), 1);
/// assert_eq!(limits[0].reference(), "Graner2016");
/// ```
pub fn parse_limits(
    system: Option<System>,
    content: &str,
    source_name: &str,
) -> Result<Vec<EdmLimit>, EdmError> {
    let mut limits = Vec::new();

    for (index, raw_line) in content.lines().enumerate() {
        let line_number = index + 1;
        let line = strip_comment(raw_line).trim();
        if line.is_empty() {
            continue;
        }

        let malformed = |details: String| EdmError::MalformedInputRow {
            source_name: source_name.to_string(),
            line: line_number,
            details,
        };

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() != 3 {
            return Err(malformed(format!(
                "expected 3 fields (year, edm_bound, reference), got {}",
                parts.len()
            )));
        }

        let year: i64 = parts[0]
            .parse()
            .map_err(|_| malformed(format!("invalid year '{}'", parts[0])))?;
        let edm_bound: f64 = parts[1]
            .parse()
            .map_err(|_| malformed(format!("invalid EDM bound '{}'", parts[1])))?;
        let reference = truncate_reference(parts[2], source_name, line_number);

        trace!(source_name, line_number, year, edm_bound, reference, "parsed EDM limit row");
        limits.push(EdmLimit::new(system, year, edm_bound, reference));
    }

    Ok(limits)
}

/// Reads and parses a measurement table from a file.
///
/// # Errors
///
/// Returns an `EdmError::IoError` if the file cannot be read, or the error from
/// [`parse_limits`].
pub fn load_limits_from_file(
    system: Option<System>,
    path: &Path,
) -> Result<Vec<EdmLimit>, EdmError> {
    let content = std::fs::read_to_string(path).map_err(|io_error| EdmError::IoError {
        path: path.to_path_buf(),
        source: io_error,
    })?;

    let limits = parse_limits(system, &content, &path.display().to_string())?;
    debug!(
        path = %path.display(),
        system = system.map(System::tag).unwrap_or("untagged"),
        rows = limits.len(),
        "loaded EDM limits"
    );
    Ok(limits)
}

/// Loads the table of a hadronic system from `<data_dir>/hadronic/<tag>.txt`.
///
/// # Errors
///
/// Returns `EdmError::UnknownSystem` for [`System::Electron`], whose tables are read with
/// [`load_electron`], and otherwise the errors of [`load_limits_from_file`].
pub fn load_hadronic(data_dir: &Path, system: System) -> Result<Vec<EdmLimit>, EdmError> {
    if !system.is_hadronic() {
        return Err(EdmError::UnknownSystem(format!("{system} (not hadronic)")));
    }
    let path = data_dir
        .join("hadronic")
        .join(format!("{}.txt", system.tag()));
    load_limits_from_file(Some(system), &path)
}

/// Loads an electron EDM table from `<data_dir>/electron/<file_name>`.
///
/// # Errors
///
/// Returns the errors of [`load_limits_from_file`].
pub fn load_electron(data_dir: &Path, file_name: &str) -> Result<Vec<EdmLimit>, EdmError> {
    let path = data_dir.join("electron").join(file_name);
    load_limits_from_file(Some(System::Electron), &path)
}

fn strip_comment(line: &str) -> &str {
    match line.find(COMMENT_MARKER) {
        Some(position) => &line[..position],
        None => line,
    }
}

fn truncate_reference<'a>(reference: &'a str, source_name: &str, line_number: usize) -> &'a str {
    if reference.len() <= MAX_REFERENCE_BYTES {
        return reference;
    }
    let mut end = MAX_REFERENCE_BYTES;
    while !reference.is_char_boundary(end) {
        end -= 1;
    }
    warn!(
        source_name,
        line_number,
        reference,
        "reference exceeds {MAX_REFERENCE_BYTES} bytes and was truncated"
    );
    &reference[..end]
}
