//! JSON interchange for observation lists and overlay paths.
//!
//! Engines serialize their output as a JSON array of observations; the
//! CLI and tests replay those files through the shape builders without a
//! live engine, and write the resulting paths back out as JSON for the
//! rendering layer.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::error::TextquadError;
use crate::overlay::OverlayPath;

use super::Observation;

/// Reads an observation list from a JSON file.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn read_observations_json(path: &Path) -> Result<Vec<Observation>, TextquadError> {
    let file = File::open(path).map_err(TextquadError::Io)?;
    let reader = BufReader::new(file);

    serde_json::from_reader(reader).map_err(|source| TextquadError::ObservationsParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes overlay paths to a JSON file.
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn write_overlay_json(path: &Path, paths: &[OverlayPath]) -> Result<(), TextquadError> {
    let file = File::create(path).map_err(TextquadError::Io)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, paths).map_err(|source| TextquadError::OverlayWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses an observation list from a JSON string.
///
/// Useful for testing without file I/O.
pub fn from_json_str(json: &str) -> Result<Vec<Observation>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Parses an observation list from raw bytes.
///
/// Entry point for the fuzz target, which only cares that arbitrary
/// input never panics.
pub fn from_json_slice(bytes: &[u8]) -> Result<Vec<Observation>, serde_json::Error> {
    serde_json::from_slice(bytes)
}

/// Serializes overlay paths to a pretty JSON string.
pub fn to_json_string(paths: &[OverlayPath]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(paths)
}
