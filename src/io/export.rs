//! Schema JSON export at the system boundary
//!
//! Puzzles serialize to the declared schema verbatim: `size`, `solution` as
//! nested arrays, and `cages` with coordinate elements, or flat-index
//! elements in the normalized wire form.

use std::fs;
use std::path::Path;

use crate::io::error::{PuzzleError, Result};
use crate::puzzle::PuzzleModel;

/// Render a puzzle as schema JSON
///
/// # Errors
///
/// Returns
/// [`PuzzleError::Serialization`](crate::PuzzleError::Serialization) if the
/// serializer fails.
pub fn model_to_json(model: &PuzzleModel, normalized: bool, pretty: bool) -> Result<String> {
    let json = if normalized {
        let wire = model.normalize();
        if pretty {
            serde_json::to_string_pretty(&wire)?
        } else {
            serde_json::to_string(&wire)?
        }
    } else if pretty {
        serde_json::to_string_pretty(model)?
    } else {
        serde_json::to_string(model)?
    };
    Ok(json)
}

/// Write a puzzle as schema JSON to the given path
///
/// # Errors
///
/// Returns
/// [`PuzzleError::Serialization`](crate::PuzzleError::Serialization) if the
/// serializer fails, or
/// [`PuzzleError::FileSystem`](crate::PuzzleError::FileSystem) if the file
/// cannot be written.
pub fn write_model(model: &PuzzleModel, path: &Path, normalized: bool, pretty: bool) -> Result<()> {
    let json = model_to_json(model, normalized, pretty)?;
    fs::write(path, json).map_err(|source| PuzzleError::FileSystem {
        path: path.to_path_buf(),
        operation: "write",
        source,
    })
}
