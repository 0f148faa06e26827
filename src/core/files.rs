//! Probing for optional artifacts.
//!
//! Several pipeline inputs are optional files whose absence means "skip the
//! step". Only the specific not-found condition maps to `None`; any other
//! filesystem error (permissions, a file where a directory was expected)
//! propagates as fatal.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Probe for an optional file.
///
/// Returns `Ok(Some(path))` if the path exists, `Ok(None)` if the probe
/// failed with `NotFound`, and `Err` for every other probe failure.
pub fn probe_optional(path: &Path) -> Result<Option<PathBuf>> {
    match fs::metadata(path) {
        Ok(_) => Ok(Some(path.to_path_buf())),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}
