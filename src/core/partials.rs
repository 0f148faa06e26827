//! README partials declared by a library.
//!
//! A library opts into README regeneration by shipping a small YAML file
//! with up to two recognized keys, `introduction` and `body`. Each key maps
//! to a fixed marker comment in the generated README that the external
//! generator replaces.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Marker strings the README generator replaces.
pub mod markers {
    pub const INTRODUCTION: &str = "[//]: # \"partials.introduction\"";
    pub const BODY: &str = "[//]: # \"partials.body\"";
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Partials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub introduction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl Partials {
    /// Present, non-empty sections in substitution order: introduction, then body.
    ///
    /// Each entry pairs the README marker with the replacement text.
    pub fn sections(&self) -> Vec<(&'static str, &str)> {
        let mut sections = Vec::new();
        if let Some(text) = non_empty(&self.introduction) {
            sections.push((markers::INTRODUCTION, text));
        }
        if let Some(text) = non_empty(&self.body) {
            sections.push((markers::BODY, text));
        }
        sections
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

/// Load the partials file from `path`.
///
/// Absent file means the library opted out of README regeneration and maps
/// to `Ok(None)`. Unreadable files and invalid YAML are errors.
pub fn load(path: &Path) -> Result<Option<Partials>> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let partials: Partials = serde_yml::from_str(&text).map_err(|e| Error::Partials {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    Ok(Some(partials))
}
