//! Profile list extraction from `profiles.ini`.
//!
//! Only lines starting with `Name=` are consulted; sections and every other
//! key are ignored. Order follows the file and duplicates are kept.

use crate::{Error, Result};
use std::fmt;
use std::path::Path;

const NAME_PREFIX: &str = "Name=";

/// A browser profile as listed in `profiles.ini`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
}

impl Profile {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Extract profile names from `profiles.ini` text, in file order
pub fn parse_profiles(text: &str) -> Vec<Profile> {
    text.lines()
        .filter_map(|line| line.strip_prefix(NAME_PREFIX))
        .map(Profile::new)
        .collect()
}

/// Read and parse `profiles.ini`, failing when no profile is listed
pub fn read_profiles(path: &Path) -> Result<Vec<Profile>> {
    tracing::debug!("Reading profiles from: {}", path.display());

    let bytes = std::fs::read(path).map_err(|source| Error::ConfigUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let profiles = parse_profiles(&String::from_utf8_lossy(&bytes));

    if profiles.is_empty() {
        return Err(Error::NoProfilesFound {
            path: path.to_path_buf(),
        });
    }

    tracing::debug!("Found {} profile(s)", profiles.len());
    Ok(profiles)
}
