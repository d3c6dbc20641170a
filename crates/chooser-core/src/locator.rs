//! Locates the browser's `profiles.ini` for the current platform.
//!
//! Resolution is a pure function of the platform and an environment lookup,
//! so every branch can be exercised from any host in tests.

use crate::{Error, Result};
use std::ffi::OsString;
use std::path::PathBuf;

/// Platform families with distinct profile directory layouts
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Platform {
    Windows,
    MacOs,
    Unix,
}

impl Platform {
    /// Platform this binary was built for
    pub fn current() -> Self {
        #[cfg(target_os = "windows")]
        return Platform::Windows;

        #[cfg(target_os = "macos")]
        return Platform::MacOs;

        #[cfg(not(any(target_os = "windows", target_os = "macos")))]
        return Platform::Unix;
    }

    /// Environment variable holding the config root
    pub fn env_var(&self) -> &'static str {
        match self {
            Platform::Windows => "APPDATA",
            Platform::MacOs | Platform::Unix => "HOME",
        }
    }

    fn relative_path(&self) -> &'static [&'static str] {
        match self {
            Platform::Windows => &["Mozilla", "Firefox", "profiles.ini"],
            Platform::MacOs => &["Library", "Application Support", "Firefox", "profiles.ini"],
            Platform::Unix => &[".mozilla", "firefox", "profiles.ini"],
        }
    }
}

/// Build the `profiles.ini` path for `platform`, reading its config root through `lookup`
pub fn profiles_ini_path<F>(platform: Platform, lookup: F) -> Result<PathBuf>
where
    F: Fn(&str) -> Option<OsString>,
{
    let var = platform.env_var();
    let root = lookup(var)
        .filter(|value| !value.is_empty())
        .ok_or(Error::ConfigPathUnresolved { var })?;

    let mut path = PathBuf::from(root);
    path.extend(platform.relative_path());

    tracing::debug!("Resolved profiles.ini for {:?}: {}", platform, path.display());
    Ok(path)
}

/// Resolve `profiles.ini` for the running platform from the process environment
pub fn locate_profiles_ini() -> Result<PathBuf> {
    profiles_ini_path(Platform::current(), |var| std::env::var_os(var))
}
