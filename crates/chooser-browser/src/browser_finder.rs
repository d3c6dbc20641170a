use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Program looked up on `PATH` when no explicit browser is configured
pub const DEFAULT_BROWSER: &str = "firefox";

/// Locates the browser binary on the system
#[derive(Debug, Clone, Default)]
pub struct BrowserFinder {
    custom_path: Option<PathBuf>,
}

impl BrowserFinder {
    /// Create a new BrowserFinder with optional custom path
    pub fn new(custom_path: Option<PathBuf>) -> Self {
        Self { custom_path }
    }

    /// Find the browser binary, checking the custom path first, then `PATH`
    pub fn find(&self) -> Result<PathBuf> {
        if let Some(ref path) = self.custom_path {
            return self.validate_browser_path(path);
        }

        which::which(DEFAULT_BROWSER).map_err(|e| {
            Error::BrowserNotFound(format!(
                "'{}' is not on PATH ({}). Use --browser to specify location.",
                DEFAULT_BROWSER, e
            ))
        })
    }

    /// Validate that a path exists and is executable
    fn validate_browser_path(&self, path: &Path) -> Result<PathBuf> {
        if !path.is_file() {
            return Err(Error::BrowserNotFound(format!(
                "no executable at: {}",
                path.display()
            )));
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let metadata = std::fs::metadata(path)?;
            if metadata.permissions().mode() & 0o111 == 0 {
                return Err(Error::BrowserNotFound(format!(
                    "binary not executable: {}",
                    path.display()
                )));
            }
        }

        Ok(path.to_path_buf())
    }
}
