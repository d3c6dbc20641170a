//! Locating the browser binary and starting it, detached, on a chosen profile.

mod browser_finder;
mod error;
mod launcher;

pub use browser_finder::{BrowserFinder, DEFAULT_BROWSER};
pub use error::{Error, Result};
pub use launcher::{BrowserLauncher, LaunchRequest, Launcher};
