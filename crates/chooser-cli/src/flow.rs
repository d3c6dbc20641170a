//! Startup-to-exit flow: show the profiles, then launch at most once.

use crate::ProfileShell;
use anyhow::{Result, anyhow};
use chooser_browser::{LaunchRequest, Launcher};
use chooser_core::Profile;

/// How a chooser run ended. Every outcome exits successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Window closed without a selection
    Closed,
    Launched(LaunchRequest),
    /// A profile was picked but the browser could not be started
    LaunchFailed(LaunchRequest),
}

/// Let the user pick one of `profiles` and open `url` in it
pub fn run<S, L>(shell: &mut S, launcher: &L, profiles: &[Profile], url: &str) -> Result<Outcome>
where
    S: ProfileShell + ?Sized,
    L: Launcher + ?Sized,
{
    let Some(index) = shell.choose(profiles)? else {
        tracing::debug!("Window closed without a selection");
        return Ok(Outcome::Closed);
    };

    let profile = profiles
        .get(index)
        .ok_or_else(|| anyhow!("Selected profile {} is out of range", index))?;
    let request = LaunchRequest::new(profile.name.clone(), url);

    match launcher.launch(&request) {
        Ok(()) => Ok(Outcome::Launched(request)),
        Err(e) => {
            eprintln!("Error: failed to launch browser: {}", e);
            tracing::debug!("Launch error: {:?}", e);
            Ok(Outcome::LaunchFailed(request))
        }
    }
}
