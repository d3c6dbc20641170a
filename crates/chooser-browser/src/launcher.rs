use crate::{BrowserFinder, Error, Result};
use std::path::Path;
use std::process::{Command, Stdio};

/// A profile choice paired with the URL to open in it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    pub profile: String,
    pub url: String,
}

impl LaunchRequest {
    pub fn new(profile: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            profile: profile.into(),
            url: url.into(),
        }
    }

    /// Browser command-line arguments: `-P <profile> <url>`
    pub fn args(&self) -> [&str; 3] {
        ["-P", self.profile.as_str(), self.url.as_str()]
    }
}

/// Starts the browser for a launch request
pub trait Launcher {
    fn launch(&self, request: &LaunchRequest) -> Result<()>;
}

/// Launches the real browser as a detached, fire-and-forget process
#[derive(Debug, Clone, Default)]
pub struct BrowserLauncher {
    finder: BrowserFinder,
}

impl BrowserLauncher {
    pub fn new(finder: BrowserFinder) -> Self {
        Self { finder }
    }
}

impl Launcher for BrowserLauncher {
    fn launch(&self, request: &LaunchRequest) -> Result<()> {
        let program = self.finder.find()?;
        tracing::info!(
            "Launching {} with profile '{}' for {}",
            program.display(),
            request.profile,
            request.url
        );

        let child = spawn_detached(&program, &request.args()).map_err(|source| Error::Launch {
            program: program.clone(),
            source,
        })?;

        // The child is never waited on; it outlives the chooser.
        tracing::debug!("Browser started with pid {}", child.id());
        Ok(())
    }
}

/// Spawn `program` in its own session with no inherited stdio
fn spawn_detached(program: &Path, args: &[&str]) -> std::io::Result<std::process::Child> {
    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;

        // New session so the browser is not tied to the chooser's terminal.
        unsafe {
            cmd.pre_exec(|| {
                if libc::setsid() == -1 {
                    return Err(std::io::Error::last_os_error());
                }
                libc::signal(libc::SIGHUP, libc::SIG_IGN);
                Ok(())
            });
        }
    }

    #[cfg(windows)]
    {
        use std::os::windows::process::CommandExt;

        const DETACHED_PROCESS: u32 = 0x00000008;
        const CREATE_NEW_PROCESS_GROUP: u32 = 0x00000200;

        cmd.creation_flags(DETACHED_PROCESS | CREATE_NEW_PROCESS_GROUP);
    }

    cmd.spawn()
}
