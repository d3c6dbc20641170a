use anyhow::{Context, Result};
use chooser_browser::{BrowserFinder, BrowserLauncher};
use chooser_cli::{EguiShell, Outcome};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

const BROWSER_ENV: &str = "CHOOSER_BROWSER";
const PROFILES_INI_ENV: &str = "CHOOSER_PROFILES_INI";

#[derive(Parser)]
#[command(name = "chooser")]
#[command(author, version)]
#[command(
    about = "Pick which Firefox profile a link should open in",
    long_about = "Chooser reads the Firefox profile list, shows one button per profile \
                  and opens the given URL in the profile you click."
)]
struct Cli {
    /// URL to open in the chosen profile
    #[arg(value_name = "URL", required_unless_present = "list")]
    url: Option<String>,

    /// Browser executable to launch (defaults to `firefox` on PATH) [env: CHOOSER_BROWSER]
    #[arg(long, value_name = "PATH")]
    browser: Option<PathBuf>,

    /// Read profiles from this file instead of the platform default [env: CHOOSER_PROFILES_INI]
    #[arg(long, value_name = "PATH")]
    profiles_ini: Option<PathBuf>,

    /// Print the profile names and exit without opening a window
    #[arg(long)]
    list: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version go to stdout and succeed; every usage error exits 1.
            e.print().ok();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_logging(cli.verbose);

    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: Cli) -> Result<()> {
    let profiles_ini = match cli.profiles_ini.or_else(|| path_from_env(PROFILES_INI_ENV)) {
        Some(path) => path,
        None => chooser_core::locate_profiles_ini()?,
    };
    let profiles = chooser_core::read_profiles(&profiles_ini)?;

    if cli.list {
        for profile in &profiles {
            println!("{}", profile);
        }
        return Ok(());
    }

    let url = cli.url.context("No URL given")?;
    let browser = cli.browser.or_else(|| path_from_env(BROWSER_ENV));
    let launcher = BrowserLauncher::new(BrowserFinder::new(browser));
    let mut shell = EguiShell::new();

    match chooser_cli::run(&mut shell, &launcher, &profiles, &url)? {
        Outcome::Closed => tracing::info!("Closed without choosing a profile"),
        Outcome::Launched(request) => tracing::info!("Opened {} in '{}'", request.url, request.profile),
        Outcome::LaunchFailed(request) => {
            tracing::warn!("Could not open {} in '{}'", request.url, request.profile)
        }
    }

    Ok(())
}

/// Path override from the environment; an empty value counts as unset
fn path_from_env(var: &str) -> Option<PathBuf> {
    std::env::var_os(var)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env("CHOOSER_LOG").unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("chooser=debug,chooser_cli=debug,chooser_core=debug,chooser_browser=debug")
        } else {
            EnvFilter::new("chooser=warn,chooser_cli=warn,chooser_core=warn,chooser_browser=warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
