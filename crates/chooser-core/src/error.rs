use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Could not determine the path to Firefox profiles: {var} is not set")]
    ConfigPathUnresolved { var: &'static str },

    #[error("Could not open {}: {source}", path.display())]
    ConfigUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No profiles found in {}", path.display())]
    NoProfilesFound { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, Error>;
