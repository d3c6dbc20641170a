pub mod error;
pub mod locator;
pub mod profiles;

pub use error::{Error, Result};
pub use locator::{Platform, locate_profiles_ini, profiles_ini_path};
pub use profiles::{Profile, parse_profiles, read_profiles};
