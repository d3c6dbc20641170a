//! Presentation of the profile list.

mod egui_shell;

pub use egui_shell::EguiShell;

use anyhow::Result;
use chooser_core::Profile;

/// Shows the profiles and reports which one, if any, was picked
pub trait ProfileShell {
    /// Returns the index of the clicked profile, or `None` if the window was closed
    fn choose(&mut self, profiles: &[Profile]) -> Result<Option<usize>>;
}
