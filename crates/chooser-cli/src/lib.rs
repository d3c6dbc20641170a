pub mod flow;
pub mod shell;

pub use flow::{Outcome, run};
pub use shell::{EguiShell, ProfileShell};
