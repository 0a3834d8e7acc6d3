//! CLI command handlers, one per file.

mod check;
mod completions;
mod crc;
mod create;
mod verify;

pub use check::run_check;
pub use completions::{run_completions, run_man};
pub use crc::run_crc;
pub use create::run_create;
pub use verify::run_verify;
