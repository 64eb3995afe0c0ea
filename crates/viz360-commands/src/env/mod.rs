//! Environment management commands: add, remove, list, manifest.
//!
//! Human-readable output goes to stderr; `--json` output goes to stdout.

mod add;
mod common;
mod list;
mod manifest;
mod remove;

pub use add::cmd_add;
pub use common::{is_affirmative, StdinConfirm};
pub use list::cmd_list;
pub use manifest::cmd_manifest;
pub use remove::cmd_remove;
