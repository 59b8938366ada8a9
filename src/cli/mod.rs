//! CLI command implementations

mod auth;
mod create;
mod progress;
mod style;

pub use auth::{run_auth_setup, run_auth_test};
pub use create::{CreateOptions, FormFields, run_create};
pub use progress::CliProgress;
