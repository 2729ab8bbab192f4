pub mod bootstrap;
pub mod commands;
pub mod host;

pub use bootstrap::{create_runtime, run_app, AppRuntime};
