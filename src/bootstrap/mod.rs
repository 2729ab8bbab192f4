pub mod config;
pub mod run;
pub mod runtime;
pub mod tracing;
pub mod wiring;

pub use config::{config_path, load_config, resolve_config, ConfigSource, LoadedConfig};
pub use run::run_app;
pub use runtime::{create_runtime, AppRuntime};
pub use wiring::{wire_dependencies, WiringError, WiringResult};
