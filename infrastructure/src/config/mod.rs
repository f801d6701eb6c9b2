//! Configuration file loading for hivesight
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `HIVESIGHT_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./hivesight.toml` or `./.hivesight.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/hivesight/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileAnthropicConfig, FileAnthropicModelsConfig, FileConfig, FileOutputConfig,
    FileProvidersConfig, FileSamplingConfig,
};
pub use loader::{ConfigLoader, ENV_PREFIX, PROJECT_CONFIG_FILES};
