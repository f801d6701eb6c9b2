//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Project-level config file names, checked in order
pub const PROJECT_CONFIG_FILES: [&str; 2] = ["hivesight.toml", ".hivesight.toml"];

/// Prefix for environment overrides; `__` separates sections
/// (`HIVESIGHT_SAMPLING__SAMPLES=20`)
pub const ENV_PREFIX: &str = "HIVESIGHT_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `HIVESIGHT_*` environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./hivesight.toml` or `./.hivesight.toml`
    /// 4. Global: `~/.config/hivesight/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(Box::new(figment::Error::from(format!(
                    "config file not found: {}",
                    path.display()
                ))));
            }
        }

        Self::figment(
            Self::global_config_path().as_deref(),
            Self::project_config_path().as_deref(),
            config_path.map(PathBuf::as_path),
        )
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()
        .map_err(Box::new)
    }

    /// File layers only, lowest priority first
    fn figment(global: Option<&Path>, project: Option<&Path>, explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        for path in [global, project, explicit].into_iter().flatten() {
            if path.exists() {
                debug!("Merging config file {}", path.display());
                figment = figment.merge(Toml::file(path));
            }
        }

        figment
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/hivesight/config.toml if set,
    /// otherwise falls back to ~/.config/hivesight/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("hivesight").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        Self::project_config_in(Path::new("."))
    }

    fn project_config_in(dir: &Path) -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");
        println!("  [     ] Environment: {}*", ENV_PREFIX);

        // Project config
        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./hivesight.toml or ./.hivesight.toml");
        }

        // Global config
        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.sampling.samples, 10);
        assert!(!config.sampling.explain);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("hivesight"));
    }

    #[test]
    fn test_project_overrides_global() {
        let dir = TempDir::new().unwrap();
        let global = write(
            &dir,
            "global.toml",
            "[sampling]\nsamples = 30\nmodel = \"fast\"\n",
        );
        let project = write(&dir, "hivesight.toml", "[sampling]\nsamples = 40\n");

        let config: FileConfig = ConfigLoader::figment(Some(&global), Some(&project), None)
            .extract()
            .unwrap();

        assert_eq!(config.sampling.samples, 40);
        // Keys not set by the project file survive from the global file
        assert_eq!(config.sampling.model, "fast");
    }

    #[test]
    fn test_explicit_overrides_project() {
        let dir = TempDir::new().unwrap();
        let project = write(&dir, "hivesight.toml", "[output]\nformat = \"full\"\n");
        let explicit = write(
            &dir,
            "custom.toml",
            "[output]\nformat = \"json\"\ncolor = false\n",
        );

        let config: FileConfig = ConfigLoader::figment(None, Some(&project), Some(&explicit))
            .extract()
            .unwrap();

        assert_eq!(
            config.output.format,
            Some(hivesight_domain::OutputFormat::Json)
        );
        assert!(!config.output.color);
    }

    #[test]
    fn test_missing_files_are_skipped() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");

        let config: FileConfig = ConfigLoader::figment(Some(&missing), None, None)
            .extract()
            .unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = TempDir::new().unwrap();
        let broken = write(&dir, "broken.toml", "[sampling\nsamples = ");

        let result: Result<FileConfig, _> =
            ConfigLoader::figment(None, None, Some(&broken)).extract();
        assert!(result.is_err());
    }

    #[test]
    fn test_explicit_path_must_exist() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(ConfigLoader::load(Some(&missing)).is_err());
    }

    #[test]
    fn test_project_config_lookup_order() {
        let dir = TempDir::new().unwrap();
        assert!(ConfigLoader::project_config_in(dir.path()).is_none());

        write(&dir, ".hivesight.toml", "");
        assert_eq!(
            ConfigLoader::project_config_in(dir.path()),
            Some(dir.path().join(".hivesight.toml"))
        );

        write(&dir, "hivesight.toml", "");
        assert_eq!(
            ConfigLoader::project_config_in(dir.path()),
            Some(dir.path().join("hivesight.toml"))
        );
    }
}
