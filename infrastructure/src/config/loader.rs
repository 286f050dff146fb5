//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Directory name under the platform config dir
const APP_DIR: &str = "cat-facts";

/// Project-level config file names, checked in order
const PROJECT_FILES: [&str; 2] = ["cat-facts.toml", ".cat-facts.toml"];

/// Prefix for environment overrides
const ENV_PREFIX: &str = "CAT_FACTS_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `CAT_FACTS_*` environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./cat-facts.toml` or `./.cat-facts.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/cat-facts/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(Box::new(figment::Error::from(format!(
                    "config file not found: {}",
                    path.display()
                ))));
            }
        }

        Self::figment(config_path).extract().map_err(Box::new)
    }

    /// Build the layered figment without extracting it
    pub fn figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        // Add global config (XDG or fallback)
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        // Add project-level config files (first match wins)
        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        // Add explicit config path (highest priority for files)
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/cat-facts/config.toml if set,
    /// otherwise falls back to ~/.config/cat-facts/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Describe every configuration layer, highest priority first
    ///
    /// Each row is marked `[FOUND]` when the layer is present.
    pub fn config_sources(config_path: Option<&Path>) -> Vec<String> {
        let mark = |found: bool| if found { "[FOUND]" } else { "[     ]" };
        let mut rows = vec![
            "  [     ] Flags:    --url, --timeout, --max-length, --output-file, --output-key"
                .to_string(),
            format!("  [     ] Env:      {}<SECTION>__<KEY>", ENV_PREFIX),
        ];

        match config_path {
            Some(path) => rows.push(format!(
                "  {} Explicit: {}",
                mark(path.exists()),
                path.display()
            )),
            None => rows.push("  [     ] Explicit: --config <path>".to_string()),
        }

        match Self::project_config_path() {
            Some(path) => rows.push(format!("  [FOUND] Project:  {}", path.display())),
            None => {
                rows.push("  [     ] Project:  ./cat-facts.toml or ./.cat-facts.toml".to_string())
            }
        }

        if let Some(path) = Self::global_config_path() {
            rows.push(format!(
                "  {} Global:   {}",
                mark(path.exists()),
                path.display()
            ));
        }

        rows.push("  [     ] Default:  built-in defaults".to_string());
        rows
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&Path>) {
        println!("Configuration sources (in priority order):");
        for row in Self::config_sources(config_path) {
            println!("{}", row);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.api.url, "https://catfact.ninja/fact");
        assert_eq!(config.output.env_var, "GITHUB_OUTPUT");
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("cat-facts"));
    }

    #[test]
    fn test_project_file_is_merged() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "cat-facts.toml",
                r#"
[api]
timeout_seconds = 7

[output]
key = "cat"
"#,
            )?;

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.api.timeout_seconds, 7);
            assert_eq!(config.api.field, "fact");
            assert_eq!(config.output.key, "cat");
            Ok(())
        });
    }

    #[test]
    fn test_hidden_project_file_is_used() {
        Jail::expect_with(|jail| {
            jail.create_file(".cat-facts.toml", "[api]\nmax_length = 99\n")?;

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.api.max_length, Some(99));
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_overrides_project_file() {
        Jail::expect_with(|jail| {
            jail.create_file("cat-facts.toml", "[api]\ntimeout_seconds = 7\n")?;
            jail.create_file("ci.toml", "[api]\ntimeout_seconds = 3\n")?;

            let config = ConfigLoader::load(Some(Path::new("ci.toml"))).map_err(|e| *e)?;
            assert_eq!(config.api.timeout_seconds, 3);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_files() {
        Jail::expect_with(|jail| {
            jail.create_file("cat-facts.toml", "[api]\ntimeout_seconds = 7\n")?;
            jail.set_env("CAT_FACTS_API__TIMEOUT_SECONDS", "2");
            jail.set_env("CAT_FACTS_OUTPUT__ENV_VAR", "CI_OUTPUT");

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.api.timeout_seconds, 2);
            assert_eq!(config.output.env_var, "CI_OUTPUT");
            Ok(())
        });
    }

    #[test]
    fn test_env_scalars_are_read_as_strings() {
        Jail::expect_with(|jail| {
            jail.set_env("CAT_FACTS_OUTPUT__KEY", "42");
            jail.set_env("CAT_FACTS_API__FIELD", "true");
            jail.set_env("CAT_FACTS_OUTPUT__ENV_VAR", "7");

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.output.key, "42");
            assert_eq!(config.api.field, "true");
            assert_eq!(config.output.env_var, "7");
            assert!(config.validate().is_ok());
            Ok(())
        });
    }

    #[test]
    fn test_config_sources_lists_explicit_file() {
        Jail::expect_with(|jail| {
            jail.create_file("ci.toml", "")?;

            let rows = ConfigLoader::config_sources(Some(Path::new("ci.toml")));
            assert!(rows.iter().any(|r| r == "  [FOUND] Explicit: ci.toml"));
            assert!(rows[0].contains("Flags:"));
            assert!(rows.last().unwrap().contains("Default:"));

            let rows = ConfigLoader::config_sources(Some(Path::new("absent.toml")));
            assert!(rows.iter().any(|r| r == "  [     ] Explicit: absent.toml"));

            let rows = ConfigLoader::config_sources(None);
            assert!(rows.iter().any(|r| r.contains("Explicit: --config <path>")));
            Ok(())
        });
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        Jail::expect_with(|_jail| {
            let result = ConfigLoader::load(Some(Path::new("nope.toml")));
            assert!(result.is_err());
            Ok(())
        });
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        Jail::expect_with(|jail| {
            jail.create_file("cat-facts.toml", "[api]\ntimeout_seconds = \"soon\"\n")?;

            assert!(ConfigLoader::load(None).is_err());
            Ok(())
        });
    }
}
