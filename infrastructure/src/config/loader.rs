//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const PROJECT_FILES: [&str; 2] = ["quadrant.toml", ".quadrant.toml"];
const ENV_PREFIX: &str = "QUADRANT_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `QUADRANT_*` environment variables (`__` separates sections)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./quadrant.toml` or `./.quadrant.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/quadrant-triage/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Self::file_figment(config_path, Self::project_config_path());
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));
        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    fn file_figment(config_path: Option<&Path>, project: Option<PathBuf>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = project {
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment
    }

    /// Get the global config file path
    ///
    /// Returns `$XDG_CONFIG_HOME/quadrant-triage/config.toml` if set,
    /// otherwise the platform config directory equivalent.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("quadrant-triage").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");

        println!("  [ENV  ] {}*", ENV_PREFIX);

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./quadrant.toml or ./.quadrant.toml");
        }

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
    use quadrant_domain::OutputFormat;
    use std::io::Write;

    fn write_toml(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert!(config.classifier.rules_path.is_none());
        assert!(config.output.color);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("quadrant-triage"));
    }

    #[test]
    fn test_explicit_file_is_merged_over_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_toml(
            &dir,
            "explicit.toml",
            r#"
[classifier]
simulated_delay_ms = 1200

[output]
format = "json"
"#,
        );

        let config: FileConfig = ConfigLoader::file_figment(Some(&path), None)
            .extract()
            .unwrap();
        assert_eq!(config.classifier.simulated_delay_ms, 1200);
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        // Untouched keys keep their defaults
        assert!(config.output.color);
    }

    #[test]
    fn test_explicit_file_overrides_project_file() {
        let dir = tempfile::tempdir().unwrap();
        let project = write_toml(
            &dir,
            "quadrant.toml",
            r#"
[classifier]
simulated_delay_ms = 100

[output]
color = false
"#,
        );
        let explicit = write_toml(
            &dir,
            "explicit.toml",
            r#"
[classifier]
simulated_delay_ms = 900
"#,
        );

        let config: FileConfig = ConfigLoader::file_figment(Some(&explicit), Some(project))
            .extract()
            .unwrap();
        assert_eq!(config.classifier.simulated_delay_ms, 900);
        assert!(!config.output.color);
    }

    #[test]
    fn test_env_overrides_explicit_file() {
        figment::Jail::expect_with(|jail| {
            let home = jail.directory().display().to_string();
            jail.set_env("XDG_CONFIG_HOME", home);
            jail.create_file(
                "explicit.toml",
                r#"
[classifier]
simulated_delay_ms = 100

[output]
format = "plain"
"#,
            )?;
            jail.set_env("QUADRANT_CLASSIFIER__SIMULATED_DELAY_MS", "250");
            jail.set_env("QUADRANT_OUTPUT__COLOR", "false");

            let config = ConfigLoader::load(Some(Path::new("explicit.toml"))).map_err(|e| *e)?;
            assert_eq!(config.classifier.simulated_delay_ms, 250);
            assert!(!config.output.color);
            // Keys without an env value still come from the file
            assert_eq!(config.output.format, Some(OutputFormat::Plain));
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_project_file() {
        figment::Jail::expect_with(|jail| {
            let home = jail.directory().display().to_string();
            jail.set_env("XDG_CONFIG_HOME", home);
            jail.create_file("quadrant.toml", "[output]\nformat = \"plain\"\n")?;
            jail.set_env("QUADRANT_OUTPUT__FORMAT", "json");

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.output.format, Some(OutputFormat::Json));
            Ok(())
        });
    }

    #[test]
    fn test_invalid_value_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_toml(
            &dir,
            "bad.toml",
            r#"
[output]
format = "fancy"
"#,
        );

        let result: Result<FileConfig, _> = ConfigLoader::file_figment(Some(&path), None).extract();
        assert!(result.is_err());
    }
}
