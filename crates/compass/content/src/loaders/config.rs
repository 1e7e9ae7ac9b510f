//! Detection settings loader.

use std::path::Path;

use compass_core::CompassConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`CompassConfig`] from TOML files.
///
/// Missing keys take their defaults; present keys must be within their
/// documented ranges or loading fails.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate a config file.
    pub fn load(path: &Path) -> LoadResult<CompassConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", path.display(), e))
    }

    /// Parse and validate TOML text.
    pub fn parse(content: &str) -> LoadResult<CompassConfig> {
        let config: CompassConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn bundled_config_is_the_default() {
        let config = ConfigLoader::parse(crate::DEFAULT_CONFIG_TOML).unwrap();
        assert_eq!(config, CompassConfig::default());
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = ConfigLoader::parse("master_range = 128\n").unwrap();
        assert_eq!(config.master_range, 128);
        assert_eq!(config.basic_range, CompassConfig::DEFAULT_BASIC_RANGE);
        assert_eq!(config.update_interval, CompassConfig::DEFAULT_UPDATE_INTERVAL);
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let err = ConfigLoader::parse("basic_range = 4\n").unwrap_err();
        assert!(err.to_string().contains("basic_range"), "{err}");
    }

    #[test]
    fn load_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "update_interval = 40").unwrap();
        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.update_interval, 40);
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ConfigLoader::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }
}
