use crate::utils::error::{LocationError, Result};
use crate::utils::validation::{self, Validate};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtlasConfig {
    pub atlas: AtlasSection,
    pub roll: Option<RollSection>,
    pub logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtlasSection {
    pub base_dir: Option<String>,
    #[serde(default)]
    pub locations: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RollSection {
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSection {
    pub verbose: Option<bool>,
}

impl AtlasConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|source| LocationError::NotFound {
            path: path.as_ref().display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| LocationError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${LOCATIONS_DIR})，找不到的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| LocationError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn locations(&self) -> &[String] {
        &self.atlas.locations
    }

    pub fn base_dir(&self) -> Option<&str> {
        self.atlas.base_dir.as_deref()
    }

    pub fn seed(&self) -> Option<u64> {
        self.roll.as_ref().and_then(|r| r.seed)
    }

    pub fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.verbose)
            .unwrap_or(false)
    }
}

impl Validate for AtlasConfig {
    fn validate(&self) -> Result<()> {
        if let Some(base_dir) = self.base_dir() {
            validation::validate_path("atlas.base_dir", base_dir)?;
        }
        validation::validate_paths("atlas.locations", self.locations())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[atlas]
base_dir = "./locations"
locations = ["start.txt", "castle.txt"]

[roll]
seed = 42

[logging]
verbose = true
"#;

        let config = AtlasConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.base_dir(), Some("./locations"));
        assert_eq!(config.locations(), &["start.txt", "castle.txt"]);
        assert_eq!(config.seed(), Some(42));
        assert!(config.verbose());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_optional_sections_default() {
        let config = AtlasConfig::from_toml_str("[atlas]\n").unwrap();
        assert!(config.locations().is_empty());
        assert_eq!(config.seed(), None);
        assert!(!config.verbose());
    }

    #[test]
    fn test_env_var_substitution() {
        // Tests run in parallel: both variable names are read by this test only.
        std::env::set_var("DICE_LOCATIONS_TEST_DIR", "/srv/maps");

        let toml_content = r#"
[atlas]
base_dir = "${DICE_LOCATIONS_TEST_DIR}"
locations = ["${DICE_LOCATIONS_UNSET_VAR}.txt"]
"#;

        let config = AtlasConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.base_dir(), Some("/srv/maps"));
        assert_eq!(config.locations(), &["${DICE_LOCATIONS_UNSET_VAR}.txt"]);

        std::env::remove_var("DICE_LOCATIONS_TEST_DIR");
    }

    #[test]
    fn test_invalid_toml() {
        let err = AtlasConfig::from_toml_str("[atlas\nlocations = 3").unwrap_err();
        assert!(matches!(err, LocationError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_empty_location_path_fails_validation() {
        let config = AtlasConfig::from_toml_str("[atlas]\nlocations = [\"\"]\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[atlas]\nlocations = [\"start.txt\"]\n")
            .unwrap();

        let config = AtlasConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.locations(), &["start.txt"]);
    }

    #[test]
    fn test_missing_config_file() {
        let err = AtlasConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, LocationError::NotFound { .. }));
    }
}
