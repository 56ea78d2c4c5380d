use crate::core::encoder::DEFAULT_QUIET_ZONE;
use crate::core::layout::{MAX_SPACE_SCALE, NEUTRAL_SPACE_SCALE};
use crate::core::RenderSettings;
use crate::utils::error::{BarcodeError, Result};
use crate::utils::validation::{validate_positive_number, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LabelConfig {
    #[serde(default)]
    pub encoder: EncoderConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    pub quiet_zone: u32,
    pub strict_checksum: bool,
    pub pad_itf: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            quiet_zone: DEFAULT_QUIET_ZONE,
            strict_checksum: false,
            pad_itf: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub space_scale: f64,
    pub module_width: u32,
    pub bar_height: u32,
    pub show_text: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            space_scale: NEUTRAL_SPACE_SCALE,
            module_width: 2,
            bar_height: 60,
            show_text: true,
        }
    }
}

impl LabelConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BarcodeError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| BarcodeError::ConfigParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${LABEL_SPACE_SCALE})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| BarcodeError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_range("encoder.quiet_zone", self.encoder.quiet_zone, 0, 100)?;
        validate_range(
            "render.space_scale",
            self.render.space_scale,
            NEUTRAL_SPACE_SCALE,
            MAX_SPACE_SCALE,
        )?;
        validate_positive_number("render.module_width", self.render.module_width, 1)?;
        validate_positive_number("render.bar_height", self.render.bar_height, 1)?;
        Ok(())
    }
}

impl RenderSettings for LabelConfig {
    fn quiet_zone(&self) -> u32 {
        self.encoder.quiet_zone
    }

    fn space_scale(&self) -> f64 {
        self.render.space_scale
    }

    fn module_width(&self) -> u32 {
        self.render.module_width
    }

    fn bar_height(&self) -> u32 {
        self.render.bar_height
    }

    fn show_text(&self) -> bool {
        self.render.show_text
    }
}

impl Validate for LabelConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
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
[encoder]
quiet_zone = 11
strict_checksum = true

[render]
space_scale = 1.25
module_width = 3
bar_height = 80
show_text = false
"#;

        let config = LabelConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.quiet_zone(), 11);
        assert!(config.encoder.strict_checksum);
        assert!(!config.encoder.pad_itf);
        assert_eq!(config.space_scale(), 1.25);
        assert_eq!(config.module_width(), 3);
        assert!(!config.show_text());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_tables_use_defaults() {
        let config = LabelConfig::from_toml_str("").unwrap();
        assert_eq!(config, LabelConfig::default());
        assert_eq!(config.quiet_zone(), DEFAULT_QUIET_ZONE);
        assert_eq!(config.space_scale(), NEUTRAL_SPACE_SCALE);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_LABEL_BAR_HEIGHT", "120");

        let toml_content = r#"
[render]
bar_height = ${TEST_LABEL_BAR_HEIGHT}
"#;

        let config = LabelConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.bar_height(), 120);

        std::env::remove_var("TEST_LABEL_BAR_HEIGHT");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[render]
space_scale = 0.5
"#;

        let config = LabelConfig::from_toml_str(toml_content).unwrap();
        assert!(matches!(
            config.validate(),
            Err(BarcodeError::InvalidConfigValueError { ref field, .. }) if field == "render.space_scale"
        ));
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            LabelConfig::from_toml_str("[render\nspace_scale = 1"),
            Err(BarcodeError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[encoder]
pad_itf = true
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = LabelConfig::from_file(temp_file.path()).unwrap();
        assert!(config.encoder.pad_itf);
    }
}
