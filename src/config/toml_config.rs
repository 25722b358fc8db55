use crate::core::lyrics::Language;
use crate::domain::model::BottleCount;
use crate::domain::ports::{ConfigProvider, OutputFormat};
use crate::utils::error::{Result, SongError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SongConfig {
    #[serde(default)]
    pub song: SongSection,
    #[serde(default)]
    pub output: OutputSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SongSection {
    pub default_count: Option<i64>,
    pub language: Option<String>,
    pub title: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSection {
    pub format: Option<String>,
}

impl SongConfig {
    /// 從 TOML 檔案載入配置，讀不到檔案也算設定錯誤
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| SongError::ConfigValidationError {
                field: "config_file".to_string(),
                message: format!("Cannot read '{}': {}", path.display(), e),
            })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SongError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${BOTTLES})，找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SongError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(count) = self.song.default_count {
            validation::validate_range("song.default_count", count, 0, i64::from(u32::MAX))?;
        }

        if let Some(language) = &self.song.language {
            validation::validate_non_empty_string("song.language", language)?;
            validation::validate_one_of("song.language", language, &Language::NAMES)?;
        }

        if let Some(format) = &self.output.format {
            validation::validate_one_of("output.format", format, &OutputFormat::NAMES)?;
        }

        Ok(())
    }
}

impl ConfigProvider for SongConfig {
    fn default_count(&self) -> BottleCount {
        self.song
            .default_count
            .and_then(|count| u32::try_from(count).ok())
            .map(BottleCount)
            .unwrap_or_default()
    }

    fn language(&self) -> Language {
        self.song
            .language
            .as_deref()
            .and_then(Language::from_name)
            .unwrap_or_default()
    }

    fn output_format(&self) -> OutputFormat {
        self.output
            .format
            .as_deref()
            .and_then(OutputFormat::from_name)
            .unwrap_or_default()
    }

    fn show_title(&self) -> bool {
        self.song.title.unwrap_or(true)
    }
}

impl Validate for SongConfig {
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
[song]
default_count = 12
language = "zh"
title = false

[output]
format = "json"
"#;

        let config = SongConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.default_count(), BottleCount(12));
        assert_eq!(config.language(), Language::Chinese);
        assert_eq!(config.output_format(), OutputFormat::Json);
        assert!(!config.show_title());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = SongConfig::from_toml_str("").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.default_count(), BottleCount(99));
        assert_eq!(config.language(), Language::English);
        assert_eq!(config.output_format(), OutputFormat::Text);
        assert!(config.show_title());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("BOTTLE_SONG_TEST_COUNT", "7");

        let toml_content = r#"
[song]
default_count = ${BOTTLE_SONG_TEST_COUNT}
"#;

        let config = SongConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.default_count(), BottleCount(7));

        std::env::remove_var("BOTTLE_SONG_TEST_COUNT");
    }

    #[test]
    fn test_unknown_env_var_is_left_in_place() {
        let toml_content = r#"
[song]
language = "${BOTTLE_SONG_SURELY_UNSET_VAR}"
"#;

        let config = SongConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.song.language.as_deref(),
            Some("${BOTTLE_SONG_SURELY_UNSET_VAR}")
        );
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation() {
        let negative = SongConfig::from_toml_str("[song]\ndefault_count = -1\n").unwrap();
        assert!(negative.validate().is_err());

        let bad_format = SongConfig::from_toml_str("[output]\nformat = \"xml\"\n").unwrap();
        match bad_format.validate().unwrap_err() {
            SongError::InvalidConfigValueError { field, value, .. } => {
                assert_eq!(field, "output.format");
                assert_eq!(value, "xml");
            }
            other => panic!("unexpected error: {:?}", other),
        }

        let bad_language = SongConfig::from_toml_str("[song]\nlanguage = \"fr\"\n").unwrap();
        assert!(bad_language.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = SongConfig::from_toml_str("[song\n").unwrap_err();
        assert!(matches!(err, SongError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[song]\ndefault_count = 3\n")
            .unwrap();

        let config = SongConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.default_count(), BottleCount(3));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = SongConfig::from_file("/definitely/not/here/bottles.toml").unwrap_err();
        match &err {
            SongError::ConfigValidationError { field, message } => {
                assert_eq!(field, "config_file");
                assert!(message.contains("/definitely/not/here/bottles.toml"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(err.category(), crate::utils::error::ErrorCategory::Configuration);
    }
}
