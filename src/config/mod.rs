#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::lyrics::Language;
use crate::core::parse::parse_bottle_count;
use crate::domain::model::BottleCount;
use crate::domain::ports::{ConfigProvider, OutputFormat};
use crate::utils::error::Result;

/// 合併後的最終設定：命令列 > 設定檔 > 內建預設值
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub default_count: BottleCount,
    pub language: Language,
    pub output_format: OutputFormat,
    pub show_title: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_count: BottleCount::DEFAULT,
            language: Language::default(),
            output_format: OutputFormat::default(),
            show_title: true,
        }
    }
}

impl Settings {
    pub fn from_provider<C: ConfigProvider + ?Sized>(provider: &C) -> Self {
        Self {
            default_count: provider.default_count(),
            language: provider.language(),
            output_format: provider.output_format(),
            show_title: provider.show_title(),
        }
    }

    /// 沒有傳入數量時使用設定的預設值，否則交給 `parse_bottle_count`
    pub fn bottle_count(&self, raw_input: Option<&str>) -> Result<BottleCount> {
        match raw_input {
            None => Ok(self.default_count),
            Some(_) => parse_bottle_count(raw_input),
        }
    }
}

impl ConfigProvider for Settings {
    fn default_count(&self) -> BottleCount {
        self.default_count
    }

    fn language(&self) -> Language {
        self.language
    }

    fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    fn show_title(&self) -> bool {
        self.show_title
    }
}
