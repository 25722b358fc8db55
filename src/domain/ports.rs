use crate::core::lyrics::Language;
use crate::domain::model::{BottleCount, Verse};
use crate::utils::error::Result;

/// 歌詞輸出的目的地
pub trait VerseSink {
    /// 第一段歌詞之前呼叫一次，`title` 為 None 表示不印標題
    fn begin(&mut self, title: Option<&str>) -> Result<()>;
    fn emit(&mut self, verse: &Verse) -> Result<()>;
    fn finish(&mut self) -> Result<()>;
}

impl<S: VerseSink + ?Sized> VerseSink for &mut S {
    fn begin(&mut self, title: Option<&str>) -> Result<()> {
        (**self).begin(title)
    }

    fn emit(&mut self, verse: &Verse) -> Result<()> {
        (**self).emit(verse)
    }

    fn finish(&mut self) -> Result<()> {
        (**self).finish()
    }
}

impl<S: VerseSink + ?Sized> VerseSink for Box<S> {
    fn begin(&mut self, title: Option<&str>) -> Result<()> {
        (**self).begin(title)
    }

    fn emit(&mut self, verse: &Verse) -> Result<()> {
        (**self).emit(verse)
    }

    fn finish(&mut self) -> Result<()> {
        (**self).finish()
    }
}

pub trait ConfigProvider {
    fn default_count(&self) -> BottleCount;
    fn language(&self) -> Language;
    fn output_format(&self) -> OutputFormat;
    fn show_title(&self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 3] = ["text", "json", "csv"];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            "csv" => Some(OutputFormat::Csv),
            _ => None,
        }
    }
}
