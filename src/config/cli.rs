use crate::config::toml_config::SongConfig;
use crate::config::Settings;
use crate::core::lyrics::Language;
use crate::domain::ports::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "bottles")]
#[command(about = "Sing the bottles of beer song, counting down from COUNT")]
pub struct CliConfig {
    /// Number of bottles to start from (defaults to 99)
    #[arg(allow_negative_numbers = true)]
    pub count: Option<String>,

    /// Lyrics language
    #[arg(long, value_enum)]
    pub lang: Option<Language>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Do not print the song title
    #[arg(long)]
    pub no_title: bool,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 命令列參數覆蓋設定檔
    pub fn settings(&self, file: Option<&SongConfig>) -> Settings {
        let mut settings = match file {
            Some(file) => Settings::from_provider(file),
            None => Settings::default(),
        };

        if let Some(language) = self.lang {
            settings.language = language;
        }
        if let Some(format) = self.format {
            settings.output_format = format;
        }
        if self.no_title {
            settings.show_title = false;
        }

        settings
    }
}
