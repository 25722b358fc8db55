pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::adapters::sink::{sink_for, CsvSink, JsonSink, TextSink};
pub use crate::config::{toml_config::SongConfig, Settings};
pub use crate::core::engine::SongEngine;
pub use crate::core::generator::{
    describe_count, generate_song, render_closing_verse, render_verse, Song, SongGenerator,
};
pub use crate::core::lyrics::Language;
pub use crate::core::parse::parse_bottle_count;
pub use crate::domain::model::{BottleCount, Verse, VerseKind, VerseSequence};
pub use crate::domain::ports::{ConfigProvider, OutputFormat, VerseSink};
pub use crate::utils::error::{Result, SongError};
