pub mod engine;
pub mod generator;
pub mod lyrics;
pub mod parse;

pub use crate::domain::model::{BottleCount, Verse, VerseKind, VerseSequence};
pub use crate::domain::ports::{ConfigProvider, OutputFormat, VerseSink};
pub use crate::utils::error::Result;
