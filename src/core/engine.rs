use crate::core::generator::SongGenerator;
use crate::domain::model::BottleCount;
use crate::domain::ports::VerseSink;
use crate::utils::error::Result;

pub struct SongEngine<S: VerseSink> {
    sink: S,
    generator: SongGenerator,
    show_title: bool,
}

impl<S: VerseSink> SongEngine<S> {
    pub fn new(sink: S, generator: SongGenerator) -> Self {
        Self {
            sink,
            generator,
            show_title: true,
        }
    }

    pub fn with_title(mut self, show_title: bool) -> Self {
        self.show_title = show_title;
        self
    }

    /// 唱完整首歌，回傳輸出的段落數
    pub fn run(&mut self, start: BottleCount) -> Result<usize> {
        tracing::info!(
            "🍺 Starting song with {} bottles ({})",
            start,
            self.generator.language().name()
        );

        let title = if self.show_title {
            self.generator.title(start)
        } else {
            None
        };
        self.sink.begin(title.as_deref())?;

        let mut emitted = 0;
        for verse in self.generator.song(start) {
            tracing::debug!("Verse {:?}", verse.kind);
            self.sink.emit(&verse)?;
            emitted += 1;
        }

        self.sink.finish()?;
        tracing::info!("✅ Song finished after {} verses", emitted);

        Ok(emitted)
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
