use crate::core::lyrics::Language;
use crate::domain::model::{BottleCount, Verse, VerseKind, VerseSequence};
use std::iter::FusedIterator;

/// 依語言產生歌詞的純函式集合
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SongGenerator {
    language: Language,
}

impl SongGenerator {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn describe_count(&self, count: u32) -> String {
        self.language.describe_count(count)
    }

    /// 呼叫端需保證 `count >= 1`
    pub fn render_verse(&self, count: u32) -> Verse {
        debug_assert!(count >= 1, "countdown verse needs at least one bottle");
        Verse::new(
            VerseKind::Countdown(count),
            self.language.countdown_lines(count),
        )
    }

    pub fn render_closing_verse(&self, original_count: u32) -> Verse {
        Verse::new(
            VerseKind::Closing,
            self.language.closing_lines(original_count),
        )
    }

    pub fn render_no_song(&self) -> Verse {
        Verse::new(
            VerseKind::NoSong,
            vec![self.language.no_song_line().to_string()],
        )
    }

    /// 只有真的會唱的時候才有標題
    pub fn title(&self, start: BottleCount) -> Option<String> {
        (start.get() > 0).then(|| self.language.title(start.get()))
    }

    pub fn song(&self, start: BottleCount) -> Song {
        Song {
            generator: *self,
            start: start.get(),
            state: SongState::Idle,
        }
    }

    pub fn generate_song(&self, start: BottleCount) -> VerseSequence {
        self.song(start).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SongState {
    Idle,
    Counting(u32),
    Closed,
}

/// 逐段產生歌詞的倒數狀態機：`Idle → Counting(n) → … → Counting(0) → Closed`
#[derive(Debug, Clone)]
pub struct Song {
    generator: SongGenerator,
    start: u32,
    state: SongState,
}

impl Song {
    pub fn start(&self) -> BottleCount {
        BottleCount(self.start)
    }

    /// 剩下的段落數；在 32 位元平台上可能放不進 `usize`
    fn remaining(&self) -> Option<usize> {
        let counting = match self.state {
            SongState::Idle if self.start == 0 => return Some(1),
            SongState::Idle => self.start,
            SongState::Counting(n) => n,
            SongState::Closed => return Some(0),
        };
        usize::try_from(counting).ok()?.checked_add(1)
    }
}

impl Iterator for Song {
    type Item = Verse;

    fn next(&mut self) -> Option<Verse> {
        match self.state {
            SongState::Idle if self.start == 0 => {
                self.state = SongState::Closed;
                Some(self.generator.render_no_song())
            }
            SongState::Idle => {
                self.state = SongState::Counting(self.start);
                self.next()
            }
            SongState::Counting(0) => {
                self.state = SongState::Closed;
                Some(self.generator.render_closing_verse(self.start))
            }
            SongState::Counting(n) => {
                self.state = SongState::Counting(n - 1);
                Some(self.generator.render_verse(n))
            }
            SongState::Closed => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining() {
            Some(remaining) => (remaining, Some(remaining)),
            None => (usize::MAX, None),
        }
    }
}

impl FusedIterator for Song {}

pub fn describe_count(count: u32) -> String {
    Language::English.describe_count(count)
}

pub fn render_verse(count: u32) -> Verse {
    SongGenerator::default().render_verse(count)
}

pub fn render_closing_verse(original_count: u32) -> Verse {
    SongGenerator::default().render_closing_verse(original_count)
}

pub fn generate_song(start: u32) -> VerseSequence {
    SongGenerator::default().generate_song(BottleCount(start))
}
