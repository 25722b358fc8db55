use std::fmt;

/// 開始倒數的瓶子數量
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BottleCount(pub u32);

impl BottleCount {
    pub const DEFAULT: BottleCount = BottleCount(99);

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for BottleCount {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u32> for BottleCount {
    fn from(count: u32) -> Self {
        Self(count)
    }
}

impl fmt::Display for BottleCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerseKind {
    /// 倒數中的一段，帶著當下牆上的瓶數
    Countdown(u32),
    Closing,
    NoSong,
}

impl VerseKind {
    pub fn label(self) -> &'static str {
        match self {
            VerseKind::Countdown(_) => "countdown",
            VerseKind::Closing => "closing",
            VerseKind::NoSong => "no_song",
        }
    }

    pub fn count(self) -> Option<u32> {
        match self {
            VerseKind::Countdown(count) => Some(count),
            VerseKind::Closing | VerseKind::NoSong => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verse {
    pub kind: VerseKind,
    pub lines: Vec<String>,
}

impl Verse {
    pub fn new(kind: VerseKind, lines: Vec<String>) -> Self {
        Self { kind, lines }
    }

    pub fn first_line(&self) -> &str {
        self.lines.first().map(String::as_str).unwrap_or_default()
    }

    pub fn last_line(&self) -> &str {
        self.lines.last().map(String::as_str).unwrap_or_default()
    }
}

impl fmt::Display for Verse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines.join("\n"))
    }
}

impl PartialEq<str> for Verse {
    fn eq(&self, other: &str) -> bool {
        self.lines.len() == 1 && self.lines[0] == other
    }
}

impl PartialEq<&str> for Verse {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

/// 一次演唱的完整輸出
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VerseSequence {
    pub verses: Vec<Verse>,
}

impl VerseSequence {
    pub fn len(&self) -> usize {
        self.verses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Verse> {
        self.verses.iter()
    }

    pub fn countdown_verses(&self) -> impl Iterator<Item = &Verse> {
        self.verses
            .iter()
            .filter(|verse| matches!(verse.kind, VerseKind::Countdown(_)))
    }
}

impl FromIterator<Verse> for VerseSequence {
    fn from_iter<I: IntoIterator<Item = Verse>>(iter: I) -> Self {
        Self {
            verses: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for VerseSequence {
    type Item = Verse;
    type IntoIter = std::vec::IntoIter<Verse>;

    fn into_iter(self) -> Self::IntoIter {
        self.verses.into_iter()
    }
}

impl<'a> IntoIterator for &'a VerseSequence {
    type Item = &'a Verse;
    type IntoIter = std::slice::Iter<'a, Verse>;

    fn into_iter(self) -> Self::IntoIter {
        self.verses.iter()
    }
}

impl fmt::Display for VerseSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, verse) in self.verses.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
                writeln!(f)?;
            }
            write!(f, "{}", verse)?;
        }
        Ok(())
    }
}
