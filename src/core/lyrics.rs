//! 兩套固定歌詞：英文為基準版本，中文版沿用同樣的段落結構。

/// 歌詞語言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Language {
    #[default]
    #[cfg_attr(feature = "cli", value(name = "en"))]
    English,
    #[cfg_attr(feature = "cli", value(name = "zh"))]
    Chinese,
}

impl Language {
    pub const NAMES: [&'static str; 2] = ["en", "zh"];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "en" => Some(Language::English),
            "zh" => Some(Language::Chinese),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Chinese => "zh",
        }
    }

    pub fn describe_count(self, count: u32) -> String {
        match self {
            Language::English => {
                let phrase = match count {
                    0 => "no more bottles".to_string(),
                    1 => "1 bottle".to_string(),
                    n => format!("{} bottles", n),
                };
                phrase + " of beer"
            }
            Language::Chinese => {
                let phrase = match count {
                    0 => "沒有瓶子".to_string(),
                    1 => "只有一個瓶子".to_string(),
                    n => format!("有{}個瓶子", n),
                };
                phrase + "裝啤酒"
            }
        }
    }

    /// `count >= 1` 時的一段倒數歌詞
    pub fn countdown_lines(self, count: u32) -> Vec<String> {
        let current = self.describe_count(count);
        let next = self.describe_count(count.saturating_sub(1));

        match self {
            Language::English => vec![
                format!("{} on the wall, {}.", current, current),
                "Take one down, pass it around,".to_string(),
                format!("{} on the wall.", next),
            ],
            Language::Chinese => vec![
                format!("{}在牆上，{}。", current, current),
                "拿下來一個，並把它拿走".to_string(),
                format!("{}在牆上", next),
            ],
        }
    }

    pub fn closing_lines(self, original_count: u32) -> Vec<String> {
        let restocked = self.describe_count(original_count);

        match self {
            Language::English => vec![
                "No more bottles of beer on the wall, no more bottles of beer.".to_string(),
                format!("Go to the store and buy some more, {} on the wall.", restocked),
            ],
            Language::Chinese => vec![
                "牆上沒有瓶子，沒有啤酒瓶了。".to_string(),
                format!("去商店買些，{}放在牆上", restocked),
            ],
        }
    }

    pub fn no_song_line(self) -> &'static str {
        match self {
            Language::English => "No bottles - no song",
            Language::Chinese => "沒有瓶子，也就沒有歌",
        }
    }

    pub fn title(self, count: u32) -> String {
        match self {
            Language::English => format!("The \"{}\" song", self.describe_count(count)),
            Language::Chinese => format!("{}之歌", self.describe_count(count)),
        }
    }

    pub fn invalid_count_message(self, raw: &str) -> String {
        match self {
            Language::English => format!(
                "You have passed '{}' as a number of bottles, but it is not a valid integer number",
                raw
            ),
            Language::Chinese => format!("你傳入'{}'作為瓶子數量，但它不是有效整數", raw),
        }
    }
}
