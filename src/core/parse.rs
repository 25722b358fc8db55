use crate::domain::model::BottleCount;
use crate::utils::error::{Result, SongError};

/// 解析使用者傳入的瓶子數量
///
/// 沒有傳入時使用 99。任何 `-` 加上數字的負數都是合法整數，不論位數，一律視為 0 瓶
/// （之後只會得到「沒有歌」那一段）；非整數或超出 `u32` 範圍的正數回傳
/// [`SongError::InvalidCountFormat`]，並保留原始字串。
pub fn parse_bottle_count(raw_input: Option<&str>) -> Result<BottleCount> {
    let Some(raw) = raw_input else {
        return Ok(BottleCount::DEFAULT);
    };

    let invalid = || SongError::InvalidCountFormat {
        raw: raw.to_string(),
    };

    if let Some(digits) = raw.strip_prefix('-') {
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            tracing::debug!("Negative bottle count {} treated as zero", raw);
            return Ok(BottleCount(0));
        }
        return Err(invalid());
    }

    raw.parse::<u32>().map(BottleCount).map_err(|_| invalid())
}
