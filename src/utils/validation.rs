use crate::utils::error::{Result, SongError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if allowed.contains(&value) {
        return Ok(());
    }

    Err(SongError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: format!("Unsupported value. Valid values: {}", allowed.join(", ")),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SongError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(SongError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("output.format", "json", &["text", "json", "csv"]).is_ok());
        assert!(validate_one_of("output.format", "xml", &["text", "json", "csv"]).is_err());
        assert!(validate_one_of("output.format", "", &["text"]).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("song.language", "en").is_ok());
        assert!(validate_non_empty_string("song.language", "   ").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("song.default_count", 99i64, 0, i64::from(u32::MAX)).is_ok());
        assert!(validate_range("song.default_count", -1i64, 0, i64::from(u32::MAX)).is_err());

        let err = validate_range("song.default_count", 5_000_000_000i64, 0, i64::from(u32::MAX))
            .unwrap_err();
        match err {
            SongError::InvalidConfigValueError { field, value, .. } => {
                assert_eq!(field, "song.default_count");
                assert_eq!(value, "5000000000");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
