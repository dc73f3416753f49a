use crate::utils::error::{AlbumError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(AlbumError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(AlbumError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(AlbumError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// 來源網址只做子字串比對，與上游行為一致
pub fn validate_album_url<'a>(url: Option<&'a str>, marker: &str) -> Result<&'a str> {
    match url {
        Some(url) if !url.is_empty() && url.contains(marker) => Ok(url),
        other => Err(AlbumError::InvalidRequest {
            url: other.map(str::to_string),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AlbumError::InvalidConfigValueError {
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
        return Err(AlbumError::InvalidConfigValueError {
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

    const MARKER: &str = "mp.weixin.qq.com/mp/appmsgalbum";

    #[test]
    fn test_validate_url() {
        assert!(validate_url("base_origin", "https://mp.weixin.qq.com").is_ok());
        assert!(validate_url("base_origin", "http://example.com").is_ok());
        assert!(validate_url("base_origin", "").is_err());
        assert!(validate_url("base_origin", "invalid-url").is_err());
        assert!(validate_url("base_origin", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_album_url() {
        let url = "https://mp.weixin.qq.com/mp/appmsgalbum?__biz=MzU5NjU1NjY1Mw==&album_id=1";
        assert_eq!(validate_album_url(Some(url), MARKER).unwrap(), url);

        assert!(matches!(
            validate_album_url(None, MARKER),
            Err(AlbumError::InvalidRequest { url: None })
        ));
        assert!(validate_album_url(Some(""), MARKER).is_err());
        assert!(validate_album_url(Some("https://mp.weixin.qq.com/s/abc"), MARKER).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("cache_max_age", 600u64, 0, 86_400).is_ok());
        assert!(validate_range("cache_max_age", 100_000u64, 0, 86_400).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("user_agent", "Mozilla/5.0").is_ok());
        assert!(validate_non_empty_string("user_agent", "   ").is_err());
    }
}
