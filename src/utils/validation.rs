use crate::utils::error::{PlaycesError, Result};
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(PlaycesError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(PlaycesError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(PlaycesError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(PlaycesError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(PlaycesError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(PlaycesError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_file_extension(field_name: &str, file: &str, allowed_extensions: &[&str]) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed_extensions.iter().copied().collect();

    match std::path::Path::new(file)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(extension) if allowed_set.contains(extension) => Ok(()),
        Some(extension) => Err(PlaycesError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: format!(
                "Unsupported file extension: {}. Allowed extensions: {}",
                extension,
                allowed_extensions.join(", ")
            ),
        }),
        None => Err(PlaycesError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| PlaycesError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PlaycesError::InvalidConfigValueError {
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
        return Err(PlaycesError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is a valid regex")
    })
}

pub fn validate_email(field_name: &str, value: &str) -> Result<()> {
    if !email_pattern().is_match(value.trim()) {
        return Err(PlaycesError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Not a valid email address".to_string(),
        });
    }
    Ok(())
}

/// Accepts the usual separators (`+`, spaces, dashes, parentheses) as long as
/// at least seven digits remain.
pub fn validate_phone(field_name: &str, value: &str) -> Result<()> {
    let digits = value.chars().filter(|c| c.is_ascii_digit()).count();
    let only_phone_chars = value
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | ' ' | '-' | '(' | ')'));

    if digits < 7 || !only_phone_chars {
        return Err(PlaycesError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Phone number needs at least 7 digits".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("profile_image_url", "https://example.com/a.png").is_ok());
        assert!(validate_url("profile_image_url", "http://example.com").is_ok());
        assert!(validate_url("profile_image_url", "").is_err());
        assert!(validate_url("profile_image_url", "invalid-url").is_err());
        assert!(validate_url("profile_image_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("headline.tick_millis", 2000, 100).is_ok());
        assert!(validate_positive_number("headline.tick_millis", 10, 100).is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension("catalog.path", "venues.json", &["json"]).is_ok());
        assert!(validate_file_extension("catalog.path", "venues.csv", &["json"]).is_err());
        assert!(validate_file_extension("catalog.path", "venues", &["json"]).is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("email", "alex.johnson@example.com").is_ok());
        assert!(validate_email("email", "alex.johnson@example").is_err());
        assert!(validate_email("email", "no at sign").is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("phone", "+91 9876543210").is_ok());
        assert!(validate_phone("phone", "+1 (555) 123-4567").is_ok());
        assert!(validate_phone("phone", "12345").is_err());
        assert!(validate_phone("phone", "call me maybe").is_err());
    }
}
