use crate::utils::error::{LookupError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(LookupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => {
            match url.scheme() {
                "http" | "https" => {}
                scheme => {
                    return Err(LookupError::InvalidConfigValueError {
                        field: field_name.to_string(),
                        value: url_str.to_string(),
                        reason: format!("Unsupported URL scheme: {}", scheme),
                    })
                }
            }

            // 查詢字串會被接成路徑的最後一段，所以端點不能帶 query 或 fragment
            if url.query().is_some() || url.fragment().is_some() {
                return Err(LookupError::InvalidConfigValueError {
                    field: field_name.to_string(),
                    value: url_str.to_string(),
                    reason: "URL must not contain a query string or fragment".to_string(),
                });
            }

            if url.cannot_be_a_base() {
                return Err(LookupError::InvalidConfigValueError {
                    field: field_name.to_string(),
                    value: url_str.to_string(),
                    reason: "URL cannot be used as a base for lookups".to_string(),
                });
            }

            Ok(())
        }
        Err(e) => Err(LookupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(LookupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(LookupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(LookupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("api_endpoint", "https://pokeapi.co/api/v2/pokemon").is_ok());
        assert!(validate_url("api_endpoint", "http://localhost:8080/pokemon/").is_ok());
        assert!(validate_url("api_endpoint", "").is_err());
        assert!(validate_url("api_endpoint", "invalid-url").is_err());
        assert!(validate_url("api_endpoint", "ftp://example.com").is_err());
        assert!(validate_url("api_endpoint", "https://pokeapi.co/api?x=1").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("ui.snapshot_path", "./page.html").is_ok());
        assert!(validate_path("ui.snapshot_path", "").is_err());
        assert!(validate_path("ui.snapshot_path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("source.user_agent", "poke-lookup/0.1").is_ok());
        assert!(validate_non_empty_string("source.user_agent", "   ").is_err());
    }
}
