//! Small text and URL helpers shared by config and the HTTP client.

/// Longest server error body kept in an error message
const MAX_ERROR_TEXT: usize = 180;

/// Trimmed text, or `None` when absent or blank.
pub fn normalize_text_option(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

pub fn is_http_url(value: &str) -> bool {
    ["http://", "https://"]
        .iter()
        .any(|scheme| value.starts_with(scheme))
}

/// Trim a response body and cap it at [`MAX_ERROR_TEXT`] characters.
pub fn compact_text(value: &str) -> String {
    value.trim().chars().take(MAX_ERROR_TEXT).collect()
}

/// Validate an API base URL and strip trailing slashes.
pub fn normalize_base_url(value: &str) -> Result<String, String> {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err("API base URL must not be empty".to_string());
    }
    if !is_http_url(trimmed) {
        return Err(format!(
            "API base URL must start with http:// or https://, got '{trimmed}'"
        ));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_override_counts_as_absent() {
        assert_eq!(normalize_text_option(None), None);
        assert_eq!(normalize_text_option(Some(" \t ".to_string())), None);
        assert_eq!(
            normalize_text_option(Some("  https://resorts.example/api ".to_string())),
            Some("https://resorts.example/api".to_string())
        );
    }

    #[test]
    fn only_http_schemes_are_api_urls() {
        assert!(is_http_url("http://127.0.0.1:5000/api"));
        assert!(is_http_url("https://resorts.example/api"));
        assert!(!is_http_url("ws://resorts.example/api"));
        assert!(!is_http_url("resorts.example/api"));
    }

    #[test]
    fn error_bodies_are_trimmed_and_capped() {
        let page = format!("<html>{}</html>", "Service Unavailable ".repeat(40));
        assert_eq!(compact_text(&page).chars().count(), MAX_ERROR_TEXT);
        assert_eq!(
            compact_text("\n  {\"error\":\"Resort not found\"}\n"),
            r#"{"error":"Resort not found"}"#
        );
    }

    #[test]
    fn normalize_base_url_strips_trailing_slashes() {
        assert_eq!(
            normalize_base_url("http://localhost:5000/api//").unwrap(),
            "http://localhost:5000/api"
        );
        assert!(normalize_base_url("localhost:5000").is_err());
        assert!(normalize_base_url("  ").is_err());
    }
}
