//! Input validation for the two user-supplied strings: the API token and the
//! URL to summarize. Validation is pure; displaying the error is the caller's
//! concern.

use url::Url;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please provide the information to get started")]
    MissingInput,
    #[error("Please enter a valid URL. It can be a YT video URL or website URL")]
    InvalidUrl,
}

/// Checks both inputs and returns the parsed URL on success.
///
/// Either string being empty or all-whitespace is `MissingInput`. A URL that
/// does not parse, or parses without an http(s) scheme and a host, is
/// `InvalidUrl`.
pub fn validate_inputs(api_token: &str, url: &str) -> Result<Url, ValidationError> {
    if api_token.trim().is_empty() || url.trim().is_empty() {
        return Err(ValidationError::MissingInput);
    }

    let parsed = Url::parse(url).map_err(|_| ValidationError::InvalidUrl)?;
    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        return Err(ValidationError::InvalidUrl);
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_token_is_missing_input() {
        assert_eq!(
            validate_inputs("", "https://example.com"),
            Err(ValidationError::MissingInput)
        );
    }

    #[test]
    fn whitespace_token_is_missing_input() {
        assert_eq!(
            validate_inputs("   ", "https://example.com"),
            Err(ValidationError::MissingInput)
        );
    }

    #[test]
    fn empty_url_is_missing_input() {
        assert_eq!(
            validate_inputs("hf_token", ""),
            Err(ValidationError::MissingInput)
        );
    }

    #[test]
    fn whitespace_url_is_missing_input() {
        assert_eq!(
            validate_inputs("hf_token", " \t "),
            Err(ValidationError::MissingInput)
        );
    }

    #[test]
    fn both_empty_is_missing_input() {
        assert_eq!(validate_inputs("", ""), Err(ValidationError::MissingInput));
    }

    #[test]
    fn unparseable_url_is_invalid() {
        assert_eq!(
            validate_inputs("hf_token", "not a url"),
            Err(ValidationError::InvalidUrl)
        );
    }

    #[test]
    fn non_http_scheme_is_invalid() {
        assert_eq!(
            validate_inputs("hf_token", "mailto:someone@example.com"),
            Err(ValidationError::InvalidUrl)
        );
        assert_eq!(
            validate_inputs("hf_token", "ftp://example.com/file"),
            Err(ValidationError::InvalidUrl)
        );
    }

    #[test]
    fn hostless_url_is_invalid() {
        assert_eq!(
            validate_inputs("hf_token", "https://"),
            Err(ValidationError::InvalidUrl)
        );
    }

    #[test]
    fn valid_https_url_passes() {
        let url = validate_inputs("hf_token", "https://example.com/article").unwrap();
        assert_eq!(url.host_str(), Some("example.com"));
    }

    #[test]
    fn valid_youtube_url_passes() {
        let url =
            validate_inputs("hf_token", "https://www.youtube.com/watch?v=dQw4w9WgXcQ").unwrap();
        assert_eq!(url.host_str(), Some("www.youtube.com"));
    }
}
