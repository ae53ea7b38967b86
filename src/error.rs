//! Error type shared by every lookup.

use hyper::ext::ReasonPhrase;
use reqwest::StatusCode;
use thiserror::Error;
use url::Url;

/// Errors returned by [`Client`](crate::Client) and [`lookup`](crate::lookup).
#[derive(Debug, Error)]
pub enum Error {
    /// The subject was empty. Raised before any request is built.
    #[error("Subject (email or domain) is required")]
    MissingSubject,

    /// The request could not be sent or its body could not be read.
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("API error: {status} {reason}")]
    Status { status: u16, reason: String },

    /// The response body could not be decoded.
    ///
    /// Also returned for bodies that are valid JSON but not an object, such
    /// as `null` or `[true]`, since a lookup result is always a field map.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// A caller-supplied header name was rejected by the HTTP layer.
    #[error(transparent)]
    InvalidHeaderName(#[from] reqwest::header::InvalidHeaderName),

    /// A caller-supplied header value was rejected by the HTTP layer.
    #[error(transparent)]
    InvalidHeaderValue(#[from] reqwest::header::InvalidHeaderValue),

    /// The configured base URL could not be parsed.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// The configured base URL cannot carry path segments (e.g. `mailto:`).
    #[error("base URL cannot be a base: {0}")]
    CannotBeBase(Url),
}

impl Error {
    /// Whether this error came from a non-2xx API response.
    pub fn is_status(&self) -> bool {
        matches!(self, Error::Status { .. })
    }

    /// The HTTP status code, if the API answered with a non-2xx status.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Build a status error from the response status line.
    ///
    /// hyper only records `reason` when the server's phrase differs from the
    /// canonical one, so the canonical phrase is used when it is absent.
    pub(crate) fn from_status(status: StatusCode, reason: Option<&ReasonPhrase>) -> Self {
        let reason = match reason {
            Some(phrase) => String::from_utf8_lossy(phrase.as_bytes()).into_owned(),
            None => status.canonical_reason().unwrap_or_default().to_string(),
        };
        Error::Status {
            status: status.as_u16(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_subject_message() {
        assert_eq!(
            Error::MissingSubject.to_string(),
            "Subject (email or domain) is required"
        );
    }

    #[test]
    fn status_message_uses_canonical_reason() {
        let err = Error::from_status(StatusCode::BAD_REQUEST, None);
        assert_eq!(err.to_string(), "API error: 400 Bad Request");
        assert!(err.is_status());
        assert_eq!(err.status(), Some(400));

        let err = Error::from_status(StatusCode::INTERNAL_SERVER_ERROR, None);
        assert_eq!(err.to_string(), "API error: 500 Internal Server Error");
    }

    #[test]
    fn status_message_prefers_server_reason() {
        let phrase = ReasonPhrase::from_static(b"Invalid Subject");
        let err = Error::from_status(StatusCode::BAD_REQUEST, Some(&phrase));
        assert_eq!(err.to_string(), "API error: 400 Invalid Subject");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn unknown_status_has_empty_reason() {
        let status = StatusCode::from_u16(599).unwrap();
        assert_eq!(Error::from_status(status, None).to_string(), "API error: 599 ");
    }

    #[test]
    fn json_error_is_passed_through() {
        let inner = serde_json::from_str::<serde_json::Value>("{nope").unwrap_err();
        let expected = inner.to_string();
        let err = Error::from(inner);
        assert_eq!(err.to_string(), expected);
        assert_eq!(err.status(), None);
    }
}
