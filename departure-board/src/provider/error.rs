//! Provider client error types.

/// Errors from the transit data provider.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid API key or unauthorized
    #[error("unauthorized (invalid API key)")]
    Unauthorized,

    /// API returned an error status code
    #[error("provider unavailable ({status}): {message}")]
    Unavailable { status: u16, message: String },

    /// Response did not have the expected shape
    #[error("malformed response: {message}")]
    Malformed {
        message: String,
        body: Option<String>,
    },
}

impl ProviderError {
    /// Whether the provider could not be reached or refused to answer,
    /// as opposed to answering with data we could not understand.
    pub fn is_unavailable(&self) -> bool {
        !matches!(self, ProviderError::Malformed { .. })
    }

    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        ProviderError::Malformed {
            message: message.into(),
            body: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ProviderError::Unavailable {
            status: 503,
            message: "Service Unavailable".into(),
        };
        assert_eq!(
            err.to_string(),
            "provider unavailable (503): Service Unavailable"
        );

        let err = ProviderError::Malformed {
            message: "missing field `data`".into(),
            body: Some("{}".into()),
        };
        assert_eq!(err.to_string(), "malformed response: missing field `data`");

        assert_eq!(
            ProviderError::Unauthorized.to_string(),
            "unauthorized (invalid API key)"
        );
    }

    #[test]
    fn classification() {
        assert!(ProviderError::Unauthorized.is_unavailable());
        assert!(
            ProviderError::Unavailable {
                status: 500,
                message: String::new()
            }
            .is_unavailable()
        );
        assert!(!ProviderError::malformed("bad").is_unavailable());
    }
}
