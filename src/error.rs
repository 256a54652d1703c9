/// All errors that can abort a notification run.
#[derive(thiserror::Error, Debug)]
pub enum HeraldError {
    /// A required configuration value is absent.
    #[error("missing required configuration: {name} must be set")]
    MissingConfig { name: &'static str },

    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read or decode the response body.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// Failed to sign the service-account assertion.
    #[error("failed to sign service-account assertion: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
}

pub type Result<T> = std::result::Result<T, HeraldError>;
