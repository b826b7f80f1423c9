use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to hash a password with Argon2.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),

    /// Failure to sign an authentication token.
    #[error("Failed to encode authentication token: {0}")]
    TokenEncoding(#[source] jsonwebtoken::errors::Error),

    /// HMAC rejected the configured gateway secret as a key.
    #[error("Failed to initialise payment signature key: {0}")]
    SignatureKey(String),

    /// Failure to build a redirect URL from the configured frontend URL.
    #[error("Failed to build redirect URL from '{base}': {source}")]
    RedirectUrl {
        /// The base URL the redirect was built from
        base: String,
        /// The underlying parse error
        #[source]
        source: url::ParseError,
    },

    /// The shared HTTP client could not be built.
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}
