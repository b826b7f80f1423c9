use thiserror::Error;

/// Failures of the external services the platform delegates to.
///
/// None of these are retried; they surface as a 500 to the caller and leave
/// any earlier irreversible upstream call in place.
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// The payment gateway could not be reached or returned an unreadable body.
    #[error("Payment gateway request failed: {0}")]
    GatewayRequest(#[source] reqwest::Error),

    /// The payment gateway rejected the request.
    #[error("Payment gateway responded with status {status}: {body}")]
    GatewayStatus {
        /// HTTP status returned by the gateway
        status: u16,
        /// Response body for diagnostics
        body: String,
    },

    /// The media host could not be reached or returned an unreadable body.
    #[error("Media host request failed: {0}")]
    MediaRequest(#[source] reqwest::Error),

    /// The media host rejected the request.
    #[error("Media host responded with status {status}: {body}")]
    MediaStatus {
        /// HTTP status returned by the media host
        status: u16,
        /// Response body for diagnostics
        body: String,
    },

    /// The outgoing email could not be built or delivered.
    #[error("Failed to send email: {0}")]
    Mail(String),
}
