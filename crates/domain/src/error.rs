//! Common error types used across the workspace.
//!
//! There are exactly two failure classes in this client: a missing endpoint
//! (a configuration mistake, caught before any request is attempted) and a
//! failed transport call. Neither is recovered locally; both are surfaced
//! to the user through a single global alert surface so that server errors
//! are discovered sooner instead of being silenced and missed.

/// Errors produced while issuing panel API calls.
#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    /// No API endpoint was configured for the controller.
    #[error("api endpoint is not configured")]
    MissingEndpoint,

    /// A network call failed (connect error, timeout, or non-2xx status).
    #[error("call to {endpoint} failed")]
    Transport {
        /// Endpoint the call was issued against.
        endpoint: String,
        /// Underlying transport failure.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
        /// Raw response body, when one was received.
        body: Option<String>,
    },
}

impl PanelError {
    /// The user-facing alert text for this error.
    ///
    /// Transport failures name the endpoint, the error, and the raw
    /// response text, so server-side tracebacks reach the user verbatim.
    #[must_use]
    pub fn alert_message(&self) -> String {
        match self {
            Self::MissingEndpoint => {
                "Error: api endpoint is not configured. \
                 (Perhaps the endpoint setting is missing?)"
                    .to_string()
            }
            Self::Transport {
                endpoint,
                source,
                body,
            } => {
                let body = body.as_deref().unwrap_or_default();
                format!("Error: {endpoint} returned {source}\n{body}")
            }
        }
    }
}
