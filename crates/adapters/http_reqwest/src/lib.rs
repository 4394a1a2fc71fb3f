//! # housepanel-adapter-http-reqwest
//!
//! HTTP transport adapter for the panel API, implemented with `reqwest`.
//!
//! Every call is a POST with a single form field, `json`, holding the
//! url-encoded wire triple. The response body is returned verbatim: the
//! server replies with plain text (JSON on success, a traceback on
//! failure) and parsing it is not this layer's concern. There is no retry
//! and no request cancellation; a failed call is reported once through
//! [`PanelError::Transport`] and the user decides whether to repeat the
//! action.

use std::future::Future;

use housepanel_app::ports::Transport;
use housepanel_domain::call::RemoteCall;
use housepanel_domain::error::PanelError;

/// Non-2xx response status, kept as the transport error source.
#[derive(Debug, thiserror::Error)]
#[error("HTTP status {status}")]
pub struct StatusError {
    /// The status code the server replied with.
    pub status: reqwest::StatusCode,
}

/// [`Transport`] implementation backed by a shared [`reqwest::Client`].
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with a default client.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transport reusing an existing client (shared pools,
    /// custom timeouts).
    #[must_use]
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    async fn post(&self, endpoint: String, call: RemoteCall) -> Result<String, PanelError> {
        tracing::debug!(endpoint = %endpoint, function = call.function(), "sending api call");

        let response = self
            .client
            .post(&endpoint)
            .header(
                reqwest::header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .body(call.to_form_body())
            .send()
            .await
            .map_err(|err| PanelError::Transport {
                endpoint: endpoint.clone(),
                source: Box::new(err),
                body: None,
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| PanelError::Transport {
                endpoint: endpoint.clone(),
                source: Box::new(err),
                body: None,
            })?;

        if status.is_success() {
            Ok(body)
        } else {
            Err(PanelError::Transport {
                endpoint,
                source: Box::new(StatusError { status }),
                body: Some(body),
            })
        }
    }
}

impl Transport for ReqwestTransport {
    fn send(
        &self,
        endpoint: String,
        call: RemoteCall,
    ) -> impl Future<Output = Result<String, PanelError>> + Send {
        self.post(endpoint, call)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_status_in_error_source() {
        let err = StatusError {
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        };
        assert_eq!(err.to_string(), "HTTP status 500 Internal Server Error");
    }
}
