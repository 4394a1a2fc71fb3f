//! Transport port — issues a remote call and returns the raw response.

use std::future::Future;

use housepanel_domain::call::RemoteCall;
use housepanel_domain::error::PanelError;

/// Sends a [`RemoteCall`] to a server endpoint.
///
/// The response body is opaque to this layer and passed through verbatim;
/// parsing it is the caller's (or the server's) concern. Implementations
/// must not retry: a failed call is reported once and the user decides
/// whether to repeat the action.
pub trait Transport {
    /// POST `call` to `endpoint` and return the raw response body.
    fn send(
        &self,
        endpoint: String,
        call: RemoteCall,
    ) -> impl Future<Output = Result<String, PanelError>> + Send;
}

impl<T: Transport + Send + Sync> Transport for std::sync::Arc<T> {
    fn send(
        &self,
        endpoint: String,
        call: RemoteCall,
    ) -> impl Future<Output = Result<String, PanelError>> + Send {
        (**self).send(endpoint, call)
    }
}
