//! Panel controller — binds UI actions to the transport.
//!
//! Owns the optional API endpoint, the held-button state, and the save
//! tracker. All state lives behind one shared inner struct so that event
//! handlers and spawned repeat loops observe the same controller, not
//! ambient globals.

use std::sync::Arc;

use tokio::sync::watch;

use housepanel_domain::button::{ButtonRef, HeldButton};
use housepanel_domain::call::RemoteCall;
use housepanel_domain::error::PanelError;

use crate::callback::run_possible_callback;
use crate::ports::{AlertSink, Transport, UiSink};
use crate::save::SaveTracker;

/// Controller for one panel instance.
///
/// Cheap to clone; clones share the held-button state and save tracker.
pub struct PanelController<T, U, A> {
    inner: Arc<Inner<T, U, A>>,
}

struct Inner<T, U, A> {
    endpoint: Option<String>,
    transport: T,
    ui: U,
    alerts: A,
    held: watch::Sender<HeldButton>,
    saves: Arc<SaveTracker>,
}

impl<T, U, A> Clone for PanelController<T, U, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T, U, A> PanelController<T, U, A>
where
    T: Transport + Send + Sync + 'static,
    U: UiSink + Send + Sync + 'static,
    A: AlertSink + Send + Sync + 'static,
{
    /// Create a controller.
    ///
    /// `endpoint` is optional by design: a missing endpoint is a
    /// configuration mistake that is reported through the alert sink on
    /// the first attempted call, without issuing any request.
    pub fn new(endpoint: Option<String>, transport: T, ui: U, alerts: A) -> Self {
        let (held, _) = watch::channel(HeldButton::released());
        Self {
            inner: Arc::new(Inner {
                endpoint,
                transport,
                ui,
                alerts,
                held,
                saves: Arc::new(SaveTracker::new()),
            }),
        }
    }

    /// The save tracker shared with this controller.
    #[must_use]
    pub fn saves(&self) -> Arc<SaveTracker> {
        Arc::clone(&self.inner.saves)
    }

    /// Snapshot of the currently held button.
    #[must_use]
    pub fn held_button(&self) -> HeldButton {
        self.inner.held.borrow().clone()
    }

    /// Issue `call`, surfacing any failure through the alert sink.
    ///
    /// Returns the raw response body on success, `None` on failure or
    /// when no endpoint is configured. Does not commit a UI change.
    async fn dispatch(&self, call: RemoteCall) -> Option<String> {
        let Some(endpoint) = &self.inner.endpoint else {
            self.inner
                .alerts
                .alert(&PanelError::MissingEndpoint.alert_message());
            return None;
        };

        match self
            .inner
            .transport
            .send(endpoint.clone(), call)
            .await
        {
            Ok(body) => Some(body),
            Err(err) => {
                tracing::warn!(error = %err, "api call failed");
                self.inner.alerts.alert(&err.alert_message());
                None
            }
        }
    }

    /// Issue `call` and commit one UI change on success.
    pub async fn call_api(&self, call: RemoteCall) -> Option<String> {
        let body = self.dispatch(call).await?;
        self.inner.ui.changed();
        Some(body)
    }

    /// Issue `call`, run the optional callback chain, then commit one UI
    /// change.
    ///
    /// `callback` receives the raw response body; its result is forwarded
    /// to `next_callback`. Neither runs when the call fails.
    pub async fn call_api_with<C, N, R>(
        &self,
        call: RemoteCall,
        callback: Option<C>,
        next_callback: Option<N>,
    ) where
        C: FnOnce(&str) -> R,
        N: FnOnce(Option<R>),
    {
        if let Some(body) = self.dispatch(call).await {
            let result = run_possible_callback(callback, body.as_str());
            run_possible_callback(next_callback, result);
            self.inner.ui.changed();
        }
    }

    /// Issue a save call: the save counter covers the request round trip,
    /// then the optional callback runs, then one UI change is committed.
    ///
    /// The counter is decremented when the call completes, success or not,
    /// so a failed save cannot leave the saving flag stuck. The UI change
    /// is committed on both outcomes because the counter changed.
    pub async fn call_api_that_saves<C>(&self, call: RemoteCall, callback: Option<C>)
    where
        C: FnOnce(&str),
    {
        let in_flight = self.inner.saves.begin();
        let body = self.dispatch(call).await;
        drop(in_flight);

        if let Some(body) = body {
            run_possible_callback(callback, body.as_str());
        }
        self.inner.ui.changed();
    }

    /// Send a single remote button press, with no repeat.
    #[tracing::instrument(skip(self))]
    pub async fn remote_button_press(&self, device: &str, button: &str) {
        let _ = self.call_api(RemoteCall::press_remote(device, button)).await;
    }

    /// Record `(device, button)` as held and start the repeat loop.
    ///
    /// The press signal is sent immediately; each next send is gated on
    /// the previous response *and* on the held pair still matching, so
    /// the repeat is paced by server round trips rather than a timer. A
    /// transport failure ends the loop. The in-flight request is never
    /// aborted; release takes effect when its response arrives.
    #[tracing::instrument(skip(self))]
    pub fn remote_button_down(&self, device: &str, button: &str) {
        let pressed = ButtonRef::new(device, button);
        self.inner
            .held
            .send_replace(HeldButton::pressed(pressed.clone()));

        let controller = self.clone();
        tokio::spawn(async move {
            loop {
                let call = RemoteCall::press_remote(&pressed.device, &pressed.button);
                if controller.call_api(call).await.is_none() {
                    break;
                }
                if !controller.inner.held.borrow().is_held(&pressed) {
                    tracing::debug!(
                        device = %pressed.device,
                        button = %pressed.button,
                        "button no longer held, stopping repeat"
                    );
                    break;
                }
            }
        });
    }

    /// Release the held button.
    ///
    /// The repeat loop observes the mismatch once its pending response
    /// arrives and stops; no request is cancelled.
    #[tracing::instrument(skip(self))]
    pub fn remote_button_up(&self) {
        self.inner.held.send_replace(HeldButton::released());
    }

    /// Activate a light scene.
    #[tracing::instrument(skip(self))]
    pub async fn set_light_scene(&self, scene_name: &str) {
        let _ = self.call_api(RemoteCall::set_light_scene(scene_name)).await;
    }

    /// Turn a switch on.
    #[tracing::instrument(skip(self))]
    pub async fn turn_on_switch(&self, switch_name: &str) {
        let _ = self.call_api(RemoteCall::turn_on_switch(switch_name)).await;
    }

    /// Turn a switch off.
    #[tracing::instrument(skip(self))]
    pub async fn turn_off_switch(&self, switch_name: &str) {
        let _ = self.call_api(RemoteCall::turn_off_switch(switch_name)).await;
    }
}
