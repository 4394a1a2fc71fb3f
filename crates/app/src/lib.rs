//! # housepanel-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `Transport` — POST a remote call, return the raw response body
//!   - `AlertSink` — the single user-visible error surface
//!   - `UiSink` — the change-notification commit after each logical action
//! - Provide the **controller** that binds panel actions (button press,
//!   press-and-hold repeat, scene/switch toggles) to the transport
//! - Provide **save tracking**, the **autosave debouncer**, and the
//!   **unload guard** built on top of it
//! - Provide **in-process infrastructure** (UI change bus) that doesn't need IO
//!
//! ## Dependency rule
//! Depends on `housepanel-domain` only (plus `tokio::sync`/`time` for
//! channels and timers). Never imports adapter crates. Adapters depend on
//! *this* crate, not the reverse.

pub mod autosave;
pub mod callback;
pub mod controller;
pub mod input;
pub mod ports;
pub mod save;
pub mod ui_bus;
pub mod unload;
