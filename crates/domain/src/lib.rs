//! # housepanel-domain
//!
//! Pure domain model for the housepanel control-panel client.
//!
//! ## Responsibilities
//! - Define **remote calls** (function name + keyword arguments) and their
//!   wire encoding (`json=<url-encoded [name, [], kwargs]>`)
//! - Define the **held-button** state used by the press-and-hold repeat loop
//! - Provide **query-string utilities** (parameter lookup and removal)
//! - Define the error conventions shared across the workspace
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod button;
pub mod call;
pub mod error;
pub mod query;
