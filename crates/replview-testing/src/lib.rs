//! Testing infrastructure for replview.
//!
//! - `fixtures`: ready-made object graphs (nested, cyclic, misbehaving getters)
//! - `assertions`: output normalisation and handler-state checks

pub mod assertions;
pub mod fixtures;

pub use assertions::{HandlerDepthGuard, redact_tokens};
