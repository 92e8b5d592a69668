// SPDX-License-Identifier: MPL-2.0
//! Diagnostics: recent user actions and full-state inspection dumps.
//!
//! - [`ActivityLog`]: Bounded record of [`UserAction`]s
//! - [`inspect`]: Emits the whole form state through `tracing`

mod collector;
mod events;
mod snapshot;

pub use crate::domain::diagnostics::BufferCapacity;
pub use collector::ActivityLog;
pub use events::UserAction;
pub use snapshot::{form_state_json, inspect, INSPECT_TARGET};
