// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Each component exposes a `ViewContext`, a `Message` and an `Event`
//! enum; the app forwards messages in and reacts to the events out.

pub mod choice_form;
pub mod design_tokens;
pub mod field_editors;
pub mod locale_switcher;
pub mod theming;
