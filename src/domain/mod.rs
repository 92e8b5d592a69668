// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and rules.
//! It depends on nothing but `std` so it can be tested without a window.
//!
//! # Modules
//!
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))
//! - [`error`]: Domain error types ([`ValidationError`](error::ValidationError))
//! - [`form`]: Localized form state ([`FormState`](form::FormState),
//!   [`LocaleCode`](form::LocaleCode), [`ChoiceSchema`](form::ChoiceSchema))

pub mod diagnostics;
pub mod error;
pub mod form;
