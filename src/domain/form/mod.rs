// SPDX-License-Identifier: MPL-2.0
//! Localized form domain types.
//!
//! - [`LocaleCode`], [`FieldName`], [`NotificationChoice`]: closed key sets
//! - [`LocaleMap`], [`FormState`]: the locale-keyed value store
//! - [`ChoiceSchema`]: validation of the required choice field

mod schema;
mod state;
mod types;

pub use schema::ChoiceSchema;
pub use state::{FormState, LocaleMap};
pub use types::{FieldName, LocaleCode, NotificationChoice, UnknownLocale};
