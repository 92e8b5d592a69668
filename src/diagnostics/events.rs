// SPDX-License-Identifier: MPL-2.0
//! User actions recorded for the inspection dump.
//!
//! Field edits record the text length only, never the text itself.

use serde::{Deserialize, Serialize};

use crate::domain::error::ValidationError;
use crate::domain::form::{FieldName, LocaleCode, NotificationChoice};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    /// The active content locale changed.
    SelectLocale { from: String, to: String },

    /// A free-text field was edited.
    EditField {
        field: String,
        locale: String,
        length: usize,
    },

    /// A choice passed validation and was stored.
    SubmitChoice { locale: String, choice: String },

    /// A choice submission failed validation.
    RejectChoice { locale: String, reason: String },

    /// The full state was dumped.
    InspectState,
}

impl UserAction {
    #[must_use]
    pub fn select_locale(from: LocaleCode, to: LocaleCode) -> Self {
        UserAction::SelectLocale {
            from: from.code().to_string(),
            to: to.code().to_string(),
        }
    }

    #[must_use]
    pub fn edit_field(field: FieldName, locale: LocaleCode, value: &str) -> Self {
        UserAction::EditField {
            field: field.key().to_string(),
            locale: locale.code().to_string(),
            length: value.chars().count(),
        }
    }

    #[must_use]
    pub fn submit_choice(locale: LocaleCode, choice: NotificationChoice) -> Self {
        UserAction::SubmitChoice {
            locale: locale.code().to_string(),
            choice: choice.key().to_string(),
        }
    }

    #[must_use]
    pub fn reject_choice(locale: LocaleCode, error: &ValidationError) -> Self {
        UserAction::RejectChoice {
            locale: locale.code().to_string(),
            reason: error.i18n_key().to_string(),
        }
    }
}
