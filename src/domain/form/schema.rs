// SPDX-License-Identifier: MPL-2.0
//! Schema of the notification choice form.
//!
//! A single required field whose value must be one of the
//! [`NotificationChoice`] options.

use super::types::NotificationChoice;
use crate::domain::error::ValidationError;

/// Validator for the `type` field of the choice form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChoiceSchema;

impl ChoiceSchema {
    /// Accepts any present choice, rejects an absent one.
    pub fn validate(
        self,
        value: Option<NotificationChoice>,
    ) -> Result<NotificationChoice, ValidationError> {
        value.ok_or(ValidationError::MissingSelection)
    }

    /// Validates an untyped value against the enumerated option keys.
    pub fn validate_raw(self, value: Option<&str>) -> Result<NotificationChoice, ValidationError> {
        match value {
            None => Err(ValidationError::MissingSelection),
            Some(raw) => NotificationChoice::from_key(raw)
                .ok_or_else(|| ValidationError::InvalidOption(raw.to_string())),
        }
    }
}
