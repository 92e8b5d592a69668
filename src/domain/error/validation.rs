// SPDX-License-Identifier: MPL-2.0
//! Validation failures of the notification choice form.

use std::fmt;

/// Reasons a choice submission is rejected.
///
/// Shown inline beside the field; nothing is written to the form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The required field has no value.
    MissingSelection,

    /// A raw value was supplied that is not one of the enumerated options.
    InvalidOption(String),
}

impl ValidationError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ValidationError::MissingSelection => "validation-missing-selection",
            ValidationError::InvalidOption(_) => "validation-invalid-option",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingSelection => {
                write!(f, "You need to select a notification type.")
            }
            ValidationError::InvalidOption(value) => {
                write!(f, "Invalid notification type: {}", value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
