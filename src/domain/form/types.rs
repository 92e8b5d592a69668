// SPDX-License-Identifier: MPL-2.0
//! Closed key sets for the localized form.
//!
//! Locales, field names and notification choices are enums rather than
//! strings so that every lookup into [`FormState`](super::FormState) is
//! checked at compile time.

use std::fmt;
use std::str::FromStr;

// =============================================================================
// LocaleCode
// =============================================================================

/// A content locale. Each locale owns an independent slice of the form state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LocaleCode {
    #[default]
    En,
    De,
    Es,
}

impl LocaleCode {
    /// All locales in display order.
    pub const ALL: [LocaleCode; 3] = [LocaleCode::En, LocaleCode::De, LocaleCode::Es];

    /// Short code used in serialized output and on the command line.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            LocaleCode::En => "en",
            LocaleCode::De => "de",
            LocaleCode::Es => "es",
        }
    }

    /// Name of the language written in that language.
    #[must_use]
    pub fn native_name(self) -> &'static str {
        match self {
            LocaleCode::En => "English",
            LocaleCode::De => "Deutsch",
            LocaleCode::Es => "Español",
        }
    }

    /// BCP-47 tag of the translation bundle holding this locale's sample text.
    #[must_use]
    pub fn bundle_tag(self) -> &'static str {
        match self {
            LocaleCode::En => "en-US",
            LocaleCode::De => "de",
            LocaleCode::Es => "es",
        }
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when a string is not one of the supported locale codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLocale(pub String);

impl fmt::Display for UnknownLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown locale '{}' (expected en, de or es)", self.0)
    }
}

impl std::error::Error for UnknownLocale {}

impl FromStr for LocaleCode {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(LocaleCode::En),
            "de" => Ok(LocaleCode::De),
            "es" => Ok(LocaleCode::Es),
            _ => Err(UnknownLocale(s.to_string())),
        }
    }
}

// =============================================================================
// FieldName
// =============================================================================

/// The free-text fields of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Title,
    Description,
    Input,
    Textarea,
}

impl FieldName {
    pub const ALL: [FieldName; 4] = [
        FieldName::Title,
        FieldName::Description,
        FieldName::Input,
        FieldName::Textarea,
    ];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            FieldName::Title => "title",
            FieldName::Description => "description",
            FieldName::Input => "input",
            FieldName::Textarea => "textarea",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// =============================================================================
// NotificationChoice
// =============================================================================

/// Options of the required-choice field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NotificationChoice {
    #[default]
    All,
    Mentions,
    None,
}

impl NotificationChoice {
    pub const ALL: [NotificationChoice; 3] = [
        NotificationChoice::All,
        NotificationChoice::Mentions,
        NotificationChoice::None,
    ];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            NotificationChoice::All => "all",
            NotificationChoice::Mentions => "mentions",
            NotificationChoice::None => "none",
        }
    }

    /// Parses a raw option key. Returns `None` for anything outside the set.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|choice| choice.key() == key)
    }

    /// Translation key of the option label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            NotificationChoice::All => "choice-all",
            NotificationChoice::Mentions => "choice-mentions",
            NotificationChoice::None => "choice-none",
        }
    }
}

impl fmt::Display for NotificationChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_parses_case_insensitively() {
        assert_eq!("DE".parse::<LocaleCode>(), Ok(LocaleCode::De));
        assert_eq!(" es ".parse::<LocaleCode>(), Ok(LocaleCode::Es));
        assert_eq!("en".parse::<LocaleCode>(), Ok(LocaleCode::En));
    }

    #[test]
    fn locale_rejects_unknown_codes() {
        let err = "fr".parse::<LocaleCode>().unwrap_err();
        assert_eq!(err, UnknownLocale("fr".to_string()));
        assert!(err.to_string().contains("fr"));
    }

    #[test]
    fn locale_default_is_english() {
        assert_eq!(LocaleCode::default(), LocaleCode::En);
    }

    #[test]
    fn native_names_match_locales() {
        assert_eq!(LocaleCode::En.native_name(), "English");
        assert_eq!(LocaleCode::De.native_name(), "Deutsch");
        assert_eq!(LocaleCode::Es.native_name(), "Español");
    }

    #[test]
    fn choice_keys_parse_back() {
        for choice in NotificationChoice::ALL {
            assert_eq!(NotificationChoice::from_key(choice.key()), Some(choice));
        }
        assert_eq!(NotificationChoice::from_key("everything"), None);
    }

    #[test]
    fn choice_default_is_all() {
        assert_eq!(NotificationChoice::default(), NotificationChoice::All);
    }

    #[test]
    fn field_keys_are_distinct() {
        let keys: Vec<_> = FieldName::ALL.iter().map(|f| f.key()).collect();
        assert_eq!(keys, vec!["title", "description", "input", "textarea"]);
    }
}
