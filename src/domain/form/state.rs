// SPDX-License-Identifier: MPL-2.0
//! Locale-keyed form state.
//!
//! [`FormState`] is a two-level mapping: the outer key is a [`FieldName`]
//! (or the choice slot), the inner key a [`LocaleCode`]. Setters replace
//! exactly one `(field, locale)` slot and never touch the others.

use super::types::{FieldName, LocaleCode, NotificationChoice};
use std::ops::{Index, IndexMut};

// =============================================================================
// LocaleMap
// =============================================================================

/// Total mapping from every [`LocaleCode`] to a value.
///
/// There is one slot per locale, so lookups cannot miss.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LocaleMap<T> {
    en: T,
    de: T,
    es: T,
}

impl<T> LocaleMap<T> {
    /// Builds a map by calling `init` once per locale.
    pub fn from_fn(mut init: impl FnMut(LocaleCode) -> T) -> Self {
        Self {
            en: init(LocaleCode::En),
            de: init(LocaleCode::De),
            es: init(LocaleCode::Es),
        }
    }

    #[must_use]
    pub fn get(&self, locale: LocaleCode) -> &T {
        match locale {
            LocaleCode::En => &self.en,
            LocaleCode::De => &self.de,
            LocaleCode::Es => &self.es,
        }
    }

    pub fn get_mut(&mut self, locale: LocaleCode) -> &mut T {
        match locale {
            LocaleCode::En => &mut self.en,
            LocaleCode::De => &mut self.de,
            LocaleCode::Es => &mut self.es,
        }
    }

    /// Replaces the value stored for `locale`, returning the previous one.
    pub fn set(&mut self, locale: LocaleCode, value: T) -> T {
        std::mem::replace(self.get_mut(locale), value)
    }

    /// Iterates over `(locale, value)` pairs in [`LocaleCode::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (LocaleCode, &T)> {
        LocaleCode::ALL
            .into_iter()
            .map(move |locale| (locale, self.get(locale)))
    }
}

impl<T> Index<LocaleCode> for LocaleMap<T> {
    type Output = T;

    fn index(&self, locale: LocaleCode) -> &T {
        self.get(locale)
    }
}

impl<T> IndexMut<LocaleCode> for LocaleMap<T> {
    fn index_mut(&mut self, locale: LocaleCode) -> &mut T {
        self.get_mut(locale)
    }
}

// =============================================================================
// FormState
// =============================================================================

/// All form values, one slice per locale.
///
/// Created empty (all strings blank, every choice [`NotificationChoice::All`])
/// and only mutated through the setters below.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    title: LocaleMap<String>,
    description: LocaleMap<String>,
    input: LocaleMap<String>,
    textarea: LocaleMap<String>,
    choice: LocaleMap<NotificationChoice>,
}

impl FormState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the per-locale values of a free-text field.
    #[must_use]
    pub fn field(&self, field: FieldName) -> &LocaleMap<String> {
        match field {
            FieldName::Title => &self.title,
            FieldName::Description => &self.description,
            FieldName::Input => &self.input,
            FieldName::Textarea => &self.textarea,
        }
    }

    fn field_mut(&mut self, field: FieldName) -> &mut LocaleMap<String> {
        match field {
            FieldName::Title => &mut self.title,
            FieldName::Description => &mut self.description,
            FieldName::Input => &mut self.input,
            FieldName::Textarea => &mut self.textarea,
        }
    }

    #[must_use]
    pub fn value(&self, field: FieldName, locale: LocaleCode) -> &str {
        self.field(field).get(locale)
    }

    /// Replaces `FormState[field][locale]`. Any string is accepted.
    pub fn set_value(&mut self, field: FieldName, locale: LocaleCode, value: impl Into<String>) {
        self.field_mut(field).set(locale, value.into());
    }

    #[must_use]
    pub fn choice(&self, locale: LocaleCode) -> NotificationChoice {
        *self.choice.get(locale)
    }

    pub fn set_choice(&mut self, locale: LocaleCode, choice: NotificationChoice) {
        self.choice.set(locale, choice);
    }

    /// Per-locale choices.
    #[must_use]
    pub fn choices(&self) -> &LocaleMap<NotificationChoice> {
        &self.choice
    }

    /// Iterates over every free-text field with its per-locale values.
    pub fn fields(&self) -> impl Iterator<Item = (FieldName, &LocaleMap<String>)> {
        FieldName::ALL
            .into_iter()
            .map(move |field| (field, self.field(field)))
    }
}
