// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

use crate::domain::diagnostics::buffer_capacity_bounds;
use crate::domain::form::LocaleCode;

// ==========================================================================
// Form Defaults
// ==========================================================================

/// Content locale selected when the window opens.
pub const DEFAULT_INITIAL_LOCALE: LocaleCode = LocaleCode::En;

/// UI language used when nothing else resolves.
pub const DEFAULT_UI_LANGUAGE: &str = "en-US";

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of user actions kept in the activity buffer.
pub const DEFAULT_ACTIVITY_BUFFER_CAPACITY: usize = buffer_capacity_bounds::DEFAULT;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: u32 = 720;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 520;

const _: () = {
    assert!(MIN_WINDOW_WIDTH <= WINDOW_DEFAULT_WIDTH);
    assert!(MIN_WINDOW_HEIGHT <= WINDOW_DEFAULT_HEIGHT);
    assert!(DEFAULT_ACTIVITY_BUFFER_CAPACITY >= buffer_capacity_bounds::MIN);
    assert!(DEFAULT_ACTIVITY_BUFFER_CAPACITY <= buffer_capacity_bounds::MAX);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_locale_is_english() {
        assert_eq!(DEFAULT_INITIAL_LOCALE, LocaleCode::En);
    }

    #[test]
    fn default_ui_language_parses() {
        let parsed: Result<unic_langid::LanguageIdentifier, _> = DEFAULT_UI_LANGUAGE.parse();
        assert!(parsed.is_ok());
    }
}
