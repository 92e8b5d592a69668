// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::form::LocaleCode;
use crate::ui::{choice_form, field_editors, locale_switcher};

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    LocaleSwitcher(locale_switcher::Message),
    Fields(field_editors::Message),
    ChoiceForm(choice_form::Message),
    /// Dump the whole form state to the diagnostic channel.
    InspectState,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional UI language override in BCP-47 form (e.g. `de`, `en-US`).
    pub lang: Option<String>,
    /// Optional content locale to start on.
    pub locale: Option<LocaleCode>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `LOCALE_FORM_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
