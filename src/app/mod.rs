// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct owns the form store, the active locale and the
//! component states, and routes every message to the handler that may
//! mutate them. Nothing outside `update` writes to the form.

mod message;
pub mod paths;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::diagnostics::{ActivityLog, BufferCapacity};
use crate::domain::form::{ChoiceSchema, FormState, LocaleCode};
use crate::i18n::fluent::I18n;
use crate::ui::choice_form;
use crate::ui::field_editors;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    form: FormState,
    active_locale: LocaleCode,
    editors: field_editors::State,
    choice_form: choice_form::State,
    activity: ActivityLog,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("active_locale", &self.active_locale)
            .field("form", &self.form)
            .field("choice_form", &self.choice_form)
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(
            config::WINDOW_DEFAULT_WIDTH as f32,
            config::WINDOW_DEFAULT_HEIGHT as f32,
        ),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH as f32,
            config::MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot function; the flags are consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(Flags::default(), &Config::default())
    }
}

impl App {
    /// Loads settings from disk and builds the initial state.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());
        let (config, config_warning) = config::load();
        let app = Self::with_config(flags, &config);

        if let Some(key) = config_warning {
            tracing::warn!("{}", app.i18n.tr(&key));
        }

        (app, Task::none())
    }

    /// Builds the initial state from already-loaded settings.
    ///
    /// Every locale starts blank with the `all` choice; the starting locale
    /// is `--locale`, then `[form] initial_locale`, then English.
    #[must_use]
    pub fn with_config(flags: Flags, config: &Config) -> Self {
        let i18n = I18n::new(flags.lang.clone(), config);
        let form = FormState::new();
        let active_locale = flags
            .locale
            .or_else(|| config.initial_locale())
            .unwrap_or(config::DEFAULT_INITIAL_LOCALE);
        let capacity = BufferCapacity::new(
            config
                .diagnostics
                .activity_buffer_capacity
                .unwrap_or(config::DEFAULT_ACTIVITY_BUFFER_CAPACITY),
        );

        tracing::debug!(
            ui_language = %i18n.current_locale(),
            %active_locale,
            "application state initialized"
        );

        Self {
            editors: field_editors::State::new(&form, active_locale),
            choice_form: choice_form::bind(ChoiceSchema, form.choice(active_locale)),
            i18n,
            form,
            active_locale,
            activity: ActivityLog::new(capacity),
            theme_mode: config.general.theme_mode,
        }
    }

    fn title(&self) -> String {
        format!(
            "{} - {}",
            self.i18n.tr("window-title"),
            self.active_locale.native_name()
        )
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_theme()
    }

    #[must_use]
    pub fn form(&self) -> &FormState {
        &self.form
    }

    #[must_use]
    pub fn active_locale(&self) -> LocaleCode {
        self.active_locale
    }

    #[must_use]
    pub fn choice_form(&self) -> &choice_form::State {
        &self.choice_form
    }

    /// Choice form state, for driving states the UI cannot produce.
    pub fn choice_form_mut(&mut self) -> &mut choice_form::State {
        &mut self.choice_form
    }

    #[must_use]
    pub fn editors(&self) -> &field_editors::State {
        &self.editors
    }

    #[must_use]
    pub fn activity(&self) -> &ActivityLog {
        &self.activity
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            form: &mut self.form,
            active_locale: &mut self.active_locale,
            editors: &mut self.editors,
            choice_form: &mut self.choice_form,
            activity: &mut self.activity,
        };

        match message {
            Message::LocaleSwitcher(msg) => update::handle_locale_switcher_message(&mut ctx, msg),
            Message::Fields(msg) => update::handle_field_message(&mut ctx, msg),
            Message::ChoiceForm(msg) => update::handle_choice_form_message(&mut ctx, msg),
            Message::InspectState => update::handle_inspect(&mut ctx),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            form: &self.form,
            active_locale: self.active_locale,
            editors: &self.editors,
            choice_form: &self.choice_form,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormConfig;
    use crate::domain::form::{FieldName, NotificationChoice};
    use crate::ui::{choice_form, field_editors, locale_switcher};

    fn select(app: &mut App, locale: LocaleCode) {
        let _ = app.update(Message::LocaleSwitcher(locale_switcher::Message::Select(
            locale,
        )));
    }

    fn type_into(app: &mut App, field: FieldName, value: &str) {
        let _ = app.update(Message::Fields(field_editors::Message::FieldChanged(
            field,
            value.to_string(),
        )));
    }

    #[test]
    fn default_app_starts_on_english_with_blank_state() {
        let app = App::default();
        assert_eq!(app.active_locale(), LocaleCode::En);
        assert_eq!(app.form(), &FormState::new());
        assert_eq!(
            app.choice_form().current_value(),
            Some(NotificationChoice::All)
        );
    }

    #[test]
    fn cli_locale_beats_config_locale() {
        let config = Config {
            form: FormConfig {
                initial_locale: Some("es".to_string()),
            },
            ..Config::default()
        };
        let from_config = App::with_config(Flags::default(), &config);
        assert_eq!(from_config.active_locale(), LocaleCode::Es);

        let flags = Flags {
            locale: Some(LocaleCode::De),
            ..Flags::default()
        };
        let from_cli = App::with_config(flags, &config);
        assert_eq!(from_cli.active_locale(), LocaleCode::De);
    }

    #[test]
    fn typing_writes_only_the_active_locale() {
        let mut app = App::default();
        select(&mut app, LocaleCode::De);
        type_into(&mut app, FieldName::Description, "Beschreibung");

        assert_eq!(
            app.form().value(FieldName::Description, LocaleCode::De),
            "Beschreibung"
        );
        assert_eq!(app.form().value(FieldName::Description, LocaleCode::En), "");
        assert_eq!(app.form().value(FieldName::Description, LocaleCode::Es), "");
    }

    #[test]
    fn switching_locale_does_not_touch_the_store() {
        let mut app = App::default();
        type_into(&mut app, FieldName::Title, "Hello");
        let before = app.form().clone();

        select(&mut app, LocaleCode::Es);
        select(&mut app, LocaleCode::De);

        assert_eq!(app.form(), &before);
    }

    #[test]
    fn unsubmitted_selection_is_dropped_on_locale_change() {
        let mut app = App::default();
        let _ = app.update(Message::ChoiceForm(choice_form::Message::Selected(
            NotificationChoice::None,
        )));
        assert_eq!(app.form().choice(LocaleCode::En), NotificationChoice::All);

        select(&mut app, LocaleCode::De);
        select(&mut app, LocaleCode::En);

        assert_eq!(
            app.choice_form().current_value(),
            Some(NotificationChoice::All)
        );
    }

    #[test]
    fn textarea_buffer_follows_the_active_locale() {
        let mut app = App::default();
        type_into(&mut app, FieldName::Textarea, "first");
        select(&mut app, LocaleCode::De);
        assert_eq!(app.editors().textarea_text(), "");

        select(&mut app, LocaleCode::En);
        assert_eq!(app.editors().textarea_text(), "first");
    }

    #[test]
    fn textarea_shows_the_stored_value_after_a_change_message() {
        let mut app = App::default();
        type_into(&mut app, FieldName::Textarea, "abc");
        assert_eq!(
            app.form().value(FieldName::Textarea, LocaleCode::En),
            "abc"
        );
        assert_eq!(app.editors().textarea_text(), "abc");
    }

    #[test]
    fn inspect_records_action_and_keeps_state() {
        let mut app = App::default();
        type_into(&mut app, FieldName::Input, "value");
        let before = app.form().clone();

        let _ = app.update(Message::InspectState);

        assert_eq!(app.form(), &before);
        assert_eq!(
            app.activity().last(),
            Some(&crate::diagnostics::UserAction::InspectState)
        );
    }

    #[test]
    fn title_names_the_active_locale() {
        let mut app = App::default();
        select(&mut app, LocaleCode::Es);
        assert!(app.title().ends_with("Español"));
    }

    #[test]
    fn app_view_renders() {
        let app = App::default();
        let _element = app.view();
    }
}
