// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Every handler runs synchronously inside `App::update`; none of them
//! spawns work, so each returns `Task::none()`.

use super::Message;
use crate::diagnostics::{self, ActivityLog, UserAction};
use crate::domain::form::{FormState, LocaleCode};
use crate::ui::choice_form::{self, Event as ChoiceFormEvent};
use crate::ui::field_editors::{self, Event as FieldEvent};
use crate::ui::locale_switcher::{self, Event as LocaleSwitcherEvent};
use iced::Task;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub form: &'a mut FormState,
    pub active_locale: &'a mut LocaleCode,
    pub editors: &'a mut field_editors::State,
    pub choice_form: &'a mut choice_form::State,
    pub activity: &'a mut ActivityLog,
}

/// Handles locale list messages.
pub fn handle_locale_switcher_message(
    ctx: &mut UpdateContext<'_>,
    message: locale_switcher::Message,
) -> Task<Message> {
    match locale_switcher::update(message, *ctx.active_locale) {
        LocaleSwitcherEvent::None => {}
        LocaleSwitcherEvent::LocaleChanged(locale) => apply_locale_change(ctx, locale),
    }
    Task::none()
}

/// Makes `locale` active and re-seeds everything that caches a slice of the
/// form: the text area buffer and the choice form's displayed selection.
///
/// The form store itself is left untouched.
pub fn apply_locale_change(ctx: &mut UpdateContext<'_>, locale: LocaleCode) {
    let previous = std::mem::replace(ctx.active_locale, locale);
    ctx.editors.reseed(ctx.form, locale);
    ctx.choice_form.reset(ctx.form.choice(locale));
    ctx.activity
        .log_action(UserAction::select_locale(previous, locale));
    tracing::debug!(from = %previous, to = %locale, "active locale changed");
}

/// Handles free-text editor messages.
pub fn handle_field_message(
    ctx: &mut UpdateContext<'_>,
    message: field_editors::Message,
) -> Task<Message> {
    if let FieldEvent::FieldChanged(field, value) = ctx.editors.update(message) {
        let locale = *ctx.active_locale;
        tracing::trace!(%field, %locale, "field edited");
        ctx.activity
            .log_action(UserAction::edit_field(field, locale, &value));
        ctx.form.set_value(field, locale, value);
    }
    Task::none()
}

/// Handles choice form messages. Only a validated submit writes the store.
pub fn handle_choice_form_message(
    ctx: &mut UpdateContext<'_>,
    message: choice_form::Message,
) -> Task<Message> {
    let locale = *ctx.active_locale;
    match ctx.choice_form.update(message) {
        ChoiceFormEvent::None => {}
        ChoiceFormEvent::Submitted(choice) => {
            ctx.form.set_choice(locale, choice);
            ctx.activity
                .log_action(UserAction::submit_choice(locale, choice));
            tracing::info!(%locale, choice = %choice, "notification choice submitted");
        }
        ChoiceFormEvent::Rejected(err) => {
            ctx.activity
                .log_action(UserAction::reject_choice(locale, &err));
            tracing::warn!(%locale, %err, "notification choice rejected");
        }
    }
    Task::none()
}

/// Records the inspection and dumps the form state.
pub fn handle_inspect(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.activity.log_action(UserAction::InspectState);
    if let Err(err) = diagnostics::inspect(ctx.form, *ctx.active_locale, ctx.activity) {
        tracing::error!(%err, "failed to serialize form state");
    }
    Task::none()
}
