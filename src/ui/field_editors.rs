// SPDX-License-Identifier: MPL-2.0
//! Free-text editors bound to the active locale's slice of the form.
//!
//! Every keystroke is reported as [`Event::FieldChanged`] with the full new
//! text; the parent writes it into [`FormState`] and the next render reads
//! it back, so what is displayed always equals what is stored.
//!
//! The multi-line editor keeps its own buffer. It is rebuilt from the store
//! by [`State::reseed`] whenever the active locale changes.

use crate::domain::form::{FieldName, FormState, LocaleCode};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::{
    widget::{rule, text_editor, text_input, Column, Text},
    Element, Length,
};

/// Contextual data needed to render the editors.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub form: &'a FormState,
    pub locale: LocaleCode,
}

/// Messages emitted by the editors.
#[derive(Debug, Clone)]
pub enum Message {
    FieldChanged(FieldName, String),
    TextareaAction(text_editor::Action),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    FieldChanged(FieldName, String),
}

/// Editor-local state: the text area buffer.
#[derive(Debug, Default)]
pub struct State {
    textarea: text_editor::Content,
}

impl State {
    /// Creates editors showing `locale`'s values.
    #[must_use]
    pub fn new(form: &FormState, locale: LocaleCode) -> Self {
        let mut state = Self::default();
        state.reseed(form, locale);
        state
    }

    /// Replaces the text area buffer with the stored value for `locale`.
    pub fn reseed(&mut self, form: &FormState, locale: LocaleCode) {
        self.textarea = text_editor::Content::with_text(form.value(FieldName::Textarea, locale));
    }

    /// Current text of the text area buffer.
    #[must_use]
    pub fn textarea_text(&self) -> String {
        self.textarea.text()
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::FieldChanged(field, value) => {
                if field == FieldName::Textarea {
                    self.textarea = text_editor::Content::with_text(&value);
                }
                Event::FieldChanged(field, value)
            }
            Message::TextareaAction(action) => {
                let is_edit = action.is_edit();
                self.textarea.perform(action);
                if is_edit {
                    Event::FieldChanged(FieldName::Textarea, self.textarea.text())
                } else {
                    Event::None
                }
            }
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let title_sample = sample_line(&ctx, "static-title-label", "static-title");
        let description_sample =
            sample_line(&ctx, "static-description-label", "static-description");

        let title_input = plain_input(&ctx, FieldName::Title);
        let description_input = plain_input(&ctx, FieldName::Description);

        let styled_input = text_input(
            &ctx.i18n.tr("field-input-placeholder"),
            ctx.form.value(FieldName::Input, ctx.locale),
        )
        .on_input(|value| Message::FieldChanged(FieldName::Input, value))
        .padding(spacing::SM)
        .size(typography::BODY_LG)
        .width(Length::Fill);

        let textarea = text_editor(&self.textarea)
            .placeholder(ctx.i18n.tr("field-textarea-placeholder"))
            .on_action(Message::TextareaAction)
            .height(Length::Fixed(sizing::TEXTAREA_HEIGHT))
            .padding(spacing::SM);

        Column::new()
            .spacing(spacing::XS)
            .width(Length::Fill)
            .push(title_sample)
            .push(title_input)
            .push(rule::horizontal(1))
            .push(description_sample)
            .push(description_input)
            .push(rule::horizontal(1))
            .push(styled_input)
            .push(rule::horizontal(1))
            .push(textarea)
            .into()
    }
}

/// "Static title: English title", taken from the active content locale.
fn sample_line<'a>(ctx: &ViewContext<'a>, label_key: &str, sample_key: &str) -> Element<'a, Message> {
    Text::new(format!(
        "{} {}",
        ctx.i18n.tr(label_key),
        ctx.i18n.tr_for(ctx.locale, sample_key)
    ))
    .size(typography::BODY)
    .into()
}

fn plain_input<'a>(ctx: &ViewContext<'a>, field: FieldName) -> Element<'a, Message> {
    let placeholder = ctx.i18n.tr(&format!("field-{}-placeholder", field.key()));
    text_input(&placeholder, ctx.form.value(field, ctx.locale))
        .on_input(move |value| Message::FieldChanged(field, value))
        .size(typography::BODY)
        .width(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keystroke_reports_full_field_text() {
        let form = FormState::new();
        let mut state = State::new(&form, LocaleCode::En);
        let event = state.update(Message::FieldChanged(FieldName::Title, "Hel".to_string()));
        assert_eq!(
            event,
            Event::FieldChanged(FieldName::Title, "Hel".to_string())
        );
    }

    #[test]
    fn textarea_edit_reports_buffer_text() {
        let form = FormState::new();
        let mut state = State::new(&form, LocaleCode::En);
        let event = state.update(Message::TextareaAction(text_editor::Action::Edit(
            text_editor::Edit::Insert('x'),
        )));
        match event {
            Event::FieldChanged(FieldName::Textarea, text) => {
                assert_eq!(text, "x");
            }
            other => panic!("expected textarea change, got {other:?}"),
        }
    }

    #[test]
    fn textarea_change_message_replaces_buffer() {
        let form = FormState::new();
        let mut state = State::new(&form, LocaleCode::En);
        let event = state.update(Message::FieldChanged(
            FieldName::Textarea,
            "abc".to_string(),
        ));
        assert_eq!(
            event,
            Event::FieldChanged(FieldName::Textarea, "abc".to_string())
        );
        assert_eq!(state.textarea_text(), "abc");
    }

    #[test]
    fn plain_field_change_leaves_buffer_alone() {
        let mut form = FormState::new();
        form.set_value(FieldName::Textarea, LocaleCode::En, "notes");
        let mut state = State::new(&form, LocaleCode::En);
        let _ = state.update(Message::FieldChanged(FieldName::Title, "t".to_string()));
        assert_eq!(state.textarea_text(), "notes");
    }

    #[test]
    fn textarea_navigation_is_not_an_edit() {
        let form = FormState::new();
        let mut state = State::new(&form, LocaleCode::En);
        let event = state.update(Message::TextareaAction(text_editor::Action::SelectAll));
        assert_eq!(event, Event::None);
    }

    #[test]
    fn reseed_loads_the_new_locale_value() {
        let mut form = FormState::new();
        form.set_value(FieldName::Textarea, LocaleCode::En, "english notes");
        form.set_value(FieldName::Textarea, LocaleCode::Es, "notas");

        let mut state = State::new(&form, LocaleCode::En);
        assert_eq!(state.textarea_text(), "english notes");

        state.reseed(&form, LocaleCode::Es);
        assert_eq!(state.textarea_text(), "notas");
    }

    #[test]
    fn field_editors_view_renders() {
        let i18n = I18n::default();
        let form = FormState::new();
        let state = State::new(&form, LocaleCode::De);
        let _element = state.view(ViewContext {
            i18n: &i18n,
            form: &form,
            locale: LocaleCode::De,
        });
    }
}
