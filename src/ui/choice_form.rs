// SPDX-License-Identifier: MPL-2.0
//! Schema-validated notification choice form.
//!
//! [`bind`] ties a [`ChoiceSchema`] to a default value and returns the form
//! state. The displayed selection is a draft: choosing an option changes
//! only the form, and nothing reaches the form store until a submit passes
//! validation.
//!
//! The parent calls [`State::reset`] whenever the active locale changes so
//! the form shows that locale's stored choice.

use crate::domain::error::ValidationError;
use crate::domain::form::{ChoiceSchema, NotificationChoice};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use iced::{
    widget::{button, radio, text, Column, Text},
    Element, Length,
};

/// Contextual data needed to render the form.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Selected(NotificationChoice),
    Submit,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// Validation passed; the parent stores the choice.
    Submitted(NotificationChoice),
    /// Validation failed; the message is already shown inline.
    Rejected(ValidationError),
}

/// Binds `schema` to a form whose initial selection is `default`.
#[must_use]
pub fn bind(schema: ChoiceSchema, default: NotificationChoice) -> State {
    State {
        schema,
        value: Some(default),
        error: None,
    }
}

/// Form state: the displayed selection and the inline validation message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    schema: ChoiceSchema,
    value: Option<NotificationChoice>,
    error: Option<ValidationError>,
}

impl Default for State {
    fn default() -> Self {
        bind(ChoiceSchema, NotificationChoice::default())
    }
}

impl State {
    #[must_use]
    pub fn current_value(&self) -> Option<NotificationChoice> {
        self.value
    }

    #[must_use]
    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    /// Forces the selection to `value`, dropping any draft and error.
    pub fn reset(&mut self, value: NotificationChoice) {
        self.value = Some(value);
        self.error = None;
    }

    /// Removes the selection entirely. Only reachable programmatically.
    pub fn clear(&mut self) {
        self.value = None;
    }

    /// Validates the current selection. On failure the error is kept for
    /// display.
    pub fn handle_submit(&mut self) -> Result<NotificationChoice, ValidationError> {
        match self.schema.validate(self.value) {
            Ok(choice) => {
                self.error = None;
                Ok(choice)
            }
            Err(err) => {
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Selected(choice) => {
                self.value = Some(choice);
                self.error = None;
                Event::None
            }
            Message::Submit => match self.handle_submit() {
                Ok(choice) => Event::Submitted(choice),
                Err(err) => Event::Rejected(err),
            },
        }
    }

    #[allow(clippy::needless_pass_by_value)]
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let label = Text::new(ctx.i18n.tr("choice-form-label")).size(typography::BODY_LG);

        let options = NotificationChoice::ALL.into_iter().fold(
            Column::new().spacing(spacing::XXS),
            |column, choice| {
                column.push(
                    radio(
                        ctx.i18n.tr(choice.i18n_key()),
                        choice,
                        self.value,
                        Message::Selected,
                    )
                    .size(typography::BODY_LG)
                    .text_size(typography::BODY),
                )
            },
        );

        let mut content = Column::new()
            .spacing(spacing::SM)
            .width(Length::Fill)
            .push(label)
            .push(options);

        if let Some(err) = &self.error {
            content = content.push(
                Text::new(ctx.i18n.tr(err.i18n_key()))
                    .size(typography::CAPTION)
                    .style(text::danger),
            );
        }

        content
            .push(button(Text::new(ctx.i18n.tr("choice-submit"))).on_press(Message::Submit))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_seeds_the_default() {
        let form = bind(ChoiceSchema, NotificationChoice::Mentions);
        assert_eq!(form.current_value(), Some(NotificationChoice::Mentions));
        assert!(form.error().is_none());
    }

    #[test]
    fn selecting_changes_draft_without_submitting() {
        let mut form = State::default();
        let event = form.update(Message::Selected(NotificationChoice::None));
        assert_eq!(event, Event::None);
        assert_eq!(form.current_value(), Some(NotificationChoice::None));
    }

    #[test]
    fn submit_emits_the_selection() {
        let mut form = State::default();
        form.update(Message::Selected(NotificationChoice::Mentions));
        let event = form.update(Message::Submit);
        assert_eq!(event, Event::Submitted(NotificationChoice::Mentions));
    }

    #[test]
    fn submit_without_selection_is_rejected_and_shown() {
        let mut form = State::default();
        form.clear();
        let event = form.update(Message::Submit);
        assert_eq!(event, Event::Rejected(ValidationError::MissingSelection));
        assert_eq!(form.error(), Some(&ValidationError::MissingSelection));
    }

    #[test]
    fn selecting_after_rejection_clears_error() {
        let mut form = State::default();
        form.clear();
        let _ = form.update(Message::Submit);
        form.update(Message::Selected(NotificationChoice::All));
        assert!(form.error().is_none());
    }

    #[test]
    fn reset_discards_draft_and_error() {
        let mut form = State::default();
        form.clear();
        let _ = form.handle_submit();
        form.reset(NotificationChoice::None);
        assert_eq!(form.current_value(), Some(NotificationChoice::None));
        assert!(form.error().is_none());
    }

    #[test]
    fn choice_form_view_renders_with_error() {
        let i18n = I18n::default();
        let mut form = State::default();
        form.clear();
        let _ = form.handle_submit();
        let _element = form.view(ViewContext { i18n: &i18n });
    }
}
