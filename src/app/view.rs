// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Lays out the locale list, the free-text editors, the choice form and the
//! inspection button, each showing the active locale's slice of the form.

use super::Message;
use crate::domain::form::{FormState, LocaleCode};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::{choice_form, field_editors, locale_switcher};
use iced::{
    alignment::Horizontal,
    widget::{button, rule, scrollable, Column, Container, Text},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub form: &'a FormState,
    pub active_locale: LocaleCode,
    pub editors: &'a field_editors::State,
    pub choice_form: &'a choice_form::State,
}

/// Renders the whole window.
#[allow(clippy::needless_pass_by_value)]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new(ctx.i18n.tr("window-title")).size(typography::TITLE_LG);

    let switcher = locale_switcher::view(locale_switcher::ViewContext {
        i18n: ctx.i18n,
        active: ctx.active_locale,
    })
    .map(Message::LocaleSwitcher);

    let fields = ctx
        .editors
        .view(field_editors::ViewContext {
            i18n: ctx.i18n,
            form: ctx.form,
            locale: ctx.active_locale,
        })
        .map(Message::Fields);

    let choice = ctx
        .choice_form
        .view(choice_form::ViewContext { i18n: ctx.i18n })
        .map(Message::ChoiceForm);

    let inspect_button =
        button(Text::new(ctx.i18n.tr("inspect-button"))).on_press(Message::InspectState);

    let content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .max_width(sizing::FORM_MAX_WIDTH)
        .push(title)
        .push(switcher)
        .push(rule::horizontal(1))
        .push(fields)
        .push(rule::horizontal(1))
        .push(choice)
        .push(rule::horizontal(1))
        .push(inspect_button);

    Container::new(scrollable(content))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}
