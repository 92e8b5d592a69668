// SPDX-License-Identifier: MPL-2.0
//! Content locale list.
//!
//! Shows every [`LocaleCode`] with its native name; the active one is
//! highlighted. Picking a different locale emits [`Event::LocaleChanged`].

use crate::domain::form::LocaleCode;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use iced::{
    alignment::Vertical,
    widget::{button, Column, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the locale list.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active: LocaleCode,
}

/// Messages emitted by the locale list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Select(LocaleCode),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    LocaleChanged(LocaleCode),
}

/// Process a locale list message. Re-selecting the active locale is a no-op.
#[must_use]
pub fn update(message: Message, active: LocaleCode) -> Event {
    match message {
        Message::Select(locale) if locale == active => Event::None,
        Message::Select(locale) => Event::LocaleChanged(locale),
    }
}

/// Render the locale list.
#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new(ctx.i18n.tr("locale-switcher-label")).size(typography::TITLE_SM);

    let entries = LocaleCode::ALL
        .into_iter()
        .fold(Row::new().spacing(spacing::XS), |row, locale| {
            row.push(build_entry(locale, locale == ctx.active))
        })
        .align_y(Vertical::Center);

    Column::new()
        .spacing(spacing::XS)
        .width(Length::Fill)
        .push(title)
        .push(entries)
        .into()
}

fn build_entry<'a>(locale: LocaleCode, is_active: bool) -> Element<'a, Message> {
    let label = Text::new(format!("{} {}", locale.code(), locale.native_name()))
        .size(typography::BODY);

    let entry = button(label).on_press(Message::Select(locale));
    if is_active {
        entry.style(button::primary).into()
    } else {
        entry.style(button::text).into()
    }
}
