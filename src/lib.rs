// SPDX-License-Identifier: MPL-2.0
//! `locale_form` is a locale-aware form built with the Iced GUI framework.
//!
//! It keeps one value per content locale for every free-text field and one
//! validated notification choice per locale, with a switcher deciding which
//! locale's slice is shown and edited. Interface strings come from Fluent.

#![doc(html_root_url = "https://docs.rs/locale_form/0.1.0")]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;
