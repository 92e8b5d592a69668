// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, translation file loading, and string formatting.
//!
//! # Features
//!
//! - Automatic UI language detection from CLI, config, or system settings
//! - Embedded `.ftl` translation files, one per supported locale
//! - Lookups in an explicit bundle, used for per-locale sample text
//! - Fallback to default locale when translations are missing

pub mod fluent;
