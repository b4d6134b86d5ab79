// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, translation file loading, and string formatting.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Translation files embedded in the binary (`assets/i18n/*.ftl`)
//! - Runtime language switching between English and Hindi
//! - Fallback to `en-US` when a key is missing in the active locale

pub mod fluent;

pub use fluent::{I18n, DEFAULT_LOCALE};
