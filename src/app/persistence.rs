// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.
//!
//! Only the language and theme choices made in the info panel are written
//! back; everything else in `settings.toml` is preserved as loaded.

use crate::config::{self, Config};
use crate::i18n::I18n;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use std::time::Instant;
use unic_langid::LanguageIdentifier;

/// Warning key shown when `settings.toml` cannot be written.
pub const CONFIG_SAVE_WARNING: &str = "notification-config-save-error";

/// Writes `config` to disk, reporting failures as a toast.
///
/// Skipped under test so unit tests never touch the user's settings.
pub fn persist(config: &Config, notifications: &mut notifications::Manager, now: Instant) {
    if cfg!(test) {
        return;
    }

    if let Err(err) = config::save(config) {
        tracing::warn!(%err, "Failed to save settings");
        notifications.push(Notification::warning(CONFIG_SAVE_WARNING, now));
    }
}

/// Switches the UI language and records it in `config`.
///
/// Returns `false` (and changes nothing) for unknown or unparsable codes.
pub fn apply_language_change(i18n: &mut I18n, config: &mut Config, code: &str) -> bool {
    let Ok(locale) = code.parse::<LanguageIdentifier>() else {
        tracing::warn!(code, "Ignoring invalid language code");
        return false;
    };
    if !i18n.available_locales.contains(&locale) {
        tracing::warn!(code, "Ignoring language without translations");
        return false;
    }

    i18n.set_locale(locale);
    config.general.language = Some(code.to_string());
    tracing::info!(code, "Language changed");
    true
}

/// Records the theme choice in `config`.
pub fn apply_theme_change(config: &mut Config, mode: ThemeMode) {
    config.general.theme_mode = mode;
    tracing::info!(?mode, "Theme changed");
}
