// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.
//!
//! This module handles saving user preferences to disk: the picked
//! language identifier and the theme mode.

use super::Message;
use crate::app::config;
use crate::i18n::fluent::I18n;
use crate::locale::{self, Locale};
use crate::ui::theming::ThemeMode;
use iced::Task;

/// Applies the newly picked locale identifier and persists it to config.
///
/// The locale context normalizes unknown identifiers to the sentinel, so
/// this never fails; picking the sentinel clears the persisted key and the
/// host default is re-resolved on the next launch.
///
/// Guarded during tests to keep isolation: unit tests exercise the logic by
/// calling the function directly rather than through disk state.
pub fn apply_language_change(
    i18n: &mut I18n,
    locale: &mut Locale,
    identifier: &str,
) -> Task<Message> {
    locale.set(identifier);
    i18n.set_locale(locale.current());

    if cfg!(test) {
        return Task::none();
    }

    let (mut cfg, _warning) = config::load();
    cfg.general.language = if locale::is_supported(identifier) && identifier != locale::SENTINEL {
        Some(identifier.to_string())
    } else {
        None
    };

    if let Err(error) = config::save(&cfg) {
        eprintln!("Failed to save config: {:?}", error);
    }

    Task::none()
}

/// Persists the picked theme mode.
pub fn persist_theme_mode(theme_mode: ThemeMode) -> Task<Message> {
    if cfg!(test) {
        return Task::none();
    }

    let (mut cfg, _warning) = config::load();
    cfg.general.theme_mode = theme_mode;

    if let Err(error) = config::save(&cfg) {
        eprintln!("Failed to save config: {:?}", error);
    }

    Task::none()
}
