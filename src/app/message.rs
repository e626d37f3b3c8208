// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::settings;

use super::Screen;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    SwitchScreen(Screen),
    Settings(settings::Message),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale identifier override (e.g. `fr`, `en-US`); unknown
    /// values resolve to the host environment default.
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `LAUNCHDECK_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Draw the QA indicator border around the window.
    pub qa_indicator: bool,
}
