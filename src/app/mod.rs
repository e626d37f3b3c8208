// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct wires together the locale context, the Fluent string
//! catalog, and the persisted preferences, and translates messages into
//! side effects like config persistence. Locale resolution happens exactly
//! once during boot; afterwards the context is only mutated from the update
//! loop in response to the language picker.

pub mod config;
mod message;
pub mod paths;
mod persistence;
mod screen;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::i18n::fluent::I18n;
use crate::locale::{self, Locale};
use crate::ui::chrome;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Task, Theme};

pub const WINDOW_DEFAULT_HEIGHT: u32 = 420;
pub const WINDOW_DEFAULT_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 320;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Root Iced application state that bridges the locale context, the string
/// catalog, and persisted preferences.
pub struct App {
    pub i18n: I18n,
    pub locale: Locale,
    screen: Screen,
    theme_mode: ThemeMode,
    /// Draw the QA indicator border. Runtime flag, off in normal use.
    qa_indicator: bool,
    /// Identifier the user picked (possibly the sentinel), as persisted.
    selected_identifier: String,
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
///
/// The locale is resolved before the event loop starts so the window's
/// default font can follow it; everything else is built in the boot
/// closure.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.config_dir.clone());

    let (config, config_warning) = config::load();
    if config_warning.is_some() {
        eprintln!("Failed to load config, using defaults");
    }

    let locale = Locale::new(&resolve_boot_identifier(&flags, &config));
    let default_font = chrome::ui_font(&locale);

    // Wrap boot data in RefCell<Option<_>> to satisfy the Fn trait
    // requirement while only consuming it once (iced 0.14 requires Fn,
    // not FnOnce)
    let boot_state = RefCell::new(Some((flags, config, locale)));
    let boot = move || {
        let (flags, config, locale) = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags, config, locale)
    };

    let application = iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings());

    match default_font {
        Some(font) => application.default_font(font).run(),
        None => application.run(),
    }
}

/// Resolves the identifier to boot with: CLI override, then the persisted
/// config key, then the sentinel.
fn resolve_boot_identifier(flags: &Flags, config: &config::Config) -> String {
    flags
        .lang
        .clone()
        .or_else(|| config.general.language.clone())
        .unwrap_or_else(|| locale::SENTINEL.to_string())
}

impl Default for App {
    fn default() -> Self {
        let locale = Locale::default();
        let i18n = I18n::new(locale.current());
        Self {
            i18n,
            locale,
            screen: Screen::Home,
            theme_mode: ThemeMode::default(),
            qa_indicator: false,
            selected_identifier: locale::SENTINEL.to_string(),
        }
    }
}

impl App {
    /// Initializes application state from `Flags` and the loaded config.
    fn new(flags: Flags, config: config::Config, locale: Locale) -> (Self, Task<Message>) {
        let i18n = I18n::new(locale.current());

        let boot_identifier = resolve_boot_identifier(&flags, &config);
        let selected_identifier = if locale::is_supported(&boot_identifier) {
            boot_identifier
        } else {
            locale::SENTINEL.to_string()
        };

        let qa_indicator = flags.qa_indicator || config.debug.qa_indicator.unwrap_or(false);

        let app = App {
            i18n,
            locale,
            screen: Screen::Home,
            theme_mode: config.general.theme_mode,
            qa_indicator,
            selected_identifier,
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}
