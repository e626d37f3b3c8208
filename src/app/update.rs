// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.

use super::{persistence, App, Message};
use crate::locale;
use crate::ui::settings;
use iced::Task;

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::SwitchScreen(target) => {
            app.screen = target;
            Task::none()
        }
        Message::Settings(settings_message) => handle_settings_message(app, settings_message),
    }
}

fn handle_settings_message(app: &mut App, message: settings::Message) -> Task<Message> {
    match message {
        settings::Message::LanguagePicked(name) => {
            let identifier = locale::identifier_from_name(&name);
            app.selected_identifier = identifier.to_string();
            persistence::apply_language_change(&mut app.i18n, &mut app.locale, identifier)
        }
        settings::Message::ThemeModePicked(mode) => {
            app.theme_mode = mode;
            persistence::persist_theme_mode(mode)
        }
    }
}
