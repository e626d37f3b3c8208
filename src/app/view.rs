// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the active screen and wraps it in the locale-driven window
//! chrome. The chrome call here is the single place the per-window
//! adjustments (RTL mirroring, QA border) are applied.

use super::{App, Message, Screen};
use crate::ui::chrome::{self, Chrome, Direction};
use crate::ui::home;
use crate::ui::settings;
use iced::widget::{button, container, Button, Column, Row, Text};
use iced::{Element, Length};

pub(super) fn view(app: &App) -> Element<'_, Message> {
    let direction = Direction::of(&app.locale);

    let screen_content: Element<'_, Message> = match app.screen {
        Screen::Home => home::view(home::ViewContext {
            i18n: &app.i18n,
            locale: &app.locale,
            direction,
        }),
        Screen::Settings => settings::view(settings::ViewContext {
            i18n: &app.i18n,
            locale: &app.locale,
            selected_identifier: &app.selected_identifier,
            theme_mode: app.theme_mode,
            direction,
        })
        .map(Message::Settings),
    };

    let content = Column::new()
        .push(nav_bar(app, direction))
        .push(screen_content)
        .width(Length::Fill)
        .height(Length::Fill);

    chrome::decorate(content.into(), &Chrome::new(&app.locale, app.qa_indicator))
}

fn nav_bar(app: &App, direction: Direction) -> Element<'_, Message> {
    let entries: Vec<Element<'_, Message>> = [
        (Screen::Home, "nav-home"),
        (Screen::Settings, "nav-settings"),
    ]
    .into_iter()
    .map(|(screen, key)| nav_button(app, screen, key).into())
    .collect();

    let mut row = Row::new().spacing(8);
    for entry in direction.order(entries) {
        row = row.push(entry);
    }

    container(row)
        .width(Length::Fill)
        .padding(8)
        .align_x(direction.start())
        .into()
}

fn nav_button<'a>(app: &'a App, screen: Screen, key: &str) -> Button<'a, Message> {
    let label = Text::new(app.i18n.tr(key));
    let styled = if app.screen == screen {
        button(label).style(button::primary)
    } else {
        button(label).style(button::text)
    };
    styled.on_press(Message::SwitchScreen(screen))
}
