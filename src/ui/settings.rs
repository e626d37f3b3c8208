// SPDX-License-Identifier: MPL-2.0
//! The settings screen: language picker and theme mode.
//!
//! The language picker works entirely in display names. The picked name is
//! translated back to a locale identifier by the update loop, so an
//! unrecognized or localized label simply resolves to the system default.

use crate::i18n::fluent::I18n;
use crate::locale::{self, Locale};
use crate::ui::chrome::Direction;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, pick_list, Button, Column, Row, Text};
use iced::{Element, Length};

/// Contextual data needed to render the settings screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub locale: &'a Locale,
    /// Identifier the user picked (possibly the sentinel), as persisted.
    pub selected_identifier: &'a str,
    pub theme_mode: ThemeMode,
    pub direction: Direction,
}

/// Messages emitted by the settings screen.
#[derive(Debug, Clone)]
pub enum Message {
    /// A display name was chosen from the language picker.
    LanguagePicked(String),
    ThemeModePicked(ThemeMode),
}

/// Render the settings screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("settings-title")).size(30);

    let system_default_label = ctx.i18n.tr("common-system-default");
    let selected_name = if ctx.selected_identifier == locale::SENTINEL {
        system_default_label.clone()
    } else {
        locale::display_name(ctx.selected_identifier)
            .map(str::to_string)
            .unwrap_or_else(|| system_default_label.clone())
    };

    // Recomputed on every render so the list reflects the active UI language.
    let names = locale::language_names(&system_default_label);

    let language_section = Column::new()
        .push(Text::new(ctx.i18n.tr("settings-language-label")))
        .push(pick_list(names, Some(selected_name), Message::LanguagePicked))
        .push(Text::new(ctx.i18n.tr("settings-language-restart-hint")).size(12))
        .spacing(8);

    let theme_section = Column::new()
        .push(Text::new(ctx.i18n.tr("settings-theme-label")))
        .push(theme_row(ctx.i18n, ctx.theme_mode, ctx.direction))
        .spacing(8);

    Column::new()
        .push(title)
        .push(language_section)
        .push(theme_section)
        .spacing(24)
        .padding(24)
        .width(Length::Fill)
        .align_x(ctx.direction.start())
        .into()
}

fn theme_row<'a>(i18n: &'a I18n, active: ThemeMode, direction: Direction) -> Element<'a, Message> {
    let buttons: Vec<Element<'a, Message>> = ThemeMode::ALL
        .iter()
        .map(|mode| theme_button(i18n, *mode, active).into())
        .collect();

    let mut row = Row::new().spacing(8);
    for element in direction.order(buttons) {
        row = row.push(element);
    }
    row.into()
}

fn theme_button<'a>(i18n: &'a I18n, mode: ThemeMode, active: ThemeMode) -> Button<'a, Message> {
    let label = Text::new(i18n.tr(mode.label_key()));
    let styled = if mode == active {
        button(label).style(button::primary)
    } else {
        button(label).style(button::secondary)
    };
    styled.on_press(Message::ThemeModePicked(mode))
}
