// SPDX-License-Identifier: MPL-2.0
//! The launcher's home screen.

use crate::i18n::fluent::I18n;
use crate::locale::Locale;
use crate::ui::chrome::Direction;
use iced::widget::{Column, Text};
use iced::{Element, Length};

/// Contextual data needed to render the home screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub locale: &'a Locale,
    pub direction: Direction,
}

/// Render the home screen.
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("home-welcome")).size(36);
    let tagline = Text::new(ctx.i18n.tr("home-tagline"));

    let locale_name = ctx.locale.current().to_string();
    let active_locale = Text::new(
        ctx.i18n
            .tr_with_args("home-active-locale", &[("locale", locale_name.as_str())]),
    )
    .size(14);

    Column::new()
        .push(title)
        .push(tagline)
        .push(active_locale)
        .spacing(12)
        .padding(24)
        .width(Length::Fill)
        .align_x(ctx.direction.start())
        .into()
}
