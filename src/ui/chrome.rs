// SPDX-License-Identifier: MPL-2.0
//! Locale-driven window chrome.
//!
//! The original per-window adjustments (layout mirroring for right-to-left
//! languages, a script-specific font for Thai, a QA border) are applied here
//! by an explicit decorator that the application root view calls on every
//! render, instead of a framework-level window hook. This keeps the
//! dependency on the locale state visible at the call site.

use crate::locale::Locale;
use iced::widget::container;
use iced::{alignment, Border, Color, Element, Font, Length, Theme};

/// Font family used when the active locale is Thai.
pub const THAI_FONT_FAMILY: &str = "Noto Sans Thai";

const QA_BORDER_WIDTH: f32 = 4.0;

/// Horizontal layout direction of the active locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    pub fn of(locale: &Locale) -> Self {
        if locale.right_to_left() {
            Direction::Rtl
        } else {
            Direction::Ltr
        }
    }

    pub fn is_rtl(self) -> bool {
        self == Direction::Rtl
    }

    /// Alignment of the text start edge.
    pub fn start(self) -> alignment::Horizontal {
        match self {
            Direction::Ltr => alignment::Horizontal::Left,
            Direction::Rtl => alignment::Horizontal::Right,
        }
    }

    /// Orders row children so the first child sits at the start edge.
    pub fn order<'a, Message>(self, mut children: Vec<Element<'a, Message>>) -> Vec<Element<'a, Message>> {
        if self.is_rtl() {
            children.reverse();
        }
        children
    }
}

/// Per-window adjustments derived from the locale and runtime flags.
#[derive(Debug, Clone, Copy)]
pub struct Chrome {
    pub direction: Direction,
    /// Draw the QA indicator border. Runtime flag, off in normal use.
    pub qa_indicator: bool,
}

impl Chrome {
    pub fn new(locale: &Locale, qa_indicator: bool) -> Self {
        Self {
            direction: Direction::of(locale),
            qa_indicator,
        }
    }
}

/// Returns the window's default font override, if the active locale needs
/// one. Thai script renders with a dedicated family; every other locale
/// keeps the toolkit default.
pub fn ui_font(locale: &Locale) -> Option<Font> {
    if locale.current().to_string().starts_with("th") {
        Some(Font::with_name(THAI_FONT_FAMILY))
    } else {
        None
    }
}

/// Wraps the root view content with the per-window adjustments.
pub fn decorate<'a, Message: 'a>(
    content: Element<'a, Message>,
    chrome: &Chrome,
) -> Element<'a, Message> {
    let aligned = container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(chrome.direction.start());

    if chrome.qa_indicator {
        container(aligned)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(QA_BORDER_WIDTH)
            .style(qa_border)
            .into()
    } else {
        aligned.into()
    }
}

fn qa_border(_theme: &Theme) -> container::Style {
    container::Style {
        border: Border {
            color: Color::from_rgb(0.8, 0.1, 0.1),
            width: QA_BORDER_WIDTH,
            radius: 0.0.into(),
        },
        ..container::Style::default()
    }
}
