// SPDX-License-Identifier: MPL-2.0
//! Top navigation bar with the screen tabs and a live alert counter.
//!
//! The bar shows the application title on the left, one tab per screen,
//! and a badge on the right with the number of toasts currently on screen.

use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, spacing, typography};
use crate::ui::styles;
use iced::font::Weight;
use iced::widget::{button, container, Container, Row, Space, Text};
use iced::{
    alignment::Vertical, Background, Border, Color, Element, Font, Length, Theme,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub current: Screen,
    /// Number of toasts currently on screen (shown as a badge).
    pub alert_count: usize,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ScreenSelected(Screen),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    NavigateTo(Screen),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::ScreenSelected(screen) => Event::NavigateTo(screen),
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("app-title"))
        .size(typography::TITLE_SM)
        .font(Font {
            weight: Weight::Bold,
            ..Font::default()
        });

    let mut row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(title)
        .push(Space::new().width(Length::Fixed(spacing::MD)));

    for screen in Screen::ALL {
        row = row.push(screen_tab(ctx.i18n, screen, ctx.current));
    }

    row = row.push(Space::new().width(Length::Fill));
    if ctx.alert_count > 0 {
        row = row.push(alert_badge(ctx.alert_count));
    }

    Container::new(row)
        .width(Length::Fill)
        .style(bar_style)
        .into()
}

/// Build one screen tab, highlighted when it is the current screen.
fn screen_tab<'a>(i18n: &I18n, screen: Screen, current: Screen) -> Element<'a, Message> {
    let label = Text::new(i18n.tr(screen.label_key())).size(typography::BODY);

    let tab = button(label).padding([spacing::XS, spacing::SM]);
    let tab = if screen == current {
        tab.style(styles::button::selected)
    } else {
        tab.on_press(Message::ScreenSelected(screen))
            .style(styles::button::secondary)
    };

    tab.into()
}

/// Build the pending-alert badge shown on the right of the bar.
fn alert_badge<'a>(count: usize) -> Element<'a, Message> {
    let label = Text::new(count.to_string())
        .size(typography::CAPTION)
        .color(palette::WHITE)
        .font(Font {
            weight: Weight::Bold,
            ..Font::default()
        });

    Container::new(label)
        .padding([spacing::XXS, spacing::SM])
        .style(badge_style)
        .into()
}

/// Style function for the bar surface.
fn bar_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.weak.color.into()),
        border: Border {
            width: 1.0,
            color: palette.background.strong.color,
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Style function for the alert count badge.
fn badge_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::WARNING_500)),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        text_color: Some(Color::WHITE),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_view_renders() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            current: Screen::Operations,
            alert_count: 0,
        };
        let _element = view(ctx);
    }

    #[test]
    fn navbar_view_renders_with_badge() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            current: Screen::Journal,
            alert_count: 5,
        };
        let _element = view(ctx);
    }

    #[test]
    fn screen_selection_emits_navigation_event() {
        let event = update(Message::ScreenSelected(Screen::Settings));
        assert!(matches!(event, Event::NavigateTo(Screen::Settings)));
    }
}
