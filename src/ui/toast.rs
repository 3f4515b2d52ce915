// SPDX-License-Identifier: MPL-2.0
//! Toast cards and the stacked overlay.
//!
//! Toasts are the visual projection of the notification registry: small
//! cards with a kind-colored accent border, stacked bottom-right in
//! creation order. Entry and exit phases render as opacity steps; the
//! remaining time of auto-expiring entries shows as a countdown ring.

use crate::alerts::{AlertStack, Notification, NotificationId, Registry};
use crate::ui::countdown_ring::CountdownRing;
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use crate::ui::styles;
use iced::font::Weight;
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Font, Length, Theme};
use std::time::Instant;

/// Opacity applied while a toast slides in.
const ENTERING_ALPHA: f32 = 0.85;
/// Opacity applied while a toast animates out.
const EXITING_ALPHA: f32 = 0.45;

/// Messages emitted by toast cards.
#[derive(Debug, Clone)]
pub enum Message {
    /// The dismiss cross of one toast was pressed.
    Dismiss(NotificationId),
    /// An inline action button was pressed, identified by position.
    Action { id: NotificationId, index: usize },
}

/// Everything the overlay needs to render, read-only.
pub struct ViewContext<'a> {
    pub alerts: &'a Registry,
    pub stack: &'a AlertStack,
    pub now: Instant,
}

/// Renders the toast overlay with all live notifications.
///
/// Positions toasts in the bottom-right corner, stacked vertically in
/// creation order, oldest on top.
pub fn view_overlay(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let toasts: Vec<Element<'_, Message>> = ctx
        .alerts
        .iter()
        .map(|notification| view_card(notification, &ctx))
        .collect();

    if toasts.is_empty() {
        // An empty container that takes no space, so the overlay never
        // swallows clicks when idle.
        Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into()
    } else {
        let toast_column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right);

        Container::new(toast_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into()
    }
}

/// Renders a single toast card.
fn view_card<'a>(notification: &'a Notification, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let id = notification.id();
    let accent = notification.kind().accent();
    let alpha = phase_alpha(ctx.stack, id, ctx.now);

    let glyph = glyph_bubble(notification, accent);

    let mut body = Column::new().spacing(spacing::XXS);
    if let Some(title) = notification.title() {
        body = body.push(
            Text::new(title)
                .size(typography::BODY_LG)
                .font(Font {
                    weight: Weight::Bold,
                    ..Font::default()
                })
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.palette().text),
                }),
        );
    }
    body = body.push(body_text(notification.message()));
    if !notification.actions().is_empty() {
        body = body.push(action_row(notification));
    }

    let dismiss_button = button(Text::new("\u{2715}").size(typography::BODY_SM))
        .on_press(Message::Dismiss(id))
        .padding(spacing::XXS)
        .style(dismiss_button_style);

    let mut side = Column::new()
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Right)
        .push(dismiss_button);

    if let Some(fraction) = ctx.stack.progress(id, ctx.now) {
        side = side.push(CountdownRing::new(accent, fraction).into_element());
    }

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(glyph)
        .push(Container::new(body).width(Length::Fill))
        .push(side);

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| toast_container_style(theme, accent, alpha))
        .into()
}

/// Opacity step for the current presentation phase.
fn phase_alpha(stack: &AlertStack, id: NotificationId, now: Instant) -> f32 {
    if stack.is_exiting(id) {
        EXITING_ALPHA
    } else if stack.is_entering(id, now) {
        ENTERING_ALPHA
    } else {
        opacity::OPAQUE
    }
}

fn body_text(message: &str) -> Text<'_, Theme> {
    Text::new(message)
        .size(typography::BODY)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.palette().text),
        })
}

/// The kind glyph inside a small accent-tinted disc.
fn glyph_bubble<'a>(notification: &Notification, accent: Color) -> Element<'a, Message> {
    let disc = Container::new(
        Text::new(notification.kind().glyph())
            .size(typography::BODY_SM)
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent),
            }),
    )
    .width(sizing::GLYPH_MD)
    .height(sizing::GLYPH_MD)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(move |_theme: &Theme| container::Style {
        background: Some(iced::Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..accent
        })),
        border: iced::Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    });

    Container::new(disc).padding(spacing::XXS).into()
}

/// Inline action buttons, primary first when flagged.
fn action_row(notification: &Notification) -> Element<'_, Message> {
    let id = notification.id();
    let mut row = Row::new().spacing(spacing::XS);

    for (index, action) in notification.actions().iter().enumerate() {
        let style = if action.is_primary() {
            styles::button::primary
        } else {
            styles::button::secondary
        };
        row = row.push(
            button(Text::new(action.label()).size(typography::CAPTION))
                .on_press(Message::Action { id, index })
                .padding([spacing::XXS, spacing::XS])
                .style(style),
        );
    }

    row.into()
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent: Color, alpha: f32) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(Color {
            a: alpha,
            ..bg_color
        })),
        border: iced::Border {
            color: Color { a: alpha, ..accent },
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::Options;

    #[test]
    fn toast_container_style_uses_accent_color() {
        let theme = Theme::Dark;
        let accent = palette::SUCCESS_500;
        let style = toast_container_style(&theme, accent, 1.0);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn exit_phase_fades_the_card() {
        let mut alerts = Registry::new(8, 50);
        let mut stack = AlertStack::new();
        let now = Instant::now();

        let id = alerts.info("fading", Options::default());
        stack.sync(&alerts, now);

        assert_eq!(phase_alpha(&stack, id, now), ENTERING_ALPHA);

        let entered = now + crate::alerts::stack::ENTRY_DURATION;
        assert_eq!(phase_alpha(&stack, id, entered), opacity::OPAQUE);

        stack.begin_exit(id, entered);
        assert_eq!(phase_alpha(&stack, id, entered), EXITING_ALPHA);
    }

    #[test]
    fn unknown_ids_render_fully_opaque() {
        let stack = AlertStack::new();
        let now = Instant::now();
        assert_eq!(
            phase_alpha(&stack, NotificationId::from_seq(404), now),
            opacity::OPAQUE
        );
    }
}
