// SPDX-License-Identifier: MPL-2.0
//! Modal confirmation dialog.
//!
//! Rendered over the whole screen while the confirmation gate holds a
//! request: a dimmed, click-to-cancel backdrop with a centered card. The
//! card stays visible through the gate's short leave transition.

use crate::alerts::{ConfirmGate, ConfirmKind, ConfirmRequest};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::font::Weight;
use iced::widget::{button, mouse_area, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Font, Length, Theme};

/// Messages emitted by the dialog.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// The affirmative button was pressed.
    Confirm,
    /// The cancel button was pressed.
    Cancel,
    /// Click on the dimmed area outside the card; treated as cancel.
    Backdrop,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gate: &'a ConfirmGate,
}

/// Accent color for the card border and title, by confirmation weight.
#[must_use]
pub fn accent(kind: ConfirmKind) -> Color {
    match kind {
        ConfirmKind::Info => palette::INFO_500,
        ConfirmKind::Warning => palette::WARNING_500,
        ConfirmKind::Danger => palette::ERROR_500,
    }
}

/// Renders the dialog layer, or `None` while the gate is closed.
pub fn view<'a>(ctx: ViewContext<'a>) -> Option<Element<'a, Message>> {
    let request = ctx.gate.current()?;
    let leaving = ctx.gate.is_leaving();

    let card = view_card(request, ctx.i18n, leaving);

    // Dim everything behind the card; a click out there cancels. The card
    // sits on top of the backdrop so its own clicks never fall through.
    let backdrop = mouse_area(
        Container::new(text(""))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::backdrop),
    )
    .on_press(Message::Backdrop);

    let centered_card = Container::new(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    Some(
        iced::widget::Stack::new()
            .push(backdrop)
            .push(centered_card)
            .into(),
    )
}

fn view_card<'a>(request: &'a ConfirmRequest, i18n: &'a I18n, leaving: bool) -> Element<'a, Message> {
    let kind = request.kind();
    let accent_color = accent(kind);

    let title = Text::new(request.title())
        .size(typography::TITLE_MD)
        .font(Font {
            weight: Weight::Bold,
            ..Font::default()
        })
        .style(move |_theme: &Theme| text::Style {
            color: Some(accent_color),
        });

    let message = Text::new(request.message())
        .size(typography::BODY)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.palette().text),
        });

    let cancel_label = request
        .cancel_label()
        .map_or_else(|| i18n.tr("confirm-cancel"), str::to_owned);
    let confirm_label = request
        .confirm_label()
        .map_or_else(|| i18n.tr("confirm-confirm"), str::to_owned);

    let confirm_style = match kind {
        ConfirmKind::Danger => styles::button::danger,
        ConfirmKind::Info | ConfirmKind::Warning => styles::button::primary,
    };

    let mut cancel_button = button(Text::new(cancel_label).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::secondary);
    let mut confirm_button = button(Text::new(confirm_label).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(confirm_style);

    // While the card animates out the gate ignores answers anyway; leaving
    // the buttons inert makes that visible.
    if !leaving {
        cancel_button = cancel_button.on_press(Message::Cancel);
        confirm_button = confirm_button.on_press(Message::Confirm);
    }

    let buttons = Row::new()
        .spacing(spacing::SM)
        .push(cancel_button)
        .push(confirm_button);

    let content = Column::new()
        .spacing(spacing::MD)
        .push(title)
        .push(message)
        .push(
            Container::new(buttons)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Right),
        );

    Container::new(content)
        .width(Length::Fixed(sizing::DIALOG_WIDTH))
        .padding(spacing::LG)
        .style(move |theme: &Theme| styles::container::dialog(theme, accent_color))
        .into()
}
