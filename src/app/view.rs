// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current
//! screen, with the toast overlay and the confirmation dialog layered on
//! top of it. The overlay layers are ordered so that the dialog, when
//! present, sits above everything including the toasts.

use super::{Message, Screen};
use crate::alerts::{AlertStack, ConfirmGate, Registry};
use crate::i18n::fluent::I18n;
use crate::ui::confirm_dialog::{self, ViewContext as ConfirmViewContext};
use crate::ui::journal_screen::{self, ViewContext as JournalViewContext};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::operations::{self, ViewContext as OperationsViewContext};
use crate::ui::settings::{self, ViewContext as SettingsViewContext};
use crate::ui::theming::ThemeMode;
use crate::ui::toast::{self, ViewContext as ToastViewContext};
use iced::widget::{Column, Container, Stack};
use iced::{Element, Length};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub alerts: &'a Registry,
    pub stack: &'a AlertStack,
    pub gate: &'a ConfirmGate,
    pub operations: &'a operations::State,
    pub settings: &'a settings::State,
    pub theme_mode: ThemeMode,
    pub now: Instant,
}

/// Renders the current screen with the alert overlays stacked on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Operations => view_operations(ctx.i18n, ctx.operations),
        Screen::Journal => view_journal(ctx.i18n, ctx.alerts),
        Screen::Settings => view_settings(ctx.i18n, ctx.settings, ctx.theme_mode),
    };

    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        current: ctx.screen,
        alert_count: ctx.alerts.len(),
    })
    .map(Message::Navbar);

    let base = Column::new()
        .push(navbar_view)
        .push(
            Container::new(current_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill);

    let toasts = toast::view_overlay(ToastViewContext {
        alerts: ctx.alerts,
        stack: ctx.stack,
        now: ctx.now,
    })
    .map(Message::Toast);

    let mut layers = Stack::new().push(base).push(toasts);

    if let Some(dialog) = confirm_dialog::view(ConfirmViewContext {
        i18n: ctx.i18n,
        gate: ctx.gate,
    }) {
        layers = layers.push(dialog.map(Message::Confirm));
    }

    layers.width(Length::Fill).height(Length::Fill).into()
}

fn view_operations<'a>(i18n: &'a I18n, state: &'a operations::State) -> Element<'a, Message> {
    operations::view(OperationsViewContext { i18n, state }).map(Message::Operations)
}

fn view_journal<'a>(i18n: &'a I18n, alerts: &'a Registry) -> Element<'a, Message> {
    journal_screen::view(JournalViewContext {
        i18n,
        journal: alerts.journal(),
    })
    .map(Message::Journal)
}

fn view_settings<'a>(
    i18n: &'a I18n,
    settings: &'a settings::State,
    theme_mode: ThemeMode,
) -> Element<'a, Message> {
    settings::view(SettingsViewContext {
        i18n,
        state: settings,
        theme_mode,
    })
    .map(Message::Settings)
}
