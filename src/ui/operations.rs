// SPDX-License-Identifier: MPL-2.0
//! Operations screen module, the console an operator works from.
//!
//! The screen raises sample alerts for every alert kind, triggers the
//! load-shedding confirmation, and shows how often the toast actions were
//! used. Alert callbacks cannot reach the update loop directly, so the
//! screen owns a command channel: continuations push an [`OperatorCommand`]
//! and the application drains the queue on its next update.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::alerts::Kind;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, scrollable, Column, Container, Row, Text};
use iced::{Element, Length};
use tokio::sync::mpsc;

/// Commands queued by alert callbacks for the application to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorCommand {
    /// Start the simulated load-shedding run.
    LoadShed,
}

/// State owned by the operations screen.
///
/// The channel endpoints stay together here so that a continuation created
/// for one confirmation cannot outlive the screen that consumes its command.
pub struct State {
    command_tx: mpsc::UnboundedSender<OperatorCommand>,
    command_rx: mpsc::UnboundedReceiver<OperatorCommand>,
    ack_count: Arc<AtomicUsize>,
    details_count: Arc<AtomicUsize>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        Self {
            command_tx,
            command_rx,
            ack_count: Arc::new(AtomicUsize::new(0)),
            details_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A sender for callbacks that need to queue an [`OperatorCommand`].
    #[must_use]
    pub fn command_sender(&self) -> mpsc::UnboundedSender<OperatorCommand> {
        self.command_tx.clone()
    }

    /// Takes every queued command. Called by the application after a
    /// confirmation resolves.
    pub fn drain_commands(&mut self) -> Vec<OperatorCommand> {
        let mut commands = Vec::new();
        while let Ok(command) = self.command_rx.try_recv() {
            commands.push(command);
        }
        commands
    }

    /// Shared counter incremented by the grid incident "acknowledge" action.
    #[must_use]
    pub fn acknowledge_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.ack_count)
    }

    /// Shared counter incremented by the fraud "details" action.
    #[must_use]
    pub fn details_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.details_count)
    }

    #[must_use]
    pub fn ack_count(&self) -> usize {
        self.ack_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn details_count(&self) -> usize {
        self.details_count.load(Ordering::Relaxed)
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

/// Contextual data needed to render the operations screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Messages emitted by the operations screen.
#[derive(Debug, Clone)]
pub enum Message {
    RaiseSample(Kind),
    RaiseGridIncident,
    RaiseFraudAlert,
    RequestLoadShed,
    ClearAll,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    RaiseSample(Kind),
    RaiseGridIncident,
    RaiseFraudAlert,
    RequestLoadShed,
    ClearAll,
}

/// Process an operations screen message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::RaiseSample(kind) => Event::RaiseSample(*kind),
        Message::RaiseGridIncident => Event::RaiseGridIncident,
        Message::RaiseFraudAlert => Event::RaiseFraudAlert,
        Message::RequestLoadShed => Event::RequestLoadShed,
        Message::ClearAll => Event::ClearAll,
    }
}

/// Render the operations screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("operations-title")).size(typography::TITLE_MD);
    let intro = Text::new(ctx.i18n.tr("operations-intro")).size(typography::BODY);

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .max_width(720.0)
        .push(title)
        .push(intro)
        .push(build_feeds_section(&ctx))
        .push(build_commands_section(&ctx))
        .push(build_results_section(&ctx));

    scrollable(Container::new(content).width(Length::Fill).center_x(Length::Fill)).into()
}

/// Buttons that raise one transient sample alert per kind.
fn build_feeds_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let heading = Text::new(ctx.i18n.tr("operations-section-feeds")).size(typography::BODY_LG);

    let mut row = Row::new().spacing(spacing::SM);
    for kind in [Kind::Success, Kind::Error, Kind::Warning, Kind::Info] {
        row = row.push(
            button(Text::new(ctx.i18n.tr(kind.label_key())).size(typography::BODY))
                .on_press(Message::RaiseSample(kind))
                .padding([spacing::XS, spacing::SM])
                .style(styles::button::secondary),
        );
    }

    section(Column::new().spacing(spacing::SM).push(heading).push(row))
}

/// Buttons for the grid-specific flows: incidents, fraud cases, shedding.
fn build_commands_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let heading = Text::new(ctx.i18n.tr("operations-section-commands")).size(typography::BODY_LG);

    let grid_button = button(
        Text::new(ctx.i18n.tr("operations-grid-button")).size(typography::BODY),
    )
    .on_press(Message::RaiseGridIncident)
    .padding([spacing::XS, spacing::SM])
    .style(styles::button::primary);

    let fraud_button = button(
        Text::new(ctx.i18n.tr("operations-fraud-button")).size(typography::BODY),
    )
    .on_press(Message::RaiseFraudAlert)
    .padding([spacing::XS, spacing::SM])
    .style(styles::button::primary);

    let load_shed_button = button(
        Text::new(ctx.i18n.tr("operations-load-shed-button")).size(typography::BODY),
    )
    .on_press(Message::RequestLoadShed)
    .padding([spacing::XS, spacing::SM])
    .style(styles::button::danger);

    let clear_button = button(
        Text::new(ctx.i18n.tr("operations-clear-button")).size(typography::BODY),
    )
    .on_press(Message::ClearAll)
    .padding([spacing::XS, spacing::SM])
    .style(styles::button::secondary);

    let row = Row::new()
        .spacing(spacing::SM)
        .push(grid_button)
        .push(fraud_button)
        .push(load_shed_button)
        .push(clear_button);

    section(Column::new().spacing(spacing::SM).push(heading).push(row))
}

/// Counters showing how often the toast actions were pressed.
fn build_results_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let heading = Text::new(ctx.i18n.tr("operations-section-results")).size(typography::BODY_LG);

    let ack = ctx.state.ack_count().to_string();
    let ack_text = ctx
        .i18n
        .tr_with_args("operations-ack-count", &[("count", &ack)]);

    let details = ctx.state.details_count().to_string();
    let details_text = ctx
        .i18n
        .tr_with_args("operations-details-count", &[("count", &details)]);

    section(
        Column::new()
            .spacing(spacing::SM)
            .push(heading)
            .push(Text::new(ack_text).size(typography::BODY))
            .push(Text::new(details_text).size(typography::BODY)),
    )
}

fn section<'a>(content: Column<'a, Message>) -> Element<'a, Message> {
    Container::new(content)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::panel)
        .into()
}
