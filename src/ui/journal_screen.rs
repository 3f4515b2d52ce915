// SPDX-License-Identifier: MPL-2.0
//! Journal screen module listing the noteworthy alerts of this session.
//!
//! Entries come straight from the in-memory [`Journal`]; nothing here
//! survives a restart. Rows are shown newest first so the most recent
//! incident is always at the top.

use crate::i18n::fluent::I18n;
use crate::journal::{Journal, JournalEntry};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::font::Weight;
use iced::widget::{button, scrollable, Column, Container, Row, Space, Text};
use iced::{alignment::Vertical, Element, Font, Length};

/// Contextual data needed to render the journal screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub journal: &'a Journal,
}

/// Messages emitted by the journal screen.
#[derive(Debug, Clone)]
pub enum Message {
    Clear,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    Clear,
}

/// Process a journal screen message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::Clear => Event::Clear,
    }
}

/// Render the journal screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("journal-title")).size(typography::TITLE_MD);

    let count = ctx.journal.len().to_string();
    let count_text = Text::new(ctx.i18n.tr_with_args("journal-count", &[("count", &count)]))
        .size(typography::BODY);

    let clear_button = {
        let label = Text::new(ctx.i18n.tr("journal-clear")).size(typography::BODY);
        let base = button(label)
            .padding([spacing::XS, spacing::SM])
            .style(styles::button::secondary);
        if ctx.journal.is_empty() {
            base
        } else {
            base.on_press(Message::Clear)
        }
    };

    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(count_text)
        .push(Space::new().width(Length::Fill))
        .push(clear_button);

    let body: Element<'a, Message> = if ctx.journal.is_empty() {
        Text::new(ctx.i18n.tr("journal-empty"))
            .size(typography::BODY)
            .into()
    } else {
        let mut rows = Column::new().spacing(spacing::XS);
        for entry in ctx.journal.iter_newest_first() {
            rows = rows.push(entry_row(entry));
        }
        scrollable(rows).height(Length::Fill).into()
    };

    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .padding(spacing::LG)
            .max_width(720.0)
            .push(title)
            .push(header)
            .push(body),
    )
    .width(Length::Fill)
    .center_x(Length::Fill)
    .into()
}

/// One journal row: timestamp, kind glyph, then title and message.
fn entry_row<'a>(entry: &'a JournalEntry) -> Element<'a, Message> {
    let time = Text::new(entry.at().format("%H:%M:%S").to_string())
        .size(typography::CAPTION)
        .width(Length::Fixed(70.0));

    let glyph = Text::new(entry.kind().glyph())
        .size(typography::BODY)
        .color(entry.kind().accent())
        .width(Length::Fixed(24.0));

    let mut body = Column::new().spacing(spacing::XXS);
    if let Some(title) = entry.title() {
        body = body.push(Text::new(title).size(typography::BODY).font(Font {
            weight: Weight::Bold,
            ..Font::default()
        }));
    }
    body = body.push(Text::new(entry.message()).size(typography::BODY));

    Container::new(
        Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Top)
            .push(time)
            .push(glyph)
            .push(body),
    )
    .padding(spacing::SM)
    .width(Length::Fill)
    .style(styles::container::panel)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::Kind;

    #[test]
    fn clear_message_maps_to_clear_event() {
        assert!(matches!(update(&Message::Clear), Event::Clear));
    }

    #[test]
    fn journal_view_renders_empty() {
        let i18n = I18n::default();
        let journal = Journal::new(10);
        let ctx = ViewContext {
            i18n: &i18n,
            journal: &journal,
        };
        let _element = view(ctx);
    }

    #[test]
    fn journal_view_renders_entries() {
        let i18n = I18n::default();
        let mut journal = Journal::new(10);
        journal.record(Kind::Grid, Some("Zone incident"), "Feeder 12 tripped");
        journal.record(Kind::Error, None, "Network failure");
        let ctx = ViewContext {
            i18n: &i18n,
            journal: &journal,
        };
        let _element = view(ctx);
    }
}
