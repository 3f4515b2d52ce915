// SPDX-License-Identifier: MPL-2.0
//! Settings screen: display language, theme mode, and the toast cap.
//!
//! The language row offers one button per embedded locale, the current one
//! highlighted. The toast cap is a free-form input committed on Enter; an
//! out-of-range or non-numeric value shows an inline error and changes
//! nothing until corrected.

use crate::app::config::{MAX_MAX_ACTIVE, MIN_MAX_ACTIVE};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, text_input, Column, Container, Row, Text};
use iced::{Element, Length};
use unic_langid::LanguageIdentifier;

/// State owned by the settings screen.
#[derive(Debug, Clone)]
pub struct State {
    max_active_input: String,
    invalid: bool,
}

impl State {
    /// Seeds the input field from the configured toast cap.
    #[must_use]
    pub fn new(max_active: usize) -> Self {
        Self {
            max_active_input: max_active.to_string(),
            invalid: false,
        }
    }

    #[must_use]
    pub fn max_active_input(&self) -> &str {
        &self.max_active_input
    }

    #[must_use]
    pub fn is_invalid(&self) -> bool {
        self.invalid
    }
}

/// Contextual data needed to render the settings screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub theme_mode: ThemeMode,
}

/// Messages emitted by the settings screen.
#[derive(Debug, Clone)]
pub enum Message {
    LanguageSelected(LanguageIdentifier),
    ThemeModeSelected(ThemeMode),
    MaxActiveInputChanged(String),
    MaxActiveSubmitted,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    LanguageSelected(LanguageIdentifier),
    ThemeModeSelected(ThemeMode),
    MaxActiveChanged(u32),
}

/// Process a settings screen message and return the corresponding event.
pub fn update(message: Message, state: &mut State) -> Event {
    match message {
        Message::LanguageSelected(locale) => Event::LanguageSelected(locale),
        Message::ThemeModeSelected(mode) => Event::ThemeModeSelected(mode),
        Message::MaxActiveInputChanged(value) => {
            state.max_active_input = value;
            state.invalid = false;
            Event::None
        }
        Message::MaxActiveSubmitted => match state.max_active_input.trim().parse::<u32>() {
            Ok(value) if (MIN_MAX_ACTIVE..=MAX_MAX_ACTIVE).contains(&value) => {
                state.invalid = false;
                state.max_active_input = value.to_string();
                Event::MaxActiveChanged(value)
            }
            _ => {
                state.invalid = true;
                Event::None
            }
        },
    }
}

/// Render the settings screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("settings-title")).size(typography::TITLE_MD);

    Container::new(
        Column::new()
            .spacing(spacing::LG)
            .padding(spacing::LG)
            .max_width(720.0)
            .push(title)
            .push(build_language_section(&ctx))
            .push(build_theme_section(&ctx))
            .push(build_max_active_section(&ctx)),
    )
    .width(Length::Fill)
    .center_x(Length::Fill)
    .into()
}

/// One button per embedded locale, the active one highlighted.
fn build_language_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let label = Text::new(ctx.i18n.tr("settings-language-label")).size(typography::BODY_LG);

    let mut row = Row::new().spacing(spacing::SM);
    for locale in ctx.i18n.available_locales() {
        // Prefer the locale's self-description, e.g. "language-name-fr".
        let translated_name = ctx.i18n.tr(&format!("language-name-{locale}"));
        let button_text = if translated_name.starts_with("MISSING:") {
            locale.to_string()
        } else {
            translated_name
        };

        let entry =
            button(Text::new(button_text).size(typography::BODY)).padding([spacing::XS, spacing::SM]);
        let entry = if ctx.i18n.current_locale() == locale {
            entry.style(styles::button::selected)
        } else {
            entry
                .on_press(Message::LanguageSelected(locale.clone()))
                .style(styles::button::secondary)
        };
        row = row.push(entry);
    }

    section(Column::new().spacing(spacing::SM).push(label).push(row))
}

/// Theme mode picker: system, light, dark.
fn build_theme_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let label = Text::new(ctx.i18n.tr("settings-theme-label")).size(typography::BODY_LG);

    let mut row = Row::new().spacing(spacing::SM);
    for mode in ThemeMode::ALL {
        let entry = button(Text::new(ctx.i18n.tr(mode.label_key())).size(typography::BODY))
            .padding([spacing::XS, spacing::SM]);
        let entry = if mode == ctx.theme_mode {
            entry.style(styles::button::selected)
        } else {
            entry
                .on_press(Message::ThemeModeSelected(mode))
                .style(styles::button::secondary)
        };
        row = row.push(entry);
    }

    section(Column::new().spacing(spacing::SM).push(label).push(row))
}

/// Numeric input for the toast cap, validated on submit.
fn build_max_active_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let label = Text::new(ctx.i18n.tr("settings-max-active-label")).size(typography::BODY_LG);

    let input = text_input("8", ctx.state.max_active_input())
        .on_input(Message::MaxActiveInputChanged)
        .on_submit(Message::MaxActiveSubmitted)
        .padding(spacing::XS)
        .size(typography::BODY)
        .width(Length::Fixed(sizing::SETTINGS_INPUT_WIDTH));

    let hint = Text::new(ctx.i18n.tr("settings-max-active-hint"))
        .size(typography::CAPTION)
        .color(palette::GRAY_400);

    let mut column = Column::new()
        .spacing(spacing::SM)
        .push(label)
        .push(input)
        .push(hint);

    if ctx.state.is_invalid() {
        let min = MIN_MAX_ACTIVE.to_string();
        let max = MAX_MAX_ACTIVE.to_string();
        let error_text = ctx.i18n.tr_with_args(
            "settings-invalid-number",
            &[("min", &min), ("max", &max)],
        );
        column = column.push(
            Text::new(error_text)
                .size(typography::CAPTION)
                .color(palette::ERROR_500),
        );
    }

    section(column)
}

fn section<'a>(content: Column<'a, Message>) -> Element<'a, Message> {
    Container::new(content)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::panel)
        .into()
}
