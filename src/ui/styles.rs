// SPDX-License-Identifier: MPL-2.0
//! Centralized widget styles shared across screens.

pub mod button {
    use crate::ui::design_tokens::{
        palette::{self, WHITE},
        radius, shadow,
    };
    use iced::widget::button;
    use iced::{Background, Border, Color, Theme};

    /// Primary action button (confirm, save, raise).
    pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
        match status {
            button::Status::Active | button::Status::Pressed => button::Style {
                background: Some(Background::Color(palette::PRIMARY_500)),
                text_color: WHITE,
                border: Border {
                    color: palette::PRIMARY_600,
                    width: 1.0,
                    radius: radius::SM.into(),
                },
                shadow: shadow::SM,
                snap: true,
            },
            button::Status::Hovered => button::Style {
                background: Some(Background::Color(palette::PRIMARY_400)),
                text_color: WHITE,
                border: Border {
                    color: palette::PRIMARY_500,
                    width: 1.0,
                    radius: radius::SM.into(),
                },
                shadow: shadow::MD,
                snap: true,
            },
            button::Status::Disabled => button::Style {
                background: Some(Background::Color(palette::GRAY_200)),
                text_color: palette::GRAY_400,
                border: Border {
                    color: palette::GRAY_400,
                    width: 1.0,
                    radius: radius::SM.into(),
                },
                shadow: shadow::NONE,
                snap: true,
            },
        }
    }

    /// Destructive confirm button (load shedding, cutoffs).
    pub fn danger(_theme: &Theme, status: button::Status) -> button::Style {
        let bg = match status {
            button::Status::Hovered => Color {
                r: (palette::ERROR_500.r + 0.08).min(1.0),
                ..palette::ERROR_500
            },
            _ => palette::ERROR_500,
        };

        match status {
            button::Status::Disabled => button::Style {
                background: Some(Background::Color(palette::GRAY_200)),
                text_color: palette::GRAY_400,
                border: Border {
                    color: palette::GRAY_400,
                    width: 1.0,
                    radius: radius::SM.into(),
                },
                shadow: shadow::NONE,
                snap: true,
            },
            _ => button::Style {
                background: Some(Background::Color(bg)),
                text_color: WHITE,
                border: Border {
                    color: palette::ERROR_500,
                    width: 1.0,
                    radius: radius::SM.into(),
                },
                shadow: shadow::SM,
                snap: true,
            },
        }
    }

    /// Secondary button: cancel actions, unselected navbar entries,
    /// non-primary toast actions. Adapts to light/dark theme.
    pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
        let is_light = matches!(theme, Theme::Light);

        let (bg_color, text_color, border_color) = if is_light {
            (palette::GRAY_100, palette::GRAY_900, palette::GRAY_400)
        } else {
            (palette::GRAY_700, WHITE, palette::GRAY_400)
        };

        match status {
            button::Status::Active | button::Status::Pressed => button::Style {
                background: Some(Background::Color(bg_color)),
                text_color,
                border: Border {
                    color: border_color,
                    width: 1.0,
                    radius: radius::SM.into(),
                },
                shadow: shadow::NONE,
                snap: true,
            },
            button::Status::Hovered => {
                let hover_bg = if is_light {
                    palette::GRAY_200
                } else {
                    Color::from_rgb(0.35, 0.35, 0.35)
                };
                button::Style {
                    background: Some(Background::Color(hover_bg)),
                    text_color,
                    border: Border {
                        color: palette::PRIMARY_500,
                        width: 1.0,
                        radius: radius::SM.into(),
                    },
                    shadow: shadow::SM,
                    snap: true,
                }
            }
            button::Status::Disabled => button::Style {
                background: Some(Background::Color(if is_light {
                    palette::GRAY_100
                } else {
                    palette::GRAY_700
                })),
                text_color: palette::GRAY_400,
                border: Border {
                    color: palette::GRAY_400,
                    width: 1.0,
                    radius: radius::SM.into(),
                },
                shadow: shadow::NONE,
                snap: true,
            },
        }
    }

    /// Selected state for toggle groups (the active navbar entry).
    /// Reuses the brand colors so the selection reads the same in both themes.
    pub fn selected(theme: &Theme, status: button::Status) -> button::Style {
        // Selection ignores hover feedback; the entry is already chosen.
        match status {
            button::Status::Disabled => secondary(theme, status),
            _ => primary(theme, button::Status::Active),
        }
    }

}

pub mod container {
    use crate::ui::design_tokens::{opacity, palette, radius, shadow};
    use iced::widget::container;
    use iced::{Background, Border, Color, Theme};

    /// Generic panel surface used for the settings form and journal rows.
    ///
    /// The color is derived from the active Iced `Theme` background, with a
    /// slight opacity, so panels stay readable in both light and dark modes
    /// without hard-coding colors.
    pub fn panel(theme: &Theme) -> container::Style {
        let palette = theme.extended_palette();
        let base = palette.background.base.color;

        container::Style {
            background: Some(Background::Color(Color::from_rgba(
                base.r,
                base.g,
                base.b,
                opacity::SURFACE,
            ))),
            border: Border {
                radius: radius::LG.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Full-screen dim layer behind the confirmation dialog.
    pub fn backdrop(_theme: &Theme) -> container::Style {
        container::Style {
            background: Some(Background::Color(Color {
                a: opacity::BACKDROP,
                ..palette::BLACK
            })),
            ..Default::default()
        }
    }

    /// The confirmation dialog card, with an accent border per kind.
    pub fn dialog(theme: &Theme, accent: Color) -> container::Style {
        let base = theme.extended_palette().background.base.color;

        container::Style {
            background: Some(Background::Color(base)),
            border: Border {
                color: accent,
                width: crate::ui::design_tokens::border::WIDTH_MD,
                radius: radius::LG.into(),
            },
            shadow: shadow::LG,
            text_color: Some(theme.palette().text),
            ..Default::default()
        }
    }

}
