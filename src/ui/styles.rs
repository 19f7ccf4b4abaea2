// SPDX-License-Identifier: MPL-2.0
//! Centralized widget styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

/// Primary action button (submit).
pub fn primary_button(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: palette::WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: palette::WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_700
            })),
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::WHITE
            },
            border: Border {
                color: palette::GRAY_700,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Dashed-look drop zone. Highlighted while a file hovers over the window.
pub fn drop_zone(highlighted: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let accent = if highlighted {
            palette::PRIMARY_400
        } else {
            palette::GRAY_400
        };
        container::Style {
            background: Some(Background::Color(Color {
                a: if highlighted {
                    opacity::OVERLAY_SUBTLE
                } else {
                    0.0
                },
                ..palette::PRIMARY_500
            })),
            border: Border {
                color: accent,
                width: border::WIDTH_MD,
                radius: radius::LG.into(),
            },
            text_color: Some(theme.palette().text),
            ..Default::default()
        }
    }
}

/// Result panel, accented by outcome.
pub fn result_panel(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..accent
        })),
        border: Border {
            color: accent,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        text_color: Some(theme.palette().text),
        shadow: shadow::SM,
        ..Default::default()
    }
}
