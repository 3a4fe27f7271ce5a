// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are the visual representation of entries, appearing as small
//! cards with a variant-colored accent and a dismiss button.

use super::engine::Engine;
use super::entry::NotificationEntry;
use super::host::Message;
use super::options::Position;
use super::request::{ToastKind, Variant};
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Visual treatment of one rendering path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToastStyle {
    pub accent: Color,
    pub glyph: &'static str,
}

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Resolves the visual treatment of a variant.
    #[must_use]
    pub fn style_for(variant: Variant) -> ToastStyle {
        match variant.kind() {
            ToastKind::Success => ToastStyle {
                accent: palette::SUCCESS_500,
                glyph: "✓",
            },
            ToastKind::Error => ToastStyle {
                accent: palette::ERROR_500,
                glyph: "!",
            },
        }
    }

    /// Renders a single toast at the given opacity.
    pub fn view(entry: &NotificationEntry, alpha: f32) -> Element<'_, Message> {
        let style = Self::style_for(entry.variant());
        let accent = fade(style.accent, alpha);

        let icon_widget = Text::new(style.glyph)
            .size(sizing::ICON_MD)
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent),
            });

        let message_widget = Text::new(entry.display_text())
            .size(typography::BODY)
            .style(move |theme: &Theme| text::Style {
                color: Some(fade(theme.palette().text, alpha)),
            });

        let dismiss_button = button(Text::new("×").size(sizing::ICON_SM))
            .on_press(Message::Dismiss(entry.id()))
            .padding(spacing::XXS)
            .style(move |theme: &Theme, status| dismiss_button_style(theme, status, alpha));

        // Layout: [icon] [message] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(icon_widget).padding(spacing::XXS))
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent, alpha))
            .into()
    }

    /// Renders the toast overlay with every entry holding a visible slot.
    ///
    /// Toasts are stacked vertically in engine order at the configured anchor.
    pub fn view_overlay(engine: &Engine) -> Element<'_, Message> {
        let toasts: Vec<Element<'_, Message>> = engine
            .entries()
            .map(|entry| Self::view(entry, engine.opacity(entry)))
            .collect();

        if toasts.is_empty() {
            // Return an empty container that takes no space
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let (horizontal, vertical) = anchor(engine.options().position);
        let toast_column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(horizontal);

        Container::new(toast_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(horizontal)
            .align_y(vertical)
            .padding(spacing::MD)
            .into()
    }
}

/// Maps a screen anchor onto container alignment.
fn anchor(position: Position) -> (alignment::Horizontal, alignment::Vertical) {
    let vertical = if position.is_top() {
        alignment::Vertical::Top
    } else {
        alignment::Vertical::Bottom
    };
    let horizontal = match position {
        Position::TopLeft | Position::BottomLeft => alignment::Horizontal::Left,
        Position::TopCenter | Position::BottomCenter => alignment::Horizontal::Center,
        Position::TopRight | Position::BottomRight => alignment::Horizontal::Right,
    };
    (horizontal, vertical)
}

fn fade(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha.clamp(opacity::TRANSPARENT, opacity::OPAQUE),
        ..color
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color, alpha: f32) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(fade(bg_color, alpha))),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: iced::Shadow {
            color: fade(shadow::MD.color, alpha * opacity::OVERLAY_MEDIUM),
            ..shadow::MD
        },
        text_color: Some(fade(theme.palette().text, alpha)),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status, alpha: f32) -> button::Style {
    let base = theme.extended_palette().background.base;
    let text_color = fade(base.text, alpha);

    let hover_background = |level: f32| {
        Some(iced::Background::Color(Color {
            a: level * alpha,
            ..palette::GRAY_400
        }))
    };

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: hover_background(opacity::OVERLAY_SUBTLE),
            text_color,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: hover_background(opacity::OVERLAY_MEDIUM),
            text_color,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: fade(base.text, alpha * opacity::OVERLAY_MEDIUM),
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_container_style_uses_accent_color() {
        let theme = Theme::Dark;
        let accent = palette::SUCCESS_500;
        let style = toast_container_style(&theme, accent, 1.0);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn destructive_variant_uses_error_accent() {
        assert_eq!(
            Toast::style_for(Variant::Destructive).accent,
            palette::ERROR_500
        );
        assert_eq!(Toast::style_for(Variant::Default).accent, palette::SUCCESS_500);
        assert_ne!(
            Toast::style_for(Variant::Destructive).glyph,
            Toast::style_for(Variant::Default).glyph
        );
    }

    #[test]
    fn fade_scales_alpha_only() {
        let faded = fade(palette::SUCCESS_500, 0.5);
        assert_eq!(faded.r, palette::SUCCESS_500.r);
        assert!((faded.a - 0.5).abs() < 1e-6);
        assert_eq!(fade(palette::WHITE, 3.0).a, 1.0);
    }

    #[test]
    fn anchor_matches_position() {
        assert_eq!(
            anchor(Position::BottomRight),
            (alignment::Horizontal::Right, alignment::Vertical::Bottom)
        );
        assert_eq!(
            anchor(Position::TopCenter),
            (alignment::Horizontal::Center, alignment::Vertical::Top)
        );
        assert_eq!(
            anchor(Position::BottomLeft),
            (alignment::Horizontal::Left, alignment::Vertical::Bottom)
        );
    }

    #[test]
    fn dismiss_button_fades_with_toast() {
        let theme = Theme::Light;
        let style = dismiss_button_style(&theme, button::Status::Active, 0.25);
        assert!((style.text_color.a - 0.25).abs() < 1e-6);
    }
}
