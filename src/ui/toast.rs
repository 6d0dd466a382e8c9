// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering banners.
//!
//! Banners are drawn as layers of a `Stack` covering the parent window. Each
//! layer offsets its card to the banner's current position; while a banner is
//! partly above the window's top edge only its visible part is drawn. Any
//! click on the card (icon, message or close glyph) dismisses it.

use super::design_tokens::{shadow, sizing, spacing};
use crate::banner::{theme, Banner, ThemePreset};
use crate::manager::{Manager, Message};
use iced::alignment::{Horizontal, Vertical};
use iced::font::Weight;
use iced::widget::{mouse_area, Container, Row, Stack, Text};
use iced::{mouse, Color, Element, Font, Length, Padding, Theme};

/// Where a banner lands inside its parent, in parent-relative pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    /// Height of the part below the parent's top edge.
    pub visible_height: f32,
}

/// Computes the visible rectangle of `banner`, or `None` while it is fully hidden.
#[must_use]
pub fn placement(banner: &Banner) -> Option<Placement> {
    let parent = banner.parent();
    let top = banner.y().saturating_sub(parent.y);
    let visible_height = banner.height().saturating_add(top.min(0));
    if visible_height <= 0 {
        return None;
    }
    Some(Placement {
        left: banner.x().saturating_sub(parent.x) as f32,
        top: top.max(0) as f32,
        width: banner.width() as f32,
        visible_height: visible_height as f32,
    })
}

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single banner card.
    pub fn view(banner: &Banner) -> Option<Element<'_, Message>> {
        let placement = placement(banner)?;
        let theme = banner.theme();
        let style = banner.style();
        let text_color = style.text;
        let id = banner.id();

        let icon = Container::new(
            Text::new(style.icon.as_str())
                .font(theme.icon_font.to_font())
                .size(theme.icon_font.size)
                .color(text_color),
        )
        .width(Length::Fixed(theme.icon_size as f32 + spacing::ICON_GUTTER))
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

        let message = Container::new(
            Text::new(banner.message())
                .font(theme.message_font.to_font())
                .size(theme.message_font.size)
                .color(text_color),
        )
        .padding(spacing::MESSAGE)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Left)
        .align_y(Vertical::Center);

        let mut content = Row::new()
            .height(Length::Fill)
            .align_y(Vertical::Center)
            .push(icon)
            .push(message);

        if theme.show_close_button {
            let close = Container::new(
                Text::new("×")
                    .size(sizing::CLOSE_GLYPH)
                    .font(Font {
                        weight: Weight::Bold,
                        ..Font::DEFAULT
                    })
                    .color(text_color),
            )
            .width(Length::Fixed(sizing::CLOSE_WIDTH))
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center);

            content = content.push(
                mouse_area(close)
                    .on_press(Message::Dismiss(id))
                    .interaction(mouse::Interaction::Pointer),
            );
        }

        let background = style.background;
        let radius = theme.corner_radius;
        let with_shadow = theme.enable_shadow;
        let card = Container::new(content)
            .width(Length::Fixed(placement.width))
            .height(Length::Fixed(placement.visible_height))
            .clip(true)
            .style(move |_theme: &Theme| {
                banner_container_style(background, text_color, radius, with_shadow)
            });

        let clickable = mouse_area(card)
            .on_press(Message::Dismiss(id))
            .interaction(mouse::Interaction::Pointer);

        Some(
            Container::new(clickable)
                .padding(Padding {
                    top: placement.top,
                    right: 0.0,
                    bottom: 0.0,
                    left: placement.left,
                })
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
        )
    }

    /// Cards of every banner with a visible part, bottom layer first.
    pub fn layers(manager: &Manager) -> Vec<Element<'_, Message>> {
        manager.visible().filter_map(Self::view).collect()
    }

    /// Renders every banner of `manager` as stacked layers over the parent.
    pub fn view_overlay(manager: &Manager) -> Element<'_, Message> {
        Stack::with_children(Self::layers(manager))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

/// Style function for the banner card.
fn banner_container_style(
    background: Color,
    text_color: Color,
    radius: f32,
    with_shadow: bool,
) -> iced::widget::container::Style {
    iced::widget::container::Style {
        background: Some(iced::Background::Color(background)),
        border: iced::Border {
            radius: radius.into(),
            ..Default::default()
        },
        shadow: if with_shadow {
            shadow::BANNER
        } else {
            shadow::NONE
        },
        text_color: Some(text_color),
        ..Default::default()
    }
}

/// Application theme matching a banner preset.
#[must_use]
pub fn app_theme(preset: ThemePreset) -> Theme {
    match preset {
        ThemePreset::Dark => Theme::Dark,
        ThemePreset::System => {
            if theme::desktop_prefers_dark() {
                Theme::Dark
            } else {
                Theme::Light
            }
        }
        ThemePreset::Standard | ThemePreset::Minimal => Theme::Light,
    }
}
