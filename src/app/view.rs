// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo application.

use super::Message;
use crate::banner::Severity;
use crate::i18n::fluent::I18n;
use crate::manager::Manager;
use crate::ui::Toast;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, Column, Container, Row, Stack, Text};
use iced::{Element, Length};

const SPACING: f32 = 12.0;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub manager: &'a Manager,
}

/// Renders the control panel with the banner overlay on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let severity_buttons = Severity::ALL.into_iter().fold(
        Row::new().spacing(SPACING),
        |row, severity| {
            let label = i18n.tr(&format!("demo-button-{severity}"));
            row.push(button(Text::new(label)).on_press(Message::Show(severity)))
        },
    );

    let extra_buttons = Row::new()
        .spacing(SPACING)
        .push(
            button(Text::new(i18n.tr("demo-button-failure"))).on_press(Message::SimulateFailure),
        )
        .push(
            button(Text::new(i18n.tr("demo-button-worker"))).on_press(Message::NotifyFromWorker),
        )
        .push(button(Text::new(i18n.tr("demo-button-dismiss-all"))).on_press(Message::DismissAll));

    let count = ctx.manager.active_count().to_string();
    let panel = Column::new()
        .spacing(SPACING * 2.0)
        .align_x(Horizontal::Center)
        .push(Text::new(i18n.tr("demo-heading")).size(24))
        .push(severity_buttons)
        .push(extra_buttons)
        .push(Text::new(
            i18n.tr_with_args("demo-active-count", &[("count", count.as_str())]),
        ));

    let content = Container::new(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    Stack::new()
        .push(content)
        .push(Toast::view_overlay(ctx.manager).map(Message::Banner))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
