// SPDX-License-Identifier: MPL-2.0
//! Calendar viewer: the page, its header and control bar, and the panels
//! that float above them.

pub mod component;
pub mod controls;
pub mod header;
pub mod info_panel;
pub mod pane;
pub mod subcomponents;
pub mod year_picker;

use self::component::Message;
use crate::ui::design_tokens::spacing;
use crate::ui::styles;
use iced::widget::{button, opaque, Column, Container, Stack};
use iced::{alignment, Element, Length};

/// Already rendered parts of the viewer screen.
pub struct ViewContext<'a> {
    pub header: Element<'a, Message>,
    pub pane: Element<'a, Message>,
    pub controls: Element<'a, Message>,
    pub overlay: Option<Element<'a, Message>>,
}

/// Stacks header, page and controls; an open panel sits centered on a
/// dimmed backdrop that closes it when pressed.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let column = Column::new()
        .spacing(spacing::XS)
        .width(Length::Fill)
        .height(Length::Fill)
        .push(ctx.header)
        .push(ctx.pane)
        .push(ctx.controls);

    let Some(overlay) = ctx.overlay else {
        return column.into();
    };

    let backdrop = button(Container::new("").width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(0)
        .style(styles::button::backdrop)
        .on_press(Message::CloseOverlay);

    let centered = Container::new(opaque(overlay))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(column)
        .push(backdrop)
        .push(centered)
        .into()
}
