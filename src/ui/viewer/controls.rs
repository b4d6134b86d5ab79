// SPDX-License-Identifier: MPL-2.0
//! Control bar under the page: zoom buttons, flip button and the usage hint.

use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::state::ZoomScale;
use crate::ui::styles;
use crate::ui::viewer::component::Message;
use iced::widget::{button, container, tooltip, Column, Container, Row, Text};
use iced::{alignment::Vertical, Alignment, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub can_flip: bool,
    pub is_flipped: bool,
    pub scale: ZoomScale,
    pub hint_key: &'static str,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let zoomed = !ctx.scale.is_min();

    let zoom_out = button(Text::new(i18n.tr("zoom-out")))
        .on_press_maybe(zoomed.then_some(Message::ZoomOut))
        .style(styles::button::unselected);

    let reset = tooltip(
        button(Text::new(format!("{:.0}%", ctx.scale.value() * 100.0)))
            .on_press_maybe(zoomed.then_some(Message::ResetZoom))
            .style(styles::button::link),
        Container::new(Text::new(i18n.tr("zoom-reset")).size(typography::CAPTION))
            .padding(spacing::XXS)
            .style(container::rounded_box),
        tooltip::Position::Top,
    );

    let zoom_in = button(Text::new(i18n.tr("zoom-in")))
        .on_press_maybe((!ctx.scale.is_max()).then_some(Message::ZoomIn))
        .style(styles::button::unselected);

    let mut row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(zoom_out)
        .push(reset)
        .push(zoom_in);

    // The index page has a single face.
    if ctx.can_flip {
        let label = if ctx.is_flipped {
            "flip-to-front"
        } else {
            "flip-to-back"
        };
        row = row.push(
            button(Text::new(i18n.tr(label)))
                .on_press(Message::Flip)
                .style(styles::button::primary),
        );
    }

    let hint = Text::new(i18n.tr(ctx.hint_key)).size(typography::CAPTION);

    Container::new(
        Column::new()
            .spacing(spacing::XS)
            .align_x(Alignment::Center)
            .push(row)
            .push(hint),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .align_x(Alignment::Center)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controls_view_renders() {
        let i18n = I18n::default();
        for (can_flip, scale) in [(true, 1.0), (false, 4.0)] {
            let _element = view(ViewContext {
                i18n: &i18n,
                can_flip,
                is_flipped: false,
                scale: ZoomScale::new(scale),
                hint_key: "hint-touch",
            });
        }
    }
}
