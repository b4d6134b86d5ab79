// SPDX-License-Identifier: MPL-2.0
//! Year picker panel listing every year with artwork.

use crate::calendar::SUPPORTED_YEARS;
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::viewer::component::Message;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{Alignment, Element, Length};

/// Years per row.
const COLUMNS: usize = 3;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub selected_year: i32,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("year-picker-title")).size(typography::TITLE_SM);

    let mut grid = Column::new().spacing(spacing::XS);
    for chunk in SUPPORTED_YEARS.chunks(COLUMNS) {
        let row = chunk.iter().fold(Row::new().spacing(spacing::XS), |row, &year| {
            let style = if year == ctx.selected_year {
                styles::button::selected
            } else {
                styles::button::unselected
            };
            row.push(
                button(
                    Text::new(year.to_string())
                        .size(typography::TITLE_SM)
                        .width(Length::Fill)
                        .align_x(Alignment::Center),
                )
                .width(Length::Fill)
                .on_press(Message::SelectYear(year))
                .style(style),
            )
        });
        grid = grid.push(row);
    }

    let close = button(Text::new(ctx.i18n.tr("close-button")))
        .on_press(Message::CloseOverlay)
        .style(styles::button::link);

    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .align_x(Alignment::Center)
            .push(title)
            .push(grid)
            .push(close),
    )
    .width(Length::Fixed(sizing::PANEL_WIDTH))
    .padding(spacing::LG)
    .style(styles::container::panel)
    .into()
}
