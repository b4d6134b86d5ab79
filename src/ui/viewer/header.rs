// SPDX-License-Identifier: MPL-2.0
//! Header bar: year picker button, page navigation, info button and the
//! month title.

use crate::calendar::MonthDescriptor;
use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::viewer::component::Message;
use iced::widget::{button, container, tooltip, Column, Container, Row, Space, Text};
use iced::{alignment::Vertical, Alignment, Element, Length};

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub year: i32,
    pub page: &'a MonthDescriptor,
    pub year_picker_open: bool,
    pub info_open: bool,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let year_button = with_tooltip(
        toggle_button(
            Text::new(ctx.year.to_string()).size(typography::TITLE_SM),
            ctx.year_picker_open,
            Message::ToggleYearPicker,
        ),
        i18n.tr("nav-year-tooltip"),
    );

    let navigation = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(
            button(Text::new(i18n.tr("nav-previous")))
                .on_press(Message::NavigatePrevious)
                .style(styles::button::unselected),
        )
        .push(
            button(Text::new(i18n.tr("nav-today")))
                .on_press(Message::GoToToday)
                .style(styles::button::primary),
        )
        .push(
            button(Text::new(i18n.tr("nav-next")))
                .on_press(Message::NavigateNext)
                .style(styles::button::unselected),
        );

    let info_button = with_tooltip(
        toggle_button(Text::new("i"), ctx.info_open, Message::ToggleInfo),
        i18n.tr("nav-info-tooltip"),
    );

    let top_row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(year_button)
        .push(Space::new().width(Length::Fill))
        .push(navigation)
        .push(Space::new().width(Length::Fill))
        .push(info_button);

    let title = Text::new(i18n.tr_with_args(
        "month-title",
        &[
            ("month", ctx.page.name.into()),
            ("year", ctx.year.into()),
        ],
    ))
    .size(typography::TITLE_LG);

    let subtitle = Text::new(ctx.page.localized_name).size(typography::BODY);

    let titles = Column::new()
        .align_x(Alignment::Center)
        .width(Length::Fill)
        .push(title)
        .push(subtitle);

    Container::new(
        Column::new()
            .spacing(spacing::XS)
            .push(top_row)
            .push(titles),
    )
    .width(Length::Fill)
    .padding([spacing::SM, spacing::MD])
    .style(styles::container::header)
    .into()
}

/// Button highlighted while the panel it opens is shown.
fn toggle_button<'a>(
    label: Text<'a>,
    active: bool,
    message: Message,
) -> iced::widget::Button<'a, Message> {
    let style = if active {
        styles::button::selected
    } else {
        styles::button::unselected
    };
    button(label).on_press(message).style(style)
}

fn with_tooltip<'a>(
    content: impl Into<Element<'a, Message>>,
    label: String,
) -> Element<'a, Message> {
    tooltip(
        content,
        Container::new(Text::new(label).size(typography::CAPTION))
            .padding(spacing::XXS)
            .style(container::rounded_box),
        tooltip::Position::Bottom,
    )
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Catalog;

    #[test]
    fn header_renders_for_month_and_index_pages() {
        let i18n = I18n::default();
        let pages = Catalog::default().months_for_year(2025);
        for page in [&pages[0], &pages[12]] {
            let _element = view(ViewContext {
                i18n: &i18n,
                year: 2025,
                page,
                year_picker_open: false,
                info_open: true,
            });
        }
    }
}
