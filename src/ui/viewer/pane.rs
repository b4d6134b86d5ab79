// SPDX-License-Identifier: MPL-2.0
//! Viewer pane that renders the calendar page with the loading indicator,
//! the error caption and the front/back badge layered above it.

use crate::i18n::I18n;
use crate::media::ImageData;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use crate::ui::viewer::component::Message;
use crate::ui::viewer::subcomponents::flip::FaceLayout;
use crate::ui::widgets::calendar_canvas::Face;
use crate::ui::widgets::{AnimatedSpinner, CalendarCanvas};
use iced::widget::{Column, Container, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length, Vector,
};

pub struct ViewModel<'a> {
    pub i18n: &'a I18n,
    pub front: Option<ImageData>,
    pub back: Option<ImageData>,
    pub front_layout: FaceLayout,
    pub back_layout: FaceLayout,
    pub is_flipped: bool,
    pub scale: f32,
    pub pan: Vector,
    /// Navigation fade.
    pub opacity: f32,
    pub is_loading: bool,
    pub spinner_rotation: f32,
    /// i18n key of the failure affecting the active face.
    pub failure: Option<&'static str>,
    pub show_badge: bool,
    /// Height of the image area; zero lets the pane fill.
    pub area_height: f32,
    pub colors: &'a ColorScheme,
}

pub fn view(model: ViewModel<'_>) -> Element<'_, Message> {
    let broken = model.failure.is_some() && !model.is_loading;

    let canvas = CalendarCanvas::new(
        Face {
            image: model.front,
            layout: model.front_layout,
        },
        Face {
            image: model.back,
            layout: model.back_layout,
        },
        Message::Pointer,
    )
    .back_on_top(model.is_flipped)
    .zoom(model.scale, model.pan)
    .opacity(model.opacity)
    .broken(broken, model.colors.text_secondary)
    .into_element();

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(canvas);

    if model.is_loading {
        let spinner = AnimatedSpinner::new(model.colors.brand_primary, model.spinner_rotation);
        let caption = Text::new(model.i18n.tr("image-loading"))
            .size(typography::CAPTION)
            .color(model.colors.text_secondary);
        layers = layers.push(centered(
            Column::new()
                .spacing(spacing::XS)
                .align_x(Horizontal::Center)
                .push(spinner.into_element())
                .push(caption),
        ));
    } else if let Some(key) = model.failure {
        let message = Text::new(model.i18n.tr(key))
            .size(typography::BODY)
            .color(model.colors.error);
        layers = layers.push(
            Container::new(message)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::MD)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Bottom),
        );
    }

    if model.show_badge {
        let key = if model.is_flipped {
            "badge-back"
        } else {
            "badge-front"
        };
        let badge = Container::new(Text::new(model.i18n.tr(key)).size(typography::CAPTION))
            .padding([spacing::XXS, spacing::XS])
            .style(styles::container::badge);
        layers = layers.push(
            Container::new(badge)
                .width(Length::Fill)
                .padding(spacing::XS)
                .align_x(Horizontal::Right),
        );
    }

    let height = if model.area_height > 0.0 {
        Length::Fixed(model.area_height)
    } else {
        Length::Fill
    };

    Container::new(layers)
        .width(Length::Fill)
        .height(height)
        .clip(true)
        .style(styles::container::page)
        .into()
}

fn centered<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}
