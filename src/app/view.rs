// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application: the viewer with the toast overlay
//! stacked on top.

use super::Message;
use crate::i18n::I18n;
use crate::ui::notifications::{self, Toast};
use crate::ui::theming::{ColorScheme, ThemeMode};
use crate::ui::viewer::component;
use iced::widget::{Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub viewer: &'a component::State,
    pub theme_mode: ThemeMode,
    pub colors: &'a ColorScheme,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let viewer = ctx
        .viewer
        .view(component::ViewEnv {
            i18n: ctx.i18n,
            theme_mode: ctx.theme_mode,
            colors: ctx.colors,
        })
        .map(Message::Viewer);

    let content = Container::new(viewer)
        .width(Length::Fill)
        .height(Length::Fill);

    if !ctx.notifications.has_notifications() {
        return content.into();
    }

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(content)
        .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
        .into()
}
