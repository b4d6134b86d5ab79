// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the calendar viewer, localization, the
//! HTTP client and the user's settings, and translates viewer effects into
//! side effects like downloads or config persistence.

mod message;
pub mod paths;
mod persistence;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::i18n::I18n;
use crate::media;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::{ColorScheme, ThemeMode};
use crate::ui::viewer::component;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    viewer: component::State,
    /// `None` when the TLS backend failed to initialise; downloads then fail.
    client: Option<reqwest::Client>,
    config: Config,
    theme_mode: ThemeMode,
    /// Resolved once per mode change; system detection is slow.
    theme: Theme,
    colors: ColorScheme,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("viewer", &self.viewer)
            .field("theme_mode", &self.theme_mode)
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 520.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 900.0;
pub const MIN_WINDOW_WIDTH: f32 = 360.0;
pub const MIN_WINDOW_HEIGHT: f32 = 600.0;

/// Builds the window settings. Calendar pages are portrait, so is the window.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced calls boot through `Fn`; the flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings, builds the viewer on its start page and kicks off the
    /// first downloads.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let now = Instant::now();
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);
        let theme_mode = config.general.theme_mode;

        let client = match media::build_client(config.request_timeout()) {
            Ok(client) => Some(client),
            Err(err) => {
                tracing::error!(%err, "Could not create HTTP client");
                None
            }
        };

        let (viewer, effect) = component::State::new(
            component::StateConfig::from_config(&config, flags.year),
            now,
        );

        let mut notifications = notifications::Manager::new();
        if let Some(key) = config_warning {
            notifications.push(Notification::warning(key, now));
        }

        let mut app = App {
            i18n,
            viewer,
            client,
            config,
            theme_mode,
            theme: theme_mode.theme(),
            colors: theme_mode.colors(),
            notifications,
        };

        let task = update::handle_viewer_effect(&mut app.update_context(), effect, now);
        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let position = self.viewer.position();
        let page = self.viewer.current_page();
        let month = self.i18n.tr_with_args(
            "month-title",
            &[("month", page.name.into()), ("year", position.year.into())],
        );
        format!("{month} - {app_name}")
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(
                self.viewer.needs_tick(),
                self.notifications.has_notifications(),
            ),
        ])
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            i18n: &mut self.i18n,
            viewer: &mut self.viewer,
            client: self.client.as_ref(),
            config: &mut self.config,
            theme_mode: &mut self.theme_mode,
            theme: &mut self.theme,
            colors: &mut self.colors,
            notifications: &mut self.notifications,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Viewer(viewer_message) => {
                update::handle_viewer_message(&mut self.update_context(), viewer_message, Instant::now())
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(now) => update::handle_tick(&mut self.update_context(), now),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            viewer: &self.viewer,
            theme_mode: self.theme_mode,
            colors: &self.colors,
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_is_portrait() {
        let settings = window_settings();
        assert!(settings.size.height > settings.size.width);
        assert!(settings.min_size.is_some_and(|min| min.width <= settings.size.width));
    }
}
