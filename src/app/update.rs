// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! The viewer never performs I/O itself; the handlers here turn its
//! [`component::Effect`]s into downloads, clipboard writes, URL opening and
//! settings changes.

use super::{persistence, Message};
use crate::config::Config;
use crate::error::{Error, NetworkError};
use crate::i18n::I18n;
use crate::media;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::{ColorScheme, ThemeMode};
use crate::ui::viewer::component;
use iced::{Task, Theme};
use std::time::Instant;

/// Toast key shown when no dialer can open a `tel:` link.
pub const DIALER_ERROR: &str = "notification-dialer-error";

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub viewer: &'a mut component::State,
    pub client: Option<&'a reqwest::Client>,
    pub config: &'a mut Config,
    pub theme_mode: &'a mut ThemeMode,
    pub theme: &'a mut Theme,
    pub colors: &'a mut ColorScheme,
    pub notifications: &'a mut notifications::Manager,
}

/// Handles viewer component messages.
pub fn handle_viewer_message(
    ctx: &mut UpdateContext<'_>,
    message: component::Message,
    now: Instant,
) -> Task<Message> {
    let effect = ctx.viewer.handle_message(message, now);
    handle_viewer_effect(ctx, effect, now)
}

/// Advances the viewer animations and expires old toasts.
pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    ctx.notifications.tick(now);
    handle_viewer_message(ctx, component::Message::Tick(now), now)
}

/// Runs the side effect requested by the viewer.
pub fn handle_viewer_effect(
    ctx: &mut UpdateContext<'_>,
    effect: component::Effect,
    now: Instant,
) -> Task<Message> {
    match effect {
        component::Effect::None => Task::none(),
        component::Effect::FetchImages(urls) => fetch_images(ctx.client, urls),
        component::Effect::CopyToClipboard(text) => {
            tracing::debug!("Copying phone number");
            ctx.notifications
                .push(Notification::success("info-copied", now));
            iced::clipboard::write(text)
        }
        component::Effect::OpenUrl(url) => {
            if let Err(err) = open::that_detached(&url) {
                tracing::warn!(%url, %err, "No handler for link");
                ctx.notifications.push(Notification::error(DIALER_ERROR, now));
            }
            Task::none()
        }
        component::Effect::ChangeLanguage(code) => {
            if persistence::apply_language_change(ctx.i18n, ctx.config, &code) {
                persistence::persist(ctx.config, ctx.notifications, now);
            }
            Task::none()
        }
        component::Effect::ChangeTheme(mode) => {
            if *ctx.theme_mode != mode {
                *ctx.theme_mode = mode;
                *ctx.theme = mode.theme();
                *ctx.colors = mode.colors();
                persistence::apply_theme_change(ctx.config, mode);
                persistence::persist(ctx.config, ctx.notifications, now);
            }
            Task::none()
        }
    }
}

/// Starts one download per URL; each reports back as an `ImageLoaded`
/// viewer message.
fn fetch_images(client: Option<&reqwest::Client>, urls: Vec<String>) -> Task<Message> {
    let Some(client) = client else {
        // Without an HTTP client every request fails immediately.
        return Task::batch(urls.into_iter().map(|url| {
            Task::done(Message::Viewer(component::Message::ImageLoaded {
                url,
                result: Err(Error::Network(NetworkError::Transport(
                    "HTTP client unavailable".to_string(),
                ))),
            }))
        }));
    };

    Task::batch(urls.into_iter().map(|url| {
        Task::perform(media::load_image(client.clone(), url), |(url, result)| {
            Message::Viewer(component::Message::ImageLoaded { url, result })
        })
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::CalendarPosition;

    struct Fixture {
        i18n: I18n,
        viewer: component::State,
        config: Config,
        theme_mode: ThemeMode,
        theme: Theme,
        colors: ColorScheme,
        notifications: notifications::Manager,
    }

    impl Fixture {
        fn new() -> Self {
            let config = Config::default();
            let (viewer, _) = component::State::new(
                component::StateConfig {
                    start: CalendarPosition::new(2025, 5),
                    ..component::StateConfig::default()
                },
                Instant::now(),
            );
            Self {
                i18n: I18n::new(Some("en-US".to_string()), &config),
                viewer,
                config,
                theme_mode: ThemeMode::Light,
                theme: ThemeMode::Light.theme(),
                colors: ColorScheme::light(),
                notifications: notifications::Manager::new(),
            }
        }

        fn ctx(&mut self) -> UpdateContext<'_> {
            UpdateContext {
                i18n: &mut self.i18n,
                viewer: &mut self.viewer,
                client: None,
                config: &mut self.config,
                theme_mode: &mut self.theme_mode,
                theme: &mut self.theme,
                colors: &mut self.colors,
                notifications: &mut self.notifications,
            }
        }
    }

    #[test]
    fn copy_effect_confirms_with_toast() {
        let mut fixture = Fixture::new();
        let now = Instant::now();
        let _task = handle_viewer_message(
            &mut fixture.ctx(),
            component::Message::CopyPhone("9425478846"),
            now,
        );
        let keys: Vec<_> = fixture
            .notifications
            .visible()
            .map(|n| n.message_key().to_string())
            .collect();
        assert_eq!(keys, vec!["info-copied".to_string()]);
    }

    #[test]
    fn theme_change_updates_cached_theme() {
        let mut fixture = Fixture::new();
        let _task = handle_viewer_message(
            &mut fixture.ctx(),
            component::Message::SetTheme(ThemeMode::Dark),
            Instant::now(),
        );
        assert_eq!(fixture.theme_mode, ThemeMode::Dark);
        assert_eq!(fixture.colors, ColorScheme::dark());
        assert_eq!(fixture.config.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn language_change_updates_translations() {
        let mut fixture = Fixture::new();
        let before = fixture.i18n.tr("nav-next");
        let _task = handle_viewer_message(
            &mut fixture.ctx(),
            component::Message::SetLanguage("hi".to_string()),
            Instant::now(),
        );
        assert_ne!(fixture.i18n.tr("nav-next"), before);
    }

    #[test]
    fn tick_expires_toasts() {
        let mut fixture = Fixture::new();
        let now = Instant::now();
        fixture
            .notifications
            .push(Notification::success("info-copied", now));
        let _task = handle_tick(&mut fixture.ctx(), now + std::time::Duration::from_secs(60));
        assert!(!fixture.notifications.has_notifications());
    }
}
