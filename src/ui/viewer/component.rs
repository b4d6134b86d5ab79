// SPDX-License-Identifier: MPL-2.0
//! Viewer component encapsulating calendar state and update logic.
//!
//! The component owns the sub-components (navigation, flip, zoom, pointer,
//! loading) and the decoded image cache. It never performs I/O: downloads,
//! clipboard writes and URL opening are returned as [`Effect`]s for the
//! application to run.

use crate::calendar::{CalendarPosition, Catalog, MonthDescriptor};
use crate::config::Config;
use crate::error::Error;
use crate::i18n::I18n;
use crate::media::cache::DEFAULT_MAX_IMAGES;
use crate::media::fetch::failure_message_key;
use crate::media::{CacheConfig, CacheStats, ImageCache, ImageData};
use crate::ui::state::GestureEvent;
use crate::ui::theming::{ColorScheme, ThemeMode};
use crate::ui::viewer::subcomponents::{flip, loading, navigation, pointer, zoom};
use crate::ui::viewer::{self, controls, header, info_panel, pane, year_picker};
use iced::keyboard::{self, key::Named, Key};
use iced::{event, window, Element};
use std::collections::{HashMap, HashSet};
use std::time::Instant;

/// Which floating panel covers the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    None,
    YearPicker,
    Info,
}

/// Messages emitted by viewer-related widgets.
#[derive(Debug, Clone)]
pub enum Message {
    NavigateNext,
    NavigatePrevious,
    GoToToday,
    SelectYear(i32),
    ToggleYearPicker,
    ToggleInfo,
    CloseOverlay,
    Flip,
    ZoomIn,
    ZoomOut,
    ResetZoom,
    /// Touch or mouse input captured by the page canvas.
    Pointer(pointer::Message),
    /// Keyboard and window events forwarded by the application.
    RawEvent {
        window: window::Id,
        event: event::Event,
    },
    Tick(Instant),
    ImageLoaded {
        url: String,
        result: Result<ImageData, Error>,
    },
    CallPhone(&'static str),
    CopyPhone(&'static str),
    SetLanguage(String),
    SetTheme(ThemeMode),
}

/// Side effects the application should perform after handling a viewer message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Download these images and report back with [`Message::ImageLoaded`].
    FetchImages(Vec<String>),
    CopyToClipboard(String),
    /// Open a URL (a `tel:` link) with the platform handler.
    OpenUrl(String),
    ChangeLanguage(String),
    ChangeTheme(ThemeMode),
}

/// Start-up settings for the viewer.
#[derive(Debug, Clone)]
pub struct StateConfig {
    pub catalog: Catalog,
    pub start: CalendarPosition,
    pub zoom_step: f32,
    pub wheel_zoom_step: f32,
    pub double_tap_scale: f32,
    pub cache: CacheConfig,
    pub prefetch_adjacent: bool,
}

impl StateConfig {
    /// Derives viewer settings from the user configuration. `year` overrides
    /// the start year while keeping today's month; a year without artwork
    /// falls back to the catalog's fallback year.
    #[must_use]
    pub fn from_config(config: &Config, year: Option<i32>) -> Self {
        let catalog = config.catalog();
        let today = CalendarPosition::today(&catalog);
        let start = match year {
            Some(year) => CalendarPosition::new(catalog.resolve_year(year), today.month_index),
            None => today,
        };

        Self {
            catalog,
            start,
            zoom_step: config.zoom_step(),
            wheel_zoom_step: config.wheel_zoom_step(),
            double_tap_scale: config.double_tap_scale(),
            cache: CacheConfig::new(config.cache_size_bytes(), DEFAULT_MAX_IMAGES),
            prefetch_adjacent: config.prefetch_adjacent(),
        }
    }
}

impl Default for StateConfig {
    fn default() -> Self {
        Self::from_config(&Config::default(), None)
    }
}

/// Environment information required to render the viewer.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
    /// Colors of the resolved theme.
    pub colors: &'a ColorScheme,
}

/// Complete viewer component state.
pub struct State {
    catalog: Catalog,
    /// Pages of the year currently on screen.
    pages: Vec<MonthDescriptor>,
    pages_year: i32,
    navigation: navigation::State,
    flip: flip::State,
    zoom: zoom::State,
    pointer: pointer::State,
    loading: loading::State,
    overlay: Overlay,
    images: ImageCache,
    /// Images of the shown page that the cache refused (over its per-image budget).
    oversized: HashMap<String, ImageData>,
    in_flight: HashSet<String>,
    prefetch_adjacent: bool,
    /// Instant of the last handled message; drives the drawn animation frame.
    now: Instant,
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("position", &self.position())
            .field("is_flipped", &self.flip.is_flipped())
            .field("overlay", &self.overlay)
            .field("in_flight", &self.in_flight.len())
            .field("cache", &self.images.stats())
            .finish()
    }
}

impl State {
    /// Creates the viewer on its start page and requests the first images.
    #[must_use]
    pub fn new(config: StateConfig, now: Instant) -> (Self, Effect) {
        let start = config.start;
        let pages = config.catalog.months_for_year(start.year);
        let mut state = Self {
            pages,
            pages_year: start.year,
            navigation: navigation::State::new(start),
            flip: flip::State::default(),
            zoom: zoom::State::new(
                config.zoom_step,
                config.wheel_zoom_step,
                config.double_tap_scale,
            ),
            pointer: pointer::State::default(),
            loading: loading::State::default(),
            overlay: Overlay::None,
            images: ImageCache::new(config.cache),
            oversized: HashMap::new(),
            in_flight: HashSet::new(),
            prefetch_adjacent: config.prefetch_adjacent,
            catalog: config.catalog,
            now,
        };
        tracing::info!(year = start.year, month_index = start.month_index, "Viewer started");
        let effect = state.enter_page(start);
        (state, effect)
    }

    /// Handle a viewer message at `now`.
    pub fn handle_message(&mut self, message: Message, now: Instant) -> Effect {
        self.now = now;
        match message {
            Message::NavigateNext => self.navigate(navigation::Request::Next, now),
            Message::NavigatePrevious => self.navigate(navigation::Request::Previous, now),
            Message::GoToToday => {
                let today = CalendarPosition::today(&self.catalog);
                self.jump(today, now)
            }
            Message::SelectYear(year) => {
                self.close_overlay();
                self.jump(CalendarPosition::start_of(year), now)
            }
            Message::ToggleYearPicker => {
                self.toggle_overlay(Overlay::YearPicker, now);
                Effect::None
            }
            Message::ToggleInfo => {
                self.toggle_overlay(Overlay::Info, now);
                Effect::None
            }
            Message::CloseOverlay => {
                self.close_overlay();
                Effect::None
            }
            Message::Flip => self.toggle_flip(now),
            Message::ZoomIn => self.apply_gesture(GestureEvent::ZoomIn, now),
            Message::ZoomOut => self.apply_gesture(GestureEvent::ZoomOut, now),
            Message::ResetZoom => self.apply_gesture(GestureEvent::Reset, now),
            Message::Pointer(input) => {
                let Some(event) = self.pointer.handle(input) else {
                    return Effect::None;
                };
                if self.overlay != Overlay::None {
                    return Effect::None;
                }
                self.apply_gesture(event, now)
            }
            Message::RawEvent { event, .. } => self.handle_raw_event(event, now),
            Message::Tick(at) => self.tick(at),
            Message::ImageLoaded { url, result } => {
                self.image_loaded(url, result);
                Effect::None
            }
            Message::CallPhone(number) => Effect::OpenUrl(format!("tel:{number}")),
            Message::CopyPhone(number) => Effect::CopyToClipboard(number.to_string()),
            Message::SetLanguage(locale) => Effect::ChangeLanguage(locale),
            Message::SetTheme(mode) => Effect::ChangeTheme(mode),
        }
    }

    /// Starts or redirects the fade. The indicator follows the target page
    /// from the moment of the request, and its front image is fetched while
    /// the old page fades out.
    fn navigate(&mut self, request: navigation::Request, now: Instant) -> Effect {
        self.navigation.handle(navigation::Message::Navigate { request, now });
        let Some(url) = self.navigation.pending().and_then(|target| self.front_url(target)) else {
            return Effect::None;
        };

        let ready = self.has_image(&url);
        self.loading.handle(loading::Message::Start {
            url: url.clone(),
            ready,
        });
        if ready || !self.in_flight.insert(url.clone()) {
            return Effect::None;
        }
        tracing::debug!(%url, "Requesting navigation target");
        Effect::FetchImages(vec![url])
    }

    /// Absolute navigation; landing on the page already shown still resets
    /// the zoom and flip state.
    fn jump(&mut self, target: CalendarPosition, now: Instant) -> Effect {
        let settled = self.navigation.pending().is_none();
        if settled && target == self.position() {
            self.apply_gesture(GestureEvent::Reset, now);
            if self.flip.is_flipped() {
                return self.toggle_flip(now);
            }
            return Effect::None;
        }
        self.navigate(navigation::Request::Jump(target), now)
    }

    fn tick(&mut self, now: Instant) -> Effect {
        let effect = match self.navigation.handle(navigation::Message::Tick(now)) {
            navigation::Effect::Swapped { position, .. } => self.enter_page(position),
            navigation::Effect::Settled | navigation::Effect::None => Effect::None,
        };
        self.flip.handle(flip::Message::Tick(now));
        self.zoom.handle(zoom::Message::Tick(now));
        self.loading.handle(loading::Message::SpinnerTick(now));
        effect
    }

    /// Resets per-page state after a swap and starts loading the new page.
    fn enter_page(&mut self, position: CalendarPosition) -> Effect {
        if position.year != self.pages_year {
            self.pages = self.catalog.months_for_year(position.year);
            self.pages_year = position.year;
        }

        self.flip.handle(flip::Message::Reset);
        self.zoom.handle(zoom::Message::ResetImmediately);
        self.zoom
            .handle(zoom::Message::SetCanFlip(!position.is_index_page()));
        self.pointer.clear();

        let keep = page_urls(self.current_page());
        self.oversized.retain(|url, _| keep.contains(url));

        let url = self.current_page().image_url.clone();
        let ready = self.has_image(&url);
        self.loading.handle(loading::Message::Start { url, ready });
        self.request_images()
    }

    fn toggle_flip(&mut self, now: Instant) -> Effect {
        if self.position().is_index_page() {
            return Effect::None;
        }
        match self.flip.handle(flip::Message::Toggle { now }) {
            flip::Effect::Flipped {
                is_flipped,
                settles_at,
            } => {
                tracing::debug!(is_flipped, "Page flipped");
                let url = self.active_url().to_string();
                let ready = self.has_image(&url);
                self.loading.handle(loading::Message::Start { url, ready });
                self.loading
                    .handle(loading::Message::HoldForFlip { settles_at });
                self.request_images()
            }
            flip::Effect::None | flip::Effect::AnimationFinished => Effect::None,
        }
    }

    fn apply_gesture(&mut self, event: GestureEvent, now: Instant) -> Effect {
        match self.zoom.handle(zoom::Message::Gesture { event, now }) {
            zoom::Effect::Flip(direction) => {
                tracing::debug!(?direction, "Swipe recognised");
                self.toggle_flip(now)
            }
            zoom::Effect::ZoomChanged | zoom::Effect::None => Effect::None,
        }
    }

    fn toggle_overlay(&mut self, overlay: Overlay, now: Instant) {
        if self.overlay == overlay {
            self.overlay = Overlay::None;
            return;
        }
        // A half-finished gesture must not resume under the panel.
        self.pointer.clear();
        self.zoom.handle(zoom::Message::Gesture {
            event: GestureEvent::Cancel,
            now,
        });
        self.overlay = overlay;
    }

    fn close_overlay(&mut self) {
        self.overlay = Overlay::None;
    }

    fn handle_raw_event(&mut self, event: event::Event, now: Instant) -> Effect {
        match event {
            event::Event::Window(
                window::Event::Opened { size, .. } | window::Event::Resized(size),
            ) => {
                self.zoom.handle(zoom::Message::WindowResized(size));
                Effect::None
            }
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
                if modifiers.command() || modifiers.alt() {
                    return Effect::None;
                }
                self.handle_key(&key, now)
            }
            _ => Effect::None,
        }
    }

    fn handle_key(&mut self, key: &Key, now: Instant) -> Effect {
        let message = match key.as_ref() {
            Key::Named(Named::Escape) => Message::CloseOverlay,
            Key::Character(c) if c.eq_ignore_ascii_case("y") => Message::ToggleYearPicker,
            Key::Character(c) if c.eq_ignore_ascii_case("i") => Message::ToggleInfo,
            _ if self.overlay != Overlay::None => return Effect::None,
            Key::Named(Named::ArrowLeft) => Message::NavigatePrevious,
            Key::Named(Named::ArrowRight) => Message::NavigateNext,
            Key::Named(Named::Home) => Message::GoToToday,
            Key::Named(Named::Space) => Message::Flip,
            Key::Character(c) if c.eq_ignore_ascii_case("f") => Message::Flip,
            Key::Character("+" | "=") => Message::ZoomIn,
            Key::Character("-" | "_") => Message::ZoomOut,
            Key::Character("0") => Message::ResetZoom,
            _ => return Effect::None,
        };
        self.handle_message(message, now)
    }

    fn image_loaded(&mut self, url: String, result: Result<ImageData, Error>) {
        self.in_flight.remove(&url);
        match result {
            Ok(image) => {
                let on_page = page_urls(self.current_page()).contains(&url);
                if !self.images.insert(url.clone(), image.clone()) && on_page {
                    self.oversized.insert(url.clone(), image);
                }
                self.loading.handle(loading::Message::ImageReady { url });
            }
            Err(err) => {
                tracing::error!(%url, error = %err, "Image failed to load");
                let key = failure_message_key(&err);
                self.loading
                    .handle(loading::Message::ImageFailed { url, key });
            }
        }
    }

    /// Requests the page's faces and, when enabled, the neighbouring fronts.
    fn request_images(&mut self) -> Effect {
        let position = self.position();
        let mut wanted = page_urls(self.current_page());
        if self.prefetch_adjacent {
            for neighbour in [position.next(), position.previous()] {
                if let Some(url) = self.front_url(neighbour) {
                    wanted.push(url);
                }
            }
        }

        let missing: Vec<String> = self
            .images
            .missing(wanted.iter().map(String::as_str))
            .into_iter()
            .filter(|url| !self.oversized.contains_key(url) && !self.in_flight.contains(url))
            .collect();

        if missing.is_empty() {
            return Effect::None;
        }
        tracing::debug!(count = missing.len(), "Requesting images");
        self.in_flight.extend(missing.iter().cloned());
        Effect::FetchImages(missing)
    }

    fn front_url(&self, position: CalendarPosition) -> Option<String> {
        if position.year == self.pages_year {
            return self
                .pages
                .get(position.month_index)
                .map(|page| page.image_url.clone());
        }
        self.catalog
            .months_for_year(position.year)
            .into_iter()
            .nth(position.month_index)
            .map(|page| page.image_url)
    }

    fn has_image(&self, url: &str) -> bool {
        self.image(url).is_some()
    }

    fn image(&self, url: &str) -> Option<&ImageData> {
        self.images.peek(url).or_else(|| self.oversized.get(url))
    }

    /// The page on screen.
    #[must_use]
    pub fn position(&self) -> CalendarPosition {
        self.navigation.position()
    }

    #[must_use]
    pub fn current_page(&self) -> &MonthDescriptor {
        &self.pages[self.position().month_index]
    }

    /// URL of the face currently shown.
    #[must_use]
    pub fn active_url(&self) -> &str {
        let page = self.current_page();
        if self.flip.is_flipped() {
            page.back_or_front_url()
        } else {
            &page.image_url
        }
    }

    #[must_use]
    pub fn is_flipped(&self) -> bool {
        self.flip.is_flipped()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    #[must_use]
    pub fn overlay(&self) -> Overlay {
        self.overlay
    }

    #[must_use]
    pub fn zoom_scale(&self) -> f32 {
        self.zoom.committed().scale.value()
    }

    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.images.stats()
    }

    /// Whether the tick subscription must run.
    #[must_use]
    pub fn needs_tick(&self) -> bool {
        self.navigation.is_animating()
            || self.flip.is_animating()
            || self.zoom.is_animating()
            || self.loading.is_loading()
    }

    /// i18n key of the usage hint for the current input kind and page.
    #[must_use]
    pub fn hint_key(&self) -> &'static str {
        let can_flip = !self.position().is_index_page();
        match (self.pointer.input_mode(), can_flip) {
            (pointer::InputMode::Pointer, true) => "hint-pointer-flip",
            (pointer::InputMode::Pointer, false) => "hint-pointer",
            (pointer::InputMode::Touch, true) => "hint-touch-flip",
            (pointer::InputMode::Touch, false) => "hint-touch",
        }
    }

    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        let page = self.current_page();
        let position = self.position();
        let now = self.now;

        let header = header::view(header::ViewContext {
            i18n: env.i18n,
            year: position.year,
            page,
            year_picker_open: self.overlay == Overlay::YearPicker,
            info_open: self.overlay == Overlay::Info,
        });

        let viewport = self.zoom.viewport();
        let (front_layout, back_layout) = self.flip.layouts(viewport.width, now);
        let active_missing = self.image(self.active_url()).is_none();
        let pane = pane::view(pane::ViewModel {
            i18n: env.i18n,
            front: self.image(&page.image_url).cloned(),
            back: self.image(page.back_or_front_url()).cloned(),
            front_layout,
            back_layout,
            is_flipped: self.flip.is_flipped(),
            scale: self.zoom.drawn_scale(),
            pan: self.zoom.drawn_pan(),
            opacity: self.navigation.opacity(now),
            is_loading: self.loading.is_loading(),
            spinner_rotation: self.loading.spinner_rotation(),
            failure: self.loading.failure().filter(|_| active_missing),
            show_badge: !position.is_index_page(),
            area_height: viewport.height,
            colors: env.colors,
        });

        let controls = controls::view(controls::ViewContext {
            i18n: env.i18n,
            can_flip: !position.is_index_page(),
            is_flipped: self.flip.is_flipped(),
            scale: self.zoom.committed().scale,
            hint_key: self.hint_key(),
        });

        let overlay = match self.overlay {
            Overlay::None => None,
            Overlay::YearPicker => Some(year_picker::view(year_picker::ViewContext {
                i18n: env.i18n,
                selected_year: position.year,
            })),
            Overlay::Info => Some(info_panel::view(info_panel::ViewContext {
                i18n: env.i18n,
                theme_mode: env.theme_mode,
            })),
        };

        viewer::view(viewer::ViewContext {
            header,
            pane,
            controls,
            overlay,
        })
    }
}

/// Front and (when present) back image URLs of `page`.
fn page_urls(page: &MonthDescriptor) -> Vec<String> {
    let mut urls = vec![page.image_url.clone()];
    if let Some(back) = &page.back_image_url {
        urls.push(back.clone());
    }
    urls
}
