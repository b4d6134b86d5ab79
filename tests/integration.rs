// SPDX-License-Identifier: MPL-2.0
use std::io::Cursor;
use std::time::{Duration, Instant};
use tempfile::tempdir;
use tithi_lens::calendar::{CalendarPosition, Catalog, INDEX_PAGE_POSITION, PAGES_PER_YEAR};
use tithi_lens::config::{self, Config, FADE_DURATION_MS};
use tithi_lens::i18n::I18n;
use tithi_lens::media;
use tithi_lens::ui::theming::ThemeMode;
use tithi_lens::ui::viewer::component::{Effect, Message, State, StateConfig};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const FADE: Duration = Duration::from_millis(FADE_DURATION_MS);

fn viewer_at(position: CalendarPosition) -> (State, Effect, Instant) {
    let now = Instant::now();
    let (state, effect) = State::new(
        StateConfig {
            start: position,
            prefetch_adjacent: false,
            ..StateConfig::default()
        },
        now,
    );
    (state, effect, now)
}

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut settings = Config::default();
    settings.general.language = Some("hi".to_string());
    settings.general.theme_mode = ThemeMode::Dark;
    config::save_to_path(&settings, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded, settings);

    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "hi");

    // The command line wins over the file.
    let i18n = I18n::new(Some("en-US".to_string()), &loaded);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn unreadable_config_falls_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[display\nzoom_step = ")
        .expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert_eq!(warning.as_deref(), Some(config::CONFIG_LOAD_WARNING));
}

#[test]
fn out_of_range_settings_are_clamped() {
    let loaded: Config = toml::from_str(
        "[display]\nzoom_step = 9.0\nwheel_zoom_step = 0.0\n[network]\nrequest_timeout_secs = 1\n",
    )
    .expect("valid toml");

    assert!(loaded.zoom_step() <= config::MAX_ZOOM_STEP);
    assert!(loaded.wheel_zoom_step() >= config::MIN_WHEEL_ZOOM_STEP);
    assert_eq!(
        loaded.request_timeout(),
        Duration::from_secs(config::MIN_REQUEST_TIMEOUT_SECS)
    );
}

#[test]
fn a_full_year_walk_crosses_into_the_next_year() {
    let mut position = CalendarPosition::start_of(2024);
    for _ in 0..PAGES_PER_YEAR {
        position = position.next();
    }
    assert_eq!(position, CalendarPosition::start_of(2025));
    assert_eq!(
        CalendarPosition::start_of(2025).previous(),
        CalendarPosition::new(2024, INDEX_PAGE_POSITION)
    );
}

#[test]
fn every_supported_year_has_thirteen_pages() {
    let catalog = Catalog::default();
    for year in tithi_lens::calendar::SUPPORTED_YEARS {
        let pages = catalog.months_for_year(year);
        assert_eq!(pages.len(), PAGES_PER_YEAR);
        assert!(pages[INDEX_PAGE_POSITION].is_index_page());
        assert!(pages[..INDEX_PAGE_POSITION].iter().all(|p| p.has_back()));
    }
}

#[test]
fn rapid_next_requests_coalesce_into_one_fade() {
    let (mut viewer, _, now) = viewer_at(CalendarPosition::new(2025, 0));
    for _ in 0..3 {
        viewer.handle_message(Message::NavigateNext, now);
    }

    let swapped = now + FADE;
    viewer.handle_message(Message::Tick(swapped), swapped);
    assert_eq!(viewer.position(), CalendarPosition::new(2025, 3));
}

#[test]
fn previous_from_january_lands_on_last_years_index_page() {
    let (mut viewer, _, now) = viewer_at(CalendarPosition::start_of(2025));
    viewer.handle_message(Message::NavigatePrevious, now);
    let effect = viewer.handle_message(Message::Tick(now + FADE), now + FADE);

    assert_eq!(
        viewer.position(),
        CalendarPosition::new(2024, INDEX_PAGE_POSITION)
    );
    let Effect::FetchImages(urls) = effect else {
        panic!("expected a fetch, got {effect:?}");
    };
    assert_eq!(urls, vec![viewer.current_page().image_url.clone()]);
    assert!(urls[0].contains("calender-2024"));
}

/// Serves `body` as a single PNG response and returns its URL.
async fn serve_png_once(body: Vec<u8>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test server");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let Ok((mut socket, _)) = listener.accept().await else {
            return;
        };
        let mut request = [0_u8; 1024];
        let _ = socket.read(&mut request).await;
        let header = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: image/png\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        );
        let _ = socket.write_all(header.as_bytes()).await;
        let _ = socket.write_all(&body).await;
    });
    format!("http://{addr}/jan-2025-front.jpg")
}

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let image = image_rs::RgbaImage::from_pixel(width, height, image_rs::Rgba([200, 120, 20, 255]));
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), image_rs::ImageFormat::Png)
        .expect("encode png");
    bytes
}

#[tokio::test]
async fn downloaded_image_reaches_the_viewer() {
    let url = serve_png_once(png_bytes(3, 5)).await;
    let client = reqwest::Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(5))
        .build()
        .expect("client");

    let (loaded_url, result) = media::load_image(client, url.clone()).await;
    assert_eq!(loaded_url, url);
    let image = result.expect("image decodes");
    assert_eq!((image.width, image.height), (3, 5));

    // Results for a URL the viewer is not waiting on are stored, not shown.
    let (mut viewer, _, now) = viewer_at(CalendarPosition::new(2025, 0));
    viewer.handle_message(
        Message::ImageLoaded {
            url: loaded_url,
            result: Ok(image),
        },
        now,
    );
    assert!(viewer.is_loading());
    assert_eq!(viewer.cache_stats().insertions, 1);
}
