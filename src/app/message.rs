// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::notifications;
use crate::ui::viewer::component;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Viewer(component::Message),
    Notification(notifications::NotificationMessage),
    /// Animation and toast clock.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `hi`, `en-US`).
    pub lang: Option<String>,
    /// Year to open instead of the current one.
    pub year: Option<i32>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `TITHI_LENS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
