// SPDX-License-Identifier: MPL-2.0
//! Where `settings.toml` lives.
//!
//! A directory passed by the caller wins, then `--config-dir`, then
//! `TITHI_LENS_CONFIG_DIR`, then `TithiLens/` under the platform config
//! directory.

use std::path::PathBuf;
use std::sync::OnceLock;

const APP_DIR_NAME: &str = "TithiLens";

pub const ENV_CONFIG_DIR: &str = "TITHI_LENS_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Stores the `--config-dir` argument. Returns `false` if it was already set.
pub fn set_cli_config_dir(dir: Option<String>) -> bool {
    CLI_CONFIG_DIR.set(dir.map(PathBuf::from)).is_ok()
}

/// The settings directory, or `None` when no candidate is available.
pub fn config_dir(explicit: Option<PathBuf>) -> Option<PathBuf> {
    let cli = CLI_CONFIG_DIR.get().cloned().flatten();
    let env = std::env::var(ENV_CONFIG_DIR).ok();
    resolve(explicit, cli, env.as_deref(), dirs::config_dir())
}

fn resolve(
    explicit: Option<PathBuf>,
    cli: Option<PathBuf>,
    env: Option<&str>,
    platform: Option<PathBuf>,
) -> Option<PathBuf> {
    explicit
        .or(cli)
        .or_else(|| env.filter(|dir| !dir.is_empty()).map(PathBuf::from))
        .or_else(|| platform.map(|base| base.join(APP_DIR_NAME)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dir(path: &str) -> Option<PathBuf> {
        Some(PathBuf::from(path))
    }

    #[test]
    fn sources_are_tried_in_order() {
        let platform = || dir("/home/reader/.config");

        assert_eq!(
            resolve(dir("/explicit"), dir("/cli"), Some("/env"), platform()),
            dir("/explicit")
        );
        assert_eq!(resolve(None, dir("/cli"), Some("/env"), platform()), dir("/cli"));
        assert_eq!(resolve(None, None, Some("/env"), platform()), dir("/env"));
        assert_eq!(
            resolve(None, None, None, platform()),
            dir("/home/reader/.config/TithiLens")
        );
        assert_eq!(resolve(None, None, None, None), None);
    }

    #[test]
    fn empty_environment_value_is_skipped() {
        assert_eq!(
            resolve(None, None, Some(""), dir("/base")),
            dir("/base/TithiLens")
        );
    }

    #[test]
    fn explicit_directory_bypasses_global_state() {
        assert_eq!(config_dir(dir("/tmp/tithi")), dir("/tmp/tithi"));
    }
}
