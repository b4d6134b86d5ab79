// SPDX-License-Identifier: MPL-2.0
use tithi_lens::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Usage: tithi_lens [OPTIONS]

Options:
  --lang <CODE>        Interface language (en-US, hi)
  --year <YYYY>        Open this year instead of the current one
  --config-dir <DIR>   Directory holding settings.toml
  -h, --help           Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or_else(|err| {
            tracing::warn!(%err, "Ignoring --lang");
            None
        }),
        year: args.opt_value_from_str("--year").unwrap_or_else(|err| {
            tracing::warn!(%err, "Ignoring --year");
            None
        }),
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
            tracing::warn!(%err, "Ignoring --config-dir");
            None
        }),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "Ignoring unexpected arguments");
    }

    paths::set_cli_config_dir(flags.config_dir.clone());
    app::run(flags)
}
