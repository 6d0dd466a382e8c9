// SPDX-License-Identifier: MPL-2.0
use iced_banner::app::{self, Flags};
use iced_banner::banner::ThemePreset;

const HELP: &str = "\
iced_banner - sliding notification banners

USAGE:
  iced_banner [OPTIONS]

OPTIONS:
  --lang <LOCALE>        Interface language (en-US, fr, pl)
  --max-visible <N>      Number of banners shown at once
  --theme <PRESET>       default, dark, minimal or system
  --config-dir <DIR>     Directory holding settings.toml
  -h, --help             Print this help
";

fn main() -> iced::Result {
    setup_logging();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: opt_value(&mut args, "--lang"),
        max_visible: opt_value(&mut args, "--max-visible"),
        theme: opt_value::<ThemePreset>(&mut args, "--theme"),
        config_dir: opt_value(&mut args, "--config-dir"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    app::run(flags)
}

fn opt_value<T>(args: &mut pico_args::Arguments, key: &'static str) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(%err, "ignoring invalid {key}");
            None
        }
    }
}

fn setup_logging() {
    use tracing_subscriber::prelude::*;

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "iced_banner=info".into()),
        )
        .init();
}
