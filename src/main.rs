// SPDX-License-Identifier: MPL-2.0
use locale_form::app::{self, Flags};
use locale_form::domain::form::LocaleCode;

const HELP: &str = "\
locale_form

USAGE:
  locale_form [OPTIONS]

OPTIONS:
  -h, --help              Print this help and exit
      --lang <ID>         Interface language (en-US, de, es)
      --locale <CODE>     Content locale shown first (en, de, es)
      --config-dir <DIR>  Directory holding settings.toml
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("info,wgpu_core=warn,wgpu_hal=warn,naga=warn")
            }),
        )
        .init();

    let flags = match parse_args() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    tracing::debug!(?flags, "starting");
    app::run(flags)
}

/// Returns `None` when help was requested.
fn parse_args() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        locale: args.opt_value_from_str::<_, LocaleCode>("--locale")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    Ok(Some(flags))
}
