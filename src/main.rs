// SPDX-License-Identifier: MPL-2.0
use log::{info, warn, LevelFilter};
use photo_viewer::app::{self, Flags};
use std::process::ExitCode;

const HELP: &str = "\
Photo Viewer

USAGE:
  photo_viewer [OPTIONS] [IMAGE]

OPTIONS:
  --lang <LOCALE>       Interface language (zh-CN, en-US)
  --logo <PATH>         Logo shown in the About panel [default: ./logo.png]
  --log-level <LEVEL>   error, warn, info, debug or trace [default: warn]
  -h, --help            Print this help
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let lang = args.opt_value_from_str("--lang")?;
    let logo_path = args.opt_value_from_str("--logo")?;
    let log_level = args.opt_value_from_str("--log-level")?;
    let file_path = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    Ok(Some(Flags {
        lang,
        file_path,
        logo_path,
        log_level,
    }))
}

fn init_logging(level: Option<&str>) {
    let parsed = level.map(str::parse::<LevelFilter>);
    let filter = match &parsed {
        Some(Ok(filter)) => *filter,
        None | Some(Err(_)) => LevelFilter::Warn,
    };
    env_logger::Builder::new().filter_level(filter).init();

    if let (Some(raw), Some(Err(_))) = (level, &parsed) {
        warn!("Unknown log level {raw:?}, using warn");
    }
}

fn main() -> ExitCode {
    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("photo_viewer: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    init_logging(flags.log_level.as_deref());
    info!("Photo Viewer {}", env!("CARGO_PKG_VERSION"));

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
