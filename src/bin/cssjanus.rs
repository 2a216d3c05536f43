//! Command-line interface for cssjanus
//! Reads a left-to-right stylesheet on stdin and writes its right-to-left mirror to stdout.
//!
//! Usage:
//!   cssjanus [--swap_left_right_in_url] [--swap_ltr_rtl_in_url] [--ignore_bad_bgp]
//!            [--config `<file>`] [--debug] < input.css > output.css
//!
//! Unmirrorable background positions are reported on stderr. Set `CSSJANUS_LOG`
//! (e.g. `CSSJANUS_LOG=cssjanus=trace`) to control what else is logged.

use clap::{Arg, ArgAction, ArgMatches, Command};
use cssjanus::{flip_str, Flag, Loader, MirrorError, MirrorOptions};
use std::io::{self, IsTerminal, Read, Write};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "CSSJANUS_LOG";

fn main() {
    let matches = Command::new("cssjanus")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Converts a left-to-right stylesheet read on stdin into a right-to-left one")
        .arg(
            Arg::new(Flag::SwapLeftRightInUrl.key())
                .long("swap_left_right_in_url")
                .visible_alias("swap-left-right-in-url")
                .help("Also swap 'left' and 'right' inside url(...)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(Flag::SwapLtrRtlInUrl.key())
                .long("swap_ltr_rtl_in_url")
                .visible_alias("swap-ltr-rtl-in-url")
                .help("Also swap 'ltr' and 'rtl' inside url(...)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(Flag::IgnoreUnmirrorableBackgroundPosition.key())
                .long("ignore_bad_bgp")
                .visible_aliases(["ignore-bad-bgp", "ignore-unmirrorable-background-position"])
                .help("Warn about, instead of failing on, unmirrorable background positions")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("FILE")
                .help("TOML file with conversion options, layered over the defaults"),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .short('d')
                .help("Log every stage of the conversion to stderr")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    init_tracing(matches.get_flag("debug"));

    if let Err(e) = run(&matches) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Install the stderr subscriber. `CSSJANUS_LOG` wins over the default level.
fn init_tracing(debug: bool) {
    let default_level = if debug { "cssjanus=debug" } else { "cssjanus=warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn run(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let options = resolve_options(matches)?;

    let mut source = String::new();
    io::stdin().read_to_string(&mut source)?;

    let mirrored = flip_str(&source, &options)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(mirrored.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Layer the defaults, the optional `--config` file and the flags given on
/// the command line, in that order. Flags only ever switch an option on.
fn resolve_options(matches: &ArgMatches) -> Result<MirrorOptions, MirrorError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }

    for flag in Flag::ALL {
        if matches.get_flag(flag.key()) {
            loader = loader.enable(flag);
        }
    }

    loader.build()
}
