// SPDX-License-Identifier: MPL-2.0
use pi_frame::app::{self, paths, LoggingRenderer};
use pi_frame::config;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
pi_frame: orientation-aware slideshow for digital photo frames

USAGE:
  pi_frame [OPTIONS]

OPTIONS:
  --config PATH   Settings file to use instead of the default location
  --steps N       Stop after N slideshow steps (0 runs forever)
  --verbose       Log debug output
  -h, --help      Print this help
";

struct Flags {
    config_file: Option<String>,
    steps: Option<u64>,
    verbose: bool,
}

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        config_file: args.opt_value_from_str("--config")?,
        steps: args
            .opt_value_from_str("--steps")?
            .filter(|&steps: &u64| steps > 0),
        verbose: args.contains("--verbose"),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("Warning: unused arguments: {rest:?}");
    }
    Ok(Some(flags))
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "pi_frame=debug,warn"
        } else {
            "pi_frame=info,warn"
        })
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::process::ExitCode {
    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return std::process::ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            return std::process::ExitCode::FAILURE;
        }
    };

    init_logging(flags.verbose);
    paths::init_cli_config_file(flags.config_file);

    let config = match config::load() {
        Ok(config) => config,
        Err(err) => {
            error!(%err, "failed to load settings");
            return std::process::ExitCode::FAILURE;
        }
    };

    // No accelerometer driver is linked into the binary; hosts embedding
    // the library pass their own bus to `build_frame`.
    let mut frame = match app::build_frame(&config, None) {
        Ok(frame) => frame,
        Err(err) => {
            error!(%err, "failed to build the frame");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(
        players = frame.players().len(),
        splash_rotation = frame.splash_rotation(),
        "frame ready"
    );

    let mut renderer = LoggingRenderer::new();
    let delay = frame.slideshow_delay();
    app::run_slideshow(&mut frame, &mut renderer, delay, flags.steps).await;

    info!(
        rendered = renderer.rendered(),
        notices = renderer.notices(),
        "slideshow finished"
    );
    std::process::ExitCode::SUCCESS
}
