use std::process::ExitCode;

use log::{debug, error, info};
use tripfare::{calculate_fares, Config, Error, Report};

fn run() -> Result<Report, Error> {
    let config = Config::from_env()?.with_args(std::env::args_os().skip(1));

    info!(
        "Pricing {} into {} with {} workers",
        config.input.display(),
        config.output.display(),
        config.concurrency
    );

    calculate_fares(&config)
}

fn main() -> ExitCode {
    let dotenv = dotenv::dotenv();

    #[cfg(feature = "tracing")]
    tripfare::util::trace::initialize_tracer();
    #[cfg(not(feature = "tracing"))]
    env_logger::init();

    match dotenv {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(err) => debug!("No environment file loaded. {err}"),
    }

    match run() {
        Ok(report) => {
            info!(
                "Calculated {} fares ({} pings read, {} dropped)",
                report.fares, report.ingest.accepted, report.ingest.dropped
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}
