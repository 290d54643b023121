#![warn(clippy::all)]

use cellular::{Error, LifeConfig};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> Result<(), Error> {
    let config = LifeConfig::from_args(std::env::args().skip(1))?;
    log::info!(
        "tick period {}, seeding {:?}",
        config.tick_period,
        config.seeding
    );
    cellular::run(config)
}
