use clap::Parser;
use std::error::Error;
use subnet_algebra::cli::{run, Cli};
use subnet_algebra::config::Config;
use subnet_algebra::logging;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let (config, warnings) = Config::from_env();
    logging::init(&config.log_config)?;
    log::info!("#Start main()");
    for warning in &warnings {
        log::warn!("{warning}");
    }

    let cli = Cli::parse();
    let stdout = std::io::stdout();
    run(&cli, &config, &mut stdout.lock())?;

    log::info!("#End main()");
    Ok(())
}
