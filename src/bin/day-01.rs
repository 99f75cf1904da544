use chronal_calibration::analyzer::{first_repeat, frequency};
use chronal_calibration::config::Settings;
use chronal_calibration::loader::load_changes;
use failure::Error;
use std::process;
use tracing_subscriber::EnvFilter;

fn run(settings: &Settings) -> Result<(), Error> {
    let changes = load_changes(&settings.input_path)?;

    println!("Answer part 1: {}", frequency(&changes));
    println!("Answer part 2: {}", first_repeat(&changes, settings.max_cycles)?);
    Ok(())
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(&Settings::default()) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}
