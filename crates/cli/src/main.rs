#![warn(clippy::pedantic)]

use std::io::{self, Write};

use anyhow::Context;
use fittrack_domain::{PackageError, read_package};
use ::log::{info, warn};

mod log;
mod settings;

const PACKAGES: [(&str, &[f64]); 3] = [
    ("SWM", &[720., 1., 80., 25., 40.]),
    ("RUN", &[15000., 1., 75.]),
    ("WLK", &[9000., 1., 75., 180.]),
];

fn main() -> anyhow::Result<()> {
    let (settings, settings_error) = settings::Settings::from_env();
    log::init(settings.log_level).context("failed to initialize logging")?;

    if let Some(err) = settings_error {
        warn!("{err}");
    }

    info!("processing {} packages", PACKAGES.len());

    let mut stdout = io::stdout().lock();
    for (workout_type, data) in PACKAGES {
        writeln!(stdout, "{}", report(workout_type, data)).context("failed to write report")?;
    }

    Ok(())
}

/// Summary line for a single sensor package, or the reason the package was rejected.
fn report(workout_type: &str, data: &[f64]) -> String {
    match read_package(workout_type, data) {
        Ok(training) => training.show_training_info().message(),
        Err(err) => {
            match &err {
                PackageError::UnknownWorkoutType(code) => warn!("unknown workout type: {code}"),
                PackageError::ArgumentCount { .. } | PackageError::NotAnInteger { .. } => {
                    warn!("rejected {workout_type} package: {err}");
                }
            }
            err.to_string()
        }
    }
}
