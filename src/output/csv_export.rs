use super::errors::OutputError;
use crate::simulation::RunReport;
use csv::Writer;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const TRAJECTORY_FILE: &str = "trajectories.csv";
pub const FUEL_FILE: &str = "fuel.csv";
pub const LANDING_FILE: &str = "landings.csv";

#[derive(Debug, Clone, PartialEq)]
pub struct ExportedFiles {
    pub trajectories: PathBuf,
    pub fuel: PathBuf,
    pub landings: PathBuf,
}

/// Writes the run's series as long-format CSV files into `output_dir`,
/// creating it if needed.
pub fn write_run_report(report: &RunReport, output_dir: &Path) -> Result<ExportedFiles, OutputError> {
    fs::create_dir_all(output_dir)?;

    let files = ExportedFiles {
        trajectories: output_dir.join(TRAJECTORY_FILE),
        fuel: output_dir.join(FUEL_FILE),
        landings: output_dir.join(LANDING_FILE),
    };
    let times = report.time_axis();

    let mut writer = Writer::from_writer(File::create(&files.trajectories)?);
    writer.write_record(["Spacecraft", "Tick", "Time (s)", "X (m)", "Y (m)"])?;
    for record in report.records() {
        for (tick, (&(x, y), time)) in record.positions().iter().zip(&times).enumerate() {
            writer.serialize((record.name(), tick, time, x, y))?;
        }
    }
    writer.flush()?;

    let mut writer = Writer::from_writer(File::create(&files.fuel)?);
    writer.write_record(["Spacecraft", "Tick", "Time (s)", "Fuel (kg)"])?;
    for record in report.records() {
        for (tick, (fuel, time)) in record.fuel_levels().iter().zip(&times).enumerate() {
            writer.serialize((record.name(), tick, time, fuel))?;
        }
    }
    writer.flush()?;

    let mut writer = Writer::from_writer(File::create(&files.landings)?);
    writer.write_record(["Spacecraft", "Landing Tick", "Landing Time (s)", "Verdict"])?;
    for record in report.records() {
        let tick = record.landing_tick();
        let time = tick.map(|tick| report.params().time_at(tick));
        let verdict = record
            .landing()
            .map_or_else(|| "Did not land".to_string(), |verdict| verdict.to_string());
        writer.serialize((record.name(), tick, time, verdict))?;
    }
    writer.flush()?;

    tracing::info!(dir = %output_dir.display(), "run data written");
    Ok(files)
}
