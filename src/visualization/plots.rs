use crate::output::OutputError;
use crate::simulation::RunReport;
use plotters::prelude::*;
use std::error::Error;
use std::path::{Path, PathBuf};

pub const TRAJECTORY_PLOT: &str = "trajectories.png";
pub const FUEL_PLOT: &str = "fuel.png";
pub const ANIMATION: &str = "trajectories.gif";

const PLOT_SIZE: (u32, u32) = (800, 600);
const FRAME_DELAY_MS: u32 = 50;
const AXIS_PADDING: f64 = 10.0; // meters

/// Axis ranges covering every trajectory, anchored at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

pub fn plot_bounds(report: &RunReport) -> PlotBounds {
    let points = report.records().iter().flat_map(|record| record.positions());
    let (x_min, x_max, y_max) = points.fold((0.0, 0.0, 0.0), |(x_min, x_max, y_max), &(x, y)| {
        (f64::min(x_min, x), f64::max(x_max, x), f64::max(y_max, y))
    });

    PlotBounds {
        x_min: if x_min < 0.0 { x_min - AXIS_PADDING } else { 0.0 },
        x_max: x_max + AXIS_PADDING,
        y_max: y_max + AXIS_PADDING,
    }
}

/// Draws the static trajectory plot, the fuel plot and the trajectory
/// animation into `output_dir`. Returns the written paths.
pub fn draw_all(report: &RunReport, output_dir: &Path) -> Result<Vec<PathBuf>, OutputError> {
    let trajectories = output_dir.join(TRAJECTORY_PLOT);
    let fuel = output_dir.join(FUEL_PLOT);
    let animation = output_dir.join(ANIMATION);

    draw_trajectories(report, &trajectories).map_err(plot_error)?;
    draw_fuel_consumption(report, &fuel).map_err(plot_error)?;
    animate_trajectories(report, &animation).map_err(plot_error)?;

    tracing::info!(dir = %output_dir.display(), "plots written");
    Ok(vec![trajectories, fuel, animation])
}

fn plot_error(err: Box<dyn Error>) -> OutputError {
    OutputError::PlotError(err.to_string())
}

pub fn draw_trajectories(report: &RunReport, path: &Path) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    draw_trajectory_frame(report, &root, "Multi-Spacecraft Trajectory Simulation", None)?;
    root.present()?;
    Ok(())
}

pub fn draw_fuel_consumption(report: &RunReport, path: &Path) -> Result<(), Box<dyn Error>> {
    let times = report.time_axis();
    let t_max = times.last().copied().unwrap_or(0.0).max(report.params().time_step);
    let fuel_max = report
        .records()
        .iter()
        .flat_map(|record| record.fuel_levels())
        .fold(0.0, |max: f64, &fuel| max.max(fuel));

    let root = BitMapBackend::new(path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption("Fuel Consumption of Multi-Spacecraft", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..t_max, 0.0..fuel_max * 1.05 + 1.0)?;

    chart
        .configure_mesh()
        .x_desc("Time (s)")
        .y_desc("Fuel (kg)")
        .draw()?;

    for (i, record) in report.records().iter().enumerate() {
        let color = Palette99::pick(i).to_rgba();
        chart
            .draw_series(LineSeries::new(
                times.iter().copied().zip(record.fuel_levels().iter().copied()),
                color.stroke_width(2),
            ))?
            .label(format!("{} Fuel", record.name()))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}

/// One GIF frame per tick, each showing every trajectory up to that tick.
pub fn animate_trajectories(report: &RunReport, path: &Path) -> Result<(), Box<dyn Error>> {
    let frames = report.records().first().map_or(0, |record| record.len());
    let root = BitMapBackend::gif(path, PLOT_SIZE, FRAME_DELAY_MS)?.into_drawing_area();

    for frame in 0..frames {
        root.fill(&WHITE)?;
        draw_trajectory_frame(
            report,
            &root,
            "Real-Time Spacecraft Trajectory Animation",
            Some(frame + 1),
        )?;
        root.present()?;
    }
    Ok(())
}

fn draw_trajectory_frame<DB: DrawingBackend>(
    report: &RunReport,
    root: &DrawingArea<DB, plotters::coord::Shift>,
    caption: &str,
    visible_ticks: Option<usize>,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let bounds = plot_bounds(report);
    let mut chart = ChartBuilder::on(root)
        .caption(caption, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(bounds.x_min..bounds.x_max, 0.0..bounds.y_max)?;

    chart
        .configure_mesh()
        .x_desc("Horizontal Position (m)")
        .y_desc("Vertical Position (m)")
        .draw()?;

    for (i, record) in report.records().iter().enumerate() {
        let color = Palette99::pick(i).to_rgba();
        let shown = visible_ticks.unwrap_or(record.len()).min(record.len());
        chart
            .draw_series(LineSeries::new(
                record.positions()[..shown].iter().copied(),
                color.stroke_width(2),
            ))?
            .label(format!("{} Trajectory", record.name()))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SimulationParams, SpacecraftConfig};
    use crate::simulation::Simulation;
    use approx::assert_abs_diff_eq;

    fn run(configs: &[SpacecraftConfig]) -> RunReport {
        Simulation::new(configs, SimulationParams::default())
            .unwrap()
            .run()
    }

    fn config(name: &str, angle: f64) -> SpacecraftConfig {
        SpacecraftConfig {
            name: name.to_string(),
            mass: 1000.0,
            fuel: 100.0,
            thrust: 20000.0,
            angle,
        }
    }

    #[test]
    fn bounds_pad_the_largest_excursion() {
        let report = run(&[config("Lobber", 60.0)]);
        let record = &report.records()[0];
        let x_max = record.positions().iter().map(|&(x, _)| x).fold(0.0, f64::max);

        let bounds = plot_bounds(&report);

        assert_eq!(bounds.x_min, 0.0);
        assert_abs_diff_eq!(bounds.x_max, x_max + 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(bounds.y_max, record.max_altitude() + 10.0, epsilon = 1e-9);
    }

    #[test]
    fn bounds_extend_left_for_backward_flights() {
        let report = run(&[config("Backward", 135.0), config("Forward", 45.0)]);
        let bounds = plot_bounds(&report);
        assert!(bounds.x_min < -10.0);
        assert!(bounds.x_max > 10.0);
    }

    #[test]
    fn grounded_fleet_gets_padding_only() {
        let report = run(&[SpacecraftConfig {
            thrust: 1.0,
            ..config("Weak", 90.0)
        }]);
        let bounds = plot_bounds(&report);
        assert_eq!(bounds.x_min, 0.0);
        assert_abs_diff_eq!(bounds.x_max, 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(bounds.y_max, 10.0, epsilon = 1e-12);
    }
}
