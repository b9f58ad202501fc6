use chrono::Utc;
use clap::Parser;
use lander_sim::config::prompt::prompt_additional_spacecraft;
use lander_sim::config::{load_spacecraft_configs, SimulationParams};
use lander_sim::constants::*;
use lander_sim::output::write_run_report;
use lander_sim::simulation::Simulation;
use lander_sim::visualization::draw_all;
use std::error::Error;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(about = "Simulates the flight and landing of simple point-mass spacecraft")]
struct Args {
    /// JSON file holding the spacecraft configurations
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Offer to add spacecraft interactively before the run
    #[arg(short, long)]
    interactive: bool,

    /// Directory that receives a timestamped folder of CSV files and plots
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Skip the PNG and GIF plots
    #[arg(long)]
    no_plots: bool,

    /// Log the per-tick status line of every spacecraft
    #[arg(short, long)]
    verbose: bool,

    #[arg(long, default_value_t = DEFAULT_SIMULATION_TIME)]
    duration: f64,

    #[arg(long, default_value_t = DEFAULT_TIME_STEP)]
    time_step: f64,

    #[arg(long, default_value_t = DEFAULT_THRUST_TRIGGER_TIME)]
    trigger_time: f64,

    #[arg(long, default_value_t = DEFAULT_BURN_DURATION)]
    burn_duration: f64,

    #[arg(long, default_value_t = DEFAULT_FUEL_CONSUMPTION_RATE)]
    fuel_rate: f64,
}

impl Args {
    fn simulation_params(&self) -> SimulationParams {
        SimulationParams {
            total_time: self.duration,
            time_step: self.time_step,
            thrust_trigger_time: self.trigger_time,
            burn_duration: self.burn_duration,
            fuel_consumption_rate: self.fuel_rate,
        }
    }

    /// Filter used when `RUST_LOG` is unset.
    fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}

fn init_tracing(default_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    // Everything is validated before the first tick
    let params = args.simulation_params();
    params.validate()?;
    let mut configs = load_spacecraft_configs(&args.config)?;
    if args.interactive {
        let stdin = io::stdin();
        let added = prompt_additional_spacecraft(&mut stdin.lock(), &mut io::stdout(), &mut configs)?;
        tracing::info!(added, "spacecraft added interactively");
    }
    let simulation = Simulation::new(&configs, params)?;

    println!("\nStarting Multi-Spacecraft Simulation...\n");
    let report = simulation.run();

    println!("\nLanding Results:");
    for line in report.landing_summary() {
        println!("{}", line);
    }

    let run_dir = args
        .output_dir
        .join(Utc::now().format("run_%Y%m%d_%H%M%S").to_string());
    let files = write_run_report(&report, &run_dir)?;
    println!(
        "\nSimulation data has been written to {}, {} and {}",
        files.trajectories.display(),
        files.fuel.display(),
        files.landings.display()
    );

    if !args.no_plots {
        for plot in draw_all(&report, &run_dir)? {
            println!("Plot written to {}", plot.display());
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.log_level());

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "simulation aborted");
            ExitCode::FAILURE
        }
    }
}
