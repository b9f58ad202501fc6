pub const GRAVITY: f64 = -9.8; // Surface gravity, vertical component (m/s²)
pub const CRASH_VELOCITY_THRESHOLD: f64 = -5.0; // Touchdown at or below this vy is a crash (m/s)

// Simulation defaults
pub const DEFAULT_SIMULATION_TIME: f64 = 20.0; // seconds
pub const DEFAULT_TIME_STEP: f64 = 0.1; // seconds per tick
pub const DEFAULT_THRUST_TRIGGER_TIME: f64 = 2.0; // seconds into the run
pub const DEFAULT_BURN_DURATION: f64 = 2.0; // seconds
pub const DEFAULT_FUEL_CONSUMPTION_RATE: f64 = 0.5; // kg of fuel per second of thrust

// Largest distance from a whole tick, in ticks, still treated as on the grid
pub const TICK_GRID_TOLERANCE: f64 = 1e-6;
// Upper bound on ticks per run; every body stores one sample per tick
pub const MAX_TICKS: usize = 1_000_000;

pub const DEFAULT_CONFIG_FILE: &str = "spacecrafts.json";
pub const DEFAULT_OUTPUT_DIR: &str = "output";
