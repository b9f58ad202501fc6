pub mod errors;
pub mod loader;
pub mod prompt;
pub mod simulation;
pub mod spacecraft;

pub use errors::ConfigError;
pub use loader::{load_spacecraft_configs, parse_spacecraft_configs};
pub use simulation::SimulationParams;
pub use spacecraft::{RawSpacecraftConfig, SpacecraftConfig};
