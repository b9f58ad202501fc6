pub mod landing;
pub mod spacecraft;
pub mod state;

pub use landing::LandingVerdict;
pub use spacecraft::{Spacecraft, SpacecraftProperties, ThrustOutcome};
pub use state::{KinematicState, Status};
