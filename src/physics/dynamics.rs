use super::gravity::gravity_acceleration;
use crate::models::KinematicState;
use nalgebra as na;

pub trait EquationsOfMotion {
    fn acceleration(&self, state: &KinematicState) -> na::Vector2<f64>;
}

/// Free flight between impulses: gravity is the only force.
pub struct BallisticDynamics;

impl EquationsOfMotion for BallisticDynamics {
    fn acceleration(&self, _state: &KinematicState) -> na::Vector2<f64> {
        gravity_acceleration()
    }
}
