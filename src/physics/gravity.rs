use crate::constants::GRAVITY;
use nalgebra as na;

/// Uniform surface gravity; acts on the vertical axis only.
pub fn gravity_acceleration() -> na::Vector2<f64> {
    na::Vector2::new(0.0, GRAVITY)
}
