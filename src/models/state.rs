use nalgebra as na;
use std::fmt;

/// Position and velocity of a point mass in the vertical plane.
/// `x` is horizontal, `y` is altitude above the ground.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicState {
    pub position: na::Vector2<f64>, // meters
    pub velocity: na::Vector2<f64>, // m/s
}

impl KinematicState {
    pub fn new(position: na::Vector2<f64>, velocity: na::Vector2<f64>) -> Self {
        KinematicState { position, velocity }
    }

    /// At the origin with zero velocity.
    pub fn at_rest() -> Self {
        KinematicState {
            position: na::Vector2::zeros(),
            velocity: na::Vector2::zeros(),
        }
    }
}

impl Default for KinematicState {
    fn default() -> Self {
        Self::at_rest()
    }
}

/// Snapshot of a spacecraft at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Status {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub fuel: f64,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Position: ({:.2}, {:.2}) m | Velocity: ({:.2}, {:.2}) m/s | Fuel: {:.2} kg",
            self.x, self.y, self.vx, self.vy, self.fuel
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_rest_is_origin() {
        let state = KinematicState::at_rest();
        assert_eq!(state.position, na::Vector2::new(0.0, 0.0));
        assert_eq!(state.velocity, na::Vector2::new(0.0, 0.0));
        assert_eq!(state, KinematicState::default());
    }

    #[test]
    fn status_line_format() {
        let status = Status {
            x: 1.0,
            y: 2.5,
            vx: -0.5,
            vy: 3.0,
            fuel: 99.0,
        };
        assert_eq!(
            status.to_string(),
            "Position: (1.00, 2.50) m | Velocity: (-0.50, 3.00) m/s | Fuel: 99.00 kg"
        );
    }
}
