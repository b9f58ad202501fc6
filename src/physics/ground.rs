use crate::models::KinematicState;

/// Ground contact detected while enforcing the floor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Touchdown {
    /// Vertical velocity just before it was clamped (m/s).
    pub vertical_velocity: f64,
}

/// Keeps the body at or above `y = 0`. A body pushed below the floor is put
/// back on it and loses any downward velocity; upward velocity is kept, so
/// there is no bounce.
pub fn apply_ground_constraint(state: &mut KinematicState) -> Option<Touchdown> {
    if state.position.y >= 0.0 {
        return None;
    }

    let touchdown = Touchdown {
        vertical_velocity: state.velocity.y,
    };
    state.position.y = 0.0;
    state.velocity.y = state.velocity.y.max(0.0);
    Some(touchdown)
}
