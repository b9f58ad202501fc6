use crate::models::KinematicState;
use crate::physics::dynamics::EquationsOfMotion;

/// Semi-implicit (symplectic) Euler: velocity is advanced first and the new
/// velocity is used to advance position.
pub struct SemiImplicitEuler<T: EquationsOfMotion> {
    eom: T,
}

impl<T: EquationsOfMotion> SemiImplicitEuler<T> {
    pub fn new(eom: T) -> Self {
        SemiImplicitEuler { eom }
    }

    pub fn integrate(&self, state: &KinematicState, dt: f64) -> KinematicState {
        let velocity = state.velocity + self.eom.acceleration(state) * dt;
        let position = state.position + velocity * dt;
        KinematicState { position, velocity }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::dynamics::BallisticDynamics;
    use approx::assert_abs_diff_eq;
    use nalgebra as na;

    #[test]
    fn position_uses_updated_velocity() {
        let integrator = SemiImplicitEuler::new(BallisticDynamics);
        let state = KinematicState::new(na::Vector2::new(0.0, 100.0), na::Vector2::new(2.0, 0.0));

        let next = integrator.integrate(&state, 0.1);

        assert_abs_diff_eq!(next.velocity, na::Vector2::new(2.0, -0.98), epsilon = 1e-12);
        // Explicit Euler would leave y at 100.0 on the first step
        assert_abs_diff_eq!(next.position, na::Vector2::new(0.2, 99.902), epsilon = 1e-12);
    }

    #[test]
    fn horizontal_velocity_is_preserved_exactly() {
        let integrator = SemiImplicitEuler::new(BallisticDynamics);
        let mut state = KinematicState::new(na::Vector2::new(0.0, 1000.0), na::Vector2::new(1.25, 0.0));
        for _ in 0..50 {
            state = integrator.integrate(&state, 0.1);
        }
        assert_eq!(state.velocity.x, 1.25);
    }
}
