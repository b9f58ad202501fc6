use super::landing::LandingVerdict;
use super::state::{KinematicState, Status};
use crate::integrators::semi_implicit_euler::SemiImplicitEuler;
use crate::physics::dynamics::BallisticDynamics;
use crate::physics::ground::{apply_ground_constraint, Touchdown};
use crate::physics::thrust::thrust_acceleration;
use nalgebra as na;

pub trait SpacecraftProperties {
    fn name(&self) -> &str;
    fn mass(&self) -> f64;
    fn initial_fuel(&self) -> f64;
}

/// Result of a thrust request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThrustOutcome {
    Applied {
        delta_v: na::Vector2<f64>,
        fuel_used: f64,
    },
    OutOfFuel,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Spacecraft {
    name: String,
    mass: f64, // kg, dry mass used for thrust acceleration
    fuel: f64, // kg
    state: KinematicState,
    thrust: f64, // N, last applied
}

impl Spacecraft {
    pub fn new(name: impl Into<String>, mass: f64, fuel: f64) -> Self {
        Spacecraft {
            name: name.into(),
            mass,
            fuel,
            state: KinematicState::at_rest(),
            thrust: 0.0,
        }
    }

    pub fn from_properties<T: SpacecraftProperties>(properties: &T) -> Self {
        Self::new(properties.name(), properties.mass(), properties.initial_fuel())
    }

    pub fn with_state(self, state: KinematicState) -> Self {
        Self { state, ..self }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn fuel(&self) -> f64 {
        self.fuel
    }

    pub fn thrust(&self) -> f64 {
        self.thrust
    }

    pub fn state(&self) -> &KinematicState {
        &self.state
    }

    /// Applies `thrust` newtons at `angle` degrees as a single velocity
    /// impulse of `acceleration * duration`, burning `fuel_rate * duration`
    /// kilograms of fuel. Nothing changes when the tank is already empty.
    pub fn apply_thrust(
        &mut self,
        thrust: f64,
        angle: f64,
        duration: f64,
        fuel_rate: f64,
    ) -> ThrustOutcome {
        if self.fuel <= 0.0 {
            tracing::warn!(spacecraft = %self.name, "Out of fuel! No thrust applied.");
            return ThrustOutcome::OutOfFuel;
        }

        self.thrust = thrust;
        let delta_v = thrust_acceleration(thrust, angle, self.mass) * duration;
        self.state.velocity += delta_v;

        let remaining = (self.fuel - fuel_rate * duration).max(0.0);
        let fuel_used = self.fuel - remaining;
        self.fuel = remaining;

        tracing::debug!(
            spacecraft = %self.name,
            thrust,
            angle,
            dvx = delta_v.x,
            dvy = delta_v.y,
            fuel_used,
            "thrust applied"
        );

        ThrustOutcome::Applied { delta_v, fuel_used }
    }

    /// Advances one tick under gravity and enforces the ground.
    /// Returns the touchdown when the body was pushed below `y = 0`; its
    /// vertical velocity is the value before clamping.
    pub fn update_position(&mut self, dt: f64) -> Option<Touchdown> {
        let integrator = SemiImplicitEuler::new(BallisticDynamics);
        self.state = integrator.integrate(&self.state, dt);
        apply_ground_constraint(&mut self.state)
    }

    /// Landing verdict for the current vertical velocity.
    pub fn check_landing(&self) -> LandingVerdict {
        LandingVerdict::classify(self.state.velocity.y)
    }

    pub fn status(&self) -> Status {
        Status {
            x: self.state.position.x,
            y: self.state.position.y,
            vx: self.state.velocity.x,
            vy: self.state.velocity.y,
            fuel: self.fuel,
        }
    }
}
