use super::record::RunRecord;
use super::report::RunReport;
use crate::config::spacecraft::ensure_unique_names;
use crate::config::{ConfigError, SimulationParams, SpacecraftConfig};
use crate::fsm::{RunPhase, RunStateMachine};
use crate::models::{LandingVerdict, Spacecraft};

/// A spacecraft together with its scheduled burn and collected series.
struct SimulatedBody {
    spacecraft: Spacecraft,
    thrust: f64, // N
    angle: f64,  // degrees
    record: RunRecord,
}

impl SimulatedBody {
    fn from_config(config: &SpacecraftConfig, ticks: usize) -> Self {
        SimulatedBody {
            spacecraft: Spacecraft::from_properties(config),
            thrust: config.thrust,
            angle: config.angle,
            record: RunRecord::with_capacity(config.name.clone(), ticks),
        }
    }

    fn advance(&mut self, tick: usize, burn_tick: Option<usize>, params: &SimulationParams) {
        if burn_tick == Some(tick) {
            self.spacecraft.apply_thrust(
                self.thrust,
                self.angle,
                params.burn_duration,
                params.fuel_consumption_rate,
            );
        }

        let touchdown = self.spacecraft.update_position(params.time_step);
        let status = self.spacecraft.status();
        self.record.push(&status);

        // The ground clamp has already zeroed a downward vy, so the verdict
        // uses the velocity captured just before it.
        if status.y == 0.0 && self.record.landing().is_none() {
            let impact_velocity = touchdown.map_or(status.vy, |t| t.vertical_velocity);
            let verdict = LandingVerdict::classify(impact_velocity);
            self.record.record_landing(tick, verdict);
            tracing::info!(
                spacecraft = %self.spacecraft.name(),
                impact_velocity,
                "{} has landed: {}",
                self.spacecraft.name(),
                verdict
            );
        }

        tracing::debug!(
            spacecraft = %self.spacecraft.name(),
            "Time: {:.1}s | {}",
            params.time_at(tick),
            status
        );
    }
}

/// Fixed-step simulation of several independent spacecraft.
///
/// Each tick visits the bodies in configuration order: fire the scheduled
/// burn if this is the burn tick, integrate one step, append the status to
/// the body's [`RunRecord`] and capture the landing verdict on the first
/// tick the body sits on the ground.
pub struct Simulation {
    params: SimulationParams,
    tick_count: usize,
    burn_tick: Option<usize>,
    current_tick: usize,
    bodies: Vec<SimulatedBody>,
    fsm: RunStateMachine,
}

impl Simulation {
    /// Validates everything up front; no tick runs unless every spacecraft
    /// and every run setting is valid.
    pub fn new(configs: &[SpacecraftConfig], params: SimulationParams) -> Result<Self, ConfigError> {
        params.validate()?;
        if configs.is_empty() {
            return Err(ConfigError::invalid(
                None,
                "spacecraft",
                "at least one spacecraft is required",
            ));
        }
        for (index, config) in configs.iter().enumerate() {
            config.validate(index)?;
        }
        ensure_unique_names(configs)?;

        let tick_count = params.tick_count()?;
        let burn_tick = params.trigger_tick()?;
        if burn_tick.is_none() {
            tracing::warn!(
                trigger_time = params.thrust_trigger_time,
                total_time = params.total_time,
                "thrust trigger is past the end of the run, no burn will fire"
            );
        }
        let bodies = configs
            .iter()
            .map(|config| SimulatedBody::from_config(config, tick_count))
            .collect();

        tracing::info!(
            spacecraft = configs.len(),
            ticks = tick_count,
            burn_tick = ?burn_tick,
            "simulation initialized"
        );

        Ok(Simulation {
            params,
            tick_count,
            burn_tick,
            current_tick: 0,
            bodies,
            fsm: RunStateMachine::new(),
        })
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    pub fn phase(&self) -> RunPhase {
        self.fsm.get_current_state()
    }

    pub fn current_tick(&self) -> usize {
        self.current_tick
    }

    pub fn tick_count(&self) -> usize {
        self.tick_count
    }

    pub fn spacecraft(&self) -> impl Iterator<Item = &Spacecraft> {
        self.bodies.iter().map(|body| &body.spacecraft)
    }

    /// Runs one tick for every body. Returns `false` once the run is complete.
    pub fn step(&mut self) -> bool {
        if self.fsm.is_completed() {
            return false;
        }
        if !self.fsm.is_running() {
            self.fsm.start(self.params.time_at(self.current_tick));
        }

        let tick = self.current_tick;
        for body in &mut self.bodies {
            body.advance(tick, self.burn_tick, &self.params);
        }
        self.current_tick += 1;

        if self.current_tick == self.tick_count {
            self.fsm.complete(self.params.time_at(self.current_tick));
        }
        true
    }

    /// Runs every remaining tick and hands the records over.
    pub fn run(mut self) -> RunReport {
        while self.step() {}
        self.into_report()
    }

    fn into_report(self) -> RunReport {
        let records = self.bodies.into_iter().map(|body| body.record).collect();
        RunReport::new(self.params, records)
    }
}
