use super::errors::ConfigError;
use crate::constants::*;

/// Run-wide settings shared by every spacecraft.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParams {
    pub total_time: f64,            // seconds
    pub time_step: f64,             // seconds per tick
    pub thrust_trigger_time: f64,   // seconds into the run
    pub burn_duration: f64,         // seconds
    pub fuel_consumption_rate: f64, // kg/s
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            total_time: DEFAULT_SIMULATION_TIME,
            time_step: DEFAULT_TIME_STEP,
            thrust_trigger_time: DEFAULT_THRUST_TRIGGER_TIME,
            burn_duration: DEFAULT_BURN_DURATION,
            fuel_consumption_rate: DEFAULT_FUEL_CONSUMPTION_RATE,
        }
    }
}

impl SimulationParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive("time_step", self.time_step)?;
        check_positive("total_time", self.total_time)?;
        check_positive("burn_duration", self.burn_duration)?;
        check_positive("fuel_consumption_rate", self.fuel_consumption_rate)?;
        self.tick_count()?;
        self.trigger_tick()?;
        Ok(())
    }

    /// Number of ticks in the run; `total_time` must be a whole multiple of
    /// `time_step` and at most [`MAX_TICKS`] steps long.
    pub fn tick_count(&self) -> Result<usize, ConfigError> {
        let invalid = |reason: String| ConfigError::invalid(None, "total_time", reason);

        if self.total_time / self.time_step > MAX_TICKS as f64 {
            return Err(invalid(format!(
                "{}s of {}s steps exceeds the {} tick limit",
                self.total_time, self.time_step, MAX_TICKS
            )));
        }
        match ticks_in(self.total_time, self.time_step) {
            Some(ticks) if ticks > 0 => Ok(ticks),
            _ => Err(invalid(format!(
                "{}s is not a whole number of {}s steps",
                self.total_time, self.time_step
            ))),
        }
    }

    /// Tick index at which the burn fires, or `None` when the trigger time
    /// is at or past the end of the run.
    pub fn trigger_tick(&self) -> Result<Option<usize>, ConfigError> {
        let invalid = |reason: String| ConfigError::invalid(None, "thrust_trigger_time", reason);

        if !self.thrust_trigger_time.is_finite() || self.thrust_trigger_time < 0.0 {
            return Err(invalid("must be zero or a positive number".to_string()));
        }
        let tick_count = self.tick_count()?;
        if self.thrust_trigger_time >= self.total_time {
            return Ok(None);
        }
        let tick = ticks_in(self.thrust_trigger_time, self.time_step).ok_or_else(|| {
            invalid(format!(
                "{}s does not fall on the {}s tick grid",
                self.thrust_trigger_time, self.time_step
            ))
        })?;
        Ok((tick < tick_count).then_some(tick))
    }

    pub fn time_at(&self, tick: usize) -> f64 {
        tick as f64 * self.time_step
    }
}

/// `duration / step` as a whole number of ticks, if it is one and does not
/// exceed [`MAX_TICKS`].
fn ticks_in(duration: f64, step: f64) -> Option<usize> {
    if !(duration.is_finite() && duration >= 0.0 && step.is_finite() && step > 0.0) {
        return None;
    }
    let ratio = duration / step;
    let rounded = ratio.round();
    if rounded <= MAX_TICKS as f64 && (ratio - rounded).abs() <= TICK_GRID_TOLERANCE {
        Some(rounded as usize)
    } else {
        None
    }
}

fn check_positive(field: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(None, field, "must be a positive number"))
    }
}
