use crate::models::{LandingVerdict, Status};

/// Time series collected for one spacecraft, one entry per tick.
#[derive(Debug, Clone, PartialEq)]
pub struct RunRecord {
    name: String,
    positions: Vec<(f64, f64)>,
    fuel_levels: Vec<f64>,
    landing: Option<(usize, LandingVerdict)>,
}

impl RunRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_capacity(name, 0)
    }

    pub fn with_capacity(name: impl Into<String>, ticks: usize) -> Self {
        RunRecord {
            name: name.into(),
            positions: Vec::with_capacity(ticks),
            fuel_levels: Vec::with_capacity(ticks),
            landing: None,
        }
    }

    pub(crate) fn push(&mut self, status: &Status) {
        self.positions.push((status.x, status.y));
        self.fuel_levels.push(status.fuel);
    }

    /// Stores the verdict unless one is already recorded; returns whether it
    /// was stored.
    pub(crate) fn record_landing(&mut self, tick: usize, verdict: LandingVerdict) -> bool {
        if self.landing.is_some() {
            return false;
        }
        self.landing = Some((tick, verdict));
        true
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn positions(&self) -> &[(f64, f64)] {
        &self.positions
    }

    pub fn fuel_levels(&self) -> &[f64] {
        &self.fuel_levels
    }

    pub fn landing(&self) -> Option<LandingVerdict> {
        self.landing.map(|(_, verdict)| verdict)
    }

    /// Tick on which the body first touched the ground.
    pub fn landing_tick(&self) -> Option<usize> {
        self.landing.map(|(tick, _)| tick)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn max_altitude(&self) -> f64 {
        self.positions.iter().map(|&(_, y)| y).fold(0.0, f64::max)
    }
}
