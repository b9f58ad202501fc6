use super::record::RunRecord;
use crate::config::SimulationParams;

/// Everything a finished run hands to reporting. Read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    params: SimulationParams,
    records: Vec<RunRecord>,
}

impl RunReport {
    pub(crate) fn new(params: SimulationParams, records: Vec<RunRecord>) -> Self {
        RunReport { params, records }
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    /// Records in input configuration order.
    pub fn records(&self) -> &[RunRecord] {
        &self.records
    }

    pub fn record(&self, name: &str) -> Option<&RunRecord> {
        self.records.iter().find(|record| record.name() == name)
    }

    pub fn into_records(self) -> Vec<RunRecord> {
        self.records
    }

    /// Simulated time label of each tick, aligned with the record series.
    pub fn time_axis(&self) -> Vec<f64> {
        let ticks = self.records.first().map_or(0, RunRecord::len);
        (0..ticks).map(|tick| self.params.time_at(tick)).collect()
    }

    /// One line per spacecraft, e.g. `"Alpha: Safe Landing"`.
    pub fn landing_summary(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|record| match record.landing() {
                Some(verdict) => format!("{}: {}", record.name(), verdict),
                None => format!("{}: Did not land", record.name()),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LandingVerdict, Status};

    fn record(name: &str, ticks: usize, landing: Option<LandingVerdict>) -> RunRecord {
        let mut record = RunRecord::new(name);
        for i in 0..ticks {
            record.push(&Status {
                x: 0.0,
                y: i as f64,
                vx: 0.0,
                vy: 0.0,
                fuel: 1.0,
            });
        }
        if let Some(verdict) = landing {
            record.record_landing(0, verdict);
        }
        record
    }

    #[test]
    fn summary_covers_every_outcome() {
        let report = RunReport::new(
            SimulationParams::default(),
            vec![
                record("Alpha", 3, Some(LandingVerdict::SafeLanding)),
                record("Beta", 3, Some(LandingVerdict::CrashLanding)),
                record("Gamma", 3, None),
            ],
        );
        assert_eq!(
            report.landing_summary(),
            ["Alpha: Safe Landing", "Beta: Crash Landing", "Gamma: Did not land"]
        );
    }

    #[test]
    fn time_axis_follows_tick_grid() {
        let report = RunReport::new(SimulationParams::default(), vec![record("Alpha", 4, None)]);
        let axis = report.time_axis();
        assert_eq!(axis.len(), 4);
        assert_eq!(axis[0], 0.0);
        assert_eq!(axis[3], 3.0 * 0.1);
    }

    #[test]
    fn lookup_by_name() {
        let report = RunReport::new(
            SimulationParams::default(),
            vec![record("Alpha", 1, None), record("Beta", 2, None)],
        );
        assert_eq!(report.record("Beta").map(RunRecord::len), Some(2));
        assert!(report.record("Delta").is_none());
        assert_eq!(report.into_records().len(), 2);
    }
}
