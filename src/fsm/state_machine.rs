use super::run_phase::RunPhase;

/// Tracks the lifecycle of one simulation run. Phases only move forward:
/// `Initialized -> Running -> Completed`.
pub struct RunStateMachine {
    current_state: RunPhase,
    last_state_change: f64,
}

impl RunStateMachine {
    pub fn new() -> Self {
        Self {
            current_state: RunPhase::Initialized,
            last_state_change: 0.0,
        }
    }

    pub fn get_current_state(&self) -> RunPhase {
        self.current_state
    }

    pub fn get_last_state_change(&self) -> f64 {
        self.last_state_change
    }

    fn transition_to(&mut self, new_state: RunPhase, time: f64) {
        if self.current_state != new_state {
            tracing::info!(
                "Run state transition at t={:.2}s: {} -> {}",
                time,
                self.current_state,
                new_state
            );
            self.current_state = new_state;
            self.last_state_change = time;
        }
    }

    /// Moves `Initialized -> Running`. Returns `false` from any other phase.
    pub fn start(&mut self, time: f64) -> bool {
        match self.current_state {
            RunPhase::Initialized => {
                self.transition_to(RunPhase::Running, time);
                true
            }
            RunPhase::Running | RunPhase::Completed => false,
        }
    }

    /// Moves `Running -> Completed`. Returns `false` from any other phase.
    pub fn complete(&mut self, time: f64) -> bool {
        match self.current_state {
            RunPhase::Running => {
                self.transition_to(RunPhase::Completed, time);
                true
            }
            RunPhase::Initialized | RunPhase::Completed => false,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.current_state, RunPhase::Running)
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.current_state, RunPhase::Completed)
    }
}

impl Default for RunStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_lifecycle() {
        let mut fsm = RunStateMachine::new();
        assert_eq!(fsm.get_current_state(), RunPhase::Initialized);

        assert!(fsm.start(0.0));
        assert!(fsm.is_running());

        assert!(fsm.complete(20.0));
        assert!(fsm.is_completed());
        assert_eq!(fsm.get_last_state_change(), 20.0);
    }

    #[test]
    fn cannot_complete_before_start() {
        let mut fsm = RunStateMachine::new();
        assert!(!fsm.complete(1.0));
        assert_eq!(fsm.get_current_state(), RunPhase::Initialized);
    }

    #[test]
    fn completed_is_terminal() {
        let mut fsm = RunStateMachine::new();
        fsm.start(0.0);
        fsm.complete(5.0);
        assert!(!fsm.start(6.0));
        assert!(!fsm.complete(7.0));
        assert_eq!(fsm.get_current_state(), RunPhase::Completed);
        assert_eq!(fsm.get_last_state_change(), 5.0);
    }

    #[test]
    fn phase_names() {
        assert_eq!(RunPhase::Initialized.to_string(), "Initialized");
        assert_eq!(RunPhase::Running.to_string(), "Running");
        assert_eq!(RunPhase::Completed.to_string(), "Completed");
    }
}
