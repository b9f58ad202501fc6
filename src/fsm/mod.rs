pub mod run_phase;
pub mod state_machine;

pub use run_phase::RunPhase;
pub use state_machine::RunStateMachine;
