pub mod driver;
pub mod record;
pub mod report;

pub use driver::Simulation;
pub use record::RunRecord;
pub use report::RunReport;
