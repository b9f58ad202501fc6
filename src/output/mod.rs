pub mod csv_export;
pub mod errors;

pub use csv_export::{write_run_report, ExportedFiles};
pub use errors::OutputError;
