use std::{error::Error, fmt, io};

#[derive(Debug)]
pub enum OutputError {
    IoError(io::Error),
    CsvError(csv::Error),
    PlotError(String),
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputError::IoError(e) => write!(f, "I/O error: {}", e),
            OutputError::CsvError(e) => write!(f, "CSV writing error: {}", e),
            OutputError::PlotError(e) => write!(f, "Plotting error: {}", e),
        }
    }
}

impl Error for OutputError {}

impl From<io::Error> for OutputError {
    fn from(err: io::Error) -> Self {
        OutputError::IoError(err)
    }
}

impl From<csv::Error> for OutputError {
    fn from(err: csv::Error) -> Self {
        OutputError::CsvError(err)
    }
}
