use std::path::PathBuf;
use std::{error::Error, fmt, io};

#[derive(Debug)]
pub enum ConfigError {
    /// A required key is absent (or `null`) in entry `index`.
    MissingField { index: usize, field: &'static str },
    /// A value is present but unusable. `index` is `None` for run-level
    /// settings that do not belong to one spacecraft.
    InvalidValue {
        index: Option<usize>,
        field: String,
        reason: String,
    },
    SourceUnavailable { path: PathBuf, source: io::Error },
    Malformed(String),
}

impl ConfigError {
    pub fn invalid(index: Option<usize>, field: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            index,
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn unavailable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ConfigError::SourceUnavailable {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingField { index, field } => write!(
                f,
                "Missing key '{}' in spacecraft configuration #{}",
                field,
                index + 1
            ),
            ConfigError::InvalidValue {
                index: Some(index),
                field,
                reason,
            } => write!(
                f,
                "Invalid '{}' in spacecraft configuration #{}: {}",
                field,
                index + 1,
                reason
            ),
            ConfigError::InvalidValue {
                index: None,
                field,
                reason,
            } => write!(f, "Invalid '{}': {}", field, reason),
            ConfigError::SourceUnavailable { path, source } => {
                write!(f, "Cannot read '{}': {}", path.display(), source)
            }
            ConfigError::Malformed(message) => write!(f, "Malformed configuration: {}", message),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigError::SourceUnavailable { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Malformed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_one_based() {
        let missing = ConfigError::MissingField {
            index: 0,
            field: "mass",
        };
        assert_eq!(
            missing.to_string(),
            "Missing key 'mass' in spacecraft configuration #1"
        );

        let invalid = ConfigError::invalid(Some(2), "fuel", "must be a positive number");
        assert_eq!(
            invalid.to_string(),
            "Invalid 'fuel' in spacecraft configuration #3: must be a positive number"
        );
    }

    #[test]
    fn unavailable_keeps_io_source() {
        let err = ConfigError::unavailable(
            "missing.json",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("Cannot read 'missing.json'"));
    }
}
