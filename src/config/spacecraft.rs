//! Spacecraft configuration records.
//!
//! Input files hold a JSON array of records, one per vehicle:
//!
//! ```json
//! [
//!   { "name": "Eagle", "mass": 1000, "fuel": 100, "thrust": 2000, "angle": 90 }
//! ]
//! ```
//!
//! [`RawSpacecraftConfig`] mirrors a record as written, so that an absent key
//! can be told apart from a key holding a bad value. [`SpacecraftConfig`] is
//! the validated form the simulation consumes.

use super::errors::ConfigError;
use crate::models::spacecraft::SpacecraftProperties;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;

pub const REQUIRED_FIELDS: [&str; 5] = ["name", "mass", "fuel", "thrust", "angle"];

#[derive(Deserialize, Debug, Clone, Default)]
pub struct RawSpacecraftConfig {
    pub name: Option<Value>,
    pub mass: Option<Value>,   // kg
    pub fuel: Option<Value>,   // kg
    pub thrust: Option<Value>, // N
    pub angle: Option<Value>,  // degrees from the positive x-axis
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpacecraftConfig {
    pub name: String,
    pub mass: f64,
    pub fuel: f64,
    pub thrust: f64,
    pub angle: f64,
}

impl RawSpacecraftConfig {
    /// Checks the keys in declaration order and stops at the first problem.
    pub fn validate(&self, index: usize) -> Result<SpacecraftConfig, ConfigError> {
        let name = match require(index, "name", &self.name)? {
            Value::String(name) => name.clone(),
            _ => return Err(ConfigError::invalid(Some(index), "name", "must be a non-empty string")),
        };
        check_name(index, &name)?;

        let config = SpacecraftConfig {
            name,
            mass: positive_number(index, "mass", &self.mass)?,
            fuel: positive_number(index, "fuel", &self.fuel)?,
            thrust: positive_number(index, "thrust", &self.thrust)?,
            angle: positive_number(index, "angle", &self.angle)?,
        };
        Ok(config)
    }
}

impl SpacecraftConfig {
    /// Re-checks an already typed record, e.g. one built by hand or entered
    /// interactively.
    pub fn validate(&self, index: usize) -> Result<(), ConfigError> {
        check_name(index, &self.name)?;
        check_positive(index, "mass", self.mass)?;
        check_positive(index, "fuel", self.fuel)?;
        check_positive(index, "thrust", self.thrust)?;
        check_positive(index, "angle", self.angle)?;
        Ok(())
    }
}

impl SpacecraftProperties for SpacecraftConfig {
    fn name(&self) -> &str {
        &self.name
    }

    fn mass(&self) -> f64 {
        self.mass
    }

    fn initial_fuel(&self) -> f64 {
        self.fuel
    }
}

/// Validates every record and the uniqueness of names across the list.
pub fn validate_spacecraft_configs(
    raw: &[RawSpacecraftConfig],
) -> Result<Vec<SpacecraftConfig>, ConfigError> {
    let configs = raw
        .iter()
        .enumerate()
        .map(|(index, config)| config.validate(index))
        .collect::<Result<Vec<_>, _>>()?;
    ensure_unique_names(&configs)?;
    Ok(configs)
}

pub fn ensure_unique_names(configs: &[SpacecraftConfig]) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for (index, config) in configs.iter().enumerate() {
        if !seen.insert(config.name.as_str()) {
            return Err(ConfigError::invalid(
                Some(index),
                "name",
                format!("'{}' is already used by another spacecraft", config.name),
            ));
        }
    }
    Ok(())
}

fn require<'a>(
    index: usize,
    field: &'static str,
    value: &'a Option<Value>,
) -> Result<&'a Value, ConfigError> {
    match value {
        None | Some(Value::Null) => Err(ConfigError::MissingField { index, field }),
        Some(value) => Ok(value),
    }
}

fn positive_number(
    index: usize,
    field: &'static str,
    value: &Option<Value>,
) -> Result<f64, ConfigError> {
    let number = require(index, field, value)?
        .as_f64()
        .ok_or_else(|| ConfigError::invalid(Some(index), field, "must be a positive number"))?;
    check_positive(index, field, number)?;
    Ok(number)
}

fn check_positive(index: usize, field: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(Some(index), field, "must be a positive number"))
    }
}

fn check_name(index: usize, name: &str) -> Result<(), ConfigError> {
    if name.trim().is_empty() {
        Err(ConfigError::invalid(Some(index), "name", "must be a non-empty string"))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    fn raw(value: Value) -> RawSpacecraftConfig {
        serde_json::from_value(value).unwrap()
    }

    fn eagle() -> Value {
        json!({ "name": "Eagle", "mass": 1000, "fuel": 100.5, "thrust": 2000, "angle": 90 })
    }

    #[test]
    fn valid_record_converts() {
        let config = raw(eagle()).validate(0).unwrap();
        assert_eq!(
            config,
            SpacecraftConfig {
                name: "Eagle".to_string(),
                mass: 1000.0,
                fuel: 100.5,
                thrust: 2000.0,
                angle: 90.0,
            }
        );
        config.validate(0).unwrap();
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut value = eagle();
        value["color"] = json!("red");
        assert!(raw(value).validate(0).is_ok());
    }

    #[test_case("name"; "name")]
    #[test_case("mass"; "mass")]
    #[test_case("fuel"; "fuel")]
    #[test_case("thrust"; "thrust")]
    #[test_case("angle"; "angle")]
    fn test_missing_field(field: &str) {
        let mut value = eagle();
        value.as_object_mut().unwrap().remove(field);
        match raw(value).validate(4) {
            Err(ConfigError::MissingField { index, field: missing }) => {
                assert_eq!(index, 4);
                assert_eq!(missing, field);
            }
            other => panic!("expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn null_counts_as_missing() {
        let mut value = eagle();
        value["thrust"] = Value::Null;
        assert!(matches!(
            raw(value).validate(0),
            Err(ConfigError::MissingField { field: "thrust", .. })
        ));
    }

    #[test_case("name", json!(""); "empty name")]
    #[test_case("name", json!("   "); "blank name")]
    #[test_case("name", json!(42); "numeric name")]
    #[test_case("mass", json!(0); "zero mass")]
    #[test_case("fuel", json!(-10.0); "negative fuel")]
    #[test_case("thrust", json!("2000"); "thrust as string")]
    #[test_case("angle", json!(true); "boolean angle")]
    #[test_case("angle", json!(-45); "negative angle")]
    fn test_invalid_value(field: &str, bad: Value) {
        let mut value = eagle();
        value[field] = bad;
        match raw(value).validate(1) {
            Err(ConfigError::InvalidValue {
                index,
                field: invalid,
                ..
            }) => {
                assert_eq!(index, Some(1));
                assert_eq!(invalid, field);
            }
            other => panic!("expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn first_problem_in_key_order_wins() {
        let value = json!({ "name": "Broken", "mass": -1, "angle": 10 });
        assert!(matches!(
            raw(value).validate(0),
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "mass"
        ));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let records = vec![raw(eagle()), raw(eagle())];
        match validate_spacecraft_configs(&records) {
            Err(ConfigError::InvalidValue { index, field, .. }) => {
                assert_eq!(index, Some(1));
                assert_eq!(field, "name");
            }
            other => panic!("expected duplicate name error, got {:?}", other),
        }
    }

    #[test]
    fn typed_record_rejects_non_finite_values() {
        let config = SpacecraftConfig {
            name: "Lander".to_string(),
            mass: f64::INFINITY,
            fuel: 10.0,
            thrust: 10.0,
            angle: 10.0,
        };
        assert!(config.validate(0).is_err());
        let config = SpacecraftConfig {
            fuel: f64::NAN,
            mass: 10.0,
            ..config
        };
        assert!(config.validate(0).is_err());
    }

    #[test]
    fn config_exposes_spacecraft_properties() {
        let config = raw(eagle()).validate(0).unwrap();
        assert_eq!(SpacecraftProperties::name(&config), "Eagle");
        assert_eq!(config.mass(), 1000.0);
        assert_eq!(config.initial_fuel(), 100.5);
    }
}
