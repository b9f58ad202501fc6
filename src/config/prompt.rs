use super::errors::ConfigError;
use super::spacecraft::{ensure_unique_names, SpacecraftConfig};
use std::io::{BufRead, Write};

const STDIN: &str = "<stdin>";

/// Asks whether to add more spacecraft and reads each one field by field.
/// New entries are validated like file entries and appended to `configs`.
/// Returns how many were added.
pub fn prompt_additional_spacecraft<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    configs: &mut Vec<SpacecraftConfig>,
) -> Result<usize, ConfigError> {
    let mut added = 0;
    let mut question = "\nWould you like to add a new spacecraft? (yes/no): ";

    while ask(reader, writer, question)?.map_or(false, |answer| answer.eq_ignore_ascii_case("yes")) {
        let index = configs.len();
        writeln!(writer, "\nAdd a New Spacecraft:").map_err(|e| ConfigError::unavailable(STDIN, e))?;

        let config = SpacecraftConfig {
            name: read_field(reader, writer, index, "name", "Enter spacecraft name: ")?,
            mass: read_number(reader, writer, index, "mass", "Enter spacecraft mass (kg): ")?,
            fuel: read_number(reader, writer, index, "fuel", "Enter initial fuel (kg): ")?,
            thrust: read_number(reader, writer, index, "thrust", "Enter thrust (N): ")?,
            angle: read_number(reader, writer, index, "angle", "Enter launch angle (degrees): ")?,
        };
        config.validate(index)?;
        configs.push(config);
        ensure_unique_names(configs)?;

        added += 1;
        question = "Would you like to add another spacecraft? (yes/no): ";
    }

    Ok(added)
}

/// Prints `prompt` and returns the trimmed reply, or `None` at end of input.
fn ask<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> Result<Option<String>, ConfigError> {
    write!(writer, "{}", prompt).map_err(|e| ConfigError::unavailable(STDIN, e))?;
    writer.flush().map_err(|e| ConfigError::unavailable(STDIN, e))?;

    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .map_err(|e| ConfigError::unavailable(STDIN, e))?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn read_field<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    index: usize,
    field: &'static str,
    prompt: &str,
) -> Result<String, ConfigError> {
    ask(reader, writer, prompt)?.ok_or(ConfigError::MissingField { index, field })
}

fn read_number<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    index: usize,
    field: &'static str,
    prompt: &str,
) -> Result<f64, ConfigError> {
    let text = read_field(reader, writer, index, field, prompt)?;
    text.parse::<f64>()
        .map_err(|_| ConfigError::invalid(Some(index), field, format!("'{}' is not a number", text)))
}
