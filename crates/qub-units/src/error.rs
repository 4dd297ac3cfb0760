use thiserror::Error;

/// Recoverable measure-parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    #[error("\"{text}\" does not start with a numeric magnitude")]
    InvalidMagnitude { text: String },

    #[error("\"{text}\" does not name a unit")]
    MissingUnit { text: String },

    #[error("unknown unit \"{unit}\"")]
    UnknownUnit { unit: String },
}

/// Split a measure like `5km` or `2.5 l` into magnitude and unit text.
pub(crate) fn split_measure(text: &str) -> Result<(f64, &str), UnitError> {
    let trimmed = text.trim();
    let unit_start = trimmed
        .find(|ch: char| ch.is_alphabetic())
        .ok_or_else(|| UnitError::MissingUnit {
            text: trimmed.to_string(),
        })?;

    let magnitude: f64 =
        trimmed[..unit_start]
            .trim()
            .parse()
            .map_err(|_| UnitError::InvalidMagnitude {
                text: trimmed.to_string(),
            })?;
    if !magnitude.is_finite() {
        return Err(UnitError::InvalidMagnitude {
            text: trimmed.to_string(),
        });
    }

    Ok((magnitude, trimmed[unit_start..].trim()))
}
