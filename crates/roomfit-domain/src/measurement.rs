//! Measurement module - feet and inches with carry normalization

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Inches per foot.
pub const INCHES_PER_FOOT: u32 = 12;

/// Errors produced when parsing a measurement from text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeasurementError {
    /// Encoded form did not contain exactly one comma
    #[error("expected `feet,inches`, got `{0}`")]
    Format(String),

    /// A component was not a non-negative integer
    #[error("invalid {component} value `{value}`: expected a non-negative integer")]
    InvalidNumber {
        /// Which half of the pair failed (`feet` or `inches`)
        component: &'static str,
        /// The offending text
        value: String,
    },
}

/// A length in whole feet and inches
///
/// Always normalized: `inches` is in `0..=11`. Fields are private so the
/// invariant cannot be bypassed; field order makes the derived ordering
/// compare feet first, then inches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Measurement {
    feet: u32,
    inches: u32,
}

impl Measurement {
    /// Create a measurement, carrying every 12 inches into feet
    ///
    /// `Measurement::new(2, 15)` equals `Measurement::new(3, 3)`.
    pub fn new(feet: u32, inches: u32) -> Self {
        Self {
            feet: feet.saturating_add(inches / INCHES_PER_FOOT),
            inches: inches % INCHES_PER_FOOT,
        }
    }

    /// Whole feet
    pub fn feet(&self) -> u32 {
        self.feet
    }

    /// Remaining inches (`0..=11`)
    pub fn inches(&self) -> u32 {
        self.inches
    }

    /// Total length expressed in inches
    pub fn total_inches(&self) -> u64 {
        u64::from(self.feet) * u64::from(INCHES_PER_FOOT) + u64::from(self.inches)
    }

    /// True when this length is no longer than `limit` (equality fits)
    pub fn fits_within(&self, limit: &Measurement) -> bool {
        self <= limit
    }

    /// Encode as `feet,inches` for the line format
    pub fn encode(&self) -> String {
        format!("{},{}", self.feet, self.inches)
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() honors width and alignment flags
        f.pad(&format!("{} ft {} in", self.feet, self.inches))
    }
}

impl FromStr for Measurement {
    type Err = MeasurementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (feet, inches) = s
            .split_once(',')
            .filter(|(_, rest)| !rest.contains(','))
            .ok_or_else(|| MeasurementError::Format(s.to_string()))?;

        Ok(Self::new(
            parse_component("feet", feet)?,
            parse_component("inches", inches)?,
        ))
    }
}

fn parse_component(component: &'static str, value: &str) -> Result<u32, MeasurementError> {
    let trimmed = value.trim();
    trimmed
        .parse::<u32>()
        .map_err(|_| MeasurementError::InvalidNumber {
            component,
            value: trimmed.to_string(),
        })
}
