//! Furniture module - named length × width × height records

use crate::measurement::{Measurement, MeasurementError};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Field delimiter of the persisted line format.
pub const FIELD_DELIMITER: char = '|';

/// Width of the name column in [`Furniture::display_row`].
pub const NAME_COLUMN_WIDTH: usize = 20;

/// Errors produced when building or decoding a furniture record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FurnitureError {
    /// Name was empty or whitespace-only
    #[error("furniture name cannot be empty")]
    EmptyName,

    /// Name contained a character that would break the line format
    #[error("furniture name `{0}` cannot contain `|` or line breaks")]
    InvalidName(String),

    /// Line did not split into name plus three measurements
    #[error("expected 4 `|`-separated fields, found {0}")]
    FieldCount(usize),

    /// One of the measurement fields failed to parse
    #[error("invalid {field}: {source}")]
    Measurement {
        /// Which dimension failed (`length`, `width` or `height`)
        field: &'static str,
        /// Underlying parse error
        #[source]
        source: MeasurementError,
    },
}

/// A piece of furniture with its three dimensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Furniture {
    name: String,
    /// Length
    pub length: Measurement,
    /// Width
    pub width: Measurement,
    /// Height (not used by the fit test)
    pub height: Measurement,
}

impl Furniture {
    /// Create a new record
    ///
    /// # Errors
    /// Returns an error if the name is blank or contains `|`, `\n` or `\r`.
    pub fn new(
        name: impl Into<String>,
        length: Measurement,
        width: Measurement,
        height: Measurement,
    ) -> Result<Self, FurnitureError> {
        let name = name.into();
        validate_name(&name)?;

        Ok(Self {
            name,
            length,
            width,
            height,
        })
    }

    /// Record name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Encode as `name|L.feet,L.inches|W.feet,W.inches|H.feet,H.inches`
    pub fn encode(&self) -> String {
        format!(
            "{}{d}{}{d}{}{d}{}",
            self.name,
            self.length.encode(),
            self.width.encode(),
            self.height.encode(),
            d = FIELD_DELIMITER,
        )
    }

    /// Fixed-width row: 20-char name column, then each dimension in a 10-char field
    pub fn display_row(&self) -> String {
        let name: String = self.name.chars().take(NAME_COLUMN_WIDTH).collect();
        format!(
            "{:<name_width$} | L: {:<10} | W: {:<10} | H: {:<10}",
            name,
            self.length,
            self.width,
            self.height,
            name_width = NAME_COLUMN_WIDTH,
        )
    }
}

impl fmt::Display for Furniture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_row())
    }
}

impl FromStr for Furniture {
    type Err = FurnitureError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
        let [name, length, width, height] = fields.as_slice() else {
            return Err(FurnitureError::FieldCount(fields.len()));
        };

        Self::new(
            *name,
            parse_dimension("length", length)?,
            parse_dimension("width", width)?,
            parse_dimension("height", height)?,
        )
    }
}

fn parse_dimension(field: &'static str, value: &str) -> Result<Measurement, FurnitureError> {
    value
        .parse()
        .map_err(|source| FurnitureError::Measurement { field, source })
}

fn validate_name(name: &str) -> Result<(), FurnitureError> {
    if name.trim().is_empty() {
        return Err(FurnitureError::EmptyName);
    }
    if name.contains([FIELD_DELIMITER, '\n', '\r']) {
        return Err(FurnitureError::InvalidName(name.to_string()));
    }
    Ok(())
}
