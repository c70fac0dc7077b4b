// error.rs

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid hex payload: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Config(String),
}

/// Failure of a single unit conversion. The decoder keeps the raw value
/// and records the message in its error list.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("Invalid PT100 unit: {unit} (invalid unit, expected Celsius, Fahrenheit or Kelvin)")]
    InvalidUnit { unit: String, raw: u16 },
    #[error("Battery range {min_mv}..{max_mv} mV is degenerate, cannot convert {raw} mV to percentage")]
    DegenerateBatteryRange { min_mv: u16, max_mv: u16, raw: u16 },
}

impl ConvertError {
    /// Raw input that failed to convert, kept as the field's value.
    pub fn raw(&self) -> u16 {
        match self {
            ConvertError::InvalidUnit { raw, .. } => *raw,
            ConvertError::DegenerateBatteryRange { raw, .. } => *raw,
        }
    }
}

// EOF
