// config.rs

use std::{fs, path::Path};

use crate::*;

pub const DEFAULT_PT100_UNIT: &str = "Celsius";

/// Deployment-time decoder settings, chosen once per installation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConversionConfig {
    /// Convert battery millivolts to percentage.
    pub convert_battery: bool,
    /// Convert raw PT100 counts to a temperature.
    pub convert_pt100: bool,
    /// "Celsius", "Fahrenheit" or "Kelvin"; only the first letter matters.
    pub pt100_unit: String,
    pub battery_min_mv: u16,
    pub battery_max_mv: u16,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            convert_battery: false,
            convert_pt100: false,
            pt100_unit: option_env!("MSB_PT100_UNIT").unwrap_or(DEFAULT_PT100_UNIT).into(),
            battery_min_mv: BATTERY_MIN_MV,
            battery_max_mv: BATTERY_MAX_MV,
        }
    }
}

impl ConversionConfig {
    /// Both conversions enabled, temperatures in `unit`.
    pub fn converting(unit: TempUnit) -> Self {
        Self {
            convert_battery: true,
            convert_pt100: true,
            pt100_unit: unit.to_string(),
            ..Default::default()
        }
    }

    pub fn pt100_unit(&self) -> Option<TempUnit> {
        TempUnit::parse(&self.pt100_unit)
    }

    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let config: ConversionConfig = serde_json::from_str(json)?;
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let path = path.as_ref();
        info!("Reading decoder config from {}", path.display());
        let json = fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        info!("Successfully parsed config.");
        Ok(config)
    }

    /// Reject settings that would make every conversion fail.
    /// `decode()` does not require this; it reports the same problems
    /// per frame as diagnostics.
    pub fn validate(&self) -> AppResult<()> {
        if self.pt100_unit().is_none() {
            return Err(AppError::Config(format!(
                "pt100_unit must be Celsius, Fahrenheit or Kelvin, not {:?}",
                self.pt100_unit
            )));
        }
        if self.battery_min_mv >= self.battery_max_mv {
            return Err(AppError::Config(format!(
                "battery_min_mv ({}) must be below battery_max_mv ({})",
                self.battery_min_mv, self.battery_max_mv
            )));
        }
        Ok(())
    }
}

// EOF
