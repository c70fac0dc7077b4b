// convert.rs

use std::fmt;

use crate::*;

/// Raw PT100 reading at 0 °C.
pub const PT100_RAW_0C: u16 = 557;
/// Raw PT100 reading at 250 °C.
pub const PT100_RAW_250C: u16 = 2127;

pub const BATTERY_MIN_MV: u16 = 2500;
pub const BATTERY_MAX_MV: u16 = 3600;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TempUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TempUnit {
    /// Match a unit name on its first letter, case-insensitive:
    /// "C", "celsius", "Celsius" all give `Celsius`.
    pub fn parse(unit: &str) -> Option<Self> {
        match unit.chars().next()?.to_ascii_uppercase() {
            'C' => Some(TempUnit::Celsius),
            'F' => Some(TempUnit::Fahrenheit),
            'K' => Some(TempUnit::Kelvin),
            _ => None,
        }
    }

    pub fn celsius_to(self, temp_c: f64) -> f64 {
        match self {
            TempUnit::Celsius => temp_c,
            TempUnit::Fahrenheit => temp_c * 9.0 / 5.0 + 32.0,
            TempUnit::Kelvin => temp_c + 273.15,
        }
    }
}

impl fmt::Display for TempUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TempUnit::Celsius => "Celsius",
            TempUnit::Fahrenheit => "Fahrenheit",
            TempUnit::Kelvin => "Kelvin",
        };
        f.write_str(name)
    }
}

/// Linear PT100 calibration: 557 -> 0 °C, 2127 -> 250 °C.
pub fn pt100_celsius(raw: u16) -> f64 {
    let span = f64::from(PT100_RAW_250C - PT100_RAW_0C);
    // multiply before dividing so both calibration points come out exact
    250.0 * (f64::from(raw) - f64::from(PT100_RAW_0C)) / span
}

/// Convert a raw PT100 value into a temperature in `unit`.
/// An unknown unit returns the raw value inside the error.
pub fn resistance_to_temperature(raw: u16, unit: &str) -> Result<f64, ConvertError> {
    match TempUnit::parse(unit) {
        Some(u) => Ok(u.celsius_to(pt100_celsius(raw))),
        None => Err(ConvertError::InvalidUnit {
            unit: unit.to_string(),
            raw,
        }),
    }
}

/// Convert battery voltage (mV) to a percentage in [0, 100].
pub fn voltage_to_percentage(raw: u16, min_mv: u16, max_mv: u16) -> Result<u8, ConvertError> {
    if min_mv == max_mv {
        return Err(ConvertError::DegenerateBatteryRange { min_mv, max_mv, raw });
    }

    let span = i64::from(max_mv) - i64::from(min_mv);
    let pct = floor_div(100 * (i64::from(raw) - i64::from(min_mv)), span);
    Ok(pct.clamp(0, 100) as u8)
}

/// Integer division rounding toward negative infinity, for either sign of `d`.
fn floor_div(n: i64, d: i64) -> i64 {
    let q = n / d;
    if n % d != 0 && ((n < 0) != (d < 0)) {
        q - 1
    } else {
        q
    }
}

// EOF
