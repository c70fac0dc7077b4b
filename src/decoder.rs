// decoder.rs

use crate::*;

/// A field value, either as sent by the device or converted.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Reading {
    Raw(u16),
    Percent(u8),
    Temperature(f64),
}

impl Reading {
    pub fn as_f64(&self) -> f64 {
        match *self {
            Reading::Raw(v) => f64::from(v),
            Reading::Percent(v) => f64::from(v),
            Reading::Temperature(v) => v,
        }
    }
}

/// Decoded MSB telemetry. Absent fields are left out of the serialized
/// document.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TelemetryRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub noise_avg: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub noise_min: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub noise_max: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub battery: Option<Reading>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pt100: Option<Reading>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gain: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_temp: Option<u8>,
}

impl TelemetryRecord {
    /// Number of fields present in this record.
    pub fn field_count(&self) -> usize {
        [
            self.noise_avg.is_some(),
            self.noise_min.is_some(),
            self.noise_max.is_some(),
            self.battery.is_some(),
            self.pt100.is_some(),
            self.mode.is_some(),
            self.gain.is_some(),
            self.node_temp.is_some(),
        ]
        .iter()
        .filter(|present| **present)
        .count()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DecodedUplink {
    pub data: TelemetryRecord,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl DecodedUplink {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Single-line JSON document.
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// JSON document indented by two spaces.
    pub fn to_json_pretty(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Decode one MSB uplink payload.
///
/// Never fails: short frames leave fields absent, conversion problems
/// keep the raw value and land in `errors`, a missing node_temp byte adds
/// a firmware warning.
pub fn decode(data: &[u8], config: &ConversionConfig) -> DecodedUplink {
    let raw = RawFrame::new(data).extract();
    let mut diag = Diagnostics::new();

    let battery = raw.battery_mv.map(|mv| {
        if config.convert_battery {
            let res = voltage_to_percentage(mv, config.battery_min_mv, config.battery_max_mv);
            diag.converted(res.map(Reading::Percent), Reading::Raw)
        } else {
            Reading::Raw(mv)
        }
    });

    let pt100 = raw.pt100.map(|counts| {
        if config.convert_pt100 {
            let res = resistance_to_temperature(counts, &config.pt100_unit);
            diag.converted(res.map(Reading::Temperature), Reading::Raw)
        } else {
            Reading::Raw(counts)
        }
    });

    if raw.node_temp.is_none() {
        diag.warn(NODE_TEMP_WARNING);
    }

    let record = TelemetryRecord {
        noise_avg: raw.noise_avg,
        noise_min: raw.noise_min,
        noise_max: raw.noise_max,
        battery,
        pt100,
        mode: raw.mode,
        gain: raw.gain,
        node_temp: raw.node_temp,
    };

    debug!(
        "MSB: noise={:?}/{:?}/{:?} battery={:?} pt100={:?} mode={:?} gain={:?} node_temp={:?}",
        record.noise_avg,
        record.noise_min,
        record.noise_max,
        record.battery,
        record.pt100,
        record.mode,
        record.gain,
        record.node_temp
    );

    let (warnings, errors) = diag.into_parts();
    DecodedUplink {
        data: record,
        warnings,
        errors,
    }
}

/// Decode a payload given as a hex string, e.g. "0a6809c30ad00e4504060c27".
/// Whitespace between digits is ignored.
pub fn decode_hex(payload: &str, config: &ConversionConfig) -> AppResult<DecodedUplink> {
    let digits: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
    let data = hex::decode(digits)?;
    Ok(decode(&data, config))
}

// EOF
