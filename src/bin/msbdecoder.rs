// bin/msbdecoder.rs

use std::{io, io::BufRead, path::PathBuf};

use clap::Parser;
use msbdecoder::*;

/// Decode Multisense Bolt uplink payloads given as hex strings
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Hex payloads to decode; read one per line from stdin when empty
    payloads: Vec<String>,

    /// JSON config file, command line flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Convert raw PT100 counts to temperature
    #[arg(long, conflicts_with = "no_convert_pt100")]
    convert_pt100: bool,

    /// Report raw PT100 counts even if the config file converts them
    #[arg(long)]
    no_convert_pt100: bool,

    /// Temperature unit: Celsius, Fahrenheit or Kelvin
    #[arg(long)]
    pt100_unit: Option<String>,

    /// Convert battery voltage to percentage
    #[arg(long, conflicts_with = "no_convert_battery")]
    convert_battery: bool,

    /// Report raw battery millivolts even if the config file converts them
    #[arg(long)]
    no_convert_battery: bool,

    /// Battery voltage at 0 % (mV)
    #[arg(long)]
    battery_min: Option<u16>,

    /// Battery voltage at 100 % (mV)
    #[arg(long)]
    battery_max: Option<u16>,

    /// Print one JSON document per line instead of indented output
    #[arg(long)]
    compact: bool,

    /// Refuse to start with an invalid configuration
    #[arg(long)]
    strict: bool,
}

impl Args {
    fn conversion_config(&self) -> anyhow::Result<ConversionConfig> {
        let mut config = match &self.config {
            Some(path) => ConversionConfig::from_json_file(path)?,
            None => ConversionConfig::default(),
        };

        config.convert_pt100 = flag_override(config.convert_pt100, self.convert_pt100, self.no_convert_pt100);
        config.convert_battery =
            flag_override(config.convert_battery, self.convert_battery, self.no_convert_battery);
        if let Some(unit) = &self.pt100_unit {
            config.pt100_unit = unit.clone();
        }
        if let Some(min) = self.battery_min {
            config.battery_min_mv = min;
        }
        if let Some(max) = self.battery_max {
            config.battery_max_mv = max;
        }
        Ok(config)
    }
}

fn flag_override(current: bool, on: bool, off: bool) -> bool {
    match (on, off) {
        (true, _) => true,
        (_, true) => false,
        _ => current,
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    let args = Args::parse();
    debug!("msbdecoder v{PKG_VERSION}");

    let config = args.conversion_config()?;
    debug!("Decoder config:\n{config:#?}");
    if let Err(e) = config.validate() {
        if args.strict {
            anyhow::bail!("{e}");
        }
        warn!("{e}, conversions will report errors");
    }

    if args.payloads.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            print_decoded(&line, &config, args.compact);
        }
    } else {
        for payload in &args.payloads {
            print_decoded(payload, &config, args.compact);
        }
    }
    Ok(())
}

fn print_decoded(payload: &str, config: &ConversionConfig, compact: bool) {
    let decoded = match decode_hex(payload, config) {
        Ok(d) => d,
        Err(e) => {
            error!("Cannot decode {payload:?}: {e}");
            return;
        }
    };

    let json = if compact {
        decoded.to_json()
    } else {
        decoded.to_json_pretty()
    };
    match json {
        Ok(s) => println!("{s}"),
        Err(e) => error!("Cannot serialize result: {e}"),
    }
}
#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(args: &[&str]) -> ConversionConfig {
        let args = Args::try_parse_from(std::iter::once("msbdecoder").chain(args.iter().copied())).unwrap();
        args.conversion_config().unwrap()
    }

    #[test]
    fn test_flags_override_config_file() {
        let path = std::env::temp_dir().join(format!("msbdecoder-cli-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "convert_pt100": true, "convert_battery": true }"#).unwrap();
        let file = path.to_string_lossy().into_owned();

        let c = config_for(&["--config", &file]);
        assert!(c.convert_pt100 && c.convert_battery);

        let c = config_for(&["--config", &file, "--no-convert-pt100"]);
        assert!(!c.convert_pt100);
        assert!(c.convert_battery);

        let c = config_for(&["--config", &file, "--no-convert-battery", "--pt100-unit", "K"]);
        assert!(c.convert_pt100);
        assert!(!c.convert_battery);
        assert_eq!(c.pt100_unit(), Some(TempUnit::Kelvin));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_flags_without_config_file() {
        let c = config_for(&["--convert-battery", "--battery-min", "3000"]);
        assert!(c.convert_battery);
        assert!(!c.convert_pt100);
        assert_eq!(c.battery_min_mv, 3000);

        assert!(Args::try_parse_from(["msbdecoder", "--convert-pt100", "--no-convert-pt100"]).is_err());
    }

    #[test]
    fn test_flag_override() {
        assert!(flag_override(false, true, false));
        assert!(!flag_override(true, false, true));
        assert!(flag_override(true, false, false));
        assert!(!flag_override(false, false, false));
    }
}
// EOF
