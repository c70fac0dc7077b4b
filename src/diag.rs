// diag.rs

use crate::*;

/// Diagnostics collected while decoding a single frame.
///
/// Warnings mean the result is usable but degraded, errors mean some
/// conversion failed and its field fell back to the raw value. Neither
/// aborts the decode. Each entry is also logged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Diagnostics {
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warn<S: Into<String>>(&mut self, msg: S) {
        let msg = msg.into();
        warn!("MSB: {msg}");
        self.warnings.push(msg);
    }

    pub fn error<S: Into<String>>(&mut self, msg: S) {
        let msg = msg.into();
        error!("MSB: {msg}");
        self.errors.push(msg);
    }

    /// Unwrap a conversion, recording the failure and falling back to
    /// the raw value it carries.
    pub fn converted<T>(&mut self, res: Result<T, ConvertError>, fallback: impl FnOnce(u16) -> T) -> T {
        match res {
            Ok(v) => v,
            Err(e) => {
                let raw = e.raw();
                self.error(e.to_string());
                fallback(raw)
            }
        }
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<String>) {
        (self.warnings, self.errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_in_order() {
        let mut diag = Diagnostics::new();
        assert_eq!(diag, Diagnostics::default());

        diag.warn("first");
        diag.error(String::from("broken"));
        diag.warn("second");

        let (warnings, errors) = diag.into_parts();
        assert_eq!(warnings, vec!["first", "second"]);
        assert_eq!(errors, vec!["broken"]);
    }

    #[test]
    fn test_converted_fallback() {
        let mut diag = Diagnostics::new();
        let v = diag.converted(resistance_to_temperature(777, "X"), f64::from);
        assert_eq!(v, 777.0);
        assert_eq!(diag.errors.len(), 1);
        assert!(diag.errors[0].contains("invalid unit"));
        assert!(diag.warnings.is_empty());

        let v = diag.converted(voltage_to_percentage(3600, 2500, 3600), |raw| raw as u8);
        assert_eq!(v, 100);
        assert_eq!(diag.errors.len(), 1);
    }
}
// EOF
