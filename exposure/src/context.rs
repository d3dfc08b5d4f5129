//! Solve context and display configuration

use serde::{Deserialize, Serialize};
use exposure_core::{ExposureError, Fraction, Result};
use exposure_units::Kind;

/// Default significant digits of the EV number in a summary
pub const DEFAULT_EV_DIGITS: u32 = 5;

/// Context passed through a solve, collecting an optional trace
#[derive(Debug, Clone, Default)]
pub struct SolveContext {
    pub tracing: bool,
    pub trace: Vec<TraceStep>,
}

/// One input folded into the accumulator
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceStep {
    pub kind: Kind,
    pub stop: Fraction,
    /// Whether the stop was added (Sv, Bv, Iv) or subtracted (Av, Tv)
    pub adds_light: bool,
    /// Accumulator after this step
    pub accumulator: Fraction,
}

impl SolveContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.tracing = enabled;
        self
    }

    pub(crate) fn record(&mut self, step: TraceStep) {
        if self.tracing {
            self.trace.push(step);
        }
    }
}

/// Presentation settings for [`crate::Exposure`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExposureConfig {
    /// Significant digits of the EV number
    pub ev_digits: u32,
}

impl Default for ExposureConfig {
    fn default() -> Self {
        Self { ev_digits: DEFAULT_EV_DIGITS }
    }
}

impl ExposureConfig {
    pub fn with_ev_digits(mut self, digits: u32) -> Self {
        self.ev_digits = digits;
        self
    }

    /// Load from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ExposureConfig = serde_json::from_str(json)
            .map_err(|e| ExposureError::configuration(format!("invalid exposure config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.ev_digits == 0 {
            return Err(ExposureError::configuration("ev_digits must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_only_when_tracing() {
        let step = TraceStep {
            kind: Kind::Sv,
            stop: Fraction::from_i64(2),
            adds_light: true,
            accumulator: Fraction::from_i64(2),
        };

        let mut ctx = SolveContext::new();
        ctx.record(step.clone());
        assert!(ctx.trace.is_empty());

        let mut ctx = SolveContext::new().with_tracing(true);
        ctx.record(step.clone());
        assert_eq!(ctx.trace, vec![step]);
    }

    #[test]
    fn test_config_default() {
        assert_eq!(ExposureConfig::default().ev_digits, 5);
    }

    #[test]
    fn test_config_from_json() {
        assert_eq!(ExposureConfig::from_json("{}").unwrap(), ExposureConfig::default());
        assert_eq!(ExposureConfig::from_json(r#"{"ev_digits": 3}"#).unwrap().ev_digits, 3);
    }

    #[test]
    fn test_config_rejects_bad_input() {
        assert!(ExposureConfig::from_json(r#"{"ev_digits": "five"}"#).unwrap_err().is_configuration_error());
        assert!(ExposureConfig::from_json(r#"{"ev_digits": 0}"#).unwrap_err().is_configuration_error());
    }

    #[test]
    fn test_trace_step_serializes() {
        let step = TraceStep {
            kind: Kind::Av,
            stop: Fraction::from_i64(2),
            adds_light: false,
            accumulator: Fraction::from_i64(-2),
        };
        let json = serde_json::to_value(&step).unwrap();
        assert_eq!(json["kind"], "Av");
        assert_eq!(json["accumulator"], "-2");
    }
}
