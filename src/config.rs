// ============================================================================
// Arithmetic Configuration
// Explicit engine configuration for the decimal and temporal facades
// ============================================================================

use chrono::FixedOffset;
use rust_decimal::RoundingStrategy;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest number of significant digits the decimal engine can hold.
pub const MAX_PRECISION: u32 = 28;

/// Significant digits kept by arithmetic results unless configured otherwise.
pub const DEFAULT_PRECISION: u32 = 20;

/// Largest magnitude of a fixed UTC offset, in seconds (just under one day).
pub const MAX_OFFSET_SECONDS: i32 = 86_399;

// ============================================================================
// Configuration Errors
// ============================================================================

/// Errors raised while validating or loading configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Precision outside `1..=MAX_PRECISION`
    #[error("precision must be between 1 and {max} significant digits, got {0}", max = MAX_PRECISION)]
    InvalidPrecision(u32),

    /// Offset outside `-MAX_OFFSET_SECONDS..=MAX_OFFSET_SECONDS`
    #[error("default offset must be within ±{max} seconds, got {0}", max = MAX_OFFSET_SECONDS)]
    InvalidOffset(i32),

    /// Configuration document could not be deserialized
    #[error("malformed configuration: {0}")]
    Malformed(String),
}

// ============================================================================
// Rounding Mode
// ============================================================================

/// How arithmetic results are rounded to the configured precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundingMode {
    /// Round to nearest, ties away from zero (`2.5 -> 3`, `-2.5 -> -3`)
    #[default]
    HalfUp,
    /// Round to nearest, ties to even (banker's rounding)
    HalfEven,
    /// Round to nearest, ties toward zero
    HalfDown,
    /// Truncate toward zero
    Down,
    /// Round away from zero
    Up,
    /// Round toward negative infinity
    Floor,
    /// Round toward positive infinity
    Ceiling,
}

impl From<RoundingMode> for RoundingStrategy {
    fn from(mode: RoundingMode) -> Self {
        match mode {
            RoundingMode::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::HalfEven => RoundingStrategy::MidpointNearestEven,
            RoundingMode::HalfDown => RoundingStrategy::MidpointTowardZero,
            RoundingMode::Down => RoundingStrategy::ToZero,
            RoundingMode::Up => RoundingStrategy::AwayFromZero,
            RoundingMode::Floor => RoundingStrategy::ToNegativeInfinity,
            RoundingMode::Ceiling => RoundingStrategy::ToPositiveInfinity,
        }
    }
}

// ============================================================================
// Decimal Configuration
// ============================================================================

/// Configuration of the decimal facade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DecimalConfig {
    /// Significant digits kept by add/subtract/multiply/divide results
    pub precision: u32,

    /// Rounding applied when a result has more significant digits
    pub rounding: RoundingMode,
}

impl DecimalConfig {
    /// Create a configuration with explicit precision and rounding
    pub fn new(precision: u32, rounding: RoundingMode) -> Self {
        Self {
            precision,
            rounding,
        }
    }

    /// Builder method: Set precision
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Builder method: Set rounding mode
    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.precision == 0 || self.precision > MAX_PRECISION {
            return Err(ConfigError::InvalidPrecision(self.precision));
        }
        Ok(())
    }

    /// 20 significant digits, ties away from zero
    pub fn standard() -> Self {
        Self::new(DEFAULT_PRECISION, RoundingMode::HalfUp)
    }

    /// Everything the engine can hold, ties away from zero
    pub fn max_precision() -> Self {
        Self::new(MAX_PRECISION, RoundingMode::HalfUp)
    }

    /// Everything the engine can hold, banker's rounding
    pub fn bankers() -> Self {
        Self::new(MAX_PRECISION, RoundingMode::HalfEven)
    }
}

impl Default for DecimalConfig {
    fn default() -> Self {
        Self::standard()
    }
}

// ============================================================================
// Temporal Configuration
// ============================================================================

/// Configuration of the temporal facade.
///
/// Strings without an explicit offset (`"2024-01-01"`,
/// `"2024-01-01T08:30"`) are read in `default_offset_seconds` east of UTC
/// instead of the host's local timezone, so parsing is identical on every
/// machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TemporalConfig {
    /// Offset east of UTC applied to offset-less strings
    pub default_offset_seconds: i32,
}

impl TemporalConfig {
    /// Offset-less strings are read as UTC
    pub fn utc() -> Self {
        Self {
            default_offset_seconds: 0,
        }
    }

    /// Offset-less strings are read at a fixed offset east of UTC
    pub fn with_fixed_offset(seconds: i32) -> Self {
        Self {
            default_offset_seconds: seconds,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.default_offset().map(|_| ())
    }

    /// The configured default offset as a chrono offset.
    pub fn default_offset(&self) -> Result<FixedOffset, ConfigError> {
        FixedOffset::east_opt(self.default_offset_seconds)
            .ok_or(ConfigError::InvalidOffset(self.default_offset_seconds))
    }
}

// ============================================================================
// Combined Configuration
// ============================================================================

/// Configuration for both facades, e.g. loaded once at application start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ArithmeticConfig {
    pub decimal: DecimalConfig,
    pub temporal: TemporalConfig,
}

impl ArithmeticConfig {
    pub fn new(decimal: DecimalConfig, temporal: TemporalConfig) -> Self {
        Self { decimal, temporal }
    }

    /// Validate both module configurations
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.decimal.validate()?;
        self.temporal.validate()
    }

    /// Load and validate a configuration from JSON.
    ///
    /// Missing fields fall back to their defaults.
    ///
    /// ```
    /// use exact_arith::config::{ArithmeticConfig, RoundingMode};
    ///
    /// let config = ArithmeticConfig::from_json(
    ///     r#"{ "decimal": { "precision": 28, "rounding": "HalfEven" } }"#,
    /// )
    /// .unwrap();
    /// assert_eq!(config.decimal.precision, 28);
    /// assert_eq!(config.decimal.rounding, RoundingMode::HalfEven);
    /// assert_eq!(config.temporal.default_offset_seconds, 0);
    /// ```
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|err| ConfigError::Malformed(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_defaults() {
        let config = DecimalConfig::default();
        assert_eq!(config.precision, DEFAULT_PRECISION);
        assert_eq!(config.rounding, RoundingMode::HalfUp);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_decimal_builder_pattern() {
        let config = DecimalConfig::standard()
            .with_precision(10)
            .with_rounding(RoundingMode::Floor);

        assert_eq!(config.precision, 10);
        assert_eq!(config.rounding, RoundingMode::Floor);
    }

    #[test]
    fn test_decimal_validation() {
        assert_eq!(
            DecimalConfig::standard().with_precision(0).validate(),
            Err(ConfigError::InvalidPrecision(0))
        );
        assert_eq!(
            DecimalConfig::standard().with_precision(29).validate(),
            Err(ConfigError::InvalidPrecision(29))
        );
        assert!(DecimalConfig::max_precision().validate().is_ok());
    }

    #[test]
    fn test_preset_configs() {
        assert_eq!(DecimalConfig::max_precision().precision, MAX_PRECISION);
        assert_eq!(DecimalConfig::bankers().rounding, RoundingMode::HalfEven);
        assert_eq!(TemporalConfig::utc(), TemporalConfig::default());
    }

    #[test]
    fn test_rounding_strategy_mapping() {
        assert_eq!(
            RoundingStrategy::from(RoundingMode::HalfUp),
            RoundingStrategy::MidpointAwayFromZero
        );
        assert_eq!(
            RoundingStrategy::from(RoundingMode::HalfEven),
            RoundingStrategy::MidpointNearestEven
        );
        assert_eq!(
            RoundingStrategy::from(RoundingMode::Down),
            RoundingStrategy::ToZero
        );
    }

    #[test]
    fn test_temporal_offset() {
        let config = TemporalConfig::with_fixed_offset(2 * 3600);
        assert_eq!(
            config.default_offset().unwrap(),
            FixedOffset::east_opt(7200).unwrap()
        );

        let invalid = TemporalConfig::with_fixed_offset(86_400);
        assert_eq!(invalid.validate(), Err(ConfigError::InvalidOffset(86_400)));
        assert!(TemporalConfig::with_fixed_offset(-MAX_OFFSET_SECONDS)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_combined_validation() {
        let config = ArithmeticConfig::new(
            DecimalConfig::standard().with_precision(40),
            TemporalConfig::utc(),
        );
        assert_eq!(config.validate(), Err(ConfigError::InvalidPrecision(40)));
        assert!(ArithmeticConfig::default().validate().is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json_rejects_invalid() {
        let err = ArithmeticConfig::from_json(r#"{ "temporal": { "default_offset_seconds": 90000 } }"#)
            .unwrap_err();
        assert_eq!(err, ConfigError::InvalidOffset(90_000));

        let err = ArithmeticConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, ConfigError::Malformed(_)));
    }
}
