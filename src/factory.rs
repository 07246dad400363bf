// ============================================================================
// Facade Factory
// Creates arithmetic facades with validated configuration
// ============================================================================

use crate::config::{
    ArithmeticConfig, ConfigError, DecimalConfig, RoundingMode, TemporalConfig,
};
use crate::decimal::DecimalArithmetic;
use crate::temporal::TemporalArithmetic;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates both facades from a combined configuration
///
/// # Arguments
/// * `config` - Configuration for the decimal and temporal modules
///
/// # Returns
/// * `Result<(DecimalArithmetic, TemporalArithmetic), ConfigError>` - Configured facades or error
///
/// # Example
/// ```
/// use exact_arith::config::ArithmeticConfig;
/// use exact_arith::factory::create_from_config;
///
/// let (math, time) = create_from_config(ArithmeticConfig::default()).unwrap();
/// assert_eq!(math.add("1.5", "1.5").unwrap().to_string(), "3");
/// assert_eq!(
///     time.get_as_iso_string("2024-01-01").unwrap(),
///     "2024-01-01T00:00:00.000Z"
/// );
/// ```
pub fn create_from_config(
    config: ArithmeticConfig,
) -> Result<(DecimalArithmetic, TemporalArithmetic), ConfigError> {
    // Validate configuration first
    config.validate()?;

    let decimal = DecimalArithmetic::new(config.decimal)?;
    let temporal = TemporalArithmetic::new(config.temporal)?;

    tracing::debug!(
        precision = config.decimal.precision,
        rounding = ?config.decimal.rounding,
        default_offset_seconds = config.temporal.default_offset_seconds,
        "created arithmetic facades"
    );

    Ok((decimal, temporal))
}

// ============================================================================
// Builder Pattern for Decimal Facade
// ============================================================================

/// Builder for the decimal facade with fluent API
///
/// # Example
/// ```
/// use exact_arith::factory::DecimalArithmeticBuilder;
///
/// let math = DecimalArithmeticBuilder::new()
///     .precision(6)
///     .round_half_even()
///     .build()
///     .unwrap();
///
/// assert_eq!(math.divide(1, 7).unwrap().to_string(), "0.142857");
/// ```
#[derive(Debug, Clone, Default)]
pub struct DecimalArithmeticBuilder {
    config: DecimalConfig,
}

impl DecimalArithmeticBuilder {
    /// Create a builder starting from the standard configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn from_config(config: DecimalConfig) -> Self {
        Self { config }
    }

    /// Set significant digits kept by results
    pub fn precision(mut self, precision: u32) -> Self {
        self.config.precision = precision;
        self
    }

    /// Set rounding mode
    pub fn rounding(mut self, rounding: RoundingMode) -> Self {
        self.config.rounding = rounding;
        self
    }

    /// Ties away from zero (default)
    pub fn round_half_up(self) -> Self {
        self.rounding(RoundingMode::HalfUp)
    }

    /// Ties to even (banker's rounding)
    pub fn round_half_even(self) -> Self {
        self.rounding(RoundingMode::HalfEven)
    }

    /// Truncate toward zero
    pub fn truncate(self) -> Self {
        self.rounding(RoundingMode::Down)
    }

    /// Build the decimal facade
    pub fn build(self) -> Result<DecimalArithmetic, ConfigError> {
        DecimalArithmetic::new(self.config)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &DecimalConfig {
        &self.config
    }
}

// ============================================================================
// Builder Pattern for Temporal Facade
// ============================================================================

/// Builder for the temporal facade with fluent API
///
/// # Example
/// ```
/// use exact_arith::factory::TemporalArithmeticBuilder;
///
/// let time = TemporalArithmeticBuilder::new()
///     .default_offset_hours(-5)
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     time.get_as_iso_string("2024-01-01T19:00").unwrap(),
///     "2024-01-02T00:00:00.000Z"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct TemporalArithmeticBuilder {
    config: TemporalConfig,
}

impl TemporalArithmeticBuilder {
    /// Create a builder that reads offset-less strings as UTC
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn from_config(config: TemporalConfig) -> Self {
        Self { config }
    }

    /// Offset east of UTC for offset-less strings, in seconds
    pub fn default_offset_seconds(mut self, seconds: i32) -> Self {
        self.config.default_offset_seconds = seconds;
        self
    }

    /// Offset east of UTC for offset-less strings, in whole hours
    pub fn default_offset_hours(self, hours: i32) -> Self {
        self.default_offset_seconds(hours.saturating_mul(3600))
    }

    /// Read offset-less strings as UTC (default)
    pub fn utc(self) -> Self {
        self.default_offset_seconds(0)
    }

    /// Build the temporal facade
    pub fn build(self) -> Result<TemporalArithmetic, ConfigError> {
        TemporalArithmetic::new(self.config)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &TemporalConfig {
        &self.config
    }
}
