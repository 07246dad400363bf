// ============================================================================
// Exact Arithmetic Library
// Exact decimal and UTC-normalized instant arithmetic facades
// ============================================================================

//! # Exact Arith
//!
//! Two small, stateless facades that give an application guarantees ordinary
//! machine arithmetic cannot.
//!
//! ## Features
//!
//! - **Exact decimal arithmetic** over native numbers and decimal strings,
//!   free of binary floating-point rounding error (`0.1 + 0.2 == 0.3`)
//! - **Deterministic division-by-zero detection** for every representation
//!   of zero (`0`, `"0.0"`, `"-0.00"`)
//! - **Instant arithmetic** over instants, chrono date-times, epoch
//!   milliseconds and ISO-8601 strings
//! - **Stable serialization**: instants always render as
//!   `YYYY-MM-DDTHH:mm:ss.sssZ` in UTC
//! - **Explicit configuration** of precision, rounding and default offset
//!   instead of ambient engine defaults
//!
//! ## Example
//!
//! ```rust
//! use exact_arith::prelude::*;
//! use std::cmp::Ordering;
//!
//! let math = DecimalArithmetic::default();
//! let sum = math.add("0.123456789", "0.987654321").unwrap();
//! assert_eq!(sum.to_string(), "1.11111111");
//! assert_eq!(math.compare("0.1000000001", "0.1").unwrap(), Ordering::Greater);
//! assert_eq!(math.divide(10, "0.0"), Err(DecimalError::DivisionByZero));
//!
//! let time = TemporalArithmetic::default();
//! let later = time.add_seconds("2024-01-01T00:00:00.000Z", 3600).unwrap();
//! println!("One hour later: {}", later);
//! println!(
//!     "Elapsed: {}s",
//!     time.difference_in_seconds(later, "2024-01-01T00:00:00.000Z").unwrap()
//! );
//! ```

pub mod config;
pub mod decimal;
pub mod factory;
pub mod temporal;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::config::{ArithmeticConfig, ConfigError, DecimalConfig, RoundingMode, TemporalConfig};
    pub use crate::decimal::{Decimal, DecimalArithmetic, DecimalError, DecimalOperand, DecimalResult};
    pub use crate::factory::{create_from_config, DecimalArithmeticBuilder, TemporalArithmeticBuilder};
    pub use crate::temporal::{
        Instant, InstantOperand, TemporalArithmetic, TemporalError, TemporalResult,
    };
}
