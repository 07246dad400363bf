// ============================================================================
// Decimal Module
// Exact decimal arithmetic free of binary floating-point rounding error
// ============================================================================
//
// This module provides:
// - DecimalArithmetic: stateless add/subtract/multiply/divide/compare/equals facade
// - DecimalOperand: tagged union of accepted inputs (number, literal, value)
// - DecimalError: Error types for decimal operations
//
// Design principles:
// - No floating-point intermediates: f64 inputs are read through their shortest text
// - All operations return Result (no panics)
// - Division by zero is detected before the engine is consulted
// - Precision and rounding are explicit configuration, not engine defaults

mod arithmetic;
mod errors;
mod operand;

pub use arithmetic::DecimalArithmetic;
pub use errors::{DecimalError, DecimalResult};
pub use operand::DecimalOperand;

pub use rust_decimal::Decimal;
