// ============================================================================
// Temporal Module
// UTC-normalized instant arithmetic with deterministic serialization
// ============================================================================
//
// This module provides:
// - TemporalArithmetic: current time, add/minus seconds, ISO output, differences
// - Instant: millisecond-resolution UTC point in time
// - InstantOperand: tagged union of accepted inputs (instant, date-time, millis, string)
// - TemporalError: Error types for temporal operations
//
// Design principles:
// - Serialization is always YYYY-MM-DDTHH:mm:ss.sssZ, whatever the source offset
// - Offset-less strings use configured offset, never the host timezone
// - Range limited to years 0000-9999 so the ISO form never changes shape

mod arithmetic;
mod errors;
mod instant;
mod operand;
mod parse;

pub use arithmetic::TemporalArithmetic;
pub use errors::{TemporalError, TemporalResult};
pub use instant::{Instant, MAX_TIMESTAMP_MILLIS, MIN_TIMESTAMP_MILLIS};
pub use operand::InstantOperand;
