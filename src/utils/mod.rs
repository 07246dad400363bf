// ============================================================================
// Utilities Module
// Ambient helpers that are not part of the arithmetic contract
// ============================================================================

#[cfg(feature = "logging")]
pub mod logging;

#[cfg(feature = "logging")]
pub use logging::init_logging;
