//! File output.

/// CSV export of energy series.
pub mod export;
