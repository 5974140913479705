//! Marketplace synthesis, derived metrics, and the demo order flow.

/// Synthetic seller listings.
pub mod listings;
/// Earnings, carbon offset, and savings formulas.
pub mod metrics;
/// Buy/sell flow: order quotes and confirmation messages.
pub mod order;

pub use listings::{MarketplaceListing, TimeRemaining, purchase_listing, synthesize_listings};
pub use order::{OrderError, OrderSummary, quote_order};
