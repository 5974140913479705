//! Demo engine for a peer-to-peer solar-energy trading dashboard.
//!
//! Location lookup, synthetic energy series, marketplace listings, derived
//! metrics, and dashboard assembly. Every random draw goes through a
//! caller-supplied RNG.

#[cfg(feature = "api")]
pub mod api;
pub mod config;
/// Dashboard views assembled for a session.
pub mod dashboard;
pub mod io;
pub mod location;
/// Marketplace listings, derived metrics, and order flow.
pub mod market;
pub mod observability;
pub mod series;
pub mod session;
