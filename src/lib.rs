//! # Meteo
//!
//! A tiny weather service over TCP with:
//! - A fixed, human-readable text protocol
//! - A static, case-insensitive city registry
//! - Random weather values drawn per metric
//! - One request per connection, one connection at a time
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────┐    "t Roma"     ┌─────────────────────────────┐
//! │    Client    │ ──────────────▶ │         TCP Server          │
//! │ meteo-client │                 │  accept → handle → close    │
//! └──────▲───────┘                 └──────────────┬──────────────┘
//!        │                                        │
//!        │                         ┌──────────────▼──────────────┐
//!        │                         │            Engine           │
//!        │                         │ decode → validate → generate│
//!        │                         └──────┬───────────────┬──────┘
//!        │                                ▼               ▼
//!        │                         ┌────────────┐ ┌──────────────┐
//!        │                         │  Registry  │ │  Generator   │
//!        │                         └────────────┘ └──────────────┘
//!        │         "0 t 23.4"
//!        └─────────────────────── response
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod registry;
pub mod generator;
pub mod engine;
pub mod network;
pub mod report;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{MeteoError, RequestError, Result};
pub use config::Config;
pub use engine::Engine;
pub use generator::WeatherGenerator;
pub use registry::CityRegistry;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Meteo
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
