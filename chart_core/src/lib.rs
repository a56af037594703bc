//! chart_core - Core library for editing and querying a type-effectiveness chart
//!
//! This library provides:
//! - TypeRegistry: Ordered roster of type names (base set plus user-added types)
//! - EffectivenessMatrix: (attacker, defender) → multiplier with default policy
//! - Calculator: Groups attacker types by their combined multiplier against defenders
//! - Persistence: JSON save/load of explicitly set matchups, plus factory reset
//! - TypeChart: The application state tying all of the above together

pub mod calculator;
pub mod chart;
pub mod config;
pub mod error;
pub mod matrix;
pub mod persist;
pub mod prelude;
pub mod registry;
pub mod types;

// Re-export core types for convenience
pub use calculator::{calculate, Breakdown, DefenderSelection, Outcome, MAX_DEFENDERS};
pub use chart::{LoadOutcome, TypeChart};
pub use config::{ChartConfig, ConfigError};
pub use error::ChartError;
pub use matrix::EffectivenessMatrix;
pub use registry::TypeRegistry;
pub use types::{is_base_type, Effectiveness, MatchupKey, Multiplier, BASE_TYPES};
