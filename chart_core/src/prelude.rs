//! Prelude module for convenient imports
//!
//! ```rust
//! use chart_core::prelude::*;
//! ```

// Core types
pub use crate::types::{Effectiveness, MatchupKey, Multiplier, BASE_TYPES};

// State
pub use crate::chart::{LoadOutcome, TypeChart};
pub use crate::matrix::EffectivenessMatrix;
pub use crate::registry::TypeRegistry;

// Calculator
pub use crate::calculator::{Breakdown, DefenderSelection, Outcome};

// Errors and config
pub use crate::config::ChartConfig;
pub use crate::error::ChartError;
