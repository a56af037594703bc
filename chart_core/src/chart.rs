//! TypeChart - the application state
//!
//! Owns the registry and the matrix and keeps them consistent: removing
//! a type always prunes its matrix entries, and loading a file registers
//! every type it mentions.

use crate::calculator::{self, Breakdown, DefenderSelection};
use crate::error::ChartError;
use crate::matrix::EffectivenessMatrix;
use crate::persist;
use crate::registry::TypeRegistry;
use crate::types::{is_base_type, Effectiveness, Multiplier};
use std::path::Path;

/// What a load or reset did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file was absent; nothing changed
    Missing,
    /// The chart was replaced
    Loaded {
        /// Number of matchup entries now stored
        entries: usize,
        /// Types registered because the file mentioned them
        new_types: Vec<String>,
    },
}

/// Registry plus matrix, edited together
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeChart {
    registry: TypeRegistry,
    matrix: EffectivenessMatrix,
}

impl TypeChart {
    /// Base roster, no explicit matchups
    pub fn new() -> Self {
        TypeChart {
            registry: TypeRegistry::with_base_types(),
            matrix: EffectivenessMatrix::new(),
        }
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    pub fn matrix(&self) -> &EffectivenessMatrix {
        &self.matrix
    }

    pub fn types(&self) -> &[String] {
        self.registry.as_slice()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.registry.contains(name)
    }

    /// Register a new type; false for blank names and duplicates
    pub fn add_type(&mut self, name: &str) -> bool {
        let added = self.registry.add(name);
        if added {
            log::debug!("Added type {}", name.trim());
        }
        added
    }

    /// Remove a type and every matchup naming it
    pub fn remove_type(&mut self, name: &str) -> bool {
        if !self.registry.remove(name) {
            return false;
        }
        let pruned = self.matrix.prune(name);
        log::debug!("Removed type {} ({} matchups pruned)", name, pruned);
        true
    }

    pub fn get(&self, attacker: &str, defender: &str) -> Effectiveness {
        self.matrix.get(attacker, defender)
    }

    pub fn set(&mut self, attacker: &str, defender: &str, value: Multiplier) {
        self.matrix.set(attacker, defender, value);
    }

    /// Toggle a matchup to its next value
    pub fn cycle(&mut self, attacker: &str, defender: &str) -> Multiplier {
        self.matrix.cycle(attacker, defender)
    }

    /// Group every registered attacker against the selected defenders
    pub fn calculate(&self, selection: &DefenderSelection) -> Option<Breakdown> {
        calculator::calculate(&self.registry, &self.matrix, selection)
    }

    /// Write every explicit matchup to `path`. Returns the number written.
    pub fn save_to(&self, path: &Path) -> Result<usize, ChartError> {
        persist::write_file(path, &self.matrix)?;
        Ok(self.matrix.len())
    }

    /// Replace the matrix with the file's matchups and register any new types.
    ///
    /// A missing file leaves the chart untouched. A malformed file is
    /// rejected as a whole, also leaving the chart untouched.
    pub fn load_from(&mut self, path: &Path) -> Result<LoadOutcome, ChartError> {
        let Some(loaded) = persist::read_file(path)? else {
            return Ok(LoadOutcome::Missing);
        };

        let mut new_types = Vec::new();
        for name in loaded.types {
            if self.registry.add(&name) {
                new_types.push(name);
            }
        }
        self.matrix = loaded.matrix;

        Ok(LoadOutcome::Loaded {
            entries: self.matrix.len(),
            new_types,
        })
    }

    /// Revert to the base roster and the factory matchups stored at `path`.
    ///
    /// Factory entries naming non-base types are dropped. Base pairs the
    /// file does not mention stay at their implicit neutral default.
    pub fn reset_from(&mut self, path: &Path) -> Result<LoadOutcome, ChartError> {
        let Some(loaded) = persist::read_file(path)? else {
            log::warn!("Reset skipped: no factory chart at {}", path.display());
            return Ok(LoadOutcome::Missing);
        };

        let mut matrix = loaded.matrix;
        let before = matrix.len();
        matrix.retain(|key| key.is_base_pair());
        if matrix.len() < before {
            log::warn!(
                "Dropped {} factory matchups naming non-base types",
                before - matrix.len()
            );
        }

        self.registry.reset_to_base();
        self.matrix = matrix;
        log::info!("Chart reset from {}", path.display());

        Ok(LoadOutcome::Loaded {
            entries: self.matrix.len(),
            new_types: Vec::new(),
        })
    }

    /// Whether a type is user-added rather than part of the base roster
    pub fn is_custom(&self, name: &str) -> bool {
        self.registry.contains(name) && !is_base_type(name)
    }
}
