//! Chart persistence
//!
//! Charts are stored as JSON, one record per explicitly set matchup:
//!
//! ```json
//! { "matchups": [ { "attacker": "Fire", "defender": "Water", "multiplier": 0.5 } ] }
//! ```
//!
//! Unknown matchups are never written. Type names are not stored on
//! their own; a reader infers them from the records. Files in the older
//! flat `{"('Fire', 'Water')": 0.5}` shape are still accepted on load.

mod legacy;

pub use legacy::parse_tuple_key;

use crate::error::ChartError;
use crate::matrix::EffectivenessMatrix;
use crate::types::{MatchupKey, Multiplier};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// On-disk document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChartFile {
    pub matchups: Vec<MatchupRecord>,
}

/// One explicitly set matchup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchupRecord {
    pub attacker: String,
    pub defender: String,
    pub multiplier: Multiplier,
}

/// Contents of a decoded chart file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedChart {
    /// Entries in file order; a repeated pair keeps its last value
    pub matrix: EffectivenessMatrix,
    /// Every type name mentioned, in order of first appearance
    pub types: Vec<String>,
}

impl LoadedChart {
    fn from_entries(entries: impl IntoIterator<Item = (MatchupKey, Multiplier)>) -> Self {
        let mut loaded = LoadedChart::default();
        for (key, value) in entries {
            for name in [&key.attacker, &key.defender] {
                if !loaded.types.iter().any(|t| t == name) {
                    loaded.types.push(name.clone());
                }
            }
            loaded.matrix.set(&key.attacker, &key.defender, value);
        }
        loaded
    }
}

/// Build a key from names read off disk, trimmed the way the registry trims them
fn matchup_key(attacker: &str, defender: &str) -> Result<MatchupKey, ChartError> {
    let (attacker, defender) = (attacker.trim(), defender.trim());
    if attacker.is_empty() || defender.is_empty() {
        return Err(ChartError::EmptyTypeName);
    }
    Ok(MatchupKey::new(attacker, defender))
}

/// Serialize every stored entry of the matrix
pub fn encode(matrix: &EffectivenessMatrix) -> Result<String, ChartError> {
    let file = ChartFile {
        matchups: matrix
            .iter()
            .map(|(key, multiplier)| MatchupRecord {
                attacker: key.attacker.clone(),
                defender: key.defender.clone(),
                multiplier,
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&file)?)
}

/// Parse a chart document in either the record or the legacy shape.
///
/// Any malformed record, key or multiplier rejects the whole document.
pub fn decode(content: &str) -> Result<LoadedChart, ChartError> {
    let value: serde_json::Value = serde_json::from_str(content)?;

    if value.get("matchups").is_some() {
        let file = ChartFile::deserialize(value)?;
        let mut entries = Vec::with_capacity(file.matchups.len());
        for record in file.matchups {
            entries.push((
                matchup_key(&record.attacker, &record.defender)?,
                record.multiplier,
            ));
        }
        Ok(LoadedChart::from_entries(entries))
    } else {
        let flat = IndexMap::<String, Multiplier>::deserialize(value)?;
        let entries = flat
            .into_iter()
            .map(|(raw, value)| Ok((parse_tuple_key(&raw)?, value)))
            .collect::<Result<Vec<_>, ChartError>>()?;
        Ok(LoadedChart::from_entries(entries))
    }
}

/// Read and decode a chart file.
///
/// A missing file is not an error: it is logged and yields `Ok(None)`.
pub fn read_file(path: &Path) -> Result<Option<LoadedChart>, ChartError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!("No chart file found at {}", path.display());
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    let loaded = decode(&content)?;
    log::info!(
        "Loaded {} matchups ({} types) from {}",
        loaded.matrix.len(),
        loaded.types.len(),
        path.display()
    );
    Ok(Some(loaded))
}

/// Encode the matrix and replace the file wholesale
pub fn write_file(path: &Path, matrix: &EffectivenessMatrix) -> Result<(), ChartError> {
    let content = encode(matrix)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    log::info!("Saved {} matchups to {}", matrix.len(), path.display());
    Ok(())
}
