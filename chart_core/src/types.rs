//! Core value types: multipliers, matchup keys and the base type roster

use crate::error::ChartError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The 18 standard types, in canonical chart order.
///
/// Membership decides the default policy for unset matchups: a pair of
/// base types is neutral, anything involving another type is unknown.
pub const BASE_TYPES: [&str; 18] = [
    "Normal", "Fire", "Water", "Electric", "Grass", "Ice", "Fighting", "Poison", "Ground",
    "Flying", "Psychic", "Bug", "Rock", "Ghost", "Dragon", "Dark", "Steel", "Fairy",
];

/// Check whether a type name belongs to the base roster (case-sensitive)
pub fn is_base_type(name: &str) -> bool {
    BASE_TYPES.contains(&name)
}

/// Damage multiplier for a known matchup
///
/// Persisted as its numeric value; only the four exact values are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub enum Multiplier {
    /// 0x
    Immune,
    /// 0.5x
    Resisted,
    /// 1x
    Neutral,
    /// 2x
    SuperEffective,
}

impl Multiplier {
    /// Values in toggle order, starting from neutral
    pub const CYCLE: [Multiplier; 4] = [
        Multiplier::Neutral,
        Multiplier::SuperEffective,
        Multiplier::Resisted,
        Multiplier::Immune,
    ];

    /// Numeric damage factor
    pub fn value(self) -> f64 {
        match self {
            Multiplier::Immune => 0.0,
            Multiplier::Resisted => 0.5,
            Multiplier::Neutral => 1.0,
            Multiplier::SuperEffective => 2.0,
        }
    }

    /// Power-of-two exponent of the factor (`None` for 0x)
    pub fn exponent(self) -> Option<i32> {
        match self {
            Multiplier::Immune => None,
            Multiplier::Resisted => Some(-1),
            Multiplier::Neutral => Some(0),
            Multiplier::SuperEffective => Some(1),
        }
    }

    /// Next value in the toggle cycle 1 → 2 → ½ → 0 → 1
    pub fn next(self) -> Self {
        match self {
            Multiplier::Neutral => Multiplier::SuperEffective,
            Multiplier::SuperEffective => Multiplier::Resisted,
            Multiplier::Resisted => Multiplier::Immune,
            Multiplier::Immune => Multiplier::Neutral,
        }
    }

    /// Short display form
    pub fn symbol(self) -> &'static str {
        match self {
            Multiplier::Immune => "0",
            Multiplier::Resisted => "½",
            Multiplier::Neutral => "1",
            Multiplier::SuperEffective => "2",
        }
    }

    /// Parse an exact numeric factor
    pub fn from_value(value: f64) -> Option<Self> {
        if value == 0.0 {
            Some(Multiplier::Immune)
        } else if value == 0.5 {
            Some(Multiplier::Resisted)
        } else if value == 1.0 {
            Some(Multiplier::Neutral)
        } else if value == 2.0 {
            Some(Multiplier::SuperEffective)
        } else {
            None
        }
    }
}

impl TryFrom<f64> for Multiplier {
    type Error = ChartError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Multiplier::from_value(value).ok_or(ChartError::InvalidMultiplier(value))
    }
}

impl From<Multiplier> for f64 {
    fn from(m: Multiplier) -> Self {
        m.value()
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Result of looking up a matchup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Effectiveness {
    Known(Multiplier),
    /// No determination made yet; poisons any product it joins
    Unknown,
}

impl Effectiveness {
    /// The known multiplier, if any
    pub fn known(self) -> Option<Multiplier> {
        match self {
            Effectiveness::Known(m) => Some(m),
            Effectiveness::Unknown => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Effectiveness::Known(m) => m.symbol(),
            Effectiveness::Unknown => "?",
        }
    }
}

impl From<Multiplier> for Effectiveness {
    fn from(m: Multiplier) -> Self {
        Effectiveness::Known(m)
    }
}

impl fmt::Display for Effectiveness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Ordered (attacker, defender) pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchupKey {
    pub attacker: String,
    pub defender: String,
}

impl MatchupKey {
    pub fn new(attacker: impl Into<String>, defender: impl Into<String>) -> Self {
        MatchupKey {
            attacker: attacker.into(),
            defender: defender.into(),
        }
    }

    /// Check if either side of the pair is the given type
    pub fn involves(&self, name: &str) -> bool {
        self.attacker == name || self.defender == name
    }

    /// Check if both sides are base types
    pub fn is_base_pair(&self) -> bool {
        is_base_type(&self.attacker) && is_base_type(&self.defender)
    }
}

impl fmt::Display for MatchupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.attacker, self.defender)
    }
}
