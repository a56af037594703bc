//! Effectiveness calculator
//!
//! Combines an attacker's matchups against up to three defender types
//! into one multiplier, then groups attackers by that result.

use crate::matrix::EffectivenessMatrix;
use crate::registry::TypeRegistry;
use crate::types::{Effectiveness, Multiplier};
use std::fmt;

/// Number of defender slots in a selection
pub const MAX_DEFENDERS: usize = 3;

/// Combined multiplier of an attacker against the selected defenders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Octuple,
    Quadruple,
    Double,
    Neutral,
    Half,
    Quarter,
    Eighth,
    Immune,
    Unknown,
}

impl Outcome {
    /// All outcomes in display order (strongest first, unknown last)
    pub const ALL: [Outcome; 9] = [
        Outcome::Octuple,
        Outcome::Quadruple,
        Outcome::Double,
        Outcome::Neutral,
        Outcome::Half,
        Outcome::Quarter,
        Outcome::Eighth,
        Outcome::Immune,
        Outcome::Unknown,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Outcome::Octuple => "8",
            Outcome::Quadruple => "4",
            Outcome::Double => "2",
            Outcome::Neutral => "1",
            Outcome::Half => "½",
            Outcome::Quarter => "¼",
            Outcome::Eighth => "⅛",
            Outcome::Immune => "0",
            Outcome::Unknown => "?",
        }
    }

    /// Numeric factor, `None` for unknown
    pub fn value(self) -> Option<f64> {
        match self {
            Outcome::Octuple => Some(8.0),
            Outcome::Quadruple => Some(4.0),
            Outcome::Double => Some(2.0),
            Outcome::Neutral => Some(1.0),
            Outcome::Half => Some(0.5),
            Outcome::Quarter => Some(0.25),
            Outcome::Eighth => Some(0.125),
            Outcome::Immune => Some(0.0),
            Outcome::Unknown => None,
        }
    }

    /// Outcome for a non-zero product 2^exponent.
    ///
    /// Three slots keep the exponent within ±3; anything further saturates.
    fn from_exponent(exponent: i32) -> Self {
        match exponent.clamp(-3, 3) {
            3 => Outcome::Octuple,
            2 => Outcome::Quadruple,
            1 => Outcome::Double,
            0 => Outcome::Neutral,
            -1 => Outcome::Half,
            -2 => Outcome::Quarter,
            _ => Outcome::Eighth,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The calculator's fixed defender slots
///
/// Slots may be left empty and may repeat a type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefenderSelection {
    slots: [Option<String>; MAX_DEFENDERS],
}

impl DefenderSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill slots in order from the given names; names past the last slot are ignored
    pub fn from_types<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selection = Self::new();
        for (slot, name) in types.into_iter().take(MAX_DEFENDERS).enumerate() {
            selection.slots[slot] = Some(name.into());
        }
        selection
    }

    /// Assign or clear a slot. Out-of-range slots are ignored.
    pub fn set(&mut self, slot: usize, name: Option<String>) {
        if let Some(s) = self.slots.get_mut(slot) {
            *s = name;
        }
    }

    pub fn get(&self, slot: usize) -> Option<&str> {
        self.slots.get(slot).and_then(|s| s.as_deref())
    }

    pub fn clear(&mut self) {
        self.slots = Default::default();
    }

    /// Filled slots in slot order
    pub fn defenders(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().filter_map(|s| s.as_deref())
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Clear every slot naming a type that is no longer registered
    pub fn retain_registered(&mut self, registry: &TypeRegistry) {
        for slot in self.slots.iter_mut() {
            if slot.as_deref().is_some_and(|name| !registry.contains(name)) {
                *slot = None;
            }
        }
    }
}

/// Attacker types grouped by outcome, each group in registry order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Breakdown {
    groups: [Vec<String>; 9],
}

impl Breakdown {
    /// Attackers that landed in the given outcome
    pub fn group(&self, outcome: Outcome) -> &[String] {
        &self.groups[outcome.index()]
    }

    /// All nine groups in display order, empty ones included
    pub fn iter(&self) -> impl Iterator<Item = (Outcome, &[String])> {
        Outcome::ALL
            .into_iter()
            .map(move |o| (o, self.groups[o.index()].as_slice()))
    }

    /// Which group an attacker landed in
    pub fn outcome_of(&self, attacker: &str) -> Option<Outcome> {
        self.iter()
            .find(|(_, names)| names.iter().any(|n| n == attacker))
            .map(|(o, _)| o)
    }

    /// Total number of attackers across all groups
    pub fn len(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push(&mut self, outcome: Outcome, attacker: &str) {
        self.groups[outcome.index()].push(attacker.to_string());
    }
}

/// Combine one attacker's matchups against the defenders.
///
/// An unknown matchup stops the product immediately, even after a 0x factor.
pub fn combine<'a>(
    matrix: &EffectivenessMatrix,
    attacker: &str,
    defenders: impl IntoIterator<Item = &'a str>,
) -> Outcome {
    let mut immune = false;
    let mut exponent = 0;

    for defender in defenders {
        match matrix.get(attacker, defender) {
            Effectiveness::Unknown => return Outcome::Unknown,
            Effectiveness::Known(Multiplier::Immune) => immune = true,
            Effectiveness::Known(m) => exponent += m.exponent().unwrap_or(0),
        }
    }

    if immune {
        Outcome::Immune
    } else {
        Outcome::from_exponent(exponent)
    }
}

/// Group every registered attacker by its combined multiplier.
///
/// Returns `None` for an empty selection, leaving any previous result to the caller.
pub fn calculate(
    registry: &TypeRegistry,
    matrix: &EffectivenessMatrix,
    selection: &DefenderSelection,
) -> Option<Breakdown> {
    if selection.is_empty() {
        return None;
    }

    let mut breakdown = Breakdown::default();
    for attacker in registry.iter() {
        let outcome = combine(matrix, attacker, selection.defenders());
        breakdown.push(outcome, attacker);
    }
    Some(breakdown)
}
