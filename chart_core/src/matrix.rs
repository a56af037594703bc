//! Effectiveness matrix - explicit matchup entries plus the default policy

use crate::types::{is_base_type, Effectiveness, MatchupKey, Multiplier};
use indexmap::IndexMap;

/// Mapping from (attacker, defender) to an explicitly set multiplier
///
/// Unset pairs resolve through the default policy in [`EffectivenessMatrix::get`].
/// Entries keep the order in which they were first set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EffectivenessMatrix {
    entries: IndexMap<MatchupKey, Multiplier>,
}

impl EffectivenessMatrix {
    /// Create an empty matrix
    pub fn new() -> Self {
        EffectivenessMatrix {
            entries: IndexMap::new(),
        }
    }

    /// Look up a matchup.
    ///
    /// Stored entries win. Otherwise a pair of base types is neutral and
    /// any pair involving another type is unknown.
    pub fn get(&self, attacker: &str, defender: &str) -> Effectiveness {
        match self.stored(attacker, defender) {
            Some(m) => Effectiveness::Known(m),
            None if is_base_type(attacker) && is_base_type(defender) => {
                Effectiveness::Known(Multiplier::Neutral)
            }
            None => Effectiveness::Unknown,
        }
    }

    /// The explicitly stored entry, ignoring defaults
    pub fn stored(&self, attacker: &str, defender: &str) -> Option<Multiplier> {
        self.entries
            .get(&MatchupKey::new(attacker, defender))
            .copied()
    }

    /// Overwrite a matchup
    pub fn set(&mut self, attacker: &str, defender: &str, value: Multiplier) {
        self.entries.insert(MatchupKey::new(attacker, defender), value);
    }

    /// Advance a matchup one step through 1 → 2 → ½ → 0 → 1 and return the new value.
    ///
    /// The starting point is the current (possibly default) value; an
    /// unknown matchup starts the cycle at neutral.
    pub fn cycle(&mut self, attacker: &str, defender: &str) -> Multiplier {
        let next = match self.get(attacker, defender) {
            Effectiveness::Known(m) => m.next(),
            Effectiveness::Unknown => Multiplier::Neutral,
        };
        self.set(attacker, defender, next);
        next
    }

    /// Delete every entry naming `name` on either side. Returns the number removed.
    pub fn prune(&mut self, name: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| !key.involves(name));
        before - self.entries.len()
    }

    /// Keep only entries whose key satisfies the predicate
    pub fn retain(&mut self, mut keep: impl FnMut(&MatchupKey) -> bool) {
        self.entries.retain(|key, _| keep(key));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&MatchupKey, Multiplier)> {
        self.entries.iter().map(|(k, v)| (k, *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(MatchupKey, Multiplier)> for EffectivenessMatrix {
    fn from_iter<I: IntoIterator<Item = (MatchupKey, Multiplier)>>(iter: I) -> Self {
        EffectivenessMatrix {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BASE_TYPES;
    use proptest::prelude::*;

    #[test]
    fn test_base_pair_defaults_to_neutral() {
        let matrix = EffectivenessMatrix::new();
        assert_eq!(
            matrix.get("Fire", "Water"),
            Effectiveness::Known(Multiplier::Neutral)
        );
    }

    #[test]
    fn test_custom_pair_defaults_to_unknown() {
        let matrix = EffectivenessMatrix::new();
        assert_eq!(matrix.get("Fire", "Sound"), Effectiveness::Unknown);
        assert_eq!(matrix.get("Sound", "Fire"), Effectiveness::Unknown);
        assert_eq!(matrix.get("Sound", "Sound"), Effectiveness::Unknown);
    }

    #[test]
    fn test_set_overrides_default() {
        let mut matrix = EffectivenessMatrix::new();
        matrix.set("Water", "Fire", Multiplier::SuperEffective);
        matrix.set("Sound", "Fire", Multiplier::Resisted);
        assert_eq!(matrix.get("Water", "Fire").known(), Some(Multiplier::SuperEffective));
        assert_eq!(matrix.get("Sound", "Fire").known(), Some(Multiplier::Resisted));
        // Direction matters
        assert_eq!(matrix.get("Fire", "Water").known(), Some(Multiplier::Neutral));
    }

    #[test]
    fn test_cycle_from_default_neutral() {
        let mut matrix = EffectivenessMatrix::new();
        assert_eq!(matrix.cycle("Fire", "Grass"), Multiplier::SuperEffective);
        assert_eq!(matrix.cycle("Fire", "Grass"), Multiplier::Resisted);
        assert_eq!(matrix.cycle("Fire", "Grass"), Multiplier::Immune);
        assert_eq!(matrix.cycle("Fire", "Grass"), Multiplier::Neutral);
    }

    #[test]
    fn test_cycle_from_unknown_starts_neutral() {
        let mut matrix = EffectivenessMatrix::new();
        assert_eq!(matrix.cycle("Sound", "Fire"), Multiplier::Neutral);
        assert_eq!(matrix.cycle("Sound", "Fire"), Multiplier::SuperEffective);
    }

    #[test]
    fn test_prune_removes_both_sides() {
        let mut matrix = EffectivenessMatrix::new();
        matrix.set("Sound", "Fire", Multiplier::SuperEffective);
        matrix.set("Fire", "Sound", Multiplier::Resisted);
        matrix.set("Sound", "Sound", Multiplier::Immune);
        matrix.set("Fire", "Water", Multiplier::Resisted);

        assert_eq!(matrix.prune("Sound"), 3);
        assert_eq!(matrix.len(), 1);
        assert_eq!(matrix.get("Sound", "Fire"), Effectiveness::Unknown);
        assert_eq!(matrix.get("Fire", "Water").known(), Some(Multiplier::Resisted));
    }

    #[test]
    fn test_prune_base_type_reverts_to_defaults() {
        let mut matrix = EffectivenessMatrix::new();
        matrix.set("Water", "Fire", Multiplier::SuperEffective);
        matrix.prune("Fire");
        assert_eq!(matrix.get("Water", "Fire").known(), Some(Multiplier::Neutral));
    }

    #[test]
    fn test_iteration_keeps_insertion_order() {
        let mut matrix = EffectivenessMatrix::new();
        matrix.set("Ice", "Dragon", Multiplier::SuperEffective);
        matrix.set("Fire", "Water", Multiplier::Resisted);
        matrix.set("Ice", "Dragon", Multiplier::Neutral);
        let keys: Vec<_> = matrix.iter().map(|(k, _)| k.attacker.clone()).collect();
        assert_eq!(keys, vec!["Ice", "Fire"]);
    }

    fn any_base_type() -> impl Strategy<Value = &'static str> {
        prop::sample::select(BASE_TYPES.to_vec())
    }

    fn any_multiplier() -> impl Strategy<Value = Multiplier> {
        prop::sample::select(Multiplier::CYCLE.to_vec())
    }

    proptest! {
        #[test]
        fn prop_cycle_four_times_is_identity(
            attacker in any_base_type(),
            defender in any_base_type(),
            start in any_multiplier(),
        ) {
            let mut matrix = EffectivenessMatrix::new();
            matrix.set(attacker, defender, start);
            for _ in 0..4 {
                matrix.cycle(attacker, defender);
            }
            prop_assert_eq!(matrix.get(attacker, defender), Effectiveness::Known(start));
        }

        #[test]
        fn prop_unset_base_pairs_are_neutral(a in any_base_type(), d in any_base_type()) {
            let matrix = EffectivenessMatrix::new();
            prop_assert_eq!(matrix.get(a, d), Effectiveness::Known(Multiplier::Neutral));
        }

        #[test]
        fn prop_unset_custom_pairs_are_unknown(
            base in any_base_type(),
            custom in "[a-z]{1,8}",
            custom_attacks in any::<bool>(),
        ) {
            let matrix = EffectivenessMatrix::new();
            let result = if custom_attacks {
                matrix.get(&custom, base)
            } else {
                matrix.get(base, &custom)
            };
            prop_assert_eq!(result, Effectiveness::Unknown);
        }
    }
}
