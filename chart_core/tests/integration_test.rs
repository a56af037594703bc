//! Integration test: Add types -> Edit matchups -> Calculate -> Save -> Reload -> Reset
//!
//! This test validates the full editing flow against real files.

use chart_core::{
    DefenderSelection, Effectiveness, LoadOutcome, Multiplier, Outcome, TypeChart, BASE_TYPES,
};
use std::fs;
use std::path::{Path, PathBuf};

fn factory_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../data/factory_chart.json")
}

/// Helper to print a breakdown the way the calculator panel lists it
fn print_breakdown(chart: &TypeChart, selection: &DefenderSelection) {
    let breakdown = chart.calculate(selection).expect("selection is not empty");
    for (outcome, names) in breakdown.iter() {
        println!("  {:>2}: {}", outcome.label(), names.join(", "));
    }
}

#[test]
fn test_full_edit_save_reload_flow() {
    let dir = tempfile::tempdir().unwrap();
    let save_path = dir.path().join("pokemon_type_config.json");

    // Add a custom type and fill in a few of its matchups
    let mut chart = TypeChart::new();
    assert!(chart.add_type("Sound"));
    assert!(!chart.add_type("Sound"));

    chart.set("Sound", "Psychic", Multiplier::SuperEffective);
    chart.set("Sound", "Ghost", Multiplier::Immune);
    chart.set("Water", "Fire", Multiplier::SuperEffective);
    chart.set("Grass", "Fire", Multiplier::Resisted);
    // Toggle a base pair twice: 1 -> 2 -> ½
    chart.cycle("Electric", "Ground");
    assert_eq!(chart.cycle("Electric", "Ground"), Multiplier::Resisted);

    let selection = DefenderSelection::from_types(["Fire"]);
    print_breakdown(&chart, &selection);
    let breakdown = chart.calculate(&selection).unwrap();
    assert_eq!(breakdown.group(Outcome::Double), ["Water"]);
    assert_eq!(breakdown.group(Outcome::Half), ["Grass"]);
    // Sound vs Fire was never set
    assert_eq!(breakdown.group(Outcome::Unknown), ["Sound"]);

    // Save, then reload into a fresh chart
    assert_eq!(chart.save_to(&save_path).unwrap(), 5);

    let mut reloaded = TypeChart::new();
    let outcome = reloaded.load_from(&save_path).unwrap();
    assert_eq!(
        outcome,
        LoadOutcome::Loaded {
            entries: 5,
            new_types: vec!["Sound".to_string()],
        }
    );
    assert_eq!(reloaded.types(), chart.types());
    for attacker in chart.types() {
        for defender in chart.types() {
            assert_eq!(
                reloaded.get(attacker, defender),
                chart.get(attacker, defender),
                "{attacker} -> {defender}"
            );
        }
    }

    // Remove the custom type: its entries go with it
    assert!(reloaded.remove_type("Sound"));
    assert_eq!(reloaded.matrix().len(), 3);
    assert_eq!(reloaded.get("Sound", "Psychic"), Effectiveness::Unknown);
}

#[test]
fn test_user_added_type_without_entries_is_not_restored() {
    let dir = tempfile::tempdir().unwrap();
    let save_path = dir.path().join("chart.json");

    let mut chart = TypeChart::new();
    chart.add_type("Cosmic");
    chart.add_type("Sound");
    chart.set("Sound", "Fire", Multiplier::Neutral);
    chart.save_to(&save_path).unwrap();

    let mut reloaded = TypeChart::new();
    reloaded.load_from(&save_path).unwrap();
    assert!(reloaded.contains("Sound"));
    assert!(!reloaded.contains("Cosmic"));
}

#[test]
fn test_legacy_file_loads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pokemon_type_config.json");
    fs::write(
        &path,
        r#"{"('Fire', 'Grass')": 2.0, "('Light', 'Dark')": 2.0, "('Dark', 'Light')": 0.5}"#,
    )
    .unwrap();

    let mut chart = TypeChart::new();
    chart.load_from(&path).unwrap();
    assert_eq!(chart.types().last().map(String::as_str), Some("Light"));
    assert_eq!(chart.get("Light", "Dark").known(), Some(Multiplier::SuperEffective));

    let breakdown = chart
        .calculate(&DefenderSelection::from_types(["Dark"]))
        .unwrap();
    assert_eq!(breakdown.outcome_of("Light"), Some(Outcome::Double));
    // Dark vs Dark is an unset base pair
    assert_eq!(breakdown.outcome_of("Dark"), Some(Outcome::Neutral));
}

#[test]
fn test_factory_chart_reset() {
    let path = factory_path();
    assert!(path.exists(), "factory chart missing at {}", path.display());

    let mut chart = TypeChart::new();
    chart.add_type("Sound");
    chart.set("Sound", "Fire", Multiplier::SuperEffective);

    let outcome = chart.reset_from(&path).unwrap();
    assert!(matches!(outcome, LoadOutcome::Loaded { entries: 120, .. }));
    assert_eq!(chart.types().len(), BASE_TYPES.len());
    assert!(!chart.contains("Sound"));

    assert_eq!(chart.get("Fire", "Grass").known(), Some(Multiplier::SuperEffective));
    assert_eq!(chart.get("Normal", "Ghost").known(), Some(Multiplier::Immune));
    assert_eq!(chart.get("Normal", "Normal").known(), Some(Multiplier::Neutral));

    // Fire vs Grass/Steel = 4x, Ground vs Flying/Steel = 0x
    let breakdown = chart
        .calculate(&DefenderSelection::from_types(["Grass", "Steel"]))
        .unwrap();
    assert_eq!(breakdown.outcome_of("Fire"), Some(Outcome::Quadruple));

    let breakdown = chart
        .calculate(&DefenderSelection::from_types(["Flying", "Steel"]))
        .unwrap();
    assert_eq!(breakdown.outcome_of("Ground"), Some(Outcome::Immune));

    // Water/Ground is only weak to Grass
    let breakdown = chart
        .calculate(&DefenderSelection::from_types(["Water", "Ground"]))
        .unwrap();
    assert_eq!(breakdown.group(Outcome::Quadruple), ["Grass"]);
    assert!(breakdown.group(Outcome::Double).is_empty());
}

#[test]
fn test_three_defenders_reach_extremes() {
    let mut chart = TypeChart::new();
    chart.reset_from(&factory_path()).unwrap();

    // Grass/Bug/Steel: Fire hits 2 x 2 x 2
    let breakdown = chart
        .calculate(&DefenderSelection::from_types(["Grass", "Bug", "Steel"]))
        .unwrap();
    assert_eq!(breakdown.outcome_of("Fire"), Some(Outcome::Octuple));

    // Fire/Water/Dragon: Fire is resisted by all three
    let breakdown = chart
        .calculate(&DefenderSelection::from_types(["Fire", "Water", "Dragon"]))
        .unwrap();
    assert_eq!(breakdown.outcome_of("Fire"), Some(Outcome::Eighth));
}
