use scalar_ga::config::{AppConfig, ConfigManager, SelectionMethod};
use scalar_ga::engines::generation::{cubic, EvolutionEngine, RecordingProgressCallback};
use scalar_ga::GaError;
use std::fs;

#[test]
fn test_load_partial_toml_keeps_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run.toml");
    fs::write(
        &path,
        r#"
[search]
lower = -5.0
upper = 5.0

[evolution]
selection_method = "roulette"
crossover_points = 2
seed = 7
"#,
    )
    .unwrap();

    let manager = ConfigManager::new();
    manager.load_from_file(&path).unwrap();
    let config = manager.get().unwrap();

    assert_eq!(config.search.lower, -5.0);
    assert_eq!(config.search.bits, 16);
    assert_eq!(config.evolution.selection_method, SelectionMethod::Roulette);
    assert_eq!(config.evolution.crossover_points, 2);
    assert_eq!(config.evolution.population_size, 10);
    assert_eq!(config.evolution.seed, Some(7));
}

#[test]
fn test_load_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run.json");
    fs::write(&path, r#"{ "evolution": { "population_size": 24, "max_generations": 5 } }"#).unwrap();

    let manager = ConfigManager::new();
    manager.load_from_file(&path).unwrap();
    let config = manager.get().unwrap();

    assert_eq!(config.evolution.population_size, 24);
    assert_eq!(config.evolution.max_generations, 5);
}

#[test]
fn test_invalid_selection_method_rejected_at_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[evolution]\nselection_method = \"rank\"\n").unwrap();

    let manager = ConfigManager::new();
    let result = manager.load_from_file(&path);
    assert!(matches!(result, Err(GaError::Configuration(_))));

    // The previous configuration stays in place
    assert_eq!(manager.get().unwrap(), AppConfig::default());
}

#[test]
fn test_out_of_range_values_rejected_at_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[evolution]\nmutation_rate = 1.5\n").unwrap();

    let manager = ConfigManager::new();
    assert!(matches!(
        manager.load_from_file(&path),
        Err(GaError::Configuration(_))
    ));
}

#[test]
fn test_save_then_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("saved.toml");

    let manager = ConfigManager::new();
    manager
        .update(|c| {
            c.search.bits = 20;
            c.evolution.elite_percentage = 25.0;
            c.evolution.seed = Some(99);
        })
        .unwrap();
    manager.save_to_file(&path).unwrap();

    let reloaded = ConfigManager::new();
    reloaded.load_from_file(&path).unwrap();
    assert_eq!(reloaded.get().unwrap(), manager.get().unwrap());
}

#[test]
fn test_loaded_config_drives_engine() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("short.toml");
    fs::write(&path, "[evolution]\nmax_generations = 3\nseed = 1\n").unwrap();

    let manager = ConfigManager::new();
    manager.load_from_file(&path).unwrap();

    let report = EvolutionEngine::new(manager.get().unwrap(), cubic)
        .unwrap()
        .run(RecordingProgressCallback::new())
        .unwrap();
    assert_eq!(report.history.len(), 3);
}
