use scalar_ga::config::ConfigManager;
use scalar_ga::engines::generation::{cubic, EvolutionEngine, LogProgressCallback};
use std::env;

fn main() -> anyhow::Result<()> {
    // Per-generation progress goes through the logger; RUST_LOG overrides the level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let json = args.iter().any(|a| a == "--json");
    let config_path = args.iter().find(|a| !a.starts_with("--"));

    let manager = ConfigManager::new();
    if let Some(path) = config_path {
        manager.load_from_file(path)?;
    }
    let config = manager.get()?;

    let mut engine = EvolutionEngine::new(config, cubic)?;
    let report = engine.run(LogProgressCallback)?;

    println!("{}", report.render(json)?);
    Ok(())
}
