pub mod genome;
pub mod objective;
pub mod population;
pub mod operators;
pub mod elitism;
pub mod progress;
pub mod evolution_engine;

pub use genome::{Genotype, decode, render_bits};
pub use objective::{Objective, reciprocal_fitness, cubic};
pub use population::{Population, best_index};
pub use operators::{Selection, tournament_selection, roulette_selection, crossover, mutate, breed};
pub use elitism::select_elites;
pub use evolution_engine::{EvolutionEngine, EngineState, RunReport, Champion, ProgressCallback};
pub use progress::{
    LogProgressCallback, RecordingProgressCallback, ChannelProgressCallback, ProgressMessage,
    ProgressRecord,
};
