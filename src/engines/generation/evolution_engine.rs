use crate::config::AppConfig;
use crate::engines::generation::{
    elitism::{apply_elites, select_elites},
    genome::{decode, render_bits, Genotype},
    objective::Objective,
    operators::{breed, Selection},
    population::{best_index, Population},
    progress::ProgressRecord,
};
use crate::error::GaError;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::fmt;

pub trait ProgressCallback: Send {
    fn on_generation_start(&mut self, generation: usize);
    fn on_generation_complete(&mut self, record: &ProgressRecord);
}

impl<C: ProgressCallback + ?Sized> ProgressCallback for &mut C {
    fn on_generation_start(&mut self, generation: usize) {
        (**self).on_generation_start(generation);
    }

    fn on_generation_complete(&mut self, record: &ProgressRecord) {
        (**self).on_generation_complete(record);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Init,
    Running { generation: usize },
    Terminal,
}

/// Outcome of a complete run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub best_x: f64,
    pub best_fx: f64,
    pub chromosome: String,
    pub generations: usize,
    pub history: Vec<ProgressRecord>,
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Final Result ---")?;
        writeln!(f, "Best f(x) = {:.4} at x = {:.4}", self.best_fx, self.best_x)?;
        write!(f, "Binary chromosome: {}", self.chromosome)
    }
}

impl RunReport {
    /// Final output for the CLI: the result block, or the full report as JSON.
    ///
    /// Per-generation progress is left to the `ProgressCallback` sink.
    pub fn render(&self, json: bool) -> Result<String, GaError> {
        if json {
            Ok(serde_json::to_string_pretty(self)?)
        } else {
            Ok(self.to_string())
        }
    }
}

/// Best individual of a scored population.
#[derive(Debug, Clone, PartialEq)]
pub struct Champion {
    pub genotype: Genotype,
    pub x: f64,
    pub fx: f64,
    pub fitness: f64,
}

pub struct EvolutionEngine<O: Objective> {
    config: AppConfig,
    objective: O,
    selection: Selection,
    elite_count: usize,
    rng: StdRng,
    state: EngineState,
}

impl<O: Objective> EvolutionEngine<O> {
    /// Validate `config` and seed the generator from `evolution.seed`, or
    /// from entropy when no seed is set.
    pub fn new(config: AppConfig, objective: O) -> Result<Self, GaError> {
        let rng = match config.evolution.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, objective, rng)
    }

    pub fn with_rng(config: AppConfig, objective: O, rng: StdRng) -> Result<Self, GaError> {
        config.validate()?;

        let selection = Selection::from_config(&config.evolution);
        let elite_count = config.evolution.elite_count();
        log::debug!(
            "Engine ready: {} selection, {} elite(s) per generation",
            config.evolution.selection_method, elite_count
        );

        Ok(Self {
            config,
            objective,
            selection,
            elite_count,
            rng,
            state: EngineState::Init,
        })
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn elite_count(&self) -> usize {
        self.elite_count
    }

    /// Run all generations and report the best individual of the final population.
    pub fn run<C: ProgressCallback>(&mut self, mut callback: C) -> Result<RunReport, GaError> {
        let generations = self.config.evolution.max_generations;
        log::info!(
            "Searching [{}, {}] with {} bits, population {}, {} generations",
            self.config.search.lower,
            self.config.search.upper,
            self.config.search.bits,
            self.config.evolution.population_size,
            generations
        );

        let mut population = self.initialize_population();
        let mut history = Vec::with_capacity(generations);

        for generation in 1..=generations {
            self.state = EngineState::Running { generation };
            callback.on_generation_start(generation);

            let fitness = self.evaluate(&population)?;

            let champion = self.champion(&population, &fitness)?;
            let record = ProgressRecord {
                generation,
                best_x: champion.x,
                best_fx: champion.fx,
            };
            callback.on_generation_complete(&record);
            history.push(record);

            population = self.step(&population, &fitness)?;
        }

        self.state = EngineState::Terminal;

        let fitness = self.evaluate(&population)?;
        let champion = self.champion(&population, &fitness)?;
        log::info!(
            "Finished after {} generations: f({:.4}) = {:.4}",
            generations, champion.x, champion.fx
        );

        Ok(RunReport {
            best_x: champion.x,
            best_fx: champion.fx,
            chromosome: render_bits(&champion.genotype),
            generations,
            history,
        })
    }

    pub fn initialize_population(&mut self) -> Population {
        Population::initialize(
            self.config.evolution.population_size,
            self.config.search.bits,
            &mut self.rng,
        )
    }

    pub fn evaluate(&self, population: &Population) -> Result<Vec<f64>, GaError> {
        population.evaluate(&self.objective, &self.config.search)
    }

    /// Highest-fitness individual, first index on ties.
    pub fn champion(&self, population: &Population, fitness: &[f64]) -> Result<Champion, GaError> {
        let index = best_index(fitness)
            .ok_or_else(|| GaError::Configuration("Cannot rank an empty population".to_string()))?;
        let genotype = population
            .get(index)
            .ok_or_else(|| GaError::Configuration("Fitness and population sizes differ".to_string()))?
            .clone();

        let x = decode(&genotype, &self.config.search)?;
        let fx = self.objective.evaluate(x);

        Ok(Champion {
            genotype,
            x,
            fx,
            fitness: fitness[index],
        })
    }

    /// Produce the next generation from a scored population.
    ///
    /// Select a mating pool, breed it, then overwrite the leading offspring
    /// with the elites of `population`.
    pub fn step(&mut self, population: &Population, fitness: &[f64]) -> Result<Population, GaError> {
        let selected = self
            .selection
            .select(population.individuals(), fitness, &mut self.rng);

        let mut offspring = breed(
            &selected,
            self.config.evolution.crossover_points,
            self.config.evolution.mutation_rate,
            &mut self.rng,
        )?;

        if self.elite_count > 0 {
            let elites = select_elites(population.individuals(), fitness, self.elite_count);
            apply_elites(&mut offspring, elites);
        }

        Ok(Population::new(offspring))
    }
}
