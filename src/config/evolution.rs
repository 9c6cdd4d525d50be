use super::traits::ConfigSection;
use crate::error::GaError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    pub population_size: usize,
    pub mutation_rate: f64,
    pub crossover_points: usize,
    pub selection_method: SelectionMethod,
    pub tournament_size: usize,
    pub elitism: bool,
    pub elite_percentage: f64,
    pub max_generations: usize,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMethod {
    Tournament,
    Roulette,
}

impl FromStr for SelectionMethod {
    type Err = GaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tournament" => Ok(SelectionMethod::Tournament),
            "roulette" => Ok(SelectionMethod::Roulette),
            other => Err(GaError::Configuration(format!(
                "Invalid selection method '{}': use 'tournament' or 'roulette'",
                other
            ))),
        }
    }
}

impl fmt::Display for SelectionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionMethod::Tournament => write!(f, "tournament"),
            SelectionMethod::Roulette => write!(f, "roulette"),
        }
    }
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 10,
            mutation_rate: 0.01,
            crossover_points: 1,
            selection_method: SelectionMethod::Tournament,
            tournament_size: 3,
            elitism: true,
            elite_percentage: 10.0,
            max_generations: 100,
            seed: None,
        }
    }
}

impl EvolutionConfig {
    /// Number of individuals carried over unchanged each generation.
    pub fn elite_count(&self) -> usize {
        if !self.elitism {
            return 0;
        }
        let count = (self.elite_percentage * self.population_size as f64 / 100.0).ceil() as usize;
        count.min(self.population_size)
    }
}

impl ConfigSection for EvolutionConfig {
    fn section_name() -> &'static str {
        "evolution"
    }

    fn validate(&self) -> Result<(), GaError> {
        if self.population_size < 2 {
            return Err(GaError::Configuration(
                "Population size must be at least 2".to_string()
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(GaError::Configuration(
                "Mutation rate must be between 0 and 1".to_string()
            ));
        }
        if self.crossover_points != 1 && self.crossover_points != 2 {
            return Err(GaError::Configuration(format!(
                "Crossover point count must be 1 or 2, got {}",
                self.crossover_points
            )));
        }
        if self.selection_method == SelectionMethod::Tournament
            && (self.tournament_size < 2 || self.tournament_size > self.population_size)
        {
            return Err(GaError::Configuration(format!(
                "Tournament size must be between 2 and the population size ({}), got {}",
                self.population_size, self.tournament_size
            )));
        }
        if !(0.0..=100.0).contains(&self.elite_percentage) {
            return Err(GaError::Configuration(
                "Elite percentage must be between 0 and 100".to_string()
            ));
        }
        if self.max_generations < 1 {
            return Err(GaError::Configuration(
                "At least one generation is required".to_string()
            ));
        }
        Ok(())
    }
}
