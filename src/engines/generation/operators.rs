use crate::config::{EvolutionConfig, SelectionMethod};
use crate::engines::generation::genome::Genotype;
use crate::error::GaError;
use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::index;
use rand::Rng;

/// Mating-pool selection strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Tournament { size: usize },
    Roulette,
}

impl Selection {
    pub fn from_config(config: &EvolutionConfig) -> Self {
        match config.selection_method {
            SelectionMethod::Tournament => Selection::Tournament {
                size: config.tournament_size,
            },
            SelectionMethod::Roulette => Selection::Roulette,
        }
    }

    /// Draw a mating pool the same size as the population.
    pub fn select<R: Rng>(
        &self,
        population: &[Genotype],
        fitness: &[f64],
        rng: &mut R,
    ) -> Vec<Genotype> {
        match *self {
            Selection::Tournament { size } => tournament_selection(population, fitness, size, rng),
            Selection::Roulette => roulette_selection(population, fitness, rng),
        }
    }
}

/// Tournament selection: for each slot, pick the best of `tournament_size`
/// distinct random candidates (first encountered wins ties).
pub fn tournament_selection<R: Rng>(
    population: &[Genotype],
    fitness: &[f64],
    tournament_size: usize,
    rng: &mut R,
) -> Vec<Genotype> {
    let len = population.len().min(fitness.len());
    if len == 0 {
        return Vec::new();
    }
    // A pool larger than the population degenerates to "everyone competes"
    let size = tournament_size.clamp(1, len);

    (0..population.len())
        .map(|_| {
            let mut contenders = index::sample(rng, len, size).into_iter();
            let mut best_idx = contenders.next().unwrap_or(0);
            for idx in contenders {
                if fitness[idx] > fitness[best_idx] {
                    best_idx = idx;
                }
            }
            population[best_idx].clone()
        })
        .collect()
}

/// Roulette wheel selection: probability proportional to fitness
///
/// Negative fitness counts as zero weight. When no individual carries
/// positive weight the draw falls back to uniform sampling.
pub fn roulette_selection<R: Rng>(
    population: &[Genotype],
    fitness: &[f64],
    rng: &mut R,
) -> Vec<Genotype> {
    let len = population.len().min(fitness.len());
    if len == 0 {
        return Vec::new();
    }

    let weights = fitness[..len].iter().map(|f| f.max(0.0));
    match WeightedIndex::new(weights) {
        Ok(wheel) => (0..population.len())
            .map(|_| population[wheel.sample(rng)].clone())
            .collect(),
        Err(e) => {
            log::debug!("Roulette wheel unusable ({}), sampling uniformly", e);
            (0..population.len())
                .map(|_| population[rng.gen_range(0..len)].clone())
                .collect()
        }
    }
}

/// One- or two-point crossover: swap genotype segments
pub fn crossover<R: Rng>(
    parent1: &[bool],
    parent2: &[bool],
    points: usize,
    rng: &mut R,
) -> Result<(Genotype, Genotype), GaError> {
    if parent1.len() != parent2.len() {
        return Err(GaError::Encoding {
            expected: parent1.len(),
            actual: parent2.len(),
        });
    }
    let len = parent1.len();

    match points {
        1 => {
            if len < 2 {
                return Err(GaError::Configuration(format!(
                    "One-point crossover needs at least 2 bits, got {}",
                    len
                )));
            }
            let point = rng.gen_range(1..len);

            let child1 = [&parent1[..point], &parent2[point..]].concat();
            let child2 = [&parent2[..point], &parent1[point..]].concat();
            Ok((child1, child2))
        }
        2 => {
            if len < 3 {
                return Err(GaError::Configuration(format!(
                    "Two-point crossover needs at least 3 bits, got {}",
                    len
                )));
            }
            let first = rng.gen_range(1..len - 1);
            let second = rng.gen_range(first + 1..len);

            let child1 = [&parent1[..first], &parent2[first..second], &parent1[second..]].concat();
            let child2 = [&parent2[..first], &parent1[first..second], &parent2[second..]].concat();
            Ok((child1, child2))
        }
        other => Err(GaError::Configuration(format!(
            "Crossover point count must be 1 or 2, got {}",
            other
        ))),
    }
}

/// Mutation: flip each bit independently with probability `mutation_rate`
pub fn mutate<R: Rng>(genotype: &mut Genotype, mutation_rate: f64, rng: &mut R) {
    for bit in genotype.iter_mut() {
        if rng.gen::<f64>() < mutation_rate {
            *bit = !*bit;
        }
    }
}

/// Produce offspring from a mating pool.
///
/// Parents are paired `(0, 1), (2, 3), ...`; with an odd pool the last
/// parent is paired with the first. Every child is mutated, then the brood is
/// cut back to the pool size.
pub fn breed<R: Rng>(
    selected: &[Genotype],
    crossover_points: usize,
    mutation_rate: f64,
    rng: &mut R,
) -> Result<Vec<Genotype>, GaError> {
    let size = selected.len();
    let mut offspring = Vec::with_capacity(size + 1);

    for i in (0..size).step_by(2) {
        let parent1 = &selected[i];
        let parent2 = selected.get(i + 1).unwrap_or(&selected[0]);
        let (child1, child2) = crossover(parent1, parent2, crossover_points, rng)?;
        offspring.push(child1);
        offspring.push(child2);
    }

    for child in offspring.iter_mut() {
        mutate(child, mutation_rate, rng);
    }

    offspring.truncate(size);
    Ok(offspring)
}
