use crate::config::SearchConfig;
use crate::engines::generation::genome::{decode, Genotype};
use crate::engines::generation::objective::Objective;
use crate::error::GaError;
use rand::Rng;

/// Ordered genotypes of one generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Population {
    individuals: Vec<Genotype>,
}

impl Population {
    pub fn new(individuals: Vec<Genotype>) -> Self {
        Self { individuals }
    }

    /// `size` genotypes of `bits` independent fair coin flips each.
    pub fn initialize<R: Rng>(size: usize, bits: usize, rng: &mut R) -> Self {
        let individuals = (0..size).map(|_| random_genotype(bits, rng)).collect();
        Self { individuals }
    }

    /// Fitness of every individual, in population order.
    pub fn evaluate<O: Objective + ?Sized>(
        &self,
        objective: &O,
        search: &SearchConfig,
    ) -> Result<Vec<f64>, GaError> {
        self.individuals
            .iter()
            .map(|genotype| Ok(objective.fitness(decode(genotype, search)?)))
            .collect()
    }

    pub fn individuals(&self) -> &[Genotype] {
        &self.individuals
    }

    pub fn into_individuals(self) -> Vec<Genotype> {
        self.individuals
    }

    pub fn get(&self, index: usize) -> Option<&Genotype> {
        self.individuals.get(index)
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }
}

/// Generate a random genotype
pub fn random_genotype<R: Rng>(bits: usize, rng: &mut R) -> Genotype {
    (0..bits).map(|_| rng.gen_bool(0.5)).collect()
}

/// Index of the highest fitness; ties go to the earliest index.
pub fn best_index(fitness: &[f64]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, &value) in fitness.iter().enumerate() {
        match best {
            Some(b) if value <= fitness[b] => {}
            _ => best = Some(i),
        }
    }
    best
}
