use crate::engines::generation::genome::Genotype;

/// Top `elite_size` genotypes by descending fitness.
///
/// The sort is stable, so equal fitness keeps population order. Elites are
/// returned as copies and are never re-evaluated.
pub fn select_elites(population: &[Genotype], fitness: &[f64], elite_size: usize) -> Vec<Genotype> {
    let mut ranked: Vec<(usize, f64)> = fitness
        .iter()
        .copied()
        .enumerate()
        .take(population.len())
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    ranked
        .into_iter()
        .take(elite_size)
        .map(|(i, _)| population[i].clone())
        .collect()
}

/// Overwrite the leading offspring slots with the elites.
pub fn apply_elites(offspring: &mut [Genotype], elites: Vec<Genotype>) {
    for (slot, elite) in offspring.iter_mut().zip(elites) {
        *slot = elite;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn genotypes() -> Vec<Genotype> {
        vec![
            vec![false, false, false],
            vec![false, false, true],
            vec![false, true, false],
            vec![false, true, true],
        ]
    }

    #[test]
    fn test_elites_sorted_by_fitness() {
        let population = genotypes();
        let fitness = vec![0.2, 0.8, 0.5, 0.1];

        let elites = select_elites(&population, &fitness, 2);
        assert_eq!(elites, vec![population[1].clone(), population[2].clone()]);
    }

    #[test]
    fn test_ties_keep_population_order() {
        let population = genotypes();
        let fitness = vec![0.3, 0.7, 0.7, 0.7];

        let elites = select_elites(&population, &fitness, 3);
        assert_eq!(elites, population[1..4].to_vec());
    }

    #[test]
    fn test_elite_size_bounds() {
        let population = genotypes();
        let fitness = vec![0.3, 0.7, 0.1, 0.2];

        assert!(select_elites(&population, &fitness, 0).is_empty());
        assert_eq!(select_elites(&population, &fitness, 10).len(), 4);
    }

    #[test]
    fn test_negative_fitness_ranks_below_positive() {
        let population = genotypes();
        let fitness = vec![-0.001, 0.05, f64::NEG_INFINITY, -5.0];

        let elites = select_elites(&population, &fitness, 4);
        assert_eq!(
            elites,
            vec![
                population[1].clone(),
                population[0].clone(),
                population[3].clone(),
                population[2].clone(),
            ]
        );
    }

    #[test]
    fn test_apply_elites_overwrites_leading_slots() {
        let mut offspring = vec![vec![true; 3]; 4];
        let elites = vec![vec![false; 3], vec![false, true, false]];

        apply_elites(&mut offspring, elites);
        assert_eq!(offspring[0], vec![false; 3]);
        assert_eq!(offspring[1], vec![false, true, false]);
        assert_eq!(offspring[2], vec![true; 3]);
        assert_eq!(offspring[3], vec![true; 3]);
    }
}
