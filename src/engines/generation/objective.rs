/// Objective values whose magnitude falls below this are treated as zero.
pub const ZERO_EPSILON: f64 = 1e-12;

/// Fitness assigned to individuals whose objective value is (near) zero.
pub const FITNESS_CEILING: f64 = 1.0 / ZERO_EPSILON;

/// A scalar function to minimize.
///
/// Any `Fn(f64) -> f64` is an objective, so closures can be handed straight
/// to the engine:
///
/// ```
/// use scalar_ga::engines::generation::objective::Objective;
///
/// let cubic = |x: f64| x.powi(3) - 6.0 * x + 14.0;
/// assert_eq!(cubic.evaluate(2.0), 10.0);
/// assert_eq!(cubic.fitness(2.0), 0.1);
/// ```
pub trait Objective {
    fn evaluate(&self, x: f64) -> f64;

    /// Maximization score: higher means a lower objective value.
    fn fitness(&self, x: f64) -> f64 {
        reciprocal_fitness(self.evaluate(x))
    }
}

impl<F> Objective for F
where
    F: Fn(f64) -> f64,
{
    fn evaluate(&self, x: f64) -> f64 {
        self(x)
    }
}

/// `1 / fx`, guarded against the singularity at zero.
///
/// Values within `ZERO_EPSILON` of zero score `FITNESS_CEILING`, which is
/// exactly the reciprocal at the epsilon boundary. Non-finite objective
/// values score negative infinity so they never win a selection.
pub fn reciprocal_fitness(fx: f64) -> f64 {
    if !fx.is_finite() {
        log::debug!("Non-finite objective value {}, assigning minimal fitness", fx);
        return f64::NEG_INFINITY;
    }
    if fx.abs() < ZERO_EPSILON {
        log::debug!("Objective value {:e} within epsilon of zero, capping fitness", fx);
        return FITNESS_CEILING;
    }
    1.0 / fx
}

/// The reference problem: `x^3 - 6x + 14`.
pub fn cubic(x: f64) -> f64 {
    x.powi(3) - 6.0 * x + 14.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lower_objective_means_higher_fitness() {
        assert!(reciprocal_fitness(2.0) > reciprocal_fitness(4.0));
        assert_eq!(reciprocal_fitness(4.0), 0.25);
    }

    #[test]
    fn test_zero_objective_is_capped() {
        assert_eq!(reciprocal_fitness(0.0), FITNESS_CEILING);
        assert_eq!(reciprocal_fitness(-0.0), FITNESS_CEILING);
        assert_eq!(reciprocal_fitness(1e-15), FITNESS_CEILING);
        assert!(reciprocal_fitness(1e-11).is_finite());
        assert!(reciprocal_fitness(1e-11) < FITNESS_CEILING);
    }

    #[test]
    fn test_non_finite_objective() {
        assert_eq!(reciprocal_fitness(f64::NAN), f64::NEG_INFINITY);
        assert_eq!(reciprocal_fitness(f64::INFINITY), f64::NEG_INFINITY);
    }

    #[test]
    fn test_closure_objective() {
        let square = |x: f64| x * x;
        assert_eq!(square.evaluate(3.0), 9.0);
        assert_eq!(square.fitness(0.0), FITNESS_CEILING);
    }

    #[test]
    fn test_cubic_local_minimum() {
        let x = 2f64.sqrt();
        let expected = 14.0 - 4.0 * 2f64.sqrt();
        assert!((cubic(x) - expected).abs() < 1e-12);
        assert!(cubic(x - 0.01) > cubic(x));
        assert!(cubic(x + 0.01) > cubic(x));
    }
}
