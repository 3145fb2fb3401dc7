use tracing::debug;

use crate::rng::RandomNumberGenerator;

/// Picks two parent indices with probability roughly proportional to fitness.
///
/// Two integer targets are drawn from `[0, floor(total_fitness))`. The population
/// is walked in order, accumulating the absolute fitness of each individual, and
/// each target binds the first index whose running sum reaches it.
///
/// When the draw range is empty (total below 1, or not finite) both parents are
/// drawn uniformly instead.
pub(crate) fn select_pair(
    fitness: &[f64],
    total_fitness: f64,
    rng: &mut RandomNumberGenerator,
) -> (usize, usize) {
    let upper = total_fitness.floor();
    if !upper.is_finite() || upper < 1.0 {
        debug!(total_fitness, "Roulette draw range is empty, drawing parents uniformly");
        return (rng.gen_index(fitness.len()), rng.gen_index(fitness.len()));
    }

    let upper = upper as u64;
    let first_target = rng.gen_range(0..upper) as f64;
    let second_target = rng.gen_range(0..upper) as f64;
    bind_targets(fitness, first_target, second_target)
}

/// Walks the cumulative absolute fitness and binds each target to the first index
/// reaching it. A target beyond the total binds the last index.
pub(crate) fn bind_targets(
    fitness: &[f64],
    first_target: f64,
    second_target: f64,
) -> (usize, usize) {
    let mut first = None;
    let mut second = None;
    let mut cumulative = 0.0;

    for (idx, value) in fitness.iter().enumerate() {
        cumulative += value.abs();
        if first.is_none() && cumulative >= first_target {
            first = Some(idx);
        }
        if second.is_none() && cumulative >= second_target {
            second = Some(idx);
        }
        if first.is_some() && second.is_some() {
            break;
        }
    }

    let last = fitness.len().saturating_sub(1);
    (first.unwrap_or(last), second.unwrap_or(last))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_targets_walks_cumulative_sum() {
        let fitness = vec![2.0, 3.0, 5.0];
        // Cumulative: 2, 5, 10
        assert_eq!(bind_targets(&fitness, 0.0, 2.0), (0, 0));
        assert_eq!(bind_targets(&fitness, 3.0, 9.0), (1, 2));
        assert_eq!(bind_targets(&fitness, 5.0, 6.0), (1, 2));
    }

    #[test]
    fn test_bind_targets_uses_absolute_values() {
        let fitness = vec![-4.0, 1.0, 1.0];
        // Cumulative absolute: 4, 5, 6
        assert_eq!(bind_targets(&fitness, 3.0, 5.0), (0, 1));
    }

    #[test]
    fn test_bind_targets_beyond_total_binds_last() {
        let fitness = vec![1.0, 1.0];
        assert_eq!(bind_targets(&fitness, 1.0, 50.0), (0, 1));
    }

    #[test]
    fn test_zero_total_falls_back_to_uniform() {
        let fitness = vec![0.0; 4];
        let mut rng = RandomNumberGenerator::from_seed(21);
        let mut seen = [false; 4];
        for _ in 0..200 {
            let (a, b) = select_pair(&fitness, 0.0, &mut rng);
            seen[a] = true;
            seen[b] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_fractional_total_below_one_falls_back() {
        let fitness = vec![0.25, 0.5];
        let mut rng = RandomNumberGenerator::from_seed(21);
        for _ in 0..50 {
            let (a, b) = select_pair(&fitness, 0.75, &mut rng);
            assert!(a < 2 && b < 2);
        }
    }

    #[test]
    fn test_dominant_individual_is_preferred() {
        let fitness = vec![1.0, 97.0, 1.0, 1.0];
        let mut rng = RandomNumberGenerator::from_seed(3);
        let mut hits = 0;
        for _ in 0..1000 {
            let (a, b) = select_pair(&fitness, 100.0, &mut rng);
            hits += (a == 1) as usize + (b == 1) as usize;
        }
        assert!(hits > 1800);
    }

    #[test]
    fn test_equal_fitness_is_roughly_uniform() {
        let fitness = vec![100.0; 5];
        let mut rng = RandomNumberGenerator::from_seed(77);
        let mut counts = [0usize; 5];
        let trials = 20_000;
        for _ in 0..trials {
            let (a, b) = select_pair(&fitness, 500.0, &mut rng);
            counts[a] += 1;
            counts[b] += 1;
        }
        let expected = (2 * trials / 5) as f64;
        for count in counts {
            assert!((count as f64 - expected).abs() / expected < 0.1);
        }
    }
}
