use tracing::debug;

use crate::rng::RandomNumberGenerator;

/// Number of participants drawn per tournament unless configured otherwise.
pub const DEFAULT_TOURNAMENT_SIZE: usize = 8;

/// Draws `size` indices with replacement and returns the two strongest as
/// `(best, runner_up)`.
///
/// A size of 0 is treated as 1.
pub(crate) fn select_pair(
    fitness: &[f64],
    size: usize,
    rng: &mut RandomNumberGenerator,
) -> (usize, usize) {
    let participants: Vec<usize> = (0..size.max(1))
        .map(|_| rng.gen_index(fitness.len()))
        .collect();
    rank_participants(fitness, &participants)
}

/// Single left-to-right scan over the drawn participants.
///
/// The first participant becomes the best. A later participant with strictly
/// higher fitness takes the best slot and demotes the previous best to runner-up;
/// otherwise it takes the runner-up slot if that slot is empty or it is strictly
/// fitter than the current runner-up. Ties keep the earlier participant.
///
/// If the runner-up slot is still empty after the scan (a single participant),
/// the runner-up is the best.
pub(crate) fn rank_participants(fitness: &[f64], participants: &[usize]) -> (usize, usize) {
    let Some((&first, rest)) = participants.split_first() else {
        return (0, 0);
    };

    let mut best = first;
    let mut runner_up: Option<usize> = None;

    for &idx in rest {
        if fitness[idx] > fitness[best] {
            runner_up = Some(best);
            best = idx;
        } else if runner_up.map_or(true, |r| fitness[idx] > fitness[r]) {
            runner_up = Some(idx);
        }
    }

    let runner_up = runner_up.unwrap_or_else(|| {
        debug!(best, "Tournament produced no runner-up, pairing best with itself");
        best
    });
    (best, runner_up)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_later_stronger_participant_demotes_best() {
        let fitness = vec![1.0, 5.0, 3.0, 9.0];
        assert_eq!(rank_participants(&fitness, &[0, 2, 1, 3]), (3, 1));
    }

    #[test]
    fn test_first_unique_max_keeps_best_slot() {
        let fitness = vec![10.0, 2.0, 4.0, 1.0];
        assert_eq!(rank_participants(&fitness, &[0, 3, 1, 2, 3, 1]), (0, 2));
    }

    #[test]
    fn test_ties_keep_earlier_participant() {
        let fitness = vec![7.0, 7.0, 7.0];
        assert_eq!(rank_participants(&fitness, &[2, 0, 1, 0]), (2, 0));
    }

    #[test]
    fn test_repeated_single_index_fills_runner_up_with_itself() {
        let fitness = vec![3.0, 1.0];
        assert_eq!(rank_participants(&fitness, &[0; 8]), (0, 0));
    }

    #[test]
    fn test_single_participant_falls_back_to_best() {
        let fitness = vec![3.0, 1.0, 2.0];
        assert_eq!(rank_participants(&fitness, &[2]), (2, 2));
    }

    #[test]
    fn test_size_one_tournament_pairs_same_individual() {
        let fitness = vec![3.0, 1.0, 2.0, 8.0];
        let mut rng = RandomNumberGenerator::from_seed(10);
        for _ in 0..100 {
            let (best, runner_up) = select_pair(&fitness, 1, &mut rng);
            assert_eq!(best, runner_up);
        }
    }

    #[test]
    fn test_unique_max_wins_whenever_sampled() {
        let fitness = vec![1.0, 2.0, 3.0, 100.0, 4.0, 5.0];
        let mut rng = RandomNumberGenerator::from_seed(6);
        for _ in 0..500 {
            let participants: Vec<usize> = (0..DEFAULT_TOURNAMENT_SIZE)
                .map(|_| rng.gen_index(fitness.len()))
                .collect();
            let (best, runner_up) = rank_participants(&fitness, &participants);
            if participants.contains(&3) {
                assert_eq!(best, 3);
            } else {
                assert_ne!(best, 3);
                assert_ne!(runner_up, 3);
            }
        }
    }

    #[test]
    fn test_runner_up_is_never_stronger_than_best() {
        let fitness = vec![0.5, 0.8, 0.3, 0.9, 0.1];
        let mut rng = RandomNumberGenerator::from_seed(42);
        for _ in 0..500 {
            let (best, runner_up) = select_pair(&fitness, DEFAULT_TOURNAMENT_SIZE, &mut rng);
            assert!(fitness[best] >= fitness[runner_up]);
        }
    }
}
