use genetic_engine::{
    evolution::{EvolutionOptions, GeneticAlgorithm, StopReason},
    genome::GeneSequenceFactory,
    rng::RandomNumberGenerator,
    selection::SelectionMode,
    strategy::Mode,
};
use proptest::prelude::*;

fn small_gene(rng: &mut RandomNumberGenerator) -> u32 {
    rng.gen_range(0..100)
}

fn shift(gene: &u32, _: &mut RandomNumberGenerator) -> u32 {
    gene + 1000
}

fn total(individual: &[u32]) -> f64 {
    individual.iter().map(|&g| g as f64).sum()
}

fn build(
    population_size: usize,
    genome_length: usize,
    mutation_rate: f64,
    max_iter: usize,
    selection: SelectionMode,
    seed: u64,
) -> GeneticAlgorithm<u32> {
    let options = EvolutionOptions::builder()
        .population_size(population_size)
        .mutation_rate(mutation_rate)
        .max_iter(max_iter)
        .selection(selection)
        .build();

    GeneticAlgorithm::builder()
        .with_options(options)
        .with_fitness_function(total)
        .with_gene_factory(small_gene)
        .with_termination_condition(|fitness: f64| fitness > 1e12)
        .with_mode(Mode::unconstrained(
            GeneSequenceFactory::new(genome_length),
            shift,
        ))
        .with_rng(RandomNumberGenerator::from_seed(seed))
        .build()
        .unwrap()
}

fn selection_mode() -> impl Strategy<Value = SelectionMode> {
    prop_oneof![
        Just(SelectionMode::RouletteGated),
        Just(SelectionMode::Roulette),
        Just(SelectionMode::Tournament),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_run_shape_is_preserved(
        population_size in 1usize..20,
        genome_length in 2usize..10,
        mutation_rate in 0.0f64..=1.0,
        max_iter in 1usize..15,
        selection in selection_mode(),
        seed in any::<u64>(),
    ) {
        let mut engine = build(population_size, genome_length, mutation_rate, max_iter, selection, seed);
        let result = engine.simulate().unwrap();

        prop_assert_eq!(result.stop_reason, StopReason::MaxIterExceeded);
        prop_assert_eq!(result.generations, max_iter);
        prop_assert_eq!(result.best_individual_data.len(), result.generations);
        prop_assert_eq!(result.worst_individual_data.len(), result.generations);
        prop_assert_eq!(result.generation_average_data.len(), result.generations);
        prop_assert_eq!(result.historic_best_individual.len(), result.generations);

        prop_assert_eq!(engine.population().len(), population_size);
        prop_assert!(engine.population().iter().all(|ind| ind.len() == genome_length));

        for generation in 0..result.generations {
            let worst = result.worst_individual_data[generation];
            let average = result.generation_average_data[generation];
            let best = result.best_individual_data[generation];
            prop_assert!(worst <= average && average <= best);
        }
    }

    #[test]
    fn test_every_generation_keeps_its_shape(
        population_size in 1usize..20,
        genome_length in 2usize..10,
        mutation_rate in 0.0f64..=1.0,
        generations in 1usize..15,
        selection in selection_mode(),
        seed in any::<u64>(),
    ) {
        let mut engine = build(population_size, genome_length, mutation_rate, generations, selection, seed);

        for _ in 0..generations {
            engine.evaluate().unwrap();
            prop_assert_eq!(engine.population().len(), population_size);
            prop_assert_eq!(engine.fitness().len(), population_size);
            prop_assert!(engine.population().iter().all(|ind| ind.len() == genome_length));

            engine.reproduce().unwrap();
            prop_assert_eq!(engine.population().len(), population_size);
            prop_assert!(engine.population().iter().all(|ind| ind.len() == genome_length));
        }
    }

    #[test]
    fn test_same_seed_same_run(
        population_size in 1usize..20,
        genome_length in 2usize..10,
        mutation_rate in 0.0f64..=1.0,
        selection in selection_mode(),
        seed in any::<u64>(),
    ) {
        let first = build(population_size, genome_length, mutation_rate, 8, selection, seed)
            .simulate()
            .unwrap();
        let second = build(population_size, genome_length, mutation_rate, 8, selection, seed)
            .simulate()
            .unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_zero_rate_children_reuse_parent_genes(
        population_size in 1usize..20,
        genome_length in 2usize..10,
        selection in selection_mode(),
        seed in any::<u64>(),
    ) {
        let mut engine = build(population_size, genome_length, 0.0, 5, selection, seed);
        let parents = engine.population().to_vec();

        engine.evaluate().unwrap();
        engine.reproduce().unwrap();

        for child in engine.population() {
            for (position, gene) in child.iter().enumerate() {
                prop_assert!(parents.iter().any(|parent| parent[position] == *gene));
            }
        }
    }

    #[test]
    fn test_full_rate_mutates_every_gene(
        population_size in 1usize..20,
        genome_length in 2usize..10,
        selection in selection_mode(),
        seed in any::<u64>(),
    ) {
        let mut engine = build(population_size, genome_length, 1.0, 5, selection, seed);

        engine.evaluate().unwrap();
        engine.reproduce().unwrap();

        prop_assert!(engine
            .population()
            .iter()
            .all(|child| child.iter().all(|&gene| gene >= 1000)));
    }
}
