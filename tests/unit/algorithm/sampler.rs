//! Tests for Latin-square sampling

#[cfg(test)]
mod tests {
    use calcugen::algorithm::sampler::sample_latin_square;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    // Tests every sampled grid satisfies the Latin-square invariant
    // Verified by breaking the symbol relabeling
    #[test]
    fn test_sampled_grids_are_latin() {
        for size in 1..=9 {
            for seed in 0..8 {
                let mut rng = StdRng::seed_from_u64(seed);
                let grid = sample_latin_square(size, &mut rng);
                assert_eq!(grid.size(), size);
                assert!(grid.is_latin(), "size {size} seed {seed} is not Latin");
            }
        }
    }

    // Tests the sampler actually consumes randomness
    // Verified by ignoring the generator during sampling
    #[test]
    fn test_distinct_seeds_produce_varied_grids() {
        let grids: Vec<_> = (0..10)
            .map(|seed| {
                let mut rng = StdRng::seed_from_u64(seed);
                sample_latin_square(6, &mut rng)
            })
            .collect();

        let distinct = grids
            .iter()
            .any(|grid| grids.first().is_some_and(|first| grid != first));
        assert!(distinct, "ten seeds produced identical grids");
    }

    // Tests the same seed reproduces the same grid
    // Verified by reseeding with a different value
    #[test]
    fn test_sampling_is_deterministic() {
        let mut first_rng = StdRng::seed_from_u64(99);
        let mut second_rng = StdRng::seed_from_u64(99);

        let first = sample_latin_square(7, &mut first_rng);
        let second = sample_latin_square(7, &mut second_rng);
        assert_eq!(first, second);
    }
}
