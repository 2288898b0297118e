//! Tests for the generation retry loop

#[cfg(test)]
mod tests {
    use calcugen::PuzzleError;
    use calcugen::algorithm::generator::{GeneratorConfig, PuzzleGenerator};
    use calcugen::puzzle::Operator;

    // Tests generated puzzles satisfy every structural invariant
    // Verified by skipping model validation
    #[test]
    fn test_generated_puzzle_is_valid() {
        let config = GeneratorConfig::for_size(4);
        let Ok(mut generator) = PuzzleGenerator::with_seed(config, 42) else {
            unreachable!("default 4x4 configuration is valid");
        };

        let Ok((model, report)) = generator.generate_with_report() else {
            unreachable!("4x4 generation should succeed within default attempts");
        };

        assert_eq!(model.size(), 4);
        assert!(model.solution().is_latin());
        assert!(model.validate().is_ok());
        assert!(report.attempts >= 1);
    }

    // Tests out-of-range sizes are rejected before any work begins
    // Verified by widening the accepted bounds
    #[test]
    fn test_invalid_size_is_rejected() {
        for size in [0, 2, 13] {
            let config = GeneratorConfig::for_size(size);
            assert!(matches!(
                PuzzleGenerator::with_seed(config, 1),
                Err(PuzzleError::InvalidParameter { .. })
            ));
        }
    }

    // Tests a zero attempt cap is rejected as a parameter error
    // Verified by treating zero attempts as immediate failure
    #[test]
    fn test_zero_attempts_is_rejected() {
        let mut config = GeneratorConfig::for_size(4);
        config.max_attempts = 0;
        assert!(matches!(
            PuzzleGenerator::with_seed(config, 1),
            Err(PuzzleError::InvalidParameter { .. })
        ));
    }

    // Tests a cage cap of one degenerates into an all-reveal puzzle
    // Verified by allowing multi-cell cages through
    #[test]
    fn test_singleton_cap_reveals_solution() {
        let mut config = GeneratorConfig::for_size(4);
        config.max_cage_size = 1;
        let Ok(mut generator) = PuzzleGenerator::with_seed(config, 9) else {
            unreachable!("singleton configuration is valid");
        };

        let Ok((model, report)) = generator.generate_with_report() else {
            unreachable!("all-singleton generation cannot miss");
        };

        assert_eq!(report.attempts, 1);
        assert_eq!(model.cages().len(), 16);
        for cage in model.cages() {
            assert_eq!(cage.len(), 1);
            assert_eq!(cage.operator(), Operator::Nop);
        }
    }

    // Tests the same seed reproduces the same puzzle
    // Verified by reseeding the second generator differently
    #[test]
    fn test_generation_is_reproducible() {
        let config = GeneratorConfig::for_size(5);
        let Ok(mut first) = PuzzleGenerator::with_seed(config, 1234) else {
            unreachable!("5x5 configuration is valid");
        };
        let Ok(mut second) = PuzzleGenerator::with_seed(config, 1234) else {
            unreachable!("5x5 configuration is valid");
        };

        match (first.generate(), second.generate()) {
            (Ok(a), Ok(b)) => assert_eq!(a, b),
            _ => unreachable!("5x5 generation should succeed within default attempts"),
        }
    }
}
