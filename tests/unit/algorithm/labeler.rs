//! Tests for operator assignment and target computation

#[cfg(test)]
mod tests {
    use calcugen::algorithm::labeler::label_cage;
    use calcugen::puzzle::{Cell, Grid, Operator};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn fixture_grid() -> Grid {
        match Grid::from_rows(vec![
            vec![1, 2, 3, 4],
            vec![3, 4, 1, 2],
            vec![2, 1, 4, 3],
            vec![4, 3, 2, 1],
        ]) {
            Ok(grid) => grid,
            Err(err) => unreachable!("fixture grid is valid: {err}"),
        }
    }

    // Tests singleton regions are labeled as operatorless reveals
    // Verified by assigning an arithmetic operator
    #[test]
    fn test_singleton_gets_no_operator() {
        let grid = fixture_grid();
        let mut rng = StdRng::seed_from_u64(1);

        let Ok(cage) = label_cage(&grid, vec![Cell::new(1, 2)], &mut rng) else {
            unreachable!("singleton labeling cannot fail");
        };
        assert_eq!(cage.operator(), Operator::Nop);
        assert_eq!(cage.value(), 1);
    }

    // Tests pair cages draw from all three operators over many seeds
    // Verified by removing subtraction from the pair pool
    #[test]
    fn test_pairs_use_all_three_operators() {
        let grid = fixture_grid();
        let mut seen_add = false;
        let mut seen_sub = false;
        let mut seen_mul = false;

        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let cells = vec![Cell::new(0, 0), Cell::new(0, 1)];
            let Ok(cage) = label_cage(&grid, cells, &mut rng) else {
                unreachable!("pair labeling cannot fail");
            };
            match cage.operator() {
                Operator::Add => seen_add = true,
                Operator::Sub => seen_sub = true,
                Operator::Mul => seen_mul = true,
                Operator::Nop => unreachable!("pair cage labeled as reveal"),
            }
        }

        assert!(seen_add && seen_sub && seen_mul);
    }

    // Tests larger cages never receive subtraction
    // Verified by adding subtraction to the group pool
    #[test]
    fn test_groups_exclude_subtraction() {
        let grid = fixture_grid();

        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let cells = vec![Cell::new(2, 0), Cell::new(2, 1), Cell::new(3, 1)];
            let Ok(cage) = label_cage(&grid, cells, &mut rng) else {
                unreachable!("group labeling cannot fail");
            };
            assert!(matches!(
                cage.operator(),
                Operator::Add | Operator::Mul
            ));
        }
    }

    // Tests the stored target reproduces from the solution values
    // Verified by perturbing the stored value
    #[test]
    fn test_targets_recompute_from_solution() {
        let grid = fixture_grid();

        for seed in 0..16 {
            let mut rng = StdRng::seed_from_u64(seed);
            let cells = vec![Cell::new(1, 0), Cell::new(1, 1)];
            let Ok(cage) = label_cage(&grid, cells, &mut rng) else {
                unreachable!("pair labeling cannot fail");
            };

            let values: Vec<u8> = cage.cells().iter().map(|&c| grid.value(c)).collect();
            let Ok(expected) = cage.operator().apply(&values) else {
                unreachable!("recomputing a labeled target cannot fail");
            };
            assert_eq!(expected, u64::from(cage.value()));
        }
    }
}
