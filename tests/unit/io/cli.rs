//! Tests for command-line interface parsing and batch orchestration

#[cfg(test)]
mod tests {
    use calcugen::io::cli::{BatchGenerator, Cli};
    use clap::Parser;

    // Tests defaults match the documented configuration
    // Verified by changing a default in the arguments
    #[test]
    fn test_default_arguments() {
        let Ok(cli) = Cli::try_parse_from(["calcugen"]) else {
            unreachable!("bare invocation parses");
        };

        assert_eq!(cli.size, 6);
        assert_eq!(cli.count, 1);
        assert_eq!(cli.max_cage_size, 4);
        assert_eq!(cli.attempts, 200);
        assert!(cli.seed.is_none());
        assert!(cli.output.is_none());
        assert!(!cli.normalized);
        assert!(!cli.pretty);
        assert!(!cli.quiet);
    }

    // Tests explicit arguments reach the generator configuration
    // Verified by dropping the cage-size mapping
    #[test]
    fn test_arguments_map_to_config() {
        let Ok(cli) = Cli::try_parse_from([
            "calcugen",
            "--size",
            "5",
            "--max-cage-size",
            "3",
            "--attempts",
            "50",
            "--seed",
            "7",
        ]) else {
            unreachable!("valid invocation parses");
        };

        let config = cli.generator_config();
        assert_eq!(config.size, 5);
        assert_eq!(config.max_cage_size, 3);
        assert_eq!(config.max_attempts, 50);
        assert_eq!(cli.seed, Some(7));
    }

    // Tests progress is shown only for quiet-free file output
    // Verified by showing progress for stdout runs
    #[test]
    fn test_progress_visibility() {
        let Ok(stdout_run) = Cli::try_parse_from(["calcugen"]) else {
            unreachable!("bare invocation parses");
        };
        assert!(!stdout_run.should_show_progress());

        let Ok(file_run) = Cli::try_parse_from(["calcugen", "--output", "out"]) else {
            unreachable!("output invocation parses");
        };
        assert!(file_run.should_show_progress());

        let Ok(quiet_run) = Cli::try_parse_from(["calcugen", "--output", "out", "--quiet"])
        else {
            unreachable!("quiet invocation parses");
        };
        assert!(!quiet_run.should_show_progress());
    }

    // Tests a full batch run writes one file per requested puzzle
    // Verified by writing all puzzles to one file
    #[test]
    fn test_batch_run_writes_files() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temp directory is available");
        };
        let Some(dir_arg) = dir.path().to_str() else {
            unreachable!("temp path is valid UTF-8");
        };

        let Ok(cli) = Cli::try_parse_from([
            "calcugen",
            "--size",
            "4",
            "--count",
            "2",
            "--seed",
            "11",
            "--quiet",
            "--output",
            dir_arg,
        ]) else {
            unreachable!("batch invocation parses");
        };

        let mut batch = BatchGenerator::new(cli);
        assert!(batch.process().is_ok());

        assert!(dir.path().join("puzzle_001.json").exists());
        assert!(dir.path().join("puzzle_002.json").exists());
    }

    // Tests an invalid size surfaces as a parameter error
    // Verified by clamping instead of rejecting
    #[test]
    fn test_invalid_size_fails_process() {
        let Ok(cli) = Cli::try_parse_from(["calcugen", "--size", "2", "--quiet"]) else {
            unreachable!("invocation parses; validation happens later");
        };

        let mut batch = BatchGenerator::new(cli);
        assert!(batch.process().is_err());
    }
}
