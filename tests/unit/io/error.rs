//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use calcugen::PuzzleError;
    use std::error::Error;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = PuzzleError::FileSystem {
            path: "/tmp/puzzle_001.json".into(),
            operation: "write",
            source: io_error,
        };

        assert!(error.source().is_some());
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = PuzzleError::InvalidParameter {
            parameter: "size",
            value: "2".to_string(),
            reason: "must be between 3 and 12".to_string(),
        };

        let message = error.to_string();
        assert!(message.contains("size"));
        assert!(message.contains("'2'"));
        assert!(message.contains("between 3 and 12"));
    }

    // Tests GenerationFailed reports both attempts and size
    // Verified by omitting the attempt count
    #[test]
    fn test_generation_failed_error() {
        let error = PuzzleError::GenerationFailed {
            attempts: 200,
            size: 9,
        };

        let message = error.to_string();
        assert!(message.contains("200 attempts"));
        assert!(message.contains("9x9"));
    }

    // Tests SolverBudget carries the explored node count
    // Verified by reporting the budget instead
    #[test]
    fn test_solver_budget_error() {
        let error = PuzzleError::SolverBudget { nodes: 2_000_001 };

        let message = error.to_string();
        assert!(message.contains("2000001"));
        assert!(error.source().is_none());
    }

    // Tests std::io conversion preserves the source error
    // Verified by discarding the source on conversion
    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error: PuzzleError = io_error.into();

        assert!(matches!(error, PuzzleError::FileSystem { .. }));
        assert!(error.source().is_some());
    }
}
