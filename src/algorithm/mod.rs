/// Efficient bitset implementation for used-value tracking
pub mod bitset;
/// Generation orchestration and retry policy
pub mod generator;
/// Operator assignment and target computation
pub mod labeler;
/// Randomized region growing into connected cages
pub mod partition;
/// Latin-square sampling by symmetry composition
pub mod sampler;
/// Backtracking uniqueness verification
pub mod solver;
