use std::time::Duration;

/// Counts for various things which count, roughly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    /// The total number of iterations through the resolution loop.
    pub total_iterations: usize,

    /// A count of resolvents derived, including those already known.
    pub resolvents: usize,

    /// A count of clauses removed as they were subsumed by some other clause.
    pub redundant: usize,

    /// A count of clauses removed as tautologies.
    pub tautologies: usize,

    /// The time taken during a proof attempt.
    pub time: Duration,
}
