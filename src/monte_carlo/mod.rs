//! Monte Carlo layer: many independent matches, one aggregate.

pub mod aggregate;
pub mod driver;
pub mod progress;

pub use aggregate::{AggregateResult, ObservedSummary, SetDistribution, TrialTally};
pub use driver::{run_monte_carlo, MonteCarlo};
pub use progress::{LogProgress, Progress, ProgressCadence, ProgressSink};
