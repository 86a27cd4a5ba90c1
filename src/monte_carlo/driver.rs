//! Monte Carlo driver: N independent matches folded into one result.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use rayon::prelude::*;

use crate::core::{PlayerStats, SimError, SimRng, SimulationConfig};
use crate::engine::{simulate_match, MatchResult};

use super::aggregate::{AggregateResult, TrialTally};
use super::progress::{Progress, ProgressCadence, ProgressReporter, ProgressSink};

/// Runs batches of simulated matches between two players.
///
/// Trial `i` always draws from `SimRng::for_trial(seed, i)`, so a fixed
/// seed reproduces the same `AggregateResult` bit-for-bit in both
/// sequential and parallel mode.
#[derive(Clone, Debug)]
pub struct MonteCarlo {
    config: SimulationConfig,
}

impl MonteCarlo {
    /// Create a driver, rejecting invalid configuration up front.
    pub fn new(config: SimulationConfig) -> Result<Self, SimError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Play every trial and aggregate.
    ///
    /// `progress` is called synchronously on the calling thread. Returning
    /// [`Progress::Cancel`] aborts with [`SimError::Cancelled`]; partial
    /// aggregates are never returned.
    pub fn run(
        &self,
        player1: &PlayerStats,
        player2: &PlayerStats,
        progress: Option<&mut dyn ProgressSink>,
    ) -> Result<AggregateResult, SimError> {
        let seed = self.config.seed.unwrap_or_else(rand::random);
        let start = Instant::now();

        log::debug!(
            "Starting {} {} trials (seed {}, parallel {}, detailed stats {})",
            self.config.num_trials,
            self.config.format,
            seed,
            self.config.parallel,
            self.config.track_detailed_stats
        );

        let tally = if self.config.parallel {
            self.run_parallel(seed, player1, player2, progress)?
        } else {
            self.run_sequential(seed, player1, player2, progress)?
        };
        let result = tally.finish();

        log::info!(
            "Finished {} trials in {:.2?}: player 1 {:.1}%, player 2 {:.1}%",
            result.total_simulations,
            start.elapsed(),
            result.player1_win_pct * 100.0,
            result.player2_win_pct * 100.0
        );

        Ok(result)
    }

    /// Play trial `trial` of a run seeded with `seed`.
    pub fn play_trial(
        &self,
        seed: u64,
        trial: u32,
        player1: &PlayerStats,
        player2: &PlayerStats,
    ) -> MatchResult {
        let mut rng = SimRng::for_trial(seed, u64::from(trial));
        simulate_match(
            &mut rng,
            player1,
            player2,
            self.config.format,
            self.config.track_detailed_stats,
        )
    }

    fn run_sequential(
        &self,
        seed: u64,
        player1: &PlayerStats,
        player2: &PlayerStats,
        progress: Option<&mut dyn ProgressSink>,
    ) -> Result<TrialTally, SimError> {
        let total = self.config.num_trials;
        let cadence = ProgressCadence::new(total, self.config.progress_steps);
        let mut reporter = ProgressReporter::new(progress, total);
        let mut tally = TrialTally::new(self.config.track_detailed_stats);

        for trial in 0..total {
            let result = self.play_trial(seed, trial, player1, player2);
            tally.record(&result);

            let completed = trial + 1;
            if cadence.is_checkpoint(completed) && reporter.checkpoint(completed) == Progress::Cancel {
                log::info!("Run cancelled after {} of {} trials", completed, total);
                return Err(SimError::Cancelled { completed, total });
            }
        }

        Ok(tally)
    }

    /// Trials on the rayon pool; progress funnels through one channel back
    /// to the calling thread.
    fn run_parallel(
        &self,
        seed: u64,
        player1: &PlayerStats,
        player2: &PlayerStats,
        progress: Option<&mut dyn ProgressSink>,
    ) -> Result<TrialTally, SimError> {
        let total = self.config.num_trials;
        let cadence = ProgressCadence::new(total, self.config.progress_steps);
        let mut reporter = ProgressReporter::new(progress, total);
        let completed = AtomicU32::new(0);
        let cancelled = AtomicBool::new(false);
        let (tx, rx) = mpsc::channel::<u32>();

        let joined = thread::scope(|scope| {
            let completed = &completed;
            let cancelled = &cancelled;
            let cadence = &cadence;

            let worker = scope.spawn(move || {
                (0..total)
                    .into_par_iter()
                    .map_with(tx, |tx, trial| {
                        if cancelled.load(Ordering::Relaxed) {
                            return None;
                        }
                        let result = self.play_trial(seed, trial, player1, player2);
                        let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
                        if cadence.is_checkpoint(done) {
                            // Receiver outlives the pool; a failed send means
                            // the run is already unwinding.
                            let _ = tx.send(done);
                        }
                        Some(result)
                    })
                    .collect::<Vec<_>>()
            });

            for done in rx {
                if reporter.checkpoint(done) == Progress::Cancel {
                    cancelled.store(true, Ordering::Relaxed);
                }
            }

            worker.join()
        });

        let results = match joined {
            Ok(results) => results,
            Err(panic) => std::panic::resume_unwind(panic),
        };

        if cancelled.load(Ordering::Relaxed) {
            let completed = completed.load(Ordering::Relaxed);
            log::info!("Run cancelled after {} of {} trials", completed, total);
            return Err(SimError::Cancelled { completed, total });
        }

        let mut tally = TrialTally::new(self.config.track_detailed_stats);
        for result in results.iter().flatten() {
            tally.record(result);
        }
        Ok(tally)
    }
}

/// One-shot convenience wrapper around [`MonteCarlo`].
pub fn run_monte_carlo(
    player1: &PlayerStats,
    player2: &PlayerStats,
    config: SimulationConfig,
    progress: Option<&mut dyn ProgressSink>,
) -> Result<AggregateResult, SimError> {
    MonteCarlo::new(config)?.run(player1, player2, progress)
}
