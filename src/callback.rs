//! Callback support for monitoring and controlling a run.
//!
//! The optimizer performs no I/O of its own. Progress printing, logging,
//! and externally injected cancellation all go through the
//! [`OptimizationCallback`] trait, invoked between iterations.

use crate::{
    error::Result,
    optimizer::IterationRecord,
    types::{DVector, Scalar},
};

/// Information passed to callbacks at the end of an iteration.
#[derive(Debug)]
pub struct CallbackInfo<'a, T: Scalar> {
    /// Diagnostic record of the iteration that just completed
    pub record: IterationRecord<T>,

    /// Current iterate
    pub point: &'a DVector<T>,
}

/// Trait for optimization callbacks.
///
/// Callbacks can be used for logging, visualization, or early stopping.
/// Returning `false` from [`on_iteration_end`](Self::on_iteration_end)
/// halts the run with
/// [`TerminationReason::CallbackRequest`](crate::optimizer::TerminationReason::CallbackRequest).
pub trait OptimizationCallback<T: Scalar> {
    /// Called once before the first iteration.
    fn on_optimization_start(&mut self) -> Result<()> {
        Ok(())
    }

    /// Called at the end of each completed iteration.
    ///
    /// Returns `true` to continue optimization, `false` to stop early.
    fn on_iteration_end(&mut self, info: &CallbackInfo<'_, T>) -> Result<bool> {
        let _ = info;
        Ok(true)
    }
}

/// A no-op callback that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpCallback;

impl<T: Scalar> OptimizationCallback<T> for NoOpCallback {
    // Use default implementations
}

/// A callback that prints per-iteration progress to stdout.
#[derive(Debug, Clone)]
pub struct PrintProgressCallback {
    print_every: usize,
}

impl PrintProgressCallback {
    /// Create a new progress printing callback.
    ///
    /// `print_every` of 1 prints every iteration.
    pub fn new(print_every: usize) -> Self {
        Self {
            print_every: print_every.max(1),
        }
    }
}

impl<T: Scalar> OptimizationCallback<T> for PrintProgressCallback {
    fn on_optimization_start(&mut self) -> Result<()> {
        println!("Starting subgradient descent...");
        Ok(())
    }

    fn on_iteration_end(&mut self, info: &CallbackInfo<'_, T>) -> Result<bool> {
        if info.record.iteration % self.print_every == 0 {
            println!(
                "Iteration {}: value = {}, step = {}",
                info.record.iteration, info.record.value, info.record.step_size
            );
        }
        Ok(true)
    }
}
