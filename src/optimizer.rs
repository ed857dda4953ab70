//! Result and termination types for the subgradient method.
//!
//! This module defines the contract between the optimizer and its caller:
//! the stopping conditions supplied on the way in ([`StoppingCriterion`]),
//! and the final point, diagnostic trace, and termination reason handed
//! back on the way out ([`OptimizationResult`]).

use crate::{
    error::{OptimizerError, Result},
    types::{DVector, Scalar},
};

/// Iteration bound callers can substitute for a "0 = unlimited" sentinel.
///
/// The optimizer itself never treats zero as unlimited — a zero iteration
/// budget is a configuration error. Callers that expose an "unlimited"
/// option should map it to this bound before building the criterion.
pub const UNLIMITED_ITERATIONS: usize = 1_000_000;

/// Reason an optimization run terminated.
///
/// Exactly one of these fires per run; failures (invalid configuration,
/// dimension mismatch, non-finite values) are reported through
/// [`OptimizerError`](crate::error::OptimizerError) instead and never
/// appear here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerminationReason {
    /// Every subgradient component is below the gradient tolerance:
    /// a near-stationary point was reached.
    Optimal,
    /// The scheduled step size fell below the step floor; the pending
    /// update was not applied.
    StepCollapsed,
    /// The objective changed by less than the value tolerance between
    /// consecutive accepted iterates; the final update was kept.
    ValueConverged,
    /// The iteration budget was exhausted without convergence.
    IterationLimit,
    /// A progress callback requested early termination.
    CallbackRequest,
}

/// Stopping conditions for a subgradient run.
///
/// Tolerances are plain scalars rather than options: a tolerance of zero
/// disables its check naturally, because the comparisons are strict
/// (`|g_j| >= 0` is never `< 0`).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StoppingCriterion<T: Scalar> {
    /// Tolerance ε_g for the stationarity check `max_j |g_j| < ε_g`.
    pub gradient_tolerance: T,

    /// Tolerance ε_f for the objective-change check `|f_k - f_{k-1}| < ε_f`.
    pub value_tolerance: T,

    /// Maximum number of iterations; must be positive.
    pub max_iterations: usize,
}

impl<T: Scalar> Default for StoppingCriterion<T> {
    fn default() -> Self {
        Self {
            gradient_tolerance: T::DEFAULT_GRADIENT_TOLERANCE,
            value_tolerance: T::DEFAULT_VALUE_TOLERANCE,
            max_iterations: 1000,
        }
    }
}

impl<T: Scalar> StoppingCriterion<T> {
    /// Creates a new stopping criterion with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the gradient tolerance.
    pub fn with_gradient_tolerance(mut self, tol: T) -> Self {
        self.gradient_tolerance = tol;
        self
    }

    /// Sets the objective value change tolerance.
    pub fn with_value_tolerance(mut self, tol: T) -> Self {
        self.value_tolerance = tol;
        self
    }

    /// Sets the maximum number of iterations.
    pub fn with_max_iterations(mut self, max_iter: usize) -> Self {
        self.max_iterations = max_iter;
        self
    }

    /// Checks that the criterion is well-formed: non-negative tolerances
    /// (NaN rejected) and a positive iteration budget.
    pub fn validate(&self) -> Result<()> {
        if !(self.gradient_tolerance >= T::zero()) {
            return Err(OptimizerError::invalid_configuration(
                "must be non-negative",
                "gradient_tolerance",
                self.gradient_tolerance.to_string(),
            ));
        }
        if !(self.value_tolerance >= T::zero()) {
            return Err(OptimizerError::invalid_configuration(
                "must be non-negative",
                "value_tolerance",
                self.value_tolerance.to_string(),
            ));
        }
        if self.max_iterations == 0 {
            return Err(OptimizerError::invalid_configuration(
                "must be positive",
                "max_iterations",
                "0",
            ));
        }
        Ok(())
    }
}

/// Diagnostic record for one completed iteration.
///
/// Records are emitted in iteration order for iterations that applied
/// their update and continued; the run's terminating check leaves no
/// record, so the trace is exactly the replayable history of accepted,
/// non-final steps.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IterationRecord<T: Scalar> {
    /// Zero-based iteration index
    pub iteration: usize,
    /// Objective value after this iteration's update
    pub value: T,
    /// Step size used by this iteration
    pub step_size: T,
}

/// Result of a subgradient optimization run.
///
/// Contains the final iterate, convergence diagnostics, and the full
/// per-iteration trace for the caller to render however it wishes.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimizationResult<T: Scalar> {
    /// The final iterate; always has the dimension fixed by the start point
    pub point: DVector<T>,

    /// The objective value at the final iterate
    pub value: T,

    /// Infinity norm of the last evaluated subgradient (if any was evaluated)
    pub gradient_norm: Option<T>,

    /// Number of subgradient updates applied to the iterate
    pub iterations: usize,

    /// Total number of objective evaluations
    pub function_evaluations: usize,

    /// Total number of subgradient evaluations
    pub gradient_evaluations: usize,

    /// Why the run stopped
    pub termination_reason: TerminationReason,

    /// True if the run stopped on an analytic convergence criterion
    pub converged: bool,

    /// Ordered per-iteration diagnostic records
    pub trace: Vec<IterationRecord<T>>,
}

impl<T: Scalar> OptimizationResult<T> {
    /// Creates a new optimization result.
    pub fn new(
        point: DVector<T>,
        value: T,
        iterations: usize,
        termination_reason: TerminationReason,
    ) -> Self {
        let converged = matches!(
            termination_reason,
            TerminationReason::Optimal | TerminationReason::ValueConverged
        );

        Self {
            point,
            value,
            gradient_norm: None,
            iterations,
            function_evaluations: 0,
            gradient_evaluations: 0,
            termination_reason,
            converged,
            trace: Vec::new(),
        }
    }

    /// Sets the infinity norm of the last subgradient.
    pub fn with_gradient_norm(mut self, norm: T) -> Self {
        self.gradient_norm = Some(norm);
        self
    }

    /// Sets the objective evaluation count.
    pub fn with_function_evaluations(mut self, count: usize) -> Self {
        self.function_evaluations = count;
        self
    }

    /// Sets the subgradient evaluation count.
    pub fn with_gradient_evaluations(mut self, count: usize) -> Self {
        self.gradient_evaluations = count;
        self
    }

    /// Attaches the per-iteration diagnostic trace.
    pub fn with_trace(mut self, trace: Vec<IterationRecord<T>>) -> Self {
        self.trace = trace;
        self
    }
}
