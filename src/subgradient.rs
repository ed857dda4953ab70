//! Subgradient descent for unconstrained non-smooth minimization.
//!
//! # Algorithm Overview
//!
//! Given an objective `f` and a subgradient oracle `g`, each iteration
//! performs:
//!
//! 1. Evaluate `g_k = g(x_k)` and test stationarity: `max_j |g_k[j]| < ε_g`.
//! 2. Compute the scheduled step `α_k` and test it against the step floor.
//! 3. Update `x_{k+1} = x_k - α_k g_k`.
//! 4. Evaluate `f(x_{k+1})` and test the objective change against `ε_f`.
//!
//! A plain subgradient step is a descent step only when `g_k` is an actual
//! gradient; for a true subgradient the objective may increase on
//! individual iterations, which is why termination keys on the schedule
//! and the tolerances rather than on monotone decrease.
//!
//! # Examples
//!
//! ```rust
//! use subgradopt::prelude::*;
//! use nalgebra::DVector;
//!
//! let cost_fn = AbsSum;
//! let optimizer = SubgradientDescent::new(
//!     SubgradientConfig::new().with_diminishing_step_size(0.5),
//! );
//! let criterion = StoppingCriterion::new().with_max_iterations(500);
//!
//! let start = DVector::from_vec(vec![2.0, -3.0]);
//! let result = optimizer.optimize(&cost_fn, &start, &criterion).unwrap();
//! assert!(result.value < 0.5);
//! ```

use crate::{
    callback::{CallbackInfo, NoOpCallback, OptimizationCallback},
    cost_function::CostFunction,
    error::{OptimizerError, Result},
    optimizer::{IterationRecord, OptimizationResult, StoppingCriterion, TerminationReason},
    step_size::StepSizeSchedule,
    types::{DVector, Scalar},
};
use num_traits::Float;

/// Configuration for the subgradient descent optimizer.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubgradientConfig<T: Scalar> {
    /// Step size schedule
    pub step_size: StepSizeSchedule<T>,

    /// Step floor: a scheduled step below this halts the run
    pub min_step: T,
}

impl<T: Scalar> Default for SubgradientConfig<T> {
    fn default() -> Self {
        Self {
            step_size: StepSizeSchedule::Fixed(T::DEFAULT_STEP_SIZE),
            min_step: T::MIN_STEP_SIZE,
        }
    }
}

impl<T: Scalar> SubgradientConfig<T> {
    /// Creates a new configuration with default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the step size schedule.
    pub fn with_step_size(mut self, schedule: StepSizeSchedule<T>) -> Self {
        self.step_size = schedule;
        self
    }

    /// Sets a fixed step size.
    pub fn with_fixed_step_size(mut self, step_size: T) -> Self {
        self.step_size = StepSizeSchedule::Fixed(step_size);
        self
    }

    /// Sets a diminishing step size schedule with the given base step.
    pub fn with_diminishing_step_size(mut self, initial: T) -> Self {
        self.step_size = StepSizeSchedule::Diminishing { initial };
        self
    }

    /// Sets the step floor.
    pub fn with_min_step(mut self, min_step: T) -> Self {
        self.min_step = min_step;
        self
    }

    /// Checks that the configuration describes a runnable schedule.
    pub fn validate(&self) -> Result<()> {
        let initial = self.step_size.initial();
        if !(initial > T::zero()) {
            return Err(OptimizerError::invalid_configuration(
                "must be positive",
                "initial_step",
                initial.to_string(),
            ));
        }
        if !(self.min_step > T::zero()) {
            return Err(OptimizerError::invalid_configuration(
                "must be positive",
                "min_step",
                self.min_step.to_string(),
            ));
        }
        Ok(())
    }
}

/// Subgradient descent optimizer.
///
/// Minimizes possibly non-smooth (and possibly non-convex) objectives
/// using plain subgradient steps with a fixed or diminishing schedule.
/// The optimizer holds no mutable state across runs: concurrent calls to
/// [`optimize`](Self::optimize) with independent inputs are safe, and two
/// runs with identical inputs and deterministic oracles produce identical
/// trajectories.
///
/// # Examples
///
/// ```rust
/// use subgradopt::prelude::*;
///
/// // Fixed step
/// let optimizer = SubgradientDescent::<f64>::new(
///     SubgradientConfig::new().with_fixed_step_size(0.1),
/// );
///
/// // Diminishing step with a floor
/// let optimizer = SubgradientDescent::<f64>::new(
///     SubgradientConfig::new()
///         .with_diminishing_step_size(0.5)
///         .with_min_step(1e-6),
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct SubgradientDescent<T: Scalar> {
    config: SubgradientConfig<T>,
}

impl<T: Scalar> SubgradientDescent<T> {
    /// Creates a new optimizer with the given configuration.
    pub fn new(config: SubgradientConfig<T>) -> Self {
        Self { config }
    }

    /// Returns the optimizer configuration.
    pub fn config(&self) -> &SubgradientConfig<T> {
        &self.config
    }

    /// Returns the optimizer name.
    pub fn name(&self) -> &str {
        "Subgradient Descent"
    }

    /// Minimizes `cost_fn` starting from `initial_point`.
    ///
    /// Runs synchronously to completion on the calling thread and returns
    /// the final iterate together with the per-iteration trace and the
    /// [`TerminationReason`] that fired. The result's
    /// `iterations` field counts applied updates.
    ///
    /// # Errors
    ///
    /// Fails without retrying on an invalid configuration, an empty
    /// starting point, a subgradient of the wrong dimension, or a
    /// non-finite oracle value.
    pub fn optimize<C>(
        &self,
        cost_fn: &C,
        initial_point: &DVector<T>,
        criterion: &StoppingCriterion<T>,
    ) -> Result<OptimizationResult<T>>
    where
        C: CostFunction<T> + ?Sized,
    {
        self.optimize_with_callback(cost_fn, initial_point, criterion, &mut NoOpCallback)
    }

    /// Minimizes `cost_fn`, reporting each completed iteration to `callback`.
    ///
    /// The callback is the injection point for external concerns: progress
    /// printing, logging, timing, or cancellation (returning `false` halts
    /// the run with [`TerminationReason::CallbackRequest`]).
    pub fn optimize_with_callback<C, CB>(
        &self,
        cost_fn: &C,
        initial_point: &DVector<T>,
        criterion: &StoppingCriterion<T>,
        callback: &mut CB,
    ) -> Result<OptimizationResult<T>>
    where
        C: CostFunction<T> + ?Sized,
        CB: OptimizationCallback<T> + ?Sized,
    {
        self.config.validate()?;
        criterion.validate()?;
        if initial_point.is_empty() {
            return Err(OptimizerError::invalid_configuration(
                "must be non-empty",
                "initial_point",
                "[]",
            ));
        }

        let n = initial_point.len();
        let mut x = initial_point.clone();

        let mut prev_value = cost_fn.cost(&x)?;
        if !Float::is_finite(prev_value) {
            return Err(OptimizerError::numerical_instability(
                "objective is not finite at the starting point",
            ));
        }

        let mut function_evaluations = 1_usize;
        let mut gradient_evaluations = 0_usize;
        let mut updates = 0_usize;
        let mut value = prev_value;
        let mut gradient_norm = None;
        let mut trace = Vec::new();

        callback.on_optimization_start()?;

        let mut reason = TerminationReason::IterationLimit;

        for iteration in 0..criterion.max_iterations {
            let g = cost_fn.subgradient(&x)?;
            gradient_evaluations += 1;
            if g.len() != n {
                return Err(OptimizerError::dimension_mismatch(n, g.len()));
            }

            let mut g_inf = T::zero();
            for &gj in g.iter() {
                if !Float::is_finite(gj) {
                    return Err(OptimizerError::numerical_instability(format!(
                        "subgradient component is not finite at iteration {iteration}"
                    )));
                }
                g_inf = Float::max(g_inf, Float::abs(gj));
            }
            gradient_norm = Some(g_inf);

            // Stationarity: every component strictly below the tolerance.
            if g_inf < criterion.gradient_tolerance {
                reason = TerminationReason::Optimal;
                break;
            }

            let step_size = self.config.step_size.get_step_size(iteration);
            if step_size < self.config.min_step {
                // Step collapsed; the pending update is not applied.
                reason = TerminationReason::StepCollapsed;
                break;
            }

            // x <- x - step * g
            x.axpy(-step_size, &g, T::one());
            updates += 1;

            let current_value = cost_fn.cost(&x)?;
            function_evaluations += 1;
            if !Float::is_finite(current_value) {
                return Err(OptimizerError::numerical_instability(format!(
                    "objective is not finite at iteration {iteration}"
                )));
            }
            value = current_value;

            // The terminating iteration's update is kept.
            if Float::abs(current_value - prev_value) < criterion.value_tolerance {
                reason = TerminationReason::ValueConverged;
                break;
            }
            prev_value = current_value;

            let record = IterationRecord {
                iteration,
                value: current_value,
                step_size,
            };
            trace.push(record);
            if !callback.on_iteration_end(&CallbackInfo { record, point: &x })? {
                reason = TerminationReason::CallbackRequest;
                break;
            }
        }

        let mut result = OptimizationResult::new(x, value, updates, reason)
            .with_function_evaluations(function_evaluations)
            .with_gradient_evaluations(gradient_evaluations)
            .with_trace(trace);
        if let Some(norm) = gradient_norm {
            result = result.with_gradient_norm(norm);
        }
        Ok(result)
    }
}
