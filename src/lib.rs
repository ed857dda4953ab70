//! Subgradient descent for non-smooth convex optimization.
//!
//! This crate implements the classical subgradient method for
//! unconstrained minimization of possibly non-smooth (and possibly
//! non-convex) objectives over `R^n`. The caller supplies an objective,
//! a subgradient oracle, a starting point, and a configuration; the
//! optimizer runs the iterative update loop synchronously and returns
//! the final point together with a replayable per-iteration trace and
//! the reason the run stopped.
//!
//! # Key Concepts
//!
//! - **Subgradient**: for convex `f`, any `g` with
//!   `f(y) >= f(x) + g·(y - x)` for all `y`; generalizes the gradient
//!   to non-differentiable points.
//! - **Step schedules**: a fixed step, or the diminishing schedule
//!   `α₀ / √(i + 1)` standard for non-smooth problems.
//! - **Step floor**: a minimum admissible step below which further
//!   progress is considered negligible and the run halts.
//!
//! # Modules
//!
//! - [`cost_function`]: oracle trait and built-in test problems
//! - [`error`]: error types for optimizer failures
//! - [`step_size`]: step size schedules
//! - [`optimizer`]: stopping criteria, termination reasons, results
//! - [`callback`]: progress monitoring and external cancellation
//! - [`subgradient`]: the subgradient descent optimizer
//! - [`types`]: scalar trait and vector aliases
//!
//! # Example
//!
//! ```rust
//! use subgradopt::prelude::*;
//! use nalgebra::DVector;
//!
//! // f(x) = x1^2 + x2^2 - 2 x1 - 2 x2, minimized at (1, 1)
//! let cost_fn = QuadraticCost::<f64>::shifted_sphere(2);
//!
//! let optimizer = SubgradientDescent::new(
//!     SubgradientConfig::new().with_fixed_step_size(0.1),
//! );
//! let criterion = StoppingCriterion::new()
//!     .with_max_iterations(1000)
//!     .with_gradient_tolerance(1e-6);
//!
//! let start = DVector::from_vec(vec![2.0, 2.0]);
//! let result = optimizer.optimize(&cost_fn, &start, &criterion).unwrap();
//!
//! assert!(result.converged);
//! assert!((result.point[0] - 1.0).abs() < 1e-3);
//! assert!((result.point[1] - 1.0).abs() < 1e-3);
//! ```

pub mod callback;
pub mod cost_function;
pub mod error;
pub mod optimizer;
pub mod step_size;
pub mod subgradient;
pub mod types;

// Re-export commonly used items at the crate root
pub use error::{OptimizerError, Result};
pub use optimizer::{OptimizationResult, StoppingCriterion, TerminationReason};
pub use subgradient::{SubgradientConfig, SubgradientDescent};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use subgradopt::prelude::*;
/// ```
pub mod prelude {
    pub use crate::callback::{
        CallbackInfo, NoOpCallback, OptimizationCallback, PrintProgressCallback,
    };
    pub use crate::cost_function::{AbsSum, CostFunction, FnCost, QuadraticCost, SineSum};
    pub use crate::error::{OptimizerError, Result};
    pub use crate::optimizer::{
        IterationRecord, OptimizationResult, StoppingCriterion, TerminationReason,
        UNLIMITED_ITERATIONS,
    };
    pub use crate::step_size::StepSizeSchedule;
    pub use crate::subgradient::{SubgradientConfig, SubgradientDescent};
    pub use crate::types::{DMatrix, DVector, Scalar};
}
