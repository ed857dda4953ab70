//! Step size schedules for the subgradient method.
//!
//! The subgradient method does not line-search; the step size comes from a
//! fixed schedule chosen up front. Two schedules are supported:
//!
//! - **Fixed**: `α_i = α₀` for every iteration. Simple, but the iterates
//!   only reach a neighborhood of the minimizer whose radius scales with α₀.
//! - **Diminishing**: `α_i = α₀ / √(i + 1)` with zero-based iteration
//!   index `i`. Satisfies the classical conditions Σ α_i = ∞ and
//!   Σ α_i² < ∞ that guarantee convergence for non-smooth convex
//!   objectives.

use crate::{
    error::{OptimizerError, Result},
    types::Scalar,
};
use num_traits::Float;

/// Step size schedule for the subgradient method.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepSizeSchedule<T: Scalar> {
    /// Fixed step size `α_i = α₀` for all iterations.
    Fixed(T),

    /// Diminishing step size `α_i = α₀ / √(i + 1)`.
    ///
    /// Monotonically decreasing toward zero; the standard schedule for
    /// non-smooth subgradient descent.
    Diminishing {
        /// Base step size α₀
        initial: T,
    },
}

impl<T: Scalar> StepSizeSchedule<T> {
    /// Creates a fixed step size schedule.
    pub fn fixed(step_size: T) -> Self {
        Self::Fixed(step_size)
    }

    /// Creates a diminishing step size schedule.
    pub fn diminishing(initial: T) -> Self {
        Self::Diminishing { initial }
    }

    /// Builds a schedule from a numeric selector: `1` = fixed,
    /// `2` = diminishing.
    ///
    /// Any other selector is an [`OptimizerError::InvalidConfiguration`];
    /// the error is raised here, before any iterate is touched, rather
    /// than being mapped to some default schedule.
    pub fn from_selector(selector: u32, initial: T) -> Result<Self> {
        match selector {
            1 => Ok(Self::Fixed(initial)),
            2 => Ok(Self::Diminishing { initial }),
            other => Err(OptimizerError::invalid_configuration(
                "unrecognized step type",
                "step_type",
                other.to_string(),
            )),
        }
    }

    /// Computes the step size `α_i` for the zero-based iteration `i`.
    pub fn get_step_size(&self, iteration: usize) -> T {
        match self {
            Self::Fixed(alpha) => *alpha,
            Self::Diminishing { initial } => {
                let k = <T as Scalar>::from_usize(iteration);
                *initial / <T as Float>::sqrt(T::one() + k)
            }
        }
    }

    /// Returns the base step size α₀ of the schedule.
    pub fn initial(&self) -> T {
        match self {
            Self::Fixed(alpha) => *alpha,
            Self::Diminishing { initial } => *initial,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fixed_schedule() {
        let schedule = StepSizeSchedule::fixed(0.1);
        assert_eq!(schedule.get_step_size(0), 0.1);
        assert_eq!(schedule.get_step_size(100), 0.1);
        assert_eq!(schedule.get_step_size(1000), 0.1);
    }

    #[test]
    fn test_diminishing_schedule() {
        let schedule = StepSizeSchedule::diminishing(1.0);
        let step0 = schedule.get_step_size(0);
        let step3 = schedule.get_step_size(3);

        assert_relative_eq!(step0, 1.0, epsilon = 1e-12);
        // At i=3: 1.0 / sqrt(4) = 0.5
        assert_relative_eq!(step3, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_diminishing_is_strictly_decreasing() {
        let schedule = StepSizeSchedule::diminishing(0.5);
        let mut prev = f64::INFINITY;
        for i in 0..1000 {
            let step = schedule.get_step_size(i);
            assert!(step < prev);
            assert!(step <= 0.5);
            prev = step;
        }
        // Far into the schedule the step is arbitrarily small
        assert!(schedule.get_step_size(25_000_000) < 1e-4);
    }

    #[test]
    fn test_from_selector() {
        assert_eq!(
            StepSizeSchedule::from_selector(1, 0.01).unwrap(),
            StepSizeSchedule::Fixed(0.01)
        );
        assert_eq!(
            StepSizeSchedule::from_selector(2, 0.01).unwrap(),
            StepSizeSchedule::Diminishing { initial: 0.01 }
        );

        let err = StepSizeSchedule::<f64>::from_selector(3, 0.01).unwrap_err();
        assert!(matches!(
            err,
            OptimizerError::InvalidConfiguration { .. }
        ));
    }

    #[test]
    fn test_initial() {
        assert_eq!(StepSizeSchedule::fixed(0.2).initial(), 0.2);
        assert_eq!(StepSizeSchedule::diminishing(0.3).initial(), 0.3);
    }
}
