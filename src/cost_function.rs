//! Cost function interface for subgradient optimization.
//!
//! This module provides the oracle trait that the optimizer consumes: an
//! objective value and *a* subgradient at any queried point. For smooth
//! functions the subgradient is the gradient; at kinks any element of the
//! subdifferential is acceptable.
//!
//! Built-in problems ([`QuadraticCost`], [`SineSum`], [`AbsSum`]) and the
//! closure adapter [`FnCost`] implement the same trait, so test functions
//! and caller-supplied oracles are interchangeable.

use crate::{
    error::Result,
    types::{DMatrix, DVector, Scalar},
};
use num_traits::Float;
use std::fmt::Debug;

/// Trait for objective functions with a subgradient oracle.
///
/// This is the main trait the optimizer uses to evaluate the objective
/// and obtain descent information. Both methods must be defined along the
/// trajectory the algorithm visits and are assumed pure: repeated calls
/// with the same input return the same output.
pub trait CostFunction<T: Scalar>: Debug {
    /// Evaluates the objective at a point.
    fn cost(&self, point: &DVector<T>) -> Result<T>;

    /// Returns a subgradient of the objective at a point.
    ///
    /// The returned vector must have the same length as `point`. At points
    /// of non-differentiability any vector in the subdifferential is a
    /// valid answer.
    fn subgradient(&self, point: &DVector<T>) -> Result<DVector<T>>;

    /// Evaluates the objective and a subgradient together.
    ///
    /// # Default Implementation
    ///
    /// Calls `cost` and `subgradient` separately. Override when the two
    /// share intermediate computations.
    fn cost_and_subgradient(&self, point: &DVector<T>) -> Result<(T, DVector<T>)> {
        let cost = self.cost(point)?;
        let subgradient = self.subgradient(point)?;
        Ok((cost, subgradient))
    }
}

/// A quadratic cost function.
///
/// Computes `f(x) = 0.5 * x^T A x + b^T x + c` with gradient `A x + b`.
/// The matrix `a` should be symmetric.
#[derive(Debug, Clone)]
pub struct QuadraticCost<T: Scalar> {
    /// The quadratic form matrix (should be symmetric)
    pub a: DMatrix<T>,
    /// The linear term
    pub b: DVector<T>,
    /// The constant term
    pub c: T,
}

impl<T: Scalar> QuadraticCost<T> {
    /// Creates a new quadratic cost function.
    pub fn new(a: DMatrix<T>, b: DVector<T>, c: T) -> Self {
        Self { a, b, c }
    }

    /// Creates a simple quadratic with identity matrix: `f(x) = 0.5 * ||x||^2`
    pub fn simple(dim: usize) -> Self {
        Self {
            a: DMatrix::identity(dim, dim),
            b: DVector::zeros(dim),
            c: T::zero(),
        }
    }

    /// Creates the separable quadratic `f(x) = sum_i (x_i^2 - 2 x_i)`,
    /// minimized at the all-ones vector.
    pub fn shifted_sphere(dim: usize) -> Self {
        let two = <T as Scalar>::from_f64(2.0);
        Self {
            a: DMatrix::identity(dim, dim) * two,
            b: DVector::from_element(dim, -two),
            c: T::zero(),
        }
    }
}

impl<T: Scalar> CostFunction<T> for QuadraticCost<T> {
    fn cost(&self, point: &DVector<T>) -> Result<T> {
        let half = <T as Scalar>::from_f64(0.5);
        let quad = (point.transpose() * &self.a * point)[(0, 0)];
        Ok(half * quad + self.b.dot(point) + self.c)
    }

    fn subgradient(&self, point: &DVector<T>) -> Result<DVector<T>> {
        Ok(&self.a * point + &self.b)
    }
}

/// The multimodal test function `f(x) = sum_i sin(x_i)`.
///
/// Smooth but non-convex, with gradient `cos(x_i)`; useful for exercising
/// the method on a landscape with many stationary points.
#[derive(Debug, Clone, Copy, Default)]
pub struct SineSum;

impl<T: Scalar> CostFunction<T> for SineSum {
    fn cost(&self, point: &DVector<T>) -> Result<T> {
        Ok(point.iter().fold(T::zero(), |acc, &x| acc + Float::sin(x)))
    }

    fn subgradient(&self, point: &DVector<T>) -> Result<DVector<T>> {
        Ok(point.map(Float::cos))
    }
}

/// The non-smooth test function `f(x) = sum_i |x_i|`.
///
/// Non-differentiable on every coordinate hyperplane. The oracle returns
/// the sign vector, with `sign(0) = 0` (a valid subgradient at the kink).
#[derive(Debug, Clone, Copy, Default)]
pub struct AbsSum;

impl<T: Scalar> CostFunction<T> for AbsSum {
    fn cost(&self, point: &DVector<T>) -> Result<T> {
        Ok(point.iter().fold(T::zero(), |acc, &x| acc + Float::abs(x)))
    }

    fn subgradient(&self, point: &DVector<T>) -> Result<DVector<T>> {
        Ok(point.map(|x| {
            if x < T::zero() {
                -T::one()
            } else if x > T::zero() {
                T::one()
            } else {
                T::zero()
            }
        }))
    }
}

/// Adapter turning a pair of closures into a [`CostFunction`].
///
/// This lets callers supply first-class function values without defining
/// a dedicated type:
///
/// ```rust
/// use subgradopt::prelude::*;
/// use nalgebra::DVector;
///
/// let oracle = FnCost::new(
///     |x: &DVector<f64>| x.norm_squared(),
///     |x: &DVector<f64>| x * 2.0,
/// );
/// assert_eq!(oracle.cost(&DVector::from_vec(vec![3.0, 4.0])).unwrap(), 25.0);
/// ```
pub struct FnCost<F, G> {
    objective: F,
    subgradient: G,
}

impl<F, G> FnCost<F, G> {
    /// Wraps an objective closure and a subgradient closure.
    pub fn new(objective: F, subgradient: G) -> Self {
        Self {
            objective,
            subgradient,
        }
    }
}

impl<F, G> Debug for FnCost<F, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnCost").finish_non_exhaustive()
    }
}

impl<T, F, G> CostFunction<T> for FnCost<F, G>
where
    T: Scalar,
    F: Fn(&DVector<T>) -> T,
    G: Fn(&DVector<T>) -> DVector<T>,
{
    fn cost(&self, point: &DVector<T>) -> Result<T> {
        Ok((self.objective)(point))
    }

    fn subgradient(&self, point: &DVector<T>) -> Result<DVector<T>> {
        Ok((self.subgradient)(point))
    }
}
