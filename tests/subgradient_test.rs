//! Integration tests for the subgradient descent optimizer

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::cell::Cell;
use subgradopt::prelude::*;

/// Quadratic `f(x) = x1^2 + x2^2 - 2 x1 - 2 x2` with minimizer `(1, 1)`.
fn shifted_quadratic() -> QuadraticCost<f64> {
    QuadraticCost::shifted_sphere(2)
}

#[test]
fn test_quadratic_concrete_scenario() -> Result<()> {
    let cost_fn = shifted_quadratic();

    let optimizer = SubgradientDescent::new(
        SubgradientConfig::new()
            .with_fixed_step_size(0.1)
            .with_min_step(1e-8),
    );
    let criterion = StoppingCriterion::new()
        .with_gradient_tolerance(1e-6)
        .with_value_tolerance(1e-8)
        .with_max_iterations(1000);

    let start = DVector::from_vec(vec![2.0, 2.0]);
    let result = optimizer.optimize(&cost_fn, &start, &criterion)?;

    println!("Final point: {:?}", result.point);
    println!("Final value: {}", result.value);
    println!("Iterations: {}", result.iterations);

    assert!(matches!(
        result.termination_reason,
        TerminationReason::Optimal | TerminationReason::ValueConverged
    ));
    assert!(result.converged);

    let minimizer = DVector::from_vec(vec![1.0, 1.0]);
    assert!((&result.point - &minimizer).norm() < 1e-3);

    // The fixed-step quadratic trajectory decreases strictly until convergence
    for pair in result.trace.windows(2) {
        assert!(pair[1].value < pair[0].value);
        assert_eq!(pair[1].iteration, pair[0].iteration + 1);
    }
    for record in &result.trace {
        assert_eq!(record.step_size, 0.1);
    }

    // The reported value is the objective at the reported point
    assert_eq!(result.value, cost_fn.cost(&result.point)?);

    Ok(())
}

#[test]
fn test_quadratic_converges_from_various_starts() -> Result<()> {
    let cost_fn = shifted_quadratic();
    let optimizer =
        SubgradientDescent::new(SubgradientConfig::new().with_fixed_step_size(0.1));
    let criterion = StoppingCriterion::new()
        .with_gradient_tolerance(1e-8)
        .with_value_tolerance(0.0)
        .with_max_iterations(10_000);

    for start in [
        vec![0.0, 0.0],
        vec![-4.0, 7.5],
        vec![100.0, -100.0],
        vec![1.0, 1.0],
    ] {
        let result = optimizer.optimize(&cost_fn, &DVector::from_vec(start), &criterion)?;
        assert_eq!(result.termination_reason, TerminationReason::Optimal);
        assert!((result.point[0] - 1.0).abs() < 1e-6);
        assert!((result.point[1] - 1.0).abs() < 1e-6);
    }

    Ok(())
}

#[test]
fn test_diminishing_schedule_collapses_step() -> Result<()> {
    // Steps 0.1/sqrt(i+1): 0.1, 0.0707, 0.0577, 0.05, then 0.0447 < 0.05.
    let cost_fn = AbsSum;
    let optimizer = SubgradientDescent::new(
        SubgradientConfig::new()
            .with_diminishing_step_size(0.1)
            .with_min_step(0.05),
    );
    let criterion = StoppingCriterion::new()
        .with_value_tolerance(1e-6)
        .with_max_iterations(1000);

    let start = DVector::from_vec(vec![2.0, -3.0]);
    let result = optimizer.optimize(&cost_fn, &start, &criterion)?;

    assert_eq!(result.termination_reason, TerminationReason::StepCollapsed);
    assert!(!result.converged);
    assert_eq!(result.iterations, 4);
    assert_eq!(result.trace.len(), 4);

    // Four applied steps, each moving both coordinates toward zero
    let moved: f64 = result.trace.iter().map(|r| r.step_size).sum();
    assert!((result.point[0] - (2.0 - moved)).abs() < 1e-12);
    assert!((result.point[1] - (-3.0 + moved)).abs() < 1e-12);

    Ok(())
}

#[test]
fn test_diminishing_schedule_settles_nonsmooth_objective() -> Result<()> {
    let cost_fn = AbsSum;
    let optimizer = SubgradientDescent::new(
        SubgradientConfig::new()
            .with_diminishing_step_size(0.5)
            .with_min_step(1e-9),
    );
    let criterion = StoppingCriterion::new()
        .with_gradient_tolerance(0.0)
        .with_value_tolerance(0.0)
        .with_max_iterations(5000);

    let start = DVector::from_vec(vec![2.0, -3.0]);
    let result = optimizer.optimize(&cost_fn, &start, &criterion)?;

    // Once a coordinate crosses zero it oscillates within the current
    // step, which by iteration 5000 is below 0.01.
    assert!(result.value < 0.1);

    Ok(())
}

#[test]
fn test_sine_sum_reaches_stationary_point() -> Result<()> {
    let cost_fn = SineSum;
    let optimizer =
        SubgradientDescent::new(SubgradientConfig::new().with_fixed_step_size(0.1));
    let criterion = StoppingCriterion::new()
        .with_gradient_tolerance(1e-6)
        .with_value_tolerance(0.0)
        .with_max_iterations(10_000);

    let start = DVector::from_vec(vec![0.0, 0.0]);
    let result = optimizer.optimize(&cost_fn, &start, &criterion)?;

    assert_eq!(result.termination_reason, TerminationReason::Optimal);
    // Gradient cos(x_i) vanishes: descent from 0 lands at -pi/2
    assert!((result.point[0] + std::f64::consts::FRAC_PI_2).abs() < 1e-5);
    assert!((result.point[1] + std::f64::consts::FRAC_PI_2).abs() < 1e-5);
    assert!((result.value + 2.0).abs() < 1e-6);

    Ok(())
}

#[test]
fn test_invalid_step_selector_never_touches_the_oracle() {
    // Numeric front-ends select the schedule by number; selector 3 must
    // be rejected during construction, before any iterate exists.
    let err = StepSizeSchedule::<f64>::from_selector(3, 0.01).unwrap_err();
    assert!(matches!(err, OptimizerError::InvalidConfiguration { .. }));

    // Likewise, a malformed schedule fails before the first oracle call.
    let calls = Cell::new(0_usize);
    let oracle = FnCost::new(
        |x: &DVector<f64>| {
            calls.set(calls.get() + 1);
            x.norm_squared()
        },
        |x: &DVector<f64>| {
            calls.set(calls.get() + 1);
            x * 2.0
        },
    );
    let optimizer =
        SubgradientDescent::new(SubgradientConfig::new().with_fixed_step_size(0.0));
    let criterion = StoppingCriterion::new();

    let err = optimizer
        .optimize(&oracle, &DVector::from_vec(vec![1.0, 2.0]), &criterion)
        .unwrap_err();
    assert!(matches!(err, OptimizerError::InvalidConfiguration { .. }));
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_unlimited_sentinel_is_caller_side() {
    // "0 = unlimited" front-ends map the sentinel before construction;
    // the core rejects a zero budget outright.
    let criterion = StoppingCriterion::<f64>::new().with_max_iterations(0);
    assert!(criterion.validate().is_err());

    let mapped = StoppingCriterion::<f64>::new().with_max_iterations(UNLIMITED_ITERATIONS);
    assert!(mapped.validate().is_ok());
    assert_eq!(mapped.max_iterations, 1_000_000);
}

#[test]
fn test_progress_callback_observes_every_record() -> Result<()> {
    struct CountingCallback {
        records: Vec<IterationRecord<f64>>,
    }

    impl OptimizationCallback<f64> for CountingCallback {
        fn on_iteration_end(&mut self, info: &CallbackInfo<'_, f64>) -> Result<bool> {
            self.records.push(info.record);
            Ok(true)
        }
    }

    let cost_fn = shifted_quadratic();
    let optimizer =
        SubgradientDescent::new(SubgradientConfig::new().with_fixed_step_size(0.1));
    let criterion = StoppingCriterion::new()
        .with_value_tolerance(1e-8)
        .with_max_iterations(1000);

    let mut callback = CountingCallback {
        records: Vec::new(),
    };
    let start = DVector::from_vec(vec![2.0, 2.0]);
    let result =
        optimizer.optimize_with_callback(&cost_fn, &start, &criterion, &mut callback)?;

    assert_eq!(callback.records, result.trace);

    // The stdout progress callback exercises the same path
    let mut printer = PrintProgressCallback::new(10);
    optimizer.optimize_with_callback(&cost_fn, &start, &criterion, &mut printer)?;

    Ok(())
}

proptest! {
    #[test]
    fn prop_diminishing_steps_bounded_and_strictly_decreasing(
        initial in 1e-3f64..10.0,
        i in 0usize..5000,
    ) {
        let schedule = StepSizeSchedule::diminishing(initial);
        prop_assert!(schedule.get_step_size(i) <= initial);
        prop_assert!(schedule.get_step_size(i + 1) < schedule.get_step_size(i));
    }

    #[test]
    fn prop_runs_are_deterministic(x0 in -5.0f64..5.0, x1 in -5.0f64..5.0) {
        let cost_fn = QuadraticCost::<f64>::shifted_sphere(2);
        let optimizer = SubgradientDescent::new(
            SubgradientConfig::new().with_diminishing_step_size(0.2),
        );
        let criterion = StoppingCriterion::new().with_max_iterations(200);

        let start = DVector::from_vec(vec![x0, x1]);
        let first = optimizer.optimize(&cost_fn, &start, &criterion).unwrap();
        let second = optimizer.optimize(&cost_fn, &start, &criterion).unwrap();

        prop_assert_eq!(&first.point, &second.point);
        prop_assert_eq!(first.value, second.value);
        prop_assert_eq!(first.termination_reason, second.termination_reason);
        prop_assert_eq!(first.trace, second.trace);
    }
}
