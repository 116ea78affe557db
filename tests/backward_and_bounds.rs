use lotka_volterra::prelude::*;

mod common;
use common::{Counting, SHO, default_opts_dense};

#[test]
fn backward_integration_works() {
    let x0 = 2.0 * std::f64::consts::PI;
    let xend = 0.0;
    let y0 = [1.0, 0.0];
    let sol = solve_ivp(&SHO, x0, xend, &y0, default_opts_dense()).unwrap();
    let (t0, t1) = sol.sol_span().expect("no dense span");
    assert!(t0 > t1);
    assert_eq!((t0, t1), (x0, xend));
    let mid = 0.5 * (t0 + t1);
    let y_mid = sol.sol(mid).unwrap();
    assert!((y_mid[0] - mid.cos()).abs() < 1e-6);
    assert!((y_mid[1] + mid.sin()).abs() < 1e-6);
    assert!(sol.t.windows(2).all(|w| w[1] < w[0]));
}

#[test]
fn backward_t_eval_is_sampled_in_order() {
    let t_eval = linspace(3.0, 0.0, 11);
    let options = IVPOptions::builder()
        .rtol(1e-10)
        .atol(1e-10)
        .t_eval(t_eval.clone())
        .build();
    let y0 = [3.0f64.cos(), -3.0f64.sin()];
    let sol = solve_ivp(&SHO, 3.0, 0.0, &y0, options).unwrap();
    assert_eq!(sol.t, t_eval);
    for (t, y) in sol.iter() {
        assert!((y[0] - t.cos()).abs() < 1e-7, "t = {t}");
        assert!((y[1] + t.sin()).abs() < 1e-7, "t = {t}");
    }
}

#[test]
fn dense_output_is_bounded_by_the_span() {
    let sol = solve_ivp(&SHO, 0.0, 1.0, &[1.0, 0.0], default_opts_dense()).unwrap();
    assert_eq!(sol.sol_span(), Some((0.0, 1.0)));
    assert!(sol.sol(-1e-3).is_none());
    assert!(sol.sol(1.0 + 1e-3).is_none());
    assert_eq!(sol.sol(0.0), Some(vec![1.0, 0.0]));
    assert_eq!(sol.sol(1.0).as_ref(), sol.y.last());
    let many = sol.sol_many(&[0.5, 2.0]);
    assert!(many[0].is_some());
    assert!(many[1].is_none());
}

#[test]
fn without_dense_output_sol_is_none() {
    let options = IVPOptions::builder().rtol(1e-6).build();
    let sol = solve_ivp(&SHO, 0.0, 1.0, &[1.0, 0.0], options).unwrap();
    assert!(sol.sol(0.5).is_none());
    assert_eq!(sol.sol_many(&[0.1, 0.2]), vec![None, None]);
    assert!(sol.sol_span().is_none());
    // Step endpoints: initial point plus one entry per accepted step.
    assert_eq!(sol.len(), sol.naccpt + 1);
    assert_eq!(sol.t[0], 0.0);
    assert_eq!(*sol.t.last().unwrap(), 1.0);
}

#[test]
fn t_eval_outside_span_is_rejected_before_stepping() {
    let f = Counting::new(SHO);
    let options = IVPOptions::builder().t_eval(vec![0.0, 0.5, 1.5]).build();
    let err = solve_ivp(&f, 0.0, 1.0, &[1.0, 0.0], options).unwrap_err();
    assert_eq!(
        err,
        Error::InvalidInput(InputError::TEvalOutOfSpan {
            index: 2,
            t: 1.5,
            lo: 0.0,
            hi: 1.0,
        })
    );
    assert_eq!(f.calls.get(), 0);

    let options = IVPOptions::builder().t_eval(vec![-0.1, 0.5]).build();
    let err = solve_ivp(&f, 0.0, 1.0, &[1.0, 0.0], options).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidInput(InputError::TEvalOutOfSpan { index: 0, .. })
    ));
    assert_eq!(f.calls.get(), 0);
}

#[test]
fn invalid_requests_are_rejected_before_stepping() {
    let f = Counting::new(SHO);

    let options = IVPOptions::builder().t_eval(Vec::new()).build();
    assert_eq!(
        solve_ivp(&f, 0.0, 1.0, &[1.0, 0.0], options).unwrap_err(),
        Error::InvalidInput(InputError::EmptyTEval)
    );

    let options = IVPOptions::builder().t_eval(vec![0.0, 0.7, 0.3]).build();
    assert_eq!(
        solve_ivp(&f, 0.0, 1.0, &[1.0, 0.0], options).unwrap_err(),
        Error::InvalidInput(InputError::NonMonotonicTEval { index: 2 })
    );

    let options = IVPOptions::builder().atol([1e-6, 1e-6, 1e-6]).build();
    assert!(matches!(
        solve_ivp(&f, 0.0, 1.0, &[1.0, 0.0], options).unwrap_err(),
        Error::InvalidInput(InputError::DimensionMismatch { name: "atol", .. })
    ));

    let options = IVPOptions::builder().rtol(-1e-3).build();
    assert!(matches!(
        solve_ivp(&f, 0.0, 1.0, &[1.0, 0.0], options).unwrap_err(),
        Error::InvalidInput(InputError::NotPositive { name: "rtol", .. })
    ));

    let options = IVPOptions::builder().scale_max(0.5).build();
    assert!(matches!(
        solve_ivp(&f, 0.0, 1.0, &[1.0, 0.0], options).unwrap_err(),
        Error::InvalidInput(InputError::Settings(_))
    ));

    assert_eq!(f.calls.get(), 0);
}
