//! Property-based tests for the Black-Scholes engine.
//!
//! Checks no-arbitrage bounds, put-call parity and the sign structure of the
//! Greeks over a wide sample of valid contracts, including the zero
//! volatility and zero expiry boundaries.

use approx::assert_relative_eq;
use pricer_models::analytical::{evaluate, implied_volatility, ImpliedVolConfig};
use pricer_models::instruments::{OptionParams, OptionType};
use proptest::prelude::*;

fn option_type_strategy() -> impl Strategy<Value = OptionType> {
    prop_oneof![Just(OptionType::Call), Just(OptionType::Put)]
}

/// Valid contracts with a share of exact zeros in volatility and expiry.
fn params_strategy() -> impl Strategy<Value = OptionParams> {
    (
        1.0_f64..500.0,
        5.0_f64..500.0,
        -0.02_f64..0.1,
        prop_oneof![1 => Just(0.0), 9 => 0.0_f64..2.0],
        prop_oneof![1 => Just(0.0), 9 => 0.0_f64..2.0],
        option_type_strategy(),
    )
        .prop_map(|(spot, strike, rate, volatility, expiry, option_type)| OptionParams {
            spot,
            strike,
            rate,
            volatility,
            expiry,
            option_type,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn valuation_is_finite_and_non_negative(params in params_strategy()) {
        let v = evaluate(&params).unwrap();
        prop_assert!(v.is_finite());
        prop_assert!(v.price >= 0.0);
        prop_assert!(v.greeks.gamma >= 0.0);
        prop_assert!(v.greeks.vega >= 0.0);
    }

    #[test]
    fn price_respects_no_arbitrage_bounds(params in params_strategy()) {
        let v = evaluate(&params).unwrap();
        let discounted_strike = params.discounted_strike();
        let tol = 1e-6 * params.spot.max(params.strike);

        match params.option_type {
            OptionType::Call => {
                prop_assert!(v.price >= (params.spot - discounted_strike).max(0.0) - tol);
                prop_assert!(v.price <= params.spot + tol);
            }
            OptionType::Put => {
                prop_assert!(v.price >= (discounted_strike - params.spot).max(0.0) - tol);
                prop_assert!(v.price <= discounted_strike + tol);
            }
        }
    }

    #[test]
    fn put_call_parity_holds(params in params_strategy()) {
        let call = evaluate(&params.with_option_type(OptionType::Call)).unwrap();
        let put = evaluate(&params.with_option_type(OptionType::Put)).unwrap();
        let forward_gap = params.spot - params.discounted_strike();
        let tol = 1e-9 * params.spot.max(params.strike);

        prop_assert!((call.price - put.price - forward_gap).abs() <= tol);
        prop_assert!((call.greeks.delta - put.greeks.delta - 1.0).abs() <= 1e-12);
        prop_assert_eq!(call.greeks.gamma, put.greeks.gamma);
        prop_assert_eq!(call.greeks.vega, put.greeks.vega);
    }

    #[test]
    fn delta_stays_in_range(params in params_strategy()) {
        let delta = evaluate(&params).unwrap().greeks.delta;
        match params.option_type {
            OptionType::Call => prop_assert!((0.0..=1.0).contains(&delta)),
            OptionType::Put => prop_assert!((-1.0..=0.0).contains(&delta)),
        }
    }

    #[test]
    fn expiry_zero_is_intrinsic(
        spot in 1.0_f64..500.0,
        strike in 5.0_f64..500.0,
        volatility in 0.0_f64..2.0,
        option_type in option_type_strategy(),
    ) {
        let params = OptionParams::new(spot, strike, 0.05, volatility, 0.0, option_type).unwrap();
        let v = evaluate(&params).unwrap();
        prop_assert_eq!(v.price, option_type.intrinsic(spot, strike));
        prop_assert_eq!(v.greeks.gamma, 0.0);
        prop_assert_eq!(v.greeks.vega, 0.0);
        prop_assert_eq!(v.greeks.theta, 0.0);
        prop_assert_eq!(v.greeks.rho, 0.0);
    }

    #[test]
    fn implied_volatility_round_trips(
        strike in 80.0_f64..125.0,
        volatility in 0.1_f64..1.5,
        expiry in 0.25_f64..2.0,
        option_type in option_type_strategy(),
    ) {
        let params = OptionParams::new(100.0, strike, 0.03, volatility, expiry, option_type).unwrap();
        let price = evaluate(&params).unwrap().price;
        let recovered = implied_volatility(price, &params, &ImpliedVolConfig::default()).unwrap();
        assert_relative_eq!(recovered, volatility, epsilon = 1e-6);
    }
}
