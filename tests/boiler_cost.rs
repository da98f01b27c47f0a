//! 전기 보일러 대 지역난방 온수 비용 계산 회귀 테스트.
use approx::assert_relative_eq;
use boiler_cost_calculator::heating::{
    compare_seasons, compute, compute_for_season, CalculationInput, CheaperOption, Season,
};
use rstest::rstest;

/// 3000 L, 15→60 °C, 효율 90 %, 432 kop/kWh, 심야 0.5, 기본요금 42.94 UAH.
fn reference_input() -> CalculationInput {
    CalculationInput {
        water_volume_liters: 3000.0,
        initial_temp_c: 15.0,
        target_temp_c: 60.0,
        efficiency_percent: 90.0,
        cost_per_kwh: 432.0,
        hot_water_price_per_m3: 9789.0,
        cold_water_price_per_m3: 1345.0,
        subscription_fee: 4294.0,
        night_rate_factor: 0.5,
    }
}

#[test]
fn reference_scenario_matches_step_by_step_values() {
    let res = compute(reference_input());
    // 3000 * 4.186 * 45 / 3600 / 0.9
    assert_relative_eq!(res.energy_consumed_kwh, 174.416_666_666_666_7, max_relative = 1e-9);
    assert_relative_eq!(res.breakdown.electricity_major, 376.74, max_relative = 1e-9);
    assert_relative_eq!(res.breakdown.cold_water_major, 40.35, max_relative = 1e-9);
    assert_relative_eq!(res.breakdown.subscription_major, 42.94, max_relative = 1e-9);
    assert_relative_eq!(res.total_cost_major, 460.03, max_relative = 1e-9);
    assert_relative_eq!(res.network_hot_water_cost_major, 293.67, max_relative = 1e-9);
    assert_eq!(res.cheaper_option, CheaperOption::NetworkHotWater);
    assert_relative_eq!(res.savings_major(), 166.36, max_relative = 1e-9);
}

#[test]
fn identical_inputs_give_identical_results() {
    assert_eq!(compute(reference_input()), compute(reference_input()));
}

#[rstest]
#[case(60.0, 65.0)]
#[case(40.0, 41.0)]
#[case(15.5, 90.0)]
fn higher_target_costs_more(#[case] lower: f64, #[case] higher: f64) {
    let a = compute(CalculationInput {
        target_temp_c: lower,
        ..reference_input()
    });
    let b = compute(CalculationInput {
        target_temp_c: higher,
        ..reference_input()
    });
    assert!(b.energy_consumed_kwh > a.energy_consumed_kwh);
    assert!(b.total_cost_major > a.total_cost_major);
}

#[rstest]
#[case(50.0, 60.0)]
#[case(90.0, 95.0)]
#[case(99.0, 100.0)]
fn higher_efficiency_uses_less_energy(#[case] lower: f64, #[case] higher: f64) {
    let a = compute(CalculationInput {
        efficiency_percent: lower,
        ..reference_input()
    });
    let b = compute(CalculationInput {
        efficiency_percent: higher,
        ..reference_input()
    });
    assert!(b.energy_consumed_kwh < a.energy_consumed_kwh);
}

#[test]
fn night_rate_halves_only_the_electricity_term() {
    let day = compute(CalculationInput {
        night_rate_factor: 1.0,
        ..reference_input()
    });
    let night = compute(CalculationInput {
        night_rate_factor: 0.5,
        ..reference_input()
    });
    assert_relative_eq!(
        night.breakdown.electricity_major,
        day.breakdown.electricity_major / 2.0,
        max_relative = 1e-12
    );
    assert_eq!(night.breakdown.cold_water_major, day.breakdown.cold_water_major);
    assert_eq!(night.breakdown.subscription_major, day.breakdown.subscription_major);
    assert_eq!(night.network_hot_water_cost_major, day.network_hot_water_cost_major);
    assert_relative_eq!(
        day.total_cost_major - night.total_cost_major,
        day.breakdown.electricity_major / 2.0,
        max_relative = 1e-9
    );
    assert_eq!(night.energy_consumed_kwh, day.energy_consumed_kwh);
}

#[test]
fn no_temperature_rise_costs_only_water_and_subscription() {
    let res = compute(CalculationInput {
        target_temp_c: 15.0,
        ..reference_input()
    });
    assert_eq!(res.energy_consumed_kwh, 0.0);
    assert_eq!(res.breakdown.electricity_major, 0.0);
    assert_relative_eq!(res.total_cost_major, 40.35 + 42.94, max_relative = 1e-12);
}

#[test]
fn strictly_cheaper_boiler_wins() {
    let res = compute(CalculationInput {
        cost_per_kwh: 10.0,
        subscription_fee: 0.0,
        ..reference_input()
    });
    assert!(res.total_cost_major < res.network_hot_water_cost_major);
    assert_eq!(res.cheaper_option, CheaperOption::Boiler);
}

#[test]
fn equal_costs_favour_network_hot_water() {
    // 가열 없이 냉수 단가 = 온수 단가면 두 비용이 정확히 같다
    let res = compute(CalculationInput {
        target_temp_c: 15.0,
        cold_water_price_per_m3: 9789.0,
        subscription_fee: 0.0,
        ..reference_input()
    });
    assert_eq!(res.total_cost_major, res.network_hot_water_cost_major);
    assert_eq!(res.cheaper_option, CheaperOption::NetworkHotWater);
    assert_eq!(res.savings_major(), 0.0);
}

#[test]
fn zero_efficiency_is_not_finite() {
    let res = compute(CalculationInput {
        efficiency_percent: 0.0,
        ..reference_input()
    });
    assert!(!res.energy_consumed_kwh.is_finite());
}

#[test]
fn seasonal_presets_fix_inlet_temperature() {
    let input = CalculationInput {
        initial_temp_c: 40.0,
        ..reference_input()
    };
    let summer = compute_for_season(Season::Summer, input);
    let winter = compute_for_season(Season::Winter, input);
    assert_eq!(summer, compute(reference_input()));
    // 3000 * 4.186 * 55 / 3600 / 0.9 * 432 * 0.5 / 100
    assert_relative_eq!(winter.breakdown.electricity_major, 460.46, max_relative = 1e-9);
    assert_relative_eq!(winter.total_cost_major, 543.75, max_relative = 1e-9);
    assert!(winter.energy_consumed_kwh > summer.energy_consumed_kwh);
}

#[test]
fn season_comparison_holds_both_results() {
    let cmp = compare_seasons(reference_input());
    assert_eq!(cmp.summer, compute_for_season(Season::Summer, reference_input()));
    assert_eq!(cmp.winter, compute_for_season(Season::Winter, reference_input()));
}
