use boiler_cost_calculator::heating::{compare_seasons, compute, CalculationInput};
use boiler_cost_calculator::i18n::{keys, Translator};
use boiler_cost_calculator::report;
use boiler_cost_calculator::units::EnergyUnit;

fn input() -> CalculationInput {
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
fn text_report_lists_costs_in_major_units() {
    let tr = Translator::new("en");
    let lines = report::render_result(&tr, &compute(input()), EnergyUnit::KilowattHour);

    assert!(lines.contains(&"Energy consumption: 174.42 kWh".to_string()));
    assert!(lines.contains(&"Boiler total cost: 460.03 UAH".to_string()));
    assert!(lines.contains(&"Network hot water cost: 293.67 UAH".to_string()));
    assert!(lines.contains(&tr.t(keys::RESULT_CHEAPER_NETWORK).to_string()));
    assert!(lines.contains(&"Difference: 166.36 UAH".to_string()));
}

#[test]
fn energy_is_shown_in_requested_unit() {
    let tr = Translator::new("en");
    let lines = report::render_result(&tr, &compute(input()), EnergyUnit::Megajoule);
    // 174.4167 kWh * 3.6
    assert!(lines.contains(&"Energy consumption: 627.90 MJ".to_string()));
}

#[test]
fn comparison_has_both_season_headings() {
    let tr = Translator::new("en");
    let lines =
        report::render_comparison(&tr, &compare_seasons(input()), EnergyUnit::KilowattHour);
    assert_eq!(lines.first().map(String::as_str), Some("[Summer]"));
    assert!(lines.contains(&"[Winter]".to_string()));
    assert!(lines.contains(&"Boiler total cost: 543.75 UAH".to_string()));
}

#[test]
fn toml_record_contains_input_and_result() {
    let inp = input();
    let res = compute(inp);
    let doc = report::to_toml(&inp, &res).unwrap();

    let value: toml::Value = toml::from_str(&doc).unwrap();
    assert_eq!(
        value["input"]["cost_per_kwh"].as_float(),
        Some(432.0)
    );
    assert_eq!(
        value["result"]["cheaper_option"].as_str(),
        Some("NetworkHotWater")
    );
    assert_eq!(
        value["result"]["breakdown"]["cold_water_major"].as_float(),
        Some(40.35)
    );
}
