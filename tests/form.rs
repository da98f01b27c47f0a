use approx::assert_relative_eq;
use boiler_cost_calculator::config::{Config, DefaultUnits, FormDefaults};
use boiler_cost_calculator::form::{CalculatorForm, FormError, FormField};
use boiler_cost_calculator::heating::{compare_seasons, compute, CheaperOption, Season};
use boiler_cost_calculator::units::{TemperatureUnit, VolumeUnit};
use rstest::rstest;

fn blank_form() -> CalculatorForm {
    CalculatorForm::new(&DefaultUnits::default())
}

#[test]
fn blank_form_uses_reference_defaults() {
    let mut form = blank_form();
    form.night_rate = true;
    let input = form.submit(&FormDefaults::default()).unwrap();

    assert_eq!(input.water_volume_liters, 3000.0);
    assert_eq!(input.initial_temp_c, 15.0);
    assert_eq!(input.target_temp_c, 60.0);
    assert_eq!(input.efficiency_percent, 90.0);
    assert_eq!(input.cost_per_kwh, 432.0);
    assert_eq!(input.hot_water_price_per_m3, 9789.0);
    assert_eq!(input.cold_water_price_per_m3, 1345.0);
    // 42.94 주단위 → 보조단위
    assert_relative_eq!(input.subscription_fee, 4294.0, max_relative = 1e-12);
    assert_eq!(input.night_rate_factor, 0.5);

    let res = compute(input);
    assert_relative_eq!(res.total_cost_major, 460.03, max_relative = 1e-9);
    assert_eq!(res.cheaper_option, CheaperOption::NetworkHotWater);
}

#[test]
fn night_rate_off_means_factor_one() {
    let input = blank_form().submit(&FormDefaults::default()).unwrap();
    assert_eq!(input.night_rate_factor, 1.0);
}

#[test]
fn input_units_are_converted_before_compute() {
    let mut form = blank_form();
    form.volume_unit = VolumeUnit::CubicMeter;
    form.temperature_unit = TemperatureUnit::Fahrenheit;
    form.water_volume = "3".into();
    form.initial_temp = "59".into();
    form.target_temp = "140".into();
    let input = form.submit(&FormDefaults::default()).unwrap();

    assert_relative_eq!(input.water_volume_liters, 3000.0, max_relative = 1e-12);
    assert_relative_eq!(input.initial_temp_c, 15.0, max_relative = 1e-12);
    assert_relative_eq!(input.target_temp_c, 60.0, max_relative = 1e-12);
}

#[test]
fn season_overrides_initial_temperature_field() {
    let mut form = blank_form();
    form.initial_temp = "30".into();
    form.season = Some(Season::Winter);
    let input = form.submit(&FormDefaults::default()).unwrap();
    assert_eq!(input.initial_temp_c, 5.0);
}

#[test]
fn field_mut_writes_through() {
    let mut form = blank_form();
    for field in FormField::ALL {
        *form.field_mut(field) = "1".into();
    }
    assert_eq!(form.subscription_fee, "1");
    assert_eq!(form.water_volume, "1");
}

#[rstest]
#[case(FormField::WaterVolume, "0", FormError::NonPositiveVolume)]
#[case(FormField::WaterVolume, "-5", FormError::NonPositiveVolume)]
#[case(FormField::Efficiency, "0", FormError::NonPositiveEfficiency)]
#[case(FormField::Efficiency, "100.5", FormError::EfficiencyAbove100)]
#[case(FormField::TargetTemp, "10", FormError::TargetBelowInitial)]
#[case(
    FormField::CostPerKwh,
    "-1",
    FormError::NegativeTariff { field: "field.cost_per_kwh" }
)]
#[case(
    FormField::SubscriptionFee,
    "-0,5",
    FormError::NegativeTariff { field: "field.subscription_fee" }
)]
fn invalid_values_are_rejected(
    #[case] field: FormField,
    #[case] raw: &str,
    #[case] expected: FormError,
) {
    let mut form = blank_form();
    *form.field_mut(field) = raw.to_string();
    assert_eq!(form.submit(&FormDefaults::default()), Err(expected));
}

#[test]
fn non_numeric_text_reports_field_and_value() {
    let mut form = blank_form();
    form.efficiency = "abc".into();
    assert_eq!(
        form.submit(&FormDefaults::default()),
        Err(FormError::InvalidNumber {
            field: "field.efficiency",
            value: "abc".into(),
        })
    );
}

#[test]
fn bad_night_rate_default_is_rejected() {
    let mut form = blank_form();
    form.night_rate = true;
    let defaults = FormDefaults {
        night_rate_factor: 1.5,
        ..FormDefaults::default()
    };
    assert_eq!(
        form.submit(&defaults),
        Err(FormError::NightRateOutOfRange(1.5))
    );
}

#[test]
fn equal_temperatures_are_accepted() {
    let mut form = blank_form();
    form.target_temp = "15".into();
    let input = form.submit(&FormDefaults::default()).unwrap();
    assert_eq!(compute(input).energy_consumed_kwh, 0.0);
}

#[rstest]
#[case("[defaults]\nefficiency_percent = nan\n", "field.efficiency")]
#[case("[defaults]\nwater_volume_liters = inf\n", "field.water_volume")]
#[case("[defaults]\ncost_per_kwh_minor = -inf\n", "field.cost_per_kwh")]
#[case("[defaults]\ntarget_temp_c = nan\n", "field.target_temp")]
fn non_finite_config_defaults_are_rejected(#[case] src: &str, #[case] field: &'static str) {
    let cfg: Config = toml::from_str(src).unwrap();
    let result = blank_form().submit(&cfg.defaults);
    assert_eq!(result, Err(FormError::NonFinite { field }));
}

#[rstest]
#[case("3,000,000")]
#[case("1,500.5")]
fn ambiguous_thousands_separators_are_rejected(#[case] raw: &str) {
    let mut form = blank_form();
    form.water_volume = raw.into();
    assert!(matches!(
        form.submit(&FormDefaults::default()),
        Err(FormError::InvalidNumber { field: "field.water_volume", .. })
    ));
}

#[test]
fn comparison_checks_target_against_every_season() {
    let mut form = blank_form();
    form.target_temp = "10".into();
    // 겨울(5 °C)은 통과하지만 여름(15 °C)은 아니다
    assert_eq!(
        form.submit_comparison(&FormDefaults::default()),
        Err(FormError::TargetBelowSeasonInlet(Season::Summer, 15.0))
    );

    form.target_temp = "60".into();
    form.night_rate = true;
    let input = form.submit_comparison(&FormDefaults::default()).unwrap();
    let cmp = compare_seasons(input);
    assert_relative_eq!(cmp.winter.total_cost_major, 543.75, max_relative = 1e-9);
}
