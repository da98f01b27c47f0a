use approx::assert_relative_eq;
use boiler_cost_calculator::conversion::{parse_energy_unit, parse_temperature_unit, parse_volume_unit};
use boiler_cost_calculator::units::*;
use rstest::rstest;

#[rstest]
#[case(0.0, TemperatureUnit::Celsius, 32.0, TemperatureUnit::Fahrenheit)]
#[case(100.0, TemperatureUnit::Celsius, 373.15, TemperatureUnit::Kelvin)]
#[case(60.0, TemperatureUnit::Celsius, 140.0, TemperatureUnit::Fahrenheit)]
fn temperature_conversions(
    #[case] value: f64,
    #[case] from: TemperatureUnit,
    #[case] expected: f64,
    #[case] to: TemperatureUnit,
) {
    assert_relative_eq!(convert_temperature(value, from, to), expected, max_relative = 1e-12);
}

#[test]
fn volume_and_energy_conversions() {
    assert_relative_eq!(
        convert_volume(1.0, VolumeUnit::UsGallon, VolumeUnit::Liter),
        3.785411784,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        convert_energy(1.0, EnergyUnit::KilowattHour, EnergyUnit::Kilojoule),
        3600.0,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        convert_currency(42.94, CurrencyUnit::Major, CurrencyUnit::Minor),
        4294.0,
        max_relative = 1e-12
    );
}

#[test]
fn unit_names_parse() {
    assert_eq!(parse_temperature_unit(" F ").unwrap(), TemperatureUnit::Fahrenheit);
    assert_eq!(parse_volume_unit("m3").unwrap(), VolumeUnit::CubicMeter);
    assert_eq!(parse_energy_unit("kcal").unwrap(), EnergyUnit::KiloCalorie);
    assert!(parse_volume_unit("barrel").is_err());
}
