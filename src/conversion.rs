use thiserror::Error;

use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    #[error("알 수 없는 단위: {0}")]
    UnknownUnit(String),
}

/// 사용자가 입력한 단위 문자열을 enum으로 바꾼다.
///
/// 단위 문자열 예시는 `C`, `F`, `L`, `m3`, `kWh`, `MJ` 등을 사용할 수 있다.
pub fn parse_temperature_unit(s: &str) -> Result<TemperatureUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "c" | "celsius" | "°c" => Ok(TemperatureUnit::Celsius),
        "k" | "kelvin" => Ok(TemperatureUnit::Kelvin),
        "f" | "fahrenheit" | "°f" => Ok(TemperatureUnit::Fahrenheit),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_volume_unit(s: &str) -> Result<VolumeUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "l" | "liter" | "litre" => Ok(VolumeUnit::Liter),
        "m3" | "m^3" | "m³" => Ok(VolumeUnit::CubicMeter),
        "gal" | "gallon" => Ok(VolumeUnit::UsGallon),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_energy_unit(s: &str) -> Result<EnergyUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "kwh" => Ok(EnergyUnit::KilowattHour),
        "kj" | "kilojoule" => Ok(EnergyUnit::Kilojoule),
        "mj" | "megajoule" => Ok(EnergyUnit::Megajoule),
        "kcal" | "kilocalorie" => Ok(EnergyUnit::KiloCalorie),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_strings_are_case_insensitive() {
        assert_eq!(parse_volume_unit(" M3 "), Ok(VolumeUnit::CubicMeter));
        assert_eq!(parse_energy_unit("kWh"), Ok(EnergyUnit::KilowattHour));
        assert_eq!(parse_temperature_unit("°F"), Ok(TemperatureUnit::Fahrenheit));
    }

    #[test]
    fn unknown_unit_is_reported() {
        assert_eq!(
            parse_volume_unit("bucket"),
            Err(ConversionError::UnknownUnit("bucket".to_string()))
        );
    }
}
