//! 텍스트 입력을 계산 입력으로 바꾸는 폼 계층.
//!
//! 빈 칸 기본값 대입, 입력 단위 환산, 주단위→보조단위 환산, 전제 조건 검증을
//! 모두 여기서 끝낸 뒤에만 [`compute`](crate::heating::compute)를 호출한다.

use thiserror::Error;
use tracing::{debug, warn};

use crate::config::FormDefaults;
use crate::heating::{CalculationInput, Season};
use crate::units::*;

/// 폼 입력 칸.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    WaterVolume,
    InitialTemp,
    TargetTemp,
    Efficiency,
    CostPerKwh,
    HotWaterPrice,
    ColdWaterPrice,
    SubscriptionFee,
}

impl FormField {
    pub const ALL: [FormField; 8] = [
        FormField::WaterVolume,
        FormField::InitialTemp,
        FormField::TargetTemp,
        FormField::Efficiency,
        FormField::CostPerKwh,
        FormField::HotWaterPrice,
        FormField::ColdWaterPrice,
        FormField::SubscriptionFee,
    ];

    /// 번역 키 겸 오류 메시지용 식별자.
    pub fn key(&self) -> &'static str {
        match self {
            FormField::WaterVolume => "field.water_volume",
            FormField::InitialTemp => "field.initial_temp",
            FormField::TargetTemp => "field.target_temp",
            FormField::Efficiency => "field.efficiency",
            FormField::CostPerKwh => "field.cost_per_kwh",
            FormField::HotWaterPrice => "field.hot_water_price",
            FormField::ColdWaterPrice => "field.cold_water_price",
            FormField::SubscriptionFee => "field.subscription_fee",
        }
    }

    /// 요금 칸의 입력 화폐 단위. 요금이 아니면 None.
    pub fn currency_unit(&self) -> Option<CurrencyUnit> {
        match self {
            FormField::CostPerKwh | FormField::HotWaterPrice | FormField::ColdWaterPrice => {
                Some(CurrencyUnit::Minor)
            }
            FormField::SubscriptionFee => Some(CurrencyUnit::Major),
            _ => None,
        }
    }
}

/// 폼 검증 오류.
#[derive(Debug, Error, PartialEq)]
pub enum FormError {
    #[error("숫자가 아닙니다 ({field}): {value}")]
    InvalidNumber { field: &'static str, value: String },
    #[error("물의 양은 0보다 커야 합니다")]
    NonPositiveVolume,
    #[error("효율은 0보다 커야 합니다")]
    NonPositiveEfficiency,
    #[error("효율은 100%를 넘을 수 없습니다")]
    EfficiencyAbove100,
    #[error("목표 온도가 급수 온도보다 낮습니다")]
    TargetBelowInitial,
    #[error("목표 온도가 {0:?} 급수 온도({1} °C)보다 낮습니다")]
    TargetBelowSeasonInlet(Season, f64),
    #[error("유한한 값이 아닙니다 ({field})")]
    NonFinite { field: &'static str },
    #[error("요금은 음수일 수 없습니다 ({field})")]
    NegativeTariff { field: &'static str },
    #[error("심야 요금 계수는 (0, 1] 범위여야 합니다: {0}")]
    NightRateOutOfRange(f64),
}

/// 계산 폼 상태. 모든 숫자 칸은 사용자가 입력한 원문 그대로 보관한다.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorForm {
    pub water_volume: String,
    pub initial_temp: String,
    pub target_temp: String,
    pub efficiency: String,
    pub cost_per_kwh: String,
    pub hot_water_price: String,
    pub cold_water_price: String,
    pub subscription_fee: String,
    pub night_rate: bool,
    /// 설정되면 급수 온도 칸 대신 계절 값을 쓴다.
    pub season: Option<Season>,
    pub volume_unit: VolumeUnit,
    pub temperature_unit: TemperatureUnit,
}

impl CalculatorForm {
    pub fn new(units: &crate::config::DefaultUnits) -> Self {
        Self {
            water_volume: String::new(),
            initial_temp: String::new(),
            target_temp: String::new(),
            efficiency: String::new(),
            cost_per_kwh: String::new(),
            hot_water_price: String::new(),
            cold_water_price: String::new(),
            subscription_fee: String::new(),
            night_rate: false,
            season: None,
            volume_unit: units.volume,
            temperature_unit: units.temperature,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::WaterVolume => &mut self.water_volume,
            FormField::InitialTemp => &mut self.initial_temp,
            FormField::TargetTemp => &mut self.target_temp,
            FormField::Efficiency => &mut self.efficiency,
            FormField::CostPerKwh => &mut self.cost_per_kwh,
            FormField::HotWaterPrice => &mut self.hot_water_price,
            FormField::ColdWaterPrice => &mut self.cold_water_price,
            FormField::SubscriptionFee => &mut self.subscription_fee,
        }
    }

    /// 폼을 계산 입력으로 바꾼다. 빈 칸은 `defaults`로 채운다.
    pub fn submit(&self, defaults: &FormDefaults) -> Result<CalculationInput, FormError> {
        let volume = match parse_field(FormField::WaterVolume, &self.water_volume)? {
            Some(v) => convert_volume(v, self.volume_unit, VolumeUnit::Liter),
            None => defaults.water_volume_liters,
        };
        let initial_temp_c = match self.season {
            Some(season) => season.inlet_temp_c(),
            None => self.temperature_or(
                FormField::InitialTemp,
                &self.initial_temp,
                defaults.initial_temp_c,
            )?,
        };
        let target_temp_c =
            self.temperature_or(FormField::TargetTemp, &self.target_temp, defaults.target_temp_c)?;
        let efficiency_percent = parse_field(FormField::Efficiency, &self.efficiency)?
            .unwrap_or(defaults.efficiency_percent);

        let cost_per_kwh = tariff_minor(
            FormField::CostPerKwh,
            &self.cost_per_kwh,
            defaults.cost_per_kwh_minor,
        )?;
        let hot_water_price_per_m3 = tariff_minor(
            FormField::HotWaterPrice,
            &self.hot_water_price,
            defaults.hot_water_price_per_m3_minor,
        )?;
        let cold_water_price_per_m3 = tariff_minor(
            FormField::ColdWaterPrice,
            &self.cold_water_price,
            defaults.cold_water_price_per_m3_minor,
        )?;
        let subscription_fee = tariff_minor(
            FormField::SubscriptionFee,
            &self.subscription_fee,
            defaults.subscription_fee_major,
        )?;

        let input = CalculationInput {
            water_volume_liters: volume,
            initial_temp_c,
            target_temp_c,
            efficiency_percent,
            cost_per_kwh,
            hot_water_price_per_m3,
            cold_water_price_per_m3,
            subscription_fee,
            night_rate_factor: if self.night_rate {
                defaults.night_rate_factor
            } else {
                1.0
            },
        };
        if let Err(e) = validate(&input) {
            warn!(error = %e, "rejected form input");
            return Err(e);
        }
        debug!(?input, "form submitted");
        Ok(input)
    }

    /// 여름/겨울 비교용 입력. 두 계절의 급수 온도 모두에 대해 검증한다.
    ///
    /// 반환값의 급수 온도는 마지막 계절 값이며, 비교 계산에서 계절마다 다시 덮어쓴다.
    pub fn submit_comparison(
        &self,
        defaults: &FormDefaults,
    ) -> Result<CalculationInput, FormError> {
        let mut form = self.clone();
        let mut input = None;
        for season in Season::ALL {
            form.season = Some(season);
            input = Some(form.submit(defaults).map_err(|e| match e {
                FormError::TargetBelowInitial => {
                    FormError::TargetBelowSeasonInlet(season, season.inlet_temp_c())
                }
                other => other,
            })?);
        }
        input.ok_or(FormError::TargetBelowInitial)
    }

    fn temperature_or(
        &self,
        field: FormField,
        raw: &str,
        default_c: f64,
    ) -> Result<f64, FormError> {
        Ok(match parse_field(field, raw)? {
            Some(v) => to_celsius(v, self.temperature_unit),
            None => default_c,
        })
    }
}

/// 요금 칸을 읽어 보조단위로 환산한다. 기본값과 입력값 모두 칸의 화폐 단위 기준이다.
fn tariff_minor(field: FormField, raw: &str, default: f64) -> Result<f64, FormError> {
    let unit = field.currency_unit().unwrap_or(CurrencyUnit::Minor);
    let value = parse_field(field, raw)?.unwrap_or(default);
    Ok(convert_currency(value, unit, CurrencyUnit::Minor))
}

/// 숫자 칸을 읽는다. 빈 칸은 None, 소수점 쉼표(42,94)도 허용한다.
///
/// 쉼표는 소수점 하나로만 본다. 쉼표가 여러 개이거나 점과 섞이면(1,500.5)
/// 자릿수 구분자일 수 있으므로 거부한다.
pub fn parse_field(field: FormField, raw: &str) -> Result<Option<f64>, FormError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let invalid = || FormError::InvalidNumber {
        field: field.key(),
        value: trimmed.to_string(),
    };
    let commas = trimmed.matches(',').count();
    if commas > 1 || (commas == 1 && trimmed.contains('.')) {
        return Err(invalid());
    }
    match trimmed.replace(',', ".").parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(invalid()),
    }
}

/// 계산 전제 조건을 검사한다. 통과한 입력에 대해 계산 결과는 항상 유한하다.
pub fn validate(input: &CalculationInput) -> Result<(), FormError> {
    // 빈 칸 기본값은 config.toml에서 오므로 nan/inf가 섞일 수 있다
    for (field, value) in [
        (FormField::WaterVolume, input.water_volume_liters),
        (FormField::InitialTemp, input.initial_temp_c),
        (FormField::TargetTemp, input.target_temp_c),
        (FormField::Efficiency, input.efficiency_percent),
        (FormField::CostPerKwh, input.cost_per_kwh),
        (FormField::HotWaterPrice, input.hot_water_price_per_m3),
        (FormField::ColdWaterPrice, input.cold_water_price_per_m3),
        (FormField::SubscriptionFee, input.subscription_fee),
    ] {
        if !value.is_finite() {
            return Err(FormError::NonFinite { field: field.key() });
        }
    }
    if input.water_volume_liters <= 0.0 {
        return Err(FormError::NonPositiveVolume);
    }
    if input.efficiency_percent <= 0.0 {
        return Err(FormError::NonPositiveEfficiency);
    }
    if input.efficiency_percent > 100.0 {
        return Err(FormError::EfficiencyAbove100);
    }
    if input.target_temp_c < input.initial_temp_c {
        return Err(FormError::TargetBelowInitial);
    }
    for (field, value) in [
        (FormField::CostPerKwh, input.cost_per_kwh),
        (FormField::HotWaterPrice, input.hot_water_price_per_m3),
        (FormField::ColdWaterPrice, input.cold_water_price_per_m3),
        (FormField::SubscriptionFee, input.subscription_fee),
    ] {
        if value < 0.0 {
            return Err(FormError::NegativeTariff { field: field.key() });
        }
    }
    if !(input.night_rate_factor > 0.0 && input.night_rate_factor <= 1.0) {
        return Err(FormError::NightRateOutOfRange(input.night_rate_factor));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_field_is_none() {
        assert_eq!(parse_field(FormField::Efficiency, "   ").unwrap(), None);
    }

    #[test]
    fn comma_decimal_separator() {
        assert_eq!(
            parse_field(FormField::SubscriptionFee, "42,94").unwrap(),
            Some(42.94)
        );
    }

    #[test]
    fn ambiguous_separators_are_rejected() {
        for raw in ["3,000,000", "1,500.5", "1.500,5"] {
            assert!(matches!(
                parse_field(FormField::WaterVolume, raw),
                Err(FormError::InvalidNumber { .. })
            ));
        }
    }

    #[test]
    fn infinity_is_rejected() {
        assert!(matches!(
            parse_field(FormField::WaterVolume, "inf"),
            Err(FormError::InvalidNumber { .. })
        ));
    }
}
