use serde::{Deserialize, Serialize};

use crate::units::currency::minor_to_major;
use crate::units::energy::KJ_PER_KWH;
use crate::units::volume::LITERS_PER_CUBIC_METER;

/// 물의 비열 [kJ/(kg·°C)]
pub const SPECIFIC_HEAT_WATER_KJ_PER_KG_C: f64 = 4.186;
/// 물의 밀도 [kg/L]
pub const WATER_DENSITY_KG_PER_L: f64 = 1.0;

/// 전기 보일러 대 지역난방 온수 비용 비교 입력.
///
/// 모든 요금은 화폐 보조단위(코페이카 등)로 받는다. 주단위 입력의 환산은
/// 호출 측(폼 계층)에서 한 번만 수행한다.
///
/// 전제 조건: 모든 값은 유한하며 `efficiency_percent > 0` 이다. 이 함수는 검증하지
/// 않으므로 0 효율은 무한대/NaN 결과를 만든다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// 가열할 물의 양 [L]
    pub water_volume_liters: f64,
    /// 급수 온도 [°C]
    pub initial_temp_c: f64,
    /// 목표 온도 [°C]
    pub target_temp_c: f64,
    /// 보일러 효율 [%], (0, 100]
    pub efficiency_percent: f64,
    /// 전력 단가 [보조단위/kWh]
    pub cost_per_kwh: f64,
    /// 지역난방 온수 단가 [보조단위/m³]
    pub hot_water_price_per_m3: f64,
    /// 냉수 단가 [보조단위/m³]
    pub cold_water_price_per_m3: f64,
    /// 월 기본요금 [보조단위]
    pub subscription_fee: f64,
    /// 심야 요금 계수 (0, 1]. 전력 요금에만 곱한다.
    pub night_rate_factor: f64,
}

/// 더 저렴한 온수 공급 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheaperOption {
    Boiler,
    NetworkHotWater,
}

/// 보일러 총비용의 구성 항목 [주단위].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub electricity_major: f64,
    pub cold_water_major: f64,
    pub subscription_major: f64,
}

/// 비용 비교 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// 효율을 반영한 소비 전력량 [kWh]
    pub energy_consumed_kwh: f64,
    /// 보일러 가열 + 냉수 + 기본요금 [주단위]
    pub total_cost_major: f64,
    /// 같은 양을 지역난방 온수로 살 때의 비용 [주단위]
    pub network_hot_water_cost_major: f64,
    pub cheaper_option: CheaperOption,
    pub breakdown: CostBreakdown,
}

impl CalculationResult {
    /// 두 방식의 비용 차이 [주단위].
    pub fn savings_major(&self) -> f64 {
        (self.network_hot_water_cost_major - self.total_cost_major).abs()
    }
}

/// 물을 가열하는 데 필요한 순 에너지 [kWh]. 효율은 반영하지 않는다.
pub fn heating_energy_kwh(
    water_volume_liters: f64,
    initial_temp_c: f64,
    target_temp_c: f64,
) -> f64 {
    let mass_kg = water_volume_liters * WATER_DENSITY_KG_PER_L;
    let delta_t = target_temp_c - initial_temp_c;
    mass_kg * SPECIFIC_HEAT_WATER_KJ_PER_KG_C * delta_t / KJ_PER_KWH
}

/// 전기 보일러 가열 비용과 지역난방 온수 비용을 비교한다.
pub fn compute(input: CalculationInput) -> CalculationResult {
    let energy_required_kwh = heating_energy_kwh(
        input.water_volume_liters,
        input.initial_temp_c,
        input.target_temp_c,
    );
    let efficiency_factor = input.efficiency_percent / 100.0;
    let energy_consumed_kwh = energy_required_kwh / efficiency_factor;

    // 심야 할인은 전력 요금에만 적용
    let electricity_cost = energy_consumed_kwh * input.cost_per_kwh * input.night_rate_factor;

    let volume_m3 = input.water_volume_liters / LITERS_PER_CUBIC_METER;
    let network_hot_water_cost = volume_m3 * input.hot_water_price_per_m3;
    let cold_water_cost = volume_m3 * input.cold_water_price_per_m3;

    let total_cost = electricity_cost + cold_water_cost + input.subscription_fee;

    let total_cost_major = minor_to_major(total_cost);
    let network_hot_water_cost_major = minor_to_major(network_hot_water_cost);
    let cheaper_option = if total_cost_major < network_hot_water_cost_major {
        CheaperOption::Boiler
    } else {
        CheaperOption::NetworkHotWater
    };

    CalculationResult {
        energy_consumed_kwh,
        total_cost_major,
        network_hot_water_cost_major,
        cheaper_option,
        breakdown: CostBreakdown {
            electricity_major: minor_to_major(electricity_cost),
            cold_water_major: minor_to_major(cold_water_cost),
            subscription_major: minor_to_major(input.subscription_fee),
        },
    }
}
