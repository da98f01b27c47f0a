//! 계산 결과를 사람이 읽는 텍스트나 TOML로 만든다.

use serde::Serialize;

use crate::heating::{CalculationInput, CalculationResult, CheaperOption, SeasonalComparison};
use crate::i18n::{keys, Translator};
use crate::units::{convert_energy, EnergyUnit};

/// 결과 텍스트를 줄 단위로 만든다. 에너지는 `energy_unit`으로 표시한다.
pub fn render_result(
    tr: &Translator,
    result: &CalculationResult,
    energy_unit: EnergyUnit,
) -> Vec<String> {
    let currency = tr.t(keys::CURRENCY_MAJOR);
    let money = |key: &str, value: f64| format!("{} {value:.2} {currency}", tr.t(key));
    let energy = convert_energy(
        result.energy_consumed_kwh,
        EnergyUnit::KilowattHour,
        energy_unit,
    );
    let verdict = match result.cheaper_option {
        CheaperOption::Boiler => keys::RESULT_CHEAPER_BOILER,
        CheaperOption::NetworkHotWater => keys::RESULT_CHEAPER_NETWORK,
    };
    vec![
        tr.t(keys::RESULT_HEADING).to_string(),
        format!(
            "{} {energy:.2} {}",
            tr.t(keys::RESULT_ENERGY),
            energy_unit.symbol()
        ),
        money(keys::RESULT_TOTAL_COST, result.total_cost_major),
        money(keys::RESULT_ELECTRICITY, result.breakdown.electricity_major),
        money(keys::RESULT_COLD_WATER, result.breakdown.cold_water_major),
        money(keys::RESULT_SUBSCRIPTION, result.breakdown.subscription_major),
        money(keys::RESULT_NETWORK_COST, result.network_hot_water_cost_major),
        tr.t(verdict).to_string(),
        money(keys::RESULT_SAVINGS, result.savings_major()),
    ]
}

/// 여름/겨울 결과를 제목과 함께 이어 붙인다.
pub fn render_comparison(
    tr: &Translator,
    comparison: &SeasonalComparison,
    energy_unit: EnergyUnit,
) -> Vec<String> {
    let mut lines = vec![format!("[{}]", tr.t(keys::SEASON_SUMMER))];
    lines.extend(render_result(tr, &comparison.summer, energy_unit));
    lines.push(format!("[{}]", tr.t(keys::SEASON_WINTER)));
    lines.extend(render_result(tr, &comparison.winter, energy_unit));
    lines
}

#[derive(Serialize)]
struct Record<'a> {
    input: &'a CalculationInput,
    result: &'a CalculationResult,
}

/// 입력과 결과를 TOML 문서로 직렬화한다.
pub fn to_toml(
    input: &CalculationInput,
    result: &CalculationResult,
) -> Result<String, toml::ser::Error> {
    toml::to_string_pretty(&Record { input, result })
}
