use serde::{Deserialize, Serialize};

use super::boiler_cost::{compute, CalculationInput, CalculationResult};

/// 계절별 급수 온도 프리셋.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Season {
    /// 급수 15 °C
    Summer,
    /// 급수 5 °C
    Winter,
}

impl Season {
    pub const ALL: [Season; 2] = [Season::Summer, Season::Winter];

    /// 계절별 냉수 유입 온도 [°C].
    pub fn inlet_temp_c(&self) -> f64 {
        match self {
            Season::Summer => 15.0,
            Season::Winter => 5.0,
        }
    }

    /// 입력의 급수 온도를 계절 값으로 바꾼다. 나머지 값은 그대로 둔다.
    pub fn apply(&self, input: CalculationInput) -> CalculationInput {
        CalculationInput {
            initial_temp_c: self.inlet_temp_c(),
            ..input
        }
    }
}

/// 계절 프리셋을 적용해 비용을 계산한다.
pub fn compute_for_season(season: Season, input: CalculationInput) -> CalculationResult {
    compute(season.apply(input))
}

/// 여름/겨울 결과를 나란히 담는다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeasonalComparison {
    pub summer: CalculationResult,
    pub winter: CalculationResult,
}

/// 같은 조건에서 여름과 겨울 비용을 함께 계산한다.
pub fn compare_seasons(input: CalculationInput) -> SeasonalComparison {
    let [summer, winter] = Season::ALL.map(|season| compute_for_season(season, input));
    SeasonalComparison { summer, winter }
}
