use serde::{Deserialize, Serialize};

/// 화폐 보조단위(코페이카, 센트 등)가 주단위에 포함되는 개수.
pub const MINOR_PER_MAJOR: f64 = 100.0;

/// 화폐 단위. 내부 기준은 보조단위(minor)이다.
///
/// 요금 합산은 모두 보조단위로 수행하고, 결과를 표시할 때 한 번만 주단위로 바꾼다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CurrencyUnit {
    /// 주단위 (예: 흐리우냐, 달러)
    Major,
    /// 보조단위 (예: 코페이카, 센트)
    Minor,
}

fn to_minor(value: f64, unit: CurrencyUnit) -> f64 {
    match unit {
        CurrencyUnit::Major => value * MINOR_PER_MAJOR,
        CurrencyUnit::Minor => value,
    }
}

fn from_minor(value: f64, unit: CurrencyUnit) -> f64 {
    match unit {
        CurrencyUnit::Major => value / MINOR_PER_MAJOR,
        CurrencyUnit::Minor => value,
    }
}

/// 금액을 변환한다.
pub fn convert_currency(value: f64, from: CurrencyUnit, to: CurrencyUnit) -> f64 {
    from_minor(to_minor(value, from), to)
}

/// 보조단위 금액을 주단위로 바꾼다.
pub fn minor_to_major(value_minor: f64) -> f64 {
    from_minor(value_minor, CurrencyUnit::Major)
}
