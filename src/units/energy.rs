use serde::{Deserialize, Serialize};

/// 1 kWh에 해당하는 kJ.
pub const KJ_PER_KWH: f64 = 3600.0;

/// 에너지 단위. 내부 기준은 킬로와트시(kWh)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnergyUnit {
    KilowattHour,
    Kilojoule,
    Megajoule,
    KiloCalorie,
}

fn to_kwh(value: f64, unit: EnergyUnit) -> f64 {
    match unit {
        EnergyUnit::KilowattHour => value,
        EnergyUnit::Kilojoule => value / KJ_PER_KWH,
        EnergyUnit::Megajoule => value * 1000.0 / KJ_PER_KWH,
        EnergyUnit::KiloCalorie => value * 4.184 / KJ_PER_KWH,
    }
}

fn from_kwh(value: f64, unit: EnergyUnit) -> f64 {
    match unit {
        EnergyUnit::KilowattHour => value,
        EnergyUnit::Kilojoule => value * KJ_PER_KWH,
        EnergyUnit::Megajoule => value * KJ_PER_KWH / 1000.0,
        EnergyUnit::KiloCalorie => value * KJ_PER_KWH / 4.184,
    }
}

impl EnergyUnit {
    /// 결과 표시에 쓰는 단위 기호.
    pub fn symbol(&self) -> &'static str {
        match self {
            EnergyUnit::KilowattHour => "kWh",
            EnergyUnit::Kilojoule => "kJ",
            EnergyUnit::Megajoule => "MJ",
            EnergyUnit::KiloCalorie => "kcal",
        }
    }
}

/// 에너지를 변환한다.
pub fn convert_energy(value: f64, from: EnergyUnit, to: EnergyUnit) -> f64 {
    from_kwh(to_kwh(value, from), to)
}
