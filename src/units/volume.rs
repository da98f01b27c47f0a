use serde::{Deserialize, Serialize};

/// 1 m³에 들어가는 리터 수.
pub const LITERS_PER_CUBIC_METER: f64 = 1000.0;

/// 체적 단위. 내부 기준은 리터이다 (물 1 L = 1 kg).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeUnit {
    Liter,
    CubicMeter,
    UsGallon,
}

impl VolumeUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            VolumeUnit::Liter => "L",
            VolumeUnit::CubicMeter => "m³",
            VolumeUnit::UsGallon => "gal",
        }
    }
}

fn to_liter(value: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::Liter => value,
        VolumeUnit::CubicMeter => value * LITERS_PER_CUBIC_METER,
        VolumeUnit::UsGallon => value * 3.785_411_784,
    }
}

fn from_liter(value: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::Liter => value,
        VolumeUnit::CubicMeter => value / LITERS_PER_CUBIC_METER,
        VolumeUnit::UsGallon => value / 3.785_411_784,
    }
}

/// 체적을 변환한다.
pub fn convert_volume(value: f64, from: VolumeUnit, to: VolumeUnit) -> f64 {
    from_liter(to_liter(value, from), to)
}
