//! 단위 정의 및 변환 모듈 모음.

pub mod currency;
pub mod energy;
pub mod temperature;
pub mod volume;

pub use currency::{convert_currency, CurrencyUnit};
pub use energy::{convert_energy, EnergyUnit};
pub use temperature::{convert_temperature, from_celsius, to_celsius, TemperatureUnit};
pub use volume::{convert_volume, VolumeUnit};
