use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::units::*;

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 입력/표시에 쓰는 기본 단위 설정을 담는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultUnits {
    pub temperature: TemperatureUnit,
    pub volume: VolumeUnit,
    pub energy: EnergyUnit,
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self {
            temperature: TemperatureUnit::Celsius,
            volume: VolumeUnit::Liter,
            energy: EnergyUnit::KilowattHour,
        }
    }
}

/// 폼의 빈 칸에 채워 넣는 기본값. 지역 요금표에 맞게 바꿔 쓴다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormDefaults {
    /// 물의 양 [L]
    pub water_volume_liters: f64,
    /// 급수 온도 [°C]
    pub initial_temp_c: f64,
    /// 목표 온도 [°C]
    pub target_temp_c: f64,
    /// 보일러 효율 [%]
    pub efficiency_percent: f64,
    /// 전력 단가 [보조단위/kWh]
    pub cost_per_kwh_minor: f64,
    /// 지역난방 온수 단가 [보조단위/m³]
    pub hot_water_price_per_m3_minor: f64,
    /// 냉수 단가 [보조단위/m³]
    pub cold_water_price_per_m3_minor: f64,
    /// 월 기본요금 [주단위]
    pub subscription_fee_major: f64,
    /// 심야 요금 선택 시 적용할 계수
    pub night_rate_factor: f64,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            water_volume_liters: 3000.0,
            initial_temp_c: 15.0,
            target_temp_c: 60.0,
            efficiency_percent: 90.0,
            cost_per_kwh_minor: 432.0,
            hot_water_price_per_m3_minor: 9789.0,
            cold_water_price_per_m3_minor: 1345.0,
            subscription_fee_major: 42.94,
            night_rate_factor: 0.5,
        }
    }
}

/// 애플리케이션 설정을 표현한다. 사용자가 입력한 폼 값은 저장하지 않는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// auto | en | uk | ko
    pub language: String,
    pub language_pack_dir: Option<String>,
    pub default_units: DefaultUnits,
    pub defaults: FormDefaults,
    /// GUI 창 투명도 (0.3~1.0)
    pub window_alpha: f32,
    pub custom_font_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            language_pack_dir: None,
            default_units: DefaultUnits::default(),
            defaults: FormDefaults::default(),
            window_alpha: 1.0,
            custom_font_path: None,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일과 그 경로를 함께 들고 다닌다.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub path: PathBuf,
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let config = if path.exists() {
        let content = fs::read_to_string(&path)?;
        let cfg: Config = toml::from_str(&content)?;
        debug!(path = %path.display(), "loaded config");
        cfg
    } else {
        let cfg = Config::default();
        save_config(&cfg, &path)?;
        info!(path = %path.display(), "created default config");
        cfg
    };
    Ok(LoadedConfig { config, path })
}

fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

impl LoadedConfig {
    /// 설정을 원래 경로에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_config(&self.config, &self.path)?;
        debug!(path = %self.path.display(), "saved config");
        Ok(())
    }
}
