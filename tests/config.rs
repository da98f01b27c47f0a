use std::fs;
use std::path::PathBuf;

use boiler_cost_calculator::config::{self, Config};
use boiler_cost_calculator::units::EnergyUnit;

fn temp_config_path(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "boiler_cost_calculator_{}_{name}",
        std::process::id()
    ));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.toml");
    let _ = fs::remove_file(&path);
    path
}

#[test]
fn missing_file_is_created_with_defaults() {
    let path = temp_config_path("create");
    let loaded = config::load_or_default(Some(&path)).unwrap();

    assert_eq!(loaded.config, Config::default());
    assert!(path.exists());
    let reread: Config = toml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(reread, Config::default());
}

#[test]
fn partial_file_fills_missing_keys() {
    let path = temp_config_path("partial");
    fs::write(
        &path,
        "language = \"uk\"\n\n[defaults]\ncost_per_kwh_minor = 264.0\n",
    )
    .unwrap();
    let loaded = config::load_or_default(Some(&path)).unwrap();

    assert_eq!(loaded.config.language, "uk");
    assert_eq!(loaded.config.defaults.cost_per_kwh_minor, 264.0);
    assert_eq!(loaded.config.defaults.water_volume_liters, 3000.0);
    assert_eq!(loaded.config.window_alpha, 1.0);
}

#[test]
fn saved_settings_survive_reload() {
    let path = temp_config_path("save");
    let mut loaded = config::load_or_default(Some(&path)).unwrap();
    loaded.config.default_units.energy = EnergyUnit::Megajoule;
    loaded.config.language = "ko".into();
    loaded.save().unwrap();

    let again = config::load_or_default(Some(&path)).unwrap();
    assert_eq!(again.config.default_units.energy, EnergyUnit::Megajoule);
    assert_eq!(again.config.language, "ko");
}

#[test]
fn malformed_file_is_a_parse_error() {
    let path = temp_config_path("broken");
    fs::write(&path, "language = [").unwrap();
    assert!(matches!(
        config::load_or_default(Some(&path)),
        Err(config::ConfigError::Parse(_))
    ));
}
