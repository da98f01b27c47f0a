use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::conversion;
use crate::form::{CalculatorForm, FormError, FormField};
use crate::heating::{self, Season};
use crate::i18n::{keys, Translator};
use crate::report;
use crate::units::{convert_volume, from_celsius, VolumeUnit};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Calculate,
    Summer,
    Winter,
    Compare,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    for key in [
        keys::MAIN_MENU_TITLE,
        keys::MAIN_MENU_CALCULATE,
        keys::MAIN_MENU_SUMMER,
        keys::MAIN_MENU_WINTER,
        keys::MAIN_MENU_COMPARE,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Calculate),
            "2" => return Ok(MenuChoice::Summer),
            "3" => return Ok(MenuChoice::Winter),
            "4" => return Ok(MenuChoice::Compare),
            "5" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 계산 메뉴를 처리한다. `season`이 있으면 급수 온도는 묻지 않는다.
pub fn handle_calculation(
    tr: &Translator,
    cfg: &Config,
    season: Option<Season>,
) -> Result<(), AppError> {
    let form = read_form(tr, cfg, season)?;
    match form.submit(&cfg.defaults) {
        Ok(input) => {
            let result = heating::compute(input);
            print_lines(&report::render_result(tr, &result, cfg.default_units.energy));
        }
        Err(e) => print_form_error(tr, &e),
    }
    Ok(())
}

/// 같은 입력으로 여름/겨울 비용을 비교한다.
pub fn handle_comparison(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    // 급수 온도는 계절 값으로 덮어쓰므로 묻지 않는다
    let form = read_form(tr, cfg, Some(Season::Summer))?;
    match form.submit_comparison(&cfg.defaults) {
        Ok(input) => {
            let comparison = heating::compare_seasons(input);
            print_lines(&report::render_comparison(
                tr,
                &comparison,
                cfg.default_units.energy,
            ));
        }
        Err(e) => print_form_error(tr, &e),
    }
    Ok(())
}

fn read_form(
    tr: &Translator,
    cfg: &Config,
    season: Option<Season>,
) -> Result<CalculatorForm, AppError> {
    println!("{}", tr.t(keys::CALC_HEADING));
    println!("{}", tr.t(keys::CALC_HINT_BLANK));
    let mut form = CalculatorForm::new(&cfg.default_units);
    form.season = season;
    for field in FormField::ALL {
        if field == FormField::InitialTemp && season.is_some() {
            continue;
        }
        let prompt = format!(
            "{} [{}]: ",
            tr.t(field.key()),
            default_hint(tr, cfg, field)
        );
        *form.field_mut(field) = read_line(&prompt)?.trim().to_string();
    }
    form.night_rate = read_yes_no(tr.t(keys::PROMPT_NIGHT_RATE))?;
    Ok(form)
}

/// 빈 칸일 때 쓰일 기본값을 입력 단위로 표시한다.
fn default_hint(tr: &Translator, cfg: &Config, field: FormField) -> String {
    let d = &cfg.defaults;
    let units = &cfg.default_units;
    match field {
        FormField::WaterVolume => format!(
            "{} {}",
            convert_volume(d.water_volume_liters, VolumeUnit::Liter, units.volume),
            units.volume.symbol()
        ),
        FormField::InitialTemp => format!(
            "{} {}",
            from_celsius(d.initial_temp_c, units.temperature),
            units.temperature.symbol()
        ),
        FormField::TargetTemp => format!(
            "{} {}",
            from_celsius(d.target_temp_c, units.temperature),
            units.temperature.symbol()
        ),
        FormField::Efficiency => format!("{} %", d.efficiency_percent),
        FormField::CostPerKwh => {
            format!("{} {}", d.cost_per_kwh_minor, tr.t(keys::CURRENCY_MINOR))
        }
        FormField::HotWaterPrice => format!(
            "{} {}",
            d.hot_water_price_per_m3_minor,
            tr.t(keys::CURRENCY_MINOR)
        ),
        FormField::ColdWaterPrice => format!(
            "{} {}",
            d.cold_water_price_per_m3_minor,
            tr.t(keys::CURRENCY_MINOR)
        ),
        FormField::SubscriptionFee => format!(
            "{} {}",
            d.subscription_fee_major,
            tr.t(keys::CURRENCY_MAJOR)
        ),
    }
}

/// 설정 메뉴를 처리한다. 변경이 있으면 true를 반환한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<bool, AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} lang={} energy={}",
        tr.t(keys::SETTINGS_CURRENT),
        cfg.language,
        cfg.default_units.energy.symbol()
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
    match sel.trim() {
        "1" => {
            let lang = read_line(tr.t(keys::SETTINGS_PROMPT_LANGUAGE))?;
            let lang = lang.trim().to_lowercase();
            if ["auto", "en", "uk", "ko"].contains(&lang.as_str()) {
                cfg.language = lang;
                return Ok(true);
            }
        }
        "2" => {
            let unit = read_line(tr.t(keys::SETTINGS_PROMPT_ENERGY_UNIT))?;
            if let Ok(unit) = conversion::parse_energy_unit(&unit) {
                cfg.default_units.energy = unit;
                return Ok(true);
            }
        }
        "" => return Ok(false),
        _ => {}
    }
    println!("{}", tr.t(keys::SETTINGS_INVALID));
    Ok(false)
}

fn print_form_error(tr: &Translator, err: &FormError) {
    match err {
        FormError::InvalidNumber { field, value } => println!(
            "{}: {} ({}: {value})",
            tr.t(keys::ERROR_PREFIX),
            tr.t(keys::ERROR_INVALID_NUMBER),
            tr.t(field)
        ),
        other => println!("{}: {other}", tr.t(keys::ERROR_PREFIX)),
    }
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
    }
    Ok(buf)
}

fn read_yes_no(prompt: &str) -> Result<bool, AppError> {
    let answer = read_line(prompt)?;
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes" | "т" | "так" | "예"
    ))
}
