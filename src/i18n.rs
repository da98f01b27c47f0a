use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;
use tracing::debug;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_CALCULATE: &str = "main_menu.calculate";
    pub const MAIN_MENU_SUMMER: &str = "main_menu.summer";
    pub const MAIN_MENU_WINTER: &str = "main_menu.winter";
    pub const MAIN_MENU_COMPARE: &str = "main_menu.compare";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const CALC_HEADING: &str = "calc.heading";
    pub const CALC_HINT_BLANK: &str = "calc.hint_blank";
    pub const PROMPT_NIGHT_RATE: &str = "prompt.night_rate";

    pub const FIELD_WATER_VOLUME: &str = "field.water_volume";
    pub const FIELD_INITIAL_TEMP: &str = "field.initial_temp";
    pub const FIELD_TARGET_TEMP: &str = "field.target_temp";
    pub const FIELD_EFFICIENCY: &str = "field.efficiency";
    pub const FIELD_COST_PER_KWH: &str = "field.cost_per_kwh";
    pub const FIELD_HOT_WATER_PRICE: &str = "field.hot_water_price";
    pub const FIELD_COLD_WATER_PRICE: &str = "field.cold_water_price";
    pub const FIELD_SUBSCRIPTION_FEE: &str = "field.subscription_fee";

    pub const RESULT_HEADING: &str = "result.heading";
    pub const RESULT_ENERGY: &str = "result.energy";
    pub const RESULT_TOTAL_COST: &str = "result.total_cost";
    pub const RESULT_NETWORK_COST: &str = "result.network_cost";
    pub const RESULT_ELECTRICITY: &str = "result.electricity";
    pub const RESULT_COLD_WATER: &str = "result.cold_water";
    pub const RESULT_SUBSCRIPTION: &str = "result.subscription";
    pub const RESULT_CHEAPER_BOILER: &str = "result.cheaper_boiler";
    pub const RESULT_CHEAPER_NETWORK: &str = "result.cheaper_network";
    pub const RESULT_SAVINGS: &str = "result.savings";

    pub const SEASON_SUMMER: &str = "season.summer";
    pub const SEASON_WINTER: &str = "season.winter";

    pub const CURRENCY_MAJOR: &str = "currency.major";
    pub const CURRENCY_MINOR: &str = "currency.minor";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT: &str = "settings.current";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_LANGUAGE: &str = "settings.prompt_language";
    pub const SETTINGS_PROMPT_ENERGY_UNIT: &str = "settings.prompt_energy_unit";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
    Uk,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("uk") {
            Language::Uk
        } else if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
            Language::Uk => "uk",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(en/uk/ko)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self::new_with_pack(lang_code, None)
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 언어팩과 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        debug!(
            lang = lang_code,
            overrides = overrides.as_ref().map_or(0, HashMap::len),
            "translator ready"
        );
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 언어팩 → 내장 문자열 → 영어 순으로 찾는다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v.as_str();
        }
        match self.lang {
            Language::Ko => ko(key).unwrap_or_else(|| en(key)),
            Language::En | Language::Uk => en(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        "ua" => Some("uk-ua".into()),
        other if other.starts_with("uk") => Some("uk-ua".into()),
        other if other.starts_with("ko") => Some("ko-kr".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "uk" => Some("uk-ua".into()),
        "ko" => Some("ko-kr".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    ["LANG", "LC_ALL"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 (중첩 가능한) 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    let (base, _) = lang.split_once(['-', '_'])?;
    try_load(base)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "uk-ua" | "uk" => parse_toml_to_map(include_str!("../locales/uk-ua.toml")),
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== 온수 가열 비용 계산기 ===",
        MAIN_MENU_CALCULATE => "1) 비용 계산",
        MAIN_MENU_SUMMER => "2) 여름 프리셋 (급수 15°C)",
        MAIN_MENU_WINTER => "3) 겨울 프리셋 (급수 5°C)",
        MAIN_MENU_COMPARE => "4) 여름/겨울 비교",
        MAIN_MENU_SETTINGS => "5) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        CALC_HEADING => "\n-- 비용 계산 --",
        CALC_HINT_BLANK => "빈 칸으로 엔터를 누르면 [기본값]을 사용합니다.",
        PROMPT_NIGHT_RATE => "심야 요금 적용? (y/N): ",
        FIELD_WATER_VOLUME => "물의 양",
        FIELD_INITIAL_TEMP => "급수 온도",
        FIELD_TARGET_TEMP => "목표 온도",
        FIELD_EFFICIENCY => "보일러 효율 (%)",
        FIELD_COST_PER_KWH => "전력 단가 (보조단위/kWh)",
        FIELD_HOT_WATER_PRICE => "지역난방 온수 단가 (보조단위/m³)",
        FIELD_COLD_WATER_PRICE => "냉수 단가 (보조단위/m³)",
        FIELD_SUBSCRIPTION_FEE => "월 기본요금 (주단위)",
        RESULT_HEADING => "결과:",
        RESULT_ENERGY => "소비 전력량:",
        RESULT_TOTAL_COST => "보일러 총비용:",
        RESULT_NETWORK_COST => "지역난방 온수 비용:",
        RESULT_ELECTRICITY => "  전기 요금:",
        RESULT_COLD_WATER => "  냉수 요금:",
        RESULT_SUBSCRIPTION => "  기본요금:",
        RESULT_CHEAPER_BOILER => "보일러 가열이 더 저렴합니다.",
        RESULT_CHEAPER_NETWORK => "지역난방 온수가 더 저렴하거나 같습니다.",
        RESULT_SAVINGS => "차액:",
        SEASON_SUMMER => "여름",
        SEASON_WINTER => "겨울",
        CURRENCY_MAJOR => "UAH",
        CURRENCY_MINOR => "kop",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT => "현재 설정:",
        SETTINGS_OPTIONS => "1) 언어  2) 에너지 표시 단위",
        SETTINGS_PROMPT_LANGUAGE => "언어 코드 (auto/en/uk/ko): ",
        SETTINGS_PROMPT_ENERGY_UNIT => "에너지 단위 (kWh/kJ/MJ/kcal): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정이 저장되었습니다.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        _ => return None,
    })
}

fn en(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Water Heating Cost Calculator ===",
        MAIN_MENU_CALCULATE => "1) Calculate cost",
        MAIN_MENU_SUMMER => "2) Summer preset (inlet 15°C)",
        MAIN_MENU_WINTER => "3) Winter preset (inlet 5°C)",
        MAIN_MENU_COMPARE => "4) Summer vs winter",
        MAIN_MENU_SETTINGS => "5) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        CALC_HEADING => "\n-- Cost Calculation --",
        CALC_HINT_BLANK => "Press enter on an empty line to use the [default].",
        PROMPT_NIGHT_RATE => "Apply night rate? (y/N): ",
        FIELD_WATER_VOLUME => "Water volume",
        FIELD_INITIAL_TEMP => "Initial temperature",
        FIELD_TARGET_TEMP => "Target temperature",
        FIELD_EFFICIENCY => "Boiler efficiency (%)",
        FIELD_COST_PER_KWH => "Electricity price (minor units/kWh)",
        FIELD_HOT_WATER_PRICE => "Network hot water price (minor units/m³)",
        FIELD_COLD_WATER_PRICE => "Cold water price (minor units/m³)",
        FIELD_SUBSCRIPTION_FEE => "Monthly subscription fee (major units)",
        RESULT_HEADING => "Result:",
        RESULT_ENERGY => "Energy consumption:",
        RESULT_TOTAL_COST => "Boiler total cost:",
        RESULT_NETWORK_COST => "Network hot water cost:",
        RESULT_ELECTRICITY => "  Electricity:",
        RESULT_COLD_WATER => "  Cold water:",
        RESULT_SUBSCRIPTION => "  Subscription:",
        RESULT_CHEAPER_BOILER => "Heating with the boiler is cheaper.",
        RESULT_CHEAPER_NETWORK => "Network hot water is cheaper or equal.",
        RESULT_SAVINGS => "Difference:",
        SEASON_SUMMER => "Summer",
        SEASON_WINTER => "Winter",
        CURRENCY_MAJOR => "UAH",
        CURRENCY_MINOR => "kop",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT => "Current settings:",
        SETTINGS_OPTIONS => "1) Language  2) Energy display unit",
        SETTINGS_PROMPT_LANGUAGE => "Language code (auto/en/uk/ko): ",
        SETTINGS_PROMPT_ENERGY_UNIT => "Energy unit (kWh/kJ/MJ/kcal): ",
        SETTINGS_INVALID => "Invalid input; settings unchanged.",
        SETTINGS_SAVED => "Settings saved.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        _ => "[missing translation]",
    }
}
