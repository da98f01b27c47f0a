#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use boiler_cost_calculator::{
    config::{self, LoadedConfig},
    form::{CalculatorForm, FormField},
    heating::{self, CalculationResult, Season},
    i18n::{self, keys, Translator},
    report,
    units::{convert_volume, from_celsius, EnergyUnit, TemperatureUnit, VolumeUnit},
};
use clap::Parser;
use eframe::{egui, App, Frame};
use image::GenericImageView;
use std::{fs, path::Path, path::PathBuf};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Debug, Parser)]
#[command(version, about = "Boiler vs. network hot water cost calculator (GUI)")]
struct GuiArgs {
    /// 언어 (auto/en/uk/ko)
    #[arg(long, short = 'L', default_value = "auto")]
    lang: String,
    /// 설정 파일 경로
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<(), eframe::Error> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("tracing init failed: {e}");
    }
    let args = GuiArgs::parse();

    let mut app_cfg = match config::load_or_default(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!(error = %e, "config load failed, using defaults");
            LoadedConfig {
                config: config::Config::default(),
                path: args
                    .config
                    .clone()
                    .unwrap_or_else(|| PathBuf::from(config::DEFAULT_CONFIG_PATH)),
            }
        }
    };
    if args.lang != "auto" {
        app_cfg.config.language = args.lang.clone();
    }

    let mut viewport = egui::ViewportBuilder::default().with_inner_size([620.0, 680.0]);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        "Boiler Cost Calculator",
        options,
        Box::new(move |cc| {
            if let Some(path) = app_cfg.config.custom_font_path.as_deref() {
                if let Err(e) = load_custom_font(&cc.egui_ctx, path) {
                    warn!(error = %e, "custom font not loaded");
                }
            }
            Box::new(GuiApp::new(app_cfg))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 바이너리 폰트 바이트를 egui에 등록.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .insert(0, font_name);
    ctx.set_fonts(fonts);
}

/// 사용자가 지정한 경로의 폰트를 egui에 등록한다. 한글 표시 등에 쓴다.
fn load_custom_font(ctx: &egui::Context, path: &str) -> Result<(), String> {
    let p = Path::new(path);
    if !p.exists() {
        return Err(format!("Font file not found: {path}"));
    }
    let bytes = fs::read(p).map_err(|e| format!("Failed to read font file: {e}"))?;
    apply_font_bytes(ctx, bytes, "user_font");
    Ok(())
}

fn label_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.label(text).on_hover_text(tip)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum SeasonChoice {
    Custom,
    Summer,
    Winter,
}

impl SeasonChoice {
    fn season(self) -> Option<Season> {
        match self {
            SeasonChoice::Custom => None,
            SeasonChoice::Summer => Some(Season::Summer),
            SeasonChoice::Winter => Some(Season::Winter),
        }
    }
}

struct GuiApp {
    config: LoadedConfig,
    tr: Translator,
    form: CalculatorForm,
    season: SeasonChoice,
    result: Option<CalculationResult>,
    error: Option<String>,
    // 설정
    show_settings_modal: bool,
    lang_input: String,
    font_input: String,
    settings_status: Option<String>,
}

impl GuiApp {
    fn new(config: LoadedConfig) -> Self {
        let tr = make_translator(&config.config);
        info!(lang = tr.language_code(), "GUI language resolved");
        Self {
            form: CalculatorForm::new(&config.config.default_units),
            lang_input: config.config.language.clone(),
            font_input: config.config.custom_font_path.clone().unwrap_or_default(),
            config,
            tr,
            season: SeasonChoice::Custom,
            result: None,
            error: None,
            show_settings_modal: false,
            settings_status: None,
        }
    }

    /// 빈 칸일 때 쓰일 기본값을 입력 단위로 보여준다.
    fn default_hint(&self, field: FormField) -> String {
        let d = &self.config.config.defaults;
        let value = match field {
            FormField::WaterVolume => {
                convert_volume(d.water_volume_liters, VolumeUnit::Liter, self.form.volume_unit)
            }
            FormField::InitialTemp => from_celsius(d.initial_temp_c, self.form.temperature_unit),
            FormField::TargetTemp => from_celsius(d.target_temp_c, self.form.temperature_unit),
            FormField::Efficiency => d.efficiency_percent,
            FormField::CostPerKwh => d.cost_per_kwh_minor,
            FormField::HotWaterPrice => d.hot_water_price_per_m3_minor,
            FormField::ColdWaterPrice => d.cold_water_price_per_m3_minor,
            FormField::SubscriptionFee => d.subscription_fee_major,
        };
        format!("{value}")
    }

    fn calculate(&mut self) {
        self.form.season = self.season.season();
        match self.form.submit(&self.config.config.defaults) {
            Ok(input) => {
                self.result = Some(heating::compute(input));
                self.error = None;
            }
            Err(e) => {
                self.result = None;
                self.error = Some(format!("{}: {e}", self.tr.t(keys::ERROR_PREFIX)));
            }
        }
    }

    fn ui_form(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());

        ui.heading(txt("gui.calc.heading", "Boiler vs. network hot water"))
            .on_hover_text(txt(
                "gui.calc.tip",
                "Compares heating water with an electric boiler against buying network hot water.",
            ));
        ui.small(txt("gui.calc.blank_hint", "Blank fields use the default values."));
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            ui.label(txt("gui.calc.season", "Season"));
            ui.radio_value(
                &mut self.season,
                SeasonChoice::Custom,
                txt("gui.calc.season_custom", "Custom inlet temperature"),
            );
            ui.radio_value(&mut self.season, SeasonChoice::Summer, tr.t(keys::SEASON_SUMMER));
            ui.radio_value(&mut self.season, SeasonChoice::Winter, tr.t(keys::SEASON_WINTER));
        });
        ui.add_space(4.0);

        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("calc_grid")
                .num_columns(3)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    for field in FormField::ALL {
                        if field == FormField::InitialTemp && self.season != SeasonChoice::Custom {
                            continue;
                        }
                        let hint = self.default_hint(field);
                        label_with_tip(ui, tr.t(field.key()), &hint);
                        ui.add(
                            egui::TextEdit::singleline(self.form.field_mut(field))
                                .hint_text(hint)
                                .desired_width(140.0),
                        );
                        self.ui_unit_cell(ui, field);
                        ui.end_row();
                    }
                });
            ui.checkbox(
                &mut self.form.night_rate,
                txt("gui.calc.night_rate", "Enable night rate"),
            );
        });

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.button(txt("gui.calc.run", "Calculate")).clicked() {
                self.calculate();
            }
            if ui.button(txt("gui.calc.reset", "Clear")).clicked() {
                self.form = CalculatorForm::new(&self.config.config.default_units);
                self.result = None;
                self.error = None;
            }
        });
    }

    fn ui_unit_cell(&mut self, ui: &mut egui::Ui, field: FormField) {
        match field {
            FormField::WaterVolume => {
                egui::ComboBox::from_id_source("volume_unit")
                    .selected_text(self.form.volume_unit.symbol())
                    .show_ui(ui, |ui| {
                        for unit in
                            [VolumeUnit::Liter, VolumeUnit::CubicMeter, VolumeUnit::UsGallon]
                        {
                            ui.selectable_value(&mut self.form.volume_unit, unit, unit.symbol());
                        }
                    });
            }
            FormField::TargetTemp => {
                egui::ComboBox::from_id_source("temperature_unit")
                    .selected_text(self.form.temperature_unit.symbol())
                    .show_ui(ui, |ui| {
                        for unit in [
                            TemperatureUnit::Celsius,
                            TemperatureUnit::Kelvin,
                            TemperatureUnit::Fahrenheit,
                        ] {
                            ui.selectable_value(
                                &mut self.form.temperature_unit,
                                unit,
                                unit.symbol(),
                            );
                        }
                    });
            }
            FormField::InitialTemp => {
                ui.label(self.form.temperature_unit.symbol());
            }
            FormField::Efficiency => {
                ui.label("%");
            }
            FormField::SubscriptionFee => {
                ui.label(self.tr.t(keys::CURRENCY_MAJOR));
            }
            _ => {
                ui.label(self.tr.t(keys::CURRENCY_MINOR));
            }
        }
    }

    fn ui_result(&self, ui: &mut egui::Ui) {
        if let Some(err) = &self.error {
            ui.colored_label(ui.visuals().error_fg_color, err);
        }
        if let Some(result) = &self.result {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                let energy_unit = self.config.config.default_units.energy;
                for line in report::render_result(&self.tr, result, energy_unit) {
                    ui.label(line);
                }
            });
        }
    }

    fn ui_settings(&mut self, ctx: &egui::Context) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        let mut open = self.show_settings_modal;
        let mut apply = false;
        egui::Window::new(txt("gui.settings.title", "Settings"))
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .show(ctx, |ui| {
                egui::Grid::new("settings_grid").num_columns(2).show(ui, |ui| {
                    ui.label(txt("gui.settings.language", "Language (auto/en/uk/ko)"));
                    ui.text_edit_singleline(&mut self.lang_input);
                    ui.end_row();
                    ui.label(txt("gui.settings.font", "Font path (.ttf)"));
                    ui.text_edit_singleline(&mut self.font_input);
                    ui.end_row();
                    ui.label(txt("gui.settings.alpha", "Window opacity"));
                    ui.add(egui::Slider::new(
                        &mut self.config.config.window_alpha,
                        0.3..=1.0,
                    ));
                    ui.end_row();
                    ui.label(txt("gui.settings.energy_unit", "Energy unit"));
                    let energy = &mut self.config.config.default_units.energy;
                    egui::ComboBox::from_id_source("energy_unit")
                        .selected_text(energy.symbol())
                        .show_ui(ui, |ui| {
                            for unit in [
                                EnergyUnit::KilowattHour,
                                EnergyUnit::Kilojoule,
                                EnergyUnit::Megajoule,
                                EnergyUnit::KiloCalorie,
                            ] {
                                ui.selectable_value(energy, unit, unit.symbol());
                            }
                        });
                    ui.end_row();
                });
                if ui.button(txt("gui.settings.apply", "Apply and save")).clicked() {
                    apply = true;
                }
                if let Some(status) = &self.settings_status {
                    ui.small(status);
                }
            });
        self.show_settings_modal = open;
        if apply {
            self.apply_settings(ctx);
        }
    }

    fn apply_settings(&mut self, ctx: &egui::Context) {
        let cfg = &mut self.config.config;
        cfg.language = self.lang_input.trim().to_lowercase();
        let font = self.font_input.trim();
        cfg.custom_font_path = (!font.is_empty()).then(|| font.to_string());
        if let Some(path) = cfg.custom_font_path.as_deref() {
            if let Err(e) = load_custom_font(ctx, path) {
                warn!(error = %e, "custom font not loaded");
            }
        }
        self.tr = make_translator(cfg);
        self.settings_status = Some(match self.config.save() {
            Ok(()) => self.tr.t(keys::SETTINGS_SAVED).to_string(),
            Err(e) => format!("{}: {e}", self.tr.t(keys::ERROR_PREFIX)),
        });
    }
}

fn make_translator(cfg: &config::Config) -> Translator {
    let lang = i18n::resolve_language("auto", Some(cfg.language.as_str()));
    Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref())
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let alpha = self.config.config.window_alpha.clamp(0.3, 1.0);
        // 매 프레임 기본 팔레트에서 다시 계산해야 투명도가 누적되지 않는다
        let mut visuals = if ctx.style().visuals.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        visuals.window_fill = visuals.window_fill.linear_multiply(alpha);
        visuals.panel_fill = visuals.panel_fill.linear_multiply(alpha);
        ctx.set_visuals(visuals);

        let title = self
            .tr
            .lookup("gui.nav.app_title")
            .unwrap_or_else(|| "Water Heating Cost Calculator".to_string());
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(title);
                ui.separator();
                let settings = self
                    .tr
                    .lookup("gui.settings.title")
                    .unwrap_or_else(|| "Settings".to_string());
                if ui.button(settings).clicked() {
                    self.show_settings_modal = true;
                }
            });
        });

        if self.show_settings_modal {
            self.ui_settings(ctx);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.ui_form(ui);
                ui.add_space(12.0);
                self.ui_result(ui);
            });
        });
    }
}
