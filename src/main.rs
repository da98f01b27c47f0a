use std::path::PathBuf;
use std::process::ExitCode;

use boiler_cost_calculator::{
    app::{self, AppError},
    config, conversion,
    form::CalculatorForm,
    heating::{self, Season},
    i18n::{self, Translator},
    report,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{error, Level};

/// 전기 보일러와 지역난방 온수의 비용을 비교한다.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// 언어 (auto/en/uk/ko)
    #[arg(long, short = 'L', default_value = "auto", global = true)]
    lang: String,

    /// 설정 파일 경로 (기본: ./config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// 디버그 로그 출력
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 대화형 메뉴 없이 한 번 계산한다. 생략한 값은 설정의 기본값을 쓴다.
    Calc(CalcArgs),
}

#[derive(Debug, Args)]
struct CalcArgs {
    /// 물의 양
    #[arg(long)]
    volume: Option<String>,
    /// 물의 양 단위 (L/m3/gal)
    #[arg(long)]
    volume_unit: Option<String>,
    /// 급수 온도 (--season 지정 시 무시)
    #[arg(long)]
    initial_temp: Option<String>,
    /// 목표 온도
    #[arg(long)]
    target_temp: Option<String>,
    /// 온도 단위 (C/K/F)
    #[arg(long)]
    temp_unit: Option<String>,
    /// 보일러 효율 [%]
    #[arg(long)]
    efficiency: Option<String>,
    /// 전력 단가 [보조단위/kWh]
    #[arg(long)]
    cost_per_kwh: Option<String>,
    /// 지역난방 온수 단가 [보조단위/m³]
    #[arg(long)]
    hot_water_price: Option<String>,
    /// 냉수 단가 [보조단위/m³]
    #[arg(long)]
    cold_water_price: Option<String>,
    /// 월 기본요금 [주단위]
    #[arg(long)]
    subscription_fee: Option<String>,
    /// 심야 요금 적용
    #[arg(long)]
    night_rate: bool,
    /// 계절 프리셋
    #[arg(long, value_enum)]
    season: Option<SeasonArg>,
    /// 출력 형식
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SeasonArg {
    Summer,
    Winter,
    /// 여름과 겨울을 함께 계산
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Toml,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .without_time()
        .compact()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    match try_run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "run failed");
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: Cli) -> Result<(), AppError> {
    let mut cfg = config::load_or_default(cli.config.as_deref())?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.config.language.as_str()));
    let mut tr = Translator::new_with_pack(&lang, cfg.config.language_pack_dir.as_deref());

    match cli.command {
        None => app::run(&mut cfg, &mut tr),
        Some(Command::Calc(args)) => run_calc(&cfg.config, &tr, args),
    }
}

fn run_calc(cfg: &config::Config, tr: &Translator, args: CalcArgs) -> Result<(), AppError> {
    let mut form = CalculatorForm::new(&cfg.default_units);
    if let Some(unit) = &args.volume_unit {
        form.volume_unit = conversion::parse_volume_unit(unit)?;
    }
    if let Some(unit) = &args.temp_unit {
        form.temperature_unit = conversion::parse_temperature_unit(unit)?;
    }
    form.water_volume = args.volume.unwrap_or_default();
    form.initial_temp = args.initial_temp.unwrap_or_default();
    form.target_temp = args.target_temp.unwrap_or_default();
    form.efficiency = args.efficiency.unwrap_or_default();
    form.cost_per_kwh = args.cost_per_kwh.unwrap_or_default();
    form.hot_water_price = args.hot_water_price.unwrap_or_default();
    form.cold_water_price = args.cold_water_price.unwrap_or_default();
    form.subscription_fee = args.subscription_fee.unwrap_or_default();
    form.night_rate = args.night_rate;
    form.season = match args.season {
        Some(SeasonArg::Summer) | Some(SeasonArg::Both) => Some(Season::Summer),
        Some(SeasonArg::Winter) => Some(Season::Winter),
        None => None,
    };

    let energy_unit = cfg.default_units.energy;
    if matches!(args.season, Some(SeasonArg::Both)) {
        let input = form.submit_comparison(&cfg.defaults)?;
        let comparison = heating::compare_seasons(input);
        match args.format {
            OutputFormat::Text => {
                for line in report::render_comparison(tr, &comparison, energy_unit) {
                    println!("{line}");
                }
            }
            OutputFormat::Toml => print!("{}", toml::to_string_pretty(&comparison)?),
        }
        return Ok(());
    }

    let input = form.submit(&cfg.defaults)?;
    let result = heating::compute(input);
    match args.format {
        OutputFormat::Text => {
            for line in report::render_result(tr, &result, energy_unit) {
                println!("{line}");
            }
        }
        OutputFormat::Toml => print!("{}", report::to_toml(&input, &result)?),
    }
    Ok(())
}
