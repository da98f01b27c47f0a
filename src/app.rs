use thiserror::Error;
use tracing::info;

use crate::config::LoadedConfig;
use crate::conversion;
use crate::form::FormError;
use crate::heating::Season;
use crate::i18n::{self, Translator};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 오류: {0}")]
    Config(#[from] crate::config::ConfigError),
    #[error("단위 변환 오류: {0}")]
    Conversion(#[from] conversion::ConversionError),
    #[error("입력 오류: {0}")]
    Form(#[from] FormError),
    #[error("결과 직렬화 오류: {0}")]
    Report(#[from] toml::ser::Error),
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut LoadedConfig, tr: &mut Translator) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::Calculate => ui_cli::handle_calculation(tr, &config.config, None)?,
            MenuChoice::Summer => {
                ui_cli::handle_calculation(tr, &config.config, Some(Season::Summer))?
            }
            MenuChoice::Winter => {
                ui_cli::handle_calculation(tr, &config.config, Some(Season::Winter))?
            }
            MenuChoice::Compare => ui_cli::handle_comparison(tr, &config.config)?,
            MenuChoice::Settings => {
                if ui_cli::handle_settings(tr, &mut config.config)? {
                    config.save()?;
                    let lang = i18n::resolve_language("auto", Some(config.config.language.as_str()));
                    *tr = Translator::new_with_pack(
                        &lang,
                        config.config.language_pack_dir.as_deref(),
                    );
                    println!("{}", tr.t(i18n::keys::SETTINGS_SAVED));
                }
            }
            MenuChoice::Exit => {
                info!("exiting interactive session");
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
