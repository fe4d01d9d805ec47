use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::i18n::{self, Translator};
use crate::model::InputParameters;
use crate::report;
use crate::session::Session;
use crate::store::{KeyValueStore, StoreError};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 계수 저장소 오류
    Store(StoreError),
    /// 시나리오 파일 파싱 오류
    Scenario(toml::de::Error),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "I/O error: {e}"),
            AppError::Config(e) => write!(f, "config error: {e}"),
            AppError::Store(e) => write!(f, "{e}"),
            AppError::Scenario(e) => write!(f, "scenario parse error: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<StoreError> for AppError {
    fn from(value: StoreError) -> Self {
        AppError::Store(value)
    }
}

impl From<toml::de::Error> for AppError {
    fn from(value: toml::de::Error) -> Self {
        AppError::Scenario(value)
    }
}

/// TOML 시나리오 파일에서 입력값을 읽는다. 빠진 필드는 기본값.
pub fn load_scenario(path: &Path) -> Result<InputParameters, AppError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// 현재 세션의 보고서를 파일로 쓴다.
pub fn export_report(
    path: &Path,
    tr: &Translator,
    config: &Config,
    session: &Session,
) -> Result<(), AppError> {
    let text = report::render_text_report(
        tr,
        &config.currency_symbol,
        session.inputs(),
        session.logic(),
        &session.result(),
    );
    fs::write(path, text)?;
    tracing::info!(path = %path.display(), "report exported");
    Ok(())
}

/// 실행 시 쓸 언어 코드. `--lang` 값은 설정 파일에 기록하지 않고 이번 실행에만 쓴다.
pub fn ui_language(config: &Config, cli_lang: Option<&str>) -> String {
    i18n::resolve_language(cli_lang.unwrap_or("auto"), Some(config.language.as_str()))
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(
    config: &mut Config,
    cli_lang: Option<&str>,
    session: &mut Session,
    store: &mut dyn KeyValueStore,
) -> Result<(), AppError> {
    let mut tr = Translator::new_with_pack(
        &ui_language(config, cli_lang),
        config.language_pack_dir.as_deref(),
    );
    loop {
        match ui_cli::main_menu(&tr)? {
            MenuChoice::Project => ui_cli::handle_project(&tr, session)?,
            MenuChoice::Schedule => ui_cli::handle_schedule(&tr, session)?,
            MenuChoice::CurrentSystem => ui_cli::handle_current_system(&tr, session)?,
            MenuChoice::RxSystem => ui_cli::handle_rx_system(&tr, session)?,
            MenuChoice::Investment => ui_cli::handle_investment(&tr, session)?,
            MenuChoice::Logic => ui_cli::handle_logic(&tr, session, store)?,
            MenuChoice::Report => ui_cli::print_report(&tr, config, session),
            MenuChoice::Export => {
                let path = ui_cli::read_path(&tr)?;
                export_report(&path, &tr, config, session)?;
                println!("{} {}", tr.t(i18n::keys::EXPORT_DONE), path.display());
            }
            MenuChoice::Language => {
                if let Some(code) = ui_cli::handle_language(&tr)? {
                    config.language = code.to_string();
                    config.save()?;
                    tr = Translator::new_with_pack(code, config.language_pack_dir.as_deref());
                }
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_language_does_not_touch_config() {
        let config = Config {
            language: "zh".to_string(),
            ..Config::default()
        };
        assert_eq!(ui_language(&config, Some("en")), "en");
        assert_eq!(ui_language(&config, None), "zh");
        assert_eq!(ui_language(&config, Some("auto")), "zh");
        assert_eq!(config.language, "zh");
    }
}
