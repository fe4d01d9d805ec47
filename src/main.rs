use std::path::PathBuf;

use atmosphere_cost_analyst::{app, config, i18n, report, session::Session, store::JsonFileStore};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// 현 메탄올/질소 분위기 설비와 Rx 발생로의 운전비를 비교한다.
#[derive(Debug, Parser)]
#[command(name = "atmosphere_cost_analyst_cli", version)]
struct Cli {
    /// 표시 언어 (auto | zh | en)
    #[arg(long, short = 'L', default_value = "auto")]
    lang: String,
    /// 입력값을 담은 TOML 시나리오 파일
    #[arg(long)]
    scenario: Option<PathBuf>,
    /// 보고서만 출력하고 종료
    #[arg(long)]
    report: bool,
    /// 계수 저장소(JSON) 경로. 생략하면 config.toml 값을 쓴다.
    #[arg(long)]
    store: Option<PathBuf>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
    if let Err(err) = try_run(Cli::parse()) {
        tracing::error!(%err, "aborted");
        let tr = i18n::Translator::new(&i18n::resolve_language("auto", None));
        eprintln!("{} {err}", tr.t(i18n::keys::ERROR_PREFIX));
    }
}

fn try_run(cli: Cli) -> Result<(), app::AppError> {
    let mut cfg = config::load_or_default()?;
    let cli_lang = Some(cli.lang.as_str()).filter(|lang| *lang != "auto");
    let store_path = cli.store.unwrap_or_else(|| PathBuf::from(&cfg.store_path));
    let mut store = JsonFileStore::new(store_path);
    let mut session = Session::load(&store);
    if let Some(path) = cli.scenario.as_deref() {
        session.replace_inputs(app::load_scenario(path)?);
    }

    if cli.report {
        let lang = app::ui_language(&cfg, cli_lang);
        let tr = i18n::Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());
        let text = report::render_text_report(
            &tr,
            &cfg.currency_symbol,
            session.inputs(),
            session.logic(),
            &session.result(),
        );
        print!("{text}");
        return Ok(());
    }

    app::run(&mut cfg, cli_lang, &mut session, &mut store)
}
