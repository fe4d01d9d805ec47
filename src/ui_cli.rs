use std::io::{self, Write};
use std::path::PathBuf;

use crate::app::AppError;
use crate::config::Config;
use crate::i18n::{keys, Translator};
use crate::logic::LogicConfig;
use crate::model::{
    parse_count_or_zero, parse_number_or_zero, HeatingType, MethanolInputMode, SystemMode,
    EQUIPMENT_MODELS,
};
use crate::report;
use crate::session::Session;
use crate::store::KeyValueStore;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Project,
    Schedule,
    CurrentSystem,
    RxSystem,
    Investment,
    Logic,
    Report,
    Export,
    Language,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    for key in [
        keys::MAIN_MENU_PROJECT,
        keys::MAIN_MENU_SCHEDULE,
        keys::MAIN_MENU_CURRENT,
        keys::MAIN_MENU_RX,
        keys::MAIN_MENU_INVESTMENT,
        keys::MAIN_MENU_LOGIC,
        keys::MAIN_MENU_REPORT,
        keys::MAIN_MENU_EXPORT,
        keys::MAIN_MENU_LANGUAGE,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Project),
            "2" => return Ok(MenuChoice::Schedule),
            "3" => return Ok(MenuChoice::CurrentSystem),
            "4" => return Ok(MenuChoice::RxSystem),
            "5" => return Ok(MenuChoice::Investment),
            "6" => return Ok(MenuChoice::Logic),
            "7" => return Ok(MenuChoice::Report),
            "8" => return Ok(MenuChoice::Export),
            "9" => return Ok(MenuChoice::Language),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 고객/프로젝트 이름을 편집한다.
pub fn handle_project(tr: &Translator, session: &mut Session) -> Result<(), AppError> {
    println!("{}", tr.t(keys::PROMPT_KEEP_HINT));
    let customer = edit_text(tr.t(keys::FIELD_CUSTOMER), &session.inputs().customer_name)?;
    let project = edit_text(tr.t(keys::FIELD_PROJECT), &session.inputs().project_name)?;
    session.edit(|inputs| {
        inputs.customer_name = customer;
        inputs.project_name = project;
    });
    Ok(())
}

/// 가동 시간과 에너지 단가를 편집한다.
pub fn handle_schedule(tr: &Translator, session: &mut Session) -> Result<(), AppError> {
    println!("{}", tr.t(keys::PROMPT_KEEP_HINT));
    let current = session.inputs().clone();
    let days = edit_number(tr.t(keys::FIELD_DAYS), current.running_days)?;
    let hours = edit_number(tr.t(keys::FIELD_HOURS), current.running_hours)?;
    let ng = edit_number(tr.t(keys::FIELD_NG_PRICE), current.natural_gas_price)?;
    let elec = edit_number(tr.t(keys::FIELD_ELEC_PRICE), current.electricity_price)?;
    let meth = edit_number(tr.t(keys::FIELD_METH_PRICE), current.methanol_price_per_ton)?;
    let n2 = edit_number(tr.t(keys::FIELD_N2_PRICE), current.nitrogen_price_per_ton)?;
    session.edit(|inputs| {
        inputs.running_days = days;
        inputs.running_hours = hours;
        inputs.natural_gas_price = ng;
        inputs.electricity_price = elec;
        inputs.methanol_price_per_ton = meth;
        inputs.nitrogen_price_per_ton = n2;
    });
    Ok(())
}

/// 현 설비 모드, 메탄올, 질소 사용량을 편집한다.
pub fn handle_current_system(tr: &Translator, session: &mut Session) -> Result<(), AppError> {
    println!("\n-- {} --", tr.t(keys::REPORT_CURRENT_SYSTEM));
    println!(
        "{}: 1) {}  2) {}",
        tr.t(keys::FIELD_MODE),
        tr.t(keys::MODE_NM),
        tr.t(keys::MODE_PM)
    );
    let mode = match read_line(tr.t(keys::PROMPT_SELECT))?.trim() {
        "1" => Some(SystemMode::NitrogenMethanol),
        "2" => Some(SystemMode::PureMethanol),
        _ => None,
    };
    if let Some(mode) = mode {
        session.edit(|inputs| inputs.mode = mode);
    }

    println!(
        "{}: 1) {}  2) {}",
        tr.t(keys::FIELD_INPUT_MODE),
        tr.t(keys::INPUT_MODE_TON),
        tr.t(keys::INPUT_MODE_LITER)
    );
    let input_mode = match read_line(tr.t(keys::PROMPT_SELECT))?.trim() {
        "1" => Some(MethanolInputMode::TonYear),
        "2" => Some(MethanolInputMode::LiterHour),
        _ => None,
    };
    if let Some(input_mode) = input_mode {
        session.switch_methanol_input_mode(input_mode);
    }

    println!("{}", tr.t(keys::PROMPT_KEEP_HINT));
    let inputs = session.inputs().clone();
    match inputs.methanol_input_mode {
        MethanolInputMode::TonYear => {
            let tons = edit_number(tr.t(keys::FIELD_METH_TONS), inputs.current_methanol_annual_tons)?;
            session.edit(|i| i.current_methanol_annual_tons = tons);
        }
        MethanolInputMode::LiterHour => {
            let liters = edit_number(tr.t(keys::FIELD_METH_HOURLY), inputs.methanol_hourly_liters)?;
            session.edit(|i| i.methanol_hourly_liters = liters);
        }
    }

    // 파생 규칙이 방금 채운 권장값을 보여주고 수정 기회를 준다
    let inputs = session.inputs().clone();
    if inputs.mode == SystemMode::NitrogenMethanol {
        let label = match inputs.methanol_input_mode {
            MethanolInputMode::TonYear => tr.t(keys::FIELD_N2_ANNUAL),
            MethanolInputMode::LiterHour => tr.t(keys::FIELD_N2_HOURLY),
        };
        let n2 = edit_number(label, inputs.current_nitrogen_usage)?;
        session.edit(|i| i.current_nitrogen_usage = n2);
        let total_hours = session.inputs().total_hours();
        println!(
            "  {} {:.2} {}",
            tr.t(keys::REPORT_N2_WEIGHT),
            report::nitrogen_annual_weight(session.inputs(), total_hours),
            tr.t(keys::REPORT_WEIGHT_UNIT)
        );
    }
    Ok(())
}

/// Rx 가열 방식과 전력을 편집한다.
pub fn handle_rx_system(tr: &Translator, session: &mut Session) -> Result<(), AppError> {
    println!("\n-- {} --", tr.t(keys::REPORT_RX_SYSTEM));
    let result = session.result();
    println!(
        "{}: {:.1} m³/h, {}: {:.2} m³/h",
        tr.t(keys::REPORT_HOURLY_GAS),
        result.hourly_gas_volume,
        tr.t(keys::REPORT_PROCESS_NG),
        result.process_gas_hourly
    );
    println!(
        "{}: 1) {}  2) {}",
        tr.t(keys::FIELD_HEATING_TYPE),
        tr.t(keys::HEATING_GAS),
        tr.t(keys::HEATING_ELEC)
    );
    let heating = match read_line(tr.t(keys::PROMPT_SELECT))?.trim() {
        "1" => Some(HeatingType::Gas),
        "2" => Some(HeatingType::Electric),
        _ => None,
    };
    if let Some(heating) = heating {
        session.edit(|i| i.rx_heating_type = heating);
    }

    println!("{}", tr.t(keys::PROMPT_KEEP_HINT));
    let inputs = session.inputs().clone();
    match inputs.rx_heating_type {
        HeatingType::Gas => {
            let v = edit_number(tr.t(keys::FIELD_HEATING_GAS), inputs.rx_heating_gas_hourly)?;
            session.edit(|i| i.rx_heating_gas_hourly = v);
        }
        HeatingType::Electric => {
            let v = edit_number(
                tr.t(keys::FIELD_HEATING_ELEC),
                inputs.rx_heating_electricity_hourly,
            )?;
            session.edit(|i| i.rx_heating_electricity_hourly = v);
        }
    }
    let v = edit_number(tr.t(keys::FIELD_RX_ELEC), inputs.rx_electricity_hourly)?;
    session.edit(|i| i.rx_electricity_hourly = v);
    Ok(())
}

/// 투자 항목과 감가상각 설정을 편집한다.
pub fn handle_investment(tr: &Translator, session: &mut Session) -> Result<(), AppError> {
    loop {
        println!("{}", tr.t(keys::INVESTMENT_HEADING));
        for (idx, item) in session.inputs().investment_items.iter().enumerate() {
            println!(
                "  {}) {} x{} @ {}",
                idx + 1,
                item.model,
                item.quantity,
                report::group_thousands(item.unit_price)
            );
        }
        println!("{}", tr.t(keys::INVESTMENT_OPTIONS));
        match read_line(tr.t(keys::PROMPT_SELECT))?.trim() {
            "1" => {
                session.edit(|i| i.add_investment_item());
            }
            "2" => {
                let Some(idx) = read_item_index(tr, session)? else {
                    continue;
                };
                let item = session.inputs().investment_items[idx].clone();
                println!("{}", tr.t(keys::PROMPT_KEEP_HINT));
                for (n, model) in EQUIPMENT_MODELS.iter().enumerate() {
                    println!("    {}) {model}", n + 1);
                }
                let model_in = read_line(&format!("{} [{}]: ", tr.t(keys::FIELD_MODEL), item.model))?;
                let model = match model_in.trim().parse::<usize>() {
                    Ok(n) if (1..=EQUIPMENT_MODELS.len()).contains(&n) => {
                        EQUIPMENT_MODELS[n - 1].to_string()
                    }
                    _ if model_in.trim().is_empty() => item.model.clone(),
                    _ => model_in.trim().to_string(),
                };
                let qty_in =
                    read_line(&format!("{} [{}]: ", tr.t(keys::FIELD_QUANTITY), item.quantity))?;
                let quantity = if qty_in.trim().is_empty() {
                    item.quantity
                } else {
                    parse_count_or_zero(&qty_in)
                };
                let unit_price = edit_number(tr.t(keys::FIELD_UNIT_PRICE), item.unit_price)?;
                session.edit(|i| {
                    if let Some(target) = i.investment_items.get_mut(idx) {
                        target.model = model;
                        target.quantity = quantity;
                        target.unit_price = unit_price;
                    }
                });
            }
            "3" => {
                if let Some(idx) = read_item_index(tr, session)? {
                    session.edit(|i| i.remove_investment_item(idx));
                }
            }
            "4" => {
                let include = read_line(&format!(
                    "{} (y/n) [{}]: ",
                    tr.t(keys::FIELD_INCLUDE_DEPRECIATION),
                    if session.inputs().include_depreciation { "y" } else { "n" }
                ))?;
                let include = match include.trim().to_lowercase().as_str() {
                    "y" | "yes" | "1" => true,
                    "n" | "no" | "0" => false,
                    _ => session.inputs().include_depreciation,
                };
                let life_in = read_line(&format!(
                    "{} [{}]: ",
                    tr.t(keys::FIELD_DEPRECIATION_LIFE),
                    session.inputs().depreciation_life
                ))?;
                let life = if life_in.trim().is_empty() {
                    session.inputs().depreciation_life
                } else {
                    parse_count_or_zero(&life_in)
                };
                session.edit(|i| {
                    i.include_depreciation = include;
                    i.depreciation_life = life;
                });
            }
            "0" | "" => return Ok(()),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

fn read_item_index(tr: &Translator, session: &Session) -> Result<Option<usize>, AppError> {
    let sel = read_line(tr.t(keys::INVESTMENT_PROMPT_INDEX))?;
    match sel.trim().parse::<usize>() {
        Ok(n) if n >= 1 && n <= session.inputs().investment_items.len() => Ok(Some(n - 1)),
        _ => {
            println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
            Ok(None)
        }
    }
}

/// 계수 편집/저장/초기화 메뉴.
pub fn handle_logic(
    tr: &Translator,
    session: &mut Session,
    store: &mut dyn KeyValueStore,
) -> Result<(), AppError> {
    loop {
        println!("{}", tr.t(keys::LOGIC_HEADING));
        print_logic(tr, session.logic());
        println!("{}", tr.t(keys::LOGIC_OPTIONS));
        match read_line(tr.t(keys::PROMPT_SELECT))?.trim() {
            "1" => {
                println!("{}", tr.t(keys::PROMPT_KEEP_HINT));
                let mut edited = session.logic().clone();
                edited.methanol_crack_coeff =
                    edit_number(tr.t(keys::LOGIC_CRACK), edited.methanol_crack_coeff)?;
                edited.nm_conversion_coeff =
                    edit_number(tr.t(keys::LOGIC_NM), edited.nm_conversion_coeff)?;
                edited.ventilation_coeff =
                    edit_number(tr.t(keys::LOGIC_VENT), edited.ventilation_coeff)?;
                edited.rx_efficiency = edit_number(tr.t(keys::LOGIC_RX_EFF), edited.rx_efficiency)?;
                edited.n2_ratio = edit_number(tr.t(keys::LOGIC_N2_RATIO), edited.n2_ratio)?;
                edited.methanol_density =
                    edit_number(tr.t(keys::LOGIC_DENSITY), edited.methanol_density)?;
                edited.elec_per_l_methanol =
                    edit_number(tr.t(keys::LOGIC_ELEC_PER_L), edited.elec_per_l_methanol)?;
                edited.ln2_to_gas_coeff = edit_number(tr.t(keys::LOGIC_LN2), edited.ln2_to_gas_coeff)?;
                *session.logic_mut() = edited;
            }
            "2" => {
                let saved = session.save_logic(store)?;
                println!("{} {}", tr.t(keys::LOGIC_SAVED), saved.version);
            }
            "3" => {
                session.reset_logic();
                println!("{}", tr.t(keys::LOGIC_RESET_DONE));
            }
            "0" | "" => return Ok(()),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

fn print_logic(tr: &Translator, logic: &LogicConfig) {
    println!("{}: {}", tr.t(keys::LOGIC_VERSION), logic.version);
    println!("  {}: {}", tr.t(keys::LOGIC_CRACK), logic.methanol_crack_coeff);
    println!(
        "  {}: {} ({})",
        tr.t(keys::LOGIC_NM),
        logic.nm_conversion_coeff,
        tr.t(keys::LOGIC_NM_HINT)
    );
    println!("  {}: {}", tr.t(keys::LOGIC_VENT), logic.ventilation_coeff);
    println!("  {}: {}", tr.t(keys::LOGIC_RX_EFF), logic.rx_efficiency);
    println!("  {}: {}", tr.t(keys::LOGIC_N2_RATIO), logic.n2_ratio);
    println!("  {}: {}", tr.t(keys::LOGIC_DENSITY), logic.methanol_density);
    println!("  {}: {}", tr.t(keys::LOGIC_ELEC_PER_L), logic.elec_per_l_methanol);
    println!("  {}: {}", tr.t(keys::LOGIC_LN2), logic.ln2_to_gas_coeff);
}

/// 비교 보고서를 출력한다.
pub fn print_report(tr: &Translator, config: &Config, session: &Session) {
    let text = report::render_text_report(
        tr,
        &config.currency_symbol,
        session.inputs(),
        session.logic(),
        &session.result(),
    );
    println!("\n{text}");
}

/// 언어 선택. 바뀌지 않으면 None.
pub fn handle_language(tr: &Translator) -> Result<Option<&'static str>, AppError> {
    println!("{}", tr.t(keys::LANGUAGE_OPTIONS));
    Ok(match read_line(tr.t(keys::PROMPT_SELECT))?.trim() {
        "1" => Some("zh"),
        "2" => Some("en"),
        _ => None,
    })
}

pub fn read_path(tr: &Translator) -> Result<PathBuf, AppError> {
    loop {
        let s = read_line(tr.t(keys::EXPORT_PROMPT_PATH))?;
        if !s.trim().is_empty() {
            return Ok(PathBuf::from(s.trim()));
        }
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf).map_err(AppError::Io)? == 0 {
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "stdin closed",
        )));
    }
    Ok(buf)
}

/// 빈 입력이면 현재 값을 유지하고, 숫자가 아니면 0으로 본다.
fn edit_number(label: &str, current: f64) -> Result<f64, AppError> {
    let s = read_line(&format!("{label} [{current}]: "))?;
    if s.trim().is_empty() {
        Ok(current)
    } else {
        Ok(parse_number_or_zero(&s))
    }
}

fn edit_text(label: &str, current: &str) -> Result<String, AppError> {
    let s = read_line(&format!("{label} [{current}]: "))?;
    if s.trim().is_empty() {
        Ok(current.to_string())
    } else {
        Ok(s.trim().to_string())
    }
}
