use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const APP_TITLE: &str = "general.app_title";
    pub const APP_SUBTITLE: &str = "general.app_subtitle";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const UNNAMED_CUSTOMER: &str = "general.unnamed_customer";
    pub const UNNAMED_PROJECT: &str = "general.unnamed_project";
    pub const LOGIC_VERSION: &str = "general.logic_version";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_PROJECT: &str = "main_menu.project";
    pub const MAIN_MENU_SCHEDULE: &str = "main_menu.schedule";
    pub const MAIN_MENU_CURRENT: &str = "main_menu.current";
    pub const MAIN_MENU_RX: &str = "main_menu.rx";
    pub const MAIN_MENU_INVESTMENT: &str = "main_menu.investment";
    pub const MAIN_MENU_LOGIC: &str = "main_menu.logic";
    pub const MAIN_MENU_REPORT: &str = "main_menu.report";
    pub const MAIN_MENU_EXPORT: &str = "main_menu.export";
    pub const MAIN_MENU_LANGUAGE: &str = "main_menu.language";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const PROMPT_KEEP_HINT: &str = "prompt.keep_hint";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const FIELD_CUSTOMER: &str = "field.customer";
    pub const FIELD_PROJECT: &str = "field.project";
    pub const FIELD_DAYS: &str = "field.days_per_year";
    pub const FIELD_HOURS: &str = "field.hours_per_day";
    pub const FIELD_NG_PRICE: &str = "field.ng_price";
    pub const FIELD_ELEC_PRICE: &str = "field.elec_price";
    pub const FIELD_METH_PRICE: &str = "field.meth_price";
    pub const FIELD_N2_PRICE: &str = "field.n2_price";
    pub const FIELD_MODE: &str = "field.mode";
    pub const FIELD_INPUT_MODE: &str = "field.input_mode";
    pub const FIELD_METH_TONS: &str = "field.meth_tons";
    pub const FIELD_METH_HOURLY: &str = "field.meth_hourly";
    pub const FIELD_N2_ANNUAL: &str = "field.n2_annual";
    pub const FIELD_N2_HOURLY: &str = "field.n2_hourly";
    pub const FIELD_HEATING_TYPE: &str = "field.heating_type";
    pub const FIELD_HEATING_GAS: &str = "field.heating_gas";
    pub const FIELD_HEATING_ELEC: &str = "field.heating_elec";
    pub const FIELD_RX_ELEC: &str = "field.rx_elec";
    pub const FIELD_INCLUDE_DEPRECIATION: &str = "field.include_depreciation";
    pub const FIELD_DEPRECIATION_LIFE: &str = "field.depreciation_life";
    pub const FIELD_MODEL: &str = "field.model";
    pub const FIELD_QUANTITY: &str = "field.quantity";
    pub const FIELD_UNIT_PRICE: &str = "field.unit_price";

    pub const MODE_NM: &str = "mode.nitrogen_methanol";
    pub const MODE_PM: &str = "mode.pure_methanol";
    pub const INPUT_MODE_TON: &str = "input_mode.ton_year";
    pub const INPUT_MODE_LITER: &str = "input_mode.liter_hour";
    pub const HEATING_GAS: &str = "heating.gas";
    pub const HEATING_ELEC: &str = "heating.electric";

    pub const INVESTMENT_HEADING: &str = "investment.heading";
    pub const INVESTMENT_OPTIONS: &str = "investment.options";
    pub const INVESTMENT_PROMPT_INDEX: &str = "investment.prompt_index";
    pub const INVESTMENT_ADD: &str = "investment.add";

    pub const LOGIC_HEADING: &str = "logic.heading";
    pub const LOGIC_OPTIONS: &str = "logic.options";
    pub const LOGIC_CRACK: &str = "logic.crack_coeff";
    pub const LOGIC_NM: &str = "logic.nm_coeff";
    pub const LOGIC_NM_HINT: &str = "logic.nm_hint";
    pub const LOGIC_VENT: &str = "logic.ventilation_coeff";
    pub const LOGIC_VENT_HINT: &str = "logic.ventilation_hint";
    pub const LOGIC_RX_EFF: &str = "logic.rx_efficiency";
    pub const LOGIC_N2_RATIO: &str = "logic.n2_ratio";
    pub const LOGIC_DENSITY: &str = "logic.density";
    pub const LOGIC_ELEC_PER_L: &str = "logic.elec_per_l";
    pub const LOGIC_LN2: &str = "logic.ln2_to_gas";
    pub const LOGIC_SAVE: &str = "logic.save";
    pub const LOGIC_RESET: &str = "logic.reset";
    pub const LOGIC_SAVED: &str = "logic.saved";
    pub const LOGIC_RESET_DONE: &str = "logic.reset_done";

    pub const REPORT_HEADING: &str = "report.heading";
    pub const REPORT_CURRENT_SYSTEM: &str = "report.current_system";
    pub const REPORT_RX_SYSTEM: &str = "report.rx_system";
    pub const REPORT_ITEM: &str = "report.item";
    pub const REPORT_CURRENT: &str = "report.current";
    pub const REPORT_RX: &str = "report.rx";
    pub const REPORT_DIFF: &str = "report.diff";
    pub const REPORT_FUEL_COST: &str = "report.fuel_cost";
    pub const REPORT_BREAKDOWN_METHANOL: &str = "report.breakdown_methanol";
    pub const REPORT_BREAKDOWN_NITROGEN: &str = "report.breakdown_nitrogen";
    pub const REPORT_BREAKDOWN_GAS: &str = "report.breakdown_gas";
    pub const REPORT_AUX_COST: &str = "report.aux_cost";
    pub const REPORT_BREAKDOWN_ELEC: &str = "report.breakdown_elec";
    pub const REPORT_DEPRECIATION: &str = "report.depreciation";
    pub const REPORT_ANNUAL_COST: &str = "report.annual_cost";
    pub const REPORT_ANNUAL_COST_CURRENT: &str = "report.annual_cost_current";
    pub const REPORT_ANNUAL_COST_RX: &str = "report.annual_cost_rx";
    pub const REPORT_SAVINGS: &str = "report.savings";
    pub const REPORT_SAVINGS_RATE: &str = "report.savings_rate";
    pub const REPORT_PAYBACK: &str = "report.payback";
    pub const REPORT_MONTHS: &str = "report.months";
    pub const REPORT_NO_PAYBACK: &str = "report.no_payback";
    pub const REPORT_TOTAL_INVESTMENT: &str = "report.total_investment";
    pub const REPORT_HOURLY_GAS: &str = "report.hourly_gas";
    pub const REPORT_PROCESS_NG: &str = "report.process_ng";
    pub const REPORT_TOTAL_HOURS: &str = "report.total_hours";
    pub const REPORT_COST_PER_HOUR: &str = "report.cost_per_hour";
    pub const REPORT_N2_WEIGHT: &str = "report.n2_weight";
    pub const REPORT_WEIGHT_UNIT: &str = "report.weight_unit";
    pub const REPORT_CHART: &str = "report.chart";

    pub const EXPORT_PROMPT_PATH: &str = "export.prompt_path";
    pub const EXPORT_DONE: &str = "export.done";
    pub const EXPORT_BUTTON: &str = "export.button";

    pub const LANGUAGE_OPTIONS: &str = "language.options";

    pub const GUI_SETUP_TITLE: &str = "gui.setup_title";
    pub const GUI_START: &str = "gui.start";
    pub const GUI_BACK: &str = "gui.back";
    pub const GUI_SOURCE_BUTTON: &str = "gui.source_button";

    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Zh,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Zh
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Zh => "zh",
            Language::En => "en",
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
    /// 언어 코드(zh/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 zh로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
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
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.overrides
            .as_ref()
            .and_then(|m| m.get(key))
            .map(String::as_str)
    }

    /// 번역을 가져온다. 영어 번역이 없으면 중국어 문자열을 폴백한다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.lookup(key) {
            return v;
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| zh(key)),
            Language::Zh => zh(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "zh".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("zh") || other == "cn" => Some("zh".into()),
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
        "zh" => Some("zh".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(code) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(code);
    }
    ["LANG", "LC_ALL"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵 또는 중첩 테이블.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let path = Path::new(dir).join(format!("{lang}.toml"));
    let content = fs::read_to_string(path).ok()?;
    parse_toml_to_map(&content)
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

fn zh(key: &str) -> &'static str {
    use keys::*;
    match key {
        APP_TITLE => "PowerMax 气氛成本分析",
        APP_SUBTITLE => "甲醇裂解 / 氮甲醇 与 Rx 吸热式气氛 运行成本对比",
        APP_EXIT => "已退出。",
        ERROR_PREFIX => "错误:",
        UNNAMED_CUSTOMER => "未命名客户",
        UNNAMED_PROJECT => "未命名项目",
        LOGIC_VERSION => "计算逻辑版本",
        MAIN_MENU_TITLE => "\n=== PowerMax 气氛成本分析 ===",
        MAIN_MENU_PROJECT => "1) 客户 / 项目",
        MAIN_MENU_SCHEDULE => "2) 运行时间与能源单价",
        MAIN_MENU_CURRENT => "3) 现有系统",
        MAIN_MENU_RX => "4) Rx 方案",
        MAIN_MENU_INVESTMENT => "5) 投资与折旧",
        MAIN_MENU_LOGIC => "6) 计算系数",
        MAIN_MENU_REPORT => "7) 查看对比报告",
        MAIN_MENU_EXPORT => "8) 导出报告",
        MAIN_MENU_LANGUAGE => "9) 语言 / Language",
        MAIN_MENU_EXIT => "0) 退出",
        PROMPT_MENU_SELECT => "请选择菜单: ",
        PROMPT_SELECT => "选择: ",
        PROMPT_KEEP_HINT => "(直接回车保持当前值)",
        INVALID_SELECTION_RETRY => "输入无效，请重新选择。",
        FIELD_CUSTOMER => "客户名称",
        FIELD_PROJECT => "项目名称",
        FIELD_DAYS => "年运行天数 [天]",
        FIELD_HOURS => "日运行小时 [h]",
        FIELD_NG_PRICE => "天然气单价 [元/m³]",
        FIELD_ELEC_PRICE => "电价 [元/kWh]",
        FIELD_METH_PRICE => "甲醇单价 [元/吨]",
        FIELD_N2_PRICE => "氮气单价 [元/m³]",
        FIELD_MODE => "工艺模式",
        FIELD_INPUT_MODE => "甲醇输入方式",
        FIELD_METH_TONS => "甲醇年用量 [吨/年]",
        FIELD_METH_HOURLY => "甲醇小时用量 [L/h]",
        FIELD_N2_ANNUAL => "液氮年用量 [m³/年]",
        FIELD_N2_HOURLY => "氮气小时用量 [m³/h]",
        FIELD_HEATING_TYPE => "Rx 加热方式",
        FIELD_HEATING_GAS => "加热耗气 [m³/h]",
        FIELD_HEATING_ELEC => "加热功率 [kW]",
        FIELD_RX_ELEC => "Rx 运行功率 [kW]",
        FIELD_INCLUDE_DEPRECIATION => "计入折旧",
        FIELD_DEPRECIATION_LIFE => "折旧年限 [年]",
        FIELD_MODEL => "型号",
        FIELD_QUANTITY => "数量",
        FIELD_UNIT_PRICE => "单价 [元]",
        MODE_NM => "氮甲醇",
        MODE_PM => "纯甲醇",
        INPUT_MODE_TON => "吨/年",
        INPUT_MODE_LITER => "升/小时",
        HEATING_GAS => "燃气加热",
        HEATING_ELEC => "电加热",
        INVESTMENT_HEADING => "\n-- 投资明细 --",
        INVESTMENT_OPTIONS => "1) 添加设备  2) 修改设备  3) 删除设备  4) 折旧设置  0) 返回",
        INVESTMENT_PROMPT_INDEX => "设备序号: ",
        INVESTMENT_ADD => "添加设备",
        LOGIC_HEADING => "\n-- 计算系数 --",
        LOGIC_OPTIONS => "1) 修改系数  2) 保存  3) 恢复默认  0) 返回",
        LOGIC_CRACK => "1L 甲醇裂解气量 [m³/L]",
        LOGIC_NM => "氮甲醇换算总系数",
        LOGIC_NM_HINT => "预留系数，当前不参与成本计算",
        LOGIC_VENT => "纯甲醇换气系数",
        LOGIC_VENT_HINT => "纯甲醇模式下裂解气量的放大系数",
        LOGIC_RX_EFF => "Rx 产气效率 (1:x)",
        LOGIC_N2_RATIO => "氮气配比",
        LOGIC_DENSITY => "甲醇密度 [kg/L]",
        LOGIC_ELEC_PER_L => "甲醇裂解功耗 [kWh/L]",
        LOGIC_LN2 => "液氮变为氮气系数",
        LOGIC_SAVE => "保存",
        LOGIC_RESET => "恢复默认",
        LOGIC_SAVED => "系数已保存，版本:",
        LOGIC_RESET_DONE => "已恢复默认系数（尚未保存）。",
        REPORT_HEADING => "成本对比报告",
        REPORT_CURRENT_SYSTEM => "现有系统",
        REPORT_RX_SYSTEM => "Rx 方案",
        REPORT_ITEM => "项目",
        REPORT_CURRENT => "现状",
        REPORT_RX => "Rx",
        REPORT_DIFF => "差额",
        REPORT_FUEL_COST => "介质成本",
        REPORT_BREAKDOWN_METHANOL => "甲醇",
        REPORT_BREAKDOWN_NITROGEN => "氮气",
        REPORT_BREAKDOWN_GAS => "天然气",
        REPORT_AUX_COST => "动力成本",
        REPORT_BREAKDOWN_ELEC => "电力",
        REPORT_DEPRECIATION => "设备折旧",
        REPORT_ANNUAL_COST => "年度总成本",
        REPORT_ANNUAL_COST_CURRENT => "现状年成本",
        REPORT_ANNUAL_COST_RX => "Rx 年成本",
        REPORT_SAVINGS => "年节约",
        REPORT_SAVINGS_RATE => "节约率",
        REPORT_PAYBACK => "投资回收期",
        REPORT_MONTHS => "个月",
        REPORT_NO_PAYBACK => "无法回收",
        REPORT_TOTAL_INVESTMENT => "总投资",
        REPORT_HOURLY_GAS => "气氛需求量",
        REPORT_PROCESS_NG => "工艺耗天然气",
        REPORT_TOTAL_HOURS => "年运行时间",
        REPORT_COST_PER_HOUR => "每小时成本",
        REPORT_N2_WEIGHT => "液氮折合重量约",
        REPORT_WEIGHT_UNIT => "吨",
        REPORT_CHART => "年度成本规模",
        EXPORT_PROMPT_PATH => "导出文件路径: ",
        EXPORT_DONE => "报告已导出:",
        EXPORT_BUTTON => "导出报告",
        LANGUAGE_OPTIONS => "1) 简体中文  2) English",
        GUI_SETUP_TITLE => "基础参数设置",
        GUI_START => "开始分析",
        GUI_BACK => "返回",
        GUI_SOURCE_BUTTON => "计算逻辑",
        ERROR_INVALID_NUMBER => "请输入数字。",
        _ => "",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        APP_TITLE => "PowerMax Atmosphere Analyst",
        APP_SUBTITLE => "Methanol cracking / N2-methanol vs Rx endothermic atmosphere operating cost",
        APP_EXIT => "Exited.",
        ERROR_PREFIX => "Error:",
        UNNAMED_CUSTOMER => "Unnamed customer",
        UNNAMED_PROJECT => "Unnamed project",
        LOGIC_VERSION => "Logic version",
        MAIN_MENU_TITLE => "\n=== PowerMax Atmosphere Analyst ===",
        MAIN_MENU_PROJECT => "1) Customer / project",
        MAIN_MENU_SCHEDULE => "2) Schedule & utility prices",
        MAIN_MENU_CURRENT => "3) Current system",
        MAIN_MENU_RX => "4) Rx system",
        MAIN_MENU_INVESTMENT => "5) Investment & depreciation",
        MAIN_MENU_LOGIC => "6) Calculation coefficients",
        MAIN_MENU_REPORT => "7) Show comparison report",
        MAIN_MENU_EXPORT => "8) Export report",
        MAIN_MENU_LANGUAGE => "9) Language / 语言",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        PROMPT_KEEP_HINT => "(press enter to keep the current value)",
        INVALID_SELECTION_RETRY => "Invalid input. Please select again.",
        FIELD_CUSTOMER => "Customer name",
        FIELD_PROJECT => "Project name",
        FIELD_DAYS => "Running days per year",
        FIELD_HOURS => "Running hours per day",
        FIELD_NG_PRICE => "Natural gas price [/m³]",
        FIELD_ELEC_PRICE => "Electricity price [/kWh]",
        FIELD_METH_PRICE => "Methanol price [/t]",
        FIELD_N2_PRICE => "Nitrogen price [/m³]",
        FIELD_MODE => "Process mode",
        FIELD_INPUT_MODE => "Methanol input mode",
        FIELD_METH_TONS => "Methanol usage [t/year]",
        FIELD_METH_HOURLY => "Methanol usage [L/h]",
        FIELD_N2_ANNUAL => "Liquid nitrogen usage [m³/year]",
        FIELD_N2_HOURLY => "Nitrogen usage [m³/h]",
        FIELD_HEATING_TYPE => "Rx heating type",
        FIELD_HEATING_GAS => "Heating gas [m³/h]",
        FIELD_HEATING_ELEC => "Heating power [kW]",
        FIELD_RX_ELEC => "Rx running power [kW]",
        FIELD_INCLUDE_DEPRECIATION => "Include depreciation",
        FIELD_DEPRECIATION_LIFE => "Depreciation life [years]",
        FIELD_MODEL => "Model",
        FIELD_QUANTITY => "Quantity",
        FIELD_UNIT_PRICE => "Unit price",
        MODE_NM => "Nitrogen-methanol",
        MODE_PM => "Pure methanol",
        INPUT_MODE_TON => "t/year",
        INPUT_MODE_LITER => "L/h",
        HEATING_GAS => "Gas heating",
        HEATING_ELEC => "Electric heating",
        INVESTMENT_HEADING => "\n-- Investment --",
        INVESTMENT_OPTIONS => "1) Add item  2) Edit item  3) Remove item  4) Depreciation  0) Back",
        INVESTMENT_PROMPT_INDEX => "Item number: ",
        INVESTMENT_ADD => "Add item",
        LOGIC_HEADING => "\n-- Calculation coefficients --",
        LOGIC_OPTIONS => "1) Edit  2) Save  3) Reset to defaults  0) Back",
        LOGIC_CRACK => "Cracked gas per L methanol [m³/L]",
        LOGIC_NM => "N2-methanol conversion coefficient",
        LOGIC_NM_HINT => "Reserved; not used in the cost calculation",
        LOGIC_VENT => "Pure methanol ventilation coefficient",
        LOGIC_VENT_HINT => "Scales cracked gas volume in pure methanol mode",
        LOGIC_RX_EFF => "Rx gas yield (1:x)",
        LOGIC_N2_RATIO => "Nitrogen ratio",
        LOGIC_DENSITY => "Methanol density [kg/L]",
        LOGIC_ELEC_PER_L => "Cracking power [kWh/L]",
        LOGIC_LN2 => "Liquid to gas nitrogen factor",
        LOGIC_SAVE => "Save",
        LOGIC_RESET => "Reset",
        LOGIC_SAVED => "Coefficients saved, version:",
        LOGIC_RESET_DONE => "Defaults restored (not saved yet).",
        REPORT_HEADING => "Cost comparison report",
        REPORT_CURRENT_SYSTEM => "Current system",
        REPORT_RX_SYSTEM => "Rx system",
        REPORT_ITEM => "Item",
        REPORT_CURRENT => "Current",
        REPORT_RX => "Rx",
        REPORT_DIFF => "Difference",
        REPORT_FUEL_COST => "Medium cost",
        REPORT_BREAKDOWN_METHANOL => "Methanol",
        REPORT_BREAKDOWN_NITROGEN => "Nitrogen",
        REPORT_BREAKDOWN_GAS => "Natural gas",
        REPORT_AUX_COST => "Power cost",
        REPORT_BREAKDOWN_ELEC => "Electricity",
        REPORT_DEPRECIATION => "Depreciation",
        REPORT_ANNUAL_COST => "Annual total",
        REPORT_ANNUAL_COST_CURRENT => "Current annual cost",
        REPORT_ANNUAL_COST_RX => "Rx annual cost",
        REPORT_SAVINGS => "Annual savings",
        REPORT_SAVINGS_RATE => "Savings rate",
        REPORT_PAYBACK => "Payback period",
        REPORT_MONTHS => "months",
        REPORT_NO_PAYBACK => "no payback",
        REPORT_TOTAL_INVESTMENT => "Total investment",
        REPORT_HOURLY_GAS => "Atmosphere demand",
        REPORT_PROCESS_NG => "Process natural gas",
        REPORT_TOTAL_HOURS => "Annual running hours",
        REPORT_COST_PER_HOUR => "Cost per hour",
        REPORT_N2_WEIGHT => "Liquid nitrogen weight approx.",
        REPORT_WEIGHT_UNIT => "t",
        REPORT_CHART => "Annual cost scale",
        EXPORT_PROMPT_PATH => "Export file path: ",
        EXPORT_DONE => "Report exported:",
        EXPORT_BUTTON => "Export report",
        LANGUAGE_OPTIONS => "1) 简体中文  2) English",
        GUI_SETUP_TITLE => "Basic parameters",
        GUI_START => "Start analysis",
        GUI_BACK => "Back",
        GUI_SOURCE_BUTTON => "Calculation logic",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_falls_back_to_chinese() {
        let tr = Translator::new("en-US");
        assert_eq!(tr.language(), Language::En);
        assert_eq!(tr.t(keys::REPORT_SAVINGS), "Annual savings");
        assert_eq!(Translator::new("zh-CN").t(keys::REPORT_SAVINGS), "年节约");
        assert_eq!(tr.t("no.such.key"), "");
    }

    #[test]
    fn explicit_language_wins() {
        assert_eq!(resolve_language("en", Some("zh")), "en");
        assert_eq!(resolve_language("auto", Some("zh_CN")), "zh");
    }

    #[test]
    fn nested_pack_tables_flatten() {
        let map = parse_toml_to_map("[report]\nsavings = \"Saved\"\n").expect("pack");
        assert_eq!(map.get("report.savings").map(String::as_str), Some("Saved"));
    }
}
