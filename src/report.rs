//! 비교표, 막대그래프 데이터, 텍스트 보고서 생성.

use crate::engine::CalculationResult;
use crate::i18n::{keys, Translator};
use crate::logic::LogicConfig;
use crate::model::{HeatingType, InputParameters, MethanolInputMode, SystemMode};

/// 연간 질소 체적 → 무게 환산계수 (툴팁 안내용)
pub const NITROGEN_WEIGHT_FACTOR: f64 = 1.2376;

/// 비교표의 한 행. `diff = current - rx`, 양수면 절감.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub label_key: &'static str,
    pub current: f64,
    pub rx: f64,
    pub details: Vec<ComparisonRow>,
}

impl ComparisonRow {
    fn leaf(label_key: &'static str, current: f64, rx: f64) -> Self {
        Self {
            label_key,
            current,
            rx,
            details: Vec::new(),
        }
    }

    pub fn diff(&self) -> f64 {
        self.current - self.rx
    }
}

/// 비교표 본문 행. 감가상각 행은 포함 설정일 때만 나온다.
pub fn comparison_rows(inputs: &InputParameters, result: &CalculationResult) -> Vec<ComparisonRow> {
    let mut rows = vec![
        ComparisonRow {
            label_key: keys::REPORT_FUEL_COST,
            current: result.methanol_annual_cost + result.nitrogen_annual_cost,
            rx: result.rx_natural_gas_annual_cost,
            details: vec![
                ComparisonRow::leaf(keys::REPORT_BREAKDOWN_METHANOL, result.methanol_annual_cost, 0.0),
                ComparisonRow::leaf(keys::REPORT_BREAKDOWN_NITROGEN, result.nitrogen_annual_cost, 0.0),
                ComparisonRow::leaf(keys::REPORT_BREAKDOWN_GAS, 0.0, result.rx_natural_gas_annual_cost),
            ],
        },
        ComparisonRow {
            label_key: keys::REPORT_AUX_COST,
            current: result.cracking_electricity_annual_cost,
            rx: result.rx_electricity_annual_cost,
            details: vec![ComparisonRow::leaf(
                keys::REPORT_BREAKDOWN_ELEC,
                result.cracking_electricity_annual_cost,
                result.rx_electricity_annual_cost,
            )],
        },
    ];
    if inputs.include_depreciation {
        rows.push(ComparisonRow::leaf(
            keys::REPORT_DEPRECIATION,
            0.0,
            result.annual_depreciation,
        ));
    }
    rows
}

/// 막대그래프 한 개.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostBar {
    pub label_key: &'static str,
    pub value: f64,
}

/// 현 설비 / Rx 연간 총비용 두 막대.
pub fn chart_bars(result: &CalculationResult) -> [CostBar; 2] {
    [
        CostBar {
            label_key: keys::REPORT_CURRENT,
            value: result.total_current_annual_cost,
        },
        CostBar {
            label_key: keys::REPORT_RX,
            value: result.total_rx_annual_cost,
        },
    ]
}

/// 연간 질소 사용량의 무게 환산값.
pub fn nitrogen_annual_weight(inputs: &InputParameters, total_hours: f64) -> f64 {
    let annual = match inputs.methanol_input_mode {
        MethanolInputMode::TonYear => inputs.current_nitrogen_usage,
        MethanolInputMode::LiterHour => inputs.current_nitrogen_usage * total_hours,
    };
    annual * NITROGEN_WEIGHT_FACTOR
}

/// 정수로 반올림해 천 단위 구분기호를 붙인다. 예: 1234567.4 -> "1,234,567"
pub fn group_thousands(value: f64) -> String {
    let rounded = value.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if negative {
        format!("-{out}")
    } else {
        out
    }
}

pub fn format_money(symbol: &str, value: f64) -> String {
    if value < 0.0 {
        format!("-{symbol}{}", group_thousands(value.abs()))
    } else {
        format!("{symbol}{}", group_thousands(value))
    }
}

/// 차액 표시. 절감(>= 0)은 "-", 증가는 "+".
pub fn format_diff(symbol: &str, diff: f64) -> String {
    let sign = if diff >= 0.0 { '-' } else { '+' };
    format!("{sign}{symbol}{}", group_thousands(diff.abs()))
}

/// 총비용 행의 절감률 표시. 절감은 "-12.3%", 증가는 "+4.0%".
pub fn format_rate_diff(savings_rate: f64) -> String {
    let sign = if savings_rate >= 0.0 { '-' } else { '+' };
    format!("{sign}{:.1}%", savings_rate.abs())
}

fn mode_label<'a>(tr: &'a Translator, mode: SystemMode) -> &'a str {
    match mode {
        SystemMode::NitrogenMethanol => tr.t(keys::MODE_NM),
        SystemMode::PureMethanol => tr.t(keys::MODE_PM),
    }
}

fn heating_label<'a>(tr: &'a Translator, heating: HeatingType) -> &'a str {
    match heating {
        HeatingType::Gas => tr.t(keys::HEATING_GAS),
        HeatingType::Electric => tr.t(keys::HEATING_ELEC),
    }
}

/// 인쇄/내보내기용 텍스트 보고서.
pub fn render_text_report(
    tr: &Translator,
    currency: &str,
    inputs: &InputParameters,
    logic: &LogicConfig,
    result: &CalculationResult,
) -> String {
    let mut lines = Vec::new();
    let customer = if inputs.customer_name.trim().is_empty() {
        tr.t(keys::UNNAMED_CUSTOMER)
    } else {
        inputs.customer_name.as_str()
    };
    let project = if inputs.project_name.trim().is_empty() {
        tr.t(keys::UNNAMED_PROJECT)
    } else {
        inputs.project_name.as_str()
    };

    lines.push(format!("{} - {}", tr.t(keys::APP_TITLE), tr.t(keys::REPORT_HEADING)));
    lines.push(format!("{customer} / {project}"));
    lines.push(format!("{}: {}", tr.t(keys::LOGIC_VERSION), logic.version));
    lines.push(String::new());

    lines.push(format!(
        "[{} ({})]",
        tr.t(keys::REPORT_CURRENT_SYSTEM),
        mode_label(tr, inputs.mode)
    ));
    lines.push(format!(
        "  {}: {:.0} h",
        tr.t(keys::REPORT_TOTAL_HOURS),
        result.total_hours
    ));
    lines.push(format!(
        "  {}: {:.2} t / {:.0} L / {:.2} L/h",
        tr.t(keys::FIELD_METH_TONS),
        result.annual_methanol_tons,
        result.annual_methanol_liters,
        result.hourly_methanol_liters
    ));
    if inputs.mode == SystemMode::NitrogenMethanol {
        let n2_key = match inputs.methanol_input_mode {
            MethanolInputMode::TonYear => keys::FIELD_N2_ANNUAL,
            MethanolInputMode::LiterHour => keys::FIELD_N2_HOURLY,
        };
        lines.push(format!(
            "  {}: {:.2} ({} {:.2} {})",
            tr.t(n2_key),
            inputs.current_nitrogen_usage,
            tr.t(keys::REPORT_N2_WEIGHT),
            nitrogen_annual_weight(inputs, result.total_hours),
            tr.t(keys::REPORT_WEIGHT_UNIT)
        ));
    }
    lines.push(format!(
        "  {}: {}/h",
        tr.t(keys::REPORT_COST_PER_HOUR),
        format_money(currency, result.current_cost_per_hour)
    ));
    lines.push(String::new());

    lines.push(format!(
        "[{} ({})]",
        tr.t(keys::REPORT_RX_SYSTEM),
        heating_label(tr, inputs.rx_heating_type)
    ));
    lines.push(format!(
        "  {}: {:.1} m³/h",
        tr.t(keys::REPORT_HOURLY_GAS),
        result.hourly_gas_volume
    ));
    lines.push(format!(
        "  {}: {:.2} m³/h",
        tr.t(keys::REPORT_PROCESS_NG),
        result.process_gas_hourly
    ));
    lines.push(format!(
        "  {}: {}/h",
        tr.t(keys::REPORT_COST_PER_HOUR),
        format_money(currency, result.rx_cost_per_hour)
    ));
    lines.push(format!(
        "  {}: {}",
        tr.t(keys::REPORT_TOTAL_INVESTMENT),
        format_money(currency, result.total_investment)
    ));
    for item in &inputs.investment_items {
        lines.push(format!(
            "    - {} x{} @ {}",
            item.model,
            item.quantity,
            format_money(currency, item.unit_price)
        ));
    }
    lines.push(String::new());

    lines.push(format!(
        "{:<16}{:>16}{:>16}{:>16}",
        tr.t(keys::REPORT_ITEM),
        tr.t(keys::REPORT_CURRENT),
        tr.t(keys::REPORT_RX),
        tr.t(keys::REPORT_DIFF)
    ));
    for row in comparison_rows(inputs, result) {
        push_row(&mut lines, tr, currency, &row, "");
        for detail in &row.details {
            push_row(&mut lines, tr, currency, detail, "  ");
        }
    }
    lines.push(format!(
        "{:<16}{:>16}{:>16}{:>16}",
        tr.t(keys::REPORT_ANNUAL_COST),
        format_money(currency, result.total_current_annual_cost),
        format_money(currency, result.total_rx_annual_cost),
        format_rate_diff(result.savings_rate)
    ));
    lines.push(String::new());

    lines.push(format!(
        "{}: {}",
        tr.t(keys::REPORT_SAVINGS),
        format_money(currency, result.annual_savings)
    ));
    lines.push(format!(
        "{}: {:.1}%",
        tr.t(keys::REPORT_SAVINGS_RATE),
        result.savings_rate
    ));
    let payback = if result.payback_period > 0.0 {
        format!("{:.1} {}", result.payback_period, tr.t(keys::REPORT_MONTHS))
    } else {
        tr.t(keys::REPORT_NO_PAYBACK).to_string()
    };
    lines.push(format!("{}: {payback}", tr.t(keys::REPORT_PAYBACK)));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn push_row(lines: &mut Vec<String>, tr: &Translator, currency: &str, row: &ComparisonRow, indent: &str) {
    lines.push(format!(
        "{indent}{:<16}{:>16}{:>16}{:>16}",
        tr.t(row.label_key),
        format_money(currency, row.current),
        format_money(currency, row.rx),
        format_diff(currency, row.diff())
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0.0), "0");
        assert_eq!(group_thousands(999.0), "999");
        assert_eq!(group_thousands(1000.0), "1,000");
        assert_eq!(group_thousands(1_234_567.4), "1,234,567");
        assert_eq!(format_money("¥", -2500.0), "-¥2,500");
        assert_eq!(format_diff("¥", -10.0), "+¥10");
        assert_eq!(format_diff("¥", 0.0), "-¥0");
        assert_eq!(format_rate_diff(12.34), "-12.3%");
        assert_eq!(format_rate_diff(-4.0), "+4.0%");
    }
}
