use serde::{Deserialize, Serialize};

use crate::logic::LogicConfig;

/// 투자 항목 추가 시 선택할 수 있는 설비 모델 목록.
pub const EQUIPMENT_MODELS: [&str; 6] = [
    "RX-30",
    "RX-50",
    "RX-80",
    "RX-120",
    "RX-200",
    "Installation & Commissioning",
];

/// 현재 설비의 분위기 생성 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SystemMode {
    /// 질소 + 메탄올 적하
    #[default]
    NitrogenMethanol,
    /// 순수 메탄올 분해
    PureMethanol,
}

/// 메탄올 소비량 입력 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum MethanolInputMode {
    /// 연간 톤 [t/년]
    #[default]
    TonYear,
    /// 시간당 리터 [L/h]
    LiterHour,
}

/// Rx 발생로 가열 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum HeatingType {
    #[default]
    Gas,
    Electric,
}

/// 투자 항목 한 줄.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EquipmentItem {
    pub model: String,
    pub quantity: u32,
    pub unit_price: f64,
}

impl Default for EquipmentItem {
    fn default() -> Self {
        Self {
            model: EQUIPMENT_MODELS[2].to_string(),
            quantity: 1,
            unit_price: 0.0,
        }
    }
}

impl EquipmentItem {
    /// 수량 × 단가
    pub fn subtotal(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }
}

/// 활성 메탄올 소비량. 입력 방식에 따라 둘 중 하나만 유효하다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MethanolQuantity {
    /// 연간 톤 [t/년]
    AnnualTons(f64),
    /// 시간당 리터 [L/h]
    HourlyLiters(f64),
}

impl MethanolQuantity {
    pub fn value(&self) -> f64 {
        match *self {
            MethanolQuantity::AnnualTons(v) | MethanolQuantity::HourlyLiters(v) => v,
        }
    }
}

/// 활성 Rx 가열 수요.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RxHeating {
    /// 가스 가열 [m³/h]
    Gas(f64),
    /// 전기 가열 [kW]
    Electric(f64),
}

/// 사용자가 편집하는 시나리오 입력값 전체.
///
/// 필드 이름은 기존 저장 포맷(camelCase)과 호환되도록 직렬화한다.
/// 비활성 필드(예: 톤/년 모드의 `methanol_hourly_liters`)도 값은 유지되며
/// 모드 전환 시 기본값으로 재사용된다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InputParameters {
    pub project_name: String,
    pub customer_name: String,
    /// 연간 가동 일수 [일/년]
    pub running_days: f64,
    /// 일일 가동 시간 [h/일]
    pub running_hours: f64,
    /// 천연가스 단가 [/m³]
    pub natural_gas_price: f64,
    /// 메탄올 단가 [/t]
    pub methanol_price_per_ton: f64,
    /// 질소 단가
    pub nitrogen_price_per_ton: f64,
    /// 전기 단가 [/kWh]
    pub electricity_price: f64,
    pub mode: SystemMode,
    pub methanol_input_mode: MethanolInputMode,
    /// 시간당 메탄올 [L/h] (liter-hour 모드에서 유효)
    pub methanol_hourly_liters: f64,
    /// 연간 메탄올 [t/년] (ton-year 모드에서 유효)
    pub current_methanol_annual_tons: f64,
    /// 질소 사용량. ton-year 모드: 연간 액체 [m³/년], liter-hour 모드: 시간당 기체 [m³/h]
    #[serde(rename = "currentNitrogenAnnualLiquidM3")]
    pub current_nitrogen_usage: f64,
    pub rx_heating_type: HeatingType,
    /// 가스 가열 소비량 [m³/h]
    pub rx_heating_gas_hourly: f64,
    /// 전기 가열 소비 전력 [kW]
    pub rx_heating_electricity_hourly: f64,
    /// Rx 설비 자체 운전 전력 [kW]
    pub rx_electricity_hourly: f64,
    pub investment_items: Vec<EquipmentItem>,
    /// 감가상각 연수 [년]
    pub depreciation_life: u32,
    pub include_depreciation: bool,
}

impl Default for InputParameters {
    fn default() -> Self {
        Self {
            project_name: "Rx 气氛改造项目".to_string(),
            customer_name: String::new(),
            running_days: 300.0,
            running_hours: 24.0,
            natural_gas_price: 3.5,
            methanol_price_per_ton: 2800.0,
            nitrogen_price_per_ton: 0.8,
            electricity_price: 0.8,
            mode: SystemMode::NitrogenMethanol,
            methanol_input_mode: MethanolInputMode::TonYear,
            methanol_hourly_liters: 20.0,
            current_methanol_annual_tons: 100.0,
            current_nitrogen_usage: 215.0,
            rx_heating_type: HeatingType::Gas,
            rx_heating_gas_hourly: 1.74,
            rx_heating_electricity_hourly: 17.4,
            rx_electricity_hourly: 3.0,
            investment_items: vec![EquipmentItem {
                model: EQUIPMENT_MODELS[1].to_string(),
                quantity: 1,
                unit_price: 380_000.0,
            }],
            depreciation_life: 10,
            include_depreciation: false,
        }
    }
}

impl InputParameters {
    /// 연간 총 가동 시간 [h/년]
    pub fn total_hours(&self) -> f64 {
        self.running_days * self.running_hours
    }

    /// 입력 방식에 맞는 메탄올 소비량을 반환한다.
    pub fn methanol_quantity(&self) -> MethanolQuantity {
        match self.methanol_input_mode {
            MethanolInputMode::TonYear => {
                MethanolQuantity::AnnualTons(self.current_methanol_annual_tons)
            }
            MethanolInputMode::LiterHour => {
                MethanolQuantity::HourlyLiters(self.methanol_hourly_liters)
            }
        }
    }

    /// 가열 방식에 맞는 Rx 가열 수요를 반환한다.
    pub fn rx_heating(&self) -> RxHeating {
        match self.rx_heating_type {
            HeatingType::Gas => RxHeating::Gas(self.rx_heating_gas_hourly),
            HeatingType::Electric => RxHeating::Electric(self.rx_heating_electricity_hourly),
        }
    }

    /// 메탄올 입력 방식을 바꾸면서 현재 소비량을 다른 표현으로 옮겨 적는다.
    ///
    /// 총 가동 시간이 0이면 환산할 수 없으므로 모드 플래그만 바꾸고
    /// 대상 필드는 기존 값을 유지한다.
    pub fn switch_methanol_input_mode(&mut self, mode: MethanolInputMode, config: &LogicConfig) {
        if mode == self.methanol_input_mode {
            return;
        }
        let total_hours = self.total_hours();
        if total_hours > 0.0 {
            let density = config.effective_density();
            match self.methanol_quantity() {
                MethanolQuantity::AnnualTons(tons) => {
                    self.methanol_hourly_liters = tons * 1000.0 / density / total_hours;
                }
                MethanolQuantity::HourlyLiters(liters) => {
                    self.current_methanol_annual_tons = liters * total_hours * density / 1000.0;
                }
            }
        }
        self.methanol_input_mode = mode;
    }

    /// 카탈로그 기본 모델로 투자 항목을 하나 추가한다.
    pub fn add_investment_item(&mut self) {
        self.investment_items.push(EquipmentItem::default());
    }

    /// 범위를 벗어난 인덱스는 무시한다.
    pub fn remove_investment_item(&mut self, index: usize) {
        if index < self.investment_items.len() {
            self.investment_items.remove(index);
        }
    }

    /// 반올림 전 총 투자액
    pub fn total_investment(&self) -> f64 {
        self.investment_items.iter().map(EquipmentItem::subtotal).sum()
    }
}

/// 숫자 입력 문자열을 해석한다. 해석할 수 없으면 0으로 본다.
pub fn parse_number_or_zero(text: &str) -> f64 {
    match text.trim().replace(',', "").parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// 정수 입력(수량, 연수)용. 음수나 해석 불가 값은 0.
pub fn parse_count_or_zero(text: &str) -> u32 {
    let v = parse_number_or_zero(text);
    if v <= 0.0 {
        0
    } else {
        v.trunc().min(f64::from(u32::MAX)) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_numeric_text_becomes_zero() {
        assert_eq!(parse_number_or_zero("abc"), 0.0);
        assert_eq!(parse_number_or_zero(""), 0.0);
        assert_eq!(parse_number_or_zero(" 12.5 "), 12.5);
        assert_eq!(parse_number_or_zero("1,200"), 1200.0);
        assert_eq!(parse_number_or_zero("NaN"), 0.0);
        assert_eq!(parse_count_or_zero("-3"), 0);
        assert_eq!(parse_count_or_zero("4.9"), 4);
    }

    #[test]
    fn active_fields_follow_mode_flags() {
        let mut inputs = InputParameters::default();
        inputs.methanol_hourly_liters = 12.0;
        inputs.current_methanol_annual_tons = 80.0;
        assert_eq!(inputs.methanol_quantity(), MethanolQuantity::AnnualTons(80.0));
        inputs.methanol_input_mode = MethanolInputMode::LiterHour;
        assert_eq!(inputs.methanol_quantity(), MethanolQuantity::HourlyLiters(12.0));

        inputs.rx_heating_type = HeatingType::Electric;
        assert_eq!(inputs.rx_heating(), RxHeating::Electric(inputs.rx_heating_electricity_hourly));
    }

    #[test]
    fn remove_out_of_range_item_is_noop() {
        let mut inputs = InputParameters::default();
        inputs.add_investment_item();
        assert_eq!(inputs.investment_items.len(), 2);
        assert_eq!(inputs.investment_items[1].model, EQUIPMENT_MODELS[2]);
        inputs.remove_investment_item(7);
        assert_eq!(inputs.investment_items.len(), 2);
        inputs.remove_investment_item(0);
        assert_eq!(inputs.investment_items.len(), 1);
    }

    #[test]
    fn mode_switch_without_hours_keeps_target_field() {
        let mut inputs = InputParameters {
            running_days: 0.0,
            methanol_hourly_liters: 9.0,
            ..Default::default()
        };
        inputs.switch_methanol_input_mode(MethanolInputMode::LiterHour, &LogicConfig::default());
        assert_eq!(inputs.methanol_input_mode, MethanolInputMode::LiterHour);
        assert_eq!(inputs.methanol_hourly_liters, 9.0);
    }
}
