//! 현 설비 대비 Rx 발생로 비용 비교 계산 엔진.
//!
//! `compute`는 입력과 계수만으로 결과를 매번 새로 만든다. 상태도 부수효과도 없다.

pub mod consumption;
pub mod current_system;
pub mod investment;
pub mod rx_system;

use serde::Serialize;

use crate::logic::LogicConfig;
use crate::model::InputParameters;

pub use consumption::{hourly_gas_volume, methanol_consumption, MethanolConsumption};
pub use current_system::{current_system_cost, CurrentSystemCost};
pub use investment::{investment_summary, savings, InvestmentSummary, Savings};
pub use rx_system::{rx_operating_cost, RxOperatingCost};

/// 0.5는 양의 방향으로 올리는 반올림 (-2.5 -> -2).
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// 소수점 `digits` 자리 반올림.
pub fn round_to(value: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    round_half_up(value * scale) / scale
}

/// 한 번의 계산 결과. 금액 항목은 생성 시점에 정수로 반올림되어 있고
/// 체적/비율 항목은 반올림하지 않는다.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    /// 연간 가동 시간 [h]
    pub total_hours: f64,
    pub annual_methanol_tons: f64,
    pub annual_methanol_liters: f64,
    pub hourly_methanol_liters: f64,
    /// 연간 분위기 가스 총량 [m³]
    pub total_cracked_gas_volume: f64,
    /// 메탄올 분해분만의 연간 가스량 [m³]
    pub cracked_gas_volume_from_methanol: f64,
    /// 시간당 분위기 가스 [m³/h]
    pub hourly_gas_volume: f64,
    pub nitrogen_annual_volume: f64,

    pub methanol_annual_cost: f64,
    pub nitrogen_annual_cost: f64,
    pub cracking_electricity_annual_cost: f64,
    pub total_current_annual_cost: f64,
    pub current_cost_per_hour: f64,

    /// 시간당 반응용 천연가스 [m³/h]
    pub process_gas_hourly: f64,
    pub rx_reaction_gas_annual: f64,
    pub rx_heating_gas_annual: f64,
    /// 전기 가열 연간 전력량 [kWh] (가열 방식과 무관하게 표시용으로 계산)
    pub rx_heating_electricity_annual: f64,
    /// 운전 전력량 [kWh/년]
    pub rx_electricity_annual: f64,
    pub rx_running_electricity_annual_cost: f64,
    pub rx_heating_electricity_annual_cost: f64,
    /// 운전 + 전기 가열 비용
    pub rx_electricity_annual_cost: f64,
    pub rx_natural_gas_annual_cost: f64,
    pub total_rx_operating_cost: f64,

    pub total_investment: f64,
    pub annual_depreciation: f64,
    pub total_rx_annual_cost: f64,
    pub rx_cost_per_hour: f64,

    pub annual_savings: f64,
    /// 절감률 [%]
    pub savings_rate: f64,
    /// 투자 회수기간 [개월]
    pub payback_period: f64,
}

/// 입력과 계수로 전체 비교 결과를 계산한다.
pub fn compute(inputs: &InputParameters, config: &LogicConfig) -> CalculationResult {
    let total_hours = inputs.total_hours();
    let per_hour = |annual: f64| {
        if total_hours > 0.0 {
            annual / total_hours
        } else {
            0.0
        }
    };

    let methanol = methanol_consumption(inputs.methanol_quantity(), total_hours, config);
    let hourly_gas_volume = hourly_gas_volume(inputs.mode, methanol.hourly_liters, config);
    let total_cracked_gas_volume = hourly_gas_volume * total_hours;

    let current = current_system_cost(inputs, &methanol, total_hours, config);
    let rx = rx_operating_cost(inputs, total_cracked_gas_volume, total_hours, config);
    let investment = investment_summary(inputs);

    let total_rx_annual_cost = rx.total_operating_cost + investment.annual_depreciation;
    let savings = savings(
        current.total_annual_cost,
        total_rx_annual_cost,
        investment.total_investment,
    );

    CalculationResult {
        total_hours,
        annual_methanol_tons: methanol.annual_tons,
        annual_methanol_liters: methanol.annual_liters,
        hourly_methanol_liters: methanol.hourly_liters,
        total_cracked_gas_volume,
        cracked_gas_volume_from_methanol: methanol.annual_liters * config.methanol_crack_coeff,
        hourly_gas_volume,
        nitrogen_annual_volume: current.nitrogen_annual_volume,

        methanol_annual_cost: current.methanol_annual_cost,
        nitrogen_annual_cost: current.nitrogen_annual_cost,
        cracking_electricity_annual_cost: current.cracking_electricity_annual_cost,
        total_current_annual_cost: current.total_annual_cost,
        current_cost_per_hour: current.cost_per_hour,

        process_gas_hourly: rx_system::reaction_gas(hourly_gas_volume, config),
        rx_reaction_gas_annual: rx.reaction_gas_annual,
        rx_heating_gas_annual: rx.heating_gas_annual,
        rx_heating_electricity_annual: inputs.rx_heating_electricity_hourly * total_hours,
        rx_electricity_annual: inputs.rx_electricity_hourly * total_hours,
        rx_running_electricity_annual_cost: rx.running_electricity_annual_cost,
        rx_heating_electricity_annual_cost: rx.heating_electricity_annual_cost,
        rx_electricity_annual_cost: rx.running_electricity_annual_cost
            + rx.heating_electricity_annual_cost,
        rx_natural_gas_annual_cost: rx.natural_gas_annual_cost,
        total_rx_operating_cost: rx.total_operating_cost,

        total_investment: investment.total_investment,
        annual_depreciation: investment.annual_depreciation,
        total_rx_annual_cost,
        rx_cost_per_hour: per_hour(total_rx_annual_cost),

        annual_savings: savings.annual_savings,
        savings_rate: savings.savings_rate,
        payback_period: savings.payback_period,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_values_round_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(2.49), 2.0);
        assert_eq!(round_to(1.005_1, 2), 1.01);
        assert_eq!(round_to(12.34, 1), 12.3);
    }
}
