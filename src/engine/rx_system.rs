use super::round_half_up;
use crate::logic::LogicConfig;
use crate::model::{InputParameters, RxHeating};

/// Rx 발생로 운전비 (감가상각 제외).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RxOperatingCost {
    /// 반응용 천연가스 [m³/년]
    pub reaction_gas_annual: f64,
    /// 가열용 천연가스 [m³/년] (전기 가열이면 0)
    pub heating_gas_annual: f64,
    pub natural_gas_annual_cost: f64,
    pub running_electricity_annual_cost: f64,
    /// 전기 가열 비용 (가스 가열이면 0)
    pub heating_electricity_annual_cost: f64,
    pub total_operating_cost: f64,
}

/// 분위기 가스 체적을 Rx 산출비로 나눠 천연가스 소요량을 구한다. 산출비가 0이면 0.
pub fn reaction_gas(gas_volume: f64, config: &LogicConfig) -> f64 {
    if config.rx_efficiency != 0.0 {
        gas_volume / config.rx_efficiency
    } else {
        0.0
    }
}

/// 연간 분위기 가스 총량을 대체하는 데 드는 Rx 운전비를 계산한다.
pub fn rx_operating_cost(
    inputs: &InputParameters,
    total_cracked_gas_volume: f64,
    total_hours: f64,
    config: &LogicConfig,
) -> RxOperatingCost {
    let reaction_gas_annual = reaction_gas(total_cracked_gas_volume, config);

    let (heating_gas_annual, heating_electricity_annual_cost) = match inputs.rx_heating() {
        RxHeating::Gas(hourly) => (hourly * total_hours, 0.0),
        RxHeating::Electric(kw) => (
            0.0,
            round_half_up(kw * total_hours * inputs.electricity_price),
        ),
    };

    let natural_gas_annual_cost =
        round_half_up((reaction_gas_annual + heating_gas_annual) * inputs.natural_gas_price);
    let running_electricity_annual_cost =
        round_half_up(inputs.rx_electricity_hourly * total_hours * inputs.electricity_price);

    RxOperatingCost {
        reaction_gas_annual,
        heating_gas_annual,
        natural_gas_annual_cost,
        running_electricity_annual_cost,
        heating_electricity_annual_cost,
        total_operating_cost: natural_gas_annual_cost
            + running_electricity_annual_cost
            + heating_electricity_annual_cost,
    }
}
