use super::round_half_up;
use crate::logic::LogicConfig;
use crate::model::{InputParameters, MethanolInputMode, SystemMode};

use super::consumption::MethanolConsumption;

/// 기존 메탄올/질소 설비의 연간 운전비.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrentSystemCost {
    /// 연간 질소 사용량 (ton-year: 액체 m³, liter-hour: 기체 m³)
    pub nitrogen_annual_volume: f64,
    pub methanol_annual_cost: f64,
    pub nitrogen_annual_cost: f64,
    pub cracking_electricity_annual_cost: f64,
    pub total_annual_cost: f64,
    pub cost_per_hour: f64,
}

/// 연간 질소 사용량. ton-year 모드에서 저장값은 이미 연간 값이고,
/// liter-hour 모드에서는 시간당 값이므로 가동 시간을 곱한다.
pub fn nitrogen_annual_volume(inputs: &InputParameters, total_hours: f64) -> f64 {
    match (inputs.mode, inputs.methanol_input_mode) {
        (SystemMode::PureMethanol, _) => 0.0,
        (SystemMode::NitrogenMethanol, MethanolInputMode::TonYear) => inputs.current_nitrogen_usage,
        (SystemMode::NitrogenMethanol, MethanolInputMode::LiterHour) => {
            inputs.current_nitrogen_usage * total_hours
        }
    }
}

/// 메탄올, 질소, 분해 전력 비용을 각각 반올림해 합산한다.
pub fn current_system_cost(
    inputs: &InputParameters,
    methanol: &MethanolConsumption,
    total_hours: f64,
    config: &LogicConfig,
) -> CurrentSystemCost {
    let nitrogen_annual_volume = nitrogen_annual_volume(inputs, total_hours);

    let methanol_annual_cost = round_half_up(methanol.annual_tons * inputs.methanol_price_per_ton);

    // 액체질소 입력(ton-year)만 기체 환산을 거친다
    let nitrogen_annual_cost = match inputs.methanol_input_mode {
        MethanolInputMode::TonYear => round_half_up(
            nitrogen_annual_volume * config.effective_ln2_to_gas() * inputs.nitrogen_price_per_ton,
        ),
        MethanolInputMode::LiterHour => {
            round_half_up(nitrogen_annual_volume * inputs.nitrogen_price_per_ton)
        }
    };

    let cracking_electricity_annual_cost = round_half_up(
        methanol.annual_liters * config.elec_per_l_methanol * inputs.electricity_price,
    );

    let total_annual_cost =
        methanol_annual_cost + nitrogen_annual_cost + cracking_electricity_annual_cost;
    let cost_per_hour = if total_hours > 0.0 {
        total_annual_cost / total_hours
    } else {
        0.0
    };

    CurrentSystemCost {
        nitrogen_annual_volume,
        methanol_annual_cost,
        nitrogen_annual_cost,
        cracking_electricity_annual_cost,
        total_annual_cost,
        cost_per_hour,
    }
}
