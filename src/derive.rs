//! 메탄올 소비량이 바뀔 때 질소 사용량과 Rx 가열 수요 권장값을 다시 채워 넣는 규칙.
//!
//! 엔진과 달리 입력값 자체를 고치므로 계산 전에 한 번 실행하는 정규화 단계다.
//! (메탄올 값, 입력 방식) 쌍이 마지막으로 본 값과 같으면 아무것도 하지 않아
//! 사용자가 직접 고친 질소/가열 값을 덮어쓰지 않는다.

use crate::engine::consumption::NITROGEN_TO_VAPOR_RATIO;
use crate::engine::round_to;
use crate::logic::LogicConfig;
use crate::model::{HeatingType, InputParameters, MethanolInputMode, MethanolQuantity, SystemMode};

/// liter-hour 모드 질소 권장값 [m³/h per L/h]
pub const NITROGEN_PER_HOURLY_LITER: f64 = 1.1;
/// ton-year 모드 질소 권장값 [액체 m³ per t]
pub const NITROGEN_PER_ANNUAL_TON: f64 = 2.15;
/// 전기 가열 권장값 [kW per m³/h]
pub const ELECTRIC_HEATING_PER_GAS: f64 = 0.36;
/// 전기 가열 최소 권장값 [kW]
pub const ELECTRIC_HEATING_MIN_KW: f64 = 12.0;
/// 가스 가열 권장값 [m³ 천연가스 per m³/h]
pub const GAS_HEATING_PER_GAS: f64 = 0.036;

/// 변경 감지에 쓰는 복합 키.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivationKey {
    pub methanol_value: f64,
    pub input_mode: MethanolInputMode,
}

impl DerivationKey {
    pub fn of(inputs: &InputParameters) -> Self {
        Self {
            methanol_value: inputs.methanol_quantity().value(),
            input_mode: inputs.methanol_input_mode,
        }
    }
}

/// 규칙이 덮어쓸 필드들. `None`은 건드리지 않는다는 뜻.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedPatch {
    pub key: DerivationKey,
    pub nitrogen_usage: Option<f64>,
    pub rx_heating_gas_hourly: Option<f64>,
    pub rx_heating_electricity_hourly: Option<f64>,
}

impl DerivedPatch {
    pub fn apply(&self, inputs: &mut InputParameters) {
        if let Some(v) = self.nitrogen_usage {
            inputs.current_nitrogen_usage = v;
        }
        if let Some(v) = self.rx_heating_gas_hourly {
            inputs.rx_heating_gas_hourly = v;
        }
        if let Some(v) = self.rx_heating_electricity_hourly {
            inputs.rx_heating_electricity_hourly = v;
        }
    }
}

/// 권장 전기 가열 전력 [kW], 소수 1자리.
pub fn suggested_electric_heating(gas_volume: f64) -> f64 {
    round_to(
        (gas_volume * ELECTRIC_HEATING_PER_GAS).max(ELECTRIC_HEATING_MIN_KW),
        1,
    )
}

/// 권장 가스 가열량 [m³/h], 소수 2자리.
pub fn suggested_gas_heating(gas_volume: f64) -> f64 {
    round_to(gas_volume * GAS_HEATING_PER_GAS, 2)
}

/// 키가 바뀌었으면 새 권장값 패치를, 그대로면 `None`을 돌려준다.
pub fn derive_defaults(
    prev: Option<DerivationKey>,
    inputs: &InputParameters,
    config: &LogicConfig,
) -> Option<DerivedPatch> {
    let key = DerivationKey::of(inputs);
    if prev == Some(key) {
        return None;
    }

    let total_hours = inputs.total_hours();
    let (hourly_liters, nitrogen) = match inputs.methanol_quantity() {
        MethanolQuantity::HourlyLiters(liters) => (liters, liters * NITROGEN_PER_HOURLY_LITER),
        MethanolQuantity::AnnualTons(tons) => {
            let liters = if total_hours > 0.0 {
                tons * 1000.0 / config.effective_density() / total_hours
            } else {
                0.0
            };
            (liters, tons * NITROGEN_PER_ANNUAL_TON)
        }
    };

    let vapor = hourly_liters * config.methanol_crack_coeff;
    let gas_volume = match inputs.mode {
        // 권장값 산출에서는 질소분을 소수 2자리로 먼저 맞춘다
        SystemMode::NitrogenMethanol => vapor + round_to(vapor * NITROGEN_TO_VAPOR_RATIO, 2),
        SystemMode::PureMethanol => vapor * config.ventilation_coeff,
    };

    let nitrogen_usage = match inputs.mode {
        SystemMode::NitrogenMethanol => Some(round_to(nitrogen, 2)),
        SystemMode::PureMethanol => None,
    };
    let (rx_heating_gas_hourly, rx_heating_electricity_hourly) = match inputs.rx_heating_type {
        HeatingType::Gas => (Some(suggested_gas_heating(gas_volume)), None),
        HeatingType::Electric => (None, Some(suggested_electric_heating(gas_volume))),
    };

    Some(DerivedPatch {
        key,
        nitrogen_usage,
        rx_heating_gas_hourly,
        rx_heating_electricity_hourly,
    })
}

/// 마지막으로 본 키를 들고 있다가 바뀐 경우에만 규칙을 적용한다.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivationTracker {
    last: DerivationKey,
}

impl DerivationTracker {
    /// 현재 입력을 이미 반영된 상태로 보고 추적을 시작한다.
    pub fn new(inputs: &InputParameters) -> Self {
        Self {
            last: DerivationKey::of(inputs),
        }
    }

    pub fn last_key(&self) -> DerivationKey {
        self.last
    }

    /// 규칙이 실행되었으면 true.
    pub fn sync(&mut self, inputs: &mut InputParameters, config: &LogicConfig) -> bool {
        match derive_defaults(Some(self.last), inputs, config) {
            Some(patch) => {
                patch.apply(inputs);
                tracing::debug!(
                    methanol = patch.key.methanol_value,
                    mode = ?patch.key.input_mode,
                    nitrogen = ?patch.nitrogen_usage,
                    heating_gas = ?patch.rx_heating_gas_hourly,
                    heating_electric = ?patch.rx_heating_electricity_hourly,
                    "derived defaults applied"
                );
                self.last = patch.key;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchanged_key_yields_no_patch() {
        let inputs = InputParameters::default();
        let key = DerivationKey::of(&inputs);
        assert!(derive_defaults(Some(key), &inputs, &LogicConfig::default()).is_none());
        assert!(derive_defaults(None, &inputs, &LogicConfig::default()).is_some());
    }

    #[test]
    fn electric_heating_has_floor() {
        assert_eq!(suggested_electric_heating(0.0), 12.0);
        assert_eq!(suggested_electric_heating(100.0), 36.0);
        assert_eq!(suggested_gas_heating(100.0), 3.6);
    }
}
