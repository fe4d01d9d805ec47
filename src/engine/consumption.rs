use crate::logic::LogicConfig;
use crate::model::{MethanolQuantity, SystemMode};

/// 메탄올 증기 대비 질소 배합 체적비 (질소 4 : 메탄올 증기 6)
pub const NITROGEN_TO_VAPOR_RATIO: f64 = 4.0 / 6.0;

/// 메탄올 소비량 환산 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MethanolConsumption {
    /// 연간 메탄올 [t/년]
    pub annual_tons: f64,
    /// 연간 메탄올 [L/년]
    pub annual_liters: f64,
    /// 시간당 메탄올 [L/h]
    pub hourly_liters: f64,
}

/// 활성 입력값을 톤/리터/시간당 리터로 모두 환산한다.
pub fn methanol_consumption(
    quantity: MethanolQuantity,
    total_hours: f64,
    config: &LogicConfig,
) -> MethanolConsumption {
    let density = config.effective_density();
    match quantity {
        MethanolQuantity::AnnualTons(annual_tons) => {
            let annual_liters = annual_tons * 1000.0 / density;
            let hourly_liters = if total_hours > 0.0 {
                annual_liters / total_hours
            } else {
                0.0
            };
            MethanolConsumption {
                annual_tons,
                annual_liters,
                hourly_liters,
            }
        }
        MethanolQuantity::HourlyLiters(hourly_liters) => {
            let annual_liters = hourly_liters * total_hours;
            MethanolConsumption {
                annual_tons: annual_liters * density / 1000.0,
                annual_liters,
                hourly_liters,
            }
        }
    }
}

/// 시간당 분위기 가스 발생량 [m³/h].
///
/// 질소-메탄올 방식은 메탄올 증기에 4/6 비율의 질소를 더하고,
/// 순수 메탄올 방식은 증기에 환기 계수를 곱한다.
pub fn hourly_gas_volume(mode: SystemMode, hourly_liters: f64, config: &LogicConfig) -> f64 {
    let vapor = hourly_liters * config.methanol_crack_coeff;
    match mode {
        SystemMode::NitrogenMethanol => vapor + vapor * NITROGEN_TO_VAPOR_RATIO,
        SystemMode::PureMethanol => vapor * config.ventilation_coeff,
    }
}
