use serde::{Deserialize, Serialize};

/// 메탄올 밀도가 0일 때 사용하는 값 [kg/L]
pub const FALLBACK_METHANOL_DENSITY: f64 = 0.8;
/// 액체질소 → 기체 환산계수가 0일 때 사용하는 값
pub const FALLBACK_LN2_TO_GAS: f64 = 647.0;

/// 계산에 쓰이는 물리/경험 계수 묶음. 저장할 때마다 버전 끝자리가 1 증가한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogicConfig {
    pub version: String,
    /// 메탄올 1 L 분해 시 발생하는 가스 체적 [m³/L]
    pub methanol_crack_coeff: f64,
    /// 질소-메탄올 환산 총계수. 현재 계산에서는 읽지 않는다.
    pub nm_conversion_coeff: f64,
    /// 순수 메탄올 환기 계수
    pub ventilation_coeff: f64,
    /// Rx 발생로 산출비 (Rx 가스 / 천연가스)
    pub rx_efficiency: f64,
    /// 질소 배합비. 화면 안내용이며 비용 계산에는 쓰지 않는다.
    pub n2_ratio: f64,
    /// 메탄올 밀도 [kg/L]
    pub methanol_density: f64,
    /// 메탄올 분해 전력 [kWh/L]
    pub elec_per_l_methanol: f64,
    /// 액체질소 → 기체질소 환산계수
    #[serde(rename = "ln2ToGasCoeff")]
    pub ln2_to_gas_coeff: f64,
}

impl Default for LogicConfig {
    fn default() -> Self {
        Self {
            version: "1.0.16".to_string(),
            methanol_crack_coeff: 1.67,
            nm_conversion_coeff: 2.77,
            ventilation_coeff: 1.0,
            rx_efficiency: 5.3,
            n2_ratio: 1.1,
            methanol_density: FALLBACK_METHANOL_DENSITY,
            elec_per_l_methanol: 0.7,
            ln2_to_gas_coeff: FALLBACK_LN2_TO_GAS,
        }
    }
}

impl LogicConfig {
    /// 0 이하 밀도는 기본값으로 대체한다.
    pub fn effective_density(&self) -> f64 {
        if self.methanol_density > 0.0 {
            self.methanol_density
        } else {
            FALLBACK_METHANOL_DENSITY
        }
    }

    pub fn effective_ln2_to_gas(&self) -> f64 {
        if self.ln2_to_gas_coeff != 0.0 {
            self.ln2_to_gas_coeff
        } else {
            FALLBACK_LN2_TO_GAS
        }
    }

    /// 버전 문자열의 마지막 숫자 구간을 1 증가시킨 사본을 돌려준다.
    pub fn with_bumped_version(&self) -> Self {
        Self {
            version: bump_version(&self.version),
            ..self.clone()
        }
    }
}

/// "1.0.16" -> "1.0.17". 마지막 구간이 숫자가 아니면 ".1"을 덧붙인다.
pub fn bump_version(version: &str) -> String {
    let trimmed = version.trim();
    if trimmed.is_empty() {
        return "1".to_string();
    }
    match trimmed.rsplit_once('.') {
        Some((head, last)) => match last.parse::<u64>() {
            Ok(n) => format!("{head}.{}", n + 1),
            Err(_) => format!("{trimmed}.1"),
        },
        None => match trimmed.parse::<u64>() {
            Ok(n) => (n + 1).to_string(),
            Err(_) => format!("{trimmed}.1"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bump_last_segment() {
        assert_eq!(bump_version("1.0.16"), "1.0.17");
        assert_eq!(bump_version("2.9"), "2.10");
        assert_eq!(bump_version("7"), "8");
        assert_eq!(bump_version("1.0.beta"), "1.0.beta.1");
        assert_eq!(bump_version(""), "1");
    }

    #[test]
    fn zero_coefficients_use_fallbacks() {
        let cfg = LogicConfig {
            methanol_density: 0.0,
            ln2_to_gas_coeff: 0.0,
            ..Default::default()
        };
        assert_eq!(cfg.effective_density(), 0.8);
        assert_eq!(cfg.effective_ln2_to_gas(), 647.0);
    }

    #[test]
    fn serializes_with_legacy_field_names() {
        let json = serde_json::to_string(&LogicConfig::default()).expect("serialize");
        assert!(json.contains("\"methanolCrackCoeff\":1.67"));
        assert!(json.contains("\"ln2ToGasCoeff\":647.0"));
        assert!(json.contains("\"elecPerLMethanol\":0.7"));
        assert!(json.contains("\"n2Ratio\":1.1"));
    }
}
