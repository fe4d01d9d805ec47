use super::round_half_up;
use crate::model::InputParameters;

/// 투자비 및 정액 감가상각.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvestmentSummary {
    pub total_investment: f64,
    pub annual_depreciation: f64,
}

/// 총 투자액과 연간 감가상각비를 계산한다.
pub fn investment_summary(inputs: &InputParameters) -> InvestmentSummary {
    let total_investment = round_half_up(inputs.total_investment());
    let annual_depreciation = if inputs.include_depreciation && inputs.depreciation_life > 0 {
        round_half_up(total_investment / f64::from(inputs.depreciation_life))
    } else {
        0.0
    };
    InvestmentSummary {
        total_investment,
        annual_depreciation,
    }
}

/// 절감액, 절감률(%), 투자 회수기간(개월).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Savings {
    pub annual_savings: f64,
    pub savings_rate: f64,
    pub payback_period: f64,
}

pub fn savings(current_total: f64, rx_total: f64, total_investment: f64) -> Savings {
    let annual_savings = current_total - rx_total;
    let savings_rate = if current_total > 0.0 {
        annual_savings / current_total * 100.0
    } else {
        0.0
    };
    let payback_period = if annual_savings > 0.0 {
        total_investment / annual_savings * 12.0
    } else {
        0.0
    };
    Savings {
        annual_savings,
        savings_rate,
        payback_period,
    }
}
