use approx::assert_relative_eq;
use atmosphere_cost_analyst::{
    engine::compute,
    logic::LogicConfig,
    model::{EquipmentItem, HeatingType, InputParameters, MethanolInputMode, SystemMode},
};

fn scenarios() -> Vec<InputParameters> {
    let base = InputParameters::default();
    let mut liter_hour = base.clone();
    liter_hour.methanol_input_mode = MethanolInputMode::LiterHour;
    liter_hour.current_nitrogen_usage = 22.0;
    let mut pure = base.clone();
    pure.mode = SystemMode::PureMethanol;
    let mut electric = base.clone();
    electric.rx_heating_type = HeatingType::Electric;
    electric.include_depreciation = true;
    let mut idle = base.clone();
    idle.current_methanol_annual_tons = 0.0;
    idle.current_nitrogen_usage = 0.0;
    vec![base, liter_hour, pure, electric, idle]
}

#[test]
fn ton_year_volumes_follow_density() {
    let inputs = InputParameters {
        running_days: 300.0,
        running_hours: 20.0,
        methanol_input_mode: MethanolInputMode::TonYear,
        current_methanol_annual_tons: 100.0,
        ..InputParameters::default()
    };
    let res = compute(&inputs, &LogicConfig::default());
    assert_relative_eq!(res.total_hours, 6000.0);
    assert_relative_eq!(res.annual_methanol_liters, 125_000.0, max_relative = 1e-12);
    assert_relative_eq!(res.hourly_methanol_liters, 20.83, epsilon = 0.01);
}

#[test]
fn pure_methanol_gas_volume_uses_ventilation() {
    let inputs = InputParameters {
        mode: SystemMode::PureMethanol,
        methanol_input_mode: MethanolInputMode::LiterHour,
        methanol_hourly_liters: 10.0,
        ..InputParameters::default()
    };
    let res = compute(&inputs, &LogicConfig::default());
    assert_relative_eq!(res.hourly_gas_volume, 16.7, max_relative = 1e-12);
    assert_eq!(res.nitrogen_annual_cost, 0.0);
}

#[test]
fn nitrogen_methanol_gas_adds_four_sixths_nitrogen() {
    let inputs = InputParameters {
        methanol_input_mode: MethanolInputMode::LiterHour,
        methanol_hourly_liters: 20.0,
        ..InputParameters::default()
    };
    let res = compute(&inputs, &LogicConfig::default());
    let vapor = 20.0 * 1.67;
    assert_relative_eq!(res.hourly_gas_volume, vapor * 10.0 / 6.0, max_relative = 1e-12);
    assert_relative_eq!(
        res.process_gas_hourly,
        res.hourly_gas_volume / 5.3,
        max_relative = 1e-12
    );
}

#[test]
fn nitrogen_cost_converts_liquid_only_in_ton_year() {
    let config = LogicConfig::default();
    let ton_year = InputParameters {
        current_nitrogen_usage: 215.0,
        nitrogen_price_per_ton: 0.8,
        ..InputParameters::default()
    };
    assert_eq!(compute(&ton_year, &config).nitrogen_annual_cost, 111_284.0);

    let liter_hour = InputParameters {
        methanol_input_mode: MethanolInputMode::LiterHour,
        current_nitrogen_usage: 22.0,
        nitrogen_price_per_ton: 0.8,
        ..InputParameters::default()
    };
    let res = compute(&liter_hour, &config);
    assert_relative_eq!(res.nitrogen_annual_volume, 22.0 * 7200.0);
    assert_eq!(res.nitrogen_annual_cost, 126_720.0);
}

#[test]
fn zero_ln2_coefficient_falls_back() {
    let inputs = InputParameters::default();
    let config = LogicConfig {
        ln2_to_gas_coeff: 0.0,
        ..LogicConfig::default()
    };
    assert_eq!(
        compute(&inputs, &config).nitrogen_annual_cost,
        compute(&inputs, &LogicConfig::default()).nitrogen_annual_cost
    );
}

#[test]
fn zero_density_falls_back() {
    let inputs = InputParameters::default();
    let config = LogicConfig {
        methanol_density: 0.0,
        ..LogicConfig::default()
    };
    let res = compute(&inputs, &config);
    assert_relative_eq!(res.annual_methanol_liters, 125_000.0, max_relative = 1e-12);
}

#[test]
fn totals_are_sums_of_rounded_parts() {
    let config = LogicConfig::default();
    for inputs in scenarios() {
        let res = compute(&inputs, &config);
        assert_eq!(
            res.total_current_annual_cost,
            res.methanol_annual_cost + res.nitrogen_annual_cost + res.cracking_electricity_annual_cost
        );
        assert_eq!(
            res.total_rx_operating_cost,
            res.rx_natural_gas_annual_cost
                + res.rx_running_electricity_annual_cost
                + res.rx_heating_electricity_annual_cost
        );
        assert_eq!(
            res.total_rx_annual_cost,
            res.total_rx_operating_cost + res.annual_depreciation
        );
        assert_eq!(
            res.annual_savings,
            res.total_current_annual_cost - res.total_rx_annual_cost
        );
        for money in [
            res.methanol_annual_cost,
            res.nitrogen_annual_cost,
            res.cracking_electricity_annual_cost,
            res.rx_natural_gas_annual_cost,
            res.rx_running_electricity_annual_cost,
            res.rx_heating_electricity_annual_cost,
            res.annual_depreciation,
        ] {
            assert_eq!(money, money.round(), "not rounded: {money}");
        }
    }
}

#[test]
fn heating_branch_selects_gas_or_electricity() {
    let config = LogicConfig::default();
    let gas = InputParameters::default();
    let res = compute(&gas, &config);
    assert_relative_eq!(res.rx_heating_gas_annual, 1.74 * 7200.0, max_relative = 1e-12);
    assert_eq!(res.rx_heating_electricity_annual_cost, 0.0);

    let electric = InputParameters {
        rx_heating_type: HeatingType::Electric,
        ..InputParameters::default()
    };
    let res = compute(&electric, &config);
    assert_eq!(res.rx_heating_gas_annual, 0.0);
    assert_eq!(res.rx_heating_electricity_annual_cost, 100_224.0);
}

#[test]
fn zero_hours_never_divides() {
    let inputs = InputParameters {
        running_days: 0.0,
        ..InputParameters::default()
    };
    let res = compute(&inputs, &LogicConfig::default());
    assert_eq!(res.total_hours, 0.0);
    assert_eq!(res.current_cost_per_hour, 0.0);
    assert_eq!(res.rx_cost_per_hour, 0.0);
    assert_eq!(res.hourly_methanol_liters, 0.0);
    let json = serde_json::to_value(&res).expect("serialize");
    for (name, value) in json.as_object().expect("object") {
        let v = value.as_f64().expect("number");
        assert!(v.is_finite(), "{name} = {v}");
    }
}

#[test]
fn zero_rx_efficiency_means_no_reaction_gas() {
    let config = LogicConfig {
        rx_efficiency: 0.0,
        ..LogicConfig::default()
    };
    let res = compute(&InputParameters::default(), &config);
    assert_eq!(res.process_gas_hourly, 0.0);
    assert_eq!(res.rx_reaction_gas_annual, 0.0);
    assert!(res.total_rx_annual_cost.is_finite());
}

#[test]
fn depreciation_only_when_included() {
    let mut inputs = InputParameters {
        depreciation_life: 3,
        ..InputParameters::default()
    };
    let config = LogicConfig::default();
    assert_eq!(compute(&inputs, &config).annual_depreciation, 0.0);

    inputs.include_depreciation = true;
    inputs.depreciation_life = 10;
    let res = compute(&inputs, &config);
    assert_eq!(res.total_investment, 380_000.0);
    assert_eq!(res.annual_depreciation, 38_000.0);

    inputs.depreciation_life = 0;
    assert_eq!(compute(&inputs, &config).annual_depreciation, 0.0);
}

#[test]
fn investment_total_sums_items() {
    let inputs = InputParameters {
        investment_items: vec![
            EquipmentItem {
                model: "RX-80".into(),
                quantity: 2,
                unit_price: 1000.0,
            },
            EquipmentItem {
                model: "RX-30".into(),
                quantity: 1,
                unit_price: 500.0,
            },
        ],
        ..InputParameters::default()
    };
    assert_eq!(
        compute(&inputs, &LogicConfig::default()).total_investment,
        2500.0
    );
}

#[test]
fn savings_rate_and_payback_guards() {
    let config = LogicConfig::default();
    let idle = InputParameters {
        current_methanol_annual_tons: 0.0,
        current_nitrogen_usage: 0.0,
        ..InputParameters::default()
    };
    let res = compute(&idle, &config);
    assert_eq!(res.total_current_annual_cost, 0.0);
    assert!(res.annual_savings < 0.0);
    assert_eq!(res.savings_rate, 0.0);
    assert_eq!(res.payback_period, 0.0);

    let res = compute(&InputParameters::default(), &config);
    assert!(res.annual_savings > 0.0);
    assert_relative_eq!(
        res.savings_rate,
        res.annual_savings / res.total_current_annual_cost * 100.0
    );
    assert_relative_eq!(
        res.payback_period,
        res.total_investment / res.annual_savings * 12.0
    );
}

#[test]
fn input_mode_round_trip_keeps_tons() {
    let config = LogicConfig::default();
    let mut inputs = InputParameters::default();
    let before = compute(&inputs, &config).annual_methanol_tons;
    inputs.switch_methanol_input_mode(MethanolInputMode::LiterHour, &config);
    assert_relative_eq!(
        compute(&inputs, &config).annual_methanol_tons,
        before,
        max_relative = 1e-12
    );
    inputs.switch_methanol_input_mode(MethanolInputMode::TonYear, &config);
    assert_relative_eq!(inputs.current_methanol_annual_tons, before, max_relative = 1e-12);
}
