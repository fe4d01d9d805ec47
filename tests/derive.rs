use approx::assert_relative_eq;
use atmosphere_cost_analyst::{
    derive::{derive_defaults, DerivationKey, DerivationTracker},
    logic::LogicConfig,
    model::{HeatingType, InputParameters, MethanolInputMode, SystemMode},
    session::Session,
};

#[test]
fn ton_year_change_rederives_nitrogen_and_gas_heating() {
    let mut session = Session::default();
    assert!(session.edit(|i| i.current_methanol_annual_tons = 200.0));
    let inputs = session.inputs();
    assert_relative_eq!(inputs.current_nitrogen_usage, 430.0);
    assert_relative_eq!(inputs.rx_heating_gas_hourly, 3.48);
    // 전기 가열 값은 그대로
    assert_relative_eq!(inputs.rx_heating_electricity_hourly, 17.4);
}

#[test]
fn liter_hour_change_uses_hourly_ratio() {
    let mut session = Session::default();
    session.switch_methanol_input_mode(MethanolInputMode::LiterHour);
    session.edit(|i| i.methanol_hourly_liters = 20.0);
    let inputs = session.inputs();
    assert_relative_eq!(inputs.current_nitrogen_usage, 22.0);
    assert_relative_eq!(inputs.rx_heating_gas_hourly, 2.0);
}

#[test]
fn electric_heating_only_touches_electric_field() {
    let mut session = Session::default();
    session.edit(|i| i.rx_heating_type = HeatingType::Electric);
    let gas_before = session.inputs().rx_heating_gas_hourly;
    session.edit(|i| i.current_methanol_annual_tons = 200.0);
    assert_relative_eq!(session.inputs().rx_heating_electricity_hourly, 34.8);
    assert_relative_eq!(session.inputs().rx_heating_gas_hourly, gas_before);
}

#[test]
fn electric_heating_has_twelve_kw_floor() {
    let mut session = Session::default();
    session.edit(|i| {
        i.mode = SystemMode::PureMethanol;
        i.rx_heating_type = HeatingType::Electric;
    });
    session.switch_methanol_input_mode(MethanolInputMode::LiterHour);
    session.edit(|i| i.methanol_hourly_liters = 10.0);
    assert_relative_eq!(session.inputs().rx_heating_electricity_hourly, 12.0);
}

#[test]
fn pure_methanol_leaves_nitrogen_alone() {
    let mut session = Session::default();
    session.edit(|i| {
        i.mode = SystemMode::PureMethanol;
        i.current_nitrogen_usage = 999.0;
    });
    assert!(session.edit(|i| i.current_methanol_annual_tons = 150.0));
    assert_relative_eq!(session.inputs().current_nitrogen_usage, 999.0);
}

#[test]
fn manual_override_survives_unrelated_edits() {
    let mut session = Session::default();
    session.edit(|i| i.current_methanol_annual_tons = 200.0);
    session.edit(|i| i.current_nitrogen_usage = 300.0);
    assert!(!session.edit(|i| i.natural_gas_price = 4.0));
    assert!(!session.edit(|i| i.mode = SystemMode::PureMethanol));
    assert_relative_eq!(session.inputs().current_nitrogen_usage, 300.0);
}

#[test]
fn input_mode_switch_fires_rule() {
    let mut session = Session::default();
    assert!(session.switch_methanol_input_mode(MethanolInputMode::LiterHour));
    // 100 t/년 -> 17.36 L/h -> 질소 19.1 m³/h
    assert_relative_eq!(session.inputs().current_nitrogen_usage, 19.1);
    assert!(!session.switch_methanol_input_mode(MethanolInputMode::LiterHour));
}

#[test]
fn zero_hours_derives_from_zero_liters() {
    let inputs = InputParameters {
        running_days: 0.0,
        rx_heating_type: HeatingType::Electric,
        ..InputParameters::default()
    };
    let patch = derive_defaults(None, &inputs, &LogicConfig::default()).expect("patch");
    assert_eq!(patch.rx_heating_electricity_hourly, Some(12.0));
    assert_eq!(patch.rx_heating_gas_hourly, None);
    // ton-year 질소는 시간과 무관
    assert_eq!(patch.nitrogen_usage, Some(215.0));
}

#[test]
fn tracker_records_last_key() {
    let mut inputs = InputParameters::default();
    let config = LogicConfig::default();
    let mut tracker = DerivationTracker::new(&inputs);
    assert!(!tracker.sync(&mut inputs, &config));
    inputs.current_methanol_annual_tons = 120.0;
    assert!(tracker.sync(&mut inputs, &config));
    assert_eq!(tracker.last_key(), DerivationKey::of(&inputs));
    assert!(!tracker.sync(&mut inputs, &config));
}

#[test]
fn nitrogen_term_is_rounded_before_heating_suggestion() {
    let inputs = InputParameters {
        methanol_input_mode: MethanolInputMode::LiterHour,
        methanol_hourly_liters: 0.65,
        ..InputParameters::default()
    };
    let patch = derive_defaults(None, &inputs, &LogicConfig::default()).expect("patch");
    // 1.0855 + 0.72 = 1.8055 m³/h -> 0.065 미만
    assert_eq!(patch.rx_heating_gas_hourly, Some(0.06));
    assert_eq!(patch.nitrogen_usage, Some(0.72));
}

#[test]
fn pure_methanol_suggestion_scales_with_ventilation() {
    let config = LogicConfig {
        ventilation_coeff: 1.5,
        ..LogicConfig::default()
    };
    let mut inputs = InputParameters {
        mode: SystemMode::PureMethanol,
        methanol_input_mode: MethanolInputMode::LiterHour,
        methanol_hourly_liters: 20.0,
        ..InputParameters::default()
    };
    // 20 × 1.67 × 1.5 = 50.1 m³/h
    let patch = derive_defaults(None, &inputs, &config).expect("patch");
    assert_relative_eq!(patch.rx_heating_gas_hourly.expect("gas"), 1.8);
    assert_eq!(patch.nitrogen_usage, None);

    inputs.rx_heating_type = HeatingType::Electric;
    let patch = derive_defaults(None, &inputs, &config).expect("patch");
    assert_relative_eq!(patch.rx_heating_electricity_hourly.expect("electric"), 18.0);
}
