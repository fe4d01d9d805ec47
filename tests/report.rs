use atmosphere_cost_analyst::{
    engine::compute,
    i18n::{keys, Translator},
    logic::LogicConfig,
    model::InputParameters,
    report::{chart_bars, comparison_rows, render_text_report},
};

#[test]
fn comparison_rows_match_result() {
    let inputs = InputParameters::default();
    let res = compute(&inputs, &LogicConfig::default());
    let rows = comparison_rows(&inputs, &res);
    assert_eq!(rows.len(), 2);

    let fuel = &rows[0];
    assert_eq!(fuel.label_key, keys::REPORT_FUEL_COST);
    assert_eq!(fuel.current, res.methanol_annual_cost + res.nitrogen_annual_cost);
    assert_eq!(fuel.rx, res.rx_natural_gas_annual_cost);
    assert_eq!(fuel.details.len(), 3);

    let aux = &rows[1];
    assert_eq!(aux.current, res.cracking_electricity_annual_cost);
    assert_eq!(aux.rx, res.rx_electricity_annual_cost);

    let sum_current: f64 = rows.iter().map(|r| r.current).sum();
    let sum_rx: f64 = rows.iter().map(|r| r.rx).sum();
    assert_eq!(sum_current, res.total_current_annual_cost);
    assert_eq!(sum_rx, res.total_rx_annual_cost);
}

#[test]
fn depreciation_row_only_when_included() {
    let inputs = InputParameters {
        include_depreciation: true,
        ..InputParameters::default()
    };
    let res = compute(&inputs, &LogicConfig::default());
    let rows = comparison_rows(&inputs, &res);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[2].label_key, keys::REPORT_DEPRECIATION);
    assert_eq!(rows[2].rx, res.annual_depreciation);
    assert_eq!(rows[2].diff(), -res.annual_depreciation);
}

#[test]
fn chart_uses_annual_totals() {
    let res = compute(&InputParameters::default(), &LogicConfig::default());
    let [current, rx] = chart_bars(&res);
    assert_eq!(current.value, res.total_current_annual_cost);
    assert_eq!(rx.value, res.total_rx_annual_cost);
}

#[test]
fn text_report_mentions_key_figures() {
    let tr = Translator::new("en");
    let inputs = InputParameters {
        include_depreciation: true,
        ..InputParameters::default()
    };
    let logic = LogicConfig::default();
    let res = compute(&inputs, &logic);
    let text = render_text_report(&tr, "¥", &inputs, &logic, &res);
    assert!(text.contains("Unnamed customer"));
    assert!(text.contains("1.0.16"));
    assert!(text.contains("Depreciation"));
    assert!(text.contains("RX-50"));
    assert!(text.ends_with('\n'));
}
