#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::{env, fs, path::Path};
use atmosphere_cost_analyst::{
    app, config,
    i18n::{self, keys, Translator},
    model::{HeatingType, MethanolInputMode, SystemMode, EQUIPMENT_MODELS},
    report,
    session::Session,
    store::JsonFileStore,
};
use tracing_subscriber::EnvFilter;

const CURRENT_COLOR: egui::Color32 = egui::Color32::from_rgb(234, 88, 12);
const RX_COLOR: egui::Color32 = egui::Color32::from_rgb(5, 150, 105);

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/zh/en)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if (a == "--lang" || a == "-L") && i + 1 < args.len() {
            cli_lang = Some(args[i + 1].clone());
            i += 1;
        }
        i += 1;
    }

    let mut viewport = egui::ViewportBuilder::default().with_inner_size([1180.0, 820.0]);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let app_cfg = config::load_or_default().unwrap_or_else(|err| {
        tracing::warn!(%err, "config load failed, using defaults");
        config::Config::default()
    });
    eframe::run_native(
        "PowerMax Atmosphere Analyst",
        options,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                tracing::warn!("font error: {e}");
            }
            Box::new(GuiApp::new(app_cfg.clone(), cli_lang.as_deref()))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 중국어 글리프가 있는 폰트를 찾아 egui에 등록한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    // 1) 프로젝트 내 폰트
    let asset_path = Path::new("assets/fonts/cjk.ttf");
    if asset_path.exists() {
        let bytes = fs::read(asset_path).map_err(|e| format!("Failed to read font file: {e}"))?;
        apply_font_bytes(ctx, bytes, "cjk_font");
        return Ok(());
    }

    // 2) 시스템 폰트 탐색
    let mut candidates: Vec<std::path::PathBuf> = Vec::new();
    if let Some(windir) = env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        for name in ["msyh.ttc", "msyh.ttf", "simhei.ttf", "simsun.ttc"] {
            candidates.push(fonts.join(name));
        }
    }
    for p in [
        "/System/Library/Fonts/PingFang.ttc",
        "/System/Library/Fonts/STHeiti Light.ttc",
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
    ] {
        candidates.push(p.into());
    }
    for p in candidates {
        if p.exists() {
            let bytes = fs::read(&p)
                .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
            apply_font_bytes(ctx, bytes, "cjk_font");
            return Ok(());
        }
    }

    // 3) 실패: 기본 폰트 유지
    Err("CJK font not found; Chinese labels may not render.".into())
}

fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert(name.to_owned(), egui::FontData::from_owned(bytes));
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .insert(0, name.to_owned());
    }
    ctx.set_fonts(fonts);
}

/// 라벨 + 숫자 입력. 값이 바뀌면 새 값을 돌려준다.
fn number_field(ui: &mut egui::Ui, label: &str, value: f64, speed: f64) -> Option<f64> {
    let mut v = value;
    ui.label(label);
    let changed = ui
        .add(
            egui::DragValue::new(&mut v)
                .speed(speed)
                .clamp_range(0.0..=f64::MAX),
        )
        .changed();
    ui.end_row();
    changed.then_some(v)
}

fn metric_box(ui: &mut egui::Ui, label: &str, value: String, color: egui::Color32) {
    ui.group(|ui| {
        ui.vertical(|ui| {
            ui.small(label);
            ui.label(egui::RichText::new(value).size(22.0).strong().color(color));
        });
    });
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    Setup,
    Calculator,
}

struct GuiApp {
    config: config::Config,
    tr: Translator,
    store: JsonFileStore,
    session: Session,
    view: View,
    show_logic_editor: bool,
    expanded_rows: Vec<&'static str>,
    status: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config, cli_lang: Option<&str>) -> Self {
        let lang_code = app::ui_language(&config, cli_lang);
        let tr = Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        tracing::info!(lang = %lang_code, "GUI language resolved");
        let store = JsonFileStore::new(&config.store_path);
        let session = Session::load(&store);
        Self {
            config,
            tr,
            store,
            session,
            view: View::Setup,
            show_logic_editor: false,
            expanded_rows: Vec::new(),
            status: None,
        }
    }

    fn set_language(&mut self, code: &str) {
        self.config.language = code.to_string();
        self.tr = Translator::new_with_pack(code, self.config.language_pack_dir.as_deref());
        if let Err(err) = self.config.save() {
            tracing::warn!(%err, "could not persist language");
        }
    }

    fn ui_setup(&mut self, ui: &mut egui::Ui, tr: &Translator) {
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.heading(tr.t(keys::APP_TITLE));
            ui.label(tr.t(keys::APP_SUBTITLE));
            ui.small(format!(
                "{}: {}",
                tr.t(keys::LOGIC_VERSION),
                self.session.logic().version
            ));
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui
                    .selectable_label(tr.language() == i18n::Language::Zh, "简体中文")
                    .clicked()
                {
                    self.set_language("zh");
                }
                if ui
                    .selectable_label(tr.language() == i18n::Language::En, "English")
                    .clicked()
                {
                    self.set_language("en");
                }
            });
        });
        ui.add_space(16.0);
        ui.heading(tr.t(keys::GUI_SETUP_TITLE));
        egui::Grid::new("setup_grid")
            .num_columns(2)
            .spacing([16.0, 8.0])
            .show(ui, |ui| {
                let mut customer = self.session.inputs().customer_name.clone();
                ui.label(tr.t(keys::FIELD_CUSTOMER));
                if ui.text_edit_singleline(&mut customer).changed() {
                    self.session.edit(|i| i.customer_name = customer);
                }
                ui.end_row();
                let mut project = self.session.inputs().project_name.clone();
                ui.label(tr.t(keys::FIELD_PROJECT));
                if ui.text_edit_singleline(&mut project).changed() {
                    self.session.edit(|i| i.project_name = project);
                }
                ui.end_row();

                let inputs = self.session.inputs().clone();
                if let Some(v) = number_field(ui, tr.t(keys::FIELD_DAYS), inputs.running_days, 1.0) {
                    self.session.edit(|i| i.running_days = v);
                }
                if let Some(v) = number_field(ui, tr.t(keys::FIELD_HOURS), inputs.running_hours, 0.5) {
                    self.session.edit(|i| i.running_hours = v);
                }
                if let Some(v) =
                    number_field(ui, tr.t(keys::FIELD_NG_PRICE), inputs.natural_gas_price, 0.01)
                {
                    self.session.edit(|i| i.natural_gas_price = v);
                }
                if let Some(v) =
                    number_field(ui, tr.t(keys::FIELD_ELEC_PRICE), inputs.electricity_price, 0.01)
                {
                    self.session.edit(|i| i.electricity_price = v);
                }
                if let Some(v) = number_field(
                    ui,
                    tr.t(keys::FIELD_METH_PRICE),
                    inputs.methanol_price_per_ton,
                    10.0,
                ) {
                    self.session.edit(|i| i.methanol_price_per_ton = v);
                }
                if let Some(v) = number_field(
                    ui,
                    tr.t(keys::FIELD_N2_PRICE),
                    inputs.nitrogen_price_per_ton,
                    0.01,
                ) {
                    self.session.edit(|i| i.nitrogen_price_per_ton = v);
                }
            });
        ui.add_space(16.0);
        if ui.button(tr.t(keys::GUI_START)).clicked() {
            self.view = View::Calculator;
        }
    }

    fn ui_current_system(&mut self, ui: &mut egui::Ui, tr: &Translator) {
        let inputs = self.session.inputs().clone();
        let mode_label = |mode: SystemMode| match mode {
            SystemMode::NitrogenMethanol => tr.t(keys::MODE_NM),
            SystemMode::PureMethanol => tr.t(keys::MODE_PM),
        };
        ui.heading(format!(
            "{} ({})",
            tr.t(keys::REPORT_CURRENT_SYSTEM),
            mode_label(inputs.mode)
        ));
        egui::Grid::new("current_grid")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                let mut mode = inputs.mode;
                ui.label(tr.t(keys::FIELD_MODE));
                egui::ComboBox::from_id_source("mode_combo")
                    .selected_text(mode_label(mode))
                    .show_ui(ui, |ui| {
                        for m in [SystemMode::NitrogenMethanol, SystemMode::PureMethanol] {
                            ui.selectable_value(&mut mode, m, mode_label(m));
                        }
                    });
                ui.end_row();
                if mode != inputs.mode {
                    self.session.edit(|i| i.mode = mode);
                }

                let mut input_mode = inputs.methanol_input_mode;
                let input_mode_label = |m: MethanolInputMode| match m {
                    MethanolInputMode::TonYear => tr.t(keys::INPUT_MODE_TON),
                    MethanolInputMode::LiterHour => tr.t(keys::INPUT_MODE_LITER),
                };
                ui.label(tr.t(keys::FIELD_INPUT_MODE));
                egui::ComboBox::from_id_source("input_mode_combo")
                    .selected_text(input_mode_label(input_mode))
                    .show_ui(ui, |ui| {
                        for m in [MethanolInputMode::TonYear, MethanolInputMode::LiterHour] {
                            ui.selectable_value(&mut input_mode, m, input_mode_label(m));
                        }
                    });
                ui.end_row();
                if input_mode != inputs.methanol_input_mode {
                    self.session.switch_methanol_input_mode(input_mode);
                }

                let inputs = self.session.inputs().clone();
                match inputs.methanol_input_mode {
                    MethanolInputMode::TonYear => {
                        if let Some(v) = number_field(
                            ui,
                            tr.t(keys::FIELD_METH_TONS),
                            inputs.current_methanol_annual_tons,
                            1.0,
                        ) {
                            self.session.edit(|i| i.current_methanol_annual_tons = v);
                        }
                    }
                    MethanolInputMode::LiterHour => {
                        if let Some(v) = number_field(
                            ui,
                            tr.t(keys::FIELD_METH_HOURLY),
                            inputs.methanol_hourly_liters,
                            0.1,
                        ) {
                            self.session.edit(|i| i.methanol_hourly_liters = v);
                        }
                    }
                }

                if inputs.mode == SystemMode::NitrogenMethanol {
                    let label = match inputs.methanol_input_mode {
                        MethanolInputMode::TonYear => tr.t(keys::FIELD_N2_ANNUAL),
                        MethanolInputMode::LiterHour => tr.t(keys::FIELD_N2_HOURLY),
                    };
                    let weight = report::nitrogen_annual_weight(&inputs, inputs.total_hours());
                    let mut v = inputs.current_nitrogen_usage;
                    ui.label(label);
                    let resp = ui
                        .add(egui::DragValue::new(&mut v).speed(0.1).clamp_range(0.0..=f64::MAX))
                        .on_hover_text(format!(
                            "{} {weight:.2} {}",
                            tr.t(keys::REPORT_N2_WEIGHT),
                            tr.t(keys::REPORT_WEIGHT_UNIT)
                        ));
                    ui.end_row();
                    if resp.changed() {
                        self.session.edit(|i| i.current_nitrogen_usage = v);
                    }
                }
            });
    }

    fn ui_rx_system(&mut self, ui: &mut egui::Ui, tr: &Translator) {
        let result = self.session.result();
        let inputs = self.session.inputs().clone();
        ui.heading(tr.t(keys::REPORT_RX_SYSTEM));
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(format!(
                    "{}: {:.1} m³/h",
                    tr.t(keys::REPORT_HOURLY_GAS),
                    result.hourly_gas_volume
                ))
                .strong()
                .color(RX_COLOR),
            );
            ui.separator();
            ui.label(format!(
                "{}: {:.2} m³/h",
                tr.t(keys::REPORT_PROCESS_NG),
                result.process_gas_hourly
            ));
        });
        let mut heating = inputs.rx_heating_type;
        ui.horizontal(|ui| {
            ui.selectable_value(&mut heating, HeatingType::Gas, tr.t(keys::HEATING_GAS));
            ui.selectable_value(&mut heating, HeatingType::Electric, tr.t(keys::HEATING_ELEC));
        });
        if heating != inputs.rx_heating_type {
            self.session.edit(|i| i.rx_heating_type = heating);
        }
        egui::Grid::new("rx_grid")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                let inputs = self.session.inputs().clone();
                match inputs.rx_heating_type {
                    HeatingType::Gas => {
                        if let Some(v) = number_field(
                            ui,
                            tr.t(keys::FIELD_HEATING_GAS),
                            inputs.rx_heating_gas_hourly,
                            0.01,
                        ) {
                            self.session.edit(|i| i.rx_heating_gas_hourly = v);
                        }
                    }
                    HeatingType::Electric => {
                        if let Some(v) = number_field(
                            ui,
                            tr.t(keys::FIELD_HEATING_ELEC),
                            inputs.rx_heating_electricity_hourly,
                            0.1,
                        ) {
                            self.session.edit(|i| i.rx_heating_electricity_hourly = v);
                        }
                    }
                }
                if let Some(v) =
                    number_field(ui, tr.t(keys::FIELD_RX_ELEC), inputs.rx_electricity_hourly, 0.1)
                {
                    self.session.edit(|i| i.rx_electricity_hourly = v);
                }
            });
    }

    fn ui_investment(&mut self, ui: &mut egui::Ui, tr: &Translator) {
        let inputs = self.session.inputs().clone();
        ui.collapsing(tr.t(keys::INVESTMENT_HEADING).trim(), |ui| {
            ui.horizontal(|ui| {
                let mut include = inputs.include_depreciation;
                if ui
                    .checkbox(&mut include, tr.t(keys::FIELD_INCLUDE_DEPRECIATION))
                    .changed()
                {
                    self.session.edit(|i| i.include_depreciation = include);
                }
                if include {
                    let mut life = inputs.depreciation_life;
                    ui.label(tr.t(keys::FIELD_DEPRECIATION_LIFE));
                    if ui
                        .add(egui::DragValue::new(&mut life).clamp_range(0..=100))
                        .changed()
                    {
                        self.session.edit(|i| i.depreciation_life = life);
                    }
                }
            });
            let mut remove: Option<usize> = None;
            egui::Grid::new("investment_grid")
                .num_columns(4)
                .striped(true)
                .show(ui, |ui| {
                    ui.strong(tr.t(keys::FIELD_MODEL));
                    ui.strong(tr.t(keys::FIELD_QUANTITY));
                    ui.strong(tr.t(keys::FIELD_UNIT_PRICE));
                    ui.label("");
                    ui.end_row();
                    for (idx, item) in inputs.investment_items.iter().enumerate() {
                        let mut edited = item.clone();
                        egui::ComboBox::from_id_source(("model_combo", idx))
                            .selected_text(edited.model.clone())
                            .show_ui(ui, |ui| {
                                for m in EQUIPMENT_MODELS {
                                    ui.selectable_value(&mut edited.model, m.to_string(), m);
                                }
                            });
                        ui.add(egui::DragValue::new(&mut edited.quantity).clamp_range(0..=u32::MAX));
                        ui.add(
                            egui::DragValue::new(&mut edited.unit_price)
                                .speed(100.0)
                                .clamp_range(0.0..=f64::MAX),
                        );
                        if ui.small_button("✖").clicked() {
                            remove = Some(idx);
                        }
                        ui.end_row();
                        if &edited != item {
                            self.session.edit(|i| {
                                if let Some(target) = i.investment_items.get_mut(idx) {
                                    *target = edited;
                                }
                            });
                        }
                    }
                });
            if let Some(idx) = remove {
                self.session.edit(|i| i.remove_investment_item(idx));
            }
            if ui.button(format!("+ {}", tr.t(keys::INVESTMENT_ADD))).clicked() {
                self.session.edit(|i| i.add_investment_item());
            }
        });
    }

    fn ui_comparison(&mut self, ui: &mut egui::Ui, tr: &Translator) {
        let result = self.session.result();
        let currency = self.config.currency_symbol.clone();
        let rows = report::comparison_rows(self.session.inputs(), &result);
        egui::Grid::new("comparison_grid")
            .num_columns(4)
            .striped(true)
            .spacing([24.0, 6.0])
            .show(ui, |ui| {
                ui.strong(tr.t(keys::REPORT_ITEM));
                ui.strong(tr.t(keys::REPORT_CURRENT));
                ui.strong(tr.t(keys::REPORT_RX));
                ui.strong(tr.t(keys::REPORT_DIFF));
                ui.end_row();
                for row in &rows {
                    let expanded = self.expanded_rows.contains(&row.label_key);
                    let label = if row.details.is_empty() {
                        tr.t(row.label_key).to_string()
                    } else if expanded {
                        format!("▾ {}", tr.t(row.label_key))
                    } else {
                        format!("▸ {}", tr.t(row.label_key))
                    };
                    if ui.selectable_label(false, label).clicked() && !row.details.is_empty() {
                        if expanded {
                            self.expanded_rows.retain(|k| *k != row.label_key);
                        } else {
                            self.expanded_rows.push(row.label_key);
                        }
                    }
                    comparison_cells(ui, &currency, row);
                    if expanded {
                        for detail in &row.details {
                            ui.small(format!("    {}", tr.t(detail.label_key)));
                            comparison_cells(ui, &currency, detail);
                        }
                    }
                }
                ui.strong(tr.t(keys::REPORT_ANNUAL_COST));
                ui.strong(report::format_money(&currency, result.total_current_annual_cost));
                ui.strong(report::format_money(&currency, result.total_rx_annual_cost));
                ui.strong(report::format_rate_diff(result.savings_rate));
                ui.end_row();
            });

        ui.add_space(12.0);
        ui.label(tr.t(keys::REPORT_CHART));
        draw_bar_chart(ui, tr, &result);
    }

    fn ui_logic_editor(&mut self, ctx: &egui::Context, tr: &Translator) {
        let mut open = self.show_logic_editor;
        let mut save = false;
        let mut reset = false;
        let mode = self.session.inputs().mode;
        egui::Window::new(tr.t(keys::LOGIC_HEADING).trim())
            .collapsible(false)
            .resizable(true)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.small(format!(
                    "{}: {}",
                    tr.t(keys::LOGIC_VERSION),
                    self.session.logic().version
                ));
                let mut logic = self.session.logic().clone();
                egui::Grid::new("logic_grid")
                    .num_columns(2)
                    .spacing([12.0, 6.0])
                    .show(ui, |ui| {
                        let field = |ui: &mut egui::Ui, key: &str, v: &mut f64| {
                            if let Some(n) = number_field(ui, tr.t(key), *v, 0.01) {
                                *v = n;
                            }
                        };
                        field(ui, keys::LOGIC_CRACK, &mut logic.methanol_crack_coeff);
                        match mode {
                            SystemMode::NitrogenMethanol => {
                                field(ui, keys::LOGIC_NM, &mut logic.nm_conversion_coeff)
                            }
                            SystemMode::PureMethanol => {
                                field(ui, keys::LOGIC_VENT, &mut logic.ventilation_coeff)
                            }
                        }
                        field(ui, keys::LOGIC_RX_EFF, &mut logic.rx_efficiency);
                        field(ui, keys::LOGIC_N2_RATIO, &mut logic.n2_ratio);
                        field(ui, keys::LOGIC_DENSITY, &mut logic.methanol_density);
                        field(ui, keys::LOGIC_ELEC_PER_L, &mut logic.elec_per_l_methanol);
                        field(ui, keys::LOGIC_LN2, &mut logic.ln2_to_gas_coeff);
                    });
                ui.small(match mode {
                    SystemMode::NitrogenMethanol => tr.t(keys::LOGIC_NM_HINT),
                    SystemMode::PureMethanol => tr.t(keys::LOGIC_VENT_HINT),
                });
                if &logic != self.session.logic() {
                    *self.session.logic_mut() = logic;
                }
                ui.horizontal(|ui| {
                    save = ui.button(tr.t(keys::LOGIC_SAVE)).clicked();
                    reset = ui.button(tr.t(keys::LOGIC_RESET)).clicked();
                });
            });
        if reset {
            self.session.reset_logic();
            self.status = Some(tr.t(keys::LOGIC_RESET_DONE).to_string());
        }
        if save {
            match self.session.save_logic(&mut self.store) {
                Ok(saved) => {
                    self.status = Some(format!("{} {}", tr.t(keys::LOGIC_SAVED), saved.version));
                    open = false;
                }
                Err(err) => {
                    tracing::error!(%err, "logic save failed");
                    self.status = Some(format!("{} {err}", tr.t(keys::ERROR_PREFIX)));
                }
            }
        }
        self.show_logic_editor = open;
    }

    fn export(&mut self, tr: &Translator) {
        let file_name = if self.session.inputs().customer_name.trim().is_empty() {
            "rx_cost_report.txt".to_string()
        } else {
            format!("{}_rx_cost_report.txt", self.session.inputs().customer_name.trim())
        };
        let Some(path) = FileDialog::new()
            .set_file_name(file_name.as_str())
            .add_filter("Text", &["txt"])
            .save_file()
        else {
            return;
        };
        self.status = Some(match app::export_report(&path, tr, &self.config, &self.session) {
            Ok(()) => format!("{} {}", tr.t(keys::EXPORT_DONE), path.display()),
            Err(err) => format!("{} {err}", tr.t(keys::ERROR_PREFIX)),
        });
    }
}

fn comparison_cells(ui: &mut egui::Ui, currency: &str, row: &report::ComparisonRow) {
    ui.label(report::format_money(currency, row.current));
    ui.label(report::format_money(currency, row.rx));
    let diff = row.diff();
    let color = if diff >= 0.0 {
        RX_COLOR
    } else {
        egui::Color32::from_rgb(220, 38, 38)
    };
    ui.label(egui::RichText::new(report::format_diff(currency, diff)).color(color));
    ui.end_row();
}

/// 현 설비 / Rx 연간 총비용 막대그래프.
fn draw_bar_chart(ui: &mut egui::Ui, tr: &Translator, result: &atmosphere_cost_analyst::engine::CalculationResult) {
    let bars = report::chart_bars(result);
    let (rect, _) = ui.allocate_exact_size(egui::vec2(320.0, 220.0), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    let max = bars.iter().map(|b| b.value).fold(0.0_f64, f64::max);
    let label_h = 20.0;
    let usable_h = rect.height() - label_h * 2.0;
    let slot_w = rect.width() / bars.len() as f32;
    for (idx, (bar, color)) in bars.iter().zip([CURRENT_COLOR, RX_COLOR]).enumerate() {
        let ratio = if max > 0.0 { (bar.value.max(0.0) / max) as f32 } else { 0.0 };
        let h = usable_h * ratio;
        let center_x = rect.left() + slot_w * (idx as f32 + 0.5);
        let bottom = rect.bottom() - label_h;
        let bar_rect = egui::Rect::from_min_max(
            egui::pos2(center_x - 40.0, bottom - h),
            egui::pos2(center_x + 40.0, bottom),
        );
        painter.rect_filled(bar_rect, 8.0, color);
        painter.text(
            egui::pos2(center_x, bottom - h - 2.0),
            egui::Align2::CENTER_BOTTOM,
            report::group_thousands(bar.value),
            egui::FontId::proportional(12.0),
            ui.visuals().text_color(),
        );
        painter.text(
            egui::pos2(center_x, rect.bottom()),
            egui::Align2::CENTER_BOTTOM,
            tr.t(bar.label_key),
            egui::FontId::proportional(13.0),
            ui.visuals().strong_text_color(),
        );
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let tr = self.tr.clone();

        if self.view == View::Setup {
            egui::CentralPanel::default().show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| self.ui_setup(ui, &tr));
            });
            return;
        }

        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button(format!("← {}", tr.t(keys::GUI_BACK))).clicked() {
                    self.view = View::Setup;
                }
                ui.heading(tr.t(keys::APP_TITLE));
                ui.separator();
                let inputs = self.session.inputs();
                let customer = if inputs.customer_name.trim().is_empty() {
                    tr.t(keys::UNNAMED_CUSTOMER).to_string()
                } else {
                    inputs.customer_name.clone()
                };
                let project = if inputs.project_name.trim().is_empty() {
                    tr.t(keys::UNNAMED_PROJECT).to_string()
                } else {
                    inputs.project_name.clone()
                };
                ui.label(format!("{customer} / {project}"));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(tr.t(keys::EXPORT_BUTTON)).clicked() {
                        self.export(&tr);
                    }
                    if ui.button(tr.t(keys::GUI_SOURCE_BUTTON)).clicked() {
                        self.show_logic_editor = true;
                    }
                });
            });
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.small(format!(
                    "{}: {}",
                    tr.t(keys::LOGIC_VERSION),
                    self.session.logic().version
                ));
                if let Some(status) = &self.status {
                    ui.separator();
                    ui.small(status);
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let result = self.session.result();
            let currency = self.config.currency_symbol.clone();
            let strong = ui.visuals().strong_text_color();
            ui.horizontal(|ui| {
                metric_box(
                    ui,
                    tr.t(keys::REPORT_ANNUAL_COST_CURRENT),
                    report::format_money(&currency, result.total_current_annual_cost),
                    CURRENT_COLOR,
                );
                metric_box(
                    ui,
                    tr.t(keys::REPORT_ANNUAL_COST_RX),
                    report::format_money(&currency, result.total_rx_annual_cost),
                    RX_COLOR,
                );
                metric_box(
                    ui,
                    tr.t(keys::REPORT_SAVINGS),
                    format!(
                        "{} ({:.1}%)",
                        report::format_money(&currency, result.annual_savings),
                        result.savings_rate
                    ),
                    strong,
                );
                let payback = if result.payback_period > 0.0 {
                    format!("{:.1} {}", result.payback_period, tr.t(keys::REPORT_MONTHS))
                } else {
                    tr.t(keys::REPORT_NO_PAYBACK).to_string()
                };
                metric_box(
                    ui,
                    tr.t(keys::REPORT_PAYBACK),
                    payback,
                    strong,
                );
            });
            ui.separator();
            ui.columns(2, |cols| {
                egui::ScrollArea::vertical()
                    .id_source("inputs_scroll")
                    .show(&mut cols[0], |ui| {
                        self.ui_current_system(ui, &tr);
                        ui.separator();
                        self.ui_rx_system(ui, &tr);
                        ui.separator();
                        self.ui_investment(ui, &tr);
                    });
                egui::ScrollArea::vertical()
                    .id_source("report_scroll")
                    .show(&mut cols[1], |ui| self.ui_comparison(ui, &tr));
            });
        });

        if self.show_logic_editor {
            self.ui_logic_editor(ctx, &tr);
        }
    }
}
