use std::{env, fs, path::PathBuf};

use atmosphere_cost_analyst::{
    logic::LogicConfig,
    session::Session,
    store::{load_logic, save_logic, JsonFileStore, KeyValueStore, MemoryStore, LOGIC_STORAGE_KEY},
};

fn temp_store_path(name: &str) -> PathBuf {
    env::temp_dir().join(format!(
        "atmosphere_cost_analyst_{}_{name}.json",
        std::process::id()
    ))
}

#[test]
fn save_bumps_version_and_reloads() {
    let mut store = MemoryStore::new();
    let config = LogicConfig {
        rx_efficiency: 5.1,
        ..LogicConfig::default()
    };
    assert_eq!(config.version, "1.0.16");
    let saved = save_logic(&mut store, &config).expect("save");
    assert_eq!(saved.version, "1.0.17");

    let loaded = load_logic(&store);
    assert_eq!(loaded, saved);
    assert_eq!(loaded.rx_efficiency, 5.1);
}

#[test]
fn missing_or_malformed_blob_gives_defaults() {
    let mut store = MemoryStore::new();
    assert_eq!(load_logic(&store), LogicConfig::default());
    store.set(LOGIC_STORAGE_KEY, "{not json").expect("set");
    assert_eq!(load_logic(&store), LogicConfig::default());
}

#[test]
fn partial_blob_fills_missing_fields() {
    let mut store = MemoryStore::new();
    store
        .set(LOGIC_STORAGE_KEY, r#"{"version":"2.3","rxEfficiency":6.0}"#)
        .expect("set");
    let loaded = load_logic(&store);
    assert_eq!(loaded.version, "2.3");
    assert_eq!(loaded.rx_efficiency, 6.0);
    assert_eq!(loaded.methanol_crack_coeff, LogicConfig::default().methanol_crack_coeff);
}

#[test]
fn json_file_store_persists_between_instances() {
    let path = temp_store_path("persist");
    let _ = fs::remove_file(&path);
    {
        let mut store = JsonFileStore::new(&path);
        assert_eq!(load_logic(&store), LogicConfig::default());
        let mut session = Session::load(&store);
        session.logic_mut().methanol_density = 0.79;
        let saved = session.save_logic(&mut store).expect("save").clone();
        assert_eq!(saved.version, "1.0.17");
    }
    let store = JsonFileStore::new(&path);
    let loaded = load_logic(&store);
    assert_eq!(loaded.version, "1.0.17");
    assert_eq!(loaded.methanol_density, 0.79);

    let raw = fs::read_to_string(&path).expect("read");
    assert!(raw.contains(LOGIC_STORAGE_KEY));
    let _ = fs::remove_file(&path);
}

#[test]
fn corrupt_store_file_does_not_block_saving() {
    let path = temp_store_path("corrupt");
    fs::write(&path, "{corrupt").expect("write");
    let mut store = JsonFileStore::new(&path);
    assert_eq!(load_logic(&store), LogicConfig::default());

    let config = LogicConfig {
        elec_per_l_methanol: 0.65,
        ..LogicConfig::default()
    };
    let saved = save_logic(&mut store, &config).expect("save over corrupt file");
    assert_eq!(saved.version, "1.0.17");

    let reloaded = load_logic(&JsonFileStore::new(&path));
    assert_eq!(reloaded, saved);
    let _ = fs::remove_file(&path);
}

#[test]
fn json_file_store_keeps_other_keys() {
    let path = temp_store_path("keys");
    let _ = fs::remove_file(&path);
    let mut store = JsonFileStore::new(&path);
    store.set("other", "value").expect("set");
    save_logic(&mut store, &LogicConfig::default()).expect("save");
    assert_eq!(store.get("other").expect("get").as_deref(), Some("value"));
    let _ = fs::remove_file(&path);
}
