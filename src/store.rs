//! 문자열 키 → 문자열 값 저장소와 계수 설정 영속화.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::logic::LogicConfig;

/// 계수 설정이 저장되는 고정 키.
pub const LOGIC_STORAGE_KEY: &str = "powermax_logic_v16";

/// 저장소 입출력 오류를 표현한다.
#[derive(Debug)]
pub enum StoreError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// JSON 직렬화/역직렬화 오류
    Json(serde_json::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "storage I/O error: {e}"),
            StoreError::Json(e) => write!(f, "storage JSON error: {e}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        StoreError::Io(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        StoreError::Json(value)
    }
}

/// 단순 키-값 저장소.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// 프로세스 메모리에만 두는 저장소. 테스트와 임시 세션용.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// JSON 객체 하나(`{"key": "value", ...}`)로 모든 항목을 담는 파일 저장소.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StoreError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = match self.read_all() {
            Ok(entries) => entries,
            // 깨진 파일은 읽기와 마찬가지로 빈 저장소로 보고 새로 쓴다
            Err(StoreError::Json(err)) => {
                tracing::warn!(%err, path = %self.path.display(), "store file is malformed, overwriting");
                BTreeMap::new()
            }
            Err(err) => return Err(err),
        };
        entries.insert(key.to_string(), value.to_string());
        let content = serde_json::to_string_pretty(&entries)?;
        // 임시 파일에 쓴 뒤 교체해 반쯤 쓰인 파일이 남지 않게 한다
        let tmp = self.path.with_extension("json.tmp");
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// 저장된 계수를 읽는다. 없거나 깨졌으면 기본값.
pub fn load_logic(store: &dyn KeyValueStore) -> LogicConfig {
    let raw = match store.get(LOGIC_STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return LogicConfig::default(),
        Err(err) => {
            tracing::warn!(%err, "could not read logic config, using defaults");
            return LogicConfig::default();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(cfg) => cfg,
        Err(err) => {
            tracing::warn!(%err, "stored logic config is malformed, using defaults");
            LogicConfig::default()
        }
    }
}

/// 버전을 올린 뒤 전체를 저장하고, 저장된 설정을 돌려준다.
pub fn save_logic(
    store: &mut dyn KeyValueStore,
    config: &LogicConfig,
) -> Result<LogicConfig, StoreError> {
    let saved = config.with_bumped_version();
    let json = serde_json::to_string(&saved)?;
    store.set(LOGIC_STORAGE_KEY, &json)?;
    tracing::info!(version = %saved.version, "logic config saved");
    Ok(saved)
}
