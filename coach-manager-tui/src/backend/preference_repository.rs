//! 偏好存储
//!
//! 使用 JSON 文件保存键值偏好（目前只有主题），
//! 实现 coach-manager-core 的 PreferenceStore trait

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use coach_manager_core::{CoreError, CoreResult, PreferenceStore};

use super::config_dir;

/// 基于 JSON 文件的偏好存储
pub struct JsonPreferenceStore {
    path: PathBuf,
    /// 内存缓存，每次写入后整体落盘
    cache: Mutex<BTreeMap<String, String>>,
}

impl JsonPreferenceStore {
    /// 默认偏好文件路径
    pub fn default_path() -> PathBuf {
        config_dir().join("preferences.json")
    }

    /// 打开偏好文件，不存在时视为空
    pub fn open(path: impl Into<PathBuf>) -> CoreResult<Self> {
        let path = path.into();
        let values = Self::load_from_file(&path)?;
        Ok(Self {
            path,
            cache: Mutex::new(values),
        })
    }

    fn load_from_file(path: &Path) -> CoreResult<BTreeMap<String, String>> {
        if !path.exists() {
            return Ok(BTreeMap::new());
        }

        let content =
            fs::read_to_string(path).map_err(|e| CoreError::PreferenceError(e.to_string()))?;
        let values = serde_json::from_str(&content)?;
        Ok(values)
    }

    fn save_to_file(&self, values: &BTreeMap<String, String>) -> CoreResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|e| CoreError::PreferenceError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(values)?;
        fs::write(&self.path, content).map_err(|e| CoreError::PreferenceError(e.to_string()))?;
        Ok(())
    }
}

impl PreferenceStore for JsonPreferenceStore {
    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        let cache = self
            .cache
            .lock()
            .map_err(|e| CoreError::PreferenceError(e.to_string()))?;
        Ok(cache.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        let mut cache = self
            .cache
            .lock()
            .map_err(|e| CoreError::PreferenceError(e.to_string()))?;
        cache.insert(key.to_string(), value.to_string());
        self.save_to_file(&cache)
    }
}
