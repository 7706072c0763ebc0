//! 配置服务
//!
//! 配置文件位于 `<config_dir>/coach-manager/config.json`，
//! 缺失的字段一律回退为默认值。

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use coach_manager_core::ControllerConfig;
use serde::{Deserialize, Serialize};

use super::config_dir;

/// 终端单元格到 CSS 像素的换算
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CellScale {
    /// 每列对应的像素宽度
    pub cell_width: u32,
    /// 每行对应的像素高度
    pub cell_height: u32,
}

impl Default for CellScale {
    fn default() -> Self {
        Self {
            cell_width: 8,
            cell_height: 16,
        }
    }
}

/// 应用配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 页面控制器配置（元素 id、类名、时长、断点）
    pub controller: ControllerConfig,
    pub cell: CellScale,
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 本地配置服务
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 默认配置文件路径
    pub fn default_path() -> PathBuf {
        config_dir().join("config.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new(Self::default_path())
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        // 首次运行：没有配置文件
        if !self.path.exists() {
            log::debug!("No config at {}, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("读取配置文件失败: {}", self.path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("解析配置文件失败: {}", self.path.display()))?;
        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("创建配置目录失败: {}", dir.display()))?;
        }
        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, content)
            .with_context(|| format!("写入配置文件失败: {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let service = LocalConfigService::new(tmp.path().join("config.json"));
        let config = service.load().unwrap();
        assert_eq!(config.cell, CellScale::default());
        assert_eq!(config.controller.notifications.display_ms, 5000);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.json");
        fs::write(
            &path,
            r#"{ "cell": { "cell_height": 20 }, "controller": { "search": { "debounce_ms": 150 } } }"#,
        )
        .unwrap();

        let config = LocalConfigService::new(&path).load().unwrap();
        assert_eq!(config.cell.cell_width, 8);
        assert_eq!(config.cell.cell_height, 20);
        assert_eq!(config.controller.search.debounce_ms, 150);
        assert_eq!(config.controller.navigation.panel_id, "sidebar");
    }

    #[test]
    fn test_save_then_load() {
        let tmp = tempfile::tempdir().unwrap();
        // 目录尚不存在
        let service = LocalConfigService::new(tmp.path().join("nested").join("config.json"));
        let mut config = AppConfig::default();
        config.cell.cell_width = 10;
        service.save(&config).unwrap();
        assert_eq!(service.load().unwrap().cell.cell_width, 10);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(LocalConfigService::new(&path).load().is_err());
    }
}
