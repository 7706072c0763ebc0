//!
//! src/backend/mod.rs
//! Backend 层：宿主服务
//!
//! Backend 层与 UI 解耦，负责配置、持久化和页面的搭建。
//! 页面行为本身全部由 coach-manager-core 的 PageController 完成。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;         // 配置服务（config.json）
//!         mod preference_repository;  // 偏好持久化（preferences.json）
//!         mod demo_page;              // 演示页面
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、配置服务（ConfigService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     AppConfig {
//!         controller: ControllerConfig,   // 交给核心库的配置
//!         cell: CellScale,                // 单元格 → 像素换算
//!     }
//!
//!     文件不存在时返回默认配置，首次启动时由 main 写出一份默认文件。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、偏好存储（JsonPreferenceStore）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     实现 PreferenceStore trait，相当于浏览器的 localStorage。
//!     主题切换时由核心库写入 "theme" 键。
//!
//!
//! 两个文件都位于 `<config_dir>/coach-manager/` 下。
//!

mod config_service;
pub mod demo_page;
mod preference_repository;

use std::path::PathBuf;

pub use config_service::{AppConfig, CellScale, ConfigService, LocalConfigService};
pub use preference_repository::JsonPreferenceStore;

/// 获取配置目录路径
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("coach-manager")
}
