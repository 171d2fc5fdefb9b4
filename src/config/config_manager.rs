// ==========================================
// 柜体配置批量导出系统 - 配置管理器
// ==========================================
// 职责: 定位并加载运行配置
// 查找顺序: 显式路径 → 环境变量 CABINET_EXPORT_CONFIG
//           → 用户配置目录/cabinet-export/config.json → 内置默认值
// 红线: 配置文件存在但格式错误时直接报错,不回退默认值
// ==========================================

use crate::config::export_config::ExportConfig;
use crate::engine::error::{ExportError, ExportResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// 配置文件路径环境变量
pub const CONFIG_ENV_VAR: &str = "CABINET_EXPORT_CONFIG";

const APP_DIR: &str = "cabinet-export";
const CONFIG_FILE: &str = "config.json";

/// 配置来源
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    config: ExportConfig,
    source: ConfigSource,
}

impl ConfigManager {
    /// 按查找顺序加载配置
    ///
    /// # 参数
    /// - explicit: 命令行显式指定的配置文件
    pub fn load(explicit: Option<&Path>) -> ExportResult<Self> {
        match Self::locate(explicit) {
            Some(path) => Self::from_file(&path),
            None => {
                debug!("未找到配置文件,使用内置默认值");
                Ok(Self::defaults())
            }
        }
    }

    /// 从指定文件加载
    pub fn from_file(path: &Path) -> ExportResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ExportError::Config(format!("无法读取 {}: {}", path.display(), e))
        })?;
        let config: ExportConfig = serde_json::from_str(&content).map_err(|e| {
            ExportError::Config(format!("{} 格式错误: {}", path.display(), e))
        })?;

        info!(path = %path.display(), "已加载导出配置");
        Ok(Self {
            config,
            source: ConfigSource::File(path.to_path_buf()),
        })
    }

    pub fn defaults() -> Self {
        Self {
            config: ExportConfig::default(),
            source: ConfigSource::Defaults,
        }
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    pub fn into_config(self) -> ExportConfig {
        self.config
    }

    pub fn source(&self) -> &ConfigSource {
        &self.source
    }

    /// 用户配置目录下的默认配置文件路径
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    fn locate(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }

        // 允许通过环境变量显式指定（便于调试/测试/CI）
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            let trimmed = path.trim();
            if !trimmed.is_empty() {
                return Some(PathBuf::from(trimmed));
            }
        }

        Self::default_config_path().filter(|p| p.exists())
    }
}
