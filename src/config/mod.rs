// ==========================================
// 柜体配置批量导出系统 - 配置层
// ==========================================
// 职责: 运行配置的定义与加载
// 存储: JSON 文件（可选）
// ==========================================

pub mod config_manager;
pub mod export_config;

// 重导出核心配置类型
pub use config_manager::{ConfigManager, ConfigSource, CONFIG_ENV_VAR};
pub use export_config::{ExportConfig, NamingConfig};
