// ==========================================
// 柜体配置批量导出系统 - 核心库
// ==========================================
// 职责: 配置表 → 可见性计划 + 参数赋值 → 重算 → 质量 → 命名 → 导出
// 系统定位: 宿主 CAD 应用之外的配置解析与批量编排
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 配置记录与解析产物
pub mod domain;

// 外部模型层 - 协作者接口与内存参考实现
pub mod model;

// 导入层 - 配置表读取
pub mod importer;

// 引擎层 - 解析规则与批量编排
pub mod engine;

// 配置层 - 运行配置
pub mod config;

// 配置组合生成器
pub mod generator;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{
    EntryType, ExportFormat, FrontType, PanelSetting, Parsed, PlinthSetting, RecordShape,
    RunState,
};

// 领域实体
pub use domain::{
    ConfigurationRecord, ExportArtifact, ParameterAssignment, ResolveWarning, RunReport,
    VisibilityPlan,
};

// 引擎
pub use engine::{
    BatchOrchestrator, ExportError, ExportResult, MassEvaluator, NamingStrategy,
    ParameterBinder, PathCache, ProgressReporter, VisibilityPlanner,
};

// 外部模型
pub use model::{DesignModel, InMemoryModel, ModelError};

// 配置
pub use config::{ConfigManager, ExportConfig};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "柜体配置批量导出系统";
