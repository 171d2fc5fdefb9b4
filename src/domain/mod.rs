// ==========================================
// 柜体配置批量导出系统 - 领域层
// ==========================================
// 职责: 配置记录、解析产物、导出产物的纯数据定义
// 红线: 不依赖外部模型,不做 IO
// ==========================================

pub mod artifact;
pub mod catalogue;
pub mod plan;
pub mod record;
pub mod types;

// 重导出核心类型
pub use artifact::{ExportArtifact, RecordWarning, RunReport};
pub use plan::{
    round3, ColorAssignment, MassSample, ParameterAssignment, ResolveWarning, Rgb,
    VisibilityPlan,
};
pub use record::{ConfigurationRecord, Dimensions, FeatureFields, SurfaceColor, Thickness};
pub use types::{
    EntryType, ExportFormat, FrontType, PanelSetting, Parsed, PlinthSetting, RecordShape,
    RunState,
};
