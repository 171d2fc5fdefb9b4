// ==========================================
// 柜体配置批量导出系统 - 引擎层
// ==========================================
// 职责: 配置解析规则 + 批量导出编排
// 红线: 规划/绑定/命名为纯函数;只有编排器写入外部模型
// ==========================================

pub mod appearance;
pub mod error;
pub mod events;
pub mod mass;
pub mod naming;
pub mod orchestrator;
pub mod parameters;
pub mod path_cache;
pub mod visibility;

// 重导出核心引擎
pub use appearance::AppearanceBinder;
pub use error::{ExportError, ExportResult};
pub use events::{NoOpReporter, ProgressReporter, RecordingReporter, RunEvent};
pub use mass::{settle, MassEvaluation, MassEvaluator, RecomputeSettled};
pub use naming::{NamingStrategy, OutputName};
pub use orchestrator::{BatchOrchestrator, RecordOutcome};
pub use parameters::ParameterBinder;
pub use path_cache::PathCache;
pub use visibility::VisibilityPlanner;
