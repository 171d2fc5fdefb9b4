// ==========================================
// 柜体配置批量导出系统 - 外部模型层
// ==========================================
// 职责: 宿主 CAD 应用的窄接口 + 内存参考实现
// 说明: 几何内核的重算算法本身不在本系统范围内
// ==========================================

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{ModelError, ModelResult};
pub use memory::{InMemoryModel, ModelDescription, ModelSnapshot, NodeDescription};
pub use traits::{
    AppearanceService, DesignModel, ExportOptions, Exporter, MassQuery, ModelTree, NodeHandle,
    ParameterStore, Recompute,
};
