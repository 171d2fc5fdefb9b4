// ==========================================
// 柜体配置批量导出系统 - 外部模型错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 外部模型（几何内核 / 导出器）错误
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("模型重算失败: {0}")]
    RecomputeFailed(String),

    #[error("导出失败 ({path}): {message}")]
    ExportFailed { path: String, message: String },

    #[error("模型快照序列化失败: {0}")]
    SnapshotFailed(String),

    #[error("模型描述无效: {0}")]
    InvalidDescription(String),
}

impl From<serde_json::Error> for ModelError {
    fn from(err: serde_json::Error) -> Self {
        ModelError::InvalidDescription(err.to_string())
    }
}

/// Result 类型别名
pub type ModelResult<T> = Result<T, ModelError>;
