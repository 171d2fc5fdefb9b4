// ==========================================
// 柜体配置批量导出系统 - 批量导出错误类型
// ==========================================
// 工具: thiserror 派生宏
// 红线: 这里只列致命错误;可恢复问题走 ResolveWarning
// ==========================================

use crate::importer::error::ImportError;
use thiserror::Error;

/// 批量导出致命错误（任一发生即终止本次运行）
#[derive(Error, Debug)]
pub enum ExportError {
    // ===== 记录错误 =====
    #[error("必填字段缺失 (行 {row}, 字段 {field})")]
    RecordFieldMissing { row: usize, field: String },

    // ===== 外部模型错误 =====
    #[error("导出失败 (行 {row}, 路径 {path}): {message}")]
    ExportFailure {
        row: usize,
        path: String,
        message: String,
    },

    #[error("重算失败 (行 {row}): {message}")]
    RecomputeFailure { row: usize, message: String },

    // ===== 文件系统错误 =====
    #[error("无法创建输出目录 {path}: {message}")]
    OutputDirectory { path: String, message: String },

    // ===== 配置错误 =====
    #[error("配置错误: {0}")]
    Config(String),

    // ===== 下层错误透传 =====
    #[error(transparent)]
    Import(#[from] ImportError),
}

impl ExportError {
    /// 导入阶段的字段缺失统一提升为运行级错误
    pub fn from_import(err: ImportError) -> Self {
        match err {
            ImportError::RecordFieldMissing { row, field } => {
                ExportError::RecordFieldMissing { row, field }
            }
            other => ExportError::Import(other),
        }
    }
}

/// Result 类型别名
pub type ExportResult<T> = Result<T, ExportError>;
