// ==========================================
// 柜体配置批量导出系统 - 导出产物与运行报告
// ==========================================

use crate::domain::plan::ResolveWarning;
use crate::domain::types::RunState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ==========================================
// ExportArtifact - 导出产物
// ==========================================
// 每条记录创建一次,写出后不再修改
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportArtifact {
    pub row_number: usize,
    /// 相对于输出根目录的子目录
    pub relative_dir: PathBuf,
    pub file_stem: String,
    /// 完整输出路径
    pub path: PathBuf,
    pub total_mass: f64,
}

/// 带行号的告警
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordWarning {
    pub row_number: usize,
    pub warning: ResolveWarning,
}

// ==========================================
// RunReport - 运行报告
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub run_id: String,
    pub state: RunState,
    pub total_records: usize,
    pub processed: usize,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
    pub elapsed_ms: Option<u128>,
    pub artifacts: Vec<ExportArtifact>,
    pub warnings: Vec<RecordWarning>,
    /// 失败时的诊断信息
    pub failure: Option<String>,
}

impl RunReport {
    pub fn new(run_id: String, total_records: usize) -> Self {
        Self {
            run_id,
            state: RunState::Idle,
            total_records,
            processed: 0,
            started_at: None,
            finished_at: None,
            elapsed_ms: None,
            artifacts: Vec::new(),
            warnings: Vec::new(),
            failure: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.state == RunState::Completed
    }
}
