// ==========================================
// 柜体配置批量导出系统 - 运行进度事件
// ==========================================
// 职责: 定义批量运行的进度通知 trait
// 说明: 引擎层只发出事件,展示（控制台 / 本地化文案）由调用方实现
// ==========================================

use crate::domain::artifact::RunReport;
use crate::domain::plan::ResolveWarning;
use serde::{Deserialize, Serialize};

/// 进度事件（用于记录或转发）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RunEvent {
    Started { run_id: String, total: usize },
    Progress { processed: usize, total: usize },
    Warning { row_number: usize, warning: ResolveWarning },
    Completed { processed: usize },
    Failed { processed: usize, message: String },
}

// ==========================================
// ProgressReporter Trait
// ==========================================
// 实现者: NoOpReporter, RecordingReporter, 以及 CLI 的控制台输出
pub trait ProgressReporter {
    /// 运行开始
    fn on_start(&mut self, run_id: &str, total: usize);

    /// 每处理完 N 条记录触发一次（N 由配置决定）
    fn on_progress(&mut self, processed: usize, total: usize);

    /// 可恢复告警
    fn on_warning(&mut self, row_number: usize, warning: &ResolveWarning);

    /// 全部记录处理完成
    fn on_complete(&mut self, report: &RunReport);

    /// 运行失败（只触发一次,携带诊断信息）
    fn on_failed(&mut self, report: &RunReport, message: &str);
}

/// 空操作进度通知
///
/// 用于不需要展示进度的场景（如单元测试）
#[derive(Debug, Clone, Default)]
pub struct NoOpReporter;

impl ProgressReporter for NoOpReporter {
    fn on_start(&mut self, run_id: &str, total: usize) {
        tracing::debug!("NoOpReporter: 运行开始 - run_id={}, total={}", run_id, total);
    }

    fn on_progress(&mut self, _processed: usize, _total: usize) {}

    fn on_warning(&mut self, _row_number: usize, _warning: &ResolveWarning) {}

    fn on_complete(&mut self, _report: &RunReport) {}

    fn on_failed(&mut self, _report: &RunReport, _message: &str) {}
}

/// 记录全部事件的进度通知（测试与运行报告使用）
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    pub events: Vec<RunEvent>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 进度事件数量
    pub fn progress_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, RunEvent::Progress { .. }))
            .count()
    }
}

impl ProgressReporter for RecordingReporter {
    fn on_start(&mut self, run_id: &str, total: usize) {
        self.events.push(RunEvent::Started {
            run_id: run_id.to_string(),
            total,
        });
    }

    fn on_progress(&mut self, processed: usize, total: usize) {
        self.events.push(RunEvent::Progress { processed, total });
    }

    fn on_warning(&mut self, row_number: usize, warning: &ResolveWarning) {
        self.events.push(RunEvent::Warning {
            row_number,
            warning: warning.clone(),
        });
    }

    fn on_complete(&mut self, report: &RunReport) {
        self.events.push(RunEvent::Completed {
            processed: report.processed,
        });
    }

    fn on_failed(&mut self, report: &RunReport, message: &str) {
        self.events.push(RunEvent::Failed {
            processed: report.processed,
            message: message.to_string(),
        });
    }
}
