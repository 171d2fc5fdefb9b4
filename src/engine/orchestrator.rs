// ==========================================
// 柜体配置批量导出系统 - 批量编排器
// ==========================================
// 职责: 逐条记录驱动导出流水线
// 流程: 可见性计划 → 参数赋值 → 外观 → 重算 → 质量 → 命名 → 建目录 → 导出
// 状态: Idle -> Processing -> Completed | Failed
// 红线: 严格串行;致命错误立即终止,已导出的文件保留（不回滚）
// ==========================================

use crate::config::ExportConfig;
use crate::domain::artifact::{ExportArtifact, RecordWarning, RunReport};
use crate::domain::plan::{ParameterAssignment, ResolveWarning, VisibilityPlan};
use crate::domain::record::ConfigurationRecord;
use crate::domain::types::{RecordShape, RunState};
use crate::engine::appearance::AppearanceBinder;
use crate::engine::error::{ExportError, ExportResult};
use crate::engine::events::ProgressReporter;
use crate::engine::mass::{settle, MassEvaluator};
use crate::engine::naming::NamingStrategy;
use crate::engine::parameters::ParameterBinder;
use crate::engine::path_cache::PathCache;
use crate::engine::visibility::VisibilityPlanner;
use crate::importer::field_mapper::FieldMapper;
use crate::importer::table_parser_trait::ConfigurationTable;
use crate::model::traits::{DesignModel, ExportOptions};
use chrono::Utc;
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, error, info, info_span, instrument, warn};
use uuid::Uuid;

/// 单条记录的处理结果
#[derive(Debug, Clone)]
pub struct RecordOutcome {
    pub artifact: ExportArtifact,
    pub warnings: Vec<ResolveWarning>,
}

// ==========================================
// BatchOrchestrator - 批量编排器
// ==========================================
pub struct BatchOrchestrator<'a, M>
where
    M: DesignModel + ?Sized,
{
    model: &'a mut M,
    cache: PathCache,
    planner: VisibilityPlanner,
    binder: ParameterBinder,
    appearance: AppearanceBinder,
    mass: MassEvaluator,
    naming: NamingStrategy,
    options: ExportOptions,
    progress_interval: usize,
    report: RunReport,
}

impl<'a, M> BatchOrchestrator<'a, M>
where
    M: DesignModel + ?Sized,
{
    /// 创建编排器
    ///
    /// # 参数
    /// - model: 外部模型（本次运行期间独占）
    /// - config: 运行配置
    pub fn new(model: &'a mut M, config: &ExportConfig) -> Self {
        Self {
            model,
            cache: PathCache::new(),
            planner: VisibilityPlanner::new(),
            binder: ParameterBinder::new(),
            appearance: AppearanceBinder::new(config.appearances.clone()),
            mass: MassEvaluator::new(config.mass_assemblies.clone()),
            naming: NamingStrategy::new(
                &config.naming.mass_label,
                config.naming.append_signature,
            ),
            options: ExportOptions {
                format: config.export_format,
            },
            progress_interval: config.progress_interval,
            report: RunReport::new(String::new(), 0),
        }
    }

    pub fn state(&self) -> RunState {
        self.report.state
    }

    /// 最近一次运行的报告（失败后仍可读取）
    pub fn report(&self) -> &RunReport {
        &self.report
    }

    pub fn cache(&self) -> &PathCache {
        &self.cache
    }

    /// 执行一次批量运行
    ///
    /// # 参数
    /// - table: 配置表（记录形态按表头判定）
    /// - output_dir: 输出根目录
    /// - reporter: 进度通知
    ///
    /// # 返回
    /// - Ok(RunReport): 全部记录导出完成
    /// - Err: 首个致命错误;此前导出的文件保留在磁盘上
    pub fn run(
        &mut self,
        table: &ConfigurationTable,
        output_dir: &Path,
        reporter: &mut dyn ProgressReporter,
    ) -> ExportResult<RunReport> {
        let run_id = Uuid::new_v4().to_string();
        let span = info_span!("batch_run", run_id = %run_id);
        let _enter = span.enter();

        let shape = FieldMapper::detect_shape(&table.headers);
        let total = table.len();

        // 模型拓扑可能在两次运行之间变化,缓存不跨运行复用
        self.cache.clear();
        self.report = RunReport::new(run_id.clone(), total);
        self.report.state = RunState::Processing;
        self.report.started_at = Some(Utc::now());
        let started = Instant::now();

        info!(
            source = %table.source,
            shape = %shape,
            total = total,
            "开始批量导出"
        );
        reporter.on_start(&run_id, total);

        match self.process_rows(table, shape, output_dir, reporter) {
            Ok(()) => {
                self.finish(RunState::Completed, started);
                info!(
                    processed = self.report.processed,
                    elapsed_ms = ?self.report.elapsed_ms,
                    traversals = self.cache.traversal_count(),
                    "批量导出完成"
                );
                reporter.on_complete(&self.report);
                Ok(self.report.clone())
            }
            Err(e) => {
                let message = e.to_string();
                self.report.failure = Some(message.clone());
                self.finish(RunState::Failed, started);
                error!(
                    processed = self.report.processed,
                    error = %message,
                    "批量导出失败,终止剩余记录"
                );
                reporter.on_failed(&self.report, &message);
                Err(e)
            }
        }
    }

    fn process_rows(
        &mut self,
        table: &ConfigurationTable,
        shape: RecordShape,
        output_dir: &Path,
        reporter: &mut dyn ProgressReporter,
    ) -> ExportResult<()> {
        let mapper = FieldMapper;
        let total = table.len();

        // 表头缺列时在首条记录处终止,不做任何模型操作
        if let (Some(first), Some(field)) =
            (table.rows.first(), FieldMapper::missing_column(&table.headers, shape))
        {
            return Err(ExportError::RecordFieldMissing {
                row: first.row_number,
                field: field.to_string(),
            });
        }

        for row in &table.rows {
            let record = mapper
                .map_record(row, shape)
                .map_err(ExportError::from_import)?;

            let outcome = self.process_record(&record, output_dir)?;

            for warning in outcome.warnings {
                reporter.on_warning(record.row_number, &warning);
                self.report.warnings.push(RecordWarning {
                    row_number: record.row_number,
                    warning,
                });
            }
            self.report.artifacts.push(outcome.artifact);
            self.report.processed += 1;

            let processed = self.report.processed;
            if self.progress_interval > 0 && processed % self.progress_interval == 0 {
                info!(processed = processed, total = total, "导出进度");
                reporter.on_progress(processed, total);
            }
        }
        Ok(())
    }

    /// 处理单条记录并导出
    #[instrument(skip_all, fields(row = record.row_number))]
    pub fn process_record(
        &mut self,
        record: &ConfigurationRecord,
        output_dir: &Path,
    ) -> ExportResult<RecordOutcome> {
        let row = record.row_number;

        // 1. 纯计算: 可见性 / 参数 / 外观
        let (plan, mut warnings) = self.planner.plan(record);
        let (assignment, parameter_warnings) = self.binder.bind(record);
        let (colors, color_warnings) = self.appearance.resolve(record);
        warnings.extend(parameter_warnings);
        warnings.extend(color_warnings);
        for warning in &warnings {
            warn!(row = row, warning = %warning, "记录告警");
        }

        // 2. 写入模型
        self.apply_visibility(&plan);
        self.apply_parameters(&assignment);
        if !colors.is_empty() {
            match self.model.appearance() {
                Some(service) => {
                    let applied = self.appearance.apply(service, &colors);
                    debug!(applied = applied, "外观颜色已写入");
                }
                None => debug!("宿主不支持外观服务,跳过颜色"),
            }
        }

        // 3. 重算并等待收敛,之后才能读取质量
        let settled = settle(&mut *self.model).map_err(|e| ExportError::RecomputeFailure {
            row,
            message: e.to_string(),
        })?;
        let evaluation = self.mass.evaluate(&mut *self.model, &mut self.cache, &settled);

        // 4. 命名与输出目录
        let name = self.naming.name(record, evaluation.total)?;
        let dir = output_dir.join(&name.relative_dir);
        fs::create_dir_all(&dir).map_err(|e| ExportError::OutputDirectory {
            path: dir.display().to_string(),
            message: e.to_string(),
        })?;
        let path = dir.join(format!(
            "{}.{}",
            name.file_stem,
            self.options.format.extension()
        ));

        // 5. 导出（全有或全无,不重试）
        self.model
            .export_to(&path, &self.options)
            .map_err(|e| ExportError::ExportFailure {
                row,
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        debug!(
            path = %path.display(),
            total_mass = evaluation.total,
            "记录导出完成"
        );

        Ok(RecordOutcome {
            artifact: ExportArtifact {
                row_number: row,
                relative_dir: name.relative_dir,
                file_stem: name.file_stem,
                path,
                total_mass: evaluation.total,
            },
            warnings,
        })
    }

    fn apply_visibility(&mut self, plan: &VisibilityPlan) {
        for (path, visible) in plan.iter() {
            match self.cache.resolve(&*self.model, path) {
                Some(handle) => self.model.set_visible(handle, visible),
                None => debug!(path = path, "组件不存在,跳过可见性设置"),
            }
        }
    }

    fn apply_parameters(&mut self, assignment: &ParameterAssignment) {
        for (name, value) in assignment.iter() {
            if !self.model.set_expression(name, value) {
                debug!(parameter = name, "参数不存在,跳过");
            }
        }
    }

    fn finish(&mut self, state: RunState, started: Instant) {
        self.report.state = state;
        self.report.finished_at = Some(Utc::now());
        self.report.elapsed_ms = Some(started.elapsed().as_millis());
    }
}
