// ==========================================
// 柜体配置批量导出系统 - 命令行入口
// ==========================================
// 用法:
//   cabinet-export <table.csv|table.xlsx> <output_dir>
//                  [--config <json>] [--model <json>] [--locale <zh-CN|en>] [--json-log]
// 说明: 未指定 --model 时使用内置标准柜体模型试运行
// ==========================================

use anyhow::{bail, Context};
use cabinet_export::domain::{ResolveWarning, RunReport};
use cabinet_export::engine::{BatchOrchestrator, ProgressReporter};
use cabinet_export::i18n::{self, t, t_with_args};
use cabinet_export::importer::UniversalFileParser;
use cabinet_export::{logging, ConfigManager, InMemoryModel, APP_NAME, VERSION};
use std::fs;
use std::path::{Path, PathBuf};

const REPORT_FILE: &str = "run_report.json";

/// 命令行参数
struct CliArgs {
    table: PathBuf,
    output_dir: PathBuf,
    config: Option<PathBuf>,
    model: Option<PathBuf>,
    locale: Option<String>,
    json_log: bool,
}

fn parse_args() -> anyhow::Result<CliArgs> {
    let mut positional = Vec::new();
    let mut config = None;
    let mut model = None;
    let mut locale = None;
    let mut json_log = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => config = Some(PathBuf::from(args.next().context("--config 缺少参数")?)),
            "--model" => model = Some(PathBuf::from(args.next().context("--model 缺少参数")?)),
            "--locale" => locale = Some(args.next().context("--locale 缺少参数")?),
            "--json-log" => json_log = true,
            _ => positional.push(arg),
        }
    }

    let mut positional = positional.into_iter();
    match (positional.next(), positional.next()) {
        (Some(table), Some(output_dir)) => Ok(CliArgs {
            table: PathBuf::from(table),
            output_dir: PathBuf::from(output_dir),
            config,
            model,
            locale,
            json_log,
        }),
        _ => bail!(
            "用法: cabinet-export <table.csv|table.xlsx> <output_dir> \
             [--config <json>] [--model <json>] [--locale <zh-CN|en>] [--json-log]"
        ),
    }
}

/// 控制台进度输出（本地化文案）
struct ConsoleReporter;

impl ProgressReporter for ConsoleReporter {
    fn on_start(&mut self, run_id: &str, total: usize) {
        println!("{}", t("run.start_title"));
        println!(
            "{}",
            t_with_args("run.start", &[("total", &total.to_string()), ("run_id", run_id)])
        );
    }

    fn on_progress(&mut self, processed: usize, total: usize) {
        println!(
            "{}",
            t_with_args(
                "run.progress",
                &[("processed", &processed.to_string()), ("total", &total.to_string())]
            )
        );
    }

    fn on_warning(&mut self, row_number: usize, warning: &ResolveWarning) {
        eprintln!(
            "{}",
            t_with_args(
                "run.warning",
                &[("row", &row_number.to_string()), ("warning", &warning.to_string())]
            )
        );
    }

    fn on_complete(&mut self, report: &RunReport) {
        println!(
            "{}",
            t_with_args("run.complete", &[("processed", &report.processed.to_string())])
        );
    }

    fn on_failed(&mut self, report: &RunReport, message: &str) {
        eprintln!(
            "{}",
            t_with_args(
                "run.failed",
                &[("processed", &report.processed.to_string()), ("message", message)]
            )
        );
    }
}

fn write_report(output_dir: &Path, report: &RunReport) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("无法创建输出目录 {}", output_dir.display()))?;
    let path = output_dir.join(REPORT_FILE);
    let json = serde_json::to_string_pretty(report)?;
    fs::write(&path, json).with_context(|| format!("无法写入 {}", path.display()))?;
    Ok(path)
}

fn main() -> anyhow::Result<()> {
    let args = parse_args()?;
    if args.json_log {
        logging::init_json();
    } else {
        logging::init();
    }
    if let Some(locale) = &args.locale {
        if !i18n::set_locale(locale) {
            tracing::warn!(locale = %locale, "不支持的语言,使用默认语言");
        }
    }

    tracing::info!("==================================================");
    tracing::info!("{} v{}", APP_NAME, VERSION);
    tracing::info!("==================================================");

    let config = ConfigManager::load(args.config.as_deref())?.into_config();

    let mut model = match &args.model {
        Some(path) => InMemoryModel::from_file(path)
            .with_context(|| format!("无法加载模型描述 {}", path.display()))?,
        None => InMemoryModel::cabinet(),
    };

    let table = UniversalFileParser
        .parse(&args.table)
        .with_context(|| format!("无法读取配置表 {}", args.table.display()))?;

    let mut reporter = ConsoleReporter;
    let mut orchestrator = BatchOrchestrator::new(&mut model, &config);
    let result = orchestrator.run(&table, &args.output_dir, &mut reporter);

    // 失败时同样写出报告,便于定位中断位置
    let report_path = write_report(&args.output_dir, orchestrator.report())?;
    println!(
        "{}",
        t_with_args("run.report_written", &[("path", &report_path.display().to_string())])
    );

    result?;
    Ok(())
}
