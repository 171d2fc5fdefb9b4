// ==========================================
// 批量导出端到端测试
// ==========================================
// 测试目标: 编排器驱动完整流水线（桩模型）
// 覆盖: 可见性/参数/重算顺序/命名/进度/致命错误终止
// ==========================================

mod helpers;

use cabinet_export::config::ExportConfig;
use cabinet_export::domain::catalogue as cat;
use cabinet_export::domain::catalogue::parameters;
use cabinet_export::domain::plan::Rgb;
use cabinet_export::domain::{ResolveWarning, RunState};
use cabinet_export::engine::{BatchOrchestrator, ExportError, RecordingReporter, RunEvent};
use cabinet_export::logging;
use helpers::stub_model::{Op, StubModel};
use helpers::table_builder::{latest_table, uniform_table, RowBuilder};
use tempfile::TempDir;

fn plain_naming() -> ExportConfig {
    let mut config = ExportConfig::default();
    config.naming.append_signature = false;
    config
}

#[test]
fn test_end_to_end_two_doors_scenario() {
    logging::init_test();
    let dir = TempDir::new().unwrap();
    let mut model = StubModel::cabinet();
    model.set_mass(cat::INSIDE, 4.0);
    model.set_mass(cat::OUTSIDE, 8.345);

    let table = latest_table(vec![RowBuilder::new(1)
        .set("Front_Type", "Two doors")
        .set("Plinth", "Left + Bottom")
        .set("Side_Panel", "Both")
        .set("Shelf_Amount", "2")
        .set("Divider_Amount", "0")
        .build()]);

    let config = plain_naming();
    let report = {
        let mut orchestrator = BatchOrchestrator::new(&mut model, &config);
        orchestrator
            .run(&table, dir.path(), &mut RecordingReporter::new())
            .unwrap()
    };

    // 前板: 双门 + 镜像五金
    for path in [
        cat::DOUBLE_DOOR,
        cat::HANDLE,
        cat::HINGES,
        cat::HANDLE_MIRRORED,
        cat::HINGES_MIRRORED,
    ] {
        assert!(model.is_visible(path), "应可见: {}", path);
    }
    for path in [cat::SINGLE_DOOR, cat::DRAWERS, cat::DRAWER_HANDLE, cat::FIXED_FRONT] {
        assert!(!model.is_visible(path), "应隐藏: {}", path);
    }

    // 踢脚: 左 + 底
    assert!(model.is_visible(cat::PLINTH_LEFT));
    assert!(model.is_visible(cat::PLINTH_BOTTOM));
    assert!(!model.is_visible(cat::PLINTH_RIGHT));

    // 侧板: 两侧
    assert!(model.is_visible(cat::SIDE_PANEL_LEFT));
    assert!(model.is_visible(cat::SIDE_PANEL_RIGHT));

    // 内部: 仅搁板
    assert!(model.is_visible(cat::SHELVES));
    assert!(!model.is_visible(cat::DIVIDERS));
    assert!(!model.is_visible(cat::CLOTHING_RODS));

    // 文件名
    let artifact = &report.artifacts[0];
    assert_eq!(artifact.total_mass, 12.345);
    let file_name = artifact.path.file_name().unwrap().to_string_lossy().to_string();
    assert!(file_name.contains("FM-OAK"), "{}", file_name);
    assert!(file_name.contains("CM-MDF"), "{}", file_name);
    assert!(file_name.contains("PM-PVC"), "{}", file_name);
    assert!(file_name.contains("12.345"), "{}", file_name);
    assert!(file_name.ends_with(".stp"));
    assert!(artifact.path.starts_with(dir.path().join("Bedroom")));
    assert!(artifact.path.exists());
}

#[test]
fn test_mass_is_read_only_after_recompute() {
    let dir = TempDir::new().unwrap();
    let mut model = StubModel::cabinet();
    model.set_mass(cat::INSIDE, 1.0);

    let config = ExportConfig::default();
    {
        let mut orchestrator = BatchOrchestrator::new(&mut model, &config);
        orchestrator
            .run(&uniform_table(2), dir.path(), &mut RecordingReporter::new())
            .unwrap();
    }

    let ops = model.ops();
    let mut recomputed = false;
    for op in &ops {
        match op {
            Op::Recompute => recomputed = true,
            Op::MassRead(_) => assert!(recomputed, "质量读取早于重算"),
            Op::SetVisible(..) | Op::SetParameter(..) => recomputed = false,
            Op::Export(_) => recomputed = false,
            Op::SetColor(_) => {}
        }
    }
    assert_eq!(ops.iter().filter(|op| **op == Op::Recompute).count(), 2);
}

#[test]
fn test_twenty_five_records_emit_two_progress_signals() {
    let dir = TempDir::new().unwrap();
    let mut model = StubModel::cabinet();
    let config = ExportConfig::default();
    let mut reporter = RecordingReporter::new();

    let report = {
        let mut orchestrator = BatchOrchestrator::new(&mut model, &config);
        orchestrator
            .run(&uniform_table(25), dir.path(), &mut reporter)
            .unwrap()
    };

    assert_eq!(report.processed, 25);
    let progress: Vec<usize> = reporter
        .events
        .iter()
        .filter_map(|e| match e {
            RunEvent::Progress { processed, .. } => Some(*processed),
            _ => None,
        })
        .collect();
    assert_eq!(progress, vec![10, 20]);

    // 进度信号在完成事件之前
    assert!(matches!(reporter.events.last(), Some(RunEvent::Completed { processed: 25 })));
}

#[test]
fn test_missing_required_field_aborts_with_no_further_exports() {
    let dir = TempDir::new().unwrap();
    let mut model = StubModel::cabinet();
    let config = ExportConfig::default();
    let mut reporter = RecordingReporter::new();

    let mut rows: Vec<_> = (1..=5).map(|i| RowBuilder::new(i).build()).collect();
    rows[2] = RowBuilder::new(3).without("Corpus_Material").build();
    let table = latest_table(rows);

    let result = {
        let mut orchestrator = BatchOrchestrator::new(&mut model, &config);
        let result = orchestrator.run(&table, dir.path(), &mut reporter);
        assert_eq!(orchestrator.state(), RunState::Failed);
        assert_eq!(orchestrator.report().processed, 2);
        result
    };

    match result {
        Err(ExportError::RecordFieldMissing { row, field }) => {
            assert_eq!(row, 3);
            assert_eq!(field, "Corpus_Material");
        }
        other => panic!("期望 RecordFieldMissing, 实际 {:?}", other),
    }

    // 前两条已导出的文件保留,之后没有任何导出
    assert_eq!(model.export_attempts(), 2);
    assert!(model.exported_paths().iter().all(|p| p.exists()));
    assert!(matches!(reporter.events.last(), Some(RunEvent::Failed { processed: 2, .. })));
}

#[test]
fn test_export_failure_is_fatal_without_retry() {
    let dir = TempDir::new().unwrap();
    let mut model = StubModel::cabinet().fail_export_at(2);
    let config = ExportConfig::default();

    let result = {
        let mut orchestrator = BatchOrchestrator::new(&mut model, &config);
        orchestrator.run(&uniform_table(4), dir.path(), &mut RecordingReporter::new())
    };

    assert!(matches!(result, Err(ExportError::ExportFailure { row: 2, .. })));
    assert_eq!(model.export_attempts(), 2);
    assert_eq!(model.exported_paths().len(), 1);
    assert!(model.exported_paths()[0].exists());
}

#[test]
fn test_recompute_failure_is_fatal() {
    let dir = TempDir::new().unwrap();
    let mut model = StubModel::cabinet().fail_recompute_at(2);
    let config = ExportConfig::default();
    let mut reporter = RecordingReporter::new();

    let result = {
        let mut orchestrator = BatchOrchestrator::new(&mut model, &config);
        let result = orchestrator.run(&uniform_table(4), dir.path(), &mut reporter);
        assert_eq!(orchestrator.state(), RunState::Failed);
        result
    };

    match result {
        Err(ExportError::RecomputeFailure { row, message }) => {
            assert_eq!(row, 2);
            assert!(message.contains("模拟重算失败"));
        }
        other => panic!("期望 RecomputeFailure, 实际 {:?}", other),
    }

    // 第二条记录重算失败: 不读质量、不导出,后续记录不再处理
    assert_eq!(model.export_attempts(), 1);
    assert_eq!(model.exported_paths().len(), 1);
    let ops = model.ops();
    let first_export = ops.iter().position(|op| matches!(op, Op::Export(_))).unwrap();
    assert!(!ops[first_export + 1..]
        .iter()
        .any(|op| matches!(op, Op::Recompute | Op::MassRead(_) | Op::Export(_))));
    assert!(matches!(reporter.events.last(), Some(RunEvent::Failed { processed: 1, .. })));
}

#[test]
fn test_missing_header_column_stops_before_model_access() {
    let dir = TempDir::new().unwrap();
    let mut model = StubModel::cabinet();
    let config = ExportConfig::default();
    let mut reporter = RecordingReporter::new();

    let mut table = uniform_table(3);
    table.headers.retain(|h| h != "Quantity");

    let result = {
        let mut orchestrator = BatchOrchestrator::new(&mut model, &config);
        orchestrator.run(&table, dir.path(), &mut reporter)
    };

    match result {
        Err(ExportError::RecordFieldMissing { row, field }) => {
            assert_eq!(row, 1);
            assert_eq!(field, "Quantity");
        }
        other => panic!("期望 RecordFieldMissing, 实际 {:?}", other),
    }
    assert_eq!(model.export_attempts(), 0);
    assert!(model.ops().is_empty());
    assert!(matches!(reporter.events.last(), Some(RunEvent::Failed { processed: 0, .. })));
}

#[test]
fn test_quantity_only_difference_produces_distinct_files() {
    let dir = TempDir::new().unwrap();
    let mut model = StubModel::cabinet();
    let config = ExportConfig::default();

    let table = latest_table(vec![
        RowBuilder::new(1).set("Element", "Tower").set("Quantity", "1").build(),
        RowBuilder::new(2).set("Element", "Tower").set("Quantity", "2").build(),
    ]);

    let report = {
        let mut orchestrator = BatchOrchestrator::new(&mut model, &config);
        orchestrator
            .run(&table, dir.path(), &mut RecordingReporter::new())
            .unwrap()
    };

    assert_ne!(report.artifacts[0].path, report.artifacts[1].path);
    assert!(report.artifacts.iter().all(|a| a.path.exists()));
}

#[test]
fn test_identical_names_are_separated_by_signature() {
    let dir = TempDir::new().unwrap();
    let mut model = StubModel::cabinet();
    let config = ExportConfig::default();

    // 只有侧板不同,命名字段完全相同
    let table = latest_table(vec![
        RowBuilder::new(1).set("Element", "Tower").set("Side_Panel", "Left").build(),
        RowBuilder::new(2).set("Element", "Tower").set("Side_Panel", "Right").build(),
    ]);

    let report = {
        let mut orchestrator = BatchOrchestrator::new(&mut model, &config);
        orchestrator
            .run(&table, dir.path(), &mut RecordingReporter::new())
            .unwrap()
    };

    assert_ne!(report.artifacts[0].path, report.artifacts[1].path);
}

#[test]
fn test_warnings_do_not_abort_record() {
    let dir = TempDir::new().unwrap();
    let mut model = StubModel::cabinet();
    let config = ExportConfig::default();
    let mut reporter = RecordingReporter::new();

    let table = latest_table(vec![
        RowBuilder::new(1).set("Front_Type", "drawers").build(),
        RowBuilder::new(2).set("Front_Type", "Sliding doors").build(),
        RowBuilder::new(3).set("Front_Type", "3 drawers").build(),
    ]);

    let report = {
        let mut orchestrator = BatchOrchestrator::new(&mut model, &config);
        orchestrator.run(&table, dir.path(), &mut reporter).unwrap()
    };

    assert_eq!(report.state, RunState::Completed);
    assert_eq!(report.processed, 3);
    assert_eq!(report.warnings.len(), 2);
    assert_eq!(
        report.warnings[0].warning,
        ResolveWarning::parse_failure("Front_Type", "drawers")
    );
    assert_eq!(
        report.warnings[1].warning,
        ResolveWarning::unrecognized("Front_Type", "Sliding doors")
    );
    let reported = reporter
        .events
        .iter()
        .filter(|e| matches!(e, RunEvent::Warning { .. }))
        .count();
    assert_eq!(reported, 2);

    // 第 1 条没有绑定抽屉数量,第 3 条绑定为 3
    let drawer_writes: Vec<String> = model
        .ops()
        .iter()
        .filter_map(|op| match op {
            Op::SetParameter(name, value) if name == parameters::DRAWER_AMOUNT => {
                Some(value.clone())
            }
            _ => None,
        })
        .collect();
    assert_eq!(drawer_writes, vec!["3".to_string()]);
    assert_eq!(model.parameter(parameters::DRAWER_AMOUNT), Some("3"));
}

#[test]
fn test_missing_nodes_are_skipped_silently() {
    let dir = TempDir::new().unwrap();
    // 只有部分组件的模型变体
    let mut model = StubModel::new();
    model.add_path(cat::SINGLE_DOOR);
    model.set_mass(cat::INSIDE, 2.5);

    let config = plain_naming();
    let report = {
        let mut orchestrator = BatchOrchestrator::new(&mut model, &config);
        orchestrator
            .run(&uniform_table(1), dir.path(), &mut RecordingReporter::new())
            .unwrap()
    };

    assert!(model.is_visible(cat::SINGLE_DOOR));
    // Outside 无质量属性,按 0 计
    assert_eq!(report.artifacts[0].total_mass, 2.5);
    assert!(report.warnings.is_empty());
}

#[test]
fn test_cache_is_rebuilt_between_runs() {
    let dir = TempDir::new().unwrap();
    let mut model = StubModel::cabinet();
    let config = ExportConfig::default();

    let mut orchestrator = BatchOrchestrator::new(&mut model, &config);
    orchestrator
        .run(&uniform_table(3), dir.path(), &mut RecordingReporter::new())
        .unwrap();
    let first = orchestrator.cache().traversal_count();

    orchestrator
        .run(&uniform_table(3), dir.path(), &mut RecordingReporter::new())
        .unwrap();
    let second = orchestrator.cache().traversal_count();

    // 同一批路径在每次运行中只遍历一次;多条记录不增加遍历次数
    assert!(first > 0);
    assert_eq!(first, second);
}

#[test]
fn test_colors_are_applied_through_appearance_service() {
    let dir = TempDir::new().unwrap();
    let mut model = StubModel::cabinet();
    let config = ExportConfig::default();

    let table = latest_table(vec![RowBuilder::new(1)
        .set("Front_Color_R", "10")
        .set("Front_Color_G", "20")
        .set("Front_Color_B", "30")
        .build()]);

    {
        let mut orchestrator = BatchOrchestrator::new(&mut model, &config);
        orchestrator
            .run(&table, dir.path(), &mut RecordingReporter::new())
            .unwrap();
    }

    assert_eq!(
        model.color(cat::FRONT_APPEARANCE),
        Some(Rgb { r: 10, g: 20, b: 30 })
    );
}
