// ==========================================
// 配置表构建器 - 用于集成测试
// ==========================================

use cabinet_export::domain::record::fields;
use cabinet_export::importer::{ConfigurationTable, RawRow};
use std::fs;
use std::path::Path;

/// Latest 形态的表头（含 Front 颜色列）
pub fn latest_headers() -> Vec<String> {
    let mut headers: Vec<String> = fields::MID_COLUMNS.iter().map(|s| s.to_string()).collect();
    headers.push(fields::ENTRY_TYPE.to_string());
    for channel in ["R", "G", "B"] {
        headers.push(format!("Front_Color_{}", channel));
    }
    headers
}

// ==========================================
// 单行构建器
// ==========================================

pub struct RowBuilder {
    row: RawRow,
}

impl RowBuilder {
    /// 默认取值: 一扇门柜体,无踢脚、无侧板
    pub fn new(row_number: usize) -> Self {
        let row = RawRow::new(row_number)
            .with(fields::PARENT, "Bedroom")
            .with(fields::ELEMENT, &format!("Element{}", row_number))
            .with(fields::HEIGHT, "2100 mm")
            .with(fields::WIDTH, "600 mm")
            .with(fields::DEPTH, "580 mm")
            .with(fields::SHELF_AMOUNT, "1")
            .with(fields::DIVIDER_AMOUNT, "0")
            .with(fields::THICKNESS_CORPUS, "18 mm")
            .with(fields::THICKNESS_FRONT, "20 mm")
            .with(fields::THICKNESS_BACK, "10 mm")
            .with(fields::FRONT_TYPE, "One door")
            .with(fields::PLINTH, "None (Default)")
            .with(fields::PLINTH_THICKNESS, "18 mm")
            .with(fields::SIDE_PANEL, "None")
            .with(fields::SIDE_PANEL_THICKNESS, "19 mm")
            .with(fields::FEET, "")
            .with(fields::CLOTHING_ROD_AMOUNT, "0")
            .with(fields::QUANTITY, "1")
            .with(fields::FRONT_MATERIAL, "OAK")
            .with(fields::CORPUS_MATERIAL, "MDF")
            .with(fields::PLINTH_MATERIAL, "PVC")
            .with(fields::ENTRY_TYPE, "Cabinet");
        Self { row }
    }

    pub fn set(mut self, column: &str, value: &str) -> Self {
        self.row.values.insert(column.to_string(), value.to_string());
        self
    }

    pub fn without(mut self, column: &str) -> Self {
        self.row.values.remove(column);
        self
    }

    pub fn build(self) -> RawRow {
        self.row
    }
}

/// 组装 Latest 形态配置表
pub fn latest_table(rows: Vec<RawRow>) -> ConfigurationTable {
    ConfigurationTable {
        source: "test".to_string(),
        headers: latest_headers(),
        rows,
    }
}

/// n 条互不相同的默认记录
pub fn uniform_table(count: usize) -> ConfigurationTable {
    latest_table((1..=count).map(|i| RowBuilder::new(i).build()).collect())
}

/// 将配置表写为 CSV（列顺序按表头）
pub fn write_csv(path: &Path, table: &ConfigurationTable) {
    let mut writer = csv::Writer::from_path(path).unwrap();
    writer.write_record(&table.headers).unwrap();
    for row in &table.rows {
        let record: Vec<&str> = table
            .headers
            .iter()
            .map(|h| row.values.get(h).map(String::as_str).unwrap_or(""))
            .collect();
        writer.write_record(&record).unwrap();
    }
    writer.flush().unwrap();
    drop(writer);
    assert!(fs::metadata(path).is_ok());
}
