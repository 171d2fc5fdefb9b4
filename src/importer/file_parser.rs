// ==========================================
// 柜体配置批量导出系统 - 配置表解析器实现
// ==========================================
// 支持: Excel (.xlsx/.xls) / CSV (.csv)
// 说明: 表头按列名查找,行顺序保持不变
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use crate::importer::table_parser_trait::{ConfigurationTable, RawRow, TableParser};
use calamine::{open_workbook_auto, Reader};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;

fn ensure_exists(path: &Path) -> ImportResult<()> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }
    Ok(())
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

/// 按表头组装一行;完全空白的行返回 None
fn build_row<I>(headers: &[String], row_number: usize, cells: I) -> Option<RawRow>
where
    I: Iterator<Item = String>,
{
    let mut row = RawRow::new(row_number);
    for (col_idx, value) in cells.enumerate() {
        if let Some(header) = headers.get(col_idx) {
            row.values.insert(header.clone(), value.trim().to_string());
        }
    }

    if row.values.values().all(|v| v.is_empty()) {
        return None;
    }
    Some(row)
}

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvParser;

impl TableParser for CsvParser {
    fn parse_table(&self, file_path: &Path) -> ImportResult<ConfigurationTable> {
        ensure_exists(file_path)?;

        let ext = extension_of(file_path);
        if ext != "csv" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let file = File::open(file_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致,缺列由字段映射阶段判定
            .from_reader(file);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();
        if headers.iter().all(|h| h.is_empty()) {
            return Err(ImportError::EmptyTable(file_path.display().to_string()));
        }

        let mut rows = Vec::new();
        for (row_idx, result) in reader.records().enumerate() {
            let record = result?;
            let cells = record.iter().map(|v| v.to_string());
            if let Some(row) = build_row(&headers, row_idx + 1, cells) {
                rows.push(row);
            }
        }

        Ok(ConfigurationTable {
            source: file_path.display().to_string(),
            headers,
            rows,
        })
    }
}

// ==========================================
// Excel Parser 实现
// ==========================================
pub struct ExcelParser;

impl TableParser for ExcelParser {
    fn parse_table(&self, file_path: &Path) -> ImportResult<ConfigurationTable> {
        ensure_exists(file_path)?;

        let ext = extension_of(file_path);
        if ext != "xlsx" && ext != "xls" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let mut workbook = open_workbook_auto(file_path)?;

        // 读取第一个 sheet
        let sheet_names = workbook.sheet_names();
        let sheet_name = sheet_names
            .first()
            .cloned()
            .ok_or_else(|| ImportError::ExcelParseError("Excel 文件无工作表".to_string()))?;
        let range = workbook.worksheet_range(&sheet_name)?;

        let mut sheet_rows = range.rows();
        let header_row = sheet_rows
            .next()
            .ok_or_else(|| ImportError::EmptyTable(file_path.display().to_string()))?;
        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for (row_idx, data_row) in sheet_rows.enumerate() {
            let cells = data_row.iter().map(|cell| cell.to_string());
            if let Some(row) = build_row(&headers, row_idx + 1, cells) {
                rows.push(row);
            }
        }

        Ok(ConfigurationTable {
            source: file_path.display().to_string(),
            headers,
            rows,
        })
    }
}

// ==========================================
// 通用解析器（根据扩展名自动选择）
// ==========================================
pub struct UniversalFileParser;

impl UniversalFileParser {
    pub fn parse<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<ConfigurationTable> {
        let path = file_path.as_ref();
        match extension_of(path).as_str() {
            "csv" => CsvParser.parse_table(path),
            "xlsx" | "xls" => ExcelParser.parse_table(path),
            other => Err(ImportError::UnsupportedFormat(other.to_string())),
        }
    }
}
