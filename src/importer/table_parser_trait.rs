// ==========================================
// 柜体配置批量导出系统 - 配置表读取 Trait
// ==========================================
// 职责: 定义配置表读取接口与原始行结构（不包含实现）
// ==========================================

use crate::importer::error::ImportResult;
use std::collections::HashMap;
use std::path::Path;

/// 原始行: 列名 -> 去除首尾空白后的值
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    /// 数据行号（从 1 开始,不含表头;跳过空行后保持原始编号）
    pub row_number: usize,
    pub values: HashMap<String, String>,
}

impl RawRow {
    pub fn new(row_number: usize) -> Self {
        Self {
            row_number,
            values: HashMap::new(),
        }
    }

    pub fn with(mut self, column: &str, value: &str) -> Self {
        self.values.insert(column.to_string(), value.to_string());
        self
    }
}

/// 完整配置表（表头 + 有序数据行）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigurationTable {
    /// 来源描述（文件路径）
    pub source: String,
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

impl ConfigurationTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ==========================================
// TableParser Trait
// ==========================================
// 实现者: CsvParser, ExcelParser
pub trait TableParser: Send + Sync {
    /// 解析文件为配置表
    ///
    /// # 返回
    /// - Ok(ConfigurationTable): 首行为表头,其余每行一条记录
    /// - Err: 文件不存在、格式不支持、解析失败
    fn parse_table(&self, file_path: &Path) -> ImportResult<ConfigurationTable>;
}
