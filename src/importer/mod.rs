// ==========================================
// 柜体配置批量导出系统 - 导入层
// ==========================================
// 职责: 读取配置表,将原始行映射为 ConfigurationRecord
// 支持: Excel, CSV
// ==========================================

// 模块声明
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod table_parser_trait;

// 重导出核心类型
pub use error::{ImportError, ImportResult};
pub use field_mapper::FieldMapper;
pub use file_parser::{CsvParser, ExcelParser, UniversalFileParser};
pub use table_parser_trait::{ConfigurationTable, RawRow, TableParser};
