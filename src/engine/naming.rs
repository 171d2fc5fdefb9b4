// ==========================================
// 柜体配置批量导出系统 - 输出命名策略
// ==========================================
// 职责: 配置记录 + 总质量 → (相对目录, 文件名主干)
// 目录: Legacy 为 Div<N>/Shelf<N>; Mid / Latest 为父级标签
// 文件名: 固定顺序的字段 + 前缀（FM- / CM- / PM-）+ 3 位小数质量
// 签名: 可选追加 8 位十六进制签名（UUID v5,覆盖全部绑定字段）
// ==========================================

use crate::domain::record::ConfigurationRecord;
use crate::engine::error::{ExportError, ExportResult};
use std::path::PathBuf;
use uuid::Uuid;

/// 命名结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputName {
    pub relative_dir: PathBuf,
    pub file_stem: String,
}

#[derive(Debug, Clone)]
pub struct NamingStrategy {
    mass_label: String,
    append_signature: bool,
}

impl Default for NamingStrategy {
    fn default() -> Self {
        Self::new("massTotal", true)
    }
}

impl NamingStrategy {
    pub fn new(mass_label: &str, append_signature: bool) -> Self {
        Self {
            mass_label: mass_label.to_string(),
            append_signature,
        }
    }

    /// 生成输出名称
    ///
    /// # 返回
    /// - Err(RecordFieldMissing): 记录缺少命名所需的标识字段
    pub fn name(&self, record: &ConfigurationRecord, total_mass: f64) -> ExportResult<OutputName> {
        let mass = format!("{}{:.3}", self.mass_label, total_mass);

        let (relative_dir, mut file_stem) = match (&record.features, &record.filename) {
            (Some(f), _) => {
                let dir = PathBuf::from(sanitize(&f.parent));
                let stem = [
                    f.parent.clone(),
                    f.element.clone(),
                    format!("Q{}", f.quantity),
                    format!("FM-{}", f.front_material),
                    format!("CM-{}", f.corpus_material),
                    format!("PM-{}", f.plinth_material),
                    mass,
                ]
                .join("_");
                (dir, stem)
            }
            (None, Some(filename)) => {
                let dir = PathBuf::from(sanitize(&format!("Div{}", record.divider_amount)))
                    .join(sanitize(&format!("Shelf{}", record.shelf_amount)));
                (dir, format!("{}_{}", filename, mass))
            }
            (None, None) => {
                return Err(ExportError::RecordFieldMissing {
                    row: record.row_number,
                    field: "Filename".to_string(),
                })
            }
        };

        if self.append_signature {
            file_stem.push('_');
            file_stem.push_str(&signature(record));
        }

        Ok(OutputName {
            relative_dir,
            file_stem: sanitize(&file_stem),
        })
    }
}

/// 记录签名: UUID v5(全部绑定字段) 的前 8 位十六进制
pub fn signature(record: &ConfigurationRecord) -> String {
    let mut payload = String::new();
    for (name, value) in record.field_pairs() {
        payload.push_str(name);
        payload.push('=');
        payload.push_str(value);
        payload.push('\u{1f}');
    }
    let id = Uuid::new_v5(&Uuid::NAMESPACE_OID, payload.as_bytes());
    id.simple().to_string()[..8].to_string()
}

/// 文件系统安全化: 非法字符替换为 '_',去除末尾的点和空格
pub fn sanitize(value: &str) -> String {
    let replaced: String = value
        .chars()
        .map(|c| match c {
            '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    let trimmed = replaced.trim_end_matches(['.', ' ']).trim_start();
    if trimmed.is_empty() {
        "_".to_string()
    } else {
        trimmed.to_string()
    }
}
