use crate::domain::catalogue;
use crate::domain::types::ExportFormat;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 批量导出运行配置
///
/// 存储位置：JSON 文件（见 ConfigManager::load 的查找顺序），所有字段均可省略
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// 参与总质量汇总的组件路径
    pub mass_assemblies: Vec<String>,

    /// 每处理多少条记录发出一次进度通知（0 表示不发）
    pub progress_interval: usize,

    /// 导出格式（step/stl/f3d）
    pub export_format: ExportFormat,

    /// 文件命名
    pub naming: NamingConfig,

    /// 表面 -> 外观名称
    pub appearances: BTreeMap<String, String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        let appearances = [
            ("Front", catalogue::FRONT_APPEARANCE),
            ("Corpus", catalogue::CORPUS_APPEARANCE),
            ("Plinth", catalogue::PLINTH_APPEARANCE),
        ]
        .into_iter()
        .map(|(surface, name)| (surface.to_string(), name.to_string()))
        .collect();

        Self {
            mass_assemblies: vec![catalogue::INSIDE.to_string(), catalogue::OUTSIDE.to_string()],
            progress_interval: 10,
            export_format: ExportFormat::Step,
            naming: NamingConfig::default(),
            appearances,
        }
    }
}

/// 文件命名配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// 追加 8 位记录签名,保证任意绑定字段不同的记录不会重名
    pub append_signature: bool,

    /// 质量字段前缀
    pub mass_label: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            append_signature: true,
            mass_label: "massTotal".to_string(),
        }
    }
}
