// ==========================================
// 柜体配置批量导出系统 - 配置记录
// ==========================================
// 一行配置表 = 一条 ConfigurationRecord = 一个导出文件
// 记录在映射完成后不可变
// ==========================================

use crate::domain::types::RecordShape;
use serde::{Deserialize, Serialize};

// ==========================================
// 列名常量
// ==========================================
pub mod fields {
    // 标识字段
    pub const FILENAME: &str = "Filename";
    pub const PARENT: &str = "Parent";
    pub const ELEMENT: &str = "Element";
    pub const QUANTITY: &str = "Quantity";

    // 尺寸
    pub const HEIGHT: &str = "Height";
    pub const WIDTH: &str = "Width";
    pub const DEPTH: &str = "Depth";

    // 板厚
    pub const THICKNESS_CORPUS: &str = "Thickness_Corpus";
    pub const THICKNESS_FRONT: &str = "Thickness_Front";
    pub const THICKNESS_BACK: &str = "Thickness_Back";

    // 内部结构
    pub const SHELF_AMOUNT: &str = "Shelf_Amount";
    pub const DIVIDER_AMOUNT: &str = "Divider_Amount";
    pub const CLOTHING_ROD_AMOUNT: &str = "Clothing_Rod_Amount";

    // 外观特征
    pub const ENTRY_TYPE: &str = "Entry_Type";
    pub const FRONT_TYPE: &str = "Front_Type";
    pub const PLINTH: &str = "Plinth";
    pub const PLINTH_THICKNESS: &str = "Plinth_Thickness";
    pub const SIDE_PANEL: &str = "Side_Panel";
    pub const SIDE_PANEL_THICKNESS: &str = "Side_Panel_Thickness";
    pub const FEET: &str = "Feet";

    // 材料编码
    pub const FRONT_MATERIAL: &str = "Front_Material";
    pub const CORPUS_MATERIAL: &str = "Corpus_Material";
    pub const PLINTH_MATERIAL: &str = "Plinth_Material";

    /// 支持颜色三元组的表面（列名形如 Front_Color_R）
    pub const COLOR_SURFACES: &[&str] = &["Front", "Corpus", "Plinth"];

    /// Legacy 形态必填列（与生成器输出一致）
    pub const LEGACY_COLUMNS: &[&str] = &[
        FILENAME,
        HEIGHT,
        WIDTH,
        DEPTH,
        SHELF_AMOUNT,
        DIVIDER_AMOUNT,
        THICKNESS_CORPUS,
        THICKNESS_FRONT,
        THICKNESS_BACK,
    ];

    /// Mid 形态必填列
    pub const MID_COLUMNS: &[&str] = &[
        PARENT,
        ELEMENT,
        HEIGHT,
        WIDTH,
        DEPTH,
        SHELF_AMOUNT,
        DIVIDER_AMOUNT,
        THICKNESS_CORPUS,
        THICKNESS_FRONT,
        THICKNESS_BACK,
        FRONT_TYPE,
        PLINTH,
        PLINTH_THICKNESS,
        SIDE_PANEL,
        SIDE_PANEL_THICKNESS,
        FEET,
        CLOTHING_ROD_AMOUNT,
        QUANTITY,
        FRONT_MATERIAL,
        CORPUS_MATERIAL,
        PLINTH_MATERIAL,
    ];

    /// 必须非空的标识字段
    pub const IDENTITY_FIELDS: &[&str] = &[FILENAME, PARENT, ELEMENT];
}

// ==========================================
// 尺寸与板厚（外部模型表达式原文,如 "600 mm"）
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub height: String,
    pub width: String,
    pub depth: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thickness {
    pub corpus: String,
    pub front: String,
    pub back: String,
}

// ==========================================
// 特征字段（Mid / Latest 形态）
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFields {
    pub parent: String,
    pub element: String,
    pub quantity: String,
    pub front_type: String,
    pub plinth: String,
    pub plinth_thickness: String,
    pub side_panel: String,
    pub side_panel_thickness: String,
    pub feet: String,
    pub clothing_rod_amount: String,
    pub front_material: String,
    pub corpus_material: String,
    pub plinth_material: String,
}

/// 单个表面的颜色三元组（原文,由外观绑定器解析为 0-255）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceColor {
    pub surface: String,
    pub red: String,
    pub green: String,
    pub blue: String,
}

// ==========================================
// ConfigurationRecord - 配置记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationRecord {
    /// 数据行号（从 1 开始,不含表头）
    pub row_number: usize,
    pub shape: RecordShape,

    /// Legacy 形态的文件名
    pub filename: Option<String>,

    pub dimensions: Dimensions,
    pub thickness: Thickness,
    pub shelf_amount: String,
    pub divider_amount: String,

    /// Mid / Latest 形态的特征字段
    pub features: Option<FeatureFields>,

    /// Latest 形态的入口类型
    pub entry_type: Option<String>,

    #[serde(default)]
    pub colors: Vec<SurfaceColor>,
}

impl ConfigurationRecord {
    /// 按固定顺序列出全部绑定字段（用于文件名签名）
    pub fn field_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs: Vec<(&'static str, &str)> = Vec::with_capacity(24);
        if let Some(filename) = &self.filename {
            pairs.push((fields::FILENAME, filename.as_str()));
        }
        if let Some(entry) = &self.entry_type {
            pairs.push((fields::ENTRY_TYPE, entry.as_str()));
        }
        pairs.push((fields::HEIGHT, self.dimensions.height.as_str()));
        pairs.push((fields::WIDTH, self.dimensions.width.as_str()));
        pairs.push((fields::DEPTH, self.dimensions.depth.as_str()));
        pairs.push((fields::THICKNESS_CORPUS, self.thickness.corpus.as_str()));
        pairs.push((fields::THICKNESS_FRONT, self.thickness.front.as_str()));
        pairs.push((fields::THICKNESS_BACK, self.thickness.back.as_str()));
        pairs.push((fields::SHELF_AMOUNT, self.shelf_amount.as_str()));
        pairs.push((fields::DIVIDER_AMOUNT, self.divider_amount.as_str()));

        if let Some(f) = &self.features {
            pairs.push((fields::PARENT, f.parent.as_str()));
            pairs.push((fields::ELEMENT, f.element.as_str()));
            pairs.push((fields::QUANTITY, f.quantity.as_str()));
            pairs.push((fields::FRONT_TYPE, f.front_type.as_str()));
            pairs.push((fields::PLINTH, f.plinth.as_str()));
            pairs.push((fields::PLINTH_THICKNESS, f.plinth_thickness.as_str()));
            pairs.push((fields::SIDE_PANEL, f.side_panel.as_str()));
            pairs.push((fields::SIDE_PANEL_THICKNESS, f.side_panel_thickness.as_str()));
            pairs.push((fields::FEET, f.feet.as_str()));
            pairs.push((fields::CLOTHING_ROD_AMOUNT, f.clothing_rod_amount.as_str()));
            pairs.push((fields::FRONT_MATERIAL, f.front_material.as_str()));
            pairs.push((fields::CORPUS_MATERIAL, f.corpus_material.as_str()));
            pairs.push((fields::PLINTH_MATERIAL, f.plinth_material.as_str()));
        }

        for color in &self.colors {
            pairs.push(("Color_Surface", color.surface.as_str()));
            pairs.push(("Color_R", color.red.as_str()));
            pairs.push(("Color_G", color.green.as_str()));
            pairs.push(("Color_B", color.blue.as_str()));
        }
        pairs
    }
}
