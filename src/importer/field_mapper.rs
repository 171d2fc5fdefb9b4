// ==========================================
// 柜体配置批量导出系统 - 字段映射器实现
// ==========================================
// 职责: 记录形态判定 + 必填字段校验 + 原始行 → ConfigurationRecord
// 红线: 必填字段缺失不做猜测,直接返回 RecordFieldMissing
// ==========================================

use crate::domain::record::{
    fields, ConfigurationRecord, Dimensions, FeatureFields, SurfaceColor, Thickness,
};
use crate::domain::types::RecordShape;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::table_parser_trait::RawRow;

/// 列名别名（历史表格中出现过的写法）
fn aliases(key: &str) -> &'static [&'static str] {
    match key {
        fields::FRONT_TYPE => &["Front_Type", "Front Type"],
        fields::ENTRY_TYPE => &["Entry_Type", "Entry Type"],
        fields::SIDE_PANEL => &["Side_Panel", "Side_Panels"],
        fields::CLOTHING_ROD_AMOUNT => &["Clothing_Rod_Amount", "Clothing_Rods"],
        fields::FILENAME => &["Filename", "File_Name"],
        _ => &[],
    }
}

pub struct FieldMapper;

impl FieldMapper {
    /// 按表头判定记录形态
    ///
    /// # 规则
    /// - 含 Entry_Type → Latest
    /// - 含 Front_Type → Mid
    /// - 其他 → Legacy
    pub fn detect_shape(headers: &[String]) -> RecordShape {
        let has = |key: &str| headers.iter().any(|h| Self::column_matches(h, key));
        if has(fields::ENTRY_TYPE) {
            RecordShape::Latest
        } else if has(fields::FRONT_TYPE) {
            RecordShape::Mid
        } else {
            RecordShape::Legacy
        }
    }

    /// 形态对应的必填列
    pub fn required_columns(shape: RecordShape) -> Vec<&'static str> {
        match shape {
            RecordShape::Legacy => fields::LEGACY_COLUMNS.to_vec(),
            RecordShape::Mid => fields::MID_COLUMNS.to_vec(),
            RecordShape::Latest => {
                let mut columns = fields::MID_COLUMNS.to_vec();
                columns.push(fields::ENTRY_TYPE);
                columns
            }
        }
    }

    /// 表头中缺失的首个必填列（别名视为存在）
    pub fn missing_column(headers: &[String], shape: RecordShape) -> Option<&'static str> {
        Self::required_columns(shape)
            .into_iter()
            .find(|key| !headers.iter().any(|h| Self::column_matches(h, key)))
    }

    /// 将原始行映射为 ConfigurationRecord
    ///
    /// # 返回
    /// - Err(RecordFieldMissing): 必填列缺失,或标识字段为空
    pub fn map_record(&self, row: &RawRow, shape: RecordShape) -> ImportResult<ConfigurationRecord> {
        let get = |key: &str| self.required(row, key);

        let dimensions = Dimensions {
            height: get(fields::HEIGHT)?,
            width: get(fields::WIDTH)?,
            depth: get(fields::DEPTH)?,
        };
        let thickness = Thickness {
            corpus: get(fields::THICKNESS_CORPUS)?,
            front: get(fields::THICKNESS_FRONT)?,
            back: get(fields::THICKNESS_BACK)?,
        };
        let shelf_amount = get(fields::SHELF_AMOUNT)?;
        let divider_amount = get(fields::DIVIDER_AMOUNT)?;

        let (filename, features) = match shape {
            RecordShape::Legacy => (Some(get(fields::FILENAME)?), None),
            RecordShape::Mid | RecordShape::Latest => (None, Some(self.map_features(row)?)),
        };

        let (entry_type, colors) = match shape {
            RecordShape::Latest => (Some(get(fields::ENTRY_TYPE)?), self.map_colors(row)),
            _ => (None, Vec::new()),
        };

        Ok(ConfigurationRecord {
            row_number: row.row_number,
            shape,
            filename,
            dimensions,
            thickness,
            shelf_amount,
            divider_amount,
            features,
            entry_type,
            colors,
        })
    }

    fn map_features(&self, row: &RawRow) -> ImportResult<FeatureFields> {
        let get = |key: &str| self.required(row, key);
        Ok(FeatureFields {
            parent: get(fields::PARENT)?,
            element: get(fields::ELEMENT)?,
            quantity: get(fields::QUANTITY)?,
            front_type: get(fields::FRONT_TYPE)?,
            plinth: get(fields::PLINTH)?,
            plinth_thickness: get(fields::PLINTH_THICKNESS)?,
            side_panel: get(fields::SIDE_PANEL)?,
            side_panel_thickness: get(fields::SIDE_PANEL_THICKNESS)?,
            feet: get(fields::FEET)?,
            clothing_rod_amount: get(fields::CLOTHING_ROD_AMOUNT)?,
            front_material: get(fields::FRONT_MATERIAL)?,
            corpus_material: get(fields::CORPUS_MATERIAL)?,
            plinth_material: get(fields::PLINTH_MATERIAL)?,
        })
    }

    /// 颜色三元组为可选列;三列中任一有值即收录,缺失分量留空由外观绑定器告警
    fn map_colors(&self, row: &RawRow) -> Vec<SurfaceColor> {
        fields::COLOR_SURFACES
            .iter()
            .filter_map(|surface| {
                let component = |c: &str| {
                    self.lookup(row, &format!("{}_Color_{}", surface, c))
                        .unwrap_or_default()
                };
                let color = SurfaceColor {
                    surface: surface.to_string(),
                    red: component("R"),
                    green: component("G"),
                    blue: component("B"),
                };
                let any = !(color.red.is_empty() && color.green.is_empty() && color.blue.is_empty());
                any.then_some(color)
            })
            .collect()
    }

    /// 必填字段读取
    fn required(&self, row: &RawRow, key: &str) -> ImportResult<String> {
        let missing = || ImportError::RecordFieldMissing {
            row: row.row_number,
            field: key.to_string(),
        };
        let value = self.lookup(row, key).ok_or_else(missing)?;
        if value.is_empty() && fields::IDENTITY_FIELDS.contains(&key) {
            return Err(missing());
        }
        Ok(value)
    }

    /// 按列名（含别名）查找
    fn lookup(&self, row: &RawRow, key: &str) -> Option<String> {
        let names = aliases(key);
        if names.is_empty() {
            return row.values.get(key).map(|v| v.trim().to_string());
        }
        names
            .iter()
            .find_map(|name| row.values.get(*name))
            .map(|v| v.trim().to_string())
    }

    fn column_matches(header: &str, key: &str) -> bool {
        let names = aliases(key);
        if names.is_empty() {
            header == key
        } else {
            names.contains(&header)
        }
    }
}
