// ==========================================
// 柜体配置批量导出系统 - 外观绑定器
// ==========================================
// 职责: Latest 形态的表面颜色三元组 → 外观颜色赋值
// 说明: 宿主不提供外观服务时整体跳过
// ==========================================

use crate::domain::plan::{ColorAssignment, ResolveWarning, Rgb};
use crate::domain::record::{ConfigurationRecord, SurfaceColor};
use crate::model::traits::AppearanceService;
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct AppearanceBinder {
    /// 表面 -> 外观名称
    appearances: BTreeMap<String, String>,
}

impl AppearanceBinder {
    pub fn new(appearances: BTreeMap<String, String>) -> Self {
        Self { appearances }
    }

    /// 解析记录中的颜色
    ///
    /// # 返回
    /// - Vec<ColorAssignment>: 三个分量均为 0-255 整数的表面
    /// - Vec<ResolveWarning>: 分量无法解析的表面（该表面颜色被省略）
    pub fn resolve(
        &self,
        record: &ConfigurationRecord,
    ) -> (Vec<ColorAssignment>, Vec<ResolveWarning>) {
        let mut assignments = Vec::new();
        let mut warnings = Vec::new();

        for color in &record.colors {
            let Some(appearance) = self.appearances.get(&color.surface) else {
                debug!(surface = %color.surface, "表面未配置外观名称,跳过");
                continue;
            };
            match parse_rgb(color) {
                Ok(rgb) => assignments.push(ColorAssignment {
                    appearance: appearance.clone(),
                    color: rgb,
                }),
                Err(warning) => warnings.push(warning),
            }
        }

        (assignments, warnings)
    }

    /// 写入外观服务
    ///
    /// # 返回
    /// 实际生效的赋值数量（外观名称未知的不计）
    pub fn apply(&self, service: &mut dyn AppearanceService, assignments: &[ColorAssignment]) -> usize {
        assignments
            .iter()
            .filter(|a| {
                let applied = service.set_color(&a.appearance, a.color);
                if !applied {
                    debug!(appearance = %a.appearance, "外观不存在,跳过");
                }
                applied
            })
            .count()
    }
}

fn parse_rgb(color: &SurfaceColor) -> Result<Rgb, ResolveWarning> {
    let channel = |suffix: &str, raw: &str| {
        raw.trim().parse::<u8>().map_err(|_| {
            ResolveWarning::parse_failure(&format!("{}_Color_{}", color.surface, suffix), raw)
        })
    };
    Ok(Rgb {
        r: channel("R", &color.red)?,
        g: channel("G", &color.green)?,
        b: channel("B", &color.blue)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalogue;
    use crate::domain::record::{Dimensions, Thickness};
    use crate::domain::types::RecordShape;
    use crate::model::memory::InMemoryModel;

    fn binder() -> AppearanceBinder {
        let mut map = BTreeMap::new();
        map.insert("Front".to_string(), catalogue::FRONT_APPEARANCE.to_string());
        map.insert("Corpus".to_string(), catalogue::CORPUS_APPEARANCE.to_string());
        AppearanceBinder::new(map)
    }

    fn color(surface: &str, r: &str, g: &str, b: &str) -> SurfaceColor {
        SurfaceColor {
            surface: surface.to_string(),
            red: r.to_string(),
            green: g.to_string(),
            blue: b.to_string(),
        }
    }

    fn record(colors: Vec<SurfaceColor>) -> ConfigurationRecord {
        ConfigurationRecord {
            row_number: 1,
            shape: RecordShape::Latest,
            filename: None,
            dimensions: Dimensions {
                height: "1".to_string(),
                width: "1".to_string(),
                depth: "1".to_string(),
            },
            thickness: Thickness {
                corpus: "1".to_string(),
                front: "1".to_string(),
                back: "1".to_string(),
            },
            shelf_amount: "0".to_string(),
            divider_amount: "0".to_string(),
            features: None,
            entry_type: Some("Cabinet".to_string()),
            colors,
        }
    }

    #[test]
    fn test_resolve_valid_and_invalid_colors() {
        let (assignments, warnings) = binder().resolve(&record(vec![
            color("Front", "255", "0", "12"),
            color("Corpus", "300", "0", "0"),
            color("Plinth", "1", "2", "3"),
        ]));

        assert_eq!(assignments.len(), 1);
        assert_eq!(assignments[0].appearance, "Front Paint");
        assert_eq!(assignments[0].color, Rgb { r: 255, g: 0, b: 12 });
        assert_eq!(
            warnings,
            vec![ResolveWarning::parse_failure("Corpus_Color_R", "300")]
        );
    }

    #[test]
    fn test_apply_to_model() {
        let mut model = InMemoryModel::cabinet();
        let binder = binder();
        let assignments = vec![
            ColorAssignment {
                appearance: "Front Paint".to_string(),
                color: Rgb { r: 1, g: 2, b: 3 },
            },
            ColorAssignment {
                appearance: "Unknown Paint".to_string(),
                color: Rgb { r: 0, g: 0, b: 0 },
            },
        ];

        let applied = binder.apply(&mut model, &assignments);

        assert_eq!(applied, 1);
        assert_eq!(model.color("Front Paint"), Some(Rgb { r: 1, g: 2, b: 3 }));
    }
}
