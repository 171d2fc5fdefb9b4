// ==========================================
// 柜体配置批量导出系统 - 参数绑定器
// ==========================================
// 职责: 配置记录 → 外部模型用户参数赋值（表达式字符串）
// 说明: 赋值为尽力而为;未知参数名在写入模型时静默跳过
// ==========================================

use crate::domain::catalogue::parameters as p;
use crate::domain::plan::{ParameterAssignment, ResolveWarning};
use crate::domain::record::{fields, ConfigurationRecord};
use crate::domain::types::{FrontType, Parsed};

#[derive(Debug, Default, Clone, Copy)]
pub struct ParameterBinder;

impl ParameterBinder {
    pub fn new() -> Self {
        Self
    }

    /// 生成单条记录的参数赋值
    ///
    /// # 返回
    /// - ParameterAssignment: 参数名 -> 表达式
    /// - Vec<ResolveWarning>: 抽屉数量无法解析时给出告警,对应参数被省略
    pub fn bind(&self, record: &ConfigurationRecord) -> (ParameterAssignment, Vec<ResolveWarning>) {
        let mut assignment = ParameterAssignment::new();
        let mut warnings = Vec::new();

        assignment.bind(p::HEIGHT, &record.dimensions.height);
        assignment.bind(p::WIDTH, &record.dimensions.width);
        assignment.bind(p::DEPTH, &record.dimensions.depth);
        assignment.bind(p::THICKNESS_CORPUS, &record.thickness.corpus);
        assignment.bind(p::THICKNESS_FRONT, &record.thickness.front);
        assignment.bind(p::THICKNESS_BACK, &record.thickness.back);
        assignment.bind(p::SHELF_AMOUNT, &record.shelf_amount);
        assignment.bind(p::DIVIDER_AMOUNT, &record.divider_amount);

        let Some(features) = &record.features else {
            return (assignment, warnings);
        };

        assignment.bind(p::QUANTITY, &features.quantity);
        assignment.bind(p::CLOTHING_ROD_AMOUNT, &features.clothing_rod_amount);

        // 一个侧板厚度字段同时驱动左右两侧
        for name in [p::THICKNESS_SIDE_PANEL_LEFT, p::THICKNESS_SIDE_PANEL_RIGHT] {
            assignment.bind(name, &features.side_panel_thickness);
        }

        // 一个踢脚厚度字段同时驱动三条腿
        for name in [
            p::THICKNESS_PLINTH_BOTTOM,
            p::THICKNESS_PLINTH_LEFT,
            p::THICKNESS_PLINTH_RIGHT,
        ] {
            assignment.bind(name, &features.plinth_thickness);
        }

        if let Parsed::Recognized(FrontType::Drawers { count }) =
            FrontType::parse(&features.front_type)
        {
            match count {
                Some(n) => assignment.bind(p::DRAWER_AMOUNT, n),
                None => warnings.push(ResolveWarning::parse_failure(
                    fields::FRONT_TYPE,
                    &features.front_type,
                )),
            }
        }

        (assignment, warnings)
    }
}
