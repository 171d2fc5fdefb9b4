// ==========================================
// 柜体配置批量导出系统 - 可见性规划器
// ==========================================
// 职责: 配置记录 → 完整的 (路径, 显示/隐藏) 计划
// 红线: 纯函数,不访问模型、不依赖缓存状态
// 规则: 每个特征维度先隐藏其全部路径,再按取值显示;
//       各维度路径集互不相交,合并时不会相互覆盖
// ==========================================

use crate::domain::catalogue as cat;
use crate::domain::plan::{ResolveWarning, VisibilityPlan};
use crate::domain::record::{fields, ConfigurationRecord};
use crate::domain::types::{
    EntryType, FrontType, PanelSetting, Parsed, PlinthSetting, RecordShape,
};

/// 单维度规划结果
type DimensionPlan = (VisibilityPlan, Option<ResolveWarning>);

#[derive(Debug, Default, Clone, Copy)]
pub struct VisibilityPlanner;

impl VisibilityPlanner {
    pub fn new() -> Self {
        Self
    }

    /// 生成单条记录的可见性计划
    ///
    /// # 返回
    /// - VisibilityPlan: 记录形态涉及的全部维度均已显式赋值
    /// - Vec<ResolveWarning>: 未识别取值 / 数量解析失败
    pub fn plan(&self, record: &ConfigurationRecord) -> (VisibilityPlan, Vec<ResolveWarning>) {
        let mut plan = VisibilityPlan::new();
        let mut warnings = Vec::new();

        let mut absorb = |(sub_plan, warning): DimensionPlan| {
            plan.merge(sub_plan);
            warnings.extend(warning);
        };

        // 搁板 / 隔板: 所有形态都有
        absorb(count_gate(cat::SHELVES, fields::SHELF_AMOUNT, &record.shelf_amount));
        absorb(count_gate(cat::DIVIDERS, fields::DIVIDER_AMOUNT, &record.divider_amount));

        if let Some(entry) = &record.entry_type {
            absorb(plan_entry(entry));
        }

        if let Some(features) = &record.features {
            absorb(plan_front(&features.front_type, record.shape));
            absorb(plan_plinth(&features.plinth));
            absorb(plan_panels(&features.side_panel));
            absorb(plan_feet(&features.feet));
            absorb(count_gate(
                cat::CLOTHING_RODS,
                fields::CLOTHING_ROD_AMOUNT,
                &features.clothing_rod_amount,
            ));
        }

        (plan, warnings)
    }
}

// ==========================================
// 各特征维度
// ==========================================

/// 入口类型: 只显示一个顶层组件（零件类同时显示 Parts 容器）
fn plan_entry(value: &str) -> DimensionPlan {
    let mut plan = VisibilityPlan::new();

    let entry = match EntryType::parse(value) {
        Parsed::Recognized(entry) => entry,
        // 未识别: 本维度不做任何赋值
        Parsed::Unrecognized(raw) => {
            return (plan, Some(ResolveWarning::unrecognized(fields::ENTRY_TYPE, &raw)))
        }
    };

    plan.hide_all(cat::ENTRY_PATHS);
    let selected = match entry {
        EntryType::Cabinet => cat::CABINET,
        EntryType::RoundPart => cat::ROUND_PART,
        EntryType::HalfRoundPart => cat::HALF_ROUND_PART,
        EntryType::SquarePart => cat::SQUARE_PART,
    };
    plan.set(selected, true);
    if entry.is_part() {
        plan.set(cat::PARTS, true);
    }
    (plan, None)
}

/// 前板类型对应的前板组件与五金
pub fn front_components(front: FrontType) -> &'static [&'static str] {
    match front {
        FrontType::OneDoor => &[cat::SINGLE_DOOR, cat::HANDLE, cat::HINGES],
        FrontType::TwoDoors => &[
            cat::DOUBLE_DOOR,
            cat::HANDLE,
            cat::HINGES,
            cat::HANDLE_MIRRORED,
            cat::HINGES_MIRRORED,
        ],
        FrontType::FixedFront => &[cat::FIXED_FRONT],
        FrontType::OneDoorDrawer => &[
            cat::DOOR_DRAWER,
            cat::HANDLE,
            cat::HINGES,
            cat::DRAWER_HANDLE,
        ],
        FrontType::TwoDoorsTwoDrawers => &[
            cat::DOUBLE_DOOR_DOUBLE_DRAWER,
            cat::HANDLE,
            cat::HINGES,
            cat::HANDLE_MIRRORED,
            cat::HINGES_MIRRORED,
            cat::DRAWER_HANDLE,
        ],
        FrontType::OneDoorFixedFront => &[cat::DOOR_FIXED_FRONT, cat::HANDLE, cat::HINGES],
        FrontType::TwoDoorsFixedFront => &[
            cat::DOUBLE_DOOR_FIXED_FRONT,
            cat::HANDLE,
            cat::HINGES,
            cat::HANDLE_MIRRORED,
            cat::HINGES_MIRRORED,
        ],
        // 抽屉数量只影响参数,不影响可见性
        FrontType::Drawers { .. } => &[cat::DRAWERS, cat::DRAWER_HANDLE],
    }
}

/// 前板: 全部前板变体与五金先隐藏,再显示所选变体
///
/// Mid 形态的标签区分大小写
fn plan_front(value: &str, shape: RecordShape) -> DimensionPlan {
    let mut plan = VisibilityPlan::new();
    plan.hide_all(cat::FRONT_PATHS);

    match FrontType::parse_for_shape(value, shape) {
        Parsed::Recognized(front) => {
            for path in front_components(front) {
                plan.set(*path, true);
            }
            (plan, None)
        }
        Parsed::Unrecognized(raw) => {
            (plan, Some(ResolveWarning::unrecognized(fields::FRONT_TYPE, &raw)))
        }
    }
}

/// 踢脚: 三条腿按子串各自判定
fn plan_plinth(value: &str) -> DimensionPlan {
    let mut plan = VisibilityPlan::new();
    plan.hide_all(cat::PLINTH_PATHS);

    match PlinthSetting::parse(value) {
        Parsed::Recognized(setting) => {
            plan.set(cat::PLINTH_BOTTOM, setting.bottom);
            plan.set(cat::PLINTH_LEFT, setting.left);
            plan.set(cat::PLINTH_RIGHT, setting.right);
            (plan, None)
        }
        Parsed::Unrecognized(raw) => {
            (plan, Some(ResolveWarning::unrecognized(fields::PLINTH, &raw)))
        }
    }
}

/// 侧板: 精确匹配
fn plan_panels(value: &str) -> DimensionPlan {
    let mut plan = VisibilityPlan::new();
    plan.hide_all(cat::PANEL_PATHS);

    match PanelSetting::parse(value) {
        Parsed::Recognized(setting) => {
            plan.set(cat::SIDE_PANEL_RIGHT, setting.shows_right());
            plan.set(cat::SIDE_PANEL_LEFT, setting.shows_left());
            (plan, None)
        }
        Parsed::Unrecognized(raw) => {
            (plan, Some(ResolveWarning::unrecognized(fields::SIDE_PANEL, &raw)))
        }
    }
}

/// 柜脚: 仅字面量 "1" 显示
fn plan_feet(value: &str) -> DimensionPlan {
    let mut plan = VisibilityPlan::new();
    plan.set(cat::FEET, value.trim() == "1");
    (plan, None)
}

/// 数量门控: 数量 > 0 时显示;非整数按 0 处理并告警
fn count_gate(path: &str, field: &str, value: &str) -> DimensionPlan {
    let mut plan = VisibilityPlan::new();
    match parse_count(value) {
        Some(count) => {
            plan.set(path, count > 0);
            (plan, None)
        }
        None => {
            plan.set(path, false);
            (plan, Some(ResolveWarning::parse_failure(field, value)))
        }
    }
}

/// 数量字段取首个词（兼容 "2 pcs" 之类写法）
pub fn parse_count(value: &str) -> Option<i64> {
    value.split_whitespace().next()?.parse::<i64>().ok()
}
