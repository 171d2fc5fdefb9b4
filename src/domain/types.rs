// ==========================================
// 柜体配置批量导出系统 - 领域类型定义
// ==========================================
// 职责: 配置表中各类枚举字段的显式解析
// 红线: 字符串匹配规则集中在本文件,调用方只处理已识别的变体
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 解析结果 (Parsed)
// ==========================================
// 未识别的取值保留原文,由调用方转为告警
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed<T> {
    Recognized(T),
    Unrecognized(String),
}

impl<T> Parsed<T> {
    pub fn recognized(self) -> Option<T> {
        match self {
            Parsed::Recognized(v) => Some(v),
            Parsed::Unrecognized(_) => None,
        }
    }
}

// ==========================================
// 记录形态 (Record Shape)
// ==========================================
// 配置表历经三个互不兼容的版本,按表头判定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecordShape {
    Legacy, // 9 列,文件名 + 尺寸
    Mid,    // 父级/元素标签 + 前板/踢脚/侧板等
    Latest, // Mid + 入口类型 + 颜色
}

impl fmt::Display for RecordShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordShape::Legacy => write!(f, "LEGACY"),
            RecordShape::Mid => write!(f, "MID"),
            RecordShape::Latest => write!(f, "LATEST"),
        }
    }
}

// ==========================================
// 入口类型 (Entry Type)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryType {
    Cabinet,
    RoundPart,
    HalfRoundPart,
    SquarePart,
}

impl EntryType {
    pub fn parse(value: &str) -> Parsed<Self> {
        match value.trim().to_lowercase().as_str() {
            "cabinet" => Parsed::Recognized(EntryType::Cabinet),
            "round part" => Parsed::Recognized(EntryType::RoundPart),
            "half round part" => Parsed::Recognized(EntryType::HalfRoundPart),
            "square part" => Parsed::Recognized(EntryType::SquarePart),
            _ => Parsed::Unrecognized(value.to_string()),
        }
    }

    /// 是否属于零件类入口（需要同时显示共享的 Parts 容器）
    pub fn is_part(&self) -> bool {
        !matches!(self, EntryType::Cabinet)
    }
}

// ==========================================
// 前板类型 (Front Type)
// ==========================================
// 精确标签优先匹配;其余包含 "drawers" 的标签归入通用抽屉前板
// Mid 形态区分大小写,Latest 形态不区分
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrontType {
    OneDoor,
    TwoDoors,
    FixedFront,
    OneDoorDrawer,
    TwoDoorsTwoDrawers,
    OneDoorFixedFront,
    TwoDoorsFixedFront,
    /// "<N> drawers" 系列;N 缺失或非整数时为 None
    Drawers { count: Option<u32> },
}

const FRONT_LABELS: &[(&str, FrontType)] = &[
    ("One door", FrontType::OneDoor),
    ("Two doors", FrontType::TwoDoors),
    ("Fixed front", FrontType::FixedFront),
    ("One door + drawer", FrontType::OneDoorDrawer),
    ("Two doors + two drawers", FrontType::TwoDoorsTwoDrawers),
    ("One door + fixed front", FrontType::OneDoorFixedFront),
    ("Two doors + fixed front", FrontType::TwoDoorsFixedFront),
];

const DRAWERS_TOKEN: &str = "drawers";

impl FrontType {
    /// 不区分大小写的解析（Latest 形态,以及抽屉数量绑定）
    pub fn parse(value: &str) -> Parsed<Self> {
        let trimmed = value.trim();
        let exact = FRONT_LABELS
            .iter()
            .find(|(label, _)| label.eq_ignore_ascii_case(trimmed));
        if let Some((_, front)) = exact {
            return Parsed::Recognized(*front);
        }
        if trimmed.to_lowercase().contains(DRAWERS_TOKEN) {
            return Parsed::Recognized(FrontType::Drawers {
                count: leading_integer(trimmed),
            });
        }
        Parsed::Unrecognized(value.to_string())
    }

    /// 区分大小写的解析（Mid 形态）: 标签与 "drawers" 须与原文完全一致
    pub fn parse_strict(value: &str) -> Parsed<Self> {
        let trimmed = value.trim();
        if let Some((_, front)) = FRONT_LABELS.iter().find(|(label, _)| *label == trimmed) {
            return Parsed::Recognized(*front);
        }
        if trimmed.contains(DRAWERS_TOKEN) {
            return Parsed::Recognized(FrontType::Drawers {
                count: leading_integer(trimmed),
            });
        }
        Parsed::Unrecognized(value.to_string())
    }

    /// 按记录形态选择匹配规则
    pub fn parse_for_shape(value: &str, shape: RecordShape) -> Parsed<Self> {
        match shape {
            RecordShape::Mid => Self::parse_strict(value),
            RecordShape::Legacy | RecordShape::Latest => Self::parse(value),
        }
    }
}

/// 取首个空白分隔的词并解析为整数
pub fn leading_integer(value: &str) -> Option<u32> {
    value.split_whitespace().next()?.parse::<u32>().ok()
}

// ==========================================
// 踢脚设置 (Plinth Setting)
// ==========================================
// 三条腿各自独立,按子串成员判定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlinthSetting {
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl PlinthSetting {
    pub fn parse(value: &str) -> Parsed<Self> {
        let setting = PlinthSetting {
            bottom: value.contains("Bottom"),
            left: value.contains("Left"),
            right: value.contains("Right"),
        };
        let trimmed = value.trim();
        let none = trimmed
            .get(..4)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("none"));
        if setting.any() || trimmed.is_empty() || none {
            Parsed::Recognized(setting)
        } else {
            Parsed::Unrecognized(value.to_string())
        }
    }

    pub fn any(&self) -> bool {
        self.bottom || self.left || self.right
    }
}

// ==========================================
// 侧板设置 (Panel Setting)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanelSetting {
    Right,
    Left,
    Both,
    None,
}

impl PanelSetting {
    pub fn parse(value: &str) -> Parsed<Self> {
        match value.trim() {
            "Right" => Parsed::Recognized(PanelSetting::Right),
            "Left" => Parsed::Recognized(PanelSetting::Left),
            "Both" => Parsed::Recognized(PanelSetting::Both),
            "" | "None" | "None (Default)" => Parsed::Recognized(PanelSetting::None),
            _ => Parsed::Unrecognized(value.to_string()),
        }
    }

    pub fn shows_right(&self) -> bool {
        matches!(self, PanelSetting::Right | PanelSetting::Both)
    }

    pub fn shows_left(&self) -> bool {
        matches!(self, PanelSetting::Left | PanelSetting::Both)
    }
}

// ==========================================
// 运行状态 (Run State)
// ==========================================
// Idle -> Processing -> Completed | Failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RunState {
    Idle,
    Processing,
    Completed,
    Failed,
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunState::Idle => write!(f, "IDLE"),
            RunState::Processing => write!(f, "PROCESSING"),
            RunState::Completed => write!(f, "COMPLETED"),
            RunState::Failed => write!(f, "FAILED"),
        }
    }
}

// ==========================================
// 导出格式 (Export Format)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Step,
    Stl,
    F3d,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Step => "stp",
            ExportFormat::Stl => "stl",
            ExportFormat::F3d => "f3d",
        }
    }
}
