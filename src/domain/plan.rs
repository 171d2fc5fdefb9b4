// ==========================================
// 柜体配置批量导出系统 - 单条记录的解析产物
// ==========================================
// VisibilityPlan / ParameterAssignment / ColorAssignment 均为纯数据,
// 由引擎层按记录重新生成,跨记录不共享状态
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// ==========================================
// 可恢复告警 (Resolve Warning)
// ==========================================
// 不中断记录处理,汇总进运行报告
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResolveWarning {
    /// 未识别的枚举取值（入口类型/前板/踢脚/侧板）
    UnrecognizedEnum { dimension: String, value: String },
    /// 数值解析失败,对应参数被省略
    ParseFailure { field: String, value: String },
}

impl ResolveWarning {
    pub fn unrecognized(dimension: &str, value: &str) -> Self {
        ResolveWarning::UnrecognizedEnum {
            dimension: dimension.to_string(),
            value: value.to_string(),
        }
    }

    pub fn parse_failure(field: &str, value: &str) -> Self {
        ResolveWarning::ParseFailure {
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}

impl fmt::Display for ResolveWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveWarning::UnrecognizedEnum { dimension, value } => {
                write!(f, "未识别的{}取值: {:?}", dimension, value)
            }
            ResolveWarning::ParseFailure { field, value } => {
                write!(f, "字段 {} 无法解析为整数: {:?}", field, value)
            }
        }
    }
}

// ==========================================
// VisibilityPlan - 可见性计划
// ==========================================
// 路径 -> 显示/隐藏;BTreeMap 保证迭代顺序稳定
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilityPlan {
    entries: BTreeMap<String, bool>,
}

impl VisibilityPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, path: impl Into<String>, visible: bool) {
        self.entries.insert(path.into(), visible);
    }

    pub fn hide_all(&mut self, paths: &[&str]) {
        for path in paths {
            self.set(*path, false);
        }
    }

    pub fn get(&self, path: &str) -> Option<bool> {
        self.entries.get(path).copied()
    }

    pub fn is_visible(&self, path: &str) -> bool {
        self.get(path).unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn visible_paths(&self) -> Vec<&str> {
        self.iter().filter(|(_, v)| *v).map(|(k, _)| k).collect()
    }

    /// 合并另一维度的子计划（各维度路径集合互不相交）
    pub fn merge(&mut self, other: VisibilityPlan) {
        for (path, visible) in other.entries {
            debug_assert!(
                !self.entries.contains_key(&path),
                "维度路径重叠: {}",
                path
            );
            self.entries.insert(path, visible);
        }
    }
}

// ==========================================
// ParameterAssignment - 参数赋值
// ==========================================
// 参数名 -> 表达式字符串;未知参数由外部模型静默忽略
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterAssignment {
    values: BTreeMap<String, String>,
}

impl ParameterAssignment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&mut self, name: impl Into<String>, value: impl ToString) {
        self.values.insert(name.into(), value.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

// ==========================================
// ColorAssignment - 外观颜色
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorAssignment {
    pub appearance: String,
    pub color: Rgb,
}

// ==========================================
// MassSample - 质量采样
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MassSample {
    pub assembly: String,
    /// 保留 3 位小数（kg）;无法解析时为 0
    pub mass: f64,
}

/// 四舍五入到 3 位小数
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
