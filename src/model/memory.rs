// ==========================================
// 柜体配置批量导出系统 - 内存参考模型
// ==========================================
// 职责: 以内存树实现全部外部协作者接口,用于试运行与测试
// 导出: 写出 JSON 快照（可见路径 / 参数 / 颜色 / 质量）
// ==========================================

use crate::domain::catalogue::{self, parameters};
use crate::domain::plan::Rgb;
use crate::domain::types::ExportFormat;
use crate::model::error::{ModelError, ModelResult};
use crate::model::traits::{
    AppearanceService, DesignModel, ExportOptions, Exporter, MassQuery, ModelTree, NodeHandle,
    ParameterStore, Recompute,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

const ROOT_NAME: &str = "Root";

#[derive(Debug, Clone)]
struct Node {
    name: String,
    parent: Option<usize>,
    children: Vec<usize>,
    visible: bool,
    base_mass: f64,
    /// 质量按该参数的数值倍增（如搁板数量）
    count_parameter: Option<String>,
}

// ==========================================
// 模型描述文件（JSON）
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeDescription {
    pub name: String,
    #[serde(default)]
    pub mass: f64,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub count_parameter: Option<String>,
    #[serde(default)]
    pub children: Vec<NodeDescription>,
}

fn default_visible() -> bool {
    true
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelDescription {
    /// 根节点的直接子节点
    #[serde(default)]
    pub nodes: Vec<NodeDescription>,
    /// 已知用户参数及其初始表达式
    #[serde(default)]
    pub parameters: BTreeMap<String, String>,
    #[serde(default)]
    pub appearances: Vec<String>,
}

/// 导出快照
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSnapshot {
    pub format: ExportFormat,
    pub visible_paths: Vec<String>,
    pub parameters: BTreeMap<String, String>,
    pub appearances: BTreeMap<String, Rgb>,
    pub assembly_masses: BTreeMap<String, f64>,
    pub recompute_generation: u64,
}

// ==========================================
// InMemoryModel - 内存参考模型
// ==========================================
#[derive(Debug, Clone)]
pub struct InMemoryModel {
    nodes: Vec<Node>,
    parameters: BTreeMap<String, String>,
    appearances: BTreeMap<String, Option<Rgb>>,
    /// 最近一次重算得到的质量;重算前读取得到的是旧值
    computed_mass: Vec<Option<f64>>,
    generation: u64,
    appearance_enabled: bool,
}

impl Default for InMemoryModel {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryModel {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                name: ROOT_NAME.to_string(),
                parent: None,
                children: Vec::new(),
                visible: true,
                base_mass: 0.0,
                count_parameter: None,
            }],
            parameters: BTreeMap::new(),
            appearances: BTreeMap::new(),
            computed_mass: vec![None],
            generation: 0,
            appearance_enabled: true,
        }
    }

    /// 标准柜体模型: 包含目录中的全部受控路径、质量统计组件与用户参数
    pub fn cabinet() -> Self {
        let mut model = Self::new();

        // 箱体本体质量挂在 Inside / Outside 上
        model.add_path(catalogue::INSIDE, 4.2);
        model.add_path(catalogue::OUTSIDE, 26.8);

        let masses: &[(&str, f64)] = &[
            (catalogue::PARTS, 0.0),
            (catalogue::ROUND_PART, 1.35),
            (catalogue::HALF_ROUND_PART, 0.72),
            (catalogue::SQUARE_PART, 1.8),
            (catalogue::SINGLE_DOOR, 9.4),
            (catalogue::DOUBLE_DOOR, 10.1),
            (catalogue::FIXED_FRONT, 8.7),
            (catalogue::DOOR_DRAWER, 11.6),
            (catalogue::DOUBLE_DOOR_DOUBLE_DRAWER, 14.3),
            (catalogue::DOOR_FIXED_FRONT, 10.9),
            (catalogue::DOUBLE_DOOR_FIXED_FRONT, 12.2),
            (catalogue::DRAWERS, 0.0),
            (catalogue::HANDLE, 0.18),
            (catalogue::HINGES, 0.24),
            (catalogue::HANDLE_MIRRORED, 0.18),
            (catalogue::HINGES_MIRRORED, 0.24),
            (catalogue::DRAWER_HANDLE, 0.16),
            (catalogue::PLINTH_BOTTOM, 2.1),
            (catalogue::PLINTH_LEFT, 1.4),
            (catalogue::PLINTH_RIGHT, 1.4),
            (catalogue::SIDE_PANEL_LEFT, 7.9),
            (catalogue::SIDE_PANEL_RIGHT, 7.9),
            (catalogue::SHELVES, 0.0),
            (catalogue::DIVIDERS, 0.0),
            (catalogue::CLOTHING_RODS, 0.0),
            (catalogue::FEET, 0.6),
        ];
        for (path, mass) in masses {
            model.add_path(path, *mass);
        }

        // 按数量倍增的单件
        let counted: &[(&str, &str, f64)] = &[
            (catalogue::DRAWERS, parameters::DRAWER_AMOUNT, 3.8),
            (catalogue::SHELVES, parameters::SHELF_AMOUNT, 3.2),
            (catalogue::DIVIDERS, parameters::DIVIDER_AMOUNT, 5.1),
            (catalogue::CLOTHING_RODS, parameters::CLOTHING_ROD_AMOUNT, 0.9),
        ];
        for (path, parameter, unit_mass) in counted {
            let handle = model.add_path(&format!("{}/Unit:1", path), *unit_mass);
            model.nodes[handle.0].count_parameter = Some(parameter.to_string());
        }

        for name in parameters::ALL {
            model.declare_parameter(name, "0");
        }
        for name in [
            catalogue::FRONT_APPEARANCE,
            catalogue::CORPUS_APPEARANCE,
            catalogue::PLINTH_APPEARANCE,
        ] {
            model.declare_appearance(name);
        }
        model
    }

    /// 从描述结构构建
    pub fn from_description(description: &ModelDescription) -> Self {
        let mut model = Self::new();
        for node in &description.nodes {
            model.insert_description(0, node);
        }
        for (name, expression) in &description.parameters {
            model.declare_parameter(name, expression);
        }
        for name in &description.appearances {
            model.declare_appearance(name);
        }
        model
    }

    pub fn from_json(json: &str) -> ModelResult<Self> {
        let description: ModelDescription = serde_json::from_str(json)?;
        if description.nodes.is_empty() {
            return Err(ModelError::InvalidDescription("模型描述不含任何节点".to_string()));
        }
        Ok(Self::from_description(&description))
    }

    pub fn from_file(path: &Path) -> ModelResult<Self> {
        let json = fs::read_to_string(path).map_err(|e| {
            ModelError::InvalidDescription(format!("{}: {}", path.display(), e))
        })?;
        Self::from_json(&json)
    }

    fn insert_description(&mut self, parent: usize, description: &NodeDescription) {
        let handle = self.add_child(NodeHandle(parent), &description.name, description.mass);
        let node = &mut self.nodes[handle.0];
        node.visible = description.visible;
        node.count_parameter = description.count_parameter.clone();
        for child in &description.children {
            self.insert_description(handle.0, child);
        }
    }

    // ===== 构建 =====

    /// 追加子节点（允许同名兄弟）
    pub fn add_child(&mut self, parent: NodeHandle, name: &str, mass: f64) -> NodeHandle {
        let index = self.nodes.len();
        self.nodes.push(Node {
            name: name.to_string(),
            parent: Some(parent.0),
            children: Vec::new(),
            visible: true,
            base_mass: mass,
            count_parameter: None,
        });
        self.computed_mass.push(None);
        self.nodes[parent.0].children.push(index);
        NodeHandle(index)
    }

    /// 按路径创建节点;已存在的中间节点复用,末端节点更新质量
    pub fn add_path(&mut self, path: &str, mass: f64) -> NodeHandle {
        let mut current = self.root();
        for segment in path.split('/') {
            current = match self.resolve_child(current, segment) {
                Some(existing) => existing,
                None => self.add_child(current, segment, 0.0),
            };
        }
        self.nodes[current.0].base_mass = mass;
        current
    }

    pub fn declare_parameter(&mut self, name: &str, expression: &str) {
        self.parameters
            .insert(name.to_string(), expression.to_string());
    }

    pub fn declare_appearance(&mut self, name: &str) {
        self.appearances.insert(name.to_string(), None);
    }

    /// 模拟不支持外观服务的旧版宿主
    pub fn without_appearance(mut self) -> Self {
        self.appearance_enabled = false;
        self
    }

    // ===== 查询 =====

    /// 按路径查找（不缓存,首个匹配者胜出）
    pub fn find(&self, path: &str) -> Option<NodeHandle> {
        let mut current = self.root();
        for segment in path.split('/') {
            current = self.resolve_child(current, segment)?;
        }
        Some(current)
    }

    pub fn is_visible(&self, node: NodeHandle) -> bool {
        self.nodes.get(node.0).map(|n| n.visible).unwrap_or(false)
    }

    /// 路径可见性（节点不存在视为不可见）
    pub fn path_visible(&self, path: &str) -> bool {
        self.find(path).map(|h| self.is_visible(h)).unwrap_or(false)
    }

    pub fn path_of(&self, node: NodeHandle) -> String {
        let mut segments = Vec::new();
        let mut current = Some(node.0);
        while let Some(index) = current {
            if index == 0 {
                break;
            }
            segments.push(self.nodes[index].name.as_str());
            current = self.nodes[index].parent;
        }
        segments.reverse();
        segments.join("/")
    }

    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters.get(name).map(String::as_str)
    }

    pub fn color(&self, appearance: &str) -> Option<Rgb> {
        self.appearances.get(appearance).copied().flatten()
    }

    /// 已完成的重算次数
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn snapshot(&self, format: ExportFormat) -> ModelSnapshot {
        let visible_paths = (1..self.nodes.len())
            .filter(|i| self.effectively_visible(*i))
            .map(|i| self.path_of(NodeHandle(i)))
            .collect();

        let assembly_masses = (1..self.nodes.len())
            .filter(|i| !self.nodes[*i].children.is_empty())
            .filter_map(|i| {
                self.computed_mass[i].map(|m| (self.path_of(NodeHandle(i)), m))
            })
            .collect();

        let appearances = self
            .appearances
            .iter()
            .filter_map(|(name, color)| color.map(|c| (name.clone(), c)))
            .collect();

        ModelSnapshot {
            format,
            visible_paths,
            parameters: self.parameters.clone(),
            appearances,
            assembly_masses,
            recompute_generation: self.generation,
        }
    }

    // ===== 内部计算 =====

    fn effectively_visible(&self, index: usize) -> bool {
        let mut current = Some(index);
        while let Some(i) = current {
            if !self.nodes[i].visible {
                return false;
            }
            current = self.nodes[i].parent;
        }
        true
    }

    fn multiplier(&self, node: &Node) -> f64 {
        node.count_parameter
            .as_deref()
            .and_then(|name| self.parameters.get(name))
            .and_then(|expr| expr.split_whitespace().next())
            .and_then(|token| token.parse::<f64>().ok())
            .unwrap_or(1.0)
    }

    /// 节点自身质量 + 可见子树质量
    fn subtree_mass(&self, index: usize) -> f64 {
        let node = &self.nodes[index];
        let own = node.base_mass * self.multiplier(node);
        own + node
            .children
            .iter()
            .filter(|c| self.nodes[**c].visible)
            .map(|c| self.subtree_mass(*c))
            .sum::<f64>()
    }
}

// ==========================================
// 协作者接口实现
// ==========================================

impl ModelTree for InMemoryModel {
    fn root(&self) -> NodeHandle {
        NodeHandle(0)
    }

    fn list_children(&self, parent: NodeHandle) -> Vec<NodeHandle> {
        self.nodes
            .get(parent.0)
            .map(|n| n.children.iter().map(|c| NodeHandle(*c)).collect())
            .unwrap_or_default()
    }

    fn node_name(&self, node: NodeHandle) -> Option<String> {
        self.nodes.get(node.0).map(|n| n.name.clone())
    }

    fn set_visible(&mut self, node: NodeHandle, visible: bool) {
        if let Some(n) = self.nodes.get_mut(node.0) {
            n.visible = visible;
        }
    }
}

impl ParameterStore for InMemoryModel {
    fn set_expression(&mut self, name: &str, value: &str) -> bool {
        match self.parameters.get_mut(name) {
            Some(expression) => {
                *expression = value.to_string();
                true
            }
            None => false,
        }
    }
}

impl Recompute for InMemoryModel {
    fn trigger(&mut self) -> ModelResult<()> {
        let masses: Vec<Option<f64>> = (0..self.nodes.len())
            .map(|i| Some(self.subtree_mass(i)))
            .collect();
        self.computed_mass = masses;
        self.generation += 1;
        debug!(generation = self.generation, "内存模型重算完成");
        Ok(())
    }
}

impl MassQuery for InMemoryModel {
    fn mass_of(&self, node: NodeHandle) -> Option<f64> {
        self.computed_mass.get(node.0).copied().flatten()
    }
}

impl Exporter for InMemoryModel {
    fn export_to(&mut self, path: &Path, options: &ExportOptions) -> ModelResult<()> {
        let export_failed = |message: String| ModelError::ExportFailed {
            path: path.display().to_string(),
            message,
        };

        let snapshot = self.snapshot(options.format);
        let json = serde_json::to_string_pretty(&snapshot)
            .map_err(|e| ModelError::SnapshotFailed(e.to_string()))?;

        // 先写临时文件再改名,失败时不留下目标文件
        let partial = path.with_extension("partial");
        fs::write(&partial, json).map_err(|e| export_failed(e.to_string()))?;
        if let Err(e) = fs::rename(&partial, path) {
            let _ = fs::remove_file(&partial);
            return Err(export_failed(e.to_string()));
        }
        Ok(())
    }
}

impl AppearanceService for InMemoryModel {
    fn set_color(&mut self, appearance: &str, color: Rgb) -> bool {
        match self.appearances.get_mut(appearance) {
            Some(slot) => {
                *slot = Some(color);
                true
            }
            None => false,
        }
    }
}

impl DesignModel for InMemoryModel {
    fn appearance(&mut self) -> Option<&mut dyn AppearanceService> {
        if self.appearance_enabled {
            Some(self as &mut dyn AppearanceService)
        } else {
            None
        }
    }
}
