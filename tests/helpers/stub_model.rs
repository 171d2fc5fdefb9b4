// ==========================================
// 计数桩模型 - 用于集成测试
// ==========================================
// 职责: 实现全部外部协作者接口,并记录调用轨迹
// 可观测: 子节点枚举次数、操作顺序、导出路径
// 可注入: 缺失节点、同名兄弟、指定次序的导出或重算失败
// ==========================================

use cabinet_export::domain::catalogue::{self, parameters};
use cabinet_export::domain::plan::Rgb;
use cabinet_export::model::{
    AppearanceService, DesignModel, ExportOptions, Exporter, MassQuery, ModelError, ModelResult,
    ModelTree, NodeHandle, ParameterStore, Recompute,
};
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

/// 模型操作轨迹
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    SetVisible(usize, bool),
    SetParameter(String, String),
    SetColor(String),
    Recompute,
    MassRead(usize),
    Export(PathBuf),
}

pub struct StubModel {
    names: Vec<String>,
    children: Vec<Vec<usize>>,
    visible: Vec<bool>,
    /// 重算后才生效的质量
    pending_mass: HashMap<usize, f64>,
    settled_mass: HashMap<usize, f64>,
    parameters: BTreeMap<String, String>,
    colors: BTreeMap<String, Rgb>,
    appearance_names: Vec<String>,
    child_lookups: Cell<usize>,
    ops: RefCell<Vec<Op>>,
    export_attempts: usize,
    fail_export_at: Option<usize>,
    recompute_attempts: usize,
    fail_recompute_at: Option<usize>,
}

impl StubModel {
    pub fn new() -> Self {
        Self {
            names: vec!["Root".to_string()],
            children: vec![Vec::new()],
            visible: vec![true],
            pending_mass: HashMap::new(),
            settled_mass: HashMap::new(),
            parameters: BTreeMap::new(),
            colors: BTreeMap::new(),
            appearance_names: Vec::new(),
            child_lookups: Cell::new(0),
            ops: RefCell::new(Vec::new()),
            export_attempts: 0,
            fail_export_at: None,
            recompute_attempts: 0,
            fail_recompute_at: None,
        }
    }

    /// 标准柜体: 全部受控路径 + 全部参数 + 三个外观
    pub fn cabinet() -> Self {
        let mut model = Self::new();
        model.add_path(catalogue::INSIDE);
        model.add_path(catalogue::OUTSIDE);
        for path in catalogue::controlled_paths() {
            model.add_path(path);
        }
        for name in parameters::ALL {
            model.parameters.insert(name.to_string(), "0".to_string());
        }
        for name in [
            catalogue::FRONT_APPEARANCE,
            catalogue::CORPUS_APPEARANCE,
            catalogue::PLINTH_APPEARANCE,
        ] {
            model.appearance_names.push(name.to_string());
        }
        model
    }

    /// 追加子节点（允许同名兄弟）
    pub fn add_child(&mut self, parent: NodeHandle, name: &str) -> NodeHandle {
        let index = self.names.len();
        self.names.push(name.to_string());
        self.children.push(Vec::new());
        self.visible.push(true);
        self.children[parent.0].push(index);
        NodeHandle(index)
    }

    /// 按路径创建节点,已存在的段复用
    pub fn add_path(&mut self, path: &str) -> NodeHandle {
        let mut current = 0;
        for segment in path.split('/') {
            current = match self.child_named(current, segment) {
                Some(existing) => existing,
                None => self.add_child(NodeHandle(current), segment).0,
            };
        }
        NodeHandle(current)
    }

    /// 设置组件质量（下次重算后可读）
    pub fn set_mass(&mut self, path: &str, mass: f64) {
        let handle = self.add_path(path);
        self.pending_mass.insert(handle.0, mass);
    }

    pub fn fail_export_at(mut self, attempt: usize) -> Self {
        self.fail_export_at = Some(attempt);
        self
    }

    pub fn fail_recompute_at(mut self, attempt: usize) -> Self {
        self.fail_recompute_at = Some(attempt);
        self
    }

    // ===== 观测 =====

    /// 不计数的路径查找
    pub fn find(&self, path: &str) -> Option<NodeHandle> {
        let mut current = 0;
        for segment in path.split('/') {
            current = self.child_named(current, segment)?;
        }
        Some(NodeHandle(current))
    }

    pub fn is_visible(&self, path: &str) -> bool {
        self.find(path).map(|h| self.visible[h.0]).unwrap_or(false)
    }

    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters.get(name).map(String::as_str)
    }

    pub fn color(&self, appearance: &str) -> Option<Rgb> {
        self.colors.get(appearance).copied()
    }

    /// list_children 调用次数
    pub fn child_lookups(&self) -> usize {
        self.child_lookups.get()
    }

    pub fn ops(&self) -> Vec<Op> {
        self.ops.borrow().clone()
    }

    pub fn export_attempts(&self) -> usize {
        self.export_attempts
    }

    pub fn exported_paths(&self) -> Vec<PathBuf> {
        self.ops
            .borrow()
            .iter()
            .filter_map(|op| match op {
                Op::Export(path) => Some(path.clone()),
                _ => None,
            })
            .collect()
    }

    fn child_named(&self, parent: usize, name: &str) -> Option<usize> {
        self.children[parent]
            .iter()
            .copied()
            .find(|c| self.names[*c] == name)
    }

    fn record(&self, op: Op) {
        self.ops.borrow_mut().push(op);
    }
}

impl ModelTree for StubModel {
    fn root(&self) -> NodeHandle {
        NodeHandle(0)
    }

    fn list_children(&self, parent: NodeHandle) -> Vec<NodeHandle> {
        self.child_lookups.set(self.child_lookups.get() + 1);
        self.children
            .get(parent.0)
            .map(|c| c.iter().map(|i| NodeHandle(*i)).collect())
            .unwrap_or_default()
    }

    fn node_name(&self, node: NodeHandle) -> Option<String> {
        self.names.get(node.0).cloned()
    }

    fn set_visible(&mut self, node: NodeHandle, visible: bool) {
        self.visible[node.0] = visible;
        self.record(Op::SetVisible(node.0, visible));
    }
}

impl ParameterStore for StubModel {
    fn set_expression(&mut self, name: &str, value: &str) -> bool {
        match self.parameters.get_mut(name) {
            Some(slot) => {
                *slot = value.to_string();
                self.record(Op::SetParameter(name.to_string(), value.to_string()));
                true
            }
            None => false,
        }
    }
}

impl Recompute for StubModel {
    fn trigger(&mut self) -> ModelResult<()> {
        self.recompute_attempts += 1;
        if self.fail_recompute_at == Some(self.recompute_attempts) {
            return Err(ModelError::RecomputeFailed("模拟重算失败".to_string()));
        }
        self.settled_mass = self.pending_mass.clone();
        self.record(Op::Recompute);
        Ok(())
    }
}

impl MassQuery for StubModel {
    fn mass_of(&self, node: NodeHandle) -> Option<f64> {
        self.record(Op::MassRead(node.0));
        self.settled_mass.get(&node.0).copied()
    }
}

impl Exporter for StubModel {
    fn export_to(&mut self, path: &Path, _options: &ExportOptions) -> ModelResult<()> {
        self.export_attempts += 1;
        if self.fail_export_at == Some(self.export_attempts) {
            return Err(ModelError::ExportFailed {
                path: path.display().to_string(),
                message: "模拟导出失败".to_string(),
            });
        }
        fs::write(path, b"stub").map_err(|e| ModelError::ExportFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        self.record(Op::Export(path.to_path_buf()));
        Ok(())
    }
}

impl AppearanceService for StubModel {
    fn set_color(&mut self, appearance: &str, color: Rgb) -> bool {
        if !self.appearance_names.iter().any(|n| n == appearance) {
            return false;
        }
        self.colors.insert(appearance.to_string(), color);
        self.record(Op::SetColor(appearance.to_string()));
        true
    }
}

impl DesignModel for StubModel {
    fn appearance(&mut self) -> Option<&mut dyn AppearanceService> {
        Some(self as &mut dyn AppearanceService)
    }
}
