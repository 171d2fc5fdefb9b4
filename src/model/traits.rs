// ==========================================
// 柜体配置批量导出系统 - 外部协作者接口
// ==========================================
// 职责: 定义 CAD 应用侧的窄接口（不包含实现）
// 红线: 核心逻辑只通过这些 trait 访问模型,不获取任何全局应用句柄
// ==========================================

use crate::domain::plan::Rgb;
use crate::domain::types::ExportFormat;
use crate::model::error::ModelResult;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 模型树节点句柄（仅在一次会话内有效,不可持久化）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeHandle(pub usize);

// ==========================================
// ModelTree Trait
// ==========================================
// 用途: 层级组件树的遍历与可见性控制
pub trait ModelTree {
    /// 模型根节点
    fn root(&self) -> NodeHandle;

    /// 按顺序列出子节点
    fn list_children(&self, parent: NodeHandle) -> Vec<NodeHandle>;

    /// 节点名称（如 "Outside:1"）
    fn node_name(&self, node: NodeHandle) -> Option<String>;

    /// 查找名称匹配的子节点
    ///
    /// # 说明
    /// - 同名兄弟节点不做区分,首个匹配者胜出
    fn resolve_child(&self, parent: NodeHandle, name: &str) -> Option<NodeHandle> {
        self.list_children(parent)
            .into_iter()
            .find(|child| self.node_name(*child).as_deref() == Some(name))
    }

    /// 设置节点可见性
    fn set_visible(&mut self, node: NodeHandle, visible: bool);
}

// ==========================================
// ParameterStore Trait
// ==========================================
pub trait ParameterStore {
    /// 写入参数表达式
    ///
    /// # 返回
    /// - true: 已写入
    /// - false: 参数名未知,未做任何修改
    fn set_expression(&mut self, name: &str, value: &str) -> bool;
}

// ==========================================
// Recompute Trait
// ==========================================
pub trait Recompute {
    /// 触发重算,阻塞直至模型收敛
    fn trigger(&mut self) -> ModelResult<()>;
}

// ==========================================
// MassQuery Trait
// ==========================================
pub trait MassQuery {
    /// 读取质量前的刷新动作（部分内核需要"触碰"组件才会更新物理属性）
    fn touch(&mut self, _node: NodeHandle) {}

    /// 节点质量（kg）;质量属性不可用时返回 None
    fn mass_of(&self, node: NodeHandle) -> Option<f64>;
}

// ==========================================
// Exporter Trait
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExportOptions {
    pub format: ExportFormat,
}

pub trait Exporter {
    /// 导出当前模型状态到指定路径
    ///
    /// # 说明
    /// - 全有或全无: 失败时不得留下可寻址的半成品文件
    fn export_to(&mut self, path: &Path, options: &ExportOptions) -> ModelResult<()>;
}

// ==========================================
// AppearanceService Trait（可选）
// ==========================================
pub trait AppearanceService {
    /// 设置外观颜色
    ///
    /// # 返回
    /// - false: 外观名称未知
    fn set_color(&mut self, appearance: &str, color: Rgb) -> bool;
}

// ==========================================
// DesignModel Trait
// ==========================================
// 用途: 一次批量运行所需的全部协作者
// 实现者: InMemoryModel, 以及宿主 CAD 应用的适配器
pub trait DesignModel: ModelTree + ParameterStore + Recompute + MassQuery + Exporter {
    /// 外观服务;不支持时返回 None
    fn appearance(&mut self) -> Option<&mut dyn AppearanceService> {
        None
    }
}
