// ==========================================
// 柜体配置批量导出系统 - 组件路径缓存
// ==========================================
// 职责: 按完整路径字符串缓存节点句柄,避免重复遍历模型树
// 说明: 只缓存最终句柄,中间段不缓存;未找到的路径不缓存
// 生命周期: 一次批量运行内有效,运行开始时清空
// ==========================================

use crate::model::traits::{ModelTree, NodeHandle};
use std::collections::HashMap;
use tracing::trace;

#[derive(Debug, Default)]
pub struct PathCache {
    handles: HashMap<String, NodeHandle>,
    traversals: usize,
}

impl PathCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// 解析组件路径
    ///
    /// # 参数
    /// - tree: 模型树
    /// - path: "/" 分隔的路径,从根节点的直接子节点开始
    ///
    /// # 返回
    /// - Some(handle): 已解析（可能来自缓存）
    /// - None: 任一段未找到;调用方应跳过该赋值
    pub fn resolve<T>(&mut self, tree: &T, path: &str) -> Option<NodeHandle>
    where
        T: ModelTree + ?Sized,
    {
        if let Some(handle) = self.handles.get(path) {
            return Some(*handle);
        }

        self.traversals += 1;
        let mut current = tree.root();
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            match tree.resolve_child(current, segment) {
                Some(child) => current = child,
                None => {
                    trace!(path = path, segment = segment, "路径段未找到");
                    return None;
                }
            }
        }

        if current == tree.root() {
            // 空路径不指向任何组件
            return None;
        }

        self.handles.insert(path.to_string(), current);
        Some(current)
    }

    /// 清空缓存（模型拓扑可能已变化时调用）
    pub fn clear(&mut self) {
        self.handles.clear();
        self.traversals = 0;
    }

    /// 实际执行的树遍历次数（命中缓存不计）
    pub fn traversal_count(&self) -> usize {
        self.traversals
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}
