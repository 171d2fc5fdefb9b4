// ==========================================
// 柜体配置批量导出系统 - 质量评估器
// ==========================================
// 职责: 重算完成后读取指定组件质量,汇总为总质量
// 红线: 必须在重算收敛之后读取,否则得到上一条记录的旧值
//       （以 RecomputeSettled 凭据在类型上强制该顺序）
// ==========================================

use crate::domain::plan::{round3, MassSample};
use crate::engine::path_cache::PathCache;
use crate::model::error::ModelResult;
use crate::model::traits::{MassQuery, ModelTree, Recompute};
use tracing::debug;

/// 重算已收敛的凭据（只能由 [`settle`] 产生）
#[derive(Debug)]
pub struct RecomputeSettled {
    _private: (),
}

/// 触发重算并阻塞等待收敛
pub fn settle<M>(model: &mut M) -> ModelResult<RecomputeSettled>
where
    M: Recompute + ?Sized,
{
    model.trigger()?;
    Ok(RecomputeSettled { _private: () })
}

/// 单条记录的质量评估结果
#[derive(Debug, Clone, PartialEq)]
pub struct MassEvaluation {
    pub samples: Vec<MassSample>,
    pub total: f64,
}

#[derive(Debug, Clone)]
pub struct MassEvaluator {
    assemblies: Vec<String>,
}

impl MassEvaluator {
    /// # 参数
    /// - assemblies: 参与汇总的组件路径（默认 Inside / Outside）
    pub fn new(assemblies: Vec<String>) -> Self {
        Self { assemblies }
    }

    pub fn assemblies(&self) -> &[String] {
        &self.assemblies
    }

    /// 评估总质量
    ///
    /// # 说明
    /// - 每个组件质量保留 3 位小数
    /// - 组件或其质量属性不可用时按 0 计,不中断
    pub fn evaluate<M>(
        &self,
        model: &mut M,
        cache: &mut PathCache,
        _settled: &RecomputeSettled,
    ) -> MassEvaluation
    where
        M: ModelTree + MassQuery + ?Sized,
    {
        let samples: Vec<MassSample> = self
            .assemblies
            .iter()
            .map(|assembly| {
                let mass = match cache.resolve(&*model, assembly) {
                    Some(handle) => {
                        model.touch(handle);
                        model.mass_of(handle).map(round3).unwrap_or(0.0)
                    }
                    None => {
                        debug!(assembly = %assembly, "质量组件未找到,按 0 计");
                        0.0
                    }
                };
                MassSample {
                    assembly: assembly.clone(),
                    mass,
                }
            })
            .collect();

        let total = round3(samples.iter().map(|s| s.mass).sum());
        MassEvaluation { samples, total }
    }
}
