// ==========================================
// 柜体配置批量导出系统 - 配置组合生成器
// ==========================================
// 职责: 按尺寸范围生成 Legacy 形态的配置表
// 说明: 只按空间阈值计算搁板上限,不校验几何可行性
// ==========================================

use crate::domain::record::fields;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// 生成器错误类型
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("板厚无法解析: {0}")]
    InvalidThickness(String),

    #[error("范围步长必须大于 0: {0}")]
    InvalidStep(String),

    #[error("CSV 写入失败: {0}")]
    Csv(#[from] csv::Error),

    #[error("文件写入失败: {0}")]
    Io(#[from] std::io::Error),
}

/// Result 类型别名
pub type GeneratorResult<T> = Result<T, GeneratorError>;

// ==========================================
// StepRange - 含端点的步进范围
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRange {
    pub start: u32,
    /// 含端点
    pub end: u32,
    pub step: u32,
}

impl StepRange {
    pub fn new(start: u32, end: u32, step: u32) -> Self {
        Self { start, end, step }
    }

    pub fn single(value: u32) -> Self {
        Self::new(value, value, 1)
    }

    pub fn values(&self, name: &str) -> GeneratorResult<Vec<u32>> {
        if self.step == 0 {
            return Err(GeneratorError::InvalidStep(name.to_string()));
        }
        Ok((self.start..=self.end).step_by(self.step as usize).collect())
    }
}

// ==========================================
// GeneratorSpec - 生成参数
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorSpec {
    pub heights: StepRange,
    pub widths: StepRange,
    pub depths: StepRange,
    pub dividers: StepRange,
    /// 搁板/隔板之间的最大间距（mm）
    pub threshold: u32,
    pub corpus_thickness: String,
    pub front_thickness: String,
    pub back_thickness: String,
}

impl Default for GeneratorSpec {
    fn default() -> Self {
        Self {
            heights: StepRange::single(2500),
            widths: StepRange::new(400, 1200, 200),
            depths: StepRange::new(400, 800, 200),
            dividers: StepRange::new(0, 1, 1),
            threshold: 350,
            corpus_thickness: "18 mm".to_string(),
            front_thickness: "20 mm".to_string(),
            back_thickness: "10 mm".to_string(),
        }
    }
}

/// 一行 Legacy 配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedRow {
    pub filename: String,
    pub height: String,
    pub width: String,
    pub depth: String,
    pub shelf_amount: String,
    pub divider_amount: String,
    pub thickness_corpus: String,
    pub thickness_front: String,
    pub thickness_back: String,
}

impl GeneratedRow {
    fn to_record(&self) -> [&str; 9] {
        [
            self.filename.as_str(),
            self.height.as_str(),
            self.width.as_str(),
            self.depth.as_str(),
            self.shelf_amount.as_str(),
            self.divider_amount.as_str(),
            self.thickness_corpus.as_str(),
            self.thickness_front.as_str(),
            self.thickness_back.as_str(),
        ]
    }
}

/// 每个高度的搁板上限摘要
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeightSummary {
    pub height: u32,
    pub max_shelves: u32,
    pub usable_height: f64,
}

/// 板厚字符串取首个整数（"18 mm" → 18）
fn thickness_value(corpus_thickness: &str) -> GeneratorResult<u32> {
    corpus_thickness
        .split_whitespace()
        .next()
        .and_then(|t| t.parse::<u32>().ok())
        .ok_or_else(|| GeneratorError::InvalidThickness(corpus_thickness.to_string()))
}

/// 计算给定高度下的最大搁板数
///
/// # 规则
/// - 可用高度 = 高度 − 2 × 箱体板厚（顶板 + 底板）
/// - n 个分区需要 n−1 块搁板,分区高度不超过阈值
pub fn max_shelf_count(height: u32, threshold: u32, corpus_thickness: &str) -> GeneratorResult<u32> {
    let thickness = thickness_value(corpus_thickness)?;
    let usable = f64::from(height) - 2.0 * f64::from(thickness);
    if threshold == 0 {
        return Err(GeneratorError::InvalidStep("threshold".to_string()));
    }
    let sections = (usable / f64::from(threshold)).ceil();
    Ok((sections - 1.0).max(0.0) as u32)
}

/// 生成全部配置组合
///
/// 顺序: 高度 × 宽度 × 深度 × 隔板数,每个组合再展开 0..=最大搁板数
pub fn generate(spec: &GeneratorSpec) -> GeneratorResult<Vec<GeneratedRow>> {
    let heights = spec.heights.values("heights")?;
    let widths = spec.widths.values("widths")?;
    let depths = spec.depths.values("depths")?;
    let dividers = spec.dividers.values("dividers")?;

    let mut rows = Vec::new();
    for &h in &heights {
        let max_shelves = max_shelf_count(h, spec.threshold, &spec.corpus_thickness)?;
        for &w in &widths {
            for &d in &depths {
                for &div in &dividers {
                    for shelves in 0..=max_shelves {
                        rows.push(GeneratedRow {
                            filename: format!(
                                "CSC_Bottom_Plinth_H{}_W{}_D{}_S{}_Div{}",
                                h, w, d, shelves, div
                            ),
                            height: format!("{} mm", h),
                            width: format!("{} mm", w),
                            depth: format!("{} mm", d),
                            shelf_amount: shelves.to_string(),
                            divider_amount: div.to_string(),
                            thickness_corpus: spec.corpus_thickness.clone(),
                            thickness_front: spec.front_thickness.clone(),
                            thickness_back: spec.back_thickness.clone(),
                        });
                    }
                }
            }
        }
    }

    info!(rows = rows.len(), "配置组合生成完成");
    Ok(rows)
}

/// 每个高度的搁板上限与可用高度
pub fn summarize(spec: &GeneratorSpec) -> GeneratorResult<Vec<HeightSummary>> {
    let thickness = thickness_value(&spec.corpus_thickness)?;
    spec.heights
        .values("heights")?
        .into_iter()
        .map(|height| {
            Ok(HeightSummary {
                height,
                max_shelves: max_shelf_count(height, spec.threshold, &spec.corpus_thickness)?,
                usable_height: f64::from(height) - 2.0 * f64::from(thickness),
            })
        })
        .collect()
}

/// 写出 CSV（Legacy 表头 + 数据行）
pub fn write_csv(path: &Path, rows: &[GeneratedRow]) -> GeneratorResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(fields::LEGACY_COLUMNS)?;
    for row in rows {
        writer.write_record(row.to_record())?;
    }
    writer.flush()?;
    Ok(())
}
