/*
 * @Author       : 老董
 * @Date         : 2026-02-15
 * @Description  : Network 元数据与摘要（summary）
 */

use super::{Network, Origin};
use crate::errors::{NotBuiltReason, Result, VisualizerError};
use crate::nn::layer::LayerType;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 摘要表格总宽度（不含两侧边框）
const TABLE_WIDTH: usize = 69;
const NAME_WIDTH: usize = 28;
const TYPE_WIDTH: usize = 24;
const UNITS_WIDTH: usize = 15;

/// 网络元数据的只读快照
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaData {
    pub layer_count: usize,
    pub layer_names: Vec<String>,
    pub layer_types: Vec<LayerType>,
    pub layer_units: Vec<usize>,
}

impl MetaData {
    /// 转换为 JSON 字符串
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Network {
    // ========== 元数据 ==========

    pub fn get_meta_data(&self) -> MetaData {
        MetaData {
            layer_count: self.layers.len(),
            layer_names: self.layers.iter().map(|l| l.name().to_string()).collect(),
            layer_types: self.layers.iter().map(|l| l.layer_type()).collect(),
            layer_units: self.layers.iter().map(|l| l.units()).collect(),
        }
    }

    // ========== 模型摘要（summary）==========

    /// 打印网络摘要（MySQL 风格的定宽表格）
    ///
    /// # 示例
    /// ```ignore
    /// network.summarize()?;
    /// // 输出：
    /// // +---------------------------------------------------------------------+
    /// // |                     Neural Network Architecture                     |
    /// // +---------------------------------------------------------------------+
    /// // |         Layer Name         |       Layer Type       |  Layer Units  |
    /// // +---------------------------------------------------------------------+
    /// // |        Dense_input         |         Dense          |       9       |
    /// // ...
    /// ```
    ///
    /// # 错误
    /// 既没有导入过模型、手动添加的层又少于两层时返回 `NotBuilt`
    pub fn summarize(&self) -> Result<()> {
        println!("{}", self.summary_string()?);
        Ok(())
    }

    /// 将摘要保存到文件
    ///
    /// 根据文件扩展名自动选择格式：
    /// - `.md` → Markdown 表格
    /// - 其他（`.txt` 等）→ 定宽文本表格
    pub fn save_summary<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let summary = match path.extension().and_then(|e| e.to_str()) {
            Some("md") => self.summary_markdown()?,
            _ => self.summary_string()?,
        };
        std::fs::write(path, summary)
            .map_err(|e| VisualizerError::Io(format!("保存摘要文件失败: {e}")))
    }

    /// 返回定宽文本表格
    pub fn summary_string(&self) -> Result<String> {
        self.ensure_summarizable()?;

        let hline = format!("+{}+", "-".repeat(TABLE_WIDTH));
        let mut output = String::new();

        output.push_str(&format!("{hline}\n"));
        output.push_str(&format!(
            "|{:^width$}|\n",
            "Neural Network Architecture",
            width = TABLE_WIDTH
        ));
        output.push_str(&format!("{hline}\n"));
        output.push_str(&format!(
            "|{:^name_w$}|{:^type_w$}|{:^units_w$}|\n",
            "Layer Name",
            "Layer Type",
            "Layer Units",
            name_w = NAME_WIDTH,
            type_w = TYPE_WIDTH,
            units_w = UNITS_WIDTH,
        ));
        output.push_str(&format!("{hline}\n"));

        for layer in &self.layers {
            output.push_str(&format!(
                "|{:^name_w$}|{:^type_w$}|{:^units_w$}|\n",
                layer.name(),
                layer.layer_type().display_name(),
                layer.units(),
                name_w = NAME_WIDTH,
                type_w = TYPE_WIDTH,
                units_w = UNITS_WIDTH,
            ));
            output.push_str(&format!("{hline}\n"));
        }

        Ok(output)
    }

    /// 返回 Markdown 格式的摘要
    pub fn summary_markdown(&self) -> Result<String> {
        self.ensure_summarizable()?;

        let mut output = String::new();
        output.push_str(&format!("# {}\n\n", self.config.title));
        output.push_str("| Layer Name | Layer Type | Layer Units |\n");
        output.push_str("|------------|------------|-------------|\n");
        for layer in &self.layers {
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                layer.name(),
                layer.layer_type().display_name(),
                layer.units()
            ));
        }
        Ok(output)
    }

    /// 导入过模型，或手动添加了至少两层，才能输出摘要
    fn ensure_summarizable(&self) -> Result<()> {
        match self.origin {
            Origin::PyTorch | Origin::TensorFlow => Ok(()),
            Origin::Manual if self.layers.len() >= 2 => Ok(()),
            Origin::Manual => Err(VisualizerError::NotBuilt(NotBuiltReason::Unsupported)),
            Origin::Empty => Err(VisualizerError::NotBuilt(NotBuiltReason::NoModel)),
        }
    }
}
