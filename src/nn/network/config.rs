/*
 * @Author       : 老董
 * @Date         : 2026-02-15
 * @Description  : 可视化器的构造配置（构造后不可变）
 */

use crate::errors::Result;
use crate::nn::graph::{ImageFormat, Orientation};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 可视化器配置
///
/// 缺省字段取默认值，因此可以只写需要改动的部分：
/// ```ignore
/// let config = VisualizerConfig::from_json(r#"{"title": "LeNet", "orientation": "TB"}"#)?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizerConfig {
    /// 图标题，显示在图的顶部
    pub title: String,
    /// 输出文件名（不含后缀）
    pub filename: String,
    /// 输出目录
    pub directory: PathBuf,
    pub file_type: ImageFormat,
    pub orientation: Orientation,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            title: "Neural Network".to_string(),
            filename: "neuralnet".to_string(),
            directory: PathBuf::from("./graphs"),
            file_type: ImageFormat::Png,
            orientation: Orientation::LeftRight,
        }
    }
}

impl VisualizerConfig {
    /// 由字符串选项构造（大小写不敏感）
    ///
    /// `save_pdf` 为真时忽略 `file_type`，直接输出 PDF
    pub fn from_options(
        title: &str,
        file_type: &str,
        save_pdf: bool,
        orientation: &str,
    ) -> Result<Self> {
        let file_type = if save_pdf {
            ImageFormat::Pdf
        } else {
            file_type.parse()?
        };

        Ok(Self {
            title: title.to_string(),
            file_type,
            orientation: orientation.parse()?,
            ..Self::default()
        })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// 渲染输出的基础路径：`{directory}/{filename}`
    pub fn base_path(&self) -> PathBuf {
        self.directory.join(&self.filename)
    }
}
