/*
 * @Author       : 老董
 * @Date         : 2026-02-14
 * @Description  : Graph 模块的类型定义：输出格式、网络方向、可视化输出结果
 */

use crate::errors::{OptionKind, VisualizerError};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::path::PathBuf;
use std::str::FromStr;

/// 图像输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// PNG 格式（默认）
    #[default]
    Png,
    Jpeg,
    Jpg,
    /// SVG 矢量格式
    Svg,
    Gif,
    /// PDF 格式
    Pdf,
}

impl ImageFormat {
    pub const NAMES: &'static [&'static str] = &["png", "jpeg", "jpg", "svg", "gif", "pdf"];

    /// 获取文件扩展名（不含点号）
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
            Self::Jpg => "jpg",
            Self::Svg => "svg",
            Self::Gif => "gif",
            Self::Pdf => "pdf",
        }
    }

    /// 从扩展名解析格式（大小写不敏感）
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "png" => Some(Self::Png),
            "jpeg" => Some(Self::Jpeg),
            "jpg" => Some(Self::Jpg),
            "svg" => Some(Self::Svg),
            "gif" => Some(Self::Gif),
            "pdf" => Some(Self::Pdf),
            _ => None,
        }
    }
}

impl FromStr for ImageFormat {
    type Err = VisualizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_extension(s).ok_or_else(|| VisualizerError::InvalidOption {
            kind: OptionKind::FileType,
            received: s.to_string(),
            allowed: Self::NAMES.iter().map(|n| n.to_string()).collect(),
        })
    }
}

impl Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// 网络排布方向（对应 Graphviz 的 `rankdir`）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Orientation {
    /// 从左到右（默认）
    #[default]
    #[serde(rename = "LR")]
    LeftRight,
    #[serde(rename = "TB")]
    TopBottom,
    #[serde(rename = "BT")]
    BottomTop,
    #[serde(rename = "RL")]
    RightLeft,
}

impl Orientation {
    pub const NAMES: &'static [&'static str] = &["LR", "TB", "BT", "RL"];

    pub const fn rankdir(&self) -> &'static str {
        match self {
            Self::LeftRight => "LR",
            Self::TopBottom => "TB",
            Self::BottomTop => "BT",
            Self::RightLeft => "RL",
        }
    }
}

impl FromStr for Orientation {
    type Err = VisualizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "LR" => Ok(Self::LeftRight),
            "TB" => Ok(Self::TopBottom),
            "BT" => Ok(Self::BottomTop),
            "RL" => Ok(Self::RightLeft),
            _ => Err(VisualizerError::InvalidOption {
                kind: OptionKind::Orientation,
                received: s.to_string(),
                allowed: Self::NAMES.iter().map(|n| n.to_string()).collect(),
            }),
        }
    }
}

/// 可视化输出结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualizationOutput {
    /// DOT 文件路径（始终生成）
    pub dot_path: PathBuf,
    /// 图像文件路径（仅当 Graphviz 可用时生成）
    pub image_path: Option<PathBuf>,
    /// Graphviz 是否可用
    pub graphviz_available: bool,
    /// 如果 Graphviz 不可用，提供安装提示
    pub graphviz_hint: Option<String>,
}
