/*
 * @Author       : 老董
 * @Date         : 2026-02-14
 * @Description  : Layer 模块 - 层类型词表、层参数与层实体
 *
 * 这里的“层”只是示意图上的一个位置，不含任何权重；
 * 真实的张量连接关系不在本 crate 的考虑范围内。
 */

mod dim;
mod naming;

pub use dim::{Dim2, format_padding};
pub use naming::{LayerName, derive_layer_name};

use crate::errors::{OptionKind, VisualizerError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::{self, Display};
use std::str::FromStr;

/// 稠密层在图上最多画出的节点数，超出部分以 "+N" 角标显示
pub const MAX_VISIBLE_UNITS: usize = 10;

/// 层类型
///
/// `linear` 是 `dense` 的别名（PyTorch 的叫法），解析时统一归一为 [`LayerType::Dense`]。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerType {
    #[serde(alias = "linear")]
    Dense,
    Conv2d,
    MaxPool2d,
    AvgPool2d,
    Flatten,
}

impl LayerType {
    /// 可接受的层类型名称（含别名）
    pub const NAMES: &'static [&'static str] = &[
        "dense",
        "conv2d",
        "maxpool2d",
        "avgpool2d",
        "flatten",
        "linear",
    ];

    /// 按名称查找层类型（大小写不敏感），不认识的名称返回 `None`
    pub fn lookup(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "dense" | "linear" => Some(Self::Dense),
            "conv2d" => Some(Self::Conv2d),
            "maxpool2d" => Some(Self::MaxPool2d),
            "avgpool2d" => Some(Self::AvgPool2d),
            "flatten" => Some(Self::Flatten),
            _ => None,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dense => "dense",
            Self::Conv2d => "conv2d",
            Self::MaxPool2d => "maxpool2d",
            Self::AvgPool2d => "avgpool2d",
            Self::Flatten => "flatten",
        }
    }

    /// 首字母大写的显示名（用于层命名和摘要表格）
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Dense => "Dense",
            Self::Conv2d => "Conv2d",
            Self::MaxPool2d => "Maxpool2d",
            Self::AvgPool2d => "Avgpool2d",
            Self::Flatten => "Flatten",
        }
    }

    /// 是否按“每个单元一个节点”绘制
    pub const fn is_dense(&self) -> bool {
        matches!(self, Self::Dense)
    }

    /// 空间层：卷积、池化、展平，只画一个代表节点
    pub const fn is_spatial(&self) -> bool {
        !self.is_dense()
    }

    /// 含可训练参数的层（参与 `_hidden{k}` 命名）
    pub const fn is_trainable(&self) -> bool {
        matches!(self, Self::Dense | Self::Conv2d)
    }
}

impl FromStr for LayerType {
    type Err = VisualizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| VisualizerError::InvalidOption {
            kind: OptionKind::LayerType,
            received: s.to_string(),
            allowed: Self::NAMES.iter().map(|n| n.to_string()).collect(),
        })
    }
}

impl Display for LayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 网络中的一层（按插入顺序排列，只追加不删除）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    name: String,
    layer_type: LayerType,
    /// 稠密层为真实单元数；空间层恒为 1
    units: usize,
}

impl Layer {
    pub(crate) fn new(name: String, layer_type: LayerType, units: usize) -> Self {
        let units = if layer_type.is_dense() { units } else { 1 };
        Self {
            name,
            layer_type,
            units,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn layer_type(&self) -> LayerType {
        self.layer_type
    }

    pub const fn units(&self) -> usize {
        self.units
    }

    /// 图上实际画出的代表节点数
    pub fn visible_units(&self) -> usize {
        self.units.min(MAX_VISIBLE_UNITS)
    }

    /// 第 `index` 个代表节点的 id：稠密层为 `{name}_{index}`，空间层就是层名本身
    pub fn node_id(&self, index: usize) -> String {
        if self.layer_type.is_dense() {
            format!("{}_{}", self.name, index)
        } else {
            self.name.clone()
        }
    }
}

/// `add_layer` 的参数
///
/// 维度类参数（`kernel_size`/`stride`/`pool_size`）和 `padding` 以 JSON 值保存，
/// 因为它们既可能是整数，也可能是整数对或字符串，真正的校验在添加层时进行。
///
/// # 示例
/// ```ignore
/// net.add_layer("conv2d", LayerParams::new().filters(64).kernel_size(vec![3, 5]))?;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LayerParams {
    /// 单元数（仅 dense）
    pub units: usize,
    /// 卷积核个数（仅 conv2d）
    pub filters: usize,
    pub kernel_size: Value,
    /// `"same"`/`"valid"`，或 PyTorch 风格的整数/整数对
    pub padding: Value,
    pub stride: Value,
    /// 池化窗口（仅 maxpool2d/avgpool2d）
    pub pool_size: Value,
}

impl Default for LayerParams {
    fn default() -> Self {
        Self {
            units: 10,
            filters: 32,
            kernel_size: Value::from(3),
            padding: Value::from("valid"),
            stride: Value::from(1),
            pool_size: Value::from(2),
        }
    }
}

impl LayerParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn units(mut self, units: usize) -> Self {
        self.units = units;
        self
    }

    pub fn filters(mut self, filters: usize) -> Self {
        self.filters = filters;
        self
    }

    pub fn kernel_size(mut self, kernel_size: impl Into<Value>) -> Self {
        self.kernel_size = kernel_size.into();
        self
    }

    pub fn padding(mut self, padding: impl Into<Value>) -> Self {
        self.padding = padding.into();
        self
    }

    pub fn stride(mut self, stride: impl Into<Value>) -> Self {
        self.stride = stride.into();
        self
    }

    pub fn pool_size(mut self, pool_size: impl Into<Value>) -> Self {
        self.pool_size = pool_size.into();
        self
    }
}
