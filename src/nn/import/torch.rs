/*
 * @Author       : 老董
 * @Date         : 2026-02-15
 * @Description  : PyTorch 风格的模型记录
 *
 * 对应 `model.modules()` 展开后的子模块序列。每个子模块只需提供类名，
 * 以及按类型不同可能存在的 kernel_size/out_channels/stride/padding/out_features。
 * 容器（Sequential）、激活、归一化等模块的类名不在层类型词表中，导入时直接跳过。
 */

use crate::errors::{Result, VisualizerError};
use crate::nn::layer::{LayerParams, LayerType};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 一个 PyTorch 子模块
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TorchModule {
    /// 类名，可以是 `Conv2d`、`torch.nn.modules.conv.Conv2d`
    /// 或 `<class 'torch.nn.modules.conv.Conv2d'>`
    pub class_name: String,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub kernel_size: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_channels: Option<usize>,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub stride: Value,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub padding: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_features: Option<usize>,
}

impl TorchModule {
    pub fn new(class_name: &str) -> Self {
        Self {
            class_name: class_name.to_string(),
            kernel_size: Value::Null,
            out_channels: None,
            stride: Value::Null,
            padding: Value::Null,
            out_features: None,
        }
    }

    pub fn linear(out_features: usize) -> Self {
        Self {
            out_features: Some(out_features),
            ..Self::new("Linear")
        }
    }

    pub fn conv2d(out_channels: usize, kernel_size: impl Into<Value>) -> Self {
        Self {
            out_channels: Some(out_channels),
            kernel_size: kernel_size.into(),
            ..Self::new("Conv2d")
        }
    }

    pub fn stride(mut self, stride: impl Into<Value>) -> Self {
        self.stride = stride.into();
        self
    }

    pub fn padding(mut self, padding: impl Into<Value>) -> Self {
        self.padding = padding.into();
        self
    }

    pub fn kernel_size(mut self, kernel_size: impl Into<Value>) -> Self {
        self.kernel_size = kernel_size.into();
        self
    }

    /// 由类名推出小写的类型名：取最后一个 `.` 之后的部分
    pub fn type_name(&self) -> String {
        let name = self.class_name.trim();
        // `<class 'torch.nn.modules.conv.Conv2d'>` 取引号内的部分
        let name = name.split('\'').nth(1).unwrap_or(name);
        name.rsplit('.').next().unwrap_or(name).to_lowercase()
    }

    /// 对应的层类型；不在词表中的模块返回 `None`
    pub fn layer_type(&self) -> Option<LayerType> {
        LayerType::lookup(&self.type_name())
    }

    /// 提取该模块对应的 `add_layer` 参数
    pub fn to_params(&self, layer_type: LayerType) -> Result<LayerParams> {
        let mut params = LayerParams::new();

        match layer_type {
            LayerType::Conv2d => {
                if !self.kernel_size.is_null() {
                    params.kernel_size = self.kernel_size.clone();
                }
                if let Some(out_channels) = self.out_channels {
                    params.filters = out_channels;
                }
                if !self.stride.is_null() {
                    params.stride = self.stride.clone();
                }
                if !self.padding.is_null() {
                    params.padding = self.padding.clone();
                }
            }
            LayerType::MaxPool2d | LayerType::AvgPool2d => {
                if !self.kernel_size.is_null() {
                    params.pool_size = self.kernel_size.clone();
                }
            }
            LayerType::Dense => {
                params.units = self.out_features.ok_or_else(|| {
                    VisualizerError::InvalidModel(format!(
                        "{} 缺少 `out_features`",
                        self.class_name
                    ))
                })?;
            }
            LayerType::Flatten => {}
        }

        Ok(params)
    }
}

/// PyTorch 风格的模型：按 `model.modules()` 顺序展开的子模块列表
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TorchModel {
    modules: Vec<TorchModule>,
}

impl TorchModel {
    pub fn new(modules: Vec<TorchModule>) -> Self {
        Self { modules }
    }

    pub fn modules(&self) -> &[TorchModule] {
        &self.modules
    }

    /// 从 JSON 数组解析，每个元素是一个子模块记录
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl FromIterator<TorchModule> for TorchModel {
    fn from_iter<I: IntoIterator<Item = TorchModule>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
