/*
 * @Author       : 老董
 * @Date         : 2026-02-15
 * @Description  : TensorFlow/Keras 风格的模型配置
 *
 * 即 `model.get_config()` 的结构：`{"layers": [{"class_name": ..., "config": {...}}, ...]}`。
 * 也接受 `model.to_json()` 外面多包的一层 `{"class_name": "Sequential", "config": {...}}`。
 */

use crate::errors::{Result, VisualizerError};
use crate::nn::layer::{LayerParams, LayerType};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 配置列表中的一层
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KerasLayer {
    pub class_name: String,
    #[serde(default)]
    pub config: Value,
}

impl KerasLayer {
    pub fn new(class_name: &str, config: Value) -> Self {
        Self {
            class_name: class_name.to_string(),
            config,
        }
    }

    /// 按判别字符串映射到层类型；不认识的类名返回 `None`
    pub fn layer_type(&self) -> Option<LayerType> {
        match self.class_name.as_str() {
            "Dense" => Some(LayerType::Dense),
            "Conv2D" => Some(LayerType::Conv2d),
            "MaxPooling2D" => Some(LayerType::MaxPool2d),
            "AveragePooling2D" => Some(LayerType::AvgPool2d),
            "Flatten" => Some(LayerType::Flatten),
            _ => None,
        }
    }

    /// 提取该层对应的 `add_layer` 参数
    pub fn to_params(&self, layer_type: LayerType) -> Result<LayerParams> {
        let mut params = LayerParams::new();

        match layer_type {
            LayerType::Dense => {
                params.units = self.required_usize("units")?;
            }
            LayerType::Conv2d => {
                params.filters = self.required_usize("filters")?;
                params.kernel_size = self.required("kernel_size")?.clone();
                if let Some(strides) = self.field("strides") {
                    params.stride = strides.clone();
                }
                if let Some(padding) = self.field("padding") {
                    params.padding = padding.clone();
                }
            }
            LayerType::MaxPool2d | LayerType::AvgPool2d => {
                if let Some(pool_size) = self.field("pool_size") {
                    params.pool_size = pool_size.clone();
                }
            }
            LayerType::Flatten => {}
        }

        Ok(params)
    }

    fn field(&self, key: &str) -> Option<&Value> {
        self.config.get(key).filter(|v| !v.is_null())
    }

    fn required(&self, key: &str) -> Result<&Value> {
        self.field(key).ok_or_else(|| {
            VisualizerError::InvalidModel(format!("{} 层缺少 `{key}`", self.class_name))
        })
    }

    fn required_usize(&self, key: &str) -> Result<usize> {
        let value = self.required(key)?;
        value.as_u64().map(|v| v as usize).ok_or_else(|| {
            VisualizerError::InvalidModel(format!(
                "{} 层的 `{key}` 须为非负整数，实际为 {value}",
                self.class_name
            ))
        })
    }
}

/// Keras 模型配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KerasModelConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub layers: Vec<KerasLayer>,
}

impl KerasModelConfig {
    pub fn new(layers: Vec<KerasLayer>) -> Self {
        Self { name: None, layers }
    }

    /// 解析 `get_config()` 或 `to_json()` 的输出
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        if value.get("layers").is_some() {
            return Ok(serde_json::from_value(value)?);
        }
        match value.get("config") {
            Some(inner) if inner.get("layers").is_some() => {
                Ok(serde_json::from_value(inner.clone())?)
            }
            _ => Err(VisualizerError::InvalidModel(
                "找不到 `layers` 列表（也不在 `config` 中）".to_string(),
            )),
        }
    }
}
