/*
 * @Author       : 老董
 * @Date         : 2026-02-15
 * @Description  : 颜色编码：语义角色 -> 显示颜色
 */

use crate::nn::layer::LayerType;
use std::collections::BTreeMap;

/// 找不到颜色时的兜底值
const FALLBACK_COLOR: &str = "black";

/// 需要着色的语义角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColorRole {
    Input,
    Hidden,
    Output,
    Conv2d,
    MaxPool2d,
    AvgPool2d,
    Flatten,
}

impl ColorRole {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Hidden => "hidden",
            Self::Output => "output",
            Self::Conv2d => "conv2d",
            Self::MaxPool2d => "maxpool2d",
            Self::AvgPool2d => "avgpool2d",
            Self::Flatten => "flatten",
        }
    }

    pub fn lookup(key: &str) -> Option<Self> {
        match key {
            "input" => Some(Self::Input),
            "hidden" => Some(Self::Hidden),
            "output" => Some(Self::Output),
            "conv2d" => Some(Self::Conv2d),
            "maxpool2d" => Some(Self::MaxPool2d),
            "avgpool2d" => Some(Self::AvgPool2d),
            "flatten" => Some(Self::Flatten),
            _ => None,
        }
    }

    /// 空间层按类型着色；稠密层的颜色取决于位置（input/hidden/output），这里返回 `None`
    pub const fn for_layer(layer_type: LayerType) -> Option<Self> {
        match layer_type {
            LayerType::Dense => None,
            LayerType::Conv2d => Some(Self::Conv2d),
            LayerType::MaxPool2d => Some(Self::MaxPool2d),
            LayerType::AvgPool2d => Some(Self::AvgPool2d),
            LayerType::Flatten => Some(Self::Flatten),
        }
    }
}

/// 颜色编码表
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorEncoding(BTreeMap<ColorRole, String>);

impl Default for ColorEncoding {
    fn default() -> Self {
        let colors = [
            (ColorRole::Input, "yellow"),
            (ColorRole::Hidden, "green"),
            (ColorRole::Output, "red"),
            (ColorRole::Conv2d, "pink"),
            (ColorRole::MaxPool2d, "blue"),
            (ColorRole::AvgPool2d, "cyan"),
            (ColorRole::Flatten, "brown"),
        ];
        Self(
            colors
                .into_iter()
                .map(|(role, color)| (role, color.to_string()))
                .collect(),
        )
    }
}

impl ColorEncoding {
    pub fn get(&self, role: ColorRole) -> &str {
        self.0.get(&role).map_or(FALLBACK_COLOR, String::as_str)
    }

    /// 某个层类型的节点颜色（稠密层不按类型着色，得到兜底色）
    pub fn for_layer(&self, layer_type: LayerType) -> &str {
        ColorRole::for_layer(layer_type).map_or(FALLBACK_COLOR, |role| self.get(role))
    }

    /// 覆盖已存在的角色的颜色，不认识的键被忽略；返回实际生效的条目数
    pub fn update<I, K, V>(&mut self, mapping: I) -> usize
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut applied = 0;
        for (key, color) in mapping {
            let Some(role) = ColorRole::lookup(key.as_ref()) else {
                continue;
            };
            if let Some(slot) = self.0.get_mut(&role) {
                *slot = color.into();
                applied += 1;
            }
        }
        applied
    }
}
