/*
 * @Author       : 老董
 * @Date         : 2026-02-14
 * @Description  : 维度类参数（kernel_size/stride/pool_size）的校验与格式化
 */

use crate::errors::{DimRole, Result, VisualizerError};
use serde_json::Value;

/// 二维参数：单个整数（两个方向相同）或整数对
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dim2 {
    Scalar(usize),
    Pair(usize, usize),
}

impl Dim2 {
    /// 从 JSON 值解析；只接受非负整数或由 2 个非负整数组成的数组
    pub fn parse(value: &Value, role: DimRole) -> Result<Self> {
        let invalid = || VisualizerError::InvalidDimension {
            param: role,
            received: value.to_string(),
        };

        match value {
            Value::Number(n) => n.as_u64().map(|v| Self::Scalar(v as usize)).ok_or_else(invalid),
            Value::Array(items) if items.len() == 2 => {
                match (items[0].as_u64(), items[1].as_u64()) {
                    (Some(a), Some(b)) => Ok(Self::Pair(a as usize, b as usize)),
                    _ => Err(invalid()),
                }
            }
            _ => Err(invalid()),
        }
    }

    /// 格式化为节点标签中的文本
    ///
    /// 卷积核写成 `AxB`（整数 3 写成 `3x3`）；步长、池化尺寸保持原样，整数对写成 `(a, b)`
    pub fn format(&self, role: DimRole) -> String {
        match (self, role) {
            (Self::Scalar(v), DimRole::KernelSize) => format!("{v}x{v}"),
            (Self::Pair(a, b), DimRole::KernelSize) => format!("{a}x{b}"),
            (Self::Scalar(v), _) => v.to_string(),
            (Self::Pair(a, b), _) => format!("({a}, {b})"),
        }
    }
}

/// 格式化 padding：字符串首字母大写（`valid` -> `Valid`），整数原样，整数对写成 `(a, b)`
pub fn format_padding(value: &Value) -> String {
    match value {
        Value::String(s) => {
            let lower = s.to_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().map(|v| v.to_string()).collect();
            format!("({})", parts.join(", "))
        }
        other => other.to_string(),
    }
}
