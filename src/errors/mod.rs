/*
 * @Author       : 老董
 * @Date         : 2026-02-14
 * @Description  : 可视化器的统一错误类型
 *
 * 所有错误都是调用方违反前置条件时同步抛出的（编程错误信号），
 * 不做重试，也不做部分恢复。
 */

use thiserror::Error;
mod kinds;
pub use self::kinds::*;

/// crate 内统一使用的 `Result` 别名
pub type Result<T> = std::result::Result<T, VisualizerError>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum VisualizerError {
    // 不在固定取值集合内的选项（层类型、输出格式、方向）
    #[error("无效的{kind}：`{received}`，可选值为 [{}]", .allowed.join(", "))]
    InvalidOption {
        kind: OptionKind,
        received: String,
        allowed: Vec<String>,
    },
    // 卷积核、步长、池化尺寸
    #[error("{param}须为整数或由 2 个整数组成的序列，实际为：{received}")]
    InvalidDimension { param: DimRole, received: String },

    #[error("{0}")]
    IllegalState(IllegalReason),
    #[error("无法绘制神经网络：至少需要两层，当前只有 {layers} 层")]
    CannotBuild { layers: usize },
    #[error("{0}")]
    NotBuilt(NotBuiltReason),

    #[error("类型错误：期望{expected}，实际为 {got}")]
    InvalidType { expected: &'static str, got: String },
    #[error("模型描述不合法：{0}")]
    InvalidModel(String),

    #[error("路径不合法：{0}")]
    InvalidPath(String),
    #[error("文件读写失败：{0}")]
    Io(String),
    #[error("JSON 解析失败：{0}")]
    Json(String),
    #[error("Graphviz 渲染失败：{0}")]
    RenderFailed(String),
}

impl From<serde_json::Error> for VisualizerError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}
