use crate::nn::Origin;
use std::fmt::{self, Display};

/// 取值受限的选项种类（用于 `InvalidOption` 的错误提示）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    LayerType,
    FileType,
    Orientation,
}
impl Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind_name = match self {
            OptionKind::LayerType => "层类型",
            OptionKind::FileType => "输出格式",
            OptionKind::Orientation => "网络方向",
        };
        write!(f, "{}", kind_name)
    }
}

/// 需要校验维度的层参数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimRole {
    KernelSize,
    Stride,
    PoolSize,
}
impl DimRole {
    pub const fn param_name(&self) -> &'static str {
        match self {
            DimRole::KernelSize => "kernel_size",
            DimRole::Stride => "stride",
            DimRole::PoolSize => "pool_size",
        }
    }
}
impl Display for DimRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.param_name())
    }
}

/// 网络被锁定、不允许继续修改的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalReason {
    /// 网络已经从外部模型导入，不能再手动添加层
    Imported(Origin),
    /// 网络已有层（手动添加或已导入），不能再执行导入
    Populated(Origin),
    /// 图已经连边完成，不能再添加层
    AlreadyBuilt,
}
impl Display for IllegalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalReason::Imported(origin) => {
                write!(f, "网络已经由{origin}模型对象创建，不能再手动添加层")
            }
            IllegalReason::Populated(origin) => {
                write!(f, "网络已经由{origin}填充，不能再次导入模型")
            }
            IllegalReason::AlreadyBuilt => write!(f, "网络已经构建完成，不能再添加层"),
        }
    }
}

/// `summarize` 无法输出摘要的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotBuiltReason {
    /// 尚未创建任何模型
    NoModel,
    /// 模型已开始构建，但层数不足或不受支持
    Unsupported,
}
impl Display for NotBuiltReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            NotBuiltReason::NoModel => {
                "模型尚未创建，请先调用 `add_layer()`、`from_pytorch()` 或 `from_tensorflow()`"
            }
            NotBuiltReason::Unsupported => "模型尚未构建完成或不受支持，请查阅文档了解详情",
        };
        write!(f, "{}", message)
    }
}
