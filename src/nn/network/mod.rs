/*
 * @Author       : 老董
 * @Date         : 2026-02-15
 * @Description  : Network：层序列的构建器，也是本 crate 唯一的可变聚合体
 *
 * 各 impl 块分散在子模块中：
 * - core.rs: 构造、add_layer、逐层生成节点
 * - connect.rs: 相邻层连边 + 输出层着色（只执行一次）
 * - import.rs: from_pytorch/from_tensorflow
 * - describe.rs: 元数据与摘要表格
 * - visualization.rs: 取图、保存、渲染并打开
 */

mod color;
mod config;
mod connect;
mod core;
mod describe;
mod import;
mod visualization;

pub use color::{ColorEncoding, ColorRole};
pub use config::VisualizerConfig;
pub use describe::MetaData;

use crate::nn::graph::{DotGraph, Renderer};
use crate::nn::layer::Layer;
use std::fmt::{self, Display};

/// 网络中各层的来源
///
/// 一个实例的层只能来自一个来源：
/// `Empty -> Manual`（手动添加），或 `Empty -> PyTorch | TensorFlow`（导入一次）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Origin {
    #[default]
    Empty,
    Manual,
    PyTorch,
    TensorFlow,
}

impl Origin {
    pub const fn is_imported(&self) -> bool {
        matches!(self, Self::PyTorch | Self::TensorFlow)
    }
}

impl Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let origin_name = match self {
            Origin::Empty => "空网络",
            Origin::Manual => "手动添加的层",
            Origin::PyTorch => "PyTorch",
            Origin::TensorFlow => "TensorFlow",
        };
        write!(f, "{}", origin_name)
    }
}

/// 神经网络可视化器
///
/// # 使用示例
/// ```ignore
/// let mut network = Network::new();
/// network.add_layer("dense", LayerParams::new().units(7))?;
/// network.add_layer("dense", LayerParams::new().units(12))?;
/// network.add_layer("dense", LayerParams::new().units(4))?;
/// network.visualize()?;
/// ```
pub struct Network {
    config: VisualizerConfig,
    color_encoding: ColorEncoding,
    layers: Vec<Layer>,
    /// 已添加的池化/展平层数量（参与层命名）
    nontrainable_layers: usize,
    origin: Origin,
    /// 随 add_layer 逐步生成节点，连边在 build_network 中一次完成
    graph: DotGraph,
    built: bool,
    renderer: Box<dyn Renderer>,
}

impl Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.config.title)
    }
}

impl fmt::Debug for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Network")
            .field("config", &self.config)
            .field("layers", &self.layers)
            .field("origin", &self.origin)
            .field("built", &self.built)
            .finish_non_exhaustive()
    }
}
