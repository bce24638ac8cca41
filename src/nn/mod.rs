/*
 * @Author       : 老董
 * @Date         : 2026-02-14
 * @Description  : 负责神经网络示意图（neural network diagram）的构建
 */

pub mod graph;
pub mod import;
pub mod layer;
mod network;

pub use graph::{DotGraph, Graphviz, ImageFormat, Orientation, Renderer, VisualizationOutput};
pub use import::{KerasLayer, KerasModelConfig, TorchModel, TorchModule};
pub use layer::{Layer, LayerParams, LayerType};
pub use network::{ColorEncoding, ColorRole, MetaData, Network, Origin, VisualizerConfig};

#[cfg(test)]
mod tests;
