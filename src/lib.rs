//! # nnviz
//!
//! `nnviz`把一串神经网络层（手动逐层添加，或从 PyTorch/TensorFlow 的模型描述导入）
//! 翻译成 [Graphviz](https://graphviz.org) 的节点-边示意图，并能打印定宽的层摘要表格。
//!
//! ```ignore
//! use nnviz::nn::{LayerParams, Network};
//!
//! let mut network = Network::new();
//! network.add_layer("dense", LayerParams::new().units(9))?;
//! network.add_layer("dense", LayerParams::new().units(5))?;
//! network.visualize()?;
//! ```

pub mod errors;
pub mod nn;
pub mod utils;

pub use errors::{Result, VisualizerError};
