//! # 最简单的两层网络
//!
//! Dense(9) -> Dense(5)，渲染后用系统默认程序打开。
//!
//! ## 运行
//! ```bash
//! cargo run --example basic_nn
//! ```

use nnviz::VisualizerError;
use nnviz::nn::{LayerParams, Network};

fn main() -> Result<(), VisualizerError> {
    let mut network = Network::new();

    network.add_layer("dense", LayerParams::new().units(9))?;
    network.add_layer("dense", LayerParams::new().units(5))?;

    let output = network.visualize()?;
    println!("DOT 文件: {}", output.dot_path.display());
    if let Some(hint) = output.graphviz_hint {
        println!("{hint}");
    }
    Ok(())
}
