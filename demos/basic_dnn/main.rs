//! # 多层全连接网络
//!
//! 展示：
//! - 超过 10 个单元的层只画 10 个节点，并在右下角标注 `+N`
//! - 最后一层被染成输出色
//! - 自定义颜色编码与方向
//!
//! ## 运行
//! ```bash
//! cargo run --example basic_dnn
//! ```

use nnviz::VisualizerError;
use nnviz::nn::{LayerParams, Network};

fn main() -> Result<(), VisualizerError> {
    let mut network = Network::from_options("Deep Neural Network", "svg", "LR")?;
    network.set_color_encoding([("input", "gold"), ("output", "tomato")]);

    for units in [9, 12, 4, 7, 3] {
        network.add_layer("dense", LayerParams::new().units(units))?;
    }

    let output = network.visualize()?;
    println!("DOT 文件: {}", output.dot_path.display());
    match &output.image_path {
        Some(image) => println!("图像文件: {}", image.display()),
        None => println!("{}", output.graphviz_hint.unwrap_or_default()),
    }

    network.summarize()?;
    Ok(())
}
