//! # 从 PyTorch 子模块序列导入卷积网络
//!
//! 模块顺序与 `model.modules()` 一致：先是 Sequential 容器本身，再是各子模块。
//! 激活、Softmax、Conv1d 等不在层类型词表中的模块会被跳过。
//!
//! ## 运行
//! ```bash
//! cargo run --example pytorch_cnn
//! ```

use nnviz::VisualizerError;
use nnviz::nn::{Network, TorchModel, TorchModule};
use serde_json::json;

fn pytorch_model() -> TorchModel {
    let conv = |out_channels: usize, kernel: usize| {
        TorchModule::conv2d(out_channels, json!([kernel, kernel])).stride(json!([1, 1]))
    };
    let pool = || TorchModule::new("MaxPool2d").kernel_size(2).stride(2);

    vec![
        TorchModule::new("<class 'torch.nn.modules.container.Sequential'>"),
        conv(32, 3).padding(json!([1, 1])),
        conv(64, 3),
        TorchModule::new("ReLU"),
        pool(),
        conv(128, 3),
        conv(256, 3),
        TorchModule::new("ReLU"),
        pool(),
        conv(256, 3),
        conv(512, 3),
        TorchModule::new("ReLU"),
        pool(),
        conv(512, 2),
        TorchModule::new("ReLU"),
        pool(),
        TorchModule::new("Conv1d"),
        TorchModule::new("Flatten"),
        TorchModule::linear(4096),
        TorchModule::new("ReLU"),
        TorchModule::linear(512),
        TorchModule::linear(200),
        TorchModule::new("Softmax"),
    ]
    .into_iter()
    .collect()
}

fn main() -> Result<(), VisualizerError> {
    let mut network = Network::from_options("PyTorch CNN", "png", "LR")?;
    network.from_pytorch(&pytorch_model())?;

    let output = network.visualize()?;
    println!("DOT 文件: {}", output.dot_path.display());

    network.summarize()?;
    println!("{}", network.get_meta_data().to_json()?);
    Ok(())
}
