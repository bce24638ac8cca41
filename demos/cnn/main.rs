//! # 从 Keras 模型配置导入卷积网络
//!
//! 相当于对下面的模型调用 `model.get_config()` 后导入：
//! ```python
//! tf.keras.Sequential([
//!     Conv2D(32, (5, 5), (1, 1)), Conv2D(64, (3, 3), (1, 1)), MaxPool2D(),
//!     Dropout(.25), ReLU(), Flatten(), Dense(256), Dense(128), Dense(5),
//! ])
//! ```
//! Dropout、ReLU 不在层类型词表中，导入时被跳过。
//!
//! ## 运行
//! ```bash
//! cargo run --example cnn
//! ```

use nnviz::VisualizerError;
use nnviz::nn::{KerasLayer, KerasModelConfig, Network};
use serde_json::json;

fn keras_model() -> KerasModelConfig {
    KerasModelConfig::new(vec![
        KerasLayer::new(
            "Conv2D",
            json!({"filters": 32, "kernel_size": [5, 5], "strides": [1, 1], "padding": "valid"}),
        ),
        KerasLayer::new(
            "Conv2D",
            json!({"filters": 64, "kernel_size": [3, 3], "strides": [1, 1], "padding": "valid"}),
        ),
        KerasLayer::new("MaxPooling2D", json!({"pool_size": [2, 2]})),
        KerasLayer::new("Dropout", json!({"rate": 0.25})),
        KerasLayer::new("ReLU", json!({})),
        KerasLayer::new("Flatten", json!({})),
        KerasLayer::new("Dense", json!({"units": 256})),
        KerasLayer::new("Dense", json!({"units": 128})),
        KerasLayer::new("Dense", json!({"units": 5})),
    ])
}

fn main() -> Result<(), VisualizerError> {
    let mut network = Network::new();
    network.from_tensorflow(&keras_model())?;

    let output = network.visualize()?;
    println!("DOT 文件: {}", output.dot_path.display());

    network.summarize()?;
    Ok(())
}
