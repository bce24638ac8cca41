/*
 * @Author       : 老董
 * @Date         : 2026-02-16
 * @Description  : 层命名规则单元测试
 */

use crate::errors::VisualizerError;
use crate::nn::layer::{LayerName, derive_layer_name};
use crate::nn::{LayerParams, LayerType, Network};

fn names(network: &Network) -> Vec<&str> {
    network.layers().iter().map(|l| l.name()).collect()
}

// ==================== 纯函数 ====================

#[test]
fn test_first_layer_is_always_input() {
    for layer_type in [
        LayerType::Dense,
        LayerType::Conv2d,
        LayerType::MaxPool2d,
        LayerType::AvgPool2d,
        LayerType::Flatten,
    ] {
        let LayerName {
            name,
            nontrainable_layers,
        } = derive_layer_name(layer_type, 0, 0);
        assert_eq!(name, format!("{}_input", layer_type.display_name()));
        // 第 0 层不计入不可训练层
        assert_eq!(nontrainable_layers, 0);
    }
}

#[test]
fn test_trainable_layer_uses_hidden_index() {
    let named = derive_layer_name(LayerType::Dense, 4, 2);
    assert_eq!(named.name, "Dense_hidden2");
    assert_eq!(named.nontrainable_layers, 2);

    let named = derive_layer_name(LayerType::Conv2d, 1, 0);
    assert_eq!(named.name, "Conv2d_hidden1");
}

#[test]
fn test_nontrainable_layer_bumps_counter() {
    let named = derive_layer_name(LayerType::MaxPool2d, 2, 0);
    assert_eq!(named.name, "Maxpool2d_1");
    assert_eq!(named.nontrainable_layers, 1);

    let named = derive_layer_name(LayerType::Flatten, 3, 1);
    assert_eq!(named.name, "Flatten_2");
    assert_eq!(named.nontrainable_layers, 2);
}

// ==================== 通过 add_layer ====================

#[test]
fn test_dense_sequence_names() -> Result<(), VisualizerError> {
    let network = super::dense_network(&[9, 12, 4])?;
    assert_eq!(
        names(&network),
        vec!["Dense_input", "Dense_hidden1", "Dense_hidden2"]
    );
    Ok(())
}

#[test]
fn test_cnn_sequence_names() -> Result<(), VisualizerError> {
    let mut network = Network::new();
    network.add_layer("conv2d", LayerParams::new())?;
    network.add_layer("conv2d", LayerParams::new().filters(64))?;
    network.add_layer("maxpool2d", LayerParams::new())?;
    network.add_layer("avgpool2d", LayerParams::new())?;
    network.add_layer("flatten", LayerParams::new())?;
    network.add_layer("dense", LayerParams::new().units(256))?;
    network.add_layer("dense", LayerParams::new().units(5))?;

    assert_eq!(
        names(&network),
        vec![
            "Conv2d_input",
            "Conv2d_hidden1",
            "Maxpool2d_1",
            "Avgpool2d_2",
            "Flatten_3",
            "Dense_hidden2",
            "Dense_hidden3",
        ]
    );
    Ok(())
}

#[test]
fn test_non_dense_first_layer_is_input() -> Result<(), VisualizerError> {
    let mut network = Network::new();
    network.add_layer("flatten", LayerParams::new())?;
    network.add_layer("dense", LayerParams::new().units(3))?;
    assert_eq!(names(&network), vec!["Flatten_input", "Dense_hidden1"]);
    Ok(())
}

#[test]
fn test_linear_alias_is_named_dense() -> Result<(), VisualizerError> {
    let mut network = Network::new();
    network.add_layer("Linear", LayerParams::new().units(3))?;
    network.add_layer("DENSE", LayerParams::new().units(2))?;
    assert_eq!(names(&network), vec!["Dense_input", "Dense_hidden1"]);
    assert!(network.layers().iter().all(|l| l.layer_type() == LayerType::Dense));
    Ok(())
}
