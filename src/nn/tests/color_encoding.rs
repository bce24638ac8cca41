/*
 * @Author       : 老董
 * @Date         : 2026-02-16
 * @Description  : 颜色编码单元测试
 */

use crate::assert_err;
use crate::errors::VisualizerError;
use crate::nn::{ColorEncoding, ColorRole, LayerParams, LayerType, Network};
use serde_json::json;

#[test]
fn test_default_colors() {
    let encoding = ColorEncoding::default();
    assert_eq!(encoding.get(ColorRole::Input), "yellow");
    assert_eq!(encoding.get(ColorRole::Hidden), "green");
    assert_eq!(encoding.get(ColorRole::Output), "red");
    assert_eq!(encoding.for_layer(LayerType::Conv2d), "pink");
    assert_eq!(encoding.for_layer(LayerType::MaxPool2d), "blue");
    assert_eq!(encoding.for_layer(LayerType::AvgPool2d), "cyan");
    assert_eq!(encoding.for_layer(LayerType::Flatten), "brown");
}

#[test]
fn test_custom_input_color() -> Result<(), VisualizerError> {
    let mut network = Network::new();
    network.set_color_encoding([("input", "purple")]);
    network.add_layer("dense", LayerParams::new().units(2))?;
    network.add_layer("dense", LayerParams::new().units(2))?;
    let graph = network.graph()?;

    assert_eq!(graph.node("Dense_input_0").unwrap().attr("fillcolor"), Some("purple"));
    assert_eq!(graph.node("Dense_hidden1_1").unwrap().attr("fillcolor"), Some("red"));
    Ok(())
}

#[test]
fn test_unknown_keys_ignored() {
    let mut network = Network::new();
    network.set_color_encoding([("softmax", "gold"), ("Input", "gold")]);
    assert_eq!(network.color_encoding(), &ColorEncoding::default());

    let mut encoding = ColorEncoding::default();
    let applied = encoding.update(vec![("flatten", "black"), ("dropout", "white")]);
    assert_eq!(applied, 1);
    assert_eq!(encoding.get(ColorRole::Flatten), "black");
}

#[test]
fn test_output_color_applies_at_build() -> Result<(), VisualizerError> {
    let mut network = super::dense_network(&[2, 2])?;
    // 输出层颜色在连边时才生效，之前设置即可
    network.set_color_encoding([("output", "orange"), ("conv2d", "gray")]);
    let graph = network.graph()?;

    assert_eq!(graph.node("Dense_hidden1_0").unwrap().attr("fillcolor"), Some("orange"));
    // 已生成的节点不受影响
    assert_eq!(graph.node("Dense_input_0").unwrap().attr("fillcolor"), Some("yellow"));
    Ok(())
}

#[test]
fn test_color_encoding_json() -> Result<(), VisualizerError> {
    let mut network = Network::new();
    network.set_color_encoding_json(&json!({"hidden": "navy", "unknown": "x"}))?;
    assert_eq!(network.color_encoding().get(ColorRole::Hidden), "navy");

    assert_err!(
        network.set_color_encoding_json(&json!(["input", "purple"])),
        VisualizerError::InvalidType { got, .. } if got == r#"["input","purple"]"#
    );
    assert_err!(
        network.set_color_encoding_json(&json!({"input": 3})),
        VisualizerError::InvalidType { expected: "颜色字符串", .. }
    );
    // 类型错误时不做部分更新
    assert_err!(
        network.set_color_encoding_json(&json!({"flatten": "white", "input": null})),
        VisualizerError::InvalidType { .. }
    );
    assert_eq!(network.color_encoding().get(ColorRole::Flatten), "brown");
    Ok(())
}
