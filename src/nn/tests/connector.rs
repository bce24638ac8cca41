/*
 * @Author       : 老董
 * @Date         : 2026-02-16
 * @Description  : 相邻层连边与输出层着色单元测试
 */

use super::RecordingRenderer;
use crate::assert_err;
use crate::errors::VisualizerError;
use crate::nn::graph::Edge;
use crate::nn::{LayerParams, Network};

fn edge(from: &str, to: &str) -> Edge {
    Edge {
        from: from.to_string(),
        to: to.to_string(),
    }
}

#[test]
fn test_dense_edge_count() -> Result<(), VisualizerError> {
    // 9×10 + 10×4：第二层只画 10 个节点
    let mut network = super::dense_network(&[9, 12, 4])?;
    let graph = network.graph()?;
    assert_eq!(graph.edges().len(), 130);
    assert_eq!(graph.node_count(), 23);
    Ok(())
}

#[test]
fn test_dense_edge_endpoints() -> Result<(), VisualizerError> {
    let mut network = super::dense_network(&[2, 3])?;
    let graph = network.graph()?;
    assert_eq!(
        graph.edges(),
        &[
            edge("Dense_input_0", "Dense_hidden1_0"),
            edge("Dense_input_0", "Dense_hidden1_1"),
            edge("Dense_input_0", "Dense_hidden1_2"),
            edge("Dense_input_1", "Dense_hidden1_0"),
            edge("Dense_input_1", "Dense_hidden1_1"),
            edge("Dense_input_1", "Dense_hidden1_2"),
        ]
    );
    Ok(())
}

#[test]
fn test_mixed_edges() -> Result<(), VisualizerError> {
    let mut network = Network::new();
    network.add_layer("conv2d", LayerParams::new())?;
    network.add_layer("maxpool2d", LayerParams::new())?;
    network.add_layer("flatten", LayerParams::new())?;
    network.add_layer("dense", LayerParams::new().units(64))?;
    network.add_layer("dense", LayerParams::new().units(2))?;
    let graph = network.graph()?;

    // 1 + 1 + 10 + 10×2
    assert_eq!(graph.edges().len(), 32);
    assert_eq!(graph.edges()[0], edge("Conv2d_input", "Maxpool2d_1"));
    assert_eq!(graph.edges()[1], edge("Maxpool2d_1", "Flatten_2"));
    assert_eq!(graph.edges()[2], edge("Flatten_2", "Dense_hidden1_0"));
    assert_eq!(graph.edges()[11], edge("Flatten_2", "Dense_hidden1_9"));
    assert_eq!(graph.edges()[12], edge("Dense_hidden1_0", "Dense_hidden2_0"));
    Ok(())
}

#[test]
fn test_dense_to_spatial_edges() -> Result<(), VisualizerError> {
    let mut network = Network::new();
    network.add_layer("dense", LayerParams::new().units(3))?;
    network.add_layer("flatten", LayerParams::new())?;
    let graph = network.graph()?;

    assert_eq!(
        graph.edges(),
        &[
            edge("Dense_input_0", "Flatten_1"),
            edge("Dense_input_1", "Flatten_1"),
            edge("Dense_input_2", "Flatten_1"),
        ]
    );
    Ok(())
}

#[test]
fn test_output_layer_recolored() -> Result<(), VisualizerError> {
    let mut network = super::dense_network(&[2, 3, 2])?;
    let graph = network.graph()?;

    let colors = |cluster: &str| -> Vec<Option<String>> {
        graph
            .subgraph(cluster)
            .unwrap()
            .nodes()
            .iter()
            .map(|n| n.attr("fillcolor").map(str::to_string))
            .collect()
    };
    assert_eq!(colors("cluster_Dense_input"), vec![Some("yellow".to_string()); 2]);
    assert_eq!(colors("cluster_Dense_hidden1"), vec![Some("green".to_string()); 3]);
    assert_eq!(colors("cluster_Dense_hidden2"), vec![Some("red".to_string()); 2]);
    Ok(())
}

#[test]
fn test_spatial_last_layer_keeps_color() -> Result<(), VisualizerError> {
    let mut network = Network::new();
    network.add_layer("dense", LayerParams::new().units(2))?;
    network.add_layer("flatten", LayerParams::new())?;
    let graph = network.graph()?;

    assert_eq!(graph.node("Flatten_1").unwrap().attr("fillcolor"), Some("brown"));
    Ok(())
}

#[test]
fn test_build_is_idempotent() -> Result<(), VisualizerError> {
    let renderer = RecordingRenderer::default();
    let mut network = super::dense_network(&[9, 12, 4])?.with_renderer(renderer.clone());

    assert_eq!(network.graph()?.edges().len(), 130);
    let first_dot = network.to_dot()?;
    network.save()?;
    network.visualize()?;
    assert_eq!(network.to_dot()?, first_dot);

    let calls = renderer.calls();
    assert_eq!(calls.len(), 3);
    assert_eq!(calls[0], "render png edges=130");
    assert_eq!(calls[1], "render png edges=130");
    assert!(calls[2].starts_with("view "));
    Ok(())
}

#[test]
fn test_cannot_build_with_fewer_than_two_layers() -> Result<(), VisualizerError> {
    let renderer = RecordingRenderer::default();
    let mut network = Network::new().with_renderer(renderer.clone());
    assert_err!(network.graph(), VisualizerError::CannotBuild(0));
    assert_err!(network.visualize(), VisualizerError::CannotBuild(0));

    network.add_layer("dense", LayerParams::new().units(5))?;
    assert_err!(network.save(), VisualizerError::CannotBuild(1));
    assert_err!(network.to_dot(), VisualizerError::CannotBuild(1));

    // 失败时不调用渲染器，也不会把网络标记为已构建
    assert!(renderer.calls().is_empty());
    assert!(!network.is_built());
    network.add_layer("dense", LayerParams::new().units(5))?;
    assert_eq!(network.graph()?.edges().len(), 25);
    Ok(())
}
