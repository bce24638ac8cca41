/*
 * @Author       : 老董
 * @Date         : 2026-02-16
 * @Description  : 元数据与摘要表格单元测试
 */

use crate::assert_err;
use crate::errors::{NotBuiltReason, VisualizerError};
use crate::nn::{LayerParams, LayerType, MetaData, Network, TorchModel, TorchModule};

const HLINE: &str = "+---------------------------------------------------------------------+";

#[test]
fn test_summary_table_layout() -> Result<(), VisualizerError> {
    let network = super::dense_network(&[9, 5])?;
    let summary = network.summary_string()?;
    let lines: Vec<&str> = summary.lines().collect();

    assert_eq!(lines.len(), 9);
    assert!(lines.iter().all(|l| l.chars().count() == 71));
    assert_eq!(lines[0], HLINE);
    assert_eq!(
        lines[1],
        "|                     Neural Network Architecture                     |"
    );
    assert_eq!(lines[2], HLINE);
    assert_eq!(
        lines[3],
        "|         Layer Name         |       Layer Type       |  Layer Units  |"
    );
    assert_eq!(lines[4], HLINE);
    assert_eq!(
        lines[5],
        "|        Dense_input         |         Dense          |       9       |"
    );
    assert_eq!(lines[6], HLINE);
    assert_eq!(
        lines[7],
        "|       Dense_hidden1        |         Dense          |       5       |"
    );
    assert_eq!(lines[8], HLINE);
    Ok(())
}

#[test]
fn test_summary_spatial_rows() -> Result<(), VisualizerError> {
    let mut network = Network::new();
    network.add_layer("conv2d", LayerParams::new())?;
    network.add_layer("maxpool2d", LayerParams::new())?;
    let summary = network.summary_string()?;

    assert!(summary.contains(
        "|        Conv2d_input        |         Conv2d         |       1       |"
    ));
    assert!(summary.contains(
        "|        Maxpool2d_1         |       Maxpool2d        |       1       |"
    ));
    Ok(())
}

#[test]
fn test_summary_not_built() -> Result<(), VisualizerError> {
    let mut network = Network::new();
    assert_err!(
        network.summary_string(),
        VisualizerError::NotBuilt(NotBuiltReason::NoModel)
    );
    assert_err!(
        network.summarize(),
        VisualizerError::NotBuilt(NotBuiltReason::NoModel)
    );

    network.add_layer("dense", LayerParams::new().units(3))?;
    assert_err!(
        network.summary_string(),
        VisualizerError::NotBuilt(NotBuiltReason::Unsupported)
    );
    assert_err!(
        network.summary_markdown(),
        VisualizerError::NotBuilt(NotBuiltReason::Unsupported)
    );
    Ok(())
}

#[test]
fn test_summary_after_import_with_one_layer() -> Result<(), VisualizerError> {
    // 导入的模型不要求至少两层
    let model: TorchModel = vec![TorchModule::linear(3)].into_iter().collect();
    let mut network = Network::new();
    network.from_pytorch(&model)?;

    let summary = network.summary_string()?;
    assert_eq!(summary.lines().count(), 7);
    Ok(())
}

#[test]
fn test_summary_after_empty_import() -> Result<(), VisualizerError> {
    let mut network = Network::new();
    network.from_pytorch(&TorchModel::default())?;
    assert_eq!(network.summary_string()?.lines().count(), 5);
    Ok(())
}

#[test]
fn test_summary_markdown() -> Result<(), VisualizerError> {
    let network = super::dense_network(&[4, 2])?;
    let markdown = network.summary_markdown()?;

    assert!(markdown.starts_with("# Neural Network\n"));
    assert!(markdown.contains("| Dense_input | Dense | 4 |\n"));
    assert!(markdown.contains("| Dense_hidden1 | Dense | 2 |\n"));
    Ok(())
}

#[test]
fn test_meta_data() -> Result<(), VisualizerError> {
    let empty = Network::new().get_meta_data();
    assert_eq!(empty.layer_count, 0);
    assert!(empty.layer_names.is_empty());

    let mut network = super::dense_network(&[3])?;
    network.add_layer("flatten", LayerParams::new())?;
    let meta = network.get_meta_data();
    assert_eq!(meta.layer_count, 2);
    assert_eq!(meta.layer_names, vec!["Dense_input", "Flatten_1"]);
    assert_eq!(meta.layer_types, vec![LayerType::Dense, LayerType::Flatten]);
    assert_eq!(meta.layer_units, vec![3, 1]);

    let json = meta.to_json()?;
    assert!(json.contains("\"flatten\""));
    let parsed: MetaData = serde_json::from_str(&json)?;
    assert_eq!(parsed, meta);
    Ok(())
}
