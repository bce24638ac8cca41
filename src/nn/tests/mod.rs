mod color_encoding;
mod connector;
mod layer_naming;
mod summary;

use crate::errors::Result;
use crate::nn::{DotGraph, ImageFormat, LayerParams, Network, Renderer, VisualizationOutput};
use std::path::Path;
use std::sync::{Arc, Mutex};

/// 记录调用而不落盘的渲染器，用来观察 save/visualize 的行为
#[derive(Debug, Clone, Default)]
pub(super) struct RecordingRenderer {
    calls: Arc<Mutex<Vec<String>>>,
}

impl RecordingRenderer {
    pub(super) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Renderer for RecordingRenderer {
    fn render(
        &self,
        graph: &DotGraph,
        base_path: &Path,
        format: ImageFormat,
    ) -> Result<VisualizationOutput> {
        self.calls.lock().unwrap().push(format!(
            "render {} edges={}",
            format,
            graph.edges().len()
        ));
        Ok(VisualizationOutput {
            dot_path: base_path.with_extension("dot"),
            image_path: Some(base_path.with_extension(format.extension())),
            graphviz_available: true,
            graphviz_hint: None,
        })
    }

    fn view(&self, output: &VisualizationOutput) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("view {}", output.dot_path.display()));
        Ok(())
    }
}

/// 依次添加若干稠密层
pub(super) fn dense_network(units: &[usize]) -> Result<Network> {
    let mut network = Network::new();
    for &u in units {
        network.add_layer("dense", LayerParams::new().units(u))?;
    }
    Ok(network)
}
