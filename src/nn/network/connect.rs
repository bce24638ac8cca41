/*
 * @Author       : 老董
 * @Date         : 2026-02-15
 * @Description  : 相邻层连边
 *
 * 相邻两层的代表节点两两相连（完全二部图）。这只是示意：
 * 真实网络里卷积层并不会和下一层卷积“全连接”，但图上就这么画。
 */

use super::{ColorRole, Network};
use crate::nn::graph::DotGraph;
use crate::nn::layer::Layer;
use tracing::debug;

impl Network {
    /// 连接所有相邻层，并把末尾的稠密层改成输出颜色
    ///
    /// 只在第一次调用时生效；之后再调用不会重复加边。
    pub(super) fn build_network(&mut self) {
        if self.built {
            return;
        }

        for pair in self.layers.windows(2) {
            connect_layers(&mut self.graph, &pair[0], &pair[1]);
        }

        if let Some(last) = self.layers.last().filter(|l| l.layer_type().is_dense()) {
            let color = self.color_encoding.get(ColorRole::Output).to_string();
            if let Some(cluster) = self.graph.subgraph_mut(&format!("cluster_{}", last.name())) {
                for node in cluster.nodes_mut() {
                    node.attrs_mut().set("style", "filled");
                    node.attrs_mut().set("fillcolor", color.as_str());
                }
            }
        }

        self.built = true;
        debug!(
            layers = self.layers.len(),
            edges = self.graph.edges().len(),
            "网络连边完成"
        );
    }
}

/// 连接两层的所有代表节点，共 `visible(l1) × visible(l2)` 条边
///
/// 端点 id 按两侧各自的层类型决定：稠密层是 `{name}_{i}`，空间层是层名本身，
/// 于是 dense↔dense、dense↔spatial、spatial↔dense、spatial↔spatial 四种情况统一处理。
fn connect_layers(graph: &mut DotGraph, layer1: &Layer, layer2: &Layer) {
    for i in 0..layer1.visible_units() {
        for j in 0..layer2.visible_units() {
            graph.add_edge(layer1.node_id(i), layer2.node_id(j));
        }
    }
}
