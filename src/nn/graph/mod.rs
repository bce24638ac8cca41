/*
 * @Author       : 老董
 * @Date         : 2026-02-14
 * @Description  : Graph 模块：示意图的 DOT 表示与渲染
 *
 * 公开 API：
 * - `DotGraph`: 内存中的节点-边图
 * - `Renderer`/`Graphviz`: 外部渲染协作者
 * - `ImageFormat`/`Orientation`/`VisualizationOutput`: 渲染相关类型
 */

mod dot;
mod render;
mod types;

pub use dot::{Attrs, DotGraph, DotNode, Edge, Subgraph};
pub use render::{Graphviz, Renderer};
pub use types::{ImageFormat, Orientation, VisualizationOutput};
