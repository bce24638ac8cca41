/*
 * @Author       : 老董
 * @Date         : 2026-02-15
 * @Description  : Network 基础操作：构造、颜色编码、add_layer 与逐层生成节点
 */

use super::{ColorEncoding, ColorRole, Network, Origin, VisualizerConfig};
use crate::errors::{DimRole, IllegalReason, Result, VisualizerError};
use crate::nn::graph::{Attrs, DotGraph, Graphviz, Renderer};
use crate::nn::layer::{
    Dim2, Layer, LayerName, LayerParams, LayerType, MAX_VISIBLE_UNITS, derive_layer_name,
    format_padding,
};
use serde_json::Value;
use tracing::debug;

impl Default for Network {
    fn default() -> Self {
        Self::new()
    }
}

impl Network {
    // ========== 构造 ==========

    /// 使用默认配置创建可视化器
    pub fn new() -> Self {
        Self::with_config(VisualizerConfig::default())
    }

    pub fn with_config(config: VisualizerConfig) -> Self {
        let graph = Self::init_graph(&config);
        Self {
            config,
            color_encoding: ColorEncoding::default(),
            layers: Vec::new(),
            nontrainable_layers: 0,
            origin: Origin::Empty,
            graph,
            built: false,
            renderer: Box::new(Graphviz::default()),
        }
    }

    /// 由字符串选项创建（输出格式、方向大小写不敏感）
    ///
    /// # 错误
    /// 输出格式或方向不在可选集合内时返回 `InvalidOption`
    pub fn from_options(title: &str, file_type: &str, orientation: &str) -> Result<Self> {
        let config = VisualizerConfig::from_options(title, file_type, false, orientation)?;
        Ok(Self::with_config(config))
    }

    /// 替换渲染协作者（默认调用本机 Graphviz）
    pub fn with_renderer(mut self, renderer: impl Renderer + 'static) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    /// 图的全局属性：标题在顶部，直线边，层与层之间留足间距
    fn init_graph(config: &VisualizerConfig) -> DotGraph {
        let mut graph = DotGraph::new(&config.filename);
        *graph.graph_attrs_mut() = Attrs::from_pairs(&[
            ("ranksep", "2"),
            ("rankdir", config.orientation.rankdir()),
            ("label", config.title.as_str()),
            ("labelloc", "t"),
            ("color", "white"),
            ("splines", "line"),
        ]);
        *graph.node_defaults_mut() = Attrs::from_pairs(&[
            ("label", ""),
            ("nodesep", "4"),
            ("shape", "circle"),
            ("width", "0.5"),
        ]);
        graph
    }

    // ========== 访问器 ==========

    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    pub fn title(&self) -> &str {
        &self.config.title
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    pub fn is_built(&self) -> bool {
        self.built
    }

    pub fn color_encoding(&self) -> &ColorEncoding {
        &self.color_encoding
    }

    // ========== 颜色编码 ==========

    /// 设置自定义颜色编码
    ///
    /// 只覆盖已有的角色（input/hidden/output/conv2d/maxpool2d/avgpool2d/flatten），
    /// 其他键被忽略。只影响之后生成的节点和输出层着色。
    pub fn set_color_encoding<I, K, V>(&mut self, encoding: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let applied = self.color_encoding.update(encoding);
        debug!(applied, "更新颜色编码");
    }

    /// 从 JSON 对象设置颜色编码
    ///
    /// # 错误
    /// 参数不是 JSON 对象，或某个颜色不是字符串时返回 `InvalidType`
    pub fn set_color_encoding_json(&mut self, encoding: &Value) -> Result<()> {
        let map = encoding.as_object().ok_or_else(|| VisualizerError::InvalidType {
            expected: "JSON 对象",
            got: encoding.to_string(),
        })?;

        let mut pairs = Vec::with_capacity(map.len());
        for (key, color) in map {
            let color = color.as_str().ok_or_else(|| VisualizerError::InvalidType {
                expected: "颜色字符串",
                got: color.to_string(),
            })?;
            pairs.push((key.as_str(), color));
        }
        self.set_color_encoding(pairs);
        Ok(())
    }

    // ========== 添加层 ==========

    /// 向网络末尾添加一层
    ///
    /// # 参数
    /// - `layer_type`: `dense`/`linear`/`conv2d`/`maxpool2d`/`avgpool2d`/`flatten`（大小写不敏感）
    /// - `params`: 层参数，只有与该层类型相关的字段会被使用
    ///
    /// # 错误
    /// - 网络已从外部模型导入：`IllegalState`
    /// - 层类型不在词表中：`InvalidOption`
    /// - kernel_size/stride/pool_size 不是整数或整数对：`InvalidDimension`
    pub fn add_layer(&mut self, layer_type: &str, params: LayerParams) -> Result<()> {
        if self.origin.is_imported() {
            return Err(VisualizerError::IllegalState(IllegalReason::Imported(
                self.origin,
            )));
        }

        let layer_type: LayerType = layer_type.parse()?;
        self.push_layer(layer_type, &params)?;
        self.origin = Origin::Manual;
        Ok(())
    }

    /// 登记一层并立即生成它的节点（手动添加与导入共用）
    ///
    /// 参数先全部校验再修改状态，失败时网络保持不变。
    pub(super) fn push_layer(&mut self, layer_type: LayerType, params: &LayerParams) -> Result<()> {
        if self.built {
            return Err(VisualizerError::IllegalState(IllegalReason::AlreadyBuilt));
        }

        let label = Self::node_label(layer_type, params)?;
        let LayerName {
            name,
            nontrainable_layers,
        } = derive_layer_name(layer_type, self.layers.len(), self.nontrainable_layers);
        let layer = Layer::new(name, layer_type, params.units);

        self.emit_nodes(&layer, label);
        debug!(
            name = layer.name(),
            layer_type = %layer.layer_type(),
            units = layer.units(),
            "添加层"
        );

        self.layers.push(layer);
        self.nontrainable_layers = nontrainable_layers;
        Ok(())
    }

    /// 空间层代表节点的标签；稠密层没有标签
    fn node_label(layer_type: LayerType, params: &LayerParams) -> Result<Option<String>> {
        let label = match layer_type {
            LayerType::Dense => return Ok(None),
            LayerType::Conv2d => {
                let kernel = Dim2::parse(&params.kernel_size, DimRole::KernelSize)?;
                let stride = Dim2::parse(&params.stride, DimRole::Stride)?;
                format!(
                    "Kernel Size: {}\nFilters: {}\nPadding: {}\nStride: {}",
                    kernel.format(DimRole::KernelSize),
                    params.filters,
                    format_padding(&params.padding),
                    stride.format(DimRole::Stride)
                )
            }
            LayerType::MaxPool2d | LayerType::AvgPool2d => {
                let pool = Dim2::parse(&params.pool_size, DimRole::PoolSize)?;
                let kind = if layer_type == LayerType::MaxPool2d {
                    "Max"
                } else {
                    "Avg"
                };
                format!("{kind} Pooling\nPool Size: {}", pool.format(DimRole::PoolSize))
            }
            LayerType::Flatten => "Flatten".to_string(),
        };
        Ok(Some(label))
    }

    /// 生成一层的可视节点
    ///
    /// - dense：一个 cluster，最多 10 个点状节点，超出部分在 cluster 上标 `+N`
    /// - conv2d：一个立体方框
    /// - 池化：一个椭圆
    /// - flatten：一个细长矩形
    fn emit_nodes(&mut self, layer: &Layer, label: Option<String>) {
        let name = layer.name();

        if layer.layer_type().is_dense() {
            // 第 0 层视为输入层
            let role = if self.layers.is_empty() {
                ColorRole::Input
            } else {
                ColorRole::Hidden
            };
            let color = self.color_encoding.get(role).to_string();

            let cluster = self.graph.add_subgraph(Some(&format!("cluster_{name}")));
            // 清空标签，避免图标题在每个 cluster 里重复出现
            cluster.attrs_mut().set("label", "");
            if layer.units() > MAX_VISIBLE_UNITS {
                let attrs = cluster.attrs_mut();
                attrs.set("labeljust", "r");
                attrs.set("labelloc", "b");
                attrs.set("label", format!("+{}", layer.units() - MAX_VISIBLE_UNITS));
            }
            for index in 0..layer.visible_units() {
                cluster.add_node(
                    layer.node_id(index),
                    Attrs::from_pairs(&[
                        ("shape", "point"),
                        ("style", "filled"),
                        ("fillcolor", color.as_str()),
                    ]),
                );
            }
            return;
        }

        let color = self.color_encoding.for_layer(layer.layer_type()).to_string();
        let label = label.unwrap_or_default();
        let (shape, height, width) = match layer.layer_type() {
            LayerType::Conv2d => ("box3d", "1.5", "1.5"),
            LayerType::MaxPool2d | LayerType::AvgPool2d => ("ellipse", "2", "0.5"),
            _ => ("rectangle", "4.5", "0.5"),
        };

        let subgraph = self.graph.add_subgraph(None);
        subgraph.node_defaults_mut().set("shape", shape);
        subgraph.add_node(
            name,
            Attrs::from_pairs(&[
                ("label", label.as_str()),
                ("height", height),
                ("width", width),
                ("style", "filled"),
                ("fillcolor", color.as_str()),
            ]),
        );
    }
}
