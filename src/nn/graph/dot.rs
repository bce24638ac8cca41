/*
 * @Author       : 老董
 * @Date         : 2026-02-14
 * @Description  : 内存中的 Graphviz DOT 图：子图（cluster）、节点、无向边
 *
 * 只负责记录和输出 DOT 文本，布局与成图交给外部的 Graphviz。
 * 属性按插入顺序保存，保证同一张图每次输出的 DOT 文本完全一致。
 */

/// 有序属性表，重复设置同一个键会覆盖旧值
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attrs(Vec<(String, String)>);

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let mut attrs = Self::new();
        for (key, value) in pairs {
            attrs.set(key, *value);
        }
        attrs
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key.to_string(), value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// 输出为 `key="value" key="value"` 形式
    fn to_dot(&self) -> String {
        self.iter()
            .map(|(k, v)| format!("{k}={}", quote(v)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotNode {
    id: String,
    attrs: Attrs,
}

impl DotNode {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key)
    }

    pub fn attrs_mut(&mut self) -> &mut Attrs {
        &mut self.attrs
    }
}

/// 子图；名称以 `cluster_` 开头时 Graphviz 会把它画成一个框
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subgraph {
    name: Option<String>,
    attrs: Attrs,
    node_defaults: Attrs,
    nodes: Vec<DotNode>,
}

impl Subgraph {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key)
    }

    pub fn attrs_mut(&mut self) -> &mut Attrs {
        &mut self.attrs
    }

    /// 子图内节点的默认属性（`node [...]`）
    pub fn node_defaults_mut(&mut self) -> &mut Attrs {
        &mut self.node_defaults
    }

    pub fn node_default(&self, key: &str) -> Option<&str> {
        self.node_defaults.get(key)
    }

    pub fn add_node(&mut self, id: impl Into<String>, attrs: Attrs) {
        self.nodes.push(DotNode {
            id: id.into(),
            attrs,
        });
    }

    pub fn nodes(&self) -> &[DotNode] {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> impl Iterator<Item = &mut DotNode> {
        self.nodes.iter_mut()
    }
}

/// 两个节点 id 之间的一条边
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub from: String,
    pub to: String,
}

/// 无向 DOT 图
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotGraph {
    name: String,
    graph_attrs: Attrs,
    node_defaults: Attrs,
    subgraphs: Vec<Subgraph>,
    edges: Vec<Edge>,
}

impl DotGraph {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            graph_attrs: Attrs::new(),
            node_defaults: Attrs::new(),
            subgraphs: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn graph_attr(&self, key: &str) -> Option<&str> {
        self.graph_attrs.get(key)
    }

    pub fn graph_attrs_mut(&mut self) -> &mut Attrs {
        &mut self.graph_attrs
    }

    pub fn node_defaults_mut(&mut self) -> &mut Attrs {
        &mut self.node_defaults
    }

    /// 新建一个子图并返回其可变引用；`name` 为 `None` 时是匿名子图
    pub fn add_subgraph(&mut self, name: Option<&str>) -> &mut Subgraph {
        self.subgraphs.push(Subgraph {
            name: name.map(str::to_string),
            attrs: Attrs::new(),
            node_defaults: Attrs::new(),
            nodes: Vec::new(),
        });
        let last = self.subgraphs.len() - 1;
        &mut self.subgraphs[last]
    }

    pub fn subgraph(&self, name: &str) -> Option<&Subgraph> {
        self.subgraphs.iter().find(|s| s.name() == Some(name))
    }

    pub fn subgraph_mut(&mut self, name: &str) -> Option<&mut Subgraph> {
        self.subgraphs.iter_mut().find(|s| s.name() == Some(name))
    }

    pub fn subgraphs(&self) -> &[Subgraph] {
        &self.subgraphs
    }

    /// 按 id 在所有子图中查找节点
    pub fn node(&self, id: &str) -> Option<&DotNode> {
        self.subgraphs
            .iter()
            .flat_map(|s| s.nodes.iter())
            .find(|n| n.id == id)
    }

    pub fn node_count(&self) -> usize {
        self.subgraphs.iter().map(|s| s.nodes.len()).sum()
    }

    pub fn add_edge(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.edges.push(Edge {
            from: from.into(),
            to: to.into(),
        });
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// 生成 Graphviz DOT 格式的图描述字符串
    ///
    /// 返回的字符串可用于：
    /// - 在线预览：<https://dreampuf.github.io/GraphvizOnline/>
    /// - 交给 `dot` 命令渲染成图像
    pub fn to_dot(&self) -> String {
        let mut dot = String::new();

        // 图头部
        dot.push_str(&format!("graph {} {{\n", quote(&self.name)));
        if !self.graph_attrs.is_empty() {
            dot.push_str(&format!("    graph [{}];\n", self.graph_attrs.to_dot()));
        }
        if !self.node_defaults.is_empty() {
            dot.push_str(&format!("    node [{}];\n", self.node_defaults.to_dot()));
        }

        // 子图
        for subgraph in &self.subgraphs {
            dot.push('\n');
            match &subgraph.name {
                Some(name) => dot.push_str(&format!("    subgraph {} {{\n", quote(name))),
                None => dot.push_str("    subgraph {\n"),
            }
            for (key, value) in subgraph.attrs.iter() {
                dot.push_str(&format!("        {key}={};\n", quote(value)));
            }
            if !subgraph.node_defaults.is_empty() {
                dot.push_str(&format!(
                    "        node [{}];\n",
                    subgraph.node_defaults.to_dot()
                ));
            }
            for node in &subgraph.nodes {
                if node.attrs.is_empty() {
                    dot.push_str(&format!("        {};\n", quote(&node.id)));
                } else {
                    dot.push_str(&format!(
                        "        {} [{}];\n",
                        quote(&node.id),
                        node.attrs.to_dot()
                    ));
                }
            }
            dot.push_str("    }\n");
        }

        // 边
        if !self.edges.is_empty() {
            dot.push('\n');
        }
        for edge in &self.edges {
            dot.push_str(&format!(
                "    {} -- {};\n",
                quote(&edge.from),
                quote(&edge.to)
            ));
        }

        dot.push_str("}\n");
        dot
    }
}

/// 加双引号：先转义反斜杠，再转义双引号，换行写成 DOT 标签里的 `\n`
fn quote(s: &str) -> String {
    let escaped = s.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n");
    format!("\"{escaped}\"")
}
