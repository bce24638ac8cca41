/*
 * @Author       : 老董
 * @Date         : 2026-02-14
 * @Description  : 渲染协作者：把 DotGraph 写成 .dot 文件，并在 Graphviz 可用时生成图像
 */

use super::dot::DotGraph;
use super::types::{ImageFormat, VisualizationOutput};
use crate::errors::{Result, VisualizerError};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{info, warn};

/// 外部渲染引擎的契约
///
/// 核心逻辑只产出 [`DotGraph`]，成图与展示都委托给实现了该 trait 的对象，
/// 测试中可以替换成只做记录的实现。
pub trait Renderer: Send + Sync {
    /// 渲染到文件
    ///
    /// # 参数
    /// - `base_path`: 基础路径（**不含后缀**），如 `"graphs/neuralnet"`
    /// - `format`: 图像格式
    fn render(
        &self,
        graph: &DotGraph,
        base_path: &Path,
        format: ImageFormat,
    ) -> Result<VisualizationOutput>;

    /// 用系统默认程序打开渲染结果
    fn view(&self, output: &VisualizationOutput) -> Result<()>;
}

/// Graphviz 未安装时附在输出结果里的提示
const INSTALL_HINT: &str = "Graphviz 未安装或不在 PATH 中。\n\
     安装方式:\n\
     - Windows: winget install graphviz 或 choco install graphviz\n\
     - macOS: brew install graphviz\n\
     - Linux: sudo apt install graphviz\n\
     安装后可用在线预览: https://dreampuf.github.io/GraphvizOnline/";

/// 调用本机 `dot` 命令的默认渲染器
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graphviz {
    program: PathBuf,
}

impl Default for Graphviz {
    fn default() -> Self {
        Self::with_program("dot")
    }
}

impl Graphviz {
    /// 指定 `dot` 可执行文件（默认从 PATH 中查找 `dot`）
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// 运行 `dot -T{format} {dot_path} -o {image_path}`
    ///
    /// 找不到可执行文件时返回 `Ok(false)`；其余失败（无法启动、非零退出）都是 `RenderFailed`
    fn run_dot(&self, dot_path: &Path, image_path: &Path, format: ImageFormat) -> Result<bool> {
        let output = Command::new(&self.program)
            .arg(format!("-T{}", format.extension()))
            .arg(dot_path)
            .arg("-o")
            .arg(image_path)
            .output();

        let output = match output {
            Ok(output) => output,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
            Err(e) => {
                return Err(VisualizerError::RenderFailed(format!(
                    "无法启动 {}: {e}",
                    self.program.display()
                )));
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(VisualizerError::RenderFailed(format!(
                "{} 退出状态 {}: {}",
                self.program.display(),
                output.status,
                stderr.trim()
            )));
        }
        Ok(true)
    }
}

impl Renderer for Graphviz {
    /// # 行为
    /// - 始终生成 `{base_path}.dot`
    /// - 若 Graphviz 可用，额外生成 `{base_path}.{format}`（如 `.png`）
    /// - 若找不到 Graphviz，返回结果中包含安装提示
    ///
    /// # 错误
    /// - 路径包含后缀（如 `.dot`、`.png`）：`InvalidPath`
    /// - `dot` 启动失败或以非零状态退出：`RenderFailed`（附带 stderr）
    fn render(
        &self,
        graph: &DotGraph,
        base_path: &Path,
        format: ImageFormat,
    ) -> Result<VisualizationOutput> {
        if let Some(ext) = base_path.extension() {
            let ext_str = ext.to_string_lossy();
            return Err(VisualizerError::InvalidPath(format!(
                "请提供不含后缀的基础路径。\n\
                 例如: \"graphs/neuralnet\" 而不是 \"graphs/neuralnet.{ext_str}\"\n\
                 库会自动生成 .dot 和图像文件。"
            )));
        }

        if let Some(parent) = base_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| VisualizerError::Io(format!("创建目录失败: {e}")))?;
        }
        let dot_path = base_path.with_extension("dot");
        std::fs::write(&dot_path, graph.to_dot())
            .map_err(|e| VisualizerError::Io(format!("保存 DOT 文件失败: {e}")))?;

        let image_path = base_path.with_extension(format.extension());
        if !self.run_dot(&dot_path, &image_path, format)? {
            warn!(
                program = %self.program.display(),
                dot = %dot_path.display(),
                "找不到 Graphviz，只保存了 DOT 文件"
            );
            return Ok(VisualizationOutput {
                dot_path,
                image_path: None,
                graphviz_available: false,
                graphviz_hint: Some(INSTALL_HINT.to_string()),
            });
        }

        info!(path = %image_path.display(), "网络图已渲染");
        Ok(VisualizationOutput {
            dot_path,
            image_path: Some(image_path),
            graphviz_available: true,
            graphviz_hint: None,
        })
    }

    fn view(&self, output: &VisualizationOutput) -> Result<()> {
        let target = output.image_path.as_ref().unwrap_or(&output.dot_path);

        let mut command = if cfg!(target_os = "windows") {
            let mut c = Command::new("cmd");
            c.args(["/C", "start", ""]);
            c
        } else if cfg!(target_os = "macos") {
            Command::new("open")
        } else {
            Command::new("xdg-open")
        };

        command
            .arg(target)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|_| ())
            .map_err(|e| {
                VisualizerError::RenderFailed(format!("打开 {} 失败: {e}", target.display()))
            })
    }
}
