/*
 * @Author       : 老董
 * @Date         : 2026-02-15
 * @Description  : Network 可视化：取图、保存到文件、渲染并打开
 */

use super::Network;
use crate::errors::{Result, VisualizerError};
use crate::nn::graph::{DotGraph, VisualizationOutput};
use tracing::info;

impl Network {
    /// 完成连边并返回底层的 DOT 图（用于嵌入或检查）
    ///
    /// # 错误
    /// 少于两层时返回 `CannotBuild`
    pub fn graph(&mut self) -> Result<&DotGraph> {
        self.ensure_buildable()?;
        self.build_network();
        Ok(&self.graph)
    }

    /// 完成连边并返回 DOT 文本
    pub fn to_dot(&mut self) -> Result<String> {
        Ok(self.graph()?.to_dot())
    }

    /// 渲染到 `{directory}/{filename}.{file_type}`，不打开查看器
    pub fn save(&mut self) -> Result<VisualizationOutput> {
        self.ensure_buildable()?;
        self.build_network();

        let base_path = self.config.base_path();
        let output = self
            .renderer
            .render(&self.graph, &base_path, self.config.file_type)?;
        info!(
            title = %self.config.title,
            dot = %output.dot_path.display(),
            "网络图已保存"
        );
        Ok(output)
    }

    /// 渲染网络并用系统默认程序打开
    ///
    /// # 错误
    /// - 少于两层：`CannotBuild`
    /// - 写文件或打开查看器失败：`Io`/`RenderFailed`
    pub fn visualize(&mut self) -> Result<VisualizationOutput> {
        let output = self.save()?;
        self.renderer.view(&output)?;
        Ok(output)
    }

    fn ensure_buildable(&self) -> Result<()> {
        if self.layers.len() < 2 {
            return Err(VisualizerError::CannotBuild {
                layers: self.layers.len(),
            });
        }
        Ok(())
    }
}
