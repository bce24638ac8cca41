/*
 * @Author       : 老董
 * @Date         : 2026-02-15
 * @Description  : 从外部模型描述导入层序列
 *
 * 两个导入器都只是把外部描述“重放”成一串 push_layer 调用；
 * 不在层类型词表中的层（激活、归一化、Dropout、容器等）被静默跳过。
 */

use super::{Network, Origin};
use crate::errors::{IllegalReason, Result, VisualizerError};
use crate::nn::import::{KerasModelConfig, TorchModel};
use tracing::{debug, info};

impl Network {
    /// 由 PyTorch 风格的模型创建网络
    ///
    /// # 错误
    /// - 网络已经有层（手动添加或已导入）：`IllegalState`
    /// - 模块参数不合法：`InvalidDimension`/`InvalidModel`
    pub fn from_pytorch(&mut self, model: &TorchModel) -> Result<()> {
        self.lock_for_import(Origin::PyTorch)?;

        for module in model.modules() {
            let Some(layer_type) = module.layer_type() else {
                debug!(class_name = %module.class_name, "跳过不支持的 PyTorch 模块");
                continue;
            };
            let params = module.to_params(layer_type)?;
            self.push_layer(layer_type, &params)?;
        }

        info!(layers = self.layers.len(), "已从 PyTorch 模型导入网络");
        Ok(())
    }

    /// 由 JSON 形式的 PyTorch 子模块列表创建网络
    pub fn from_pytorch_json(&mut self, json: &str) -> Result<()> {
        let model = TorchModel::from_json(json)?;
        self.from_pytorch(&model)
    }

    /// 由 TensorFlow/Keras 模型配置创建网络
    ///
    /// # 错误
    /// - 网络已经有层（手动添加或已导入）：`IllegalState`
    /// - 层配置缺字段或参数不合法：`InvalidModel`/`InvalidDimension`
    pub fn from_tensorflow(&mut self, model: &KerasModelConfig) -> Result<()> {
        self.lock_for_import(Origin::TensorFlow)?;

        for layer in &model.layers {
            let Some(layer_type) = layer.layer_type() else {
                debug!(class_name = %layer.class_name, "跳过不支持的 Keras 层");
                continue;
            };
            let params = layer.to_params(layer_type)?;
            self.push_layer(layer_type, &params)?;
        }

        info!(layers = self.layers.len(), "已从 TensorFlow 模型导入网络");
        Ok(())
    }

    /// 由 `model.get_config()` 或 `model.to_json()` 的 JSON 文本创建网络
    pub fn from_tensorflow_json(&mut self, json: &str) -> Result<()> {
        let model = KerasModelConfig::from_json(json)?;
        self.from_tensorflow(&model)
    }

    /// 导入只能在空网络上进行一次；锁在遍历之前就加上，导入中途失败也不会解锁
    fn lock_for_import(&mut self, origin: Origin) -> Result<()> {
        if self.origin != Origin::Empty {
            return Err(VisualizerError::IllegalState(IllegalReason::Populated(
                self.origin,
            )));
        }
        self.origin = origin;
        Ok(())
    }
}
