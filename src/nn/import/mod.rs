/*
 * @Author       : 老董
 * @Date         : 2026-02-15
 * @Description  : 外部模型描述：导入器只依赖这里定义的窄接口，不依赖具体框架的类层次
 */

mod keras;
mod torch;

pub use keras::{KerasLayer, KerasModelConfig};
pub use torch::{TorchModel, TorchModule};
