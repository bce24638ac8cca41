/*
 * @Author       : 老董
 * @Date         : 2026-02-14
 * @Description  : 层命名规则
 *
 * 名称只取决于（层类型, 当前层数, 已有的不可训练层数）三者：
 * - 第 0 层：`{Type}_input`
 * - 之后的 dense/conv2d：`{Type}_hidden{total - nontrainable}`
 * - 之后的池化/展平层：`{Type}_{nontrainable + 1}`，并把计数加一
 */

use super::LayerType;

/// 命名结果：层名 + 更新后的不可训练层计数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerName {
    pub name: String,
    pub nontrainable_layers: usize,
}

pub fn derive_layer_name(
    layer_type: LayerType,
    total_layers: usize,
    nontrainable_layers: usize,
) -> LayerName {
    let prefix = layer_type.display_name();

    if total_layers == 0 {
        return LayerName {
            name: format!("{prefix}_input"),
            nontrainable_layers,
        };
    }

    if layer_type.is_trainable() {
        LayerName {
            name: format!("{prefix}_hidden{}", total_layers - nontrainable_layers),
            nontrainable_layers,
        }
    } else {
        let nontrainable_layers = nontrainable_layers + 1;
        LayerName {
            name: format!("{prefix}_{nontrainable_layers}"),
            nontrainable_layers,
        }
    }
}
