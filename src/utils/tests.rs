use crate::assert_err;
use crate::errors::{DimRole, VisualizerError};

fn failing(err: VisualizerError) -> Result<(), VisualizerError> {
    Err(err)
}

#[test]
fn test_assert_err_macro() {
    assert_err!(failing(VisualizerError::Io("x".to_string())));
    assert_err!(
        failing(VisualizerError::InvalidModel("缺少 units".to_string())),
        VisualizerError::InvalidModel("缺少 units")
    );
    assert_err!(
        failing(VisualizerError::InvalidDimension {
            param: DimRole::Stride,
            received: "\"abc\"".to_string(),
        }),
        VisualizerError::InvalidDimension(DimRole::Stride, "\"abc\"")
    );
    assert_err!(
        failing(VisualizerError::CannotBuild { layers: 1 }),
        VisualizerError::CannotBuild(1)
    );
    assert_err!(
        failing(VisualizerError::CannotBuild { layers: 0 }),
        VisualizerError::CannotBuild { layers } if *layers == 0
    );
}

#[test]
#[should_panic(expected = "错误类型不匹配")]
fn test_assert_err_macro_wrong_variant() {
    assert_err!(
        failing(VisualizerError::Io("x".to_string())),
        VisualizerError::Json("x")
    );
}
