use tracing::debug;

use crate::error::{CapmosaicError, CapmosaicResult};

/// A planned target grid size. Both dimensions are nonzero once planning
/// has succeeded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

/// Plan the downsample target grid.
///
/// A zero `res_y` is derived from the source aspect ratio: float multiply,
/// then truncation toward zero. An explicit nonzero `res_y` passes through
/// unchanged together with `res_x`; asymmetric targets are allowed and the
/// aspect ratio is not enforced on that branch. Values are never clamped to
/// the source size, so upscaling requests simply produce a blockier result.
pub fn plan_resolution(
    res_x: u32,
    res_y: u32,
    source_width: u32,
    source_height: u32,
) -> CapmosaicResult<Resolution> {
    if source_width == 0 || source_height == 0 {
        return Err(CapmosaicError::invalid_resolution(
            "source image has zero size",
        ));
    }

    let height = if res_y == 0 {
        if res_x == 0 {
            return Err(CapmosaicError::invalid_resolution("zero x-resolution"));
        }
        (f64::from(res_x) * f64::from(source_height) / f64::from(source_width)) as u32
    } else {
        res_y
    };

    if res_x == 0 || height == 0 {
        return Err(CapmosaicError::invalid_resolution(format!(
            "target grid {res_x}x{height} has a zero dimension"
        )));
    }

    debug!(width = res_x, height, "planned target grid");
    Ok(Resolution {
        width: res_x,
        height,
    })
}
