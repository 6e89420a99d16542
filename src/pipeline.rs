use std::path::Path;

use tracing::info;

use crate::composite::composite_caps;
use crate::error::{CapmosaicError, CapmosaicResult};
use crate::io;
use crate::mask::{CircularMask, DEFAULT_CAP_RADIUS};
use crate::plan::{Resolution, plan_resolution};
use crate::raster::PixelGrid;
use crate::resample::resample;

/// Which rendering the downsampled grid is turned into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputMode {
    /// One circular cap per downsampled cell on a transparent canvas.
    Mosaic,
    /// Nearest-neighbor upscale back to the source size, no masking.
    Blocks,
}

/// Pipeline parameters, passed explicitly instead of living in process-wide
/// flag state.
#[derive(Clone, Copy, Debug)]
pub struct RenderConfig {
    /// Target grid width; 0 is rejected.
    pub res_x: u32,
    /// Target grid height; 0 derives it from the source aspect ratio.
    pub res_y: u32,
    /// Cap radius in output pixels, mosaic mode only.
    pub cap_radius: u32,
    pub mode: OutputMode,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            res_x: 100,
            res_y: 0,
            cap_radius: DEFAULT_CAP_RADIUS,
            mode: OutputMode::Mosaic,
        }
    }
}

/// Downsample `source` and render it in the configured mode.
///
/// Both modes share the same planning and downsample stages; they differ only
/// in how the downsampled grid is expanded into the output.
pub fn render(source: &PixelGrid, config: &RenderConfig) -> CapmosaicResult<PixelGrid> {
    let target = plan_resolution(config.res_x, config.res_y, source.width(), source.height())?;
    let grid = resample(source, target);

    match config.mode {
        OutputMode::Mosaic => {
            if config.cap_radius == 0 {
                return Err(CapmosaicError::invalid_resolution("zero cap radius"));
            }
            let mask = CircularMask::new(config.cap_radius);
            composite_caps(&grid, &mask)
        }
        OutputMode::Blocks => Ok(resample(
            &grid,
            Resolution {
                width: source.width(),
                height: source.height(),
            },
        )),
    }
}

/// One-shot filesystem pipeline: load, render, encode, write.
#[tracing::instrument]
pub fn run(input: &Path, output: &Path, config: &RenderConfig) -> CapmosaicResult<()> {
    let source = io::read_image(input)?;
    let rendered = render(&source, config)?;
    io::write_png(&rendered, output)?;
    info!(output = %output.display(), "wrote rendered image");
    Ok(())
}
