use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{CapmosaicError, CapmosaicResult};
use crate::raster::PixelGrid;

/// Decode an image file into a pixel grid.
///
/// The format is detected from the file contents, never from the extension.
pub fn read_image(path: &Path) -> CapmosaicResult<PixelGrid> {
    let bytes = fs::read(path).map_err(|e| {
        CapmosaicError::source_read(format!(
            "could not open source file '{}': {e}",
            path.display()
        ))
    })?;

    let format = image::guess_format(&bytes).map_err(|e| {
        CapmosaicError::decode(format!(
            "could not decode source image '{}': {e}",
            path.display()
        ))
    })?;
    let decoded = image::load_from_memory_with_format(&bytes, format).map_err(|e| {
        CapmosaicError::decode(format!(
            "could not decode source image '{}': {e}",
            path.display()
        ))
    })?;
    debug!(?format, "decoded source image");

    let rgba = decoded.into_rgba8();
    let (width, height) = rgba.dimensions();
    PixelGrid::from_raw(width, height, rgba.into_raw())
}

/// Encode a pixel grid losslessly as PNG, regardless of the source format.
pub fn write_png(grid: &PixelGrid, path: &Path) -> CapmosaicResult<()> {
    image::save_buffer_with_format(
        path,
        grid.data(),
        grid.width(),
        grid.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| {
        CapmosaicError::output_write(format!(
            "unable to write output file '{}': {e}",
            path.display()
        ))
    })
}
