use crate::plan::Resolution;
use crate::raster::PixelGrid;

/// Nearest-neighbor resample of `source` onto a `target` grid.
///
/// Each destination cell copies the source sample at
/// `s = d * source_extent / target_extent` (floor division) verbatim; there
/// is no interpolation or filtering, so per-cell colors stay sharp and
/// unmixed. The mapping works the same shrinking or growing, which is what
/// the block-mode upscale relies on.
pub fn resample(source: &PixelGrid, target: Resolution) -> PixelGrid {
    let mut out = PixelGrid::new(target.width, target.height);
    for dy in 0..target.height {
        let sy = (u64::from(dy) * u64::from(source.height()) / u64::from(target.height)) as u32;
        for dx in 0..target.width {
            let sx = (u64::from(dx) * u64::from(source.width()) / u64::from(target.width)) as u32;
            out.put(dx, dy, source.get(sx, sy));
        }
    }
    out
}
