use rayon::prelude::*;
use tracing::debug;

use crate::error::{CapmosaicError, CapmosaicResult};
use crate::mask::CircularMask;
use crate::raster::{PixelGrid, Rgba8};

pub fn over(dst: Rgba8, src: Rgba8) -> Rgba8 {
    if src[3] == 0 {
        return dst;
    }
    if src[3] == 255 {
        return src;
    }

    let inv = 255u16 - u16::from(src[3]);

    let mut out = [0u8; 4];
    out[3] = add_sat_u8(src[3], mul_div255(u16::from(dst[3]), inv));

    for i in 0..3 {
        out[i] = add_sat_u8(src[i], mul_div255(u16::from(dst[i]), inv));
    }
    out
}

/// Paint every grid cell as a solid-color cap into a fresh canvas.
///
/// The canvas is `(grid_width * side, grid_height * side)` and starts fully
/// transparent; it is never pre-filled with a background, so the corner
/// regions between adjacent caps stay transparent. Each cell owns the
/// disjoint rectangle with top-left `(x * side, y * side)`, and each grid row
/// owns a disjoint horizontal band of the canvas, so rows are painted in
/// parallel with identical output to a sequential traversal.
pub fn composite_caps(grid: &PixelGrid, mask: &CircularMask) -> CapmosaicResult<PixelGrid> {
    let side = mask.side();
    let width = grid.width().checked_mul(side).ok_or_else(|| {
        CapmosaicError::invalid_resolution("canvas width overflows u32")
    })?;
    let height = grid.height().checked_mul(side).ok_or_else(|| {
        CapmosaicError::invalid_resolution("canvas height overflows u32")
    })?;

    let mut canvas = PixelGrid::new(width, height);
    if canvas.data().is_empty() {
        return Ok(canvas);
    }
    debug!(width, height, "allocated output canvas");

    let band_len = (width as usize) * (side as usize) * 4;
    canvas
        .data_mut()
        .par_chunks_mut(band_len)
        .enumerate()
        .for_each(|(gy, band)| paint_row(band, grid, mask, gy as u32));

    Ok(canvas)
}

/// Paint one grid row into its canvas band (`side` scanlines of the canvas).
fn paint_row(band: &mut [u8], grid: &PixelGrid, mask: &CircularMask, gy: u32) {
    let side = mask.side();
    let scanline_px = (grid.width() as usize) * (side as usize);

    for gx in 0..grid.width() {
        let color = grid.get(gx, gy);
        for my in 0..side {
            for mx in 0..side {
                if !mask.covered(mx, my) {
                    continue;
                }
                let cx = (gx * side + mx) as usize;
                let i = ((my as usize) * scanline_px + cx) * 4;
                let dst = [band[i], band[i + 1], band[i + 2], band[i + 3]];
                let out = over(dst, color);
                band[i..i + 4].copy_from_slice(&out);
            }
        }
    }
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

fn add_sat_u8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn over_src_alpha_0_is_noop() {
        let dst = [10, 20, 30, 40];
        let src = [255, 255, 255, 0];
        assert_eq!(over(dst, src), dst);
    }

    #[test]
    fn over_src_opaque_replaces_dst() {
        let dst = [0, 0, 0, 255];
        let src = [255, 0, 0, 255];
        assert_eq!(over(dst, src), src);
    }

    #[test]
    fn over_dst_transparent_returns_src() {
        let dst = [0, 0, 0, 0];
        let src = [100, 110, 120, 200];
        assert_eq!(over(dst, src), src);
    }

    fn grid_of(width: u32, height: u32, colors: &[[u8; 4]]) -> PixelGrid {
        let mut grid = PixelGrid::new(width, height);
        for y in 0..height {
            for x in 0..width {
                grid.put(x, y, colors[(y * width + x) as usize]);
            }
        }
        grid
    }

    fn paint_sequential(grid: &PixelGrid, mask: &CircularMask) -> PixelGrid {
        let side = mask.side();
        let mut canvas = PixelGrid::new(grid.width() * side, grid.height() * side);
        for gy in 0..grid.height() {
            for gx in 0..grid.width() {
                let color = grid.get(gx, gy);
                for my in 0..side {
                    for mx in 0..side {
                        if mask.covered(mx, my) {
                            let (cx, cy) = (gx * side + mx, gy * side + my);
                            let dst = canvas.get(cx, cy);
                            canvas.put(cx, cy, over(dst, color));
                        }
                    }
                }
            }
        }
        canvas
    }

    #[test]
    fn canvas_has_diameter_scaled_size() {
        let grid = grid_of(3, 2, &[[9, 9, 9, 255]; 6]);
        let mask = CircularMask::new(10);
        let canvas = composite_caps(&grid, &mask).unwrap();
        assert_eq!((canvas.width(), canvas.height()), (60, 40));
    }

    #[test]
    fn cap_center_gets_cell_color_and_corners_stay_transparent() {
        let grid = grid_of(1, 1, &[[200, 50, 25, 255]]);
        let mask = CircularMask::new(10);
        let canvas = composite_caps(&grid, &mask).unwrap();
        assert_eq!(canvas.get(10, 10), [200, 50, 25, 255]);
        assert_eq!(canvas.get(0, 0), [0, 0, 0, 0]);
        assert_eq!(canvas.get(19, 19), [0, 0, 0, 0]);
    }

    #[test]
    fn cells_do_not_bleed_into_neighbor_tiles() {
        let colors = [
            [255, 0, 0, 255],
            [0, 255, 0, 255],
            [0, 0, 255, 255],
            [255, 255, 0, 255],
        ];
        let grid = grid_of(2, 2, &colors);
        let mask = CircularMask::new(4);
        let side = mask.side();
        let canvas = composite_caps(&grid, &mask).unwrap();

        for cy in 0..canvas.height() {
            for cx in 0..canvas.width() {
                let px = canvas.get(cx, cy);
                if px == [0, 0, 0, 0] {
                    continue;
                }
                let cell = ((cy / side) * 2 + (cx / side)) as usize;
                assert_eq!(px, colors[cell], "pixel ({cx},{cy}) left its tile");
            }
        }
    }

    #[test]
    fn parallel_rows_match_sequential_reference() {
        let colors: Vec<[u8; 4]> = (0..15u8).map(|i| [i * 3, 255 - i, i, 255]).collect();
        let grid = grid_of(5, 3, &colors);
        let mask = CircularMask::new(6);
        let parallel = composite_caps(&grid, &mask).unwrap();
        let sequential = paint_sequential(&grid, &mask);
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn empty_mask_side_yields_empty_canvas() {
        let grid = grid_of(2, 2, &[[1, 2, 3, 255]; 4]);
        let mask = CircularMask::new(0);
        let canvas = composite_caps(&grid, &mask).unwrap();
        assert_eq!((canvas.width(), canvas.height()), (0, 0));
    }
}
