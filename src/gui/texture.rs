use super::Config;
use crate::Grid;

const BYTES_IN_PIXEL: usize = 3;

/// Packs the interior of the grid into `dst` as RGB pixels, one per cell,
/// row-major. The border is left out, as in the quads view. Returns the
/// side of the packed image.
pub fn fill_rgb(grid: &Grid, dst: &mut Vec<u8>) -> usize {
    let alive = Config::ALIVE_COLOR.to_array();
    let dead = Config::DEAD_COLOR.to_array();
    let n = grid.side();
    let inner = n - 2;

    dst.resize(inner * inner * BYTES_IN_PIXEL, 0);
    let interior = grid
        .rows()
        .skip(1)
        .take(inner)
        .flat_map(|row| &row[1..n - 1]);
    for (pixel, &cell) in dst.chunks_exact_mut(BYTES_IN_PIXEL).zip(interior) {
        let color = if cell { alive } else { dead };
        pixel.copy_from_slice(&color[..BYTES_IN_PIXEL]);
    }
    inner
}
