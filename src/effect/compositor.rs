//! Raster compositing of transformed shards onto the output surface
//!
//! The HTML-canvas shape of the effect (save, clip, transform, draw image,
//! restore, stroke) becomes explicit scanline work here: each cell's clip
//! polygon is filled pixel by pixel, sampling the source image through the
//! inverse of the shard's jitter transform. Pixels whose jittered sample
//! falls outside the source keep the background, matching how a canvas draw
//! leaves previously painted content visible past the image edge.

use crate::effect::parameters::FractureParameters;
use crate::effect::shard::{CellTransform, JitterTransform, ShardState};
use crate::geometry::polygon;
use crate::geometry::sampler::WorkingSpace;
use crate::geometry::voronoi::Cell;
use image::{Rgba, RgbaImage};

/// Composite every shard onto a fresh output surface
///
/// The surface matches the source dimensions exactly. An empty seed set is
/// the required pass-through: the result is a pixel-identical copy of the
/// source. Cells are visited in index order so any overlap artifacts along
/// shared edges stay deterministic; indices without a cell are skipped.
pub fn composite(
    source: &RgbaImage,
    params: &FractureParameters,
    points: &[[f64; 2]],
    cells: &[Option<Cell>],
    space: &WorkingSpace,
) -> RgbaImage {
    // Background draw and pass-through in one step
    let mut surface = source.clone();
    if points.is_empty() {
        return surface;
    }

    let (width, height) = source.dimensions();
    let transform = CellTransform::new(params, space, width, height);

    for (index, (site, cell)) in points.iter().zip(cells).enumerate() {
        let Some(cell) = cell else { continue };

        let state = ShardState::derive(index, params);
        if state.is_stable {
            // Undisplaced shards repaint the background in place; the copy
            // above already holds those pixels, and stable boundaries never
            // receive a gap stroke
            continue;
        }

        let screen_polygon: Vec<[f64; 2]> = cell.iter().map(|v| transform.apply(*v)).collect();
        let jitter = JitterTransform::new(&state, transform.apply(*site));
        fill_cell(&mut surface, source, &screen_polygon, &jitter);

        if params.gap > 0.0 {
            stroke_polygon(&mut surface, &screen_polygon, params.gap, params.gap_color);
        }
    }

    surface
}

// Fills the clip polygon one scanline at a time. Convexity guarantees a
// single span per row.
fn fill_cell(
    surface: &mut RgbaImage,
    source: &RgbaImage,
    clip: &[[f64; 2]],
    jitter: &JitterTransform,
) {
    let Some(extent) = polygon::bounds(clip) else {
        return;
    };
    let (width, height) = surface.dimensions();
    let right = f64::from(width);
    let bottom = f64::from(height);

    let row_start = extent.min_y.floor().max(0.0) as u32;
    let row_end = extent.max_y.ceil().clamp(0.0, bottom) as u32;

    for y in row_start..row_end {
        let sample_y = f64::from(y) + 0.5;
        let Some((enter, exit)) = polygon::scanline_span(clip, sample_y) else {
            continue;
        };

        // Pixels whose center lies inside [enter, exit)
        let col_start = (enter - 0.5).ceil().max(0.0) as u32;
        let col_end = (exit - 0.5).ceil().clamp(0.0, right) as u32;

        for x in col_start..col_end {
            let sample = jitter.unapply([f64::from(x) + 0.5, sample_y]);
            let source_x = sample[0].floor();
            let source_y = sample[1].floor();
            if (0.0..right).contains(&source_x) && (0.0..bottom).contains(&source_y) {
                let pixel = *source.get_pixel(source_x as u32, source_y as u32);
                surface.put_pixel(x, y, pixel);
            }
        }
    }
}

// Strokes the non-jittered polygon boundary by distance-to-segment
// rasterization, the raster equivalent of a solid lineWidth stroke.
fn stroke_polygon(surface: &mut RgbaImage, boundary: &[[f64; 2]], gap: f64, color: Rgba<u8>) {
    let (width, height) = surface.dimensions();
    let right = f64::from(width);
    let bottom = f64::from(height);
    let half_width = gap / 2.0;
    let pad = half_width + 0.5;

    for (start, end) in polygon::edges(boundary) {
        let row_start = (start[1].min(end[1]) - pad).floor().max(0.0) as u32;
        let row_end = (start[1].max(end[1]) + pad).ceil().clamp(0.0, bottom) as u32;
        let col_start = (start[0].min(end[0]) - pad).floor().max(0.0) as u32;
        let col_end = (start[0].max(end[0]) + pad).ceil().clamp(0.0, right) as u32;

        for y in row_start..row_end {
            for x in col_start..col_end {
                let center = [f64::from(x) + 0.5, f64::from(y) + 0.5];
                if polygon::segment_distance(center, start, end) <= half_width {
                    surface.put_pixel(x, y, color);
                }
            }
        }
    }
}
