//! Convex polygon primitives
//!
//! Polygons are ordered vertex lists with an implicit closing edge from the
//! last vertex back to the first. All operations assume convex input, which
//! half-plane clipping preserves.

/// Axis-aligned extent of a polygon
#[derive(Debug, Clone, Copy)]
pub struct Bounds {
    /// Smallest x coordinate
    pub min_x: f64,
    /// Smallest y coordinate
    pub min_y: f64,
    /// Largest x coordinate
    pub max_x: f64,
    /// Largest y coordinate
    pub max_y: f64,
}

/// Iterate over directed edges, pairing each vertex with its successor
pub fn edges(polygon: &[[f64; 2]]) -> impl Iterator<Item = ([f64; 2], [f64; 2])> + '_ {
    polygon
        .iter()
        .zip(polygon.iter().cycle().skip(1))
        .map(|(a, b)| (*a, *b))
}

/// Clip a convex polygon to the side of the perpendicular bisector closer to `site`
///
/// Sutherland-Hodgman against the half-plane of points at least as close to
/// `site` as to `other`. Returns the (possibly empty) clipped polygon.
pub fn clip_closer_side(polygon: &[[f64; 2]], site: [f64; 2], other: [f64; 2]) -> Vec<[f64; 2]> {
    let normal_x = other[0] - site[0];
    let normal_y = other[1] - site[1];
    let midpoint_x = (site[0] + other[0]) * 0.5;
    let midpoint_y = (site[1] + other[1]) * 0.5;
    let limit = normal_x.mul_add(midpoint_x, normal_y * midpoint_y);

    let mut clipped = Vec::with_capacity(polygon.len() + 1);
    for (current, next) in edges(polygon) {
        let current_side = normal_x.mul_add(current[0], normal_y * current[1]) - limit;
        let next_side = normal_x.mul_add(next[0], normal_y * next[1]) - limit;

        if current_side <= 0.0 {
            clipped.push(current);
        }
        if (current_side <= 0.0) != (next_side <= 0.0) {
            let t = current_side / (current_side - next_side);
            clipped.push([
                (next[0] - current[0]).mul_add(t, current[0]),
                (next[1] - current[1]).mul_add(t, current[1]),
            ]);
        }
    }
    clipped
}

/// Unsigned polygon area via the shoelace formula
pub fn area(polygon: &[[f64; 2]]) -> f64 {
    if polygon.len() < 3 {
        return 0.0;
    }
    let signed: f64 = edges(polygon)
        .map(|(a, b)| a[0].mul_add(b[1], -(b[0] * a[1])))
        .sum();
    signed.abs() * 0.5
}

/// Axis-aligned bounds of a polygon, `None` when it has no vertices
pub fn bounds(polygon: &[[f64; 2]]) -> Option<Bounds> {
    let first = polygon.first()?;
    let mut extent = Bounds {
        min_x: first[0],
        min_y: first[1],
        max_x: first[0],
        max_y: first[1],
    };
    for vertex in polygon {
        extent.min_x = extent.min_x.min(vertex[0]);
        extent.min_y = extent.min_y.min(vertex[1]);
        extent.max_x = extent.max_x.max(vertex[0]);
        extent.max_y = extent.max_y.max(vertex[1]);
    }
    Some(extent)
}

/// Horizontal span covered by a convex polygon at height `sample_y`
///
/// Returns the leftmost and rightmost edge crossings of the scanline, or
/// `None` when the scanline misses the polygon entirely.
pub fn scanline_span(polygon: &[[f64; 2]], sample_y: f64) -> Option<(f64, f64)> {
    let mut enter = f64::INFINITY;
    let mut exit = f64::NEG_INFINITY;
    let mut crossed = false;

    for (current, next) in edges(polygon) {
        if (current[1] <= sample_y) == (next[1] <= sample_y) {
            continue;
        }
        let t = (sample_y - current[1]) / (next[1] - current[1]);
        let x = (next[0] - current[0]).mul_add(t, current[0]);
        enter = enter.min(x);
        exit = exit.max(x);
        crossed = true;
    }

    crossed.then_some((enter, exit))
}

/// Distance from a point to a line segment
pub fn segment_distance(point: [f64; 2], start: [f64; 2], end: [f64; 2]) -> f64 {
    let edge_x = end[0] - start[0];
    let edge_y = end[1] - start[1];
    let length_squared = edge_x.mul_add(edge_x, edge_y * edge_y);

    let t = if length_squared > 0.0 {
        (edge_x.mul_add(point[0] - start[0], edge_y * (point[1] - start[1])) / length_squared)
            .clamp(0.0, 1.0)
    } else {
        0.0
    };

    let closest_x = edge_x.mul_add(t, start[0]);
    let closest_y = edge_y.mul_add(t, start[1]);
    let dx = point[0] - closest_x;
    let dy = point[1] - closest_y;
    dx.hypot(dy)
}
