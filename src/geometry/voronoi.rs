//! Bounded Voronoi tessellation via the Delaunay dual
//!
//! Each cell is recovered from the Delaunay triangulation by clipping the
//! working space rectangle against the perpendicular bisectors of the site's
//! Delaunay neighbors. A Voronoi cell is exactly the intersection of those
//! half-planes, so the clipped cells partition the rectangle with no gaps or
//! overlaps. Duplicate sites collapse to a single triangulation vertex; the
//! later indices receive no cell and must be skipped by the caller.

use crate::geometry::polygon::clip_closer_side;
use crate::geometry::sampler::WorkingSpace;
use crate::io::error::{FractureError, Result};
use spade::{DelaunayTriangulation, Point2, Triangulation};
use std::collections::HashSet;

/// One closed convex polygon, vertices ordered with an implicit closing edge
pub type Cell = Vec<[f64; 2]>;

/// Compute the Voronoi cell of every seed point, clipped to the working space
///
/// Returns one entry per input point in input order. `None` marks a site that
/// produced no polygon (a duplicate of an earlier site, or a cell clipped to
/// nothing), which callers skip without error.
///
/// # Errors
///
/// Returns [`FractureError::Tessellation`] when a point cannot be inserted
/// into the triangulation (non-finite coordinates). Points sampled inside the
/// working space never trigger this.
pub fn tessellate(points: &[[f64; 2]], space: &WorkingSpace) -> Result<Vec<Option<Cell>>> {
    if points.is_empty() {
        return Ok(Vec::new());
    }

    let mut triangulation: DelaunayTriangulation<Point2<f64>> = DelaunayTriangulation::new();
    let mut handles = Vec::with_capacity(points.len());
    for point in points {
        let handle = triangulation
            .insert(Point2::new(point[0], point[1]))
            .map_err(|source| FractureError::Tessellation {
                reason: format!("failed to insert site ({}, {}): {source:?}", point[0], point[1]),
            })?;
        handles.push(handle);
    }

    let boundary: Cell = vec![
        [0.0, 0.0],
        [space.effective_width, 0.0],
        [space.effective_width, space.effective_height],
        [0.0, space.effective_height],
    ];

    let mut claimed = HashSet::with_capacity(points.len());
    let mut cells = Vec::with_capacity(points.len());
    for (site, handle) in points.iter().zip(&handles) {
        // Coincident sites share a vertex; only the first one owns the cell
        if !claimed.insert(handle.index()) {
            cells.push(None);
            continue;
        }

        let vertex = triangulation.vertex(*handle);
        let mut cell = boundary.clone();
        for edge in vertex.out_edges() {
            let neighbor = edge.to().position();
            cell = clip_closer_side(&cell, *site, [neighbor.x, neighbor.y]);
            if cell.len() < 3 {
                break;
            }
        }

        cells.push((cell.len() >= 3).then_some(cell));
    }

    Ok(cells)
}
