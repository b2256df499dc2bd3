//! Path construction and combine logic
//!
//! Grows the contour being drawn from pointer samples, closes it, and
//! merges it with the committed region through the geometry kernel.

use log::debug;

use crate::domain::{CombineOp, Contour, Point, Rect, Region, Vertex, constrain_vertex};
use crate::kernel::RegionAlgebra;

/// The contour currently being drawn
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActivePath {
    vertices: Vec<Vertex>,
}

impl ActivePath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clamp one pointer sample into the bounds and append it
    pub fn push(&mut self, point: Point, bounds: Rect) {
        self.vertices
            .push(constrain_vertex(Vertex::from_point(point), bounds));
    }

    /// Force closure by appending a clamped copy of the first point.
    /// A path with fewer than two points is left untouched.
    pub fn close(&mut self, bounds: Rect) {
        if self.vertices.len() < 2 {
            return;
        }
        let first = self.vertices[0];
        self.vertices.push(constrain_vertex(first, bounds));
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The anchors as a contour, in draw order
    pub fn contour(&self) -> Contour {
        Contour(self.vertices.iter().map(|v| v.anchor).collect())
    }
}

/// Combine a committed region with a sub-path under `op`.
///
/// `None` returns the region unchanged. Inputs are never mutated; the
/// sub-path copy is implicitly closed before the boolean operation.
pub fn combine<K: RegionAlgebra>(
    kernel: &K,
    region: &Region,
    sub: &ActivePath,
    op: Option<CombineOp>,
    bounds: Rect,
) -> Region {
    let Some(op) = op else {
        return region.clone();
    };
    let mut closed = sub.clone();
    closed.close(bounds);
    let sub_region = Region {
        contours: vec![closed.contour()],
    };
    match op {
        CombineOp::Add => kernel.union(region, &sub_region),
        CombineOp::Subtract => kernel.subtract(region, &sub_region),
    }
}

/// Close a drawn base path and merge it into the committed region.
///
/// The first commit unions with the empty region, which also resolves
/// self-intersections; any single-contour result that comes back open is
/// re-closed by the normalize pass. Paths with fewer than two points
/// leave the region untouched.
pub fn finalize_commit<K: RegionAlgebra>(
    kernel: &K,
    active: &ActivePath,
    region: &Region,
    bounds: Rect,
) -> Region {
    if active.len() < 2 {
        debug!("degenerate path ({} points), region kept", active.len());
        return region.clone();
    }
    let mut closed = active.clone();
    closed.close(bounds);
    let drawn = Region {
        contours: vec![closed.contour()],
    };
    kernel.normalize(&kernel.union(region, &drawn))
}
