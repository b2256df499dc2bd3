//! Region algebra backed by the `geo` crate's boolean operations
//!
//! Regions are flat contour lists; `geo` wants polygons with explicit
//! holes. Assembly classifies each ring by even-odd containment depth:
//! even-depth rings are shells, odd-depth rings become holes of the
//! smallest shell that encloses them. Results are flattened back to the
//! contour list in polygon order, exterior first.

use geo::{Area, BooleanOps, Contains, InteriorPoint, MultiPolygon, Point as GeoPoint, Polygon};

use super::RegionAlgebra;
use crate::domain::{Contour, Point, Region};

/// Region algebra implementation over `geo::BooleanOps`
#[derive(Clone, Copy, Debug, Default)]
pub struct GeoKernel;

impl RegionAlgebra for GeoKernel {
    fn union(&self, a: &Region, b: &Region) -> Region {
        flatten(&assemble(a).union(&assemble(b)))
    }

    fn subtract(&self, a: &Region, b: &Region) -> Region {
        flatten(&assemble(a).difference(&assemble(b)))
    }

    fn contains(&self, region: &Region, point: Point) -> bool {
        assemble(region).contains(&GeoPoint::new(point.x as f64, point.y as f64))
    }

    fn normalize(&self, region: &Region) -> Region {
        Region {
            contours: region.contours.iter().filter_map(normalize_contour).collect(),
        }
    }
}

/// Close one contour: drop consecutive duplicates, require three distinct
/// points, append the closing point. Returns `None` for degenerate rings.
fn normalize_contour(contour: &Contour) -> Option<Contour> {
    let mut points: Vec<Point> = Vec::with_capacity(contour.points().len() + 1);
    for &p in contour.points() {
        if points.last() != Some(&p) {
            points.push(p);
        }
    }
    if points.len() > 1 && points.first() == points.last() {
        points.pop();
    }
    if points.len() < 3 {
        return None;
    }
    let first = points[0];
    points.push(first);
    Some(Contour(points))
}

fn ring_polygon(contour: &Contour) -> Polygon<f64> {
    let coords: Vec<(f64, f64)> = contour
        .points()
        .iter()
        .map(|p| (p.x as f64, p.y as f64))
        .collect();
    Polygon::new(coords.into(), Vec::new())
}

/// Assemble flat contours into polygons with holes
fn assemble(region: &Region) -> MultiPolygon<f64> {
    let rings: Vec<Polygon<f64>> = region
        .contours
        .iter()
        .filter_map(normalize_contour)
        .map(|c| ring_polygon(&c))
        .collect();

    if rings.is_empty() {
        return MultiPolygon::new(Vec::new());
    }

    let probes: Vec<Option<GeoPoint<f64>>> = rings.iter().map(|r| r.interior_point()).collect();

    // containment depth of each ring among the others
    let mut depth = vec![0usize; rings.len()];
    for (i, probe) in probes.iter().enumerate() {
        let Some(probe) = probe else { continue };
        for (j, ring) in rings.iter().enumerate() {
            if i != j && ring.contains(probe) {
                depth[i] += 1;
            }
        }
    }

    // shell ring index -> hole ring indices
    let mut shells: Vec<(usize, Vec<usize>)> = (0..rings.len())
        .filter(|&i| depth[i] % 2 == 0)
        .map(|i| (i, Vec::new()))
        .collect();

    for i in 0..rings.len() {
        if depth[i] % 2 == 0 {
            continue;
        }
        let Some(probe) = probes[i] else { continue };
        // the smallest enclosing shell is the immediate parent
        let mut parent: Option<(usize, f64)> = None;
        for (slot, &(s, _)) in shells.iter().enumerate() {
            if rings[s].contains(&probe) {
                let area = rings[s].unsigned_area();
                if parent.is_none_or(|(_, best)| area < best) {
                    parent = Some((slot, area));
                }
            }
        }
        if let Some((slot, _)) = parent {
            shells[slot].1.push(i);
        }
    }

    MultiPolygon::new(
        shells
            .into_iter()
            .map(|(s, holes)| {
                Polygon::new(
                    rings[s].exterior().clone(),
                    holes
                        .into_iter()
                        .map(|h| rings[h].exterior().clone())
                        .collect(),
                )
            })
            .collect(),
    )
}

/// Flatten polygons back into the ordered contour list
fn flatten(mp: &MultiPolygon<f64>) -> Region {
    let mut contours = Vec::new();
    for poly in mp.iter() {
        contours.push(contour_of(poly.exterior()));
        for ring in poly.interiors() {
            contours.push(contour_of(ring));
        }
    }
    Region { contours }
}

fn contour_of(ring: &geo::LineString<f64>) -> Contour {
    let mut points: Vec<Point> = ring
        .coords()
        .map(|c| Point::new(c.x as f32, c.y as f32))
        .collect();
    if points.first() != points.last()
        && let Some(&first) = points.first()
    {
        points.push(first);
    }
    Contour(points)
}
