//! Geometry kernel seam
//!
//! The polygon algebra the tool consumes: boolean combination, point
//! containment, and closed-path normalization. The tool only ever talks
//! to the [`RegionAlgebra`] trait; the production implementation lives in
//! [`boolean`] and is backed by the `geo` crate.

pub mod boolean;

pub use boolean::GeoKernel;

use crate::domain::{Point, Region};

/// Polygon algebra consumed by the selection tool.
///
/// All operations are pure: inputs are never mutated. A result with zero
/// contours is a valid "selects nothing" value, never an error.
pub trait RegionAlgebra {
    /// Union of two regions
    fn union(&self, a: &Region, b: &Region) -> Region;

    /// Subtract `b` from `a`
    fn subtract(&self, a: &Region, b: &Region) -> Region;

    /// Whether the filled region contains the point
    fn contains(&self, region: &Region, point: Point) -> bool;

    /// Canonical closed form: consecutive duplicate points removed,
    /// contours with fewer than three distinct points dropped, every
    /// surviving contour explicitly closed
    fn normalize(&self, region: &Region) -> Region;
}
