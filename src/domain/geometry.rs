//! Geometric types for canvas coordinates and point constraining

/// Point in canvas-local coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Round both coordinates to the nearest integer
    pub fn round(self) -> Self {
        Self {
            x: self.x.round(),
            y: self.y.round(),
        }
    }
}

/// Axis-aligned canvas bounds
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    /// Create a new rectangle from coordinates
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Rectangle from (0, 0) to (width, height)
    pub fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Get the width of the rectangle
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Get the height of the rectangle
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Check if this rectangle contains a point
    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }
}

/// Clamp a point into the rectangle after rounding to integer coordinates
pub fn constrain_point(point: Point, rect: Rect) -> Point {
    let p = point.round();
    Point::new(
        p.x.clamp(rect.left, rect.right),
        p.y.clamp(rect.top, rect.bottom),
    )
}

/// Path vertex: an anchor point plus optional segment-handle metadata
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vertex {
    pub anchor: Point,
    pub handle_in: Option<Point>,
    pub handle_out: Option<Point>,
}

impl Vertex {
    /// Plain vertex with no handles
    pub fn from_point(anchor: Point) -> Self {
        Self {
            anchor,
            handle_in: None,
            handle_out: None,
        }
    }
}

/// Clamp a vertex anchor into the rectangle, leaving its handles untouched
pub fn constrain_vertex(vertex: Vertex, rect: Rect) -> Vertex {
    Vertex {
        anchor: constrain_point(vertex.anchor, rect),
        ..vertex
    }
}
