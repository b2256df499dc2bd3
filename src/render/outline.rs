//! Marching-ants outline rendering using tiny-skia
//!
//! The overlay is redrawn from scratch on every geometry change: each
//! contour of the live combined region is stroked twice, a solid
//! background-contrast pass under a dashed accent pass, then the whole
//! frame is pushed to the host's composite layer.

use log::warn;
use tiny_skia::{Color, Paint, PathBuilder, Pixmap, Stroke, StrokeDash, Transform};

use crate::config::OutlineStyle;
use crate::domain::{Point, Region};
use crate::host::CompositeLayer;

/// Offscreen renderer for the selection outline overlay
pub struct OutlineRenderer {
    width: u32,
    height: u32,
    style: OutlineStyle,
    surface: Option<Pixmap>,
}

impl OutlineRenderer {
    /// Renderer sized to the canvas; no surface until [`start`](Self::start)
    pub fn new(width: u32, height: u32, style: OutlineStyle) -> Self {
        Self {
            width,
            height,
            style,
            surface: None,
        }
    }

    /// Allocate the offscreen surface. Idempotent.
    pub fn start(&mut self) {
        if self.surface.is_some() {
            return;
        }
        self.surface = Pixmap::new(self.width, self.height);
        if self.surface.is_none() {
            warn!(
                "overlay surface allocation failed ({}x{})",
                self.width, self.height
            );
        }
    }

    /// Release the surface and clear the composite layer. Idempotent.
    pub fn stop(&mut self, composite: &mut dyn CompositeLayer) {
        if self.surface.take().is_some() {
            composite.clear();
        }
    }

    pub fn is_started(&self) -> bool {
        self.surface.is_some()
    }

    /// Redraw the overlay for the given region and push it to the layer.
    ///
    /// The draft point joins the last contour only; it is drawn, never
    /// part of the region. A stopped renderer ignores the call.
    pub fn render(
        &mut self,
        region: &Region,
        draft: Option<Point>,
        composite: &mut dyn CompositeLayer,
    ) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        surface.fill(Color::TRANSPARENT);

        let mut base = Paint::default();
        let [r, g, b, a] = self.style.base.to_rgba_u8();
        base.set_color_rgba8(r, g, b, a);
        base.anti_alias = true;

        let mut accent = Paint::default();
        let [r, g, b, a] = self.style.accent.to_rgba_u8();
        accent.set_color_rgba8(r, g, b, a);
        accent.anti_alias = true;

        let solid = Stroke {
            width: self.style.width,
            ..Default::default()
        };
        let dashed = Stroke {
            width: self.style.width,
            dash: StrokeDash::new(self.style.dash.clone(), 0.0),
            ..Default::default()
        };

        let last = region.contours.len().saturating_sub(1);
        for (i, contour) in region.contours.iter().enumerate() {
            let mut points = contour.points().to_vec();
            if i == last && let Some(draft) = draft {
                points.push(draft);
            }
            let Some(path) = outline_path(&points) else {
                continue;
            };
            surface.stroke_path(&path, &base, &solid, Transform::identity(), None);
            surface.stroke_path(&path, &accent, &dashed, Transform::identity(), None);
        }

        composite.replace(surface.width(), surface.height(), surface.data());
    }
}

/// Polyline through the points as drawn, closed back to the start so an
/// in-progress path previews its eventual closure
fn outline_path(points: &[Point]) -> Option<tiny_skia::Path> {
    let (first, rest) = points.split_first()?;
    if rest.is_empty() {
        return None;
    }
    let mut pb = PathBuilder::new();
    pb.move_to(first.x, first.y);
    for p in rest {
        pb.line_to(p.x, p.y);
    }
    pb.close();
    pb.finish()
}
