//! The marquee selection tool
//!
//! Pointer and keyboard events go in, an ordered effect list comes out;
//! the host bridge applies the effects. The tool owns the committed
//! region and the in-progress gesture exclusively; renderers and the
//! host only ever see snapshots.

pub mod builder;
pub mod events;
mod handlers;
pub mod state;

use log::debug;

use crate::domain::{CombineOp, Point, Rect, Region, ToolStatus};
use crate::host::HostQueries;
use crate::kernel::{GeoKernel, RegionAlgebra};
use events::{Effect, InputEvent};
use state::ToolState;

/// Freeform/straight-line selection over a bounded canvas
pub struct MarqueeTool<K> {
    pub(crate) kernel: K,
    pub(crate) bounds: Rect,
    pub(crate) state: ToolState,
    pub(crate) region: Region,
    pub(crate) started: bool,
}

impl MarqueeTool<GeoKernel> {
    /// Tool with the default geo-backed kernel
    pub fn new(bounds: Rect) -> Self {
        Self::with_kernel(GeoKernel, bounds)
    }
}

impl<K: RegionAlgebra> MarqueeTool<K> {
    /// Tool with an injected region algebra
    pub fn with_kernel(kernel: K, bounds: Rect) -> Self {
        Self {
            kernel,
            bounds,
            state: ToolState::default(),
            region: Region::empty(),
            started: false,
        }
    }

    /// Begin a session with a fresh empty region. Idempotent.
    pub fn startup(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.region.clear();
        self.state = ToolState::default();
        debug!("marquee startup");
    }

    /// End the session; further events are ignored. Idempotent.
    pub fn shutdown(&mut self) {
        if !self.started {
            return;
        }
        self.started = false;
        self.region.clear();
        self.state = ToolState::default();
        debug!("marquee shutdown");
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// The committed region (excludes any in-progress sub-path)
    pub fn region(&self) -> &Region {
        &self.region
    }

    pub fn state(&self) -> &ToolState {
        &self.state
    }

    /// The canvas bounds every stored point is clamped into
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Feed one event through the state machine
    pub fn handle_event(&mut self, event: InputEvent, host: &dyn HostQueries) -> Vec<Effect> {
        if !self.started {
            return Vec::new();
        }
        match event {
            InputEvent::PointerDown(ev) => handlers::pointer_down(self, ev, host),
            InputEvent::PointerMove(ev) => handlers::pointer_move(self, ev, host),
            InputEvent::PointerUp(ev) => handlers::pointer_up(self, ev, host),
            InputEvent::KeyDown(ev) => handlers::key_down(self, ev, host),
            InputEvent::KeyUp(ev) => handlers::key_up(self, ev, host),
            InputEvent::WindowBlur => Vec::new(),
        }
    }

    /// The live combined region: the open base path while drawing, or the
    /// committed region merged with the in-progress sub-path under the
    /// current operator
    pub fn combined_region(&self) -> Region {
        match &self.state {
            ToolState::Drawing { path, .. } => Region {
                contours: vec![path.contour()],
            },
            ToolState::SubPathEditing {
                op, sub: Some(sub), ..
            } => builder::combine(&self.kernel, &self.region, sub, Some(*op), self.bounds),
            _ => self.region.clone(),
        }
    }

    /// Uncommitted straight-line endpoint, if any
    pub fn draft_point(&self) -> Option<Point> {
        match &self.state {
            ToolState::Drawing { draft, .. } => *draft,
            _ => None,
        }
    }

    /// Hit-test a canvas point against the live combined region, so
    /// add/subtract previews are grabbable before commit
    pub fn hit_test(&self, point: Point) -> bool {
        let combined = self.combined_region();
        !combined.is_empty() && self.kernel.contains(&combined, point)
    }

    /// Clear the selection and return to the initial idle state
    pub fn deselect(&mut self) -> Vec<Effect> {
        debug!("deselect (was {})", self.state.name());
        self.region.clear();
        self.state = ToolState::default();
        vec![Effect::Status(ToolStatus::Idle), Effect::Redraw]
    }

    /// Ask the host to leave the tool for its drawing mode. Geometry is
    /// left untouched; teardown happens when the host stops the session.
    pub fn cancel(&self) -> Vec<Effect> {
        debug!("cancel requested");
        vec![Effect::Status(ToolStatus::Idle), Effect::SwitchToDrawing]
    }

    pub(crate) fn arm(&mut self, op: CombineOp) {
        match &mut self.state {
            ToolState::SubPathEditing { op: current, .. } => *current = op,
            ToolState::Idle { complete: true } | ToolState::Armed => {
                debug!("armed for {op:?}");
                self.state = ToolState::SubPathEditing {
                    op,
                    sub: None,
                    pointer_down: false,
                };
            }
            _ => {}
        }
    }
}
