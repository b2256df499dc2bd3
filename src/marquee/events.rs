//! Input and effect types for the marquee tool
//!
//! Input events arrive pre-dispatched from the host's event loop; effects
//! travel back through the host bridge, which applies them. The tool
//! never touches host state directly, so every transition stays
//! observable and testable as `(state, event) -> (state, effects)`.

use crate::config::FillStyle;
use crate::domain::{CursorIcon, Point, Region, ToolStatus};

/// What a pointer event landed on, as reported by the host
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventTarget {
    /// The drawing canvas itself
    Canvas,
    /// The tool's own toolbar button
    ToolbarButton,
    /// Anything else (panels, other toolbars, window chrome)
    Other,
}

/// A pointer sample in host window coordinates
#[derive(Clone, Copy, Debug)]
pub struct PointerEvent {
    pub position: Point,
    pub target: EventTarget,
}

impl PointerEvent {
    pub fn new(position: Point, target: EventTarget) -> Self {
        Self { position, target }
    }

    /// Pointer sample over the canvas
    pub fn on_canvas(x: f32, y: f32) -> Self {
        Self::new(Point::new(x, y), EventTarget::Canvas)
    }
}

/// Named commands resolved by the host keybinding interpreter
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Hold to place straight segments click by click
    StraightLine,
    /// Hold to union the next sub-path into the selection
    Add,
    /// Hold to carve the next sub-path out of the selection
    Subtract,
    /// Abort the tool without committing
    Cancel,
    /// Erase raster content under the selection
    Erase,
    /// Fill the selection on the fill layer
    Fill,
}

/// Keyboard event as forwarded by the host
#[derive(Clone, Copy, Debug, Default)]
pub struct KeyEvent {
    /// Host-level clipboard shortcut (cut/copy/paste) that must travel
    /// through untouched
    pub passthrough: bool,
}

/// Events consumed by the tool
#[derive(Clone, Copy, Debug)]
pub enum InputEvent {
    PointerDown(PointerEvent),
    PointerMove(PointerEvent),
    PointerUp(PointerEvent),
    KeyDown(KeyEvent),
    KeyUp(KeyEvent),
    /// Reserved hook for cancel-on-blur; currently ignored
    WindowBlur,
}

/// Instructions handed back to the host bridge, applied in order
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Geometry changed; re-render the overlay
    Redraw,
    /// Toolbar status signal
    Status(ToolStatus),
    /// Cursor requested over the canvas
    Cursor(CursorIcon),
    /// Leave the tool and return the host to its drawing mode
    SwitchToDrawing,
    /// Record layer contents before a destructive raster operation
    HistorySnapshot { layers: Vec<usize> },
    /// Erase raster content under the finalized region
    Erase { layers: Vec<usize>, region: Region },
    /// Fill the finalized region on one layer
    Fill {
        layer: usize,
        region: Region,
        style: FillStyle,
    },
    /// Layers whose pixels changed
    MarkDirty { layers: Vec<usize> },
    /// Hand control to the operate-on-selection stage
    HandoffToOperate,
}
