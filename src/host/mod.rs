//! Host bridge
//!
//! Everything the tool needs from the surrounding application, and
//! everything it hands back. The tool reads host state through
//! [`HostQueries`], returns effects from its handlers, and the bridge in
//! [`bridge`] applies them to a [`Host`] implementation plus the overlay
//! renderer. Keybinding interpretation, raster erase/fill, and undo
//! history all live on the host side of this seam.

pub mod bridge;
pub mod layer;

pub use bridge::{Host, apply_effects};
pub use layer::{BufferLayer, CompositeLayer};

use crate::config::FillStyle;
use crate::domain::Point;
use crate::marquee::events::{Command, PointerEvent};

/// Shared state the tool reads from the host while handling an event
pub trait HostQueries {
    /// Whether the named command's binding is currently held
    fn is_command_pressed(&self, command: Command) -> bool;

    /// Resolve a pointer event to canvas-local coordinates
    fn localize_point(&self, event: &PointerEvent) -> Point;

    /// Layers an erase applies to
    fn visible_layer_indices(&self) -> Vec<usize>;

    /// The dedicated layer a fill paints into
    fn fill_layer_index(&self) -> usize;

    /// Current fill color and opacity from shared UI state
    fn fill_style(&self) -> FillStyle;
}
