//! Effect application glue between the tool and the host

use log::debug;

use super::layer::CompositeLayer;
use crate::config::FillStyle;
use crate::domain::{CursorIcon, Region, ToolStatus};
use crate::kernel::RegionAlgebra;
use crate::marquee::MarqueeTool;
use crate::marquee::events::Effect;
use crate::render::OutlineRenderer;

/// Operations the host performs on the tool's behalf.
///
/// Erase and fill receive the finalized region and are expected to
/// rasterize the operation themselves; the tool never touches pixels.
pub trait Host {
    /// Toolbar busy/idle signal
    fn set_status(&mut self, status: ToolStatus);

    /// Cursor shown over the canvas
    fn set_cursor(&mut self, cursor: CursorIcon);

    /// Leave the tool and return to the host's drawing mode
    fn switch_to_drawing(&mut self);

    /// Record layer contents onto the undo stack
    fn history_snapshot(&mut self, layers: &[usize]);

    /// Erase raster content under the region on the given layers
    fn erase(&mut self, layers: &[usize], region: &Region);

    /// Fill the region on one layer with the given style
    fn fill(&mut self, layer: usize, region: &Region, style: FillStyle);

    /// Layers whose pixels changed and need recompositing
    fn mark_dirty(&mut self, layers: &[usize]);

    /// Hand control to the operate-on-selection stage
    fn handoff_to_operate(&mut self);
}

/// Apply an ordered effect list from one handled event.
///
/// Redraws snapshot the tool's live combined region and draft point;
/// everything else dispatches straight to the host.
pub fn apply_effects<K: RegionAlgebra>(
    effects: Vec<Effect>,
    tool: &MarqueeTool<K>,
    renderer: &mut OutlineRenderer,
    composite: &mut dyn CompositeLayer,
    host: &mut dyn Host,
) {
    for effect in effects {
        debug!("applying {effect:?}");
        match effect {
            Effect::Redraw => {
                renderer.render(&tool.combined_region(), tool.draft_point(), composite);
            }
            Effect::Status(status) => host.set_status(status),
            Effect::Cursor(icon) => host.set_cursor(icon),
            Effect::SwitchToDrawing => host.switch_to_drawing(),
            Effect::HistorySnapshot { layers } => host.history_snapshot(&layers),
            Effect::Erase { layers, region } => host.erase(&layers, &region),
            Effect::Fill {
                layer,
                region,
                style,
            } => host.fill(layer, &region, style),
            Effect::MarkDirty { layers } => host.mark_dirty(&layers),
            Effect::HandoffToOperate => host.handoff_to_operate(),
        }
    }
}
