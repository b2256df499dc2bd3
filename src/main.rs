//! Scripted demo session: draw a freeform selection, carve a hole out
//! of it in subtract mode, fill it, and write the overlay to a PNG.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::RgbaImage;
use log::info;

use lassokit::config::{FillStyle, ToolConfig};
use lassokit::domain::{CursorIcon, Point, Rect, Region, ToolStatus};
use lassokit::host::{BufferLayer, Host, HostQueries, apply_effects};
use lassokit::kernel::GeoKernel;
use lassokit::marquee::MarqueeTool;
use lassokit::marquee::events::{Command, InputEvent, KeyEvent, PointerEvent};
use lassokit::render::OutlineRenderer;

const CANVAS: u32 = 256;

/// Host stand-in for the demo: key state is scripted, raster operations
/// are logged instead of painted
struct DemoHost {
    pressed: Vec<Command>,
    fill: FillStyle,
}

impl DemoHost {
    fn new(fill: FillStyle) -> Self {
        Self {
            pressed: Vec::new(),
            fill,
        }
    }
}

impl HostQueries for DemoHost {
    fn is_command_pressed(&self, command: Command) -> bool {
        self.pressed.contains(&command)
    }

    fn localize_point(&self, event: &PointerEvent) -> Point {
        event.position
    }

    fn visible_layer_indices(&self) -> Vec<usize> {
        vec![0]
    }

    fn fill_layer_index(&self) -> usize {
        1
    }

    fn fill_style(&self) -> FillStyle {
        self.fill
    }
}

impl Host for DemoHost {
    fn set_status(&mut self, status: ToolStatus) {
        info!("status: {status:?}");
    }

    fn set_cursor(&mut self, _cursor: CursorIcon) {}

    fn switch_to_drawing(&mut self) {
        info!("host switched back to drawing mode");
    }

    fn history_snapshot(&mut self, layers: &[usize]) {
        info!("undo snapshot of layers {layers:?}");
    }

    fn erase(&mut self, layers: &[usize], region: &Region) {
        info!(
            "erase on layers {layers:?} under {} contours",
            region.contours.len()
        );
    }

    fn fill(&mut self, layer: usize, region: &Region, style: FillStyle) {
        info!(
            "fill layer {layer} under {} contours (area {:.0}, alpha {})",
            region.contours.len(),
            region.area(),
            style.alpha
        );
    }

    fn mark_dirty(&mut self, layers: &[usize]) {
        info!("layers {layers:?} dirty");
    }

    fn handoff_to_operate(&mut self) {
        info!("handed off to operate stage");
    }
}

/// Tool, renderer, composite layer, and host wired together
struct Session {
    tool: MarqueeTool<GeoKernel>,
    renderer: OutlineRenderer,
    composite: BufferLayer,
    host: DemoHost,
}

impl Session {
    fn new(config: &ToolConfig) -> Self {
        let mut session = Self {
            tool: MarqueeTool::new(Rect::from_size(CANVAS as f32, CANVAS as f32)),
            renderer: OutlineRenderer::new(CANVAS, CANVAS, config.outline.clone()),
            composite: BufferLayer::new(),
            host: DemoHost::new(config.fill),
        };
        session.tool.startup();
        session.renderer.start();
        session
    }

    fn feed(&mut self, event: InputEvent) {
        let effects = self.tool.handle_event(event, &self.host);
        apply_effects(
            effects,
            &self.tool,
            &mut self.renderer,
            &mut self.composite,
            &mut self.host,
        );
    }

    /// Pointer-down on the first point, moves through the rest, release
    /// back on the first point
    fn drag(&mut self, points: &[(f32, f32)]) {
        let (first, rest) = points.split_first().expect("gesture needs points");
        self.feed(InputEvent::PointerDown(PointerEvent::on_canvas(
            first.0, first.1,
        )));
        for &(x, y) in rest {
            self.feed(InputEvent::PointerMove(PointerEvent::on_canvas(x, y)));
        }
        self.feed(InputEvent::PointerUp(PointerEvent::on_canvas(
            first.0, first.1,
        )));
    }

    fn press(&mut self, command: Command) {
        if !self.host.pressed.contains(&command) {
            self.host.pressed.push(command);
        }
        self.feed(InputEvent::KeyDown(KeyEvent::default()));
    }

    fn release(&mut self, command: Command) {
        self.host.pressed.retain(|c| *c != command);
        self.feed(InputEvent::KeyUp(KeyEvent::default()));
    }

    fn finish(mut self) {
        self.renderer.stop(&mut self.composite);
        self.tool.shutdown();
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ToolConfig::default_path()
        .map(|path| ToolConfig::load(&path))
        .unwrap_or_default();
    let mut session = Session::new(&config);

    // freeform outer shape
    session.drag(&[
        (40.0, 40.0),
        (40.0, 200.0),
        (120.0, 230.0),
        (200.0, 200.0),
        (200.0, 40.0),
    ]);
    info!(
        "committed base region: {} contours, area {:.0}",
        session.tool.region().contours.len(),
        session.tool.region().area()
    );

    // carve a hole in subtract mode
    session.press(Command::Subtract);
    session.drag(&[(90.0, 90.0), (90.0, 150.0), (150.0, 150.0), (150.0, 90.0)]);
    session.release(Command::Subtract);
    info!(
        "after subtract: {} contours, area {:.0}",
        session.tool.region().contours.len(),
        session.tool.region().area()
    );

    // persist the overlay before the fill deselects
    let output = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("lasso-overlay.png"));
    save_overlay(&session.composite, &output)?;
    info!("overlay written to {}", output.display());

    session.press(Command::Fill);
    session.release(Command::Fill);

    session.finish();
    Ok(())
}

/// Write the composite layer's current frame as a PNG
fn save_overlay(composite: &BufferLayer, path: &Path) -> Result<()> {
    let (width, height, data) = composite
        .frame()
        .context("no overlay frame has been rendered")?;
    let image = RgbaImage::from_raw(width, height, data.to_vec())
        .context("overlay frame has unexpected dimensions")?;
    image
        .save(path)
        .with_context(|| format!("writing overlay to {}", path.display()))
}
