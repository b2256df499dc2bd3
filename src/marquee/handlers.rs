//! Pointer and key handlers for the marquee state machine
//!
//! Each handler takes the tool, one event, and the host query interface,
//! and returns the ordered effect list for the bridge to apply.

use log::debug;

use super::MarqueeTool;
use super::builder::{self, ActivePath};
use super::events::{Command, Effect, EventTarget, KeyEvent, PointerEvent};
use super::state::ToolState;
use crate::domain::{CombineOp, CursorIcon, DrawKind, ToolStatus};
use crate::host::HostQueries;
use crate::kernel::RegionAlgebra;

pub(super) fn pointer_down<K: RegionAlgebra>(
    tool: &mut MarqueeTool<K>,
    event: PointerEvent,
    host: &dyn HostQueries,
) -> Vec<Effect> {
    match event.target {
        EventTarget::ToolbarButton => return Vec::new(),
        EventTarget::Other => return tool.cancel(),
        EventTarget::Canvas => {}
    }

    let point = host.localize_point(&event);

    // a finished selection grabs clicks that land inside it
    if matches!(tool.state, ToolState::Idle { complete: true }) && tool.hit_test(point) {
        debug!("pointer-down inside selection, handing off");
        tool.state = ToolState::Handoff;
        return vec![Effect::Status(ToolStatus::Idle), Effect::HandoffToOperate];
    }

    match &mut tool.state {
        ToolState::SubPathEditing {
            op,
            sub,
            pointer_down,
        } if sub.is_none() => {
            let mut path = ActivePath::new();
            path.push(point, tool.bounds);
            debug!("sub-path started ({op:?})");
            *sub = Some(path);
            *pointer_down = true;
            vec![
                Effect::Status(ToolStatus::Busy),
                Effect::Redraw,
                Effect::Cursor(CursorIcon::Crosshair),
            ]
        }
        ToolState::Idle { .. } | ToolState::Armed => {
            // a fresh base path replaces the committed region
            tool.region.clear();
            let kind = if host.is_command_pressed(Command::StraightLine) {
                DrawKind::Line
            } else {
                DrawKind::Freeform
            };
            let mut path = ActivePath::new();
            path.push(point, tool.bounds);
            let draft = (kind == DrawKind::Line).then_some(point);
            debug!("base path started ({kind:?})");
            tool.state = ToolState::Drawing {
                kind,
                path,
                draft,
                pointer_down: true,
            };
            vec![
                Effect::Status(ToolStatus::Busy),
                Effect::Redraw,
                Effect::Cursor(CursorIcon::Crosshair),
            ]
        }
        // a later click in line mode; the point lands on release
        ToolState::Drawing { pointer_down, .. } => {
            *pointer_down = true;
            Vec::new()
        }
        _ => Vec::new(),
    }
}

pub(super) fn pointer_move<K: RegionAlgebra>(
    tool: &mut MarqueeTool<K>,
    event: PointerEvent,
    host: &dyn HostQueries,
) -> Vec<Effect> {
    let point = host.localize_point(&event);

    // hover feedback while nothing is being drawn
    let hover = match &tool.state {
        ToolState::Idle { .. } | ToolState::Armed => {
            Some(if !tool.region.is_empty() && tool.hit_test(point) {
                CursorIcon::Grab
            } else {
                CursorIcon::Crosshair
            })
        }
        ToolState::Handoff => return Vec::new(),
        _ => None,
    };
    if let Some(cursor) = hover {
        return vec![Effect::Cursor(cursor)];
    }

    match &mut tool.state {
        ToolState::SubPathEditing {
            sub, pointer_down, ..
        } => {
            let mut effects = vec![Effect::Cursor(CursorIcon::Crosshair)];
            if *pointer_down && let Some(path) = sub {
                path.push(point, tool.bounds);
                effects.push(Effect::Redraw);
            }
            effects
        }
        ToolState::Drawing {
            kind,
            path,
            draft,
            pointer_down,
        } => {
            // line mode falls back to freeform once the modifier is gone
            if *pointer_down && !host.is_command_pressed(Command::StraightLine) {
                *kind = DrawKind::Freeform;
            }
            match kind {
                DrawKind::Line => *draft = Some(point),
                DrawKind::Freeform => {
                    *draft = None;
                    path.push(point, tool.bounds);
                }
            }
            vec![Effect::Cursor(CursorIcon::Crosshair), Effect::Redraw]
        }
        _ => Vec::new(),
    }
}

pub(super) fn pointer_up<K: RegionAlgebra>(
    tool: &mut MarqueeTool<K>,
    event: PointerEvent,
    host: &dyn HostQueries,
) -> Vec<Effect> {
    let point = host.localize_point(&event);

    match std::mem::take(&mut tool.state) {
        ToolState::SubPathEditing {
            op,
            sub: Some(mut path),
            ..
        } => {
            path.push(point, tool.bounds);
            tool.region = builder::combine(&tool.kernel, &tool.region, &path, Some(op), tool.bounds);
            let complete = !tool.region.is_empty();
            debug!(
                "sub-path committed ({op:?}), {} contours",
                tool.region.contours.len()
            );
            tool.state = ToolState::Idle { complete };
            vec![Effect::Redraw]
        }
        ToolState::SubPathEditing { op, sub: None, .. } => {
            // stray release while armed
            tool.state = ToolState::SubPathEditing {
                op,
                sub: None,
                pointer_down: false,
            };
            Vec::new()
        }
        ToolState::Drawing {
            mut path, draft, ..
        } => {
            let kind = if host.is_command_pressed(Command::StraightLine) {
                DrawKind::Line
            } else {
                DrawKind::Freeform
            };
            path.push(point, tool.bounds);
            if kind == DrawKind::Line {
                // keep collecting clicks; the draft endpoint stays live
                tool.state = ToolState::Drawing {
                    kind,
                    path,
                    draft,
                    pointer_down: false,
                };
                vec![Effect::Redraw]
            } else {
                tool.region =
                    builder::finalize_commit(&tool.kernel, &path, &tool.region, tool.bounds);
                let complete = !tool.region.is_empty();
                debug!(
                    "base path committed, {} contours",
                    tool.region.contours.len()
                );
                tool.state = ToolState::Idle { complete };
                vec![Effect::Redraw]
            }
        }
        other => {
            tool.state = other;
            Vec::new()
        }
    }
}

pub(super) fn key_down<K: RegionAlgebra>(
    tool: &mut MarqueeTool<K>,
    event: KeyEvent,
    host: &dyn HostQueries,
) -> Vec<Effect> {
    if event.passthrough {
        // host clipboard shortcut, not ours to handle
        return Vec::new();
    }

    let mut effects = Vec::new();

    // add/subtract arm only over a finished selection
    if tool.state.is_complete() {
        if host.is_command_pressed(Command::Add) {
            tool.arm(CombineOp::Add);
        }
        if host.is_command_pressed(Command::Subtract) {
            tool.arm(CombineOp::Subtract);
        }
    }

    if host.is_command_pressed(Command::Cancel) {
        effects.extend(tool.cancel());
    }

    if host.is_command_pressed(Command::Erase) && tool.state.is_complete() && !tool.region.is_empty()
    {
        let layers = host.visible_layer_indices();
        debug!("erase over {} layers", layers.len());
        effects.push(Effect::HistorySnapshot {
            layers: layers.clone(),
        });
        effects.push(Effect::Erase {
            layers: layers.clone(),
            region: tool.region.clone(),
        });
        effects.push(Effect::MarkDirty { layers });
        effects.extend(tool.deselect());
    }

    if host.is_command_pressed(Command::Fill) && tool.state.is_complete() && !tool.region.is_empty()
    {
        let layer = host.fill_layer_index();
        debug!("fill on layer {layer}");
        effects.push(Effect::HistorySnapshot {
            layers: vec![layer],
        });
        effects.push(Effect::Fill {
            layer,
            region: tool.region.clone(),
            style: host.fill_style(),
        });
        effects.push(Effect::MarkDirty {
            layers: vec![layer],
        });
        effects.extend(tool.deselect());
    }

    effects
}

pub(super) fn key_up<K: RegionAlgebra>(
    tool: &mut MarqueeTool<K>,
    _event: KeyEvent,
    host: &dyn HostQueries,
) -> Vec<Effect> {
    // releasing the add/subtract modifier keeps the selection but leaves
    // sub-path mode; an in-flight sub-path is abandoned
    if let ToolState::SubPathEditing { op, .. } = &tool.state {
        let released = match op {
            CombineOp::Add => !host.is_command_pressed(Command::Add),
            CombineOp::Subtract => !host.is_command_pressed(Command::Subtract),
        };
        if released {
            debug!("{op:?} modifier released, rearming");
            tool.state = ToolState::Armed;
            return vec![Effect::Cursor(CursorIcon::Crosshair)];
        }
        return Vec::new();
    }

    // releasing the line modifier with the pointer up is the final click
    match std::mem::take(&mut tool.state) {
        ToolState::Drawing {
            kind: DrawKind::Line,
            path,
            pointer_down: false,
            ..
        } if !host.is_command_pressed(Command::StraightLine) => {
            tool.region = builder::finalize_commit(&tool.kernel, &path, &tool.region, tool.bounds);
            let complete = !tool.region.is_empty();
            debug!("line path auto-committed on modifier release");
            tool.state = ToolState::Idle { complete };
            vec![Effect::Redraw]
        }
        other => {
            tool.state = other;
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FillStyle;
    use crate::domain::{Point, Rect, Region};
    use crate::kernel::GeoKernel;
    use crate::marquee::events::InputEvent;

    struct StubHost {
        pressed: Vec<Command>,
    }

    impl StubHost {
        fn new() -> Self {
            Self {
                pressed: Vec::new(),
            }
        }

        fn press(&mut self, command: Command) {
            if !self.pressed.contains(&command) {
                self.pressed.push(command);
            }
        }

        fn release(&mut self, command: Command) {
            self.pressed.retain(|c| *c != command);
        }
    }

    impl HostQueries for StubHost {
        fn is_command_pressed(&self, command: Command) -> bool {
            self.pressed.contains(&command)
        }

        fn localize_point(&self, event: &PointerEvent) -> Point {
            event.position
        }

        fn visible_layer_indices(&self) -> Vec<usize> {
            vec![0, 1]
        }

        fn fill_layer_index(&self) -> usize {
            2
        }

        fn fill_style(&self) -> FillStyle {
            FillStyle::default()
        }
    }

    fn tool() -> MarqueeTool<GeoKernel> {
        let mut tool = MarqueeTool::new(Rect::from_size(200.0, 200.0));
        tool.startup();
        tool
    }

    fn down(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerDown(PointerEvent::on_canvas(x, y))
    }

    fn moved(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerMove(PointerEvent::on_canvas(x, y))
    }

    fn up(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerUp(PointerEvent::on_canvas(x, y))
    }

    fn key_down() -> InputEvent {
        InputEvent::KeyDown(KeyEvent::default())
    }

    fn key_up() -> InputEvent {
        InputEvent::KeyUp(KeyEvent::default())
    }

    /// Draw and commit a freeform square with corners (10,10)-(100,100)
    fn commit_square(tool: &mut MarqueeTool<GeoKernel>, host: &StubHost) {
        tool.handle_event(down(10.0, 10.0), host);
        for (x, y) in [(10.0, 100.0), (100.0, 100.0), (100.0, 10.0)] {
            tool.handle_event(moved(x, y), host);
        }
        tool.handle_event(up(10.0, 10.0), host);
    }

    fn corners(region: &Region) -> Vec<Point> {
        let mut points = region.contours[0].points().to_vec();
        points.pop(); // closing point
        points
    }

    #[test]
    fn test_freeform_square_commit() {
        let mut tool = tool();
        let host = StubHost::new();
        commit_square(&mut tool, &host);

        assert_eq!(tool.state(), &ToolState::Idle { complete: true });
        let region = tool.region();
        assert_eq!(region.contours.len(), 1);
        assert!(region.contours[0].is_closed());

        let corners = corners(region);
        assert_eq!(corners.len(), 4);
        for expected in [
            Point::new(10.0, 10.0),
            Point::new(10.0, 100.0),
            Point::new(100.0, 100.0),
            Point::new(100.0, 10.0),
        ] {
            assert!(corners.contains(&expected), "missing corner {expected:?}");
        }
        assert!((region.area() - 8100.0).abs() < 1e-6);
    }

    #[test]
    fn test_line_mode_rectangle_commits_on_modifier_release() {
        let mut tool = tool();
        let mut host = StubHost::new();
        host.press(Command::StraightLine);

        for (x, y) in [(0.0, 0.0), (50.0, 0.0), (50.0, 50.0), (0.0, 50.0)] {
            tool.handle_event(down(x, y), &host);
            tool.handle_event(up(x, y), &host);
        }
        assert!(matches!(
            tool.state(),
            ToolState::Drawing {
                kind: DrawKind::Line,
                ..
            }
        ));

        host.release(Command::StraightLine);
        let effects = tool.handle_event(key_up(), &host);
        assert_eq!(effects, vec![Effect::Redraw]);

        assert_eq!(tool.state(), &ToolState::Idle { complete: true });
        let region = tool.region();
        assert_eq!(region.contours.len(), 1);
        assert!(region.contours[0].is_closed());
        assert_eq!(corners(region).len(), 4);
        assert!((region.area() - 2500.0).abs() < 1e-6);
    }

    #[test]
    fn test_line_mode_only_updates_draft_on_move() {
        let mut tool = tool();
        let mut host = StubHost::new();
        host.press(Command::StraightLine);

        tool.handle_event(down(10.0, 10.0), &host);
        tool.handle_event(up(10.0, 10.0), &host);
        tool.handle_event(moved(60.0, 40.0), &host);

        match tool.state() {
            ToolState::Drawing {
                kind: DrawKind::Line,
                path,
                draft,
                ..
            } => {
                assert_eq!(path.len(), 2); // down + up, no move samples
                assert_eq!(*draft, Some(Point::new(60.0, 40.0)));
            }
            other => panic!("unexpected state {other:?}"),
        }
        assert_eq!(tool.draft_point(), Some(Point::new(60.0, 40.0)));
    }

    #[test]
    fn test_line_falls_back_to_freeform_when_modifier_released_mid_drag() {
        let mut tool = tool();
        let mut host = StubHost::new();
        host.press(Command::StraightLine);
        tool.handle_event(down(10.0, 10.0), &host);

        host.release(Command::StraightLine);
        tool.handle_event(moved(20.0, 20.0), &host);

        match tool.state() {
            ToolState::Drawing {
                kind, path, draft, ..
            } => {
                assert_eq!(*kind, DrawKind::Freeform);
                assert_eq!(path.len(), 2);
                assert_eq!(*draft, None);
            }
            other => panic!("unexpected state {other:?}"),
        }
    }

    #[test]
    fn test_line_fallback_applies_while_dragging_a_later_segment() {
        let mut tool = tool();
        let mut host = StubHost::new();
        host.press(Command::StraightLine);
        tool.handle_event(down(10.0, 10.0), &host);
        tool.handle_event(up(10.0, 10.0), &host);
        tool.handle_event(down(50.0, 10.0), &host);

        host.release(Command::StraightLine);
        tool.handle_event(moved(50.0, 30.0), &host);
        match tool.state() {
            ToolState::Drawing { kind, .. } => assert_eq!(*kind, DrawKind::Freeform),
            other => panic!("unexpected state {other:?}"),
        }
    }

    #[test]
    fn test_freeform_moves_land_only_on_the_active_path() {
        let mut tool = tool();
        let host = StubHost::new();
        tool.handle_event(down(10.0, 10.0), &host);
        for i in 0..5 {
            tool.handle_event(moved(20.0 + i as f32, 20.0), &host);
        }
        match tool.state() {
            ToolState::Drawing { path, .. } => assert_eq!(path.len(), 6),
            other => panic!("unexpected state {other:?}"),
        }
        // no sub-path exists anywhere during a base draw
        assert!(!matches!(tool.state(), ToolState::SubPathEditing { .. }));
    }

    #[test]
    fn test_out_of_bounds_samples_are_clamped() {
        let mut tool = tool();
        let host = StubHost::new();
        tool.handle_event(down(10.0, 10.0), &host);
        tool.handle_event(moved(10.0, 300.0), &host);
        tool.handle_event(moved(300.0, 300.0), &host);
        tool.handle_event(moved(300.0, 10.0), &host);
        tool.handle_event(up(10.0, 10.0), &host);

        let region = tool.region();
        assert!(!region.is_empty());
        for contour in &region.contours {
            for point in contour.points() {
                assert!(tool.bounds().contains_point(*point), "{point:?} escaped");
            }
        }
        assert!((region.area() - 190.0 * 190.0).abs() < 1e-6);
    }

    #[test]
    fn test_subtract_sub_path_carves_a_hole() {
        let mut tool = tool();
        let mut host = StubHost::new();
        commit_square(&mut tool, &host);
        let base_area = tool.region().area();

        host.press(Command::Subtract);
        tool.handle_event(key_down(), &host);
        assert!(matches!(
            tool.state(),
            ToolState::SubPathEditing {
                op: CombineOp::Subtract,
                ..
            }
        ));

        tool.handle_event(down(40.0, 40.0), &host);
        for (x, y) in [(40.0, 70.0), (70.0, 70.0), (70.0, 40.0)] {
            tool.handle_event(moved(x, y), &host);
        }
        tool.handle_event(up(40.0, 40.0), &host);

        assert_eq!(tool.state(), &ToolState::Idle { complete: true });
        let region = tool.region();
        assert_eq!(region.contours.len(), 2);
        assert!((region.area() - (base_area - 900.0)).abs() < 1e-6);
    }

    #[test]
    fn test_add_sub_path_grows_the_region() {
        let mut tool = tool();
        let mut host = StubHost::new();
        commit_square(&mut tool, &host);
        let base_area = tool.region().area();

        host.press(Command::Add);
        tool.handle_event(key_down(), &host);
        tool.handle_event(down(100.0, 100.0), &host);
        for (x, y) in [(100.0, 150.0), (150.0, 150.0), (150.0, 100.0)] {
            tool.handle_event(moved(x, y), &host);
        }
        tool.handle_event(up(100.0, 100.0), &host);

        assert!(tool.region().area() > base_area);
    }

    #[test]
    fn test_arming_requires_a_complete_selection() {
        let mut tool = tool();
        let mut host = StubHost::new();
        host.press(Command::Subtract);
        tool.handle_event(key_down(), &host);
        assert_eq!(tool.state(), &ToolState::Idle { complete: false });
    }

    #[test]
    fn test_other_modifier_flips_the_operator_live() {
        let mut tool = tool();
        let mut host = StubHost::new();
        commit_square(&mut tool, &host);

        host.press(Command::Add);
        tool.handle_event(key_down(), &host);
        host.release(Command::Add);
        host.press(Command::Subtract);
        tool.handle_event(key_down(), &host);
        assert!(matches!(
            tool.state(),
            ToolState::SubPathEditing {
                op: CombineOp::Subtract,
                ..
            }
        ));
    }

    #[test]
    fn test_modifier_release_rearms_without_handoff() {
        let mut tool = tool();
        let mut host = StubHost::new();
        commit_square(&mut tool, &host);

        host.press(Command::Add);
        tool.handle_event(key_down(), &host);
        host.release(Command::Add);
        tool.handle_event(key_up(), &host);
        assert_eq!(tool.state(), &ToolState::Armed);

        // clicking inside the selection now starts a new path, not a handoff
        let effects = tool.handle_event(down(50.0, 50.0), &host);
        assert!(!effects.contains(&Effect::HandoffToOperate));
        assert!(matches!(tool.state(), ToolState::Drawing { .. }));
        assert!(tool.region().is_empty());
    }

    #[test]
    fn test_click_inside_selection_hands_off() {
        let mut tool = tool();
        let host = StubHost::new();
        commit_square(&mut tool, &host);

        let effects = tool.handle_event(down(50.0, 50.0), &host);
        assert_eq!(
            effects,
            vec![
                Effect::Status(ToolStatus::Idle),
                Effect::HandoffToOperate
            ]
        );
        assert_eq!(tool.state(), &ToolState::Handoff);
        // the committed region is preserved for the operate stage
        assert!(!tool.region().is_empty());
    }

    #[test]
    fn test_click_outside_selection_starts_a_new_path() {
        let mut tool = tool();
        let host = StubHost::new();
        commit_square(&mut tool, &host);

        tool.handle_event(down(150.0, 150.0), &host);
        assert!(matches!(tool.state(), ToolState::Drawing { .. }));
        assert!(tool.region().is_empty());
    }

    #[test]
    fn test_grab_cursor_over_a_finished_selection() {
        let mut tool = tool();
        let host = StubHost::new();
        commit_square(&mut tool, &host);

        let over = tool.handle_event(moved(50.0, 50.0), &host);
        assert_eq!(over, vec![Effect::Cursor(CursorIcon::Grab)]);
        let outside = tool.handle_event(moved(150.0, 150.0), &host);
        assert_eq!(outside, vec![Effect::Cursor(CursorIcon::Crosshair)]);
    }

    #[test]
    fn test_hit_testing_sees_the_live_sub_path() {
        let mut tool = tool();
        let mut host = StubHost::new();
        commit_square(&mut tool, &host);

        host.press(Command::Add);
        tool.handle_event(key_down(), &host);
        tool.handle_event(down(100.0, 100.0), &host);
        for (x, y) in [(100.0, 180.0), (180.0, 180.0), (180.0, 100.0)] {
            tool.handle_event(moved(x, y), &host);
        }
        // not yet committed, but the preview is already hit-testable
        assert!(tool.hit_test(Point::new(150.0, 150.0)));
    }

    #[test]
    fn test_deselect_clears_everything() {
        let mut tool = tool();
        let host = StubHost::new();
        commit_square(&mut tool, &host);

        let effects = tool.deselect();
        assert_eq!(
            effects,
            vec![Effect::Status(ToolStatus::Idle), Effect::Redraw]
        );
        assert!(tool.region().is_empty());
        assert_eq!(tool.state(), &ToolState::Idle { complete: false });
        assert_eq!(tool.draft_point(), None);
    }

    #[test]
    fn test_cancel_leaves_geometry_untouched() {
        let mut tool = tool();
        let mut host = StubHost::new();
        commit_square(&mut tool, &host);
        let region_before = tool.region().clone();

        host.press(Command::Cancel);
        let effects = tool.handle_event(key_down(), &host);
        assert_eq!(
            effects,
            vec![Effect::Status(ToolStatus::Idle), Effect::SwitchToDrawing]
        );
        assert_eq!(tool.region(), &region_before);
    }

    #[test]
    fn test_erase_delegates_and_deselects() {
        let mut tool = tool();
        let mut host = StubHost::new();
        commit_square(&mut tool, &host);
        let region = tool.region().clone();

        host.press(Command::Erase);
        let effects = tool.handle_event(key_down(), &host);
        assert_eq!(
            effects,
            vec![
                Effect::HistorySnapshot {
                    layers: vec![0, 1]
                },
                Effect::Erase {
                    layers: vec![0, 1],
                    region
                },
                Effect::MarkDirty {
                    layers: vec![0, 1]
                },
                Effect::Status(ToolStatus::Idle),
                Effect::Redraw,
            ]
        );
        assert!(tool.region().is_empty());
        assert_eq!(tool.state(), &ToolState::Idle { complete: false });
    }

    #[test]
    fn test_fill_targets_the_fill_layer() {
        let mut tool = tool();
        let mut host = StubHost::new();
        commit_square(&mut tool, &host);
        let region = tool.region().clone();

        host.press(Command::Fill);
        let effects = tool.handle_event(key_down(), &host);
        assert_eq!(
            effects,
            vec![
                Effect::HistorySnapshot { layers: vec![2] },
                Effect::Fill {
                    layer: 2,
                    region,
                    style: FillStyle::default()
                },
                Effect::MarkDirty { layers: vec![2] },
                Effect::Status(ToolStatus::Idle),
                Effect::Redraw,
            ]
        );
    }

    #[test]
    fn test_erase_without_selection_is_ignored() {
        let mut tool = tool();
        let mut host = StubHost::new();
        host.press(Command::Erase);
        assert!(tool.handle_event(key_down(), &host).is_empty());
    }

    #[test]
    fn test_clipboard_shortcuts_pass_through() {
        let mut tool = tool();
        let mut host = StubHost::new();
        commit_square(&mut tool, &host);
        host.press(Command::Erase);

        let event = InputEvent::KeyDown(KeyEvent { passthrough: true });
        assert!(tool.handle_event(event, &host).is_empty());
        assert!(!tool.region().is_empty());
    }

    #[test]
    fn test_toolbar_click_is_ignored() {
        let mut tool = tool();
        let host = StubHost::new();
        let event = InputEvent::PointerDown(PointerEvent::new(
            Point::new(5.0, 5.0),
            EventTarget::ToolbarButton,
        ));
        assert!(tool.handle_event(event, &host).is_empty());
        assert_eq!(tool.state(), &ToolState::Idle { complete: false });
    }

    #[test]
    fn test_click_off_canvas_cancels() {
        let mut tool = tool();
        let host = StubHost::new();
        let event = InputEvent::PointerDown(PointerEvent::new(
            Point::new(5.0, 5.0),
            EventTarget::Other,
        ));
        let effects = tool.handle_event(event, &host);
        assert_eq!(
            effects,
            vec![Effect::Status(ToolStatus::Idle), Effect::SwitchToDrawing]
        );
    }

    #[test]
    fn test_single_click_commit_is_a_degenerate_noop() {
        let mut tool = tool();
        let host = StubHost::new();
        tool.handle_event(down(30.0, 30.0), &host);
        tool.handle_event(up(30.0, 30.0), &host);
        assert!(tool.region().is_empty());
        assert_eq!(tool.state(), &ToolState::Idle { complete: false });
    }

    #[test]
    fn test_events_are_ignored_until_startup() {
        let mut tool = MarqueeTool::new(Rect::from_size(200.0, 200.0));
        let host = StubHost::new();
        assert!(tool.handle_event(down(10.0, 10.0), &host).is_empty());

        tool.startup();
        tool.handle_event(down(10.0, 10.0), &host);
        assert!(matches!(tool.state(), ToolState::Drawing { .. }));

        tool.shutdown();
        assert!(tool.handle_event(moved(20.0, 20.0), &host).is_empty());
        assert_eq!(tool.state(), &ToolState::Idle { complete: false });
    }

    #[test]
    fn test_window_blur_is_a_noop() {
        let mut tool = tool();
        let host = StubHost::new();
        commit_square(&mut tool, &host);
        assert!(tool.handle_event(InputEvent::WindowBlur, &host).is_empty());
        assert!(!tool.region().is_empty());
    }
}
