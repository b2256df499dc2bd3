//! Selection-mode types for the marquee tool

/// How the base path is being drawn
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawKind {
    /// Every pointer-move sample becomes a path point
    Freeform,
    /// Points land on clicks; moves only steer the draft endpoint
    Line,
}

/// Boolean operator applied when a sub-path is committed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CombineOp {
    /// Union the sub-path into the region
    Add,
    /// Carve the sub-path out of the region
    Subtract,
}

/// Tool activity reported to the shared toolbar state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToolStatus {
    #[default]
    Idle,
    Busy,
}

/// Cursor requested from the host while the tool is active
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorIcon {
    #[default]
    Crosshair,
    /// Hovering a finished selection that a click would grab
    Grab,
}
