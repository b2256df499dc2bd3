//! Tagged tool state for the marquee state machine
//!
//! One variant per phase of the gesture, so the cross-field invariants of
//! the tool (exactly one path receiving points, draft only in line mode)
//! hold by construction.

use super::builder::ActivePath;
use crate::domain::{CombineOp, DrawKind, Point};

/// The marquee tool's gesture state
#[derive(Clone, Debug, PartialEq)]
pub enum ToolState {
    /// No gesture in progress. With `complete` set, a committed region
    /// exists and clicking inside it hands off to the operate stage.
    Idle { complete: bool },
    /// The add/subtract modifier was released over a finished selection:
    /// the region stays, but the next pointer-down starts a fresh base
    /// path even inside the selection.
    Armed,
    /// Base path under construction
    Drawing {
        kind: DrawKind,
        path: ActivePath,
        /// Uncommitted straight-line endpoint, drawn but never stored
        draft: Option<Point>,
        pointer_down: bool,
    },
    /// Sub-path arming or drawing over a finished selection. `sub` is
    /// `None` until the pointer goes down.
    SubPathEditing {
        op: CombineOp,
        sub: Option<ActivePath>,
        pointer_down: bool,
    },
    /// Control handed to the downstream operate-on-selection mode
    Handoff,
}

impl Default for ToolState {
    fn default() -> Self {
        Self::Idle { complete: false }
    }
}

impl ToolState {
    /// Whether a committed selection exists and is editable
    pub fn is_complete(&self) -> bool {
        matches!(
            self,
            Self::Idle { complete: true } | Self::Armed | Self::SubPathEditing { .. }
        )
    }

    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle { .. } => "idle",
            Self::Armed => "armed",
            Self::Drawing {
                kind: DrawKind::Freeform,
                ..
            } => "freeform",
            Self::Drawing {
                kind: DrawKind::Line,
                ..
            } => "line",
            Self::SubPathEditing {
                op: CombineOp::Add, ..
            } => "add",
            Self::SubPathEditing {
                op: CombineOp::Subtract,
                ..
            } => "subtract",
            Self::Handoff => "handoff",
        }
    }
}
