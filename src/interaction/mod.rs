//! Pointer-driven drag interaction.

use serde::{Deserialize, Serialize};

use crate::core::{ChartEntry, ChartPoint, EntryId};

/// Chart-space distance within which a pointer press grabs an entry.
///
/// The threshold is applied per axis (a square hit box), not as a radial
/// distance from the circle. This matches the editor's established feel and
/// is kept as-is even though the drawn marker is round.
pub const HIT_THRESHOLD: f64 = 10.0;

/// Drag gesture state: either idle or dragging one entry by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        entry_id: EntryId,
    },
}

/// Interaction state machine owned by the editor engine.
///
/// Transitions:
/// - `Idle` + pointer-down on an entry -> `Dragging(id)`
/// - `Dragging(id)` + pointer-move -> stays, reporting the drag target
/// - any state + pointer-up -> `Idle`
/// - `Idle` + pointer-move -> ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionState {
    drag: DragState,
}

impl InteractionState {
    #[must_use]
    pub fn drag(self) -> DragState {
        self.drag
    }

    #[must_use]
    pub fn is_dragging(self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// Entry currently being dragged, if any.
    #[must_use]
    pub fn drag_target(self) -> Option<EntryId> {
        match self.drag {
            DragState::Idle => None,
            DragState::Dragging { entry_id } => Some(entry_id),
        }
    }

    /// Starts a drag when the press hit an entry; stays idle otherwise.
    pub fn on_pointer_down(&mut self, hit: Option<EntryId>) -> Option<EntryId> {
        if let Some(entry_id) = hit {
            self.drag = DragState::Dragging { entry_id };
        }
        hit
    }

    /// Ends any drag unconditionally.
    ///
    /// Returns the entry that was being dragged, if any. Hosts must route
    /// pointer-up here even when release happens outside the surface so the
    /// gesture cannot get stuck.
    pub fn on_pointer_up(&mut self) -> Option<EntryId> {
        let target = self.drag_target();
        self.drag = DragState::Idle;
        target
    }
}

/// Finds the entry under a chart-space pointer position.
///
/// Entries are searched in reverse insertion order so the most recently
/// added (front-most drawn) entry wins when several overlap.
#[must_use]
pub fn hit_test(entries: &[ChartEntry], point: ChartPoint) -> Option<EntryId> {
    entries
        .iter()
        .rev()
        .find(|entry| {
            (entry.coords.x - point.x).abs() < HIT_THRESHOLD
                && (entry.coords.y - point.y).abs() < HIT_THRESHOLD
        })
        .map(|entry| entry.id)
}
