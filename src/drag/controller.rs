//! Pointer-drag state machine.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Dragging   begin(): item exists, no session active
//! Dragging -> Dragging   update(): same pointer source
//! Dragging -> Idle   end()/release(): emits DragCommit
//! Dragging -> Idle   cancel(): no commit
//! ```
//!
//! The controller never decides whether an item may be dragged; callers
//! check that (e.g. the deck refuses drags in stack layout) before calling
//! `begin`.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use tracing::trace;

use crate::core::Position;

/// Input device that started a gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerSource {
    Mouse,
    Touch,
}

/// Anything that can report where a draggable item currently sits.
pub trait DragTarget<Id> {
    fn position_of(&self, item: &Id) -> Option<Position>;
}

/// An in-progress drag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DragSession<Id> {
    pub item: Id,
    /// Pointer minus item top-left at grab time.
    pub grab_offset: Position,
    /// Where the item's top-left is right now.
    pub live: Position,
    pub source: PointerSource,
}

/// Final position of a finished drag, for the owning state to apply.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DragCommit<Id> {
    pub item: Id,
    pub position: Position,
}

#[derive(Clone, Debug, PartialEq)]
enum DragState<Id> {
    Idle,
    Dragging(DragSession<Id>),
}

/// Tracks at most one drag session at a time.
#[derive(Clone, Debug)]
pub struct DragController<Id> {
    state: DragState<Id>,
}

impl<Id> Default for DragController<Id> {
    fn default() -> Self {
        Self {
            state: DragState::Idle,
        }
    }
}

impl<Id: Clone + PartialEq + Debug> DragController<Id> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    #[must_use]
    pub fn session(&self) -> Option<&DragSession<Id>> {
        match &self.state {
            DragState::Idle => None,
            DragState::Dragging(session) => Some(session),
        }
    }

    #[must_use]
    pub fn dragged_item(&self) -> Option<&Id> {
        self.session().map(|s| &s.item)
    }

    /// Start dragging `item`, grabbed at `pointer`.
    ///
    /// Returns `false` and changes nothing if the item is unknown to
    /// `target` or another session is already running.
    pub fn begin(
        &mut self,
        target: &impl DragTarget<Id>,
        item: Id,
        pointer: Position,
        source: PointerSource,
    ) -> bool {
        if self.is_dragging() {
            return false;
        }
        let Some(origin) = target.position_of(&item) else {
            return false;
        };

        trace!(?item, ?source, "drag begin");
        self.state = DragState::Dragging(DragSession {
            item,
            grab_offset: pointer - origin,
            live: origin,
            source,
        });
        true
    }

    /// Follow the pointer. Moves from a different source are ignored.
    ///
    /// Returns the item's new top-left when the session moved.
    pub fn update(&mut self, pointer: Position, source: PointerSource) -> Option<Position> {
        let DragState::Dragging(session) = &mut self.state else {
            return None;
        };
        if session.source != source {
            return None;
        }
        session.live = pointer - session.grab_offset;
        Some(session.live)
    }

    /// Finish the session regardless of source.
    ///
    /// Calling this with no active session is a no-op returning `None`.
    pub fn end(&mut self) -> Option<DragCommit<Id>> {
        match std::mem::replace(&mut self.state, DragState::Idle) {
            DragState::Idle => None,
            DragState::Dragging(session) => {
                trace!(item = ?session.item, position = ?session.live, "drag commit");
                Some(DragCommit {
                    item: session.item,
                    position: session.live,
                })
            }
        }
    }

    /// Finish the session only if `source` started it.
    pub fn release(&mut self, source: PointerSource) -> Option<DragCommit<Id>> {
        let owned = matches!(&self.state, DragState::Dragging(s) if s.source == source);
        if owned {
            self.end()
        } else {
            None
        }
    }

    /// Drop the session without committing.
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }

    /// Position to render for `item` while it is being dragged.
    #[must_use]
    pub fn live_position(&self, item: &Id) -> Option<Position> {
        self.session()
            .filter(|s| &s.item == item)
            .map(|s| s.live)
    }
}
