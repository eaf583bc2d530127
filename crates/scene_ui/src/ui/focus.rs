//! Focus ownership
//!
//! One `FocusManager` per widget tree holds the single focused widget. The
//! handle is generational, so it acts as a weak reference; the tree calls
//! `detach` when it destroys a node so a dead widget is never reported as
//! focused.

use crate::scene::NodeId;

/// Holder of the focused widget
#[derive(Debug, Default)]
pub struct FocusManager {
    focused: Option<NodeId>,
}

impl FocusManager {
    /// Nothing focused
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently focused widget
    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    /// Whether `id` holds focus
    pub fn is_focused(&self, id: NodeId) -> bool {
        self.focused == Some(id)
    }

    /// Replace the focused widget, returning the previous one
    pub(crate) fn set(&mut self, focused: Option<NodeId>) -> Option<NodeId> {
        std::mem::replace(&mut self.focused, focused)
    }

    /// Forget `id` if it holds focus; returns whether it did
    ///
    /// No successor is chosen.
    pub fn detach(&mut self, id: NodeId) -> bool {
        if self.focused == Some(id) {
            self.focused = None;
            true
        } else {
            false
        }
    }
}
