//! Core UI widget state
//!
//! Focus and drag bookkeeping shared by every widget. Spatial state (position,
//! size, anchor) lives on the scene `Entity`; this struct only holds what makes
//! a node a widget.

use crate::foundation::math::{Rect, Vec2};
use crate::scene::{Entity, NodeId};

/// Base widget state
#[derive(Debug, Clone)]
pub struct UIElement {
    has_focus: bool,
    focusable: bool,
    dragged: bool,
    drag_offset: Vec2,
    drag_limits: Option<Rect>,

    /// Focus chain, in traversal order; entries are not owned and may repeat
    focus_children: Vec<NodeId>,
    focus_parent: Option<NodeId>,
}

impl Default for UIElement {
    fn default() -> Self {
        Self {
            has_focus: false,
            focusable: false,
            dragged: false,
            drag_offset: Vec2::zeros(),
            drag_limits: None,
            focus_children: Vec::new(),
            focus_parent: None,
        }
    }
}

impl UIElement {
    /// Create widget state: not focusable, unfocused, not dragged
    pub fn new() -> Self {
        Self::default()
    }

    /// Entity defaults for widgets: top-left anchor, input on, no depth test/write
    pub fn configure_entity(entity: &mut Entity) {
        entity.set_anchor_point(-1.0, -1.0, 0.0);
        entity.process_input_events = true;
        entity.depth_test = false;
        entity.depth_write = false;
    }

    /// Widget entity with a size
    pub fn entity(width: f32, height: f32) -> Entity {
        let mut entity = Entity::with_size(width, height);
        Self::configure_entity(&mut entity);
        entity
    }

    /// Whether this widget currently holds focus
    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    pub(crate) fn set_has_focus(&mut self, focus: bool) {
        self.has_focus = focus;
    }

    /// Whether focus traversal may stop on this widget
    pub fn is_focusable(&self) -> bool {
        self.focusable
    }

    /// Allow or forbid focus traversal stopping here
    pub fn set_focusable(&mut self, focusable: bool) {
        self.focusable = focusable;
    }

    /// Whether a drag is in progress
    pub fn is_dragged(&self) -> bool {
        self.dragged
    }

    /// Begin dragging; the offset is the cursor position relative to the origin
    pub fn start_drag(&mut self, x_offset: f32, y_offset: f32) {
        self.dragged = true;
        self.drag_offset = Vec2::new(x_offset, y_offset);
    }

    /// End dragging
    pub fn stop_drag(&mut self) {
        self.dragged = false;
    }

    /// Cursor offset recorded at drag start
    pub fn drag_offset(&self) -> Vec2 {
        self.drag_offset
    }

    /// Clamp dragged positions to `rect` (parent-local)
    pub fn set_drag_limits(&mut self, rect: Rect) {
        self.drag_limits = Some(rect);
    }

    /// Remove the drag clamp
    pub fn clear_drag_limits(&mut self) {
        self.drag_limits = None;
    }

    /// Active drag clamp
    pub fn drag_limits(&self) -> Option<Rect> {
        self.drag_limits
    }

    /// Focus chain entries
    pub fn focus_children(&self) -> &[NodeId] {
        &self.focus_children
    }

    /// Widget whose focus chain this one was added to
    pub fn focus_parent(&self) -> Option<NodeId> {
        self.focus_parent
    }

    pub(crate) fn push_focus_child(&mut self, child: NodeId) {
        self.focus_children.push(child);
    }

    pub(crate) fn set_focus_parent(&mut self, parent: Option<NodeId>) {
        self.focus_parent = parent;
    }
}
