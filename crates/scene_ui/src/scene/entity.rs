//! Scene entity: transform, size, anchor and input flags of one node
//!
//! Positions are screen-space (y grows downward). The transform matrix maps
//! into y-up world space, so the y translation is negated there.

use crate::foundation::math::{Mat4, Rect, Transform, Vec3};
use crate::scene::NodeId;

/// Per-node spatial and input state
#[derive(Debug, Clone)]
pub struct Entity {
    transform: Transform,
    width: f32,
    height: f32,
    anchor: Vec3,

    /// Whether this node (and its subtree) is drawn
    pub visible: bool,
    /// Whether pointer events are processed for this node
    pub process_input_events: bool,
    /// Stop pointer events from reaching nodes underneath when hit
    pub block_mouse_input: bool,
    /// Depth testing when drawn
    pub depth_test: bool,
    /// Depth writes when drawn
    pub depth_write: bool,
    /// Clip children to `scissor_box`
    pub enable_scissor: bool,
    /// Clip rectangle in screen space
    pub scissor_box: Rect,

    mouse_over: bool,
    local_matrix: Mat4,
    matrix_dirty: bool,

    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl Default for Entity {
    fn default() -> Self {
        Self {
            transform: Transform::identity(),
            width: 0.0,
            height: 0.0,
            anchor: Vec3::zeros(),
            visible: true,
            process_input_events: false,
            block_mouse_input: false,
            depth_test: true,
            depth_write: true,
            enable_scissor: false,
            scissor_box: Rect::default(),
            mouse_over: false,
            local_matrix: Mat4::identity(),
            matrix_dirty: true,
            parent: None,
            children: Vec::new(),
        }
    }
}

impl Entity {
    /// Create an entity at the origin with no size
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an entity with a size
    pub fn with_size(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Screen-space position
    pub fn position(&self) -> Vec3 {
        self.transform.position
    }

    /// Move in the xy plane, keeping z
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.transform.position.x = x;
        self.transform.position.y = y;
        self.matrix_dirty = true;
    }

    /// Logical width
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Logical height
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Set logical width
    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    /// Set logical height
    pub fn set_height(&mut self, height: f32) {
        self.height = height;
    }

    /// Anchor point; (-1, -1) is top-left, (0, 0) the center
    pub fn anchor_point(&self) -> Vec3 {
        self.anchor
    }

    /// Set the anchor point
    pub fn set_anchor_point(&mut self, x: f32, y: f32, z: f32) {
        self.anchor = Vec3::new(x, y, z);
        self.matrix_dirty = true;
    }

    /// Bounds in the entity's own (screen-oriented) space, after the anchor offset
    pub fn local_bounds(&self) -> Rect {
        Rect::new(
            -self.width * 0.5 * (1.0 + self.anchor.x),
            -self.height * 0.5 * (1.0 + self.anchor.y),
            self.width,
            self.height,
        )
    }

    /// Whether the pointer was over this entity on the last move
    pub fn is_mouse_over(&self) -> bool {
        self.mouse_over
    }

    pub(crate) fn set_mouse_over(&mut self, over: bool) {
        self.mouse_over = over;
    }

    /// Parent node, if attached
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Owned children in draw order
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Whether the cached matrix is stale
    pub fn is_matrix_dirty(&self) -> bool {
        self.matrix_dirty
    }

    /// Flag the cached matrix as stale (or fresh)
    pub fn dirty_matrix(&mut self, dirty: bool) {
        self.matrix_dirty = dirty;
    }

    /// Recompute the cached local matrix
    pub fn rebuild_transform_matrix(&mut self) {
        self.local_matrix = self.compute_matrix();
        self.matrix_dirty = false;
    }

    /// Local transform matrix (cached when clean)
    pub fn transform_matrix(&self) -> Mat4 {
        if self.matrix_dirty {
            self.compute_matrix()
        } else {
            self.local_matrix
        }
    }

    /// Offset from the node origin to the centre of its quad
    ///
    /// Quads are built centred; the anchor moves them so the anchored corner
    /// sits on the origin. Pre-multiply geometry by this before the node matrix.
    pub fn anchor_matrix(&self) -> Mat4 {
        Mat4::new_translation(&Vec3::new(
            -self.anchor.x * self.width * 0.5,
            self.anchor.y * self.height * 0.5,
            0.0,
        ))
    }

    fn compute_matrix(&self) -> Mat4 {
        let mut world = self.transform.clone();
        world.position.y = -world.position.y;
        world.to_matrix()
    }
}
