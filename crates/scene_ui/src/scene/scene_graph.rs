//! Arena scene graph
//!
//! Nodes live in a generational slot map and refer to each other by `NodeId`.
//! A parent owns its children (removing it removes the subtree); the parent
//! link is a plain handle. Stale handles resolve to `NodeNotFound` instead of
//! dangling.

use slotmap::SlotMap;

use crate::events::{Event, EventArg, EventSystem, EventType};
use crate::foundation::math::{Mat4, Point3, Ray, Vec2};
use crate::scene::{Entity, NodeId, SceneError, SceneResult};

/// A node: spatial entity plus caller-defined payload
#[derive(Debug, Clone)]
pub struct SceneNode<P> {
    /// Transform, size and input state
    pub entity: Entity,
    /// What the node is (widget, image, ...)
    pub payload: P,
}

/// Result of delivering a pointer move to a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MouseEventResult {
    /// Pointer is inside the node's bounds
    pub hit: bool,
    /// Node swallowed the event
    pub blocked: bool,
}

/// Scene graph over an arena of nodes
#[derive(Debug)]
pub struct SceneGraph<P> {
    nodes: SlotMap<NodeId, SceneNode<P>>,
    roots: Vec<NodeId>,
}

impl<P> SceneGraph<P> {
    /// Create an empty graph
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            roots: Vec::new(),
        }
    }

    /// Insert a detached node (a new root)
    pub fn insert(&mut self, entity: Entity, payload: P) -> NodeId {
        let id = self.nodes.insert(SceneNode { entity, payload });
        self.roots.push(id);
        id
    }

    /// Whether the handle refers to a live node
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Number of live nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Top-level nodes in insertion order
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Get a node
    pub fn get(&self, id: NodeId) -> SceneResult<&SceneNode<P>> {
        self.nodes.get(id).ok_or(SceneError::NodeNotFound(id))
    }

    /// Get a node mutably
    pub fn get_mut(&mut self, id: NodeId) -> SceneResult<&mut SceneNode<P>> {
        self.nodes.get_mut(id).ok_or(SceneError::NodeNotFound(id))
    }

    /// Get a node's entity
    pub fn entity(&self, id: NodeId) -> SceneResult<&Entity> {
        self.get(id).map(|n| &n.entity)
    }

    /// Get a node's entity mutably
    pub fn entity_mut(&mut self, id: NodeId) -> SceneResult<&mut Entity> {
        self.get_mut(id).map(|n| &mut n.entity)
    }

    /// Whether `ancestor` is `id` or one of its parents
    pub fn is_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if node == ancestor {
                return true;
            }
            current = self.nodes.get(node).and_then(|n| n.entity.parent);
        }
        false
    }

    /// Attach `child` under `parent`, detaching it from wherever it was
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> SceneResult<()> {
        self.get(parent)?;
        self.get(child)?;
        if self.is_ancestor(child, parent) {
            return Err(SceneError::InvalidHierarchy { parent, child });
        }

        self.detach(child);
        self.nodes[child].entity.parent = Some(parent);
        self.nodes[parent].entity.children.push(child);
        Ok(())
    }

    /// Detach `child` from `parent`; it becomes a root
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> SceneResult<()> {
        if self.entity(child)?.parent != Some(parent) {
            return Err(SceneError::NotAChild { parent, child });
        }
        self.detach(child);
        self.roots.push(child);
        Ok(())
    }

    fn detach(&mut self, id: NodeId) {
        match self.nodes[id].entity.parent.take() {
            Some(parent) => {
                if let Some(p) = self.nodes.get_mut(parent) {
                    p.entity.children.retain(|c| *c != id);
                }
            }
            None => self.roots.retain(|r| *r != id),
        }
    }

    /// Remove a node and its owned subtree
    ///
    /// Returns the removed nodes, the requested node first, so callers can
    /// release anything that referred to them.
    pub fn remove(&mut self, id: NodeId) -> SceneResult<Vec<(NodeId, SceneNode<P>)>> {
        self.get(id)?;
        self.detach(id);

        let mut removed = Vec::new();
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            if let Some(node) = self.nodes.remove(next) {
                stack.extend(node.entity.children.iter().rev().copied());
                removed.push((next, node));
            }
        }
        Ok(removed)
    }

    /// Node ids in depth-first draw order (parents before children)
    pub fn depth_first(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<NodeId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            if let Some(node) = self.nodes.get(id) {
                order.push(id);
                stack.extend(node.entity.children.iter().rev().copied());
            }
        }
        order
    }

    /// Whether the node and all of its parents are visible
    pub fn is_visible(&self, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            match self.nodes.get(node) {
                Some(n) if n.entity.visible => current = n.entity.parent,
                _ => return false,
            }
        }
        true
    }

    /// Accumulated matrix from the root down to this node
    pub fn concatenated_matrix(&self, id: NodeId) -> SceneResult<Mat4> {
        let mut matrix = self.entity(id)?.transform_matrix();
        let mut current = self.nodes[id].entity.parent;
        while let Some(parent) = current {
            let entity = self.entity(parent)?;
            matrix = entity.transform_matrix() * matrix;
            current = entity.parent;
        }
        Ok(matrix)
    }

    /// Screen-space position of the node's origin
    pub fn screen_position(&self, id: NodeId) -> SceneResult<Vec2> {
        let m = self.concatenated_matrix(id)?;
        Ok(Vec2::new(m[(0, 3)], -m[(1, 3)]))
    }

    /// Map a world-space point into the node's own space
    ///
    /// Falls back to the world point when the node's matrix is singular.
    pub fn world_to_local(&self, id: NodeId, world: Point3) -> SceneResult<Point3> {
        let matrix = self.concatenated_matrix(id)?;
        match matrix.try_inverse() {
            Some(inverse) => Ok(inverse.transform_point(&world)),
            None => {
                log::warn!("Singular transform on {:?}, using world coordinates", id);
                Ok(world)
            }
        }
    }

    /// Base pointer-move handling for one node
    ///
    /// Hit-tests the ray origin against the node's anchored bounds, tracks the
    /// hover flag and queues `MouseOver` / `MouseOut` / `MouseMoved` events.
    pub fn on_mouse_move(
        &mut self,
        id: NodeId,
        ray: &Ray,
        timestamp: f64,
        events: &mut EventSystem,
    ) -> SceneResult<MouseEventResult> {
        let entity = self.entity(id)?;
        if !entity.process_input_events || !self.is_visible(id) {
            return Ok(MouseEventResult::default());
        }

        let local = self.world_to_local(id, Point3::from(ray.origin))?;
        // Entity space is screen-oriented
        let (lx, ly) = (local.x, -local.y);

        let entity = &mut self.nodes[id].entity;
        let hit = entity.local_bounds().contains(lx, ly);
        let was_over = entity.is_mouse_over();
        entity.set_mouse_over(hit);

        if hit && !was_over {
            events.send(Event::for_node(EventType::MouseOver, timestamp, id));
        } else if !hit && was_over {
            events.send(Event::for_node(EventType::MouseOut, timestamp, id));
        }
        if hit {
            events.send(
                Event::for_node(EventType::MouseMoved, timestamp, id)
                    .with_arg("position", EventArg::Position(lx, ly)),
            );
        }

        Ok(MouseEventResult {
            hit,
            blocked: hit && entity.block_mouse_input,
        })
    }
}

impl<P> Default for SceneGraph<P> {
    fn default() -> Self {
        Self::new()
    }
}
