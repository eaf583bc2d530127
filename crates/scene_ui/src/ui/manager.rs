//! UI Manager
//!
//! Central UI system: owns the widget tree, the focus holder and the event
//! queue. Every widget operation goes through here so that focus hand-off,
//! drag movement and teardown see the whole tree.

use std::path::Path;

use crate::assets::{TextureHandle, TextureManager};
use crate::config::UIConfig;
use crate::events::{Event, EventSystem, EventType};
use crate::foundation::math::{Point3, Ray, Rect, Vec2};
use crate::render::RenderBackend;
use crate::scene::{Entity, MouseEventResult, NodeId, SceneGraph, SceneImage};
use crate::ui::focus::FocusManager;
use crate::ui::input::drag_position;
use crate::ui::widgets::{NodeContent, UIElement, UIImage, UIRect, Widget, WidgetKind};
use crate::ui::{UIError, UIResult};

/// Central UI management system
pub struct UIManager {
    graph: SceneGraph<NodeContent>,
    focus: FocusManager,
    event_system: EventSystem,
    config: UIConfig,
}

impl UIManager {
    /// Create an empty UI with default configuration
    pub fn new() -> Self {
        Self::with_config(UIConfig::default())
    }

    /// Create an empty UI
    pub fn with_config(config: UIConfig) -> Self {
        Self {
            graph: SceneGraph::new(),
            focus: FocusManager::new(),
            event_system: EventSystem::new(),
            config,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &UIConfig {
        &self.config
    }

    /// Read-only view of the scene graph
    pub fn graph(&self) -> &SceneGraph<NodeContent> {
        &self.graph
    }

    /// Entity of a node
    pub fn entity(&self, id: NodeId) -> UIResult<&Entity> {
        Ok(self.graph.entity(id)?)
    }

    /// Mutable entity of a node
    pub fn entity_mut(&mut self, id: NodeId) -> UIResult<&mut Entity> {
        Ok(self.graph.entity_mut(id)?)
    }

    /// Screen-space position of a node's origin
    pub fn screen_position(&self, id: NodeId) -> UIResult<Vec2> {
        Ok(self.graph.screen_position(id)?)
    }

    // ---- creation ----

    /// Add a plain (non-widget) entity
    pub fn create_entity(&mut self, entity: Entity) -> NodeId {
        self.graph.insert(entity, NodeContent::Entity)
    }

    /// Add a plain widget with no size
    pub fn create_element(&mut self) -> NodeId {
        self.create_element_sized(0.0, 0.0)
    }

    /// Add a plain widget
    pub fn create_element_sized(&mut self, width: f32, height: f32) -> NodeId {
        self.insert_widget(UIElement::entity(width, height), WidgetKind::Element)
    }

    /// Add an untextured rect
    pub fn create_rect(&mut self, width: f32, height: f32) -> NodeId {
        let mut entity = Entity::new();
        let rect = UIRect::new(&mut entity, width, height);
        self.insert_widget(entity, WidgetKind::Rect(rect))
    }

    /// Add a rect showing the texture at `path` (placeholder quad if it fails to load)
    pub fn create_rect_from_file<P: AsRef<Path>>(
        &mut self,
        textures: &mut TextureManager,
        path: P,
    ) -> NodeId {
        let mut entity = Entity::new();
        let rect = UIRect::from_file(&mut entity, textures, path, &self.config);
        self.insert_widget(entity, WidgetKind::Rect(rect))
    }

    /// Add an image widget wrapping a scene image loaded from `path`
    pub fn create_image<P: AsRef<Path>>(
        &mut self,
        textures: &mut TextureManager,
        path: P,
    ) -> UIResult<NodeId> {
        let image = SceneImage::from_file(textures, path, self.config.texture_params.clone());
        let (width, height) = image.bounding_box();
        let image_id = self.graph.insert(UIImage::image_entity(&image), NodeContent::Image(image));

        let id = self.insert_widget(
            UIElement::entity(width, height),
            WidgetKind::Image(UIImage::new(image_id)),
        );
        // Scene child only; images are not focus targets
        self.graph.add_child(id, image_id)?;
        Ok(id)
    }

    fn insert_widget(&mut self, entity: Entity, kind: WidgetKind) -> NodeId {
        let id = self.graph.insert(entity, NodeContent::Widget(Widget::new(kind)));
        log::debug!("Created widget {:?}", id);
        id
    }

    // ---- hierarchy ----

    /// Parent `child` under `parent`
    ///
    /// When both are widgets the child also joins the parent's focus chain.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> UIResult<()> {
        self.graph.add_child(parent, child)?;

        let both_widgets = self.graph.get(parent)?.payload.as_widget().is_some()
            && self.graph.get(child)?.payload.as_widget().is_some();
        if both_widgets {
            self.add_focus_child(parent, child)?;
        }
        Ok(())
    }

    /// Detach `child` from `parent`; focus chains are left as they are
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> UIResult<()> {
        Ok(self.graph.remove_child(parent, child)?)
    }

    /// Append `child` to `parent`'s focus chain
    ///
    /// There is no uniqueness check: adding the same child twice lists it twice.
    pub fn add_focus_child(&mut self, parent: NodeId, child: NodeId) -> UIResult<()> {
        self.element(child)?;
        self.element_mut(parent)?.push_focus_child(child);
        self.element_mut(child)?.set_focus_parent(Some(parent));
        Ok(())
    }

    /// Destroy a node and its owned subtree
    ///
    /// If a destroyed widget held focus the focus slot is cleared. Nodes that
    /// only referenced it (parents, focus chains) are not touched.
    pub fn destroy(&mut self, id: NodeId) -> UIResult<()> {
        let removed = self.graph.remove(id)?;
        for (node, _) in &removed {
            if self.focus.detach(*node) {
                log::debug!("Focused widget {:?} destroyed, focus cleared", node);
            }
        }
        log::debug!("Destroyed {:?} ({} nodes)", id, removed.len());
        Ok(())
    }

    // ---- widget access ----

    /// Widget payload of a node
    pub fn widget(&self, id: NodeId) -> UIResult<&Widget> {
        self.graph.get(id)?.payload.as_widget().ok_or(UIError::NotAWidget(id))
    }

    fn widget_mut(&mut self, id: NodeId) -> UIResult<&mut Widget> {
        self.graph
            .get_mut(id)?
            .payload
            .as_widget_mut()
            .ok_or(UIError::NotAWidget(id))
    }

    /// Widget state of a node
    pub fn element(&self, id: NodeId) -> UIResult<&UIElement> {
        self.widget(id).map(|w| &w.element)
    }

    /// Mutable widget state of a node
    pub fn element_mut(&mut self, id: NodeId) -> UIResult<&mut UIElement> {
        self.widget_mut(id).map(|w| &mut w.element)
    }

    /// Rect data of a node
    pub fn rect(&self, id: NodeId) -> UIResult<&UIRect> {
        self.widget(id)?.as_rect().ok_or(UIError::NotARect(id))
    }

    /// Scene image of a node (the child of a `UIImage`)
    pub fn scene_image(&self, id: NodeId) -> UIResult<&SceneImage> {
        match &self.graph.get(id)?.payload {
            NodeContent::Image(image) => Ok(image),
            _ => Err(UIError::NotAnImage(id)),
        }
    }

    /// Mark a widget as a focus traversal stop
    pub fn set_focusable(&mut self, id: NodeId, focusable: bool) -> UIResult<()> {
        self.element_mut(id)?.set_focusable(focusable);
        Ok(())
    }

    // ---- focus ----

    /// Currently focused widget
    pub fn focused(&self) -> Option<NodeId> {
        self.focus.focused()
    }

    /// Whether `id` holds focus
    pub fn has_focus(&self, id: NodeId) -> bool {
        self.focus.is_focused(id)
    }

    /// Give focus to `id` unconditionally (no focusable check)
    pub fn focus_self(&mut self, id: NodeId) -> UIResult<()> {
        self.element(id)?;
        self.hand_off_focus(Some(id));
        Ok(())
    }

    /// Give focus to `child`, or clear focus with `None`
    pub fn focus_child(&mut self, child: Option<NodeId>) -> UIResult<()> {
        if let Some(id) = child {
            self.element(id)?;
        }
        self.hand_off_focus(child);
        Ok(())
    }

    /// Move focus to the next focusable entry of `id`'s focus chain
    ///
    /// Starts from the focused widget's position in the chain (its last
    /// occurrence) and wraps once. Does nothing when the focused widget is not
    /// in this chain. Returns whether focus moved.
    pub fn focus_next_child(&mut self, id: NodeId) -> UIResult<bool> {
        let chain = self.element(id)?.focus_children().to_vec();
        let Some(focused) = self.focus.focused() else {
            return Ok(false);
        };
        let Some(start) = chain.iter().rposition(|c| *c == focused) else {
            return Ok(false);
        };

        let n = chain.len();
        for step in 0..n {
            let candidate = chain[(start + step) % n];
            if candidate != focused && self.is_focusable(candidate) {
                self.focus_child(Some(candidate))?;
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn is_focusable(&self, id: NodeId) -> bool {
        self.element(id).map(UIElement::is_focusable).unwrap_or(false)
    }

    /// Lose-then-gain protocol shared by every focus change
    fn hand_off_focus(&mut self, target: Option<NodeId>) {
        let timestamp = self.event_system.current_time();

        if let Some(previous) = self.focus.focused() {
            if let Ok(element) = self.widget_mut(previous).map(|w| &mut w.element) {
                element.set_has_focus(false);
                self.event_system
                    .send(Event::for_node(EventType::FocusLost, timestamp, previous));
            }
        }

        self.focus.set(target);

        if let Some(id) = target {
            if let Ok(element) = self.element_mut(id) {
                element.set_has_focus(true);
                self.event_system
                    .send(Event::for_node(EventType::FocusGained, timestamp, id));
            }
        }
        log::debug!("Focus -> {:?}", target);
    }

    // ---- dragging ----

    /// Start dragging `id`; offsets are the cursor position relative to its origin
    pub fn start_drag(&mut self, id: NodeId, x_offset: f32, y_offset: f32) -> UIResult<()> {
        self.element_mut(id)?.start_drag(x_offset, y_offset);
        Ok(())
    }

    /// Stop dragging `id`
    pub fn stop_drag(&mut self, id: NodeId) -> UIResult<()> {
        self.element_mut(id)?.stop_drag();
        Ok(())
    }

    /// Whether `id` is being dragged
    pub fn is_dragged(&self, id: NodeId) -> UIResult<bool> {
        Ok(self.element(id)?.is_dragged())
    }

    /// Clamp drag positions of `id` to `rect` (parent-local)
    pub fn set_drag_limits(&mut self, id: NodeId, rect: Rect) -> UIResult<()> {
        self.element_mut(id)?.set_drag_limits(rect);
        Ok(())
    }

    /// Remove the drag clamp of `id`
    pub fn clear_drag_limits(&mut self, id: NodeId) -> UIResult<()> {
        self.element_mut(id)?.clear_drag_limits();
        Ok(())
    }

    // ---- input ----

    /// Deliver a pointer move to `id` and its subtree
    ///
    /// A dragged widget follows the pointer first; the base scene handling
    /// (hover, mouse events) runs afterwards whether or not it was dragged.
    /// Children are visited topmost (last drawn) first; a blocking child stops
    /// delivery to its siblings.
    pub fn on_mouse_move(&mut self, id: NodeId, ray: &Ray, timestamp: f64) -> UIResult<MouseEventResult> {
        self.apply_drag(id, ray)?;
        let mut result = self.graph.on_mouse_move(id, ray, timestamp, &mut self.event_system)?;

        let children = self.graph.entity(id)?.children().to_vec();
        for child in children.into_iter().rev() {
            let child_result = self.on_mouse_move(child, ray, timestamp)?;
            result.hit |= child_result.hit;
            if child_result.blocked {
                result.blocked = true;
                break;
            }
        }
        Ok(result)
    }

    /// Deliver a pointer move to every root
    pub fn dispatch_mouse_move(&mut self, ray: &Ray, timestamp: f64) -> UIResult<MouseEventResult> {
        let mut result = MouseEventResult::default();
        for root in self.graph.roots().to_vec().into_iter().rev() {
            let root_result = self.on_mouse_move(root, ray, timestamp)?;
            result.hit |= root_result.hit;
            if root_result.blocked {
                result.blocked = true;
                break;
            }
        }
        Ok(result)
    }

    fn apply_drag(&mut self, id: NodeId, ray: &Ray) -> UIResult<()> {
        let dragged = matches!(
            self.graph.get(id)?.payload.as_widget(),
            Some(widget) if widget.element.is_dragged()
        );
        if !dragged {
            return Ok(());
        }

        let world = Point3::new(ray.origin.x, ray.origin.y, 0.0);
        let local = match self.graph.entity(id)?.parent() {
            Some(parent) => self.graph.world_to_local(parent, world)?,
            None => world,
        };

        let (x, y) = drag_position(self.element(id)?, &local);
        self.graph.entity_mut(id)?.set_position(x, y);
        log::trace!("Dragged {:?} to ({}, {})", id, x, y);
        Ok(())
    }

    // ---- geometry ----

    /// Resize a widget
    ///
    /// Rects rebuild their quad (vertex positions only); other widgets update
    /// their size and mark the transform dirty.
    pub fn resize(&mut self, id: NodeId, width: f32, height: f32) -> UIResult<()> {
        let node = self.graph.get_mut(id)?;
        match &mut node.payload {
            NodeContent::Widget(Widget { kind: WidgetKind::Rect(rect), .. }) => {
                rect.resize(&mut node.entity, width, height);
            }
            NodeContent::Widget(_) => {
                node.entity.set_width(width);
                node.entity.set_height(height);
                node.entity.dirty_matrix(true);
            }
            _ => return Err(UIError::NotAWidget(id)),
        }
        Ok(())
    }

    /// Show a pixel sub-rectangle of a rect's image
    pub fn set_image_coordinates(
        &mut self,
        id: NodeId,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) -> UIResult<()> {
        let node = self.graph.get_mut(id)?;
        match &mut node.payload {
            NodeContent::Widget(Widget { kind: WidgetKind::Rect(rect), .. }) => {
                rect.set_image_coordinates(&mut node.entity, x, y, width, height);
                Ok(())
            }
            _ => Err(UIError::NotARect(id)),
        }
    }

    /// Bind a shared texture to a rect
    pub fn set_texture(&mut self, id: NodeId, texture: Option<TextureHandle>) -> UIResult<()> {
        match &mut self.widget_mut(id)?.kind {
            WidgetKind::Rect(rect) => {
                rect.set_texture(texture);
                Ok(())
            }
            _ => Err(UIError::NotARect(id)),
        }
    }

    // ---- frame ----

    /// Draw every visible rect and image, parents before children
    ///
    /// Each quad is drawn with its node's concatenated matrix times the anchor
    /// offset, so the drawn area matches the node's hit bounds.
    pub fn render(&mut self, backend: &mut dyn RenderBackend) -> UIResult<()> {
        let order = self.graph.depth_first();

        for id in &order {
            let entity = self.graph.entity_mut(*id)?;
            if entity.is_matrix_dirty() {
                entity.rebuild_transform_matrix();
            }
        }

        for id in order {
            if !self.graph.is_visible(id) {
                continue;
            }
            let matrix = self.graph.concatenated_matrix(id)? * self.graph.entity(id)?.anchor_matrix();
            match &mut self.graph.get_mut(id)?.payload {
                NodeContent::Widget(Widget { kind: WidgetKind::Rect(rect), .. }) => {
                    backend.set_model_matrix(&matrix)?;
                    rect.render(backend)?;
                }
                NodeContent::Image(image) => {
                    backend.set_model_matrix(&matrix)?;
                    image.render(backend)?;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Event queue (focus and mouse notifications)
    pub fn event_system(&self) -> &EventSystem {
        &self.event_system
    }

    /// Mutable event queue, for registering handlers
    pub fn event_system_mut(&mut self) -> &mut EventSystem {
        &mut self.event_system
    }

    /// Dispatch all pending events
    pub fn dispatch_events(&mut self) {
        self.event_system.dispatch();
    }
}

impl Default for UIManager {
    fn default() -> Self {
        Self::new()
    }
}
