//! UI widgets module
//!
//! Node payloads for the widget tree. `NodeContent` is the capability tag:
//! only `NodeContent::Widget` nodes take part in focus chains and dragging.

pub mod core;
pub mod image;
pub mod rect;

pub use self::core::UIElement;
pub use self::image::UIImage;
pub use self::rect::UIRect;

use crate::scene::SceneImage;

/// What kind of widget a node is
#[derive(Debug, Clone)]
pub enum WidgetKind {
    /// Plain widget (container, editor, ...)
    Element,
    /// Textured quad
    Rect(UIRect),
    /// Image wrapper
    Image(UIImage),
}

/// Widget payload: shared widget state plus the kind-specific part
#[derive(Debug, Clone)]
pub struct Widget {
    /// Focus and drag state
    pub element: UIElement,
    /// Kind-specific data
    pub kind: WidgetKind,
}

impl Widget {
    /// Wrap a widget kind with fresh element state
    pub fn new(kind: WidgetKind) -> Self {
        Self {
            element: UIElement::new(),
            kind,
        }
    }

    /// Rect data, if this is a rect
    pub fn as_rect(&self) -> Option<&UIRect> {
        match &self.kind {
            WidgetKind::Rect(rect) => Some(rect),
            _ => None,
        }
    }

    /// Image data, if this is an image widget
    pub fn as_image(&self) -> Option<&UIImage> {
        match &self.kind {
            WidgetKind::Image(image) => Some(image),
            _ => None,
        }
    }
}

/// Payload of a node in the widget tree
#[derive(Debug, Clone)]
pub enum NodeContent {
    /// Plain scene entity, no widget behavior
    Entity,
    /// Scene image (e.g. the child of a `UIImage`)
    Image(SceneImage),
    /// A widget
    Widget(Widget),
}

impl NodeContent {
    /// Widget view, if the node is UI-capable
    pub fn as_widget(&self) -> Option<&Widget> {
        match self {
            Self::Widget(widget) => Some(widget),
            _ => None,
        }
    }

    /// Mutable widget view, if the node is UI-capable
    pub fn as_widget_mut(&mut self) -> Option<&mut Widget> {
        match self {
            Self::Widget(widget) => Some(widget),
            _ => None,
        }
    }
}
