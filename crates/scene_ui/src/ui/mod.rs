//! UI System Module
//!
//! Widget layer on top of the scene graph.
//!
//! Architecture:
//! - UIManager: owns the widget tree, focus holder and event queue
//! - widgets/: widget payloads (UIElement state, UIRect, UIImage)
//! - focus: the single focus slot
//! - input/: pointer-driven dragging

pub mod focus;
pub mod input;
pub mod manager;
pub mod widgets;

#[cfg(test)]
mod tests;

pub use focus::FocusManager;
pub use manager::UIManager;

// Re-export widgets
pub use widgets::{NodeContent, UIElement, UIImage, UIRect, Widget, WidgetKind};

// Re-export input helpers
pub use input::drag_position;

// Re-export events
pub use crate::events::EventSystem;

use thiserror::Error;

use crate::render::RenderError;
use crate::scene::{NodeId, SceneError};

/// UI errors
#[derive(Error, Debug)]
pub enum UIError {
    /// Scene graph failure (stale handle, bad hierarchy)
    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),

    /// Backend failure while rendering
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Node exists but carries no widget state
    #[error("Node {0:?} is not a widget")]
    NotAWidget(NodeId),

    /// Node is a widget but not a rect
    #[error("Node {0:?} is not a rect")]
    NotARect(NodeId),

    /// Node does not hold a scene image
    #[error("Node {0:?} is not a scene image")]
    NotAnImage(NodeId),
}

/// Result type for UI operations
pub type UIResult<T> = Result<T, UIError>;
