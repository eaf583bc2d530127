//! # Scene UI
//!
//! Widget layer for a retained 2D scene graph.
//!
//! ## Features
//!
//! - **Focus chains**: one focus holder per tree, keyboard-style traversal
//! - **Dragging**: pointer-driven moves in parent space with optional limits
//! - **Textured quads**: rects showing whole textures or sprite-sheet cells
//! - **Backend-agnostic rendering**: widgets submit meshes through a trait
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use scene_ui::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut ui = UIManager::new();
//!     let mut textures = TextureManager::new();
//!
//!     let window = ui.create_element_sized(640.0, 480.0);
//!     let sprite = ui.create_rect_from_file(&mut textures, "assets/sprite.png");
//!     ui.add_child(window, sprite)?;
//!     ui.focus_self(sprite)?;
//!
//!     let mut frame = CommandBuffer::new();
//!     ui.render(&mut frame)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod assets;
pub mod config;
pub mod events;
pub mod foundation;
pub mod render;
pub mod scene;
pub mod ui;

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        assets::{TextureHandle, TextureManager, TextureParams},
        config::{Config, UIConfig},
        events::{Event, EventSystem, EventType},
        foundation::math::{Ray, Rect, Vec2, Vec3, Mat4},
        render::{CommandBuffer, RenderBackend, RenderCommand},
        scene::{Entity, NodeId, SceneImage},
        ui::{UIElement, UIError, UIImage, UIManager, UIRect, UIResult},
    };
}
