//! Scene graph
//!
//! Entities arranged in a parent/child tree stored in an arena. The graph
//! provides the pieces widgets build on:
//!
//! - accumulated (concatenated) transforms and their inverses
//! - owned child lists with subtree removal
//! - base pointer-move handling (hit test, hover state, mouse events)

mod entity;
mod scene_graph;
mod scene_image;

pub use entity::Entity;
pub use scene_graph::{MouseEventResult, SceneGraph, SceneNode};
pub use scene_image::SceneImage;

use thiserror::Error;

slotmap::new_key_type! {
    /// Generational handle to a scene node
    ///
    /// Copyable and non-owning; a handle to a removed node never aliases a new one.
    pub struct NodeId;
}

/// Scene graph errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// Handle does not refer to a live node
    #[error("Scene node not found: {0:?}")]
    NodeNotFound(NodeId),

    /// Parenting would create a cycle
    #[error("Cannot attach {child:?} under {parent:?}: would create a cycle")]
    InvalidHierarchy {
        /// Requested parent
        parent: NodeId,
        /// Requested child
        child: NodeId,
    },

    /// Node is not a child of the given parent
    #[error("{child:?} is not a child of {parent:?}")]
    NotAChild {
        /// Requested parent
        parent: NodeId,
        /// Requested child
        child: NodeId,
    },
}

/// Result type for scene graph operations
pub type SceneResult<T> = Result<T, SceneError>;
