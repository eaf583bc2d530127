//! Image widget - wraps a scene image as a child node

use crate::scene::{Entity, NodeId, SceneImage};

/// Widget showing one `SceneImage`
///
/// The image node is an owned scene child. The widget's size is copied from
/// the image's bounding box when created and not kept in sync afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UIImage {
    image: NodeId,
}

impl UIImage {
    pub(crate) fn new(image: NodeId) -> Self {
        Self { image }
    }

    /// The child node holding the `SceneImage`
    pub fn image(&self) -> NodeId {
        self.image
    }

    /// Entity for the wrapped image: top-left anchor, no depth test/write
    pub(crate) fn image_entity(image: &SceneImage) -> Entity {
        let (width, height) = image.bounding_box();
        let mut entity = Entity::with_size(width, height);
        entity.set_anchor_point(-1.0, -1.0, 0.0);
        entity.depth_test = false;
        entity.depth_write = false;
        entity
    }
}
