//! Editor base
//!
//! Every editor is a widget node that clips its content to its own screen
//! rectangle and receives pointer input.

use std::path::{Path, PathBuf};

use scene_ui::foundation::math::Rect;
use scene_ui::scene::NodeId;
use scene_ui::ui::{UIManager, UIResult};

/// An open document view
#[derive(Debug)]
pub struct Editor {
    node: NodeId,
    file_path: Option<PathBuf>,
    read_only: bool,
}

impl Editor {
    /// Create the editor's node in `ui`
    pub fn new(ui: &mut UIManager, read_only: bool) -> UIResult<Self> {
        let node = ui.create_element();
        let entity = ui.entity_mut(node)?;
        entity.enable_scissor = true;
        entity.process_input_events = true;

        Ok(Self {
            node,
            file_path: None,
            read_only,
        })
    }

    /// Widget node backing this editor
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Record the file shown by this editor
    pub fn set_file_path<P: Into<PathBuf>>(&mut self, path: P) {
        self.file_path = Some(path.into());
    }

    /// File shown by this editor
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Fixed at creation
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Clip to a `width` x `height` rectangle at the node's screen position
    ///
    /// The widget size is left to the concrete editor's layout.
    pub fn resize(&self, ui: &mut UIManager, width: f32, height: f32) -> UIResult<()> {
        let position = ui.screen_position(self.node)?;
        ui.entity_mut(self.node)?.scissor_box = Rect::new(position.x, position.y, width, height);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_editor_clips_and_takes_input() {
        let mut ui = UIManager::new();
        let editor = Editor::new(&mut ui, true).unwrap();

        let entity = ui.entity(editor.node()).unwrap();
        assert!(entity.enable_scissor);
        assert!(entity.process_input_events);
        assert!(editor.is_read_only());
        assert!(editor.file_path().is_none());
    }

    #[test]
    fn test_set_file_path() {
        let mut ui = UIManager::new();
        let mut editor = Editor::new(&mut ui, false).unwrap();

        editor.set_file_path("scripts/main.lua");

        assert_eq!(editor.file_path(), Some(Path::new("scripts/main.lua")));
        assert!(!editor.is_read_only());
    }

    #[test]
    fn test_resize_sets_scissor_from_screen_position() {
        let mut ui = UIManager::new();
        let frame = ui.create_element_sized(800.0, 600.0);
        ui.entity_mut(frame).unwrap().set_position(100.0, 40.0);
        let editor = Editor::new(&mut ui, false).unwrap();
        ui.add_child(frame, editor.node()).unwrap();
        ui.entity_mut(editor.node()).unwrap().set_position(10.0, 20.0);

        editor.resize(&mut ui, 300.0, 200.0).unwrap();

        let entity = ui.entity(editor.node()).unwrap();
        assert_eq!(entity.scissor_box, Rect::new(110.0, 60.0, 300.0, 200.0));
        assert_eq!((entity.width(), entity.height()), (0.0, 0.0));
    }
}
