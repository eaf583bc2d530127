//! Editor factories
//!
//! A factory advertises the file extensions it handles and builds editors for
//! them. The registry picks the first factory that claims an extension.

use std::path::Path;

use thiserror::Error;

use scene_ui::ui::{UIError, UIManager};

use crate::config::EditorEntry;
use crate::editor::Editor;

/// Editor errors
#[derive(Error, Debug)]
pub enum EditorError {
    /// Path has no extension to dispatch on
    #[error("No file extension: {0}")]
    MissingExtension(String),

    /// No registered factory claims the extension
    #[error("No editor for extension: {0}")]
    NoEditor(String),

    /// Widget tree failure while building the editor
    #[error("UI error: {0}")]
    UI(#[from] UIError),
}

/// Result type for editor operations
pub type EditorResult<T> = Result<T, EditorError>;

/// Builds editors for a set of file extensions
pub trait EditorFactory {
    /// Factory name, for logs
    fn name(&self) -> &str;

    /// Extensions handled, without the leading dot
    fn extensions(&self) -> &[String];

    /// Exact, case-sensitive match against `extensions()`
    fn can_handle_extension(&self, extension: &str) -> bool {
        self.extensions().iter().any(|e| e == extension)
    }

    /// Create a new editor in `ui`
    fn create_editor(&self, ui: &mut UIManager) -> EditorResult<Editor>;
}

/// Factory driven by a configured editor entry
#[derive(Debug, Clone)]
pub struct ExtensionEditorFactory {
    entry: EditorEntry,
}

impl ExtensionEditorFactory {
    /// Factory for one editor table entry
    pub fn new(entry: EditorEntry) -> Self {
        Self { entry }
    }
}

impl EditorFactory for ExtensionEditorFactory {
    fn name(&self) -> &str {
        &self.entry.name
    }

    fn extensions(&self) -> &[String] {
        &self.entry.extensions
    }

    fn create_editor(&self, ui: &mut UIManager) -> EditorResult<Editor> {
        Ok(Editor::new(ui, self.entry.read_only)?)
    }
}

/// Ordered set of editor factories
#[derive(Default)]
pub struct EditorRegistry {
    factories: Vec<Box<dyn EditorFactory>>,
}

impl EditorRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with one factory per configured entry
    pub fn from_entries(entries: &[EditorEntry]) -> Self {
        let mut registry = Self::new();
        for entry in entries {
            registry.register(Box::new(ExtensionEditorFactory::new(entry.clone())));
        }
        registry
    }

    /// Add a factory; earlier registrations win ties
    pub fn register(&mut self, factory: Box<dyn EditorFactory>) {
        log::debug!("Registered editor factory '{}' for {:?}", factory.name(), factory.extensions());
        self.factories.push(factory);
    }

    /// First factory handling `extension`
    pub fn factory_for_extension(&self, extension: &str) -> Option<&dyn EditorFactory> {
        self.factories
            .iter()
            .find(|f| f.can_handle_extension(extension))
            .map(|f| &**f)
    }

    /// Open `path` in a new editor chosen by its extension
    pub fn open(&self, ui: &mut UIManager, path: &Path) -> EditorResult<Editor> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| EditorError::MissingExtension(path.display().to_string()))?;

        let factory = self
            .factory_for_extension(extension)
            .ok_or_else(|| EditorError::NoEditor(extension.to_string()))?;

        let mut editor = factory.create_editor(ui)?;
        editor.set_file_path(path);
        log::info!("Opened {} with '{}' editor", path.display(), factory.name());
        Ok(editor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IdeConfig;

    fn registry() -> EditorRegistry {
        EditorRegistry::from_entries(&IdeConfig::default().editors)
    }

    #[test]
    fn test_can_handle_extension_is_exact() {
        let factory = ExtensionEditorFactory::new(EditorEntry {
            name: "text".to_string(),
            extensions: vec!["txt".to_string(), "lua".to_string()],
            read_only: false,
        });

        assert!(factory.can_handle_extension("lua"));
        assert!(!factory.can_handle_extension("LUA"));
        assert!(!factory.can_handle_extension(".lua"));
        assert!(!factory.can_handle_extension("lu"));
    }

    #[test]
    fn test_factory_lookup_by_extension() {
        let registry = registry();

        assert_eq!(registry.factory_for_extension("png").map(|f| f.name()), Some("image"));
        assert_eq!(registry.factory_for_extension("lua").map(|f| f.name()), Some("text"));
        assert!(registry.factory_for_extension("exe").is_none());
    }

    #[test]
    fn test_open_sets_path_and_read_only() {
        let registry = registry();
        let mut ui = UIManager::new();

        let editor = registry.open(&mut ui, Path::new("assets/logo.png")).unwrap();

        assert_eq!(editor.file_path(), Some(Path::new("assets/logo.png")));
        assert!(editor.is_read_only());
        assert!(ui.entity(editor.node()).unwrap().enable_scissor);
    }

    #[test]
    fn test_open_unknown_or_missing_extension_fails() {
        let registry = registry();
        let mut ui = UIManager::new();

        assert!(matches!(
            registry.open(&mut ui, Path::new("bin/tool.exe")),
            Err(EditorError::NoEditor(ext)) if ext == "exe"
        ));
        assert!(matches!(
            registry.open(&mut ui, Path::new("Makefile")),
            Err(EditorError::MissingExtension(_))
        ));
        assert!(ui.graph().is_empty());
    }
}
