//! IDE host application
//!
//! Opens the file named on the command line in the editor registered for its
//! extension, lays it out in a window-sized frame and renders one frame into a
//! command buffer.

mod config;
mod editor;
mod factory;

use std::path::PathBuf;

use scene_ui::config::Config;
use scene_ui::foundation::logging;
use scene_ui::foundation::math::Ray;
use scene_ui::render::CommandBuffer;
use scene_ui::ui::UIManager;

use crate::config::IdeConfig;
use crate::factory::EditorRegistry;

const CONFIG_PATH: &str = "ide.toml";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init(log::LevelFilter::Info);

    let config = IdeConfig::load_or_default(CONFIG_PATH)?;
    log::info!("Starting IDE ({}x{})", config.window_size.0, config.window_size.1);

    let registry = EditorRegistry::from_entries(&config.editors);
    let mut ui = UIManager::with_config(config.ui.clone());

    let (width, height) = (config.window_size.0 as f32, config.window_size.1 as f32);
    let frame = ui.create_element_sized(width, height);

    match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => {
            let editor = registry.open(&mut ui, &path)?;
            ui.add_child(frame, editor.node())?;
            editor.resize(&mut ui, width, height)?;
            ui.focus_self(editor.node())?;
            log::info!(
                "Editing {} (read-only: {})",
                path.display(),
                editor.is_read_only()
            );
        }
        None => log::info!("No file given, showing an empty frame"),
    }

    // Pointer starts at the window centre
    let pointer = ui.dispatch_mouse_move(&Ray::from_screen(width * 0.5, -height * 0.5), 0.0)?;
    log::debug!("Pointer over UI: {}", pointer.hit);

    let mut commands = CommandBuffer::new();
    ui.render(&mut commands)?;
    ui.dispatch_events();

    log::info!(
        "Frame recorded: {} commands, {} draw calls, {} bytes staged",
        commands.commands().len(),
        commands.draw_count(),
        commands.staged_bytes().len()
    );
    Ok(())
}
