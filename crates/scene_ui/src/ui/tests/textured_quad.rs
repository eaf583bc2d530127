//! Integration tests for rect and image widgets
//!
//! Geometry and texture coordinates are checked through the recorded render
//! commands, the same way a backend would receive them.

use std::path::PathBuf;

use crate::assets::TextureManager;
use crate::foundation::math::{Point3, Ray};
use crate::render::{CommandBuffer, DataArray, RenderCommand};
use crate::ui::{UIError, UIManager};
use approx::assert_relative_eq;

#[cfg(test)]
mod tests {
    use super::*;

    fn write_png(name: &str, width: u32, height: u32) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("scene_ui_{}_{}.png", name, std::process::id()));
        image::RgbaImage::new(width, height).save(&path).unwrap();
        path
    }

    fn pushed(buffer: &CommandBuffer, which: DataArray) -> Vec<(Vec<f32>, bool)> {
        buffer
            .commands()
            .iter()
            .filter_map(|c| match c {
                RenderCommand::PushArray { array, data, upload } if *array == which => {
                    Some((data.clone(), *upload))
                }
                _ => None,
            })
            .collect()
    }

    /// Screen-space (y down) corners of every drawn quad, in vertex order
    fn drawn_corners(buffer: &CommandBuffer) -> Vec<Vec<(f32, f32)>> {
        let mut matrix = None;
        let mut quads = Vec::new();
        for command in buffer.commands() {
            match command {
                RenderCommand::SetModelMatrix(m) => matrix = Some(*m),
                RenderCommand::PushArray { array: DataArray::Vertex, data, .. } => {
                    let m = matrix.unwrap();
                    quads.push(
                        data.chunks(3)
                            .map(|v| {
                                let p = m.transform_point(&Point3::new(v[0], v[1], v[2]));
                                (p.x, -p.y)
                            })
                            .collect(),
                    );
                }
                _ => {}
            }
        }
        quads
    }

    #[test]
    fn test_drawn_quad_matches_hit_bounds() {
        let mut ui = UIManager::new();
        let id = ui.create_rect(4.0, 4.0);
        ui.entity_mut(id).unwrap().set_position(10.0, 30.0);

        let mut buffer = CommandBuffer::new();
        ui.render(&mut buffer).unwrap();

        let corners = &drawn_corners(&buffer)[0];
        // Top-left corner sits on the position; vertex 0 is the bottom-left
        assert_relative_eq!(corners[3].0, 10.0);
        assert_relative_eq!(corners[3].1, 30.0);
        assert_relative_eq!(corners[0].0, 10.0);
        assert_relative_eq!(corners[0].1, 34.0);
        assert_relative_eq!(corners[1].0, 14.0);
        assert_relative_eq!(corners[1].1, 34.0);

        // A pixel inside the drawn quad hits, one outside it does not
        let inside = ui.on_mouse_move(id, &Ray::from_screen(11.5, -30.5), 0.0).unwrap();
        assert!(inside.hit);
        let outside = ui.on_mouse_move(id, &Ray::from_screen(8.5, -30.5), 0.1).unwrap();
        assert!(!outside.hit);
    }

    #[test]
    fn test_image_drawn_from_widget_corner() {
        let path = write_png("image_anchor", 8, 6);
        let mut ui = UIManager::new();
        let mut textures = TextureManager::new();
        let id = ui.create_image(&mut textures, &path).unwrap();
        ui.entity_mut(id).unwrap().set_position(20.0, 5.0);

        let mut buffer = CommandBuffer::new();
        ui.render(&mut buffer).unwrap();

        let corners = &drawn_corners(&buffer)[0];
        assert_relative_eq!(corners[3].0, 20.0);
        assert_relative_eq!(corners[3].1, 5.0);
        assert_relative_eq!(corners[1].0, 28.0);
        assert_relative_eq!(corners[1].1, 11.0);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_missing_texture_renders_unit_quad() {
        crate::foundation::logging::init_for_tests();
        let mut ui = UIManager::new();
        let mut textures = TextureManager::new();
        let id = ui.create_rect_from_file(&mut textures, "does/not/exist.png");

        let mut buffer = CommandBuffer::new();
        ui.render(&mut buffer).unwrap();

        assert_eq!(buffer.draw_count(), 1);
        assert!(matches!(buffer.commands()[0], RenderCommand::SetModelMatrix(_)));
        assert!(buffer.commands().contains(&RenderCommand::SetTexture(None)));
        let (vertices, upload) = pushed(&buffer, DataArray::Vertex).remove(0);
        assert!(upload);
        assert_eq!(
            vertices,
            vec![-0.5, -0.5, 0.0, 0.5, -0.5, 0.0, 0.5, 0.5, 0.0, -0.5, 0.5, 0.0]
        );
        assert_eq!(ui.rect(id).unwrap().image_width(), 0.0);
    }

    #[test]
    fn test_loaded_rect_takes_image_size() {
        let path = write_png("rect_size", 64, 32);
        let mut ui = UIManager::new();
        let mut textures = TextureManager::new();

        let id = ui.create_rect_from_file(&mut textures, &path);

        let rect = ui.rect(id).unwrap();
        assert!(rect.texture().is_some());
        assert_eq!((rect.image_width(), rect.image_height()), (64.0, 32.0));
        let entity = ui.entity(id).unwrap();
        assert_eq!((entity.width(), entity.height()), (64.0, 32.0));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_sub_image_then_resize_keeps_tex_coords() {
        let path = write_png("sprite_sheet", 64, 64);
        let mut ui = UIManager::new();
        let mut textures = TextureManager::new();
        let id = ui.create_rect_from_file(&mut textures, &path);

        ui.set_image_coordinates(id, 0.0, 0.0, 32.0, 32.0).unwrap();
        ui.resize(id, 100.0, 50.0).unwrap();

        let mut buffer = CommandBuffer::new();
        ui.render(&mut buffer).unwrap();

        let (tex_coords, _) = pushed(&buffer, DataArray::TexCoord).remove(0);
        let expected = [0.0, 0.5, 0.5, 0.5, 0.5, 0.0, 0.0, 0.0];
        for (actual, expected) in tex_coords.iter().zip(expected) {
            assert_relative_eq!(*actual, expected);
        }
        let (vertices, _) = pushed(&buffer, DataArray::Vertex).remove(0);
        assert_eq!(&vertices[6..9], &[50.0, 25.0, 0.0]);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_clean_mesh_is_not_reuploaded() {
        let mut ui = UIManager::new();
        let id = ui.create_rect(20.0, 20.0);

        let mut first = CommandBuffer::new();
        ui.render(&mut first).unwrap();
        let mut second = CommandBuffer::new();
        ui.render(&mut second).unwrap();

        assert!(pushed(&first, DataArray::Vertex)[0].1);
        assert!(!pushed(&second, DataArray::Vertex)[0].1);
        assert!(!pushed(&second, DataArray::TexCoord)[0].1);
        assert_eq!(first.staged_bytes().len(), (12 + 8) * 4);
        assert!(second.staged_bytes().is_empty());

        ui.resize(id, 10.0, 10.0).unwrap();
        let mut third = CommandBuffer::new();
        ui.render(&mut third).unwrap();
        assert!(pushed(&third, DataArray::Vertex)[0].1);
        assert!(!pushed(&third, DataArray::TexCoord)[0].1);
    }

    #[test]
    fn test_render_uses_concatenated_matrix() {
        let mut ui = UIManager::new();
        let parent = ui.create_element_sized(100.0, 100.0);
        ui.entity_mut(parent).unwrap().set_position(10.0, 20.0);
        let rect = ui.create_rect(4.0, 4.0);
        ui.entity_mut(rect).unwrap().set_position(1.0, 2.0);
        ui.add_child(parent, rect).unwrap();

        let mut buffer = CommandBuffer::new();
        ui.render(&mut buffer).unwrap();

        match &buffer.commands()[0] {
            RenderCommand::SetModelMatrix(m) => {
                // Node translation plus the 4x4 quad's anchor offset
                assert_relative_eq!(m[(0, 3)], 13.0);
                assert_relative_eq!(m[(1, 3)], -24.0);
            }
            other => panic!("expected model matrix, got {:?}", other),
        }
        assert!(!ui.entity(rect).unwrap().is_matrix_dirty());
    }

    #[test]
    fn test_hidden_subtree_is_skipped() {
        let mut ui = UIManager::new();
        let parent = ui.create_element();
        let rect = ui.create_rect(4.0, 4.0);
        ui.add_child(parent, rect).unwrap();
        ui.entity_mut(parent).unwrap().visible = false;

        let mut buffer = CommandBuffer::new();
        ui.render(&mut buffer).unwrap();

        assert_eq!(buffer.draw_count(), 0);
    }

    #[test]
    fn test_image_widget_wraps_scene_image() {
        let path = write_png("image_widget", 24, 12);
        let mut ui = UIManager::new();
        let mut textures = TextureManager::new();

        let id = ui.create_image(&mut textures, &path).unwrap();

        let entity = ui.entity(id).unwrap();
        assert_eq!((entity.width(), entity.height()), (24.0, 12.0));
        let image_node = ui.widget(id).unwrap().as_image().unwrap().image();
        assert_eq!(entity.children(), &[image_node]);
        assert_eq!(ui.scene_image(image_node).unwrap().bounding_box(), (24.0, 12.0));

        let image_entity = ui.entity(image_node).unwrap();
        assert!(!image_entity.depth_test);
        assert!(!image_entity.depth_write);
        assert_eq!(image_entity.anchor_point().x, -1.0);

        // Image node is not a widget, so it never joins a focus chain
        assert!(ui.element(id).unwrap().focus_children().is_empty());

        let mut buffer = CommandBuffer::new();
        ui.render(&mut buffer).unwrap();
        assert_eq!(buffer.draw_count(), 1);
        assert!(buffer
            .commands()
            .iter()
            .any(|c| matches!(c, RenderCommand::SetTexture(Some(_)))));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_image_widget_with_missing_file_is_empty() {
        let mut ui = UIManager::new();
        let mut textures = TextureManager::new();

        let id = ui.create_image(&mut textures, "missing/picture.png").unwrap();

        let entity = ui.entity(id).unwrap();
        assert_eq!((entity.width(), entity.height()), (0.0, 0.0));
    }

    #[test]
    fn test_geometry_ops_check_capability() {
        let mut ui = UIManager::new();
        let element = ui.create_element();
        let plain = ui.create_entity(crate::scene::Entity::new());

        assert!(matches!(
            ui.set_image_coordinates(element, 0.0, 0.0, 1.0, 1.0),
            Err(UIError::NotARect(_))
        ));
        assert!(matches!(ui.resize(plain, 1.0, 1.0), Err(UIError::NotAWidget(_))));

        ui.resize(element, 30.0, 40.0).unwrap();
        let entity = ui.entity(element).unwrap();
        assert_eq!((entity.width(), entity.height()), (30.0, 40.0));
        assert!(entity.is_matrix_dirty());
    }
}
