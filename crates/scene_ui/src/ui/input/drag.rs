//! Drag positioning
//!
//! Converts a pointer position (already in the parent's local space) into the
//! dragged widget's new position.

use crate::foundation::math::Point3;
use crate::ui::widgets::UIElement;

/// Position a dragged widget should move to
///
/// `local` is the pointer in the parent's y-up local space. The widget
/// position is screen-oriented, so y is negated before the drag offset is
/// removed. Active drag limits clamp each axis independently.
pub fn drag_position(element: &UIElement, local: &Point3) -> (f32, f32) {
    let offset = element.drag_offset();
    let x = local.x - offset.x;
    let y = -local.y - offset.y;

    match element.drag_limits() {
        Some(limits) => limits.clamp_point(x, y),
        None => (x, y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Rect;

    #[test]
    fn test_offset_is_removed() {
        let mut element = UIElement::new();
        element.start_drag(5.0, 3.0);
        assert_eq!(drag_position(&element, &Point3::new(20.0, -10.0, 0.0)), (15.0, 7.0));
    }

    #[test]
    fn test_limits_clamp_each_axis() {
        let mut element = UIElement::new();
        element.start_drag(0.0, 0.0);
        element.set_drag_limits(Rect::new(0.0, 0.0, 100.0, 50.0));

        assert_eq!(drag_position(&element, &Point3::new(150.0, -10.0, 0.0)), (100.0, 10.0));
        assert_eq!(drag_position(&element, &Point3::new(-20.0, 20.0, 0.0)), (0.0, 0.0));
        assert_eq!(drag_position(&element, &Point3::new(40.0, -80.0, 0.0)), (40.0, 50.0));
    }
}
