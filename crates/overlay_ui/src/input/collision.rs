//! Collision detection for input processing
//!
//! Hit testing for widgets. Bounds are inclusive on both edges.

use crate::foundation::math::Vec2;

/// Check if a point is inside a rectangular region
///
/// # Arguments
/// * `point` - Point to test
/// * `rect_position` - Lower-left corner of the rectangle
/// * `rect_size` - Width and height of the rectangle
pub fn point_in_rect(point: &Vec2, rect_position: &Vec2, rect_size: &Vec2) -> bool {
    point_in_local_bounds(&(point - rect_position), rect_size)
}

/// Check if a point already expressed in a widget's local space lies within `[0, size]`
pub fn point_in_local_bounds(local: &Vec2, size: &Vec2) -> bool {
    local.x >= 0.0 && local.y >= 0.0 && local.x <= size.x && local.y <= size.y
}
