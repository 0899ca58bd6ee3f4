//! Math utilities and types
//!
//! Provides the math types used by the GUI pass. All widget geometry lives in
//! surface space: origin at the bottom-left corner, y growing upwards.

pub use nalgebra::{Vector2, Vector3, Vector4, Matrix4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type (also used for RGBA colors)
pub type Vec4 = Vector4<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// Model matrix translating by a 2D offset
pub fn translation_2d(offset: &Vec2) -> Mat4 {
    Mat4::new_translation(&Vec3::new(offset.x, offset.y, 0.0))
}

/// Model matrix scaling the unit quad to a 2D size
pub fn scale_2d(size: &Vec2) -> Mat4 {
    Mat4::new_nonuniform_scaling(&Vec3::new(size.x, size.y, 1.0))
}

/// Model matrix placing a unit quad at `position` with extent `size`
pub fn placement_2d(position: &Vec2, size: &Vec2) -> Mat4 {
    translation_2d(position) * scale_2d(size)
}

/// Component-wise "is any axis of `a` smaller than `b`"
pub fn smaller_on_any_axis(a: &Vec2, b: &Vec2) -> bool {
    a.x < b.x || a.y < b.y
}
