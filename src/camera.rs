use glam::{Mat4, Vec3};

use crate::constants::{CAMERA_FAR, CAMERA_FOV_Y, CAMERA_NEAR};
use crate::core::scene::CAMERA_Z;

/// Combined view-projection for the fixed forward-facing camera.
///
/// The eye sits at `(offset_x, offset_y, CAMERA_Z)` looking down -z; the
/// offset is the per-frame bass shake, so the whole frustum trembles with it.
pub fn view_proj(width: u32, height: u32, offset: [f32; 2]) -> Mat4 {
    let aspect = width.max(1) as f32 / height.max(1) as f32;
    let proj = Mat4::perspective_rh(CAMERA_FOV_Y, aspect, CAMERA_NEAR, CAMERA_FAR);
    let eye = Vec3::new(offset[0], offset[1], CAMERA_Z);
    let view = Mat4::look_at_rh(eye, eye - Vec3::Z, Vec3::Y);
    proj * view
}
