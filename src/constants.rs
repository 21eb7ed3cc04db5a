/// Render-side tuning constants.
///
/// The simulation's own spatial constants live with the scene state; these
/// only shape how the fixed camera projects it.
// Vertical field of view (75° in radians).
pub const CAMERA_FOV_Y: f32 = 75.0 * std::f32::consts::PI / 180.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
