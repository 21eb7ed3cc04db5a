pub mod analysis;
pub mod envelope;
pub mod scene;

pub use analysis::*;
pub use envelope::*;
pub use scene::*;

// Shaders bundled as string constants
pub static STARS_WGSL: &str = include_str!("../../shaders/stars.wgsl");
pub static ASTEROIDS_WGSL: &str = include_str!("../../shaders/asteroids.wgsl");
