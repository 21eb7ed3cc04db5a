//! Star field and asteroid field state plus the per-frame update rules.
//!
//! All positions, rotations and colors live here as plain numbers; the
//! renderer only reads them. Randomness comes from a single seeded RNG so a
//! given seed replays the exact same scene.

use glam::Vec3;
use rand::prelude::*;

use super::analysis::AudioSnapshot;

/// Camera depth; objects recycle once their z passes this.
pub const CAMERA_Z: f32 = 10.0;

pub const STAR_COUNT: usize = 10_000;
/// Stars spawn with x,y in ±(STAR_SPREAD / 2).
pub const STAR_SPREAD: f32 = 300.0;
/// Depth of the star volume; recycled stars restart at -STAR_DEPTH.
pub const STAR_DEPTH: f32 = 400.0;

pub const ASTEROID_COUNT: usize = 40;
/// Asteroids spawn with x,y in ±(ASTEROID_SPREAD / 2).
pub const ASTEROID_SPREAD: f32 = 150.0;
/// Initial depth range starts here and extends back by ASTEROID_DEPTH_SPAN.
pub const ASTEROID_NEAR_Z: f32 = -100.0;
pub const ASTEROID_DEPTH_SPAN: f32 = 200.0;
/// Recycled asteroids respawn between here and ASTEROID_DEPTH_SPAN further back.
pub const ASTEROID_RESPAWN_Z: f32 = -200.0;

/// Spin-rate components land in ±(ROTATION_VELOCITY_SPREAD / 2).
pub const ROTATION_VELOCITY_SPREAD: f32 = 0.02;
pub const BASE_SPEED_MIN: f32 = 0.3;
pub const BASE_SPEED_SPAN: f32 = 0.5;

// Audio-reactive gains.
pub const STAR_DRIFT: f32 = 0.05;
pub const STAR_MID_GAIN: f32 = 0.8;
pub const OPACITY_BASE: f32 = 0.4;
pub const OPACITY_TREBLE_GAIN: f32 = 0.6;
pub const ASTEROID_TOTAL_GAIN: f32 = 8.0;
pub const SCALE_TOTAL_GAIN: f32 = 2.0;
pub const SPIN_MID_GAIN: f32 = 2.0;
pub const SPIN_BASS_GAIN: f32 = 2.0;
pub const BRIGHTNESS_BASE: f32 = 0.4;
pub const BRIGHTNESS_TOTAL_GAIN: f32 = 1.5;
pub const JITTER_BASS_GAIN: f32 = 0.5;

#[derive(Clone, Debug)]
pub struct Asteroid {
    pub position: Vec3,
    /// Euler angles, advanced every frame on x and y.
    pub rotation: Vec3,
    /// Per-axis spin rates. The z component is carried but never applied;
    /// the behavior being reproduced leaves it unused.
    pub rotation_velocity: Vec3,
    pub base_speed: f32,
    /// Redrawn every frame rather than smoothed; the field flickers.
    pub scale: f32,
    /// Raw grayscale level; may exceed 1.0, the renderer clamps.
    pub brightness: f32,
}

pub struct SceneState {
    pub stars: Vec<Vec3>,
    pub star_opacity: f32,
    pub asteroids: Vec<Asteroid>,
    /// Camera shake, overwritten (not accumulated) every update.
    pub camera_offset: [f32; 2],
    rng: StdRng,
}

impl SceneState {
    /// Build both fields from an injected seed so runs are reproducible.
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let stars = (0..STAR_COUNT)
            .map(|_| {
                Vec3::new(
                    (rng.gen::<f32>() - 0.5) * STAR_SPREAD,
                    (rng.gen::<f32>() - 0.5) * STAR_SPREAD,
                    -rng.gen::<f32>() * STAR_DEPTH,
                )
            })
            .collect();
        let asteroids = (0..ASTEROID_COUNT)
            .map(|_| Asteroid {
                position: Vec3::new(
                    (rng.gen::<f32>() - 0.5) * ASTEROID_SPREAD,
                    (rng.gen::<f32>() - 0.5) * ASTEROID_SPREAD,
                    ASTEROID_NEAR_Z - rng.gen::<f32>() * ASTEROID_DEPTH_SPAN,
                ),
                rotation: Vec3::ZERO,
                rotation_velocity: Vec3::new(
                    (rng.gen::<f32>() - 0.5) * ROTATION_VELOCITY_SPREAD,
                    (rng.gen::<f32>() - 0.5) * ROTATION_VELOCITY_SPREAD,
                    (rng.gen::<f32>() - 0.5) * ROTATION_VELOCITY_SPREAD,
                ),
                base_speed: BASE_SPEED_MIN + rng.gen::<f32>() * BASE_SPEED_SPAN,
                scale: 1.0,
                brightness: BRIGHTNESS_BASE,
            })
            .collect();
        Self {
            stars,
            star_opacity: OPACITY_BASE,
            asteroids,
            camera_offset: [0.0, 0.0],
            rng,
        }
    }

    /// Advance the whole scene by one frame.
    pub fn update(&mut self, audio: &AudioSnapshot, activity: f32) {
        // Stars recycle along depth only; x,y stay put.
        let star_step = (STAR_DRIFT + audio.mid * STAR_MID_GAIN) * activity;
        for star in &mut self.stars {
            star.z += star_step;
            if star.z > CAMERA_Z {
                star.z = -STAR_DEPTH;
            }
        }
        self.star_opacity = OPACITY_BASE + audio.treble * OPACITY_TREBLE_GAIN * activity;

        let rng = &mut self.rng;
        for a in &mut self.asteroids {
            a.position.z += (a.base_speed + audio.total * ASTEROID_TOTAL_GAIN) * activity;
            if a.position.z > CAMERA_Z {
                a.position = Vec3::new(
                    (rng.gen::<f32>() - 0.5) * ASTEROID_SPREAD,
                    (rng.gen::<f32>() - 0.5) * ASTEROID_SPREAD,
                    ASTEROID_RESPAWN_Z - rng.gen::<f32>() * ASTEROID_DEPTH_SPAN,
                );
            }
            a.scale =
                (0.5 + rng.gen::<f32>() * 0.5) * (1.0 + audio.total * SCALE_TOTAL_GAIN * activity);
            a.rotation.x += a.rotation_velocity.x * (1.0 + audio.mid * SPIN_MID_GAIN) * activity;
            a.rotation.y += a.rotation_velocity.y * (1.0 + audio.bass * SPIN_BASS_GAIN) * activity;
            a.brightness = BRIGHTNESS_BASE + audio.total * BRIGHTNESS_TOTAL_GAIN * activity;
        }

        self.camera_offset = [
            (rng.gen::<f32>() - 0.5) * audio.bass * JITTER_BASS_GAIN * activity,
            (rng.gen::<f32>() - 0.5) * audio.bass * JITTER_BASS_GAIN * activity,
        ];
    }
}
