// Host-side tests for the star/asteroid field and its update rules.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/analysis.rs"]
mod analysis;
#[path = "../src/core/envelope.rs"]
mod envelope;
#[path = "../src/core/scene.rs"]
mod scene;

use analysis::AudioSnapshot;
use scene::*;

const LOUD: AudioSnapshot = AudioSnapshot {
    bass: 1.0,
    mid: 1.0,
    treble: 1.0,
    total: 1.0,
};

// Strong bass, nothing else, quarter overall loudness.
const BASS_HEAVY: AudioSnapshot = AudioSnapshot {
    bass: 1.0,
    mid: 0.0,
    treble: 0.0,
    total: 0.25,
};

#[test]
fn initial_distributions_respect_ranges() {
    let state = SceneState::new(42);

    assert_eq!(state.stars.len(), STAR_COUNT);
    for star in &state.stars {
        assert!(star.x.abs() <= STAR_SPREAD / 2.0);
        assert!(star.y.abs() <= STAR_SPREAD / 2.0);
        assert!(star.z <= 0.0 && star.z >= -STAR_DEPTH);
    }

    assert_eq!(state.asteroids.len(), ASTEROID_COUNT);
    for a in &state.asteroids {
        assert!(a.position.x.abs() <= ASTEROID_SPREAD / 2.0);
        assert!(a.position.y.abs() <= ASTEROID_SPREAD / 2.0);
        assert!(a.position.z <= ASTEROID_NEAR_Z);
        assert!(a.position.z >= ASTEROID_NEAR_Z - ASTEROID_DEPTH_SPAN);
        assert!(a.rotation_velocity.x.abs() <= ROTATION_VELOCITY_SPREAD / 2.0);
        assert!(a.rotation_velocity.y.abs() <= ROTATION_VELOCITY_SPREAD / 2.0);
        assert!(a.rotation_velocity.z.abs() <= ROTATION_VELOCITY_SPREAD / 2.0);
        assert!(a.base_speed >= BASE_SPEED_MIN);
        assert!(a.base_speed < BASE_SPEED_MIN + BASE_SPEED_SPAN);
        assert_eq!(a.rotation, glam::Vec3::ZERO);
    }

    assert_eq!(state.star_opacity, OPACITY_BASE);
    assert_eq!(state.camera_offset, [0.0, 0.0]);
}

#[test]
fn stars_never_pass_the_camera() {
    let mut state = SceneState::new(1);
    for _ in 0..500 {
        state.update(&LOUD, 1.0);
        for star in &state.stars {
            assert!(star.z <= CAMERA_Z);
        }
    }
}

#[test]
fn recycled_star_restarts_at_the_back_with_xy_unchanged() {
    let mut state = SceneState::new(2);
    let (x0, y0) = (state.stars[0].x, state.stars[0].y);
    state.stars[0].z = CAMERA_Z - 0.01; // one loud step pushes it past

    state.update(&LOUD, 1.0);

    assert_eq!(state.stars[0].z, -STAR_DEPTH);
    assert_eq!(state.stars[0].x, x0);
    assert_eq!(state.stars[0].y, y0);
}

#[test]
fn recycled_asteroid_respawns_in_the_far_band() {
    let mut state = SceneState::new(3);
    for a in &mut state.asteroids {
        a.position.z = CAMERA_Z - 0.01; // total*8 blows every one past the camera
    }

    state.update(&LOUD, 1.0);

    for a in &state.asteroids {
        assert!(a.position.x.abs() <= ASTEROID_SPREAD / 2.0);
        assert!(a.position.y.abs() <= ASTEROID_SPREAD / 2.0);
        assert!(a.position.z <= ASTEROID_RESPAWN_Z);
        assert!(a.position.z >= ASTEROID_RESPAWN_Z - ASTEROID_DEPTH_SPAN);
    }
}

#[test]
fn silent_scene_settles_at_the_baseline() {
    let mut state = SceneState::new(4);
    for _ in 0..200 {
        state.update(&AudioSnapshot::ZERO, 0.2);
        for star in &state.stars {
            assert!(star.z <= CAMERA_Z);
        }
    }
    // No treble, so the field opacity sits exactly on its base.
    assert_eq!(state.star_opacity, OPACITY_BASE);
    // No bass, so the camera does not shake at all.
    assert_eq!(state.camera_offset, [0.0, 0.0]);
    for a in &state.asteroids {
        assert_eq!(a.brightness, BRIGHTNESS_BASE);
    }
}

#[test]
fn rotation_deltas_match_the_update_rule_exactly() {
    let mut state = SceneState::new(5);
    let activity = 0.5;
    let before: Vec<_> = state
        .asteroids
        .iter()
        .map(|a| (a.rotation, a.rotation_velocity))
        .collect();

    state.update(&BASS_HEAVY, activity);

    for (a, (rot0, vel)) in state.asteroids.iter().zip(&before) {
        // mid = 0 -> x spins at base rate; bass = 1 -> y spins three times it.
        let expected_dx = vel.x * (1.0 + BASS_HEAVY.mid * SPIN_MID_GAIN) * activity;
        let expected_dy = vel.y * (1.0 + BASS_HEAVY.bass * SPIN_BASS_GAIN) * activity;
        assert!((a.rotation.x - (rot0.x + expected_dx)).abs() < 1e-6);
        assert!((a.rotation.y - (rot0.y + expected_dy)).abs() < 1e-6);
    }
}

#[test]
fn z_rotation_velocity_is_dead_data() {
    // The z spin rate is initialized but the update rule never applies it.
    let mut state = SceneState::new(6);
    let initial: Vec<_> = state
        .asteroids
        .iter()
        .map(|a| a.rotation_velocity.z)
        .collect();

    for _ in 0..100 {
        state.update(&LOUD, 1.0);
    }

    for (a, vz) in state.asteroids.iter().zip(&initial) {
        assert_eq!(a.rotation.z, 0.0);
        assert_eq!(a.rotation_velocity.z, *vz);
    }
}

#[test]
fn scale_flickers_within_the_formula_bounds() {
    let mut state = SceneState::new(7);
    for _ in 0..50 {
        state.update(&LOUD, 1.0);
        let boost = 1.0 + LOUD.total * SCALE_TOTAL_GAIN * 1.0;
        for a in &state.asteroids {
            assert!(a.scale >= 0.5 * boost);
            assert!(a.scale < 1.0 * boost);
        }
    }
}

#[test]
fn brightness_follows_the_loudness_formula() {
    let mut state = SceneState::new(8);
    let activity = 0.5;
    state.update(&BASS_HEAVY, activity);
    let expected = BRIGHTNESS_BASE + BASS_HEAVY.total * BRIGHTNESS_TOTAL_GAIN * activity;
    for a in &state.asteroids {
        assert!((a.brightness - expected).abs() < 1e-6);
    }
}

#[test]
fn camera_jitter_is_bounded_by_bass_and_activity() {
    let mut state = SceneState::new(9);
    let activity = 0.5;
    for _ in 0..200 {
        state.update(&BASS_HEAVY, activity);
        let bound = 0.5 * BASS_HEAVY.bass * JITTER_BASS_GAIN * activity;
        assert!(state.camera_offset[0].abs() <= bound);
        assert!(state.camera_offset[1].abs() <= bound);
        assert!(state.camera_offset[0].abs() <= 0.25);
        assert!(state.camera_offset[1].abs() <= 0.25);
    }
}

#[test]
fn silent_spectrum_drives_the_whole_pipeline_to_baseline() {
    // 200 frames of a flat silent spectrum through the real chain:
    // spectrum -> snapshot -> envelope -> scene.
    let mut env = envelope::ActivityEnvelope::new();
    let mut state = SceneState::new(10);
    let silent = [0u8; analysis::BIN_COUNT];

    for _ in 0..200 {
        let snap = analysis::snapshot_from_spectrum(&silent);
        let activity = env.update(snap.total);
        state.update(&snap, activity);
    }

    assert_eq!(env.activity(), envelope::ACTIVITY_FLOOR);
    assert_eq!(state.star_opacity, OPACITY_BASE);
    for star in &state.stars {
        assert!(star.z <= CAMERA_Z);
    }
    for a in &state.asteroids {
        assert!(a.position.z <= CAMERA_Z);
        assert_eq!(a.brightness, BRIGHTNESS_BASE);
    }
}

#[test]
fn equal_seeds_replay_the_same_scene() {
    let mut a = SceneState::new(1234);
    let mut b = SceneState::new(1234);
    for _ in 0..50 {
        a.update(&LOUD, 1.0);
        b.update(&LOUD, 1.0);
    }
    for (sa, sb) in a.stars.iter().zip(&b.stars) {
        assert_eq!(sa, sb);
    }
    for (aa, ab) in a.asteroids.iter().zip(&b.asteroids) {
        assert_eq!(aa.position, ab.position);
        assert_eq!(aa.rotation, ab.rotation);
        assert_eq!(aa.scale, ab.scale);
        assert_eq!(aa.brightness, ab.brightness);
    }
    assert_eq!(a.camera_offset, b.camera_offset);
}
