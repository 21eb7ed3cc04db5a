// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/analysis.rs"]
mod analysis;
#[path = "../src/core/envelope.rs"]
mod envelope;
#[path = "../src/core/scene.rs"]
mod scene;

use analysis::*;
use envelope::*;
use scene::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn band_layout_is_contiguous_and_fits_the_bin_count() {
    assert!(BASS_END < MID_END);
    assert!(MID_END < TREBLE_END);
    assert!(TREBLE_END <= BIN_COUNT);
    // The analyser reports half the FFT window as bins.
    assert_eq!(FFT_SIZE as usize, BIN_COUNT * 2);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn envelope_constants_form_a_hysteresis() {
    // Attack must outpace decay for the ratchet to feel asymmetric.
    assert!(ATTACK_STEP > DECAY_STEP);
    assert!(ACTIVITY_FLOOR < ACTIVITY_CEILING);
    assert!(ACTIVITY_FLOOR > 0.0);
    assert!(ACTIVITY_CEILING <= 1.0);
    // The threshold must be reachable by the low-passed loudness.
    assert!(ACTIVITY_THRESHOLD > 0.0 && ACTIVITY_THRESHOLD < 1.0);
    // The low-pass weights blend to unity.
    assert!((SMOOTHING_KEEP + SMOOTHING_BLEND - 1.0).abs() < 1e-6);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scene_counts_and_volumes_are_sane() {
    assert!(STAR_COUNT > 0);
    assert!(ASTEROID_COUNT > 0);
    assert!(STAR_SPREAD > 0.0);
    assert!(STAR_DEPTH > 0.0);
    assert!(ASTEROID_SPREAD > 0.0);
    assert!(ASTEROID_DEPTH_SPAN > 0.0);
    assert!(CAMERA_Z > 0.0);

    // Asteroids live inside the star volume and respawn behind their
    // initial band, so the field is continuously replenished from the back.
    assert!(ASTEROID_SPREAD <= STAR_SPREAD);
    assert!(ASTEROID_RESPAWN_Z < ASTEROID_NEAR_Z);
    assert!(ASTEROID_RESPAWN_Z - ASTEROID_DEPTH_SPAN >= -STAR_DEPTH);
    assert!(ASTEROID_NEAR_Z < CAMERA_Z);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn reactive_gains_keep_their_outputs_in_range() {
    // Opacity formula peaks at exactly 1.0 under full treble and activity.
    assert!((OPACITY_BASE + OPACITY_TREBLE_GAIN - 1.0).abs() < 1e-6);
    // Brightness can exceed 1.0; the renderer clamps it.
    assert!(BRIGHTNESS_BASE + BRIGHTNESS_TOTAL_GAIN > 1.0);
    // Asteroids always outrun the stars, even in silence.
    assert!(BASE_SPEED_MIN > STAR_DRIFT);
    assert!(JITTER_BASS_GAIN > 0.0);
}
