//! Slow-attack, slow-decay activity envelope.
//!
//! Converts instantaneous loudness into a scalar that ramps up quickly on
//! sustained sound and relaxes gradually in quiet, so a single transient
//! cannot make the whole scene jitter. The raw loudness is low-passed first;
//! the envelope then ratchets toward its ceiling or floor depending on
//! whether the smoothed level sits above the threshold.

/// Weight of the previous frame in the loudness low-pass.
pub const SMOOTHING_KEEP: f32 = 0.9;
/// Weight of the incoming loudness in the low-pass (time constant ~10 frames).
pub const SMOOTHING_BLEND: f32 = 0.1;
/// Smoothed loudness above which the envelope attacks.
pub const ACTIVITY_THRESHOLD: f32 = 0.08;
/// Per-frame attack step.
pub const ATTACK_STEP: f32 = 0.05;
/// Per-frame decay step.
pub const DECAY_STEP: f32 = 0.01;
/// Reactivity never falls below this baseline.
pub const ACTIVITY_FLOOR: f32 = 0.2;
pub const ACTIVITY_CEILING: f32 = 1.0;

#[derive(Clone, Copy, Debug)]
pub struct ActivityEnvelope {
    smoothed: f32,
    activity: f32,
}

impl Default for ActivityEnvelope {
    fn default() -> Self {
        Self {
            smoothed: 0.0,
            activity: ACTIVITY_FLOOR,
        }
    }
}

impl ActivityEnvelope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one frame of total loudness; returns the updated activity.
    pub fn update(&mut self, total: f32) -> f32 {
        self.smoothed = self.smoothed * SMOOTHING_KEEP + total * SMOOTHING_BLEND;
        self.activity = if self.smoothed > ACTIVITY_THRESHOLD {
            (self.activity + ATTACK_STEP).min(ACTIVITY_CEILING)
        } else {
            (self.activity - DECAY_STEP).max(ACTIVITY_FLOOR)
        };
        self.activity
    }

    pub fn activity(&self) -> f32 {
        self.activity
    }

    pub fn smoothed(&self) -> f32 {
        self.smoothed
    }
}
