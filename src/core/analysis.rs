//! Frequency-band extraction from raw analyser spectra.
//!
//! The analyser reports 128 byte magnitudes (0-255). Four band means,
//! normalized to \[0, 1\], are all the rest of the simulation ever sees.

/// FFT window size requested from the analyser node.
pub const FFT_SIZE: u32 = 256;
/// Number of frequency bins the analyser reports (half the window).
pub const BIN_COUNT: usize = 128;

// Band boundaries as bin indices: bass [0,4), mid [4,16), treble [16,32).
pub const BASS_END: usize = 4;
pub const MID_END: usize = 16;
pub const TREBLE_END: usize = 32;

/// Per-band energy for one frame. Every field is in \[0, 1\].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AudioSnapshot {
    pub bass: f32,
    pub mid: f32,
    pub treble: f32,
    pub total: f32,
}

impl AudioSnapshot {
    /// Silence. Returned whenever no spectrum is available.
    pub const ZERO: AudioSnapshot = AudioSnapshot {
        bass: 0.0,
        mid: 0.0,
        treble: 0.0,
        total: 0.0,
    };
}

/// Collapse a 0-255 byte spectrum into normalized band means.
///
/// A spectrum shorter than the treble boundary yields `AudioSnapshot::ZERO`
/// rather than an error, so the render loop keeps running on silence when no
/// capture is wired up (or the device vanished mid-run).
pub fn snapshot_from_spectrum(spectrum: &[u8]) -> AudioSnapshot {
    if spectrum.len() < TREBLE_END {
        return AudioSnapshot::ZERO;
    }
    let mean =
        |bins: &[u8]| bins.iter().map(|&v| v as f32).sum::<f32>() / bins.len() as f32 / 255.0;
    AudioSnapshot {
        bass: mean(&spectrum[..BASS_END]),
        mid: mean(&spectrum[BASS_END..MID_END]),
        treble: mean(&spectrum[MID_END..TREBLE_END]),
        total: mean(spectrum),
    }
}
