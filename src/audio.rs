//! Live microphone capture feeding the band analyser.
//!
//! `acquire` is the only suspending operation in the whole app: it waits for
//! the user's permission decision, then wires the media stream into an
//! `AnalyserNode`. Everything downstream is synchronous byte-spectrum reads.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

use crate::core::analysis::{snapshot_from_spectrum, AudioSnapshot, BIN_COUNT, FFT_SIZE};

/// Why microphone acquisition failed. Denial is terminal for the attempt but
/// retryable; nothing else gets constructed until acquisition succeeds.
#[derive(Debug, thiserror::Error)]
pub enum MicError {
    #[error("microphone permission denied")]
    PermissionDenied,
    #[error("no usable audio input device")]
    DeviceUnavailable,
    #[error("audio capture unavailable: {0}")]
    Unsupported(String),
}

impl MicError {
    /// Message surfaced in the start overlay.
    pub fn user_message(&self) -> String {
        match self {
            MicError::PermissionDenied => {
                "Microphone access was denied. Allow audio permission and press start again."
                    .to_string()
            }
            MicError::DeviceUnavailable => {
                "No usable microphone was found. Connect one and press start again.".to_string()
            }
            MicError::Unsupported(detail) => {
                format!("Audio capture is unavailable in this browser ({detail}).")
            }
        }
    }
}

/// A live microphone hooked to a frequency analyser.
///
/// Holding one implies acquisition succeeded; if the device disappears
/// mid-run the analyser keeps answering with silence and the visuals sink to
/// their baseline instead of erroring.
pub struct MicAnalyzer {
    audio_ctx: web::AudioContext,
    stream: web::MediaStream,
    analyser: web::AnalyserNode,
    /// Reusable byte-spectrum buffer sized to the analyser's bin count.
    spectrum: Vec<u8>,
}

impl MicAnalyzer {
    /// Request the microphone and build the analysis chain.
    pub async fn acquire() -> Result<Self, MicError> {
        let window =
            web::window().ok_or_else(|| MicError::Unsupported("no window".to_string()))?;
        let devices = window
            .navigator()
            .media_devices()
            .map_err(|_| MicError::Unsupported("media devices API missing".to_string()))?;

        let constraints = web::MediaStreamConstraints::new();
        constraints.set_audio(&JsValue::TRUE);
        let promise = devices
            .get_user_media_with_constraints(&constraints)
            .map_err(|e| MicError::Unsupported(format!("{e:?}")))?;
        let stream_js = JsFuture::from(promise).await.map_err(classify_acquire_error)?;
        let stream: web::MediaStream = stream_js
            .dyn_into()
            .map_err(|_| MicError::Unsupported("unexpected getUserMedia result".to_string()))?;

        let audio_ctx = web::AudioContext::new()
            .map_err(|e| MicError::Unsupported(format!("AudioContext: {e:?}")))?;
        let source = audio_ctx
            .create_media_stream_source(&stream)
            .map_err(|e| MicError::Unsupported(format!("stream source: {e:?}")))?;
        let analyser = web::AnalyserNode::new(&audio_ctx)
            .map_err(|e| MicError::Unsupported(format!("analyser: {e:?}")))?;
        analyser.set_fft_size(FFT_SIZE);
        source
            .connect_with_audio_node(&analyser)
            .map_err(|e| MicError::Unsupported(format!("connect: {e:?}")))?;

        let spectrum = vec![0u8; analyser.frequency_bin_count() as usize];
        debug_assert_eq!(spectrum.len(), BIN_COUNT);
        log::info!("microphone acquired ({} bins)", spectrum.len());

        Ok(Self {
            audio_ctx,
            stream,
            analyser,
            spectrum,
        })
    }

    /// Pull the current byte spectrum and reduce it to band energies.
    pub fn sample(&mut self) -> AudioSnapshot {
        self.analyser.get_byte_frequency_data(&mut self.spectrum);
        snapshot_from_spectrum(&self.spectrum)
    }

    /// Stop the capture tracks and close the audio context.
    pub fn close(&self) {
        for track in self.stream.get_tracks().iter() {
            if let Ok(track) = track.dyn_into::<web::MediaStreamTrack>() {
                track.stop();
            }
        }
        _ = self.audio_ctx.close();
    }
}

impl Drop for MicAnalyzer {
    fn drop(&mut self) {
        self.close();
    }
}

fn classify_acquire_error(err: JsValue) -> MicError {
    if let Some(ex) = err.dyn_ref::<web::DomException>() {
        match ex.name().as_str() {
            "NotAllowedError" | "SecurityError" => MicError::PermissionDenied,
            "NotFoundError" | "NotReadableError" | "OverconstrainedError" | "AbortError" => {
                MicError::DeviceUnavailable
            }
            other => MicError::Unsupported(format!("{}: {}", other, ex.message())),
        }
    } else {
        MicError::Unsupported(format!("{err:?}"))
    }
}
