//! Playback bridge: the narrow adapter between the player core and the
//! native media primitive.
//!
//! The core never decodes or renders video. It issues commands through
//! [`MediaElement`] and reacts to [`MediaEvent`] notifications pushed back
//! by the embedding's event glue.

use tracing::warn;

/// Why a native playback command was rejected.
#[derive(Debug, thiserror::Error)]
pub enum MediaCommandError {
    /// The backend refused the command, e.g. a browser autoplay policy
    /// rejecting `play()` without a user gesture.
    #[error("Playback command rejected: {reason}")]
    Rejected { reason: String },

    /// No media source is loaded yet.
    #[error("No media loaded")]
    NoMedia,
}

/// The native playback primitive, as seen by the core.
///
/// Mirrors the narrow surface of a media element: readable/writable
/// position and volume, read-only duration, and play/pause commands that
/// may be rejected.
pub trait MediaElement {
    fn current_time(&self) -> f64;
    fn set_current_time(&mut self, time: f64);
    fn duration(&self) -> f64;
    fn volume(&self) -> f64;
    fn set_volume(&mut self, volume: f64);
    fn play(&mut self) -> Result<(), MediaCommandError>;
    fn pause(&mut self) -> Result<(), MediaCommandError>;
}

/// State-change notification from the native element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaEvent {
    /// Media metadata loaded; carries the duration in seconds
    MetadataLoaded(f64),
    /// Playback position advanced; carries the new time in seconds
    TimeAdvanced(f64),
    /// Playback started
    Play,
    /// Playback stopped
    Pause,
}

/// Command-issuing wrapper around a [`MediaElement`].
///
/// Clamps seeks and volume writes to their valid ranges and downgrades
/// command rejections to log lines: a refused `play()` (autoplay policy)
/// must never break the interaction loop.
#[derive(Debug)]
pub struct PlaybackBridge<M> {
    media: M,
}

impl<M: MediaElement> PlaybackBridge<M> {
    pub fn new(media: M) -> Self {
        Self { media }
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    pub fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }

    pub fn current_time(&self) -> f64 {
        self.media.current_time()
    }

    pub fn duration(&self) -> f64 {
        self.media.duration()
    }

    /// Seek to `time`, clamped to `[0, duration]`. Non-finite input is
    /// ignored. Returns the position actually written.
    pub fn seek(&mut self, time: f64) -> f64 {
        if !time.is_finite() {
            return self.media.current_time();
        }

        let clamped = time.clamp(0.0, self.media.duration().max(0.0));
        self.media.set_current_time(clamped);
        clamped
    }

    /// Set the volume, clamped to `[0, 1]`. Non-finite input is ignored.
    pub fn set_volume(&mut self, volume: f64) -> f64 {
        if !volume.is_finite() {
            return self.media.volume();
        }

        let clamped = volume.clamp(0.0, 1.0);
        self.media.set_volume(clamped);
        clamped
    }

    /// Issue `play()`; a rejection is logged and swallowed.
    pub fn play(&mut self) {
        if let Err(err) = self.media.play() {
            warn!(error = %err, "play command rejected");
        }
    }

    /// Issue `pause()`; a rejection is logged and swallowed.
    pub fn pause(&mut self) {
        if let Err(err) = self.media.pause() {
            warn!(error = %err, "pause command rejected");
        }
    }
}
