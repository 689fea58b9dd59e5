//! UI-facing output values.
//!
//! The crate renders nothing itself; this module shapes the numbers and
//! rectangles an embedding needs to draw the time label, the progress bars,
//! and the cropped thumbnail preview.

use crate::player::state::PlaybackState;
use crate::spritemap::Cue;

/// Format seconds as `MM:SS`: minutes unbounded, seconds zero-padded.
///
/// Negative and non-finite input formats as `00:00`.
pub fn format_time(seconds: f64) -> String {
    let total_secs = if seconds.is_finite() && seconds > 0.0 {
        seconds as u64
    } else {
        0
    };
    let mins = total_secs / 60;
    let secs = total_secs % 60;
    format!("{:02}:{:02}", mins, secs)
}

/// Sprite-sheet crop for rendering the hover thumbnail.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewRect {
    /// Sprite-sheet image to crop from
    pub sprite_url: String,
    pub crop_x: u32,
    pub crop_y: u32,
    pub crop_w: u32,
    pub crop_h: u32,
}

impl From<&Cue> for PreviewRect {
    fn from(cue: &Cue) -> Self {
        Self {
            sprite_url: cue.sprite_url.clone(),
            crop_x: cue.x,
            crop_y: cue.y,
            crop_w: cue.w,
            crop_h: cue.h,
        }
    }
}

/// Playback position as a fraction of the duration, in `[0, 1]`.
///
/// Zero while the duration is unknown, so a bar never renders from a
/// division by zero.
pub fn playback_progress(state: &PlaybackState) -> f64 {
    if state.duration > 0.0 && state.duration.is_finite() {
        (state.current_time / state.duration).clamp(0.0, 1.0)
    } else {
        0.0
    }
}
