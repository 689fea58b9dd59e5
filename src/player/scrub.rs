//! Scrub-bar interaction handling.
//!
//! Translates raw pointer geometry into domain values and drives the two
//! timeline behaviors: hover preview (non-committal) and drag-to-seek
//! (committed). While a drag is active the controller owns a capture
//! session; the embedding must route document-scope pointer events to
//! [`ScrubController::drag_move`] / [`ScrubController::drag_end`] until the
//! session is released, so drags that leave the bar keep tracking.

use crate::player::state::ScrubState;
use crate::spritemap::CueIndex;

/// Scrub-bar geometry in the embedding's pointer coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarGeometry {
    /// Left edge of the bar
    pub left: f64,
    /// Bar width; a non-positive width makes every operation a no-op
    pub width: f64,
}

impl BarGeometry {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    /// Pointer position as a bar fraction clamped to `[0, 1]`.
    ///
    /// Returns `None` for degenerate geometry (zero or negative width) so
    /// NaN/infinity never reach displayed state.
    fn progress_at(&self, pointer_x: f64) -> Option<f64> {
        if !(self.width.is_finite() && self.width > 0.0) || !pointer_x.is_finite() {
            return None;
        }

        Some(((pointer_x - self.left) / self.width).clamp(0.0, 1.0))
    }
}

/// Geometry captured once at drag start.
///
/// Moves reuse it instead of re-querying the bar, so mid-drag layout shifts
/// cannot skew the mapping.
#[derive(Debug, Clone)]
struct DragSession {
    bar: BarGeometry,
    duration: f64,
}

/// Pointer-to-time translation for the scrub bar.
#[derive(Debug, Default)]
pub struct ScrubController {
    state: ScrubState,
    drag: Option<DragSession>,
}

impl ScrubController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ScrubState {
        &self.state
    }

    /// Whether a drag capture session is active. While true, the embedding
    /// must feed all pointer moves/releases to this controller, regardless
    /// of which element they land on.
    pub fn is_capturing(&self) -> bool {
        self.drag.is_some()
    }

    /// Pointer moved over the bar: update the hover preview.
    ///
    /// When the computed time falls in a gap between cues the previous
    /// preview is kept rather than cleared, so the thumbnail does not
    /// flicker while sweeping across sparse maps.
    pub fn hover_move(
        &mut self,
        pointer_x: f64,
        bar: BarGeometry,
        duration: f64,
        index: &CueIndex,
    ) {
        let Some(progress) = bar.progress_at(pointer_x) else {
            return;
        };
        let time = progress * duration;

        if let Some(cue) = index.lookup(time) {
            self.state.preview = Some(cue.clone());
            self.state.is_hovering = true;
            self.state.hover_time = time;
            self.state.hover_progress = progress;
        }
    }

    /// Pointer left the bar: clear the hover preview.
    pub fn hover_leave(&mut self) {
        self.state.clear_hover();
    }

    /// Begin a drag-to-seek, capturing the bar geometry for the rest of the
    /// drag. Returns the initial seek time, clamped to `[0, duration]`, or
    /// `None` (and no capture) for degenerate geometry.
    pub fn drag_start(
        &mut self,
        pointer_x: f64,
        bar: BarGeometry,
        duration: f64,
    ) -> Option<f64> {
        let progress = bar.progress_at(pointer_x)?;
        let duration = duration.max(0.0);
        let time = (progress * duration).clamp(0.0, duration);

        self.state.is_scrubbing = true;
        self.drag = Some(DragSession { bar, duration });

        Some(time)
    }

    /// Pointer moved while dragging: recompute the seek time from the
    /// geometry captured at drag start. `None` when no drag is active.
    pub fn drag_move(&mut self, pointer_x: f64) -> Option<f64> {
        let drag = self.drag.as_ref()?;
        let progress = drag.bar.progress_at(pointer_x)?;

        Some((progress * drag.duration).clamp(0.0, drag.duration))
    }

    /// End the drag and release the capture session.
    ///
    /// Returns whether a session was actually released; repeated calls are
    /// harmless, so the capture cannot leak or double-release across drags.
    pub fn drag_end(&mut self) -> bool {
        self.state.is_scrubbing = false;
        self.drag.take().is_some()
    }
}
