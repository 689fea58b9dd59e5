//! Player state management.
//!
//! Contains the mirrored `PlaybackState`, the transient `ScrubState`, and
//! the hover-autoplay state machine shared by the scrub controller and the
//! playback bridge glue.

use crate::spritemap::Cue;

/// Playback command a state transition asks the bridge to issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackCommand {
    Play,
    Pause,
}

/// Read-only mirror of the native playback state.
///
/// Owned by the player session and updated from bridge notifications and
/// user seeks. While a drag is in progress, native time notifications do not
/// touch `current_time`; the user-driven value wins.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    /// Current playback position in seconds
    pub current_time: f64,
    /// Media duration in seconds, known once metadata loads
    pub duration: f64,
    /// Whether the native element reports itself playing
    pub is_playing: bool,
    /// Volume in `[0, 1]`
    pub volume: f64,
}

impl PlaybackState {
    pub fn new(volume: f64) -> Self {
        Self {
            current_time: 0.0,
            duration: 0.0,
            is_playing: false,
            volume: volume.clamp(0.0, 1.0),
        }
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new(1.0)
    }
}

/// Transient timeline-interaction state.
///
/// Exists only while the user interacts with the scrub bar; reset on
/// pointer leave and drag end.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrubState {
    /// Whether a drag-to-seek is in progress
    pub is_scrubbing: bool,
    /// Whether the pointer is hovering the scrub bar
    pub is_hovering: bool,
    /// Time under the pointer, in seconds
    pub hover_time: f64,
    /// Pointer position as a fraction of the bar, in `[0, 1]`
    pub hover_progress: f64,
    /// Sprite crop to preview, if any
    pub preview: Option<Cue>,
}

impl ScrubState {
    /// Clear hover state on pointer leave.
    pub fn clear_hover(&mut self) {
        self.is_hovering = false;
        self.hover_progress = 0.0;
        self.preview = None;
    }
}

/// Hover-driven autoplay state machine.
///
/// Playback follows the pointer: entering the player surface starts
/// playback, leaving stops it, and a drag pauses until release. Transitions
/// return the command to issue; the machine itself moves on pointer events
/// only, so a rejected native command never desynchronizes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverPlayState {
    /// Pointer away from the player, playback stopped
    #[default]
    Idle,
    /// Pointer over the player, playback running
    HoverPlaying,
    /// Drag in progress, playback held paused
    ScrubPaused,
}

impl HoverPlayState {
    /// Pointer entered the player surface.
    pub fn on_player_enter(&mut self) -> Option<PlaybackCommand> {
        match self {
            HoverPlayState::Idle => {
                *self = HoverPlayState::HoverPlaying;
                Some(PlaybackCommand::Play)
            }
            // Mid-drag re-entry resolves at drag end.
            _ => None,
        }
    }

    /// Pointer left the player surface.
    pub fn on_player_leave(&mut self) -> Option<PlaybackCommand> {
        match self {
            HoverPlayState::HoverPlaying => {
                *self = HoverPlayState::Idle;
                Some(PlaybackCommand::Pause)
            }
            // A drag keeps its paused state until release.
            _ => None,
        }
    }

    /// A drag-to-seek started.
    pub fn on_drag_start(&mut self) -> Option<PlaybackCommand> {
        match self {
            HoverPlayState::ScrubPaused => None,
            _ => {
                *self = HoverPlayState::ScrubPaused;
                Some(PlaybackCommand::Pause)
            }
        }
    }

    /// The drag ended; resume only if the pointer is still over the player.
    pub fn on_drag_end(&mut self, pointer_over_player: bool) -> Option<PlaybackCommand> {
        if pointer_over_player {
            *self = HoverPlayState::HoverPlaying;
            Some(PlaybackCommand::Play)
        } else {
            *self = HoverPlayState::Idle;
            None
        }
    }
}
