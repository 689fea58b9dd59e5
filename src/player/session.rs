//! Player session orchestration.
//!
//! `PlayerSession` wires the cue index, the scrub controller, the playback
//! bridge, and the hover-autoplay state machine into one single-threaded
//! unit. The embedding feeds it pointer events and native media
//! notifications and reads back display state; all methods take `&mut self`
//! and run on the embedding's event loop.

use tracing::warn;

use crate::config::PlayerConfig;
use crate::player::bridge::{MediaElement, MediaEvent, PlaybackBridge};
use crate::player::render::{format_time, playback_progress, PreviewRect};
use crate::player::scrub::{BarGeometry, ScrubController};
use crate::player::state::{HoverPlayState, PlaybackCommand, PlaybackState, ScrubState};
use crate::spritemap::{CueIndex, SpriteMap};

/// One player instance: sources, playback mirror, and timeline interaction.
#[derive(Debug)]
pub struct PlayerSession<M> {
    config: PlayerConfig,
    bridge: PlaybackBridge<M>,
    index: CueIndex,
    playback: PlaybackState,
    scrub: ScrubController,
    hover_play: HoverPlayState,
    pointer_over_player: bool,
}

impl<M: MediaElement> PlayerSession<M> {
    pub fn new(media: M, config: PlayerConfig) -> Self {
        let mut bridge = PlaybackBridge::new(media);
        let volume = bridge.set_volume(config.initial_volume);

        Self {
            config,
            bridge,
            index: CueIndex::default(),
            playback: PlaybackState::new(volume),
            scrub: ScrubController::new(),
            hover_play: HoverPlayState::default(),
            pointer_over_player: false,
        }
    }

    // === Sources ===

    /// Load the configured sprite map from disk.
    ///
    /// Any failure degrades to an empty index: the scrub preview goes dark
    /// but seeking and playback stay fully functional.
    pub fn load_sprite_map(&mut self) {
        match SpriteMap::parse(&self.config.sprite_map) {
            Ok(map) => self.set_sprite_map(map),
            Err(err) => {
                warn!(
                    source = %self.config.sprite_map,
                    error = %err,
                    "sprite map unavailable, preview disabled"
                );
                self.index = CueIndex::default();
            }
        }
    }

    /// Install a sprite map fetched by the embedding.
    ///
    /// Replaces the index atomically; when racing fetches resolve out of
    /// order the last installed map wins.
    pub fn set_sprite_map(&mut self, map: SpriteMap) {
        self.index = CueIndex::new(map);
    }

    /// Install a sprite map from raw text, e.g. a fetched response body.
    pub fn set_sprite_map_text(&mut self, text: &str) {
        self.set_sprite_map(SpriteMap::parse_str(text));
    }

    /// Point the session at a different sprite map and rebuild the index.
    pub fn replace_sprite_map_source(&mut self, source: impl Into<String>) {
        self.config.sprite_map = source.into();
        self.load_sprite_map();
    }

    // === Accessors ===

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    pub fn playback(&self) -> &PlaybackState {
        &self.playback
    }

    pub fn scrub_state(&self) -> &ScrubState {
        self.scrub.state()
    }

    pub fn cue_index(&self) -> &CueIndex {
        &self.index
    }

    pub fn hover_play_state(&self) -> HoverPlayState {
        self.hover_play
    }

    /// Whether a drag capture session is active; while true the embedding
    /// must route document-scope pointer moves and releases to
    /// [`pointer_moved`] / [`pointer_released`].
    ///
    /// [`pointer_moved`]: PlayerSession::pointer_moved
    /// [`pointer_released`]: PlayerSession::pointer_released
    pub fn is_capturing(&self) -> bool {
        self.scrub.is_capturing()
    }

    /// The thumbnail crop to draw for the current hover, if any.
    pub fn preview(&self) -> Option<PreviewRect> {
        self.scrub.state().preview.as_ref().map(PreviewRect::from)
    }

    /// Playback position as a fraction of the duration, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        playback_progress(&self.playback)
    }

    /// `current / total` time label, e.g. `01:05 / 61:01`.
    pub fn time_label(&self) -> String {
        format!(
            "{} / {}",
            format_time(self.playback.current_time),
            format_time(self.playback.duration)
        )
    }

    // === Player surface hover (autoplay) ===

    /// Pointer entered the player surface.
    pub fn pointer_enter_player(&mut self) {
        self.pointer_over_player = true;
        let command = self.hover_play.on_player_enter();
        self.issue(command);
    }

    /// Pointer left the player surface.
    pub fn pointer_leave_player(&mut self) {
        self.pointer_over_player = false;
        let command = self.hover_play.on_player_leave();
        self.issue(command);
    }

    // === Scrub bar ===

    /// Pointer moved over the scrub bar: update the hover preview.
    pub fn scrub_hover_move(&mut self, pointer_x: f64, bar: BarGeometry) {
        self.scrub
            .hover_move(pointer_x, bar, self.playback.duration, &self.index);
    }

    /// Pointer left the scrub bar.
    pub fn scrub_hover_leave(&mut self) {
        self.scrub.hover_leave();
    }

    /// Pointer pressed on the scrub bar: pause, seek, and begin capturing
    /// pointer events for the drag.
    pub fn scrub_press(&mut self, pointer_x: f64, bar: BarGeometry) {
        let Some(time) = self.scrub.drag_start(pointer_x, bar, self.playback.duration) else {
            return;
        };

        let command = self.hover_play.on_drag_start();
        self.issue(command);
        self.playback.current_time = self.bridge.seek(time);
    }

    /// Captured pointer move during a drag: seek from the geometry recorded
    /// at press time. A no-op when no drag is active.
    pub fn pointer_moved(&mut self, pointer_x: f64) {
        if let Some(time) = self.scrub.drag_move(pointer_x) {
            self.playback.current_time = self.bridge.seek(time);
        }
    }

    /// Captured pointer release: end the drag and resume playback if the
    /// pointer is still over the player surface.
    pub fn pointer_released(&mut self) {
        if self.scrub.drag_end() {
            let command = self.hover_play.on_drag_end(self.pointer_over_player);
            self.issue(command);
        }
    }

    // === Native notifications ===

    /// Apply a state-change notification from the native element.
    ///
    /// `TimeAdvanced` is dropped, not queued, while a drag is in progress:
    /// the user-driven seek position wins over concurrently arriving
    /// playback ticks, so the displayed time cannot jitter mid-drag.
    pub fn handle_media_event(&mut self, event: MediaEvent) {
        match event {
            MediaEvent::MetadataLoaded(duration) => {
                if duration.is_finite() && duration >= 0.0 {
                    self.playback.duration = duration;
                }
            }
            MediaEvent::TimeAdvanced(time) => {
                if !self.scrub.state().is_scrubbing && time.is_finite() {
                    self.playback.current_time = time;
                }
            }
            MediaEvent::Play => self.playback.is_playing = true,
            MediaEvent::Pause => self.playback.is_playing = false,
        }
    }

    // === Volume ===

    /// Set the volume, clamped to `[0, 1]`, and mirror the applied value.
    pub fn set_volume(&mut self, volume: f64) {
        self.playback.volume = self.bridge.set_volume(volume);
    }

    fn issue(&mut self, command: Option<PlaybackCommand>) {
        match command {
            Some(PlaybackCommand::Play) => self.bridge.play(),
            Some(PlaybackCommand::Pause) => self.bridge.pause(),
            None => {}
        }
    }
}
