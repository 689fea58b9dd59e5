//! Shared fixtures for integration tests.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use scrubkit::player::{MediaCommandError, MediaElement};

/// Write `content` into a temp directory and return it with the file path.
/// Keep the `TempDir` alive for the duration of the test.
pub fn temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write fixture");
    (dir, path)
}

/// Sprite map with two contiguous cues over `[0, 10)`.
pub const TWO_CUE_MAP: &str = "WEBVTT\n\n\
    00:00:00.000 --> 00:00:05.000\n\
    sprite_0.webp#xywh=0,0,160,90\n\n\
    00:00:05.000 --> 00:00:10.000\n\
    sprite_0.webp#xywh=160,0,160,90\n";

/// Scripted media element: records every command for assertions.
#[derive(Debug, Default)]
pub struct ScriptedMedia {
    pub time: f64,
    pub duration: f64,
    pub volume: f64,
    pub playing: bool,
    pub reject_play: bool,
    pub seeks: Vec<f64>,
}

impl ScriptedMedia {
    pub fn with_duration(duration: f64) -> Self {
        Self {
            duration,
            volume: 1.0,
            ..Self::default()
        }
    }
}

impl MediaElement for ScriptedMedia {
    fn current_time(&self) -> f64 {
        self.time
    }

    fn set_current_time(&mut self, time: f64) {
        self.time = time;
        self.seeks.push(time);
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn volume(&self) -> f64 {
        self.volume
    }

    fn set_volume(&mut self, volume: f64) {
        self.volume = volume;
    }

    fn play(&mut self) -> Result<(), MediaCommandError> {
        if self.reject_play {
            return Err(MediaCommandError::Rejected {
                reason: "autoplay policy".to_string(),
            });
        }
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) -> Result<(), MediaCommandError> {
        self.playing = false;
        Ok(())
    }
}
