//! Scrub-preview timeline engine for video players.
//!
//! As a pointer hovers or drags across a progress bar, a player shows a
//! small thumbnail for the time under the pointer, cropped out of a
//! sprite-sheet image described by a WebVTT-style sprite map. This crate
//! implements the headless core of that interaction:
//!
//! - [`spritemap`] parses sprite maps into time-ranged crop rectangles
//!   ([`spritemap::Cue`]) and answers time lookups ([`spritemap::CueIndex`]).
//! - [`player`] turns pointer geometry into hover previews and
//!   drag-to-seek commands, coordinates them with hover-driven autoplay,
//!   and mirrors native playback state without races between user-driven
//!   and playback-driven time updates.
//!
//! Video decoding, network fetching, and layout are the embedding's job:
//! the core talks to playback through the [`player::MediaElement`] trait
//! and receives native state changes as [`player::MediaEvent`] values.
//!
//! ```
//! use scrubkit::config::PlayerConfig;
//! use scrubkit::player::{BarGeometry, MediaEvent, PlayerSession};
//! # use scrubkit::player::{MediaCommandError, MediaElement};
//! # #[derive(Default)]
//! # struct NullMedia { time: f64, duration: f64, volume: f64 }
//! # impl MediaElement for NullMedia {
//! #     fn current_time(&self) -> f64 { self.time }
//! #     fn set_current_time(&mut self, t: f64) { self.time = t; }
//! #     fn duration(&self) -> f64 { self.duration }
//! #     fn volume(&self) -> f64 { self.volume }
//! #     fn set_volume(&mut self, v: f64) { self.volume = v; }
//! #     fn play(&mut self) -> Result<(), MediaCommandError> { Ok(()) }
//! #     fn pause(&mut self) -> Result<(), MediaCommandError> { Ok(()) }
//! # }
//! # let media = NullMedia { duration: 10.0, ..Default::default() };
//!
//! let mut session = PlayerSession::new(media, PlayerConfig::default());
//! session.set_sprite_map_text(
//!     "00:00:00.000 --> 00:00:05.000\nsprite.jpg#xywh=0,0,160,90\n",
//! );
//! session.handle_media_event(MediaEvent::MetadataLoaded(10.0));
//!
//! session.scrub_hover_move(25.0, BarGeometry::new(0.0, 100.0));
//! let preview = session.preview().unwrap();
//! assert_eq!(preview.sprite_url, "sprite.jpg");
//! ```

pub mod config;
pub mod player;
pub mod spritemap;

pub use config::PlayerConfig;
pub use player::{BarGeometry, MediaElement, MediaEvent, PlayerSession};
pub use spritemap::{Cue, CueIndex, SpriteMap};
