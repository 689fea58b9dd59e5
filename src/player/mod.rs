//! Player core: playback state, scrub interaction, and the bridge to the
//! native media element.

pub mod bridge;
pub mod render;
pub mod scrub;
pub mod session;
pub mod state;

pub use bridge::{MediaCommandError, MediaElement, MediaEvent, PlaybackBridge};
pub use render::{format_time, playback_progress, PreviewRect};
pub use scrub::{BarGeometry, ScrubController};
pub use session::PlayerSession;
pub use state::{HoverPlayState, PlaybackCommand, PlaybackState, ScrubState};
