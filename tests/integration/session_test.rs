//! End-to-end player session scenarios.

use super::helpers::{temp_file, ScriptedMedia, TWO_CUE_MAP};
use scrubkit::config::PlayerConfig;
use scrubkit::player::{BarGeometry, HoverPlayState, MediaEvent, PlayerSession};

fn file_backed_session() -> (tempfile::TempDir, PlayerSession<ScriptedMedia>) {
    let (dir, path) = temp_file("thumbnails.vtt", TWO_CUE_MAP);
    let config = PlayerConfig {
        sprite_map: path.to_string_lossy().into_owned(),
        poster: Some("poster.jpg".to_string()),
        initial_volume: 1.0,
    };

    let mut session = PlayerSession::new(ScriptedMedia::with_duration(10.0), config);
    session.load_sprite_map();
    session.handle_media_event(MediaEvent::MetadataLoaded(10.0));

    (dir, session)
}

fn bar() -> BarGeometry {
    BarGeometry::new(0.0, 100.0)
}

#[test]
fn hover_preview_from_file_backed_map() {
    let (_dir, mut session) = file_backed_session();

    session.scrub_hover_move(60.0, bar());

    let rect = session.preview().expect("preview for t = 6.0");
    assert_eq!(rect.sprite_url, "sprite_0.webp");
    assert_eq!(rect.crop_x, 160);
    assert_eq!(session.scrub_state().hover_progress, 0.6);
}

#[test]
fn full_drag_interaction_script() {
    let (_dir, mut session) = file_backed_session();

    // Pointer enters the player: hover autoplay kicks in. The mirror
    // follows native events, so the element confirms with a Play event.
    session.pointer_enter_player();
    session.handle_media_event(MediaEvent::Play);
    assert!(session.playback().is_playing);

    // Press at 30%: pause + seek to 3.0, capture begins.
    session.scrub_press(30.0, bar());
    session.handle_media_event(MediaEvent::Pause);
    assert_eq!(session.playback().current_time, 3.0);
    assert!(session.is_capturing());

    // Drag far past the bar; seeks clamp to the duration.
    session.pointer_moved(250.0);
    assert_eq!(session.playback().current_time, 10.0);

    // Native ticks mid-drag are dropped.
    session.handle_media_event(MediaEvent::TimeAdvanced(4.2));
    assert_eq!(session.playback().current_time, 10.0);

    // Release while still over the player: playback resumes.
    session.pointer_released();
    session.handle_media_event(MediaEvent::Play);
    assert!(!session.is_capturing());
    assert_eq!(session.hover_play_state(), HoverPlayState::HoverPlaying);
    assert!(session.playback().is_playing);

    // Ticks drive the display again.
    session.handle_media_event(MediaEvent::TimeAdvanced(10.4));
    assert_eq!(session.playback().current_time, 10.4);
}

#[test]
fn autoplay_sequence_ending_idle() {
    let (_dir, mut session) = file_backed_session();

    session.pointer_enter_player();
    session.scrub_press(50.0, bar());
    session.pointer_leave_player();
    session.pointer_released();

    assert_eq!(session.hover_play_state(), HoverPlayState::Idle);
    assert!(!session.playback().is_playing);
}

#[test]
fn repeated_drags_do_not_leak_capture() {
    let (_dir, mut session) = file_backed_session();

    for _ in 0..5 {
        session.scrub_press(20.0, bar());
        assert!(session.is_capturing());
        session.pointer_moved(40.0);
        session.pointer_released();
        assert!(!session.is_capturing());
    }

    // A stray release after the drags is harmless.
    session.pointer_released();
    assert!(!session.is_capturing());
}

#[test]
fn hover_after_drag_still_previews() {
    let (_dir, mut session) = file_backed_session();

    session.scrub_press(50.0, bar());
    session.pointer_released();

    session.scrub_hover_move(10.0, bar());
    assert_eq!(session.preview().unwrap().crop_x, 0);

    session.scrub_hover_leave();
    assert!(session.preview().is_none());
}

#[test]
fn poster_available_through_config() {
    let (_dir, session) = file_backed_session();
    assert_eq!(session.config().poster.as_deref(), Some("poster.jpg"));
}

#[test]
fn rejected_autoplay_degrades_gracefully() {
    let (_dir, path) = temp_file("thumbnails.vtt", TWO_CUE_MAP);
    let media = ScriptedMedia {
        reject_play: true,
        ..ScriptedMedia::with_duration(10.0)
    };
    let config = PlayerConfig {
        sprite_map: path.to_string_lossy().into_owned(),
        ..PlayerConfig::default()
    };
    let mut session = PlayerSession::new(media, config);
    session.load_sprite_map();
    session.handle_media_event(MediaEvent::MetadataLoaded(10.0));

    session.pointer_enter_player();

    // Preview and seek keep working with playback refused.
    session.scrub_hover_move(25.0, bar());
    assert!(session.preview().is_some());

    session.scrub_press(70.0, bar());
    assert_eq!(session.playback().current_time, 7.0);
    session.pointer_released();
    assert_eq!(session.hover_play_state(), HoverPlayState::HoverPlaying);
    assert!(!session.playback().is_playing);
}
