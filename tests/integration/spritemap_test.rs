//! Integration tests for sprite-map parsing from disk.

use super::helpers::{temp_file, TWO_CUE_MAP};
use scrubkit::spritemap::{CueIndex, GridLayout, SpriteMap};

#[test]
fn parses_sprite_map_from_file() {
    let (dir, path) = temp_file("thumbnails.vtt", TWO_CUE_MAP);

    let map = SpriteMap::parse(&path).expect("parse fixture");

    assert_eq!(map.len(), 2);
    assert_eq!(map.cues[0].sprite_url, "sprite_0.webp");
    assert_eq!(map.cues[1].start, 5.0);

    drop(dir);
}

#[test]
fn parse_fails_for_missing_file() {
    let result = SpriteMap::parse("/nonexistent/thumbnails.vtt");
    assert!(result.is_err());
}

#[test]
fn damaged_file_degrades_to_partial_map() {
    let damaged = "WEBVTT\n\n\
        00:00:00.000 --> 00:00:05.000\n\
        sprite_0.webp#xywh=0,0,160,90\n\n\
        garbage line\n\
        00:00:05.000 --> oops\n\
        sprite_0.webp#xywh=160,0,160,90\n\n\
        00:00:10.000 --> 00:00:15.000\n\
        sprite_0.webp#xywh=320,0,160,90\n";
    let (dir, path) = temp_file("thumbnails.vtt", damaged);

    let map = SpriteMap::parse(&path).expect("parse never fails on content");

    // First and third blocks survive; the block with the bad end time is
    // dropped without aborting the parse.
    assert_eq!(map.len(), 2);
    assert_eq!(map.cues[0].x, 0);
    assert_eq!(map.cues[1].x, 320);

    drop(dir);
}

#[test]
fn written_map_parses_back_from_disk() {
    let map = SpriteMap::from_grid(&GridLayout::default(), 30.0, 2.0);
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("generated.vtt");

    map.write(&path).expect("write map");
    let reparsed = SpriteMap::parse(&path).expect("reparse map");

    assert_eq!(reparsed.cues, map.cues);
}

#[test]
fn file_backed_index_answers_lookups() {
    let (dir, path) = temp_file("thumbnails.vtt", TWO_CUE_MAP);

    let index = CueIndex::new(SpriteMap::parse(&path).unwrap());

    assert_eq!(index.lookup(2.5).unwrap().x, 0);
    assert_eq!(index.lookup(5.0).unwrap().x, 160);
    assert!(index.lookup(10.0).is_none());

    drop(dir);
}
