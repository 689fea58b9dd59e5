//! Sprite-map parsing and writing.
//!
//! A sprite map is a WebVTT-style timed-text file mapping time ranges to
//! rectangular crops of a sprite-sheet image:
//!
//! ```text
//! WEBVTT
//!
//! 00:00:00.000 --> 00:00:02.000
//! sprite_0.webp#xywh=0,0,160,90
//! ```
//!
//! This module provides types and functions for working with sprite maps:
//! the [`Cue`] value type, the resilient parser, a writer producing the same
//! layout the sprite generator emits, and a grid builder for synthesizing
//! maps from a tiling description.

mod grid;
mod index;
mod timestamp;

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::warn;

pub use grid::GridLayout;
pub use index::CueIndex;
pub use timestamp::{format_timestamp, parse_timestamp};

/// One sprite-sheet crop, valid for the half-open time range `[start, end)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Cue {
    /// Range start in seconds (inclusive)
    pub start: f64,
    /// Range end in seconds (exclusive)
    pub end: f64,
    /// Sprite-sheet image the crop comes from
    pub sprite_url: String,
    /// Crop left edge in pixels
    pub x: u32,
    /// Crop top edge in pixels
    pub y: u32,
    /// Crop width in pixels
    pub w: u32,
    /// Crop height in pixels
    pub h: u32,
}

/// A parsed sprite map: cues in file order.
#[derive(Debug, Clone, Default)]
pub struct SpriteMap {
    pub cues: Vec<Cue>,
}

impl SpriteMap {
    /// Parse a sprite map from a path.
    pub fn parse<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file =
            fs::File::open(path).with_context(|| format!("Failed to open file: {:?}", path))?;
        let reader = BufReader::new(file);

        Self::parse_reader(reader)
    }

    /// Parse a sprite map from a reader.
    pub fn parse_reader<R: BufRead>(mut reader: R) -> Result<Self> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .context("Failed to read sprite map")?;

        Ok(Self::parse_str(&text))
    }

    /// Parse a sprite map from text.
    ///
    /// Never fails: malformed cue blocks are skipped (and logged) and the
    /// cues successfully parsed so far are kept, so a damaged file degrades
    /// to a partial map rather than an error. Cues are appended in file
    /// order; no sorting is performed.
    pub fn parse_str(text: &str) -> Self {
        let lines: Vec<&str> = text.lines().collect();
        let mut cues = Vec::new();

        let mut i = 0;
        while i < lines.len() {
            let line = lines[i].trim();

            if let Some((start_raw, end_raw)) = line.split_once("-->") {
                // The cue target is the next non-blank line.
                let mut j = i + 1;
                while j < lines.len() && lines[j].trim().is_empty() {
                    j += 1;
                }

                if j >= lines.len() {
                    // Trailing marker with no target: discard, not an error.
                    break;
                }

                if let Some((url, [x, y, w, h])) = parse_target(lines[j].trim()) {
                    match (parse_timestamp(start_raw), parse_timestamp(end_raw)) {
                        (Some(start), Some(end)) if start < end => {
                            cues.push(Cue {
                                start,
                                end,
                                sprite_url: url.to_string(),
                                x,
                                y,
                                w,
                                h,
                            });
                        }
                        _ => {
                            warn!(line = i + 1, "skipping cue with unusable time range");
                        }
                    }

                    // Resume after the consumed target line so it is not
                    // reprocessed as a new marker.
                    i = j;
                }
            }

            i += 1;
        }

        SpriteMap { cues }
    }

    /// Write the sprite map to a path.
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut file =
            fs::File::create(path).with_context(|| format!("Failed to create file: {:?}", path))?;

        self.write_to(&mut file)
    }

    /// Write the sprite map to a writer, in the generator's layout:
    /// a `WEBVTT` header then one blank-line-separated block per cue.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        writeln!(writer, "WEBVTT")?;
        writeln!(writer)?;

        for cue in &self.cues {
            writeln!(
                writer,
                "{} --> {}",
                format_timestamp(cue.start),
                format_timestamp(cue.end)
            )?;
            writeln!(
                writer,
                "{}#xywh={},{},{},{}",
                cue.sprite_url, cue.x, cue.y, cue.w, cue.h
            )?;
            writeln!(writer)?;
        }

        Ok(())
    }

    /// Convert to a VTT document string.
    pub fn to_vtt_string(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    pub fn len(&self) -> usize {
        self.cues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }
}

/// Split a cue target line into its URL prefix and `#xywh=` crop suffix.
///
/// The URL may itself contain `#`, so the crop suffix is anchored at the
/// last `#xywh=` occurrence and must run to the end of the line as exactly
/// four comma-separated non-negative integers.
fn parse_target(line: &str) -> Option<(&str, [u32; 4])> {
    let (url, suffix) = line.rsplit_once("#xywh=")?;

    let mut values = [0u32; 4];
    let mut fields = suffix.split(',');

    for slot in &mut values {
        let field = fields.next()?;
        if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        *slot = field.parse().ok()?;
    }

    if fields.next().is_some() {
        return None;
    }

    Some((url, values))
}
