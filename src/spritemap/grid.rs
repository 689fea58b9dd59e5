//! Sprite-map synthesis from a tiling description.
//!
//! Sprite generators lay thumbnails out on fixed grids: one frame every
//! `interval` seconds, tiled left-to-right, top-to-bottom, rolling over to a
//! numbered sheet when a grid fills up. Given that description this module
//! produces the same cue list the generator writes alongside its sheets,
//! which is useful for tests and for players that know the layout without
//! having the map file at hand.

use super::{Cue, SpriteMap};

/// Fixed-grid sprite-sheet layout.
#[derive(Debug, Clone)]
pub struct GridLayout {
    /// Tiles per row on each sheet
    pub cols: u32,
    /// Rows per sheet
    pub rows: u32,
    /// Tile width in pixels
    pub tile_width: u32,
    /// Tile height in pixels
    pub tile_height: u32,
    /// Sheet file stem; sheet k is named `{stem}_{k}.{extension}`
    pub sheet_stem: String,
    /// Sheet file extension (no leading dot)
    pub extension: String,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            cols: 10,
            rows: 10,
            tile_width: 160,
            tile_height: 90,
            sheet_stem: "sprite".to_string(),
            extension: "webp".to_string(),
        }
    }
}

impl GridLayout {
    fn sheet_url(&self, sheet: u32) -> String {
        format!("{}_{}.{}", self.sheet_stem, sheet, self.extension)
    }
}

impl SpriteMap {
    /// Build the cue list for a grid-tiled sprite set.
    ///
    /// Frame `k` covers `[k * interval, min(duration, (k + 1) * interval))`
    /// and maps to tile `k % (cols * rows)` of sheet `k / (cols * rows)`.
    /// A non-positive duration or interval, or an empty grid, yields an
    /// empty map.
    pub fn from_grid(layout: &GridLayout, duration: f64, interval: f64) -> Self {
        let per_sheet = layout.cols * layout.rows;
        if duration <= 0.0 || interval <= 0.0 || per_sheet == 0 {
            return SpriteMap::default();
        }

        let total_frames = (duration / interval).ceil() as u32;
        let mut cues = Vec::with_capacity(total_frames as usize);

        for frame in 0..total_frames {
            let start = f64::from(frame) * interval;
            let end = (start + interval).min(duration);
            if start >= end {
                break;
            }

            let pos = frame % per_sheet;
            let row = pos / layout.cols;
            let col = pos % layout.cols;

            cues.push(Cue {
                start,
                end,
                sprite_url: layout.sheet_url(frame / per_sheet),
                x: col * layout.tile_width,
                y: row * layout.tile_height,
                w: layout.tile_width,
                h: layout.tile_height,
            });
        }

        SpriteMap { cues }
    }
}
