//! Time-to-cue lookup for scrub previews.

use tracing::debug;

use super::{Cue, SpriteMap};

/// Immutable time-ordered cue sequence with point-in-range lookup.
///
/// Built once per video source from parser output and queried on every
/// pointer move. The parser emits file-ordered, time-ascending cues, so the
/// sequence is stored as-is; should a source violate that, [`lookup`]
/// resolves overlap by taking the first matching cue in stored order.
///
/// [`lookup`]: CueIndex::lookup
#[derive(Debug, Clone, Default)]
pub struct CueIndex {
    cues: Vec<Cue>,
}

impl CueIndex {
    pub fn new(map: SpriteMap) -> Self {
        debug!(cues = map.cues.len(), "built cue index");
        Self { cues: map.cues }
    }

    /// Find the cue active at `time`: the first stored cue with
    /// `time >= start && time < end` (start inclusive, end exclusive).
    ///
    /// Sprite maps carry tens to low hundreds of cues, so a linear scan is
    /// cheap enough for per-pointer-move query rates.
    pub fn lookup(&self, time: f64) -> Option<&Cue> {
        self.cues.iter().find(|c| time >= c.start && time < c.end)
    }

    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }

    pub fn len(&self) -> usize {
        self.cues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }
}

impl From<SpriteMap> for CueIndex {
    fn from(map: SpriteMap) -> Self {
        Self::new(map)
    }
}
