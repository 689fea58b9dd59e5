//! Timestamp conversion for sprite-map files.
//!
//! Sprite maps use `HH:MM:SS.mmm` timestamps. Hours are unbounded (a long
//! video may exceed 23), and the minute/second fields accept any numeric
//! form that parses as a float.

/// Parse an `HH:MM:SS.mmm` timestamp into seconds.
///
/// Returns `None` for anything that does not cleanly convert: wrong number
/// of fields, non-numeric fields, negative or non-finite components. A cue
/// with an unparseable timestamp is unusable and must be discarded by the
/// caller rather than carried forward as a NaN.
pub fn parse_timestamp(raw: &str) -> Option<f64> {
    let mut fields = raw.trim().split(':');

    let hours: f64 = fields.next()?.parse().ok()?;
    let minutes: f64 = fields.next()?.parse().ok()?;
    let seconds: f64 = fields.next()?.parse().ok()?;

    if fields.next().is_some() {
        return None;
    }

    let total = hours * 3600.0 + minutes * 60.0 + seconds;

    if !total.is_finite() || hours < 0.0 || minutes < 0.0 || seconds < 0.0 {
        return None;
    }

    Some(total)
}

/// Format seconds as `HH:MM:SS.mmm`, the form the writer emits.
pub fn format_timestamp(seconds: f64) -> String {
    let seconds = seconds.max(0.0);
    let hours = (seconds / 3600.0).floor();
    let rem = seconds - hours * 3600.0;
    let minutes = (rem / 60.0).floor();
    let secs = rem - minutes * 60.0;

    format!("{:02}:{:02}:{:06.3}", hours as u64, minutes as u64, secs)
}
