//! Progress percentage helpers.

use crate::geometry::Rect;
use crate::report::report_if;

/// Percentage value meaning "no progress bar"
pub const NO_PROGRESS: i32 = -1;

/// Returns 0% - 100%
pub fn calc_perc(current: i32, total: i32) -> i32 {
    report_if(total <= 0 || current < 0, "calc_perc: invalid current/total");
    report_if(total < current, "calc_perc: current exceeds total");
    let total = if total <= 0 { 1 } else { total };
    let perc = (100_i64 * current as i64 / total as i64).clamp(0, 100);
    perc as i32
}

pub fn is_valid_percent(perc: i32) -> bool {
    (0..=100).contains(&perc)
}

/// Filled part of a progress bar drawn inside `track`, inset by 2 px.
pub fn progress_fill(track: Rect, perc: i32) -> Rect {
    let perc = perc.clamp(0, 100);
    Rect::new(
        track.x + 2,
        track.y + 2,
        (track.dx - 3).max(0) * perc / 100,
        (track.dy - 3).max(0),
    )
}
