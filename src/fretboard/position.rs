//! Position (box-shape) windowing
//!
//! Collapses a progression overlay into one 5-fret region anchored on the scale root
//! of a reference string.

use super::types::{Fret, FretPosition, PositionBox, PositionWindow, ProgressionOverlay};

/// Frets covered by a position window.
pub const WINDOW_FRETS: Fret = 5;

/// How far below the anchor the window starts.
const WINDOW_LEAD: Fret = 2;

/// Anchors are looked for here first.
const PREFERRED_ANCHOR_FRETS: std::ops::RangeInclusive<Fret> = 1..=12;

/// Scale root (degree 1) on the reference string: the lowest occurrence in frets
/// 1-12, else the lowest anywhere including the open string.
pub fn locate_anchor(positions: &[FretPosition], reference_string: usize) -> Option<FretPosition> {
    let roots = || {
        positions
            .iter()
            .filter(|p| p.string_index == reference_string && p.degree == 1)
    };

    roots()
        .filter(|p| PREFERRED_ANCHOR_FRETS.contains(&p.fret))
        .min_by_key(|p| p.fret)
        .or_else(|| roots().min_by_key(|p| p.fret))
        .copied()
}

/// Window starting two frets below the anchor, clamped at the nut.
pub fn position_window(anchor_fret: Fret) -> PositionWindow {
    let min_fret = anchor_fret.saturating_sub(WINDOW_LEAD);
    PositionWindow {
        min_fret,
        max_fret: min_fret + WINDOW_FRETS - 1,
    }
}

/// Lowest-pitched position carrying `degree`: lowest string first, then lowest fret.
pub fn lowest_position(positions: &[FretPosition], degree: usize) -> Option<FretPosition> {
    positions
        .iter()
        .filter(|p| p.degree == degree)
        .min_by_key(|p| (p.string_index, p.fret))
        .copied()
}

/// Restrict a progression overlay to the box around the scale root.
///
/// `scale_positions` is the full in-scale map; the anchor is located there, since the
/// root need not be a tone of any chord in the progression. Returns `None` when the
/// reference string carries no root within the mapped frets.
pub fn position_box(
    scale_positions: &[FretPosition],
    overlay: &ProgressionOverlay,
    reference_string: usize,
) -> Option<PositionBox> {
    let anchor = locate_anchor(scale_positions, reference_string)?;
    let window = position_window(anchor.fret);

    let positions: Vec<FretPosition> = overlay
        .positions
        .iter()
        .filter(|p| window.contains(p.fret))
        .copied()
        .collect();

    let bass_notes = overlay
        .chords
        .iter()
        .map(|degrees| {
            degrees
                .first()
                .and_then(|&bass| lowest_position(&positions, bass))
        })
        .collect();

    log::debug!(
        "position box frets {}..={} anchored at string {} fret {}, {} positions",
        window.min_fret,
        window.max_fret,
        anchor.string_index,
        anchor.fret,
        positions.len()
    );

    Some(PositionBox {
        window,
        anchor,
        positions,
        bass_notes,
    })
}
