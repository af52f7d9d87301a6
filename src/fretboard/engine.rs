//! Fret-position enumeration and chord-tone filtering
//!
//! Turns a tuning, root and scale into the sparse list of in-scale positions, then
//! narrows that list to the degrees of a chord or of a whole progression.

use std::collections::{BTreeMap, BTreeSet};

use crate::notes::{normalize, PitchClass};

use super::types::{Fret, FretPosition, ProgressionOverlay};

/// Pitch classes of a scale in degree order.
pub fn scale_pitch_classes(root_pc: PitchClass, intervals: &[u8]) -> Vec<PitchClass> {
    intervals
        .iter()
        .map(|&i| normalize(root_pc as i32 + i as i32))
        .collect()
}

/// 1-indexed degree of `pc` in the scale, `0` if it is not a member. The first
/// matching interval wins.
pub fn degree_of(pc: PitchClass, root_pc: PitchClass, intervals: &[u8]) -> usize {
    let pc = normalize(pc as i32);
    scale_pitch_classes(root_pc, intervals)
        .iter()
        .position(|&member| member == pc)
        .map_or(0, |idx| idx + 1)
}

/// Every in-scale position for frets `0..=max_fret` on every string.
///
/// Out-of-scale frets are omitted. Ordered by string index, then fret.
///
/// # Example
/// ```
/// use fretmap::compute_fret_positions;
///
/// // One string tuned to C, C major
/// let positions = compute_fret_positions(&[0], 12, 0, &[0, 2, 4, 5, 7, 9, 11]);
/// let frets: Vec<u32> = positions.iter().map(|p| p.fret).collect();
/// assert_eq!(frets, vec![0, 2, 4, 5, 7, 9, 11, 12]);
/// assert_eq!(positions[7].degree, 1);
/// ```
pub fn compute_fret_positions(
    tuning: &[PitchClass],
    max_fret: Fret,
    root_pc: PitchClass,
    intervals: &[u8],
) -> Vec<FretPosition> {
    let members = scale_pitch_classes(root_pc, intervals);
    let mut positions = Vec::new();

    for (string_index, &open_pc) in tuning.iter().enumerate() {
        for fret in 0..=max_fret {
            let pitch_class = normalize(open_pc as i32 + (fret % 12) as i32);
            if let Some(idx) = members.iter().position(|&m| m == pitch_class) {
                positions.push(FretPosition {
                    string_index,
                    fret,
                    pitch_class,
                    degree: idx + 1,
                });
            }
        }
    }

    log::trace!(
        "{} in-scale positions over {} strings, frets 0..={}",
        positions.len(),
        tuning.len(),
        max_fret
    );
    positions
}

/// Positions whose degree is one of `degrees`, order preserved.
pub fn filter_chord_tones(positions: &[FretPosition], degrees: &[usize]) -> Vec<FretPosition> {
    positions
        .iter()
        .filter(|p| degrees.contains(&p.degree))
        .copied()
        .collect()
}

/// Union of chord tones across a progression, with the chord membership of each degree.
///
/// `chords` holds each chord's degrees already rotated into the active voicing.
pub fn progression_overlay(positions: &[FretPosition], chords: &[Vec<usize>]) -> ProgressionOverlay {
    let mut degree_chords: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for (chord_index, degrees) in chords.iter().enumerate() {
        for &degree in degrees {
            let members = degree_chords.entry(degree).or_default();
            if !members.contains(&chord_index) {
                members.push(chord_index);
            }
        }
    }

    let union: BTreeSet<usize> = degree_chords.keys().copied().collect();
    let positions = positions
        .iter()
        .filter(|p| union.contains(&p.degree))
        .copied()
        .collect();

    ProgressionOverlay {
        chords: chords.to_vec(),
        positions,
        degree_chords,
    }
}
