//! Fretboard engine type definitions
//!
//! Every value here is derived from the current parameters and rebuilt on each
//! evaluation; nothing is cached or mutated in place.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::notes::PitchClass;

/// Fret number, `0` is the open string.
pub type Fret = u32;

/// One in-scale note on the neck.
///
/// # Fields
/// - `string_index`: index into the tuning, `0` = lowest-pitched string
/// - `fret`: fret number, `0` = open
/// - `pitch_class`: `normalize(tuning[string_index] + fret)`
/// - `degree`: 1-indexed scale degree of `pitch_class`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FretPosition {
    pub string_index: usize,
    pub fret: Fret,
    pub pitch_class: PitchClass,
    pub degree: usize,
}

impl FretPosition {
    pub fn key(&self) -> PositionKey {
        PositionKey {
            string_index: self.string_index,
            fret: self.fret,
        }
    }
}

/// (string, fret) coordinate used to flag positions for emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionKey {
    pub string_index: usize,
    pub fret: Fret,
}

/// A single playable chord fingering: one note per string from the bass string up.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordShape {
    pub bass: FretPosition,
    /// Ordered by string index, bass first
    pub positions: Vec<FretPosition>,
}

impl ChordShape {
    pub fn min_fret(&self) -> Fret {
        self.positions.iter().map(|p| p.fret).min().unwrap_or(self.bass.fret)
    }

    pub fn max_fret(&self) -> Fret {
        self.positions.iter().map(|p| p.fret).max().unwrap_or(self.bass.fret)
    }

    /// Highest minus lowest fret.
    pub fn span(&self) -> Fret {
        self.max_fret() - self.min_fret()
    }

    /// Distinct degrees sounded by the shape.
    pub fn degrees(&self) -> BTreeSet<usize> {
        self.positions.iter().map(|p| p.degree).collect()
    }
}

/// Inclusive fret range of a position box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionWindow {
    pub min_fret: Fret,
    pub max_fret: Fret,
}

impl PositionWindow {
    pub fn contains(&self, fret: Fret) -> bool {
        (self.min_fret..=self.max_fret).contains(&fret)
    }
}

/// Chord tones of a whole progression laid over the neck.
///
/// # Fields
/// - `chords`: each chord's degrees under the active voicing, bass first
/// - `positions`: positions carrying a degree of any chord
/// - `degree_chords`: for each degree, every chord index it belongs to, ascending
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressionOverlay {
    pub chords: Vec<Vec<usize>>,
    pub positions: Vec<FretPosition>,
    pub degree_chords: BTreeMap<usize, Vec<usize>>,
}

impl ProgressionOverlay {
    /// Chord indices a degree belongs to; empty if it is in none.
    pub fn chords_for(&self, degree: usize) -> &[usize] {
        self.degree_chords
            .get(&degree)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The first chord claiming the degree, used for its base color.
    pub fn primary_chord(&self, degree: usize) -> Option<usize> {
        self.chords_for(degree).first().copied()
    }
}

/// A progression collapsed into one box-shaped region of the neck.
///
/// # Fields
/// - `window`: the 5-fret range
/// - `anchor`: scale root on the reference string that fixed the window
/// - `positions`: progression positions inside the window
/// - `bass_notes`: per progression chord, the lowest-pitched position of its bass degree
///   inside the window, `None` if the window has none
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionBox {
    pub window: PositionWindow,
    pub anchor: FretPosition,
    pub positions: Vec<FretPosition>,
    pub bass_notes: Vec<Option<FretPosition>>,
}

impl PositionBox {
    pub fn bass_keys(&self) -> BTreeSet<PositionKey> {
        self.bass_notes.iter().flatten().map(FretPosition::key).collect()
    }
}
