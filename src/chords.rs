//! # Chord Derivation
//!
//! Diatonic chords built by stacking alternate scale members, chord qualities read off
//! the interval structure, and voicing (inversion) rotation.
//!
//! ## Stacking
//! For a scale of `n` degrees, the chord on 0-indexed degree `i` takes the scale
//! members 0, 2, 4 (and 6 for tetrads) steps above it, wrapping modulo `n`. Degrees
//! are 1-indexed in the result.
//!
//! ## Example
//! ```rust
//! use fretmap::{diatonic_triads, rotate_voicing, scale};
//!
//! let major = scale("major").unwrap();
//! let triads = diatonic_triads(major);
//! assert_eq!(triads[5].degrees, vec![6, 1, 3]);
//! assert_eq!(rotate_voicing(&triads[0].degrees, 1), vec![3, 5, 1]);
//! ```

use serde::{Deserialize, Serialize};

use crate::scales::ScaleDef;

/// Minor/major third and diminished/perfect/augmented fifth, in semitones.
const MINOR_THIRD: u8 = 3;
const MAJOR_THIRD: u8 = 4;
const DIMINISHED_FIFTH: u8 = 6;
const PERFECT_FIFTH: u8 = 7;
const AUGMENTED_FIFTH: u8 = 8;
const DIMINISHED_SEVENTH: u8 = 9;
const MINOR_SEVENTH: u8 = 10;
const MAJOR_SEVENTH: u8 = 11;

/// Fewer degrees than this and every triad is reported as major.
const MIN_DEGREES_FOR_QUALITY: usize = 5;

/// A stacked-third chord on one scale degree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordDef {
    /// 1-indexed degree the chord is built on
    pub root_degree: usize,
    /// Chord members as 1-indexed degrees, root first
    pub degrees: Vec<usize>,
}

/// Chord quality of a triad or seventh chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChordQuality {
    #[serde(rename = "maj")]
    Maj,
    #[serde(rename = "min")]
    Min,
    #[serde(rename = "dim")]
    Dim,
    #[serde(rename = "aug")]
    Aug,
    #[serde(rename = "maj7")]
    Maj7,
    #[serde(rename = "min7")]
    Min7,
    #[serde(rename = "dom7")]
    Dom7,
    #[serde(rename = "dim7")]
    Dim7,
    #[serde(rename = "minMaj7")]
    MinMaj7,
    #[serde(rename = "aug7")]
    Aug7,
    #[serde(rename = "half-dim")]
    HalfDim,
}

impl ChordQuality {
    pub const ALL: [ChordQuality; 11] = [
        ChordQuality::Maj,
        ChordQuality::Min,
        ChordQuality::Dim,
        ChordQuality::Aug,
        ChordQuality::Maj7,
        ChordQuality::Min7,
        ChordQuality::Dom7,
        ChordQuality::Dim7,
        ChordQuality::MinMaj7,
        ChordQuality::Aug7,
        ChordQuality::HalfDim,
    ];

    /// Short key, e.g. `"maj"`, `"half-dim"`.
    pub fn key(self) -> &'static str {
        match self {
            ChordQuality::Maj => "maj",
            ChordQuality::Min => "min",
            ChordQuality::Dim => "dim",
            ChordQuality::Aug => "aug",
            ChordQuality::Maj7 => "maj7",
            ChordQuality::Min7 => "min7",
            ChordQuality::Dom7 => "dom7",
            ChordQuality::Dim7 => "dim7",
            ChordQuality::MinMaj7 => "minMaj7",
            ChordQuality::Aug7 => "aug7",
            ChordQuality::HalfDim => "half-dim",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|q| q.key() == key)
    }

    /// Suffix appended to the root name in a chord symbol.
    pub fn suffix(self) -> &'static str {
        match self {
            ChordQuality::Maj => "",
            ChordQuality::Min => "m",
            ChordQuality::Dim => "°",
            ChordQuality::Aug => "+",
            ChordQuality::Maj7 => "maj7",
            ChordQuality::Min7 => "m7",
            ChordQuality::Dom7 => "7",
            ChordQuality::Dim7 => "°7",
            ChordQuality::MinMaj7 => "m(maj7)",
            ChordQuality::Aug7 => "+7",
            ChordQuality::HalfDim => "ø7",
        }
    }
}

/// Inversion: which chord member sits in the bass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Voicing {
    #[default]
    Root,
    First,
    Second,
    Third,
}

impl Voicing {
    /// Left-rotation applied to the chord's degree list.
    pub fn rotation(self) -> usize {
        match self {
            Voicing::Root => 0,
            Voicing::First => 1,
            Voicing::Second => 2,
            Voicing::Third => 3,
        }
    }

    /// Rotate a chord's degrees into this voicing.
    pub fn apply(self, degrees: &[usize]) -> Vec<usize> {
        rotate_voicing(degrees, self.rotation())
    }
}

/// Left-rotate `degrees` by `inversion`, clamped to the list length. The member at
/// index `inversion` becomes the bass. Rotating by the full length (e.g. a third
/// inversion of a triad) gives the list back unchanged.
pub fn rotate_voicing(degrees: &[usize], inversion: usize) -> Vec<usize> {
    let mut rotated = degrees.to_vec();
    let shift = inversion.min(rotated.len());
    rotated.rotate_left(shift);
    rotated
}

/// Chords of `size` stacked members on every degree of the scale.
pub fn stacked_chords(scale: &ScaleDef, size: usize) -> Vec<ChordDef> {
    let n = scale.len();
    (0..n)
        .map(|i| ChordDef {
            root_degree: i + 1,
            degrees: (0..size).map(|step| ((i + 2 * step) % n) + 1).collect(),
        })
        .collect()
}

/// One triad per degree: root, third, fifth.
pub fn diatonic_triads(scale: &ScaleDef) -> Vec<ChordDef> {
    stacked_chords(scale, 3)
}

/// One seventh chord per degree: root, third, fifth, seventh.
pub fn diatonic_tetrads(scale: &ScaleDef) -> Vec<ChordDef> {
    stacked_chords(scale, 4)
}

/// Semitones from the degree at `root_index` up to the member `steps` scale steps above.
fn stacked_interval(scale: &ScaleDef, root_index: usize, steps: usize) -> u8 {
    let n = scale.len();
    let root = scale.intervals[root_index];
    let member = scale.intervals[(root_index + steps) % n];
    (member + 12 - root) % 12
}

/// Triad quality on a 0-indexed degree.
///
/// Major/minor third against diminished/perfect/augmented fifth gives maj, min, dim or
/// aug. Any other combination falls back to min if the third is minor and to maj
/// otherwise, an approximation for exotic scales. Scales
/// with fewer than five degrees always report maj.
pub fn chord_quality(scale: &ScaleDef, degree_index: usize) -> ChordQuality {
    let n = scale.len();
    if n < MIN_DEGREES_FOR_QUALITY || degree_index >= n {
        return ChordQuality::Maj;
    }

    let third = stacked_interval(scale, degree_index, 2);
    let fifth = stacked_interval(scale, degree_index, 4);

    match (third, fifth) {
        (MAJOR_THIRD, AUGMENTED_FIFTH) => ChordQuality::Aug,
        (MINOR_THIRD, DIMINISHED_FIFTH) => ChordQuality::Dim,
        (MINOR_THIRD, PERFECT_FIFTH) => ChordQuality::Min,
        (MAJOR_THIRD, PERFECT_FIFTH) => ChordQuality::Maj,
        (MINOR_THIRD, _) => ChordQuality::Min,
        _ => ChordQuality::Maj,
    }
}

/// Seventh-chord quality on a 0-indexed degree.
///
/// Combinations without a name in [`ChordQuality`] (augmented-major seventh, sus-like
/// stacks from exotic scales) fall back to the triad quality.
pub fn tetrad_quality(scale: &ScaleDef, degree_index: usize) -> ChordQuality {
    let n = scale.len();
    if n < MIN_DEGREES_FOR_QUALITY || degree_index >= n {
        return ChordQuality::Maj;
    }

    let third = stacked_interval(scale, degree_index, 2);
    let fifth = stacked_interval(scale, degree_index, 4);
    let seventh = stacked_interval(scale, degree_index, 6);

    match (third, fifth, seventh) {
        (MAJOR_THIRD, PERFECT_FIFTH, MAJOR_SEVENTH) => ChordQuality::Maj7,
        (MAJOR_THIRD, PERFECT_FIFTH, MINOR_SEVENTH) => ChordQuality::Dom7,
        (MINOR_THIRD, PERFECT_FIFTH, MINOR_SEVENTH) => ChordQuality::Min7,
        (MINOR_THIRD, PERFECT_FIFTH, MAJOR_SEVENTH) => ChordQuality::MinMaj7,
        (MINOR_THIRD, DIMINISHED_FIFTH, MINOR_SEVENTH) => ChordQuality::HalfDim,
        (MINOR_THIRD, DIMINISHED_FIFTH, DIMINISHED_SEVENTH) => ChordQuality::Dim7,
        (MAJOR_THIRD, AUGMENTED_FIFTH, MINOR_SEVENTH) => ChordQuality::Aug7,
        _ => chord_quality(scale, degree_index),
    }
}

/// Triad quality for every degree, in degree order.
pub fn chord_qualities(scale: &ScaleDef) -> Vec<ChordQuality> {
    (0..scale.len()).map(|i| chord_quality(scale, i)).collect()
}

/// Seventh-chord quality for every degree, in degree order.
pub fn tetrad_qualities(scale: &ScaleDef) -> Vec<ChordQuality> {
    (0..scale.len()).map(|i| tetrad_quality(scale, i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scales::scale;

    #[test]
    fn test_major_triads() {
        let triads = diatonic_triads(scale("major").unwrap());
        assert_eq!(triads.len(), 7);
        assert_eq!(triads[0], ChordDef { root_degree: 1, degrees: vec![1, 3, 5] });
        assert_eq!(triads[4].degrees, vec![5, 7, 2]);
        assert_eq!(triads[5], ChordDef { root_degree: 6, degrees: vec![6, 1, 3] });
        assert_eq!(triads[6].degrees, vec![7, 2, 4]);
    }

    #[test]
    fn test_major_tetrads() {
        let tetrads = diatonic_tetrads(scale("major").unwrap());
        assert_eq!(tetrads[0].degrees, vec![1, 3, 5, 7]);
        assert_eq!(tetrads[1].degrees, vec![2, 4, 6, 1]);
        assert_eq!(tetrads[6].degrees, vec![7, 2, 4, 6]);
    }

    #[test]
    fn test_stacking_wraps_short_scales() {
        // 5 degrees: i=3 -> 4, (3+2)%5+1 = 1, (3+4)%5+1 = 3
        let triads = diatonic_triads(scale("pentatonicMinor").unwrap());
        assert_eq!(triads.len(), 5);
        assert_eq!(triads[3].degrees, vec![4, 1, 3]);
    }

    #[test]
    fn test_major_triad_qualities() {
        use ChordQuality::*;
        let major = scale("major").unwrap();
        assert_eq!(chord_qualities(major), vec![Maj, Min, Min, Maj, Maj, Min, Dim]);
    }

    #[test]
    fn test_harmonic_minor_has_augmented_third() {
        use ChordQuality::*;
        let hm = scale("harmonicMinor").unwrap();
        assert_eq!(chord_qualities(hm), vec![Min, Dim, Aug, Min, Maj, Maj, Dim]);
    }

    #[test]
    fn test_short_scales_report_major() {
        // Five degrees is enough to classify: 1-b3-b6 falls back to minor
        let hirajoshi = scale("japanHirajoshi").unwrap();
        assert_eq!(chord_quality(hirajoshi, 0), ChordQuality::Min);

        let triad = scale("minorTriad").unwrap();
        for i in 0..triad.len() {
            assert_eq!(chord_quality(triad, i), ChordQuality::Maj);
        }
    }

    #[test]
    fn test_irregular_intervals_fall_back() {
        // Known approximation for exotic scales
        let enigmatic = scale("enigmatic").unwrap();

        // Degree 2: a fourth and a major sixth over the root, no third at all
        assert_eq!(stacked_interval(enigmatic, 1, 2), 5);
        assert_eq!(stacked_interval(enigmatic, 1, 4), 9);
        assert_eq!(chord_quality(enigmatic, 1), ChordQuality::Maj);

        // Degree 5: minor third over a perfect fourth is still reported as minor
        assert_eq!(stacked_interval(enigmatic, 4, 2), 3);
        assert_eq!(stacked_interval(enigmatic, 4, 4), 5);
        assert_eq!(chord_quality(enigmatic, 4), ChordQuality::Min);
    }

    #[test]
    fn test_major_tetrad_qualities() {
        use ChordQuality::*;
        let major = scale("major").unwrap();
        assert_eq!(
            tetrad_qualities(major),
            vec![Maj7, Min7, Min7, Maj7, Dom7, Min7, HalfDim]
        );
    }

    #[test]
    fn test_harmonic_minor_tetrads() {
        use ChordQuality::*;
        let hm = scale("harmonicMinor").unwrap();
        let q = tetrad_qualities(hm);
        assert_eq!(q[0], MinMaj7);
        assert_eq!(q[4], Dom7);
        assert_eq!(q[6], Dim7);
        // Augmented-major seventh has no name here, falls back to the triad quality
        assert_eq!(q[2], Aug);
    }

    #[test]
    fn test_voicing_rotation() {
        let triad = [1, 3, 5];
        assert_eq!(rotate_voicing(&triad, 0), vec![1, 3, 5]);
        assert_eq!(rotate_voicing(&triad, 1), vec![3, 5, 1]);
        assert_eq!(rotate_voicing(&triad, 2), vec![5, 1, 3]);
        assert_eq!(rotate_voicing(&triad, 3), vec![1, 3, 5]);
        assert_eq!(rotate_voicing(&[1, 3, 5, 7], 3), vec![7, 1, 3, 5]);
        assert!(rotate_voicing(&[], 2).is_empty());
    }

    #[test]
    fn test_voicing_enum() {
        assert_eq!(Voicing::default(), Voicing::Root);
        assert_eq!(Voicing::Second.apply(&[2, 4, 6]), vec![6, 2, 4]);
        assert_eq!(Voicing::Third.rotation(), 3);
    }

    #[test]
    fn test_quality_keys_round_trip() {
        for q in ChordQuality::ALL {
            assert_eq!(ChordQuality::from_key(q.key()), Some(q));
        }
        assert_eq!(ChordQuality::from_key("sus4"), None);
    }
}
