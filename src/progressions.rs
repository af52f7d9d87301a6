//! # Progression Catalog
//!
//! Named chord progressions per scale. Numerals are 1-indexed scale degrees naming the
//! root of each chord in turn, so "I-IV-V" is `[1, 4, 5]`.
//!
//! Only 7-degree scales have progressions. [`supports_progressions`] checks both the
//! degree count and table membership.
//!
//! ## Example
//! ```rust
//! use fretmap::progressions::{scale_progressions, supports_progressions};
//!
//! assert!(supports_progressions("major"));
//! assert!(!supports_progressions("pentatonicMajor"));
//!
//! let major = scale_progressions("major").unwrap();
//! assert_eq!(major.progressions[0].name, "I-IV-V");
//! assert_eq!(major.progressions[0].numerals, &[1, 4, 5]);
//! ```

use serde::Serialize;

use crate::chords::{chord_qualities, tetrad_quality, ChordQuality};
use crate::notes::{chord_name, normalize, PitchClass};
use crate::scales::{scale, ScaleDef};

/// Degree count required for progression support.
pub const PROGRESSION_SCALE_DEGREES: usize = 7;

/// A named sequence of chord-root degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Progression {
    pub name: &'static str,
    pub numerals: &'static [usize],
}

/// Per-degree triad qualities plus the progressions available for one scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleProgressions {
    pub chord_qualities: Vec<ChordQuality>,
    pub progressions: &'static [Progression],
}

macro_rules! prog {
    ($name:literal, [$($d:literal),+]) => {
        Progression { name: $name, numerals: &[$($d),+] }
    };
}

const MAJOR_PROGRESSIONS: &[Progression] = &[
    prog!("I-IV-V", [1, 4, 5]),
    prog!("I-V-vi-IV", [1, 5, 6, 4]),
    prog!("ii-V-I", [2, 5, 1]),
    prog!("I-vi-IV-V", [1, 6, 4, 5]),
    prog!("I-IV-vi-V", [1, 4, 6, 5]),
];

static SCALE_PROGRESSIONS: &[(&str, &[Progression])] = &[
    // Church modes
    ("major", MAJOR_PROGRESSIONS),
    ("ionian", MAJOR_PROGRESSIONS),
    ("dorian", &[
        prog!("i-IV", [1, 4]),
        prog!("i-ii-IV", [1, 2, 4]),
        prog!("i-IV-v", [1, 4, 5]),
        prog!("i-bVII-IV", [1, 7, 4]),
    ]),
    ("phrygian", &[
        prog!("i-bII", [1, 2]),
        prog!("i-bVII-bVI-bII", [1, 7, 6, 2]),
        prog!("i-bII-i", [1, 2, 1]),
        prog!("i-bII-bVII", [1, 2, 7]),
    ]),
    ("lydian", &[
        prog!("I-II", [1, 2]),
        prog!("I-II-viio", [1, 2, 7]),
        prog!("I-II-iii", [1, 2, 3]),
        prog!("I-II-V", [1, 2, 5]),
    ]),
    ("mixolydian", &[
        prog!("I-bVII-IV", [1, 7, 4]),
        prog!("I-bVII", [1, 7]),
        prog!("I-IV-bVII", [1, 4, 7]),
        prog!("I-ii-bVII", [1, 2, 7]),
    ]),
    ("aeolian", &[
        prog!("i-iv-v", [1, 4, 5]),
        prog!("i-bVII-bVI", [1, 7, 6]),
        prog!("i-iv-bVII", [1, 4, 7]),
        prog!("i-bVI-bVII", [1, 6, 7]),
        prog!("i-bVI-bIII-bVII", [1, 6, 3, 7]),
    ]),
    ("locrian", &[
        prog!("io-bII", [1, 2]),
        prog!("io-bII-biii", [1, 2, 3]),
        prog!("io-bV-bII", [1, 5, 2]),
    ]),
    // Harmonic minor modes
    ("harmonicMinor", &[
        prog!("i-iv-V", [1, 4, 5]),
        prog!("i-bVI-V", [1, 6, 5]),
        prog!("i-iv-V-i", [1, 4, 5, 1]),
        prog!("i-viio-V", [1, 7, 5]),
        prog!("bVI-V-i", [6, 5, 1]),
    ]),
    ("locrianNat6", &[
        prog!("io-bII-VI", [1, 2, 6]),
        prog!("io-VI-bII", [1, 6, 2]),
        prog!("io-bV-VI", [1, 5, 6]),
    ]),
    ("ionianSharp5", &[
        prog!("I+-IV", [1, 4]),
        prog!("I+-ii-IV", [1, 2, 4]),
        prog!("I+-V-IV", [1, 5, 4]),
    ]),
    ("dorianSharp4", &[
        prog!("i-II-IV", [1, 2, 4]),
        prog!("i-#ivo-bVII", [1, 4, 7]),
        prog!("i-II-v", [1, 2, 5]),
    ]),
    ("phrygianDom", &[
        prog!("I-bII", [1, 2]),
        prog!("I-bII-bvii", [1, 2, 7]),
        prog!("I-bvii-bVI-bII", [1, 7, 6, 2]),
        prog!("I-iv-bII", [1, 4, 2]),
    ]),
    ("lydianSharp2", &[
        prog!("I-#II-#IV", [1, 2, 4]),
        prog!("I-iii-#II", [1, 3, 2]),
        prog!("I-V-#II", [1, 5, 2]),
    ]),
    ("ultralocrian", &[
        prog!("io-bII-biii", [1, 2, 3]),
        prog!("io-bV-bVI", [1, 5, 6]),
        prog!("io-biii-bV", [1, 3, 5]),
    ]),
    // Melodic minor modes
    ("melodicMinorAsc", &[
        prog!("i-ii-V", [1, 2, 5]),
        prog!("i-IV-V", [1, 4, 5]),
        prog!("i-ii-viio", [1, 2, 7]),
        prog!("i-IV-viio", [1, 4, 7]),
    ]),
    ("dorianb2", &[
        prog!("i-bII-IV", [1, 2, 4]),
        prog!("i-IV-v", [1, 4, 5]),
        prog!("i-bII-bVII", [1, 2, 7]),
    ]),
    ("lydianAug", &[
        prog!("I+-II", [1, 2]),
        prog!("I+-II-iii", [1, 2, 3]),
        prog!("I+-#ivo-II", [1, 4, 2]),
    ]),
    ("lydianDom", &[
        prog!("I7-II", [1, 2]),
        prog!("I7-II-viio", [1, 2, 7]),
        prog!("I7-bVII-II", [1, 7, 2]),
        prog!("I7-iii-II", [1, 3, 2]),
    ]),
    ("mixolydianb6", &[
        prog!("I-bVI-bVII", [1, 6, 7]),
        prog!("I-iv-bVII", [1, 4, 7]),
        prog!("I-bVI-v", [1, 6, 5]),
    ]),
    ("locrianNat2", &[
        prog!("io-ii-bV", [1, 2, 5]),
        prog!("io-bIII-bVII", [1, 3, 7]),
        prog!("io-ii-bVII", [1, 2, 7]),
    ]),
    ("altered", &[
        prog!("I7alt-bII", [1, 2]),
        prog!("I7alt-bV-bII", [1, 5, 2]),
        prog!("I7alt-#IV-bII", [1, 4, 2]),
    ]),
    // Exotic heptatonic
    ("doubleHarmonic", &[
        prog!("I-bII-I", [1, 2, 1]),
        prog!("I-bVI-bII", [1, 6, 2]),
        prog!("I-iv-bII", [1, 4, 2]),
        prog!("I-V-bII", [1, 5, 2]),
    ]),
    ("neapolitanMinor", &[
        prog!("i-bII-V", [1, 2, 5]),
        prog!("i-bVI-V", [1, 6, 5]),
        prog!("i-iv-bII", [1, 4, 2]),
    ]),
    ("neapolitanMajor", &[
        prog!("I-bII-V", [1, 2, 5]),
        prog!("I-IV-bII", [1, 4, 2]),
        prog!("I-vi-bII", [1, 6, 2]),
    ]),
    ("hungarianMinor", &[
        prog!("i-#iv°-V", [1, 4, 5]),
        prog!("i-bVI-V", [1, 6, 5]),
        prog!("i-#iv°-bVI", [1, 4, 6]),
    ]),
    ("hungarianMajor", &[
        prog!("I-#II-#IV", [1, 2, 4]),
        prog!("I-vi-bVII", [1, 6, 7]),
        prog!("I-#II-vi", [1, 2, 6]),
    ]),
    ("persian", &[
        prog!("I-bII-bV", [1, 2, 5]),
        prog!("I-bVI-bII", [1, 6, 2]),
        prog!("I-iv-bII", [1, 4, 2]),
    ]),
    ("enigmatic", &[
        prog!("I-bII-#IV", [1, 2, 4]),
        prog!("I-#V-bVII", [1, 5, 6]),
        prog!("I-bII-VII", [1, 2, 7]),
    ]),
];

fn table_entry(scale_id: &str) -> Option<&'static [Progression]> {
    SCALE_PROGRESSIONS
        .iter()
        .find(|(id, _)| *id == scale_id)
        .map(|(_, progressions)| *progressions)
}

/// Qualities and progressions for a scale, or `None` if the scale has no table entry
/// or does not have seven degrees.
pub fn scale_progressions(scale_id: &str) -> Option<ScaleProgressions> {
    let progressions = table_entry(scale_id)?;
    let scale = scale(scale_id).ok()?;
    if scale.len() != PROGRESSION_SCALE_DEGREES {
        return None;
    }
    Some(ScaleProgressions {
        chord_qualities: chord_qualities(scale),
        progressions,
    })
}

/// True iff the scale exists, has seven degrees and has a progression table.
pub fn supports_progressions(scale_id: &str) -> bool {
    scale(scale_id).is_ok_and(|s| s.len() == PROGRESSION_SCALE_DEGREES)
        && table_entry(scale_id).is_some()
}

/// Look up one progression of a scale by name.
pub fn find_progression(scale_id: &str, name: &str) -> Option<&'static Progression> {
    table_entry(scale_id)?.iter().find(|p| p.name == name)
}

/// Chord symbols for a progression in a key. Triads unless `sevenths` is set.
/// Numerals outside the scale are skipped.
///
/// ```
/// use fretmap::progressions::{find_progression, progression_chord_names};
/// use fretmap::scale;
///
/// let major = scale("major").unwrap();
/// let one_four_five = find_progression("major", "I-IV-V").unwrap();
/// assert_eq!(progression_chord_names(major, one_four_five, 4, true, false), ["E", "A", "B"]);
/// ```
pub fn progression_chord_names(
    scale: &ScaleDef,
    progression: &Progression,
    root_pc: PitchClass,
    prefer_sharps: bool,
    sevenths: bool,
) -> Vec<String> {
    let qualities = chord_qualities(scale);
    progression
        .numerals
        .iter()
        .filter_map(|&degree| {
            let index = degree.checked_sub(1)?;
            let interval = *scale.intervals.get(index)?;
            let quality = if sevenths {
                tetrad_quality(scale, index)
            } else {
                qualities[index]
            };
            let chord_root = normalize(root_pc as i32 + interval as i32);
            Some(chord_name(chord_root as i32, quality, prefer_sharps))
        })
        .collect()
}
