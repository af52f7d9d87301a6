//! # Scale Catalog
//!
//! Static table of named scales. Each scale is a strictly increasing list of semitone
//! offsets from the root (first entry `0`, all within `0..=11`) plus one display label
//! per degree.
//!
//! Some ids share interval content on purpose (`major`/`ionian`,
//! `phrygianDom`/`spanishGypsy`, ...). Use [`scale_options`] for a selection list
//! without duplicates.
//!
//! ## Example
//! ```rust
//! use fretmap::scale;
//!
//! let dorian = scale("dorian").unwrap();
//! assert_eq!(dorian.intervals, &[0, 2, 3, 5, 7, 9, 10]);
//! assert_eq!(dorian.degree_labels[2], "b3");
//! ```

use serde::Serialize;

use crate::error::FretError;

/// A named scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleDef {
    pub id: &'static str,
    pub name: &'static str,
    /// Semitones above the root, strictly increasing, starting at 0
    pub intervals: &'static [u8],
    /// One display label per interval
    pub degree_labels: &'static [&'static str],
}

macro_rules! scale {
    ($id:literal, $name:literal, [$($i:literal),+], [$($l:literal),+]) => {
        ScaleDef {
            id: $id,
            name: $name,
            intervals: &[$($i),+],
            degree_labels: &[$($l),+],
        }
    };
}

/// Every scale, in selection-list order.
pub static SCALES: &[ScaleDef] = &[
    // 7-note diatonic (church modes)
    scale!("major", "Major", [0, 2, 4, 5, 7, 9, 11], ["1", "2", "3", "4", "5", "6", "7"]),
    scale!("ionian", "Major (Ionian)", [0, 2, 4, 5, 7, 9, 11], ["1", "2", "3", "4", "5", "6", "7"]),
    scale!("dorian", "Dorian", [0, 2, 3, 5, 7, 9, 10], ["1", "2", "b3", "4", "5", "6", "b7"]),
    scale!("phrygian", "Phrygian", [0, 1, 3, 5, 7, 8, 10], ["1", "b2", "b3", "4", "5", "b6", "b7"]),
    scale!("lydian", "Lydian", [0, 2, 4, 6, 7, 9, 11], ["1", "2", "3", "#4", "5", "6", "7"]),
    scale!("mixolydian", "Mixolydian", [0, 2, 4, 5, 7, 9, 10], ["1", "2", "3", "4", "5", "6", "b7"]),
    scale!("aeolian", "Natural Minor (Aeolian)", [0, 2, 3, 5, 7, 8, 10], ["1", "2", "b3", "4", "5", "b6", "b7"]),
    scale!("locrian", "Locrian", [0, 1, 3, 5, 6, 8, 10], ["1", "b2", "b3", "4", "b5", "b6", "b7"]),
    // Harmonic minor and its modes
    scale!("harmonicMinor", "Harmonic Minor", [0, 2, 3, 5, 7, 8, 11], ["1", "2", "b3", "4", "5", "b6", "7"]),
    scale!("locrianNat6", "Locrian ♮6 (HM mode 2)", [0, 1, 3, 5, 6, 9, 10], ["1", "b2", "b3", "4", "b5", "6", "b7"]),
    scale!("ionianSharp5", "Ionian ♯5 (HM mode 3)", [0, 2, 4, 5, 8, 9, 11], ["1", "2", "3", "4", "♯5", "6", "7"]),
    scale!("dorianSharp4", "Dorian ♯4 (HM mode 4)", [0, 2, 3, 6, 7, 9, 10], ["1", "2", "b3", "♯4", "5", "6", "b7"]),
    scale!("phrygianDom", "Phrygian Dominant (HM5)", [0, 1, 4, 5, 7, 8, 10], ["1", "b2", "3", "4", "5", "b6", "b7"]),
    scale!("lydianSharp2", "Lydian ♯2 (HM mode 6)", [0, 3, 4, 6, 7, 9, 11], ["1", "♯2", "3", "♯4", "5", "6", "7"]),
    scale!("ultralocrian", "Ultralocrian (HM mode 7)", [0, 1, 3, 4, 6, 8, 9], ["1", "b2", "b3", "3", "b5", "b6", "6"]),
    // Melodic minor (ascending) and its modes
    scale!("melodicMinorAsc", "Melodic Minor (asc)", [0, 2, 3, 5, 7, 9, 11], ["1", "2", "b3", "4", "5", "6", "7"]),
    scale!("dorianb2", "Dorian b2 (MM mode 2)", [0, 1, 3, 5, 7, 9, 10], ["1", "b2", "b3", "4", "5", "6", "b7"]),
    scale!("lydianAug", "Lydian Augmented", [0, 2, 4, 6, 8, 9, 11], ["1", "2", "3", "♯4", "♯5", "6", "7"]),
    scale!("lydianDom", "Lydian Dominant", [0, 2, 4, 6, 7, 9, 10], ["1", "2", "3", "♯4", "5", "6", "b7"]),
    scale!("mixolydianb6", "Mixolydian b6", [0, 2, 4, 5, 7, 8, 10], ["1", "2", "3", "4", "5", "b6", "b7"]),
    scale!("locrianNat2", "Locrian ♮2", [0, 2, 3, 5, 6, 8, 10], ["1", "2", "b3", "4", "b5", "b6", "b7"]),
    scale!("altered", "Altered (Super-Locrian)", [0, 1, 3, 4, 6, 8, 10], ["1", "b2", "b3", "3", "b5", "b6", "b7"]),
    // Pentatonic families
    scale!("pentatonicMajor", "Pentatonic (Major)", [0, 2, 4, 7, 9], ["1", "2", "3", "5", "6"]),
    scale!("pentatonicMinor", "Pentatonic (Minor)", [0, 3, 5, 7, 10], ["1", "b3", "4", "5", "b7"]),
    scale!("pentatonicBlues", "Blues (Minor Pent + b5)", [0, 3, 5, 6, 7, 10], ["1", "b3", "4", "b5", "5", "b7"]),
    scale!("japanInSen", "Japanese In Sen", [0, 1, 5, 7, 10], ["1", "b2", "4", "5", "b7"]),
    scale!("japanHirajoshi", "Hirajoshi", [0, 2, 3, 7, 8], ["1", "2", "b3", "5", "b6"]),
    // Symmetric / synthetic
    scale!("wholeTone", "Whole Tone", [0, 2, 4, 6, 8, 10], ["1", "2", "3", "♯4/♭5", "♯5", "b7"]),
    scale!("diminishedHW", "Diminished (H-W)", [0, 1, 3, 4, 6, 7, 9, 10], ["1", "b2", "#2/♭3", "3", "b5", "5", "6", "b7"]),
    scale!("diminishedWH", "Diminished (W-H)", [0, 2, 3, 5, 6, 8, 9, 11], ["1", "2", "b3", "4", "b5", "♭6/#5", "6", "7"]),
    scale!("chromatic", "Chromatic (12-tone)", [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11], ["1", "b2", "2", "b3", "3", "4", "b5", "5", "♯5/♭6", "6", "b7", "7"]),
    // Exotic heptatonic
    scale!("doubleHarmonic", "Double Harmonic (Byzantine)", [0, 1, 4, 5, 7, 8, 11], ["1", "b2", "3", "4", "5", "b6", "7"]),
    scale!("neapolitanMinor", "Neapolitan Minor", [0, 1, 3, 5, 7, 8, 11], ["1", "b2", "b3", "4", "5", "b6", "7"]),
    scale!("neapolitanMajor", "Neapolitan Major", [0, 1, 3, 5, 7, 9, 11], ["1", "b2", "b3", "4", "5", "6", "7"]),
    scale!("hungarianMinor", "Hungarian Minor", [0, 2, 3, 6, 7, 8, 11], ["1", "2", "b3", "♯4", "5", "b6", "7"]),
    scale!("hungarianMajor", "Hungarian Major", [0, 3, 4, 6, 7, 9, 10], ["1", "♯2", "3", "♯4", "5", "6", "b7"]),
    scale!("persian", "Persian", [0, 1, 4, 5, 6, 8, 11], ["1", "b2", "3", "4", "b5", "b6", "7"]),
    scale!("arabian", "Arabian (Hijaz-ish)", [0, 1, 4, 5, 7, 8, 10], ["1", "b2", "3", "4", "5", "b6", "b7"]),
    scale!("spanishGypsy", "Spanish Gypsy (Phryg Dom)", [0, 1, 4, 5, 7, 8, 10], ["1", "b2", "3", "4", "5", "b6", "b7"]),
    scale!("enigmatic", "Enigmatic", [0, 1, 4, 6, 8, 10, 11], ["1", "b2", "3", "♯4", "♯5", "b7", "7"]),
    scale!("acoustic", "Acoustic (Lydian Dominant b7?)", [0, 2, 4, 6, 7, 9, 10], ["1", "2", "3", "♯4", "5", "6", "b7"]),
    scale!("lydianFlat7", "Lydian ♭7 (Overtone)", [0, 2, 4, 6, 7, 9, 10], ["1", "2", "3", "♯4", "5", "6", "b7"]),
    // Blues and bebop variants (added passing tones)
    scale!("majorBlues", "Blues (Major)", [0, 2, 3, 4, 7, 9], ["1", "2", "b3", "3", "5", "6"]),
    scale!("dominantBebop", "Bebop (Dominant)", [0, 2, 4, 5, 7, 9, 10, 11], ["1", "2", "3", "4", "5", "6", "b7", "7"]),
    scale!("majorBebop", "Bebop (Major)", [0, 2, 4, 5, 7, 8, 9, 11], ["1", "2", "3", "4", "5", "b6", "6", "7"]),
    scale!("minorBebop", "Bebop (Minor / Dorian+7)", [0, 2, 3, 5, 7, 9, 10, 11], ["1", "2", "b3", "4", "5", "6", "b7", "7"]),
    // Triad arpeggio overlays
    scale!("majorTriad", "Triad (Major)", [0, 4, 7], ["1", "3", "5"]),
    scale!("minorTriad", "Triad (Minor)", [0, 3, 7], ["1", "b3", "5"]),
    scale!("diminishedTriad", "Triad (Diminished)", [0, 3, 6], ["1", "b3", "b5"]),
    scale!("augmentedTriad", "Triad (Augmented)", [0, 4, 8], ["1", "3", "♯5"]),
];

/// Word abbreviations used by [`ScaleDef::short_name`], applied in order.
const ABBREVIATIONS: [(&str, &str); 22] = [
    ("Harmonic", "Harm."),
    ("Melodic", "Mel."),
    ("Dominant", "Dom."),
    ("Diminished", "Dim."),
    ("Augmented", "Aug."),
    ("Pentatonic", "Pent."),
    ("Japanese", "Jap."),
    ("Natural", "Nat."),
    ("Minor", "Min."),
    ("Major", "Maj."),
    ("Locrian", "Locr."),
    ("Lydian", "Lyd."),
    ("Mixolydian", "Mixolyd."),
    ("Phrygian", "Phryg."),
    ("Aeolian", "Aeol."),
    ("Ionian", "Ion."),
    ("Chromatic", "Chrom."),
    ("Hungarian", "Hung."),
    ("Spanish", "Span."),
    ("Acoustic", "Acous."),
    ("Altered", "Alt."),
    ("Bebop", "Beb."),
];

const SHORT_NAME_MAX: usize = 16;

impl ScaleDef {
    /// Number of degrees.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Strictly increasing, starts at 0, stays inside the octave, 3-12 degrees,
    /// and one label per degree.
    pub fn is_well_formed(&self) -> bool {
        (3..=12).contains(&self.intervals.len())
            && self.intervals.first() == Some(&0)
            && self.intervals.iter().all(|&i| i < 12)
            && self.intervals.windows(2).all(|w| w[0] < w[1])
            && self.degree_labels.len() == self.intervals.len()
    }

    /// Display label for a 1-indexed degree.
    pub fn degree_label(&self, degree: usize) -> Option<&'static str> {
        degree
            .checked_sub(1)
            .and_then(|i| self.degree_labels.get(i))
            .copied()
    }

    /// Compact name for narrow selection lists.
    ///
    /// Names of up to 16 characters are returned unchanged. Longer names lose their
    /// parenthesised parts, get common words abbreviated and are cut to 15 characters
    /// plus an ellipsis if still too long.
    ///
    /// ```
    /// use fretmap::scale;
    ///
    /// assert_eq!(scale("dorian").unwrap().short_name(), "Dorian");
    /// assert_eq!(scale("aeolian").unwrap().short_name(), "Nat. Min.");
    /// ```
    pub fn short_name(&self) -> String {
        if self.name.chars().count() <= SHORT_NAME_MAX {
            return self.name.to_string();
        }

        let mut label = strip_parenthesized(self.name);
        for (word, abbreviation) in ABBREVIATIONS {
            label = label.replace(word, abbreviation);
        }
        let label = label.split_whitespace().collect::<Vec<_>>().join(" ");

        if label.chars().count() > SHORT_NAME_MAX {
            let cut: String = label.chars().take(SHORT_NAME_MAX - 1).collect();
            format!("{}…", cut.trim_end())
        } else {
            label
        }
    }
}

/// Drop every `( ... )` group together with the whitespace before it.
fn strip_parenthesized(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut rest = name;
    while let Some(open) = rest.find('(') {
        let Some(close) = rest[open..].find(')') else {
            break;
        };
        out.push_str(rest[..open].trim_end());
        rest = &rest[open + close + 1..];
    }
    out.push_str(rest);
    out.trim().to_string()
}

/// Look up a scale by id.
///
/// # Errors
/// Returns [`FretError::UnknownScaleId`] if the id is not in the catalog.
pub fn scale(id: &str) -> Result<&'static ScaleDef, FretError> {
    SCALES
        .iter()
        .find(|s| s.id == id)
        .ok_or_else(|| FretError::UnknownScaleId(id.to_string()))
}

/// Catalog de-duplicated by interval content, first id wins, catalog order kept.
pub fn scale_options() -> Vec<&'static ScaleDef> {
    let mut options: Vec<&'static ScaleDef> = Vec::new();
    for candidate in SCALES {
        if !options.iter().any(|s| s.intervals == candidate.intervals) {
            options.push(candidate);
        }
    }
    options
}
