//! # Pitch-Class Utilities
//!
//! Note-name and pitch-class conversion. A pitch class is a note modulo the octave,
//! `0..=11` with `0 = C`. All arithmetic on pitch classes goes through [`normalize`].
//!
//! ## Example
//! ```rust
//! use fretmap::notes::{name_to_pitch_class, normalize, pitch_class_to_name};
//!
//! assert_eq!(normalize(-1), 11);
//! assert_eq!(name_to_pitch_class("Db").unwrap(), 1);
//! assert_eq!(pitch_class_to_name(1, true), "C#");
//! assert_eq!(pitch_class_to_name(1, false), "Db");
//! ```

use crate::chords::ChordQuality;
use crate::error::FretError;

/// Pitch modulo the octave, always in `0..=11`.
pub type PitchClass = u8;

/// Accepted note spellings (sharps and flats, no double accidentals).
const NOTE_NAMES: [(&str, PitchClass); 17] = [
    ("C", 0),
    ("C#", 1),
    ("Db", 1),
    ("D", 2),
    ("D#", 3),
    ("Eb", 3),
    ("E", 4),
    ("F", 5),
    ("F#", 6),
    ("Gb", 6),
    ("G", 7),
    ("G#", 8),
    ("Ab", 8),
    ("A", 9),
    ("A#", 10),
    ("Bb", 10),
    ("B", 11),
];

const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];
const FLAT_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// The twelve root spellings offered to callers (sharp-preferring).
pub const ROOT_NAMES: [&str; 12] = SHARP_NAMES;

/// Reduce any semitone count to a pitch class. Total, never negative.
pub fn normalize(n: i32) -> PitchClass {
    n.rem_euclid(12) as PitchClass
}

/// Look up a note name such as `"C#"` or `"Db"`.
///
/// # Errors
/// Returns [`FretError::UnknownNoteName`] if the spelling is not in the table.
pub fn name_to_pitch_class(name: &str) -> Result<PitchClass, FretError> {
    NOTE_NAMES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, pc)| *pc)
        .ok_or_else(|| FretError::UnknownNoteName(name.to_string()))
}

/// Spell a pitch class using sharps or flats.
pub fn pitch_class_to_name(pc: i32, prefer_sharps: bool) -> &'static str {
    let idx = normalize(pc) as usize;
    if prefer_sharps {
        SHARP_NAMES[idx]
    } else {
        FLAT_NAMES[idx]
    }
}

/// Chord symbol for a root and quality, e.g. `C#m` or `B°`.
pub fn chord_name(root_pc: i32, quality: ChordQuality, prefer_sharps: bool) -> String {
    format!(
        "{}{}",
        pitch_class_to_name(root_pc, prefer_sharps),
        quality.suffix()
    )
}

/// Chord symbol for a quality given by its key (`"min"`, `"dom7"`, ...).
/// Unknown keys render with no suffix.
pub fn chord_name_for_key(root_pc: i32, quality_key: &str, prefer_sharps: bool) -> String {
    let suffix = ChordQuality::from_key(quality_key)
        .map(ChordQuality::suffix)
        .unwrap_or("");
    format!("{}{}", pitch_class_to_name(root_pc, prefer_sharps), suffix)
}
