//! Tuning presets for 6- to 9-string guitars.
//!
//! Tunings are listed lowest-pitched string first; that index order is used for
//! strings everywhere in the crate.

use crate::error::FretError;
use crate::notes::{normalize, pitch_class_to_name, PitchClass};

/// String counts with a preset.
pub const SUPPORTED_STRING_COUNTS: [u8; 4] = [6, 7, 8, 9];

// E A D G B E and its low extensions
const SIX_STRING: [PitchClass; 6] = [4, 9, 2, 7, 11, 4];
const SEVEN_STRING: [PitchClass; 7] = [11, 4, 9, 2, 7, 11, 4];
const EIGHT_STRING: [PitchClass; 8] = [6, 11, 4, 9, 2, 7, 11, 4];
const NINE_STRING: [PitchClass; 9] = [1, 6, 11, 4, 9, 2, 7, 11, 4];

/// Open-string pitch classes for a standard tuning, optionally with the lowest
/// string dropped a whole step (6-string drop gives Drop D).
///
/// # Errors
/// Returns [`FretError::UnsupportedStringCount`] outside 6-9 strings.
///
/// # Example
/// ```
/// use fretmap::tuning_preset;
///
/// assert_eq!(tuning_preset(6, false).unwrap(), vec![4, 9, 2, 7, 11, 4]);
/// assert_eq!(tuning_preset(6, true).unwrap()[0], 2);
/// ```
pub fn tuning_preset(string_count: u8, drop_tuning: bool) -> Result<Vec<PitchClass>, FretError> {
    let mut tuning = match string_count {
        6 => SIX_STRING.to_vec(),
        7 => SEVEN_STRING.to_vec(),
        8 => EIGHT_STRING.to_vec(),
        9 => NINE_STRING.to_vec(),
        n => return Err(FretError::UnsupportedStringCount(n)),
    };

    if drop_tuning {
        tuning[0] = normalize(tuning[0] as i32 - 2);
    }

    Ok(tuning)
}

/// Open strings spelled low to high, e.g. `"D A D G B E"`.
pub fn describe_tuning(tuning: &[PitchClass], prefer_sharps: bool) -> String {
    tuning
        .iter()
        .map(|&pc| pitch_class_to_name(pc as i32, prefer_sharps))
        .collect::<Vec<_>>()
        .join(" ")
}
