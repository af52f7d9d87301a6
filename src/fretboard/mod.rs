//! # Fretboard Mapping Engine
//!
//! Maps abstract scale degrees onto concrete (string, fret) coordinates and narrows
//! them to playable chord shapes and position boxes.
//!
//! ## Sub-modules
//! - `types` - FretPosition, ChordShape, ProgressionOverlay, PositionBox definitions
//! - `engine` - In-scale position enumeration and chord-tone filtering
//! - `shape` - Single-chord shape selection for a requested inversion
//! - `position` - 5-fret box windowing for progressions
//!
//! ## Pipeline
//! 1. [`compute_fret_positions()`] enumerates every in-scale position, sparse, ordered
//!    by string then fret.
//! 2. [`filter_chord_tones()`] keeps the degrees of one voiced chord, or
//!    [`progression_overlay()`] keeps the union across a progression and records which
//!    chords each degree belongs to.
//! 3. [`select_chord_shape()`] reduces a single chord to one fingering;
//!    [`position_box()`] reduces a progression to one region of the neck.
//!
//! ## String Order
//! String index `0` is the lowest-pitched string. "Higher strings" and "lowest-pitched"
//! below always refer to pitch, so a lower index is a thicker string.
//!
//! ## Example
//! ```rust
//! use fretmap::fretboard::{compute_fret_positions, filter_chord_tones, select_chord_shape};
//! use fretmap::{diatonic_triads, scale, tuning_preset};
//!
//! let tuning = tuning_preset(6, false).unwrap();
//! let major = scale("major").unwrap();
//! let positions = compute_fret_positions(&tuning, 12, 4, major.intervals);
//!
//! let e_major = &diatonic_triads(major)[0];
//! let tones = filter_chord_tones(&positions, &e_major.degrees);
//! let shape = select_chord_shape(&tones, &e_major.degrees, tuning.len()).unwrap();
//!
//! assert_eq!(shape.bass.fret, 0);
//! assert!(shape.span() <= 4);
//! ```

mod engine;
mod position;
mod shape;
mod types;

#[cfg(test)]
mod tests;

pub use engine::{
    compute_fret_positions, degree_of, filter_chord_tones, progression_overlay,
    scale_pitch_classes,
};
pub use position::{locate_anchor, lowest_position, position_box, position_window, WINDOW_FRETS};
pub use shape::{chord_shapes, select_chord_shape, MAX_SHAPE_SPAN};
pub use types::{
    ChordShape, Fret, FretPosition, PositionBox, PositionKey, PositionWindow, ProgressionOverlay,
};
