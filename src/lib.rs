pub mod api;
pub mod chords;
pub mod error;
pub mod fretboard;
pub mod notes;
pub mod progressions;
pub mod scales;
pub mod settings;
pub mod tuning;

pub use api::{compute_view, compute_view_from_yaml, FretboardView, Marker};
pub use chords::{
    chord_quality, diatonic_tetrads, diatonic_triads, rotate_voicing, tetrad_quality, ChordDef,
    ChordQuality, Voicing,
};
pub use error::*;
pub use fretboard::{compute_fret_positions, filter_chord_tones, FretPosition};
pub use notes::{name_to_pitch_class, normalize, pitch_class_to_name, PitchClass};
pub use progressions::{scale_progressions, supports_progressions};
pub use scales::{scale, scale_options, ScaleDef, SCALES};
pub use settings::{ColorMode, FretboardSettings, LabelMode, ViewMode};
pub use tuning::{describe_tuning, tuning_preset};
