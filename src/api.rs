//! # Public API
//!
//! Top-level entry point tying the catalogs and the fretboard engine together.
//!
//! ## Functions
//!
//! - [`compute_view()`] - Evaluate one set of [`FretboardSettings`] into a [`FretboardView`]
//! - [`compute_view_from_yaml()`] - Same, reading the settings from YAML
//!
//! ## Pipeline
//! 1. Resolve tuning, root and scale (the only step that can fail)
//! 2. Map every in-scale position up to `max_fret`
//! 3. Derive triads, tetrads, per-degree qualities and the scale's progressions
//! 4. Narrow the positions according to the view mode:
//!    - scale tones: everything
//!    - single chord: the selected shape for the active voicing, or nothing
//!    - progression: the chord-tone union, optionally windowed to one position box
//! 5. Decorate the displayed positions into [`Marker`]s
//!
//! Chord and progression views need a 7-degree scale; any other scale is shown as
//! scale tones. A chord root outside the scale falls back to degree 1.
//!
//! ## Example
//! ```rust
//! use fretmap::{compute_view, FretboardSettings, ViewMode};
//!
//! let settings = FretboardSettings {
//!     view_mode: ViewMode::Triads,
//!     ..Default::default()
//! };
//! let view = compute_view(&settings)?;
//!
//! // Open E major: the low E string is the bass
//! let shape = view.shape.as_ref().unwrap();
//! assert_eq!(shape.bass.fret, 0);
//! assert_eq!(view.markers.len(), 6);
//! # Ok::<(), fretmap::FretError>(())
//! ```

use std::collections::BTreeSet;

use serde::Serialize;

use crate::chords::{chord_qualities, stacked_chords, tetrad_qualities, ChordDef, ChordQuality};
use crate::error::FretError;
use crate::fretboard::{
    compute_fret_positions, filter_chord_tones, position_box, progression_overlay,
    select_chord_shape, ChordShape, FretPosition, PositionBox, PositionKey, ProgressionOverlay,
};
use crate::notes::{pitch_class_to_name, PitchClass};
use crate::progressions::{find_progression, progression_chord_names, supports_progressions};
use crate::progressions::{scale_progressions, Progression, PROGRESSION_SCALE_DEGREES};
use crate::scales::ScaleDef;
use crate::settings::{ColorMode, FretboardSettings, LabelMode, ViewMode};
use crate::tuning::describe_tuning;

/// Number of distinct marker colors in multi-color mode.
pub const PALETTE_SLOTS: usize = 8;

/// A displayed position with everything needed to draw it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    #[serde(flatten)]
    pub position: FretPosition,
    /// Degree label or note name, per the label mode
    pub label: String,
    pub is_root: bool,
    /// Palette index in multi-color mode
    pub color_slot: Option<usize>,
    /// Bass note of a shape or of a progression chord
    pub is_bass: bool,
    /// Root that fixed the position window
    pub is_anchor: bool,
    /// Progression chord indices this marker's degree belongs to
    pub chords: Vec<usize>,
}

/// Everything derived from one set of settings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FretboardView {
    pub tuning: Vec<PitchClass>,
    /// Open strings spelled low to high, e.g. "E A D G B E"
    pub tuning_name: String,
    pub root_pc: PitchClass,
    pub scale: &'static ScaleDef,
    /// View mode after gating
    pub view_mode: ViewMode,
    /// Chord root degree after gating
    pub chord_root: usize,
    /// Every in-scale position
    pub positions: Vec<FretPosition>,
    /// Positions actually on display
    pub markers: Vec<Marker>,
    pub triads: Vec<ChordDef>,
    pub tetrads: Vec<ChordDef>,
    pub chord_qualities: Vec<ChordQuality>,
    pub tetrad_qualities: Vec<ChordQuality>,
    /// Progressions offered for the scale, empty if unsupported
    pub progressions: &'static [Progression],
    /// The progression in effect, if any
    pub progression: Option<&'static Progression>,
    /// Chord symbols for the progression in effect
    pub progression_chords: Vec<String>,
    /// Degrees of the single displayed chord under the active voicing
    pub voiced_chord: Option<Vec<usize>>,
    pub shape: Option<ChordShape>,
    pub overlay: Option<ProgressionOverlay>,
    pub position_box: Option<PositionBox>,
    pub bass_keys: BTreeSet<PositionKey>,
    pub anchor_key: Option<PositionKey>,
}

/// Evaluate settings into a fretboard view.
///
/// # Errors
/// Returns [`FretError`] if the string count, root name or scale id is unknown.
pub fn compute_view(settings: &FretboardSettings) -> Result<FretboardView, FretError> {
    let resolved = settings.validate()?;
    let scale = resolved.scale;
    let root_pc = resolved.root_pc;
    let tuning = resolved.tuning;

    let positions = compute_fret_positions(&tuning, settings.max_fret, root_pc, scale.intervals);

    let triads = stacked_chords(scale, 3);
    let tetrads = stacked_chords(scale, 4);
    let progressions = scale_progressions(scale.id)
        .map(|p| p.progressions)
        .unwrap_or(&[]);

    let chord_view = scale.len() == PROGRESSION_SCALE_DEGREES;
    let view_mode = if chord_view {
        settings.view_mode
    } else {
        ViewMode::ScaleTones
    };
    let chord_root = if (1..=scale.len()).contains(&settings.chord_root) {
        settings.chord_root
    } else {
        1
    };

    let mut view = FretboardView {
        tuning_name: describe_tuning(&tuning, settings.prefer_sharps),
        tuning,
        root_pc,
        scale,
        view_mode,
        chord_root,
        positions: Vec::new(),
        markers: Vec::new(),
        chord_qualities: chord_qualities(scale),
        tetrad_qualities: tetrad_qualities(scale),
        triads,
        tetrads,
        progressions,
        progression: None,
        progression_chords: Vec::new(),
        voiced_chord: None,
        shape: None,
        overlay: None,
        position_box: None,
        bass_keys: BTreeSet::new(),
        anchor_key: None,
    };

    let displayed = match view_mode.chord_size() {
        None => positions.clone(),
        Some(size) => {
            let chords = stacked_chords(scale, size);
            let progression = settings
                .selected_progression()
                .filter(|_| supports_progressions(scale.id))
                .and_then(|name| find_progression(scale.id, name));

            match progression {
                Some(progression) => {
                    view.progression = Some(progression);
                    view.progression_chords = progression_chord_names(
                        scale,
                        progression,
                        root_pc,
                        settings.prefer_sharps,
                        size == 4,
                    );
                    let voiced: Vec<Vec<usize>> = progression
                        .numerals
                        .iter()
                        .filter_map(|&degree| chords.get(degree.checked_sub(1)?))
                        .map(|chord| settings.voicing.apply(&chord.degrees))
                        .collect();
                    progression_view(&mut view, settings, &positions, &voiced)
                }
                None => {
                    if let Some(name) = settings.selected_progression() {
                        log::debug!("progression {:?} not available for {}", name, scale.id);
                    }
                    let chord = &chords[chord_root - 1];
                    let voiced = settings.voicing.apply(&chord.degrees);
                    let tones = filter_chord_tones(&positions, &voiced);
                    let shape = select_chord_shape(&tones, &voiced, view.tuning.len());
                    view.voiced_chord = Some(voiced);

                    match shape {
                        Some(shape) => {
                            view.bass_keys.insert(shape.bass.key());
                            let shown = shape.positions.clone();
                            view.shape = Some(shape);
                            shown
                        }
                        None => {
                            log::debug!(
                                "no playable shape for degree {} chord in {}",
                                chord_root,
                                scale.id
                            );
                            Vec::new()
                        }
                    }
                }
            }
        }
    };

    view.markers = decorate(&view, settings, &displayed);
    view.positions = positions;

    log::debug!(
        "{} {} on {} strings: {:?} view, {} of {} positions shown",
        pitch_class_to_name(root_pc as i32, settings.prefer_sharps),
        scale.id,
        view.tuning.len(),
        view_mode,
        view.markers.len(),
        view.positions.len()
    );

    Ok(view)
}

/// Parse YAML settings and evaluate them.
///
/// # Example
/// ```rust
/// use fretmap::compute_view_from_yaml;
///
/// let view = compute_view_from_yaml("root: A\nscale: pentatonicMinor\n")?;
/// assert_eq!(view.root_pc, 9);
/// assert!(view.markers.iter().all(|m| m.position.degree <= 5));
/// # Ok::<(), fretmap::FretError>(())
/// ```
pub fn compute_view_from_yaml(content: &str) -> Result<FretboardView, FretError> {
    let settings = FretboardSettings::from_yaml(content)?;
    compute_view(&settings)
}

/// Union the progression chords and, in position mode, collapse them into one box.
fn progression_view(
    view: &mut FretboardView,
    settings: &FretboardSettings,
    positions: &[FretPosition],
    voiced: &[Vec<usize>],
) -> Vec<FretPosition> {
    let overlay = progression_overlay(positions, voiced);
    let mut displayed = overlay.positions.clone();

    if settings.position_mode {
        match position_box(positions, &overlay, settings.reference_string) {
            Some(pbox) => {
                view.bass_keys = pbox.bass_keys();
                view.anchor_key = Some(pbox.anchor.key());
                displayed = pbox.positions.clone();
                view.position_box = Some(pbox);
            }
            None => {
                log::debug!(
                    "no root on reference string {}, showing the whole neck",
                    settings.reference_string
                );
            }
        }
    }

    view.overlay = Some(overlay);
    displayed
}

fn decorate(
    view: &FretboardView,
    settings: &FretboardSettings,
    displayed: &[FretPosition],
) -> Vec<Marker> {
    displayed
        .iter()
        .map(|&position| {
            let key = position.key();
            let chords = view
                .overlay
                .as_ref()
                .map(|o| o.chords_for(position.degree).to_vec())
                .unwrap_or_default();

            let label = match settings.label_mode {
                LabelMode::Degree => view
                    .scale
                    .degree_label(position.degree)
                    .map_or_else(|| position.degree.to_string(), str::to_string),
                LabelMode::Letter => {
                    pitch_class_to_name(position.pitch_class as i32, settings.prefer_sharps)
                        .to_string()
                }
            };

            let color_slot = match settings.color_mode {
                ColorMode::Mono => None,
                ColorMode::Multi => match &view.overlay {
                    Some(overlay) => overlay.primary_chord(position.degree),
                    None => Some(position.degree.saturating_sub(1).min(PALETTE_SLOTS - 1)),
                },
            };

            Marker {
                position,
                label,
                is_root: position.degree == 1,
                color_slot,
                is_bass: view.bass_keys.contains(&key),
                is_anchor: view.anchor_key == Some(key),
                chords,
            }
        })
        .collect()
}
