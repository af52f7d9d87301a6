//! # Fretboard Settings
//!
//! The full parameter set a caller picks before asking for a view: tuning, key, scale,
//! fret range and the display modes. Every field has a default, so a settings document
//! only needs the keys it changes.
//!
//! ## YAML Format
//! ```yaml
//! string-count: 7
//! drop-tuning: true
//! root: "F#"
//! scale: harmonicMinor
//! max-fret: 24
//! view-mode: triads
//! chord-root: 5
//! voicing: first
//! label-mode: letter
//! color-mode: multi
//! ```
//!
//! Modes are closed enums spelled in kebab-case. `progression: none` is the same as
//! leaving the key out.
//!
//! ## Example
//! ```rust
//! use fretmap::settings::{FretboardSettings, ViewMode};
//!
//! let settings = FretboardSettings::from_yaml("scale: dorian\nview-mode: tetrads\n").unwrap();
//! assert_eq!(settings.scale, "dorian");
//! assert_eq!(settings.view_mode, ViewMode::Tetrads);
//! assert_eq!(settings.string_count, 6);
//!
//! let resolved = settings.validate().unwrap();
//! assert_eq!(resolved.root_pc, 4);
//! assert_eq!(resolved.tuning, vec![4, 9, 2, 7, 11, 4]);
//! ```

use serde::{Deserialize, Serialize};

use crate::chords::Voicing;
use crate::error::FretError;
use crate::fretboard::Fret;
use crate::notes::{name_to_pitch_class, PitchClass};
use crate::scales::{scale, ScaleDef};
use crate::tuning::tuning_preset;

/// Which subset of the scale is on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    /// Every scale tone
    #[default]
    #[serde(alias = "scale")]
    ScaleTones,
    Triads,
    Tetrads,
}

impl ViewMode {
    /// Chord member count for chord views, `None` for the scale-tones view.
    pub fn chord_size(self) -> Option<usize> {
        match self {
            ViewMode::ScaleTones => None,
            ViewMode::Triads => Some(3),
            ViewMode::Tetrads => Some(4),
        }
    }
}

/// Marker label text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LabelMode {
    /// Scale degree label such as "b3"
    #[default]
    Degree,
    /// Note name such as "G"
    #[serde(alias = "letters")]
    Letter,
}

/// Marker coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorMode {
    #[default]
    Mono,
    Multi,
}

/// Caller-facing parameters for one fretboard evaluation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct FretboardSettings {
    /// 6, 7, 8 or 9
    pub string_count: u8,
    /// Lower the lowest string a whole step
    pub drop_tuning: bool,
    /// Key root as a note name, sharp or flat spelling
    pub root: String,
    /// Scale catalog id
    pub scale: String,
    /// Highest fret mapped, inclusive
    pub max_fret: Fret,
    pub label_mode: LabelMode,
    pub color_mode: ColorMode,
    pub view_mode: ViewMode,
    /// 1-indexed degree the displayed chord is built on
    pub chord_root: usize,
    /// Progression name, or `None`/"none" for a single chord
    pub progression: Option<String>,
    /// String the position window is anchored on
    pub reference_string: usize,
    pub voicing: Voicing,
    /// Collapse a progression into one position box
    pub position_mode: bool,
    /// Spell accidentals with sharps
    pub prefer_sharps: bool,
}

impl Default for FretboardSettings {
    fn default() -> Self {
        Self {
            string_count: 6,
            drop_tuning: false,
            root: "E".to_string(),
            scale: "major".to_string(),
            max_fret: 12,
            label_mode: LabelMode::Degree,
            color_mode: ColorMode::Mono,
            view_mode: ViewMode::ScaleTones,
            chord_root: 1,
            progression: None,
            reference_string: 0,
            voicing: Voicing::Root,
            position_mode: false,
            prefer_sharps: true,
        }
    }
}

/// Catalog values the settings refer to.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSettings {
    pub tuning: Vec<PitchClass>,
    pub root_pc: PitchClass,
    pub scale: &'static ScaleDef,
}

impl FretboardSettings {
    /// Parse settings from a YAML document; missing keys keep their defaults.
    pub fn from_yaml(content: &str) -> Result<Self, FretError> {
        serde_yaml::from_str(content).map_err(|e| FretError::SettingsError(e.to_string()))
    }

    /// Look up the tuning, root and scale, failing on the first unknown value.
    pub fn validate(&self) -> Result<ResolvedSettings, FretError> {
        let tuning = tuning_preset(self.string_count, self.drop_tuning)?;
        let root_pc = name_to_pitch_class(&self.root)?;
        let scale = scale(&self.scale)?;
        Ok(ResolvedSettings {
            tuning,
            root_pc,
            scale,
        })
    }

    /// The chosen progression name, treating "none" and blank as no selection.
    pub fn selected_progression(&self) -> Option<&str> {
        self.progression
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty() && !name.eq_ignore_ascii_case("none"))
    }
}
