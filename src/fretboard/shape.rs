//! Single-chord shape selection
//!
//! Picks playable fingerings for one voiced chord out of its chord-tone positions.
//!
//! ## Algorithm
//! The bass degree is the first entry of the voiced degree list. Every position
//! carrying it, lowest fret first, seeds one attempt:
//! 1. The seed fixes the lowest string used.
//! 2. Each higher string in turn adds exactly one chord tone, keeping the fret span of
//!    the shape within [`MAX_SHAPE_SPAN`]. A degree not yet in the shape is preferred;
//!    ties go to the fret nearest the centre of the current span, then the lower fret.
//! 3. If some string has no tone inside the span limit, the attempt is dropped.
//! 4. A finished shape must sound every chord degree, otherwise it is dropped.
//!
//! Accepted shapes are kept once per distinct bass fret. Nothing is substituted for a
//! failed attempt.

use std::collections::BTreeSet;

use super::types::{ChordShape, Fret, FretPosition};

/// Widest allowed distance between the lowest and highest fret of a shape.
pub const MAX_SHAPE_SPAN: Fret = 4;

/// All accepted shapes for the voiced chord, ordered by bass fret.
///
/// `positions` may be the full scale map or already chord-tone filtered; only
/// degrees in `voiced_degrees` are used. `string_count` is the tuning length.
pub fn chord_shapes(
    positions: &[FretPosition],
    voiced_degrees: &[usize],
    string_count: usize,
) -> Vec<ChordShape> {
    let Some(&bass_degree) = voiced_degrees.first() else {
        return Vec::new();
    };
    let required: BTreeSet<usize> = voiced_degrees.iter().copied().collect();
    let tones: Vec<FretPosition> = positions
        .iter()
        .filter(|p| required.contains(&p.degree))
        .copied()
        .collect();

    let mut seeds: Vec<FretPosition> = tones
        .iter()
        .filter(|p| p.degree == bass_degree)
        .copied()
        .collect();
    seeds.sort_by_key(|p| (p.fret, p.string_index));

    let mut shapes: Vec<ChordShape> = Vec::new();
    let mut bass_frets: BTreeSet<Fret> = BTreeSet::new();

    for seed in seeds {
        if bass_frets.contains(&seed.fret) {
            continue;
        }
        match build_shape(seed, &tones, &required, string_count) {
            Some(shape) => {
                log::trace!(
                    "accepted shape on string {} fret {} (span {})",
                    seed.string_index,
                    seed.fret,
                    shape.span()
                );
                bass_frets.insert(seed.fret);
                shapes.push(shape);
            }
            None => {
                log::trace!(
                    "no shape from string {} fret {}",
                    seed.string_index,
                    seed.fret
                );
            }
        }
    }

    shapes
}

/// The shape with the lowest bass fret, if any attempt succeeded.
pub fn select_chord_shape(
    positions: &[FretPosition],
    voiced_degrees: &[usize],
    string_count: usize,
) -> Option<ChordShape> {
    chord_shapes(positions, voiced_degrees, string_count)
        .into_iter()
        .next()
}

fn build_shape(
    bass: FretPosition,
    tones: &[FretPosition],
    required: &BTreeSet<usize>,
    string_count: usize,
) -> Option<ChordShape> {
    let mut chosen = vec![bass];
    let mut covered: BTreeSet<usize> = BTreeSet::from([bass.degree]);
    let (mut low, mut high) = (bass.fret, bass.fret);

    for string_index in bass.string_index + 1..string_count {
        let next = tones
            .iter()
            .filter(|p| p.string_index == string_index)
            .filter(|p| high.max(p.fret) - low.min(p.fret) <= MAX_SHAPE_SPAN)
            // Doubled distance to the span centre keeps this in integers
            .min_by_key(|p| {
                (
                    covered.contains(&p.degree),
                    (2 * p.fret).abs_diff(low + high),
                    p.fret,
                )
            })?;

        low = low.min(next.fret);
        high = high.max(next.fret);
        covered.insert(next.degree);
        chosen.push(*next);
    }

    if !required.is_subset(&covered) {
        return None;
    }

    Some(ChordShape {
        bass,
        positions: chosen,
    })
}
