use super::*;
use crate::chords::{diatonic_tetrads, diatonic_triads, rotate_voicing};
use crate::scales::scale;
use crate::tuning::tuning_preset;

const MAJOR: [u8; 7] = [0, 2, 4, 5, 7, 9, 11];

fn standard_e_major() -> (Vec<u8>, Vec<FretPosition>) {
    let tuning = tuning_preset(6, false).unwrap();
    let positions = compute_fret_positions(&tuning, 12, 4, &MAJOR);
    (tuning, positions)
}

#[test]
fn test_single_string_c_major() {
    let positions = compute_fret_positions(&[0], 12, 0, &MAJOR);

    let found: Vec<(Fret, usize)> = positions.iter().map(|p| (p.fret, p.degree)).collect();
    assert_eq!(
        found,
        vec![(0, 1), (2, 2), (4, 3), (5, 4), (7, 5), (9, 6), (11, 7), (12, 1)]
    );

    for excluded in [1, 3, 6, 8, 10] {
        assert!(positions.iter().all(|p| p.fret != excluded));
    }
}

#[test]
fn test_upper_fret_bound_is_inclusive() {
    let positions = compute_fret_positions(&[4], 24, 4, &MAJOR);
    let roots: Vec<Fret> = positions
        .iter()
        .filter(|p| p.degree == 1)
        .map(|p| p.fret)
        .collect();
    assert_eq!(roots, vec![0, 12, 24]);
}

#[test]
fn test_positions_carry_pitch_class_and_degree() {
    let (tuning, positions) = standard_e_major();
    for p in &positions {
        assert_eq!(
            p.pitch_class,
            crate::notes::normalize(tuning[p.string_index] as i32 + p.fret as i32)
        );
        assert_eq!(p.degree, degree_of(p.pitch_class, 4, &MAJOR));
        assert!((1..=7).contains(&p.degree));
    }
    // 7 of 12 pitch classes, 13 frets per string: 7 or 8 hits per string
    assert!(positions.len() >= 6 * 7 && positions.len() <= 6 * 8);
}

#[test]
fn test_ordering_by_string_then_fret() {
    let (_, positions) = standard_e_major();
    for pair in positions.windows(2) {
        assert!((pair[0].string_index, pair[0].fret) < (pair[1].string_index, pair[1].fret));
    }
}

#[test]
fn test_degree_of_outside_scale() {
    assert_eq!(degree_of(1, 0, &MAJOR), 0);
    assert_eq!(degree_of(11, 0, &MAJOR), 7);
    assert_eq!(degree_of(4, 4, &MAJOR), 1);
    assert_eq!(scale_pitch_classes(9, &[0, 3, 7]), vec![9, 0, 4]);
}

#[test]
fn test_empty_inputs() {
    assert!(compute_fret_positions(&[], 12, 0, &MAJOR).is_empty());
    assert!(compute_fret_positions(&[4, 9], 12, 0, &[]).is_empty());
    assert_eq!(compute_fret_positions(&[4], 0, 4, &MAJOR).len(), 1);
}

#[test]
fn test_chord_tone_filter() {
    let (_, positions) = standard_e_major();
    let tones = filter_chord_tones(&positions, &[1, 3, 5]);
    assert!(!tones.is_empty());
    assert!(tones.iter().all(|p| [1, 3, 5].contains(&p.degree)));
    assert!(tones
        .iter()
        .any(|p| p.string_index == 0 && p.fret == 0 && p.degree == 1));
    assert!(filter_chord_tones(&positions, &[]).is_empty());
}

#[test]
fn test_open_e_major_shape() {
    let (tuning, positions) = standard_e_major();
    let shape = select_chord_shape(&positions, &[1, 3, 5], tuning.len()).unwrap();

    let frets: Vec<Fret> = shape.positions.iter().map(|p| p.fret).collect();
    assert_eq!(frets, vec![0, 2, 2, 1, 0, 0]);
    assert_eq!(shape.bass.string_index, 0);
    assert_eq!(shape.span(), 2);
    assert_eq!(shape.degrees().into_iter().collect::<Vec<_>>(), vec![1, 3, 5]);
}

#[test]
fn test_first_inversion_puts_third_in_bass() {
    let (tuning, positions) = standard_e_major();
    let voiced = rotate_voicing(&[1, 3, 5], 1);
    let shapes = chord_shapes(&positions, &voiced, tuning.len());

    assert!(!shapes.is_empty());
    for shape in &shapes {
        assert_eq!(shape.bass.degree, 3);
        assert_eq!(shape.positions[0], shape.bass);
    }
}

#[test]
fn test_shapes_respect_span_and_cover_chord() {
    let tuning = tuning_preset(6, false).unwrap();
    let major = scale("major").unwrap();

    for root_pc in 0..12 {
        let positions = compute_fret_positions(&tuning, 24, root_pc, major.intervals);
        let chords = diatonic_triads(major)
            .into_iter()
            .chain(diatonic_tetrads(major));
        for chord in chords {
            for inversion in 0..chord.degrees.len() {
                let voiced = rotate_voicing(&chord.degrees, inversion);
                for shape in chord_shapes(&positions, &voiced, tuning.len()) {
                    assert!(shape.span() <= MAX_SHAPE_SPAN);
                    for degree in &voiced {
                        assert!(shape.degrees().contains(degree));
                    }
                    assert_eq!(shape.bass.degree, voiced[0]);
                    // one note per string, from the bass string to the top
                    let strings: Vec<usize> =
                        shape.positions.iter().map(|p| p.string_index).collect();
                    let expected: Vec<usize> = (shape.bass.string_index..tuning.len()).collect();
                    assert_eq!(strings, expected);
                }
            }
        }
    }
}

#[test]
fn test_shapes_unique_per_bass_fret() {
    let (tuning, positions) = standard_e_major();
    let shapes = chord_shapes(&positions, &[1, 3, 5], tuning.len());
    let mut frets: Vec<Fret> = shapes.iter().map(|s| s.bass.fret).collect();
    let before = frets.len();
    frets.dedup();
    assert_eq!(frets.len(), before);
    assert!(frets.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_no_shape_without_room_to_cover_chord() {
    // Bass on the top string alone cannot sound three degrees
    let positions = compute_fret_positions(&[4], 12, 4, &MAJOR);
    assert!(chord_shapes(&positions, &[1, 3, 5], 1).is_empty());
    assert!(select_chord_shape(&positions, &[], 1).is_none());
}

#[test]
fn test_string_without_candidate_drops_attempt() {
    // Second string only offers the bass degree far away
    let positions = vec![
        FretPosition { string_index: 0, fret: 0, pitch_class: 0, degree: 1 },
        FretPosition { string_index: 1, fret: 9, pitch_class: 4, degree: 3 },
        FretPosition { string_index: 2, fret: 1, pitch_class: 7, degree: 5 },
    ];
    assert!(chord_shapes(&positions, &[1, 3, 5], 3).is_empty());
}

#[test]
fn test_prefers_missing_degree_then_centre() {
    let positions = vec![
        FretPosition { string_index: 0, fret: 3, pitch_class: 0, degree: 1 },
        // degree 1 again, closer to centre, but 3 is still missing
        FretPosition { string_index: 1, fret: 3, pitch_class: 0, degree: 1 },
        FretPosition { string_index: 1, fret: 5, pitch_class: 4, degree: 3 },
        // both candidates add degree 5; fret 4 is nearer the 3..5 centre
        FretPosition { string_index: 2, fret: 1, pitch_class: 7, degree: 5 },
        FretPosition { string_index: 2, fret: 4, pitch_class: 7, degree: 5 },
    ];
    let shape = select_chord_shape(&positions, &[1, 3, 5], 3).unwrap();
    let frets: Vec<Fret> = shape.positions.iter().map(|p| p.fret).collect();
    assert_eq!(frets, vec![3, 5, 4]);
}

#[test]
fn test_progression_overlay_membership() {
    let (_, positions) = standard_e_major();
    let major = scale("major").unwrap();
    let triads = diatonic_triads(major);
    // I-IV-V
    let chords: Vec<Vec<usize>> = [1, 4, 5]
        .iter()
        .map(|&d| triads[d - 1].degrees.clone())
        .collect();
    let overlay = progression_overlay(&positions, &chords);

    // I = 1 3 5, IV = 4 6 1, V = 5 7 2: every degree is covered
    assert_eq!(overlay.positions.len(), positions.len());
    assert_eq!(overlay.chords_for(1), &[0, 1]);
    assert_eq!(overlay.chords_for(5), &[0, 2]);
    assert_eq!(overlay.chords_for(2), &[2]);
    assert_eq!(overlay.primary_chord(1), Some(0));
    assert_eq!(overlay.primary_chord(4), Some(1));
    assert_eq!(overlay.primary_chord(9), None);
}

#[test]
fn test_progression_overlay_repeated_chord() {
    let (_, positions) = standard_e_major();
    let chords = vec![vec![1, 3, 5], vec![2, 4, 6], vec![1, 3, 5]];
    let overlay = progression_overlay(&positions, &chords);
    assert_eq!(overlay.chords_for(1), &[0, 2]);
    assert!(overlay.chords_for(7).is_empty());
    assert!(overlay.positions.iter().all(|p| p.degree != 7));
}

#[test]
fn test_anchor_prefers_fretted_root() {
    let (_, positions) = standard_e_major();
    // Low E string: roots at 0 and 12, fretted one wins
    assert_eq!(locate_anchor(&positions, 0).unwrap().fret, 12);
    // A string: E at 7
    assert_eq!(locate_anchor(&positions, 1).unwrap().fret, 7);

    // Only the open root is mapped
    let short = compute_fret_positions(&[4], 5, 4, &MAJOR);
    assert_eq!(locate_anchor(&short, 0).unwrap().fret, 0);

    assert!(locate_anchor(&positions, 9).is_none());
}

#[test]
fn test_position_window_clamps_at_nut() {
    assert_eq!(position_window(7), PositionWindow { min_fret: 5, max_fret: 9 });
    assert_eq!(position_window(1), PositionWindow { min_fret: 0, max_fret: 4 });
    assert_eq!(position_window(0), PositionWindow { min_fret: 0, max_fret: 4 });
}

#[test]
fn test_position_box_for_progression() {
    let (_, positions) = standard_e_major();
    let chords = vec![vec![1, 3, 5], vec![4, 6, 1], vec![5, 7, 2]];
    let overlay = progression_overlay(&positions, &chords);

    let pbox = position_box(&positions, &overlay, 1).unwrap();
    assert_eq!(pbox.anchor.fret, 7);
    assert_eq!(pbox.window, PositionWindow { min_fret: 5, max_fret: 9 });
    assert!(pbox.positions.iter().all(|p| (5..=9).contains(&p.fret)));
    assert_eq!(pbox.bass_notes.len(), 3);

    // No E on the low string inside 5..=9, so the A string at fret 7
    let e_bass = pbox.bass_notes[0].unwrap();
    assert_eq!((e_bass.string_index, e_bass.fret), (1, 7));
    // A (degree 4) on the low E string at fret 5
    let a_bass = pbox.bass_notes[1].unwrap();
    assert_eq!((a_bass.string_index, a_bass.fret), (0, 5));
    // B (degree 5) on the low E string at fret 7
    let b_bass = pbox.bass_notes[2].unwrap();
    assert_eq!((b_bass.string_index, b_bass.fret), (0, 7));

    assert_eq!(pbox.bass_keys().len(), 3);
}

#[test]
fn test_position_box_uses_voiced_bass() {
    let (_, positions) = standard_e_major();
    let chords = vec![rotate_voicing(&[1, 3, 5], 1)];
    let overlay = progression_overlay(&positions, &chords);
    let pbox = position_box(&positions, &overlay, 1).unwrap();
    // G# sits outside 5..=9 on the two lowest strings
    let bass = pbox.bass_notes[0].unwrap();
    assert_eq!(bass.degree, 3);
    assert_eq!((bass.string_index, bass.fret), (2, 6));
}

#[test]
fn test_lowest_position_orders_by_string_then_fret() {
    let positions = vec![
        FretPosition { string_index: 2, fret: 1, pitch_class: 0, degree: 1 },
        FretPosition { string_index: 1, fret: 8, pitch_class: 0, degree: 1 },
        FretPosition { string_index: 1, fret: 6, pitch_class: 0, degree: 1 },
    ];
    let lowest = lowest_position(&positions, 1).unwrap();
    assert_eq!((lowest.string_index, lowest.fret), (1, 6));
    assert!(lowest_position(&positions, 3).is_none());
}
