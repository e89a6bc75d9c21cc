use booklet_impose::*;
use proptest::prelude::*;
use std::collections::HashSet;

fn slot_pages(face: &SheetFace) -> (usize, bool, usize, bool) {
    (face.left.page, face.left.rotated, face.right.page, face.right.rotated)
}

#[test]
fn test_plan_five_pages() {
    let plan = plan_imposition(5, ImpositionMode::FourUpSaddleStitch).unwrap();

    assert_eq!(plan.page_count, 5);
    assert_eq!(plan.padded_count, 8);
    assert_eq!(plan.blank_pages(), 3);
    assert_eq!(plan.sheet_count(), 2);

    let s0 = &plan.sheets[0];
    assert_eq!(slot_pages(&s0.front), (7, true, 0, false));
    assert_eq!(slot_pages(s0.back.as_ref().unwrap()), (1, false, 6, true));

    let s1 = &plan.sheets[1];
    assert_eq!(slot_pages(&s1.front), (5, true, 2, false));
    assert_eq!(slot_pages(s1.back.as_ref().unwrap()), (3, false, 4, true));
}

#[test]
fn test_plan_single_page() {
    let plan = plan_imposition(1, ImpositionMode::FourUpSaddleStitch).unwrap();
    assert_eq!(plan.padded_count, 4);
    assert_eq!(plan.sheet_count(), 1);
    assert!(plan.is_padding(3));
    assert!(!plan.is_padding(0));
}

#[test]
fn test_plan_exact_multiple_needs_no_padding() {
    let plan = plan_imposition(12, ImpositionMode::FourUpSaddleStitch).unwrap();
    assert_eq!(plan.padded_count, 12);
    assert_eq!(plan.blank_pages(), 0);
    assert_eq!(plan.sheet_count(), 3);
    assert_eq!(plan.output_page_count(), 6);
    assert_eq!(slot_pages(&plan.sheets[2].front), (7, true, 4, false));
}

#[test]
fn test_plan_zero_pages_fails() {
    for mode in [ImpositionMode::FourUpSaddleStitch, ImpositionMode::TwoUpPaired] {
        assert!(matches!(
            plan_imposition(0, mode),
            Err(BookletError::NoPages)
        ));
    }
}

#[test]
fn test_paired_plan_eight_pages() {
    let plan = plan_imposition(8, ImpositionMode::TwoUpPaired).unwrap();
    assert_eq!(plan.padded_count, 8);
    assert_eq!(plan.sheet_count(), 2);

    let faces: Vec<_> = plan.faces().map(slot_pages).collect();
    assert_eq!(
        faces,
        vec![
            (7, false, 0, false),
            (6, true, 1, true),
            (5, false, 2, false),
            (4, true, 3, true),
        ]
    );
}

#[test]
fn test_paired_plan_odd_face_count_leaves_last_back_empty() {
    // 5 pages -> 6 padded -> 3 faces -> 2 sheets, the second single-sided
    let plan = plan_imposition(5, ImpositionMode::TwoUpPaired).unwrap();
    assert_eq!(plan.padded_count, 6);
    assert_eq!(plan.output_page_count(), 3);
    assert_eq!(plan.sheet_count(), 2);
    assert!(plan.sheets[0].back.is_some());
    assert!(plan.sheets[1].back.is_none());
    assert_eq!(slot_pages(&plan.sheets[1].front), (3, false, 2, false));
}

#[test]
fn test_upright_rule_rotates_nothing() {
    for mode in [ImpositionMode::FourUpSaddleStitch, ImpositionMode::TwoUpPaired] {
        let plan = plan_imposition_with(10, mode, RotationRule::Upright).unwrap();
        assert!(plan.sheets.iter().flat_map(|s| s.slots()).all(|slot| !slot.rotated));
    }
}

#[test]
fn test_front_right_back_left_read_consecutively() {
    let plan = plan_imposition(16, ImpositionMode::FourUpSaddleStitch).unwrap();
    for (s, sheet) in plan.sheets.iter().enumerate() {
        let back = sheet.back.unwrap();
        assert_eq!(sheet.front.right.page, 2 * s);
        assert_eq!(back.left.page, 2 * s + 1);
        assert_eq!(sheet.front.left.page, 15 - 2 * s);
        assert_eq!(back.right.page, 14 - 2 * s);
    }
}

proptest! {
    #[test]
    fn saddle_padding_is_minimal_multiple_of_four(count in 1usize..400) {
        let plan = plan_imposition(count, ImpositionMode::FourUpSaddleStitch).unwrap();
        prop_assert_eq!(plan.padded_count % 4, 0);
        prop_assert!(plan.padded_count >= count);
        prop_assert!(plan.padded_count < count + 4);
        prop_assert_eq!(plan.sheet_count(), plan.padded_count / 4);
    }

    #[test]
    fn slots_cover_every_page_exactly_once(count in 1usize..400, paired in any::<bool>()) {
        let mode = if paired {
            ImpositionMode::TwoUpPaired
        } else {
            ImpositionMode::FourUpSaddleStitch
        };
        let plan = plan_imposition(count, mode).unwrap();

        let mut seen = vec![0usize; plan.padded_count];
        for slot in plan.sheets.iter().flat_map(|s| s.slots()) {
            prop_assert!(slot.page < plan.padded_count);
            seen[slot.page] += 1;
        }
        prop_assert!(seen.iter().all(|&n| n == 1));
    }

    #[test]
    fn sheet_slots_are_distinct(count in 1usize..400) {
        let plan = plan_imposition(count, ImpositionMode::FourUpSaddleStitch).unwrap();
        for sheet in &plan.sheets {
            let pages: HashSet<usize> = sheet.slots().map(|slot| slot.page).collect();
            prop_assert_eq!(pages.len(), 4);
        }
    }

    #[test]
    fn one_descending_slot_rotated_per_face(count in 1usize..400) {
        let plan = plan_imposition(count, ImpositionMode::FourUpSaddleStitch).unwrap();
        for sheet in &plan.sheets {
            prop_assert_eq!(sheet.slots().filter(|slot| slot.rotated).count(), 2);
            for face in sheet.faces() {
                let rotated: Vec<_> = face.slots().into_iter().filter(|s| s.rotated).collect();
                prop_assert_eq!(rotated.len(), 1);
                // The rotated slot carries the higher (back-of-booklet) page
                let other = face.slots().into_iter().find(|s| !s.rotated).unwrap();
                prop_assert!(rotated[0].page > other.page);
            }
        }
    }
}
