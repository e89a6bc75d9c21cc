use booklet_impose::*;

#[test]
fn test_statistics_saddle_stitch() {
    let stats = calculate_statistics(10, &BookletOptions::default()).unwrap();

    assert_eq!(stats.source_pages, 10);
    assert_eq!(stats.imposed_pages, 10);
    assert_eq!(stats.blank_pages_added, 2);
    assert_eq!(stats.sheets, 3);
    assert_eq!(stats.output_pages, 6);
    assert_eq!(stats.format, "A4 landscape saddle-stitch");
    assert_eq!(stats.duplex_hint, "Duplex - flip on long edge");
}

#[test]
fn test_statistics_with_split_spreads() {
    let options = BookletOptions {
        split_spreads: true,
        ..BookletOptions::default()
    };
    // 4 spreads -> 7 pages -> 8 padded
    let stats = calculate_statistics(4, &options).unwrap();
    assert_eq!(stats.imposed_pages, 7);
    assert_eq!(stats.blank_pages_added, 1);
    assert_eq!(stats.sheets, 2);
}

#[test]
fn test_statistics_paired_mode() {
    let options = BookletOptions {
        imposition_mode: ImpositionMode::TwoUpPaired,
        ..BookletOptions::default()
    };
    let stats = calculate_statistics(7, &options).unwrap();
    assert_eq!(stats.blank_pages_added, 1);
    assert_eq!(stats.output_pages, 4);
    assert_eq!(stats.sheets, 2);
    assert_eq!(stats.format, "A4 landscape, 2 pages per sheet, saddle-stitch");
}

#[test]
fn test_statistics_match_built_booklet() {
    use image::{DynamicImage, RgbImage};

    let options = BookletOptions {
        max_dimension: 64,
        ..BookletOptions::default()
    };
    let pages: Vec<DynamicImage> = (0..9)
        .map(|_| DynamicImage::ImageRgb8(RgbImage::new(20, 28)))
        .collect();

    let predicted = calculate_statistics(9, &options).unwrap();
    let built = build_booklet(pages, &options).unwrap();
    assert_eq!(predicted, built.statistics);
}

#[test]
fn test_statistics_no_pages() {
    assert!(matches!(
        calculate_statistics(0, &BookletOptions::default()),
        Err(BookletError::EmptySource)
    ));
}

#[test]
fn test_upright_rule_changes_duplex_hint() {
    let options = BookletOptions {
        rotation_rule: RotationRule::Upright,
        ..BookletOptions::default()
    };
    let stats = calculate_statistics(4, &options).unwrap();
    assert_eq!(stats.duplex_hint, "Duplex - flip on short edge");
}
