use booklet_impose::*;

#[test]
fn test_default_options_are_valid() {
    let options = BookletOptions::default();
    assert!(options.validate().is_ok());
    assert_eq!(options.jpeg_quality, 85);
    assert_eq!(options.max_dimension, 2000);
    assert_eq!(options.raster_scale, 2.0);
    assert_eq!(options.split.page_width_px, 1190);
    assert_eq!(options.split.page_height_px, 1684);
}

#[test]
fn test_validation_jpeg_quality() {
    let mut options = BookletOptions::default();

    options.jpeg_quality = 0;
    match options.validate() {
        Err(BookletError::Config(msg)) => assert!(msg.contains("JPEG quality")),
        other => panic!("Expected Config error, got {:?}", other),
    }

    options.jpeg_quality = 101;
    assert!(options.validate().is_err());

    options.jpeg_quality = 100;
    assert!(options.validate().is_ok());
}

#[test]
fn test_validation_dimensions_and_scale() {
    let mut options = BookletOptions::default();
    options.max_dimension = 0;
    assert!(options.validate().is_err());

    let mut options = BookletOptions::default();
    options.raster_scale = 0.0;
    assert!(options.validate().is_err());
    options.raster_scale = f32::NAN;
    assert!(options.validate().is_err());

    let mut options = BookletOptions::default();
    options.split.page_height_px = 0;
    assert!(options.validate().is_err());

    let mut options = BookletOptions::default();
    options.sheet_size = PaperSize::Custom {
        width_mm: -1.0,
        height_mm: 200.0,
    };
    assert!(options.validate().is_err());
}

#[test]
fn test_default_sheet_is_a4_landscape() {
    let (width, height) = BookletOptions::default().sheet_dimensions_pt();
    assert!((width - 841.89).abs() < 0.01);
    assert!((height - 595.28).abs() < 0.01);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_options_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("booklet.json");

    let mut options = BookletOptions::default();
    options.imposition_mode = ImpositionMode::TwoUpPaired;
    options.split_spreads = true;
    options.split.cover_half = CoverHalf::Whole;
    options.jpeg_quality = 70;
    options.save(&path).await.unwrap();

    let loaded = BookletOptions::load(&path).await.unwrap();
    assert_eq!(loaded, options);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_partial_config_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("partial.json");
    tokio::fs::write(&path, r#"{ "imposition_mode": "two-up-paired", "jpeg_quality": 60 }"#)
        .await
        .unwrap();

    let loaded = BookletOptions::load(&path).await.unwrap();
    assert_eq!(loaded.imposition_mode, ImpositionMode::TwoUpPaired);
    assert_eq!(loaded.jpeg_quality, 60);
    assert_eq!(loaded.max_dimension, 2000);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_malformed_config_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    tokio::fs::write(&path, "{ not json").await.unwrap();

    assert!(matches!(
        BookletOptions::load(&path).await,
        Err(BookletError::Config(_))
    ));
}
