//! Content placement within sheet halves

use super::Rect;

/// The two halves of a landscape sheet, (left, right)
pub fn sheet_halves(sheet_width: f32, sheet_height: f32) -> (Rect, Rect) {
    let half = sheet_width / 2.0;
    (
        Rect::new(0.0, 0.0, half, sheet_height),
        Rect::new(half, 0.0, sheet_width - half, sheet_height),
    )
}

/// Fit a `width × height` image inside `area`, preserving aspect ratio, centered.
pub fn fit_contain(area: &Rect, width: f32, height: f32) -> Rect {
    if width <= 0.0 || height <= 0.0 {
        return Rect::new(area.x + area.width / 2.0, area.y + area.height / 2.0, 0.0, 0.0);
    }

    let scale = f32::min(area.width / width, area.height / height);
    let scaled_width = width * scale;
    let scaled_height = height * scale;

    Rect::new(
        area.x + (area.width - scaled_width) / 2.0,
        area.y + (area.height - scaled_height) / 2.0,
        scaled_width,
        scaled_height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_contain_tall_image_is_centered_horizontally() {
        let area = Rect::new(100.0, 0.0, 400.0, 600.0);
        let placed = fit_contain(&area, 100.0, 300.0);
        assert_eq!(placed.height, 600.0);
        assert_eq!(placed.width, 200.0);
        assert_eq!(placed.x, 200.0);
        assert_eq!(placed.y, 0.0);
    }

    #[test]
    fn test_fit_contain_wide_image_is_centered_vertically() {
        let area = Rect::new(0.0, 0.0, 400.0, 600.0);
        let placed = fit_contain(&area, 800.0, 400.0);
        assert_eq!(placed.width, 400.0);
        assert_eq!(placed.height, 200.0);
        assert_eq!(placed.y, 200.0);
    }

    #[test]
    fn test_sheet_halves_split_width() {
        let (left, right) = sheet_halves(842.0, 595.0);
        assert_eq!(left.width, 421.0);
        assert_eq!(right.x, 421.0);
        assert_eq!(right.right(), 842.0);
    }
}
