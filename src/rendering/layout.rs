/// Placement arithmetic and canvas sizing

use crate::element::{default_width, Element, ElementType};

/// Logical canvas width in pixels.
pub const CANVAS_WIDTH: u32 = 400;
/// Coordinates are stored as multiples of this.
pub const GRID_SIZE: u32 = 5;
pub const MIN_CANVAS_HEIGHT: u32 = 600;
/// Space reserved below the lowest element for the attribution footer.
pub const FOOTER_HEIGHT: u32 = 60;

/// Stored coordinates stay within `[-COORD_LIMIT, COORD_LIMIT]`. A grid
/// multiple, so clamped values are still on the grid.
pub const COORD_LIMIT: i32 = 1_000_000;
/// Upper bound for box extents (width, height, padding and the like).
pub const MAX_EXTENT: u32 = 1_000_000;

/// `y` of the first element on an empty canvas.
const FIRST_ELEMENT_Y: i32 = 100;
/// Vertical gap between appended elements.
const STACK_GAP: i32 = 80;
/// Breathing room below the lowest element before the footer.
const BOTTOM_MARGIN: i32 = 20;

/// Round to the nearest grid multiple. Halves round up, so `-2.5` snaps to
/// `0` and `2.5` to `5`. Input is bounded to `COORD_LIMIT`; NaN snaps to 0.
pub fn snap_to_grid(v: f64) -> i32 {
    if v.is_nan() {
        return 0;
    }
    let limit = COORD_LIMIT as f64;
    let g = GRID_SIZE as f64;
    ((v.clamp(-limit, limit) / g + 0.5).floor() * g) as i32
}

/// Bound an integer input to a usable box extent.
pub fn clamp_extent(v: i64) -> u32 {
    v.clamp(0, MAX_EXTENT as i64) as u32
}

/// Where the next appended element goes: below everything, with a gap.
pub fn compute_next_y(elements: &[Element]) -> i32 {
    match elements.iter().map(Element::bottom).max() {
        None => FIRST_ELEMENT_Y,
        Some(bottom) => snap_to_grid((bottom + STACK_GAP as i64) as f64),
    }
}

/// Horizontally centred start position for a new element of `ty`.
pub fn compute_initial_x(ty: ElementType) -> i32 {
    snap_to_grid(CANVAS_WIDTH as f64 / 2.0 - default_width(ty) as f64 / 2.0)
}

/// Canvas height tracking content: never below `MIN_CANVAS_HEIGHT`, always
/// tall enough for the lowest element plus the footer reservation.
pub fn compute_canvas_height(elements: &[Element]) -> u32 {
    let lowest = elements.iter().map(|el| el.bottom() + BOTTOM_MARGIN as i64).max();
    match lowest {
        None => MIN_CANVAS_HEIGHT,
        Some(bottom) => {
            let needed = (bottom + FOOTER_HEIGHT as i64).clamp(0, u32::MAX as i64) as u32;
            MIN_CANVAS_HEIGHT.max(needed)
        }
    }
}

/// Clamp a proposed origin into the canvas and snap both axes. Boxes larger
/// than the canvas pin to 0.
pub fn clamp_drag(x: f64, y: f64, width: u32, height: u32, canvas_height: u32) -> (i32, i32) {
    let max_x = CANVAS_WIDTH as f64 - width as f64;
    let max_y = canvas_height as f64 - height as f64;
    let cx = x.min(max_x).max(0.0);
    let cy = y.min(max_y).max(0.0);
    (snap_to_grid(cx), snap_to_grid(cy))
}

/// `x` that centres `el` on the canvas.
pub fn center_horizontally(el: &Element) -> i32 {
    let free = CANVAS_WIDTH as f64 - el.width as f64;
    snap_to_grid((free / 2.0).max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementId;

    fn el(ty: ElementType, y: i32, height: u32) -> Element {
        let mut e = Element::new(ElementId(1), ty, None, 0, y, 0);
        e.height = height;
        e
    }

    #[test]
    fn snap_rounds_to_nearest_five() {
        assert_eq!(snap_to_grid(0.0), 0);
        assert_eq!(snap_to_grid(2.4), 0);
        assert_eq!(snap_to_grid(2.5), 5);
        assert_eq!(snap_to_grid(7.6), 10);
        assert_eq!(snap_to_grid(123.0), 125);
        assert_eq!(snap_to_grid(-2.5), 0);
        assert_eq!(snap_to_grid(-2.6), -5);
    }

    #[test]
    fn next_y_stacks_below_lowest() {
        assert_eq!(compute_next_y(&[]), 100);
        let els = vec![el(ElementType::Text, 100, 50), el(ElementType::Photo, 230, 120)];
        assert_eq!(compute_next_y(&els), 430);
    }

    #[test]
    fn initial_x_centres_default_width() {
        assert_eq!(compute_initial_x(ElementType::Social), 60);
        assert_eq!(compute_initial_x(ElementType::Photo), 140);
        assert_eq!(compute_initial_x(ElementType::Chart), 50);
        assert_eq!(compute_initial_x(ElementType::Text), 150);
    }

    #[test]
    fn canvas_height_has_floor_and_tracks_content() {
        assert_eq!(compute_canvas_height(&[]), 600);
        assert_eq!(compute_canvas_height(&[el(ElementType::Text, 100, 50)]), 600);
        // 700 + 120 + 20 + 60
        assert_eq!(compute_canvas_height(&[el(ElementType::Photo, 700, 120)]), 900);
    }

    #[test]
    fn clamp_drag_keeps_box_on_canvas() {
        assert_eq!(clamp_drag(500.0, 10.0, 280, 50, 600), (120, 10));
        assert_eq!(clamp_drag(-40.0, -3.0, 100, 50, 600), (0, 0));
        assert_eq!(clamp_drag(12.0, 900.0, 100, 50, 600), (10, 550));
        assert_eq!(clamp_drag(50.0, 50.0, 450, 50, 600), (0, 50));
    }

    #[test]
    fn snap_bounds_huge_and_nan_input() {
        assert_eq!(snap_to_grid(1e12), COORD_LIMIT);
        assert_eq!(snap_to_grid(-1e12), -COORD_LIMIT);
        assert_eq!(snap_to_grid(f64::INFINITY), COORD_LIMIT);
        assert_eq!(snap_to_grid(f64::NAN), 0);
        assert_eq!(COORD_LIMIT % GRID_SIZE as i32, 0);
    }

    #[test]
    fn canvas_height_never_overflows() {
        let tall = el(ElementType::Photo, COORD_LIMIT, u32::MAX);
        assert_eq!(compute_canvas_height(&[tall.clone()]), u32::MAX);
        let sane = el(ElementType::Photo, COORD_LIMIT, MAX_EXTENT);
        assert_eq!(compute_canvas_height(&[sane]), 2_000_080);
        assert_eq!(compute_next_y(&[tall]), COORD_LIMIT);
    }

    #[test]
    fn centre_photo() {
        let e = el(ElementType::Photo, 100, 120);
        assert_eq!(center_horizontally(&e), 140);
        let mut wide = e.clone();
        wide.width = 500;
        assert_eq!(center_horizontally(&wide), 0);
    }
}
