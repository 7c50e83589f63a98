use flipview_ui_graphics::{Point, Rect, Size};

/// Rectangles derived from the view size. Rebuilt as a whole on resize.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct FlipLayout {
    pub size: Size,
    pub bounds: Rect,
    pub left: Rect,
    pub right: Rect,
}

impl FlipLayout {
    pub fn new(size: Size) -> Self {
        let bounds = Rect::from_size(size);
        let (left, right) = bounds.split_halves();
        Self {
            size,
            bounds,
            left,
            right,
        }
    }

    /// Pivot of the rotating half.
    pub fn center(&self) -> Point {
        self.bounds.center()
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn is_empty(&self) -> bool {
        self.size.is_empty()
    }
}
