use crate::friends::Card;
use flipview::{Color, EdgeGlow, FlipCanvas, FlipLayout, Point, Rect};

/// A canvas that logs what a real renderer would draw.
#[derive(Default)]
pub struct LoggingCanvas {
    depth: usize,
    pub commands: usize,
    pub last_frame: Vec<String>,
}

impl LoggingCanvas {
    pub fn begin_frame(&mut self) {
        self.last_frame.clear();
    }

    fn emit(&mut self, line: String) {
        self.commands += 1;
        log::trace!("{:indent$}{line}", "", indent = self.depth * 2);
        self.last_frame.push(line);
    }
}

impl FlipCanvas<Card> for LoggingCanvas {
    fn save(&mut self) {
        self.depth += 1;
    }

    fn restore(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn clip_rect(&mut self, rect: Rect) {
        self.emit(format!(
            "clip {:.0},{:.0} {:.0}x{:.0}",
            rect.x, rect.y, rect.width, rect.height
        ));
    }

    fn rotate_y(&mut self, degrees: f32, pivot: Point) {
        self.emit(format!("rotate {degrees:.1} about x={:.0}", pivot.x));
    }

    fn draw_content(&mut self, content: &Card) {
        self.emit(format!("draw {}", content.describe()));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.emit(format!(
            "shade {:.0}x{:.0} alpha {}",
            rect.width,
            rect.height,
            color.alpha_u8()
        ));
    }

    fn draw_edge_glow(&mut self, glow: EdgeGlow, layout: &FlipLayout) {
        self.emit(format!(
            "glow {:?} {:.2} over {:.0}px",
            glow.side,
            glow.amount,
            layout.width()
        ));
    }
}
