//! A canvas that records every draw call.

use flipview::{Color, EdgeGlow, FlipCanvas, FlipLayout, Point, Rect};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand<C> {
    Save,
    Restore,
    ClipRect(Rect),
    RotateY { degrees: f32, pivot: Point },
    Content(C),
    FillRect { rect: Rect, color: Color },
    EdgeGlow(EdgeGlow),
}

/// Records draw calls, cloning drawn content so tests can assert on it.
#[derive(Clone, Debug)]
pub struct RecordingCanvas<C> {
    commands: Vec<DrawCommand<C>>,
    depth: usize,
}

impl<C> Default for RecordingCanvas<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> RecordingCanvas<C> {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            depth: 0,
        }
    }

    pub fn commands(&self) -> &[DrawCommand<C>] {
        &self.commands
    }

    /// Returns and clears the recorded commands.
    pub fn take(&mut self) -> Vec<DrawCommand<C>> {
        std::mem::take(&mut self.commands)
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Content drawn since the last clear, in draw order.
    pub fn drawn(&self) -> Vec<&C> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Content(content) => Some(content),
                _ => None,
            })
            .collect()
    }

    pub fn rotations(&self) -> Vec<f32> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::RotateY { degrees, .. } => Some(*degrees),
                _ => None,
            })
            .collect()
    }

    pub fn fills(&self) -> Vec<(Rect, Color)> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::FillRect { rect, color } => Some((*rect, *color)),
                _ => None,
            })
            .collect()
    }

    pub fn glows(&self) -> Vec<EdgeGlow> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::EdgeGlow(glow) => Some(*glow),
                _ => None,
            })
            .collect()
    }

    /// True when every save was matched by a restore.
    pub fn is_balanced(&self) -> bool {
        self.depth == 0
    }
}

impl<C: Clone> FlipCanvas<C> for RecordingCanvas<C> {
    fn save(&mut self) {
        self.depth += 1;
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        if self.depth == 0 {
            log::warn!("restore without a matching save");
        }
        self.depth = self.depth.saturating_sub(1);
        self.commands.push(DrawCommand::Restore);
    }

    fn clip_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::ClipRect(rect));
    }

    fn rotate_y(&mut self, degrees: f32, pivot: Point) {
        self.commands.push(DrawCommand::RotateY { degrees, pivot });
    }

    fn draw_content(&mut self, content: &C) {
        self.commands.push(DrawCommand::Content(content.clone()));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn draw_edge_glow(&mut self, glow: EdgeGlow, _layout: &FlipLayout) {
        self.commands.push(DrawCommand::EdgeGlow(glow));
    }
}
