//! Render model for the flip.
//!
//! Everything here is a pure function of the flip distance, the slot window
//! and the layout. [`FlipScene`] describes one frame; [`FlipScene::paint`]
//! replays it onto a [`FlipCanvas`].

use crate::layout::FlipLayout;
use flipview_animation::EdgeGlow;
use flipview_foundation::PageWindow;
use flipview_ui_graphics::{Color, Point, Rect};

/// Rendering capability supplied by the host.
pub trait FlipCanvas<C> {
    fn save(&mut self);
    fn restore(&mut self);
    fn clip_rect(&mut self, rect: Rect);
    /// Rotates subsequent drawing about the vertical axis through `pivot`,
    /// with perspective.
    fn rotate_y(&mut self, degrees: f32, pivot: Point);
    fn draw_content(&mut self, content: &C);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn draw_edge_glow(&mut self, glow: EdgeGlow, layout: &FlipLayout);
}

/// Rotation of the current page within its flip, in `[0, 180)` degrees.
pub fn degrees_done(distance: f32, page_unit: f32) -> f32 {
    if !(page_unit.is_finite() && page_unit > 0.0) || !distance.is_finite() {
        return 0.0;
    }
    let mut within = distance % page_unit;
    if within < 0.0 {
        within += page_unit;
    }
    let degrees = within / page_unit * 180.0;
    if degrees >= 180.0 {
        0.0
    } else {
        degrees
    }
}

/// A static half of the view showing one page through a clip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HalfPage {
    pub clip: Rect,
    pub page: Option<usize>,
}

/// Shine or shade laid over the rotating half.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Overlay {
    pub rect: Rect,
    pub color: Color,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotatingHalf {
    pub clip: Rect,
    pub rotation: f32,
    pub pivot: Point,
    pub page: Option<usize>,
    pub overlay: Overlay,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SceneFrame {
    /// No drag and no animation: the current page is drawn flat.
    Settled { page: Option<usize> },
    Flipping {
        degrees: f32,
        left: HalfPage,
        right: HalfPage,
        rotating: RotatingHalf,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlipScene {
    pub frame: SceneFrame,
    pub edge: Option<EdgeGlow>,
}

impl FlipScene {
    /// Builds the frame for `distance`. `moving` is true while a drag or a
    /// settle animation is in progress.
    pub fn compose(
        distance: f32,
        page_unit: f32,
        window: &PageWindow,
        layout: &FlipLayout,
        shade_max_alpha: u8,
        moving: bool,
    ) -> Self {
        if !moving {
            return Self {
                frame: SceneFrame::Settled {
                    page: window.current,
                },
                edge: None,
            };
        }

        let degrees = degrees_done(distance, page_unit);
        let (left_page, right_page) = if degrees >= 90.0 {
            (window.previous, window.current)
        } else {
            (window.current, window.next)
        };
        let (clip, rotation) = if degrees > 90.0 {
            (layout.left, 180.0 - degrees)
        } else {
            (layout.right, -degrees)
        };

        Self {
            frame: SceneFrame::Flipping {
                degrees,
                left: HalfPage {
                    clip: layout.left,
                    page: left_page,
                },
                right: HalfPage {
                    clip: layout.right,
                    page: right_page,
                },
                rotating: RotatingHalf {
                    clip,
                    rotation,
                    pivot: layout.center(),
                    page: window.current,
                    overlay: overlay_for(degrees, layout, shade_max_alpha),
                },
            },
            edge: None,
        }
    }

    pub fn with_edge(mut self, edge: Option<EdgeGlow>) -> Self {
        self.edge = edge;
        self
    }

    pub fn is_settled(&self) -> bool {
        matches!(self.frame, SceneFrame::Settled { .. })
    }

    /// Replays the scene. `content` resolves a page index to its instance.
    pub fn paint<'a, C: 'a>(
        &self,
        layout: &FlipLayout,
        canvas: &mut dyn FlipCanvas<C>,
        content: impl Fn(usize) -> Option<&'a C>,
    ) {
        match self.frame {
            SceneFrame::Settled { page } => draw_page(canvas, &content, page),
            SceneFrame::Flipping {
                left,
                right,
                rotating,
                ..
            } => {
                for half in [left, right] {
                    canvas.save();
                    canvas.clip_rect(half.clip);
                    draw_page(canvas, &content, half.page);
                    canvas.restore();
                }

                canvas.save();
                canvas.clip_rect(rotating.clip);
                canvas.rotate_y(rotating.rotation, rotating.pivot);
                draw_page(canvas, &content, rotating.page);
                canvas.fill_rect(rotating.overlay.rect, rotating.overlay.color);
                canvas.restore();
            }
        }

        if let Some(glow) = self.edge {
            canvas.save();
            canvas.draw_edge_glow(glow, layout);
            canvas.restore();
        }
    }
}

fn draw_page<'a, C: 'a>(
    canvas: &mut dyn FlipCanvas<C>,
    content: &impl Fn(usize) -> Option<&'a C>,
    page: Option<usize>,
) {
    if let Some(instance) = page.and_then(content) {
        canvas.draw_content(instance);
    }
}

/// White shine over the right half on the way up to 90 degrees, black shade
/// over the left half on the way down.
fn overlay_for(degrees: f32, layout: &FlipLayout, max_alpha: u8) -> Overlay {
    let max_alpha = f32::from(max_alpha);
    if degrees < 90.0 {
        Overlay {
            rect: layout.right,
            color: Color::WHITE.with_alpha_u8((degrees / 90.0 * max_alpha) as u8),
        }
    } else {
        Overlay {
            rect: layout.left,
            color: Color::BLACK.with_alpha_u8(((degrees - 180.0).abs() / 90.0 * max_alpha) as u8),
        }
    }
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
