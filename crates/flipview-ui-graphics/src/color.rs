//! Color representation

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color(pub f32, pub f32, pub f32, pub f32);

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self(r, g, b, 1.0)
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self(r, g, b, a)
    }

    pub const fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
    }

    pub fn r(&self) -> f32 {
        self.0
    }

    pub fn g(&self) -> f32 {
        self.1
    }

    pub fn b(&self) -> f32 {
        self.2
    }

    pub fn a(&self) -> f32 {
        self.3
    }

    pub fn with_alpha(&self, alpha: f32) -> Self {
        Self(self.0, self.1, self.2, alpha.clamp(0.0, 1.0))
    }

    /// Replaces the alpha channel with an 8-bit paint alpha (0..=255).
    pub fn with_alpha_u8(&self, alpha: u8) -> Self {
        self.with_alpha(alpha as f32 / 255.0)
    }

    /// Alpha channel as an 8-bit paint alpha.
    pub fn alpha_u8(&self) -> u8 {
        (self.3.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    pub const BLACK: Color = Color(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color(1.0, 1.0, 1.0, 1.0);
    pub const TRANSPARENT: Color = Color(0.0, 0.0, 0.0, 0.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_u8_round_trips_paint_alpha() {
        let shade = Color::BLACK.with_alpha_u8(130);
        assert_eq!(shade.alpha_u8(), 130);
        assert_eq!(shade.r(), 0.0);
    }

    #[test]
    fn with_alpha_clamps() {
        assert_eq!(Color::WHITE.with_alpha(2.0).a(), 1.0);
        assert_eq!(Color::WHITE.with_alpha(-1.0).a(), 0.0);
    }
}
