use macroquad::prelude::*;

/// Drawing surface the cells render onto.
///
/// The macroquad window implements this in `renderer`; tests use a recorder.
pub trait Canvas {
    fn clear(&mut self);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, thickness: f32, color: Color);
    /// Soft halo behind a shape of `radius`, spreading `blur` pixels outward.
    fn glow(&mut self, center: Vec2, radius: f32, blur: f32, color: Color);
}

/// Canvas bounds used for edge reflection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn random_point(&self, rng: &mut impl ::rand::Rng) -> Vec2 {
        vec2(
            rng.gen::<f32>() * self.width,
            rng.gen::<f32>() * self.height,
        )
    }
}
