use pocket_render_common::HitTarget;
use pocket_ui_graphics::{Color, Rect};

#[derive(Clone, Debug, PartialEq)]
pub struct DrawShape {
    pub rect: Rect,
    pub color: Color,
    pub corner_radius: f32,
    pub z_index: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextDraw {
    pub rect: Rect,
    pub text: String,
    pub color: Color,
    pub font_size: f32,
    pub z_index: usize,
}

#[derive(Clone, Debug)]
pub struct HitRegion {
    pub target: HitTarget,
    pub z_index: usize,
}

/// Flattened draw list of the last frame, in logical pixels.
///
/// Every push takes the next z index, so later pushes paint over and win
/// hit tests against earlier ones.
#[derive(Default)]
pub struct Scene {
    shapes: Vec<DrawShape>,
    texts: Vec<TextDraw>,
    hits: Vec<HitRegion>,
    next_z: usize,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
        self.texts.clear();
        self.hits.clear();
        self.next_z = 0;
    }

    pub fn shapes(&self) -> &[DrawShape] {
        &self.shapes
    }

    pub fn texts(&self) -> &[TextDraw] {
        &self.texts
    }

    pub fn hits(&self) -> &[HitRegion] {
        &self.hits
    }

    pub fn hit_test(&self, x: f32, y: f32) -> Option<HitTarget> {
        self.hits
            .iter()
            .filter(|hit| hit.target.rect.contains(x, y))
            .max_by_key(|hit| hit.z_index)
            .map(|hit| hit.target.clone())
    }

    fn next_z(&mut self) -> usize {
        let z_index = self.next_z;
        self.next_z += 1;
        z_index
    }

    pub fn push_shape(&mut self, rect: Rect, color: Color, corner_radius: f32) {
        let z_index = self.next_z();
        self.shapes.push(DrawShape {
            rect,
            color,
            corner_radius,
            z_index,
        });
    }

    pub fn push_text(&mut self, rect: Rect, text: String, color: Color, font_size: f32) {
        let z_index = self.next_z();
        self.texts.push(TextDraw {
            rect,
            text,
            color,
            font_size,
            z_index,
        });
    }

    pub fn push_hit(&mut self, target: HitTarget) {
        let z_index = self.next_z();
        self.hits.push(HitRegion { target, z_index });
    }
}
