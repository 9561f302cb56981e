use std::f32::consts::TAU;

use eframe::egui::{self, Color32, Mesh, Painter, Pos2, Rect, Vec2};

use crate::config::PaintConfig;
use crate::effect::EffectShape;
use crate::scene::Scene;

/// Paints the canvas background and every shape in the scene
#[derive(Debug, Clone)]
pub struct Renderer {
    segments: usize,
    background: Color32,
}

impl Renderer {
    pub fn new(config: &PaintConfig) -> Self {
        Self {
            segments: config.mesh_segments,
            background: config.canvas_color(),
        }
    }

    /// Builds a triangle fan approximating a radially shaded ellipse.
    ///
    /// Vertex 0 sits at the gradient center with the shape's fill; the rim
    /// vertices are fully transparent, so vertex color interpolation yields
    /// the soft falloff. `canvas_origin` translates canvas coordinates to screen.
    pub fn shape_mesh(&self, shape: &EffectShape, canvas_origin: Pos2) -> Mesh {
        let to_screen = canvas_origin.to_vec2();
        let rect = shape.rect().translate(to_screen);
        let radius = rect.size() / 2.0;

        let mut mesh = Mesh::default();
        mesh.colored_vertex(shape.gradient_pos() + to_screen, shape.fill());
        for i in 0..self.segments {
            let angle = TAU * i as f32 / self.segments as f32;
            let rim = rect.center() + Vec2::new(angle.cos() * radius.x, angle.sin() * radius.y);
            mesh.colored_vertex(rim, Color32::TRANSPARENT);
        }

        let rim_count = self.segments as u32;
        for i in 0..rim_count {
            mesh.add_triangle(0, 1 + i, 1 + (i + 1) % rim_count);
        }
        mesh
    }

    /// Renders the current frame into `rect`
    pub fn render(&self, painter: &Painter, rect: Rect, scene: &Scene) {
        let painter = painter.with_clip_rect(rect);
        painter.rect_filled(rect, 0.0, self.background);

        for shape in scene.shapes() {
            painter.add(egui::Shape::mesh(self.shape_mesh(shape, rect.min)));
        }
    }
}
