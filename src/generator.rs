//! Effect generators: turn one brush application into a batch of shapes.
//!
//! Every generator follows the same recipe. For each shape in the batch pick a
//! size and aspect ratio, a palette color and alpha, and an offset from the
//! cursor. The brushes differ only in their constants.

use egui::{Color32, Pos2, Vec2};
use rand::Rng;

use crate::brush::BrushType;
use crate::effect::{Anchor, EffectShape};
use crate::id_generator::IdGenerator;
use crate::palette::Palette;

/// Generate one batch for `brush` centered on `pos`
pub fn generate<R: Rng + ?Sized>(
    brush: BrushType,
    pos: Pos2,
    brush_size: f32,
    rng: &mut R,
    ids: &mut IdGenerator,
) -> Vec<EffectShape> {
    match brush {
        BrushType::Foliage => foliage(pos, brush_size, rng, ids),
        BrushType::Fire => fire(pos, brush_size, rng, ids),
        BrushType::Smoke => smoke(pos, brush_size, rng, ids),
    }
}

/// Roughly round leaves scattered in a square around the cursor
pub fn foliage<R: Rng + ?Sized>(
    pos: Pos2,
    brush_size: f32,
    rng: &mut R,
    ids: &mut IdGenerator,
) -> Vec<EffectShape> {
    let brush = BrushType::Foliage;
    (0..brush.batch_size())
        .map(|_| {
            let width = brush_size * (0.3 + unit(rng) * 0.7);
            let height = width * (0.6 + unit(rng) * 0.8);
            let (color, alpha) = pick_color(brush.palette(), rng);
            let offset = Vec2::new(
                (unit(rng) - 0.5) * brush_size,
                (unit(rng) - 0.5) * brush_size,
            );
            EffectShape::new(
                ids.generate_id(),
                brush,
                pos,
                offset,
                Vec2::new(width, height),
                Anchor::Center,
                color,
                alpha,
            )
        })
        .collect()
}

/// Tall flames rising from the cursor in a narrow column
pub fn fire<R: Rng + ?Sized>(
    pos: Pos2,
    brush_size: f32,
    rng: &mut R,
    ids: &mut IdGenerator,
) -> Vec<EffectShape> {
    let brush = BrushType::Fire;
    (0..brush.batch_size())
        .map(|_| {
            let width = brush_size * (0.4 + unit(rng) * 0.4);
            let height = width * (1.5 + unit(rng));
            let (color, alpha) = pick_color(brush.palette(), rng);
            let offset = Vec2::new(
                (unit(rng) - 0.5) * brush_size * 0.5,
                -unit(rng) * brush_size * 0.8,
            );
            EffectShape::new(
                ids.generate_id(),
                brush,
                pos,
                offset,
                Vec2::new(width, height),
                Anchor::BottomCenter,
                color,
                alpha,
            )
        })
        .collect()
}

/// Faint puffs drifting further up and wider than flames
pub fn smoke<R: Rng + ?Sized>(
    pos: Pos2,
    brush_size: f32,
    rng: &mut R,
    ids: &mut IdGenerator,
) -> Vec<EffectShape> {
    let brush = BrushType::Smoke;
    (0..brush.batch_size())
        .map(|_| {
            let width = brush_size * (0.5 + unit(rng));
            let height = width * (0.7 + unit(rng) * 0.6);
            let (color, alpha) = pick_color(brush.palette(), rng);
            let offset = Vec2::new(
                (unit(rng) - 0.5) * brush_size * 1.2,
                -unit(rng) * brush_size * 1.5,
            );
            EffectShape::new(
                ids.generate_id(),
                brush,
                pos,
                offset,
                Vec2::new(width, height),
                Anchor::Center,
                color,
                alpha,
            )
        })
        .collect()
}

/// Uniform sample in [0, 1)
fn unit<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.gen_range(0.0..1.0)
}

fn pick_color<R: Rng + ?Sized>(palette: &Palette, rng: &mut R) -> (Color32, u8) {
    let color = palette.colors[rng.gen_range(0..palette.colors.len())];
    let alpha = rng.gen_range(palette.alpha_range());
    (color, alpha)
}
